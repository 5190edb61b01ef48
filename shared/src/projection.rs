use std::f64::consts::FRAC_PI_4;
use std::fmt::Write as FmtWrite;

use crate::config::MapConfig;
use crate::feature::{Geometry, Ring};

/// Latitude beyond which Mercator y diverges; matches the Web Mercator square.
pub const MAX_LATITUDE: f64 = 85.051_128_78;

/// Spherical Mercator with fixed scale, center and translate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mercator {
    scale: f64,
    translate: [f64; 2],
    /// Raw projection of the configured center.
    origin: [f64; 2],
}

impl Mercator {
    pub fn new(scale: f64, center: [f64; 2], translate: [f64; 2]) -> Self {
        Self {
            scale,
            translate,
            origin: raw(center[0], center[1]),
        }
    }

    pub fn from_config(config: &MapConfig) -> Self {
        Self::new(config.scale, config.center, config.translate())
    }

    /// Project `[longitude, latitude]` in degrees to screen coordinates.
    pub fn project(&self, lon: f64, lat: f64) -> (f64, f64) {
        let [x, y] = raw(lon, lat);
        (
            self.translate[0] + self.scale * (x - self.origin[0]),
            self.translate[1] - self.scale * (y - self.origin[1]),
        )
    }

    /// SVG path data for a geometry: one closed subpath per ring.
    pub fn path_data(&self, geometry: &Geometry) -> String {
        let mut d = String::new();
        for polygon in geometry.polygons() {
            for ring in polygon {
                self.write_ring(&mut d, ring);
            }
        }
        d
    }

    fn write_ring(&self, d: &mut String, ring: &Ring) {
        // GeoJSON rings repeat the first position; Z closes it instead.
        let open = match ring.split_last() {
            Some((last, rest)) if ring.len() > 1 && Some(last) == ring.first() => rest,
            _ => ring.as_slice(),
        };
        if open.len() < 3 {
            return;
        }
        for (i, [lon, lat]) in open.iter().enumerate() {
            let (x, y) = self.project(*lon, *lat);
            let cmd = if i == 0 { 'M' } else { 'L' };
            let _ = write!(d, "{cmd}{},{}", round3(x), round3(y));
        }
        d.push('Z');
    }
}

fn raw(lon: f64, lat: f64) -> [f64; 2] {
    let lambda = lon.to_radians();
    let phi = lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    [lambda, (FRAC_PI_4 + phi / 2.0).tan().ln()]
}

fn round3(v: f64) -> f64 {
    let r = (v * 1000.0).round() / 1000.0;
    // Avoid "-0" in path output.
    if r == 0.0 { 0.0 } else { r }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        let diff = (actual - expected).abs();
        assert!(
            diff < 1e-6,
            "expected {expected}, got {actual} (diff: {diff})"
        );
    }

    fn default_projection() -> Mercator {
        Mercator::from_config(&MapConfig::default())
    }

    #[test]
    fn center_maps_to_translate() {
        let (x, y) = default_projection().project(0.0, 20.0);
        assert_close(x, 500.0);
        assert_close(y, 300.0);
    }

    #[test]
    fn longitude_is_linear_in_scale() {
        let projection = default_projection();
        let (x, _) = projection.project(180.0, 20.0);
        assert_close(x, 500.0 + 150.0 * std::f64::consts::PI);
        let (x, _) = projection.project(-90.0, 20.0);
        assert_close(x, 500.0 - 150.0 * std::f64::consts::FRAC_PI_2);
    }

    #[test]
    fn north_is_up_and_equator_is_below_center() {
        let projection = default_projection();
        let (_, equator) = projection.project(0.0, 0.0);
        let (_, north) = projection.project(0.0, 60.0);
        assert!(equator > 300.0);
        assert!(north < 300.0);
    }

    #[test]
    fn poles_are_clamped_to_finite_values() {
        let projection = default_projection();
        let (_, top) = projection.project(0.0, 90.0);
        let (_, clamped) = projection.project(0.0, MAX_LATITUDE);
        assert!(top.is_finite());
        assert_close(top, clamped);
        assert!(projection.project(0.0, -90.0).1.is_finite());
    }

    #[test]
    fn path_data_closes_each_ring_once() {
        let projection = Mercator::new(1.0, [0.0, 0.0], [0.0, 0.0]);
        let square = vec![[0.0, 0.0], [90.0, 0.0], [90.0, 0.0001], [0.0, 0.0]];
        let d = projection.path_data(&Geometry::Polygon(vec![square.clone()]));
        assert_eq!(d.matches('M').count(), 1);
        assert_eq!(d.matches('L').count(), 2);
        assert!(d.starts_with("M0,0L1.571,0"));
        assert!(d.ends_with('Z'));

        let multi = Geometry::MultiPolygon(vec![vec![square.clone()], vec![square]]);
        assert_eq!(projection.path_data(&multi).matches('Z').count(), 2);
    }

    #[test]
    fn degenerate_rings_and_unsupported_geometry_draw_nothing() {
        let projection = default_projection();
        let sliver = Geometry::Polygon(vec![vec![[0.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]);
        assert!(projection.path_data(&sliver).is_empty());
        assert!(projection
            .path_data(&Geometry::Unsupported)
            .is_empty());
    }
}
