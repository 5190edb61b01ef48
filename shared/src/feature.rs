use geojson::GeoJson;

use crate::config::FeatureKey;
use crate::error::MapError;

/// `[longitude, latitude]` in degrees.
pub type Position = [f64; 2];
pub type Ring = Vec<Position>;

#[derive(Debug, Clone)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    /// Parse a GeoJSON document, rejecting anything that is not a FeatureCollection.
    ///
    /// A missing `features` member or an element that is not a Feature is an error.
    pub fn from_json(text: &str) -> Result<Self, MapError> {
        let collection = match text.parse::<GeoJson>()? {
            GeoJson::FeatureCollection(collection) => collection,
            GeoJson::Feature(_) => return Err(MapError::NotFeatureCollection("Feature".into())),
            GeoJson::Geometry(_) => {
                return Err(MapError::NotFeatureCollection("Geometry".into()));
            }
        };
        let features = collection
            .features
            .into_iter()
            .map(Feature::try_from)
            .collect::<Result<_, _>>()?;
        Ok(Self { features })
    }
}

#[derive(Debug, Clone)]
pub struct Feature {
    pub properties: Option<geojson::JsonObject>,
    pub geometry: Option<Geometry>,
}

impl Feature {
    /// The identifying property for `key`, if present and a string.
    pub fn key(&self, key: FeatureKey) -> Option<&str> {
        self.properties
            .as_ref()?
            .get(key.property())?
            .as_str()
    }
}

impl TryFrom<geojson::Feature> for Feature {
    type Error = MapError;

    fn try_from(feature: geojson::Feature) -> Result<Self, Self::Error> {
        Ok(Self {
            properties: feature.properties,
            geometry: feature
                .geometry
                .map(|g| Geometry::try_from(g.value))
                .transpose()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Polygon(Vec<Ring>),
    MultiPolygon(Vec<Vec<Ring>>),
    /// Points, lines and collections draw nothing.
    Unsupported,
}

impl Geometry {
    pub fn polygons(&self) -> Vec<&[Ring]> {
        match self {
            Geometry::Polygon(rings) => vec![rings.as_slice()],
            Geometry::MultiPolygon(polygons) => polygons.iter().map(Vec::as_slice).collect(),
            Geometry::Unsupported => Vec::new(),
        }
    }
}

impl TryFrom<geojson::Value> for Geometry {
    type Error = MapError;

    fn try_from(value: geojson::Value) -> Result<Self, Self::Error> {
        match value {
            geojson::Value::Polygon(rings) => Ok(Geometry::Polygon(to_rings(rings)?)),
            geojson::Value::MultiPolygon(polygons) => {
                let polygons = polygons
                    .into_iter()
                    .map(to_rings)
                    .collect::<Result<_, _>>()?;
                Ok(Geometry::MultiPolygon(polygons))
            }
            _ => Ok(Geometry::Unsupported),
        }
    }
}

fn to_rings(rings: Vec<Vec<Vec<f64>>>) -> Result<Vec<Ring>, MapError> {
    rings
        .into_iter()
        .map(|ring| {
            ring.into_iter()
                .map(|pos| match pos.as_slice() {
                    [lon, lat, ..] => Ok([*lon, *lat]),
                    short => Err(MapError::ShortPosition(short.len())),
                })
                .collect()
        })
        .collect()
}
