use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;

use crate::error::MapError;

pub const MAP_WIDTH: f64 = 1000.0;
pub const MAP_HEIGHT: f64 = 600.0;

/// Mercator scale, in pixels per radian.
pub const PROJECTION_SCALE: f64 = 150.0;
/// `[longitude, latitude]` in degrees that lands on the canvas center.
pub const PROJECTION_CENTER: [f64; 2] = [0.0, 20.0];

pub const INTERACTIVE_COLOR: &str = "#10b981";
pub const DEFAULT_COLOR: &str = "#d1d5db";
pub const HOVER_COLOR: &str = "#facc15";
pub const HOVER_STROKE: &str = "#1f2937";
pub const HOVER_STROKE_WIDTH: f64 = 1.5;

pub const WORLD_DATA_URL: &str = "./world.json";
pub const MAP_MOUNT_ID: &str = "map-container";

/// ISO 3166-1 alpha-3 codes (`adm0_a3`) rendered as interactive.
pub const INTERACTIVE_COUNTRIES: &[&str] = &["USA", "CAN", "GBR", "FRA", "JPN", "ITA"];

/// Code -> page name. Pages live at `/<name>.html`.
pub const COUNTRY_PAGES: &[(&str, &str)] = &[
    ("USA", "usa"),
    ("CAN", "canada"),
    ("GBR", "uk"),
    ("FRA", "france"),
    ("JPN", "japan"),
    ("ITA", "italy"),
];

pub const CAROUSEL_CONTAINER_ID: &str = "carousel";
pub const CAROUSEL_SLIDE_SELECTOR: &str = ".carousel-slide";
pub const CAROUSEL_CURRENT_CLASS: &str = "active";
pub const CAROUSEL_INTERVAL_MS: u32 = 4_000;

/// Which feature property identifies a country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureKey {
    /// `properties.adm0_a3`
    #[default]
    Code,
    /// `properties.name`
    Name,
}

impl FeatureKey {
    pub const fn property(self) -> &'static str {
        match self {
            FeatureKey::Code => "adm0_a3",
            FeatureKey::Name => "name",
        }
    }
}

/// Maps a feature key to the page it navigates to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageResolver {
    Lookup { pages: BTreeMap<String, String> },
    /// Lowercased key, e.g. `France` -> `france`.
    Lowercase,
}

impl PageResolver {
    pub fn lookup<K, V>(pages: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self::Lookup {
            pages: pages
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Returns the destination page name, never an empty one.
    pub fn resolve(&self, key: &str) -> Option<String> {
        let page = match self {
            PageResolver::Lookup { pages } => pages.get(key).cloned(),
            PageResolver::Lowercase => Some(key.to_lowercase()),
        }?;
        let page = page.trim();
        if page.is_empty() {
            None
        } else {
            Some(page.to_string())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ColorScheme {
    pub interactive: String,
    pub default: String,
    pub hover: String,
    pub hover_stroke: String,
    pub hover_stroke_width: f64,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            interactive: INTERACTIVE_COLOR.into(),
            default: DEFAULT_COLOR.into(),
            hover: HOVER_COLOR.into(),
            hover_stroke: HOVER_STROKE.into(),
            hover_stroke_width: HOVER_STROKE_WIDTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Canvas and projection are fixed; overrides only reach styling and routing.
    #[serde(skip)]
    pub width: f64,
    #[serde(skip)]
    pub height: f64,
    #[serde(skip)]
    pub scale: f64,
    #[serde(skip)]
    pub center: [f64; 2],
    pub colors: ColorScheme,
    pub feature_key: FeatureKey,
    pub interactive: BTreeSet<String>,
    pub pages: PageResolver,
    pub data_url: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width: MAP_WIDTH,
            height: MAP_HEIGHT,
            scale: PROJECTION_SCALE,
            center: PROJECTION_CENTER,
            colors: ColorScheme::default(),
            feature_key: FeatureKey::Code,
            interactive: INTERACTIVE_COUNTRIES.iter().map(|c| c.to_string()).collect(),
            pages: PageResolver::lookup(COUNTRY_PAGES.iter().copied()),
            data_url: WORLD_DATA_URL.into(),
        }
    }
}

impl MapConfig {
    pub fn with_interactive<S: Into<String>>(mut self, keys: impl IntoIterator<Item = S>) -> Self {
        self.interactive = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_pages(mut self, pages: PageResolver) -> Self {
        self.pages = pages;
        self
    }

    pub fn with_feature_key(mut self, key: FeatureKey) -> Self {
        self.feature_key = key;
        self
    }

    /// The canvas center; the projection places `center` here.
    pub fn translate(&self) -> [f64; 2] {
        [self.width / 2.0, self.height / 2.0]
    }

    pub fn validate(&self) -> Result<(), MapError> {
        if self.interactive.is_empty() {
            return Err(MapError::EmptyInteractiveSet);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub container_id: String,
    pub slide_selector: String,
    pub current_class: String,
    pub interval_ms: u32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            container_id: CAROUSEL_CONTAINER_ID.into(),
            slide_selector: CAROUSEL_SLIDE_SELECTOR.into(),
            current_class: CAROUSEL_CURRENT_CLASS.into(),
            interval_ms: CAROUSEL_INTERVAL_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pages_cover_every_interactive_country() {
        let config = MapConfig::default();
        for code in &config.interactive {
            assert!(
                config.pages.resolve(code).is_some(),
                "{code} is interactive but has no page"
            );
        }
    }

    #[test]
    fn lookup_resolver_misses_unknown_keys() {
        let pages = PageResolver::lookup([("JPN", "Japan")]);
        assert_eq!(pages.resolve("JPN").as_deref(), Some("Japan"));
        assert_eq!(pages.resolve("FRA"), None);
    }

    #[test]
    fn empty_destinations_never_resolve() {
        let pages = PageResolver::lookup([("JPN", ""), ("FRA", "  ")]);
        assert_eq!(pages.resolve("JPN"), None);
        assert_eq!(pages.resolve("FRA"), None);
        assert_eq!(PageResolver::Lowercase.resolve(""), None);
    }

    #[test]
    fn lowercase_resolver_lowercases_names() {
        assert_eq!(
            PageResolver::Lowercase.resolve("United Kingdom").as_deref(),
            Some("united kingdom")
        );
        assert_eq!(PageResolver::Lowercase.resolve("FRA").as_deref(), Some("fra"));
    }

    #[test]
    fn empty_interactive_set_is_rejected() {
        let config = MapConfig::default().with_interactive(Vec::<String>::new());
        assert!(matches!(config.validate(), Err(MapError::EmptyInteractiveSet)));
        assert!(MapConfig::default().validate().is_ok());
    }

    #[test]
    fn config_overrides_deserialize_over_defaults() {
        let config: MapConfig = serde_json::from_value(serde_json::json!({
            "feature_key": "name",
            "interactive": ["France"],
            "pages": { "kind": "lowercase" }
        }))
        .unwrap();
        assert_eq!(config.feature_key, FeatureKey::Name);
        assert_eq!(config.pages, PageResolver::Lowercase);
        assert_eq!(config.width, MAP_WIDTH);
        assert_eq!(config.colors, ColorScheme::default());
    }

    #[test]
    fn projection_and_canvas_ignore_overrides() {
        let config: MapConfig = serde_json::from_value(serde_json::json!({
            "width": 10.0,
            "height": 10.0,
            "scale": 9000.0,
            "center": [100.0, -40.0]
        }))
        .unwrap();
        assert_eq!(config.width, MAP_WIDTH);
        assert_eq!(config.height, MAP_HEIGHT);
        assert_eq!(config.scale, PROJECTION_SCALE);
        assert_eq!(config.center, PROJECTION_CENTER);
        assert_eq!(config.colors, ColorScheme::default());
    }

    #[test]
    fn translate_is_canvas_center() {
        assert_eq!(MapConfig::default().translate(), [500.0, 300.0]);
    }
}
