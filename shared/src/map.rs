use std::collections::HashMap;

use crate::config::{ColorScheme, MapConfig, PageResolver};
use crate::error::MapError;
use crate::feature::FeatureCollection;
use crate::projection::Mercator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Default,
    Pointer,
}

impl Cursor {
    pub const fn as_css(self) -> &'static str {
        match self {
            Cursor::Default => "default",
            Cursor::Pointer => "pointer",
        }
    }
}

/// Presentational state of one rendered shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeStyle {
    pub fill: String,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
    pub cursor: Cursor,
}

impl ShapeStyle {
    fn resting(fill: String) -> Self {
        Self {
            fill,
            stroke: None,
            stroke_width: None,
            cursor: Cursor::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Shape {
    pub id: ShapeId,
    /// `adm0_a3` or `name`, depending on the configured feature key.
    pub key: Option<String>,
    /// SVG path data in canvas coordinates.
    pub path: String,
    /// Classified once at build time; handlers never consult the set again.
    pub interactive: bool,
    pub style: ShapeStyle,
}

/// Result of clicking a shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// Navigate the page to this href (`/<page>.html`).
    Navigate(String),
    /// Interactive, but no page is configured for `key`.
    Unresolved { key: String },
    /// Not interactive; nothing happens.
    Inert,
}

/// Interaction model for the travel map.
///
/// Owns every shape's style and the pre-hover fill record, so hover-leave
/// restores exactly what hover-enter replaced.
#[derive(Debug, Clone)]
pub struct MapModel {
    shapes: Vec<Shape>,
    colors: ColorScheme,
    pages: PageResolver,
    original_fill: HashMap<ShapeId, String>,
}

impl MapModel {
    pub fn build(collection: &FeatureCollection, config: &MapConfig) -> Result<Self, MapError> {
        config.validate()?;
        let projection = Mercator::from_config(config);

        let shapes = collection
            .features
            .iter()
            .enumerate()
            .map(|(idx, feature)| {
                let key = feature.key(config.feature_key).map(str::to_string);
                let interactive = key
                    .as_deref()
                    .is_some_and(|k| config.interactive.contains(k));
                let fill = if interactive {
                    &config.colors.interactive
                } else {
                    &config.colors.default
                };
                Shape {
                    id: ShapeId(idx),
                    key,
                    path: feature
                        .geometry
                        .as_ref()
                        .map(|g| projection.path_data(g))
                        .unwrap_or_default(),
                    interactive,
                    style: ShapeStyle::resting(fill.clone()),
                }
            })
            .collect();

        Ok(Self {
            shapes,
            colors: config.colors.clone(),
            pages: config.pages.clone(),
            original_fill: HashMap::new(),
        })
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(id.0)
    }

    pub fn style(&self, id: ShapeId) -> Option<&ShapeStyle> {
        self.shape(id).map(|s| &s.style)
    }

    pub fn interactive_count(&self) -> usize {
        self.shapes.iter().filter(|s| s.interactive).count()
    }

    fn interactive(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(id.0).filter(|s| s.interactive)
    }

    fn interactive_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.get_mut(id.0).filter(|s| s.interactive)
    }

    /// Highlight an interactive shape. Returns `true` if its style changed.
    pub fn hover_enter(&mut self, id: ShapeId) -> bool {
        let hovered = ShapeStyle {
            fill: self.colors.hover.clone(),
            stroke: Some(self.colors.hover_stroke.clone()),
            stroke_width: Some(self.colors.hover_stroke_width),
            cursor: Cursor::Pointer,
        };
        let Some(shape) = self.interactive_mut(id) else {
            return false;
        };
        let prior = std::mem::replace(&mut shape.style, hovered);
        let changed = prior != shape.style;
        // A repeated enter must not overwrite the true pre-hover fill with the hover color.
        self.original_fill.entry(id).or_insert(prior.fill);
        changed
    }

    /// Undo `hover_enter`. Without a recorded pre-hover fill this is a no-op.
    /// Returns `true` if the style changed.
    pub fn hover_leave(&mut self, id: ShapeId) -> bool {
        let Some(original) = self.original_fill.remove(&id) else {
            return false;
        };
        let Some(shape) = self.interactive_mut(id) else {
            return false;
        };
        shape.style = ShapeStyle::resting(original);
        true
    }

    pub fn activate(&self, id: ShapeId) -> Activation {
        let Some(shape) = self.interactive(id) else {
            return Activation::Inert;
        };
        let Some(key) = shape.key.as_deref() else {
            return Activation::Inert;
        };
        match self.pages.resolve(key) {
            Some(page) => Activation::Navigate(page_href(&page)),
            None => Activation::Unresolved {
                key: key.to_string(),
            },
        }
    }
}

/// Site-relative href for a page name.
pub fn page_href(page: &str) -> String {
    format!("/{page}.html")
}
