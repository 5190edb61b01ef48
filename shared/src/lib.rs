pub mod carousel;
pub mod config;
pub mod error;
pub mod feature;
pub mod map;
pub mod projection;

pub use carousel::{Carousel, Rotation, StartPlan};
pub use config::{CarouselConfig, ColorScheme, FeatureKey, MapConfig, PageResolver};
pub use error::MapError;
pub use feature::{Feature, FeatureCollection, Geometry};
pub use map::{Activation, Cursor, MapModel, Shape, ShapeId, ShapeStyle};
pub use projection::Mercator;
