use thiserror::Error;

/// Failures that abort map initialization. None of them are retried.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("fetch error: {0}")]
    Fetch(String),

    #[error("HTTP {0}")]
    Http(u16),

    #[error("parse error: {0}")]
    Parse(#[from] geojson::Error),

    #[error("expected a FeatureCollection, got {0}")]
    NotFeatureCollection(String),

    #[error("position needs at least two coordinates, got {0}")]
    ShortPosition(usize),

    #[error("interactive country set is empty")]
    EmptyInteractiveSet,
}
