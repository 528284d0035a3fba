use thiserror::Error;

/// Top-level error type for the snowflake generator and its viewer.
#[derive(Debug, Error)]
pub enum KochError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Plot(#[from] PlotError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors raised while validating user-supplied settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("recursion level {value} is out of range [{min}, {max}]")]
    LevelOutOfRange { value: i64, min: u32, max: u32 },

    #[error("invalid recursion level: {0}")]
    InvalidLevel(String),
}

/// Errors related to building chart descriptions.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error("failed to serialize chart: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Convenience type alias for results using [`KochError`].
pub type Result<T> = std::result::Result<T, KochError>;
