use crate::operations::fractal::RecursionLevel;

/// Settings shared by every request handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppState {
    /// Level used when a request does not name one.
    pub default_level: RecursionLevel,
}

impl AppState {
    #[must_use]
    pub fn new(default_level: RecursionLevel) -> Self {
        Self { default_level }
    }
}
