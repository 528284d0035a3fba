pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod plot;
pub mod server;

pub use error::{KochError, Result};
pub use operations::fractal::{build_curve, build_snowflake, RecursionLevel};
