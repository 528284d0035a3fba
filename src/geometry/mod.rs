pub mod polyline;
pub mod segment;

pub use polyline::{Aabb2, Polyline};
pub use segment::Segment;
