pub mod error;
pub mod segment;
pub mod series;

pub use error::ConstructionError;
pub use segment::BezierSegment;
pub use series::{BezierSeries, Location};
