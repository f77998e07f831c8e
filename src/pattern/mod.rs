mod compiled;
mod error;
mod parser;
mod scoring;
mod segment;

pub use compiled::RoutePattern;
pub use error::{PatternError, PatternResult};
pub use parser::compile;
pub use scoring::{PARAM_WEIGHT, STATIC_WEIGHT, WILDCARD_WEIGHT, score};
pub use segment::{Segment, SegmentKind};
