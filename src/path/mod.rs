mod normalize;

pub use normalize::{NormalizationOptions, RequestPath};
