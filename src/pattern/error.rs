use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("route pattern is empty")]
    Empty,
    #[error("route pattern '{pattern}' must start with '/'")]
    MissingLeadingSlash { pattern: String },
    #[error("route pattern '{pattern}' contains non-ASCII characters")]
    NonAscii { pattern: String },
    #[error("segment '{segment}' in pattern '{pattern}' is a dot segment")]
    DotSegment { pattern: String, segment: String },
    #[error("parameter segment '{segment}' in pattern '{pattern}' is missing a name")]
    EmptyParamName { pattern: String, segment: String },
    #[error(
        "parameter name '{name}' in pattern '{pattern}' must be made of word characters ([A-Za-z0-9_])"
    )]
    InvalidParamName { pattern: String, name: String },
    #[error("segment '{segment}' in pattern '{pattern}' mixes literal and parameter syntax")]
    MixedSyntax { pattern: String, segment: String },
    #[error(
        "wildcard must be the final segment in '{pattern}': index {segment_index} of {total_segments}"
    )]
    WildcardNotLast {
        pattern: String,
        segment_index: usize,
        total_segments: usize,
    },
    #[error("duplicate parameter name '{name}' in pattern '{pattern}'")]
    DuplicateParamName { pattern: String, name: String },
}

pub type PatternResult<T> = Result<T, PatternError>;
