use super::scoring::score;
use super::{Segment, SegmentKind};
use crate::types::Priority;
use smallvec::SmallVec;

/// A validated route pattern. Immutable once compiled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
    param_names: Vec<String>,
}

impl RoutePattern {
    pub(crate) fn new(segments: Vec<Segment>) -> Self {
        let raw = if segments.is_empty() {
            "/".to_string()
        } else {
            segments.iter().fold(String::new(), |mut acc, seg| {
                acc.push('/');
                acc.push_str(&seg.to_string());
                acc
            })
        };
        let param_names = segments
            .iter()
            .filter_map(|seg| seg.name().map(str::to_string))
            .collect();

        Self {
            raw,
            segments,
            param_names,
        }
    }

    /// Normalized source text, e.g. `/user/:id` for `//user/:id/`.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Names of every `Param` and `Wildcard` segment, left to right.
    pub fn param_names(&self) -> &[String] {
        &self.param_names
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn has_wildcard(&self) -> bool {
        matches!(self.segments.last(), Some(Segment::Wildcard(_)))
    }

    pub fn kinds(&self) -> SmallVec<[SegmentKind; 8]> {
        self.segments.iter().map(Segment::kind).collect()
    }

    pub fn priority(&self) -> Priority {
        score(&self.kinds())
    }
}
