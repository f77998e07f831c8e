use memchr::memchr_iter;
use smallvec::SmallVec;

use crate::types::ParamOffset;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizationOptions {
    pub allow_duplicate_slash: bool,
    pub strict_trailing_slash: bool,
    pub case_sensitive: bool,
}

impl Default for NormalizationOptions {
    fn default() -> Self {
        Self {
            allow_duplicate_slash: false,
            strict_trailing_slash: false,
            case_sensitive: true,
        }
    }
}

/// A concrete request path split into `/`-delimited components.
///
/// Component spans index into `as_str()`. When matching is case-insensitive a
/// lower-cased copy with identical byte offsets is kept for static lookups, so
/// captured values retain their original case.
#[derive(Debug, Clone)]
pub struct RequestPath {
    normalized: String,
    lowered: Option<String>,
    components: SmallVec<[ParamOffset; 8]>,
}

impl RequestPath {
    /// Returns `None` for paths that can never match a route: empty input,
    /// a missing leading `/`, or control and whitespace bytes.
    #[tracing::instrument(level = "trace", skip(path, options), fields(path_len = path.len() as u64))]
    pub fn parse(path: &str, options: &NormalizationOptions) -> Option<Self> {
        if !path.starts_with('/') {
            return None;
        }
        if path.bytes().any(|b| b <= 0x20) {
            return None;
        }

        let mut normalized = if options.allow_duplicate_slash {
            path.to_string()
        } else {
            collapse_duplicate_slashes(path)
        };
        if !options.strict_trailing_slash {
            while normalized.len() > 1 && normalized.ends_with('/') {
                normalized.pop();
            }
        }

        let components = split_components(&normalized);
        let lowered = (!options.case_sensitive).then(|| normalized.to_ascii_lowercase());

        Some(Self {
            normalized,
            lowered,
            components,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn span(&self, index: usize) -> ParamOffset {
        self.components[index]
    }

    /// Component as received.
    pub fn component(&self, index: usize) -> &str {
        let (start, len) = self.components[index];
        &self.normalized[start..start + len]
    }

    /// Component as used for static lookups.
    pub fn lookup_component(&self, index: usize) -> &str {
        let (start, len) = self.components[index];
        let source = self.lowered.as_deref().unwrap_or(&self.normalized);
        &source[start..start + len]
    }

    /// Span covering component `index` through the end of the path. With
    /// duplicate slashes kept, that component may be empty.
    pub fn remainder_span(&self, index: usize) -> ParamOffset {
        let (start, _) = self.components[index];
        (start, self.normalized.len() - start)
    }

    pub fn slice(&self, (start, len): ParamOffset) -> &str {
        &self.normalized[start..start + len]
    }
}

fn collapse_duplicate_slashes(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut prev_was_slash = false;
    for ch in input.chars() {
        if ch == '/' {
            if !prev_was_slash {
                output.push(ch);
                prev_was_slash = true;
            }
        } else {
            output.push(ch);
            prev_was_slash = false;
        }
    }
    output
}

fn split_components(normalized: &str) -> SmallVec<[ParamOffset; 8]> {
    let mut components = SmallVec::new();
    if normalized == "/" {
        return components;
    }

    let bytes = normalized.as_bytes();
    // skip the leading '/'
    let mut start = 1usize;
    for pos in memchr_iter(b'/', &bytes[1..]) {
        let end = pos + 1;
        components.push((start, end - start));
        start = end + 1;
    }
    components.push((start, bytes.len() - start));
    components
}
