use hashbrown::HashSet;
use regex::Regex;
use std::sync::LazyLock;

use super::{PatternError, PatternResult, RoutePattern, Segment};

static PARAM_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[A-Za-z0-9_]+$").expect("parameter name regex is valid"));

/// Compiles a route pattern such as `/user/:id/files/*path`.
///
/// Empty components (leading, trailing or doubled slashes) are discarded. A
/// `:name` component binds one path component, a trailing `*name` component
/// binds the rest of the path, anything else must match literally.
#[tracing::instrument(level = "trace", skip(pattern), fields(pattern = %pattern))]
pub fn compile(pattern: &str) -> PatternResult<RoutePattern> {
    if pattern.is_empty() {
        return Err(PatternError::Empty);
    }
    if !pattern.is_ascii() {
        return Err(PatternError::NonAscii {
            pattern: pattern.to_string(),
        });
    }
    if !pattern.starts_with('/') {
        return Err(PatternError::MissingLeadingSlash {
            pattern: pattern.to_string(),
        });
    }

    let components: Vec<&str> = pattern.split('/').filter(|c| !c.is_empty()).collect();
    let total = components.len();
    let mut segments = Vec::with_capacity(total);
    let mut seen = HashSet::new();

    for (idx, component) in components.into_iter().enumerate() {
        let segment = parse_component(pattern, component)?;

        if let Segment::Wildcard(_) = segment
            && idx + 1 != total
        {
            return Err(PatternError::WildcardNotLast {
                pattern: pattern.to_string(),
                segment_index: idx,
                total_segments: total,
            });
        }

        if let Some(name) = segment.name()
            && !seen.insert(name.to_string())
        {
            return Err(PatternError::DuplicateParamName {
                pattern: pattern.to_string(),
                name: name.to_string(),
            });
        }

        segments.push(segment);
    }

    Ok(RoutePattern::new(segments))
}

fn parse_component(pattern: &str, component: &str) -> PatternResult<Segment> {
    if component == "." || component == ".." {
        return Err(PatternError::DotSegment {
            pattern: pattern.to_string(),
            segment: component.to_string(),
        });
    }

    let (prefix, rest) = component.split_at(1);
    match prefix {
        ":" => validate_name(pattern, component, rest).map(Segment::Param),
        "*" => validate_name(pattern, component, rest).map(Segment::Wildcard),
        _ => {
            if component.contains([':', '*']) {
                return Err(PatternError::MixedSyntax {
                    pattern: pattern.to_string(),
                    segment: component.to_string(),
                });
            }
            Ok(Segment::Static(component.to_string()))
        }
    }
}

fn validate_name(pattern: &str, component: &str, name: &str) -> PatternResult<String> {
    if name.is_empty() {
        return Err(PatternError::EmptyParamName {
            pattern: pattern.to_string(),
            segment: component.to_string(),
        });
    }
    if name.contains([':', '*']) {
        return Err(PatternError::MixedSyntax {
            pattern: pattern.to_string(),
            segment: component.to_string(),
        });
    }
    if !PARAM_NAME.is_match(name) {
        return Err(PatternError::InvalidParamName {
            pattern: pattern.to_string(),
            name: name.to_string(),
        });
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::SegmentKind;

    #[test]
    fn classifies_each_component() {
        let pattern = compile("/user/:id/files/*path").unwrap();
        assert_eq!(
            pattern.segments(),
            &[
                Segment::Static("user".to_string()),
                Segment::Param("id".to_string()),
                Segment::Static("files".to_string()),
                Segment::Wildcard("path".to_string()),
            ]
        );
        assert_eq!(pattern.param_names(), &["id".to_string(), "path".to_string()]);
        assert!(pattern.has_wildcard());
    }

    #[test]
    fn root_has_no_segments() {
        let pattern = compile("/").unwrap();
        assert!(pattern.is_root());
        assert_eq!(pattern.as_str(), "/");
    }

    #[test]
    fn redundant_slashes_are_cleaned() {
        let pattern = compile("//user//:id/").unwrap();
        assert_eq!(pattern.as_str(), "/user/:id");
        assert_eq!(
            pattern.kinds().as_slice(),
            &[SegmentKind::Static, SegmentKind::Param]
        );
    }

    #[test]
    fn wildcard_must_be_last() {
        let err = compile("/files/*path/meta").unwrap_err();
        assert_eq!(
            err,
            PatternError::WildcardNotLast {
                pattern: "/files/*path/meta".to_string(),
                segment_index: 1,
                total_segments: 3,
            }
        );
    }

    #[test]
    fn empty_names_are_rejected() {
        assert!(matches!(
            compile("/user/:").unwrap_err(),
            PatternError::EmptyParamName { .. }
        ));
        assert!(matches!(
            compile("/files/*").unwrap_err(),
            PatternError::EmptyParamName { .. }
        ));
    }

    #[test]
    fn names_must_be_word_characters() {
        match compile("/user/:id-raw").unwrap_err() {
            PatternError::InvalidParamName { name, .. } => assert_eq!(name, "id-raw"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(compile("/v/:1st").is_ok());
    }

    #[test]
    fn mixed_syntax_is_rejected() {
        assert!(matches!(
            compile("/user/a:b").unwrap_err(),
            PatternError::MixedSyntax { .. }
        ));
        assert!(matches!(
            compile("/user/:a:b").unwrap_err(),
            PatternError::MixedSyntax { .. }
        ));
    }

    #[test]
    fn reused_names_are_rejected() {
        match compile("/:id/x/*id").unwrap_err() {
            PatternError::DuplicateParamName { name, .. } => assert_eq!(name, "id"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn malformed_inputs_are_rejected() {
        assert_eq!(compile("").unwrap_err(), PatternError::Empty);
        assert!(matches!(
            compile("user").unwrap_err(),
            PatternError::MissingLeadingSlash { .. }
        ));
        assert!(matches!(
            compile("/caf\u{e9}").unwrap_err(),
            PatternError::NonAscii { .. }
        ));
        assert!(matches!(
            compile("/a/../b").unwrap_err(),
            PatternError::DotSegment { .. }
        ));
    }
}
