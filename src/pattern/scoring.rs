use super::SegmentKind;
use crate::types::Priority;

pub const STATIC_WEIGHT: Priority = 3;
pub const PARAM_WEIGHT: Priority = 2;
pub const WILDCARD_WEIGHT: Priority = 1;

#[inline]
fn weight(kind: SegmentKind) -> Priority {
    match kind {
        SegmentKind::Static => STATIC_WEIGHT,
        SegmentKind::Param => PARAM_WEIGHT,
        SegmentKind::Wildcard => WILDCARD_WEIGHT,
    }
}

/// Specificity of a matched segment sequence, leftmost segment first.
///
/// Segment `i` of `L` sits at height `h = L - i` and contributes `h * h * weight`,
/// so differences on the left outweigh differences further right. The root path
/// (no segments) scores zero.
pub fn score(kinds: &[SegmentKind]) -> Priority {
    let len = kinds.len() as Priority;
    kinds
        .iter()
        .enumerate()
        .map(|(idx, &kind)| {
            let height = len - idx as Priority;
            height * height * weight(kind)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::compile;

    fn pattern_score(pattern: &str) -> Priority {
        compile(pattern).unwrap().priority()
    }

    #[test]
    fn root_scores_zero() {
        assert_eq!(score(&[]), 0);
        assert_eq!(pattern_score("/"), 0);
    }

    #[test]
    fn single_segment_weights() {
        assert_eq!(pattern_score("/blog"), 3);
        assert_eq!(pattern_score("/:blog"), 2);
        assert_eq!(pattern_score("/*blog"), 1);
    }

    #[test]
    fn three_segment_scores_follow_height_squared() {
        assert_eq!(pattern_score("/blog/category/page"), 27 + 12 + 3);
        assert_eq!(pattern_score("/blog/category/:page"), 27 + 12 + 2);
        assert_eq!(pattern_score("/blog/:category/page"), 27 + 8 + 3);
        assert_eq!(pattern_score("/:blog/category/page"), 18 + 12 + 3);
        assert_eq!(pattern_score("/:blog/:category/:page"), 18 + 8 + 2);
        assert_eq!(pattern_score("/:blog/:category/*page"), 18 + 8 + 1);
    }

    #[test]
    fn static_outranks_param_at_same_position() {
        assert_eq!(pattern_score("/user/edit"), 15);
        assert_eq!(pattern_score("/user/:id"), 14);
        assert_eq!(pattern_score("/user/*path"), 13);
    }

    #[test]
    fn leftmost_difference_dominates_for_four_segments() {
        let names = ["blog", "category", "page", "subpage"];
        let mut patterns = Vec::new();
        for mask in 0..3usize.pow(4) {
            let mut digits = mask;
            let mut kinds = Vec::new();
            for _ in 0..4 {
                kinds.push(digits % 3);
                digits /= 3;
            }
            // wildcard is only legal in the last position
            if kinds[..3].contains(&2) {
                continue;
            }
            let text: String = kinds
                .iter()
                .zip(names.iter())
                .map(|(kind, name)| match kind {
                    0 => format!("/{name}"),
                    1 => format!("/:{name}"),
                    _ => format!("/*{name}"),
                })
                .collect();
            patterns.push((kinds, pattern_score(&text)));
        }

        for (a_kinds, a_score) in &patterns {
            for (b_kinds, b_score) in &patterns {
                let Some(pos) = (0..4).find(|&i| a_kinds[i] != b_kinds[i]) else {
                    continue;
                };
                if a_kinds[pos] < b_kinds[pos] {
                    assert!(
                        a_score > b_score,
                        "{a_kinds:?} ({a_score}) should outrank {b_kinds:?} ({b_score})"
                    );
                }
            }
        }
    }
}
