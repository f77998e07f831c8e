use super::node::{TrieFlags, TrieNode};
use super::traversal::traverse;
use super::{TrieError, TrieResult};

// Route keys are u16; this is the first key that cannot be handed out.
pub const MAX_ROUTES: u16 = u16::MAX;

#[derive(Debug, Clone)]
pub struct RouteTrie {
    pub(crate) root: TrieNode,
    pub(crate) case_sensitive: bool,
    pub(super) flags: TrieFlags,
    pub(super) route_count: usize,
    pub(super) middleware_count: usize,
}

impl Default for RouteTrie {
    fn default() -> Self {
        Self::new(true)
    }
}

impl RouteTrie {
    pub fn new(case_sensitive: bool) -> Self {
        Self {
            root: TrieNode::default(),
            case_sensitive,
            flags: TrieFlags::empty(),
            route_count: 0,
            middleware_count: 0,
        }
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    pub fn is_sealed(&self) -> bool {
        self.flags.contains(TrieFlags::SEALED)
    }

    /// Marks the end of the build phase. Further insertions fail.
    pub fn seal(&mut self) {
        tracing::event!(
            tracing::Level::TRACE,
            operation = "seal",
            routes = self.route_count as u64,
            middlewares = self.middleware_count as u64
        );
        self.flags.insert(TrieFlags::SEALED);
    }

    pub fn route_count(&self) -> usize {
        self.route_count
    }

    pub fn middleware_count(&self) -> usize {
        self.middleware_count
    }

    pub fn node_count(&self) -> usize {
        let mut count = 0usize;
        traverse(&self.root, |_| count += 1);
        count
    }

    pub(super) fn ensure_unsealed(&self, operation: &'static str, pattern: &str) -> TrieResult<()> {
        if self.is_sealed() {
            return Err(TrieError::Sealed {
                operation,
                pattern: pattern.to_string(),
            });
        }
        Ok(())
    }

    /// Static keys are stored lower-cased when matching is case-insensitive.
    pub(crate) fn static_key<'a>(&self, text: &'a str) -> std::borrow::Cow<'a, str> {
        if self.case_sensitive {
            std::borrow::Cow::Borrowed(text)
        } else {
            std::borrow::Cow::Owned(text.to_ascii_lowercase())
        }
    }
}
