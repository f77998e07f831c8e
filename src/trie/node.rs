use bitflags::bitflags;
use hashbrown::HashMap as FastHashMap;
use smallvec::SmallVec;

use crate::types::{HTTP_METHOD_COUNT, HttpMethod, MiddlewareKey, RouteKey};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TrieFlags: u8 {
        const SEALED = 0b00000001;
    }
}

pub(crate) type StaticMap = FastHashMap<Box<str>, TrieNode>;

/// One segment position in the route trie.
///
/// Param and wildcard edges are shared by every route that has a dynamic
/// segment at this position; the bound name lives on the route, not the node.
#[derive(Debug, Default, Clone)]
pub struct TrieNode {
    pub(crate) static_children: StaticMap,
    pub(crate) param_child: Option<Box<TrieNode>>,
    pub(crate) wildcard_child: Option<Box<TrieNode>>,
    pub(crate) routes: [Option<RouteKey>; HTTP_METHOD_COUNT],
    pub(crate) middlewares: SmallVec<[MiddlewareKey; 2]>,
    // bit i set when routes[i] is occupied
    pub(super) method_mask: u8,
}

impl TrieNode {
    #[inline]
    pub fn route(&self, method: HttpMethod) -> Option<RouteKey> {
        self.routes[method.index()]
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.method_mask != 0
    }

    #[inline]
    pub fn method_mask(&self) -> u8 {
        self.method_mask
    }

    /// Methods with a route terminating here, in declaration order.
    pub fn methods(&self) -> Vec<HttpMethod> {
        HttpMethod::ALL
            .into_iter()
            .filter(|m| self.method_mask & (1 << m.index()) != 0)
            .collect()
    }

    pub fn middlewares(&self) -> &[MiddlewareKey] {
        &self.middlewares
    }

    #[inline]
    pub fn static_child(&self, key: &str) -> Option<&TrieNode> {
        self.static_children.get(key)
    }

    #[inline]
    pub fn param_child(&self) -> Option<&TrieNode> {
        self.param_child.as_deref()
    }

    #[inline]
    pub fn wildcard_child(&self) -> Option<&TrieNode> {
        self.wildcard_child.as_deref()
    }

    pub(super) fn set_route(&mut self, method: HttpMethod, key: RouteKey) {
        let idx = method.index();
        self.routes[idx] = Some(key);
        self.method_mask |= 1 << idx;
    }

    pub(super) fn descend_static_mut(&mut self, key: &str) -> &mut TrieNode {
        self.static_children
            .entry(key.to_owned().into_boxed_str())
            .or_default()
    }

    pub(super) fn descend_param_mut(&mut self) -> &mut TrieNode {
        self.param_child.get_or_insert_with(Box::default)
    }

    pub(super) fn descend_wildcard_mut(&mut self) -> &mut TrieNode {
        self.wildcard_child.get_or_insert_with(Box::default)
    }
}
