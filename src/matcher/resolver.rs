use smallvec::SmallVec;
use std::cmp::{Ordering, Reverse};

use crate::path::RequestPath;
use crate::pattern::{SegmentKind, score};
use crate::trie::TrieNode;
use crate::types::{HttpMethod, ParamOffset, Priority, RouteKey};

/// A fully consumed walk through the trie that ends at a route for the
/// requested method.
#[derive(Debug, Clone)]
pub struct Candidate<'a> {
    pub key: RouteKey,
    pub priority: Priority,
    /// Spans of every param and wildcard value, left to right.
    pub captures: SmallVec<[ParamOffset; 4]>,
    /// Nodes visited from the root to the terminal, inclusive.
    pub trail: SmallVec<[&'a TrieNode; 8]>,
    wildcards: usize,
}

impl Candidate<'_> {
    // score first, then fewer wildcards, then the earlier registration
    fn rank(&self) -> (Priority, Reverse<usize>, Reverse<RouteKey>) {
        (self.priority, Reverse(self.wildcards), Reverse(self.key))
    }
}

#[derive(Debug)]
pub enum Resolution<'a> {
    Found(Candidate<'a>),
    /// The path exists but only for other methods (bitmask by method index).
    MethodNotAllowed(u8),
    NotFound,
}

struct Walk<'a, 'p> {
    method: HttpMethod,
    path: &'p RequestPath,
    debug: bool,
    kinds: SmallVec<[SegmentKind; 8]>,
    captures: SmallVec<[ParamOffset; 4]>,
    trail: SmallVec<[&'a TrieNode; 8]>,
    best: Option<Candidate<'a>>,
    other_methods: u8,
    candidates: usize,
}

/// Explores every static, param and wildcard continuation that consumes the
/// whole path and keeps the highest ranked terminal.
pub fn resolve<'a>(
    root: &'a TrieNode,
    method: HttpMethod,
    path: &RequestPath,
    debug: bool,
) -> Resolution<'a> {
    let mut walk = Walk {
        method,
        path,
        debug,
        kinds: SmallVec::new(),
        captures: SmallVec::new(),
        trail: SmallVec::new(),
        best: None,
        other_methods: 0,
        candidates: 0,
    };
    walk.trail.push(root);
    walk.visit(root, 0);

    tracing::event!(
        tracing::Level::TRACE,
        operation = "resolve",
        method = ?method,
        path = %path.as_str(),
        candidates = walk.candidates as u64
    );

    match walk.best {
        Some(best) => Resolution::Found(best),
        None if walk.other_methods != 0 => Resolution::MethodNotAllowed(walk.other_methods),
        None => Resolution::NotFound,
    }
}

impl<'a> Walk<'a, '_> {
    fn visit(&mut self, node: &'a TrieNode, depth: usize) {
        if depth == self.path.len() {
            self.offer(node);
            return;
        }

        if let Some(child) = node.static_child(self.path.lookup_component(depth)) {
            self.descend(child, SegmentKind::Static, None);
            self.visit(child, depth + 1);
            self.ascend(false);
        }

        if let Some(child) = node.param_child() {
            let span = self.path.span(depth);
            if span.1 > 0 {
                self.descend(child, SegmentKind::Param, Some(span));
                self.visit(child, depth + 1);
                self.ascend(true);
            }
        }

        if let Some(child) = node.wildcard_child() {
            let span = self.path.remainder_span(depth);
            if span.1 > 0 {
                self.descend(child, SegmentKind::Wildcard, Some(span));
                self.offer(child);
                self.ascend(true);
            }
        }
    }

    fn descend(&mut self, child: &'a TrieNode, kind: SegmentKind, capture: Option<ParamOffset>) {
        self.kinds.push(kind);
        self.trail.push(child);
        if let Some(span) = capture {
            self.captures.push(span);
        }
    }

    fn ascend(&mut self, captured: bool) {
        self.kinds.pop();
        self.trail.pop();
        if captured {
            self.captures.pop();
        }
    }

    fn offer(&mut self, node: &'a TrieNode) {
        let Some(key) = node.route(self.method) else {
            self.other_methods |= node.method_mask();
            return;
        };

        self.candidates += 1;
        let candidate = Candidate {
            key,
            priority: score(&self.kinds),
            captures: self.captures.clone(),
            trail: self.trail.clone(),
            wildcards: self
                .kinds
                .iter()
                .filter(|k| **k == SegmentKind::Wildcard)
                .count(),
        };

        if self.debug {
            tracing::event!(
                tracing::Level::DEBUG,
                route_key = key as u64,
                priority = candidate.priority,
                kinds = ?self.kinds,
                "router candidate scored"
            );
        }

        let replace = match &self.best {
            None => true,
            Some(best) => candidate.rank().cmp(&best.rank()) == Ordering::Greater,
        };
        if replace {
            self.best = Some(candidate);
        }
    }
}
