use super::node::TrieNode;
use super::{RouteTrie, TrieError, TrieResult};
use crate::pattern::{RoutePattern, Segment};
use crate::types::{HttpMethod, MiddlewareKey, RouteKey};

impl RouteTrie {
    /// Attaches `key` under `method` at the node reached by `pattern`.
    ///
    /// Duplicates are detected before any node is created, so a rejected
    /// insertion leaves the trie untouched.
    pub fn insert(
        &mut self,
        method: HttpMethod,
        pattern: &RoutePattern,
        key: RouteKey,
    ) -> TrieResult<()> {
        tracing::event!(tracing::Level::TRACE, operation="insert", method=?method, pattern=%pattern.as_str(), key=key as u64);
        self.ensure_unsealed("insert", pattern.as_str())?;

        if let Some(existing_key) = self
            .lookup(pattern)
            .and_then(|node| node.route(method))
        {
            return Err(TrieError::DuplicateRoute {
                method,
                pattern: pattern.as_str().to_string(),
                existing_key,
            });
        }

        self.descend_or_create(pattern).set_route(method, key);
        self.route_count += 1;
        Ok(())
    }

    /// Attaches a middleware binding at the node reached by `prefix`.
    /// Any node may carry bindings, terminal or not.
    pub fn insert_middleware(
        &mut self,
        prefix: &RoutePattern,
        key: MiddlewareKey,
    ) -> TrieResult<()> {
        tracing::event!(tracing::Level::TRACE, operation="insert_middleware", pattern=%prefix.as_str(), key=key as u64);
        self.ensure_unsealed("insert_middleware", prefix.as_str())?;

        self.descend_or_create(prefix).middlewares.push(key);
        self.middleware_count += 1;
        Ok(())
    }

    /// Node reached by `pattern` if every node along it already exists.
    pub fn lookup(&self, pattern: &RoutePattern) -> Option<&TrieNode> {
        let mut current = &self.root;
        for segment in pattern.segments() {
            current = match segment {
                Segment::Static(text) => current.static_child(&self.static_key(text))?,
                Segment::Param(_) => current.param_child()?,
                Segment::Wildcard(_) => current.wildcard_child()?,
            };
        }
        Some(current)
    }

    fn descend_or_create(&mut self, pattern: &RoutePattern) -> &mut TrieNode {
        let case_sensitive = self.case_sensitive;
        let mut current = &mut self.root;
        for segment in pattern.segments() {
            current = match segment {
                Segment::Static(text) if case_sensitive => current.descend_static_mut(text),
                Segment::Static(text) => current.descend_static_mut(&text.to_ascii_lowercase()),
                Segment::Param(_) => current.descend_param_mut(),
                Segment::Wildcard(_) => current.descend_wildcard_mut(),
            };
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::compile;

    fn insert(trie: &mut RouteTrie, method: HttpMethod, pattern: &str, key: RouteKey) -> TrieResult<()> {
        trie.insert(method, &compile(pattern).unwrap(), key)
    }

    #[test]
    fn different_param_names_share_one_child() {
        let mut trie = RouteTrie::default();
        insert(&mut trie, HttpMethod::Get, "/user/:id", 0).unwrap();
        insert(&mut trie, HttpMethod::Post, "/user/:name", 1).unwrap();

        let node = trie.lookup(&compile("/user/:other").unwrap()).unwrap();
        assert_eq!(node.route(HttpMethod::Get), Some(0));
        assert_eq!(node.route(HttpMethod::Post), Some(1));
        assert_eq!(node.methods(), vec![HttpMethod::Get, HttpMethod::Post]);
        // root, "user", ":"
        assert_eq!(trie.node_count(), 3);
    }

    #[test]
    fn same_classification_sequence_is_a_duplicate() {
        let mut trie = RouteTrie::default();
        insert(&mut trie, HttpMethod::Get, "/user/:id", 0).unwrap();
        let err = insert(&mut trie, HttpMethod::Get, "/user/:name", 1).unwrap_err();
        assert_eq!(
            err,
            TrieError::DuplicateRoute {
                method: HttpMethod::Get,
                pattern: "/user/:name".to_string(),
                existing_key: 0,
            }
        );
        assert_eq!(trie.route_count(), 1);
    }

    #[test]
    fn middleware_attaches_to_non_terminal_nodes() {
        let mut trie = RouteTrie::default();
        trie.insert_middleware(&compile("/admin").unwrap(), 7).unwrap();
        insert(&mut trie, HttpMethod::Get, "/admin/users", 0).unwrap();

        let admin = trie.lookup(&compile("/admin").unwrap()).unwrap();
        assert!(!admin.is_terminal());
        assert_eq!(admin.middlewares(), &[7]);
        assert_eq!(trie.middleware_count(), 1);
    }

    #[test]
    fn sealed_trie_rejects_inserts() {
        let mut trie = RouteTrie::default();
        trie.seal();
        let err = insert(&mut trie, HttpMethod::Get, "/late", 0).unwrap_err();
        assert!(matches!(err, TrieError::Sealed { operation: "insert", .. }));
        let err = trie
            .insert_middleware(&compile("/late").unwrap(), 0)
            .unwrap_err();
        assert!(matches!(
            err,
            TrieError::Sealed {
                operation: "insert_middleware",
                ..
            }
        ));
        assert_eq!(trie.node_count(), 1);
    }

    #[test]
    fn case_insensitive_trie_lowercases_static_keys() {
        let mut trie = RouteTrie::new(false);
        insert(&mut trie, HttpMethod::Get, "/Users/Profile", 0).unwrap();
        assert!(trie.root().static_child("users").is_some());
        assert!(trie.root().static_child("Users").is_none());
    }
}
