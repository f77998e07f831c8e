//! A priority-ordered HTTP path router.
//!
//! Route patterns are made of static segments, `:name` parameters and a
//! trailing `*name` catch-all. They are compiled into a segment trie during a
//! build phase; after [`Router::seal`] the trie is frozen and every lookup walks
//! all matching branches, scores each candidate, and returns the most specific
//! route together with its parameters and the middleware bound along its path.
//!
//! ```
//! use trie_router::{HttpMethod, Router};
//!
//! let router: Router<&str> = Router::new(None);
//! router.add(HttpMethod::Get, "/user/:id", "show").unwrap();
//! router.add(HttpMethod::Get, "/user/edit", "edit").unwrap();
//! router.seal();
//!
//! let found = router.find(HttpMethod::Get, "/user/edit").unwrap();
//! assert_eq!(found.handler, "edit");
//!
//! let found = router.find(HttpMethod::Get, "/user/42").unwrap();
//! assert_eq!(found.params.get("id"), Some("42"));
//! ```

mod matcher;
pub mod path;
pub mod pattern;
pub mod readonly;
pub mod registry;
pub mod router;
pub mod trie;
pub mod types;

pub use pattern::{RoutePattern, Segment, SegmentKind, compile};
pub use readonly::{ReadOnlyError, RouterReadOnly};
pub use registry::RegistryMetrics;
pub use router::{
    Router, RouterError, RouterOptions, RouterOptionsBuilder, RouterOptionsError, RouterResult,
};
pub use trie::{RouteTrie, TrieError};
pub use types::{
    HttpMethod, MatchedMiddleware, MiddlewareKey, Params, Priority, RouteKey, RouteMatch,
};
