mod error;
pub mod insert;
pub mod node;
mod traversal;
mod tree;

pub use error::{TrieError, TrieResult};
pub use node::{TrieFlags, TrieNode};
pub use tree::{MAX_ROUTES, RouteTrie};
