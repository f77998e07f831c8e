use crate::types::{HttpMethod, RouteKey};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrieError {
    #[error("route trie is sealed; cannot perform {operation}")]
    Sealed {
        operation: &'static str,
        pattern: String,
    },
    #[error("duplicate route for method {method} at '{pattern}' (existing key {existing_key})")]
    DuplicateRoute {
        method: HttpMethod,
        pattern: String,
        existing_key: RouteKey,
    },
}

pub type TrieResult<T> = Result<T, TrieError>;
