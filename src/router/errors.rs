use crate::pattern::PatternError;
use crate::readonly::ReadOnlyError;
use crate::trie::TrieError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterError {
    #[error("router is sealed; cannot add '{pattern}'")]
    AddWhileSealed { pattern: String },
    #[error("router is sealed; cannot add {count} routes in bulk")]
    BulkAddWhileSealed { count: usize },
    #[error("router is not sealed; cannot perform route lookup")]
    FindWhileMutable,
    #[error("router is not sealed; readonly snapshot is unavailable")]
    ReadOnlyUnavailable,
    #[error("maximum number of routes exceeded (limit {limit})")]
    MaxRoutesExceeded { limit: u16 },
    #[error("pattern '{pattern}' has {count} segments, more than the limit of {limit}")]
    TooManySegments {
        pattern: String,
        count: usize,
        limit: usize,
    },
    #[error("invalid route pattern: {0}")]
    InvalidPattern(#[from] PatternError),
    #[error(transparent)]
    Trie(#[from] TrieError),
    #[error(transparent)]
    ReadOnly(#[from] ReadOnlyError),
}

pub type RouterResult<T> = Result<T, RouterError>;
