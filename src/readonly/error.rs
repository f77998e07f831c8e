use crate::types::HttpMethod;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReadOnlyError {
    #[error("no route matched for method {method} and path '{path}'")]
    RouteNotFound { method: HttpMethod, path: String },
    #[error("method {method} is not allowed for path '{path}' (allowed: {allowed:?})")]
    MethodNotAllowed {
        method: HttpMethod,
        path: String,
        allowed: Vec<HttpMethod>,
    },
}

pub type ReadOnlyResult<T> = Result<T, ReadOnlyError>;
