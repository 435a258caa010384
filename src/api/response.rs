//! Response envelopes shared by every endpoint.
//!
//! Success bodies are `{"data": ...}`, error bodies are `{"errors": [...]}`.
//! A response never carries both.

use serde::Serialize;

/// `{"data": [T, ...]}` envelope for collections.
#[derive(Debug, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub data: Vec<T>,
}

impl<T: Serialize> ListResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }
}

/// `{"data": T}` envelope for a single entity.
#[derive(Debug, Serialize)]
pub struct EntityResponse<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> EntityResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// `{"errors": ["..."]}` envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub errors: Vec<String>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            errors: vec![message.into()],
        }
    }

    /// Body sent when a request dies without a classified error.
    pub fn internal() -> Self {
        Self::new("internal server error")
    }
}
