//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into service calls and formats
//! responses into the shared envelopes.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`extract`] - Extractors that reject with the error envelope
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Identity, rate limiting and tracing middleware
//! - [`response`] - `data` / `errors` envelopes
//! - [`routes`] - Route configuration

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
