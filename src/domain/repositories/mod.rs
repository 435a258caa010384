//! Repository trait definitions for the domain layer.
//!
//! Implementations live in `crate::infrastructure::persistence`; mocks are
//! generated via `mockall` for unit tests.

pub mod template_repository;

pub use template_repository::TemplateRepository;

#[cfg(test)]
pub use template_repository::MockTemplateRepository;
