//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`base_templates`] - Loading base templates from a JSON file
//! - [`persistence`] - PostgreSQL repository implementations

pub mod base_templates;
pub mod persistence;
