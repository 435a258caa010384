//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgTemplateRepository`] - Dashboard template storage and default switching

pub mod db_error;
pub mod pg_template_repository;

pub use pg_template_repository::PgTemplateRepository;
