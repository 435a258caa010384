//! Application layer services implementing business logic.
//!
//! Services coordinate repository calls and enforce business rules, giving
//! HTTP handlers a small API to call into.
//!
//! # Available Services
//!
//! - [`services::template_service::TemplateService`] - Dashboard template ownership, defaults and copies

pub mod services;
