//! Business logic services for the application layer.

pub mod template_service;

pub use template_service::TemplateService;
