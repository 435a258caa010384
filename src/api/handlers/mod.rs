//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod base_templates;
pub mod health;
pub mod templates;

pub use base_templates::base_templates_handler;
pub use health::health_handler;
pub use templates::{
    copy_template_handler, delete_template_handler, list_templates_handler,
    set_default_template_handler, update_template_handler,
};
