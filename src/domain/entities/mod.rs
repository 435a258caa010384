//! Core domain entities.
//!
//! - [`DashboardTemplate`] - A user-owned dashboard layout
//! - [`BaseDashboardTemplate`] - The read-only default layout of a category
//! - [`TemplateCategory`] - Which dashboard a template belongs to
//! - [`UserIdentity`] - The caller a request is made for
//!
//! Creation and partial updates use separate input structs
//! ([`NewDashboardTemplate`], [`TemplatePatch`]).

pub mod base_template;
pub mod category;
pub mod dashboard_template;
pub mod identity;

pub use base_template::{BaseDashboardTemplate, BaseTemplateRegistry};
pub use category::TemplateCategory;
pub use dashboard_template::{
    DashboardTemplate, GridItem, NewDashboardTemplate, TemplateConfig, TemplatePatch,
};
pub use identity::UserIdentity;
