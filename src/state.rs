//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::TemplateService;
use crate::domain::repositories::TemplateRepository;

/// Template service backed by any repository implementation.
pub type DynTemplateService = TemplateService<dyn TemplateRepository>;

#[derive(Clone)]
pub struct AppState {
    pub template_service: Arc<DynTemplateService>,
}

impl AppState {
    pub fn new(template_service: Arc<DynTemplateService>) -> Self {
        Self { template_service }
    }
}
