//! System-provided default templates, one per category.

use serde::{Deserialize, Serialize};

use super::category::TemplateCategory;
use super::dashboard_template::{GridItem, TemplateConfig};
use crate::error::AppError;

/// Read-only default layout for a dashboard category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseDashboardTemplate {
    pub name: TemplateCategory,
    pub display_name: String,
    pub template_config: TemplateConfig,
}

/// Immutable set of base templates, holding exactly one per category.
#[derive(Debug, Clone)]
pub struct BaseTemplateRegistry {
    templates: Vec<BaseDashboardTemplate>,
}

impl BaseTemplateRegistry {
    /// Builds a registry from an arbitrary list of templates.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a category appears twice or is
    /// missing.
    pub fn from_templates(mut templates: Vec<BaseDashboardTemplate>) -> Result<Self, AppError> {
        templates.sort_by_key(|t| t.name);

        if let Some(pair) = templates.windows(2).find(|w| w[0].name == w[1].name) {
            return Err(AppError::validation(format!(
                "duplicate base template: {}",
                pair[0].name
            )));
        }

        if let Some(missing) = TemplateCategory::ALL
            .into_iter()
            .find(|category| !templates.iter().any(|t| t.name == *category))
        {
            return Err(AppError::validation(format!(
                "missing base template: {missing}"
            )));
        }

        Ok(Self { templates })
    }

    /// The templates shipped with the service.
    pub fn builtin() -> Self {
        Self {
            templates: vec![landing_page()],
        }
    }

    pub fn all(&self) -> &[BaseDashboardTemplate] {
        &self.templates
    }

    pub fn get(&self, category: TemplateCategory) -> Option<&BaseDashboardTemplate> {
        self.templates.iter().find(|t| t.name == category)
    }
}

fn landing_page() -> BaseDashboardTemplate {
    // (widget, height, minimum height) laid out in reading order.
    const WIDGETS: [(&str, u32, u32); 5] = [
        ("favoriteServices#fs", 4, 2),
        ("notificationsEvents#ne", 4, 2),
        ("learningResources#lr", 4, 2),
        ("exploreCapabilities#ec", 5, 3),
        ("edge#edge", 3, 2),
    ];

    let layout = |columns: u32, width: u32| -> Vec<GridItem> {
        let per_row = (columns / width).max(1);
        WIDGETS
            .iter()
            .enumerate()
            .map(|(index, (key, h, min_h))| {
                let index = index as u32;
                let mut item = GridItem::new(
                    *key,
                    (index % per_row) * width,
                    (index / per_row) * 4,
                    width,
                    *h,
                );
                item.min_h = Some(*min_h);
                item.max_h = Some(10);
                item
            })
            .collect()
    };

    BaseDashboardTemplate {
        name: TemplateCategory::LandingPage,
        display_name: "Landing Page".to_string(),
        template_config: TemplateConfig {
            sm: layout(1, 1),
            md: layout(2, 1),
            lg: layout(3, 1),
            xl: layout(4, 1),
        },
    }
}
