//! User-owned dashboard template and its layout.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::base_template::BaseDashboardTemplate;
use super::category::TemplateCategory;

/// Position and size of one widget on the dashboard grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridItem {
    /// Widget key, e.g. `favoriteServices#fs`.
    pub i: String,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_h: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_h: Option<u32>,
    #[serde(default, rename = "static")]
    pub is_static: bool,
}

impl GridItem {
    pub fn new(i: impl Into<String>, x: u32, y: u32, w: u32, h: u32) -> Self {
        Self {
            i: i.into(),
            x,
            y,
            w,
            h,
            max_h: None,
            min_h: None,
            is_static: false,
        }
    }
}

/// Widget layout per responsive breakpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateConfig {
    #[serde(default)]
    pub sm: Vec<GridItem>,
    #[serde(default)]
    pub md: Vec<GridItem>,
    #[serde(default)]
    pub lg: Vec<GridItem>,
    #[serde(default)]
    pub xl: Vec<GridItem>,
}

/// A saved dashboard layout owned by a single user.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardTemplate {
    pub id: i64,
    pub user_id: String,
    pub category: TemplateCategory,
    pub display_name: String,
    pub default: bool,
    pub template_config: TemplateConfig,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DashboardTemplate {
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }
}

/// Input data for inserting a template.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDashboardTemplate {
    pub user_id: String,
    pub category: TemplateCategory,
    pub display_name: String,
    pub default: bool,
    pub template_config: TemplateConfig,
}

impl NewDashboardTemplate {
    /// A user's own copy of a base template.
    pub fn from_base(user_id: &str, base: &BaseDashboardTemplate, default: bool) -> Self {
        Self {
            user_id: user_id.to_string(),
            category: base.name,
            display_name: base.display_name.clone(),
            default,
            template_config: base.template_config.clone(),
        }
    }

    /// A non-default duplicate of `template`, owned by the same user.
    pub fn copy_of(template: &DashboardTemplate) -> Self {
        Self {
            user_id: template.user_id.clone(),
            category: template.category,
            display_name: format!("{} (copy)", template.display_name),
            default: false,
            template_config: template.template_config.clone(),
        }
    }
}

/// Partial update of a template. `None` leaves the field unchanged.
///
/// Owner, category and the default flag are not patchable; the default flag
/// moves only through the dedicated set-default operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplatePatch {
    pub display_name: Option<String>,
    pub template_config: Option<TemplateConfig>,
}

impl TemplatePatch {
    pub fn is_empty(&self) -> bool {
        self.display_name.is_none() && self.template_config.is_none()
    }
}
