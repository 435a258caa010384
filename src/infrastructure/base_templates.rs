//! Loading base templates from a JSON file.
//!
//! The file holds an array of base templates:
//!
//! ```json
//! [
//!   {
//!     "name": "landingPage",
//!     "displayName": "Landing Page",
//!     "templateConfig": { "sm": [], "md": [], "lg": [], "xl": [] }
//!   }
//! ]
//! ```

use anyhow::{Context, Result};
use std::path::Path;

use crate::domain::entities::{BaseDashboardTemplate, BaseTemplateRegistry};

/// Parses a registry from JSON text.
///
/// # Errors
///
/// Returns an error if the JSON is malformed, names an unknown category,
/// or does not hold exactly one template per category.
pub fn parse(json: &str) -> Result<BaseTemplateRegistry> {
    let templates: Vec<BaseDashboardTemplate> =
        serde_json::from_str(json).context("Invalid base template JSON")?;

    Ok(BaseTemplateRegistry::from_templates(templates)?)
}

/// Reads and parses a registry from `path`.
pub fn load_from_file(path: impl AsRef<Path>) -> Result<BaseTemplateRegistry> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read base templates from {}", path.display()))?;

    let registry = parse(&json)
        .with_context(|| format!("Failed to load base templates from {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        count = registry.all().len(),
        "Loaded base templates"
    );

    Ok(registry)
}
