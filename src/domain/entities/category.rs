//! Dashboard categories a template can belong to.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// The dashboard a template belongs to.
///
/// Serialized with the same names the frontend uses in `?dashboard=` and in
/// the `category` field of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TemplateCategory {
    #[serde(rename = "landingPage")]
    LandingPage,
}

impl TemplateCategory {
    /// Every known category, in registry order.
    pub const ALL: [TemplateCategory; 1] = [TemplateCategory::LandingPage];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateCategory::LandingPage => "landingPage",
        }
    }
}

impl fmt::Display for TemplateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemplateCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| AppError::validation(format!("invalid dashboard template: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_category() {
        let category: TemplateCategory = "landingPage".parse().unwrap();
        assert_eq!(category, TemplateCategory::LandingPage);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("landingpage".parse::<TemplateCategory>().is_err());
        assert!("LandingPage".parse::<TemplateCategory>().is_err());
    }

    #[test]
    fn test_parse_unknown_category_message() {
        let err = "nope".parse::<TemplateCategory>().unwrap_err();
        assert_eq!(err.to_string(), "invalid dashboard template: nope");
    }

    #[test]
    fn test_serde_name_matches_as_str() {
        for category in TemplateCategory::ALL {
            let json = serde_json::to_value(category).unwrap();
            assert_eq!(json, serde_json::Value::String(category.to_string()));
        }
    }
}
