//! DTOs for the dashboard template endpoints.

use serde::Deserialize;
use validator::Validate;

use crate::domain::entities::{TemplateConfig, TemplatePatch};

/// Query string of `GET /` and `GET /base-template`.
///
/// `?dashboard=` with an empty value is the same as no filter. When the
/// parameter repeats, the first occurrence wins.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DashboardQuery {
    pub dashboard: Option<String>,
}

impl DashboardQuery {
    /// Builds the query from decoded `key=value` pairs in request order.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let dashboard = pairs
            .into_iter()
            .find(|(key, _)| key == "dashboard")
            .map(|(_, value)| value)
            .filter(|value| !value.is_empty());

        Self { dashboard }
    }
}

/// Request body for `PATCH /{templateId}`.
///
/// All fields are optional and unknown fields are ignored, so any JSON
/// object is accepted. Only provided fields are changed.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTemplateRequest {
    #[validate(length(min = 1, max = 100, message = "displayName must be 1-100 characters"))]
    pub display_name: Option<String>,

    pub template_config: Option<TemplateConfig>,
}

impl From<UpdateTemplateRequest> for TemplatePatch {
    fn from(request: UpdateTemplateRequest) -> Self {
        TemplatePatch {
            display_name: request.display_name,
            template_config: request.template_config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_dashboard_is_none() {
        let query = DashboardQuery::from_pairs(pairs(&[("dashboard", "")]));
        assert!(query.dashboard.is_none());

        let query = DashboardQuery::from_pairs(vec![]);
        assert!(query.dashboard.is_none());

        let query = DashboardQuery::from_pairs(pairs(&[("other", "x"), ("dashboard", "landingPage")]));
        assert_eq!(query.dashboard.as_deref(), Some("landingPage"));
    }

    #[test]
    fn test_repeated_dashboard_takes_first() {
        let query = DashboardQuery::from_pairs(pairs(&[
            ("dashboard", "landingPage"),
            ("dashboard", "bogus"),
        ]));
        assert_eq!(query.dashboard.as_deref(), Some("landingPage"));

        let query = DashboardQuery::from_pairs(pairs(&[("dashboard", ""), ("dashboard", "bogus")]));
        assert!(query.dashboard.is_none());
    }

    #[test]
    fn test_update_request_ignores_unknown_fields() {
        let request: UpdateTemplateRequest =
            serde_json::from_str(r#"{"category":"landing"}"#).unwrap();

        assert!(request.validate().is_ok());
        assert!(TemplatePatch::from(request).is_empty());
    }

    #[test]
    fn test_update_request_validation() {
        let request: UpdateTemplateRequest = serde_json::from_str(r#"{"displayName":""}"#).unwrap();
        assert!(request.validate().is_err());

        let long = "x".repeat(101);
        let request = UpdateTemplateRequest {
            display_name: Some(long),
            ..Default::default()
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_update_request_into_patch() {
        let request: UpdateTemplateRequest = serde_json::from_str(
            r#"{"displayName":"Mine","templateConfig":{"sm":[{"i":"edge#edge","x":0,"y":0,"w":1,"h":1}]}}"#,
        )
        .unwrap();

        let patch = TemplatePatch::from(request);

        assert_eq!(patch.display_name.as_deref(), Some("Mine"));
        assert_eq!(patch.template_config.unwrap().sm[0].i, "edge#edge");
    }
}
