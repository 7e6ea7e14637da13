use crate::error::{FlowReportError, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// How a step was captured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GatherMode {
    /// Full page load
    Navigation,
    /// Interactions recorded over a period of time
    Timespan,
    /// Point-in-time capture of the current page state
    Snapshot,
    /// Any mode this report does not know how to label
    #[serde(other)]
    Unknown,
}

impl GatherMode {
    /// Name shown in sequence labels, `None` for unknown modes
    pub fn display_name(&self) -> Option<&'static str> {
        match self {
            Self::Navigation => Some("Navigation"),
            Self::Timespan => Some("Timespan"),
            Self::Snapshot => Some("Snapshot"),
            Self::Unknown => None,
        }
    }

    /// Lowercase identifier used for styling hooks
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Navigation => "navigation",
            Self::Timespan => "timespan",
            Self::Snapshot => "snapshot",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for GatherMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scored report category such as performance or seo
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Category {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// Score in `[0, 1]`, absent when the category could not be scored
    #[serde(default)]
    pub score: Option<f64>,
}

/// Emulated screen dimensions
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ScreenEmulation {
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
}

/// Settings the step was captured with, kept for display only
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigSettings {
    #[serde(default)]
    pub form_factor: Option<String>,
    #[serde(default)]
    pub screen_emulation: ScreenEmulation,
    #[serde(default)]
    pub emulated_user_agent: Option<String>,
    #[serde(default)]
    pub channel: Option<String>,
}

/// One captured measurement in a flow
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub gather_mode: GatherMode,
    /// Capture time, also the stable identity of the step
    pub fetch_time: DateTime<Utc>,
    #[serde(alias = "url")]
    pub final_url: String,
    /// Categories in the order the report listed them
    #[serde(default, with = "category_map")]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub config_settings: ConfigSettings,
}

impl Step {
    /// Stable identity key derived from the capture time
    pub fn key(&self) -> String {
        self.fetch_time.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Look up a category by id
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }
}

/// Ordered sequence of steps making up one user flow
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FlowResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Steps in capture order
    #[serde(rename = "lhrs")]
    pub steps: Vec<Step>,
}

impl FlowResult {
    /// Create a flow from its steps, rejecting an empty list
    pub fn new(steps: Vec<Step>) -> Result<Self> {
        let flow = Self { name: None, steps };
        flow.validate()?;
        Ok(flow)
    }

    /// Parse a flow from its JSON representation
    pub fn from_json_str(json: &str) -> Result<Self> {
        let flow: FlowResult = serde_json::from_str(json)?;
        flow.validate()?;
        Ok(flow)
    }

    /// Load a flow from a JSON file on disk
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(FlowReportError::FlowNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path)?;
        let flow = Self::from_json_str(&content)?;
        log::debug!("Loaded flow with {} steps from {}", flow.len(), path.display());
        Ok(flow)
    }

    /// Check the flow invariants
    pub fn validate(&self) -> Result<()> {
        if self.steps.is_empty() {
            return Err(FlowReportError::EmptyFlow);
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn first(&self) -> Option<&Step> {
        self.steps.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }
}

/// Categories are keyed by id in JSON; the key order is kept
mod category_map {
    use super::Category;
    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserializer, Serializer};
    use std::fmt;

    pub fn serialize<S: Serializer>(
        categories: &[Category],
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(categories.len()))?;
        for category in categories {
            map.serialize_entry(&category.id, category)?;
        }
        map.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Vec<Category>, D::Error> {
        struct CategoryMapVisitor;

        impl<'de> Visitor<'de> for CategoryMapVisitor {
            type Value = Vec<Category>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of category id to category")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut categories = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, mut category)) = access.next_entry::<String, Category>()? {
                    if category.id.is_empty() {
                        category.id = key;
                    }
                    categories.push(category);
                }
                Ok(categories)
            }
        }

        deserializer.deserialize_map(CategoryMapVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "lhrs": [
            {
                "gatherMode": "navigation",
                "fetchTime": "2021-08-03T18:28:13.296Z",
                "finalUrl": "https://www.mikescerealshack.co/",
                "categories": {
                    "performance": {"id": "performance", "title": "Performance", "score": 0.99},
                    "accessibility": {"id": "accessibility", "title": "Accessibility", "score": 1},
                    "pwa": {"title": "PWA", "score": null}
                },
                "configSettings": {
                    "formFactor": "mobile",
                    "screenEmulation": {"width": 360, "height": 640},
                    "channel": "cli"
                }
            },
            {
                "gatherMode": "recording",
                "fetchTime": "2021-08-03T18:28:31.789Z",
                "url": "https://www.mikescerealshack.co/search"
            }
        ]
    }"#;

    #[test]
    fn test_parse_flow() {
        let flow = FlowResult::from_json_str(SAMPLE).unwrap();

        assert_eq!(flow.len(), 2);
        assert_eq!(flow.steps[0].gather_mode, GatherMode::Navigation);
        assert_eq!(flow.steps[0].final_url, "https://www.mikescerealshack.co/");
        assert_eq!(flow.steps[0].config_settings.screen_emulation.width, 360);
        assert_eq!(flow.steps[0].config_settings.form_factor.as_deref(), Some("mobile"));
        assert_eq!(flow.steps[1].final_url, "https://www.mikescerealshack.co/search");
    }

    #[test]
    fn test_category_order_is_preserved() {
        let flow = FlowResult::from_json_str(SAMPLE).unwrap();
        let ids: Vec<&str> = flow.steps[0].categories.iter().map(|c| c.id.as_str()).collect();

        assert_eq!(ids, vec!["performance", "accessibility", "pwa"]);
        assert_eq!(flow.steps[0].category("pwa").unwrap().score, None);
        assert_eq!(flow.steps[0].category("accessibility").unwrap().score, Some(1.0));
    }

    #[test]
    fn test_unknown_gather_mode() {
        let flow = FlowResult::from_json_str(SAMPLE).unwrap();
        assert_eq!(flow.steps[1].gather_mode, GatherMode::Unknown);
        assert_eq!(flow.steps[1].gather_mode.display_name(), None);
    }

    #[test]
    fn test_empty_flow_rejected() {
        let result = FlowResult::from_json_str(r#"{"lhrs": []}"#);
        assert!(matches!(result, Err(FlowReportError::EmptyFlow)));
        assert!(matches!(FlowResult::new(vec![]), Err(FlowReportError::EmptyFlow)));
    }

    #[test]
    fn test_step_key() {
        let flow = FlowResult::from_json_str(SAMPLE).unwrap();
        assert_eq!(flow.steps[0].key(), "2021-08-03T18:28:13.296Z");
    }
}
