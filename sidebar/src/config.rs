use serde::{Deserialize, Serialize};

use crate::{MOBILE_BREAKPOINT, PromptRequest, RouteSection, default_sections};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid sidebar json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("mobile breakpoint must be greater than zero")]
    InvalidBreakpoint,
    #[error("route section with an empty title")]
    EmptySectionTitle,
    #[error("section {section:?} has an empty route prefix")]
    EmptyRoutePrefix { section: String },
}

/// Tunables for the sidebar. Every field falls back to the dashboard's
/// standard value when missing from the JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SidebarConfig {
    pub mobile_breakpoint: u32,
    pub sections: Vec<RouteSection>,
    pub logout_prompt: PromptRequest,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: MOBILE_BREAKPOINT,
            sections: default_sections(),
            logout_prompt: PromptRequest::logout(),
        }
    }
}

impl SidebarConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mobile_breakpoint == 0 {
            return Err(ConfigError::InvalidBreakpoint);
        }
        for section in &self.sections {
            if section.section_title.is_empty() {
                return Err(ConfigError::EmptySectionTitle);
            }
            // An empty prefix would only ever match the bare root.
            if section.route_prefixes.iter().any(String::is_empty) {
                return Err(ConfigError::EmptyRoutePrefix {
                    section: section.section_title.clone(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_is_default() {
        let config = SidebarConfig::from_json("{}").unwrap();
        assert_eq!(config, SidebarConfig::default());
        assert_eq!(config.mobile_breakpoint, 992);
        assert_eq!(config.logout_prompt.title, "Logout");
        assert_eq!(config.logout_prompt.message, "Do you really want to logout");
    }

    #[test]
    fn test_partial_override() {
        let config = SidebarConfig::from_json(
            r#"{
                "mobileBreakpoint": 768,
                "sections": [
                    { "sectionTitle": "Settings", "routePrefixes": ["profile"] }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(config.mobile_breakpoint, 768);
        assert_eq!(config.sections.len(), 1);
        assert_eq!(config.logout_prompt, PromptRequest::logout());
    }

    #[test]
    fn test_validation() {
        assert!(matches!(
            SidebarConfig::from_json(r#"{ "mobileBreakpoint": 0 }"#),
            Err(ConfigError::InvalidBreakpoint)
        ));
        assert!(matches!(
            SidebarConfig::from_json(
                r#"{ "sections": [{ "sectionTitle": "", "routePrefixes": [] }] }"#
            ),
            Err(ConfigError::EmptySectionTitle)
        ));
        assert!(matches!(
            SidebarConfig::from_json(
                r#"{ "sections": [{ "sectionTitle": "A", "routePrefixes": [""] }] }"#
            ),
            Err(ConfigError::EmptyRoutePrefix { .. })
        ));
        assert!(matches!(
            SidebarConfig::from_json("not json"),
            Err(ConfigError::Json(_))
        ));
    }
}
