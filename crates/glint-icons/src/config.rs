//! Hydrator configuration

use glint_dom::CompoundSelector;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    #[error("{field} must be a single name, got {value:?}")]
    InvalidName { field: &'static str, value: String },
}

/// CSS timing function for the fade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    Ease,
    EaseIn,
    EaseOut,
    #[default]
    EaseInOut,
}

impl Easing {
    /// CSS keyword
    pub fn as_css(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::Ease => "ease",
            Easing::EaseIn => "ease-in",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
        }
    }
}

/// Opacity transition applied to each hydrated image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FadeTransition {
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Default for FadeTransition {
    fn default() -> Self {
        Self {
            duration_ms: 150,
            easing: Easing::EaseInOut,
        }
    }
}

/// `transition` declaration value, e.g. `opacity 150ms ease-in-out`
impl fmt::Display for FadeTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "opacity {}ms {}", self.duration_ms, self.easing.as_css())
    }
}

/// Which elements count as icon placeholders, and how their images fade in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HydratorConfig {
    /// Class that flags a placeholder
    pub marker_class: String,
    /// Attribute holding the image URL
    pub source_attribute: String,
    pub fade: FadeTransition,
}

impl Default for HydratorConfig {
    fn default() -> Self {
        Self {
            marker_class: "icon".to_string(),
            source_attribute: "data-icon".to_string(),
            fade: FadeTransition::default(),
        }
    }
}

impl HydratorConfig {
    /// Parse a (possibly partial) JSON config; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_name("marker_class", &self.marker_class)?;
        check_name("source_attribute", &self.source_attribute)
    }

    /// Selector for candidate placeholders: `.{marker_class}[{source_attribute}]`
    pub fn selector(&self) -> CompoundSelector {
        CompoundSelector::class_with_attr(&self.marker_class, &self.source_attribute)
    }
}

fn check_name(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::EmptyField { field });
    }
    if value.chars().any(|c| c.is_whitespace() || matches!(c, '.' | '#' | '[' | ']' | '=' | '"' | '\'')) {
        return Err(ConfigError::InvalidName { field, value: value.to_string() });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HydratorConfig::default();
        assert_eq!(config.marker_class, "icon");
        assert_eq!(config.source_attribute, "data-icon");
        assert_eq!(config.fade.duration_ms, 150);
        assert_eq!(config.fade.to_string(), "opacity 150ms ease-in-out");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let config = HydratorConfig::from_json(r#"{"fade": {"easing": "linear"}}"#).unwrap();
        assert_eq!(config.marker_class, "icon");
        assert_eq!(config.fade.duration_ms, 150);
        assert_eq!(config.fade.easing, Easing::Linear);
    }

    #[test]
    fn test_full_json() {
        let json = r#"{
            "marker_class": "glyph",
            "source_attribute": "data-src",
            "fade": { "duration_ms": 300, "easing": "ease-out" }
        }"#;
        let config = HydratorConfig::from_json(json).unwrap();
        assert_eq!(config.marker_class, "glyph");
        assert_eq!(config.source_attribute, "data-src");
        assert_eq!(config.fade.to_string(), "opacity 300ms ease-out");
    }

    #[test]
    fn test_rejects_bad_names() {
        let err = HydratorConfig::from_json(r#"{"marker_class": ""}"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyField { field: "marker_class" }));

        let err = HydratorConfig::from_json(r#"{"source_attribute": "data icon"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidName { field: "source_attribute", .. }));

        let err = HydratorConfig::from_json(r#"{"fade": {"easing": "bouncy"}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_selector() {
        let selector = HydratorConfig::default().selector();
        assert_eq!(selector, CompoundSelector::parse(".icon[data-icon]").unwrap());
    }
}
