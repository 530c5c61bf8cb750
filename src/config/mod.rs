//! Configuration loading and management

use crate::core::error::PageError;
use crate::core::query::{PageRequest, PAGE_SIZES};
use crate::loader::PageLoader;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Application-level settings for the dashboard's list views
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Page size used when a section is first opened
    pub default_page_size: usize,

    /// Cosmetic delay before newly paginated results are displayed
    pub page_delay_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            page_delay_ms: 300,
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configured page size is one the UI offers
    pub fn validate(&self) -> Result<(), PageError> {
        if !PAGE_SIZES.contains(&self.default_page_size) {
            return Err(PageError::UnsupportedPageSize(self.default_page_size));
        }
        Ok(())
    }

    /// The first page at the configured default size
    pub fn initial_page(&self) -> Result<PageRequest, PageError> {
        PageRequest::first(self.default_page_size)
    }

    /// A page loader honoring the configured display delay
    pub fn page_loader(&self) -> PageLoader {
        PageLoader::new(Duration::from_millis(self.page_delay_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.default_page_size, 10);
        assert_eq!(config.page_delay_ms, 300);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = AppConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();

        let parsed = AppConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(parsed.default_page_size, config.default_page_size);
        assert_eq!(parsed.page_delay_ms, config.page_delay_ms);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let parsed = AppConfig::from_yaml_str("default_page_size: 50\n").unwrap();
        assert_eq!(parsed.default_page_size, 50);
        assert_eq!(parsed.page_delay_ms, 300);
    }

    #[test]
    fn test_unsupported_page_size_rejected() {
        let err = AppConfig::from_yaml_str("default_page_size: 25\n").unwrap_err();
        assert!(err.to_string().contains("25"));
    }

    #[test]
    fn test_initial_page() {
        let request = AppConfig::default().initial_page().unwrap();
        assert_eq!(request.page(), 1);
        assert_eq!(request.page_size(), 10);
    }
}
