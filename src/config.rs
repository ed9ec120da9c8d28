//! Paginator configuration
//!
//! Initial paginator settings loaded from YAML or JSON. Numeric fields are
//! kept as raw JSON values so that quoted numbers (`page: "3"`) are accepted
//! and anything else is reported when the paginator is built.

use crate::coerce::Coerce;
use crate::error::{Error, Result};
use crate::pagination::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, DEFAULT_WINDOW};
use crate::template::UrlTemplate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Initial settings for a paginator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PaginatorConfig {
    /// Link URL template
    #[serde(default = "default_url")]
    pub url: UrlTemplate,

    /// Initial page
    #[serde(default = "default_page")]
    pub page: Value,

    /// Items per page
    #[serde(default = "default_page_size")]
    pub page_size: Value,

    /// Number of page links
    #[serde(default = "default_window")]
    pub window: Value,
}

fn default_url() -> UrlTemplate {
    UrlTemplate::new("?page=__page__")
}

fn default_page() -> Value {
    Value::from(DEFAULT_PAGE)
}

fn default_page_size() -> Value {
    Value::from(DEFAULT_PAGE_SIZE)
}

fn default_window() -> Value {
    Value::from(DEFAULT_WINDOW)
}

impl Default for PaginatorConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            page: default_page(),
            page_size: default_page_size(),
            window: default_window(),
        }
    }
}

impl PaginatorConfig {
    /// Parse a config from YAML
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a config from JSON
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file; `.json` files are JSON, anything else YAML
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
    }

    /// Check that every numeric field reads as a usable integer
    pub fn validate(&self) -> Result<()> {
        if self.page.coerce().is_none() {
            return Err(Error::invalid_argument("page", self.page.to_string()));
        }

        match self.page_size.coerce() {
            Some(size) if size >= 1 => {}
            _ => {
                return Err(Error::invalid_argument(
                    "page_size",
                    self.page_size.to_string(),
                ))
            }
        }

        match self.window.coerce() {
            Some(window) if window >= 0 => {}
            _ => return Err(Error::invalid_argument("window", self.window.to_string())),
        }

        if self.url.placeholder_count() == 0 {
            tracing::warn!(url = %self.url, "url template has no __page__ placeholder");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = PaginatorConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, PaginatorConfig::default());
        assert_eq!(config.url.as_str(), "?page=__page__");
        assert_eq!(config.page, json!(1));
        assert_eq!(config.page_size, json!(10));
        assert_eq!(config.window, json!(3));
    }

    #[test]
    fn test_from_yaml() {
        let yaml = r#"
url: /articles?page=__page__
page: 4
page_size: "25"
window: 5
"#;
        let config = PaginatorConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.url.as_str(), "/articles?page=__page__");
        assert_eq!(config.page, json!(4));
        assert_eq!(config.page_size, json!("25"));
        assert_eq!(config.window, json!(5));
    }

    #[test]
    fn test_from_json() {
        let config =
            PaginatorConfig::from_json_str(r#"{"url": "/p/__page__", "window": 7}"#).unwrap();
        assert_eq!(config.url.as_str(), "/p/__page__");
        assert_eq!(config.window, json!(7));
        assert_eq!(config.page, json!(1));
    }

    #[test]
    fn test_rejects_unknown_fields() {
        let err = PaginatorConfig::from_yaml_str("per_page: 20").unwrap_err();
        assert!(matches!(err, Error::YamlParse(_)));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let err = PaginatorConfig::from_yaml_str("page: cheese").unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for 'page': \"cheese\"");

        let err = PaginatorConfig::from_yaml_str("page_size: 0").unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { field: "page_size", .. }));

        let err = PaginatorConfig::from_json_str(r#"{"window": -2}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { field: "window", .. }));
    }

    #[test]
    fn test_load_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let json_path = dir.path().join("pager.json");
        let mut file = fs::File::create(&json_path).unwrap();
        write!(file, r#"{{"page_size": 5}}"#).unwrap();
        let config = PaginatorConfig::load(&json_path).unwrap();
        assert_eq!(config.page_size, json!(5));

        let yaml_path = dir.path().join("pager.yaml");
        fs::write(&yaml_path, "page_size: 6\n").unwrap();
        let config = PaginatorConfig::load(&yaml_path).unwrap();
        assert_eq!(config.page_size, json!(6));
    }

    #[test]
    fn test_load_missing_file() {
        let err = PaginatorConfig::load("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert!(err.to_string().contains("/definitely/not/here.yaml"));
    }
}
