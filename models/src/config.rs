use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};
use shared_constants::{DEFAULT_MIN_SCROLL, MODULE_ID};
use std::str::FromStr;
use thiserror::Error;

/// Module configuration of the back to top link.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct BackToTopConfig {
    /// Pixels of scroll before the link is shown. `0` means one viewport height.
    #[serde(default)]
    pub scroll: u32,
}

impl Default for BackToTopConfig {
    fn default() -> Self {
        Self {
            scroll: DEFAULT_MIN_SCROLL,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {module}: {reason}")]
    Invalid { module: String, reason: String },
    #[error("Configuration lookup failed for {module}: {reason}")]
    Lookup { module: String, reason: String },
}

/// A key-value lookup of module configuration by module identifier.
pub trait ConfigSource {
    /// Returns the configuration registered for `module_id`.
    ///
    /// # Errors
    /// Returns an error if the lookup fails or the registered value does not
    /// deserialize into `T`.
    fn module_config<T>(&self, module_id: &str) -> Result<Option<T>, ConfigError>
    where
        T: DeserializeOwned;
}

/// Configuration held in a JSON object keyed by module identifier.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JsonConfig(Map<String, Value>);

impl FromStr for JsonConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match serde_json::from_str::<Value>(s) {
            Ok(Value::Object(modules)) => Ok(Self(modules)),
            Ok(other) => Err(ConfigError::Lookup {
                module: "*".into(),
                reason: format!("expected an object of modules, got {other}"),
            }),
            Err(err) => Err(ConfigError::Lookup {
                module: "*".into(),
                reason: err.to_string(),
            }),
        }
    }
}

impl ConfigSource for JsonConfig {
    fn module_config<T>(&self, module_id: &str) -> Result<Option<T>, ConfigError>
    where
        T: DeserializeOwned,
    {
        match self.0.get(module_id) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => T::deserialize(value)
                .map(Some)
                .map_err(|err| ConfigError::Invalid {
                    module: module_id.into(),
                    reason: err.to_string(),
                }),
        }
    }
}

/// Resolves the back to top configuration, falling back to the defaults when
/// nothing usable is registered.
pub fn resolve(source: &impl ConfigSource) -> BackToTopConfig {
    match source.module_config::<BackToTopConfig>(MODULE_ID) {
        Ok(Some(config)) => {
            log::debug!("Resolved {MODULE_ID} configuration: {config:?}");
            config
        }
        Ok(None) => BackToTopConfig::default(),
        Err(err) => {
            log::warn!("Using default {MODULE_ID} configuration: {err}");
            BackToTopConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_means_one_viewport() {
        assert_eq!(BackToTopConfig::default().scroll, 0);
    }

    #[test]
    fn test_resolve_registered_config() {
        let source: JsonConfig = r#"{"wc/ui/backToTop": {"scroll": 250}}"#.parse().unwrap();
        assert_eq!(resolve(&source), BackToTopConfig { scroll: 250 });
    }

    #[test]
    fn test_missing_scroll_field_defaults() {
        let source: JsonConfig = r#"{"wc/ui/backToTop": {}}"#.parse().unwrap();
        assert_eq!(resolve(&source), BackToTopConfig::default());
    }

    #[test]
    fn test_unregistered_module_uses_default() {
        let source: JsonConfig = r#"{"wc/ui/other": {"scroll": 10}}"#.parse().unwrap();
        assert_eq!(resolve(&source), BackToTopConfig::default());

        let source: JsonConfig = r#"{"wc/ui/backToTop": null}"#.parse().unwrap();
        assert_eq!(resolve(&source), BackToTopConfig::default());
    }

    #[test]
    fn test_invalid_config_is_reported_and_defaulted() {
        let source: JsonConfig = r#"{"wc/ui/backToTop": {"scroll": -5}}"#.parse().unwrap();
        let err = source
            .module_config::<BackToTopConfig>(MODULE_ID)
            .expect_err("negative scroll should not deserialize");
        assert!(matches!(err, ConfigError::Invalid { ref module, .. } if module == MODULE_ID));
        assert_eq!(resolve(&source), BackToTopConfig::default());
    }

    #[test]
    fn test_non_object_document_is_rejected() {
        assert!("[1, 2]".parse::<JsonConfig>().is_err());
        assert!("not json".parse::<JsonConfig>().is_err());
    }
}
