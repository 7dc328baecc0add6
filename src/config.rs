use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde_yaml_ng::{Mapping, Value};

use crate::prelude::*;

/// Keys filled in when a config leaves them out, with their default values.
pub const DEFAULTS: [(&str, &str); 3] = [
    ("service_name", "unknown-service"),
    ("environment", "dev"),
    ("log_level", "INFO"),
];

/// Error type for loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Nothing exists at the given path.
    #[error("Config not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// The file exists but could not be read as UTF-8 text.
    #[error("Failed to read config: {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    /// The content is not valid YAML.
    #[error("Failed to parse YAML: {}: {source}", .path.display())]
    Parse {
        path:   PathBuf,
        source: serde_yaml_ng::Error,
    },

    /// The document is valid YAML but not a key/value mapping.
    #[error("Top-level YAML must be a mapping/object")]
    NotAMapping { path: PathBuf },

    /// The mapping has keys JSON cannot represent.
    #[error("Failed to render config as JSON: {0}")]
    Render(#[from] serde_json::Error),
}

/// A loaded configuration: the document's top-level mapping with the
/// [`DEFAULTS`] applied. Derefs to the underlying YAML mapping.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deref)]
pub struct Config(Mapping);

impl Config {
    /// Parses `text` as a YAML document. `path` is only used in error messages.
    ///
    /// # Errors
    /// `Parse` for malformed YAML (including duplicate keys and merge keys
    /// that do not point at mappings), `NotAMapping` when the top level is a
    /// scalar or a sequence.
    pub fn from_yaml_str(text: &str, path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let parse_error = |source: serde_yaml_ng::Error| ConfigError::Parse {
            path: path.to_owned(),
            source,
        };
        let mut document: Value = serde_yaml_ng::from_str(text).map_err(parse_error)?;
        // `<<: *anchor` merge keys are expanded like any YAML 1.1 loader does
        document.apply_merge().map_err(parse_error)?;

        let mut values = match document {
            Value::Null => Mapping::new(),
            Value::Mapping(values) => values,
            _ => {
                return Err(ConfigError::NotAMapping {
                    path: path.to_owned(),
                });
            }
        };

        for (key, default) in DEFAULTS {
            if !values.contains_key(key) {
                tracing::debug!(key, default, "config key missing, applying default");
                values.insert(Value::from(key), Value::from(default));
            }
        }

        Ok(Self(values))
    }

    /// Returns the value for `key` if it is present and a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn service_name(&self) -> Option<&str> {
        self.get_str("service_name")
    }

    pub fn environment(&self) -> Option<&str> {
        self.get_str("environment")
    }

    pub fn log_level(&self) -> Option<&str> {
        self.get_str("log_level")
    }

    pub fn into_inner(self) -> Mapping {
        self.0
    }

    /// Renders the configuration as JSON, indented by two spaces, with the
    /// keys of every object sorted.
    ///
    /// # Errors
    /// `Render` if a key cannot become a JSON object key (e.g. a `null` key).
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        let json = serde_json::to_value(&self.0)?;
        Ok(serde_json::to_string_pretty(&json)?)
    }
}

/// Reads and normalizes the YAML configuration at `path`.
///
/// # Errors
/// `NotFound` when the file does not exist, `Read` for other I/O failures, and
/// anything [`Config::from_yaml_str`] reports.
pub fn load_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ConfigError::NotFound {
            path: path.to_owned(),
        },
        _ => ConfigError::Read {
            path: path.to_owned(),
            source,
        },
    })?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "loaded config file");
    Config::from_yaml_str(&text, path)
}
