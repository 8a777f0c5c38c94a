//! Property store.
//!
//! Properties are `key=value` pairs loaded from configuration files and
//! overridden by command-line style options such as `--Ice.Trace.Network=1`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for property operations.
#[derive(Debug, Error)]
pub enum PropertiesError {
    /// Configuration file could not be read.
    #[error("cannot open configuration file {}: {source}", path.display())]
    Io {
        /// File being loaded.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
}

/// An ordered set of properties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    properties: BTreeMap<String, String>,
}

impl Properties {
    /// Creates an empty property set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of a property.
    #[must_use]
    pub fn get_property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// Returns the value of a property, or `default` if it is not set.
    #[must_use]
    pub fn get_property_with_default<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get_property(key).unwrap_or(default)
    }

    /// Sets a property; an empty value removes it.
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if value.is_empty() {
            self.properties.remove(&key);
        } else {
            self.properties.insert(key, value);
        }
    }

    /// Returns all properties whose key starts with `prefix`, in key order.
    #[must_use]
    pub fn get_properties_for_prefix(&self, prefix: &str) -> BTreeMap<String, String> {
        self.properties
            .range(prefix.to_string()..)
            .take_while(|(key, _)| key.starts_with(prefix))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Returns every property as a `--key=value` argument.
    #[must_use]
    pub fn get_command_line_options(&self) -> Vec<String> {
        self.properties
            .iter()
            .map(|(k, v)| format!("--{k}={v}"))
            .collect()
    }

    /// Applies `--prefix.key=value` arguments and returns the others.
    ///
    /// An empty prefix matches every `--` argument. An argument without `=`
    /// sets its property to `1`.
    pub fn parse_command_line_options<S: AsRef<str>>(
        &mut self,
        prefix: &str,
        args: &[S],
    ) -> Vec<String> {
        let pattern = if prefix.is_empty() {
            "--".to_string()
        } else {
            format!("--{prefix}.")
        };

        let mut remaining = Vec::new();
        for arg in args {
            let arg = arg.as_ref();
            if arg.starts_with(&pattern) {
                let line = &arg[2..];
                if line.contains('=') {
                    self.parse_line(line);
                } else {
                    self.parse_line(&format!("{line}=1"));
                }
            } else {
                remaining.push(arg.to_string());
            }
        }
        remaining
    }

    /// Loads properties from a configuration file.
    ///
    /// # Errors
    /// Returns `PropertiesError::Io` if the file cannot be read.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(), PropertiesError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| PropertiesError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        for line in text.lines() {
            self.parse_line(line);
        }
        tracing::debug!("loaded properties from {}", path.display());
        Ok(())
    }

    /// Parses one `key = value` line; `#` starts a comment.
    fn parse_line(&mut self, line: &str) {
        let line = match line.find('#') {
            Some(comment) => &line[..comment],
            None => line,
        };
        let Some((key, value)) = line.split_once('=') else {
            return;
        };
        let key = key.trim();
        if key.is_empty() {
            return;
        }
        self.set_property(key, value.trim());
    }

    /// Returns the number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns true if no properties are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterates over all properties in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
