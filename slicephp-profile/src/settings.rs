//! Runtime settings for registry initialization.

use crate::properties::{Properties, PropertiesError};
use std::path::{Path, PathBuf};

/// Key naming the default profile's configuration file.
pub const CONFIG_KEY: &str = "ice.config";
/// Key holding the default profile's command-line style options.
pub const OPTIONS_KEY: &str = "ice.options";
/// Key holding the default profile's IDL argument string.
pub const SLICE_KEY: &str = "ice.slice";
/// Key naming the profile descriptor file.
pub const PROFILES_KEY: &str = "ice.profiles";

/// Settings that seed the default profile and name a descriptor file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeSettings {
    /// Configuration file for the default profile, or empty.
    pub config: String,
    /// Options for the default profile, or empty.
    pub options: String,
    /// IDL arguments for the default profile, or empty.
    pub slice: String,
    /// Descriptor file declaring further profiles.
    pub profiles: Option<PathBuf>,
}

impl RuntimeSettings {
    /// Creates empty settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the default profile's configuration file.
    #[must_use]
    pub fn with_config(mut self, config: impl Into<String>) -> Self {
        self.config = config.into();
        self
    }

    /// Sets the default profile's options.
    #[must_use]
    pub fn with_options(mut self, options: impl Into<String>) -> Self {
        self.options = options.into();
        self
    }

    /// Sets the default profile's IDL arguments.
    #[must_use]
    pub fn with_slice(mut self, slice: impl Into<String>) -> Self {
        self.slice = slice.into();
        self
    }

    /// Sets the descriptor file.
    #[must_use]
    pub fn with_profiles(mut self, profiles: impl Into<PathBuf>) -> Self {
        self.profiles = Some(profiles.into());
        self
    }

    /// Reads settings from the `ice.*` keys of a property set.
    #[must_use]
    pub fn from_properties(properties: &Properties) -> Self {
        let get = |key: &str| properties.get_property(key).unwrap_or_default().to_string();
        Self {
            config: get(CONFIG_KEY),
            options: get(OPTIONS_KEY),
            slice: get(SLICE_KEY),
            profiles: properties.get_property(PROFILES_KEY).map(PathBuf::from),
        }
    }

    /// Reads settings from a properties file.
    ///
    /// # Errors
    /// Returns `PropertiesError` if the file cannot be read.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PropertiesError> {
        let mut properties = Properties::new();
        properties.load(path)?;
        Ok(Self::from_properties(&properties))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builder() {
        let settings = RuntimeSettings::new()
            .with_slice("Hello.ice")
            .with_profiles("/etc/php/profiles.ini");
        assert_eq!(settings.slice, "Hello.ice");
        assert!(settings.config.is_empty());
        assert_eq!(settings.profiles, Some(PathBuf::from("/etc/php/profiles.ini")));
    }

    #[test]
    fn test_load() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "ice.config = /etc/hello.cfg").unwrap();
        writeln!(file, "ice.slice = -I/opt/slice Hello.ice").unwrap();
        writeln!(file, "unrelated = 1").unwrap();

        let settings = RuntimeSettings::load(file.path()).unwrap();
        assert_eq!(settings.config, "/etc/hello.cfg");
        assert_eq!(settings.slice, "-I/opt/slice Hello.ice");
        assert!(settings.options.is_empty());
        assert_eq!(settings.profiles, None);
    }
}
