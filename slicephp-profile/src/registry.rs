//! Profile registry and activation.
//!
//! A [`ProfileRegistry`] owns every created profile and records which one,
//! if any, has been activated. Profiles are created during initialization,
//! read-only afterwards, and at most one is ever activated.

use crate::descriptor::{self, ProfileRequest};
use crate::error::ProfileError;
use crate::host::HostRuntime;
use crate::profile::Profile;
use crate::properties::Properties;
use crate::settings::RuntimeSettings;
use crate::split::split_args;
use slicephp_ast::{IdlParser, JsonUnitParser, SliceArgs, Unit, UnitOptions, parse_slice};
use slicephp_codegen::{CORE_TYPES, CodegenOptions, GeneratedCode, Generator};
use std::collections::BTreeMap;
use std::fmt::Write;
use std::path::Path;

/// Name of the profile configured by the runtime settings.
pub const DEFAULT_PROFILE_NAME: &str = "__default__";

/// Host label of the builtin runtime classes.
pub const CORE_LABEL: &str = "__core";

/// Host label of a profile's generated source.
pub const SLICE_LABEL: &str = "__slice";

/// Builder for configuring and creating a registry.
pub struct RegistryBuilder {
    parser: Option<Box<dyn IdlParser>>,
    codegen: CodegenOptions,
}

impl RegistryBuilder {
    /// Creates a builder with the JSON parser and platform defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            parser: None,
            codegen: CodegenOptions::default(),
        }
    }

    /// Sets the IDL parser.
    #[must_use]
    pub fn parser(mut self, parser: impl IdlParser + 'static) -> Self {
        self.parser = Some(Box::new(parser));
        self
    }

    /// Sets the code generation options.
    #[must_use]
    pub fn codegen_options(mut self, options: CodegenOptions) -> Self {
        self.codegen = options;
        self
    }

    /// Sets the width of the host's native integer.
    #[must_use]
    pub fn native_int_bits(mut self, bits: u32) -> Self {
        self.codegen.native_int_bits = bits;
        self
    }

    /// Builds an empty registry.
    #[must_use]
    pub fn build(self) -> ProfileRegistry {
        ProfileRegistry {
            parser: self
                .parser
                .unwrap_or_else(|| Box::new(JsonUnitParser::new())),
            codegen: self.codegen,
            profiles: BTreeMap::new(),
            active: None,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
struct ActiveProfile {
    name: String,
    properties: Properties,
}

/// Outcome of [`ProfileRegistry::teardown`].
#[derive(Debug, Default)]
pub struct TeardownReport {
    /// Names of profiles whose unit was released.
    pub released: Vec<String>,
    /// Profiles whose release failed, with the error message.
    pub failures: Vec<(String, String)>,
}

impl TeardownReport {
    /// Returns true if every profile was released.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Registry of named profiles.
pub struct ProfileRegistry {
    parser: Box<dyn IdlParser>,
    codegen: CodegenOptions,
    profiles: BTreeMap<String, Profile>,
    active: Option<ActiveProfile>,
}

impl ProfileRegistry {
    /// Creates a registry with default settings.
    #[must_use]
    pub fn new() -> Self {
        RegistryBuilder::new().build()
    }

    /// Returns a builder for configuring a registry.
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Creates the default profile from `settings`, then every profile the
    /// descriptor file names.
    ///
    /// # Errors
    /// Returns the first creation or descriptor error.
    pub fn initialize(&mut self, settings: &RuntimeSettings) -> Result<(), ProfileError> {
        self.create(
            DEFAULT_PROFILE_NAME,
            &settings.config,
            &settings.options,
            &settings.slice,
        )?;

        if let Some(profiles) = &settings.profiles {
            self.load_descriptor(profiles)?;
        }
        Ok(())
    }

    /// Creates a profile and stores it under `name`.
    ///
    /// `config` names a configuration file, `options` holds command-line
    /// style property overrides and `slice` the IDL file arguments. Each may
    /// be empty. Nothing is registered unless every step succeeds.
    ///
    /// # Errors
    /// Returns `ProfileError::DuplicateProfile` if the name is taken, or the
    /// first configuration, parse or generation error.
    pub fn create(
        &mut self,
        name: &str,
        config: &str,
        options: &str,
        slice: &str,
    ) -> Result<&Profile, ProfileError> {
        if name.is_empty() {
            return Err(ProfileError::invalid_argument("profile name is empty"));
        }
        if self.profiles.contains_key(name) {
            return Err(ProfileError::DuplicateProfile {
                name: name.to_string(),
            });
        }

        let mut properties = Properties::new();
        if !config.is_empty() {
            properties
                .load(config)
                .map_err(|source| ProfileError::ConfigLoad {
                    path: config.into(),
                    source,
                })?;
        }

        if !options.is_empty() {
            let args = split_args(options)?;
            let ignored = properties.parse_command_line_options("", &args);
            if !ignored.is_empty() {
                tracing::debug!("profile {}: ignoring options {:?}", name, ignored);
            }
        }

        let mut unit = if slice.is_empty() {
            Unit::new(UnitOptions::default())
        } else {
            let args = SliceArgs::parse(&split_args(slice)?)?;
            parse_slice(&*self.parser, &args)?
        };

        let generated = match self.generate(&mut unit) {
            Ok(generated) => generated,
            Err(err) => {
                self.release_unit(name, unit);
                return Err(err);
            }
        };

        tracing::info!(
            "created profile {} ({} classes, {} warnings)",
            name,
            generated.classes.len(),
            generated.warnings.len()
        );

        let profile = Profile::new(name, unit, generated, properties);
        Ok(self.profiles.entry(name.to_string()).or_insert(profile))
    }

    /// Creates a profile from a descriptor entry.
    ///
    /// # Errors
    /// See [`ProfileRegistry::create`].
    pub fn create_from_request(
        &mut self,
        request: &ProfileRequest,
    ) -> Result<&Profile, ProfileError> {
        self.create(
            &request.name,
            &request.config,
            &request.options,
            &request.slice,
        )
    }

    /// Creates every profile declared in a descriptor file.
    ///
    /// The whole file is parsed before any profile is created. Returns the
    /// number of profiles created.
    ///
    /// # Errors
    /// Returns the descriptor error, or the first creation error.
    pub fn load_descriptor(&mut self, path: impl AsRef<Path>) -> Result<usize, ProfileError> {
        let requests = descriptor::load_descriptor(path)?;
        self.create_all(&requests)
    }

    /// Creates every profile declared in descriptor text.
    ///
    /// # Errors
    /// Returns the descriptor error, or the first creation error.
    pub fn load_descriptor_str(
        &mut self,
        text: &str,
        source_name: &str,
    ) -> Result<usize, ProfileError> {
        let requests = descriptor::parse_descriptor(text, source_name)?;
        self.create_all(&requests)
    }

    fn create_all(&mut self, requests: &[ProfileRequest]) -> Result<usize, ProfileError> {
        for request in requests {
            self.create_from_request(request)?;
        }
        Ok(requests.len())
    }

    fn generate(&self, unit: &mut Unit) -> Result<GeneratedCode, ProfileError> {
        if unit.ensure_identity()? {
            tracing::debug!("synthesized ::Ice::Identity");
        }
        Ok(Generator::new(unit).with_options(self.codegen).generate()?)
    }

    fn release_unit(&self, name: &str, unit: Unit) {
        if let Err(err) = self.parser.release(unit) {
            tracing::error!("profile {}: {}", name, err);
        }
    }

    /// Activates a profile.
    ///
    /// An empty `name` selects [`DEFAULT_PROFILE_NAME`]. The builtin classes
    /// and then the profile's source are compiled by `host`. The active
    /// properties are the profile's properties overridden by `extra_args`.
    ///
    /// # Errors
    /// Returns `ProfileError::AlreadyActive` if a profile was already
    /// activated, `ProfileError::ProfileNotFound` for an unknown name, and
    /// `ProfileError::HostCompile` if the host rejects either block. On
    /// error no profile becomes active.
    pub fn activate<H, S>(
        &mut self,
        name: &str,
        extra_args: &[S],
        host: &mut H,
    ) -> Result<&Profile, ProfileError>
    where
        H: HostRuntime + ?Sized,
        S: AsRef<str>,
    {
        if let Some(active) = &self.active {
            return Err(ProfileError::AlreadyActive {
                name: active.name.clone(),
            });
        }

        let name = if name.is_empty() {
            DEFAULT_PROFILE_NAME
        } else {
            name
        };
        let profile = self
            .profiles
            .get(name)
            .ok_or_else(|| ProfileError::ProfileNotFound {
                name: name.to_string(),
            })?;

        Self::compile(host, CORE_TYPES, CORE_LABEL)?;
        Self::compile(host, profile.code(), SLICE_LABEL)?;

        let mut properties = Properties::new();
        properties.parse_command_line_options("", &profile.properties().get_command_line_options());
        properties.parse_command_line_options("", extra_args);
        tracing::debug!("profile {}: {} active properties", name, properties.len());

        tracing::info!("activated profile {}", name);
        self.active = Some(ActiveProfile {
            name: name.to_string(),
            properties,
        });
        Ok(profile)
    }

    fn compile<H>(host: &mut H, code: &str, label: &str) -> Result<(), ProfileError>
    where
        H: HostRuntime + ?Sized,
    {
        host.eval(code, label)
            .map_err(|source| ProfileError::HostCompile {
                label: label.to_string(),
                code: code.to_string(),
                source,
            })
    }

    /// Returns a profile by name.
    #[must_use]
    pub fn profile(&self, name: &str) -> Option<&Profile> {
        self.profiles.get(name)
    }

    /// Iterates over all profiles in name order.
    pub fn profiles(&self) -> impl Iterator<Item = &Profile> {
        self.profiles.values()
    }

    /// Returns the number of profiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Returns true if no profile has been created.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Returns the active profile.
    #[must_use]
    pub fn active_profile(&self) -> Option<&Profile> {
        self.active
            .as_ref()
            .and_then(|active| self.profiles.get(&active.name))
    }

    /// Returns the properties of the active profile.
    #[must_use]
    pub fn active_properties(&self) -> Option<&Properties> {
        self.active.as_ref().map(|active| &active.properties)
    }

    /// Describes the active profile: its name, properties and source.
    ///
    /// # Errors
    /// Returns `ProfileError::NoActiveProfile` if nothing is active.
    pub fn dump(&self) -> Result<String, ProfileError> {
        let active = self.active.as_ref().ok_or(ProfileError::NoActiveProfile)?;
        let code = self
            .profiles
            .get(&active.name)
            .map(Profile::code)
            .unwrap_or_default();

        let mut out = String::new();
        let _ = writeln!(out, "Profile: {}", active.name);

        if active.properties.is_empty() {
            out.push_str("\nProperties: <none>\n");
        } else {
            out.push_str("\nProperties:\n\n");
            for (key, value) in active.properties.iter() {
                let _ = writeln!(out, "{key}={value}");
            }
        }

        if code.is_empty() {
            out.push_str("\nPHP code for Slice types: <none>\n");
        } else {
            out.push_str("\nPHP code for Slice types:\n\n");
            out.push_str(code);
        }

        Ok(out)
    }

    /// Releases every profile's unit through the parser.
    ///
    /// Release failures are logged and reported; the remaining profiles
    /// are still released.
    #[must_use]
    pub fn teardown(self) -> TeardownReport {
        let mut report = TeardownReport::default();
        for (name, profile) in self.profiles {
            let unit = profile.into_unit();
            match self.parser.release(unit) {
                Ok(()) => report.released.push(name),
                Err(err) => {
                    tracing::error!("profile {}: {}", name, err);
                    report.failures.push((name, err.to_string()));
                }
            }
        }
        report
    }
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        Self::new()
    }
}
