//! # slicephp Profile
//!
//! Profile lifecycle for generated PHP code.
//!
//! This crate provides:
//! - A property store with file loading and command-line style overrides
//! - Shell-style splitting of option strings
//! - The profile descriptor file loader
//! - The profile registry: creation, single activation, dump and teardown
//! - The host runtime contract generated source is submitted through

pub mod descriptor;
pub mod error;
pub mod host;
pub mod profile;
pub mod properties;
pub mod registry;
pub mod settings;
pub mod split;

pub use descriptor::{DescriptorError, ProfileRequest, load_descriptor, parse_descriptor};
pub use error::{ErrorKind, ProfileError};
pub use host::{CollectingHost, HostError, HostRuntime};
pub use profile::Profile;
pub use properties::{Properties, PropertiesError};
pub use registry::{
    CORE_LABEL, DEFAULT_PROFILE_NAME, ProfileRegistry, RegistryBuilder, SLICE_LABEL,
    TeardownReport,
};
pub use settings::RuntimeSettings;
pub use split::{SplitError, split_args};
