//! Error types for the profile lifecycle.

use crate::descriptor::DescriptorError;
use crate::host::HostError;
use crate::properties::PropertiesError;
use crate::split::SplitError;
use slicephp_ast::ParseError;
use slicephp_codegen::CodegenError;
use std::path::PathBuf;
use thiserror::Error;

/// Broad category of a [`ProfileError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed descriptor, duplicate profile, bad configuration.
    Configuration,
    /// IDL could not be parsed or turned into code.
    Parse,
    /// Activation refused or failed in the host.
    Activation,
    /// Invalid argument at a public entry point.
    Argument,
}

/// Error type for profile operations.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// Invalid argument.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Error message.
        message: String,
    },

    /// A profile with this name already exists.
    #[error("duplicate profile `{name}'")]
    DuplicateProfile {
        /// Profile name.
        name: String,
    },

    /// Configuration file load failure.
    #[error("unable to load configuration file {}: {source}", path.display())]
    ConfigLoad {
        /// Configuration file.
        path: PathBuf,
        /// Underlying error.
        source: PropertiesError,
    },

    /// Malformed option or slice argument string.
    #[error("invalid argument string: {0}")]
    Options(#[from] SplitError),

    /// Malformed profile descriptor.
    #[error(transparent)]
    Descriptor(#[from] DescriptorError),

    /// IDL parse failure.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Code generation failure.
    #[error("code generation failed: {0}")]
    Codegen(#[from] CodegenError),

    /// No profile with this name.
    #[error("profile `{name}' not found")]
    ProfileNotFound {
        /// Profile name.
        name: String,
    },

    /// A profile is already active.
    #[error("profile `{name}' is already active")]
    AlreadyActive {
        /// Name of the active profile.
        name: String,
    },

    /// The host runtime rejected a block of source.
    #[error("unable to compile {label} code: {source}\ncode:\n{code}")]
    HostCompile {
        /// Block label.
        label: String,
        /// The rejected source.
        code: String,
        /// Host diagnostic.
        source: HostError,
    },

    /// An operation needs an active profile.
    #[error("no profile has been activated")]
    NoActiveProfile,
}

impl ProfileError {
    /// Creates an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Returns the category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument { .. } => ErrorKind::Argument,
            Self::DuplicateProfile { .. }
            | Self::ConfigLoad { .. }
            | Self::Options(_)
            | Self::Descriptor(_) => ErrorKind::Configuration,
            Self::Parse(err) if err.is_argument_error() => ErrorKind::Configuration,
            Self::Parse(_) | Self::Codegen(_) => ErrorKind::Parse,
            Self::ProfileNotFound { .. }
            | Self::AlreadyActive { .. }
            | Self::HostCompile { .. }
            | Self::NoActiveProfile => ErrorKind::Activation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(
            ProfileError::invalid_argument("name").kind(),
            ErrorKind::Argument
        );
        assert_eq!(
            ProfileError::DuplicateProfile { name: "a".into() }.kind(),
            ErrorKind::Configuration
        );
        assert_eq!(
            ProfileError::from(ParseError::NoFiles).kind(),
            ErrorKind::Configuration
        );
        assert_eq!(
            ProfileError::from(ParseError::syntax("a.ice", "bad")).kind(),
            ErrorKind::Parse
        );
        assert_eq!(ProfileError::NoActiveProfile.kind(), ErrorKind::Activation);
    }

    #[test]
    fn test_host_compile_echoes_code() {
        let err = ProfileError::HostCompile {
            label: "__slice".into(),
            code: "class Broken {".into(),
            source: HostError::new("unexpected end of file"),
        };
        let message = err.to_string();
        assert!(message.contains("__slice"));
        assert!(message.contains("class Broken {"));
        assert!(message.contains("unexpected end of file"));
    }
}
