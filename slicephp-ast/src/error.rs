//! Error types for Slice parsing and parse tree manipulation.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for parsing operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Slice file could not be located.
    #[error("Slice file not found: {}", path.display())]
    FileNotFound {
        /// Requested path.
        path: PathBuf,
    },

    /// IO error while reading a Slice file.
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// Preprocessing failed.
    #[error("preprocessor failed for {}: {message}", path.display())]
    Preprocessor {
        /// File being preprocessed.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// Syntax or semantic error reported by the parser.
    #[error("{}: {message}", path.display())]
    Syntax {
        /// File being parsed.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// Malformed pre-parsed JSON tree.
    #[error("invalid parse tree in {}: {source}", path.display())]
    Json {
        /// File being parsed.
        path: PathBuf,
        /// Underlying error.
        source: serde_json::Error,
    },

    /// A symbol that must be a module is something else.
    #[error("the symbol `{name}' is defined in Slice but is not a module")]
    NotAModule {
        /// Scoped name of the symbol.
        name: String,
    },

    /// Unrecognized option in a `slice` argument string.
    #[error("unknown option `{option}' in slice arguments")]
    UnknownOption {
        /// The offending option.
        option: String,
    },

    /// A `slice` argument string named no files.
    #[error("no Slice files specified in slice arguments")]
    NoFiles,

    /// Releasing a parse tree failed.
    #[error("error while destroying Slice parse tree: {message}")]
    Release {
        /// Error message.
        message: String,
    },
}

impl ParseError {
    /// Creates a syntax error for the given file.
    pub fn syntax(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Syntax {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a preprocessor error for the given file.
    pub fn preprocessor(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Preprocessor {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a release error.
    pub fn release(message: impl Into<String>) -> Self {
        Self::Release {
            message: message.into(),
        }
    }

    /// Returns true if this error comes from `slice` argument handling
    /// rather than from a parsed file.
    #[must_use]
    pub const fn is_argument_error(&self) -> bool {
        matches!(self, Self::UnknownOption { .. } | Self::NoFiles)
    }
}
