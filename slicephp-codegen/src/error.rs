//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
///
/// These indicate a parse tree that violates guarantees the parser is
/// expected to give; well-formed input never produces them.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Unknown type reference.
    #[error("unknown {kind} '{name}' referenced by '{context}'")]
    UnknownType {
        /// Expected kind of definition.
        kind: &'static str,
        /// Scoped name of the type.
        name: String,
        /// Scoped name of the referencing definition.
        context: String,
    },

    /// Enum constant naming an enumerator the enum does not have.
    #[error("enum '{enum_name}' has no enumerator '{value}'")]
    UnknownEnumerator {
        /// Scoped enum name.
        enum_name: String,
        /// Enumerator as written.
        value: String,
    },

    /// Constant value that does not parse for its type.
    #[error("invalid value '{value}' for constant '{name}'")]
    InvalidConstant {
        /// Scoped constant name.
        name: String,
        /// Value as written.
        value: String,
    },

    /// Constant of a type that has no literal form.
    #[error("constant '{name}' has unsupported type {type_name}")]
    UnsupportedConstantType {
        /// Scoped constant name.
        name: String,
        /// Description of the type.
        type_name: String,
    },
}

impl CodegenError {
    /// Creates an unknown type error.
    pub fn unknown_type(
        kind: &'static str,
        name: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        Self::UnknownType {
            kind,
            name: name.into(),
            context: context.into(),
        }
    }
}
