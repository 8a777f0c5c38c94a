//! # slicephp Codegen
//!
//! PHP code generation from Slice parse trees.
//!
//! This crate provides:
//! - Flattening of scoped names into PHP identifiers
//! - Type hint resolution for operation parameters
//! - Constant literal encoding
//! - Class, interface, exception, struct and enum generation
//! - The builtin runtime classes generated code depends on

pub mod core_types;
pub mod error;
pub mod generator;
pub mod names;
pub mod php;

pub use core_types::CORE_TYPES;
pub use error::CodegenError;
pub use generator::{
    ClassIndex, CodegenOptions, GeneratedCode, GenerationWarning, Generator, PLATFORM_LONG_BITS,
};
pub use names::{fix_ident, flatten, lower_case};

use slicephp_ast::Unit;

/// Generates PHP code for every definition of a parse tree.
///
/// # Arguments
/// * `unit` - Parsed Slice definitions
///
/// # Returns
/// Generated source, the class index and any warnings.
///
/// # Errors
/// Returns `CodegenError` if the parse tree references undefined types or
/// holds constants that cannot be encoded.
pub fn generate(unit: &Unit) -> Result<GeneratedCode, CodegenError> {
    Generator::new(unit).generate()
}
