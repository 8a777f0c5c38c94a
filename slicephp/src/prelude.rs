//! Prelude module for convenient imports.
//!
//! ```ignore
//! use slicephp::prelude::*;
//! ```

// Parse tree
pub use slicephp_ast::{
    Definition, IdlParser, JsonUnitParser, ParseError, PreprocessorOptions, ScopedName, Unit,
    UnitOptions,
};

// Code generation
pub use slicephp_codegen::{
    CodegenError, CodegenOptions, GeneratedCode, GenerationWarning, Generator,
};

// Profiles
pub use slicephp_profile::{
    CollectingHost, ErrorKind, HostError, HostRuntime, Profile, ProfileError, ProfileRegistry,
    Properties, RegistryBuilder, RuntimeSettings,
};
