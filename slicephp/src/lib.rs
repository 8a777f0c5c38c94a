//! # slicephp
//!
//! Slice IDL to PHP code generation with named runtime profiles.
//!
//! A profile bundles a property set with the PHP source generated from a
//! list of Slice files. Profiles are created once at startup, and one of
//! them is activated by submitting its source to the host runtime.
//!
//! ## Quick Start
//!
//! ```ignore
//! use slicephp::prelude::*;
//!
//! let mut registry = ProfileRegistry::new();
//! registry.initialize(&RuntimeSettings::new().with_slice("-I/opt/slice Hello.json"))?;
//!
//! let mut host = CollectingHost::new();
//! registry.activate("", &["--Ice.Trace.Network=1"], &mut host)?;
//! println!("{}", registry.dump()?);
//! ```
//!
//! ## Crate Organization
//!
//! - [`ast`] - Parse tree, argument handling and the parser contract
//! - [`codegen`] - PHP code generation
//! - [`profile`] - Properties, descriptors, the profile registry

pub mod prelude;

/// Parse tree and parser contract.
pub mod ast {
    pub use slicephp_ast::*;
}

/// PHP code generation.
pub mod codegen {
    pub use slicephp_codegen::*;
}

/// Profile lifecycle.
pub mod profile {
    pub use slicephp_profile::*;
}
