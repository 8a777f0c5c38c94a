//! # slicephp AST
//!
//! Parse tree for Slice interface definitions.
//!
//! This crate provides:
//! - Scoped names and builtin type kinds
//! - The definition tree (modules, classes, exceptions, structs, enums, ...)
//! - The `Unit` root with scoped lookup and `::Ice::Identity` synthesis
//! - The parser contract and a JSON reference parser
//! - Parsing of `slice` argument strings into preprocessor options

pub mod args;
pub mod error;
pub mod parser;
pub mod scoped;
pub mod types;
pub mod unit;

pub use args::{PreprocessorOptions, SliceArgs};
pub use error::ParseError;
pub use parser::{IdlParser, JsonUnitParser, parse_slice};
pub use scoped::ScopedName;
pub use types::{
    BuiltinKind, ClassDecl, ClassDef, ConstDef, DataMember, Definition, DictionaryDef, EnumDef,
    ExceptionDef, Module, Operation, ParamDecl, ParamMode, SequenceDef, StructDef, Type,
};
pub use unit::{BuiltinSet, Unit, UnitOptions};
