//! Parse tree traversal.
//!
//! [`Generator`] walks a unit once, top to bottom, and dispatches each node
//! to the matching PHP generator. Modules produce no code of their own;
//! their scoping is already part of every flattened name.

use crate::error::CodegenError;
use crate::names::{flatten, lower_case};
use crate::php::{ClassGenerator, ConstantGenerator, EnumGenerator, is_native_key};
use slicephp_ast::{ClassDecl, Definition, DictionaryDef, ScopedName, Type, Unit};
use std::collections::BTreeMap;
use std::fmt;

/// Width in bits of the platform's C `long`, which bounds the host's native
/// integer.
pub const PLATFORM_LONG_BITS: u32 = std::ffi::c_long::BITS;

/// Code generation options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodegenOptions {
    /// Width of the host's native integer; 64-bit constants outside this
    /// range are emitted as strings.
    pub native_int_bits: u32,
}

impl Default for CodegenOptions {
    fn default() -> Self {
        Self {
            native_int_bits: PLATFORM_LONG_BITS,
        }
    }
}

/// Non-fatal condition found during generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationWarning {
    /// A class or interface was declared but never defined.
    UndefinedClass {
        /// Scoped name.
        scoped: ScopedName,
        /// Declared as interface.
        is_interface: bool,
    },
    /// A dictionary key type has no PHP array equivalent; no code was
    /// generated for it.
    UnsupportedDictionaryKey {
        /// Scoped name of the dictionary.
        scoped: ScopedName,
        /// The key type.
        key: Type,
    },
}

impl fmt::Display for GenerationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedClass {
                scoped,
                is_interface,
            } => {
                let kind = if *is_interface { "interface" } else { "class" };
                write!(f, "{kind} {scoped} declared but not defined")
            }
            Self::UnsupportedDictionaryKey { scoped, .. } => {
                write!(f, "skipping dictionary {scoped} - unsupported key type")
            }
        }
    }
}

/// Case-insensitive index from flattened class names to definitions.
///
/// PHP resolves class names without regard to case, so keys are folded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassIndex {
    classes: BTreeMap<String, ScopedName>,
}

impl ClassIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a class or interface definition.
    pub fn insert(&mut self, scoped: &ScopedName) {
        self.classes.insert(lower_case(&flatten(scoped)), scoped.clone());
    }

    /// Finds the scoped name of a class by its PHP name, in any case.
    #[must_use]
    pub fn get(&self, php_name: &str) -> Option<&ScopedName> {
        self.classes.get(&lower_case(php_name))
    }

    /// Returns the number of indexed classes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Returns true if no classes are indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Iterates over `(folded PHP name, scoped name)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ScopedName)> {
        self.classes.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Output of a generation pass.
#[derive(Debug, Clone, Default)]
pub struct GeneratedCode {
    /// PHP source for every generated type and constant.
    pub source: String,
    /// Index of generated classes and interfaces.
    pub classes: ClassIndex,
    /// Non-fatal conditions encountered.
    pub warnings: Vec<GenerationWarning>,
}

/// Generates PHP code for a whole unit.
pub struct Generator<'a> {
    unit: &'a Unit,
    options: CodegenOptions,
}

impl<'a> Generator<'a> {
    /// Creates a generator with default options.
    #[must_use]
    pub fn new(unit: &'a Unit) -> Self {
        Self {
            unit,
            options: CodegenOptions::default(),
        }
    }

    /// Replaces the generation options.
    #[must_use]
    pub fn with_options(mut self, options: CodegenOptions) -> Self {
        self.options = options;
        self
    }

    /// Runs the generation pass.
    ///
    /// # Errors
    /// Returns `CodegenError` on references the unit cannot resolve and on
    /// constants that cannot be encoded.
    pub fn generate(&self) -> Result<GeneratedCode, CodegenError> {
        let mut output = GeneratedCode::default();
        self.visit(self.unit.definitions(), &mut output)?;
        Ok(output)
    }

    fn visit(
        &self,
        definitions: &[Definition],
        output: &mut GeneratedCode,
    ) -> Result<(), CodegenError> {
        let classes = ClassGenerator::new(self.unit);

        for definition in definitions {
            match definition {
                Definition::Module(module) => self.visit(&module.definitions, output)?,
                Definition::ClassDecl(decl) => self.check_declaration(decl, output),
                Definition::ClassDef(def) => {
                    output.classes.insert(&def.scoped);
                    output.source.push_str(&classes.generate_class_def(def)?);
                }
                Definition::Exception(def) => {
                    output.source.push_str(&classes.generate_exception(def));
                }
                Definition::Struct(def) => {
                    output.source.push_str(&classes.generate_struct(def));
                }
                Definition::Enum(def) => {
                    output.source.push_str(&EnumGenerator::new().generate_enum(def));
                }
                Definition::Const(def) => {
                    let constants =
                        ConstantGenerator::new(self.unit, self.options.native_int_bits);
                    output.source.push_str(&constants.generate_const(def)?);
                }
                Definition::Dictionary(def) => Self::check_dictionary(def, output),
                // Sequences map onto PHP arrays.
                Definition::Sequence(_) => {}
            }
        }

        Ok(())
    }

    fn check_declaration(&self, decl: &ClassDecl, output: &mut GeneratedCode) {
        if self.unit.lookup_class_def(&decl.scoped).is_none() {
            Self::warn(
                output,
                GenerationWarning::UndefinedClass {
                    scoped: decl.scoped.clone(),
                    is_interface: decl.is_interface,
                },
            );
        }
    }

    // Dictionaries with native keys are PHP associative arrays and need no
    // code.
    fn check_dictionary(def: &DictionaryDef, output: &mut GeneratedCode) {
        if !is_native_key(&def.key) {
            Self::warn(
                output,
                GenerationWarning::UnsupportedDictionaryKey {
                    scoped: def.scoped.clone(),
                    key: def.key.clone(),
                },
            );
        }
    }

    fn warn(output: &mut GeneratedCode, warning: GenerationWarning) {
        tracing::warn!("{}", warning);
        output.warnings.push(warning);
    }
}
