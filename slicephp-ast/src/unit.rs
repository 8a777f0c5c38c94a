//! The parse tree root.

use crate::error::ParseError;
use crate::scoped::ScopedName;
use crate::types::{BuiltinKind, ClassDef, DataMember, Definition, EnumDef, Module, StructDef};

/// Which builtin definitions a unit must make available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuiltinSet {
    /// Builtin types plus whatever is needed to define `::Ice::Identity`.
    #[default]
    Identity,
    /// The full builtin set, used when Slice files are parsed.
    Full,
}

/// Options a unit is created with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UnitOptions {
    /// Whether identifier lookups are case sensitive.
    pub case_sensitive: bool,
    /// Builtin definition mode.
    pub builtins: BuiltinSet,
}

/// Root of a parse tree: the global scope.
#[derive(Debug, Clone, Default)]
pub struct Unit {
    options: UnitOptions,
    definitions: Vec<Definition>,
}

impl Unit {
    /// Creates an empty unit.
    #[must_use]
    pub fn new(options: UnitOptions) -> Self {
        Self {
            options,
            definitions: Vec::new(),
        }
    }

    /// Returns the options the unit was created with.
    #[must_use]
    pub const fn options(&self) -> UnitOptions {
        self.options
    }

    /// Returns the global-scope definitions in declaration order.
    #[must_use]
    pub fn definitions(&self) -> &[Definition] {
        &self.definitions
    }

    /// Appends a global-scope definition.
    pub fn add(&mut self, definition: impl Into<Definition>) {
        self.definitions.push(definition.into());
    }

    /// Appends the definitions of another parsed file.
    pub fn extend(&mut self, definitions: impl IntoIterator<Item = Definition>) {
        self.definitions.extend(definitions);
    }

    /// Returns true if the unit holds no definitions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    fn name_eq(&self, a: &str, b: &str) -> bool {
        if self.options.case_sensitive {
            a == b
        } else {
            a.eq_ignore_ascii_case(b)
        }
    }

    /// Returns every definition with the given scoped name.
    ///
    /// Reopened modules are all searched, so a name may resolve to several
    /// nodes (for example a class declaration and its definition).
    #[must_use]
    pub fn lookup(&self, scoped: &ScopedName) -> Vec<&Definition> {
        let segments: Vec<&str> = scoped.segments().collect();
        let mut found = Vec::new();
        if !segments.is_empty() {
            self.collect(&self.definitions, &segments, &mut found);
        }
        found
    }

    fn collect<'a>(
        &self,
        definitions: &'a [Definition],
        segments: &[&str],
        found: &mut Vec<&'a Definition>,
    ) {
        let (first, rest) = (segments[0], &segments[1..]);
        for definition in definitions {
            if !self.name_eq(definition.name(), first) {
                continue;
            }
            if rest.is_empty() {
                found.push(definition);
            } else if let Definition::Module(module) = definition {
                self.collect(&module.definitions, rest, found);
            }
        }
    }

    /// Looks up a class or interface definition.
    #[must_use]
    pub fn lookup_class_def(&self, scoped: &ScopedName) -> Option<&ClassDef> {
        self.lookup(scoped).into_iter().find_map(|d| match d {
            Definition::ClassDef(def) => Some(def),
            _ => None,
        })
    }

    /// Looks up an enum definition.
    #[must_use]
    pub fn lookup_enum(&self, scoped: &ScopedName) -> Option<&EnumDef> {
        self.lookup(scoped).into_iter().find_map(|d| match d {
            Definition::Enum(def) => Some(def),
            _ => None,
        })
    }

    /// Looks up a struct definition.
    #[must_use]
    pub fn lookup_struct(&self, scoped: &ScopedName) -> Option<&StructDef> {
        self.lookup(scoped).into_iter().find_map(|d| match d {
            Definition::Struct(def) => Some(def),
            _ => None,
        })
    }

    /// Defines `::Ice::Identity` unless a type of that name already exists.
    ///
    /// The struct is added to the first global `Ice` module, which is
    /// created when missing. Returns true if the struct was synthesized.
    ///
    /// # Errors
    /// Returns `ParseError::NotAModule` if `::Ice` names something other
    /// than a module.
    pub fn ensure_identity(&mut self) -> Result<bool, ParseError> {
        let module_name = ScopedName::new("::Ice");
        let identity_name = module_name.child("Identity");
        if self.lookup(&identity_name).iter().any(|d| d.is_type()) {
            return Ok(false);
        }

        let existing = self
            .definitions
            .iter()
            .position(|d| self.name_eq(d.name(), module_name.name()));
        let index = match existing {
            Some(index) => index,
            None => {
                self.definitions.push(Module::new(module_name.clone()).into());
                self.definitions.len() - 1
            }
        };

        let Definition::Module(module) = &mut self.definitions[index] else {
            return Err(ParseError::NotAModule {
                name: module_name.to_string(),
            });
        };

        let identity = StructDef::new(identity_name)
            .with_member(DataMember::new("category", BuiltinKind::String))
            .with_member(DataMember::new("name", BuiltinKind::String));
        module.definitions.push(identity.into());
        tracing::debug!("synthesized ::Ice::Identity");
        Ok(true)
    }
}
