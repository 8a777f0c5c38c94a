//! Class, interface, exception and struct code generation.

use crate::core_types::{
    LOCAL_EXCEPTION, LOCAL_OBJECT, LOCAL_OBJECT_IMPL, OBJECT, OBJECT_IMPL, USER_EXCEPTION,
};
use crate::error::CodegenError;
use crate::names::{fix_ident, flatten};
use crate::php::types::type_hint;
use slicephp_ast::{ClassDef, DataMember, ExceptionDef, Operation, ScopedName, StructDef, Unit};

/// Generator for types that map onto PHP classes and interfaces.
pub struct ClassGenerator<'a> {
    unit: &'a Unit,
}

impl<'a> ClassGenerator<'a> {
    /// Creates a new class generator.
    #[must_use]
    pub fn new(unit: &'a Unit) -> Self {
        Self { unit }
    }

    /// Generates a class or interface with its members and operations.
    ///
    /// # Errors
    /// Returns `CodegenError::UnknownType` if a base is not defined.
    pub fn generate_class_def(&self, def: &ClassDef) -> Result<String, CodegenError> {
        let mut output = self.class_header(def)?;
        output.push_str("{\n");
        for member in &def.members {
            output.push_str(&Self::generate_member(member));
        }
        for operation in &def.operations {
            output.push_str(&Self::generate_operation(operation, def.is_interface));
        }
        output.push_str("}\n");
        Ok(output)
    }

    /// Generates the declaration line of a class or interface.
    ///
    /// An interface implements its bases, or the builtin marker matching its
    /// locality when it has none. A class extends its first base when that
    /// base is a class, otherwise the builtin default; remaining bases are
    /// interfaces and go into `implements`.
    ///
    /// # Errors
    /// Returns `CodegenError::UnknownType` if a base is not defined.
    pub fn class_header(&self, def: &ClassDef) -> Result<String, CodegenError> {
        let flat = flatten(&def.scoped);

        if def.is_interface {
            let implements = if def.bases.is_empty() {
                (if def.is_local { LOCAL_OBJECT } else { OBJECT }).to_string()
            } else {
                join_flattened(&def.bases)
            };
            return Ok(format!("interface {flat} implements {implements}\n"));
        }

        let mut bases = def.bases.as_slice();
        let superclass = match bases.split_first() {
            Some((first, rest)) if !self.is_interface(first, def)? => {
                bases = rest;
                flatten(first)
            }
            _ if def.is_local => LOCAL_OBJECT_IMPL.to_string(),
            _ => OBJECT_IMPL.to_string(),
        };

        let mut header = String::new();
        if def.is_abstract {
            header.push_str("abstract ");
        }
        header.push_str(&format!("class {flat} extends {superclass}"));
        if !bases.is_empty() {
            header.push_str(&format!(" implements {}", join_flattened(bases)));
        }
        header.push('\n');
        Ok(header)
    }

    fn is_interface(&self, base: &ScopedName, def: &ClassDef) -> Result<bool, CodegenError> {
        self.unit
            .lookup_class_def(base)
            .map(|base| base.is_interface)
            .ok_or_else(|| {
                CodegenError::unknown_type("class", base.as_str(), def.scoped.as_str())
            })
    }

    /// Generates an exception class.
    #[must_use]
    pub fn generate_exception(&self, def: &ExceptionDef) -> String {
        let superclass = match &def.base {
            Some(base) => flatten(base),
            None if def.is_local => LOCAL_EXCEPTION.to_string(),
            None => USER_EXCEPTION.to_string(),
        };

        let mut output = format!("class {} extends {}\n", flatten(&def.scoped), superclass);
        output.push_str("{\n");
        for member in &def.members {
            output.push_str(&Self::generate_member(member));
        }
        output.push_str("}\n");
        output
    }

    /// Generates a struct as a plain class.
    #[must_use]
    pub fn generate_struct(&self, def: &StructDef) -> String {
        let mut output = format!("class {}\n", flatten(&def.scoped));
        output.push_str("{\n");
        for member in &def.members {
            output.push_str(&Self::generate_member(member));
        }
        output.push_str("}\n");
        output
    }

    /// Generates a data member declaration.
    #[must_use]
    pub fn generate_member(member: &DataMember) -> String {
        format!("    var ${};\n", fix_ident(&member.name))
    }

    /// Generates an operation signature.
    ///
    /// Out parameters are passed by reference and never hinted.
    #[must_use]
    pub fn generate_operation(operation: &Operation, in_interface: bool) -> String {
        let params: Vec<String> = operation
            .params
            .iter()
            .map(|param| {
                let name = fix_ident(&param.name);
                if param.is_out() {
                    format!("&${name}")
                } else if let Some(hint) = type_hint(&param.ty) {
                    format!("{hint} ${name}")
                } else {
                    format!("${name}")
                }
            })
            .collect();

        let modifiers = if in_interface { "" } else { "abstract public " };
        format!(
            "    {}function {}({});\n",
            modifiers,
            fix_ident(&operation.name),
            params.join(", ")
        )
    }
}

fn join_flattened(names: &[ScopedName]) -> String {
    names.iter().map(flatten).collect::<Vec<_>>().join(",")
}
