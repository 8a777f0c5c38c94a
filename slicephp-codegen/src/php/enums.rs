//! Enum code generation.

use crate::names::{fix_ident, flatten};
use slicephp_ast::EnumDef;

/// Generator for enum definitions.
///
/// An enum becomes a class holding one integer constant per enumerator,
/// numbered from zero in declaration order.
pub struct EnumGenerator;

impl EnumGenerator {
    /// Creates a new enum generator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Generates the class for an enum.
    #[must_use]
    pub fn generate_enum(&self, def: &EnumDef) -> String {
        let mut output = String::new();

        output.push_str(&format!("class {}\n", flatten(&def.scoped)));
        output.push_str("{\n");
        for (value, enumerator) in def.enumerators.iter().enumerate() {
            output.push_str(&format!("    const {} = {};\n", fix_ident(enumerator), value));
        }
        output.push_str("}\n");

        output
    }
}

impl Default for EnumGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_enum() {
        let def = EnumDef::new("::Demo::Color", ["A", "B", "C"]);
        let output = EnumGenerator::new().generate_enum(&def);

        assert_eq!(
            output,
            "class Demo_Color\n{\n    const A = 0;\n    const B = 1;\n    const C = 2;\n}\n"
        );
    }

    #[test]
    fn test_enumerator_escaped() {
        let def = EnumDef::new("::Demo::Op", ["new", "print"]);
        let output = EnumGenerator::new().generate_enum(&def);

        assert!(output.contains("const _new = 0;"));
        assert!(output.contains("const _print = 1;"));
    }

    #[test]
    fn test_numbering_stable() {
        let def = EnumDef::new("::Demo::Color", ["Red", "Green", "Blue"]);
        let generator = EnumGenerator::default();
        assert_eq!(generator.generate_enum(&def), generator.generate_enum(&def));
    }

    #[test]
    fn test_empty_enum() {
        let def = EnumDef::new("::Demo::Nothing", Vec::<String>::new());
        let output = EnumGenerator::new().generate_enum(&def);
        assert_eq!(output, "class Demo_Nothing\n{\n}\n");
    }
}
