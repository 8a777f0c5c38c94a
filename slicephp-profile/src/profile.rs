//! A named, generated profile.

use crate::properties::Properties;
use slicephp_ast::{ClassDef, Unit};
use slicephp_codegen::{ClassIndex, GeneratedCode, GenerationWarning};

/// A parsed and generated set of IDL definitions with its configuration.
///
/// The profile owns its unit; generated source and the class index are
/// fixed at creation.
#[derive(Debug)]
pub struct Profile {
    name: String,
    unit: Unit,
    code: String,
    classes: ClassIndex,
    properties: Properties,
    warnings: Vec<GenerationWarning>,
}

impl Profile {
    pub(crate) fn new(
        name: impl Into<String>,
        unit: Unit,
        generated: GeneratedCode,
        properties: Properties,
    ) -> Self {
        Self {
            name: name.into(),
            unit,
            code: generated.source,
            classes: generated.classes,
            properties,
            warnings: generated.warnings,
        }
    }

    /// Returns the profile name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the parsed definitions.
    #[must_use]
    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    /// Returns the generated PHP source.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the generated class index.
    #[must_use]
    pub fn classes(&self) -> &ClassIndex {
        &self.classes
    }

    /// Returns the profile's own properties.
    #[must_use]
    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Returns the warnings raised while generating.
    #[must_use]
    pub fn warnings(&self) -> &[GenerationWarning] {
        &self.warnings
    }

    /// Finds a generated class or interface by its PHP name, in any case.
    #[must_use]
    pub fn find_class(&self, php_name: &str) -> Option<&ClassDef> {
        self.classes
            .get(php_name)
            .and_then(|scoped| self.unit.lookup_class_def(scoped))
    }

    pub(crate) fn into_unit(self) -> Unit {
        self.unit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slicephp_ast::{Module, UnitOptions};

    #[test]
    fn test_find_class() {
        let mut unit = Unit::new(UnitOptions::default());
        unit.add(Module::new("::Demo").with(ClassDef::interface("::Demo::Printer")));
        let generated = slicephp_codegen::generate(&unit).unwrap();

        let profile = Profile::new("demo", unit, generated, Properties::new());
        assert_eq!(profile.name(), "demo");
        assert!(profile.code().contains("interface Demo_Printer"));

        let class = profile.find_class("demo_printer").unwrap();
        assert!(class.is_interface);
        assert!(profile.find_class("Demo_Missing").is_none());
    }
}
