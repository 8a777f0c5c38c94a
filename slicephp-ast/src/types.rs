//! Parse tree node definitions.
//!
//! The node set is closed: it mirrors what the Slice grammar can produce.
//! Every contained definition carries its fully scoped name; references to
//! other definitions are scoped names resolved through the owning
//! [`Unit`](crate::Unit).

use crate::scoped::ScopedName;
use serde::{Deserialize, Serialize};

/// Builtin Slice type kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuiltinKind {
    /// 8-bit unsigned.
    Byte,
    /// Boolean.
    Bool,
    /// 16-bit signed.
    Short,
    /// 32-bit signed.
    Int,
    /// 64-bit signed.
    Long,
    /// Single precision float.
    Float,
    /// Double precision float.
    Double,
    /// String.
    String,
    /// Any class instance.
    Object,
    /// Any proxy.
    ObjectProxy,
    /// Any local object.
    LocalObject,
}

impl BuiltinKind {
    /// Returns the Slice keyword for this kind.
    #[must_use]
    pub const fn slice_name(self) -> &'static str {
        match self {
            Self::Byte => "byte",
            Self::Bool => "bool",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::String => "string",
            Self::Object => "Object",
            Self::ObjectProxy => "Object*",
            Self::LocalObject => "LocalObject",
        }
    }

    /// Returns true for the object kinds, which carry no literal values.
    #[must_use]
    pub const fn is_object(self) -> bool {
        matches!(self, Self::Object | Self::ObjectProxy | Self::LocalObject)
    }
}

/// A type reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Type {
    /// Builtin type.
    Builtin(BuiltinKind),
    /// User-defined struct.
    Struct(ScopedName),
    /// User-defined enum.
    Enum(ScopedName),
    /// User-defined sequence.
    Sequence(ScopedName),
    /// User-defined dictionary.
    Dictionary(ScopedName),
    /// Class or interface, by value.
    Class(ScopedName),
    /// Proxy to a class or interface.
    Proxy(ScopedName),
}

impl Type {
    /// Returns the scoped name of a user-defined type.
    #[must_use]
    pub fn scoped(&self) -> Option<&ScopedName> {
        match self {
            Self::Builtin(_) => None,
            Self::Struct(n)
            | Self::Enum(n)
            | Self::Sequence(n)
            | Self::Dictionary(n)
            | Self::Class(n)
            | Self::Proxy(n) => Some(n),
        }
    }
}

impl From<BuiltinKind> for Type {
    fn from(kind: BuiltinKind) -> Self {
        Self::Builtin(kind)
    }
}

/// Parameter direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamMode {
    /// Input parameter.
    #[default]
    In,
    /// Output parameter.
    Out,
}

/// Operation parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamDecl {
    /// Parameter name.
    pub name: String,
    /// Parameter type.
    #[serde(rename = "type")]
    pub ty: Type,
    /// Direction.
    #[serde(default)]
    pub mode: ParamMode,
}

impl ParamDecl {
    /// Creates an input parameter.
    pub fn input(name: impl Into<String>, ty: impl Into<Type>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            mode: ParamMode::In,
        }
    }

    /// Creates an output parameter.
    pub fn output(name: impl Into<String>, ty: impl Into<Type>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            mode: ParamMode::Out,
        }
    }

    /// Returns true for output parameters.
    #[must_use]
    pub fn is_out(&self) -> bool {
        self.mode == ParamMode::Out
    }
}

/// Operation of a class or interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    /// Operation name.
    pub name: String,
    /// Parameters in declaration order.
    #[serde(default)]
    pub params: Vec<ParamDecl>,
}

impl Operation {
    /// Creates an operation with no parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
        }
    }

    /// Appends a parameter.
    #[must_use]
    pub fn with_param(mut self, param: ParamDecl) -> Self {
        self.params.push(param);
        self
    }
}

/// Data member of a class, exception or struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataMember {
    /// Member name.
    pub name: String,
    /// Member type.
    #[serde(rename = "type")]
    pub ty: Type,
}

impl DataMember {
    /// Creates a data member.
    pub fn new(name: impl Into<String>, ty: impl Into<Type>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// Module (namespace).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    /// Scoped name.
    pub scoped: ScopedName,
    /// Contained definitions in declaration order.
    #[serde(default)]
    pub definitions: Vec<Definition>,
}

impl Module {
    /// Creates an empty module.
    pub fn new(scoped: impl Into<ScopedName>) -> Self {
        Self {
            scoped: scoped.into(),
            definitions: Vec::new(),
        }
    }

    /// Appends a contained definition.
    #[must_use]
    pub fn with(mut self, definition: impl Into<Definition>) -> Self {
        self.definitions.push(definition.into());
        self
    }
}

/// Forward declaration of a class or interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDecl {
    /// Scoped name.
    pub scoped: ScopedName,
    /// Declared as an interface.
    #[serde(default)]
    pub is_interface: bool,
    /// Declared local.
    #[serde(default)]
    pub is_local: bool,
}

impl ClassDecl {
    /// Creates a class declaration.
    pub fn new(scoped: impl Into<ScopedName>, is_interface: bool) -> Self {
        Self {
            scoped: scoped.into(),
            is_interface,
            is_local: false,
        }
    }
}

/// Class or interface definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDef {
    /// Scoped name.
    pub scoped: ScopedName,
    /// Interface rather than class.
    #[serde(default)]
    pub is_interface: bool,
    /// Local (never marshaled).
    #[serde(default)]
    pub is_local: bool,
    /// Abstract (declares operations).
    #[serde(default)]
    pub is_abstract: bool,
    /// Bases in declaration order; at most one is a class and it comes first.
    #[serde(default)]
    pub bases: Vec<ScopedName>,
    /// Operations in declaration order.
    #[serde(default)]
    pub operations: Vec<Operation>,
    /// Data members in declaration order.
    #[serde(default)]
    pub members: Vec<DataMember>,
}

impl ClassDef {
    /// Creates an empty class definition.
    pub fn class(scoped: impl Into<ScopedName>) -> Self {
        Self {
            scoped: scoped.into(),
            is_interface: false,
            is_local: false,
            is_abstract: false,
            bases: Vec::new(),
            operations: Vec::new(),
            members: Vec::new(),
        }
    }

    /// Creates an empty interface definition.
    pub fn interface(scoped: impl Into<ScopedName>) -> Self {
        Self {
            is_interface: true,
            is_abstract: true,
            ..Self::class(scoped)
        }
    }

    /// Marks the definition local.
    #[must_use]
    pub fn local(mut self) -> Self {
        self.is_local = true;
        self
    }

    /// Appends a base.
    #[must_use]
    pub fn with_base(mut self, base: impl Into<ScopedName>) -> Self {
        self.bases.push(base.into());
        self
    }

    /// Appends an operation; a class with operations is abstract.
    #[must_use]
    pub fn with_operation(mut self, operation: Operation) -> Self {
        self.operations.push(operation);
        self.is_abstract = true;
        self
    }

    /// Appends a data member.
    #[must_use]
    pub fn with_member(mut self, member: DataMember) -> Self {
        self.members.push(member);
        self
    }
}

/// Exception definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExceptionDef {
    /// Scoped name.
    pub scoped: ScopedName,
    /// Local exception.
    #[serde(default)]
    pub is_local: bool,
    /// Base exception.
    #[serde(default)]
    pub base: Option<ScopedName>,
    /// Data members in declaration order.
    #[serde(default)]
    pub members: Vec<DataMember>,
}

impl ExceptionDef {
    /// Creates an exception without base or members.
    pub fn new(scoped: impl Into<ScopedName>) -> Self {
        Self {
            scoped: scoped.into(),
            is_local: false,
            base: None,
            members: Vec::new(),
        }
    }
}

/// Struct definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructDef {
    /// Scoped name.
    pub scoped: ScopedName,
    /// Local struct.
    #[serde(default)]
    pub is_local: bool,
    /// Data members in declaration order.
    #[serde(default)]
    pub members: Vec<DataMember>,
}

impl StructDef {
    /// Creates an empty struct.
    pub fn new(scoped: impl Into<ScopedName>) -> Self {
        Self {
            scoped: scoped.into(),
            is_local: false,
            members: Vec::new(),
        }
    }

    /// Appends a data member.
    #[must_use]
    pub fn with_member(mut self, member: DataMember) -> Self {
        self.members.push(member);
        self
    }
}

/// Sequence definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceDef {
    /// Scoped name.
    pub scoped: ScopedName,
    /// Element type.
    pub element: Type,
}

/// Dictionary definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryDef {
    /// Scoped name.
    pub scoped: ScopedName,
    /// Key type.
    pub key: Type,
    /// Value type.
    pub value: Type,
}

/// Enum definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDef {
    /// Scoped name.
    pub scoped: ScopedName,
    /// Enumerator names in declaration order.
    pub enumerators: Vec<String>,
}

impl EnumDef {
    /// Creates an enum from its enumerators.
    pub fn new<I, S>(scoped: impl Into<ScopedName>, enumerators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            scoped: scoped.into(),
            enumerators: enumerators.into_iter().map(Into::into).collect(),
        }
    }
}

/// Constant definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstDef {
    /// Scoped name.
    pub scoped: ScopedName,
    /// Declared type.
    #[serde(rename = "type")]
    pub ty: Type,
    /// Value as written in the Slice source.
    pub value: String,
}

impl ConstDef {
    /// Creates a constant.
    pub fn new(
        scoped: impl Into<ScopedName>,
        ty: impl Into<Type>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            scoped: scoped.into(),
            ty: ty.into(),
            value: value.into(),
        }
    }
}

/// A node of the parse tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum Definition {
    /// Module.
    Module(Module),
    /// Class or interface forward declaration.
    ClassDecl(ClassDecl),
    /// Class or interface definition.
    ClassDef(ClassDef),
    /// Exception.
    Exception(ExceptionDef),
    /// Struct.
    Struct(StructDef),
    /// Sequence.
    Sequence(SequenceDef),
    /// Dictionary.
    Dictionary(DictionaryDef),
    /// Enum.
    Enum(EnumDef),
    /// Constant.
    Const(ConstDef),
}

impl Definition {
    /// Returns the scoped name of the definition.
    #[must_use]
    pub fn scoped(&self) -> &ScopedName {
        match self {
            Self::Module(d) => &d.scoped,
            Self::ClassDecl(d) => &d.scoped,
            Self::ClassDef(d) => &d.scoped,
            Self::Exception(d) => &d.scoped,
            Self::Struct(d) => &d.scoped,
            Self::Sequence(d) => &d.scoped,
            Self::Dictionary(d) => &d.scoped,
            Self::Enum(d) => &d.scoped,
            Self::Const(d) => &d.scoped,
        }
    }

    /// Returns the unscoped name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.scoped().name()
    }

    /// Returns true if the definition introduces a type.
    #[must_use]
    pub const fn is_type(&self) -> bool {
        matches!(
            self,
            Self::ClassDecl(_)
                | Self::ClassDef(_)
                | Self::Exception(_)
                | Self::Struct(_)
                | Self::Sequence(_)
                | Self::Dictionary(_)
                | Self::Enum(_)
        )
    }

    /// Returns a short description of the node kind.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Module(_) => "module",
            Self::ClassDecl(_) => "class declaration",
            Self::ClassDef(_) => "class",
            Self::Exception(_) => "exception",
            Self::Struct(_) => "struct",
            Self::Sequence(_) => "sequence",
            Self::Dictionary(_) => "dictionary",
            Self::Enum(_) => "enum",
            Self::Const(_) => "constant",
        }
    }
}

macro_rules! impl_into_definition {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Definition {
                fn from(def: $ty) -> Self {
                    Self::$variant(def)
                }
            }
        )*
    };
}

impl_into_definition! {
    Module => Module,
    ClassDecl => ClassDecl,
    ClassDef => ClassDef,
    ExceptionDef => Exception,
    StructDef => Struct,
    SequenceDef => Sequence,
    DictionaryDef => Dictionary,
    EnumDef => Enum,
    ConstDef => Const,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interface_is_abstract() {
        let def = ClassDef::interface("::Demo::Printer");
        assert!(def.is_interface);
        assert!(def.is_abstract);
        assert!(!def.is_local);
    }

    #[test]
    fn test_operation_makes_class_abstract() {
        let def = ClassDef::class("::Demo::Impl").with_operation(Operation::new("run"));
        assert!(def.is_abstract);
        assert_eq!(def.operations.len(), 1);
    }

    #[test]
    fn test_definition_name() {
        let def: Definition = EnumDef::new("::Demo::Color", ["Red", "Green"]).into();
        assert_eq!(def.name(), "Color");
        assert_eq!(def.kind_name(), "enum");
        assert!(def.is_type());
    }

    #[test]
    fn test_json_shape() {
        let json = r#"{
            "node": "class_def",
            "scoped": "::Demo::Hello",
            "is_interface": true,
            "operations": [
                { "name": "sayHello", "params": [
                    { "name": "delay", "type": { "builtin": "int" } },
                    { "name": "reply", "type": { "struct": "::Demo::Reply" }, "mode": "out" }
                ] }
            ]
        }"#;
        let def: Definition = serde_json::from_str(json).unwrap();
        let Definition::ClassDef(class) = def else {
            panic!("expected class definition");
        };
        assert!(class.is_interface);
        assert!(class.operations[0].params[1].is_out());
        assert_eq!(
            class.operations[0].params[0].ty,
            Type::Builtin(BuiltinKind::Int)
        );
    }

    #[test]
    fn test_builtin_object_kinds() {
        assert!(BuiltinKind::ObjectProxy.is_object());
        assert!(!BuiltinKind::String.is_object());
        assert_eq!(BuiltinKind::ObjectProxy.slice_name(), "Object*");
    }
}
