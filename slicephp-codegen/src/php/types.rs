//! Type mapping helpers.

use crate::names::flatten;
use slicephp_ast::{BuiltinKind, Type};

/// Returns the PHP type hint for a parameter type, if one may be emitted.
///
/// The engine rejects `null` for a hinted parameter, and every type except
/// a struct may legally be `null`, so only structs are hinted.
#[must_use]
pub fn type_hint(ty: &Type) -> Option<String> {
    match ty {
        Type::Struct(scoped) => Some(flatten(scoped)),
        _ => None,
    }
}

/// Returns true if a dictionary with this key type maps onto a PHP
/// associative array.
#[must_use]
pub fn is_native_key(ty: &Type) -> bool {
    matches!(
        ty,
        Type::Builtin(
            BuiltinKind::Byte
                | BuiltinKind::Bool
                | BuiltinKind::Short
                | BuiltinKind::Int
                | BuiltinKind::Long
                | BuiltinKind::String
        )
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use slicephp_ast::ScopedName;

    #[test]
    fn test_struct_hint() {
        let ty = Type::Struct(ScopedName::new("::Ice::Identity"));
        assert_eq!(type_hint(&ty).as_deref(), Some("Ice_Identity"));
    }

    #[test]
    fn test_no_hint_for_nullable_types() {
        let name = ScopedName::new("::Demo::Thing");
        for ty in [
            Type::Builtin(BuiltinKind::Int),
            Type::Builtin(BuiltinKind::String),
            Type::Sequence(name.clone()),
            Type::Dictionary(name.clone()),
            Type::Class(name.clone()),
            Type::Proxy(name.clone()),
            Type::Enum(name),
        ] {
            assert_eq!(type_hint(&ty), None, "{ty:?}");
        }
    }

    #[test]
    fn test_native_keys() {
        assert!(is_native_key(&Type::Builtin(BuiltinKind::String)));
        assert!(is_native_key(&Type::Builtin(BuiltinKind::Long)));
        assert!(!is_native_key(&Type::Builtin(BuiltinKind::Float)));
        assert!(!is_native_key(&Type::Builtin(BuiltinKind::ObjectProxy)));
        assert!(!is_native_key(&Type::Struct(ScopedName::new("::Demo::Key"))));
        assert!(!is_native_key(&Type::Enum(ScopedName::new("::Demo::Color"))));
    }
}
