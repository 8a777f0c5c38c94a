//! Builtin runtime classes.
//!
//! Generated code extends and implements these, so they must be compiled
//! into the host runtime before any profile's generated source. Only the
//! most common local exceptions are defined; the runtime maps every other
//! local exception to `Ice_UnknownLocalException`. `Ice_Identity` is not
//! defined here because profiles generate it from Slice.

/// Root of all local exceptions.
pub const LOCAL_EXCEPTION: &str = "Ice_LocalException";
/// Root of all user exceptions.
pub const USER_EXCEPTION: &str = "Ice_UserException";
/// Marker implemented by local interfaces.
pub const LOCAL_OBJECT: &str = "Ice_LocalObject";
/// Marker implemented by remote-capable interfaces.
pub const OBJECT: &str = "Ice_Object";
/// Default superclass of local classes.
pub const LOCAL_OBJECT_IMPL: &str = "Ice_LocalObjectImpl";
/// Default superclass of remote-capable classes.
pub const OBJECT_IMPL: &str = "Ice_ObjectImpl";

/// PHP source for the builtin runtime classes.
pub const CORE_TYPES: &str = "\
abstract class Ice_LocalException
{
}

class Ice_UnknownException extends Ice_LocalException
{
    var $unknown;
}

class Ice_UnknownLocalException extends Ice_UnknownException
{
}

class Ice_UnknownUserException extends Ice_UnknownException
{
}

class Ice_RequestFailedException extends Ice_LocalException
{
    var $id;
    var $facet;
    var $operation;
}

class Ice_ObjectNotExistException extends Ice_RequestFailedException
{
}

class Ice_FacetNotExistException extends Ice_RequestFailedException
{
}

class Ice_OperationNotExistException extends Ice_RequestFailedException
{
}

abstract class Ice_UserException
{
}

interface Ice_LocalObject
{
}

class Ice_LocalObjectImpl implements Ice_LocalObject
{
}

interface Ice_Object
{
}

class Ice_ObjectImpl implements Ice_Object
{
    var $ice_facets = array();
}
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_types_define_roots() {
        for root in [
            LOCAL_EXCEPTION,
            USER_EXCEPTION,
            LOCAL_OBJECT,
            OBJECT,
            LOCAL_OBJECT_IMPL,
            OBJECT_IMPL,
        ] {
            assert!(
                CORE_TYPES.contains(&format!("class {root}\n"))
                    || CORE_TYPES.contains(&format!("class {root} "))
                    || CORE_TYPES.contains(&format!("interface {root}\n")),
                "missing {root}"
            );
        }
    }

    #[test]
    fn test_markers_before_impls() {
        let marker = CORE_TYPES.find("interface Ice_Object\n").unwrap();
        let implementation = CORE_TYPES.find("class Ice_ObjectImpl").unwrap();
        assert!(marker < implementation);
    }
}
