//! Identifier mapping between Slice and PHP.

use slicephp_ast::ScopedName;

/// Connector placed between the segments of a flattened name.
///
/// Slice identifiers cannot contain underscores, so the result never
/// collides with another scoped name.
pub const FLATTEN_CONNECTOR: &str = "_";

/// Prefix applied to identifiers that are PHP reserved words.
pub const ESCAPE_PREFIX: &str = "_";

/// PHP reserved words, lowercase. PHP matches keywords case-insensitively.
const PHP_KEYWORDS: &[&str] = &[
    "abstract",
    "and",
    "array",
    "as",
    "break",
    "case",
    "catch",
    "cfunction",
    "class",
    "clone",
    "const",
    "continue",
    "declare",
    "default",
    "die",
    "do",
    "echo",
    "else",
    "elseif",
    "empty",
    "enddeclare",
    "endfor",
    "endforeach",
    "endif",
    "endswitch",
    "endwhile",
    "eval",
    "exit",
    "extends",
    "final",
    "for",
    "foreach",
    "function",
    "global",
    "if",
    "implements",
    "include",
    "include_once",
    "instanceof",
    "interface",
    "isset",
    "list",
    "new",
    "old_function",
    "or",
    "print",
    "private",
    "protected",
    "public",
    "require",
    "require_once",
    "return",
    "static",
    "switch",
    "this",
    "throw",
    "try",
    "unset",
    "use",
    "var",
    "while",
    "xor",
];

/// Flattens a scoped name into a single PHP identifier.
///
/// `::Demo::Hello` becomes `Demo_Hello`.
#[must_use]
pub fn flatten(scoped: &ScopedName) -> String {
    scoped.segments().collect::<Vec<_>>().join(FLATTEN_CONNECTOR)
}

/// Escapes a simple name that collides with a PHP reserved word.
#[must_use]
pub fn fix_ident(name: &str) -> String {
    let lower = name.to_ascii_lowercase();
    if PHP_KEYWORDS.binary_search(&lower.as_str()).is_ok() {
        format!("{ESCAPE_PREFIX}{name}")
    } else {
        name.to_string()
    }
}

/// ASCII case fold used for class lookups.
#[must_use]
pub fn lower_case(name: &str) -> String {
    name.to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_keywords_sorted() {
        assert!(PHP_KEYWORDS.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_flatten() {
        assert_eq!(flatten(&"::Ice::Identity".into()), "Ice_Identity");
        assert_eq!(flatten(&"::Top".into()), "Top");
        assert_eq!(flatten(&"::A::B::C".into()), "A_B_C");
    }

    #[test]
    fn test_fix_ident() {
        assert_eq!(fix_ident("function"), "_function");
        assert_eq!(fix_ident("Class"), "_Class");
        assert_eq!(fix_ident("EMPTY"), "_EMPTY");
        assert_eq!(fix_ident("category"), "category");
    }

    #[test]
    fn test_lower_case() {
        assert_eq!(lower_case("Demo_HelloPrx"), "demo_helloprx");
    }

    fn scoped_names() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[A-Za-z][A-Za-z0-9]{0,6}", 1..4)
    }

    proptest! {
        #[test]
        fn test_flatten_injective(a in scoped_names(), b in scoped_names()) {
            let sa = ScopedName::new(a.join("::"));
            let sb = ScopedName::new(b.join("::"));
            prop_assume!(sa != sb);
            prop_assert_ne!(flatten(&sa), flatten(&sb));
        }

        #[test]
        fn test_flatten_deterministic(a in scoped_names()) {
            let scoped = ScopedName::new(a.join("::"));
            prop_assert_eq!(flatten(&scoped), flatten(&scoped.clone()));
        }
    }
}
