//! Constant generation.
//!
//! Each Slice constant becomes a `define("Name", literal);` statement.

use crate::error::CodegenError;
use crate::names::{fix_ident, flatten};
use slicephp_ast::{BuiltinKind, ConstDef, ScopedName, Type, Unit};
use std::fmt::Write;

/// Bytes that may appear unescaped in a generated string literal.
///
/// `$` and `"` are absent because they are escaped explicitly; the
/// backslash is absent so that every backslash in the output starts an
/// escape sequence.
const BASIC_SOURCE_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz\
ABCDEFGHIJKLMNOPQRSTUVWXYZ\
0123456789\
_{}[]#()<>%:;,?*+=/^&|~!' \t";

static BASIC_SOURCE_SET: [bool; 256] = basic_source_set();

const fn basic_source_set() -> [bool; 256] {
    let mut set = [false; 256];
    let mut i = 0;
    while i < BASIC_SOURCE_CHARS.len() {
        set[BASIC_SOURCE_CHARS[i] as usize] = true;
        i += 1;
    }
    set
}

/// Encodes a string value as a double-quoted PHP literal.
///
/// Bytes outside the basic source character set are written as three-digit
/// octal escapes, so the result is plain ASCII regardless of locale.
#[must_use]
pub fn encode_string(value: impl AsRef<[u8]>) -> String {
    let bytes = value.as_ref();
    let mut out = String::with_capacity(bytes.len() + 2);
    out.push('"');
    for &byte in bytes {
        match byte {
            b'$' => out.push_str("\\$"),
            b'"' => out.push_str("\\\""),
            _ if BASIC_SOURCE_SET[usize::from(byte)] => out.push(char::from(byte)),
            _ => {
                let _ = write!(out, "\\{byte:03o}");
            }
        }
    }
    out.push('"');
    out
}

/// Parses a Slice integer literal: decimal, `0x` hexadecimal or
/// leading-zero octal, with an optional sign.
#[must_use]
pub fn parse_long(text: &str) -> Option<i64> {
    let text = text.trim();
    let (negative, unsigned) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };

    let (radix, digits) = if let Some(hex) = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        (16, hex)
    } else if unsigned.len() > 1 && unsigned.starts_with('0') {
        (8, &unsigned[1..])
    } else {
        (10, unsigned)
    };

    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return None;
    }
    let magnitude = u64::from_str_radix(digits, radix).ok()?;
    if negative {
        0i64.checked_sub_unsigned(magnitude)
    } else {
        i64::try_from(magnitude).ok()
    }
}

/// Generator for constant definitions.
pub struct ConstantGenerator<'a> {
    unit: &'a Unit,
    native_int_bits: u32,
}

impl<'a> ConstantGenerator<'a> {
    /// Creates a constant generator for a host whose native integer is
    /// `native_int_bits` wide.
    #[must_use]
    pub fn new(unit: &'a Unit, native_int_bits: u32) -> Self {
        Self {
            unit,
            native_int_bits,
        }
    }

    /// Generates the `define` statement for a constant.
    ///
    /// # Errors
    /// Returns `CodegenError` if the value cannot be encoded.
    pub fn generate_const(&self, def: &ConstDef) -> Result<String, CodegenError> {
        let literal = self.encode(def)?;
        Ok(format!("define(\"{}\", {});\n", flatten(&def.scoped), literal))
    }

    /// Encodes a constant value as PHP literal source.
    ///
    /// # Errors
    /// Returns `CodegenError` if the value does not parse for its type, the
    /// type has no literal form, or an enumerator is unknown.
    pub fn encode(&self, def: &ConstDef) -> Result<String, CodegenError> {
        match &def.ty {
            Type::Builtin(kind) => self.encode_builtin(def, *kind),
            Type::Enum(enum_name) => self.encode_enumerator(def, enum_name),
            other => Err(CodegenError::UnsupportedConstantType {
                name: def.scoped.to_string(),
                type_name: format!("{other:?}"),
            }),
        }
    }

    fn encode_builtin(&self, def: &ConstDef, kind: BuiltinKind) -> Result<String, CodegenError> {
        match kind {
            BuiltinKind::Bool
            | BuiltinKind::Byte
            | BuiltinKind::Short
            | BuiltinKind::Int
            | BuiltinKind::Float
            | BuiltinKind::Double => Ok(def.value.clone()),
            BuiltinKind::Long => self.encode_long(def),
            BuiltinKind::String => Ok(encode_string(&def.value)),
            BuiltinKind::Object | BuiltinKind::ObjectProxy | BuiltinKind::LocalObject => {
                Err(CodegenError::UnsupportedConstantType {
                    name: def.scoped.to_string(),
                    type_name: kind.slice_name().to_string(),
                })
            }
        }
    }

    /// Values outside the host's native integer range are emitted as
    /// decimal strings.
    fn encode_long(&self, def: &ConstDef) -> Result<String, CodegenError> {
        let value = parse_long(&def.value).ok_or_else(|| CodegenError::InvalidConstant {
            name: def.scoped.to_string(),
            value: def.value.clone(),
        })?;
        if self.fits_native_int(value) {
            Ok(def.value.clone())
        } else {
            Ok(format!("\"{value}\""))
        }
    }

    fn fits_native_int(&self, value: i64) -> bool {
        if self.native_int_bits >= 64 {
            return true;
        }
        let bits = self.native_int_bits.max(1);
        let max = (1i64 << (bits - 1)) - 1;
        let min = -(1i64 << (bits - 1));
        (min..=max).contains(&value)
    }

    fn encode_enumerator(
        &self,
        def: &ConstDef,
        enum_name: &ScopedName,
    ) -> Result<String, CodegenError> {
        let enum_def = self.unit.lookup_enum(enum_name).ok_or_else(|| {
            CodegenError::unknown_type("enum", enum_name.as_str(), def.scoped.as_str())
        })?;

        let value = match def.value.rfind(':') {
            Some(colon) => &def.value[colon + 1..],
            None => def.value.as_str(),
        };

        if enum_def.enumerators.iter().any(|e| e == value) {
            Ok(format!("{}::{}", flatten(&enum_def.scoped), fix_ident(value)))
        } else {
            Err(CodegenError::UnknownEnumerator {
                enum_name: enum_def.scoped.to_string(),
                value: def.value.clone(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use slicephp_ast::{EnumDef, Module, UnitOptions};

    fn enum_unit() -> Unit {
        let mut unit = Unit::new(UnitOptions::default());
        unit.add(
            Module::new("::Demo").with(EnumDef::new("::Demo::Color", ["red", "green", "list"])),
        );
        unit
    }

    fn encode(kind: BuiltinKind, value: &str, bits: u32) -> Result<String, CodegenError> {
        let unit = Unit::default();
        let generator = ConstantGenerator::new(&unit, bits);
        generator.encode(&ConstDef::new("::Demo::C", kind, value))
    }

    #[test]
    fn test_verbatim_kinds() {
        for (kind, value) in [
            (BuiltinKind::Bool, "true"),
            (BuiltinKind::Byte, "255"),
            (BuiltinKind::Short, "-12"),
            (BuiltinKind::Int, "0x7f"),
            (BuiltinKind::Float, "1.5"),
            (BuiltinKind::Double, "2.5e10"),
        ] {
            assert_eq!(encode(kind, value, 32).unwrap(), value);
        }
    }

    #[test]
    fn test_long_in_range() {
        assert_eq!(encode(BuiltinKind::Long, "2147483647", 32).unwrap(), "2147483647");
        assert_eq!(encode(BuiltinKind::Long, "-2147483648", 32).unwrap(), "-2147483648");
    }

    #[test]
    fn test_long_out_of_range_quoted() {
        assert_eq!(
            encode(BuiltinKind::Long, "2147483648", 32).unwrap(),
            "\"2147483648\""
        );
        assert_eq!(
            encode(BuiltinKind::Long, "-0x80000001", 32).unwrap(),
            "\"-2147483649\""
        );
    }

    #[test]
    fn test_long_on_64_bit_host() {
        assert_eq!(
            encode(BuiltinKind::Long, "9223372036854775807", 64).unwrap(),
            "9223372036854775807"
        );
    }

    #[test]
    fn test_long_invalid() {
        let err = encode(BuiltinKind::Long, "12abc", 64).unwrap_err();
        assert!(matches!(err, CodegenError::InvalidConstant { .. }));
    }

    #[test]
    fn test_parse_long_forms() {
        assert_eq!(parse_long("42"), Some(42));
        assert_eq!(parse_long("-42"), Some(-42));
        assert_eq!(parse_long("0x1F"), Some(31));
        assert_eq!(parse_long("017"), Some(15));
        assert_eq!(parse_long("0"), Some(0));
        assert_eq!(parse_long("-9223372036854775808"), Some(i64::MIN));
        assert_eq!(parse_long("9223372036854775808"), None);
        assert_eq!(parse_long("--1"), None);
        assert_eq!(parse_long(""), None);
    }

    #[test]
    fn test_string_escapes() {
        assert_eq!(encode_string("hello world"), "\"hello world\"");
        assert_eq!(encode_string("cost: $5"), "\"cost: \\$5\"");
        assert_eq!(encode_string("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(encode_string("a\nb"), "\"a\\012b\"");
        assert_eq!(encode_string("back\\slash"), "\"back\\134slash\"");
        assert_eq!(encode_string("caf\u{e9}"), "\"caf\\303\\251\"");
    }

    #[test]
    fn test_string_constant() {
        let literal = encode(BuiltinKind::String, "tab\there", 64).unwrap();
        assert_eq!(literal, "\"tab\there\"");
    }

    #[test]
    fn test_object_constant_rejected() {
        let err = encode(BuiltinKind::ObjectProxy, "0", 64).unwrap_err();
        assert!(matches!(err, CodegenError::UnsupportedConstantType { .. }));
    }

    #[test]
    fn test_enum_constant() {
        let unit = enum_unit();
        let generator = ConstantGenerator::new(&unit, 64);

        let scoped = ConstDef::new(
            "::Demo::Fav",
            Type::Enum("::Demo::Color".into()),
            "::Demo::green",
        );
        assert_eq!(generator.encode(&scoped).unwrap(), "Demo_Color::green");

        let simple = ConstDef::new("::Demo::Fav", Type::Enum("::Demo::Color".into()), "red");
        assert_eq!(generator.encode(&simple).unwrap(), "Demo_Color::red");

        let keyword = ConstDef::new("::Demo::Fav", Type::Enum("::Demo::Color".into()), "list");
        assert_eq!(generator.encode(&keyword).unwrap(), "Demo_Color::_list");
    }

    #[test]
    fn test_enum_constant_unknown_enumerator() {
        let unit = enum_unit();
        let generator = ConstantGenerator::new(&unit, 64);
        let def = ConstDef::new("::Demo::Fav", Type::Enum("::Demo::Color".into()), "Red");
        let err = generator.encode(&def).unwrap_err();
        assert!(matches!(err, CodegenError::UnknownEnumerator { .. }));
    }

    #[test]
    fn test_generate_const() {
        let unit = Unit::default();
        let generator = ConstantGenerator::new(&unit, 64);
        let def = ConstDef::new("::Demo::Greeting", BuiltinKind::String, "hi");
        assert_eq!(
            generator.generate_const(&def).unwrap(),
            "define(\"Demo_Greeting\", \"hi\");\n"
        );
    }

    /// Decodes a generated literal, failing on any unescaped `$` or `"`
    /// and on any escape other than `\$`, `\"` or three octal digits.
    fn decode_literal(literal: &str) -> Option<Vec<u8>> {
        let inner = literal.strip_prefix('"')?.strip_suffix('"')?.as_bytes();
        let mut out = Vec::new();
        let mut i = 0;
        while i < inner.len() {
            match inner[i] {
                b'$' | b'"' => return None,
                b'\\' => match inner.get(i + 1)? {
                    b'$' | b'"' => {
                        out.push(inner[i + 1]);
                        i += 2;
                    }
                    _ => {
                        let digits = std::str::from_utf8(inner.get(i + 1..i + 4)?).ok()?;
                        if !digits.bytes().all(|d| (b'0'..=b'7').contains(&d)) {
                            return None;
                        }
                        let byte = u8::from_str_radix(digits, 8).ok()?;
                        if BASIC_SOURCE_SET[usize::from(byte)] {
                            return None;
                        }
                        out.push(byte);
                        i += 4;
                    }
                },
                byte => {
                    if !BASIC_SOURCE_SET[usize::from(byte)] {
                        return None;
                    }
                    out.push(byte);
                    i += 1;
                }
            }
        }
        Some(out)
    }

    proptest! {
        #[test]
        fn test_string_literal_safety(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
            let literal = encode_string(&bytes);
            prop_assert_eq!(decode_literal(&literal), Some(bytes));
        }

        #[test]
        fn test_long_round_trip(
            value in any::<i64>(),
            bits in prop::sample::select(vec![32u32, 64]),
        ) {
            let literal = encode(BuiltinKind::Long, &value.to_string(), bits).unwrap();
            let decoded = literal.trim_matches('"').parse::<i64>().unwrap();
            prop_assert_eq!(decoded, value);
        }
    }
}
