//! Common utilities for TypeScript code generation.
//!
//! Identifier handling, string escaping and literal formatting shared by the
//! resolver, the operation extractor and the renderer.

use std::collections::HashSet;
use std::sync::LazyLock;

use super::types::TsLiteral;
use crate::spec::EnumValue;

/// TypeScript reserved words that cannot be used as identifiers.
pub static TS_RESERVED_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "break",
        "case",
        "catch",
        "class",
        "const",
        "continue",
        "debugger",
        "default",
        "delete",
        "do",
        "else",
        "enum",
        "export",
        "extends",
        "false",
        "finally",
        "for",
        "function",
        "if",
        "import",
        "in",
        "instanceof",
        "new",
        "null",
        "return",
        "super",
        "switch",
        "this",
        "throw",
        "true",
        "try",
        "typeof",
        "var",
        "void",
        "while",
        "with",
        "yield",
        "let",
        "static",
        "implements",
        "interface",
        "package",
        "private",
        "protected",
        "public",
        "await",
        "async",
    ]
    .into_iter()
    .collect()
});

/// Check if a name must be quoted to be used as a property key.
///
/// Returns true if the name:
/// - Is empty
/// - Doesn't start with a letter, underscore, or dollar sign
/// - Contains characters other than alphanumeric, underscore, or dollar sign
pub fn needs_quoting(name: &str) -> bool {
    name.is_empty()
        || !name
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        || !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Names bound inside every generated adapter method; parameters must not shadow them.
pub const ADAPTER_BINDINGS: [&str; 4] = ["client", "query", "body", "options"];

/// Render `s` as a double-quoted string literal.
///
/// JSON string syntax is valid JavaScript, so quotes, backslashes and
/// control characters come out escaped.
pub fn js_string_literal(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| format!("\"{}\"", s.escape_default()))
}

/// Quote a name if needed for use as a property key.
pub fn quote_if_needed(name: &str) -> String {
    if needs_quoting(name) {
        js_string_literal(name)
    } else {
        name.to_string()
    }
}

/// Sanitize a name into a valid TypeScript identifier.
/// - Replaces `-`, `.`, ` ` with separators and converts to camelCase
/// - Prepends `_` if starts with digit
/// - Escapes reserved words with `_` prefix
pub fn sanitize_ts_identifier(name: &str) -> String {
    let mut result = String::new();
    for (i, part) in name.split(['-', '.', ' ']).enumerate() {
        if part.is_empty() {
            continue;
        }
        if i == 0 || result.is_empty() {
            result.push_str(part);
        } else {
            let mut chars = part.chars();
            if let Some(first) = chars.next() {
                result.extend(first.to_uppercase());
                result.extend(chars);
            }
        }
    }

    result.retain(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');

    if result.is_empty() {
        return "_empty".to_string();
    }

    if result.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        result.insert(0, '_');
    }

    if TS_RESERVED_WORDS.contains(result.as_str()) {
        result.insert(0, '_');
    }

    result
}

/// Sanitize a parameter name into an adapter argument identifier.
///
/// Like [`sanitize_ts_identifier`], and additionally prefixes `_` to names
/// that collide with [`ADAPTER_BINDINGS`].
pub fn sanitize_param_identifier(name: &str) -> String {
    let ident = sanitize_ts_identifier(name);
    if ADAPTER_BINDINGS.contains(&ident.as_str()) {
        format!("_{ident}")
    } else {
        ident
    }
}

/// Extract the type name from a `$ref` pointer: its last path segment.
pub fn ref_to_type_name(ref_path: &str) -> String {
    ref_path
        .rsplit('/')
        .next()
        .unwrap_or(ref_path)
        .to_string()
}

/// Render a float the way enum members expect: six decimals, then trailing
/// zeros and a trailing decimal point stripped.
pub fn format_float(value: f64) -> String {
    let fixed = format!("{value:.6}");
    fixed
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Convert an OpenAPI enum value to a TypeScript literal.
pub fn enum_value_to_literal(v: &EnumValue) -> TsLiteral {
    match v {
        EnumValue::String(s) => TsLiteral::String(s.clone()),
        EnumValue::Integer(n) => TsLiteral::Int(*n),
        EnumValue::Float(f) => TsLiteral::Number(*f),
        EnumValue::Bool(b) => TsLiteral::Bool(*b),
        EnumValue::Null => TsLiteral::Null,
        EnumValue::Other(value) => TsLiteral::Opaque(value.to_string()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_needs_quoting() {
        assert!(!needs_quoting("foo"));
        assert!(!needs_quoting("_foo"));
        assert!(!needs_quoting("$foo"));
        assert!(!needs_quoting("foo123"));
        assert!(!needs_quoting("camelCase"));

        assert!(needs_quoting(""));
        assert!(needs_quoting("123foo"));
        assert!(needs_quoting("foo-bar"));
        assert!(needs_quoting("foo.bar"));
        assert!(needs_quoting("foo bar"));
        assert!(needs_quoting("foo:bar"));
    }

    #[test]
    fn test_js_string_literal() {
        assert_eq!(js_string_literal("hello"), "\"hello\"");
        assert_eq!(js_string_literal("hel\"lo"), "\"hel\\\"lo\"");
        assert_eq!(js_string_literal("hel\\lo"), "\"hel\\\\lo\"");
        assert_eq!(js_string_literal("a\nb"), "\"a\\nb\"");
        assert_eq!(js_string_literal("a\r\tb"), "\"a\\r\\tb\"");
        assert_eq!(js_string_literal("\u{1}"), "\"\\u0001\"");
    }

    #[test]
    fn test_sanitize_param_identifier() {
        assert_eq!(sanitize_param_identifier("client"), "_client");
        assert_eq!(sanitize_param_identifier("options"), "_options");
        assert_eq!(sanitize_param_identifier("query"), "_query");
        assert_eq!(sanitize_param_identifier("body"), "_body");
        assert_eq!(sanitize_param_identifier("client-id"), "clientId");
        assert_eq!(sanitize_param_identifier("delete"), "_delete");
    }

    #[test]
    fn test_quote_if_needed() {
        assert_eq!(quote_if_needed("foo"), "foo");
        assert_eq!(quote_if_needed("foo-bar"), "\"foo-bar\"");
        assert_eq!(quote_if_needed("123"), "\"123\"");
    }

    #[test]
    fn test_sanitize_ts_identifier() {
        assert_eq!(sanitize_ts_identifier("id"), "id");
        assert_eq!(sanitize_ts_identifier("item-id"), "itemId");
        assert_eq!(sanitize_ts_identifier("foo.bar"), "fooBar");
        assert_eq!(sanitize_ts_identifier("123foo"), "_123foo");
        assert_eq!(sanitize_ts_identifier("delete"), "_delete");
        assert_eq!(sanitize_ts_identifier("class"), "_class");
        assert_eq!(sanitize_ts_identifier("a:b"), "ab");
        assert_eq!(sanitize_ts_identifier("--"), "_empty");
    }

    #[test]
    fn test_ref_to_type_name() {
        assert_eq!(ref_to_type_name("#/components/schemas/User"), "User");
        assert_eq!(ref_to_type_name("#/User"), "User");
        assert_eq!(ref_to_type_name("User"), "User");
    }

    #[test]
    fn test_format_float() {
        assert_eq!(format_float(1.5), "1.5");
        assert_eq!(format_float(2.0), "2");
        assert_eq!(format_float(100.0), "100");
        assert_eq!(format_float(0.25), "0.25");
        assert_eq!(format_float(-3.125), "-3.125");
    }
}
