//! Common utilities shared by normalization and the emitters.

use serde_json::Value;

/// Rust keywords that need a raw-identifier prefix when used as field or
/// parameter names.
pub const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "static", "struct", "trait", "true", "type", "unsafe", "use",
    "where", "while", "abstract", "become", "box", "do", "final", "macro", "override", "priv",
    "try", "typeof", "unsized", "virtual", "yield",
];

/// Indent every non-empty line by `levels` × four spaces.
pub fn indent(text: &str, levels: usize) -> String {
    let pad = "    ".repeat(levels);
    text.lines()
        .map(|line| {
            if line.trim().is_empty() {
                String::new()
            } else {
                format!("{pad}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Check whether `name` is a valid identifier (ASCII letters, digits and
/// underscores, not starting with a digit).
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// `tables.list` → `tables_list`
pub fn method_identifier(dotted: &str) -> String {
    dotted.replace('.', "_")
}

/// Keywords that cannot be raw identifiers.
const PATH_KEYWORDS: &[&str] = &["crate", "self", "Self", "super"];

/// Escape a Rust keyword with the raw-identifier prefix, or with a trailing
/// `_` for path keywords.
pub fn rust_ident(name: &str) -> String {
    if PATH_KEYWORDS.contains(&name) {
        format!("{name}_")
    } else if RUST_KEYWORDS.contains(&name) {
        format!("r#{name}")
    } else {
        name.to_string()
    }
}

/// Normalize a docstring: strip surrounding blank lines and the common
/// indentation of every line after the first. Returns `None` when nothing
/// but whitespace remains.
pub fn clean_doc(text: &str) -> Option<String> {
    let lines: Vec<&str> = text.lines().collect();
    let margin = lines
        .iter()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start().len())
        .min()
        .unwrap_or(0);

    let dedented: Vec<&str> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 || line.trim().is_empty() {
                line.trim()
            } else {
                line.get(margin..).unwrap_or(line.trim_start()).trim_end()
            }
        })
        .collect();

    let start = dedented.iter().position(|line| !line.is_empty())?;
    let end = dedented.iter().rposition(|line| !line.is_empty())?;
    Some(dedented[start..=end].join("\n"))
}

/// Empty text means "no documentation".
pub fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Render a JSON value as Python literal source text.
pub fn python_literal(value: &Value) -> String {
    match value {
        Value::Null => "None".to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => python_str(s),
        Value::Array(items) => format!(
            "[{}]",
            items.iter().map(python_literal).collect::<Vec<_>>().join(", ")
        ),
        Value::Object(map) => format!(
            "{{{}}}",
            map.iter()
                .map(|(k, v)| format!("{}: {}", python_str(k), python_literal(v)))
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }
}

/// Single-quoted Python string literal.
pub fn python_str(s: &str) -> String {
    let escaped = s
        .replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "\\n");
    format!("'{escaped}'")
}

/// Replace whole identifier occurrences of `from` with `to`.
///
/// `ConstraintInfo` inside `list[ConstraintInfo]` is replaced, but not
/// inside `ConstraintInfoList`.
pub fn replace_identifier(text: &str, from: &str, to: &str) -> String {
    if from.is_empty() {
        return text.to_string();
    }
    let is_ident_char = |c: char| c.is_alphanumeric() || c == '_';
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    let mut prev: Option<char> = None;

    while let Some(idx) = rest.find(from) {
        let before = rest[..idx].chars().last().or(prev);
        let after = rest[idx + from.len()..].chars().next();
        out.push_str(&rest[..idx]);
        if before.is_some_and(is_ident_char) || after.is_some_and(is_ident_char) {
            out.push_str(from);
        } else {
            out.push_str(to);
        }
        prev = from.chars().last();
        rest = &rest[idx + from.len()..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_indent_skips_blank_lines() {
        assert_eq!(indent("a\n\nb", 1), "    a\n\n    b");
        assert_eq!(indent("a", 2), "        a");
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("TableInfo"));
        assert!(is_identifier("_x1"));
        assert!(!is_identifier("1x"));
        assert!(!is_identifier("a.b"));
        assert!(!is_identifier(""));
    }

    #[test]
    fn test_rust_ident_escapes_keywords() {
        assert_eq!(rust_ident("type"), "r#type");
        assert_eq!(rust_ident("oid"), "oid");
        assert_eq!(rust_ident("super"), "super_");
    }

    #[test]
    fn test_clean_doc() {
        let doc = "\n    List tables.\n\n    Args:\n        schema_oid: The schema.\n    ";
        assert_eq!(
            clean_doc(doc).as_deref(),
            Some("List tables.\n\nArgs:\n    schema_oid: The schema.")
        );
        assert_eq!(clean_doc("  \n  "), None);
    }

    #[test]
    fn test_python_literal() {
        assert_eq!(python_literal(&json!(null)), "None");
        assert_eq!(python_literal(&json!(true)), "True");
        assert_eq!(python_literal(&json!(100)), "100");
        assert_eq!(python_literal(&json!("it's")), "'it\\'s'");
        assert_eq!(python_literal(&json!(["a", 1])), "['a', 1]");
        assert_eq!(python_literal(&json!({"k": false})), "{'k': False}");
    }

    #[test]
    fn test_replace_identifier_whole_words_only() {
        assert_eq!(
            replace_identifier("list[ConstraintInfo]", "ConstraintInfo", "Any"),
            "list[Any]"
        );
        assert_eq!(
            replace_identifier("ConstraintInfoList", "ConstraintInfo", "Any"),
            "ConstraintInfoList"
        );
        assert_eq!(
            replace_identifier("Union[A, A]", "A", "B"),
            "Union[B, B]"
        );
    }
}
