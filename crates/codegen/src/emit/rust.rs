//! Rust target: serde records and async `impl Mathesar` stubs.
//!
//! The output is meant to replace `types.rs` and `api.rs` of the client crate.
//! - A record referenced before its declaration point (self references and
//!   the edge that breaks a cycle) is boxed unless a `Vec` or map already
//!   provides indirection
//! - `NotRequired` fields are `Option<T>` skipped when `None`
//! - `NotRequired` nullable fields are `Option<Option<T>>` so a missing key and
//!   an explicit `null` decode differently
//! - Unions and `Any` fall back to `serde_json::Value`; literal choices to `String`

use super::Dialect;
use super::stubs::{documentation, ordered_params};
use crate::ir::utils::{is_identifier, method_identifier, rust_ident};
use crate::ir::{
    FieldDescriptor, MethodDescriptor, OrderedRecord, Presence, Primitive, RecordKind, TypeExpr,
};

const RECORDS_HEADER: &str = "//! Record types of the Mathesar RPC API.\n//!\n//! Generated by `mathesar generate`; do not edit by hand.\n\n#![allow(missing_docs, clippy::derive_partial_eq_without_eq, clippy::struct_excessive_bools)]\n\nuse serde::{Deserialize, Serialize};";

const METHODS_HEADER: &str = "//! Typed Mathesar RPC method stubs.\n//!\n//! Generated by `mathesar generate`; do not edit by hand.\n\n#![allow(clippy::too_many_arguments, clippy::wildcard_imports)]\n\nuse crate::error::ClientResult;\nuse crate::rpc::Params;\nuse crate::types::*;\nuse crate::wrappers::Mathesar;";

#[derive(Debug, Clone, Copy, Default)]
pub struct RustDialect;

/// Whether a record reference sits directly in the value (needs boxing when
/// it points forward) or behind a heap-allocated container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    Direct,
    Indirect,
}

/// Render a type expression; `forward` names are boxed in direct position.
pub fn rust_type(ty: &TypeExpr, forward: &dyn Fn(&str) -> bool) -> String {
    render(ty, forward, Position::Direct)
}

fn render(ty: &TypeExpr, forward: &dyn Fn(&str) -> bool, position: Position) -> String {
    match ty {
        TypeExpr::Primitive(p) => match p {
            Primitive::Int => "i64",
            Primitive::Float => "f64",
            Primitive::Str => "String",
            Primitive::Bool => "bool",
            Primitive::Bytes => "Vec<u8>",
            Primitive::Any => "serde_json::Value",
            Primitive::None => "()",
            Primitive::Dict => "serde_json::Map<String, serde_json::Value>",
            Primitive::List => "Vec<serde_json::Value>",
        }
        .to_string(),
        TypeExpr::RecordRef(name) | TypeExpr::ForwardRef(name) => {
            if position == Position::Direct && forward(name) {
                format!("Box<{name}>")
            } else {
                name.clone()
            }
        }
        TypeExpr::ListOf(item) => format!("Vec<{}>", render(item, forward, Position::Indirect)),
        TypeExpr::MapOf(key, value) => {
            let key = match key.as_ref() {
                TypeExpr::Primitive(Primitive::Int) => "i64",
                TypeExpr::Primitive(Primitive::Bool) => "bool",
                _ => "String",
            };
            format!(
                "std::collections::BTreeMap<{key}, {}>",
                render(value, forward, Position::Indirect)
            )
        }
        TypeExpr::UnionOf(_) => "serde_json::Value".to_string(),
        TypeExpr::OptionalOf(inner) => format!("Option<{}>", render(inner, forward, position)),
        TypeExpr::LiteralOf(_) => "String".to_string(),
    }
}

fn doc_comment(text: &str, indent: &str) -> String {
    text.lines()
        .map(|line| {
            if line.trim().is_empty() {
                format!("{indent}///")
            } else {
                format!("{indent}/// {line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn needs_absent_or_null(field: &FieldDescriptor) -> bool {
    field.presence == Presence::NotRequired && matches!(field.ty, TypeExpr::OptionalOf(_))
}

/// Required keys whose value may be `null`; a missing key must still fail.
fn needs_nullable(field: &FieldDescriptor) -> bool {
    field.presence == Presence::Required && matches!(field.ty, TypeExpr::OptionalOf(_))
}

/// `crate::rpc` deserializers referenced by the records.
fn rpc_imports(records: &[OrderedRecord<'_>]) -> Vec<&'static str> {
    let fields = || {
        records.iter().flat_map(|ordered| match &ordered.record.kind {
            RecordKind::TypedDict(fields) => fields.as_slice(),
            RecordKind::Alias(_) => &[],
        })
    };
    let mut imports = Vec::new();
    if fields().any(needs_absent_or_null) {
        imports.push("absent_or_null");
    }
    if fields().any(needs_nullable) {
        imports.push("nullable");
    }
    imports
}

fn render_field(field: &FieldDescriptor, forward: &dyn Fn(&str) -> bool) -> String {
    let mut lines = Vec::new();
    if let Some(description) = &field.description {
        lines.push(doc_comment(description, "    "));
    }

    let (ident, rename) = if is_identifier(&field.name) {
        let ident = rust_ident(&field.name);
        let renamed = ident.strip_prefix("r#").unwrap_or(&ident) != field.name;
        (ident, renamed.then_some(field.name.as_str()))
    } else {
        let sanitized: String = field
            .name
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();
        (format!("field_{sanitized}"), Some(field.name.as_str()))
    };
    if let Some(original) = rename {
        lines.push(format!("    #[serde(rename = \"{original}\")]"));
    }

    let ty = rust_type(&field.ty, forward);
    let ty = match field.presence {
        Presence::Required if needs_nullable(field) => {
            lines.push("    #[serde(deserialize_with = \"nullable\")]".to_string());
            ty
        }
        Presence::Required => ty,
        Presence::NotRequired if needs_absent_or_null(field) => {
            lines.push(
                "    #[serde(default, deserialize_with = \"absent_or_null\", skip_serializing_if = \"Option::is_none\")]"
                    .to_string(),
            );
            format!("Option<{ty}>")
        }
        Presence::NotRequired => {
            lines.push("    #[serde(default, skip_serializing_if = \"Option::is_none\")]".to_string());
            format!("Option<{ty}>")
        }
    };
    lines.push(format!("    pub {ident}: {ty},"));
    lines.join("\n")
}

fn render_record(ordered: &OrderedRecord<'_>) -> String {
    let record = ordered.record;
    let forward = |name: &str| ordered.is_forward(name);
    let mut out = Vec::new();
    if let Some(doc) = &record.doc {
        out.push(doc_comment(doc, ""));
    }

    match &record.kind {
        RecordKind::Alias(ty) => {
            out.push(format!("pub type {} = {};", record.name, rust_type(ty, &forward)));
        }
        RecordKind::TypedDict(fields) => {
            out.push("#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]".to_string());
            if fields.is_empty() {
                out.push(format!("pub struct {} {{}}", record.name));
            } else {
                out.push(format!("pub struct {} {{", record.name));
                out.extend(fields.iter().map(|field| render_field(field, &forward)));
                out.push("}".to_string());
            }
        }
    }
    out.join("\n")
}

/// Render one async stub on `Mathesar`.
pub fn render_method(method: &MethodDescriptor) -> String {
    let no_forward = |_: &str| false;
    let mut lines = Vec::new();
    if let Some(doc) = documentation(method) {
        lines.push(doc_comment(&doc, "    "));
    }

    let params = ordered_params(method);
    let args = params
        .iter()
        .map(|param| {
            let ty = rust_type(&param.ty, &no_forward);
            if param.has_default() {
                format!("{}: Option<{ty}>", rust_ident(&param.name))
            } else {
                format!("{}: {ty}", rust_ident(&param.name))
            }
        })
        .collect::<Vec<_>>();

    let (returns, call) = match &method.returns {
        Some(ret) if ret.is_unit() => ("()".to_string(), "call"),
        Some(ret) => (rust_type(&ret.ty, &no_forward), "call_typed"),
        None => ("serde_json::Value".to_string(), "call"),
    };

    let mut signature = String::from("&self");
    for arg in &args {
        signature.push_str(", ");
        signature.push_str(arg);
    }
    lines.push(format!(
        "    pub async fn {}({signature}) -> ClientResult<{returns}> {{",
        rust_ident(&method_identifier(&method.name))
    ));

    if params.is_empty() {
        lines.push("        let params = Params::new();".to_string());
    } else {
        lines.push("        let params = Params::new()".to_string());
        for param in &params {
            let builder = if param.has_default() { "opt" } else { "arg" };
            lines.push(format!(
                "            .{builder}(\"{}\", {})?",
                param.name,
                rust_ident(&param.name)
            ));
        }
        if let Some(last) = lines.last_mut() {
            last.push(';');
        }
    }

    let call_line = match &method.returns {
        Some(ret) if ret.is_unit() => format!(
            "        self.{call}(\"{}\", params).await.map(drop)",
            method.name
        ),
        _ => format!("        self.{call}(\"{}\", params).await", method.name),
    };
    lines.push(call_line);
    lines.push("    }".to_string());
    lines.join("\n")
}

/// `SIGNATURES` table: parameter names per method, in stub order.
fn render_signatures(methods: &[MethodDescriptor]) -> String {
    let mut lines = vec![
        "/// Parameter names of every method, in call order.".to_string(),
        "pub const SIGNATURES: &[(&str, &[&str])] = &[".to_string(),
    ];
    for method in methods {
        let names = ordered_params(method)
            .iter()
            .map(|param| format!("\"{}\"", param.name))
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!("    (\"{}\", &[{names}]),", method.name));
    }
    lines.push("];".to_string());
    lines.join("\n")
}

impl Dialect for RustDialect {
    fn render_records(&self, records: &[OrderedRecord<'_>]) -> String {
        let mut header = RECORDS_HEADER.to_string();
        match rpc_imports(records).as_slice() {
            [] => {}
            [single] => header.push_str(&format!("\n\nuse crate::rpc::{single};")),
            several => header.push_str(&format!("\n\nuse crate::rpc::{{{}}};", several.join(", "))),
        }

        let mut blocks = vec![header];
        blocks.extend(records.iter().map(render_record));
        let mut out = blocks.join("\n\n");
        out.push('\n');
        out
    }

    fn render_methods(&self, methods: &[MethodDescriptor]) -> String {
        let body = methods
            .iter()
            .map(render_method)
            .collect::<Vec<_>>()
            .join("\n\n");
        let stubs = if body.is_empty() {
            "impl Mathesar {}".to_string()
        } else {
            format!("impl Mathesar {{\n{body}\n}}")
        };
        format!("{METHODS_HEADER}\n\n{stubs}\n\n{}\n", render_signatures(methods))
    }
}
