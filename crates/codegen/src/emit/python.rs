//! Python target: `TypedDict` records and `@api` stubs on `class Mathesar(Client)`.
//!
//! Records that are not declared yet at their point of use are written as
//! quoted forward references (`'Name'`), as are explicit forward references.

use super::Dialect;
use super::stubs::{documentation, ordered_params};
use crate::ir::utils::{indent, method_identifier, python_str};
use crate::ir::{
    FieldDescriptor, MethodDescriptor, OrderedRecord, Presence, Primitive, RecordKind, TypeExpr,
};

const RECORDS_HEADER: &str =
    "from typing import Any, Literal, NotRequired, Optional, TypedDict, Union";

#[derive(Debug, Clone)]
pub struct PythonDialect {
    /// Module the method file star-imports records from
    records_module: String,
}

impl PythonDialect {
    pub fn new(records_module: impl Into<String>) -> Self {
        Self {
            records_module: records_module.into(),
        }
    }
}

impl Default for PythonDialect {
    fn default() -> Self {
        Self::new("classes")
    }
}

/// Render a type expression; `forward` decides which record names are quoted.
pub fn python_type(ty: &TypeExpr, forward: &dyn Fn(&str) -> bool) -> String {
    match ty {
        TypeExpr::Primitive(p) => match p {
            Primitive::Int => "int",
            Primitive::Float => "float",
            Primitive::Str => "str",
            Primitive::Bool => "bool",
            Primitive::Bytes => "bytes",
            Primitive::Any => "Any",
            Primitive::None => "None",
            Primitive::Dict => "dict",
            Primitive::List => "list",
        }
        .to_string(),
        TypeExpr::RecordRef(name) if forward(name) => format!("'{name}'"),
        TypeExpr::RecordRef(name) => name.clone(),
        TypeExpr::ForwardRef(name) => format!("'{name}'"),
        TypeExpr::ListOf(item) => format!("list[{}]", python_type(item, forward)),
        TypeExpr::MapOf(key, value) => format!(
            "dict[{}, {}]",
            python_type(key, forward),
            python_type(value, forward)
        ),
        TypeExpr::UnionOf(members) => format!(
            "Union[{}]",
            members
                .iter()
                .map(|m| python_type(m, forward))
                .collect::<Vec<_>>()
                .join(", ")
        ),
        TypeExpr::OptionalOf(inner) => format!("Optional[{}]", python_type(inner, forward)),
        TypeExpr::LiteralOf(values) => format!(
            "Literal[{}]",
            values
                .iter()
                .map(|v| python_str(v))
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }
}

fn field_annotation(field: &FieldDescriptor, forward: &dyn Fn(&str) -> bool) -> String {
    let ty = python_type(&field.ty, forward);
    match field.presence {
        Presence::Required => ty,
        Presence::NotRequired => format!("NotRequired[{ty}]"),
    }
}

/// Triple-quoted docstring, indented by the caller.
fn docstring(text: &str) -> String {
    let escaped = text.replace('\\', "\\\\").replace("\"\"\"", "\\\"\\\"\\\"");
    format!("\"\"\"\n{escaped}\n\"\"\"")
}

fn render_record(ordered: &OrderedRecord<'_>) -> String {
    let record = ordered.record;
    let forward = |name: &str| ordered.is_forward(name);

    let fields = match &record.kind {
        RecordKind::Alias(ty) => return format!("{} = {}", record.name, python_type(ty, &forward)),
        RecordKind::TypedDict(fields) => fields,
    };

    let mut doc = Vec::new();
    if let Some(description) = &record.doc {
        doc.push(description.clone());
    }
    if !fields.is_empty() {
        if !doc.is_empty() {
            doc.push(String::new());
        }
        doc.push("Attributes:".to_string());
        for field in fields {
            let mut line = format!("    {}: {}", field.name, field_annotation(field, &forward));
            if let Some(description) = &field.description {
                line.push_str(" - ");
                line.push_str(description);
            }
            doc.push(line);
        }
    }

    let mut body = Vec::new();
    if !doc.is_empty() {
        body.push(docstring(&doc.join("\n")));
    }
    if !fields.is_empty() {
        body.push(
            fields
                .iter()
                .map(|field| format!("{}: {}", field.name, field_annotation(field, &forward)))
                .collect::<Vec<_>>()
                .join("\n"),
        );
    }
    if body.is_empty() {
        body.push("pass".to_string());
    }

    format!(
        "class {}(TypedDict):\n{}",
        record.name,
        indent(&body.join("\n\n"), 1)
    )
}

/// Render one `@api` stub.
pub fn render_method(method: &MethodDescriptor) -> String {
    let no_forward = |_: &str| false;
    let params = ordered_params(method)
        .into_iter()
        .map(|param| {
            let mut text = format!("{}: {}", param.name, python_type(&param.ty, &no_forward));
            if let Some(default) = &param.default {
                text.push_str(" = ");
                text.push_str(default);
            }
            text
        })
        .collect::<Vec<_>>();
    let params = if params.is_empty() {
        String::new()
    } else {
        format!(", *, {}", params.join(", "))
    };
    let returns = match &method.returns {
        Some(ret) if !ret.is_unit() => format!(" -> {}", python_type(&ret.ty, &no_forward)),
        _ => String::new(),
    };
    let body = match documentation(method) {
        Some(doc) => format!("{}\n\n...", docstring(&doc)),
        None => "...".to_string(),
    };

    format!(
        "@api(\"{}\")\ndef {}(self{params}){returns}:\n{}",
        method.name,
        method_identifier(&method.name),
        indent(&body, 1)
    )
}

impl Dialect for PythonDialect {
    fn render_records(&self, records: &[OrderedRecord<'_>]) -> String {
        let mut blocks = vec![RECORDS_HEADER.to_string()];
        blocks.extend(records.iter().map(render_record));
        let mut out = blocks.join("\n\n\n");
        out.push('\n');
        out
    }

    fn render_methods(&self, methods: &[MethodDescriptor]) -> String {
        let body = if methods.is_empty() {
            "pass".to_string()
        } else {
            methods
                .iter()
                .map(render_method)
                .collect::<Vec<_>>()
                .join("\n\n")
        };
        format!(
            "from .{} import *\nfrom .client import Client, api\n\n\nclass Mathesar(Client):\n{}\n",
            self.records_module,
            indent(&body, 1)
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::ir::{ParameterDescriptor, RecordDescriptor, ReturnDescriptor};
    use pretty_assertions::assert_eq;
    use std::collections::BTreeSet;

    fn no_forward(_: &str) -> bool {
        false
    }

    #[test]
    fn test_type_rendering() {
        let ty = TypeExpr::OptionalOf(Box::new(TypeExpr::UnionOf(vec![
            TypeExpr::ListOf(Box::new(TypeExpr::RecordRef("A".into()))),
            TypeExpr::MapOf(
                Box::new(TypeExpr::Primitive(Primitive::Str)),
                Box::new(TypeExpr::ForwardRef("B".into())),
            ),
            TypeExpr::LiteralOf(vec!["x".into(), "y".into()]),
        ])));
        assert_eq!(
            python_type(&ty, &no_forward),
            "Optional[Union[list[A], dict[str, 'B'], Literal['x', 'y']]]"
        );
        assert_eq!(
            python_type(&TypeExpr::RecordRef("A".into()), &|n| n == "A"),
            "'A'"
        );
    }

    #[test]
    fn test_record_with_doc_and_not_required_field() {
        let record = RecordDescriptor::typed_dict(
            "SchemaInfo",
            Some("Information about a schema.".into()),
            vec![
                FieldDescriptor {
                    name: "oid".into(),
                    ty: TypeExpr::Primitive(Primitive::Int),
                    presence: Presence::Required,
                    description: Some("The OID.".into()),
                },
                FieldDescriptor {
                    name: "description".into(),
                    ty: TypeExpr::OptionalOf(Box::new(TypeExpr::Primitive(Primitive::Str))),
                    presence: Presence::NotRequired,
                    description: None,
                },
            ],
        );
        let ordered = OrderedRecord {
            record: &record,
            forward: BTreeSet::new(),
        };
        assert_eq!(
            render_record(&ordered),
            r#"class SchemaInfo(TypedDict):
    """
    Information about a schema.

    Attributes:
        oid: int - The OID.
        description: NotRequired[Optional[str]]
    """

    oid: int
    description: NotRequired[Optional[str]]"#
        );
    }

    #[test]
    fn test_empty_record_and_alias() {
        let empty = RecordDescriptor::typed_dict("Empty", None, Vec::new());
        assert_eq!(
            render_record(&OrderedRecord {
                record: &empty,
                forward: BTreeSet::new(),
            }),
            "class Empty(TypedDict):\n    pass"
        );

        let alias = RecordDescriptor::alias(
            "ConstraintInfo",
            TypeExpr::UnionOf(vec![
                TypeExpr::RecordRef("F".into()),
                TypeExpr::RecordRef("U".into()),
            ]),
        );
        assert_eq!(
            render_record(&OrderedRecord {
                record: &alias,
                forward: BTreeSet::from(["U".to_string()]),
            }),
            "ConstraintInfo = Union[F, 'U']"
        );
    }

    #[test]
    fn test_method_stub() {
        let method = MethodDescriptor {
            name: "records.list".into(),
            doc: Some("List records.\nWith \"\"\"quotes\"\"\".".into()),
            params: vec![
                ParameterDescriptor {
                    name: "limit".into(),
                    ty: TypeExpr::Primitive(Primitive::Int),
                    default: Some("100".into()),
                    doc: None,
                },
                ParameterDescriptor {
                    name: "table_oid".into(),
                    ty: TypeExpr::Primitive(Primitive::Int),
                    default: None,
                    doc: Some("The table.".into()),
                },
            ],
            returns: Some(ReturnDescriptor {
                ty: TypeExpr::RecordRef("RecordList".into()),
                doc: None,
            }),
        };
        assert_eq!(
            render_method(&method),
            r#"@api("records.list")
def records_list(self, *, table_oid: int, limit: int = 100) -> RecordList:
    """
    List records.
    With \"\"\"quotes\"\"\".

    :param table_oid: The table.
    """

    ..."#
        );
    }

    #[test]
    fn test_method_without_params_or_return() {
        let method = MethodDescriptor {
            name: "analytics.initialize".into(),
            doc: None,
            params: Vec::new(),
            returns: Some(ReturnDescriptor {
                ty: TypeExpr::Primitive(Primitive::None),
                doc: None,
            }),
        };
        assert_eq!(
            render_method(&method),
            "@api(\"analytics.initialize\")\ndef analytics_initialize(self):\n    ..."
        );
    }

    #[test]
    fn test_methods_file_layout() {
        let out = PythonDialect::default().render_methods(&[]);
        assert_eq!(
            out,
            "from .classes import *\nfrom .client import Client, api\n\n\nclass Mathesar(Client):\n    pass\n"
        );
    }
}
