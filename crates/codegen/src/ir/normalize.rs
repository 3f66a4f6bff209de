//! Normalization from generator inputs to the API model.
//!
//! Both input paths land in the same [`ApiModel`]:
//! - Scrape documents: classes, then module aliases, then methods, so records
//!   are discovered in document order
//! - Introspection dumps: extra records, then methods in dump order
//!
//! A fresh [`TypeRegistry`] is created per call.

use tracing::debug;

use super::annotation::{TypeContext, last_segment, parse_annotation, parse_type_text};
use super::registry::TypeRegistry;
use super::types::{
    ApiModel, FieldDescriptor, MethodDescriptor, ParameterDescriptor, RecordKind,
    ReturnDescriptor, TypeExpr,
};
use super::utils::{clean_doc, is_identifier, non_empty, python_literal};
use crate::error::{CodegenError, CodegenResult};
use crate::introspect::{Annotation, IntrospectedMethod, IntrospectionDump};
use crate::scrape::{ScrapeDocument, ScrapedClass, ScrapedMethod};

/// Parameters that only exist to absorb extra call arguments.
const VARIADIC_PARAMS: &[&str] = &["args", "kwargs"];

/// Normalize a scrape document.
pub fn normalize_document(doc: &ScrapeDocument) -> CodegenResult<ApiModel> {
    let mut registry = TypeRegistry::new();

    for class in &doc.classes {
        normalize_class(class, &mut registry)?;
    }
    for attribute in &doc.attributes {
        normalize_alias(attribute, &mut registry)?;
    }
    let methods = doc
        .methods
        .iter()
        .map(|method| normalize_method(method, &mut registry))
        .collect::<CodegenResult<Vec<_>>>()?;

    debug!(
        methods = methods.len(),
        records = registry.len(),
        "Normalized scrape document."
    );
    Ok(ApiModel { methods, registry })
}

fn normalize_class(class: &ScrapedClass, registry: &mut TypeRegistry) -> CodegenResult<()> {
    let name = last_segment(class.name.trim());
    if class.bases.trim() != "TypedDict" {
        return Err(CodegenError::unsupported(
            format!("base `{}`", class.bases.trim()),
            name,
        ));
    }
    if !registry.claim(name, non_empty(&class.description)) {
        return Err(CodegenError::DuplicateRecord(name.to_string()));
    }

    let mut fields = Vec::with_capacity(class.attrs.len());
    for attr in &class.attrs {
        let text = attr.ty.as_deref().unwrap_or("Any");
        let parsed = parse_type_text(text, TypeContext::Field, registry)?;
        fields.push(FieldDescriptor {
            name: attr.name.trim().to_string(),
            ty: parsed.ty,
            presence: parsed.presence,
            description: non_empty(&attr.description),
        });
    }
    registry.fill(name, RecordKind::TypedDict(fields));
    Ok(())
}

/// `Name = <type expression>`
fn normalize_alias(text: &str, registry: &mut TypeRegistry) -> CodegenResult<()> {
    let (name, ty) = text
        .split_once('=')
        .ok_or_else(|| CodegenError::InvalidAttribute(text.to_string()))?;
    let name = name.trim();
    if !is_identifier(name) {
        return Err(CodegenError::InvalidAttribute(text.to_string()));
    }
    if !registry.claim(name, None) {
        return Err(CodegenError::DuplicateRecord(name.to_string()));
    }
    let parsed = parse_type_text(ty, TypeContext::Alias, registry)?;
    registry.fill(name, RecordKind::Alias(parsed.ty));
    Ok(())
}

fn normalize_method(
    method: &ScrapedMethod,
    registry: &mut TypeRegistry,
) -> CodegenResult<MethodDescriptor> {
    let params = method
        .params
        .iter()
        .map(|param| {
            let parsed = parse_type_text(&param.ty, TypeContext::Parameter, registry)?;
            Ok(ParameterDescriptor {
                name: param.name.trim().to_string(),
                ty: parsed.ty,
                default: param.default.as_ref().map(|d| d.trim().to_string()),
                doc: non_empty(&param.description),
            })
        })
        .collect::<CodegenResult<Vec<_>>>()?;

    let returns = method
        .returns
        .as_ref()
        .map(|ret| {
            let parsed = parse_type_text(&ret.ty, TypeContext::Return, registry)?;
            Ok::<_, CodegenError>(ReturnDescriptor {
                ty: parsed.ty,
                doc: non_empty(&ret.description),
            })
        })
        .transpose()?;

    Ok(MethodDescriptor {
        name: method.name.trim().to_string(),
        doc: method.description.as_deref().and_then(clean_doc),
        params,
        returns,
    })
}

/// Normalize an introspection dump.
pub fn normalize_introspection(dump: &IntrospectionDump) -> CodegenResult<ApiModel> {
    let mut registry = TypeRegistry::new();

    for record in &dump.records {
        if !matches!(record, Annotation::TypedDict { .. }) {
            return Err(CodegenError::unsupported(
                "record",
                format!("{record:?}"),
            ));
        }
        parse_annotation(record, TypeContext::Return, &mut registry)?;
    }
    let methods = dump
        .methods
        .iter()
        .map(|method| introspected_method(method, &mut registry))
        .collect::<CodegenResult<Vec<_>>>()?;

    debug!(
        methods = methods.len(),
        records = registry.len(),
        "Normalized introspection dump."
    );
    Ok(ApiModel { methods, registry })
}

fn introspected_method(
    method: &IntrospectedMethod,
    registry: &mut TypeRegistry,
) -> CodegenResult<MethodDescriptor> {
    let mut params = Vec::with_capacity(method.params.len());
    for param in &method.params {
        if VARIADIC_PARAMS.contains(&param.name.as_str()) {
            continue;
        }
        let ty = match &param.annotation {
            Some(annotation) => parse_annotation(annotation, TypeContext::Parameter, registry)?,
            None => TypeExpr::any(),
        };
        params.push(ParameterDescriptor {
            name: param.name.clone(),
            ty,
            default: param.default.as_ref().map(python_literal),
            doc: None,
        });
    }

    let returns = match &method.returns {
        None | Some(Annotation::None) => None,
        Some(annotation) => Some(ReturnDescriptor {
            ty: parse_annotation(annotation, TypeContext::Return, registry)?,
            doc: None,
        }),
    };

    Ok(MethodDescriptor {
        name: method.name.clone(),
        doc: method.doc.as_deref().and_then(clean_doc),
        params,
        returns,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::ir::types::{Presence, Primitive};
    use crate::scrape::{ScrapedAttr, ScrapedParam, ScrapedReturn};

    fn class(name: &str, attrs: &[(&str, &str)]) -> ScrapedClass {
        ScrapedClass {
            name: name.into(),
            bases: "TypedDict".into(),
            description: String::new(),
            attrs: attrs
                .iter()
                .map(|(n, t)| ScrapedAttr {
                    name: (*n).into(),
                    ty: Some((*t).into()),
                    description: String::new(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_classes_are_discovered_in_document_order() {
        let doc = ScrapeDocument {
            classes: vec![class("A", &[("b", "B")]), class("B", &[("n", "int")])],
            ..Default::default()
        };
        let model = normalize_document(&doc).unwrap();
        let names: Vec<_> = model.registry.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert!(model.registry.undefined_names().is_empty());
    }

    #[test]
    fn test_non_typed_dict_base_is_unsupported() {
        let mut bad = class("A", &[]);
        bad.bases = "Enum".into();
        let doc = ScrapeDocument {
            classes: vec![bad],
            ..Default::default()
        };
        let err = normalize_document(&doc).unwrap_err();
        assert!(matches!(err, CodegenError::UnsupportedTypeKind { .. }));
    }

    #[test]
    fn test_duplicate_class_is_rejected() {
        let doc = ScrapeDocument {
            classes: vec![class("pkg.A", &[]), class("A", &[])],
            ..Default::default()
        };
        let err = normalize_document(&doc).unwrap_err();
        assert!(matches!(err, CodegenError::DuplicateRecord(name) if name == "A"));
    }

    #[test]
    fn test_alias_attribute() {
        let doc = ScrapeDocument {
            classes: vec![class("U", &[]), class("F", &[])],
            attributes: vec!["ConstraintInfo = Union[F, U]".into()],
            ..Default::default()
        };
        let model = normalize_document(&doc).unwrap();
        let alias = model.registry.get("ConstraintInfo").unwrap();
        assert_eq!(
            alias.kind,
            RecordKind::Alias(TypeExpr::UnionOf(vec![
                TypeExpr::RecordRef("F".into()),
                TypeExpr::RecordRef("U".into()),
            ]))
        );
    }

    #[test]
    fn test_invalid_alias_attribute() {
        for text in ["no assignment here", "a.b = int"] {
            let doc = ScrapeDocument {
                attributes: vec![text.into()],
                ..Default::default()
            };
            let err = normalize_document(&doc).unwrap_err();
            assert!(matches!(err, CodegenError::InvalidAttribute(_)), "{text}");
        }
    }

    #[test]
    fn test_method_params_defaults_and_return() {
        let doc = ScrapeDocument {
            methods: vec![ScrapedMethod {
                name: "records.list".into(),
                description: Some("List records.".into()),
                params: vec![
                    ScrapedParam {
                        name: "limit".into(),
                        ty: "int".into(),
                        description: "Page size.".into(),
                        default: Some("100".into()),
                    },
                    ScrapedParam {
                        name: "filter".into(),
                        ty: String::new(),
                        description: String::new(),
                        default: None,
                    },
                ],
                returns: Some(ScrapedReturn {
                    ty: "None".into(),
                    description: String::new(),
                }),
            }],
            ..Default::default()
        };
        let model = normalize_document(&doc).unwrap();
        let method = &model.methods[0];
        assert_eq!(method.params[0].default.as_deref(), Some("100"));
        assert_eq!(method.params[0].doc.as_deref(), Some("Page size."));
        assert_eq!(method.params[1].ty, TypeExpr::any());
        assert_eq!(method.params[1].doc, None);
        assert!(method.returns.as_ref().unwrap().is_unit());
    }

    #[test]
    fn test_introspection_skips_variadics_and_renders_defaults() {
        let dump = IntrospectionDump::from_json(
            r#"{"methods": [{
                "name": "schemas.patch",
                "doc": "\n    Patch a schema.\n    ",
                "params": [
                    {"name": "schema_oid", "annotation": {"kind": "class", "name": "int"}},
                    {"name": "name", "annotation": {"kind": "union", "members": [{"kind": "class", "name": "str"}, {"kind": "none"}]}, "default": null},
                    {"name": "kwargs"}
                ],
                "return": {"kind": "none"}
            }]}"#,
        )
        .unwrap();
        let model = normalize_introspection(&dump).unwrap();
        let method = &model.methods[0];
        assert_eq!(method.doc.as_deref(), Some("Patch a schema."));
        assert_eq!(method.params.len(), 2);
        assert_eq!(method.params[1].default.as_deref(), Some("None"));
        assert_eq!(
            method.params[1].ty,
            TypeExpr::OptionalOf(Box::new(TypeExpr::Primitive(Primitive::Str)))
        );
        assert_eq!(method.returns, None);
    }

    #[test]
    fn test_introspected_optional_field_stays_required() {
        let dump = IntrospectionDump::from_json(
            r#"{"records": [{"kind": "typed_dict", "name": "SchemaInfo", "fields": [
                {"name": "description", "annotation": {"kind": "union", "members": [{"kind": "class", "name": "str"}, {"kind": "none"}]}},
                {"name": "comment", "annotation": {"kind": "class", "name": "str"}, "required": false}
            ]}]}"#,
        )
        .unwrap();
        let model = normalize_introspection(&dump).unwrap();
        let RecordKind::TypedDict(fields) = &model.registry.get("SchemaInfo").unwrap().kind else {
            panic!("expected typed dict");
        };
        assert_eq!(fields[0].presence, Presence::Required);
        assert!(matches!(fields[0].ty, TypeExpr::OptionalOf(_)));
        assert_eq!(fields[1].presence, Presence::NotRequired);
    }
}
