//! Introspection dump input.
//!
//! An external tool loads the RPC modules of a Mathesar checkout, walks the
//! annotated callables and serializes each annotation as a tree of
//! [`Annotation`] nodes. The dump is the only contract with that tool.

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{CodegenError, CodegenResult};

/// A serialized type annotation.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Annotation {
    /// A TypedDict class
    TypedDict {
        name: String,
        #[serde(default)]
        doc: Option<String>,
        #[serde(default)]
        fields: Vec<AnnotatedField>,
    },
    /// A plain class object such as `int` or `str`
    Class { name: String },
    Literal { values: Vec<Value> },
    List { item: Box<Annotation> },
    Dict {
        key: Box<Annotation>,
        value: Box<Annotation>,
    },
    Union { members: Vec<Annotation> },
    Any,
    None,
    /// `typing.ForwardRef` or a string annotation
    ForwardRef { name: String },
    /// Anything the dumper could not classify; carries its `repr`
    Other { repr: String },
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AnnotatedField {
    pub name: String,
    pub annotation: Annotation,
    #[serde(default = "default_required")]
    pub required: bool,
    #[serde(default)]
    pub description: Option<String>,
}

fn default_required() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct IntrospectedParam {
    pub name: String,
    #[serde(default)]
    pub annotation: Option<Annotation>,
    /// Default value, present only when the parameter has one
    #[serde(default, deserialize_with = "present_value")]
    pub default: Option<Value>,
}

/// Keeps an explicit `null` default distinct from a missing one.
fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct IntrospectedMethod {
    /// Dotted RPC name
    pub name: String,
    #[serde(default)]
    pub doc: Option<String>,
    #[serde(default)]
    pub params: Vec<IntrospectedParam>,
    #[serde(default, rename = "return")]
    pub returns: Option<Annotation>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct IntrospectionDump {
    #[serde(default)]
    pub methods: Vec<IntrospectedMethod>,
    /// Extra records to register even when no method references them
    #[serde(default)]
    pub records: Vec<Annotation>,
}

impl IntrospectionDump {
    pub fn from_json(json: &str) -> CodegenResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn read(path: &Path) -> CodegenResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|err| CodegenError::io(path, err))?;
        Self::from_json(&json)
    }
}
