#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use mathesar_codegen::{
    CodegenError, Generator, GeneratorConfig, IntrospectionDump, ScrapeDocument, Target,
};
use pretty_assertions::assert_eq;

const TABLES_LIST: &str = r#"{
  "methods": [{"name": "tables.list", "params": [{"name": "schema_oid", "type": "int"}], "return": {"type": "list[TableInfo]"}}],
  "classes": [{"name": "TableInfo", "bases": "TypedDict", "attrs": [{"name": "oid", "type": "int", "description": "id"}]}]
}"#;

const MUTUAL: &str = r#"{
  "classes": [
    {"name": "A", "bases": "TypedDict", "attrs": [{"name": "b", "type": "B", "description": ""}]},
    {"name": "B", "bases": "TypedDict", "attrs": [{"name": "a", "type": "Optional[A]", "description": ""}]}
  ]
}"#;

fn python() -> Generator {
    Generator::default()
}

fn rust() -> Generator {
    Generator::new(GeneratorConfig {
        target: Target::Rust,
        ..Default::default()
    })
}

fn generate(generator: &Generator, json: &str) -> mathesar_codegen::GeneratedSources {
    generator
        .from_document(&ScrapeDocument::from_json(json).unwrap())
        .unwrap()
}

#[test]
fn test_tables_list_python_output() {
    let sources = generate(&python(), TABLES_LIST);
    assert_eq!(
        sources.records,
        r#"from typing import Any, Literal, NotRequired, Optional, TypedDict, Union


class TableInfo(TypedDict):
    """
    Attributes:
        oid: int - id
    """

    oid: int
"#
    );
    assert_eq!(
        sources.methods,
        r#"from .classes import *
from .client import Client, api


class Mathesar(Client):
    @api("tables.list")
    def tables_list(self, *, schema_oid: int) -> list[TableInfo]:
        ...
"#
    );
}

#[test]
fn test_tables_list_rust_output() {
    let sources = generate(&rust(), TABLES_LIST);
    assert!(sources.records.contains(
        "pub struct TableInfo {\n    /// id\n    pub oid: i64,\n}"
    ));
    assert!(sources.methods.contains(
        "pub async fn tables_list(&self, schema_oid: i64) -> ClientResult<Vec<TableInfo>> {"
    ));
    assert!(
        sources
            .methods
            .contains("self.call_typed(\"tables.list\", params).await")
    );
}

#[test]
fn test_mutual_references_emit_with_a_forward_token() {
    let sources = generate(&python(), MUTUAL);
    let a = sources.records.find("class A(TypedDict):").unwrap();
    let b = sources.records.find("class B(TypedDict):").unwrap();
    assert!(a < b);
    assert!(sources.records.contains("    b: 'B'\n"));
    assert!(sources.records.contains("    a: Optional[A]\n"));

    let sources = generate(&rust(), MUTUAL);
    assert!(sources.records.contains("    pub b: Box<B>,\n"));
    assert!(sources.records.contains("    pub a: Option<A>,\n"));
}

#[test]
fn test_self_reference_is_quoted() {
    let json = r#"{"classes": [{"name": "Node", "bases": "TypedDict", "attrs": [
        {"name": "value", "type": "int", "description": ""},
        {"name": "children", "type": "list[Node]", "description": ""},
        {"name": "parent", "type": "Optional[Node]", "description": ""}
    ]}]}"#;
    let sources = generate(&python(), json);
    assert!(sources.records.contains("    children: list['Node']\n"));
    assert!(sources.records.contains("    parent: Optional['Node']\n"));

    let sources = generate(&rust(), json);
    assert!(sources.records.contains("    pub children: Vec<Node>,\n"));
    assert!(sources.records.contains("    pub parent: Option<Box<Node>>,\n"));
}

#[test]
fn test_bare_references_point_backwards() {
    let json = r#"{"classes": [
        {"name": "Outer", "bases": "TypedDict", "attrs": [{"name": "mid", "type": "Middle", "description": ""}]},
        {"name": "Middle", "bases": "TypedDict", "attrs": [{"name": "inner", "type": "list[Inner]", "description": ""}]},
        {"name": "Inner", "bases": "TypedDict", "attrs": [{"name": "n", "type": "int", "description": ""}]}
    ]}"#;
    let records = generate(&python(), json).records;
    let pos = |name: &str| records.find(&format!("class {name}(")).unwrap();
    assert!(pos("Inner") < pos("Middle"));
    assert!(pos("Middle") < pos("Outer"));
    assert!(!records.contains('\''));
}

#[test]
fn test_output_is_deterministic() {
    let json = r#"{
      "methods": [
        {"name": "b.get", "params": [{"name": "x", "type": "int", "default": "1"}, {"name": "y", "type": "Y"}], "return": {"type": "Z"}},
        {"name": "a.get", "return": {"type": "dict[str, Y]"}}
      ],
      "classes": [
        {"name": "Z", "bases": "TypedDict", "attrs": [{"name": "y", "type": "Y", "description": ""}, {"name": "z", "type": "'Z'", "description": ""}]},
        {"name": "Y", "bases": "TypedDict", "attrs": [{"name": "z", "type": "NotRequired[Z]", "description": ""}]}
      ],
      "attributes": ["Alias = Union[Y, Z]"]
    }"#;
    let doc = ScrapeDocument::from_json(json).unwrap();
    for generator in [python(), rust()] {
        let first = generator.from_document(&doc).unwrap();
        let second = generator.from_document(&doc).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_unresolved_reference_fails_the_run() {
    let json = r#"{"methods": [{"name": "x.get", "return": {"type": "list[Ghost]"}}],
                   "classes": [{"name": "A", "bases": "TypedDict", "attrs": [{"name": "s", "type": "'Spook'", "description": ""}]}]}"#;
    let err = python()
        .from_document(&ScrapeDocument::from_json(json).unwrap())
        .unwrap_err();
    match err {
        CodegenError::DependencyUnresolved { names } => {
            assert_eq!(names, vec!["Ghost".to_string(), "Spook".to_string()]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_unsupported_type_fails_the_run() {
    let json = r#"{"methods": [{"name": "x.get", "params": [{"name": "p", "type": "tuple[int, int]"}]}]}"#;
    let err = python()
        .from_document(&ScrapeDocument::from_json(json).unwrap())
        .unwrap_err();
    assert!(matches!(err, CodegenError::UnsupportedTypeKind { .. }));
}

#[test]
fn test_absent_and_null_stay_distinct_in_output() {
    let json = r#"{"classes": [{"name": "Patch", "bases": "TypedDict", "attrs": [
        {"name": "nullable", "type": "Optional[str]", "description": ""},
        {"name": "absent", "type": "NotRequired[str]", "description": ""},
        {"name": "both", "type": "NotRequired[Optional[str]]", "description": ""}
    ]}]}"#;
    let py = generate(&python(), json).records;
    assert!(py.contains("    nullable: Optional[str]\n"));
    assert!(py.contains("    absent: NotRequired[str]\n"));
    assert!(py.contains("    both: NotRequired[Optional[str]]\n"));

    let rs = generate(&rust(), json).records;
    assert!(rs.contains("    #[serde(deserialize_with = \"nullable\")]\n    pub nullable: Option<String>,\n"));
    assert!(rs.contains(
        "    #[serde(default, skip_serializing_if = \"Option::is_none\")]\n    pub absent: Option<String>,\n"
    ));
    assert!(rs.contains("    pub both: Option<Option<String>>,\n"));
    assert!(rs.contains("use crate::rpc::{absent_or_null, nullable};"));
}

#[test]
fn test_introspection_path_matches_scrape_path() {
    let dump = IntrospectionDump::from_json(
        r#"{"methods": [{
            "name": "tables.list",
            "params": [{"name": "schema_oid", "annotation": {"kind": "class", "name": "int"}}],
            "return": {"kind": "list", "item": {"kind": "typed_dict", "name": "mathesar.rpc.tables.TableInfo", "doc": null, "fields": [
                {"name": "oid", "annotation": {"kind": "class", "name": "int"}, "description": "id"}
            ]}}
        }]}"#,
    )
    .unwrap();
    let from_dump = python().from_introspection(&dump).unwrap();
    let from_doc = generate(&python(), TABLES_LIST);
    assert_eq!(from_dump, from_doc);
}

#[test]
fn test_generated_files_are_written_together() {
    let dir = tempfile::tempdir().unwrap();
    let generator = python();
    let sources = generate(&generator, TABLES_LIST);
    let written = sources
        .write_to(dir.path(), &generator.config().output_files())
        .unwrap();
    assert_eq!(written.records, dir.path().join("classes.py"));
    assert_eq!(written.methods, dir.path().join("api.py"));
    assert_eq!(
        std::fs::read_to_string(written.methods).unwrap(),
        sources.methods
    );
}

#[tokio::test]
async fn test_generate_from_docs_url() {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    let page = r#"<html><body>
<div class="doc doc-object doc-function">
  <h3 class="doc doc-heading"><code>tables.list</code>¶</h3>
  <div class="doc doc-contents">
    <p><span class="doc-section-title">Parameters:</span></p>
    <table><tbody>
      <tr><td><code>schema_oid</code></td><td><code>int</code></td><td></td><td><em>required</em></td></tr>
    </tbody></table>
    <p><span class="doc-section-title">Returns:</span></p>
    <table><tbody><tr><td><code>list[TableInfo]</code></td><td></td></tr></tbody></table>
  </div>
</div>
<div class="doc doc-object doc-class">
  <h3 class="doc doc-heading"><code>TableInfo</code>¶</h3>
  <div class="doc doc-contents">
    <p class="doc doc-class-bases">Bases: <code>TypedDict</code></p>
    <p><span class="doc-section-title">Attributes:</span></p>
    <table><tbody><tr><td><code>oid</code></td><td><code>int</code></td><td>id</td></tr></tbody></table>
  </div>
</div>
</body></html>"#;

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/0.4.0/api/methods/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page))
        .mount(&server)
        .await;

    let url = format!("{}/0.4.0/api/methods/", server.uri());
    let sources = python().from_docs_url(Some(&url)).await.unwrap();
    assert_eq!(sources, generate(&python(), TABLES_LIST));
}
