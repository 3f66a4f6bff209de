//! Scraped documentation model and page fetching.
//!
//! The scrape document is the flat intermediate form between the HTML
//! reference and the annotation parser. It is also the on-disk format written
//! by `mathesar scrape` and read by `mathesar generate --scrape`.

mod html;

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::Substitutions;
use crate::error::{CodegenError, CodegenResult};

pub use html::parse_document;

/// Flat scrape result: methods, record classes and module-level aliases.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrapeDocument {
    #[serde(default)]
    pub methods: Vec<ScrapedMethod>,
    #[serde(default)]
    pub classes: Vec<ScrapedClass>,
    /// Raw alias assignments, e.g. `ConstraintInfo = Union[A, B]`
    #[serde(default)]
    pub attributes: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrapedMethod {
    pub name: String,
    #[serde(default, alias = "doc", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<ScrapedParam>,
    #[serde(default, rename = "return", skip_serializing_if = "Option::is_none")]
    pub returns: Option<ScrapedReturn>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrapedParam {
    pub name: String,
    /// Type text; empty means `Any`
    #[serde(default, rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub description: String,
    /// Default value as source text; absent when the parameter is required
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrapedReturn {
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrapedClass {
    pub name: String,
    #[serde(default = "typed_dict_base")]
    pub bases: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub attrs: Vec<ScrapedAttr>,
}

fn typed_dict_base() -> String {
    "TypedDict".to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrapedAttr {
    pub name: String,
    /// Missing when the docs only list `name: description`
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<String>,
    #[serde(default)]
    pub description: String,
}

impl ScrapeDocument {
    pub fn from_json(json: &str) -> CodegenResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn read(path: &Path) -> CodegenResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|err| CodegenError::io(path, err))?;
        Self::from_json(&json)
    }

    /// Pretty JSON with two-space indentation.
    pub fn to_json(&self) -> CodegenResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write(&self, path: &Path) -> CodegenResult<()> {
        let mut json = self.to_json()?;
        json.push('\n');
        std::fs::write(path, json).map_err(|err| CodegenError::io(path, err))
    }
}

/// Fetch the documentation page at `url`.
pub async fn fetch_page(url: &str, timeout: Duration) -> CodegenResult<String> {
    let fetch_err = |source| CodegenError::Fetch {
        url: url.to_string(),
        source,
    };

    debug!(url = %url, timeout_secs = timeout.as_secs(), "Fetching documentation page.");
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(fetch_err)?;
    let response = client
        .get(url)
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(fetch_err)?;
    let body = response.text().await.map_err(fetch_err)?;
    debug!(bytes = body.len(), "Fetched documentation page.");
    Ok(body)
}

/// Fetch and scrape the documentation page at `url`.
pub async fn scrape_url(
    url: &str,
    timeout: Duration,
    substitutions: &Substitutions,
) -> CodegenResult<ScrapeDocument> {
    let html = fetch_page(url, timeout).await?;
    let document = parse_document(&html, substitutions)?;
    info!(
        methods = document.methods.len(),
        classes = document.classes.len(),
        attributes = document.attributes.len(),
        "Scraped documentation."
    );
    Ok(document)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_document_parses() {
        let doc = ScrapeDocument::from_json(
            r#"{"methods": [{"name": "tables.list", "params": [{"name": "schema_oid", "type": "int"}], "return": {"type": "list[TableInfo]"}}], "classes": [{"name": "TableInfo", "bases": "TypedDict", "attrs": [{"name": "oid", "type": "int", "description": "id"}]}]}"#,
        )
        .unwrap();
        assert_eq!(doc.methods[0].params[0].ty, "int");
        assert_eq!(doc.methods[0].params[0].default, None);
        assert_eq!(
            doc.methods[0].returns.as_ref().map(|r| r.ty.as_str()),
            Some("list[TableInfo]")
        );
        assert_eq!(doc.classes[0].attrs[0].ty.as_deref(), Some("int"));
        assert!(doc.attributes.is_empty());
    }

    #[test]
    fn test_doc_is_accepted_as_description() {
        let doc = ScrapeDocument::from_json(r#"{"methods": [{"name": "a.b", "doc": "Hi."}]}"#)
            .unwrap();
        assert_eq!(doc.methods[0].description.as_deref(), Some("Hi."));
    }

    #[test]
    fn test_json_is_two_space_indented() {
        let doc = ScrapeDocument {
            attributes: vec!["A = int".into()],
            ..Default::default()
        };
        let json = doc.to_json().unwrap();
        assert!(json.contains("\n  \"attributes\": [\n    \"A = int\"\n  ]"));
        assert_eq!(ScrapeDocument::from_json(&json).unwrap(), doc);
    }

    #[tokio::test]
    async fn test_fetch_page_reports_http_errors() {
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/methods/"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let url = format!("{}/api/methods/", server.uri());
        let err = fetch_page(&url, Duration::from_secs(5)).await.unwrap_err();
        assert!(matches!(err, CodegenError::Fetch { .. }));
    }
}
