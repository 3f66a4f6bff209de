//! `mathesar generate`: render record and stub files from one input.

use std::path::PathBuf;

use clap::Args;
use mathesar_codegen::{
    CodegenResult, GeneratedSources, Generator, GeneratorConfig, IntrospectionDump,
    ScrapeDocument, WrittenFiles,
};

use crate::common::{TargetArg, run_command};

/// Exactly one input source.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct SourceArgs {
    /// Scrape document (JSON) written by `mathesar scrape`
    #[arg(long, value_name = "FILE")]
    pub scrape: Option<PathBuf>,
    /// Introspection dump (JSON)
    #[arg(long, value_name = "FILE")]
    pub introspection: Option<PathBuf>,
    /// Fetch and scrape the API reference at this URL
    #[arg(long, value_name = "URL")]
    pub docs_url: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub source: SourceArgs,
    /// Directory receiving the two generated files
    #[arg(long, value_name = "DIR")]
    pub out_dir: PathBuf,
    /// Overrides the config file's target
    #[arg(long, value_enum)]
    pub target: Option<TargetArg>,
    /// Generator config (TOML)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

pub async fn run(args: GenerateArgs) -> i32 {
    run_command(|| async move {
        let written = generate(&args).await.map_err(|err| err.to_string())?;
        println!("{}", written.records.display());
        println!("{}", written.methods.display());
        Ok(())
    })
    .await
}

pub async fn generate(args: &GenerateArgs) -> CodegenResult<WrittenFiles> {
    let mut config = GeneratorConfig::load_or_default(args.config.as_deref())?;
    if let Some(target) = args.target {
        config.target = target.into();
    }
    let generator = Generator::new(config);
    let sources = render(&generator, &args.source).await?;
    sources.write_to(&args.out_dir, &generator.config().output_files())
}

async fn render(generator: &Generator, source: &SourceArgs) -> CodegenResult<GeneratedSources> {
    match (&source.scrape, &source.introspection, &source.docs_url) {
        (Some(path), _, _) => generator.from_document(&ScrapeDocument::read(path)?),
        (None, Some(path), _) => generator.from_introspection(&IntrospectionDump::read(path)?),
        (None, None, url) => generator.from_docs_url(url.as_deref()).await,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    const DOCUMENT: &str = r#"{
      "methods": [{"name": "tables.list", "params": [{"name": "schema_oid", "type": "int"}], "return": {"type": "list[TableInfo]"}}],
      "classes": [{"name": "TableInfo", "bases": "TypedDict", "attrs": [{"name": "oid", "type": "int", "description": "id"}]}]
    }"#;

    fn args(scrape: PathBuf, out_dir: PathBuf, target: Option<TargetArg>) -> GenerateArgs {
        GenerateArgs {
            source: SourceArgs {
                scrape: Some(scrape),
                introspection: None,
                docs_url: None,
            },
            out_dir,
            target,
            config: None,
        }
    }

    #[tokio::test]
    async fn test_generate_from_scrape_document() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("scrape.json");
        std::fs::write(&input, DOCUMENT).unwrap();

        let written = generate(&args(input.clone(), dir.path().join("py"), None))
            .await
            .unwrap();
        assert!(written.records.ends_with("classes.py"));
        let methods = std::fs::read_to_string(&written.methods).unwrap();
        assert!(methods.contains("def tables_list(self, *, schema_oid: int) -> list[TableInfo]:"));

        let written = generate(&args(input, dir.path().join("rs"), Some(TargetArg::Rust)))
            .await
            .unwrap();
        assert!(written.records.ends_with("types.rs"));
        assert!(written.methods.ends_with("api.rs"));
    }

    #[tokio::test]
    async fn test_failed_generation_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("scrape.json");
        std::fs::write(
            &input,
            r#"{"methods": [{"name": "x.get", "return": {"type": "Ghost"}}]}"#,
        )
        .unwrap();
        let out = dir.path().join("out");
        assert!(generate(&args(input, out.clone(), None)).await.is_err());
        assert!(!out.exists());
    }
}
