//! `mathesar scrape`: save the scraped API reference as a scrape document.

use std::path::PathBuf;

use clap::Args;
use mathesar_codegen::scrape::scrape_url;
use mathesar_codegen::{CodegenResult, GeneratorConfig};

use crate::common::run_command;

#[derive(Args, Debug, Clone)]
pub struct ScrapeArgs {
    /// API reference page; defaults to the configured docs URL
    #[arg(long, value_name = "URL")]
    pub docs_url: Option<String>,
    /// Output JSON file
    #[arg(long, value_name = "FILE")]
    pub out: PathBuf,
    /// Generator config (TOML)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

pub async fn run(args: ScrapeArgs) -> i32 {
    run_command(|| async move {
        scrape(&args).await.map_err(|err| err.to_string())?;
        println!("{}", args.out.display());
        Ok(())
    })
    .await
}

pub async fn scrape(args: &ScrapeArgs) -> CodegenResult<()> {
    let config = GeneratorConfig::load_or_default(args.config.as_deref())?;
    let url = args.docs_url.as_deref().unwrap_or(&config.docs_url);
    let document = scrape_url(url, config.fetch_timeout(), &config.substitutions).await?;
    document.write(&args.out)
}
