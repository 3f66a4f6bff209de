//! Generation run driver.
//!
//! The pipeline is:
//! 1. Input: scrape document, introspection dump, or a scraped docs page
//! 2. Normalize: input -> ApiModel (fresh registry per run)
//! 3. Validate: every referenced record is defined
//! 4. Order: records in dependency order, cycles broken with forward tokens
//! 5. Emit: records file and methods file, both rendered before anything is written

use tracing::info;

use crate::config::GeneratorConfig;
use crate::emit::GeneratedSources;
use crate::error::CodegenResult;
use crate::introspect::IntrospectionDump;
use crate::ir::{ApiModel, normalize_document, normalize_introspection, order_records, validate_references};
use crate::scrape::{ScrapeDocument, scrape_url};

#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Render both output files for a normalized model.
    pub fn render(&self, model: &ApiModel) -> CodegenResult<GeneratedSources> {
        validate_references(model)?;
        let ordered = order_records(&model.registry)?;
        let dialect = self.config.target.dialect(&self.config.output_files());

        let sources = GeneratedSources {
            records: dialect.render_records(&ordered),
            methods: dialect.render_methods(&model.methods),
        };
        info!(
            target = %self.config.target,
            records = ordered.len(),
            methods = model.methods.len(),
            "Rendered sources."
        );
        Ok(sources)
    }

    pub fn from_document(&self, document: &ScrapeDocument) -> CodegenResult<GeneratedSources> {
        self.render(&normalize_document(document)?)
    }

    pub fn from_introspection(&self, dump: &IntrospectionDump) -> CodegenResult<GeneratedSources> {
        self.render(&normalize_introspection(dump)?)
    }

    /// Scrape `url` (or the configured docs URL) and render.
    pub async fn from_docs_url(&self, url: Option<&str>) -> CodegenResult<GeneratedSources> {
        let url = url.unwrap_or(&self.config.docs_url);
        let document = scrape_url(url, self.config.fetch_timeout(), &self.config.substitutions).await?;
        self.from_document(&document)
    }
}
