//! Mathesar RPC stub generator.
//!
//! Turns the published Mathesar API reference (or an introspection dump of
//! the RPC modules) into two source files: record declarations in dependency
//! order and one stub per RPC method.

pub mod config;
pub mod emit;
pub mod error;
pub mod generator;
pub mod introspect;
pub mod ir;
pub mod scrape;

pub use config::{GeneratorConfig, OutputFiles, Substitutions};
pub use emit::{Dialect, GeneratedSources, Target, WrittenFiles};
pub use error::{CodegenError, CodegenResult};
pub use generator::Generator;
pub use introspect::IntrospectionDump;
pub use scrape::ScrapeDocument;
