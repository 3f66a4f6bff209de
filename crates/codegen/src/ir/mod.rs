//! Intermediate representation for Mathesar stub generation.
//!
//! Inputs are normalized once into an [`ApiModel`]; every type annotation is
//! decided at parse time into a closed [`TypeExpr`] tree, so the emitters only
//! reorder and print.
//!
//! ## Module Structure
//!
//! - `types`: API model (TypeExpr, RecordDescriptor, MethodDescriptor, ...)
//! - `registry`: per-run name → record registry
//! - `annotation`: type text and introspected annotation parsing
//! - `normalize`: scrape document / introspection dump -> ApiModel
//! - `resolve`: reference validation and dependency ordering
//! - `utils`: helpers shared with the emitters

mod annotation;
mod normalize;
mod registry;
mod resolve;
mod types;
pub mod utils;

pub use annotation::{TypeContext, build_union, last_segment, parse_annotation, parse_type_text};
pub use normalize::{normalize_document, normalize_introspection};
pub use registry::TypeRegistry;
pub use resolve::{OrderedRecord, order_records, validate_references};
pub use types::{
    ApiModel, FieldDescriptor, MethodDescriptor, ParameterDescriptor, ParsedType, Presence,
    Primitive, RecordDescriptor, RecordKind, RefKind, ReturnDescriptor, TypeExpr,
};
