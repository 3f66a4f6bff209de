//! Name → record registry scoped to a single generation run.
//!
//! Records keep their discovery order: a name is positioned the first time it
//! is referenced or defined, whichever comes first. That order is the
//! tie-break for emission, so it must never be re-sorted.

use std::collections::HashMap;

use indexmap::IndexMap;

use super::types::{RecordDescriptor, RecordKind, TypeExpr};
use crate::error::{CodegenError, CodegenResult};

#[derive(Debug, Default, Clone)]
pub struct TypeRegistry {
    records: IndexMap<String, RecordDescriptor>,
    /// Qualified name and field names of each introspected record
    shapes: HashMap<String, (String, Vec<String>)>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a bare reference to `name`, registering an undefined stub if unseen.
    pub fn reference(&mut self, name: &str) -> TypeExpr {
        self.ensure_stub(name);
        TypeExpr::RecordRef(name.to_string())
    }

    /// Return a forward reference to `name`, registering an undefined stub if unseen.
    pub fn forward(&mut self, name: &str) -> TypeExpr {
        self.ensure_stub(name);
        TypeExpr::ForwardRef(name.to_string())
    }

    fn ensure_stub(&mut self, name: &str) {
        if !self.records.contains_key(name) {
            self.records
                .insert(name.to_string(), RecordDescriptor::stub(name));
        }
    }

    /// Claim `name` for definition. Returns `false` when the record is
    /// already defined (or being defined), in which case callers must not
    /// parse it again.
    pub fn claim(&mut self, name: &str, doc: Option<String>) -> bool {
        match self.records.get_mut(name) {
            Some(record) if record.defined => false,
            Some(record) => {
                record.defined = true;
                record.doc = doc;
                true
            }
            None => {
                let mut record = RecordDescriptor::stub(name);
                record.defined = true;
                record.doc = doc;
                self.records.insert(name.to_string(), record);
                true
            }
        }
    }

    /// [`TypeRegistry::claim`] for an introspected record known by its
    /// qualified name and field names. Seeing the same record again returns
    /// `false`; a different record with the same short name is a duplicate.
    /// An empty field list (a recursive occurrence) only checks the name.
    pub fn claim_shaped(
        &mut self,
        name: &str,
        qualified: &str,
        field_names: Vec<String>,
        doc: Option<String>,
    ) -> CodegenResult<bool> {
        let shape = (qualified.to_string(), field_names);
        if self.is_defined(name) {
            return match self.shapes.get(name) {
                Some((origin, names))
                    if *origin != shape.0 || (!shape.1.is_empty() && *names != shape.1) =>
                {
                    Err(CodegenError::DuplicateRecord(name.to_string()))
                }
                _ => Ok(false),
            };
        }
        self.shapes.insert(name.to_string(), shape);
        Ok(self.claim(name, doc))
    }

    /// Fill the body of a record previously claimed.
    pub fn fill(&mut self, name: &str, kind: RecordKind) {
        if let Some(record) = self.records.get_mut(name) {
            record.kind = kind;
        }
    }

    /// Define a complete record in one step.
    pub fn define(&mut self, record: RecordDescriptor) -> CodegenResult<()> {
        if !self.claim(&record.name, record.doc.clone()) {
            return Err(CodegenError::DuplicateRecord(record.name));
        }
        self.fill(&record.name, record.kind);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&RecordDescriptor> {
        self.records.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn is_defined(&self, name: &str) -> bool {
        self.records.get(name).is_some_and(|r| r.defined)
    }

    /// Records in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &RecordDescriptor> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Names that were referenced but never defined, in discovery order.
    pub fn undefined_names(&self) -> Vec<&str> {
        self.records
            .values()
            .filter(|r| !r.defined)
            .map(|r| r.name.as_str())
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::ir::types::Primitive;

    #[test]
    fn test_reference_registers_stub_once() {
        let mut registry = TypeRegistry::new();
        assert_eq!(
            registry.reference("TableInfo"),
            TypeExpr::RecordRef("TableInfo".into())
        );
        registry.forward("TableInfo");
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.undefined_names(), vec!["TableInfo"]);
    }

    #[test]
    fn test_define_fills_stub_in_place() {
        let mut registry = TypeRegistry::new();
        registry.reference("B");
        registry
            .define(RecordDescriptor::alias("A", TypeExpr::Primitive(Primitive::Int)))
            .unwrap();
        registry
            .define(RecordDescriptor::alias("B", TypeExpr::Primitive(Primitive::Str)))
            .unwrap();

        let names: Vec<_> = registry.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
        assert!(registry.undefined_names().is_empty());
    }

    #[test]
    fn test_duplicate_definition_is_rejected() {
        let mut registry = TypeRegistry::new();
        registry
            .define(RecordDescriptor::typed_dict("A", None, Vec::new()))
            .unwrap();
        let err = registry
            .define(RecordDescriptor::typed_dict("A", None, Vec::new()))
            .unwrap_err();
        assert!(matches!(err, CodegenError::DuplicateRecord(name) if name == "A"));
    }

    #[test]
    fn test_claim_is_idempotent() {
        let mut registry = TypeRegistry::new();
        assert!(registry.claim("Node", Some("doc".into())));
        assert!(!registry.claim("Node", None));
        assert_eq!(registry.get("Node").unwrap().doc.as_deref(), Some("doc"));
    }
}
