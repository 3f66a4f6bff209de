//! Reference validation and dependency ordering of record declarations.
//!
//! Ordering is a bounded FIFO work queue:
//! - a record is emitted once every record it references by bare name is emitted
//! - otherwise it is requeued at the tail
//! - a full pass without progress either names undefined records
//!   (`DependencyUnresolved`) or breaks a cycle by emitting the first pending
//!   record that lies on a cycle, with forward tokens for its unemitted
//!   references

use std::collections::{BTreeSet, HashSet, VecDeque};

use tracing::debug;

use super::registry::TypeRegistry;
use super::types::{ApiModel, RecordDescriptor};
use crate::error::{CodegenError, CodegenResult};

/// A record in emission order, plus the names it must reference through
/// forward tokens because they are not declared yet at that point
/// (always including itself when self-referential).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedRecord<'a> {
    pub record: &'a RecordDescriptor,
    pub forward: BTreeSet<String>,
}

impl OrderedRecord<'_> {
    pub fn is_forward(&self, name: &str) -> bool {
        self.forward.contains(name)
    }
}

/// Check that every record name used anywhere in the model is defined.
pub fn validate_references(model: &ApiModel) -> CodegenResult<()> {
    let registry = &model.registry;
    let mut missing = BTreeSet::new();
    let exprs = registry
        .iter()
        .filter(|record| record.defined)
        .flat_map(|record| record.type_exprs())
        .chain(model.methods.iter().flat_map(|method| method.type_exprs()));

    for ty in exprs {
        ty.visit_refs(&mut |_, name| {
            if !registry.is_defined(name) {
                missing.insert(name.to_string());
            }
        });
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(CodegenError::DependencyUnresolved {
            names: missing.into_iter().collect(),
        })
    }
}

/// Arrange every defined record so that bare references always point
/// backwards. Among ready records, discovery order is kept.
pub fn order_records(registry: &TypeRegistry) -> CodegenResult<Vec<OrderedRecord<'_>>> {
    let mut queue: VecDeque<&RecordDescriptor> = registry.iter().filter(|r| r.defined).collect();
    let total = queue.len();
    let max_passes = 2 * total + 1;

    let mut emitted: HashSet<&str> = HashSet::with_capacity(total);
    let mut ordered = Vec::with_capacity(total);
    let mut passes = 0;

    while !queue.is_empty() {
        passes += 1;
        if passes > max_passes {
            return Err(CodegenError::DependencyUnresolved {
                names: queue.iter().map(|r| r.name.clone()).collect(),
            });
        }

        let mut progress = false;
        for _ in 0..queue.len() {
            let Some(record) = queue.pop_front() else {
                break;
            };
            if record.dependencies().iter().all(|dep| emitted.contains(dep)) {
                ordered.push(place(record, &mut emitted));
                progress = true;
            } else {
                queue.push_back(record);
            }
        }

        if progress {
            continue;
        }

        // Requeueing a whole pass keeps the queue in discovery order.
        let undefined: BTreeSet<String> = queue
            .iter()
            .flat_map(|r| r.dependencies())
            .filter(|dep| !registry.is_defined(dep))
            .map(str::to_string)
            .collect();
        if !undefined.is_empty() {
            return Err(CodegenError::DependencyUnresolved {
                names: undefined.into_iter().collect(),
            });
        }

        let index = queue
            .iter()
            .position(|record| on_cycle(record, &queue))
            .unwrap_or(0);
        if let Some(record) = queue.remove(index) {
            debug!(
                record = %record.name,
                pending = queue.len(),
                "Breaking dependency cycle with forward references."
            );
            ordered.push(place(record, &mut emitted));
        }
    }

    Ok(ordered)
}

/// Whether `record` reaches itself through dependencies on pending records.
fn on_cycle(record: &RecordDescriptor, pending: &VecDeque<&RecordDescriptor>) -> bool {
    let lookup = |name: &str| pending.iter().find(|r| r.name == name).copied();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut stack: Vec<&str> = record.dependencies();
    while let Some(name) = stack.pop() {
        if name == record.name {
            return true;
        }
        if !seen.insert(name) {
            continue;
        }
        if let Some(next) = lookup(name) {
            stack.extend(next.dependencies());
        }
    }
    false
}

fn place<'a>(record: &'a RecordDescriptor, emitted: &mut HashSet<&'a str>) -> OrderedRecord<'a> {
    let mut forward = BTreeSet::new();
    for ty in record.type_exprs() {
        ty.visit_refs(&mut |_, name| {
            if !emitted.contains(name) {
                forward.insert(name.to_string());
            }
        });
    }
    emitted.insert(record.name.as_str());
    OrderedRecord { record, forward }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::ir::types::{
        FieldDescriptor, MethodDescriptor, ParameterDescriptor, Presence, Primitive, TypeExpr,
    };

    fn field(name: &str, ty: TypeExpr) -> FieldDescriptor {
        FieldDescriptor {
            name: name.into(),
            ty,
            presence: Presence::Required,
            description: None,
        }
    }

    fn rec(name: &str) -> TypeExpr {
        TypeExpr::RecordRef(name.into())
    }

    fn define(registry: &mut TypeRegistry, name: &str, refs: &[TypeExpr]) {
        let fields = refs
            .iter()
            .enumerate()
            .map(|(i, ty)| field(&format!("f{i}"), ty.clone()))
            .collect();
        registry
            .define(RecordDescriptor::typed_dict(name, None, fields))
            .unwrap();
    }

    fn names(ordered: &[OrderedRecord<'_>]) -> Vec<String> {
        ordered.iter().map(|o| o.record.name.clone()).collect()
    }

    #[test]
    fn test_dependencies_come_first_in_fifo_order() {
        let mut registry = TypeRegistry::new();
        define(&mut registry, "A", &[rec("C")]);
        define(&mut registry, "B", &[TypeExpr::Primitive(Primitive::Int)]);
        define(&mut registry, "C", &[rec("B")]);
        define(&mut registry, "D", &[]);

        let ordered = order_records(&registry).unwrap();
        assert_eq!(names(&ordered), vec!["B", "C", "D", "A"]);
        assert!(ordered.iter().all(|o| o.forward.is_empty()));
    }

    #[test]
    fn test_self_reference_is_forward_without_error() {
        let mut registry = TypeRegistry::new();
        define(
            &mut registry,
            "Node",
            &[TypeExpr::ListOf(Box::new(rec("Node")))],
        );
        let ordered = order_records(&registry).unwrap();
        assert_eq!(names(&ordered), vec!["Node"]);
        assert!(ordered[0].is_forward("Node"));
    }

    #[test]
    fn test_mutual_cycle_breaks_at_first_discovered() {
        let mut registry = TypeRegistry::new();
        define(&mut registry, "A", &[rec("B")]);
        define(
            &mut registry,
            "B",
            &[TypeExpr::OptionalOf(Box::new(rec("A")))],
        );
        define(&mut registry, "C", &[rec("A")]);

        let ordered = order_records(&registry).unwrap();
        assert_eq!(names(&ordered), vec!["A", "B", "C"]);
        assert!(ordered[0].is_forward("B"));
        assert!(ordered[1].forward.is_empty());
        assert!(ordered[2].forward.is_empty());
    }

    #[test]
    fn test_cycle_breaks_on_a_cycle_member_only() {
        let mut registry = TypeRegistry::new();
        define(&mut registry, "X", &[rec("A")]);
        define(&mut registry, "A", &[rec("B")]);
        define(&mut registry, "B", &[rec("A")]);

        let ordered = order_records(&registry).unwrap();
        assert_eq!(names(&ordered), vec!["A", "B", "X"]);
        assert!(ordered[0].is_forward("B"));
        assert!(ordered[1].forward.is_empty());
        assert!(ordered[2].forward.is_empty());
    }

    #[test]
    fn test_explicit_forward_ref_does_not_block() {
        let mut registry = TypeRegistry::new();
        define(&mut registry, "A", &[TypeExpr::ForwardRef("B".into())]);
        define(&mut registry, "B", &[]);
        let ordered = order_records(&registry).unwrap();
        assert_eq!(names(&ordered), vec!["A", "B"]);
        assert!(ordered[0].is_forward("B"));
    }

    #[test]
    fn test_undefined_reference_is_unresolved() {
        let mut registry = TypeRegistry::new();
        let missing = registry.reference("Missing");
        define(&mut registry, "A", &[missing]);
        let err = order_records(&registry).unwrap_err();
        assert!(
            matches!(err, CodegenError::DependencyUnresolved { names } if names == vec!["Missing".to_string()])
        );
    }

    #[test]
    fn test_validate_lists_every_missing_name_sorted() {
        let mut model = ApiModel::default();
        let zed = model.registry.reference("Zed");
        let alpha = model.registry.forward("Alpha");
        define(&mut model.registry, "A", &[zed]);
        model.methods.push(MethodDescriptor {
            name: "x.y".into(),
            doc: None,
            params: vec![ParameterDescriptor {
                name: "p".into(),
                ty: TypeExpr::ListOf(Box::new(alpha)),
                default: None,
                doc: None,
            }],
            returns: None,
        });

        let err = validate_references(&model).unwrap_err();
        assert!(
            matches!(err, CodegenError::DependencyUnresolved { names } if names == vec!["Alpha".to_string(), "Zed".to_string()])
        );
    }
}
