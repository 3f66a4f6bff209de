//! Target-independent parts of method stub rendering.

use crate::ir::{MethodDescriptor, ParameterDescriptor};

/// Parameters without defaults first, then parameters with defaults; relative
/// order inside each group is preserved.
pub fn ordered_params(method: &MethodDescriptor) -> Vec<&ParameterDescriptor> {
    let (required, defaulted): (Vec<_>, Vec<_>) =
        method.params.iter().partition(|param| !param.has_default());
    required.into_iter().chain(defaulted).collect()
}

/// Documentation block of a stub: the description, then one `:param name: doc`
/// line per documented parameter and a `:return: doc` line.
pub fn documentation(method: &MethodDescriptor) -> Option<String> {
    let mut lines: Vec<String> = method
        .params
        .iter()
        .filter_map(|param| {
            param
                .doc
                .as_ref()
                .map(|doc| format!(":param {}: {doc}", param.name))
        })
        .collect();
    if let Some(doc) = method.returns.as_ref().and_then(|ret| ret.doc.as_ref()) {
        lines.push(format!(":return: {doc}"));
    }

    match (&method.doc, lines.is_empty()) {
        (None, true) => None,
        (None, false) => Some(lines.join("\n")),
        (Some(doc), true) => Some(doc.clone()),
        (Some(doc), false) => Some(format!("{doc}\n\n{}", lines.join("\n"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{ReturnDescriptor, TypeExpr};

    fn param(name: &str, default: Option<&str>, doc: Option<&str>) -> ParameterDescriptor {
        ParameterDescriptor {
            name: name.into(),
            ty: TypeExpr::any(),
            default: default.map(str::to_string),
            doc: doc.map(str::to_string),
        }
    }

    fn method(params: Vec<ParameterDescriptor>) -> MethodDescriptor {
        MethodDescriptor {
            name: "records.list".into(),
            doc: None,
            params,
            returns: None,
        }
    }

    #[test]
    fn test_defaults_move_after_required_params() {
        let m = method(vec![
            param("limit", Some("100"), None),
            param("table_oid", None, None),
            param("offset", Some("0"), None),
            param("database_id", None, None),
        ]);
        let names: Vec<_> = ordered_params(&m).iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["table_oid", "database_id", "limit", "offset"]);
    }

    #[test]
    fn test_documentation_block() {
        let mut m = method(vec![
            param("table_oid", None, Some("The table.")),
            param("limit", Some("100"), None),
        ]);
        assert_eq!(
            documentation(&m).as_deref(),
            Some(":param table_oid: The table.")
        );

        m.doc = Some("List records.".into());
        m.returns = Some(ReturnDescriptor {
            ty: TypeExpr::any(),
            doc: Some("The records.".into()),
        });
        assert_eq!(
            documentation(&m).as_deref(),
            Some("List records.\n\n:param table_oid: The table.\n:return: The records.")
        );
    }

    #[test]
    fn test_no_documentation() {
        assert_eq!(documentation(&method(Vec::new())), None);
    }
}
