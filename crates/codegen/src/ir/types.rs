//! Normalized API model shared by every generation path.
//!
//! - TypeExpr: closed type-expression tree decided once at parse time
//! - RecordDescriptor / FieldDescriptor: TypedDict records and aliases
//! - MethodDescriptor / ParameterDescriptor / ReturnDescriptor: RPC surface

use super::registry::TypeRegistry;

/// Built-in leaf types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Int,
    Float,
    Str,
    Bool,
    Bytes,
    Any,
    None,
    /// Bare `dict` without type arguments
    Dict,
    /// Bare `list` without type arguments
    List,
}

impl Primitive {
    /// Map a builtin identifier to a primitive.
    pub fn from_ident(ident: &str) -> Option<Self> {
        match ident {
            "int" => Some(Self::Int),
            "float" => Some(Self::Float),
            "str" => Some(Self::Str),
            "bool" => Some(Self::Bool),
            "bytes" => Some(Self::Bytes),
            "Any" | "object" => Some(Self::Any),
            "None" | "NoneType" => Some(Self::None),
            "dict" | "Dict" => Some(Self::Dict),
            "list" | "List" => Some(Self::List),
            _ => None,
        }
    }
}

/// Normalized type expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeExpr {
    Primitive(Primitive),
    /// Named reference to a record, resolved by registry lookup
    RecordRef(String),
    ListOf(Box<TypeExpr>),
    MapOf(Box<TypeExpr>, Box<TypeExpr>),
    UnionOf(Vec<TypeExpr>),
    /// Key present, value may be null
    OptionalOf(Box<TypeExpr>),
    LiteralOf(Vec<String>),
    /// Textual reference that must be resolved by name at emission time
    ForwardRef(String),
}

/// How a record name is referenced from inside a type expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefKind {
    Bare,
    Forward,
}

impl TypeExpr {
    pub fn any() -> Self {
        Self::Primitive(Primitive::Any)
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::Primitive(Primitive::None))
    }

    /// Visit every record name referenced by this expression, depth first.
    pub fn visit_refs<'a>(&'a self, visit: &mut impl FnMut(RefKind, &'a str)) {
        match self {
            Self::Primitive(_) | Self::LiteralOf(_) => {}
            Self::RecordRef(name) => visit(RefKind::Bare, name),
            Self::ForwardRef(name) => visit(RefKind::Forward, name),
            Self::ListOf(inner) | Self::OptionalOf(inner) => inner.visit_refs(visit),
            Self::MapOf(key, value) => {
                key.visit_refs(visit);
                value.visit_refs(visit);
            }
            Self::UnionOf(members) => {
                for member in members {
                    member.visit_refs(visit);
                }
            }
        }
    }

    /// The same type with every bare record reference made forward.
    pub fn into_forward(self) -> Self {
        match self {
            Self::RecordRef(name) => Self::ForwardRef(name),
            Self::ListOf(inner) => Self::ListOf(Box::new(inner.into_forward())),
            Self::OptionalOf(inner) => Self::OptionalOf(Box::new(inner.into_forward())),
            Self::MapOf(key, value) => {
                Self::MapOf(Box::new(key.into_forward()), Box::new(value.into_forward()))
            }
            Self::UnionOf(members) => {
                Self::UnionOf(members.into_iter().map(Self::into_forward).collect())
            }
            other @ (Self::Primitive(_) | Self::LiteralOf(_) | Self::ForwardRef(_)) => other,
        }
    }

    /// Names referenced with a bare `RecordRef`.
    pub fn bare_refs(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.visit_refs(&mut |kind, name| {
            if kind == RefKind::Bare {
                names.push(name);
            }
        });
        names
    }
}

/// Whether a record key may be missing entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Presence {
    #[default]
    Required,
    /// The key may be absent (`NotRequired[...]`)
    NotRequired,
}

/// A type expression together with the presence marker of its position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedType {
    pub ty: TypeExpr,
    pub presence: Presence,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    pub ty: TypeExpr,
    pub presence: Presence,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordKind {
    /// Structural record with named fields
    TypedDict(Vec<FieldDescriptor>),
    /// Module-level alias: `Name = <type>`
    Alias(TypeExpr),
}

/// A named record declaration. Created as an undefined stub on first
/// reference and filled in once its definition is parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDescriptor {
    pub name: String,
    pub doc: Option<String>,
    pub kind: RecordKind,
    pub defined: bool,
}

impl RecordDescriptor {
    pub fn stub(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            kind: RecordKind::TypedDict(Vec::new()),
            defined: false,
        }
    }

    pub fn typed_dict(
        name: impl Into<String>,
        doc: Option<String>,
        fields: Vec<FieldDescriptor>,
    ) -> Self {
        Self {
            name: name.into(),
            doc,
            kind: RecordKind::TypedDict(fields),
            defined: true,
        }
    }

    pub fn alias(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self {
            name: name.into(),
            doc: None,
            kind: RecordKind::Alias(ty),
            defined: true,
        }
    }

    /// All type expressions held by the record, in declaration order.
    pub fn type_exprs(&self) -> Vec<&TypeExpr> {
        match &self.kind {
            RecordKind::TypedDict(fields) => fields.iter().map(|f| &f.ty).collect(),
            RecordKind::Alias(ty) => vec![ty],
        }
    }

    /// Names this record needs declared before its own declaration.
    /// Self references are excluded; they are always emitted as forward tokens.
    pub fn dependencies(&self) -> Vec<&str> {
        let mut deps: Vec<&str> = Vec::new();
        for ty in self.type_exprs() {
            for name in ty.bare_refs() {
                if name != self.name && !deps.contains(&name) {
                    deps.push(name);
                }
            }
        }
        deps
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterDescriptor {
    pub name: String,
    pub ty: TypeExpr,
    /// Default value as source literal text (e.g. `100`, `'id'`, `None`)
    pub default: Option<String>,
    pub doc: Option<String>,
}

impl ParameterDescriptor {
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnDescriptor {
    pub ty: TypeExpr,
    pub doc: Option<String>,
}

impl ReturnDescriptor {
    /// A documented `None` return carries no value.
    pub fn is_unit(&self) -> bool {
        self.ty.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDescriptor {
    /// Dotted RPC identifier, e.g. `tables.list`
    pub name: String,
    pub doc: Option<String>,
    pub params: Vec<ParameterDescriptor>,
    pub returns: Option<ReturnDescriptor>,
}

impl MethodDescriptor {
    pub fn type_exprs(&self) -> Vec<&TypeExpr> {
        let mut exprs: Vec<&TypeExpr> = self.params.iter().map(|p| &p.ty).collect();
        if let Some(returns) = &self.returns {
            exprs.push(&returns.ty);
        }
        exprs
    }
}

/// Everything one generation run knows about the API.
#[derive(Debug, Default)]
pub struct ApiModel {
    pub methods: Vec<MethodDescriptor>,
    pub registry: TypeRegistry,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str, ty: TypeExpr) -> FieldDescriptor {
        FieldDescriptor {
            name: name.into(),
            ty,
            presence: Presence::Required,
            description: None,
        }
    }

    #[test]
    fn test_dependencies_skip_self_and_forward_refs() {
        let record = RecordDescriptor::typed_dict(
            "Node",
            None,
            vec![
                field("next", TypeExpr::RecordRef("Node".into())),
                field("owner", TypeExpr::ForwardRef("User".into())),
                field(
                    "tags",
                    TypeExpr::ListOf(Box::new(TypeExpr::RecordRef("Tag".into()))),
                ),
                field(
                    "extra",
                    TypeExpr::MapOf(
                        Box::new(TypeExpr::Primitive(Primitive::Str)),
                        Box::new(TypeExpr::RecordRef("Tag".into())),
                    ),
                ),
            ],
        );
        assert_eq!(record.dependencies(), vec!["Tag"]);
    }

    #[test]
    fn test_visit_refs_reports_kinds() {
        let ty = TypeExpr::UnionOf(vec![
            TypeExpr::RecordRef("A".into()),
            TypeExpr::OptionalOf(Box::new(TypeExpr::ForwardRef("B".into()))),
        ]);
        let mut seen = Vec::new();
        ty.visit_refs(&mut |kind, name| seen.push((kind, name.to_string())));
        assert_eq!(
            seen,
            vec![(RefKind::Bare, "A".into()), (RefKind::Forward, "B".into())]
        );
    }

    #[test]
    fn test_primitive_from_ident() {
        assert_eq!(Primitive::from_ident("int"), Some(Primitive::Int));
        assert_eq!(Primitive::from_ident("NoneType"), Some(Primitive::None));
        assert_eq!(Primitive::from_ident("TableInfo"), None);
    }
}
