//! Type-annotation parser.
//!
//! Two front ends produce the same [`ParsedType`]:
//! - `parse_type_text`: Python typing text scraped from the docs
//!   (`list[TableInfo]`, `Optional[Literal['a', 'b']]`, `'Node'`, `int | None`);
//!   a quoted expression such as `'list[Node]'` is parsed with every record
//!   inside it forward
//! - `parse_annotation`: introspected annotation trees
//!
//! Both register every record they discover in the run's [`TypeRegistry`].

use super::registry::TypeRegistry;
use super::types::{
    FieldDescriptor, ParsedType, Presence, Primitive, RecordKind, TypeExpr,
};
use super::utils::is_identifier;
use crate::error::{CodegenError, CodegenResult};
use crate::introspect::Annotation;

/// Where an annotation appears. Only record fields may be absent-capable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeContext {
    Field,
    Parameter,
    Return,
    Alias,
}

impl TypeContext {
    const fn label(self) -> &'static str {
        match self {
            Self::Field => "field",
            Self::Parameter => "parameter",
            Self::Return => "return",
            Self::Alias => "alias",
        }
    }
}

/// Identifiers that name real types we deliberately do not model.
const UNSUPPORTED_IDENTS: &[&str] = &[
    "tuple", "Tuple", "set", "Set", "frozenset", "FrozenSet", "Callable", "type", "Type",
];

/// Parse scraped type text.
pub fn parse_type_text(
    text: &str,
    context: TypeContext,
    registry: &mut TypeRegistry,
) -> CodegenResult<ParsedType> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(ParsedType {
            ty: TypeExpr::any(),
            presence: Presence::Required,
        });
    }

    let tokens = tokenize(trimmed)?;
    let mut parser = TextParser {
        text: trimmed,
        tokens,
        pos: 0,
        registry,
    };
    let parsed = parser.parse_top(context)?;
    parser.expect_end()?;
    Ok(parsed)
}

// =============================================================================
// Tokenizer
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Ident(String),
    Str(String),
    Number(String),
    Open,
    Close,
    Comma,
    Pipe,
}

#[derive(Debug, Clone)]
struct Spanned {
    token: Token,
    offset: usize,
}

fn syntax_error(text: &str, offset: usize, message: impl Into<String>) -> CodegenError {
    CodegenError::Syntax {
        text: text.to_string(),
        offset,
        message: message.into(),
    }
}

fn tokenize(text: &str) -> CodegenResult<Vec<Spanned>> {
    let mut tokens = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some(&(offset, c)) = chars.peek() {
        let token = match c {
            c if c.is_whitespace() => {
                chars.next();
                continue;
            }
            '[' => {
                chars.next();
                Token::Open
            }
            ']' => {
                chars.next();
                Token::Close
            }
            ',' => {
                chars.next();
                Token::Comma
            }
            '|' => {
                chars.next();
                Token::Pipe
            }
            '\'' | '"' => {
                chars.next();
                let mut value = String::new();
                let mut closed = false;
                while let Some((_, ch)) = chars.next() {
                    match ch {
                        '\\' => {
                            if let Some((_, escaped)) = chars.next() {
                                value.push(escaped);
                            }
                        }
                        ch if ch == c => {
                            closed = true;
                            break;
                        }
                        ch => value.push(ch),
                    }
                }
                if !closed {
                    return Err(syntax_error(text, offset, "unterminated string"));
                }
                Token::Str(value)
            }
            c if c.is_ascii_digit() || c == '-' => {
                let mut value = String::new();
                while let Some(&(_, ch)) = chars.peek() {
                    if ch.is_ascii_alphanumeric() || ch == '.' || ch == '-' {
                        value.push(ch);
                        chars.next();
                    } else {
                        break;
                    }
                }
                Token::Number(value)
            }
            c if c.is_alphabetic() || c == '_' => {
                let mut value = String::new();
                while let Some(&(_, ch)) = chars.peek() {
                    if ch.is_alphanumeric() || ch == '_' || ch == '.' {
                        value.push(ch);
                        chars.next();
                    } else {
                        break;
                    }
                }
                Token::Ident(value)
            }
            other => {
                return Err(syntax_error(
                    text,
                    offset,
                    format!("unexpected character `{other}`"),
                ));
            }
        };
        tokens.push(Spanned { token, offset });
    }

    Ok(tokens)
}

// =============================================================================
// Text parser
// =============================================================================

struct TextParser<'a> {
    text: &'a str,
    tokens: Vec<Spanned>,
    pos: usize,
    registry: &'a mut TypeRegistry,
}

impl TextParser<'_> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|s| &s.token)
    }

    fn offset(&self) -> usize {
        self.tokens
            .get(self.pos)
            .map_or(self.text.len(), |s| s.offset)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).map(|s| s.token.clone());
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn error(&self, message: impl Into<String>) -> CodegenError {
        syntax_error(self.text, self.offset(), message)
    }

    fn expect(&mut self, expected: &Token) -> CodegenResult<()> {
        match self.next() {
            Some(token) if &token == expected => Ok(()),
            Some(token) => {
                self.pos -= 1;
                Err(self.error(format!("expected {expected:?}, found {token:?}")))
            }
            None => Err(self.error(format!("expected {expected:?}, found end of input"))),
        }
    }

    fn expect_end(&self) -> CodegenResult<()> {
        match self.peek() {
            None => Ok(()),
            Some(token) => Err(self.error(format!("unexpected trailing {token:?}"))),
        }
    }

    /// Top level of an annotation: the only place `NotRequired[...]` is valid.
    fn parse_top(&mut self, context: TypeContext) -> CodegenResult<ParsedType> {
        let wrapper = match self.peek() {
            Some(Token::Ident(ident)) if matches!(last_segment(ident), "NotRequired" | "Required") => {
                Some(last_segment(ident).to_string())
            }
            _ => None,
        };

        let Some(wrapper) = wrapper else {
            return Ok(ParsedType {
                ty: self.parse_type()?,
                presence: Presence::Required,
            });
        };

        if context != TypeContext::Field {
            return Err(CodegenError::unsupported(
                format!("{wrapper} outside a record field"),
                self.text,
            ));
        }
        self.next();
        self.expect(&Token::Open)?;
        let ty = self.parse_type()?;
        self.accept_trailing_comma();
        self.expect(&Token::Close)?;
        let presence = if wrapper == "NotRequired" {
            Presence::NotRequired
        } else {
            Presence::Required
        };
        Ok(ParsedType { ty, presence })
    }

    /// `primary ('|' primary)*`
    fn parse_type(&mut self) -> CodegenResult<TypeExpr> {
        let first = self.parse_primary()?;
        if self.peek() != Some(&Token::Pipe) {
            return Ok(first);
        }
        let mut members = vec![first];
        while self.peek() == Some(&Token::Pipe) {
            self.next();
            members.push(self.parse_primary()?);
        }
        Ok(build_union(members))
    }

    fn parse_primary(&mut self) -> CodegenResult<TypeExpr> {
        match self.next() {
            Some(Token::Str(quoted)) => {
                let quoted = quoted.trim();
                if is_identifier(quoted) {
                    Ok(self.registry.forward(quoted))
                } else {
                    let parsed = parse_type_text(quoted, TypeContext::Alias, self.registry)?;
                    Ok(parsed.ty.into_forward())
                }
            }
            Some(Token::Ident(ident)) => {
                let ident = last_segment(&ident).to_string();
                if self.peek() == Some(&Token::Open) {
                    self.next();
                    let ty = self.parse_generic(&ident)?;
                    self.accept_trailing_comma();
                    self.expect(&Token::Close)?;
                    Ok(ty)
                } else {
                    self.parse_bare(&ident)
                }
            }
            Some(token) => {
                self.pos -= 1;
                Err(self.error(format!("expected a type, found {token:?}")))
            }
            None => Err(self.error("expected a type, found end of input")),
        }
    }

    fn parse_bare(&mut self, ident: &str) -> CodegenResult<TypeExpr> {
        if let Some(primitive) = Primitive::from_ident(ident) {
            return Ok(TypeExpr::Primitive(primitive));
        }
        if UNSUPPORTED_IDENTS.contains(&ident) || matches!(ident, "Optional" | "Union" | "Literal")
        {
            return Err(CodegenError::unsupported(ident, self.text));
        }
        Ok(self.registry.reference(ident))
    }

    /// Arguments of `head[...]`; the opening bracket is already consumed.
    fn parse_generic(&mut self, head: &str) -> CodegenResult<TypeExpr> {
        match head {
            "list" | "List" | "Sequence" => {
                let item = self.parse_type()?;
                Ok(TypeExpr::ListOf(Box::new(item)))
            }
            "dict" | "Dict" | "Mapping" => {
                let key = self.parse_type()?;
                self.expect(&Token::Comma)?;
                let value = self.parse_type()?;
                Ok(TypeExpr::MapOf(Box::new(key), Box::new(value)))
            }
            "Optional" => {
                let inner = self.parse_type()?;
                Ok(make_optional(inner))
            }
            "Union" => {
                let members = self.parse_type_list()?;
                Ok(build_union(members))
            }
            "Literal" => {
                let mut values = Vec::new();
                loop {
                    match self.next() {
                        Some(Token::Str(value) | Token::Number(value) | Token::Ident(value)) => {
                            values.push(value);
                        }
                        Some(token) => {
                            self.pos -= 1;
                            return Err(self.error(format!("expected a literal, found {token:?}")));
                        }
                        None => return Err(self.error("unterminated Literal")),
                    }
                    if self.peek() == Some(&Token::Comma)
                        && self.tokens.get(self.pos + 1).map(|s| &s.token) != Some(&Token::Close)
                    {
                        self.next();
                    } else {
                        break;
                    }
                }
                Ok(TypeExpr::LiteralOf(values))
            }
            "NotRequired" | "Required" => Err(CodegenError::unsupported(
                format!("nested {head}"),
                self.text,
            )),
            other => Err(CodegenError::unsupported(format!("{other}[...]"), self.text)),
        }
    }

    fn parse_type_list(&mut self) -> CodegenResult<Vec<TypeExpr>> {
        let mut members = vec![self.parse_type()?];
        while self.peek() == Some(&Token::Comma)
            && self.tokens.get(self.pos + 1).map(|s| &s.token) != Some(&Token::Close)
        {
            self.next();
            members.push(self.parse_type()?);
        }
        Ok(members)
    }

    fn accept_trailing_comma(&mut self) {
        if self.peek() == Some(&Token::Comma) {
            self.next();
        }
    }
}

/// `mathesar.rpc.tables.TableInfo` → `TableInfo`
pub fn last_segment(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}

fn make_optional(inner: TypeExpr) -> TypeExpr {
    match inner {
        TypeExpr::OptionalOf(_) => inner,
        TypeExpr::Primitive(Primitive::None) => inner,
        other => TypeExpr::OptionalOf(Box::new(other)),
    }
}

/// Normalize union members: flatten nested unions, drop duplicates, and pull
/// a `None` member out into an `OptionalOf` wrapper.
pub fn build_union(members: Vec<TypeExpr>) -> TypeExpr {
    let mut flat: Vec<TypeExpr> = Vec::new();
    let mut nullable = false;
    let mut stack: Vec<TypeExpr> = members.into_iter().rev().collect();

    while let Some(member) = stack.pop() {
        match member {
            TypeExpr::Primitive(Primitive::None) => nullable = true,
            TypeExpr::OptionalOf(inner) => {
                nullable = true;
                stack.push(*inner);
            }
            TypeExpr::UnionOf(nested) => stack.extend(nested.into_iter().rev()),
            other => {
                if !flat.contains(&other) {
                    flat.push(other);
                }
            }
        }
    }

    let base = match flat.len() {
        0 => return TypeExpr::Primitive(Primitive::None),
        1 => flat.remove(0),
        _ => TypeExpr::UnionOf(flat),
    };
    if nullable {
        TypeExpr::OptionalOf(Box::new(base))
    } else {
        base
    }
}

// =============================================================================
// Introspected annotations
// =============================================================================

/// Parse an introspected annotation tree.
pub fn parse_annotation(
    annotation: &Annotation,
    context: TypeContext,
    registry: &mut TypeRegistry,
) -> CodegenResult<TypeExpr> {
    match annotation {
        Annotation::TypedDict { name: qualified, doc, fields } => {
            let name = last_segment(qualified);
            let field_names = fields.iter().map(|field| field.name.clone()).collect();
            if registry.claim_shaped(name, qualified, field_names, doc.clone())? {
                let mut parsed_fields = Vec::with_capacity(fields.len());
                for field in fields {
                    let ty = parse_annotation(&field.annotation, TypeContext::Field, registry)?;
                    parsed_fields.push(FieldDescriptor {
                        name: field.name.clone(),
                        ty,
                        presence: if field.required {
                            Presence::Required
                        } else {
                            Presence::NotRequired
                        },
                        description: field.description.clone(),
                    });
                }
                registry.fill(name, RecordKind::TypedDict(parsed_fields));
            }
            Ok(registry.reference(name))
        }
        Annotation::Class { name } => Primitive::from_ident(last_segment(name))
            .map(TypeExpr::Primitive)
            .ok_or_else(|| {
                CodegenError::unsupported(format!("{} class", context.label()), name.clone())
            }),
        Annotation::Literal { values } => Ok(TypeExpr::LiteralOf(
            values
                .iter()
                .map(|value| match value {
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect(),
        )),
        Annotation::List { item } => Ok(TypeExpr::ListOf(Box::new(parse_annotation(
            item, context, registry,
        )?))),
        Annotation::Dict { key, value } => Ok(TypeExpr::MapOf(
            Box::new(parse_annotation(key, context, registry)?),
            Box::new(parse_annotation(value, context, registry)?),
        )),
        Annotation::Union { members } => {
            let parsed = members
                .iter()
                .map(|member| parse_annotation(member, context, registry))
                .collect::<CodegenResult<Vec<_>>>()?;
            Ok(build_union(parsed))
        }
        Annotation::Any => Ok(TypeExpr::any()),
        Annotation::None => Ok(TypeExpr::Primitive(Primitive::None)),
        Annotation::ForwardRef { name } => Ok(registry.forward(last_segment(name))),
        Annotation::Other { repr } => Err(CodegenError::unsupported(
            format!("{} annotation", context.label()),
            repr.clone(),
        )),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::introspect::AnnotatedField;

    fn parse(text: &str, context: TypeContext) -> (ParsedType, TypeRegistry) {
        let mut registry = TypeRegistry::new();
        let parsed = parse_type_text(text, context, &mut registry).unwrap();
        (parsed, registry)
    }

    fn ty(text: &str) -> TypeExpr {
        parse(text, TypeContext::Parameter).0.ty
    }

    fn prim(p: Primitive) -> TypeExpr {
        TypeExpr::Primitive(p)
    }

    #[test]
    fn test_primitives_and_empty_text() {
        assert_eq!(ty("int"), prim(Primitive::Int));
        assert_eq!(ty("  str "), prim(Primitive::Str));
        assert_eq!(ty("dict"), prim(Primitive::Dict));
        assert_eq!(ty(""), prim(Primitive::Any));
    }

    #[test]
    fn test_containers() {
        assert_eq!(
            ty("list[TableInfo]"),
            TypeExpr::ListOf(Box::new(TypeExpr::RecordRef("TableInfo".into())))
        );
        assert_eq!(
            ty("dict[str, list[int]]"),
            TypeExpr::MapOf(
                Box::new(prim(Primitive::Str)),
                Box::new(TypeExpr::ListOf(Box::new(prim(Primitive::Int))))
            )
        );
    }

    #[test]
    fn test_record_refs_register_stubs() {
        let (parsed, registry) = parse("list[mathesar.rpc.tables.TableInfo]", TypeContext::Return);
        assert_eq!(
            parsed.ty,
            TypeExpr::ListOf(Box::new(TypeExpr::RecordRef("TableInfo".into())))
        );
        assert_eq!(registry.undefined_names(), vec!["TableInfo"]);
    }

    #[test]
    fn test_quoted_name_is_forward_ref() {
        let (parsed, registry) = parse("Optional['Node']", TypeContext::Field);
        assert_eq!(
            parsed.ty,
            TypeExpr::OptionalOf(Box::new(TypeExpr::ForwardRef("Node".into())))
        );
        assert!(registry.contains("Node"));
    }

    #[test]
    fn test_quoted_expression_makes_every_record_forward() {
        let (parsed, registry) = parse(
            "'list[Union[Filter, FilterAttnum, FilterLiteral]]'",
            TypeContext::Field,
        );
        assert_eq!(
            parsed.ty,
            TypeExpr::ListOf(Box::new(TypeExpr::UnionOf(vec![
                TypeExpr::ForwardRef("Filter".into()),
                TypeExpr::ForwardRef("FilterAttnum".into()),
                TypeExpr::ForwardRef("FilterLiteral".into()),
            ])))
        );
        assert!(parsed.ty.bare_refs().is_empty());
        assert_eq!(
            registry.undefined_names(),
            vec!["Filter", "FilterAttnum", "FilterLiteral"]
        );
        assert!(matches!(
            parse_type_text("'list[int'", TypeContext::Field, &mut TypeRegistry::new()),
            Err(CodegenError::Syntax { .. })
        ));
    }

    #[test]
    fn test_literal_members_keep_their_text() {
        assert_eq!(
            ty("Literal['IDENTITY', 'UUIDv4']"),
            TypeExpr::LiteralOf(vec!["IDENTITY".into(), "UUIDv4".into()])
        );
    }

    #[test]
    fn test_union_normalization() {
        assert_eq!(
            ty("Union[int, None]"),
            TypeExpr::OptionalOf(Box::new(prim(Primitive::Int)))
        );
        assert_eq!(
            ty("int | str | None"),
            TypeExpr::OptionalOf(Box::new(TypeExpr::UnionOf(vec![
                prim(Primitive::Int),
                prim(Primitive::Str)
            ])))
        );
        assert_eq!(ty("Union[int]"), prim(Primitive::Int));
        assert_eq!(
            ty("Optional[Optional[str]]"),
            TypeExpr::OptionalOf(Box::new(prim(Primitive::Str)))
        );
    }

    #[test]
    fn test_multiline_alias_with_trailing_commas() {
        let text = "list[\n    Union[\n        ForeignKeyConstraint,\n        UniqueConstraint,\n    ]\n]";
        assert_eq!(
            parse(text, TypeContext::Alias).0.ty,
            TypeExpr::ListOf(Box::new(TypeExpr::UnionOf(vec![
                TypeExpr::RecordRef("ForeignKeyConstraint".into()),
                TypeExpr::RecordRef("UniqueConstraint".into()),
            ])))
        );
    }

    #[test]
    fn test_not_required_is_a_field_property() {
        let (parsed, _) = parse("NotRequired[Optional[str]]", TypeContext::Field);
        assert_eq!(parsed.presence, Presence::NotRequired);
        assert_eq!(
            parsed.ty,
            TypeExpr::OptionalOf(Box::new(prim(Primitive::Str)))
        );

        let (parsed, _) = parse("Optional[str]", TypeContext::Field);
        assert_eq!(parsed.presence, Presence::Required);
    }

    #[test]
    fn test_not_required_outside_field_is_unsupported() {
        let mut registry = TypeRegistry::new();
        let err = parse_type_text("NotRequired[int]", TypeContext::Parameter, &mut registry)
            .unwrap_err();
        assert!(matches!(err, CodegenError::UnsupportedTypeKind { .. }));

        let err = parse_type_text("list[NotRequired[int]]", TypeContext::Field, &mut registry)
            .unwrap_err();
        assert!(matches!(err, CodegenError::UnsupportedTypeKind { .. }));
    }

    #[test]
    fn test_unsupported_shapes() {
        let mut registry = TypeRegistry::new();
        for text in ["tuple[int, str]", "set", "Callable[int]", "frozenset[int]"] {
            let err = parse_type_text(text, TypeContext::Parameter, &mut registry).unwrap_err();
            assert!(
                matches!(err, CodegenError::UnsupportedTypeKind { .. }),
                "{text}: {err}"
            );
        }
    }

    #[test]
    fn test_syntax_errors_report_offset() {
        let mut registry = TypeRegistry::new();
        let err = parse_type_text("list[int", TypeContext::Parameter, &mut registry).unwrap_err();
        assert!(matches!(err, CodegenError::Syntax { offset: 8, .. }), "{err}");

        let err = parse_type_text("int]", TypeContext::Parameter, &mut registry).unwrap_err();
        assert!(matches!(err, CodegenError::Syntax { offset: 3, .. }), "{err}");
    }

    #[test]
    fn test_self_referential_typed_dict_is_parsed_once() {
        let node = Annotation::TypedDict {
            name: "pkg.Node".into(),
            doc: Some("A tree node.".into()),
            fields: vec![
                AnnotatedField {
                    name: "value".into(),
                    annotation: Annotation::Class { name: "int".into() },
                    required: true,
                    description: None,
                },
                AnnotatedField {
                    name: "children".into(),
                    annotation: Annotation::List {
                        item: Box::new(Annotation::TypedDict {
                            name: "pkg.Node".into(),
                            doc: None,
                            fields: Vec::new(),
                        }),
                    },
                    required: false,
                    description: None,
                },
            ],
        };
        let mut registry = TypeRegistry::new();
        let ty = parse_annotation(&node, TypeContext::Return, &mut registry).unwrap();
        assert_eq!(ty, TypeExpr::RecordRef("Node".into()));

        let record = registry.get("Node").unwrap();
        assert_eq!(record.doc.as_deref(), Some("A tree node."));
        let RecordKind::TypedDict(fields) = &record.kind else {
            panic!("expected typed dict");
        };
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[1].presence, Presence::NotRequired);
        assert_eq!(
            fields[1].ty,
            TypeExpr::ListOf(Box::new(TypeExpr::RecordRef("Node".into())))
        );
    }

    #[test]
    fn test_nullable_union_annotation_is_optional_in_any_context() {
        let union = Annotation::Union {
            members: vec![Annotation::Class { name: "str".into() }, Annotation::None],
        };
        let mut registry = TypeRegistry::new();
        for context in [TypeContext::Field, TypeContext::Parameter] {
            assert_eq!(
                parse_annotation(&union, context, &mut registry).unwrap(),
                TypeExpr::OptionalOf(Box::new(prim(Primitive::Str)))
            );
        }
    }

    #[test]
    fn test_unknown_class_annotation_is_unsupported() {
        let mut registry = TypeRegistry::new();
        let err = parse_annotation(
            &Annotation::Class {
                name: "datetime.datetime".into(),
            },
            TypeContext::Parameter,
            &mut registry,
        )
        .unwrap_err();
        match err {
            CodegenError::UnsupportedTypeKind { kind, source_text } => {
                assert_eq!(kind, "parameter class");
                assert_eq!(source_text, "datetime.datetime");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_field_annotation_error_names_its_position() {
        let record = Annotation::TypedDict {
            name: "pkg.Job".into(),
            doc: None,
            fields: vec![AnnotatedField {
                name: "started".into(),
                annotation: Annotation::Other {
                    repr: "datetime.date".into(),
                },
                required: true,
                description: None,
            }],
        };
        let err = parse_annotation(&record, TypeContext::Return, &mut TypeRegistry::new())
            .unwrap_err();
        assert!(matches!(
            err,
            CodegenError::UnsupportedTypeKind { ref kind, .. } if kind == "field annotation"
        ));
    }

    #[test]
    fn test_records_sharing_a_short_name_are_duplicates() {
        let info = |qualified: &str, field: &str| Annotation::TypedDict {
            name: qualified.into(),
            doc: None,
            fields: vec![AnnotatedField {
                name: field.into(),
                annotation: Annotation::Class { name: "int".into() },
                required: true,
                description: None,
            }],
        };
        let mut registry = TypeRegistry::new();
        parse_annotation(&info("a.Info", "oid"), TypeContext::Return, &mut registry).unwrap();
        parse_annotation(&info("a.Info", "oid"), TypeContext::Field, &mut registry).unwrap();

        let err = parse_annotation(&info("b.Info", "oid"), TypeContext::Return, &mut registry)
            .unwrap_err();
        assert!(matches!(err, CodegenError::DuplicateRecord(ref name) if name == "Info"));
        let err = parse_annotation(&info("a.Info", "id"), TypeContext::Return, &mut registry)
            .unwrap_err();
        assert!(matches!(err, CodegenError::DuplicateRecord(ref name) if name == "Info"));
    }
}
