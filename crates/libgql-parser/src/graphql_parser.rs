//! Recursive descent parser for GraphQL documents.
//!
//! [`GraphQLParser`] consumes tokens from a [`StrGraphQLTokenSource`] and
//! produces an [`ast::Document`]. Schema documents, executable documents and
//! mixed documents all go through the same entry point.
//!
//! # Error handling
//!
//! The parser does not attempt recovery. Every `parse_*` method returns
//! `Result<_, GraphQLParseError>` and the first error encountered is
//! propagated straight out of [`GraphQLParser::parse_document`].

use crate::ast;
use crate::GraphQLParseError;
use crate::GraphQLParseErrorKind;
use crate::GraphQLSourceSpan;
use crate::GraphQLTokenStream;
use crate::ReservedNameContext;
use crate::SourcePosition;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token_source::StrGraphQLTokenSource;
use std::borrow::Cow;
use std::path::Path;

type ParseResult<T> = Result<T, GraphQLParseError>;

/// Context for parsing values, determining whether variables are allowed.
#[derive(Clone, Copy, Debug)]
enum ConstContext {
    /// Variables are allowed (e.g. field arguments in operations).
    AllowVariables,
    /// Default value of a variable definition.
    VariableDefaultValue,
    /// Arguments of a directive annotation in a type-system definition.
    DirectiveArgument,
    /// Default value of an input field or argument definition.
    InputDefaultValue,
}

impl ConstContext {
    fn allows_variables(&self) -> bool {
        matches!(self, ConstContext::AllowVariables)
    }

    fn description(&self) -> &'static str {
        match self {
            ConstContext::AllowVariables => "this position",
            ConstContext::VariableDefaultValue => "variable default values",
            ConstContext::DirectiveArgument => "type system directive arguments",
            ConstContext::InputDefaultValue => "input field default values",
        }
    }
}

// =============================================================================
// Main parser struct
// =============================================================================

/// A recursive descent parser for GraphQL documents.
///
/// # Usage
///
/// ```
/// use libgql_parser::ast;
/// use libgql_parser::GraphQLParser;
///
/// let source = "type Query { hello: String }";
/// let doc = GraphQLParser::new(source).parse_document().unwrap();
/// assert!(matches!(
///     doc.definitions[0],
///     ast::Definition::TypeDefinition(ast::TypeDefinition::Object(_)),
/// ));
/// ```
pub struct GraphQLParser<'src> {
    token_stream: GraphQLTokenStream<'src, StrGraphQLTokenSource<'src>>,

    /// Shared nesting counter for values, selection sets and type
    /// annotations.
    recursion_depth: usize,

    /// End position of the most recently consumed token. EOF errors and
    /// node spans end here.
    last_end_position: Option<SourcePosition>,
}

impl<'src> GraphQLParser<'src> {
    /// Maximum nesting depth for recursive parsing (values, selection
    /// sets, and type annotations).
    ///
    /// Keeps adversarial inputs like `[[[[[...` from overflowing the stack.
    /// Unoptimized builds spend several KB of stack per nesting level, so
    /// this has to fit within a 2 MiB test thread.
    pub const MAX_RECURSION_DEPTH: usize = 32;

    pub fn new(source: &'src str) -> Self {
        Self::from_token_source(StrGraphQLTokenSource::new(source))
    }

    /// Creates a parser whose spans (and therefore errors) carry `path`.
    pub fn with_file_path(source: &'src str, path: &'src Path) -> Self {
        Self::from_token_source(StrGraphQLTokenSource::with_file_path(source, path))
    }

    fn from_token_source(token_source: StrGraphQLTokenSource<'src>) -> Self {
        Self {
            token_stream: GraphQLTokenStream::new(token_source),
            recursion_depth: 0,
            last_end_position: None,
        }
    }

    /// Parses the whole input as a document of executable and/or
    /// type-system definitions.
    ///
    /// A document must contain at least one definition.
    pub fn parse_document(mut self) -> ParseResult<ast::Document<'src>> {
        let start = self.peek_span()?;
        let mut definitions = Vec::new();
        while !self.peek_is(&GraphQLTokenKind::Eof)? {
            definitions.push(self.parse_definition()?);
        }

        if definitions.is_empty() {
            let mut error = GraphQLParseError::new(
                "a document must contain at least one definition",
                start,
                GraphQLParseErrorKind::UnexpectedEof {
                    expected: vec!["definition".to_string()],
                },
            );
            error.add_spec("https://spec.graphql.org/October2021/#Document");
            return Err(error);
        }

        Ok(ast::Document {
            span: self.make_span(start),
            definitions,
        })
    }

    // =========================================================================
    // Token expectation helpers
    // =========================================================================

    /// Peeks at the next token, surfacing lexer errors and running past the
    /// end of the token stream as parse errors.
    fn peek(&mut self) -> ParseResult<&GraphQLToken<'src>> {
        let eof_span = self.eof_span();
        match self.token_stream.peek() {
            None => Err(GraphQLParseError::new(
                "unexpected end of input",
                eof_span,
                GraphQLParseErrorKind::UnexpectedEof { expected: vec![] },
            )),
            Some(GraphQLToken {
                kind: GraphQLTokenKind::Error { message, error_notes },
                span,
            }) => Err(GraphQLParseError::from_lexer_error(
                message.clone(),
                span.clone(),
                error_notes.clone(),
            )),
            Some(token) => Ok(token),
        }
    }

    fn peek_span(&mut self) -> ParseResult<GraphQLSourceSpan> {
        Ok(self.peek()?.span.clone())
    }

    /// Checks if the next token matches the given kind without consuming.
    ///
    /// Payload-carrying kinds match on variant only.
    fn peek_is(&mut self, kind: &GraphQLTokenKind<'_>) -> ParseResult<bool> {
        Ok(Self::token_kinds_match(&self.peek()?.kind, kind))
    }

    /// Checks if the next token is a specific keyword without consuming.
    ///
    /// `true`, `false` and `null` are lexed as their own token kinds, so
    /// `peek_is_keyword("true")` is always `false`.
    fn peek_is_keyword(&mut self, keyword: &str) -> ParseResult<bool> {
        Ok(matches!(
            &self.peek()?.kind,
            GraphQLTokenKind::Name(name) if name.as_ref() == keyword,
        ))
    }

    /// Builds the "expected X, found Y" error for the next token.
    fn unexpected(&mut self, expected: &str) -> GraphQLParseError {
        let token = match self.peek() {
            Ok(token) => token,
            Err(error) => return error,
        };
        let span = token.span.clone();
        if matches!(token.kind, GraphQLTokenKind::Eof) {
            return GraphQLParseError::new(
                format!("expected {expected}, found end of input"),
                span,
                GraphQLParseErrorKind::UnexpectedEof {
                    expected: vec![expected.to_string()],
                },
            );
        }
        let found = Self::token_kind_display(&token.kind);
        GraphQLParseError::new(
            format!("expected {expected}, found `{found}`"),
            span,
            GraphQLParseErrorKind::UnexpectedToken {
                expected: vec![expected.to_string()],
                found,
            },
        )
    }

    /// Expects a specific token kind and consumes it.
    fn expect(&mut self, expected_kind: &GraphQLTokenKind<'_>) -> ParseResult<GraphQLToken<'src>> {
        if self.peek_is(expected_kind)? {
            return self.consume_token();
        }
        let expected = format!("`{}`", Self::token_kind_display(expected_kind));
        Err(self.unexpected(&expected))
    }

    /// Expects a closing delimiter. Running out of input first reports the
    /// opening delimiter as unclosed.
    fn expect_closing(
        &mut self,
        closing_kind: &GraphQLTokenKind<'_>,
        opening_span: &GraphQLSourceSpan,
    ) -> ParseResult<GraphQLToken<'src>> {
        self.check_unclosed(closing_kind, opening_span)?;
        self.expect(closing_kind)
    }

    /// Errors with [`GraphQLParseErrorKind::UnclosedDelimiter`] when the
    /// input ends before `closing_kind` shows up.
    fn check_unclosed(
        &mut self,
        closing_kind: &GraphQLTokenKind<'_>,
        opening_span: &GraphQLSourceSpan,
    ) -> ParseResult<()> {
        if !self.peek_is(&GraphQLTokenKind::Eof)? {
            return Ok(());
        }
        let opening = match closing_kind {
            GraphQLTokenKind::CurlyBraceClose => "{",
            GraphQLTokenKind::ParenClose => "(",
            GraphQLTokenKind::SquareBracketClose => "[",
            _ => "delimiter",
        };
        let mut error = GraphQLParseError::new(
            format!("unclosed `{opening}`"),
            self.eof_span(),
            GraphQLParseErrorKind::UnclosedDelimiter {
                delimiter: opening.to_string(),
            },
        );
        error.add_note_with_span(
            format!("`{opening}` opened here"),
            opening_span.clone(),
        );
        Err(error)
    }

    /// Expects a name token and returns an `ast::Name`.
    ///
    /// Per the GraphQL grammar `true`, `false` and `null` are valid names in
    /// most contexts, so those token kinds are accepted here.
    fn expect_name(&mut self) -> ParseResult<ast::Name<'src>> {
        let is_name = matches!(
            self.peek()?.kind,
            GraphQLTokenKind::Name(_)
                | GraphQLTokenKind::True
                | GraphQLTokenKind::False
                | GraphQLTokenKind::Null,
        );
        if !is_name {
            return Err(self.unexpected("name"));
        }
        let token = self.consume_token()?;
        let value = match token.kind {
            GraphQLTokenKind::Name(s) => s,
            GraphQLTokenKind::True => Cow::Borrowed("true"),
            GraphQLTokenKind::False => Cow::Borrowed("false"),
            _ => Cow::Borrowed("null"),
        };
        Ok(ast::Name {
            span: token.span,
            value,
        })
    }

    /// Expects a structural keyword (a `Name` token with specific text).
    fn expect_keyword(&mut self, keyword: &str) -> ParseResult<GraphQLSourceSpan> {
        if self.peek_is_keyword(keyword)? {
            return Ok(self.consume_token()?.span);
        }
        Err(self.unexpected(&format!("`{keyword}`")))
    }

    // =========================================================================
    // Helper methods
    // =========================================================================

    /// Consumes the next token and tracks its end position for span
    /// construction.
    fn consume_token(&mut self) -> ParseResult<GraphQLToken<'src>> {
        self.peek()?;
        let eof_span = self.eof_span();
        let token = self.token_stream.consume().ok_or_else(|| {
            GraphQLParseError::new(
                "unexpected end of input",
                eof_span,
                GraphQLParseErrorKind::UnexpectedEof { expected: vec![] },
            )
        })?;
        self.last_end_position = Some(token.span.end_exclusive.clone());
        Ok(token)
    }

    /// Returns a zero-width span at the end of the last consumed token.
    fn eof_span(&self) -> GraphQLSourceSpan {
        let pos = self
            .last_end_position
            .clone()
            .unwrap_or_else(SourcePosition::start_of_document);
        GraphQLSourceSpan::new(pos.clone(), pos)
    }

    /// Builds a span from `start` to the end of the last consumed token.
    fn make_span(&self, start: GraphQLSourceSpan) -> GraphQLSourceSpan {
        let end = self
            .last_end_position
            .clone()
            .unwrap_or_else(|| start.start_inclusive.clone());
        GraphQLSourceSpan {
            start_inclusive: start.start_inclusive,
            end_exclusive: end,
            file_path: start.file_path,
        }
    }

    /// Human-readable text for a token kind, without surrounding backticks.
    fn token_kind_display(kind: &GraphQLTokenKind<'_>) -> String {
        if let Some(punct) = kind.as_punctuator_str() {
            return punct.to_string();
        }
        match kind {
            GraphQLTokenKind::Name(s)
            | GraphQLTokenKind::IntValue(s)
            | GraphQLTokenKind::FloatValue(s)
            | GraphQLTokenKind::StringValue(s) => s.to_string(),
            GraphQLTokenKind::True => "true".to_string(),
            GraphQLTokenKind::False => "false".to_string(),
            GraphQLTokenKind::Null => "null".to_string(),
            GraphQLTokenKind::Eof => "end of input".to_string(),
            GraphQLTokenKind::Error { message, .. } => {
                format!("tokenization error: {message}")
            },
            _ => String::new(),
        }
    }

    /// Compares token kinds for equality, ignoring payloads.
    fn token_kinds_match(actual: &GraphQLTokenKind<'_>, expected: &GraphQLTokenKind<'_>) -> bool {
        std::mem::discriminant(actual) == std::mem::discriminant(expected)
    }

    /// Increments the shared nesting counter, failing past
    /// [`Self::MAX_RECURSION_DEPTH`]. Callers pair this with
    /// `exit_recursion()` through a wrapper method.
    fn enter_recursion(&mut self) -> ParseResult<()> {
        if self.recursion_depth >= Self::MAX_RECURSION_DEPTH {
            let span = self.peek_span()?;
            return Err(GraphQLParseError::new(
                format!(
                    "maximum nesting depth of {} exceeded",
                    Self::MAX_RECURSION_DEPTH,
                ),
                span,
                GraphQLParseErrorKind::InvalidSyntax,
            ));
        }
        self.recursion_depth += 1;
        Ok(())
    }

    fn exit_recursion(&mut self) {
        self.recursion_depth -= 1;
    }

    // =========================================================================
    // Definitions
    // =========================================================================

    fn parse_definition(&mut self) -> ParseResult<ast::Definition<'src>> {
        if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen)? {
            return Ok(ast::Definition::Operation(self.parse_operation_definition()?));
        }
        if self.peek_is(&GraphQLTokenKind::StringValue(Cow::Borrowed("")))? {
            return self.parse_described_definition();
        }

        let keyword = match &self.peek()?.kind {
            GraphQLTokenKind::Name(name) => name.clone(),
            _ => return Err(self.unexpected("definition")),
        };
        match keyword.as_ref() {
            "query" | "mutation" | "subscription" => {
                Ok(ast::Definition::Operation(self.parse_operation_definition()?))
            },
            "fragment" => Ok(ast::Definition::Fragment(self.parse_fragment_definition()?)),
            "extend" => self.parse_extension(),
            "schema" | "scalar" | "type" | "interface" | "union" | "enum" | "input"
            | "directive" => self.parse_type_system_definition(None),
            _ => Err(self.unexpected("definition")),
        }
    }

    /// Parses a type-system definition preceded by a description string.
    fn parse_described_definition(&mut self) -> ParseResult<ast::Definition<'src>> {
        let description = self.parse_description()?;
        let is_type_system_keyword = matches!(
            &self.peek()?.kind,
            GraphQLTokenKind::Name(name) if matches!(
                name.as_ref(),
                "schema" | "scalar" | "type" | "interface" | "union" | "enum" | "input"
                    | "directive",
            ),
        );
        if !is_type_system_keyword {
            let mut error = self.unexpected("type system definition after description");
            if self.peek_is_keyword("extend")?
                || self.peek_is_keyword("query")?
                || self.peek_is_keyword("mutation")?
                || self.peek_is_keyword("subscription")?
                || self.peek_is_keyword("fragment")?
                || self.peek_is(&GraphQLTokenKind::CurlyBraceOpen)?
            {
                error.add_help(
                    "descriptions are only allowed on type system definitions",
                );
            }
            return Err(error);
        }
        self.parse_type_system_definition(description)
    }

    fn parse_type_system_definition(
        &mut self,
        description: Option<ast::StringValue<'src>>,
    ) -> ParseResult<ast::Definition<'src>> {
        let keyword = match &self.peek()?.kind {
            GraphQLTokenKind::Name(name) => name.clone(),
            _ => return Err(self.unexpected("type system definition")),
        };
        Ok(match keyword.as_ref() {
            "schema" => {
                ast::Definition::SchemaDefinition(self.parse_schema_definition(description)?)
            },
            "scalar" => ast::Definition::TypeDefinition(ast::TypeDefinition::Scalar(
                self.parse_scalar_type_definition(description)?,
            )),
            "type" => ast::Definition::TypeDefinition(ast::TypeDefinition::Object(
                self.parse_object_type_definition(description)?,
            )),
            "interface" => ast::Definition::TypeDefinition(ast::TypeDefinition::Interface(
                self.parse_interface_type_definition(description)?,
            )),
            "union" => ast::Definition::TypeDefinition(ast::TypeDefinition::Union(
                self.parse_union_type_definition(description)?,
            )),
            "enum" => ast::Definition::TypeDefinition(ast::TypeDefinition::Enum(
                self.parse_enum_type_definition(description)?,
            )),
            "input" => ast::Definition::TypeDefinition(ast::TypeDefinition::InputObject(
                self.parse_input_object_type_definition(description)?,
            )),
            "directive" => ast::Definition::DirectiveDefinition(
                self.parse_directive_definition(description)?,
            ),
            _ => return Err(self.unexpected("type system definition")),
        })
    }

    // =========================================================================
    // Value parsing
    // =========================================================================

    /// Parses a value (literal or variable reference).
    ///
    /// `context` decides whether variables are allowed and names the
    /// position in the error when they are not.
    fn parse_value(&mut self, context: ConstContext) -> ParseResult<ast::Value<'src>> {
        self.enter_recursion()?;
        let result = self.parse_value_impl(context);
        self.exit_recursion();
        result
    }

    fn parse_value_impl(&mut self, context: ConstContext) -> ParseResult<ast::Value<'src>> {
        let token = self.peek()?;
        match &token.kind {
            GraphQLTokenKind::Dollar => {
                if !context.allows_variables() {
                    return Err(GraphQLParseError::new(
                        format!(
                            "variables are not allowed in {}",
                            context.description(),
                        ),
                        token.span.clone(),
                        GraphQLParseErrorKind::InvalidSyntax,
                    ));
                }
                let dollar = self.consume_token()?;
                let name = self.expect_name()?;
                Ok(ast::Value::Variable(ast::VariableValue {
                    name,
                    span: self.make_span(dollar.span),
                }))
            },
            GraphQLTokenKind::IntValue(_) => {
                let token = self.consume_token()?;
                let GraphQLTokenKind::IntValue(raw) = token.kind else {
                    return Err(self.unexpected("integer"));
                };
                Ok(ast::Value::Int(ast::IntValue {
                    raw,
                    span: token.span,
                }))
            },
            GraphQLTokenKind::FloatValue(_) => {
                let token = self.consume_token()?;
                let GraphQLTokenKind::FloatValue(raw) = token.kind else {
                    return Err(self.unexpected("float"));
                };
                Ok(ast::Value::Float(ast::FloatValue {
                    raw,
                    span: token.span,
                }))
            },
            GraphQLTokenKind::StringValue(_) => Ok(ast::Value::String(self.parse_string()?)),
            GraphQLTokenKind::True | GraphQLTokenKind::False => {
                let token = self.consume_token()?;
                Ok(ast::Value::Boolean(ast::BooleanValue {
                    value: matches!(token.kind, GraphQLTokenKind::True),
                    span: token.span,
                }))
            },
            GraphQLTokenKind::Null => {
                let token = self.consume_token()?;
                Ok(ast::Value::Null(ast::NullValue { span: token.span }))
            },
            GraphQLTokenKind::Name(_) => {
                let name = self.expect_name()?;
                Ok(ast::Value::Enum(ast::EnumValue {
                    value: name.value,
                    span: name.span,
                }))
            },
            GraphQLTokenKind::SquareBracketOpen => self.parse_list_value(context),
            GraphQLTokenKind::CurlyBraceOpen => self.parse_object_value(context),
            _ => Err(self.unexpected("value")),
        }
    }

    /// Parses `[ value* ]`.
    fn parse_list_value(&mut self, context: ConstContext) -> ParseResult<ast::Value<'src>> {
        let open = self.expect(&GraphQLTokenKind::SquareBracketOpen)?;
        let mut values = Vec::new();
        loop {
            self.check_unclosed(&GraphQLTokenKind::SquareBracketClose, &open.span)?;
            if self.peek_is(&GraphQLTokenKind::SquareBracketClose)? {
                break;
            }
            values.push(self.parse_value(context)?);
        }
        self.consume_token()?;
        Ok(ast::Value::List(ast::ListValue {
            values,
            span: self.make_span(open.span),
        }))
    }

    /// Parses `{ name: value* }`.
    fn parse_object_value(&mut self, context: ConstContext) -> ParseResult<ast::Value<'src>> {
        let open = self.expect(&GraphQLTokenKind::CurlyBraceOpen)?;
        let mut fields = Vec::new();
        loop {
            self.check_unclosed(&GraphQLTokenKind::CurlyBraceClose, &open.span)?;
            if self.peek_is(&GraphQLTokenKind::CurlyBraceClose)? {
                break;
            }
            let name = self.expect_name()?;
            self.expect(&GraphQLTokenKind::Colon)?;
            let value = self.parse_value(context)?;
            let span = self.make_span(name.span.clone());
            fields.push(ast::ObjectField { name, value, span });
        }
        self.consume_token()?;
        Ok(ast::Value::Object(ast::ObjectValue {
            fields,
            span: self.make_span(open.span),
        }))
    }

    /// Consumes a string token and cooks its content.
    fn parse_string(&mut self) -> ParseResult<ast::StringValue<'src>> {
        if !self.peek_is(&GraphQLTokenKind::StringValue(Cow::Borrowed("")))? {
            return Err(self.unexpected("string"));
        }
        let token = self.consume_token()?;
        let value = match token.kind.parse_string_value() {
            Some(Ok(value)) => value,
            Some(Err(err)) => {
                return Err(GraphQLParseError::new(
                    err.to_string(),
                    token.span,
                    GraphQLParseErrorKind::InvalidValue,
                ));
            },
            None => return Err(self.unexpected("string")),
        };
        let GraphQLTokenKind::StringValue(raw) = token.kind else {
            return Err(self.unexpected("string"));
        };
        Ok(ast::StringValue {
            is_block: raw.starts_with("\"\"\""),
            raw,
            value,
            span: token.span,
        })
    }

    // =========================================================================
    // Arguments and directives
    // =========================================================================

    /// Parses an optional `( name: value ... )` argument list.
    fn parse_arguments(&mut self, context: ConstContext) -> ParseResult<Vec<ast::Argument<'src>>> {
        if !self.peek_is(&GraphQLTokenKind::ParenOpen)? {
            return Ok(Vec::new());
        }
        let open = self.consume_token()?;
        if self.peek_is(&GraphQLTokenKind::ParenClose)? {
            return Err(Self::empty_construct_error("argument list", "()", open.span));
        }
        let mut arguments = Vec::new();
        loop {
            self.check_unclosed(&GraphQLTokenKind::ParenClose, &open.span)?;
            if self.peek_is(&GraphQLTokenKind::ParenClose)? {
                break;
            }
            let name = self.expect_name()?;
            self.expect(&GraphQLTokenKind::Colon)?;
            let value = self.parse_value(context)?;
            let span = self.make_span(name.span.clone());
            arguments.push(ast::Argument { span, name, value });
        }
        self.consume_token()?;
        Ok(arguments)
    }

    /// Parses zero or more `@name(args)` directive annotations.
    fn parse_directives(
        &mut self,
        context: ConstContext,
    ) -> ParseResult<Vec<ast::DirectiveAnnotation<'src>>> {
        let mut directives = Vec::new();
        while self.peek_is(&GraphQLTokenKind::At)? {
            let at = self.consume_token()?;
            let name = self.expect_name()?;
            let arguments = self.parse_arguments(context)?;
            directives.push(ast::DirectiveAnnotation {
                span: self.make_span(at.span),
                name,
                arguments,
            });
        }
        Ok(directives)
    }

    fn empty_construct_error(
        construct: &str,
        text: &str,
        span: GraphQLSourceSpan,
    ) -> GraphQLParseError {
        let mut error = GraphQLParseError::new(
            format!("empty {construct} `{text}` is not allowed"),
            span,
            GraphQLParseErrorKind::InvalidEmptyConstruct {
                construct: construct.to_string(),
            },
        );
        error.add_help(format!("remove the `{text}` or add at least one item"));
        error
    }

    // =========================================================================
    // Selections
    // =========================================================================

    fn parse_selection_set(&mut self) -> ParseResult<ast::SelectionSet<'src>> {
        self.enter_recursion()?;
        let result = self.parse_selection_set_impl();
        self.exit_recursion();
        result
    }

    fn parse_selection_set_impl(&mut self) -> ParseResult<ast::SelectionSet<'src>> {
        let open = self.expect(&GraphQLTokenKind::CurlyBraceOpen)?;
        if self.peek_is(&GraphQLTokenKind::CurlyBraceClose)? {
            let mut error = Self::empty_construct_error("selection set", "{}", open.span);
            error.add_spec("https://spec.graphql.org/October2021/#SelectionSet");
            return Err(error);
        }
        let mut selections = Vec::new();
        loop {
            self.check_unclosed(&GraphQLTokenKind::CurlyBraceClose, &open.span)?;
            if self.peek_is(&GraphQLTokenKind::CurlyBraceClose)? {
                break;
            }
            selections.push(self.parse_selection()?);
        }
        self.consume_token()?;
        Ok(ast::SelectionSet {
            span: self.make_span(open.span),
            selections,
        })
    }

    fn parse_selection(&mut self) -> ParseResult<ast::Selection<'src>> {
        if !self.peek_is(&GraphQLTokenKind::Ellipsis)? {
            return Ok(ast::Selection::Field(self.parse_field()?));
        }
        let ellipsis = self.consume_token()?;
        let is_named_spread = matches!(
            &self.peek()?.kind,
            GraphQLTokenKind::Name(name) if name.as_ref() != "on",
        ) || matches!(
            self.peek()?.kind,
            GraphQLTokenKind::True | GraphQLTokenKind::False | GraphQLTokenKind::Null,
        );
        if is_named_spread {
            self.parse_fragment_spread(ellipsis.span)
        } else {
            self.parse_inline_fragment(ellipsis.span)
        }
    }

    fn parse_field(&mut self) -> ParseResult<ast::Field<'src>> {
        let first = self.expect_name()?;
        let start = first.span.clone();
        let (alias, name) = if self.peek_is(&GraphQLTokenKind::Colon)? {
            self.consume_token()?;
            (Some(first), self.expect_name()?)
        } else {
            (None, first)
        };
        let arguments = self.parse_arguments(ConstContext::AllowVariables)?;
        let directives = self.parse_directives(ConstContext::AllowVariables)?;
        let selection_set = if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen)? {
            Some(self.parse_selection_set()?)
        } else {
            None
        };
        Ok(ast::Field {
            span: self.make_span(start),
            alias,
            name,
            arguments,
            directives,
            selection_set,
        })
    }

    fn parse_fragment_spread(
        &mut self,
        start: GraphQLSourceSpan,
    ) -> ParseResult<ast::Selection<'src>> {
        let name = self.expect_name()?;
        let directives = self.parse_directives(ConstContext::AllowVariables)?;
        Ok(ast::Selection::FragmentSpread(ast::FragmentSpread {
            span: self.make_span(start),
            name,
            directives,
        }))
    }

    fn parse_inline_fragment(
        &mut self,
        start: GraphQLSourceSpan,
    ) -> ParseResult<ast::Selection<'src>> {
        let type_condition = if self.peek_is_keyword("on")? {
            Some(self.parse_type_condition()?)
        } else {
            None
        };
        let directives = self.parse_directives(ConstContext::AllowVariables)?;
        if !self.peek_is(&GraphQLTokenKind::CurlyBraceOpen)? {
            return Err(self.unexpected("`{` or `on`"));
        }
        let selection_set = self.parse_selection_set()?;
        Ok(ast::Selection::InlineFragment(ast::InlineFragment {
            span: self.make_span(start),
            type_condition,
            directives,
            selection_set,
        }))
    }

    fn parse_type_condition(&mut self) -> ParseResult<ast::TypeCondition<'src>> {
        let on_span = self.expect_keyword("on")?;
        let named_type = self.expect_name()?;
        Ok(ast::TypeCondition {
            span: self.make_span(on_span),
            named_type,
        })
    }

    // =========================================================================
    // Operations and fragments
    // =========================================================================

    fn parse_operation_definition(&mut self) -> ParseResult<ast::OperationDefinition<'src>> {
        if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen)? {
            let selection_set = self.parse_selection_set()?;
            return Ok(ast::OperationDefinition {
                span: selection_set.span.clone(),
                operation_kind: ast::OperationKind::Query,
                shorthand: true,
                name: None,
                variable_definitions: Vec::new(),
                directives: Vec::new(),
                selection_set,
            });
        }

        let keyword = match &self.peek()?.kind {
            GraphQLTokenKind::Name(name) => ast::OperationKind::from_keyword(name),
            _ => None,
        };
        let Some(operation_kind) = keyword else {
            return Err(self.unexpected("`query`, `mutation`, `subscription` or `{`"));
        };
        let start = self.consume_token()?.span;

        let has_name = matches!(
            self.peek()?.kind,
            GraphQLTokenKind::Name(_)
                | GraphQLTokenKind::True
                | GraphQLTokenKind::False
                | GraphQLTokenKind::Null,
        );
        let name = if has_name { Some(self.expect_name()?) } else { None };
        let variable_definitions = self.parse_variable_definitions()?;
        let directives = self.parse_directives(ConstContext::AllowVariables)?;
        let selection_set = self.parse_selection_set()?;

        Ok(ast::OperationDefinition {
            span: self.make_span(start),
            operation_kind,
            shorthand: false,
            name,
            variable_definitions,
            directives,
            selection_set,
        })
    }

    fn parse_variable_definitions(&mut self) -> ParseResult<Vec<ast::VariableDefinition<'src>>> {
        if !self.peek_is(&GraphQLTokenKind::ParenOpen)? {
            return Ok(Vec::new());
        }
        let open = self.consume_token()?;
        if self.peek_is(&GraphQLTokenKind::ParenClose)? {
            return Err(Self::empty_construct_error(
                "variable definition list",
                "()",
                open.span,
            ));
        }
        let mut definitions = Vec::new();
        loop {
            self.check_unclosed(&GraphQLTokenKind::ParenClose, &open.span)?;
            if self.peek_is(&GraphQLTokenKind::ParenClose)? {
                break;
            }
            definitions.push(self.parse_variable_definition()?);
        }
        self.consume_token()?;
        Ok(definitions)
    }

    fn parse_variable_definition(&mut self) -> ParseResult<ast::VariableDefinition<'src>> {
        let dollar = self.expect(&GraphQLTokenKind::Dollar)?;
        let variable = self.expect_name()?;
        self.expect(&GraphQLTokenKind::Colon)?;
        let var_type = self.parse_type_annotation()?;
        let default_value = if self.peek_is(&GraphQLTokenKind::Equals)? {
            self.consume_token()?;
            Some(self.parse_value(ConstContext::VariableDefaultValue)?)
        } else {
            None
        };
        let directives = self.parse_directives(ConstContext::DirectiveArgument)?;
        Ok(ast::VariableDefinition {
            span: self.make_span(dollar.span),
            variable,
            var_type,
            default_value,
            directives,
        })
    }

    fn parse_fragment_definition(&mut self) -> ParseResult<ast::FragmentDefinition<'src>> {
        let start = self.expect_keyword("fragment")?;
        if self.peek_is_keyword("on")? {
            let span = self.peek_span()?;
            let mut error = GraphQLParseError::new(
                "fragment name cannot be `on`",
                span,
                GraphQLParseErrorKind::ReservedName {
                    name: "on".to_string(),
                    context: ReservedNameContext::FragmentName,
                },
            );
            error.add_spec("https://spec.graphql.org/October2021/#FragmentName");
            return Err(error);
        }
        let name = self.expect_name()?;
        if !self.peek_is_keyword("on")? {
            return Err(self.unexpected("`on`"));
        }
        let type_condition = self.parse_type_condition()?;
        let directives = self.parse_directives(ConstContext::AllowVariables)?;
        let selection_set = self.parse_selection_set()?;
        Ok(ast::FragmentDefinition {
            span: self.make_span(start),
            name,
            type_condition,
            directives,
            selection_set,
        })
    }

    // =========================================================================
    // Type annotations
    // =========================================================================

    fn parse_type_annotation(&mut self) -> ParseResult<ast::TypeAnnotation<'src>> {
        self.enter_recursion()?;
        let result = self.parse_type_annotation_impl();
        self.exit_recursion();
        result
    }

    fn parse_type_annotation_impl(&mut self) -> ParseResult<ast::TypeAnnotation<'src>> {
        if self.peek_is(&GraphQLTokenKind::SquareBracketOpen)? {
            let open = self.consume_token()?;
            let element_type = self.parse_type_annotation()?;
            self.expect_closing(&GraphQLTokenKind::SquareBracketClose, &open.span)?;
            let nullability = self.parse_nullability()?;
            return Ok(ast::TypeAnnotation::List(ast::ListTypeAnnotation {
                element_type: Box::new(element_type),
                nullability,
                span: self.make_span(open.span),
            }));
        }

        let name = match self.expect_name() {
            Ok(name) => name,
            Err(_) => return Err(self.unexpected("type")),
        };
        let start = name.span.clone();
        let nullability = self.parse_nullability()?;
        Ok(ast::TypeAnnotation::Named(ast::NamedTypeAnnotation {
            name,
            nullability,
            span: self.make_span(start),
        }))
    }

    fn parse_nullability(&mut self) -> ParseResult<ast::Nullability> {
        if self.peek_is(&GraphQLTokenKind::Bang)? {
            return Ok(ast::Nullability::NonNull(self.consume_token()?.span));
        }
        Ok(ast::Nullability::Nullable)
    }

    // =========================================================================
    // Type system definitions
    // =========================================================================

    fn parse_description(&mut self) -> ParseResult<Option<ast::StringValue<'src>>> {
        if self.peek_is(&GraphQLTokenKind::StringValue(Cow::Borrowed("")))? {
            return Ok(Some(self.parse_string()?));
        }
        Ok(None)
    }

    /// Starts a definition's span at its description when present, else at
    /// the keyword.
    fn definition_start(
        description: &Option<ast::StringValue<'src>>,
        keyword_span: GraphQLSourceSpan,
    ) -> GraphQLSourceSpan {
        match description {
            Some(description) => description.span.clone(),
            None => keyword_span,
        }
    }

    fn parse_schema_definition(
        &mut self,
        description: Option<ast::StringValue<'src>>,
    ) -> ParseResult<ast::SchemaDefinition<'src>> {
        let keyword_span = self.expect_keyword("schema")?;
        let start = Self::definition_start(&description, keyword_span);
        let directives = self.parse_directives(ConstContext::DirectiveArgument)?;
        let root_operations = self.parse_root_operation_types(false)?;
        Ok(ast::SchemaDefinition {
            span: self.make_span(start),
            description,
            directives,
            root_operations,
        })
    }

    /// Parses `{ query: Query mutation: Mutation ... }`. When `optional` is
    /// set a missing block yields an empty list (schema extensions).
    fn parse_root_operation_types(
        &mut self,
        optional: bool,
    ) -> ParseResult<Vec<ast::RootOperationTypeDefinition<'src>>> {
        if optional && !self.peek_is(&GraphQLTokenKind::CurlyBraceOpen)? {
            return Ok(Vec::new());
        }
        let open = self.expect(&GraphQLTokenKind::CurlyBraceOpen)?;
        if self.peek_is(&GraphQLTokenKind::CurlyBraceClose)? {
            return Err(Self::empty_construct_error(
                "root operation type list",
                "{}",
                open.span,
            ));
        }
        let mut root_operations = Vec::new();
        loop {
            self.check_unclosed(&GraphQLTokenKind::CurlyBraceClose, &open.span)?;
            if self.peek_is(&GraphQLTokenKind::CurlyBraceClose)? {
                break;
            }
            let operation_kind = match &self.peek()?.kind {
                GraphQLTokenKind::Name(name) => ast::OperationKind::from_keyword(name),
                _ => None,
            };
            let Some(operation_kind) = operation_kind else {
                return Err(self.unexpected("`query`, `mutation` or `subscription`"));
            };
            let start = self.consume_token()?.span;
            self.expect(&GraphQLTokenKind::Colon)?;
            let named_type = self.expect_name()?;
            root_operations.push(ast::RootOperationTypeDefinition {
                span: self.make_span(start),
                operation_kind,
                named_type,
            });
        }
        self.consume_token()?;
        Ok(root_operations)
    }

    fn parse_scalar_type_definition(
        &mut self,
        description: Option<ast::StringValue<'src>>,
    ) -> ParseResult<ast::ScalarTypeDefinition<'src>> {
        let keyword_span = self.expect_keyword("scalar")?;
        let start = Self::definition_start(&description, keyword_span);
        let name = self.expect_name()?;
        let directives = self.parse_directives(ConstContext::DirectiveArgument)?;
        Ok(ast::ScalarTypeDefinition {
            span: self.make_span(start),
            description,
            name,
            directives,
        })
    }

    fn parse_object_type_definition(
        &mut self,
        description: Option<ast::StringValue<'src>>,
    ) -> ParseResult<ast::ObjectTypeDefinition<'src>> {
        let keyword_span = self.expect_keyword("type")?;
        let start = Self::definition_start(&description, keyword_span);
        let name = self.expect_name()?;
        let implements = self.parse_implements_interfaces()?;
        let directives = self.parse_directives(ConstContext::DirectiveArgument)?;
        let fields = self.parse_fields_definition()?;
        Ok(ast::ObjectTypeDefinition {
            span: self.make_span(start),
            description,
            name,
            implements,
            directives,
            fields,
        })
    }

    fn parse_interface_type_definition(
        &mut self,
        description: Option<ast::StringValue<'src>>,
    ) -> ParseResult<ast::InterfaceTypeDefinition<'src>> {
        let keyword_span = self.expect_keyword("interface")?;
        let start = Self::definition_start(&description, keyword_span);
        let name = self.expect_name()?;
        let implements = self.parse_implements_interfaces()?;
        let directives = self.parse_directives(ConstContext::DirectiveArgument)?;
        let fields = self.parse_fields_definition()?;
        Ok(ast::InterfaceTypeDefinition {
            span: self.make_span(start),
            description,
            name,
            implements,
            directives,
            fields,
        })
    }

    fn parse_union_type_definition(
        &mut self,
        description: Option<ast::StringValue<'src>>,
    ) -> ParseResult<ast::UnionTypeDefinition<'src>> {
        let keyword_span = self.expect_keyword("union")?;
        let start = Self::definition_start(&description, keyword_span);
        let name = self.expect_name()?;
        let directives = self.parse_directives(ConstContext::DirectiveArgument)?;
        let members = self.parse_union_members()?;
        Ok(ast::UnionTypeDefinition {
            span: self.make_span(start),
            description,
            name,
            directives,
            members,
        })
    }

    fn parse_enum_type_definition(
        &mut self,
        description: Option<ast::StringValue<'src>>,
    ) -> ParseResult<ast::EnumTypeDefinition<'src>> {
        let keyword_span = self.expect_keyword("enum")?;
        let start = Self::definition_start(&description, keyword_span);
        let name = self.expect_name()?;
        let directives = self.parse_directives(ConstContext::DirectiveArgument)?;
        let values = self.parse_enum_values_definition()?;
        Ok(ast::EnumTypeDefinition {
            span: self.make_span(start),
            description,
            name,
            directives,
            values,
        })
    }

    fn parse_input_object_type_definition(
        &mut self,
        description: Option<ast::StringValue<'src>>,
    ) -> ParseResult<ast::InputObjectTypeDefinition<'src>> {
        let keyword_span = self.expect_keyword("input")?;
        let start = Self::definition_start(&description, keyword_span);
        let name = self.expect_name()?;
        let directives = self.parse_directives(ConstContext::DirectiveArgument)?;
        let fields = self.parse_input_fields_definition()?;
        Ok(ast::InputObjectTypeDefinition {
            span: self.make_span(start),
            description,
            name,
            directives,
            fields,
        })
    }

    fn parse_directive_definition(
        &mut self,
        description: Option<ast::StringValue<'src>>,
    ) -> ParseResult<ast::DirectiveDefinition<'src>> {
        let keyword_span = self.expect_keyword("directive")?;
        let start = Self::definition_start(&description, keyword_span);
        self.expect(&GraphQLTokenKind::At)?;
        let name = self.expect_name()?;
        let arguments = self.parse_arguments_definition()?;
        let repeatable = if self.peek_is_keyword("repeatable")? {
            self.consume_token()?;
            true
        } else {
            false
        };
        self.expect_keyword("on")?;
        let locations = self.parse_directive_locations()?;
        Ok(ast::DirectiveDefinition {
            span: self.make_span(start),
            description,
            name,
            arguments,
            repeatable,
            locations,
        })
    }

    // =========================================================================
    // Type system building blocks
    // =========================================================================

    /// Parses an optional `implements A & B` clause. A single leading `&`
    /// is allowed by the grammar; a doubled or trailing `&` is not.
    fn parse_implements_interfaces(&mut self) -> ParseResult<Vec<ast::Name<'src>>> {
        if !self.peek_is_keyword("implements")? {
            return Ok(Vec::new());
        }
        self.consume_token()?;
        if self.peek_is(&GraphQLTokenKind::Ampersand)? {
            self.consume_token()?;
        }
        let mut interfaces = vec![self.expect_interface_name()?];
        while self.peek_is(&GraphQLTokenKind::Ampersand)? {
            self.consume_token()?;
            interfaces.push(self.expect_interface_name()?);
        }
        Ok(interfaces)
    }

    fn expect_interface_name(&mut self) -> ParseResult<ast::Name<'src>> {
        if self.peek_is(&GraphQLTokenKind::Name(Cow::Borrowed("")))? {
            return self.expect_name();
        }
        Err(self.unexpected("interface name"))
    }

    /// Parses `= A | B | C`. A leading `|`, a doubled `|` or an empty
    /// member list is rejected.
    fn parse_union_members(&mut self) -> ParseResult<Vec<ast::Name<'src>>> {
        if !self.peek_is(&GraphQLTokenKind::Equals)? {
            return Ok(Vec::new());
        }
        self.consume_token()?;
        let mut members = vec![self.expect_pipe_delimited_name("union member type")?];
        while self.peek_is(&GraphQLTokenKind::Pipe)? {
            self.consume_token()?;
            members.push(self.expect_pipe_delimited_name("union member type")?);
        }
        Ok(members)
    }

    fn expect_pipe_delimited_name(&mut self, what: &str) -> ParseResult<ast::Name<'src>> {
        if self.peek_is(&GraphQLTokenKind::Pipe)? {
            let span = self.peek_span()?;
            return Err(GraphQLParseError::new(
                format!("expected {what}, found `|`"),
                span,
                GraphQLParseErrorKind::UnexpectedToken {
                    expected: vec![what.to_string()],
                    found: "|".to_string(),
                },
            ));
        }
        if self.peek_is(&GraphQLTokenKind::Name(Cow::Borrowed("")))? {
            return self.expect_name();
        }
        Err(self.unexpected(what))
    }

    /// Parses an optional `{ field: Type ... }` block.
    fn parse_fields_definition(&mut self) -> ParseResult<Vec<ast::FieldDefinition<'src>>> {
        if !self.peek_is(&GraphQLTokenKind::CurlyBraceOpen)? {
            return Ok(Vec::new());
        }
        let open = self.consume_token()?;
        if self.peek_is(&GraphQLTokenKind::CurlyBraceClose)? {
            return Err(Self::empty_construct_error("field list", "{}", open.span));
        }
        let mut fields = Vec::new();
        loop {
            self.check_unclosed(&GraphQLTokenKind::CurlyBraceClose, &open.span)?;
            if self.peek_is(&GraphQLTokenKind::CurlyBraceClose)? {
                break;
            }
            fields.push(self.parse_field_definition()?);
        }
        self.consume_token()?;
        Ok(fields)
    }

    fn parse_field_definition(&mut self) -> ParseResult<ast::FieldDefinition<'src>> {
        let description = self.parse_description()?;
        let name = self.expect_name()?;
        let start = Self::definition_start(&description, name.span.clone());
        let arguments = self.parse_arguments_definition()?;
        self.expect(&GraphQLTokenKind::Colon)?;
        let field_type = self.parse_type_annotation()?;
        let directives = self.parse_directives(ConstContext::DirectiveArgument)?;
        Ok(ast::FieldDefinition {
            span: self.make_span(start),
            description,
            name,
            arguments,
            field_type,
            directives,
        })
    }

    /// Parses an optional `(arg: Type = default ...)` block.
    fn parse_arguments_definition(&mut self) -> ParseResult<Vec<ast::InputValueDefinition<'src>>> {
        if !self.peek_is(&GraphQLTokenKind::ParenOpen)? {
            return Ok(Vec::new());
        }
        let open = self.consume_token()?;
        if self.peek_is(&GraphQLTokenKind::ParenClose)? {
            return Err(Self::empty_construct_error(
                "argument definition list",
                "()",
                open.span,
            ));
        }
        let mut arguments = Vec::new();
        loop {
            self.check_unclosed(&GraphQLTokenKind::ParenClose, &open.span)?;
            if self.peek_is(&GraphQLTokenKind::ParenClose)? {
                break;
            }
            arguments.push(self.parse_input_value_definition()?);
        }
        self.consume_token()?;
        Ok(arguments)
    }

    /// Parses an optional `{ field: Type = default ... }` block of an input
    /// object.
    fn parse_input_fields_definition(
        &mut self,
    ) -> ParseResult<Vec<ast::InputValueDefinition<'src>>> {
        if !self.peek_is(&GraphQLTokenKind::CurlyBraceOpen)? {
            return Ok(Vec::new());
        }
        let open = self.consume_token()?;
        if self.peek_is(&GraphQLTokenKind::CurlyBraceClose)? {
            return Err(Self::empty_construct_error("input field list", "{}", open.span));
        }
        let mut fields = Vec::new();
        loop {
            self.check_unclosed(&GraphQLTokenKind::CurlyBraceClose, &open.span)?;
            if self.peek_is(&GraphQLTokenKind::CurlyBraceClose)? {
                break;
            }
            fields.push(self.parse_input_value_definition()?);
        }
        self.consume_token()?;
        Ok(fields)
    }

    fn parse_input_value_definition(&mut self) -> ParseResult<ast::InputValueDefinition<'src>> {
        let description = self.parse_description()?;
        let name = self.expect_name()?;
        let start = Self::definition_start(&description, name.span.clone());
        self.expect(&GraphQLTokenKind::Colon)?;
        let value_type = self.parse_type_annotation()?;
        let default_value = if self.peek_is(&GraphQLTokenKind::Equals)? {
            self.consume_token()?;
            Some(self.parse_value(ConstContext::InputDefaultValue)?)
        } else {
            None
        };
        let directives = self.parse_directives(ConstContext::DirectiveArgument)?;
        Ok(ast::InputValueDefinition {
            span: self.make_span(start),
            description,
            name,
            value_type,
            default_value,
            directives,
        })
    }

    /// Parses an optional `{ A B C }` block of enum values.
    fn parse_enum_values_definition(&mut self) -> ParseResult<Vec<ast::EnumValueDefinition<'src>>> {
        if !self.peek_is(&GraphQLTokenKind::CurlyBraceOpen)? {
            return Ok(Vec::new());
        }
        let open = self.consume_token()?;
        if self.peek_is(&GraphQLTokenKind::CurlyBraceClose)? {
            return Err(Self::empty_construct_error("enum value list", "{}", open.span));
        }
        let mut values = Vec::new();
        loop {
            self.check_unclosed(&GraphQLTokenKind::CurlyBraceClose, &open.span)?;
            if self.peek_is(&GraphQLTokenKind::CurlyBraceClose)? {
                break;
            }
            values.push(self.parse_enum_value_definition()?);
        }
        self.consume_token()?;
        Ok(values)
    }

    fn parse_enum_value_definition(&mut self) -> ParseResult<ast::EnumValueDefinition<'src>> {
        let description = self.parse_description()?;
        let reserved = match self.peek()?.kind {
            GraphQLTokenKind::True => Some("true"),
            GraphQLTokenKind::False => Some("false"),
            GraphQLTokenKind::Null => Some("null"),
            _ => None,
        };
        if let Some(reserved) = reserved {
            let span = self.peek_span()?;
            let mut error = GraphQLParseError::new(
                format!("enum value cannot be `{reserved}`"),
                span,
                GraphQLParseErrorKind::ReservedName {
                    name: reserved.to_string(),
                    context: ReservedNameContext::EnumValue,
                },
            );
            error.add_spec("https://spec.graphql.org/October2021/#EnumValue");
            return Err(error);
        }
        let name = self.expect_name()?;
        let start = Self::definition_start(&description, name.span.clone());
        let directives = self.parse_directives(ConstContext::DirectiveArgument)?;
        Ok(ast::EnumValueDefinition {
            span: self.make_span(start),
            description,
            name,
            directives,
        })
    }

    /// Parses `A | B | C` after `on` in a directive definition. A leading
    /// `|`, a doubled `|` or an empty list is rejected.
    fn parse_directive_locations(&mut self) -> ParseResult<Vec<ast::DirectiveLocation>> {
        let mut locations = vec![self.parse_directive_location()?];
        while self.peek_is(&GraphQLTokenKind::Pipe)? {
            self.consume_token()?;
            locations.push(self.parse_directive_location()?);
        }
        Ok(locations)
    }

    fn parse_directive_location(&mut self) -> ParseResult<ast::DirectiveLocation> {
        let name = self.expect_pipe_delimited_name("directive location")?;
        match ast::DirectiveLocationKind::from_name(&name.value) {
            Some(kind) => Ok(ast::DirectiveLocation {
                kind,
                span: name.span,
            }),
            None => {
                let mut error = GraphQLParseError::new(
                    format!("unknown directive location `{}`", name.value),
                    name.span,
                    GraphQLParseErrorKind::InvalidSyntax,
                );
                if let Some(suggestion) = Self::suggest_directive_location(&name.value) {
                    error.add_help(format!("did you mean `{suggestion}`?"));
                }
                Err(error)
            },
        }
    }

    /// Suggests the closest directive location for a typo.
    fn suggest_directive_location(input: &str) -> Option<&'static str> {
        let input_upper = input.to_uppercase();
        let mut best_match: Option<&'static str> = None;
        let mut best_distance = usize::MAX;
        for location in ast::DirectiveLocationKind::ALL {
            let distance = Self::edit_distance(&input_upper, location.as_str());
            if distance < best_distance && distance <= 3 {
                best_distance = distance;
                best_match = Some(location.as_str());
            }
        }
        best_match
    }

    /// Simple Levenshtein edit distance.
    fn edit_distance(a: &str, b: &str) -> usize {
        let a_chars: Vec<char> = a.chars().collect();
        let b_chars: Vec<char> = b.chars().collect();
        let m = a_chars.len();
        let n = b_chars.len();

        if m == 0 {
            return n;
        }
        if n == 0 {
            return m;
        }

        let mut prev: Vec<usize> = (0..=n).collect();
        let mut curr = vec![0; n + 1];

        for i in 1..=m {
            curr[0] = i;
            for j in 1..=n {
                let cost = if a_chars[i - 1] == b_chars[j - 1] { 0 } else { 1 };
                curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
            }
            std::mem::swap(&mut prev, &mut curr);
        }

        prev[n]
    }

    // =========================================================================
    // Extensions
    // =========================================================================

    fn parse_extension(&mut self) -> ParseResult<ast::Definition<'src>> {
        let start = self.expect_keyword("extend")?;
        let keyword = match &self.peek()?.kind {
            GraphQLTokenKind::Name(name) => name.clone(),
            _ => return Err(self.unexpected("type system extension")),
        };
        if keyword == "schema" {
            return Ok(ast::Definition::SchemaExtension(self.parse_schema_extension(start)?));
        }
        let extension = match keyword.as_ref() {
            "scalar" => ast::TypeExtension::Scalar(self.parse_scalar_type_extension(start)?),
            "type" => ast::TypeExtension::Object(self.parse_object_type_extension(start)?),
            "interface" => {
                ast::TypeExtension::Interface(self.parse_interface_type_extension(start)?)
            },
            "union" => ast::TypeExtension::Union(self.parse_union_type_extension(start)?),
            "enum" => ast::TypeExtension::Enum(self.parse_enum_type_extension(start)?),
            "input" => {
                ast::TypeExtension::InputObject(self.parse_input_object_type_extension(start)?)
            },
            _ => return Err(self.unexpected("type system extension")),
        };
        Ok(ast::Definition::TypeExtension(extension))
    }

    /// An extension must add something; `extend type Foo` alone is an error.
    fn check_extension_not_empty(
        is_empty: bool,
        what: &str,
        span: &GraphQLSourceSpan,
    ) -> ParseResult<()> {
        if !is_empty {
            return Ok(());
        }
        Err(GraphQLParseError::new(
            format!("{what} extension must add at least one directive or member"),
            span.clone(),
            GraphQLParseErrorKind::InvalidEmptyConstruct {
                construct: format!("{what} extension"),
            },
        ))
    }

    fn parse_schema_extension(
        &mut self,
        start: GraphQLSourceSpan,
    ) -> ParseResult<ast::SchemaExtension<'src>> {
        self.expect_keyword("schema")?;
        let directives = self.parse_directives(ConstContext::DirectiveArgument)?;
        let root_operations = self.parse_root_operation_types(true)?;
        let span = self.make_span(start);
        Self::check_extension_not_empty(
            directives.is_empty() && root_operations.is_empty(),
            "schema",
            &span,
        )?;
        Ok(ast::SchemaExtension {
            span,
            directives,
            root_operations,
        })
    }

    fn parse_scalar_type_extension(
        &mut self,
        start: GraphQLSourceSpan,
    ) -> ParseResult<ast::ScalarTypeExtension<'src>> {
        self.expect_keyword("scalar")?;
        let name = self.expect_name()?;
        let directives = self.parse_directives(ConstContext::DirectiveArgument)?;
        let span = self.make_span(start);
        Self::check_extension_not_empty(directives.is_empty(), "scalar", &span)?;
        Ok(ast::ScalarTypeExtension {
            span,
            name,
            directives,
        })
    }

    fn parse_object_type_extension(
        &mut self,
        start: GraphQLSourceSpan,
    ) -> ParseResult<ast::ObjectTypeExtension<'src>> {
        self.expect_keyword("type")?;
        let name = self.expect_name()?;
        let implements = self.parse_implements_interfaces()?;
        let directives = self.parse_directives(ConstContext::DirectiveArgument)?;
        let fields = self.parse_fields_definition()?;
        let span = self.make_span(start);
        Self::check_extension_not_empty(
            implements.is_empty() && directives.is_empty() && fields.is_empty(),
            "object type",
            &span,
        )?;
        Ok(ast::ObjectTypeExtension {
            span,
            name,
            implements,
            directives,
            fields,
        })
    }

    fn parse_interface_type_extension(
        &mut self,
        start: GraphQLSourceSpan,
    ) -> ParseResult<ast::InterfaceTypeExtension<'src>> {
        self.expect_keyword("interface")?;
        let name = self.expect_name()?;
        let implements = self.parse_implements_interfaces()?;
        let directives = self.parse_directives(ConstContext::DirectiveArgument)?;
        let fields = self.parse_fields_definition()?;
        let span = self.make_span(start);
        Self::check_extension_not_empty(
            implements.is_empty() && directives.is_empty() && fields.is_empty(),
            "interface",
            &span,
        )?;
        Ok(ast::InterfaceTypeExtension {
            span,
            name,
            implements,
            directives,
            fields,
        })
    }

    fn parse_union_type_extension(
        &mut self,
        start: GraphQLSourceSpan,
    ) -> ParseResult<ast::UnionTypeExtension<'src>> {
        self.expect_keyword("union")?;
        let name = self.expect_name()?;
        let directives = self.parse_directives(ConstContext::DirectiveArgument)?;
        let members = self.parse_union_members()?;
        let span = self.make_span(start);
        Self::check_extension_not_empty(
            directives.is_empty() && members.is_empty(),
            "union",
            &span,
        )?;
        Ok(ast::UnionTypeExtension {
            span,
            name,
            directives,
            members,
        })
    }

    fn parse_enum_type_extension(
        &mut self,
        start: GraphQLSourceSpan,
    ) -> ParseResult<ast::EnumTypeExtension<'src>> {
        self.expect_keyword("enum")?;
        let name = self.expect_name()?;
        let directives = self.parse_directives(ConstContext::DirectiveArgument)?;
        let values = self.parse_enum_values_definition()?;
        let span = self.make_span(start);
        Self::check_extension_not_empty(
            directives.is_empty() && values.is_empty(),
            "enum",
            &span,
        )?;
        Ok(ast::EnumTypeExtension {
            span,
            name,
            directives,
            values,
        })
    }

    fn parse_input_object_type_extension(
        &mut self,
        start: GraphQLSourceSpan,
    ) -> ParseResult<ast::InputObjectTypeExtension<'src>> {
        self.expect_keyword("input")?;
        let name = self.expect_name()?;
        let directives = self.parse_directives(ConstContext::DirectiveArgument)?;
        let fields = self.parse_input_fields_definition()?;
        let span = self.make_span(start);
        Self::check_extension_not_empty(
            directives.is_empty() && fields.is_empty(),
            "input object",
            &span,
        )?;
        Ok(ast::InputObjectTypeExtension {
            span,
            name,
            directives,
            fields,
        })
    }
}
