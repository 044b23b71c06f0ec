use crate::Argument;
use crate::AstConversionError;
use crate::DirectiveAnnotation;
use crate::DirectiveAnnotationBuilder;
use crate::loc::SourceLocation;
use crate::operation::Document;
use crate::operation::FieldSelection;
use crate::operation::FragmentDefinition;
use crate::operation::FragmentSpreadSelection;
use crate::operation::InlineFragmentSelection;
use crate::operation::OperationDefinition;
use crate::operation::Selection;
use crate::operation::SelectionSet;
use crate::operation::TypeSystemDefinitionRef;
use crate::operation::VariableDefinition;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaDefinitions;
use crate::types::NamedTypeRef;
use crate::types::TypeRef;
use crate::Value;
use indexmap::IndexMap;
use libgql_parser::ast;
use libgql_parser::GraphQLParseError;
use libgql_parser::GraphQLParser;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

type Result<T> = std::result::Result<T, DocumentBuildError>;

/// Accumulates the operations and fragments of one or more parsed sources
/// into a [`Document`].
///
/// Building is a pure transformation: apart from duplicate fragment names
/// and malformed literals, nothing is checked here. Type-system
/// definitions found along the way are collected into an embedded schema.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    fragments: IndexMap<String, FragmentDefinition>,
    operations: Vec<OperationDefinition>,
    schema_defs: Option<SchemaDefinitions>,
    type_system_definitions: Vec<TypeSystemDefinitionRef>,
}
impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(self) -> Result<Document> {
        let schema = match self.schema_defs {
            Some(schema_defs) => Some(Arc::new(schema_defs.build()?)),
            None => None,
        };
        tracing::debug!(
            operations = self.operations.len(),
            fragments = self.fragments.len(),
            embedded_schema = schema.is_some(),
            "built document",
        );
        Ok(Document {
            fragments: self.fragments,
            operations: self.operations,
            schema,
            type_system_definitions: self.type_system_definitions,
        })
    }

    pub fn from_ast(document: &ast::Document<'_>) -> Result<Self> {
        let mut builder = Self::new();
        builder.load_ast(document)?;
        Ok(builder)
    }

    pub fn load_str(&mut self, file_path: Option<&Path>, src: &str) -> Result<()> {
        let document = match file_path {
            Some(file_path) => GraphQLParser::with_file_path(src, file_path),
            None => GraphQLParser::new(src),
        }.parse_document()?;
        self.load_ast(&document)
    }

    pub fn load_ast(&mut self, document: &ast::Document<'_>) -> Result<()> {
        for def in &document.definitions {
            match def {
                ast::Definition::Fragment(frag_def) => {
                    let fragment = fragment_from_ast(frag_def)?;
                    if let Some(existing) = self.fragments.get(&fragment.name) {
                        return Err(DocumentBuildError::DuplicateFragmentDefinition {
                            fragment_name: fragment.name,
                            first_def_location: existing.location.clone(),
                            second_def_location: fragment.location,
                        });
                    }
                    self.fragments.insert(fragment.name.clone(), fragment);
                },

                ast::Definition::Operation(op_def) =>
                    self.operations.push(operation_from_ast(op_def)?),

                type_system_def => self.type_system_definitions.push(
                    type_system_definition_ref(type_system_def),
                ),
            }
        }

        if document.type_system_definitions().next().is_some() {
            if self.schema_defs.is_none() {
                self.schema_defs = Some(SchemaDefinitions::new()?);
            }
            if let Some(schema_defs) = &mut self.schema_defs {
                schema_defs.load_ast(document)?;
            }
        }
        Ok(())
    }
}

fn type_system_definition_ref(def: &ast::Definition<'_>) -> TypeSystemDefinitionRef {
    let name = match def {
        ast::Definition::DirectiveDefinition(directive_def) =>
            Some(format!("@{}", directive_def.name.as_str())),
        ast::Definition::TypeDefinition(type_def) => Some(type_def.name().as_str().to_string()),
        ast::Definition::TypeExtension(type_ext) => Some(type_ext.name().as_str().to_string()),
        _ => None,
    };
    TypeSystemDefinitionRef {
        location: SourceLocation::from_span(def.span()),
        name,
    }
}

fn directives_from_ast(
    directives: &[ast::DirectiveAnnotation<'_>],
) -> Result<Vec<DirectiveAnnotation>> {
    Ok(DirectiveAnnotationBuilder::from_ast(directives)?)
}

fn operation_from_ast(op_def: &ast::OperationDefinition<'_>) -> Result<OperationDefinition> {
    Ok(OperationDefinition {
        directives: directives_from_ast(&op_def.directives)?,
        location: SourceLocation::from_span(&op_def.span),
        name: op_def.name.as_ref().map(|name| name.as_str().to_string()),
        operation_kind: op_def.operation_kind.into(),
        selection_set: selection_set_from_ast(&op_def.selection_set)?,
        variable_definitions: op_def.variable_definitions
            .iter()
            .map(variable_definition_from_ast)
            .collect::<Result<Vec<_>>>()?,
    })
}

fn fragment_from_ast(frag_def: &ast::FragmentDefinition<'_>) -> Result<FragmentDefinition> {
    Ok(FragmentDefinition {
        directives: directives_from_ast(&frag_def.directives)?,
        location: SourceLocation::from_span(&frag_def.span),
        name: frag_def.name.as_str().to_string(),
        selection_set: selection_set_from_ast(&frag_def.selection_set)?,
        type_condition: type_condition_from_ast(&frag_def.type_condition),
    })
}

fn type_condition_from_ast(condition: &ast::TypeCondition<'_>) -> NamedTypeRef {
    NamedTypeRef::new(
        condition.named_type.as_str(),
        SourceLocation::from_span(&condition.named_type.span),
    )
}

fn variable_definition_from_ast(
    var_def: &ast::VariableDefinition<'_>,
) -> Result<VariableDefinition> {
    Ok(VariableDefinition {
        default_value: var_def.default_value
            .as_ref()
            .map(Value::from_ast)
            .transpose()?,
        directives: directives_from_ast(&var_def.directives)?,
        location: SourceLocation::from_span(&var_def.span),
        name: var_def.variable.as_str().to_string(),
        var_type: TypeRef::from_ast(&var_def.var_type),
    })
}

fn selection_set_from_ast(selection_set: &ast::SelectionSet<'_>) -> Result<SelectionSet> {
    Ok(SelectionSet {
        location: SourceLocation::from_span(&selection_set.span),
        selections: selection_set.selections
            .iter()
            .map(selection_from_ast)
            .collect::<Result<Vec<_>>>()?,
    })
}

fn selection_from_ast(selection: &ast::Selection<'_>) -> Result<Selection> {
    Ok(match selection {
        ast::Selection::Field(field) => Selection::Field(FieldSelection {
            alias: field.alias.as_ref().map(|alias| alias.as_str().to_string()),
            arguments: field.arguments
                .iter()
                .map(Argument::from_ast)
                .collect::<std::result::Result<Vec<_>, _>>()?,
            directives: directives_from_ast(&field.directives)?,
            location: SourceLocation::from_span(&field.span),
            name: field.name.as_str().to_string(),
            selection_set: field.selection_set
                .as_ref()
                .map(selection_set_from_ast)
                .transpose()?,
        }),

        ast::Selection::FragmentSpread(spread) =>
            Selection::FragmentSpread(FragmentSpreadSelection {
                directives: directives_from_ast(&spread.directives)?,
                fragment_name: spread.name.as_str().to_string(),
                location: SourceLocation::from_span(&spread.span),
            }),

        ast::Selection::InlineFragment(inline) =>
            Selection::InlineFragment(InlineFragmentSelection {
                directives: directives_from_ast(&inline.directives)?,
                location: SourceLocation::from_span(&inline.span),
                selection_set: selection_set_from_ast(&inline.selection_set)?,
                type_condition: inline.type_condition.as_ref().map(type_condition_from_ast),
            }),
    })
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum DocumentBuildError {
    #[error("{0}")]
    Parse(#[from] GraphQLParseError),

    #[error("argument `{argument_name}` is given more than once to `@{directive_name}`")]
    DuplicateDirectiveArgument {
        argument_name: String,
        directive_name: String,
        location: SourceLocation,
    },

    #[error("fragment `{fragment_name}` is defined more than once")]
    DuplicateFragmentDefinition {
        fragment_name: String,
        first_def_location: SourceLocation,
        second_def_location: SourceLocation,
    },

    #[error("{0}")]
    InvalidLiteral(AstConversionError),

    #[error("invalid type-system definitions in document: {0}")]
    Schema(#[from] SchemaBuildError),
}
impl std::convert::From<AstConversionError> for DocumentBuildError {
    fn from(err: AstConversionError) -> Self {
        match err {
            AstConversionError::DuplicateDirectiveArgument {
                argument_name,
                directive_name,
                location,
            } => Self::DuplicateDirectiveArgument {
                argument_name,
                directive_name,
                location,
            },
            err => Self::InvalidLiteral(err),
        }
    }
}
