use crate::DirectiveAnnotation;
use crate::schema::Schema;
use crate::types::ArgumentDefinition;
use crate::types::DirectiveDefinition;
use crate::types::FieldDefinition;
use crate::types::GraphQLType;
use crate::types::ResolvedType;

/// The schema types in scope at the walker's current position.
///
/// Anything the document refers to that the schema does not define shows
/// up as `None`; rules that need it simply skip the node (another rule
/// reports the unknown name).
#[derive(Clone, Debug)]
pub struct TypeInfo<'a> {
    argument: Option<&'a ArgumentDefinition>,
    directive: Option<(&'a DirectiveAnnotation, Option<&'a DirectiveDefinition>)>,
    field_definitions: Vec<Option<&'a FieldDefinition>>,
    parent_types: Vec<Option<&'a GraphQLType>>,
    schema: &'a Schema,
}
impl<'a> TypeInfo<'a> {
    pub(crate) fn new(schema: &'a Schema) -> Self {
        Self {
            argument: None,
            directive: None,
            field_definitions: vec![],
            parent_types: vec![],
            schema,
        }
    }

    /// The definition of the argument being visited.
    pub fn argument_definition(&self) -> Option<&'a ArgumentDefinition> {
        self.argument
    }

    /// The directive whose arguments are being visited.
    pub fn directive(&self) -> Option<&'a DirectiveAnnotation> {
        self.directive.map(|(directive, _)| directive)
    }

    pub fn directive_definition(&self) -> Option<&'a DirectiveDefinition> {
        self.directive.and_then(|(_, directive_def)| directive_def)
    }

    /// The definition of the innermost field being visited.
    pub fn field_definition(&self) -> Option<&'a FieldDefinition> {
        self.field_definitions.last().copied().flatten()
    }

    /// The type an argument's value must conform to.
    pub fn input_type(&self) -> Option<&'a ResolvedType> {
        self.argument.map(ArgumentDefinition::arg_type)
    }

    /// The composite type whose selection set is being visited: the
    /// operation's root type, a fragment's type condition, or the named
    /// type of the enclosing field.
    pub fn parent_type(&self) -> Option<&'a GraphQLType> {
        self.parent_types.last().copied().flatten()
    }

    pub fn schema(&self) -> &'a Schema {
        self.schema
    }

    pub(crate) fn push_parent_type(&mut self, parent_type: Option<&'a GraphQLType>) {
        self.parent_types.push(parent_type.filter(|type_| type_.kind().is_composite()));
    }

    pub(crate) fn pop_parent_type(&mut self) {
        self.parent_types.pop();
    }

    pub(crate) fn push_field(&mut self, field_def: Option<&'a FieldDefinition>) {
        self.field_definitions.push(field_def);
    }

    pub(crate) fn pop_field(&mut self) {
        self.field_definitions.pop();
    }

    pub(crate) fn set_argument(&mut self, argument: Option<&'a ArgumentDefinition>) {
        self.argument = argument;
    }

    pub(crate) fn set_directive(&mut self, directive: Option<&'a DirectiveAnnotation>) {
        self.directive = directive.map(|directive| {
            (directive, self.schema.directive(directive.name()))
        });
    }
}
