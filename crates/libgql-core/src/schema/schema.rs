use crate::DirectiveAnnotation;
use crate::operation::OperationKind;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaDefinitions;
use crate::types::DirectiveDefinition;
use crate::types::FieldDefinition;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use crate::types::possible_type_names;
use crate::types::ResolvedType;
use crate::types::TypeRef;
use indexmap::IndexMap;

/// A resolved, immutable GraphQL schema.
///
/// Every type reference inside a `Schema` names a type the schema defines,
/// every object/interface correctly implements its interfaces, and the
/// query root type exists. `Schema` is `Send + Sync`; share it across
/// validations and executions with an `Arc`.
///
/// ```rust
/// use libgql_core::schema::Schema;
///
/// let schema = Schema::parse("type Query { hello: String }").unwrap();
/// assert_eq!(schema.query_type_name(), "Query");
/// assert!(schema.field_definition("Query", "__typename").is_some());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub(crate) description: Option<String>,
    pub(crate) directive_defs: IndexMap<String, DirectiveDefinition>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) meta_fields: IndexMap<String, FieldDefinition>,
    pub(crate) root_type_names: IndexMap<OperationKind, String>,
    pub(crate) types: IndexMap<String, GraphQLType>,
}
impl Schema {
    pub fn parse(sdl: &str) -> Result<Self, SchemaBuildError> {
        SchemaDefinitions::parse(sdl)?.build()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directive(&self, name: &str) -> Option<&DirectiveDefinition> {
        self.directive_defs.get(name)
    }

    /// Every directive definition, built-ins first.
    pub fn directives(&self) -> &IndexMap<String, DirectiveDefinition> {
        &self.directive_defs
    }

    /// Directive annotations on the `schema` definition (and extensions).
    pub fn schema_directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    /// Looks up `field_name` on the named object or interface type, falling
    /// back to the introspection meta-fields: `__typename` on any composite
    /// type, `__schema` and `__type` on the query root type only.
    pub fn field_definition(&self, type_name: &str, field_name: &str) -> Option<&FieldDefinition> {
        let type_ = self.types.get(type_name)?;
        if let Some(field_def) = type_.fields().and_then(|fields| fields.get(field_name)) {
            return Some(field_def);
        }
        match field_name {
            "__typename" if type_.kind().is_composite() => self.meta_fields.get(field_name),
            "__schema" | "__type" if type_name == self.query_type_name() =>
                self.meta_fields.get(field_name),
            _ => None,
        }
    }

    /// Whether `object_name` may be the runtime type of a value whose
    /// static type is `type_name`.
    pub fn is_possible_type(&self, type_name: &str, object_name: &str) -> bool {
        type_name == object_name
            || self.possible_types(type_name)
                .iter()
                .any(|obj_type| obj_type.name() == object_name)
    }

    /// The object types a value of type `type_name` may have at runtime:
    /// the members of a union, the objects implementing an interface
    /// (directly or through another interface), or the object itself.
    pub fn possible_types(&self, type_name: &str) -> Vec<&ObjectType> {
        match self.types.get(type_name) {
            Some(GraphQLType::Object(obj_type)) => vec![obj_type],
            Some(GraphQLType::Union(_)) => possible_type_names(&self.types, type_name)
                .into_iter()
                .filter_map(|name| self.types.get(name).and_then(GraphQLType::as_object))
                .collect(),
            Some(GraphQLType::Interface(_)) => self.types
                .values()
                .filter_map(GraphQLType::as_object)
                .filter(|obj_type| obj_type.interface_names().contains(&type_name))
                .collect(),
            _ => vec![],
        }
    }

    pub fn query_type_name(&self) -> &str {
        self.root_type_names
            .get(&OperationKind::Query)
            .map(String::as_str)
            .unwrap_or("Query")
    }

    pub fn mutation_type_name(&self) -> Option<&str> {
        self.root_type_name(OperationKind::Mutation)
    }

    pub fn subscription_type_name(&self) -> Option<&str> {
        self.root_type_name(OperationKind::Subscription)
    }

    /// Resolves a type reference written in a document (such as a variable
    /// type) against this schema. `None` if it names an unknown type.
    pub fn resolve_type_ref(&self, type_ref: &TypeRef) -> Option<ResolvedType> {
        Some(match type_ref {
            TypeRef::List(inner) => ResolvedType::list(self.resolve_type_ref(inner)?),
            TypeRef::Named(named) => {
                let type_ = self.types.get(named.name())?;
                ResolvedType::named(named.name(), type_.kind())
            },
            TypeRef::NonNull(inner) => ResolvedType::non_null(self.resolve_type_ref(inner)?),
        })
    }

    pub fn root_type(&self, operation_kind: OperationKind) -> Option<&ObjectType> {
        self.root_type_name(operation_kind)
            .and_then(|type_name| self.types.get(type_name))
            .and_then(GraphQLType::as_object)
    }

    pub fn root_type_name(&self, operation_kind: OperationKind) -> Option<&str> {
        self.root_type_names.get(&operation_kind).map(String::as_str)
    }

    pub fn type_named(&self, name: &str) -> Option<&GraphQLType> {
        self.types.get(name)
    }

    /// Every named type in definition order: built-in scalars and
    /// introspection types first, then user types.
    pub fn types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }
}
