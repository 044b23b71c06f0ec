use crate::DirectiveAnnotation;
use crate::DirectiveAnnotationBuilder;
use crate::introspection;
use crate::loc::BUILTIN_SOURCE_NAME;
use crate::loc::SourceLocation;
use crate::metadata::MetadataKey;
use crate::operation::OperationKind;
use crate::schema::ObjectOrInterfaceTypeValidator;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::schema::TypeRegistry;
use crate::types::check_reserved_name;
use crate::types::DirectiveDefinition;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::NamedTypeRef;
use crate::types::TypeBuilder;
use crate::types::TypeDefinition;
use crate::types::TypeRef;
use indexmap::IndexMap;
use libgql_parser::ast;
use libgql_parser::GraphQLParser;
use std::path::Path;
use std::sync::LazyLock;

type Result<T> = std::result::Result<T, SchemaBuildError>;

const BUILTIN_SDL: &str = include_str!("builtin.graphql");

static BUILTIN_DEFINITIONS: LazyLock<Result<SchemaDefinitions>> =
    LazyLock::new(SchemaDefinitions::load_builtins);

/// The unresolved contents of a schema: every type, directive, and root
/// operation type declared so far, with type references still by name.
///
/// Definitions may be loaded from several SDL sources in any order; type
/// extensions wait until the type they extend is loaded. Metadata (such as
/// field resolvers) is attached here, before [`SchemaDefinitions::build()`]
/// produces the immutable [`Schema`].
///
/// ```rust
/// use libgql_core::schema::SchemaDefinitions;
///
/// let mut defs = SchemaDefinitions::new().unwrap();
/// defs.load_str(None, "type Query { me: User }").unwrap();
/// defs.load_str(None, "type User { name: String }").unwrap();
/// let schema = defs.build().unwrap();
/// assert!(schema.type_named("User").is_some());
/// ```
#[derive(Clone, Debug)]
pub struct SchemaDefinitions {
    pub(crate) directive_defs: IndexMap<String, DirectiveDefinition<TypeRef>>,
    pending_extensions: Vec<TypeDefinition>,
    root_operation_types: IndexMap<OperationKind, NamedTypeRef>,
    schema_def_location: Option<SourceLocation>,
    schema_description: Option<String>,
    schema_directives: Vec<DirectiveAnnotation>,
    pub(crate) types: IndexMap<String, TypeDefinition>,
}
impl SchemaDefinitions {
    /// Definitions holding only the built-in scalars, directives, and
    /// introspection types.
    pub fn new() -> Result<Self> {
        BUILTIN_DEFINITIONS.clone()
    }

    pub fn from_ast(document: &ast::Document<'_>) -> Result<Self> {
        let mut defs = Self::new()?;
        defs.load_ast(document)?;
        Ok(defs)
    }

    pub fn parse(sdl: &str) -> Result<Self> {
        let mut defs = Self::new()?;
        defs.load_str(None, sdl)?;
        Ok(defs)
    }

    /// Parses `src` and adds its type-system definitions. Executable
    /// definitions in `src` are ignored.
    pub fn load_str(&mut self, file_path: Option<&Path>, src: &str) -> Result<()> {
        let parser = match file_path {
            Some(file_path) => GraphQLParser::with_file_path(src, file_path),
            None => GraphQLParser::new(src),
        };
        let document = parser.parse_document()?;
        self.load_ast(&document)
    }

    pub fn load_ast(&mut self, document: &ast::Document<'_>) -> Result<()> {
        for def in document.type_system_definitions() {
            match def {
                ast::Definition::DirectiveDefinition(def) =>
                    self.add_directive_definition(TypeBuilder::directive_from_ast(def)?)?,
                ast::Definition::SchemaDefinition(def) =>
                    self.add_schema_definition(def)?,
                ast::Definition::SchemaExtension(ext) => {
                    self.schema_directives.extend(
                        DirectiveAnnotationBuilder::from_ast(&ext.directives)?,
                    );
                    self.add_root_operation_types(&ext.root_operations)?;
                },
                ast::Definition::TypeDefinition(def) =>
                    self.add_type_definition(TypeBuilder::type_from_ast(def)?)?,
                ast::Definition::TypeExtension(ext) =>
                    self.add_type_extension(TypeBuilder::extension_from_ast(ext)?)?,
                ast::Definition::Fragment(_)
                | ast::Definition::Operation(_) => (),
            }
        }
        self.apply_pending_extensions()
    }

    pub fn directive_definition(&self, name: &str) -> Option<&DirectiveDefinition<TypeRef>> {
        self.directive_defs.get(name)
    }

    pub fn type_definition(&self, name: &str) -> Option<&TypeDefinition> {
        self.types.get(name)
    }

    /// Every named type loaded so far (built-ins first), in definition
    /// order.
    pub fn types(&self) -> &IndexMap<String, TypeDefinition> {
        &self.types
    }

    // =====================================================================
    // Metadata
    // =====================================================================

    pub fn set_type_metadata<T: Send + Sync + 'static>(
        &mut self,
        type_name: &str,
        key: &'static MetadataKey<T>,
        value: T,
    ) -> Result<()> {
        let metadata = self.types
            .get_mut(type_name)
            .and_then(|type_def| type_def.metadata_mut())
            .ok_or_else(|| unknown_target(type_name))?;
        metadata.insert(key, value);
        Ok(())
    }

    pub fn set_field_metadata<T: Send + Sync + 'static>(
        &mut self,
        type_name: &str,
        field_name: &str,
        key: &'static MetadataKey<T>,
        value: T,
    ) -> Result<()> {
        let field_def = self.types
            .get_mut(type_name)
            .and_then(|type_def| type_def.fields_mut())
            .and_then(|fields| fields.get_mut(field_name))
            .ok_or_else(|| unknown_target(&format!("{type_name}.{field_name}")))?;
        field_def.metadata.insert(key, value);
        Ok(())
    }

    /// Attaches metadata to an argument of an object or interface field, or
    /// (when `field_name` is `None`) to a field of an input object type.
    pub fn set_argument_metadata<T: Send + Sync + 'static>(
        &mut self,
        type_name: &str,
        field_name: Option<&str>,
        argument_name: &str,
        key: &'static MetadataKey<T>,
        value: T,
    ) -> Result<()> {
        let type_def = self.types.get_mut(type_name);
        let arg_def = match (type_def, field_name) {
            (Some(GraphQLType::InputObject(input_type)), None) =>
                input_type.fields.get_mut(argument_name),
            (Some(type_def), Some(field_name)) => type_def
                .fields_mut()
                .and_then(|fields| fields.get_mut(field_name))
                .and_then(|field_def| field_def.arguments.get_mut(argument_name)),
            _ => None,
        };
        let arg_def = arg_def.ok_or_else(|| unknown_target(&match field_name {
            Some(field_name) => format!("{type_name}.{field_name}({argument_name}:)"),
            None => format!("{type_name}.{argument_name}"),
        }))?;
        arg_def.metadata.insert(key, value);
        Ok(())
    }

    pub fn set_enum_value_metadata<T: Send + Sync + 'static>(
        &mut self,
        type_name: &str,
        value_name: &str,
        key: &'static MetadataKey<T>,
        value: T,
    ) -> Result<()> {
        let enum_value = match self.types.get_mut(type_name) {
            Some(GraphQLType::Enum(enum_type)) => enum_type.values.get_mut(value_name),
            _ => None,
        };
        let enum_value = enum_value
            .ok_or_else(|| unknown_target(&format!("{type_name}.{value_name}")))?;
        enum_value.metadata.insert(key, value);
        Ok(())
    }

    // =====================================================================
    // Building
    // =====================================================================

    /// Resolves every definition and produces the immutable [`Schema`].
    pub fn build(self) -> Result<Schema> {
        if let Some(ext) = self.pending_extensions.first() {
            return Err(SchemaBuildError::ExtensionOfUndefinedType {
                type_name: ext.name().to_string(),
                extension_location: ext.location().to_owned(),
            });
        }

        let root_operation_types = self.root_operation_type_refs();
        if !root_operation_types.contains_key(&OperationKind::Query) {
            return Err(SchemaBuildError::NoQueryType);
        }

        let mut registry = TypeRegistry::new(&self);
        let mut root_type_names = IndexMap::with_capacity(root_operation_types.len());
        for (operation_kind, root_ref) in &root_operation_types {
            let resolved = registry.resolve_named(root_ref)?;
            if resolved.kind() != GraphQLTypeKind::Object {
                return Err(SchemaBuildError::NonObjectRootType {
                    operation_kind: *operation_kind,
                    type_name: root_ref.name().to_string(),
                    location: root_ref.ref_location().to_owned(),
                });
            }
            root_type_names.insert(*operation_kind, root_ref.name().to_string());
        }

        let mut directive_defs = IndexMap::with_capacity(self.directive_defs.len());
        for (directive_name, directive_def) in &self.directive_defs {
            directive_defs.insert(directive_name.clone(), directive_def.resolve(&mut registry)?);
        }

        let types = registry.into_types()?;
        for type_ in types.values() {
            let type_data = match type_ {
                GraphQLType::Interface(iface_type) => &iface_type.0,
                GraphQLType::Object(obj_type) => &obj_type.0,
                _ => continue,
            };
            let errors = ObjectOrInterfaceTypeValidator::new(type_data, &types).validate();
            if let Some(error) = errors.into_iter().next() {
                return Err(error);
            }
        }

        tracing::debug!(
            types = types.len(),
            directives = directive_defs.len(),
            "built schema",
        );

        Ok(Schema {
            description: self.schema_description,
            directive_defs,
            directives: self.schema_directives,
            meta_fields: introspection::meta_field_definitions(),
            root_type_names,
            types,
        })
    }

    // =====================================================================
    // Loading
    // =====================================================================

    fn load_builtins() -> Result<Self> {
        let mut defs = Self {
            directive_defs: IndexMap::new(),
            pending_extensions: vec![],
            root_operation_types: IndexMap::new(),
            schema_def_location: None,
            schema_description: None,
            schema_directives: vec![],
            types: IndexMap::new(),
        };
        for builtin_scalar in [
            GraphQLType::Bool,
            GraphQLType::Float,
            GraphQLType::ID,
            GraphQLType::Int,
            GraphQLType::String,
        ] {
            defs.types.insert(builtin_scalar.name().to_string(), builtin_scalar);
        }
        let document = GraphQLParser::with_file_path(
            BUILTIN_SDL,
            Path::new(BUILTIN_SOURCE_NAME),
        ).parse_document()?;
        defs.load_ast(&document)?;
        introspection::attach_resolvers(&mut defs)?;
        Ok(defs)
    }

    fn add_directive_definition(&mut self, def: DirectiveDefinition<TypeRef>) -> Result<()> {
        if let Some(existing) = self.directive_defs.get(def.name()) {
            if existing.is_builtin() {
                return Err(SchemaBuildError::RedefinedBuiltinDirective {
                    directive_name: def.name.clone(),
                    location: def.location.to_owned(),
                });
            }
            return Err(SchemaBuildError::DuplicateDirectiveDefinition {
                directive_name: def.name.clone(),
                first_def_location: existing.location().to_owned(),
                second_def_location: def.location.to_owned(),
            });
        }
        self.directive_defs.insert(def.name.clone(), def);
        Ok(())
    }

    fn add_schema_definition(&mut self, def: &ast::SchemaDefinition<'_>) -> Result<()> {
        let location = SourceLocation::from_span(&def.span);
        if let Some(first_def_location) = &self.schema_def_location {
            return Err(SchemaBuildError::DuplicateSchemaDefinition {
                first_def_location: first_def_location.to_owned(),
                second_def_location: location,
            });
        }
        self.schema_def_location = Some(location);
        self.schema_description = def.description.as_ref().map(|desc| desc.value.clone());
        self.schema_directives.extend(DirectiveAnnotationBuilder::from_ast(&def.directives)?);
        self.add_root_operation_types(&def.root_operations)
    }

    fn add_root_operation_types(
        &mut self,
        root_operations: &[ast::RootOperationTypeDefinition<'_>],
    ) -> Result<()> {
        for root_op in root_operations {
            let operation_kind = OperationKind::from(root_op.operation_kind);
            let location = SourceLocation::from_span(&root_op.span);
            if self.root_operation_types.contains_key(&operation_kind) {
                return Err(SchemaBuildError::DuplicateRootOperationType {
                    operation_kind,
                    location,
                });
            }
            self.root_operation_types.insert(
                operation_kind,
                NamedTypeRef::new(root_op.named_type.as_str(), location),
            );
        }
        Ok(())
    }

    fn add_type_definition(&mut self, type_def: TypeDefinition) -> Result<()> {
        let type_name = type_def.name();
        check_reserved_name(type_name, type_def.location())?;
        if let Some(existing) = self.types.get(type_name) {
            if existing.is_builtin() {
                return Err(SchemaBuildError::RedefinedBuiltinType {
                    type_name: type_name.to_string(),
                    location: type_def.location().to_owned(),
                });
            }
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name: type_name.to_string(),
                first_def_location: existing.location().to_owned(),
                second_def_location: type_def.location().to_owned(),
            });
        }
        self.types.insert(type_name.to_string(), type_def);
        Ok(())
    }

    fn add_type_extension(&mut self, ext: TypeDefinition) -> Result<()> {
        match self.types.get_mut(ext.name()) {
            Some(base) if base.is_builtin() && !ext.is_builtin() =>
                Err(SchemaBuildError::RedefinedBuiltinType {
                    type_name: ext.name().to_string(),
                    location: ext.location().to_owned(),
                }),
            Some(base) => TypeBuilder::merge_extension(base, ext),
            None => {
                self.pending_extensions.push(ext);
                Ok(())
            },
        }
    }

    fn apply_pending_extensions(&mut self) -> Result<()> {
        let pending = std::mem::take(&mut self.pending_extensions);
        for ext in pending {
            self.add_type_extension(ext)?;
        }
        Ok(())
    }

    /// The declared root operation types or, without any `schema`
    /// definition, the types named `Query`, `Mutation`, and `Subscription`.
    ///
    /// https://spec.graphql.org/October2021/#sec-Root-Operation-Types.Default-Root-Operation-Type-Names
    fn root_operation_type_refs(&self) -> IndexMap<OperationKind, NamedTypeRef> {
        if self.schema_def_location.is_some() || !self.root_operation_types.is_empty() {
            return self.root_operation_types.clone();
        }
        [
            (OperationKind::Query, "Query"),
            (OperationKind::Mutation, "Mutation"),
            (OperationKind::Subscription, "Subscription"),
        ]
            .into_iter()
            .filter_map(|(operation_kind, type_name)| {
                self.types.get(type_name).map(|type_def| (
                    operation_kind,
                    NamedTypeRef::new(type_name, type_def.location().to_owned()),
                ))
            })
            .collect()
    }
}

fn unknown_target(target: &str) -> SchemaBuildError {
    SchemaBuildError::UnknownMetadataTarget {
        target: target.to_string(),
    }
}
