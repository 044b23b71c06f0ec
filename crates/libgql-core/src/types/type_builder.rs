use crate::DirectiveAnnotationBuilder;
use crate::loc::SourceLocation;
use crate::metadata::Metadata;
use crate::schema::SchemaBuildError;
use crate::types::ArgumentDefinition;
use crate::types::DirectiveDefinition;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::FieldDefinition;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::NamedTypeRef;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::TypeDefinition;
use crate::types::TypeRef;
use crate::types::UnionType;
use crate::Value;
use indexmap::IndexMap;
use libgql_parser::ast;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Converts type-system AST nodes into unresolved [`TypeDefinition`]s and
/// merges type extensions into the definitions they extend.
///
/// No cross-type checks happen here: referenced types may not be defined
/// yet. Those are left to [`TypeRegistry`](crate::schema::TypeRegistry).
pub(crate) struct TypeBuilder;
impl TypeBuilder {
    pub fn type_from_ast(def: &ast::TypeDefinition<'_>) -> Result<TypeDefinition> {
        let location = SourceLocation::from_span(def.span());
        Ok(match def {
            ast::TypeDefinition::Enum(def) => GraphQLType::Enum(EnumType {
                description: description_from_ast(&def.description),
                directives: DirectiveAnnotationBuilder::from_ast(&def.directives)?,
                metadata: Metadata::new(),
                name: def.name.as_str().to_string(),
                values: Self::enum_values_from_ast(def.name.as_str(), &def.values)?,
                location,
            }),

            ast::TypeDefinition::InputObject(def) =>
                GraphQLType::InputObject(InputObjectType {
                    description: description_from_ast(&def.description),
                    directives: DirectiveAnnotationBuilder::from_ast(&def.directives)?,
                    fields: Self::arguments_from_ast(def.name.as_str(), &def.fields)?,
                    metadata: Metadata::new(),
                    name: def.name.as_str().to_string(),
                    location,
                }),

            ast::TypeDefinition::Interface(def) =>
                GraphQLType::Interface(InterfaceType(ObjectOrInterfaceTypeData {
                    description: description_from_ast(&def.description),
                    directives: DirectiveAnnotationBuilder::from_ast(&def.directives)?,
                    fields: Self::fields_from_ast(def.name.as_str(), &def.fields)?,
                    interfaces: Self::interfaces_from_ast(
                        def.name.as_str(),
                        &def.implements,
                    )?,
                    metadata: Metadata::new(),
                    name: def.name.as_str().to_string(),
                    location,
                })),

            ast::TypeDefinition::Object(def) =>
                GraphQLType::Object(ObjectType(ObjectOrInterfaceTypeData {
                    description: description_from_ast(&def.description),
                    directives: DirectiveAnnotationBuilder::from_ast(&def.directives)?,
                    fields: Self::fields_from_ast(def.name.as_str(), &def.fields)?,
                    interfaces: Self::interfaces_from_ast(
                        def.name.as_str(),
                        &def.implements,
                    )?,
                    metadata: Metadata::new(),
                    name: def.name.as_str().to_string(),
                    location,
                })),

            ast::TypeDefinition::Scalar(def) => GraphQLType::Scalar(ScalarType {
                description: description_from_ast(&def.description),
                directives: DirectiveAnnotationBuilder::from_ast(&def.directives)?,
                metadata: Metadata::new(),
                name: def.name.as_str().to_string(),
                location,
            }),

            ast::TypeDefinition::Union(def) => GraphQLType::Union(UnionType {
                description: description_from_ast(&def.description),
                directives: DirectiveAnnotationBuilder::from_ast(&def.directives)?,
                members: Self::union_members_from_ast(def.name.as_str(), &def.members)?,
                metadata: Metadata::new(),
                name: def.name.as_str().to_string(),
                location,
            }),
        })
    }

    /// Converts an extension into a definition of the same kind holding only
    /// what the extension adds. [`TypeBuilder::merge_extension()`] folds it
    /// into the base definition later.
    pub fn extension_from_ast(ext: &ast::TypeExtension<'_>) -> Result<TypeDefinition> {
        let location = SourceLocation::from_span(ext.span());
        Ok(match ext {
            ast::TypeExtension::Enum(ext) => GraphQLType::Enum(EnumType {
                description: None,
                directives: DirectiveAnnotationBuilder::from_ast(&ext.directives)?,
                metadata: Metadata::new(),
                name: ext.name.as_str().to_string(),
                values: Self::enum_values_from_ast(ext.name.as_str(), &ext.values)?,
                location,
            }),

            ast::TypeExtension::InputObject(ext) =>
                GraphQLType::InputObject(InputObjectType {
                    description: None,
                    directives: DirectiveAnnotationBuilder::from_ast(&ext.directives)?,
                    fields: Self::arguments_from_ast(ext.name.as_str(), &ext.fields)?,
                    metadata: Metadata::new(),
                    name: ext.name.as_str().to_string(),
                    location,
                }),

            ast::TypeExtension::Interface(ext) =>
                GraphQLType::Interface(InterfaceType(ObjectOrInterfaceTypeData {
                    description: None,
                    directives: DirectiveAnnotationBuilder::from_ast(&ext.directives)?,
                    fields: Self::fields_from_ast(ext.name.as_str(), &ext.fields)?,
                    interfaces: Self::interfaces_from_ast(
                        ext.name.as_str(),
                        &ext.implements,
                    )?,
                    metadata: Metadata::new(),
                    name: ext.name.as_str().to_string(),
                    location,
                })),

            ast::TypeExtension::Object(ext) =>
                GraphQLType::Object(ObjectType(ObjectOrInterfaceTypeData {
                    description: None,
                    directives: DirectiveAnnotationBuilder::from_ast(&ext.directives)?,
                    fields: Self::fields_from_ast(ext.name.as_str(), &ext.fields)?,
                    interfaces: Self::interfaces_from_ast(
                        ext.name.as_str(),
                        &ext.implements,
                    )?,
                    metadata: Metadata::new(),
                    name: ext.name.as_str().to_string(),
                    location,
                })),

            ast::TypeExtension::Scalar(ext) => GraphQLType::Scalar(ScalarType {
                description: None,
                directives: DirectiveAnnotationBuilder::from_ast(&ext.directives)?,
                metadata: Metadata::new(),
                name: ext.name.as_str().to_string(),
                location,
            }),

            ast::TypeExtension::Union(ext) => GraphQLType::Union(UnionType {
                description: None,
                directives: DirectiveAnnotationBuilder::from_ast(&ext.directives)?,
                members: Self::union_members_from_ast(ext.name.as_str(), &ext.members)?,
                metadata: Metadata::new(),
                name: ext.name.as_str().to_string(),
                location,
            }),
        })
    }

    /// Appends everything `ext` declares onto `base`. Directives, fields,
    /// values, members, and interfaces land after the ones already present.
    ///
    /// https://spec.graphql.org/October2021/#sec-Type-Extensions
    pub fn merge_extension(base: &mut TypeDefinition, ext: TypeDefinition) -> Result<()> {
        let base_kind = base.kind();
        let type_name = base.name().to_string();
        let ext_location = ext.location().to_owned();
        match (base, ext) {
            (GraphQLType::Enum(base), GraphQLType::Enum(ext)) => {
                base.directives.extend(ext.directives);
                for (value_name, value) in ext.values {
                    if base.values.contains_key(&value_name) {
                        return Err(SchemaBuildError::DuplicateEnumValue {
                            type_name,
                            value_name,
                            location: value.location,
                        });
                    }
                    base.values.insert(value_name, value);
                }
            },

            (GraphQLType::InputObject(base), GraphQLType::InputObject(ext)) => {
                base.directives.extend(ext.directives);
                for (field_name, field) in ext.fields {
                    if base.fields.contains_key(&field_name) {
                        return Err(SchemaBuildError::DuplicateFieldDefinition {
                            type_name,
                            field_name,
                            location: field.location,
                        });
                    }
                    base.fields.insert(field_name, field);
                }
            },

            (GraphQLType::Interface(InterfaceType(base)), GraphQLType::Interface(InterfaceType(ext)))
            | (GraphQLType::Object(ObjectType(base)), GraphQLType::Object(ObjectType(ext))) => {
                base.directives.extend(ext.directives);
                for iface_ref in ext.interfaces {
                    if base.interface_names().contains(&iface_ref.name()) {
                        return Err(SchemaBuildError::DuplicateInterfaceImplementation {
                            type_name,
                            interface_name: iface_ref.name().to_string(),
                            location: iface_ref.ref_location().to_owned(),
                        });
                    }
                    base.interfaces.push(iface_ref);
                }
                for (field_name, field) in ext.fields {
                    if base.fields.contains_key(&field_name) {
                        return Err(SchemaBuildError::DuplicateFieldDefinition {
                            type_name,
                            field_name,
                            location: field.location,
                        });
                    }
                    base.fields.insert(field_name, field);
                }
            },

            (GraphQLType::Scalar(base), GraphQLType::Scalar(ext)) =>
                base.directives.extend(ext.directives),

            (GraphQLType::Union(base), GraphQLType::Union(ext)) => {
                base.directives.extend(ext.directives);
                for member in ext.members {
                    if base.member_names().contains(&member.name()) {
                        return Err(SchemaBuildError::DuplicateUnionMember {
                            union_name: type_name,
                            member_name: member.name().to_string(),
                            location: member.ref_location().to_owned(),
                        });
                    }
                    base.members.push(member);
                }
            },

            (_, ext) => return Err(SchemaBuildError::ExtensionKindMismatch {
                type_name,
                defined_kind: base_kind,
                extension_kind: ext.kind(),
                extension_location: ext_location,
            }),
        }
        Ok(())
    }

    pub fn directive_from_ast(
        def: &ast::DirectiveDefinition<'_>,
    ) -> Result<DirectiveDefinition<TypeRef>> {
        let owner = format!("@{}", def.name.as_str());
        Ok(DirectiveDefinition {
            arguments: Self::arguments_from_ast(&owner, &def.arguments)?,
            description: description_from_ast(&def.description),
            location: SourceLocation::from_span(&def.span),
            locations: def.locations.iter().map(|loc| loc.kind).collect(),
            name: def.name.as_str().to_string(),
            repeatable: def.repeatable,
        })
    }

    /// Builds an argument (or input field) map, rejecting duplicate and
    /// `__`-prefixed names. `owner` names the field, directive, or input
    /// type in error messages.
    pub fn arguments_from_ast(
        owner: &str,
        defs: &[ast::InputValueDefinition<'_>],
    ) -> Result<IndexMap<String, ArgumentDefinition<TypeRef>>> {
        let mut arguments = IndexMap::with_capacity(defs.len());
        for def in defs {
            let location = SourceLocation::from_span(&def.span);
            let name = def.name.as_str();
            check_reserved_name(name, &location)?;
            if arguments.contains_key(name) {
                return Err(SchemaBuildError::DuplicateArgumentDefinition {
                    argument_name: name.to_string(),
                    owner: owner.to_string(),
                    location,
                });
            }
            arguments.insert(name.to_string(), ArgumentDefinition {
                arg_type: TypeRef::from_ast(&def.value_type),
                default_value: def.default_value
                    .as_ref()
                    .map(Value::from_ast)
                    .transpose()?,
                description: description_from_ast(&def.description),
                directives: DirectiveAnnotationBuilder::from_ast(&def.directives)?,
                metadata: Metadata::new(),
                name: name.to_string(),
                location,
            });
        }
        Ok(arguments)
    }

    fn enum_values_from_ast(
        type_name: &str,
        defs: &[ast::EnumValueDefinition<'_>],
    ) -> Result<IndexMap<String, EnumValue>> {
        let mut values = IndexMap::with_capacity(defs.len());
        for def in defs {
            let location = SourceLocation::from_span(&def.span);
            let name = def.name.as_str();
            if values.contains_key(name) {
                return Err(SchemaBuildError::DuplicateEnumValue {
                    type_name: type_name.to_string(),
                    value_name: name.to_string(),
                    location,
                });
            }
            values.insert(name.to_string(), EnumValue {
                description: description_from_ast(&def.description),
                directives: DirectiveAnnotationBuilder::from_ast(&def.directives)?,
                metadata: Metadata::new(),
                name: name.to_string(),
                location,
            });
        }
        Ok(values)
    }

    fn fields_from_ast(
        type_name: &str,
        defs: &[ast::FieldDefinition<'_>],
    ) -> Result<IndexMap<String, FieldDefinition<TypeRef>>> {
        let mut fields = IndexMap::with_capacity(defs.len());
        for def in defs {
            let location = SourceLocation::from_span(&def.span);
            let name = def.name.as_str();

            // https://spec.graphql.org/October2021/#sel-IAHZhCFDBDCAACCTl4L
            check_reserved_name(name, &location)?;
            if fields.contains_key(name) {
                return Err(SchemaBuildError::DuplicateFieldDefinition {
                    type_name: type_name.to_string(),
                    field_name: name.to_string(),
                    location,
                });
            }

            let owner = format!("{type_name}.{name}");
            fields.insert(name.to_string(), FieldDefinition {
                arguments: Self::arguments_from_ast(&owner, &def.arguments)?,
                description: description_from_ast(&def.description),
                directives: DirectiveAnnotationBuilder::from_ast(&def.directives)?,
                field_type: TypeRef::from_ast(&def.field_type),
                metadata: Metadata::new(),
                name: name.to_string(),
                location,
            });
        }
        Ok(fields)
    }

    fn interfaces_from_ast(
        type_name: &str,
        names: &[ast::Name<'_>],
    ) -> Result<Vec<NamedTypeRef>> {
        let mut interfaces: Vec<NamedTypeRef> = Vec::with_capacity(names.len());
        for name in names {
            let location = SourceLocation::from_span(&name.span);
            if interfaces.iter().any(|iface| iface.name() == name.as_str()) {
                return Err(SchemaBuildError::DuplicateInterfaceImplementation {
                    type_name: type_name.to_string(),
                    interface_name: name.as_str().to_string(),
                    location,
                });
            }
            interfaces.push(NamedTypeRef::new(name.as_str(), location));
        }
        Ok(interfaces)
    }

    fn union_members_from_ast(
        union_name: &str,
        names: &[ast::Name<'_>],
    ) -> Result<Vec<NamedTypeRef>> {
        let mut members: Vec<NamedTypeRef> = Vec::with_capacity(names.len());
        for name in names {
            let location = SourceLocation::from_span(&name.span);
            if members.iter().any(|member| member.name() == name.as_str()) {
                return Err(SchemaBuildError::DuplicateUnionMember {
                    union_name: union_name.to_string(),
                    member_name: name.as_str().to_string(),
                    location,
                });
            }
            members.push(NamedTypeRef::new(name.as_str(), location));
        }
        Ok(members)
    }
}

/// Names starting with `__` belong to the introspection system.
///
/// https://spec.graphql.org/October2021/#sec-Names.Reserved-Names
pub(crate) fn check_reserved_name(name: &str, location: &SourceLocation) -> Result<()> {
    if name.starts_with("__") && !location.is_builtin() {
        return Err(SchemaBuildError::ReservedName {
            name: name.to_string(),
            location: location.to_owned(),
        });
    }
    Ok(())
}

fn description_from_ast(description: &Option<ast::StringValue<'_>>) -> Option<String> {
    description.as_ref().map(|desc| desc.value.clone())
}
