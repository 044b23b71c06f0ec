use crate::DirectiveAnnotation;
use crate::loc::SourceLocation;
use crate::metadata::Metadata;
use crate::schema::SchemaBuildError;
use crate::schema::TypeRegistry;
use crate::types::FieldDefinition;
use crate::types::GraphQLTypeKind;
use crate::types::NamedTypeRef;
use crate::types::ObjectOrInterfaceTypeTrait;
use crate::types::ResolvedType;
use crate::types::TypeRef;
use indexmap::IndexMap;
use inherent::inherent;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ObjectOrInterfaceTypeData<TType> {
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) fields: IndexMap<String, FieldDefinition<TType>>,
    pub(crate) interfaces: Vec<NamedTypeRef>,
    pub(crate) location: SourceLocation,
    pub(crate) metadata: Metadata,
    pub(crate) name: String,
}

#[inherent]
impl<TType> ObjectOrInterfaceTypeTrait<TType> for ObjectOrInterfaceTypeData<TType> {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    pub fn field(&self, name: &str) -> Option<&FieldDefinition<TType>> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> &IndexMap<String, FieldDefinition<TType>> {
        &self.fields
    }

    pub fn interface_names(&self) -> Vec<&str> {
        self.interfaces
            .iter()
            .map(|iface_ref| iface_ref.name())
            .collect()
    }

    pub fn interfaces(&self) -> &Vec<NamedTypeRef> {
        &self.interfaces
    }

    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

impl ObjectOrInterfaceTypeData<TypeRef> {
    pub(crate) fn resolve(
        &self,
        registry: &mut TypeRegistry<'_>,
    ) -> Result<ObjectOrInterfaceTypeData<ResolvedType>, SchemaBuildError> {
        for iface_ref in &self.interfaces {
            if iface_ref.name() == self.name {
                return Err(SchemaBuildError::ImplementsSelf {
                    type_name: self.name.clone(),
                    location: iface_ref.ref_location().to_owned(),
                });
            }

            // https://spec.graphql.org/October2021/#sec-Objects.Type-Validation
            let resolved = registry.resolve_named(iface_ref)?;
            if resolved.kind() != GraphQLTypeKind::Interface {
                return Err(SchemaBuildError::NonInterfaceImplemented {
                    type_name: self.name.clone(),
                    implemented_name: iface_ref.name().to_string(),
                    location: iface_ref.ref_location().to_owned(),
                });
            }
        }

        let mut fields = IndexMap::with_capacity(self.fields.len());
        for (field_name, field_def) in &self.fields {
            fields.insert(field_name.clone(), field_def.resolve(registry, &self.name)?);
        }

        Ok(ObjectOrInterfaceTypeData {
            description: self.description.clone(),
            directives: self.directives.clone(),
            fields,
            interfaces: self.interfaces.clone(),
            location: self.location.to_owned(),
            metadata: self.metadata.clone(),
            name: self.name.clone(),
        })
    }
}
