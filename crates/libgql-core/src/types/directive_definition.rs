use crate::loc::SourceLocation;
use crate::schema::SchemaBuildError;
use crate::schema::TypeRegistry;
use crate::types::ArgumentDefinition;
use crate::types::ResolvedType;
use crate::types::TypeRef;
use indexmap::IndexMap;
use libgql_parser::ast::DirectiveLocationKind;

/// A `directive @name(...) on ...` definition.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveDefinition<TType = ResolvedType> {
    pub(crate) arguments: IndexMap<String, ArgumentDefinition<TType>>,
    pub(crate) description: Option<String>,
    pub(crate) location: SourceLocation,
    pub(crate) locations: Vec<DirectiveLocationKind>,
    pub(crate) name: String,
    pub(crate) repeatable: bool,
}
impl<TType> DirectiveDefinition<TType> {
    pub fn argument(&self, name: &str) -> Option<&ArgumentDefinition<TType>> {
        self.arguments.get(name)
    }

    pub fn arguments(&self) -> &IndexMap<String, ArgumentDefinition<TType>> {
        &self.arguments
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_builtin(&self) -> bool {
        self.location.is_builtin()
    }

    pub fn is_repeatable(&self) -> bool {
        self.repeatable
    }

    pub fn is_valid_at(&self, location: DirectiveLocationKind) -> bool {
        self.locations.contains(&location)
    }

    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    /// The locations this directive may be applied at, in declared order.
    pub fn locations(&self) -> &[DirectiveLocationKind] {
        &self.locations
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
impl DirectiveDefinition<TypeRef> {
    pub(crate) fn resolve(
        &self,
        registry: &mut TypeRegistry<'_>,
    ) -> Result<DirectiveDefinition, SchemaBuildError> {
        let owner = format!("@{}", self.name);
        let mut arguments = IndexMap::with_capacity(self.arguments.len());
        for (arg_name, arg_def) in &self.arguments {
            arguments.insert(arg_name.clone(), arg_def.resolve(registry, &owner)?);
        }
        Ok(DirectiveDefinition {
            arguments,
            description: self.description.clone(),
            location: self.location.to_owned(),
            locations: self.locations.clone(),
            name: self.name.clone(),
            repeatable: self.repeatable,
        })
    }
}
