use crate::execution::FieldResolver;
use crate::execution::ResolverChain;
use crate::metadata::MetadataKey;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaDefinitions;
use crate::types::GraphQLType;
use serde_json::Value as JsonValue;
use std::sync::Arc;

/// The resolvers for a field, outermost middleware first.
pub static FIELD_RESOLVER: MetadataKey<ResolverChain> = MetadataKey::new("field_resolver");

/// Picks the concrete object type of a value of an interface or union type.
pub static TYPE_RESOLVER: MetadataKey<Arc<dyn TypeResolver>> = MetadataKey::new("type_resolver");

/// Serialization and input coercion for a custom scalar.
pub static SCALAR_COERCER: MetadataKey<Arc<dyn ScalarCoercer>> =
    MetadataKey::new("scalar_coercer");

/// Determines the runtime object type of a value whose declared type is an
/// interface or union.
///
/// Without one, the executor reads a `__typename` string from a JSON
/// object value.
pub trait TypeResolver: Send + Sync {
    /// The name of the object type `value` belongs to, or `None` when it
    /// cannot be determined.
    fn resolve_type(
        &self,
        value: &JsonValue,
        abstract_type: &GraphQLType,
        schema: &Schema,
    ) -> Option<String>;
}
impl<F> TypeResolver for F
where
    F: Fn(&JsonValue) -> Option<String> + Send + Sync,
{
    fn resolve_type(
        &self,
        value: &JsonValue,
        _abstract_type: &GraphQLType,
        _schema: &Schema,
    ) -> Option<String> {
        self(value)
    }
}

/// Converts values of a custom scalar between resolver output, client
/// input, and the response.
///
/// Both directions default to passing the value through unchanged. An
/// `Err` carries a message describing why the value is invalid.
pub trait ScalarCoercer: Send + Sync {
    /// Turns a resolved value into its response representation.
    fn serialize(&self, value: &JsonValue) -> std::result::Result<JsonValue, String> {
        Ok(value.clone())
    }

    /// Validates and normalizes an input value (a variable value, or an
    /// argument literal converted to JSON).
    fn parse_value(&self, value: &JsonValue) -> std::result::Result<JsonValue, String> {
        Ok(value.clone())
    }
}

type Result<T> = std::result::Result<T, SchemaBuildError>;

impl SchemaDefinitions {
    /// Makes `resolver` the only resolver of `type_name.field_name`.
    pub fn set_field_resolver(
        &mut self,
        type_name: &str,
        field_name: &str,
        resolver: impl FieldResolver + 'static,
    ) -> Result<()> {
        self.set_field_metadata(
            type_name,
            field_name,
            &FIELD_RESOLVER,
            ResolverChain::single(resolver),
        )
    }

    /// Adds `middleware` in front of the field's current resolvers. It can
    /// delegate to them with
    /// [`ResolutionContext::call_next()`](crate::execution::ResolutionContext::call_next).
    pub fn wrap_field_resolver(
        &mut self,
        type_name: &str,
        field_name: &str,
        middleware: impl FieldResolver + 'static,
    ) -> Result<()> {
        let middleware: Arc<dyn FieldResolver> = Arc::new(middleware);
        let chain = self.types
            .get(type_name)
            .and_then(|type_def| type_def.fields())
            .and_then(|fields| fields.get(field_name))
            .and_then(|field_def| field_def.metadata().get(&FIELD_RESOLVER))
            .cloned()
            .unwrap_or_else(|| ResolverChain::new(vec![]))
            .wrap_arc(middleware);
        self.set_field_metadata(type_name, field_name, &FIELD_RESOLVER, chain)
    }

    pub fn set_type_resolver(
        &mut self,
        type_name: &str,
        resolver: impl TypeResolver + 'static,
    ) -> Result<()> {
        self.set_type_metadata(type_name, &TYPE_RESOLVER, Arc::new(resolver))
    }

    pub fn set_scalar_coercer(
        &mut self,
        type_name: &str,
        coercer: impl ScalarCoercer + 'static,
    ) -> Result<()> {
        self.set_type_metadata(type_name, &SCALAR_COERCER, Arc::new(coercer))
    }
}
