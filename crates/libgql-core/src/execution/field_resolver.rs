use crate::GPath;
use crate::execution::Arguments;
use crate::execution::ResolutionContext;
use crate::execution::ResolverError;
use async_trait::async_trait;
use serde_json::Value as JsonValue;
use std::future::Future;
use std::sync::Arc;

/// Produces the value of a field given its parent object's value.
///
/// Resolvers are attached to field definitions through
/// [`FIELD_RESOLVER`](crate::execution::FIELD_RESOLVER) metadata, usually
/// with [`SchemaDefinitions::set_field_resolver()`](crate::schema::SchemaDefinitions::set_field_resolver).
/// Fields without one read the same-named property of a JSON object parent.
#[async_trait]
pub trait FieldResolver: Send + Sync {
    async fn resolve(
        &self,
        parent: &JsonValue,
        args: &Arguments,
        ctx: &ResolutionContext<'_>,
    ) -> Result<JsonValue, ResolverError>;
}

/// An ordered list of resolvers for one field.
///
/// The executor invokes the first; each may delegate to the rest through
/// [`ResolutionContext::call_next()`], which falls back to the default
/// property-reading resolver after the last one. Chains are immutable:
/// [`ResolverChain::wrap()`] returns a new chain.
#[derive(Clone)]
pub struct ResolverChain(Arc<[Arc<dyn FieldResolver>]>);
impl ResolverChain {
    pub fn new(resolvers: Vec<Arc<dyn FieldResolver>>) -> Self {
        Self(resolvers.into())
    }

    pub fn single(resolver: impl FieldResolver + 'static) -> Self {
        Self::new(vec![Arc::new(resolver)])
    }

    /// A new chain that runs `middleware` before every resolver in this one.
    pub fn wrap(&self, middleware: impl FieldResolver + 'static) -> Self {
        self.wrap_arc(Arc::new(middleware))
    }

    pub(crate) fn wrap_arc(&self, middleware: Arc<dyn FieldResolver>) -> Self {
        let mut resolvers = Vec::with_capacity(self.0.len() + 1);
        resolvers.push(middleware);
        resolvers.extend(self.0.iter().cloned());
        Self::new(resolvers)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub(crate) fn resolvers(&self) -> &[Arc<dyn FieldResolver>] {
        &self.0
    }
}
impl std::fmt::Debug for ResolverChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ResolverChain(len = {})", self.0.len())
    }
}

/// Owned details about the field being resolved, handed to closure
/// resolvers built with [`resolver_fn()`].
#[derive(Clone, Debug, PartialEq)]
pub struct ResolverInfo {
    pub field_name: String,
    pub parent_type_name: String,
    pub path: GPath,
    pub response_key: String,
}

/// A [`FieldResolver`] backed by an async closure. See [`resolver_fn()`].
pub struct FnResolver<F>(F);

#[async_trait]
impl<F, Fut> FieldResolver for FnResolver<F>
where
    F: Fn(JsonValue, Arguments, ResolverInfo) -> Fut + Send + Sync,
    Fut: Future<Output = Result<JsonValue, ResolverError>> + Send,
{
    async fn resolve(
        &self,
        parent: &JsonValue,
        args: &Arguments,
        ctx: &ResolutionContext<'_>,
    ) -> Result<JsonValue, ResolverError> {
        (self.0)(parent.clone(), args.clone(), ctx.info()).await
    }
}

/// Adapts an async closure into a [`FieldResolver`].
///
/// ```rust
/// use libgql_core::execution::resolver_fn;
/// use serde_json::json;
///
/// let greet = resolver_fn(|_parent, args, _info| async move {
///     let name: String = args.get_as("name")?;
///     Ok(json!(format!("Hello, {name}!")))
/// });
/// # let _ = greet;
/// ```
pub fn resolver_fn<F, Fut>(f: F) -> FnResolver<F>
where
    F: Fn(JsonValue, Arguments, ResolverInfo) -> Fut + Send + Sync,
    Fut: Future<Output = Result<JsonValue, ResolverError>> + Send,
{
    FnResolver(f)
}

/// Reads the field's name from a JSON object parent; anything else
/// resolves to `null`.
pub(crate) fn default_resolve(parent: &JsonValue, field_name: &str) -> JsonValue {
    parent.get(field_name).cloned().unwrap_or(JsonValue::Null)
}
