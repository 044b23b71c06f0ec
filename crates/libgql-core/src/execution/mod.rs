//! Asynchronous execution of validated operations.
//!
//! Field values come from [`FieldResolver`]s attached to field definitions
//! through [`FIELD_RESOLVER`] metadata. Fields without a resolver read the
//! same-named property of their parent's JSON value, so a plain
//! `serde_json::Value` root is enough to serve a schema.

mod arguments;
mod coercion;
mod execution_error;
mod execution_request;
mod execution_response;
mod executor;
mod field_collector;
mod field_resolver;
mod resolution_context;
mod resolver_error;
mod resolver_keys;

pub use arguments::Arguments;
pub use execution_error::ExecutionError;
pub use execution_request::ExecutionRequest;
pub use execution_response::ExecutionResponse;
pub use executor::execute;
pub use field_resolver::FieldResolver;
pub use field_resolver::FnResolver;
pub use field_resolver::ResolverChain;
pub use field_resolver::ResolverInfo;
pub use field_resolver::resolver_fn;
pub use resolution_context::ResolutionContext;
pub use resolver_error::ResolverError;
pub use resolver_keys::FIELD_RESOLVER;
pub use resolver_keys::SCALAR_COERCER;
pub use resolver_keys::ScalarCoercer;
pub use resolver_keys::TYPE_RESOLVER;
pub use resolver_keys::TypeResolver;

#[cfg(test)]
mod tests;
