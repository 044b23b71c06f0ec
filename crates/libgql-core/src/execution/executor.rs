//! https://spec.graphql.org/October2021/#sec-Execution

use crate::GError;
use crate::GPath;
use crate::execution::ExecutionError;
use crate::execution::ExecutionRequest;
use crate::execution::ExecutionResponse;
use crate::execution::FIELD_RESOLVER;
use crate::execution::ResolutionContext;
use crate::execution::ResolverChain;
use crate::execution::TYPE_RESOLVER;
use crate::execution::coercion::coerce_argument_values;
use crate::execution::coercion::coerce_variable_values;
use crate::execution::coercion::serialize_leaf_value;
use crate::execution::field_collector::FieldCollector;
use crate::execution::field_collector::GroupedFields;
use crate::operation::Document;
use crate::operation::FieldSelection;
use crate::operation::OperationDefinition;
use crate::operation::OperationKind;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use crate::types::ResolvedType;
use crate::validation::field_merging::FieldInScope;
use crate::validation::field_merging::FieldMerger;
use futures::FutureExt;
use futures::future::BoxFuture;
use futures::future::join_all;
use serde_json::Map as JsonMap;
use serde_json::Value as JsonValue;

/// Executes the request's operation.
///
/// Field errors never fail the request: they are collected in
/// [`ExecutionResponse::errors`] and the failing field (or its nearest
/// nullable ancestor) becomes `null`. An `Err` means the request could not
/// start at all.
///
/// ```rust
/// use libgql_core::execution::ExecutionRequest;
/// use libgql_core::operation::Document;
/// use libgql_core::schema::Schema;
/// use std::sync::Arc;
///
/// let schema = Arc::new(Schema::parse("type Query { greeting: String }").unwrap());
/// let document = Arc::new(Document::parse("{ greeting }", None).unwrap());
/// let request = ExecutionRequest::new(schema, document)
///     .with_root_value(serde_json::json!({"greeting": "hello"}));
/// let response = futures::executor::block_on(libgql_core::execute(request)).unwrap();
/// assert_eq!(response.data, serde_json::json!({"greeting": "hello"}));
/// ```
pub async fn execute(request: ExecutionRequest) -> Result<ExecutionResponse, ExecutionError> {
    let document = request.document.as_ref();
    let schema = request.schema.as_ref();
    let operation = select_operation(document, request.operation_name.as_deref())?;
    let operation_kind = operation.operation_kind();
    tracing::debug!(
        operation = operation.name().unwrap_or("<anonymous>"),
        kind = %operation_kind,
        "executing operation",
    );

    let variables = coerce_variable_values(schema, operation, &request.variables)
        .map_err(ExecutionError::VariableCoercion)?;
    let root_type = schema
        .root_type(operation_kind)
        .ok_or(ExecutionError::MissingRootType(operation_kind))?;

    let executor = Executor {
        collector: FieldCollector::new(schema, document, &variables),
        merger: FieldMerger::new(schema, document),
        schema,
        variables: &variables,
    };
    let grouped = executor
        .collector
        .collect(root_type, [operation.selection_set()]);
    let completed = executor
        .execute_fields(
            root_type,
            &request.root_value,
            grouped,
            &GPath::new(),
            operation_kind == OperationKind::Mutation,
        )
        .await;

    tracing::debug!(errors = completed.errors.len(), "executed operation");
    Ok(ExecutionResponse {
        data: completed.value.unwrap_or(JsonValue::Null),
        errors: completed.errors,
    })
}

fn select_operation<'a>(
    document: &'a Document,
    operation_name: Option<&str>,
) -> Result<&'a OperationDefinition, ExecutionError> {
    let operations = document.operations();
    match operation_name {
        Some(name) => operations
            .iter()
            .find(|operation| operation.name() == Some(name))
            .ok_or_else(|| ExecutionError::UnknownOperationName(name.to_string())),
        None => match operations {
            [] => Err(ExecutionError::NoOperations),
            [operation] => Ok(operation),
            _ => Err(ExecutionError::OperationNameRequired),
        },
    }
}

/// A completed value plus the errors recorded while producing it.
#[derive(Debug, Default)]
struct Completed {
    errors: Vec<GError>,
    /// `None` when a null reached a non-null position and must propagate
    /// to the nearest nullable ancestor.
    value: Option<JsonValue>,
}
impl Completed {
    fn ok(value: JsonValue) -> Self {
        Self {
            errors: vec![],
            value: Some(value),
        }
    }

    /// A field error in a nullable position: the error plus `null` in place.
    fn null_with(error: GError) -> Self {
        Self {
            errors: vec![error],
            value: Some(JsonValue::Null),
        }
    }
}

struct Executor<'a> {
    collector: FieldCollector<'a>,
    merger: FieldMerger<'a>,
    schema: &'a Schema,
    variables: &'a JsonMap<String, JsonValue>,
}
impl<'a> Executor<'a> {
    /// Executes one grouped selection set against `object_value`. Query
    /// and subscription fields run concurrently, mutation root fields one
    /// after another.
    fn execute_fields<'b>(
        &'b self,
        object_type: &'a ObjectType,
        object_value: &'b JsonValue,
        grouped: GroupedFields<'a>,
        path: &'b GPath,
        serial: bool,
    ) -> BoxFuture<'b, Completed> {
        async move {
            // Fields the type does not define are left out of the response.
            let grouped: Vec<(&'a str, Vec<&'a FieldSelection>)> = grouped
                .into_iter()
                .filter(|(_, fields)| {
                    fields.first().is_some_and(|field| {
                        self.schema.field_definition(object_type.name(), field.name()).is_some()
                    })
                })
                .collect();

            let mut results = Vec::with_capacity(grouped.len());
            if serial {
                for (response_key, fields) in &grouped {
                    let completed = self
                        .execute_field(object_type, object_value, *response_key, fields, path)
                        .await;
                    let propagating = completed.value.is_none();
                    results.push((*response_key, completed));
                    if propagating {
                        break;
                    }
                }
            } else {
                let futures = grouped.iter().map(|(response_key, fields)| {
                    self.execute_field(object_type, object_value, *response_key, fields, path)
                });
                let completions = join_all(futures).await;
                results.extend(grouped.iter().map(|(key, _)| *key).zip(completions));
            }

            let mut errors = vec![];
            let mut data = JsonMap::new();
            let mut propagating = false;
            for (response_key, completed) in results {
                errors.extend(completed.errors);
                match completed.value {
                    Some(value) => {
                        data.insert(response_key.to_string(), value);
                    },
                    None => propagating = true,
                }
            }
            Completed {
                errors,
                value: (!propagating).then_some(JsonValue::Object(data)),
            }
        }
        .boxed()
    }

    fn execute_field<'b>(
        &'b self,
        object_type: &'a ObjectType,
        object_value: &'b JsonValue,
        response_key: &'a str,
        fields: &'b [&'a FieldSelection],
        parent_path: &'b GPath,
    ) -> BoxFuture<'b, Completed> {
        async move {
            let path = parent_path.with_key(response_key);
            let (Some(first), Some(field_def)) = (
                fields.first().copied(),
                fields.first().and_then(|field| {
                    self.schema.field_definition(object_type.name(), field.name())
                }),
            ) else {
                return Completed::ok(JsonValue::Null);
            };
            let field_type = field_def.field_type();
            let field_error = |message: String| {
                let error = GError::new(message).at(first.location()).with_path(path.clone());
                if field_type.is_non_null() {
                    Completed {
                        errors: vec![error],
                        value: None,
                    }
                } else {
                    Completed::null_with(error)
                }
            };

            if let Some(message) = self.merge_conflict(object_type, response_key, fields) {
                return field_error(message);
            }

            let arguments = match coerce_argument_values(
                self.schema,
                field_def.arguments(),
                first.arguments(),
                self.variables,
            ) {
                Ok(arguments) => arguments,
                Err(message) => return field_error(message),
            };

            let chain = field_def
                .metadata()
                .get(&FIELD_RESOLVER)
                .map(ResolverChain::resolvers)
                .unwrap_or_default();
            let ctx = ResolutionContext {
                arguments: &arguments,
                chain,
                chain_index: 0,
                field_definition: field_def,
                fields,
                parent_type: object_type,
                parent_value: object_value,
                path: &path,
                schema: self.schema,
                variables: self.variables,
            };
            match ctx.invoke().await {
                Ok(resolved) =>
                    self.complete_value(object_type, field_type, fields, resolved, &path).await,
                Err(resolver_error) => {
                    tracing::debug!(path = %path, error = %resolver_error, "field resolver failed");
                    field_error(resolver_error.message().to_string())
                },
            }
        }
        .boxed()
    }

    /// Checks the merged selections of one response key with the same
    /// test `OverlappingFieldsCanBeMerged` applies.
    fn merge_conflict(
        &self,
        object_type: &'a ObjectType,
        response_key: &'a str,
        fields: &[&'a FieldSelection],
    ) -> Option<String> {
        let (first, rest) = fields.split_first()?;
        let parent_type = self.schema.type_named(object_type.name());
        let in_scope = |field: &'a FieldSelection| FieldInScope {
            field,
            field_def: self.schema.field_definition(object_type.name(), field.name()),
            fragment_name: None,
            parent_type,
        };
        rest.iter().find_map(|other| {
            self.merger
                .find_conflict(response_key, in_scope(*first), in_scope(*other), false)
                .map(|conflict| conflict.message())
        })
    }

    /// Completes a resolved value against the field's declared type.
    ///
    /// https://spec.graphql.org/October2021/#CompleteValue()
    fn complete_value<'b>(
        &'b self,
        object_type: &'a ObjectType,
        field_type: &'a ResolvedType,
        fields: &'b [&'a FieldSelection],
        resolved: JsonValue,
        path: &'b GPath,
    ) -> BoxFuture<'b, Completed> {
        async move {
            let field_name = fields.first().map_or("", |field| field.name());
            let error_at = |message: String| {
                let mut error = GError::new(message).with_path(path.clone());
                if let Some(first) = fields.first() {
                    error = error.at(first.location());
                }
                error
            };

            match field_type {
                ResolvedType::NonNull(inner) => {
                    let mut completed =
                        self.complete_value(object_type, inner, fields, resolved, path).await;
                    if completed.value == Some(JsonValue::Null) {
                        // A null caused by an error here already has that error.
                        if completed.errors.is_empty() {
                            completed.errors.push(error_at(format!(
                                "Cannot return null for non-nullable field '{}.{field_name}'.",
                                object_type.name(),
                            )));
                        }
                        completed.value = None;
                    }
                    completed
                },

                _ if resolved.is_null() => Completed::ok(JsonValue::Null),

                ResolvedType::List(item_type) => {
                    let JsonValue::Array(items) = resolved else {
                        return Completed::null_with(error_at(format!(
                            "Expected a list, but did not find one for field '{}.{field_name}'.",
                            object_type.name(),
                        )));
                    };
                    let item_futures = items.into_iter().enumerate().map(move |(index, item)| {
                        let item_path = path.with_index(index);
                        async move {
                            self.complete_value(object_type, item_type, fields, item, &item_path)
                                .await
                        }
                    });
                    let mut errors = vec![];
                    let mut values = vec![];
                    let mut propagating = false;
                    for completed in join_all(item_futures).await {
                        errors.extend(completed.errors);
                        match completed.value {
                            Some(value) => values.push(value),
                            None => propagating = true,
                        }
                    }
                    Completed {
                        errors,
                        value: Some(if propagating {
                            JsonValue::Null
                        } else {
                            JsonValue::Array(values)
                        }),
                    }
                },

                ResolvedType::Named(named) => {
                    let Some(named_type) = self.schema.type_named(named.name()) else {
                        return Completed::null_with(error_at(format!(
                            "Unknown type '{}'.",
                            named.name(),
                        )));
                    };
                    match named_type {
                        GraphQLType::Object(field_obj_type) =>
                            self.complete_object(field_obj_type, fields, resolved, path).await,

                        GraphQLType::Interface(_) | GraphQLType::Union(_) => {
                            match self.resolve_runtime_type(named_type, &resolved) {
                                Ok(runtime_type) =>
                                    self.complete_object(runtime_type, fields, resolved, path).await,
                                Err(message) => Completed::null_with(error_at(message)),
                            }
                        },

                        leaf_type => match serialize_leaf_value(leaf_type, &resolved) {
                            Ok(value) => Completed::ok(value),
                            Err(message) => Completed::null_with(error_at(message)),
                        },
                    }
                },
            }
        }
        .boxed()
    }

    async fn complete_object<'b>(
        &'b self,
        object_type: &'a ObjectType,
        fields: &'b [&'a FieldSelection],
        resolved: JsonValue,
        path: &'b GPath,
    ) -> Completed {
        let grouped = self.collector.collect(
            object_type,
            fields.iter().filter_map(|field| field.selection_set()),
        );
        let mut completed = self.execute_fields(object_type, &resolved, grouped, path, false).await;
        if completed.value.is_none() {
            completed.value = Some(JsonValue::Null);
        }
        completed
    }

    /// The object type of a value whose declared type is `abstract_type`:
    /// from the type's [`TYPE_RESOLVER`], or else the value's `__typename`.
    fn resolve_runtime_type(
        &self,
        abstract_type: &'a GraphQLType,
        value: &JsonValue,
    ) -> Result<&'a ObjectType, String> {
        let type_name = match abstract_type.metadata().get(&TYPE_RESOLVER) {
            Some(type_resolver) => type_resolver.resolve_type(value, abstract_type, self.schema),
            None => value.get("__typename").and_then(JsonValue::as_str).map(str::to_string),
        };
        let Some(type_name) = type_name else {
            return Err(format!(
                "Abstract type '{}' must resolve to an Object type at runtime. Either the \
                 '{}' type should have a type resolver or the value should include a \
                 '__typename'.",
                abstract_type.name(),
                abstract_type.name(),
            ));
        };
        match self.schema.type_named(&type_name).and_then(GraphQLType::as_object) {
            Some(obj_type) if self.schema.is_possible_type(abstract_type.name(), &type_name) =>
                Ok(obj_type),
            Some(_) => Err(format!(
                "Runtime Object type '{type_name}' is not a possible type for '{}'.",
                abstract_type.name(),
            )),
            None => Err(format!(
                "Abstract type '{}' must resolve to an Object type at runtime. Got: \
                 '{type_name}'.",
                abstract_type.name(),
            )),
        }
    }
}
