use crate::execution::Arguments;
use crate::execution::FieldResolver;
use crate::execution::ResolutionContext;
use crate::execution::ResolverError;
use crate::schema::Schema;
use crate::types::ArgumentDefinition;
use crate::types::DeprecationState;
use crate::types::DirectiveDefinition;
use crate::types::EnumValue;
use crate::types::FieldDefinition;
use crate::types::GraphQLType;
use crate::types::ResolvedType;
use async_trait::async_trait;
use indexmap::IndexMap;
use serde_json::Value as JsonValue;
use serde_json::json;

type Result<T> = std::result::Result<T, ResolverError>;

pub(super) type IntrospectionFn =
    fn(&JsonValue, &Arguments, &ResolutionContext<'_>) -> Result<JsonValue>;

pub(super) struct IntrospectionResolver(pub(super) IntrospectionFn);

#[async_trait]
impl FieldResolver for IntrospectionResolver {
    async fn resolve(
        &self,
        parent: &JsonValue,
        args: &Arguments,
        ctx: &ResolutionContext<'_>,
    ) -> Result<JsonValue> {
        (self.0)(parent, args, ctx)
    }
}

pub(super) const FIELD_RESOLVERS: &[(&str, &str, IntrospectionFn)] = &[
    ("__Schema", "description", schema_description),
    ("__Schema", "types", schema_types),
    ("__Schema", "queryType", schema_query_type),
    ("__Schema", "mutationType", schema_mutation_type),
    ("__Schema", "subscriptionType", schema_subscription_type),
    ("__Schema", "directives", schema_directives),
    ("__Type", "kind", type_kind),
    ("__Type", "name", type_name),
    ("__Type", "description", type_description),
    ("__Type", "specifiedByURL", type_specified_by_url),
    ("__Type", "fields", type_fields),
    ("__Type", "interfaces", type_interfaces),
    ("__Type", "possibleTypes", type_possible_types),
    ("__Type", "enumValues", type_enum_values),
    ("__Type", "inputFields", type_input_fields),
    ("__Type", "ofType", type_of_type),
    ("__Field", "name", field_name),
    ("__Field", "description", field_description),
    ("__Field", "args", field_args),
    ("__Field", "type", field_type),
    ("__Field", "isDeprecated", field_is_deprecated),
    ("__Field", "deprecationReason", field_deprecation_reason),
    ("__InputValue", "name", input_value_name),
    ("__InputValue", "description", input_value_description),
    ("__InputValue", "type", input_value_type),
    ("__InputValue", "defaultValue", input_value_default_value),
    ("__InputValue", "isDeprecated", input_value_is_deprecated),
    ("__InputValue", "deprecationReason", input_value_deprecation_reason),
    ("__EnumValue", "name", enum_value_name),
    ("__EnumValue", "description", enum_value_description),
    ("__EnumValue", "isDeprecated", enum_value_is_deprecated),
    ("__EnumValue", "deprecationReason", enum_value_deprecation_reason),
    ("__Directive", "name", directive_name),
    ("__Directive", "description", directive_description),
    ("__Directive", "isRepeatable", directive_is_repeatable),
    ("__Directive", "locations", directive_locations),
    ("__Directive", "args", directive_args),
];

// =====================================================================
// Handles
// =====================================================================

/// The `__Type` handle for a (possibly wrapped) type.
fn type_handle(type_: &ResolvedType) -> JsonValue {
    match type_ {
        ResolvedType::List(inner) => json!({ "kind": "LIST", "ofType": type_handle(inner) }),
        ResolvedType::Named(named) => json!({ "name": named.name() }),
        ResolvedType::NonNull(inner) =>
            json!({ "kind": "NON_NULL", "ofType": type_handle(inner) }),
    }
}

fn named_handle(name: &str) -> JsonValue {
    json!({ "name": name })
}

fn handle_str<'v>(handle: &'v JsonValue, key: &str) -> Result<&'v str> {
    handle
        .get(key)
        .and_then(JsonValue::as_str)
        .ok_or_else(|| ResolverError::new(format!("Malformed introspection value: {handle}")))
}

/// The named type a `__Type` handle describes; `None` for list and
/// non-null wrappers.
fn handle_type<'s>(handle: &JsonValue, schema: &'s Schema) -> Result<Option<&'s GraphQLType>> {
    if handle.get("kind").is_some() {
        return Ok(None);
    }
    let name = handle_str(handle, "name")?;
    schema
        .type_named(name)
        .map(Some)
        .ok_or_else(|| ResolverError::new(format!("Unknown type '{name}'.")))
}

fn handle_field<'s>(handle: &JsonValue, schema: &'s Schema) -> Result<&'s FieldDefinition> {
    let type_name = handle_str(handle, "type")?;
    let field_name = handle_str(handle, "field")?;
    schema
        .type_named(type_name)
        .and_then(GraphQLType::fields)
        .and_then(|fields| fields.get(field_name))
        .ok_or_else(|| {
            ResolverError::new(format!("Unknown field '{type_name}.{field_name}'."))
        })
}

fn handle_input_value<'s>(
    handle: &JsonValue,
    schema: &'s Schema,
) -> Result<&'s ArgumentDefinition> {
    let name = handle_str(handle, "name")?;
    let arg_def = if handle.get("directive").is_some() {
        schema
            .directive(handle_str(handle, "directive")?)
            .and_then(|directive| directive.argument(name))
    } else if handle.get("field").is_some() {
        handle_field(handle, schema)?.argument(name)
    } else {
        schema
            .type_named(handle_str(handle, "type")?)
            .and_then(GraphQLType::as_input_object)
            .and_then(|input_type| input_type.field(name))
    };
    arg_def.ok_or_else(|| ResolverError::new(format!("Unknown input value '{name}'.")))
}

fn include_deprecated(args: &Arguments) -> Result<bool> {
    Ok(args.get_as::<Option<bool>>("includeDeprecated")?.unwrap_or(false))
}

fn deprecation_reason(state: DeprecationState<'_>) -> JsonValue {
    state.reason().map(JsonValue::from).unwrap_or(JsonValue::Null)
}

fn optional_str(value: Option<&str>) -> JsonValue {
    value.map(JsonValue::from).unwrap_or(JsonValue::Null)
}

/// Handles for the arguments in `arguments`, each built by `handle`.
fn input_value_handles(
    arguments: &IndexMap<String, ArgumentDefinition>,
    args: &Arguments,
    handle: impl Fn(&str) -> JsonValue,
) -> Result<JsonValue> {
    let include_deprecated = include_deprecated(args)?;
    Ok(arguments
        .values()
        .filter(|arg_def| include_deprecated || !arg_def.deprecation_state().is_deprecated())
        .map(|arg_def| handle(arg_def.name()))
        .collect())
}

// =====================================================================
// Meta-fields
// =====================================================================

pub(super) fn typename(
    _parent: &JsonValue,
    _args: &Arguments,
    ctx: &ResolutionContext<'_>,
) -> Result<JsonValue> {
    Ok(JsonValue::from(ctx.parent_type().name()))
}

pub(super) fn schema(
    _parent: &JsonValue,
    _args: &Arguments,
    _ctx: &ResolutionContext<'_>,
) -> Result<JsonValue> {
    Ok(json!({}))
}

pub(super) fn type_by_name(
    _parent: &JsonValue,
    args: &Arguments,
    ctx: &ResolutionContext<'_>,
) -> Result<JsonValue> {
    let name: String = args.get_as("name")?;
    Ok(match ctx.schema().type_named(&name) {
        Some(_) => named_handle(&name),
        None => JsonValue::Null,
    })
}

// =====================================================================
// __Schema
// =====================================================================

fn schema_description(
    _parent: &JsonValue,
    _args: &Arguments,
    ctx: &ResolutionContext<'_>,
) -> Result<JsonValue> {
    Ok(optional_str(ctx.schema().description()))
}

fn schema_types(
    _parent: &JsonValue,
    _args: &Arguments,
    ctx: &ResolutionContext<'_>,
) -> Result<JsonValue> {
    Ok(ctx.schema().types().keys().map(|name| named_handle(name)).collect())
}

fn schema_query_type(
    _parent: &JsonValue,
    _args: &Arguments,
    ctx: &ResolutionContext<'_>,
) -> Result<JsonValue> {
    Ok(named_handle(ctx.schema().query_type_name()))
}

fn schema_mutation_type(
    _parent: &JsonValue,
    _args: &Arguments,
    ctx: &ResolutionContext<'_>,
) -> Result<JsonValue> {
    Ok(ctx.schema().mutation_type_name().map(named_handle).unwrap_or(JsonValue::Null))
}

fn schema_subscription_type(
    _parent: &JsonValue,
    _args: &Arguments,
    ctx: &ResolutionContext<'_>,
) -> Result<JsonValue> {
    Ok(ctx.schema().subscription_type_name().map(named_handle).unwrap_or(JsonValue::Null))
}

fn schema_directives(
    _parent: &JsonValue,
    _args: &Arguments,
    ctx: &ResolutionContext<'_>,
) -> Result<JsonValue> {
    Ok(ctx.schema().directives().keys().map(|name| named_handle(name)).collect())
}

// =====================================================================
// __Type
// =====================================================================

fn type_kind(
    parent: &JsonValue,
    _args: &Arguments,
    ctx: &ResolutionContext<'_>,
) -> Result<JsonValue> {
    if let Some(kind) = parent.get("kind") {
        return Ok(kind.clone());
    }
    let kind = handle_type(parent, ctx.schema())?
        .map(|type_| type_.kind().introspection_kind())
        .unwrap_or("SCALAR");
    Ok(JsonValue::from(kind))
}

fn type_name(
    parent: &JsonValue,
    _args: &Arguments,
    ctx: &ResolutionContext<'_>,
) -> Result<JsonValue> {
    Ok(optional_str(handle_type(parent, ctx.schema())?.map(GraphQLType::name)))
}

fn type_description(
    parent: &JsonValue,
    _args: &Arguments,
    ctx: &ResolutionContext<'_>,
) -> Result<JsonValue> {
    Ok(optional_str(
        handle_type(parent, ctx.schema())?.and_then(GraphQLType::description),
    ))
}

fn type_specified_by_url(
    parent: &JsonValue,
    _args: &Arguments,
    ctx: &ResolutionContext<'_>,
) -> Result<JsonValue> {
    Ok(optional_str(
        handle_type(parent, ctx.schema())?
            .and_then(GraphQLType::as_scalar)
            .and_then(|scalar| scalar.specified_by_url()),
    ))
}

fn type_fields(
    parent: &JsonValue,
    args: &Arguments,
    ctx: &ResolutionContext<'_>,
) -> Result<JsonValue> {
    let Some(type_) = handle_type(parent, ctx.schema())? else {
        return Ok(JsonValue::Null);
    };
    let Some(fields) = type_.fields() else {
        return Ok(JsonValue::Null);
    };
    let include_deprecated = include_deprecated(args)?;
    Ok(fields
        .values()
        .filter(|field_def| {
            include_deprecated || !field_def.deprecation_state().is_deprecated()
        })
        .map(|field_def| json!({ "type": type_.name(), "field": field_def.name() }))
        .collect())
}

fn type_interfaces(
    parent: &JsonValue,
    _args: &Arguments,
    ctx: &ResolutionContext<'_>,
) -> Result<JsonValue> {
    let interface_names = match handle_type(parent, ctx.schema())? {
        Some(GraphQLType::Interface(iface)) => iface.interface_names(),
        Some(GraphQLType::Object(obj)) => obj.interface_names(),
        _ => return Ok(JsonValue::Null),
    };
    Ok(interface_names.into_iter().map(named_handle).collect())
}

fn type_possible_types(
    parent: &JsonValue,
    _args: &Arguments,
    ctx: &ResolutionContext<'_>,
) -> Result<JsonValue> {
    match handle_type(parent, ctx.schema())? {
        Some(type_ @ (GraphQLType::Interface(_) | GraphQLType::Union(_))) => Ok(ctx
            .schema()
            .possible_types(type_.name())
            .into_iter()
            .map(|obj_type| named_handle(obj_type.name()))
            .collect()),
        _ => Ok(JsonValue::Null),
    }
}

fn type_enum_values(
    parent: &JsonValue,
    args: &Arguments,
    ctx: &ResolutionContext<'_>,
) -> Result<JsonValue> {
    let Some(GraphQLType::Enum(enum_type)) = handle_type(parent, ctx.schema())? else {
        return Ok(JsonValue::Null);
    };
    let include_deprecated = include_deprecated(args)?;
    Ok(enum_type
        .values()
        .values()
        .filter(|value| include_deprecated || !value.deprecation_state().is_deprecated())
        .map(|value| json!({ "type": enum_type.name(), "name": value.name() }))
        .collect())
}

fn type_input_fields(
    parent: &JsonValue,
    args: &Arguments,
    ctx: &ResolutionContext<'_>,
) -> Result<JsonValue> {
    let Some(GraphQLType::InputObject(input_type)) = handle_type(parent, ctx.schema())? else {
        return Ok(JsonValue::Null);
    };
    input_value_handles(input_type.fields(), args, |name| {
        json!({ "type": input_type.name(), "name": name })
    })
}

fn type_of_type(
    parent: &JsonValue,
    _args: &Arguments,
    _ctx: &ResolutionContext<'_>,
) -> Result<JsonValue> {
    Ok(parent.get("ofType").cloned().unwrap_or(JsonValue::Null))
}

// =====================================================================
// __Field
// =====================================================================

fn field_name(
    parent: &JsonValue,
    _args: &Arguments,
    ctx: &ResolutionContext<'_>,
) -> Result<JsonValue> {
    Ok(JsonValue::from(handle_field(parent, ctx.schema())?.name()))
}

fn field_description(
    parent: &JsonValue,
    _args: &Arguments,
    ctx: &ResolutionContext<'_>,
) -> Result<JsonValue> {
    Ok(optional_str(handle_field(parent, ctx.schema())?.description()))
}

fn field_args(
    parent: &JsonValue,
    args: &Arguments,
    ctx: &ResolutionContext<'_>,
) -> Result<JsonValue> {
    let field_def = handle_field(parent, ctx.schema())?;
    let type_name = handle_str(parent, "type")?;
    input_value_handles(field_def.arguments(), args, |name| {
        json!({ "type": type_name, "field": field_def.name(), "name": name })
    })
}

fn field_type(
    parent: &JsonValue,
    _args: &Arguments,
    ctx: &ResolutionContext<'_>,
) -> Result<JsonValue> {
    Ok(type_handle(handle_field(parent, ctx.schema())?.field_type()))
}

fn field_is_deprecated(
    parent: &JsonValue,
    _args: &Arguments,
    ctx: &ResolutionContext<'_>,
) -> Result<JsonValue> {
    let field_def = handle_field(parent, ctx.schema())?;
    Ok(JsonValue::from(field_def.deprecation_state().is_deprecated()))
}

fn field_deprecation_reason(
    parent: &JsonValue,
    _args: &Arguments,
    ctx: &ResolutionContext<'_>,
) -> Result<JsonValue> {
    Ok(deprecation_reason(handle_field(parent, ctx.schema())?.deprecation_state()))
}

// =====================================================================
// __InputValue
// =====================================================================

fn input_value_name(
    parent: &JsonValue,
    _args: &Arguments,
    ctx: &ResolutionContext<'_>,
) -> Result<JsonValue> {
    Ok(JsonValue::from(handle_input_value(parent, ctx.schema())?.name()))
}

fn input_value_description(
    parent: &JsonValue,
    _args: &Arguments,
    ctx: &ResolutionContext<'_>,
) -> Result<JsonValue> {
    Ok(optional_str(handle_input_value(parent, ctx.schema())?.description()))
}

fn input_value_type(
    parent: &JsonValue,
    _args: &Arguments,
    ctx: &ResolutionContext<'_>,
) -> Result<JsonValue> {
    Ok(type_handle(handle_input_value(parent, ctx.schema())?.arg_type()))
}

/// The default value in GraphQL literal syntax, e.g. `"[\"a\"]"`.
fn input_value_default_value(
    parent: &JsonValue,
    _args: &Arguments,
    ctx: &ResolutionContext<'_>,
) -> Result<JsonValue> {
    Ok(handle_input_value(parent, ctx.schema())?
        .default_value()
        .map(|value| JsonValue::from(value.to_string()))
        .unwrap_or(JsonValue::Null))
}

fn input_value_is_deprecated(
    parent: &JsonValue,
    _args: &Arguments,
    ctx: &ResolutionContext<'_>,
) -> Result<JsonValue> {
    let arg_def = handle_input_value(parent, ctx.schema())?;
    Ok(JsonValue::from(arg_def.deprecation_state().is_deprecated()))
}

fn input_value_deprecation_reason(
    parent: &JsonValue,
    _args: &Arguments,
    ctx: &ResolutionContext<'_>,
) -> Result<JsonValue> {
    Ok(deprecation_reason(handle_input_value(parent, ctx.schema())?.deprecation_state()))
}

// =====================================================================
// __EnumValue
// =====================================================================

fn handle_enum_value<'s>(
    handle: &JsonValue,
    schema: &'s Schema,
) -> Result<&'s EnumValue> {
    let type_name = handle_str(handle, "type")?;
    let value_name = handle_str(handle, "name")?;
    schema
        .type_named(type_name)
        .and_then(GraphQLType::as_enum)
        .and_then(|enum_type| enum_type.value(value_name))
        .ok_or_else(|| {
            ResolverError::new(format!("Unknown enum value '{type_name}.{value_name}'."))
        })
}

fn enum_value_name(
    parent: &JsonValue,
    _args: &Arguments,
    ctx: &ResolutionContext<'_>,
) -> Result<JsonValue> {
    Ok(JsonValue::from(handle_enum_value(parent, ctx.schema())?.name()))
}

fn enum_value_description(
    parent: &JsonValue,
    _args: &Arguments,
    ctx: &ResolutionContext<'_>,
) -> Result<JsonValue> {
    Ok(optional_str(handle_enum_value(parent, ctx.schema())?.description()))
}

fn enum_value_is_deprecated(
    parent: &JsonValue,
    _args: &Arguments,
    ctx: &ResolutionContext<'_>,
) -> Result<JsonValue> {
    let value = handle_enum_value(parent, ctx.schema())?;
    Ok(JsonValue::from(value.deprecation_state().is_deprecated()))
}

fn enum_value_deprecation_reason(
    parent: &JsonValue,
    _args: &Arguments,
    ctx: &ResolutionContext<'_>,
) -> Result<JsonValue> {
    Ok(deprecation_reason(handle_enum_value(parent, ctx.schema())?.deprecation_state()))
}

// =====================================================================
// __Directive
// =====================================================================

fn handle_directive<'s>(
    handle: &JsonValue,
    schema: &'s Schema,
) -> Result<&'s DirectiveDefinition> {
    let name = handle_str(handle, "name")?;
    schema
        .directive(name)
        .ok_or_else(|| ResolverError::new(format!("Unknown directive '@{name}'.")))
}

fn directive_name(
    parent: &JsonValue,
    _args: &Arguments,
    ctx: &ResolutionContext<'_>,
) -> Result<JsonValue> {
    Ok(JsonValue::from(handle_directive(parent, ctx.schema())?.name()))
}

fn directive_description(
    parent: &JsonValue,
    _args: &Arguments,
    ctx: &ResolutionContext<'_>,
) -> Result<JsonValue> {
    Ok(optional_str(handle_directive(parent, ctx.schema())?.description()))
}

fn directive_is_repeatable(
    parent: &JsonValue,
    _args: &Arguments,
    ctx: &ResolutionContext<'_>,
) -> Result<JsonValue> {
    Ok(JsonValue::from(handle_directive(parent, ctx.schema())?.is_repeatable()))
}

fn directive_locations(
    parent: &JsonValue,
    _args: &Arguments,
    ctx: &ResolutionContext<'_>,
) -> Result<JsonValue> {
    Ok(handle_directive(parent, ctx.schema())?
        .locations()
        .iter()
        .map(|location| JsonValue::from(location.as_str()))
        .collect())
}

fn directive_args(
    parent: &JsonValue,
    args: &Arguments,
    ctx: &ResolutionContext<'_>,
) -> Result<JsonValue> {
    let directive = handle_directive(parent, ctx.schema())?;
    input_value_handles(directive.arguments(), args, |name| {
        json!({ "directive": directive.name(), "name": name })
    })
}
