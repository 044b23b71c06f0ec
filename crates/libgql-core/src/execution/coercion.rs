//! Input coercion of variable values and argument literals, and
//! serialization of leaf results.
//!
//! https://spec.graphql.org/October2021/#sec-Coercing-Variable-Values

use crate::Argument;
use crate::GError;
use crate::Value;
use crate::execution::Arguments;
use crate::execution::SCALAR_COERCER;
use crate::operation::OperationDefinition;
use crate::schema::Schema;
use crate::types::ArgumentDefinition;
use crate::types::GraphQLType;
use crate::types::ResolvedType;
use indexmap::IndexMap;
use serde_json::Map as JsonMap;
use serde_json::Value as JsonValue;

type Result<T> = std::result::Result<T, String>;

/// Coerces the request's raw variable values against `operation`'s
/// variable definitions, applying defaults. Every failing variable is
/// reported.
pub(crate) fn coerce_variable_values(
    schema: &Schema,
    operation: &OperationDefinition,
    inputs: &JsonMap<String, JsonValue>,
) -> std::result::Result<JsonMap<String, JsonValue>, Vec<GError>> {
    let mut coerced = JsonMap::new();
    let mut errors = vec![];
    for var_def in operation.variable_definitions() {
        let name = var_def.name();
        let fail = |message: String| GError::new(message).at(var_def.location());

        let Some(var_type) = schema.resolve_type_ref(var_def.var_type()) else {
            errors.push(fail(format!(
                "Variable '${name}' expected value of unknown type '{}'.",
                var_def.var_type(),
            )));
            continue;
        };
        if !var_type.is_input_type() {
            errors.push(fail(format!(
                "Variable '${name}' expected value of type '{var_type}' which cannot be used \
                 as an input type.",
            )));
            continue;
        }

        match inputs.get(name) {
            None => match var_def.default_value() {
                Some(default_value) => {
                    let json = literal_to_json(default_value, &JsonMap::new());
                    match coerce_input_value(schema, &json, &var_type) {
                        Ok(value) => {
                            coerced.insert(name.to_string(), value);
                        },
                        Err(reason) => errors.push(fail(format!(
                            "Variable '${name}' has an invalid default value: {reason}.",
                        ))),
                    }
                },
                None if var_type.is_non_null() => errors.push(fail(format!(
                    "Variable '${name}' of required type '{var_type}' was not provided.",
                ))),
                None => (),
            },

            Some(JsonValue::Null) if var_type.is_non_null() => errors.push(fail(format!(
                "Variable '${name}' of non-null type '{var_type}' must not be null.",
            ))),

            Some(value) => match coerce_input_value(schema, value, &var_type) {
                Ok(value) => {
                    coerced.insert(name.to_string(), value);
                },
                Err(reason) => errors.push(fail(format!(
                    "Variable '${name}' got invalid value {value}; {reason}.",
                ))),
            },
        }
    }

    if errors.is_empty() {
        Ok(coerced)
    } else {
        Err(errors)
    }
}

/// Coerces the arguments given to a field or directive against their
/// definitions, substituting variables and applying defaults. Arguments
/// that are neither given nor defaulted are absent from the result.
pub(crate) fn coerce_argument_values(
    schema: &Schema,
    arg_defs: &IndexMap<String, ArgumentDefinition>,
    arguments: &[Argument],
    variables: &JsonMap<String, JsonValue>,
) -> Result<Arguments> {
    let mut coerced = Arguments::new();
    for (name, arg_def) in arg_defs {
        let arg_type = arg_def.arg_type();
        let provided = arguments
            .iter()
            .find(|argument| argument.name() == name)
            .and_then(|argument| match argument.value() {
                Value::Variable(var_name) => variables.get(var_name).cloned(),
                literal => Some(literal_to_json(literal, variables)),
            });

        let value = match provided {
            Some(value) => {
                if value.is_null() && arg_type.is_non_null() {
                    return Err(format!(
                        "Argument '{name}' of non-null type '{arg_type}' must not be null.",
                    ));
                }
                coerce_input_value(schema, &value, arg_type).map_err(|reason| {
                    format!("Argument '{name}' has invalid value {value}: {reason}.")
                })?
            },
            None => match arg_def.default_value() {
                Some(default_value) => {
                    let json = literal_to_json(default_value, &JsonMap::new());
                    coerce_input_value(schema, &json, arg_type).map_err(|reason| {
                        format!("Argument '{name}' has an invalid default value: {reason}.")
                    })?
                },
                None if arg_type.is_non_null() => {
                    return Err(format!(
                        "Argument '{name}' of required type '{arg_type}' was not provided.",
                    ));
                },
                None => continue,
            },
        };
        coerced.insert(name.clone(), value);
    }
    Ok(coerced)
}

/// Converts a literal to JSON, substituting variables. An input-object
/// field whose value is a variable without a value is left out, so the
/// field's default applies.
fn literal_to_json(value: &Value, variables: &JsonMap<String, JsonValue>) -> JsonValue {
    match value {
        Value::List(items) => JsonValue::Array(
            items.iter().map(|item| literal_to_json(item, variables)).collect(),
        ),
        Value::Object(fields) => JsonValue::Object(
            fields
                .iter()
                .filter(|(_, field_value)| match field_value.as_variable_name() {
                    Some(var_name) => variables.contains_key(var_name),
                    None => true,
                })
                .map(|(field_name, field_value)| {
                    (field_name.clone(), literal_to_json(field_value, variables))
                })
                .collect(),
        ),
        _ => value.to_json(variables),
    }
}

/// Coerces a JSON input value to `expected`.
///
/// https://spec.graphql.org/October2021/#sec-Input-Values
pub(crate) fn coerce_input_value(
    schema: &Schema,
    value: &JsonValue,
    expected: &ResolvedType,
) -> Result<JsonValue> {
    match expected {
        ResolvedType::NonNull(inner) => {
            if value.is_null() {
                return Err(format!("expected non-nullable type '{expected}' not to be null"));
            }
            coerce_input_value(schema, value, inner)
        },

        _ if value.is_null() => Ok(JsonValue::Null),

        ResolvedType::List(item_type) => match value {
            JsonValue::Array(items) => items
                .iter()
                .map(|item| coerce_input_value(schema, item, item_type))
                .collect::<Result<Vec<_>>>()
                .map(JsonValue::Array),
            _ => Ok(JsonValue::Array(vec![coerce_input_value(schema, value, item_type)?])),
        },

        ResolvedType::Named(named) => {
            let Some(type_) = schema.type_named(named.name()) else {
                return Err(format!("unknown type '{}'", named.name()));
            };
            coerce_named_input_value(schema, value, type_)
        },
    }
}

fn coerce_named_input_value(
    schema: &Schema,
    value: &JsonValue,
    type_: &GraphQLType,
) -> Result<JsonValue> {
    match type_ {
        GraphQLType::Int => match as_integer(value) {
            Some(int) if i32::try_from(int).is_ok() => Ok(JsonValue::from(int)),
            Some(_) => Err(format!("Int cannot represent non 32-bit signed integer value: {value}")),
            None => Err(format!("Int cannot represent non-integer value: {value}")),
        },

        GraphQLType::Float => match value {
            JsonValue::Number(_) => Ok(value.clone()),
            _ => Err(format!("Float cannot represent non numeric value: {value}")),
        },

        GraphQLType::String => match value {
            JsonValue::String(_) => Ok(value.clone()),
            _ => Err(format!("String cannot represent a non string value: {value}")),
        },

        GraphQLType::Bool => match value {
            JsonValue::Bool(_) => Ok(value.clone()),
            _ => Err(format!("Boolean cannot represent a non boolean value: {value}")),
        },

        GraphQLType::ID => match value {
            JsonValue::String(_) => Ok(value.clone()),
            JsonValue::Number(number) if number.is_i64() || number.is_u64() =>
                Ok(JsonValue::String(number.to_string())),
            _ => Err(format!("ID cannot represent value: {value}")),
        },

        GraphQLType::Enum(enum_type) => match value.as_str() {
            Some(name) if enum_type.value(name).is_some() => Ok(value.clone()),
            _ => Err(format!(
                "Value {value} does not exist in '{}' enum",
                enum_type.name(),
            )),
        },

        GraphQLType::Scalar(scalar_type) => match scalar_type.metadata().get(&SCALAR_COERCER) {
            Some(coercer) => coercer.parse_value(value),
            None => Ok(value.clone()),
        },

        GraphQLType::InputObject(input_type) => {
            let JsonValue::Object(fields) = value else {
                return Err(format!(
                    "expected type '{}' to be an object",
                    input_type.name(),
                ));
            };
            if let Some(unknown) = fields.keys().find(|key| input_type.field(key).is_none()) {
                return Err(format!(
                    "field '{unknown}' is not defined by type '{}'",
                    input_type.name(),
                ));
            }

            let mut coerced = JsonMap::new();
            for (field_name, field_def) in input_type.fields() {
                let field_type = field_def.arg_type();
                let field_value = match fields.get(field_name) {
                    Some(field_value) => coerce_input_value(schema, field_value, field_type)
                        .map_err(|reason| format!("at '{field_name}': {reason}"))?,
                    None => match field_def.default_value() {
                        Some(default_value) => coerce_input_value(
                            schema,
                            &literal_to_json(default_value, &JsonMap::new()),
                            field_type,
                        )?,
                        None if field_type.is_non_null() => {
                            return Err(format!(
                                "field '{}.{field_name}' of required type '{field_type}' was \
                                 not provided",
                                input_type.name(),
                            ));
                        },
                        None => continue,
                    },
                };
                coerced.insert(field_name.clone(), field_value);
            }
            Ok(JsonValue::Object(coerced))
        },

        GraphQLType::Interface(_) | GraphQLType::Object(_) | GraphQLType::Union(_) =>
            Err(format!("'{}' is not an input type", type_.name())),
    }
}

/// Serializes a resolved value of a leaf type for the response.
///
/// https://spec.graphql.org/October2021/#sec-Scalars.Result-Coercion-and-Serialization
pub(crate) fn serialize_leaf_value(type_: &GraphQLType, value: &JsonValue) -> Result<JsonValue> {
    match type_ {
        GraphQLType::Int => match as_integer(value) {
            Some(int) if i32::try_from(int).is_ok() => Ok(JsonValue::from(int)),
            Some(_) => Err(format!("Int cannot represent non 32-bit signed integer value: {value}")),
            None => Err(format!("Int cannot represent non-integer value: {value}")),
        },

        GraphQLType::Float => match value {
            JsonValue::Number(_) => Ok(value.clone()),
            _ => Err(format!("Float cannot represent non numeric value: {value}")),
        },

        GraphQLType::String => match value {
            JsonValue::String(_) => Ok(value.clone()),
            JsonValue::Bool(_) | JsonValue::Number(_) => Ok(JsonValue::String(value.to_string())),
            _ => Err(format!("String cannot represent value: {value}")),
        },

        GraphQLType::Bool => match value {
            JsonValue::Bool(_) => Ok(value.clone()),
            _ => Err(format!("Boolean cannot represent a non boolean value: {value}")),
        },

        GraphQLType::ID => match value {
            JsonValue::String(_) => Ok(value.clone()),
            JsonValue::Number(number) if number.is_i64() || number.is_u64() =>
                Ok(JsonValue::String(number.to_string())),
            _ => Err(format!("ID cannot represent value: {value}")),
        },

        GraphQLType::Enum(enum_type) => match value.as_str() {
            Some(name) if enum_type.value(name).is_some() => Ok(value.clone()),
            _ => Err(format!("Enum '{}' cannot represent value: {value}", enum_type.name())),
        },

        GraphQLType::Scalar(scalar_type) => match scalar_type.metadata().get(&SCALAR_COERCER) {
            Some(coercer) => coercer.serialize(value),
            None => Ok(value.clone()),
        },

        _ => Err(format!("'{}' is not a leaf type", type_.name())),
    }
}

/// An integral JSON number, including floats with no fractional part.
fn as_integer(value: &JsonValue) -> Option<i64> {
    let JsonValue::Number(number) = value else {
        return None;
    };
    number.as_i64().or_else(|| {
        number
            .as_f64()
            .filter(|float| float.fract() == 0.0 && float.abs() <= i64::MAX as f64)
            .map(|float| float as i64)
    })
}
