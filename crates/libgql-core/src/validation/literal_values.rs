//! Static checks of argument and default-value literals against input
//! types. Variable references are accepted in any position here; their
//! types are checked by `VariablesInAllowedPosition`.

use crate::execution::SCALAR_COERCER;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::ResolvedType;
use crate::Value;
use serde_json::Map as JsonMap;

/// Describes each way `value` fails to be a valid literal of `expected`.
/// Empty when the literal is valid.
pub(crate) fn literal_problems(schema: &Schema, value: &Value, expected: &ResolvedType) -> Vec<String> {
    let mut problems = vec![];
    check_literal(schema, value, expected, &mut problems);
    problems
}

fn check_literal(
    schema: &Schema,
    value: &Value,
    expected: &ResolvedType,
    problems: &mut Vec<String>,
) {
    if matches!(value, Value::Variable(_)) {
        return;
    }
    match expected {
        ResolvedType::NonNull(inner) => {
            if value.is_null() {
                problems.push(format!("expected type '{expected}', found null"));
                return;
            }
            check_literal(schema, value, inner, problems);
        },

        _ if value.is_null() => (),

        ResolvedType::List(item_type) => match value {
            Value::List(items) => items
                .iter()
                .for_each(|item| check_literal(schema, item, item_type, problems)),
            // A single value stands in for a list of one.
            _ => check_literal(schema, value, item_type, problems),
        },

        ResolvedType::Named(named) => {
            let Some(type_) = schema.type_named(named.name()) else {
                return;
            };
            check_named_literal(schema, value, type_, problems);
        },
    }
}

fn check_named_literal(
    schema: &Schema,
    value: &Value,
    type_: &GraphQLType,
    problems: &mut Vec<String>,
) {
    match type_ {
        GraphQLType::InputObject(input_type) => {
            let Value::Object(fields) = value else {
                problems.push(format!("expected type '{}', found {value}", input_type.name()));
                return;
            };
            for (field_name, field_value) in fields {
                match input_type.field(field_name) {
                    Some(field_def) =>
                        check_literal(schema, field_value, field_def.arg_type(), problems),
                    None => problems.push(format!(
                        "field '{field_name}' is not defined by type '{}'",
                        input_type.name(),
                    )),
                }
            }
            for field_def in input_type.fields().values() {
                if field_def.is_required() && !fields.contains_key(field_def.name()) {
                    problems.push(format!(
                        "field '{}.{}' of required type '{}' was not provided",
                        input_type.name(),
                        field_def.name(),
                        field_def.arg_type(),
                    ));
                }
            }
        },

        GraphQLType::Enum(enum_type) => match value {
            Value::Enum(name) if enum_type.value(name).is_some() => (),
            Value::Enum(name) => problems.push(format!(
                "value '{name}' does not exist in '{}' enum",
                enum_type.name(),
            )),
            _ => problems.push(format!(
                "enum '{}' cannot represent non-enum value: {value}",
                enum_type.name(),
            )),
        },

        GraphQLType::Scalar(scalar_type) => {
            let Some(coercer) = scalar_type.metadata().get(&SCALAR_COERCER) else {
                return;
            };
            if !value.variable_names().is_empty() {
                return;
            }
            if let Err(reason) = coercer.parse_value(&value.to_json(&JsonMap::new())) {
                problems.push(format!(
                    "expected type '{}', found {value}; {reason}",
                    scalar_type.name(),
                ));
            }
        },

        _ => {
            let valid = match (type_, value) {
                (GraphQLType::Int, Value::Int(int)) => i32::try_from(*int).is_ok(),
                (GraphQLType::Float, Value::Float(_) | Value::Int(_)) => true,
                (GraphQLType::String, Value::String(_)) => true,
                (GraphQLType::Bool, Value::Boolean(_)) => true,
                (GraphQLType::ID, Value::String(_) | Value::Int(_)) => true,
                _ => false,
            };
            if !valid {
                problems.push(format!("expected type '{}', found {value}", type_.name()));
            }
        },
    }
}
