use crate::GError;
use crate::operation::OperationDefinition;
use crate::operation::VariableDefinition;
use crate::schema::Schema;
use crate::types::ResolvedType;
use crate::validation::RuleContext;
use crate::validation::usages::operation_variable_usages;
use crate::validation::usages::VariableUsage;
use crate::validation::ValidationRule;
use crate::validation::VisitControl;

/// A variable's type must fit every position it is used in. A nullable
/// variable may flow into a non-null position only when the variable or
/// the position has a non-null default.
///
/// https://spec.graphql.org/October2021/#sec-All-Variable-Usages-are-Allowed
#[derive(Clone, Copy, Debug, Default)]
pub struct VariablesInAllowedPosition;
impl VariablesInAllowedPosition {
    fn is_allowed(
        schema: &Schema,
        var_def: &VariableDefinition,
        var_type: &ResolvedType,
        usage: &VariableUsage<'_>,
        expected: &ResolvedType,
    ) -> bool {
        if expected.is_non_null() && !var_type.is_non_null() {
            let has_non_null_default = var_def
                .default_value()
                .is_some_and(|default_value| !default_value.is_null());
            if !has_non_null_default && !usage.has_location_default {
                return false;
            }
            return var_type.is_subtype_of(schema, expected.nullable());
        }
        var_type.is_subtype_of(schema, expected)
    }
}
impl ValidationRule for VariablesInAllowedPosition {
    fn name(&self) -> &'static str {
        "VariablesInAllowedPosition"
    }

    fn enter_operation(
        &self,
        ctx: &RuleContext<'_>,
        operation: &OperationDefinition,
    ) -> VisitControl {
        let schema = ctx.schema();
        for usage in operation_variable_usages(schema, ctx.document(), operation) {
            let Some(expected) = usage.expected_type else {
                continue;
            };
            let Some(var_def) = operation.variable_definition(usage.name) else {
                continue;
            };
            let Some(var_type) = schema.resolve_type_ref(var_def.var_type()) else {
                continue;
            };
            if !Self::is_allowed(schema, var_def, &var_type, &usage, expected) {
                ctx.report(
                    GError::new(format!(
                        "Variable '${}' of type '{var_type}' used in position expecting type \
                         '{expected}'.",
                        usage.name,
                    ))
                    .at(var_def.location())
                    .at(usage.location),
                );
            }
        }
        VisitControl::Skip
    }
}
