use crate::Argument;
use crate::GError;
use crate::operation::VariableDefinition;
use crate::validation::literal_values::literal_problems;
use crate::validation::RuleContext;
use crate::validation::ValidationRule;

/// Argument literals and variable default values must be coercible to
/// their input types.
///
/// https://spec.graphql.org/October2021/#sec-Values-of-Correct-Type
#[derive(Clone, Copy, Debug, Default)]
pub struct ValuesOfCorrectType;
impl ValidationRule for ValuesOfCorrectType {
    fn name(&self) -> &'static str {
        "ValuesOfCorrectType"
    }

    fn enter_argument(&self, ctx: &RuleContext<'_>, argument: &Argument) {
        let Some(expected) = ctx.type_info().input_type() else {
            return;
        };
        for problem in literal_problems(ctx.schema(), argument.value(), expected) {
            ctx.report(
                GError::new(format!(
                    "Invalid value for argument '{}': {problem}.",
                    argument.name(),
                ))
                .at(argument.value_location()),
            );
        }
    }

    fn enter_variable_definition(&self, ctx: &RuleContext<'_>, var_def: &VariableDefinition) {
        let Some(default_value) = var_def.default_value() else {
            return;
        };
        let Some(var_type) = ctx.schema().resolve_type_ref(var_def.var_type()) else {
            return;
        };
        for problem in literal_problems(ctx.schema(), default_value, &var_type) {
            ctx.report(
                GError::new(format!(
                    "Variable '${}' has an invalid default value: {problem}.",
                    var_def.name(),
                ))
                .at(var_def.location()),
            );
        }
    }
}
