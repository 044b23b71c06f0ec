use crate::GError;
use crate::operation::VariableDefinition;
use crate::validation::RuleContext;
use crate::validation::ValidationRule;

/// https://spec.graphql.org/October2021/#sec-Variables-Are-Input-Types
#[derive(Clone, Copy, Debug, Default)]
pub struct VariablesAreInputTypes;
impl ValidationRule for VariablesAreInputTypes {
    fn name(&self) -> &'static str {
        "VariablesAreInputTypes"
    }

    fn enter_variable_definition(&self, ctx: &RuleContext<'_>, var_def: &VariableDefinition) {
        let var_type = var_def.var_type();
        let Some(named_type) = ctx.schema().type_named(var_type.innermost_name()) else {
            return;
        };
        if !named_type.kind().is_input() {
            ctx.report(
                GError::new(format!(
                    "Variable '${}' cannot be non-input type '{var_type}'.",
                    var_def.name(),
                ))
                .at(var_type.location()),
            );
        }
    }
}
