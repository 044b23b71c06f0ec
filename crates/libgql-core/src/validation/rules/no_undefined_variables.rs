use crate::GError;
use crate::operation::OperationDefinition;
use crate::validation::RuleContext;
use crate::validation::usages::operation_variable_usages;
use crate::validation::ValidationRule;
use crate::validation::VisitControl;

/// Every variable an operation uses, directly or through fragments, must
/// be defined by that operation.
///
/// https://spec.graphql.org/October2021/#sec-All-Variable-Uses-Defined
#[derive(Clone, Copy, Debug, Default)]
pub struct NoUndefinedVariables;
impl ValidationRule for NoUndefinedVariables {
    fn name(&self) -> &'static str {
        "NoUndefinedVariables"
    }

    fn enter_operation(
        &self,
        ctx: &RuleContext<'_>,
        operation: &OperationDefinition,
    ) -> VisitControl {
        for usage in operation_variable_usages(ctx.schema(), ctx.document(), operation) {
            if operation.variable_definition(usage.name).is_some() {
                continue;
            }
            let message = match operation.name() {
                Some(operation_name) => format!(
                    "Variable '${}' is not defined by operation '{operation_name}'.",
                    usage.name,
                ),
                None => format!("Variable '${}' is not defined.", usage.name),
            };
            ctx.report(GError::new(message).at(usage.location).at(operation.location()));
        }
        VisitControl::Skip
    }
}
