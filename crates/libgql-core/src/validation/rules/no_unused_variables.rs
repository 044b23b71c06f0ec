use crate::GError;
use crate::operation::OperationDefinition;
use crate::validation::RuleContext;
use crate::validation::usages::operation_variable_usages;
use crate::validation::ValidationRule;
use crate::validation::VisitControl;
use std::collections::HashSet;

/// https://spec.graphql.org/October2021/#sec-All-Variables-Used
#[derive(Clone, Copy, Debug, Default)]
pub struct NoUnusedVariables;
impl ValidationRule for NoUnusedVariables {
    fn name(&self) -> &'static str {
        "NoUnusedVariables"
    }

    fn enter_operation(
        &self,
        ctx: &RuleContext<'_>,
        operation: &OperationDefinition,
    ) -> VisitControl {
        let used: HashSet<&str> = operation_variable_usages(ctx.schema(), ctx.document(), operation)
            .into_iter()
            .map(|usage| usage.name)
            .collect();
        for var_def in operation.variable_definitions() {
            if used.contains(var_def.name()) {
                continue;
            }
            let message = match operation.name() {
                Some(operation_name) => format!(
                    "Variable '${}' is never used in operation '{operation_name}'.",
                    var_def.name(),
                ),
                None => format!("Variable '${}' is never used.", var_def.name()),
            };
            ctx.report(GError::new(message).at(var_def.location()));
        }
        VisitControl::Skip
    }
}
