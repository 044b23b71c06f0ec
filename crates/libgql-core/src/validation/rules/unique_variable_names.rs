use crate::GError;
use crate::operation::OperationDefinition;
use crate::validation::RuleContext;
use crate::validation::ValidationRule;
use crate::validation::VisitControl;
use std::collections::HashMap;

/// https://spec.graphql.org/October2021/#sec-Variable-Uniqueness
#[derive(Clone, Copy, Debug, Default)]
pub struct UniqueVariableNames;
impl ValidationRule for UniqueVariableNames {
    fn name(&self) -> &'static str {
        "UniqueVariableNames"
    }

    fn enter_operation(
        &self,
        ctx: &RuleContext<'_>,
        operation: &OperationDefinition,
    ) -> VisitControl {
        let mut first_by_name = HashMap::new();
        for var_def in operation.variable_definitions() {
            let first = *first_by_name.entry(var_def.name()).or_insert(var_def);
            if !std::ptr::eq(first, var_def) {
                ctx.report(
                    GError::new(format!(
                        "There can be only one variable named '${}'.",
                        var_def.name(),
                    ))
                    .at(first.location())
                    .at(var_def.location()),
                );
            }
        }
        VisitControl::Skip
    }
}
