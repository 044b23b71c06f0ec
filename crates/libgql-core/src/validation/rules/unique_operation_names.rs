use crate::GError;
use crate::validation::RuleContext;
use crate::validation::ValidationRule;
use std::collections::HashMap;

/// https://spec.graphql.org/October2021/#sec-Operation-Name-Uniqueness
#[derive(Clone, Copy, Debug, Default)]
pub struct UniqueOperationNames;
impl ValidationRule for UniqueOperationNames {
    fn name(&self) -> &'static str {
        "UniqueOperationNames"
    }

    fn enter_document(&self, ctx: &RuleContext<'_>) {
        let mut first_by_name = HashMap::new();
        for operation in ctx.document().operations() {
            let Some(name) = operation.name() else {
                continue;
            };
            let first = *first_by_name.entry(name).or_insert(operation);
            if std::ptr::eq(first, operation) {
                continue;
            }
            ctx.report(
                GError::new(format!("There can be only one operation named '{name}'."))
                    .at(first.location())
                    .at(operation.location()),
            );
        }
    }
}
