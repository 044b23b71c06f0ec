use crate::GError;
use crate::validation::RuleContext;
use crate::validation::ValidationRule;

/// https://spec.graphql.org/October2021/#sec-Lone-Anonymous-Operation
#[derive(Clone, Copy, Debug, Default)]
pub struct LoneAnonymousOperation;
impl ValidationRule for LoneAnonymousOperation {
    fn name(&self) -> &'static str {
        "LoneAnonymousOperation"
    }

    fn enter_document(&self, ctx: &RuleContext<'_>) {
        let operations = ctx.document().operations();
        if operations.len() < 2 {
            return;
        }
        for operation in operations.iter().filter(|operation| operation.name().is_none()) {
            ctx.report(
                GError::new("This anonymous operation must be the only defined operation.")
                    .at(operation.location()),
            );
        }
    }
}
