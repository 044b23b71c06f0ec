use crate::GError;
use crate::validation::RuleContext;
use crate::validation::ValidationRule;

/// Reports type-system definitions in an executable document unless
/// [`ValidationOptions::allow_type_system_definitions`](crate::validation::ValidationOptions)
/// is set.
///
/// https://spec.graphql.org/October2021/#sec-Executable-Definitions
#[derive(Clone, Copy, Debug, Default)]
pub struct ExecutableDefinitions;
impl ValidationRule for ExecutableDefinitions {
    fn name(&self) -> &'static str {
        "ExecutableDefinitions"
    }

    fn enter_document(&self, ctx: &RuleContext<'_>) {
        if ctx.options().allow_type_system_definitions {
            return;
        }
        for definition in ctx.document().type_system_definitions() {
            let message = match definition.name() {
                Some(name) => format!("The '{name}' definition is not executable."),
                None => "The schema definition is not executable.".to_string(),
            };
            ctx.report(GError::new(message).at(definition.location()));
        }
    }
}
