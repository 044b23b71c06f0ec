use crate::Argument;
use crate::GError;
use crate::validation::RuleContext;
use crate::validation::ValidationRule;

/// https://spec.graphql.org/October2021/#sec-Argument-Names
#[derive(Clone, Copy, Debug, Default)]
pub struct KnownArgumentNames;
impl ValidationRule for KnownArgumentNames {
    fn name(&self) -> &'static str {
        "KnownArgumentNames"
    }

    fn enter_argument(&self, ctx: &RuleContext<'_>, argument: &Argument) {
        let type_info = ctx.type_info();
        if type_info.argument_definition().is_some() {
            return;
        }
        let message = if type_info.directive().is_some() {
            let Some(directive_def) = type_info.directive_definition() else {
                return;
            };
            format!(
                "Unknown argument '{}' on directive '@{}'.",
                argument.name(),
                directive_def.name(),
            )
        } else {
            let (Some(parent_type), Some(field_def)) =
                (type_info.parent_type(), type_info.field_definition())
            else {
                return;
            };
            format!(
                "Unknown argument '{}' on field '{}.{}'.",
                argument.name(),
                parent_type.name(),
                field_def.name(),
            )
        };
        ctx.report(GError::new(message).at(argument.location()));
    }
}
