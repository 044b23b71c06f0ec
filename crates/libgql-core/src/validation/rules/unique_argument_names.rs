use crate::GError;
use crate::operation::FieldSelection;
use crate::validation::RuleContext;
use crate::validation::ValidationRule;
use crate::validation::VisitControl;

/// Directive arguments are unique by construction; a repeated directive
/// argument is rejected when the document is built.
///
/// https://spec.graphql.org/October2021/#sec-Argument-Uniqueness
#[derive(Clone, Copy, Debug, Default)]
pub struct UniqueArgumentNames;
impl ValidationRule for UniqueArgumentNames {
    fn name(&self) -> &'static str {
        "UniqueArgumentNames"
    }

    fn enter_field(&self, ctx: &RuleContext<'_>, field: &FieldSelection) -> VisitControl {
        let arguments = field.arguments();
        for (index, argument) in arguments.iter().enumerate() {
            let Some(first) = arguments[..index]
                .iter()
                .find(|earlier| earlier.name() == argument.name())
            else {
                continue;
            };
            ctx.report(
                GError::new(format!(
                    "There can be only one argument named '{}'.",
                    argument.name(),
                ))
                .at(first.location())
                .at(argument.location()),
            );
        }
        VisitControl::Descend
    }
}
