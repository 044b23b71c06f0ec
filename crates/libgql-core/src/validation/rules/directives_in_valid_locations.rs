use crate::DirectiveAnnotation;
use crate::GError;
use crate::validation::RuleContext;
use crate::validation::ValidationRule;
use libgql_parser::ast::DirectiveLocationKind;

/// https://spec.graphql.org/October2021/#sec-Directives-Are-In-Valid-Locations
#[derive(Clone, Copy, Debug, Default)]
pub struct DirectivesInValidLocations;
impl ValidationRule for DirectivesInValidLocations {
    fn name(&self) -> &'static str {
        "DirectivesInValidLocations"
    }

    fn enter_directive(
        &self,
        ctx: &RuleContext<'_>,
        directive: &DirectiveAnnotation,
        location: DirectiveLocationKind,
        _siblings: &[DirectiveAnnotation],
    ) {
        let Some(directive_def) = ctx.schema().directive(directive.name()) else {
            return;
        };
        if !directive_def.is_valid_at(location) {
            ctx.report(
                GError::new(format!(
                    "Directive '@{}' may not be used on {}.",
                    directive.name(),
                    location.as_str(),
                ))
                .at(directive.location()),
            );
        }
    }
}
