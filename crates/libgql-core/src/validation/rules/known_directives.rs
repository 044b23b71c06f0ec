use crate::DirectiveAnnotation;
use crate::GError;
use crate::validation::RuleContext;
use crate::validation::ValidationRule;
use libgql_parser::ast::DirectiveLocationKind;

/// https://spec.graphql.org/October2021/#sec-Directives-Are-Defined
#[derive(Clone, Copy, Debug, Default)]
pub struct KnownDirectives;
impl ValidationRule for KnownDirectives {
    fn name(&self) -> &'static str {
        "KnownDirectives"
    }

    fn enter_directive(
        &self,
        ctx: &RuleContext<'_>,
        directive: &DirectiveAnnotation,
        _location: DirectiveLocationKind,
        _siblings: &[DirectiveAnnotation],
    ) {
        if ctx.schema().directive(directive.name()).is_none() {
            ctx.report(
                GError::new(format!("Unknown directive '@{}'.", directive.name()))
                    .at(directive.name_location()),
            );
        }
    }
}
