use crate::DirectiveAnnotation;
use crate::GError;
use crate::validation::RuleContext;
use crate::validation::ValidationRule;
use libgql_parser::ast::DirectiveLocationKind;

/// A non-repeatable directive may appear at most once per node. Unknown
/// directives are left to `KnownDirectives`.
///
/// https://spec.graphql.org/October2021/#sec-Directives-Are-Unique-Per-Location
#[derive(Clone, Copy, Debug, Default)]
pub struct UniqueDirectivesPerLocation;
impl ValidationRule for UniqueDirectivesPerLocation {
    fn name(&self) -> &'static str {
        "UniqueDirectivesPerLocation"
    }

    fn enter_directive(
        &self,
        ctx: &RuleContext<'_>,
        directive: &DirectiveAnnotation,
        _location: DirectiveLocationKind,
        siblings: &[DirectiveAnnotation],
    ) {
        let Some(directive_def) = ctx.schema().directive(directive.name()) else {
            return;
        };
        if directive_def.is_repeatable() {
            return;
        }
        let first = siblings
            .iter()
            .find(|sibling| sibling.name() == directive.name());
        if let Some(first) = first
            && !std::ptr::eq(first, directive)
        {
            ctx.report(
                GError::new(format!(
                    "The directive '@{}' can only be used once at this location.",
                    directive.name(),
                ))
                .at(first.location())
                .at(directive.location()),
            );
        }
    }
}
