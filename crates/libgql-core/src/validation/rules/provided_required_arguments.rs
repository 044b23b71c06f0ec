use crate::DirectiveAnnotation;
use crate::GError;
use crate::operation::FieldSelection;
use crate::validation::RuleContext;
use crate::validation::ValidationRule;
use crate::validation::VisitControl;
use libgql_parser::ast::DirectiveLocationKind;

/// Non-null arguments without a default must be provided.
///
/// https://spec.graphql.org/October2021/#sec-Required-Arguments
#[derive(Clone, Copy, Debug, Default)]
pub struct ProvidedRequiredArguments;
impl ValidationRule for ProvidedRequiredArguments {
    fn name(&self) -> &'static str {
        "ProvidedRequiredArguments"
    }

    fn enter_field(&self, ctx: &RuleContext<'_>, field: &FieldSelection) -> VisitControl {
        let Some(field_def) = ctx.type_info().field_definition() else {
            return VisitControl::Descend;
        };
        for arg_def in field_def.arguments().values() {
            if arg_def.is_required() && field.argument(arg_def.name()).is_none() {
                ctx.report(
                    GError::new(format!(
                        "Field '{}' argument '{}' of type '{}' is required, but it was not \
                         provided.",
                        field.name(),
                        arg_def.name(),
                        arg_def.arg_type(),
                    ))
                    .at(field.location()),
                );
            }
        }
        VisitControl::Descend
    }

    fn enter_directive(
        &self,
        ctx: &RuleContext<'_>,
        directive: &DirectiveAnnotation,
        _location: DirectiveLocationKind,
        _siblings: &[DirectiveAnnotation],
    ) {
        let Some(directive_def) = ctx.schema().directive(directive.name()) else {
            return;
        };
        for arg_def in directive_def.arguments().values() {
            if arg_def.is_required() && directive.argument(arg_def.name()).is_none() {
                ctx.report(
                    GError::new(format!(
                        "Directive '@{}' argument '{}' of type '{}' is required, but it was not \
                         provided.",
                        directive.name(),
                        arg_def.name(),
                        arg_def.arg_type(),
                    ))
                    .at(directive.location()),
                );
            }
        }
    }
}
