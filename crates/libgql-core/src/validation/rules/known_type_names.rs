use crate::GError;
use crate::operation::FragmentDefinition;
use crate::operation::InlineFragmentSelection;
use crate::operation::VariableDefinition;
use crate::types::NamedTypeRef;
use crate::validation::RuleContext;
use crate::validation::ValidationRule;
use crate::validation::VisitControl;

/// Every type named by a variable definition or type condition must be
/// defined by the schema.
///
/// https://spec.graphql.org/October2021/#sec-Fragment-Spread-Type-Existence
#[derive(Clone, Copy, Debug, Default)]
pub struct KnownTypeNames;
impl KnownTypeNames {
    fn check(ctx: &RuleContext<'_>, type_ref: &NamedTypeRef) {
        if ctx.schema().type_named(type_ref.name()).is_none() {
            ctx.report(
                GError::new(format!("Unknown type '{}'.", type_ref.name()))
                    .at(type_ref.ref_location()),
            );
        }
    }
}
impl ValidationRule for KnownTypeNames {
    fn name(&self) -> &'static str {
        "KnownTypeNames"
    }

    fn enter_variable_definition(&self, ctx: &RuleContext<'_>, var_def: &VariableDefinition) {
        Self::check(ctx, var_def.var_type().innermost_named_ref());
    }

    fn enter_fragment_definition(
        &self,
        ctx: &RuleContext<'_>,
        fragment: &FragmentDefinition,
    ) -> VisitControl {
        Self::check(ctx, fragment.type_condition());
        VisitControl::Descend
    }

    fn enter_inline_fragment(
        &self,
        ctx: &RuleContext<'_>,
        inline: &InlineFragmentSelection,
    ) -> VisitControl {
        if let Some(type_condition) = inline.type_condition() {
            Self::check(ctx, type_condition);
        }
        VisitControl::Descend
    }
}
