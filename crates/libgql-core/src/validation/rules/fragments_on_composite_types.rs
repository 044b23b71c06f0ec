use crate::GError;
use crate::operation::FragmentDefinition;
use crate::operation::InlineFragmentSelection;
use crate::types::NamedTypeRef;
use crate::validation::RuleContext;
use crate::validation::ValidationRule;
use crate::validation::VisitControl;

/// https://spec.graphql.org/October2021/#sec-Fragments-On-Composite-Types
#[derive(Clone, Copy, Debug, Default)]
pub struct FragmentsOnCompositeTypes;
impl FragmentsOnCompositeTypes {
    /// `true` when the condition names a known, non-composite type.
    fn is_invalid(ctx: &RuleContext<'_>, type_condition: &NamedTypeRef) -> bool {
        ctx.schema()
            .type_named(type_condition.name())
            .is_some_and(|type_| !type_.kind().is_composite())
    }
}
impl ValidationRule for FragmentsOnCompositeTypes {
    fn name(&self) -> &'static str {
        "FragmentsOnCompositeTypes"
    }

    fn enter_fragment_definition(
        &self,
        ctx: &RuleContext<'_>,
        fragment: &FragmentDefinition,
    ) -> VisitControl {
        let type_condition = fragment.type_condition();
        if Self::is_invalid(ctx, type_condition) {
            ctx.report(
                GError::new(format!(
                    "Fragment '{}' cannot condition on non composite type '{}'.",
                    fragment.name(),
                    type_condition.name(),
                ))
                .at(type_condition.ref_location()),
            );
        }
        VisitControl::Descend
    }

    fn enter_inline_fragment(
        &self,
        ctx: &RuleContext<'_>,
        inline: &InlineFragmentSelection,
    ) -> VisitControl {
        if let Some(type_condition) = inline.type_condition()
            && Self::is_invalid(ctx, type_condition)
        {
            ctx.report(
                GError::new(format!(
                    "Fragment cannot condition on non composite type '{}'.",
                    type_condition.name(),
                ))
                .at(type_condition.ref_location()),
            );
        }
        VisitControl::Descend
    }
}
