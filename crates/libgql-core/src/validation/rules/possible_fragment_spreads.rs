use crate::GError;
use crate::operation::FragmentSpreadSelection;
use crate::operation::InlineFragmentSelection;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::validation::RuleContext;
use crate::validation::ValidationRule;
use crate::validation::VisitControl;

/// A fragment may only be spread where some object could satisfy both
/// the enclosing type and the fragment's type condition.
///
/// https://spec.graphql.org/October2021/#sec-Fragment-spread-is-possible
#[derive(Clone, Copy, Debug, Default)]
pub struct PossibleFragmentSpreads;
impl PossibleFragmentSpreads {
    fn types_overlap(schema: &Schema, parent_type: &GraphQLType, fragment_type: &GraphQLType) -> bool {
        schema
            .possible_types(parent_type.name())
            .iter()
            .any(|obj_type| schema.is_possible_type(fragment_type.name(), obj_type.name()))
    }
}
impl ValidationRule for PossibleFragmentSpreads {
    fn name(&self) -> &'static str {
        "PossibleFragmentSpreads"
    }

    fn enter_fragment_spread(&self, ctx: &RuleContext<'_>, spread: &FragmentSpreadSelection) {
        let schema = ctx.schema();
        let Some(parent_type) = ctx.type_info().parent_type() else {
            return;
        };
        let Some(fragment) = ctx.document().fragment(spread.fragment_name()) else {
            return;
        };
        let Some(fragment_type) = schema
            .type_named(fragment.type_condition().name())
            .filter(|type_| type_.kind().is_composite())
        else {
            return;
        };
        if !Self::types_overlap(schema, parent_type, fragment_type) {
            ctx.report(
                GError::new(format!(
                    "Fragment '{}' cannot be spread here as objects of type '{}' can never be \
                     of type '{}'.",
                    fragment.name(),
                    parent_type.name(),
                    fragment_type.name(),
                ))
                .at(spread.location()),
            );
        }
    }

    fn enter_inline_fragment(
        &self,
        ctx: &RuleContext<'_>,
        inline: &InlineFragmentSelection,
    ) -> VisitControl {
        let schema = ctx.schema();
        let parent_type = ctx.type_info().parent_type();
        let fragment_type = inline
            .type_condition()
            .and_then(|type_condition| schema.type_named(type_condition.name()))
            .filter(|type_| type_.kind().is_composite());
        if let (Some(parent_type), Some(fragment_type)) = (parent_type, fragment_type)
            && !Self::types_overlap(schema, parent_type, fragment_type)
        {
            ctx.report(
                GError::new(format!(
                    "Fragment cannot be spread here as objects of type '{}' can never be of \
                     type '{}'.",
                    parent_type.name(),
                    fragment_type.name(),
                ))
                .at(inline.location()),
            );
        }
        VisitControl::Descend
    }
}
