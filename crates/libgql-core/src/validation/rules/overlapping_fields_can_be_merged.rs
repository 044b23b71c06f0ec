use crate::GError;
use crate::operation::SelectionSet;
use crate::validation::field_merging::FieldMerger;
use crate::validation::RuleContext;
use crate::validation::ValidationRule;
use crate::validation::VisitControl;

/// Fields sharing a response key must be mergeable: same field and
/// arguments (unless their parents are exclusive object types) and
/// compatible response shapes.
///
/// https://spec.graphql.org/October2021/#sec-Field-Selection-Merging
#[derive(Clone, Copy, Debug, Default)]
pub struct OverlappingFieldsCanBeMerged;
impl ValidationRule for OverlappingFieldsCanBeMerged {
    fn name(&self) -> &'static str {
        "OverlappingFieldsCanBeMerged"
    }

    fn enter_selection_set(
        &self,
        ctx: &RuleContext<'_>,
        selection_set: &SelectionSet,
    ) -> VisitControl {
        let merger = FieldMerger::new(ctx.schema(), ctx.document());
        for conflict in merger.conflicts_within(ctx.type_info().parent_type(), selection_set) {
            let mut error = GError::new(conflict.message());
            for location in &conflict.locations {
                error = error.at(location);
            }
            ctx.report(error);
        }
        VisitControl::Descend
    }
}
