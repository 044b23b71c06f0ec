use crate::GError;
use crate::validation::RuleContext;
use crate::validation::usages::referenced_fragments;
use crate::validation::ValidationRule;
use std::collections::HashSet;

/// Every fragment must be reachable from some operation.
///
/// https://spec.graphql.org/October2021/#sec-Fragments-Must-Be-Used
#[derive(Clone, Copy, Debug, Default)]
pub struct NoUnusedFragments;
impl ValidationRule for NoUnusedFragments {
    fn name(&self) -> &'static str {
        "NoUnusedFragments"
    }

    fn enter_document(&self, ctx: &RuleContext<'_>) {
        let document = ctx.document();
        let used: HashSet<&str> = document
            .operations()
            .iter()
            .flat_map(|operation| referenced_fragments(document, operation.selection_set()))
            .map(|fragment| fragment.name())
            .collect();
        for fragment in document.fragments().values() {
            if !used.contains(fragment.name()) {
                ctx.report(
                    GError::new(format!("Fragment '{}' is never used.", fragment.name()))
                        .at(fragment.location()),
                );
            }
        }
    }
}
