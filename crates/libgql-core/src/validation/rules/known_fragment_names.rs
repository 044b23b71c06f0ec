use crate::GError;
use crate::operation::FragmentSpreadSelection;
use crate::validation::RuleContext;
use crate::validation::ValidationRule;

/// https://spec.graphql.org/October2021/#sec-Fragment-spread-target-defined
#[derive(Clone, Copy, Debug, Default)]
pub struct KnownFragmentNames;
impl ValidationRule for KnownFragmentNames {
    fn name(&self) -> &'static str {
        "KnownFragmentNames"
    }

    fn enter_fragment_spread(&self, ctx: &RuleContext<'_>, spread: &FragmentSpreadSelection) {
        if ctx.document().fragment(spread.fragment_name()).is_none() {
            ctx.report(
                GError::new(format!("Unknown fragment '{}'.", spread.fragment_name()))
                    .at(spread.location()),
            );
        }
    }
}
