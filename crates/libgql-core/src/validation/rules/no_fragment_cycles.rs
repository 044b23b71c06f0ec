use crate::GError;
use crate::operation::Document;
use crate::operation::FragmentDefinition;
use crate::operation::FragmentSpreadSelection;
use crate::validation::RuleContext;
use crate::validation::usages::fragment_spreads;
use crate::validation::ValidationRule;
use std::collections::HashMap;
use std::collections::HashSet;

/// Fragment spreads must not form cycles. Each distinct cycle is reported
/// once, however many of its fragments are entry points.
///
/// https://spec.graphql.org/October2021/#sec-Fragment-spreads-must-not-form-cycles
#[derive(Clone, Copy, Debug, Default)]
pub struct NoFragmentCycles;
impl ValidationRule for NoFragmentCycles {
    fn name(&self) -> &'static str {
        "NoFragmentCycles"
    }

    fn enter_document(&self, ctx: &RuleContext<'_>) {
        let document = ctx.document();
        let mut detector = CycleDetector {
            ctx,
            document,
            reported: HashSet::new(),
            spread_path: vec![],
            spread_path_index: HashMap::new(),
            visited: HashSet::new(),
        };
        for fragment in document.fragments().values() {
            detector.visit(fragment);
        }
    }
}

struct CycleDetector<'a, 'c> {
    ctx: &'c RuleContext<'a>,
    document: &'a Document,
    /// Cycles already reported, rotated to start at their least name.
    reported: HashSet<Vec<&'a str>>,
    spread_path: Vec<&'a FragmentSpreadSelection>,
    /// Where in `spread_path` each fragment on the current path begins.
    spread_path_index: HashMap<&'a str, usize>,
    visited: HashSet<&'a str>,
}
impl<'a> CycleDetector<'a, '_> {
    fn visit(&mut self, fragment: &'a FragmentDefinition) {
        if !self.visited.insert(fragment.name()) {
            return;
        }
        let spreads = fragment_spreads(fragment.selection_set());
        if spreads.is_empty() {
            return;
        }

        self.spread_path_index.insert(fragment.name(), self.spread_path.len());
        for spread in spreads {
            self.spread_path.push(spread);
            match self.spread_path_index.get(spread.fragment_name()).copied() {
                Some(cycle_start) => self.report_cycle(cycle_start),
                None => {
                    if let Some(target) = self.document.fragment(spread.fragment_name()) {
                        self.visit(target);
                    }
                },
            }
            self.spread_path.pop();
        }
        self.spread_path_index.remove(fragment.name());
    }

    fn report_cycle(&mut self, cycle_start: usize) {
        let cycle = &self.spread_path[cycle_start..];
        let Some(closing) = cycle.last() else {
            return;
        };

        let mut names: Vec<&'a str> = cycle.iter().map(|spread| spread.fragment_name()).collect();
        let least = names
            .iter()
            .enumerate()
            .min_by_key(|(_, name)| **name)
            .map_or(0, |(index, _)| index);
        names.rotate_left(least);
        if !self.reported.insert(names) {
            return;
        }

        let via: Vec<String> = cycle[..cycle.len() - 1]
            .iter()
            .map(|spread| format!("'{}'", spread.fragment_name()))
            .collect();
        let message = if via.is_empty() {
            format!("Cannot spread fragment '{}' within itself.", closing.fragment_name())
        } else {
            format!(
                "Cannot spread fragment '{}' within itself via {}.",
                closing.fragment_name(),
                via.join(", "),
            )
        };
        let mut error = GError::new(message);
        for spread in cycle {
            error = error.at(spread.location());
        }
        self.ctx.report(error);
    }
}
