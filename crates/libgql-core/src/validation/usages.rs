//! Document queries shared by several rules: fragment spreads reachable
//! from a selection set and `$variable` references with their expected
//! types.

use crate::DirectiveAnnotation;
use crate::loc::SourceLocation;
use crate::operation::Document;
use crate::operation::FragmentDefinition;
use crate::operation::FragmentSpreadSelection;
use crate::operation::OperationDefinition;
use crate::operation::Selection;
use crate::operation::SelectionSet;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::ResolvedType;
use crate::Value;
use std::collections::HashSet;

/// A `$variable` reference and the input type expected where it appears.
#[derive(Clone, Debug)]
pub(crate) struct VariableUsage<'a> {
    pub(crate) name: &'a str,
    /// The location of the argument value containing the reference.
    pub(crate) location: &'a SourceLocation,
    /// `None` when the position's type is unknown.
    pub(crate) expected_type: Option<&'a ResolvedType>,
    /// Whether the argument or input field in that position has a default.
    pub(crate) has_location_default: bool,
}

/// Every fragment spread in `selection_set`, including those nested in
/// fields and inline fragments but not those inside the spread fragments.
pub(crate) fn fragment_spreads(selection_set: &SelectionSet) -> Vec<&FragmentSpreadSelection> {
    let mut spreads = vec![];
    let mut pending = vec![selection_set];
    while let Some(set) = pending.pop() {
        for selection in set.selections().iter().rev() {
            match selection {
                Selection::Field(field) => pending.extend(field.selection_set()),
                Selection::FragmentSpread(spread) => spreads.push(spread),
                Selection::InlineFragment(inline) => pending.push(inline.selection_set()),
            }
        }
    }
    spreads
}

/// Every fragment definition reachable from `selection_set` through
/// spreads, transitively, each once, in discovery order. Spreads of
/// unknown fragments are skipped.
pub(crate) fn referenced_fragments<'a>(
    document: &'a Document,
    selection_set: &'a SelectionSet,
) -> Vec<&'a FragmentDefinition> {
    let mut seen = HashSet::new();
    let mut fragments = vec![];
    let mut pending = vec![selection_set];
    while let Some(set) = pending.pop() {
        for spread in fragment_spreads(set) {
            if !seen.insert(spread.fragment_name()) {
                continue;
            }
            if let Some(fragment) = document.fragment(spread.fragment_name()) {
                fragments.push(fragment);
                pending.push(fragment.selection_set());
            }
        }
    }
    fragments
}

/// Every variable reference in `operation`, including those inside the
/// fragments it (transitively) spreads.
pub(crate) fn operation_variable_usages<'a>(
    schema: &'a Schema,
    document: &'a Document,
    operation: &'a OperationDefinition,
) -> Vec<VariableUsage<'a>> {
    let mut collector = UsageCollector {
        schema,
        usages: vec![],
    };
    collector.collect_directives(operation.directives());
    let root_type = schema
        .root_type_name(operation.operation_kind())
        .and_then(|type_name| schema.type_named(type_name));
    collector.collect_selection_set(operation.selection_set(), root_type);
    for fragment in referenced_fragments(document, operation.selection_set()) {
        collector.collect_directives(fragment.directives());
        collector.collect_selection_set(
            fragment.selection_set(),
            schema.type_named(fragment.type_condition().name()),
        );
    }
    collector.usages
}

struct UsageCollector<'a> {
    schema: &'a Schema,
    usages: Vec<VariableUsage<'a>>,
}
impl<'a> UsageCollector<'a> {
    fn collect_selection_set(
        &mut self,
        selection_set: &'a SelectionSet,
        parent_type: Option<&'a GraphQLType>,
    ) {
        for selection in selection_set.selections() {
            match selection {
                Selection::Field(field) => {
                    let field_def = parent_type.and_then(|parent_type| {
                        self.schema.field_definition(parent_type.name(), field.name())
                    });
                    for argument in field.arguments() {
                        let arg_def = field_def
                            .and_then(|field_def| field_def.argument(argument.name()));
                        self.collect_value(
                            argument.value(),
                            argument.value_location(),
                            arg_def.map(|arg_def| arg_def.arg_type()),
                            arg_def.is_some_and(|arg_def| arg_def.default_value().is_some()),
                        );
                    }
                    self.collect_directives(field.directives());
                    if let Some(sub_selection_set) = field.selection_set() {
                        let field_type = field_def.and_then(|field_def| {
                            self.schema.type_named(field_def.field_type().named_type().name())
                        });
                        self.collect_selection_set(sub_selection_set, field_type);
                    }
                },

                Selection::FragmentSpread(spread) => self.collect_directives(spread.directives()),

                Selection::InlineFragment(inline) => {
                    self.collect_directives(inline.directives());
                    let inline_type = match inline.type_condition() {
                        Some(type_condition) => self.schema.type_named(type_condition.name()),
                        None => parent_type,
                    };
                    self.collect_selection_set(inline.selection_set(), inline_type);
                },
            }
        }
    }

    fn collect_directives(&mut self, directives: &'a [DirectiveAnnotation]) {
        for directive in directives {
            let directive_def = self.schema.directive(directive.name());
            for argument in directive.arguments() {
                let arg_def = directive_def
                    .and_then(|directive_def| directive_def.argument(argument.name()));
                self.collect_value(
                    argument.value(),
                    argument.value_location(),
                    arg_def.map(|arg_def| arg_def.arg_type()),
                    arg_def.is_some_and(|arg_def| arg_def.default_value().is_some()),
                );
            }
        }
    }

    fn collect_value(
        &mut self,
        value: &'a Value,
        location: &'a SourceLocation,
        expected_type: Option<&'a ResolvedType>,
        has_location_default: bool,
    ) {
        match value {
            Value::Variable(name) => self.usages.push(VariableUsage {
                name,
                location,
                expected_type,
                has_location_default,
            }),

            Value::List(items) => {
                let item_type = expected_type.and_then(ResolvedType::list_item_type);
                for item in items {
                    self.collect_value(item, location, item_type, false);
                }
            },

            Value::Object(fields) => {
                let input_type = expected_type
                    .and_then(|expected| self.schema.type_named(expected.named_type().name()))
                    .and_then(GraphQLType::as_input_object);
                for (field_name, field_value) in fields {
                    let field_def = input_type.and_then(|input_type| input_type.field(field_name));
                    self.collect_value(
                        field_value,
                        location,
                        field_def.map(|field_def| field_def.arg_type()),
                        field_def.is_some_and(|field_def| field_def.default_value().is_some()),
                    );
                }
            },

            _ => (),
        }
    }
}
