use crate::DirectiveAnnotation;
use crate::Value;
use crate::operation::Document;
use crate::operation::FieldSelection;
use crate::operation::Selection;
use crate::operation::SelectionSet;
use crate::schema::Schema;
use crate::types::ObjectType;
use indexmap::IndexMap;
use serde_json::Map as JsonMap;
use serde_json::Value as JsonValue;
use std::collections::HashSet;

/// Field selections grouped by response key, in selection order.
pub(crate) type GroupedFields<'a> = IndexMap<&'a str, Vec<&'a FieldSelection>>;

/// Collects the fields that apply to a concrete object type: honors
/// `@skip` and `@include`, and expands fragments whose type condition the
/// object type satisfies.
///
/// https://spec.graphql.org/October2021/#CollectFields()
#[derive(Clone, Copy, Debug)]
pub(crate) struct FieldCollector<'a> {
    document: &'a Document,
    schema: &'a Schema,
    variables: &'a JsonMap<String, JsonValue>,
}
impl<'a> FieldCollector<'a> {
    pub(crate) fn new(
        schema: &'a Schema,
        document: &'a Document,
        variables: &'a JsonMap<String, JsonValue>,
    ) -> Self {
        Self {
            document,
            schema,
            variables,
        }
    }

    /// Collects from several selection sets at once, as when completing
    /// the merged selections of one response key.
    pub(crate) fn collect(
        &self,
        object_type: &ObjectType,
        selection_sets: impl IntoIterator<Item = &'a SelectionSet>,
    ) -> GroupedFields<'a> {
        let mut grouped = IndexMap::new();
        let mut visited_fragments = HashSet::new();
        for selection_set in selection_sets {
            self.collect_into(object_type, selection_set, &mut grouped, &mut visited_fragments);
        }
        grouped
    }

    fn collect_into(
        &self,
        object_type: &ObjectType,
        selection_set: &'a SelectionSet,
        grouped: &mut GroupedFields<'a>,
        visited_fragments: &mut HashSet<&'a str>,
    ) {
        for selection in selection_set.selections() {
            if !self.should_include(selection.directives()) {
                continue;
            }
            match selection {
                Selection::Field(field) =>
                    grouped.entry(field.response_key()).or_default().push(field),

                Selection::FragmentSpread(spread) => {
                    if !visited_fragments.insert(spread.fragment_name()) {
                        continue;
                    }
                    let Some(fragment) = self.document.fragment(spread.fragment_name()) else {
                        continue;
                    };
                    if !self.type_applies(object_type, fragment.type_condition().name()) {
                        continue;
                    }
                    self.collect_into(
                        object_type,
                        fragment.selection_set(),
                        grouped,
                        visited_fragments,
                    );
                },

                Selection::InlineFragment(inline) => {
                    if let Some(type_condition) = inline.type_condition()
                        && !self.type_applies(object_type, type_condition.name())
                    {
                        continue;
                    }
                    self.collect_into(object_type, inline.selection_set(), grouped, visited_fragments);
                },
            }
        }
    }

    fn type_applies(&self, object_type: &ObjectType, type_condition: &str) -> bool {
        self.schema.is_possible_type(type_condition, object_type.name())
    }

    fn should_include(&self, directives: &[DirectiveAnnotation]) -> bool {
        directives.iter().all(|directive| match directive.name() {
            "skip" => self.if_argument(directive) != Some(true),
            "include" => self.if_argument(directive) != Some(false),
            _ => true,
        })
    }

    fn if_argument(&self, directive: &DirectiveAnnotation) -> Option<bool> {
        match directive.argument("if")? {
            Value::Boolean(condition) => Some(*condition),
            Value::Variable(var_name) => self.variables.get(var_name).and_then(JsonValue::as_bool),
            _ => None,
        }
    }
}
