//! Whether the fields sharing a response key can be merged into one
//! response entry. Shared by `OverlappingFieldsCanBeMerged` and the
//! executor's field collection.
//!
//! https://spec.graphql.org/October2021/#sec-Field-Selection-Merging

use crate::loc::SourceLocation;
use crate::operation::Document;
use crate::operation::FieldSelection;
use crate::operation::Selection;
use crate::operation::SelectionSet;
use crate::schema::Schema;
use crate::types::FieldDefinition;
use crate::types::GraphQLType;
use crate::types::ResolvedType;
use indexmap::IndexMap;
use std::collections::HashSet;

/// A field selection along with the schema types it was selected under.
#[derive(Clone, Copy, Debug)]
pub(crate) struct FieldInScope<'a> {
    pub(crate) field: &'a FieldSelection,
    pub(crate) field_def: Option<&'a FieldDefinition>,
    /// The top-level fragment spread this field was collected through, if
    /// any. Pairs from the same fragment are checked on the fragment.
    pub(crate) fragment_name: Option<&'a str>,
    pub(crate) parent_type: Option<&'a GraphQLType>,
}

pub(crate) type FieldsByResponseKey<'a> = IndexMap<&'a str, Vec<FieldInScope<'a>>>;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum ConflictReason {
    ConflictingTypes { first: String, second: String },
    DifferentFields { first: String, second: String },
    DifferingArguments,
    Subfields(Vec<(String, ConflictReason)>),
}
impl std::fmt::Display for ConflictReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ConflictingTypes { first, second } =>
                write!(f, "they return conflicting types '{first}' and '{second}'"),
            Self::DifferentFields { first, second } =>
                write!(f, "'{first}' and '{second}' are different fields"),
            Self::DifferingArguments => f.write_str("they have differing arguments"),
            Self::Subfields(subfields) => {
                for (index, (response_key, reason)) in subfields.iter().enumerate() {
                    if index > 0 {
                        f.write_str(" and ")?;
                    }
                    write!(f, "subfields '{response_key}' conflict because {reason}")?;
                }
                Ok(())
            },
        }
    }
}

/// Two selections of the same response key that cannot be merged.
#[derive(Clone, Debug)]
pub(crate) struct FieldConflict<'a> {
    pub(crate) locations: Vec<&'a SourceLocation>,
    pub(crate) reason: ConflictReason,
    pub(crate) response_key: &'a str,
}
impl FieldConflict<'_> {
    pub(crate) fn message(&self) -> String {
        format!(
            "Fields '{}' conflict because {}. Use different aliases on the fields to fetch \
             both if this was intentional.",
            self.response_key,
            self.reason,
        )
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct FieldMerger<'a> {
    document: &'a Document,
    schema: &'a Schema,
}
impl<'a> FieldMerger<'a> {
    pub(crate) fn new(schema: &'a Schema, document: &'a Document) -> Self {
        Self { document, schema }
    }

    /// Every field `selection_set` selects, grouped by response key in
    /// selection order. Fragment spreads and inline fragments are expanded
    /// without regard to their type conditions or directives.
    pub(crate) fn collect_fields(
        &self,
        parent_type: Option<&'a GraphQLType>,
        selection_set: &'a SelectionSet,
    ) -> FieldsByResponseKey<'a> {
        let mut fields = IndexMap::new();
        let mut visited_fragments = HashSet::new();
        self.collect_fields_into(
            parent_type,
            selection_set,
            None,
            &mut fields,
            &mut visited_fragments,
        );
        fields
    }

    fn collect_fields_into(
        &self,
        parent_type: Option<&'a GraphQLType>,
        selection_set: &'a SelectionSet,
        fragment_name: Option<&'a str>,
        fields: &mut FieldsByResponseKey<'a>,
        visited_fragments: &mut HashSet<&'a str>,
    ) {
        for selection in selection_set.selections() {
            match selection {
                Selection::Field(field) => {
                    let field_def = parent_type.and_then(|parent_type| {
                        self.schema.field_definition(parent_type.name(), field.name())
                    });
                    fields.entry(field.response_key()).or_insert_with(Vec::new).push(
                        FieldInScope {
                            field,
                            field_def,
                            fragment_name,
                            parent_type,
                        },
                    );
                },

                Selection::FragmentSpread(spread) => {
                    if !visited_fragments.insert(spread.fragment_name()) {
                        continue;
                    }
                    let Some(fragment) = self.document.fragment(spread.fragment_name()) else {
                        continue;
                    };
                    self.collect_fields_into(
                        self.schema.type_named(fragment.type_condition().name()),
                        fragment.selection_set(),
                        fragment_name.or(Some(fragment.name())),
                        fields,
                        visited_fragments,
                    );
                },

                Selection::InlineFragment(inline) => {
                    let inline_type = match inline.type_condition() {
                        Some(type_condition) => self.schema.type_named(type_condition.name()),
                        None => parent_type,
                    };
                    self.collect_fields_into(
                        inline_type,
                        inline.selection_set(),
                        fragment_name,
                        fields,
                        visited_fragments,
                    );
                },
            }
        }
    }

    /// Every unmergeable pair among the fields `selection_set` selects.
    pub(crate) fn conflicts_within(
        &self,
        parent_type: Option<&'a GraphQLType>,
        selection_set: &'a SelectionSet,
    ) -> Vec<FieldConflict<'a>> {
        let mut conflicts = vec![];
        for (response_key, fields) in self.collect_fields(parent_type, selection_set) {
            for (index, first) in fields.iter().enumerate() {
                for second in &fields[index + 1..] {
                    if first.fragment_name.is_some() && first.fragment_name == second.fragment_name {
                        continue;
                    }
                    conflicts.extend(self.find_conflict(response_key, *first, *second, false));
                }
            }
        }
        conflicts
    }

    /// Whether `first` and `second`, both answering `response_key`, can
    /// be merged. `parents_exclusive` is set when the enclosing fields can
    /// never apply to the same object, in which case differing names and
    /// arguments are allowed but differing shapes still are not.
    pub(crate) fn find_conflict(
        &self,
        response_key: &'a str,
        first: FieldInScope<'a>,
        second: FieldInScope<'a>,
        parents_exclusive: bool,
    ) -> Option<FieldConflict<'a>> {
        let exclusive = parents_exclusive
            || match (first.parent_type, second.parent_type) {
                (Some(GraphQLType::Object(first_obj)), Some(GraphQLType::Object(second_obj))) =>
                    first_obj.name() != second_obj.name(),
                _ => false,
            };
        let conflict = |reason| FieldConflict {
            locations: vec![first.field.location(), second.field.location()],
            reason,
            response_key,
        };

        if !exclusive {
            if first.field.name() != second.field.name() {
                return Some(conflict(ConflictReason::DifferentFields {
                    first: first.field.name().to_string(),
                    second: second.field.name().to_string(),
                }));
            }
            if !same_arguments(first.field, second.field) {
                return Some(conflict(ConflictReason::DifferingArguments));
            }
        }

        if let (Some(first_def), Some(second_def)) = (first.field_def, second.field_def)
            && types_conflict(first_def.field_type(), second_def.field_type())
        {
            return Some(conflict(ConflictReason::ConflictingTypes {
                first: first_def.field_type().to_string(),
                second: second_def.field_type().to_string(),
            }));
        }

        let (Some(first_set), Some(second_set)) =
            (first.field.selection_set(), second.field.selection_set())
        else {
            return None;
        };
        let subfield_conflicts = self.conflicts_between(
            &self.collect_fields(self.named_field_type(first.field_def), first_set),
            &self.collect_fields(self.named_field_type(second.field_def), second_set),
            exclusive,
        );
        if subfield_conflicts.is_empty() {
            return None;
        }
        let mut locations = vec![first.field.location(), second.field.location()];
        let mut subfields = vec![];
        for sub_conflict in subfield_conflicts {
            locations.extend(sub_conflict.locations);
            subfields.push((sub_conflict.response_key.to_string(), sub_conflict.reason));
        }
        Some(FieldConflict {
            locations,
            reason: ConflictReason::Subfields(subfields),
            response_key,
        })
    }

    fn conflicts_between(
        &self,
        first_fields: &FieldsByResponseKey<'a>,
        second_fields: &FieldsByResponseKey<'a>,
        parents_exclusive: bool,
    ) -> Vec<FieldConflict<'a>> {
        let mut conflicts = vec![];
        for (response_key, firsts) in first_fields {
            let Some(seconds) = second_fields.get(response_key) else {
                continue;
            };
            for first in firsts {
                for second in seconds {
                    conflicts.extend(
                        self.find_conflict(response_key, *first, *second, parents_exclusive),
                    );
                }
            }
        }
        conflicts
    }

    fn named_field_type(&self, field_def: Option<&'a FieldDefinition>) -> Option<&'a GraphQLType> {
        field_def.and_then(|field_def| {
            self.schema.type_named(field_def.field_type().named_type().name())
        })
    }
}

fn same_arguments(first: &FieldSelection, second: &FieldSelection) -> bool {
    first.arguments().len() == second.arguments().len()
        && first.arguments().iter().all(|first_arg| {
            second
                .argument(first_arg.name())
                .is_some_and(|second_arg| second_arg.value() == first_arg.value())
        })
}

/// Whether two output types have shapes that cannot share a response
/// entry: different list/non-null wrapping, or different leaf types.
fn types_conflict(first: &ResolvedType, second: &ResolvedType) -> bool {
    match (first, second) {
        (ResolvedType::List(first_inner), ResolvedType::List(second_inner))
        | (ResolvedType::NonNull(first_inner), ResolvedType::NonNull(second_inner)) =>
            types_conflict(first_inner, second_inner),
        (ResolvedType::List(_), _)
        | (_, ResolvedType::List(_))
        | (ResolvedType::NonNull(_), _)
        | (_, ResolvedType::NonNull(_)) => true,
        (ResolvedType::Named(first_named), ResolvedType::Named(second_named)) =>
            (first_named.kind().is_leaf() || second_named.kind().is_leaf())
                && first_named.name() != second_named.name(),
    }
}
