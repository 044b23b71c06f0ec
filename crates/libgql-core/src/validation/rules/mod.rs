//! The standard validation rules.
//!
//! https://spec.graphql.org/October2021/#sec-Validation

mod directives_in_valid_locations;
mod executable_definitions;
mod fields_on_correct_type;
mod fragments_on_composite_types;
mod known_argument_names;
mod known_directives;
mod known_fragment_names;
mod known_operation_types;
mod known_type_names;
mod lone_anonymous_operation;
mod no_fragment_cycles;
mod no_undefined_variables;
mod no_unused_fragments;
mod no_unused_variables;
mod overlapping_fields_can_be_merged;
mod possible_fragment_spreads;
mod provided_required_arguments;
mod scalar_leafs;
mod single_field_subscriptions;
mod unique_argument_names;
mod unique_directives_per_location;
mod unique_operation_names;
mod unique_variable_names;
mod values_of_correct_type;
mod variables_are_input_types;
mod variables_in_allowed_position;

pub use directives_in_valid_locations::DirectivesInValidLocations;
pub use executable_definitions::ExecutableDefinitions;
pub use fields_on_correct_type::FieldsOnCorrectType;
pub use fragments_on_composite_types::FragmentsOnCompositeTypes;
pub use known_argument_names::KnownArgumentNames;
pub use known_directives::KnownDirectives;
pub use known_fragment_names::KnownFragmentNames;
pub use known_operation_types::KnownOperationTypes;
pub use known_type_names::KnownTypeNames;
pub use lone_anonymous_operation::LoneAnonymousOperation;
pub use no_fragment_cycles::NoFragmentCycles;
pub use no_undefined_variables::NoUndefinedVariables;
pub use no_unused_fragments::NoUnusedFragments;
pub use no_unused_variables::NoUnusedVariables;
pub use overlapping_fields_can_be_merged::OverlappingFieldsCanBeMerged;
pub use possible_fragment_spreads::PossibleFragmentSpreads;
pub use provided_required_arguments::ProvidedRequiredArguments;
pub use scalar_leafs::ScalarLeafs;
pub use single_field_subscriptions::SingleFieldSubscriptions;
pub use unique_argument_names::UniqueArgumentNames;
pub use unique_directives_per_location::UniqueDirectivesPerLocation;
pub use unique_operation_names::UniqueOperationNames;
pub use unique_variable_names::UniqueVariableNames;
pub use values_of_correct_type::ValuesOfCorrectType;
pub use variables_are_input_types::VariablesAreInputTypes;
pub use variables_in_allowed_position::VariablesInAllowedPosition;

use crate::validation::ValidationRule;

/// Every standard rule, in the order their errors are reported.
pub fn standard_rules() -> Vec<Box<dyn ValidationRule>> {
    vec![
        Box::new(ExecutableDefinitions),
        Box::new(UniqueOperationNames),
        Box::new(LoneAnonymousOperation),
        Box::new(SingleFieldSubscriptions),
        Box::new(KnownTypeNames),
        Box::new(FragmentsOnCompositeTypes),
        Box::new(VariablesAreInputTypes),
        Box::new(ScalarLeafs),
        Box::new(FieldsOnCorrectType),
        Box::new(KnownFragmentNames),
        Box::new(NoUnusedFragments),
        Box::new(PossibleFragmentSpreads),
        Box::new(NoFragmentCycles),
        Box::new(UniqueVariableNames),
        Box::new(NoUndefinedVariables),
        Box::new(NoUnusedVariables),
        Box::new(KnownDirectives),
        Box::new(UniqueDirectivesPerLocation),
        Box::new(DirectivesInValidLocations),
        Box::new(KnownArgumentNames),
        Box::new(UniqueArgumentNames),
        Box::new(ValuesOfCorrectType),
        Box::new(ProvidedRequiredArguments),
        Box::new(VariablesInAllowedPosition),
        Box::new(OverlappingFieldsCanBeMerged),
        Box::new(KnownOperationTypes),
    ]
}
