//! Rules about directive annotations in documents.

use crate::validation::rules::DirectivesInValidLocations;
use crate::validation::rules::KnownDirectives;
use crate::validation::rules::UniqueDirectivesPerLocation;
use crate::validation::tests::utils::check_rule;
use crate::validation::tests::utils::locations;
use crate::validation::tests::utils::messages;

#[test]
fn unknown_directive() {
    let errors = check_rule(KnownDirectives, "{ status @nope }");
    assert_eq!(messages(&errors), vec!["Unknown directive '@nope'."]);
    assert_eq!(locations(&errors[0]), vec![(1, 11)]);
}

#[test]
fn built_in_and_schema_directives_are_known() {
    let errors = check_rule(
        KnownDirectives,
        "{ status @skip(if: true) @include(if: false) @cached(ttl: 5) @tag }",
    );
    assert!(errors.is_empty());
}

#[test]
fn directive_in_wrong_location() {
    let errors = check_rule(
        DirectivesInValidLocations,
        "query Q @skip(if: true) { status }\nfragment F on User @cached(ttl: 1) { id }",
    );
    assert_eq!(messages(&errors), vec![
        "Directive '@skip' may not be used on QUERY.",
        "Directive '@cached' may not be used on FRAGMENT_DEFINITION.",
    ]);
    assert_eq!(locations(&errors[0]), vec![(1, 9)]);
    assert_eq!(locations(&errors[1]), vec![(2, 20)]);
}

#[test]
fn directives_in_valid_locations() {
    let errors = check_rule(
        DirectivesInValidLocations,
        "{ me { ...F @include(if: true) ... @skip(if: false) { id } } }\nfragment F on User { id }",
    );
    assert!(errors.is_empty());
}

#[test]
fn repeated_non_repeatable_directive() {
    let errors = check_rule(
        UniqueDirectivesPerLocation,
        "{ status @skip(if: true) @skip(if: false) }",
    );
    assert_eq!(messages(&errors), vec![
        "The directive '@skip' can only be used once at this location.",
    ]);
    assert_eq!(locations(&errors[0]), vec![(1, 10), (1, 26)]);
}

#[test]
fn repeatable_and_separate_directives() {
    let errors = check_rule(
        UniqueDirectivesPerLocation,
        "{ status @tag(name: \"a\") @tag(name: \"b\") @skip(if: true) me @skip(if: true) { id } }",
    );
    assert!(errors.is_empty());
}
