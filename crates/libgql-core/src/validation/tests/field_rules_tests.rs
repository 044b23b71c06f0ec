//! Rules about field selections and their arguments.

use crate::validation::rules::FieldsOnCorrectType;
use crate::validation::rules::KnownArgumentNames;
use crate::validation::rules::OverlappingFieldsCanBeMerged;
use crate::validation::rules::ProvidedRequiredArguments;
use crate::validation::rules::ScalarLeafs;
use crate::validation::rules::UniqueArgumentNames;
use crate::validation::tests::utils::check_rule;
use crate::validation::tests::utils::locations;
use crate::validation::tests::utils::messages;

mod fields_on_correct_type {
    use super::*;

    #[test]
    fn unknown_field_on_object() {
        let errors = check_rule(FieldsOnCorrectType, "{ me { id nope } }");
        assert_eq!(messages(&errors), vec![
            "Cannot select nonexistent field 'nope' on type 'User'.",
        ]);
        assert_eq!(locations(&errors[0]), vec![(1, 11)]);
    }

    #[test]
    fn union_fields_must_be_selected_through_fragments() {
        let errors = check_rule(FieldsOnCorrectType, "{ search(term: \"x\") { title } }");
        assert_eq!(messages(&errors), vec![
            "Cannot select nonexistent field 'title' on type 'SearchResult'.",
        ]);
        assert_eq!(locations(&errors[0]), vec![(1, 23)]);
    }

    #[test]
    fn typename_and_fragments_on_union() {
        let errors = check_rule(
            FieldsOnCorrectType,
            "{ search(term: \"x\") { __typename ... on Post { title } ... on Node { id } } }",
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn interface_fields() {
        let errors = check_rule(FieldsOnCorrectType, "{ pet { name barkVolume } }");
        assert_eq!(messages(&errors), vec![
            "Cannot select nonexistent field 'barkVolume' on type 'Pet'.",
        ]);
    }

    #[test]
    fn meta_fields_only_on_query_root() {
        let errors = check_rule(
            FieldsOnCorrectType,
            "{ __schema { queryType { name } } me { __type(name: \"User\") { name } } }",
        );
        assert_eq!(messages(&errors), vec![
            "Cannot select nonexistent field '__type' on type 'User'.",
        ]);
    }

    #[test]
    fn fields_under_unknown_fields_are_not_reported() {
        let errors = check_rule(FieldsOnCorrectType, "{ nope { deeper } }");
        assert_eq!(messages(&errors), vec![
            "Cannot select nonexistent field 'nope' on type 'Query'.",
        ]);
    }
}

// =========================================================

mod scalar_leafs {
    use super::*;

    #[test]
    fn selection_on_leaf() {
        let errors = check_rule(ScalarLeafs, "{ status { name } }");
        assert_eq!(messages(&errors), vec![
            "Field 'status' must not have a selection since type 'Status' has no subfields.",
        ]);
        assert_eq!(locations(&errors[0]), vec![(1, 3)]);
    }

    #[test]
    fn missing_selection_on_composite() {
        let errors = check_rule(ScalarLeafs, "{ me users }");
        assert_eq!(messages(&errors), vec![
            "Field 'me' of type 'User' must have a selection of subfields. Did you mean 'me { ... }'?",
            "Field 'users' of type '[User!]!' must have a selection of subfields. Did you mean \
             'users { ... }'?",
        ]);
        assert_eq!(locations(&errors[1]), vec![(1, 6)]);
    }

    #[test]
    fn leaves_and_composites_used_correctly() {
        assert!(check_rule(ScalarLeafs, "{ status me { id friends { name } } }").is_empty());
    }
}

// =========================================================

mod arguments {
    use super::*;

    #[test]
    fn unknown_field_argument() {
        let errors = check_rule(KnownArgumentNames, "{ user(id: 1, nope: 2) { id } }");
        assert_eq!(messages(&errors), vec!["Unknown argument 'nope' on field 'Query.user'."]);
        assert_eq!(locations(&errors[0]), vec![(1, 15)]);
    }

    #[test]
    fn unknown_directive_argument() {
        let errors = check_rule(KnownArgumentNames, "{ me { id @cached(ttl: 1, extra: 2) } }");
        assert_eq!(messages(&errors), vec!["Unknown argument 'extra' on directive '@cached'."]);
        assert_eq!(locations(&errors[0]), vec![(1, 27)]);
    }

    #[test]
    fn arguments_of_unknown_fields_are_not_reported() {
        assert!(check_rule(KnownArgumentNames, "{ nope(a: 1) }").is_empty());
    }

    #[test]
    fn duplicate_field_argument() {
        let errors = check_rule(UniqueArgumentNames, "{ user(id: 1, id: 2) { id } }");
        assert_eq!(messages(&errors), vec!["There can be only one argument named 'id'."]);
        assert_eq!(locations(&errors[0]), vec![(1, 8), (1, 15)]);
    }

    #[test]
    fn missing_required_field_argument() {
        let errors = check_rule(ProvidedRequiredArguments, "{ user { id } search }");
        assert_eq!(messages(&errors), vec![
            "Field 'user' argument 'id' of type 'ID!' is required, but it was not provided.",
            "Field 'search' argument 'term' of type 'String!' is required, but it was not \
             provided.",
        ]);
        assert_eq!(locations(&errors[0]), vec![(1, 3)]);
    }

    #[test]
    fn missing_required_directive_argument() {
        let errors = check_rule(ProvidedRequiredArguments, "{ status @cached @skip }");
        assert_eq!(messages(&errors), vec![
            "Directive '@cached' argument 'ttl' of type 'Int!' is required, but it was not \
             provided.",
            "Directive '@skip' argument 'if' of type 'Boolean!' is required, but it was not \
             provided.",
        ]);
        assert_eq!(locations(&errors[0]), vec![(1, 10)]);
    }

    #[test]
    fn optional_arguments_may_be_omitted() {
        assert!(check_rule(ProvidedRequiredArguments, "{ users { id } }").is_empty());
    }
}

// =========================================================

mod overlapping_fields {
    use super::*;

    #[test]
    fn alias_hides_a_different_field() {
        let errors = check_rule(OverlappingFieldsCanBeMerged, "{ me { id: name id } }");
        assert_eq!(messages(&errors), vec![
            "Fields 'id' conflict because 'name' and 'id' are different fields. Use different \
             aliases on the fields to fetch both if this was intentional.",
        ]);
        assert_eq!(locations(&errors[0]), vec![(1, 8), (1, 17)]);
    }

    #[test]
    fn differing_arguments() {
        let errors = check_rule(
            OverlappingFieldsCanBeMerged,
            "{ user(id: 1) { id } user(id: 2) { id } }",
        );
        assert_eq!(messages(&errors), vec![
            "Fields 'user' conflict because they have differing arguments. Use different \
             aliases on the fields to fetch both if this was intentional.",
        ]);
        assert_eq!(locations(&errors[0]), vec![(1, 3), (1, 22)]);
    }

    #[test]
    fn conflicting_subfields() {
        let errors = check_rule(OverlappingFieldsCanBeMerged, "{ me { x: name } me { x: id } }");
        assert_eq!(messages(&errors), vec![
            "Fields 'me' conflict because subfields 'x' conflict because 'name' and 'id' are \
             different fields. Use different aliases on the fields to fetch both if this was \
             intentional.",
        ]);
        assert_eq!(locations(&errors[0]), vec![(1, 3), (1, 18), (1, 8), (1, 23)]);
    }

    #[test]
    fn exclusive_parents_may_differ_in_name_but_not_shape() {
        let errors = check_rule(
            OverlappingFieldsCanBeMerged,
            "{ pet { ... on Dog { v: barkVolume } ... on Cat { v: name } } }",
        );
        assert_eq!(messages(&errors), vec![
            "Fields 'v' conflict because they return conflicting types 'Int' and 'String'. Use \
             different aliases on the fields to fetch both if this was intentional.",
        ]);

        let errors = check_rule(
            OverlappingFieldsCanBeMerged,
            "{ pet { ... on Dog { v: barkVolume } ... on Cat { v: meowVolume } } }",
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn identical_fields_merge() {
        let errors = check_rule(
            OverlappingFieldsCanBeMerged,
            "{ me { id name } me { id friends { name } } ...F }\nfragment F on Query { me { id } }",
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn conflicts_through_fragments() {
        let errors = check_rule(
            OverlappingFieldsCanBeMerged,
            "{ me { ...A ...B } }\nfragment A on User { x: id }\nfragment B on User { x: name }",
        );
        assert_eq!(errors.len(), 1);
        assert_eq!(locations(&errors[0]), vec![(2, 22), (3, 22)]);
    }
}
