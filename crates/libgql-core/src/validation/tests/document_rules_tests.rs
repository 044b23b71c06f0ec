//! Rules about the document as a whole: definitions and operations.

use crate::schema::Schema;
use crate::validation::rules::ExecutableDefinitions;
use crate::validation::rules::KnownOperationTypes;
use crate::validation::rules::LoneAnonymousOperation;
use crate::validation::rules::SingleFieldSubscriptions;
use crate::validation::rules::UniqueOperationNames;
use crate::validation::tests::utils::check_rule;
use crate::validation::tests::utils::check_rule_with_options;
use crate::validation::tests::utils::locations;
use crate::validation::tests::utils::messages;
use crate::validation::tests::utils::parse_doc;
use crate::validation::ValidationOptions;
use crate::validation::Validator;

mod executable_definitions {
    use super::*;

    const MIXED_SOURCE: &str =
        "{ me { id } }\ntype Query { a: Int }\ndirective @extra on FIELD";

    #[test]
    fn type_system_definitions_are_reported_when_disallowed() {
        let options = ValidationOptions {
            allow_type_system_definitions: false,
            ..ValidationOptions::default()
        };
        let errors = check_rule_with_options(ExecutableDefinitions, options, MIXED_SOURCE);
        assert_eq!(messages(&errors), vec![
            "The 'Query' definition is not executable.",
            "The '@extra' definition is not executable.",
        ]);
        assert_eq!(locations(&errors[0]), vec![(2, 1)]);
        assert_eq!(locations(&errors[1]), vec![(3, 1)]);
    }

    #[test]
    fn type_system_definitions_are_allowed_by_default() {
        assert!(check_rule(ExecutableDefinitions, MIXED_SOURCE).is_empty());
    }

    #[test]
    fn schema_definitions_have_no_name() {
        let options = ValidationOptions {
            allow_type_system_definitions: false,
            ..ValidationOptions::default()
        };
        let errors = check_rule_with_options(
            ExecutableDefinitions,
            options,
            "{ me { id } }\nschema { query: Q }\ntype Q { a: Int }",
        );
        assert_eq!(messages(&errors), vec![
            "The schema definition is not executable.",
            "The 'Q' definition is not executable.",
        ]);
    }
}

// =========================================================

mod operation_names {
    use super::*;

    #[test]
    fn duplicate_operation_names() {
        let errors = check_rule(
            UniqueOperationNames,
            "query A { me { id } }\nquery A { status }",
        );
        assert_eq!(messages(&errors), vec!["There can be only one operation named 'A'."]);
        assert_eq!(locations(&errors[0]), vec![(1, 1), (2, 1)]);
    }

    #[test]
    fn each_duplicate_is_reported_against_the_first() {
        let errors = check_rule(
            UniqueOperationNames,
            "query A { status }\nquery A { status }\nquery A { status }",
        );
        assert_eq!(errors.len(), 2);
        assert_eq!(locations(&errors[0]), vec![(1, 1), (2, 1)]);
        assert_eq!(locations(&errors[1]), vec![(1, 1), (3, 1)]);
    }

    #[test]
    fn distinct_operation_names() {
        let errors = check_rule(
            UniqueOperationNames,
            "query A { status }\nquery B { status }\nmutation C { rename(name: \"x\") { id } }",
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn anonymous_operation_with_others() {
        let errors = check_rule(
            LoneAnonymousOperation,
            "{ me { id } }\nquery B { status }",
        );
        assert_eq!(messages(&errors), vec![
            "This anonymous operation must be the only defined operation.",
        ]);
        assert_eq!(locations(&errors[0]), vec![(1, 1)]);
    }

    #[test]
    fn lone_anonymous_operation() {
        assert!(check_rule(LoneAnonymousOperation, "{ me { id } }").is_empty());
    }
}

// =========================================================

mod subscriptions {
    use super::*;

    #[test]
    fn more_than_one_root_field() {
        let errors = check_rule(
            SingleFieldSubscriptions,
            "subscription S { userAdded { id } postAdded { id } }",
        );
        assert_eq!(messages(&errors), vec![
            "Subscription 'S' must select only one top level field.",
        ]);
        assert_eq!(locations(&errors[0]), vec![(1, 35)]);
    }

    #[test]
    fn root_fields_gathered_through_fragments() {
        let errors = check_rule(
            SingleFieldSubscriptions,
            "subscription S { ...F }\nfragment F on Subscription { userAdded { id } postAdded { id } }",
        );
        assert_eq!(errors.len(), 1);
        assert_eq!(locations(&errors[0]), vec![(2, 47)]);
    }

    #[test]
    fn introspection_root_field() {
        let errors = check_rule(SingleFieldSubscriptions, "subscription { __typename }");
        assert_eq!(messages(&errors), vec![
            "Anonymous Subscription must not select an introspection top level field.",
        ]);
        assert_eq!(locations(&errors[0]), vec![(1, 16)]);
    }

    #[test]
    fn single_root_field() {
        let errors = check_rule(
            SingleFieldSubscriptions,
            "subscription S { userAdded { id name } }",
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn queries_may_select_many_root_fields() {
        assert!(check_rule(SingleFieldSubscriptions, "{ me { id } status }").is_empty());
    }
}

// =========================================================

mod operation_types {
    use super::*;

    #[test]
    fn operation_without_root_type() {
        let schema = Schema::parse("type Query { a: Int }").expect("schema builds");
        let doc = parse_doc("mutation M { a }\nsubscription S { a }");
        let errors = Validator::new()
            .with_rules(vec![Box::new(KnownOperationTypes)])
            .validate(&doc, &schema);
        assert_eq!(messages(&errors), vec![
            "Schema does not define a mutation root type.",
            "Schema does not define a subscription root type.",
        ]);
        assert_eq!(locations(&errors[0]), vec![(1, 1)]);
        assert_eq!(locations(&errors[1]), vec![(2, 1)]);
    }

    #[test]
    fn every_root_type_defined() {
        let errors = check_rule(
            KnownOperationTypes,
            "{ status }\nmutation M { rename(name: \"x\") { id } }\nsubscription S { userAdded { id } }",
        );
        assert!(errors.is_empty());
    }
}
