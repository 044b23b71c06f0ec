//! Behavior of the [`Validator`] as a whole: rule ordering, options,
//! custom rules and parallel runs.

use crate::GError;
use crate::operation::Document;
use crate::operation::FieldSelection;
use crate::validation::RuleContext;
use crate::validation::rules::standard_rules;
use crate::validation::tests::utils::locations;
use crate::validation::tests::utils::messages;
use crate::validation::tests::utils::parse_doc;
use crate::validation::tests::utils::setup_schema;
use crate::validation::tests::utils::validate;
use crate::validation::ValidationOptions;
use crate::validation::ValidationRule;
use crate::validation::Validator;
use crate::validation::VisitControl;

const MANY_ERRORS: &str = "query Q($unused: Int, $unused: Int) { nope me { id: name id } \
                           user(id: null) { ...Missing } status @nope }\n\
                           query Q { users(first: \"x\") { ...Cycle } }\n\
                           fragment Cycle on User { friends { ...Cycle } }\n\
                           fragment Unused on Post { title }";

fn sorted(errors: Vec<GError>) -> Vec<String> {
    let mut rendered: Vec<String> = errors.iter().map(|error| format!("{error:?}")).collect();
    rendered.sort();
    rendered
}

struct NoAliases;
impl ValidationRule for NoAliases {
    fn name(&self) -> &'static str {
        "NoAliases"
    }

    fn enter_field(&self, ctx: &RuleContext<'_>, field: &FieldSelection) -> VisitControl {
        if let Some(alias) = field.alias() {
            ctx.report(GError::new(format!("Alias '{alias}' is not allowed.")).at(field.location()));
        }
        VisitControl::Descend
    }
}

#[test]
fn standard_rule_list() {
    let names: Vec<_> = standard_rules().iter().map(|rule| rule.name()).collect();
    assert_eq!(names.len(), 26);
    assert_eq!(names.first(), Some(&"ExecutableDefinitions"));
    assert_eq!(names.last(), Some(&"KnownOperationTypes"));
}

#[test]
fn valid_document_has_no_errors() {
    let errors = validate(
        "query Q($id: ID!, $withFriends: Boolean = false) {\n\
           user(id: $id) {\n\
             ...UserFields\n\
             friends @include(if: $withFriends) { name }\n\
           }\n\
           search(term: \"a\") { __typename ... on Post { title author { name } } }\n\
         }\n\
         fragment UserFields on User { id name nickname }",
    );
    assert_eq!(errors, vec![]);
}

#[test]
fn errors_are_grouped_by_rule_order() {
    let errors = validate("{ nope status { x } }");
    assert_eq!(messages(&errors), vec![
        "Field 'status' must not have a selection since type 'Status' has no subfields.",
        "Cannot select nonexistent field 'nope' on type 'Query'.",
    ]);
}

#[test]
fn unknown_directives_reported_at_each_name() {
    let source = "type Query { field: String }\n\
                  directive @foo on FIELD\n\
                  { field @foo @bar @baz }";
    let doc = parse_doc(source);
    let schema = doc.schema().expect("document carries a schema").clone();
    let errors = Validator::new().validate(&doc, &schema);
    assert_eq!(messages(&errors), vec![
        "Unknown directive '@bar'.",
        "Unknown directive '@baz'.",
    ]);
    assert_eq!(locations(&errors[0]), vec![(3, 15)]);
    assert_eq!(locations(&errors[1]), vec![(3, 20)]);
}

#[test]
fn repeated_runs_are_identical() {
    let doc = parse_doc(MANY_ERRORS);
    let schema = setup_schema();
    let validator = Validator::new();
    let first = validator.validate(&doc, &schema);
    assert!(first.len() > 5);
    assert_eq!(first, validator.validate(&doc, &schema));
}

#[test]
fn permuted_rules_report_the_same_set() {
    let doc = parse_doc(MANY_ERRORS);
    let schema = setup_schema();
    let forward = Validator::new().validate(&doc, &schema);

    let mut reversed_rules = standard_rules();
    reversed_rules.reverse();
    let reversed = Validator::new().with_rules(reversed_rules).validate(&doc, &schema);

    assert_ne!(forward, reversed);
    assert_eq!(sorted(forward), sorted(reversed));
}

#[test]
fn parallel_validation_matches_sequential() {
    let doc = parse_doc(MANY_ERRORS);
    let schema = setup_schema();
    let validator = Validator::new();
    assert_eq!(
        validator.validate_parallel(&doc, &schema),
        validator.validate(&doc, &schema),
    );
}

#[test]
fn max_errors_truncates_in_order() {
    let doc = parse_doc("{ a b c }");
    let schema = setup_schema();
    let options = ValidationOptions {
        max_errors: Some(2),
        ..ValidationOptions::default()
    };
    let errors = Validator::with_options(options).validate(&doc, &schema);
    assert_eq!(messages(&errors), vec![
        "Cannot select nonexistent field 'a' on type 'Query'.",
        "Cannot select nonexistent field 'b' on type 'Query'.",
    ]);
}

#[test]
fn custom_rules_run_after_standard_rules() {
    let doc = parse_doc("{ nope me { handle: name } }");
    let schema = setup_schema();
    let mut rules = standard_rules();
    rules.push(Box::new(NoAliases));
    let errors = Validator::new().with_rules(rules).validate(&doc, &schema);
    assert_eq!(messages(&errors), vec![
        "Cannot select nonexistent field 'nope' on type 'Query'.",
        "Alias 'handle' is not allowed.",
    ]);
    assert_eq!(locations(&errors[1]), vec![(1, 13)]);
}

#[test]
fn validate_shorthand_uses_standard_rules() {
    let doc: Document = parse_doc("{ foo }");
    let errors = crate::validate(&doc, &setup_schema());
    assert_eq!(errors.len(), 1);
    assert_eq!(locations(&errors[0]), vec![(1, 3)]);
}
