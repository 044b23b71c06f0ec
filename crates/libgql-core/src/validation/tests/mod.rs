mod directive_rules_tests;
mod document_rules_tests;
mod field_rules_tests;
mod utils;
mod validator_tests;
