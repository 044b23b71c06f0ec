//! Static validation of executable documents against a schema.
//!
//! [`Validator`] runs an ordered list of [`ValidationRule`]s (by default
//! the 26 rules in [`rules`]) over a [`Document`] and returns every error
//! they report, grouped by rule.
//!
//! https://spec.graphql.org/October2021/#sec-Validation

pub(crate) mod field_merging;
mod literal_values;
pub mod rules;
mod type_info;
mod usages;
mod validation_context;
mod validation_rule;
mod validator;
mod walker;

pub use type_info::TypeInfo;
pub use validation_context::RuleContext;
pub use validation_context::ValidationContext;
pub use validation_rule::ValidationRule;
pub use validation_rule::VisitControl;
pub use validator::ValidationOptions;
pub use validator::Validator;

use crate::GError;
use crate::operation::Document;
use crate::schema::Schema;

/// Validates `document` against `schema` with every standard rule and
/// default options.
pub fn validate(document: &Document, schema: &Schema) -> Vec<GError> {
    Validator::new().validate(document, schema)
}

#[cfg(test)]
mod tests;
