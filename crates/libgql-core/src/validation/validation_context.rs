use crate::GError;
use crate::operation::Document;
use crate::schema::Schema;
use crate::validation::TypeInfo;
use crate::validation::ValidationOptions;
use std::sync::Mutex;
use std::sync::PoisonError;

/// The state shared by every rule during one validation: the document,
/// the schema, and the append-only error sink.
#[derive(Debug)]
pub struct ValidationContext<'a> {
    document: &'a Document,
    errors: Mutex<Vec<(usize, GError)>>,
    options: &'a ValidationOptions,
    schema: &'a Schema,
}
impl<'a> ValidationContext<'a> {
    pub(crate) fn new(
        document: &'a Document,
        schema: &'a Schema,
        options: &'a ValidationOptions,
    ) -> Self {
        Self {
            document,
            errors: Mutex::new(vec![]),
            options,
            schema,
        }
    }

    pub fn document(&self) -> &'a Document {
        self.document
    }

    pub fn options(&self) -> &'a ValidationOptions {
        self.options
    }

    pub fn schema(&self) -> &'a Schema {
        self.schema
    }

    pub(crate) fn report(&self, rule_index: usize, error: GError) {
        self.errors
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((rule_index, error));
    }

    /// Every reported error with the index of the rule that reported it,
    /// ordered by rule index and then by report order within that rule.
    pub(crate) fn into_errors(self) -> Vec<(usize, GError)> {
        let mut errors = self.errors.into_inner().unwrap_or_else(PoisonError::into_inner);
        errors.sort_by_key(|(rule_index, _)| *rule_index);
        errors
    }
}

/// What a [`ValidationRule`](crate::validation::ValidationRule) hook sees:
/// the shared [`ValidationContext`] plus the walker's current [`TypeInfo`].
#[derive(Clone, Copy, Debug)]
pub struct RuleContext<'a> {
    rule_index: usize,
    type_info: &'a TypeInfo<'a>,
    validation: &'a ValidationContext<'a>,
}
impl<'a> RuleContext<'a> {
    pub(crate) fn new(
        validation: &'a ValidationContext<'a>,
        rule_index: usize,
        type_info: &'a TypeInfo<'a>,
    ) -> Self {
        Self {
            rule_index,
            type_info,
            validation,
        }
    }

    pub fn document(&self) -> &'a Document {
        self.validation.document()
    }

    pub fn options(&self) -> &'a ValidationOptions {
        self.validation.options()
    }

    pub fn report(&self, error: GError) {
        self.validation.report(self.rule_index, error);
    }

    pub fn schema(&self) -> &'a Schema {
        self.validation.schema()
    }

    pub fn type_info(&self) -> &'a TypeInfo<'a> {
        self.type_info
    }
}
