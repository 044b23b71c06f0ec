use crate::GError;
use crate::operation::Document;
use crate::schema::Schema;
use crate::validation::rules;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use crate::validation::walker::IndexedRule;
use crate::validation::walker::walk_document;
use rayon::prelude::*;

/// Knobs for a [`Validator`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ValidationOptions {
    /// Stop reporting after this many errors. The list is truncated after
    /// all rules run, so the errors that are reported do not depend on the
    /// limit.
    pub max_errors: Option<usize>,

    /// Whether type-system definitions may appear in an executable
    /// document (they are used to build the document's embedded schema).
    /// When `false`, `ExecutableDefinitions` reports each of them.
    pub allow_type_system_definitions: bool,
}
impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            max_errors: None,
            allow_type_system_definitions: true,
        }
    }
}

/// Checks documents against a schema with an ordered list of
/// [`ValidationRule`]s.
///
/// The validator never stops early: every rule runs over the whole
/// document, and the errors come back grouped by rule in rule order.
///
/// ```rust
/// use libgql_core::operation::Document;
/// use libgql_core::schema::Schema;
/// use libgql_core::validation::Validator;
///
/// let schema = Schema::parse("type Query { id: ID! }").unwrap();
/// let doc = Document::parse("{ foo }", None).unwrap();
/// let errors = Validator::new().validate(&doc, &schema);
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors[0].message, "Cannot select nonexistent field 'foo' on type 'Query'.");
/// ```
pub struct Validator {
    options: ValidationOptions,
    rules: Vec<Box<dyn ValidationRule>>,
}
impl Validator {
    /// A validator running every standard rule with default options.
    pub fn new() -> Self {
        Self::with_options(ValidationOptions::default())
    }

    pub fn with_options(options: ValidationOptions) -> Self {
        Self {
            options,
            rules: rules::standard_rules(),
        }
    }

    /// Replaces the rule list. Errors are ordered by position in `rules`.
    pub fn with_rules(mut self, rules: Vec<Box<dyn ValidationRule>>) -> Self {
        self.rules = rules;
        self
    }

    pub fn options(&self) -> &ValidationOptions {
        &self.options
    }

    pub fn rules(&self) -> &[Box<dyn ValidationRule>] {
        &self.rules
    }

    /// Runs every rule over `document` in one combined traversal.
    pub fn validate(&self, document: &Document, schema: &Schema) -> Vec<GError> {
        let context = ValidationContext::new(document, schema, &self.options);
        walk_document(&context, &self.indexed_rules());
        self.finish(context)
    }

    /// Runs each rule in its own traversal on the rayon thread pool. The
    /// result is identical to [`Validator::validate()`].
    pub fn validate_parallel(&self, document: &Document, schema: &Schema) -> Vec<GError> {
        let context = ValidationContext::new(document, schema, &self.options);
        self.indexed_rules()
            .par_iter()
            .for_each(|indexed_rule| walk_document(&context, std::slice::from_ref(indexed_rule)));
        self.finish(context)
    }

    fn indexed_rules(&self) -> Vec<IndexedRule<'_>> {
        self.rules
            .iter()
            .enumerate()
            .map(|(rule_index, rule)| (rule_index, rule.as_ref()))
            .collect()
    }

    fn finish(&self, context: ValidationContext<'_>) -> Vec<GError> {
        let indexed_errors = context.into_errors();
        for (rule_index, rule) in self.rules.iter().enumerate() {
            let count = indexed_errors.iter().filter(|(index, _)| *index == rule_index).count();
            if count > 0 {
                tracing::trace!(rule = rule.name(), errors = count, "rule reported errors");
            }
        }
        let mut errors: Vec<GError> = indexed_errors.into_iter().map(|(_, error)| error).collect();
        tracing::debug!(
            rules = self.rules.len(),
            errors = errors.len(),
            "validated document",
        );
        if let Some(max_errors) = self.options.max_errors {
            errors.truncate(max_errors);
        }
        errors
    }
}
impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}
impl std::fmt::Debug for Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator")
            .field("options", &self.options)
            .field("rules", &self.rules.iter().map(|rule| rule.name()).collect::<Vec<_>>())
            .finish()
    }
}
