use crate::Argument;
use crate::DirectiveAnnotation;
use crate::operation::FieldSelection;
use crate::operation::FragmentDefinition;
use crate::operation::FragmentSpreadSelection;
use crate::operation::InlineFragmentSelection;
use crate::operation::OperationDefinition;
use crate::operation::SelectionSet;
use crate::operation::VariableDefinition;
use crate::validation::RuleContext;
use libgql_parser::ast::DirectiveLocationKind;

/// Whether the walker should visit a node's children for this rule.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VisitControl {
    Descend,
    Skip,
}

/// One validation rule.
///
/// Rules are visitors over a [`Document`](crate::operation::Document): the
/// walker calls each hook as it reaches the corresponding node, parents
/// before children, with [`RuleContext::type_info()`] describing the schema
/// types in scope. Every hook defaults to doing nothing. Rules inspect the
/// document but never change it, and keep no state of their own; anything
/// they find goes to [`RuleContext::report()`].
#[allow(unused_variables)]
pub trait ValidationRule: Send + Sync {
    /// A short name for logging, e.g. `"FieldsOnCorrectType"`.
    fn name(&self) -> &'static str;

    fn enter_document(&self, ctx: &RuleContext<'_>) {}

    fn enter_operation(
        &self,
        ctx: &RuleContext<'_>,
        operation: &OperationDefinition,
    ) -> VisitControl {
        VisitControl::Descend
    }

    fn exit_operation(&self, ctx: &RuleContext<'_>, operation: &OperationDefinition) {}

    fn enter_fragment_definition(
        &self,
        ctx: &RuleContext<'_>,
        fragment: &FragmentDefinition,
    ) -> VisitControl {
        VisitControl::Descend
    }

    fn enter_variable_definition(&self, ctx: &RuleContext<'_>, var_def: &VariableDefinition) {}

    fn enter_selection_set(
        &self,
        ctx: &RuleContext<'_>,
        selection_set: &SelectionSet,
    ) -> VisitControl {
        VisitControl::Descend
    }

    fn enter_field(&self, ctx: &RuleContext<'_>, field: &FieldSelection) -> VisitControl {
        VisitControl::Descend
    }

    fn exit_field(&self, ctx: &RuleContext<'_>, field: &FieldSelection) {}

    fn enter_fragment_spread(&self, ctx: &RuleContext<'_>, spread: &FragmentSpreadSelection) {}

    fn enter_inline_fragment(
        &self,
        ctx: &RuleContext<'_>,
        inline: &InlineFragmentSelection,
    ) -> VisitControl {
        VisitControl::Descend
    }

    /// `siblings` are all directives applied to the same node, `directive`
    /// among them.
    fn enter_directive(
        &self,
        ctx: &RuleContext<'_>,
        directive: &DirectiveAnnotation,
        location: DirectiveLocationKind,
        siblings: &[DirectiveAnnotation],
    ) {}

    /// Called for the arguments of fields and of directives.
    fn enter_argument(&self, ctx: &RuleContext<'_>, argument: &Argument) {}
}
