use crate::DirectiveAnnotation;
use crate::operation::FieldSelection;
use crate::operation::FragmentDefinition;
use crate::operation::OperationDefinition;
use crate::operation::OperationKind;
use crate::operation::Selection;
use crate::operation::SelectionSet;
use crate::types::GraphQLType;
use crate::validation::RuleContext;
use crate::validation::TypeInfo;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use crate::validation::VisitControl;
use libgql_parser::ast::DirectiveLocationKind;

/// A rule paired with its index in the validator's rule list.
pub(crate) type IndexedRule<'r> = (usize, &'r dyn ValidationRule);

/// Visits every operation, then every fragment definition, of the
/// context's document, calling each rule's hooks in rule order at every
/// node.
pub(crate) fn walk_document(validation: &ValidationContext<'_>, rules: &[IndexedRule<'_>]) {
    let walker = Walker { validation };
    let mut type_info = TypeInfo::new(validation.schema());
    walker.each(rules, &type_info, |rule, ctx| rule.enter_document(ctx));
    for operation in validation.document().operations() {
        walker.walk_operation(operation, rules, &mut type_info);
    }
    for fragment in validation.document().fragments().values() {
        walker.walk_fragment(fragment, rules, &mut type_info);
    }
}

struct Walker<'v, 'a> {
    validation: &'v ValidationContext<'a>,
}
impl<'a> Walker<'_, 'a> {
    fn each(
        &self,
        rules: &[IndexedRule<'_>],
        type_info: &TypeInfo<'_>,
        hook: impl Fn(&dyn ValidationRule, &RuleContext<'_>),
    ) {
        for (rule_index, rule) in rules {
            hook(*rule, &RuleContext::new(self.validation, *rule_index, type_info));
        }
    }

    /// The rules whose `enter_*` hook asked to descend.
    fn filter<'r>(
        &self,
        rules: &[IndexedRule<'r>],
        type_info: &TypeInfo<'_>,
        hook: impl Fn(&dyn ValidationRule, &RuleContext<'_>) -> VisitControl,
    ) -> Vec<IndexedRule<'r>> {
        rules
            .iter()
            .filter(|(rule_index, rule)| {
                let ctx = RuleContext::new(self.validation, *rule_index, type_info);
                hook(*rule, &ctx) == VisitControl::Descend
            })
            .copied()
            .collect()
    }

    fn walk_operation(
        &self,
        operation: &'a OperationDefinition,
        rules: &[IndexedRule<'_>],
        type_info: &mut TypeInfo<'a>,
    ) {
        let active = self.filter(rules, type_info, |rule, ctx| {
            rule.enter_operation(ctx, operation)
        });
        if active.is_empty() {
            return;
        }

        for var_def in operation.variable_definitions() {
            self.each(&active, type_info, |rule, ctx| {
                rule.enter_variable_definition(ctx, var_def)
            });
            self.walk_directives(
                var_def.directives(),
                DirectiveLocationKind::VariableDefinition,
                &active,
                type_info,
            );
        }

        let directive_location = match operation.operation_kind() {
            OperationKind::Mutation => DirectiveLocationKind::Mutation,
            OperationKind::Query => DirectiveLocationKind::Query,
            OperationKind::Subscription => DirectiveLocationKind::Subscription,
        };
        self.walk_directives(operation.directives(), directive_location, &active, type_info);

        let schema = self.validation.schema();
        let root_type = schema
            .root_type_name(operation.operation_kind())
            .and_then(|type_name| schema.type_named(type_name));
        type_info.push_parent_type(root_type);
        self.walk_selection_set(operation.selection_set(), &active, type_info);
        type_info.pop_parent_type();

        self.each(&active, type_info, |rule, ctx| rule.exit_operation(ctx, operation));
    }

    fn walk_fragment(
        &self,
        fragment: &'a FragmentDefinition,
        rules: &[IndexedRule<'_>],
        type_info: &mut TypeInfo<'a>,
    ) {
        let active = self.filter(rules, type_info, |rule, ctx| {
            rule.enter_fragment_definition(ctx, fragment)
        });
        if active.is_empty() {
            return;
        }

        self.walk_directives(
            fragment.directives(),
            DirectiveLocationKind::FragmentDefinition,
            &active,
            type_info,
        );

        type_info.push_parent_type(self.composite_type_named(fragment.type_condition().name()));
        self.walk_selection_set(fragment.selection_set(), &active, type_info);
        type_info.pop_parent_type();
    }

    fn walk_selection_set(
        &self,
        selection_set: &'a SelectionSet,
        rules: &[IndexedRule<'_>],
        type_info: &mut TypeInfo<'a>,
    ) {
        let active = self.filter(rules, type_info, |rule, ctx| {
            rule.enter_selection_set(ctx, selection_set)
        });
        if active.is_empty() {
            return;
        }

        for selection in selection_set.selections() {
            match selection {
                Selection::Field(field) => self.walk_field(field, &active, type_info),

                Selection::FragmentSpread(spread) => {
                    self.each(&active, type_info, |rule, ctx| {
                        rule.enter_fragment_spread(ctx, spread)
                    });
                    self.walk_directives(
                        spread.directives(),
                        DirectiveLocationKind::FragmentSpread,
                        &active,
                        type_info,
                    );
                },

                Selection::InlineFragment(inline) => {
                    let inline_active = self.filter(&active, type_info, |rule, ctx| {
                        rule.enter_inline_fragment(ctx, inline)
                    });
                    if inline_active.is_empty() {
                        continue;
                    }
                    self.walk_directives(
                        inline.directives(),
                        DirectiveLocationKind::InlineFragment,
                        &inline_active,
                        type_info,
                    );
                    let parent_type = match inline.type_condition() {
                        Some(type_condition) => self.composite_type_named(type_condition.name()),
                        None => type_info.parent_type(),
                    };
                    type_info.push_parent_type(parent_type);
                    self.walk_selection_set(inline.selection_set(), &inline_active, type_info);
                    type_info.pop_parent_type();
                },
            }
        }
    }

    fn walk_field(
        &self,
        field: &'a FieldSelection,
        rules: &[IndexedRule<'_>],
        type_info: &mut TypeInfo<'a>,
    ) {
        let schema = self.validation.schema();
        let field_def = type_info
            .parent_type()
            .and_then(|parent_type| schema.field_definition(parent_type.name(), field.name()));
        type_info.push_field(field_def);

        let active = self.filter(rules, type_info, |rule, ctx| rule.enter_field(ctx, field));
        if !active.is_empty() {
            for argument in field.arguments() {
                type_info.set_argument(
                    field_def.and_then(|field_def| field_def.argument(argument.name())),
                );
                self.each(&active, type_info, |rule, ctx| rule.enter_argument(ctx, argument));
            }
            type_info.set_argument(None);

            self.walk_directives(
                field.directives(),
                DirectiveLocationKind::Field,
                &active,
                type_info,
            );

            if let Some(selection_set) = field.selection_set() {
                let field_type = field_def.and_then(|field_def| {
                    self.composite_type_named(field_def.field_type().named_type().name())
                });
                type_info.push_parent_type(field_type);
                self.walk_selection_set(selection_set, &active, type_info);
                type_info.pop_parent_type();
            }

            self.each(&active, type_info, |rule, ctx| rule.exit_field(ctx, field));
        }

        type_info.pop_field();
    }

    /// Selection sets are only typed by composite types.
    fn composite_type_named(&self, name: &str) -> Option<&'a GraphQLType> {
        self.validation
            .schema()
            .type_named(name)
            .filter(|type_| type_.kind().is_composite())
    }

    fn walk_directives(
        &self,
        directives: &'a [DirectiveAnnotation],
        location: DirectiveLocationKind,
        rules: &[IndexedRule<'_>],
        type_info: &mut TypeInfo<'a>,
    ) {
        for directive in directives {
            self.each(rules, type_info, |rule, ctx| {
                rule.enter_directive(ctx, directive, location, directives)
            });
            type_info.set_directive(Some(directive));
            let directive_def = type_info.directive_definition();
            for argument in directive.arguments() {
                type_info.set_argument(
                    directive_def.and_then(|directive_def| directive_def.argument(argument.name())),
                );
                self.each(rules, type_info, |rule, ctx| rule.enter_argument(ctx, argument));
            }
            type_info.set_argument(None);
            type_info.set_directive(None);
        }
    }
}
