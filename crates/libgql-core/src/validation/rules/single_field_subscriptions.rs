use crate::GError;
use crate::operation::OperationDefinition;
use crate::operation::OperationKind;
use crate::validation::field_merging::FieldMerger;
use crate::validation::RuleContext;
use crate::validation::ValidationRule;
use crate::validation::VisitControl;

/// https://spec.graphql.org/October2021/#sec-Single-root-field
#[derive(Clone, Copy, Debug, Default)]
pub struct SingleFieldSubscriptions;
impl ValidationRule for SingleFieldSubscriptions {
    fn name(&self) -> &'static str {
        "SingleFieldSubscriptions"
    }

    fn enter_operation(
        &self,
        ctx: &RuleContext<'_>,
        operation: &OperationDefinition,
    ) -> VisitControl {
        if operation.operation_kind() != OperationKind::Subscription {
            return VisitControl::Skip;
        }
        let subject = match operation.name() {
            Some(name) => format!("Subscription '{name}'"),
            None => "Anonymous Subscription".to_string(),
        };
        let schema = ctx.schema();
        let root_type = schema
            .subscription_type_name()
            .and_then(|type_name| schema.type_named(type_name));
        let fields = FieldMerger::new(schema, ctx.document())
            .collect_fields(root_type, operation.selection_set());

        if fields.len() > 1 {
            let mut error = GError::new(format!("{subject} must select only one top level field."));
            for extra_fields in fields.values().skip(1) {
                for extra in extra_fields {
                    error = error.at(extra.field.location());
                }
            }
            ctx.report(error);
        }

        for field in fields.values().flatten() {
            if field.field.name().starts_with("__") {
                ctx.report(
                    GError::new(format!(
                        "{subject} must not select an introspection top level field.",
                    ))
                    .at(field.field.location()),
                );
            }
        }
        VisitControl::Skip
    }
}
