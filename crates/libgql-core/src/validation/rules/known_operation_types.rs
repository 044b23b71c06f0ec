use crate::GError;
use crate::operation::OperationDefinition;
use crate::validation::RuleContext;
use crate::validation::ValidationRule;
use crate::validation::VisitControl;

/// The schema must define a root type for every kind of operation the
/// document contains.
#[derive(Clone, Copy, Debug, Default)]
pub struct KnownOperationTypes;
impl ValidationRule for KnownOperationTypes {
    fn name(&self) -> &'static str {
        "KnownOperationTypes"
    }

    fn enter_operation(
        &self,
        ctx: &RuleContext<'_>,
        operation: &OperationDefinition,
    ) -> VisitControl {
        let operation_kind = operation.operation_kind();
        if ctx.schema().root_type_name(operation_kind).is_none() {
            ctx.report(
                GError::new(format!("Schema does not define a {operation_kind} root type."))
                    .at(operation.location()),
            );
        }
        VisitControl::Skip
    }
}
