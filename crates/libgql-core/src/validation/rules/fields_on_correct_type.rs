use crate::GError;
use crate::operation::FieldSelection;
use crate::validation::RuleContext;
use crate::validation::ValidationRule;
use crate::validation::VisitControl;

/// https://spec.graphql.org/October2021/#sec-Field-Selections
#[derive(Clone, Copy, Debug, Default)]
pub struct FieldsOnCorrectType;
impl ValidationRule for FieldsOnCorrectType {
    fn name(&self) -> &'static str {
        "FieldsOnCorrectType"
    }

    fn enter_field(&self, ctx: &RuleContext<'_>, field: &FieldSelection) -> VisitControl {
        let type_info = ctx.type_info();
        let Some(parent_type) = type_info.parent_type() else {
            return VisitControl::Descend;
        };
        if type_info.field_definition().is_none() {
            ctx.report(
                GError::new(format!(
                    "Cannot select nonexistent field '{}' on type '{}'.",
                    field.name(),
                    parent_type.name(),
                ))
                .at(field.location()),
            );
        }
        VisitControl::Descend
    }
}
