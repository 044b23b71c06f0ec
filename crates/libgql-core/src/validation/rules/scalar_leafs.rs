use crate::GError;
use crate::operation::FieldSelection;
use crate::validation::RuleContext;
use crate::validation::ValidationRule;
use crate::validation::VisitControl;

/// Leaf fields must not have a selection set; composite fields must.
///
/// https://spec.graphql.org/October2021/#sec-Leaf-Field-Selections
#[derive(Clone, Copy, Debug, Default)]
pub struct ScalarLeafs;
impl ValidationRule for ScalarLeafs {
    fn name(&self) -> &'static str {
        "ScalarLeafs"
    }

    fn enter_field(&self, ctx: &RuleContext<'_>, field: &FieldSelection) -> VisitControl {
        let Some(field_def) = ctx.type_info().field_definition() else {
            return VisitControl::Descend;
        };
        let field_type = field_def.field_type();
        let is_leaf = field_type.kind().is_leaf();
        match field.selection_set() {
            Some(_) if is_leaf => ctx.report(
                GError::new(format!(
                    "Field '{}' must not have a selection since type '{field_type}' has no \
                     subfields.",
                    field.name(),
                ))
                .at(field.location()),
            ),
            None if !is_leaf => ctx.report(
                GError::new(format!(
                    "Field '{}' of type '{field_type}' must have a selection of subfields. \
                     Did you mean '{} {{ ... }}'?",
                    field.name(),
                    field.name(),
                ))
                .at(field.location()),
            ),
            _ => (),
        }
        VisitControl::Descend
    }
}
