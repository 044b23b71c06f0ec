use crate::loc::SourceLocation;
use crate::operation::FieldSelection;
use crate::operation::Selection;

#[derive(Clone, Debug, PartialEq)]
pub struct SelectionSet {
    pub(crate) location: SourceLocation,
    pub(crate) selections: Vec<Selection>,
}
impl SelectionSet {
    /// The location of the opening `{`.
    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }

    /// The field selections written directly in this set, skipping
    /// fragments.
    pub fn fields(&self) -> impl Iterator<Item = &FieldSelection> {
        self.selections.iter().filter_map(|selection| match selection {
            Selection::Field(field) => Some(field),
            _ => None,
        })
    }
}
