use crate::DirectiveAnnotation;
use crate::loc::SourceLocation;
use crate::operation::FieldSelection;
use crate::operation::SelectionSet;
use crate::types::NamedTypeRef;

/// One entry of a [`SelectionSet`].
#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    Field(FieldSelection),
    FragmentSpread(FragmentSpreadSelection),
    InlineFragment(InlineFragmentSelection),
}
impl Selection {
    pub fn directives(&self) -> &[DirectiveAnnotation] {
        match self {
            Self::Field(field) => field.directives(),
            Self::FragmentSpread(spread) => spread.directives(),
            Self::InlineFragment(inline) => inline.directives(),
        }
    }

    pub fn location(&self) -> &SourceLocation {
        match self {
            Self::Field(field) => field.location(),
            Self::FragmentSpread(spread) => spread.location(),
            Self::InlineFragment(inline) => inline.location(),
        }
    }
}

/// `...FragmentName`
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpreadSelection {
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) fragment_name: String,
    pub(crate) location: SourceLocation,
}
impl FragmentSpreadSelection {
    pub fn directives(&self) -> &[DirectiveAnnotation] {
        &self.directives
    }

    pub fn fragment_name(&self) -> &str {
        self.fragment_name.as_str()
    }

    /// The location of the `...`.
    pub fn location(&self) -> &SourceLocation {
        &self.location
    }
}

/// `... on Type { ... }`, or `... { ... }` without a type condition.
#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragmentSelection {
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) location: SourceLocation,
    pub(crate) selection_set: SelectionSet,
    pub(crate) type_condition: Option<NamedTypeRef>,
}
impl InlineFragmentSelection {
    pub fn directives(&self) -> &[DirectiveAnnotation] {
        &self.directives
    }

    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    pub fn type_condition(&self) -> Option<&NamedTypeRef> {
        self.type_condition.as_ref()
    }
}
