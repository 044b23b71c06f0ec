use crate::AstConversionError;
use crate::loc::SourceLocation;
use crate::operation::OperationKind;
use crate::types::GraphQLTypeKind;
use libgql_parser::GraphQLParseError;
use thiserror::Error;

/// Everything that can go wrong turning SDL into a [`Schema`](crate::schema::Schema).
///
/// These are configuration errors: a schema either builds completely or not
/// at all.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error("Error parsing schema document: {0}")]
    Parse(#[from] GraphQLParseError),

    #[error("Invalid literal in schema document: {0}")]
    InvalidLiteral(#[from] AstConversionError),

    #[error("`{type_ref}` is already non-null and cannot be wrapped as non-null again")]
    DoubleNonNull {
        location: SourceLocation,
        type_ref: String,
    },

    #[error("Argument `{argument_name}` is defined more than once on `{owner}`")]
    DuplicateArgumentDefinition {
        argument_name: String,
        owner: String,
        location: SourceLocation,
    },

    #[error("Directive `@{directive_name}` is defined more than once")]
    DuplicateDirectiveDefinition {
        directive_name: String,
        first_def_location: SourceLocation,
        second_def_location: SourceLocation,
    },

    #[error("Enum value `{value_name}` is defined more than once on `{type_name}`")]
    DuplicateEnumValue {
        type_name: String,
        value_name: String,
        location: SourceLocation,
    },

    #[error("Field `{field_name}` is defined more than once on `{type_name}`")]
    DuplicateFieldDefinition {
        type_name: String,
        field_name: String,
        location: SourceLocation,
    },

    #[error("`{type_name}` declares that it implements `{interface_name}` more than once")]
    DuplicateInterfaceImplementation {
        type_name: String,
        interface_name: String,
        location: SourceLocation,
    },

    #[error("The {operation_kind} root operation type is declared more than once")]
    DuplicateRootOperationType {
        operation_kind: OperationKind,
        location: SourceLocation,
    },

    #[error("A schema may only contain one `schema` definition")]
    DuplicateSchemaDefinition {
        first_def_location: SourceLocation,
        second_def_location: SourceLocation,
    },

    #[error("Type `{type_name}` is defined more than once")]
    DuplicateTypeDefinition {
        type_name: String,
        first_def_location: SourceLocation,
        second_def_location: SourceLocation,
    },

    #[error("Union `{union_name}` lists `{member_name}` as a member more than once")]
    DuplicateUnionMember {
        union_name: String,
        member_name: String,
        location: SourceLocation,
    },

    #[error("Cannot extend `{type_name}` because no such type is defined")]
    ExtensionOfUndefinedType {
        type_name: String,
        extension_location: SourceLocation,
    },

    #[error(
        "`{type_name}` is defined as {defined_kind:?} but extended as \
        {extension_kind:?}"
    )]
    ExtensionKindMismatch {
        type_name: String,
        defined_kind: GraphQLTypeKind,
        extension_kind: GraphQLTypeKind,
        extension_location: SourceLocation,
    },

    #[error("`{type_name}` may not implement itself")]
    ImplementsSelf {
        type_name: String,
        location: SourceLocation,
    },

    #[error(
        "`{type_name}.{field_name}` does not accept the `{argument_name}` \
        argument required by `{interface_name}.{field_name}`"
    )]
    InterfaceArgumentMissing {
        type_name: String,
        interface_name: String,
        field_name: String,
        argument_name: String,
        location: SourceLocation,
    },

    #[error(
        "`{type_name}.{field_name}({argument_name}:)` is typed `{actual_type}` \
        but `{interface_name}.{field_name}({argument_name}:)` is typed \
        `{expected_type}`"
    )]
    InterfaceArgumentTypeMismatch {
        type_name: String,
        interface_name: String,
        field_name: String,
        argument_name: String,
        expected_type: String,
        actual_type: String,
        location: SourceLocation,
    },

    #[error(
        "`{type_name}` implements `{interface_name}` but does not define \
        its `{field_name}` field"
    )]
    InterfaceFieldNotImplemented {
        type_name: String,
        interface_name: String,
        field_name: String,
        location: SourceLocation,
    },

    #[error(
        "`{type_name}.{field_name}` is typed `{actual_type}`, which is not a \
        subtype of `{expected_type}` as declared by `{interface_name}`"
    )]
    InterfaceFieldTypeMismatch {
        type_name: String,
        interface_name: String,
        field_name: String,
        expected_type: String,
        actual_type: String,
        location: SourceLocation,
    },

    #[error(
        "`{type_name}` implements `{interface_name}`, so it must also \
        implement `{missing_interface_name}`"
    )]
    MissingTransitiveInterface {
        type_name: String,
        interface_name: String,
        missing_interface_name: String,
        location: SourceLocation,
    },

    #[error("`{owner}({argument_name}:)` must be an input type but is typed `{arg_type}`")]
    NonInputArgumentType {
        owner: String,
        argument_name: String,
        arg_type: String,
        location: SourceLocation,
    },

    #[error("`{type_name}` implements `{implemented_name}`, which is not an interface")]
    NonInterfaceImplemented {
        type_name: String,
        implemented_name: String,
        location: SourceLocation,
    },

    #[error("The {operation_kind} root operation type `{type_name}` must be an object type")]
    NonObjectRootType {
        operation_kind: OperationKind,
        type_name: String,
        location: SourceLocation,
    },

    #[error("Union `{union_name}` member `{member_name}` must be an object type")]
    NonObjectUnionMember {
        union_name: String,
        member_name: String,
        location: SourceLocation,
    },

    #[error("`{type_name}.{field_name}` must be an output type but is typed `{field_type}`")]
    NonOutputFieldType {
        type_name: String,
        field_name: String,
        field_type: String,
        location: SourceLocation,
    },

    #[error("The schema does not define a query root operation type")]
    NoQueryType,

    #[error("Built-in directive `@{directive_name}` may not be redefined")]
    RedefinedBuiltinDirective {
        directive_name: String,
        location: SourceLocation,
    },

    #[error("Built-in type `{type_name}` may not be redefined")]
    RedefinedBuiltinType {
        type_name: String,
        location: SourceLocation,
    },

    #[error(
        "`{type_name}.{field_name}({argument_name}:)` is required, but \
        `{interface_name}.{field_name}` does not declare it"
    )]
    RequiredExtraArgument {
        type_name: String,
        interface_name: String,
        field_name: String,
        argument_name: String,
        location: SourceLocation,
    },

    #[error("`{name}` uses the `__` prefix, which is reserved for introspection")]
    ReservedName {
        name: String,
        location: SourceLocation,
    },

    #[error("No type named `{type_name}` is defined")]
    UnknownType {
        type_name: String,
        location: SourceLocation,
    },

    #[error("Cannot attach metadata to `{target}`: no such schema element")]
    UnknownMetadataTarget {
        target: String,
    },
}
