use crate::loc::SourceLocation;
use crate::schema::SchemaBuildError;
use crate::types::TypeRef;

fn named(name: &str) -> TypeRef {
    TypeRef::named(name, SourceLocation::BuiltIn)
}

#[test]
fn display_and_innermost_name() {
    let type_ref = TypeRef::non_null(TypeRef::list(TypeRef::non_null(named("ID")).unwrap())).unwrap();
    assert_eq!(type_ref.to_string(), "[ID!]!");
    assert_eq!(type_ref.innermost_name(), "ID");
    assert!(type_ref.is_non_null());
    assert!(!named("ID").is_non_null());
}

#[test]
fn double_non_null_is_rejected() {
    let once = TypeRef::non_null(named("ID")).unwrap();
    assert!(matches!(
        TypeRef::non_null(once),
        Err(SchemaBuildError::DoubleNonNull { ref type_ref, .. }) if type_ref == "ID!"
    ));
}
