use crate::schema::Schema;
use crate::types::GraphQLTypeKind;
use crate::types::ResolvedType;

fn user() -> ResolvedType {
    ResolvedType::named("User", GraphQLTypeKind::Object)
}

fn schema() -> Schema {
    Schema::parse(
        "type Query { node: Node }\n\
         interface Node { id: ID! }\n\
         type User implements Node { id: ID! }\n\
         type Post { id: ID! }\n\
         union Entry = User | Post",
    ).unwrap()
}

#[test]
fn display_wraps_in_order() {
    let wrapped = ResolvedType::non_null(ResolvedType::list(ResolvedType::non_null(user())));
    assert_eq!(wrapped.to_string(), "[User!]!");
    assert_eq!(wrapped.named_type().name(), "User");
    assert_eq!(wrapped.kind(), GraphQLTypeKind::Object);
}

#[test]
fn non_null_is_idempotent() {
    let once = ResolvedType::non_null(user());
    assert_eq!(ResolvedType::non_null(once.clone()), once);
    assert_eq!(once.to_string(), "User!");
}

#[test]
fn nullable_and_list_items() {
    let list = ResolvedType::non_null(ResolvedType::list(user()));
    assert!(list.is_non_null());
    assert!(list.is_list());
    assert_eq!(list.nullable(), &ResolvedType::list(user()));
    assert_eq!(list.list_item_type(), Some(&user()));
    assert_eq!(user().list_item_type(), None);
    assert!(!user().is_list());
}

#[test]
fn input_and_output_kinds() {
    let filter = ResolvedType::named("Filter", GraphQLTypeKind::InputObject);
    assert!(filter.is_input_type());
    assert!(!filter.is_output_type());
    assert!(user().is_output_type());
    assert!(!user().is_input_type());
    let int = ResolvedType::named("Int", GraphQLTypeKind::Int);
    assert!(int.is_input_type() && int.is_output_type());
}

mod subtyping {
    use super::*;

    #[test]
    fn same_type_and_non_null_narrowing() {
        let schema = schema();
        assert!(user().is_subtype_of(&schema, &user()));
        assert!(ResolvedType::non_null(user()).is_subtype_of(&schema, &user()));
        assert!(!user().is_subtype_of(&schema, &ResolvedType::non_null(user())));
    }

    #[test]
    fn implementations_and_union_members() {
        let schema = schema();
        let node = ResolvedType::named("Node", GraphQLTypeKind::Interface);
        let entry = ResolvedType::named("Entry", GraphQLTypeKind::Union);
        let post = ResolvedType::named("Post", GraphQLTypeKind::Object);
        assert!(user().is_subtype_of(&schema, &node));
        assert!(!post.is_subtype_of(&schema, &node));
        assert!(post.is_subtype_of(&schema, &entry));
        assert!(!node.is_subtype_of(&schema, &user()));
    }

    #[test]
    fn lists_are_covariant() {
        let schema = schema();
        let node = ResolvedType::named("Node", GraphQLTypeKind::Interface);
        let users = ResolvedType::list(ResolvedType::non_null(user()));
        assert!(users.is_subtype_of(&schema, &ResolvedType::list(node.clone())));
        assert!(!users.is_subtype_of(&schema, &node));
        assert!(!user().is_subtype_of(&schema, &ResolvedType::list(user())));
    }
}
