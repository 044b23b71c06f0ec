use crate::schema::Schema;
use crate::types::DEFAULT_DEPRECATION_REASON;
use crate::types::DeprecationState;

#[test]
fn deprecation_reasons() {
    let schema = Schema::parse(
        "type Query {\n\
           current: Int\n\
           old: Int @deprecated\n\
           legacy: Int @deprecated(reason: \"Use current\")\n\
         }\n\
         enum Color { RED BLUE @deprecated(reason: \"Too sad\") }",
    ).unwrap();
    let field_state = |name: &str| {
        schema.field_definition("Query", name).map(|field| field.deprecation_state())
    };
    assert_eq!(field_state("current"), Some(DeprecationState::NotDeprecated));
    assert_eq!(field_state("old"), Some(DeprecationState::Deprecated(DEFAULT_DEPRECATION_REASON)));
    assert_eq!(field_state("legacy"), Some(DeprecationState::Deprecated("Use current")));

    let color = schema.type_named("Color").and_then(|ty| ty.as_enum()).unwrap();
    let blue = color.value("BLUE").unwrap().deprecation_state();
    assert!(blue.is_deprecated());
    assert_eq!(blue.reason(), Some("Too sad"));
    assert_eq!(color.value("RED").unwrap().deprecation_state().reason(), None);
}
