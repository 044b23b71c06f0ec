mod schema_introspection_tests;
mod type_introspection_tests;
mod utils;
