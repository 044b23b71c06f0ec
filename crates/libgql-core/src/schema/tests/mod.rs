mod schema_build_error_tests;
mod schema_tests;
