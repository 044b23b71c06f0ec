mod graphql_parser_executable_tests;
mod graphql_parser_proptests;
mod graphql_parser_value_tests;
mod graphql_token_stream_tests;
mod source_position_tests;
mod utils;
