mod graphql_token_kind_string_tests;
