#![no_main]

use libfuzzer_sys::fuzz_target;
use libgql_parser::token::GraphQLTokenKind;
use libgql_parser::token_source::StrGraphQLTokenSource;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let mut eof_count = 0;
    for token in StrGraphQLTokenSource::new(s) {
        assert!(token.span.end_exclusive.byte_offset() <= s.len());
        if matches!(token.kind, GraphQLTokenKind::Eof) {
            eof_count += 1;
        }
    }
    assert_eq!(eof_count, 1);
});
