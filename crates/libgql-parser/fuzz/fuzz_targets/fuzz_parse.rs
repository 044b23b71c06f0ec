#![no_main]

use libfuzzer_sys::fuzz_target;
use libgql_parser::GraphQLParser;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    if let Err(err) = GraphQLParser::new(s).parse_document() {
        let _ = err.format_detailed(Some(s));
    }
});
