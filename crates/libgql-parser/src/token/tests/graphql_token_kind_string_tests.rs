//! Tests for cooking string tokens into their values.

use crate::token::GraphQLTokenKind;
use crate::GraphQLStringParsingError;

fn cook(raw: &str) -> Result<String, GraphQLStringParsingError> {
    match GraphQLTokenKind::string_value_borrowed(raw).parse_string_value() {
        Some(result) => result,
        None => panic!("string token did not cook"),
    }
}

mod single_line {
    use super::*;

    #[test]
    fn simple_escapes() {
        assert_eq!(
            cook(r#""tab\tnl\ncr\rq\"bs\\sl\/b\bf\f""#),
            Ok("tab\tnl\ncr\rq\"bs\\sl/b\u{8}f\u{c}".to_string()),
        );
    }

    #[test]
    fn fixed_width_unicode_escape() {
        assert_eq!(cook(r#""\u0041\u00e9""#), Ok("Aé".to_string()));
    }

    #[test]
    fn variable_width_unicode_escape() {
        assert_eq!(cook(r#""\u{1F600}""#), Ok("\u{1F600}".to_string()));
    }

    #[test]
    fn surrogate_pair_escape() {
        assert_eq!(cook(r#""\uD83D\uDE00""#), Ok("\u{1F600}".to_string()));
    }

    #[test]
    fn lone_leading_surrogate_is_rejected() {
        assert!(matches!(
            cook(r#""\uD83D""#),
            Err(GraphQLStringParsingError::InvalidUnicodeEscape(_)),
        ));
    }

    #[test]
    fn unknown_escape_is_rejected() {
        assert_eq!(
            cook(r#""\x""#),
            Err(GraphQLStringParsingError::InvalidEscapeSequence("\\x".to_string())),
        );
    }

    #[test]
    fn non_string_tokens_do_not_cook() {
        assert_eq!(GraphQLTokenKind::Null.parse_string_value(), None);
    }
}

mod block {
    use super::*;

    #[test]
    fn common_indentation_is_removed() {
        let raw = "\"\"\"\n    Hello,\n      World!\n\n    Yours,\n      GraphQL.\n  \"\"\"";
        assert_eq!(
            cook(raw),
            Ok("Hello,\n  World!\n\nYours,\n  GraphQL.".to_string()),
        );
    }

    #[test]
    fn first_line_keeps_its_indentation() {
        assert_eq!(cook("\"\"\"  first\n  second\"\"\""), Ok("  first\nsecond".to_string()));
    }

    #[test]
    fn escapes_are_not_processed() {
        assert_eq!(cook(r#""""a\nb""""#), Ok(r"a\nb".to_string()));
    }

    #[test]
    fn escaped_triple_quote() {
        assert_eq!(cook(r#""""say \""" please""""#), Ok("say \"\"\" please".to_string()));
    }

    #[test]
    fn carriage_returns_are_normalized() {
        assert_eq!(cook("\"\"\"a\r\nb\rc\"\"\""), Ok("a\nb\nc".to_string()));
    }
}
