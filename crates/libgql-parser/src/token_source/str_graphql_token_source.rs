//! A [`GraphQLTokenSource`](crate::token_source::GraphQLTokenSource) that
//! lexes from a `&str` input.
//!
//! Token values borrow directly from the source string using
//! `Cow::Borrowed`, avoiding allocations for names, numbers, and strings.
//!
//! # Usage
//!
//! ```rust
//! use libgql_parser::token_source::StrGraphQLTokenSource;
//!
//! let source = "{ name }";
//! let kinds: Vec<_> = StrGraphQLTokenSource::new(source)
//!     .map(|token| token.kind)
//!     .collect();
//! assert_eq!(kinds.len(), 4); // `{`, `name`, `}`, end of input
//! ```

use crate::smallvec;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::GraphQLErrorNote;
use crate::GraphQLSourceSpan;
use crate::SourcePosition;
use std::path::Path;

/// A lexer over a `&str`.
///
/// The lexer is restartable: cloning it (or constructing a new one over the
/// same text) yields the same token sequence from the beginning. It is
/// finite: after the `Eof` token is produced, iteration ends.
#[derive(Clone, Debug)]
pub struct StrGraphQLTokenSource<'src> {
    /// The full source text being lexed.
    source: &'src str,

    /// Current byte offset from the start of `source`.
    ///
    /// The remaining text to lex is `&source[curr_byte_offset..]`.
    curr_byte_offset: usize,

    /// Current character offset from the start of `source`.
    curr_char_offset: usize,

    /// Current 0-based line number.
    curr_line: usize,

    /// Current character column (0-based).
    curr_col_utf8: usize,

    /// Current UTF-16 code unit column (0-based).
    curr_col_utf16: usize,

    /// Whether the previous character was `\r`.
    ///
    /// Used to handle `\r\n` as a single newline.
    last_char_was_cr: bool,

    /// Whether the EOF token has been emitted.
    finished: bool,

    /// Optional file path recorded in every span.
    file_path: Option<&'src Path>,
}

impl<'src> StrGraphQLTokenSource<'src> {
    /// Creates a new token source from a string slice.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            curr_byte_offset: 0,
            curr_char_offset: 0,
            curr_line: 0,
            curr_col_utf8: 0,
            curr_col_utf16: 0,
            last_char_was_cr: false,
            finished: false,
            file_path: None,
        }
    }

    /// Creates a new token source with an associated file path.
    ///
    /// The file path is included in token spans for error reporting.
    pub fn with_file_path(source: &'src str, path: &'src Path) -> Self {
        Self {
            file_path: Some(path),
            ..Self::new(source)
        }
    }

    /// Returns the full source text this lexer scans.
    pub fn source(&self) -> &'src str {
        self.source
    }

    // =========================================================================
    // Position and scanning helpers
    // =========================================================================

    fn remaining(&self) -> &'src str {
        &self.source[self.curr_byte_offset..]
    }

    fn curr_position(&self) -> SourcePosition {
        SourcePosition::new(
            self.curr_line,
            self.curr_col_utf8,
            Some(self.curr_col_utf16),
            self.curr_byte_offset,
            self.curr_char_offset,
        )
    }

    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn peek_char_nth(&self, n: usize) -> Option<char> {
        self.remaining().chars().nth(n)
    }

    /// Consumes the next character and updates position tracking.
    ///
    /// `\n`, `\r`, and `\r\n` each count as a single line break.
    fn consume(&mut self) -> Option<char> {
        let ch = self.peek_char()?;

        if ch == '\n' {
            if self.last_char_was_cr {
                // The \n of a \r\n pair; the line was already advanced.
                self.last_char_was_cr = false;
            } else {
                self.curr_line += 1;
                self.curr_col_utf8 = 0;
                self.curr_col_utf16 = 0;
            }
        } else if ch == '\r' {
            self.curr_line += 1;
            self.curr_col_utf8 = 0;
            self.curr_col_utf16 = 0;
            self.last_char_was_cr = true;
        } else {
            self.curr_col_utf8 += 1;
            self.curr_col_utf16 += ch.len_utf16();
            self.last_char_was_cr = false;
        }

        self.curr_byte_offset += ch.len_utf8();
        self.curr_char_offset += 1;
        Some(ch)
    }

    fn consume_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(ch) = self.peek_char() {
            if !pred(ch) {
                break;
            }
            self.consume();
        }
    }

    fn make_span(&self, start: SourcePosition) -> GraphQLSourceSpan {
        let end = self.curr_position();
        if let Some(path) = self.file_path {
            GraphQLSourceSpan::with_file(start, end, path.to_path_buf())
        } else {
            GraphQLSourceSpan::new(start, end)
        }
    }

    fn make_token(
        &self,
        kind: GraphQLTokenKind<'src>,
        start: SourcePosition,
    ) -> GraphQLToken<'src> {
        GraphQLToken::new(kind, self.make_span(start))
    }

    fn punctuator(&mut self, kind: GraphQLTokenKind<'src>) -> GraphQLToken<'src> {
        let start = self.curr_position();
        self.consume();
        self.make_token(kind, start)
    }

    // =========================================================================
    // Lexer main loop
    // =========================================================================

    fn next_token(&mut self) -> GraphQLToken<'src> {
        loop {
            self.skip_ignored();
            let start = self.curr_position();

            return match self.peek_char() {
                None => self.make_token(GraphQLTokenKind::Eof, start),

                Some('#') => match self.skip_comment() {
                    Some(error_token) => error_token,
                    None => continue,
                },

                Some('!') => self.punctuator(GraphQLTokenKind::Bang),
                Some('$') => self.punctuator(GraphQLTokenKind::Dollar),
                Some('&') => self.punctuator(GraphQLTokenKind::Ampersand),
                Some('(') => self.punctuator(GraphQLTokenKind::ParenOpen),
                Some(')') => self.punctuator(GraphQLTokenKind::ParenClose),
                Some(':') => self.punctuator(GraphQLTokenKind::Colon),
                Some('=') => self.punctuator(GraphQLTokenKind::Equals),
                Some('@') => self.punctuator(GraphQLTokenKind::At),
                Some('[') => self.punctuator(GraphQLTokenKind::SquareBracketOpen),
                Some(']') => self.punctuator(GraphQLTokenKind::SquareBracketClose),
                Some('{') => self.punctuator(GraphQLTokenKind::CurlyBraceOpen),
                Some('}') => self.punctuator(GraphQLTokenKind::CurlyBraceClose),
                Some('|') => self.punctuator(GraphQLTokenKind::Pipe),

                Some('.') => self.lex_dot_or_ellipsis(start),
                Some('"') => self.lex_string(start),
                Some(c) if is_name_start(c) => self.lex_name(start),
                Some(c) if c == '-' || c.is_ascii_digit() => self.lex_number(start),
                Some(_) => self.lex_invalid_character(start),
            };
        }
    }

    // =========================================================================
    // Ignored tokens
    // =========================================================================

    /// Skips whitespace, line terminators, commas, and the byte order mark.
    fn skip_ignored(&mut self) {
        self.consume_while(|ch| {
            matches!(ch, ' ' | '\t' | '\n' | '\r' | ',' | '\u{FEFF}')
        });
    }

    /// Skips a `#` comment through the end of its line.
    ///
    /// Returns an error token when the comment contains a control
    /// character.
    fn skip_comment(&mut self) -> Option<GraphQLToken<'src>> {
        self.consume();
        while let Some(ch) = self.peek_char() {
            if ch == '\n' || ch == '\r' {
                break;
            }
            if is_invalid_source_char(ch) {
                return Some(self.lex_control_character("comment"));
            }
            self.consume();
        }
        None
    }

    // =========================================================================
    // Dot / Ellipsis lexing
    // =========================================================================

    /// Lexes dots, producing either an `Ellipsis` token or an error.
    ///
    /// - `...` (adjacent) → `Ellipsis`
    /// - `.` alone → Error
    /// - `..` (adjacent) → Error with help to add a third dot
    /// - `. .`, `.. .`, `. ..`, `. . .` on one line → Error with help about
    ///   spacing
    fn lex_dot_or_ellipsis(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let first_dot_line = self.curr_line;
        self.consume();
        self.skip_whitespace_same_line();

        if self.peek_char() != Some('.') || self.curr_line != first_dot_line {
            let kind = GraphQLTokenKind::error("Unexpected `.`", smallvec![]);
            return self.make_token(kind, start);
        }

        let second_dot_start = self.curr_position();
        let first_two_adjacent =
            second_dot_start.byte_offset() == start.byte_offset() + 1;
        self.consume();
        self.skip_whitespace_same_line();

        let spacing_help = || {
            GraphQLErrorNote::help(
                "These dots may have been intended to form a `...` spread \
                 operator. Try removing the extra spacing between the dots.",
            )
        };

        if self.peek_char() != Some('.') || self.curr_line != first_dot_line {
            let kind = if first_two_adjacent {
                GraphQLTokenKind::error(
                    "Unexpected `..` (use `...` for spread operator)",
                    smallvec![GraphQLErrorNote::help(
                        "Add one more `.` to form the spread operator `...`"
                    )],
                )
            } else {
                GraphQLTokenKind::error(
                    "Unexpected `. .` (use `...` for spread operator)",
                    smallvec![spacing_help()],
                )
            };
            return self.make_token(kind, start);
        }

        let third_dot_start = self.curr_position();
        self.consume();
        let last_two_adjacent =
            third_dot_start.byte_offset() == second_dot_start.byte_offset() + 1;

        let kind = match (first_two_adjacent, last_two_adjacent) {
            (true, true) => GraphQLTokenKind::Ellipsis,
            (true, false) => GraphQLTokenKind::error(
                "Unexpected `.. .`",
                smallvec![spacing_help()],
            ),
            (false, true) => GraphQLTokenKind::error(
                "Unexpected `. ..`",
                smallvec![spacing_help()],
            ),
            (false, false) => GraphQLTokenKind::error(
                "Unexpected `. . .`",
                smallvec![spacing_help()],
            ),
        };
        self.make_token(kind, start)
    }

    fn skip_whitespace_same_line(&mut self) {
        self.consume_while(|ch| matches!(ch, ' ' | '\t' | '\u{FEFF}'));
    }

    // =========================================================================
    // Name lexing
    // =========================================================================

    /// Lexes a name or keyword.
    ///
    /// Names match the pattern: `/[_A-Za-z][_0-9A-Za-z]*/`. The keywords
    /// `true`, `false`, and `null` are emitted as distinct token kinds.
    fn lex_name(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let name_start = self.curr_byte_offset;
        self.consume();
        self.consume_while(is_name_continue);

        let name = &self.source[name_start..self.curr_byte_offset];
        let kind = match name {
            "true" => GraphQLTokenKind::True,
            "false" => GraphQLTokenKind::False,
            "null" => GraphQLTokenKind::Null,
            _ => GraphQLTokenKind::name_borrowed(name),
        };
        self.make_token(kind, start)
    }

    // =========================================================================
    // Number lexing
    // =========================================================================

    /// Lexes an integer or float literal.
    ///
    /// - Optional negative sign: `-`
    /// - Integer part: `0` or `[1-9][0-9]*`
    /// - Optional fractional part: `.[0-9]+`
    /// - Optional exponent: `[eE][+-]?[0-9]+`
    ///
    /// A numeric literal must not be directly followed by a name character
    /// or a `.`.
    fn lex_number(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let num_start = self.curr_byte_offset;
        let mut is_float = false;

        if self.peek_char() == Some('-') {
            self.consume();
        }

        match self.peek_char() {
            Some('0') => {
                self.consume();
                if self.peek_char().is_some_and(|ch| ch.is_ascii_digit()) {
                    return self.lex_number_error(
                        start,
                        num_start,
                        "Invalid number: leading zeros are not allowed",
                        "https://spec.graphql.org/October2021/#sec-Int-Value",
                    );
                }
            }
            Some(ch) if ch.is_ascii_digit() => {
                self.consume_while(|ch| ch.is_ascii_digit());
            }
            Some(_) | None => {
                let kind = GraphQLTokenKind::error("Unexpected `-`", smallvec![]);
                return self.make_token(kind, start);
            }
        }

        if self.peek_char() == Some('.') {
            if !self.peek_char_nth(1).is_some_and(|ch| ch.is_ascii_digit()) {
                return self.lex_number_error(
                    start,
                    num_start,
                    "Invalid number: expected a digit after `.`",
                    "https://spec.graphql.org/October2021/#sec-Float-Value",
                );
            }
            is_float = true;
            self.consume();
            self.consume_while(|ch| ch.is_ascii_digit());
        }

        if matches!(self.peek_char(), Some('e' | 'E')) {
            is_float = true;
            self.consume();
            if matches!(self.peek_char(), Some('+' | '-')) {
                self.consume();
            }
            if !self.peek_char().is_some_and(|ch| ch.is_ascii_digit()) {
                return self.lex_number_error(
                    start,
                    num_start,
                    "Invalid number: exponent must have at least one digit",
                    "https://spec.graphql.org/October2021/#sec-Float-Value",
                );
            }
            self.consume_while(|ch| ch.is_ascii_digit());
        }

        if self.peek_char().is_some_and(|ch| is_name_start(ch) || ch == '.') {
            return self.lex_number_error(
                start,
                num_start,
                "Invalid number: a numeric literal cannot be directly followed \
                 by a name or `.`",
                "https://spec.graphql.org/October2021/#sec-Int-Value",
            );
        }

        let num_text = &self.source[num_start..self.curr_byte_offset];
        let kind = if is_float {
            GraphQLTokenKind::float_value_borrowed(num_text)
        } else {
            GraphQLTokenKind::int_value_borrowed(num_text)
        };
        self.make_token(kind, start)
    }

    /// Creates an error token for an invalid number, consuming the rest of
    /// the number-like run so the error span covers all of it.
    fn lex_number_error(
        &mut self,
        start: SourcePosition,
        num_start: usize,
        message: &str,
        spec_url: &str,
    ) -> GraphQLToken<'src> {
        self.consume_while(|ch| {
            ch.is_ascii_alphanumeric() || matches!(ch, '.' | '+' | '-' | '_')
        });
        let invalid_text = &self.source[num_start..self.curr_byte_offset];
        let kind = GraphQLTokenKind::error(
            format!("{message}: `{invalid_text}`"),
            smallvec![GraphQLErrorNote::spec(spec_url)],
        );
        self.make_token(kind, start)
    }

    // =========================================================================
    // String lexing
    // =========================================================================

    /// Lexes a string literal (single-line or block string).
    fn lex_string(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let str_start = self.curr_byte_offset;
        if self.remaining().starts_with("\"\"\"") {
            return self.lex_block_string(start, str_start);
        }

        self.consume();
        loop {
            match self.peek_char() {
                None => {
                    let kind = GraphQLTokenKind::error(
                        "Unterminated string literal",
                        smallvec![
                            GraphQLErrorNote::general_with_span(
                                "String started here",
                                self.make_span_at(start.clone()),
                            ),
                            GraphQLErrorNote::help("Add closing `\"`"),
                        ],
                    );
                    return self.make_token(kind, start);
                }
                Some('\n' | '\r') => {
                    let kind = GraphQLTokenKind::error(
                        "Unterminated string literal",
                        smallvec![
                            GraphQLErrorNote::general(
                                "Single-line strings cannot contain unescaped newlines"
                            ),
                            GraphQLErrorNote::help(
                                "Use a block string (triple quotes) for multi-line \
                                 strings, or escape the newline with `\\n`"
                            ),
                        ],
                    );
                    return self.make_token(kind, start);
                }
                Some('"') => {
                    self.consume();
                    break;
                }
                Some('\\') => {
                    self.consume();
                    match self.peek_char() {
                        Some(ch) if is_invalid_source_char(ch) => {
                            return self.lex_control_character("string literal");
                        }
                        Some('\n' | '\r') | None => {}
                        Some(_) => {
                            self.consume();
                        }
                    }
                }
                Some(ch) if is_invalid_source_char(ch) => {
                    return self.lex_control_character("string literal");
                }
                Some(_) => {
                    self.consume();
                }
            }
        }

        let string_text = &self.source[str_start..self.curr_byte_offset];
        self.make_token(GraphQLTokenKind::string_value_borrowed(string_text), start)
    }

    fn lex_block_string(
        &mut self,
        start: SourcePosition,
        str_start: usize,
    ) -> GraphQLToken<'src> {
        for _ in 0..3 {
            self.consume();
        }

        loop {
            if self.remaining().starts_with("\\\"\"\"") {
                for _ in 0..4 {
                    self.consume();
                }
                continue;
            }
            if self.remaining().starts_with("\"\"\"") {
                for _ in 0..3 {
                    self.consume();
                }
                break;
            }
            match self.peek_char() {
                None => {
                    let kind = GraphQLTokenKind::error(
                        "Unterminated block string",
                        smallvec![
                            GraphQLErrorNote::general_with_span(
                                "Block string started here",
                                self.make_span_at(start.clone()),
                            ),
                            GraphQLErrorNote::help("Add closing `\"\"\"`"),
                        ],
                    );
                    return self.make_token(kind, start);
                }
                Some(ch) if is_invalid_source_char(ch) => {
                    return self.lex_control_character("block string");
                }
                Some(_) => {
                    self.consume();
                }
            }
        }

        let string_text = &self.source[str_start..self.curr_byte_offset];
        self.make_token(GraphQLTokenKind::string_value_borrowed(string_text), start)
    }

    /// A zero-width span at `pos`, used for "started here" notes.
    fn make_span_at(&self, pos: SourcePosition) -> GraphQLSourceSpan {
        let end = pos.clone();
        match self.file_path {
            Some(path) => GraphQLSourceSpan::with_file(pos, end, path.to_path_buf()),
            None => GraphQLSourceSpan::new(pos, end),
        }
    }

    // =========================================================================
    // Invalid character handling
    // =========================================================================

    /// Produces an error token for the control character at the current
    /// position, which appears inside a `context` (comment, string).
    fn lex_control_character(&mut self, context: &str) -> GraphQLToken<'src> {
        let start = self.curr_position();
        let Some(ch) = self.consume() else {
            return self.make_token(GraphQLTokenKind::Eof, start);
        };
        let kind = GraphQLTokenKind::error(
            format!("Invalid character {} in {context}", describe_char(ch)),
            smallvec![GraphQLErrorNote::spec(
                "https://spec.graphql.org/October2021/#SourceCharacter"
            )],
        );
        self.make_token(kind, start)
    }

    fn lex_invalid_character(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let Some(ch) = self.consume() else {
            return self.make_token(GraphQLTokenKind::Eof, start);
        };
        let kind = GraphQLTokenKind::error(
            format!("Unexpected character {}", describe_char(ch)),
            smallvec![],
        );
        self.make_token(kind, start)
    }
}

// =============================================================================
// Iterator implementation
// =============================================================================

impl<'src> Iterator for StrGraphQLTokenSource<'src> {
    type Item = GraphQLToken<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if matches!(token.kind, GraphQLTokenKind::Eof) {
            self.finished = true;
        }
        Some(token)
    }
}

// =============================================================================
// Helper functions
// =============================================================================

fn is_name_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

fn is_name_continue(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphanumeric()
}

/// Control characters other than tab and the line terminators may not
/// appear anywhere in a document.
fn is_invalid_source_char(ch: char) -> bool {
    ch.is_ascii_control() && !matches!(ch, '\t' | '\n' | '\r')
}

/// Returns a human-readable description of a character for error messages.
///
/// Printable characters are shown in backticks. Invisible and control
/// characters also get their code point and, when known, their name.
fn describe_char(ch: char) -> String {
    if ch.is_control() || (ch.is_whitespace() && ch != ' ') || unicode_char_name(ch).is_some() {
        match unicode_char_name(ch) {
            Some(name) => format!("`{}` (U+{:04X}: {name})", ch.escape_debug(), ch as u32),
            None => format!("`{}` (U+{:04X})", ch.escape_debug(), ch as u32),
        }
    } else {
        format!("`{ch}`")
    }
}

/// Returns the Unicode name for well-known invisible/control characters.
fn unicode_char_name(ch: char) -> Option<&'static str> {
    match ch {
        '\u{0000}' => Some("NULL"),
        '\u{0001}' => Some("START OF HEADING"),
        '\u{0002}' => Some("START OF TEXT"),
        '\u{0003}' => Some("END OF TEXT"),
        '\u{0004}' => Some("END OF TRANSMISSION"),
        '\u{0005}' => Some("ENQUIRY"),
        '\u{0006}' => Some("ACKNOWLEDGE"),
        '\u{0007}' => Some("BELL"),
        '\u{0008}' => Some("BACKSPACE"),
        '\u{000B}' => Some("VERTICAL TAB"),
        '\u{000C}' => Some("FORM FEED"),
        '\u{000E}' => Some("SHIFT OUT"),
        '\u{000F}' => Some("SHIFT IN"),
        '\u{0010}' => Some("DATA LINK ESCAPE"),
        '\u{0011}' => Some("DEVICE CONTROL ONE"),
        '\u{0012}' => Some("DEVICE CONTROL TWO"),
        '\u{0013}' => Some("DEVICE CONTROL THREE"),
        '\u{0014}' => Some("DEVICE CONTROL FOUR"),
        '\u{0015}' => Some("NEGATIVE ACKNOWLEDGE"),
        '\u{0016}' => Some("SYNCHRONOUS IDLE"),
        '\u{0017}' => Some("END OF TRANSMISSION BLOCK"),
        '\u{0018}' => Some("CANCEL"),
        '\u{0019}' => Some("END OF MEDIUM"),
        '\u{001A}' => Some("SUBSTITUTE"),
        '\u{001B}' => Some("ESCAPE"),
        '\u{001C}' => Some("FILE SEPARATOR"),
        '\u{001D}' => Some("GROUP SEPARATOR"),
        '\u{001E}' => Some("RECORD SEPARATOR"),
        '\u{001F}' => Some("UNIT SEPARATOR"),
        '\u{007F}' => Some("DELETE"),
        '\u{0085}' => Some("NEXT LINE"),
        '\u{00A0}' => Some("NO-BREAK SPACE"),
        '\u{00AD}' => Some("SOFT HYPHEN"),
        '\u{200B}' => Some("ZERO WIDTH SPACE"),
        '\u{200C}' => Some("ZERO WIDTH NON-JOINER"),
        '\u{200D}' => Some("ZERO WIDTH JOINER"),
        '\u{200E}' => Some("LEFT-TO-RIGHT MARK"),
        '\u{200F}' => Some("RIGHT-TO-LEFT MARK"),
        '\u{2028}' => Some("LINE SEPARATOR"),
        '\u{2029}' => Some("PARAGRAPH SEPARATOR"),
        '\u{202A}' => Some("LEFT-TO-RIGHT EMBEDDING"),
        '\u{202B}' => Some("RIGHT-TO-LEFT EMBEDDING"),
        '\u{202C}' => Some("POP DIRECTIONAL FORMATTING"),
        '\u{202D}' => Some("LEFT-TO-RIGHT OVERRIDE"),
        '\u{202E}' => Some("RIGHT-TO-LEFT OVERRIDE"),
        '\u{202F}' => Some("NARROW NO-BREAK SPACE"),
        '\u{2060}' => Some("WORD JOINER"),
        '\u{3000}' => Some("IDEOGRAPHIC SPACE"),
        '\u{FEFF}' => Some("BYTE ORDER MARK"),
        _ => None,
    }
}
