use crate::GraphQLErrorNote;
use crate::GraphQLErrorNotes;
use crate::GraphQLParseErrorKind;
use crate::GraphQLSourceSpan;

/// A syntax error with location information and contextual notes.
///
/// The parser stops at the first error it encounters, so a failed parse
/// produces exactly one `GraphQLParseError`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{}", self.format_oneline())]
pub struct GraphQLParseError {
    /// Human-readable primary error message.
    ///
    /// Examples: "expected `:`, found `String`", "unclosed `{`"
    message: String,

    /// The primary span where the error was detected.
    ///
    /// - For "unexpected token" errors: the unexpected token's span
    /// - For "unclosed delimiter" errors: the end-of-input position
    span: GraphQLSourceSpan,

    /// Categorized error kind for programmatic handling.
    kind: GraphQLParseErrorKind,

    /// Additional notes providing context, suggestions, and related
    /// locations.
    notes: GraphQLErrorNotes,
}

impl GraphQLParseError {
    /// Creates a new parse error with no notes.
    pub fn new(
        message: impl Into<String>,
        span: GraphQLSourceSpan,
        kind: GraphQLParseErrorKind,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind,
            notes: GraphQLErrorNotes::new(),
        }
    }

    /// Creates a new parse error with notes.
    pub fn with_notes(
        message: impl Into<String>,
        span: GraphQLSourceSpan,
        kind: GraphQLParseErrorKind,
        notes: GraphQLErrorNotes,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind,
            notes,
        }
    }

    /// Creates a parse error from a lexer error token, preserving the
    /// lexer's message and notes.
    pub fn from_lexer_error(
        message: impl Into<String>,
        span: GraphQLSourceSpan,
        lexer_notes: GraphQLErrorNotes,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind: GraphQLParseErrorKind::LexerError,
            notes: lexer_notes,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }

    pub fn kind(&self) -> &GraphQLParseErrorKind {
        &self.kind
    }

    pub fn notes(&self) -> &GraphQLErrorNotes {
        &self.notes
    }

    /// 1-based line of the error's primary span.
    pub fn line(&self) -> usize {
        self.span.start_inclusive.display_line()
    }

    /// 1-based column of the error's primary span.
    pub fn column(&self) -> usize {
        self.span.start_inclusive.display_column()
    }

    /// Adds a general note with a span (pointing to a related location).
    pub fn add_note_with_span(
        &mut self,
        message: impl Into<String>,
        span: GraphQLSourceSpan,
    ) {
        self.notes.push(GraphQLErrorNote::general_with_span(message, span));
    }

    /// Adds a help note without a span.
    pub fn add_help(&mut self, message: impl Into<String>) {
        self.notes.push(GraphQLErrorNote::help(message));
    }

    /// Adds a spec reference note.
    pub fn add_spec(&mut self, url: impl Into<String>) {
        self.notes.push(GraphQLErrorNote::spec(url));
    }

    /// Formats this error as a diagnostic string for CLI output.
    ///
    /// Produces output like:
    /// ```text
    /// error: expected `:`, found `String`
    ///   --> schema.graphql:2:10
    ///    |
    ///  1 | type User {
    ///  2 |     name String
    ///    |          ^^^^^^
    ///  3 | }
    ///    |
    ///    = help: ...
    /// ```
    ///
    /// The excerpt shows the line before the error (when there is one), the
    /// offending line with a caret underline, and the line after (when
    /// there is one). Without `source`, only the header and location are
    /// rendered.
    pub fn format_detailed(&self, source: Option<&str>) -> String {
        let mut output = String::new();
        output.push_str("error: ");
        output.push_str(&self.message);
        output.push('\n');
        output.push_str(&format!(
            "  --> {}:{}:{}\n",
            self.file_name(),
            self.line(),
            self.column(),
        ));

        if let Some(src) = source
            && let Some(snippet) = self.format_source_snippet(src)
        {
            output.push_str(&snippet);
        }

        for note in &self.notes {
            output.push_str(&format!(
                "   = {}: {}\n",
                note.kind.label(),
                note.message,
            ));
            if let (Some(note_span), Some(src)) = (&note.span, source)
                && let Some(snippet) = format_note_snippet(src, note_span)
            {
                output.push_str(&snippet);
            }
        }

        output
    }

    /// Formats this error as a single-line summary.
    ///
    /// ```text
    /// schema.graphql:5:12: error: expected `:`, found `String`
    /// ```
    pub fn format_oneline(&self) -> String {
        format!(
            "{}:{}:{}: error: {}",
            self.file_name(),
            self.line(),
            self.column(),
            self.message,
        )
    }

    fn file_name(&self) -> String {
        self.span
            .file_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<input>".to_string())
    }

    fn format_source_snippet(&self, source: &str) -> Option<String> {
        let lines: Vec<&str> = source.lines().collect();
        let line_idx = self.span.start_inclusive.line();
        let line_content = *lines.get(line_idx)?;

        // Width of the widest line number that will be printed.
        let last_shown = (line_idx + 2).min(lines.len());
        let gutter = last_shown.to_string().len().max(2);

        let mut output = String::new();
        output.push_str(&format!("{:>gutter$} |\n", ""));
        if line_idx > 0 {
            output.push_str(&format!(
                "{:>gutter$} | {}\n",
                line_idx,
                lines[line_idx - 1],
            ));
        }
        output.push_str(&format!(
            "{:>gutter$} | {line_content}\n",
            line_idx + 1,
        ));

        let col_start = self.span.start_inclusive.col_utf8();
        let col_end = if self.span.end_exclusive.line() == line_idx {
            self.span.end_exclusive.col_utf8()
        } else {
            line_content.chars().count()
        };
        let underline_len = col_end.saturating_sub(col_start).max(1);
        output.push_str(&format!(
            "{:>gutter$} | {:>col_start$}{}\n",
            "",
            "",
            "^".repeat(underline_len),
        ));

        if let Some(next_line) = lines.get(line_idx + 1) {
            output.push_str(&format!(
                "{:>gutter$} | {next_line}\n",
                line_idx + 2,
            ));
        }
        output.push_str(&format!("{:>gutter$} |\n", ""));

        Some(output)
    }
}

fn format_note_snippet(
    source: &str,
    span: &GraphQLSourceSpan,
) -> Option<String> {
    let line_idx = span.start_inclusive.line();
    let line_content = source.lines().nth(line_idx)?;
    let gutter = (line_idx + 1).to_string().len().max(2);
    let col_start = span.start_inclusive.col_utf8();

    Some(format!(
        "     {:>gutter$} | {line_content}\n     {:>gutter$} | {:>col_start$}-\n",
        line_idx + 1,
        "",
        "",
    ))
}
