/// Source position information for parsing, with dual column tracking.
///
/// This is a pure data struct with no mutation methods. Lexers are
/// responsible for computing position values as they scan input.
///
/// # Indexing Convention
///
/// **All stored position values are 0-based:**
/// - `line`: 0 = first line of the document
/// - `col_utf8`: character count within the current line
/// - `col_utf16`: optional UTF-16 code unit offset within the current line
/// - `byte_offset`: byte offset within the whole document
/// - `char_offset`: character offset within the whole document
///
/// Use [`display_line`](Self::display_line) and
/// [`display_column`](Self::display_column) for the 1-based values users
/// expect to see in error messages.
///
/// # Dual Column Tracking
///
/// For ASCII text, both columns are equal. For text containing characters
/// outside the Basic Multilingual Plane (e.g., emoji), they differ:
/// - `col_utf8` advances by 1 for each character
/// - `col_utf16` advances by the character's UTF-16 length (1 or 2 code units)
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct SourcePosition {
    line: usize,
    col_utf8: usize,
    col_utf16: Option<usize>,
    byte_offset: usize,
    char_offset: usize,
}

impl SourcePosition {
    pub fn new(
        line: usize,
        col_utf8: usize,
        col_utf16: Option<usize>,
        byte_offset: usize,
        char_offset: usize,
    ) -> Self {
        Self {
            line,
            col_utf8,
            col_utf16,
            byte_offset,
            char_offset,
        }
    }

    /// The position of the first character of a document.
    pub fn start_of_document() -> Self {
        Self::new(0, 0, Some(0), 0, 0)
    }

    /// Returns the 0-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 0-based character count within the current line.
    pub fn col_utf8(&self) -> usize {
        self.col_utf8
    }

    /// Returns the 0-based UTF-16 code unit offset within the current line,
    /// if available.
    ///
    /// For LSP compatibility, prefer this method when available.
    pub fn col_utf16(&self) -> Option<usize> {
        self.col_utf16
    }

    /// Returns the 0-based byte offset from document start.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    /// Returns the 0-based character offset from document start.
    pub fn char_offset(&self) -> usize {
        self.char_offset
    }

    /// Returns the 1-based line number.
    pub fn display_line(&self) -> usize {
        self.line + 1
    }

    /// Returns the 1-based column, derived from `col_utf8`.
    pub fn display_column(&self) -> usize {
        self.col_utf8 + 1
    }
}

impl std::fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.display_line(), self.display_column())
    }
}
