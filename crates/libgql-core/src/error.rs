//! Path-tagged errors reported by validation and execution.

use crate::loc::SourceLocation;
use serde::Serialize;

/// A 1-based line/column pair in the standard GraphQL error shape.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct ErrorLocation {
    pub line: usize,
    pub column: usize,
}

/// One step of a [`GPath`].
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

/// The response path of a field, e.g. `user.friends[0].name`.
///
/// Serializes to a JSON array such as `["user", "friends", 0, "name"]`.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq, Serialize)]
#[serde(transparent)]
pub struct GPath(Vec<PathSegment>);
impl GPath {
    pub fn new() -> Self {
        Self(vec![])
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// A new path one key deeper than this one.
    pub fn with_key(&self, key: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Key(key.into()));
        Self(segments)
    }

    /// A new path one list index deeper than this one.
    pub fn with_index(&self, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Index(index));
        Self(segments)
    }
}
impl std::fmt::Display for GPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                PathSegment::Key(key) if i == 0 => write!(f, "{key}")?,
                PathSegment::Key(key) => write!(f, ".{key}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}
impl<S: Into<PathSegment>> FromIterator<S> for GPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
impl From<&str> for PathSegment {
    fn from(value: &str) -> Self {
        Self::Key(value.to_string())
    }
}
impl From<String> for PathSegment {
    fn from(value: String) -> Self {
        Self::Key(value)
    }
}
impl From<usize> for PathSegment {
    fn from(value: usize) -> Self {
        Self::Index(value)
    }
}

/// A validation or field-execution error.
///
/// Serializes to the standard `{ "message", "locations", "path" }` response
/// shape, omitting `locations` and `path` when there are none.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct GError {
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<ErrorLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<GPath>,
}
impl GError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            locations: vec![],
            path: None,
        }
    }

    /// Adds the line/column of `location`, if it has one.
    pub fn at(mut self, location: &SourceLocation) -> Self {
        if let Some(error_loc) = location.error_location() {
            self.locations.push(error_loc);
        }
        self
    }

    pub fn with_path(mut self, path: GPath) -> Self {
        self.path = Some(path);
        self
    }

    /// Renders the message followed by a source excerpt for each location,
    /// with a caret under the offending column.
    ///
    /// ```text
    /// error: Cannot select nonexistent field 'foo' on type 'Query'.
    ///   --> 1:3
    ///    |
    ///  1 | { foo }
    ///    |   ^
    ///    |
    /// ```
    pub fn render(&self, source: &str) -> String {
        let mut output = format!("error: {}\n", self.message);
        let lines: Vec<&str> = source.lines().collect();
        for loc in &self.locations {
            output.push_str(&format!("  --> {}:{}\n", loc.line, loc.column));
            let Some(line_content) = lines.get(loc.line.saturating_sub(1)) else {
                continue;
            };
            let last_shown = (loc.line + 1).min(lines.len());
            let gutter = last_shown.to_string().len().max(2);
            output.push_str(&format!("{:>gutter$} |\n", ""));
            if loc.line > 1 {
                output.push_str(&format!(
                    "{:>gutter$} | {}\n",
                    loc.line - 1,
                    lines[loc.line - 2],
                ));
            }
            output.push_str(&format!("{:>gutter$} | {line_content}\n", loc.line));
            let indent = loc.column.saturating_sub(1);
            output.push_str(&format!("{:>gutter$} | {:>indent$}^\n", "", ""));
            if let Some(next_line) = lines.get(loc.line) {
                output.push_str(&format!("{:>gutter$} | {next_line}\n", loc.line + 1));
            }
            output.push_str(&format!("{:>gutter$} |\n", ""));
        }
        if let Some(path) = &self.path {
            output.push_str(&format!("   = path: {path}\n"));
        }
        output
    }
}
