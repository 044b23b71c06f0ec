use crate::GraphQLSourceSpan;

/// Append the source text for `span` to `sink` by slicing directly from
/// `source` via byte offsets.
pub(crate) fn append_span_source_slice(
    span: &GraphQLSourceSpan,
    sink: &mut String,
    source: &str,
) {
    let start = span.start_inclusive.byte_offset();
    let end = span.end_exclusive.byte_offset();
    debug_assert!(
        start <= end,
        "append_span_source_slice: inverted span (start {start} > end {end})",
    );
    if let Some(slice) = source.get(start..end) {
        sink.push_str(slice);
    }
}

/// Trait implemented by all AST node types. Maps a node back to the source
/// text it was parsed from.
///
/// All AST node types implement this trait via `#[inherent] impl AstNode`,
/// giving each node both inherent methods (no trait import needed) and a
/// trait bound for generic utilities (error formatters, linters, etc.).
pub trait AstNode {
    /// The span this node was parsed from.
    fn span(&self) -> &GraphQLSourceSpan;

    /// Append this node's source text to `sink` by slicing `source`.
    fn append_source(&self, sink: &mut String, source: &str);

    /// Return this node's source text.
    fn to_source(&self, source: &str) -> String;
}

/// Implements [`AstNode`] for node types with a `span` field.
macro_rules! impl_ast_node {
    ($($node:ty),* $(,)?) => {
        $(
            #[inherent::inherent]
            impl crate::ast::AstNode for $node {
                pub fn span(&self) -> &crate::GraphQLSourceSpan {
                    &self.span
                }

                pub fn append_source(&self, sink: &mut String, source: &str) {
                    crate::ast::ast_node::append_span_source_slice(
                        &self.span, sink, source,
                    );
                }

                pub fn to_source(&self, source: &str) -> String {
                    let mut s = String::new();
                    self.append_source(&mut s, source);
                    s
                }
            }
        )*
    };
}

pub(crate) use impl_ast_node;
