//! ast-grep wrapper for Go sources.

use ast_grep_core::tree_sitter::StrDoc;
use ast_grep_language::{LanguageExt, SupportLang};

use crate::error::ParserError;

/// The concrete AST tree type returned by [`parse_go`].
pub type AstTree = ast_grep_core::AstGrep<StrDoc<SupportLang>>;

/// Parse Go source into an ast-grep tree, rejecting trees with syntax errors.
///
/// tree-sitter always produces a tree; a tree holding an `ERROR` or
/// `MISSING` node is reported as [`ParserError::ParseFailed`] so that no
/// offsets are ever computed against a partial parse.
///
/// # Errors
/// Returns `ParserError::ParseFailed` naming `label` and the first bad line.
pub fn parse_go(label: &str, source: &str) -> Result<AstTree, ParserError> {
    let tree = SupportLang::Go.ast_grep(source);

    let failure = tree
        .root()
        .dfs()
        .find(|node| node.is_error() || node.is_missing())
        .map(|node| {
            let kind = if node.is_missing() {
                format!("missing `{}`", node.kind())
            } else {
                "syntax error".to_string()
            };
            (node.start_pos().line() + 1, kind)
        });

    match failure {
        Some((line, kind)) => Err(ParserError::ParseFailed {
            path: label.to_string(),
            line,
            kind,
        }),
        None => Ok(tree),
    }
}
