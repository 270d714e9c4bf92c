//! Directive scanner: finds `@inject_field:` line comments.
//!
//! Matching is purely textual. The tag keyword is case-insensitive, the
//! payload is taken verbatim (trimmed) up to the end of the comment.

use std::sync::LazyLock;

use ast_grep_core::matcher::KindMatcher;
use ast_grep_language::SupportLang;
use regex::Regex;

use crate::types::Directive;

const DIRECTIVE_PATTERN: &str = r"^//.*?@(?i:inject_field):\s*(.*)$";

static SCANNER: LazyLock<DirectiveScanner> = LazyLock::new(DirectiveScanner::new);

/// The process-wide scanner, compiled on first use.
#[must_use]
pub fn scanner() -> &'static DirectiveScanner {
    &SCANNER
}

/// Holds the compiled directive pattern. Stateless once built.
#[derive(Debug, Clone)]
pub struct DirectiveScanner {
    pattern: Regex,
}

impl DirectiveScanner {
    /// Compile the directive pattern.
    ///
    /// # Panics
    /// Never in practice: the pattern is a valid constant.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(DIRECTIVE_PATTERN).expect("directive pattern is valid"),
        }
    }

    /// Return the payload of a directive comment, or `None` if `comment` is
    /// not a directive. Empty payloads are not directives.
    #[must_use]
    pub fn parse_comment<'a>(&self, comment: &'a str) -> Option<&'a str> {
        let payload = self.pattern.captures(comment)?.get(1)?.as_str().trim();
        (!payload.is_empty()).then_some(payload)
    }

    /// Collect every directive of a parsed Go file, ordered by comment start.
    pub fn scan<D: ast_grep_core::Doc<Lang = SupportLang>>(
        &self,
        root: &ast_grep_core::AstGrep<D>,
    ) -> Vec<Directive> {
        let matcher = KindMatcher::new("comment", SupportLang::Go);
        let mut directives: Vec<Directive> = root
            .root()
            .find_all(&matcher)
            .filter_map(|node| {
                let text = node.text();
                let payload = self.parse_comment(&text)?;
                Some(Directive::new(payload, node.range()))
            })
            .collect();
        directives.sort_by_key(|d| d.comment.start);
        directives
    }
}

impl Default for DirectiveScanner {
    fn default() -> Self {
        Self::new()
    }
}
