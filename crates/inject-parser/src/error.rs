//! Parser error types for inject-parser.

/// Errors that can occur while turning a candidate file into an injection plan.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("Parse failed for {path}: {kind} at line {line}")]
    ParseFailed {
        path: String,
        line: usize,
        kind: String,
    },

    #[error("{path} is not valid UTF-8")]
    InvalidUtf8 { path: String },
}
