//! Single-file pass: parse, scan, locate, resolve.

use crate::error::ParserError;
use crate::locator::locate_structs;
use crate::parser::parse_go;
use crate::resolver::resolve;
use crate::scanner::scanner;
use crate::splice::splice;
use crate::types::Directive;

/// The resolved injections for one file, together with its original content.
#[derive(Debug, Clone)]
pub struct FilePlan {
    source: String,
    directives: Vec<Directive>,
}

impl FilePlan {
    /// Directives that will be written, in source order.
    #[must_use]
    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    #[must_use]
    pub fn injected_count(&self) -> usize {
        self.directives.len()
    }

    /// Splice every resolved field into a copy of the original content.
    #[must_use]
    pub fn render(&self, indent: &str) -> Vec<u8> {
        splice(self.source.as_bytes(), &self.directives, indent)
    }
}

/// Plan the injections for one Go source.
///
/// Returns `Ok(None)` when the file has no directive that survives
/// resolution, in which case the file must be left untouched.
///
/// # Errors
/// Returns `ParserError::ParseFailed` if the source does not parse cleanly,
/// even when it carries no directives.
pub fn plan_source(label: &str, source: String) -> Result<Option<FilePlan>, ParserError> {
    let tree = parse_go(label, &source)?;

    let directives = scanner().scan(&tree);
    if directives.is_empty() {
        tracing::debug!(file = %label, "no directives");
        return Ok(None);
    }
    let scanned = directives.len();

    let structs = locate_structs(&tree);
    let resolved = resolve(directives, &structs);
    tracing::debug!(
        file = %label,
        scanned,
        structs = structs.len(),
        resolved = resolved.len(),
        "planned injections"
    );

    if resolved.is_empty() {
        return Ok(None);
    }
    Ok(Some(FilePlan {
        source,
        directives: resolved,
    }))
}

/// Plan the injections for raw file content.
///
/// # Errors
/// Returns `ParserError::InvalidUtf8` for non-UTF-8 content, otherwise the
/// errors of [`plan_source`].
pub fn plan_bytes(label: &str, content: Vec<u8>) -> Result<Option<FilePlan>, ParserError> {
    let source = String::from_utf8(content).map_err(|_| ParserError::InvalidUtf8 {
        path: label.to_string(),
    })?;
    plan_source(label, source)
}
