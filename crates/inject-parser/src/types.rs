//! Core data types shared by the scanner, locator, resolver and splicer.

use std::collections::HashSet;
use std::ops::Range;

/// A requested field injection, read from one `@inject_field:` comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    /// Verbatim field declaration to insert, trimmed.
    pub field_text: String,
    /// Byte range of the comment that declared the directive.
    pub comment: Range<usize>,
    /// Offset in the original buffer where `field_text` goes.
    ///
    /// `None` until the resolver binds the directive to a struct.
    pub insert_offset: Option<usize>,
}

impl Directive {
    #[must_use]
    pub fn new(field_text: impl Into<String>, comment: Range<usize>) -> Self {
        Self {
            field_text: field_text.into(),
            comment,
            insert_offset: None,
        }
    }

    /// Name of the field this directive declares.
    #[must_use]
    pub fn field_name(&self) -> &str {
        field_name(&self.field_text)
    }
}

/// One top-level Go struct type declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructDecl {
    pub name: String,
    /// Byte offset of the closing `}` of the field list; text inserted here
    /// lands immediately before the delimiter.
    pub field_list_end: usize,
    /// Exclusive end byte of the whole `type_spec`.
    pub declaration_end: usize,
    pub field_names: HashSet<String>,
}

impl StructDecl {
    #[must_use]
    pub fn declares(&self, field: &str) -> bool {
        self.field_names.contains(field)
    }
}

/// Extract the field name from a raw field declaration.
///
/// The name is the token before the first whitespace or comma. For embedded
/// fields (`*Logger`, `pkg.Logger`, `List[T]`) the bare type name is returned,
/// which is the name Go gives the embedded field.
#[must_use]
pub fn field_name(field_text: &str) -> &str {
    let token = field_text
        .trim_start()
        .split(|c: char| c.is_whitespace() || c == ',')
        .next()
        .unwrap_or_default();
    let token = token.trim_start_matches('*');
    let token = token.split('[').next().unwrap_or(token);
    token.rsplit('.').next().unwrap_or(token)
}
