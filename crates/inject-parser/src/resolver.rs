//! Directive resolver: binds directives to the struct they precede.
//!
//! Binding is positional. A cursor starts at the top of the file; each
//! struct, in source order, claims every directive whose comment starts at
//! or after the cursor and ends before the struct's closing `}`. The cursor
//! then moves past the struct's `type_spec`, so a directive is claimed by
//! at most one struct and never by a struct that ended before it.

use std::collections::HashSet;

use crate::types::{Directive, StructDecl};

/// Assign an insertion offset to each directive or drop it.
///
/// `directives` and `decls` must be in source order. The result holds only
/// the directives that survive, each with `insert_offset` set, in source
/// order. Dropped directives are:
/// - positioned after the last struct, or between a struct's `}` and its end
/// - requesting a field the target struct already declares
/// - repeating a field name an earlier directive already requested for the
///   same struct
pub fn resolve(directives: Vec<Directive>, decls: &[StructDecl]) -> Vec<Directive> {
    let mut pending = directives.into_iter().peekable();
    let mut resolved = Vec::new();
    let mut lower_bound = 0;

    for decl in decls {
        while let Some(skipped) = pending.next_if(|d| d.comment.start < lower_bound) {
            tracing::debug!(
                field = %skipped.field_text,
                "directive lies inside a struct declaration, dropped"
            );
        }

        let mut requested: HashSet<String> = HashSet::new();
        while let Some(mut directive) = pending.next_if(|d| d.comment.end < decl.field_list_end) {
            let name = directive.field_name().to_string();
            if decl.declares(&name) {
                tracing::debug!(
                    field = %name,
                    target_struct = %decl.name,
                    "field already declared, directive suppressed"
                );
                continue;
            }
            if !requested.insert(name.clone()) {
                tracing::debug!(
                    field = %name,
                    target_struct = %decl.name,
                    "field requested twice, later directive suppressed"
                );
                continue;
            }
            tracing::trace!(
                field = %name,
                target_struct = %decl.name,
                offset = decl.field_list_end,
                "directive resolved"
            );
            directive.insert_offset = Some(decl.field_list_end);
            resolved.push(directive);
        }

        lower_bound = decl.declaration_end;
    }

    for unmatched in pending {
        tracing::debug!(
            field = %unmatched.field_text,
            "no struct follows directive, dropped"
        );
    }

    resolved
}
