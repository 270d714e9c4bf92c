//! Structural locator for top-level Go type declarations.
//!
//! Yields one [`StructDecl`] per struct `type_spec`, in source order.
//! Grouped `type ( ... )` blocks contribute one entry per struct spec;
//! aliases, interfaces, function types and named scalars are skipped.

mod helpers;

use ast_grep_core::Node;

use crate::types::StructDecl;

/// Locate every top-level struct declaration of a parsed Go file.
pub fn locate_structs<D: ast_grep_core::Doc>(root: &ast_grep_core::AstGrep<D>) -> Vec<StructDecl> {
    root.root()
        .children()
        .filter(|child| child.kind().as_ref() == "type_declaration")
        .flat_map(|decl| process_type_declaration(&decl))
        .collect()
}

// ── type_declaration ──────────────────────────────────────────────

fn process_type_declaration<D: ast_grep_core::Doc>(node: &Node<D>) -> Vec<StructDecl> {
    node.children()
        .filter(|child| child.kind().as_ref() == "type_spec")
        .filter_map(|spec| process_type_spec(&spec))
        .collect()
}

fn process_type_spec<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<StructDecl> {
    let name = node
        .children()
        .find(|c| c.kind().as_ref() == "type_identifier")
        .map(|n| n.text().to_string())?;

    let struct_type = node
        .children()
        .find(|c| c.kind().as_ref() == "struct_type")?;
    let field_list = struct_type
        .children()
        .find(|c| c.kind().as_ref() == "field_declaration_list")?;

    let field_list_end = helpers::closing_brace_offset(&field_list)?;
    let field_names = helpers::extract_field_names(&field_list);

    tracing::trace!(
        target_struct = %name,
        field_list_end,
        fields = field_names.len(),
        "located struct"
    );

    Some(StructDecl {
        name,
        field_list_end,
        declaration_end: node.range().end,
        field_names,
    })
}
