use std::collections::HashSet;

use ast_grep_core::Node;

/// Byte offset of the `}` that closes a `field_declaration_list`.
pub(super) fn closing_brace_offset<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<usize> {
    node.children()
        .filter(|c| c.kind().as_ref() == "}")
        .last()
        .map(|brace| brace.range().start)
}

/// Extract every field name declared in a `field_declaration_list`.
///
/// Handles:
/// - Named fields, including shared entries: `X, Y int` registers `X` and `Y`
/// - Embedded types: `Config`, `*Logger`
/// - Qualified and generic embeds: `sync.Mutex` registers `Mutex`, `List[T]` registers `List`
pub(super) fn extract_field_names<D: ast_grep_core::Doc>(node: &Node<D>) -> HashSet<String> {
    let mut names = HashSet::new();
    for field in node.children() {
        if field.kind().as_ref() != "field_declaration" {
            continue;
        }
        let named: Vec<String> = field
            .children()
            .filter(|c| c.kind().as_ref() == "field_identifier")
            .map(|c| c.text().to_string())
            .collect();
        if named.is_empty() {
            names.extend(embedded_type_name(&field));
        } else {
            names.extend(named);
        }
    }
    names
}

fn embedded_type_name<D: ast_grep_core::Doc>(field: &Node<D>) -> Option<String> {
    field
        .dfs()
        .find(|c| c.kind().as_ref() == "type_identifier")
        .map(|c| c.text().to_string())
}
