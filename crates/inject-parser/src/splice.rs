//! Splice engine: writes resolved fields into a copy of the original buffer.
//!
//! Every offset refers to the original buffer. Insertions are applied in one
//! pass over the original in ascending offset order, which yields the same
//! bytes as applying them in descending order against a growing buffer.
//! Ties keep directive order, so several fields bound to one struct come out
//! in the order their directives were written.

use crate::types::Directive;

/// Indentation Go uses for struct fields.
pub const DEFAULT_INDENT: &str = "\t";

/// Produce a new buffer with every resolved directive inserted as its own line.
///
/// Each inserted line is `indent + field_text` followed by the line ending of
/// the brace's line (`\r\n` or `\n`). A closing `}` that sits on its own,
/// possibly indented, line keeps that line: the field goes in front of the
/// brace's indentation. When other text precedes the brace on its line
/// (`struct{}`, `struct { A int }`) that text loses its trailing blanks and a
/// line break is emitted first.
/// Unresolved directives are ignored; offsets past the end of `original` are
/// clamped to its end.
#[must_use]
pub fn splice(original: &[u8], directives: &[Directive], indent: &str) -> Vec<u8> {
    let mut insertions: Vec<(usize, &str)> = directives
        .iter()
        .filter_map(|d| {
            let offset = d.insert_offset?.min(original.len());
            let at = line_start(original, offset).unwrap_or(offset);
            Some((at, d.field_text.as_str()))
        })
        .collect();
    // Stable: equal offsets stay in directive order.
    insertions.sort_by_key(|(offset, _)| *offset);

    let added: usize = insertions
        .iter()
        .map(|(_, text)| indent.len() + text.len() + 2)
        .sum();
    let mut spliced = Vec::with_capacity(original.len() + added);
    let mut cursor = 0;

    for (offset, text) in insertions {
        spliced.extend_from_slice(&original[cursor..offset]);
        cursor = offset;

        let eol = line_ending(original, offset);
        if spliced.last().is_some_and(|b| *b != b'\n') {
            while spliced.last().is_some_and(|b| *b == b' ' || *b == b'\t') {
                spliced.pop();
            }
            spliced.extend_from_slice(eol);
        }
        spliced.extend_from_slice(indent.as_bytes());
        spliced.extend_from_slice(text.as_bytes());
        spliced.extend_from_slice(eol);
    }
    spliced.extend_from_slice(&original[cursor..]);

    spliced
}

/// Start of the line holding `offset` when only spaces or tabs precede it.
fn line_start(original: &[u8], offset: usize) -> Option<usize> {
    let start = original[..offset]
        .iter()
        .rposition(|b| *b != b' ' && *b != b'\t')
        .map_or(0, |i| i + 1);
    (start == 0 || original[start - 1] == b'\n').then_some(start)
}

/// Line ending of the line holding `offset`, falling back to the previous
/// line when it is the last one and unterminated.
fn line_ending(original: &[u8], offset: usize) -> &'static [u8] {
    let newline = original[offset..]
        .iter()
        .position(|b| *b == b'\n')
        .map(|i| offset + i)
        .or_else(|| original[..offset].iter().rposition(|b| *b == b'\n'));
    match newline {
        Some(i) if i > 0 && original[i - 1] == b'\r' => b"\r\n",
        _ => b"\n",
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn resolved(text: &str, offset: usize) -> Directive {
        let mut d = Directive::new(text, 0..0);
        d.insert_offset = Some(offset);
        d
    }

    fn spliced_str(original: &str, directives: &[Directive]) -> String {
        String::from_utf8(splice(original.as_bytes(), directives, DEFAULT_INDENT))
            .expect("splice keeps utf-8")
    }

    #[test]
    fn inserts_before_closing_brace() {
        let original = "type T struct {\n\tA int\n}\n";
        let brace = original.find('}').expect("brace");
        let out = spliced_str(original, &[resolved("B string", brace)]);
        assert_eq!(out, "type T struct {\n\tA int\n\tB string\n}\n");
    }

    #[test]
    fn shared_offset_keeps_directive_order() {
        let original = "type T struct {\n\tA int\n}\n";
        let brace = original.find('}').expect("brace");
        let out = spliced_str(
            original,
            &[resolved("D1 int", brace), resolved("D2 int", brace), resolved("D3 int", brace)],
        );
        assert_eq!(out, "type T struct {\n\tA int\n\tD1 int\n\tD2 int\n\tD3 int\n}\n");
    }

    #[test]
    fn later_offsets_do_not_shift_earlier_ones() {
        let original = "type A struct {\n}\n\ntype B struct {\n}\n";
        let first = original.find('}').expect("first brace");
        let second = original.rfind('}').expect("second brace");
        let out = spliced_str(original, &[resolved("Y int", second), resolved("X int", first)]);
        assert_eq!(
            out,
            "type A struct {\n\tX int\n}\n\ntype B struct {\n\tY int\n}\n"
        );
    }

    #[test]
    fn single_line_struct_gets_own_line() {
        let original = "type T struct{}\n";
        let brace = original.find('}').expect("brace");
        let out = spliced_str(original, &[resolved("A int", brace), resolved("B int", brace)]);
        assert_eq!(out, "type T struct{\n\tA int\n\tB int\n}\n");
    }

    #[test]
    fn indented_closing_brace_keeps_its_indentation() {
        let original = "type (\n\tT struct {\n\t\tA int\n\t}\n)\n";
        let brace = original.find('}').expect("brace");
        let out = spliced_str(original, &[resolved("B int", brace)]);
        assert_eq!(out, "type (\n\tT struct {\n\t\tA int\n\tB int\n\t}\n)\n");
    }

    #[test]
    fn brace_after_fields_on_one_line() {
        let original = "type T struct { A int }\n";
        let brace = original.find('}').expect("brace");
        let out = spliced_str(original, &[resolved("B int", brace)]);
        assert_eq!(out, "type T struct { A int\n\tB int\n}\n");
    }

    #[test]
    fn empty_braces_after_space_leave_no_trailing_blank() {
        let original = "type T struct {}\n";
        let brace = original.find('}').expect("brace");
        let out = spliced_str(original, &[resolved("A int", brace)]);
        assert_eq!(out, "type T struct {\n\tA int\n}\n");
    }

    #[test]
    fn crlf_source_keeps_crlf_line_endings() {
        let original = "type T struct {\r\n\tA int\r\n}\r\n";
        let brace = original.find('}').expect("brace");
        let out = spliced_str(original, &[resolved("B string", brace), resolved("C int", brace)]);
        assert_eq!(out, "type T struct {\r\n\tA int\r\n\tB string\r\n\tC int\r\n}\r\n");
    }

    #[test]
    fn crlf_single_line_struct_breaks_with_crlf() {
        let original = "type T struct{}\r\n";
        let brace = original.find('}').expect("brace");
        let out = spliced_str(original, &[resolved("A int", brace)]);
        assert_eq!(out, "type T struct{\r\n\tA int\r\n}\r\n");
    }

    #[test]
    fn unterminated_last_line_uses_previous_line_ending() {
        let original = "type T struct {\r\n\tA int\r\n}";
        let brace = original.find('}').expect("brace");
        let out = spliced_str(original, &[resolved("B int", brace)]);
        assert_eq!(out, "type T struct {\r\n\tA int\r\n\tB int\r\n}");
    }

    #[test]
    fn unresolved_directives_are_ignored() {
        let original = "type T struct {\n}\n";
        let out = spliced_str(original, &[Directive::new("A int", 0..0)]);
        assert_eq!(out, original);
    }

    #[test]
    fn original_buffer_is_untouched() {
        let original = b"type T struct {\n}\n".to_vec();
        let before = original.clone();
        let out = splice(&original, &[resolved("A int", 16)], DEFAULT_INDENT);
        assert_eq!(original, before);
        assert_ne!(out, before);
    }

    #[test]
    fn custom_indent_is_used() {
        let original = "type T struct {\n}\n";
        let brace = original.find('}').expect("brace");
        let out = splice(original.as_bytes(), &[resolved("A int", brace)], "    ");
        assert_eq!(out, b"type T struct {\n    A int\n}\n".to_vec());
    }

    #[test]
    fn every_resolved_directive_adds_exactly_one_line() {
        let original = "type T struct {\n}\n";
        let brace = original.find('}').expect("brace");
        let directives: Vec<Directive> = (0..5).map(|i| resolved(&format!("F{i} int"), brace)).collect();
        let out = spliced_str(original, &directives);
        assert_eq!(out.lines().count(), original.lines().count() + 5);
    }
}
