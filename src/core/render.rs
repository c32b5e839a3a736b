//! Placeholder substitution for command templates.

use crate::utils::sanitize;

/// Render a command template against one row.
///
/// Index 0 is the row ordinal, index i >= 1 is field i-1 (sanitized
/// first when `sanitize_fields` is set; the ordinal never is). Every
/// literal `{i}` occurrence is replaced by whole-string substitution in
/// ascending index order, so a substituted value that happens to contain
/// a later placeholder's text is itself rewritten by that later index.
/// A placeholder without a corresponding value is left verbatim.
pub fn inject_fields(
    template: &str,
    ordinal: usize,
    fields: &[String],
    sanitize_fields: bool,
) -> String {
    let mut values = Vec::with_capacity(fields.len() + 1);
    values.push(ordinal.to_string());
    for field in fields {
        if sanitize_fields {
            values.push(sanitize::escape_text(field));
        } else {
            values.push(field.clone());
        }
    }

    let mut rendered = template.to_string();
    for (i, value) in values.iter().enumerate() {
        let placeholder = format!("{{{}}}", i);
        rendered = rendered.replace(&placeholder, value);
    }

    rendered
}

/// Summary of the placeholders available for a header, in header order.
///
/// `["Name", "City"]` renders as
/// `Fields: {0}=(line number) {1}=Name {2}=City`.
pub fn available_fields(header: &[String]) -> String {
    let mut parts = Vec::with_capacity(header.len() + 1);
    parts.push("{0}=(line number)".to_string());
    for (i, name) in header.iter().enumerate() {
        parts.push(format!("{{{}}}={}", i + 1, name));
    }
    format!("Fields: {}", parts.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn injects_ordinal_and_fields_in_order() {
        let rendered = inject_fields("echo {0} {1} {2}", 1, &row(&["Ann", "Paris"]), false);
        assert_eq!(rendered, "echo 1 Ann Paris");
    }

    #[test]
    fn injects_repeated_placeholders() {
        let rendered = inject_fields("mv {1}.pdf {1}-{2}.pdf", 5, &row(&["John", "Al Bano"]), false);
        assert_eq!(rendered, "mv John.pdf John-Al Bano.pdf");
    }

    #[test]
    fn sanitizes_fields_but_not_ordinal() {
        let rendered = inject_fields("mkdir {0}-{2}", 3, &row(&["Ann", "New York"]), true);
        assert_eq!(rendered, "mkdir 3-New_York");
    }

    #[test]
    fn leaves_missing_field_placeholder_verbatim() {
        let rendered = inject_fields("echo {1} {4}", 1, &row(&["Ann", "Paris"]), false);
        assert_eq!(rendered, "echo Ann {4}");
    }

    #[test]
    fn value_containing_later_placeholder_is_rewritten() {
        // Index-ascending whole-string substitution: the "{2}" that the
        // first field smuggles in is still live when index 2 is replaced.
        let rendered = inject_fields("echo {1}", 1, &row(&["see {2}", "Paris"]), false);
        assert_eq!(rendered, "echo see Paris");
    }

    #[test]
    fn value_containing_earlier_placeholder_is_left_alone() {
        let rendered = inject_fields("echo {2}", 1, &row(&["Ann", "use {1}"]), false);
        assert_eq!(rendered, "echo use {1}");
    }

    #[test]
    fn rendering_is_deterministic() {
        let fields = row(&["Ann", "Paris"]);
        let first = inject_fields("cp {1} {2}", 7, &fields, false);
        let second = inject_fields("cp {1} {2}", 7, &fields, false);
        assert_eq!(first, second);
    }

    #[test]
    fn available_fields_lists_header_in_order() {
        let header = row(&["Name", "City"]);
        assert_eq!(
            available_fields(&header),
            "Fields: {0}=(line number) {1}=Name {2}=City"
        );
    }

    #[test]
    fn available_fields_with_empty_header_row() {
        assert_eq!(available_fields(&[]), "Fields: {0}=(line number)");
    }
}
