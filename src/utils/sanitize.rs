//! Filesystem-safe field sanitization.

/// Replace every character outside `[A-Za-z0-9_-]` with `_`.
///
/// Makes arbitrary field values (names, titles) safe to splice into a
/// command as path segments. Pure and total: there is no input this
/// rejects.
pub fn escape_text(value: &str) -> String {
    value
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
