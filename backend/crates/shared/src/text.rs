//! Form field helpers shared by the account and catalog inputs.

/// Trimmed value, or `None` when absent or blank.
///
/// ```rust
/// use kernel::text::required;
///
/// assert_eq!(required(Some(" Hats ".to_string())).as_deref(), Some("Hats"));
/// assert_eq!(required(Some("  ".to_string())), None);
/// ```
pub fn required(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::required;

    #[test]
    fn trims_and_rejects_blank() {
        assert_eq!(required(Some("  Alice ".to_string())), Some("Alice".to_string()));
        assert_eq!(required(Some("\t\n".to_string())), None);
        assert_eq!(required(None), None);
    }

    #[test]
    fn inner_whitespace_is_kept() {
        assert_eq!(
            required(Some(" Main Street ".to_string())),
            Some("Main Street".to_string())
        );
    }
}
