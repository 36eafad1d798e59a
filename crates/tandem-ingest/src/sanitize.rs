//! Free-text field sanitization

/// Maximum length of any free-text field after sanitization
pub const MAX_FIELD_LEN: usize = 1000;

/// Sentinel default for blank descriptive fields
pub const NOT_SPECIFIED: &str = "Not specified";

/// Trim and length-cap a raw field value
///
/// Blank input collapses to the empty string; callers that need the
/// `"Not specified"` sentinel apply it via [`sanitize_or_default`].
/// The cap is applied on a character boundary so multi-byte input never
/// produces invalid UTF-8 slices.
pub fn sanitize_text(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    trimmed.chars().take(MAX_FIELD_LEN).collect()
}

/// Sanitize a descriptive field, substituting the sentinel when blank
pub fn sanitize_or_default(raw: &str) -> String {
    let cleaned = sanitize_text(raw);
    if cleaned.is_empty() {
        NOT_SPECIFIED.to_string()
    } else {
        cleaned
    }
}
