//! Required-field helpers shared by the services.

/// Treat absent and empty strings alike when validating required fields.
pub(crate) fn present(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|s| !s.is_empty())
}
