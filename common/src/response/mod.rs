//! Response-envelope conventions shared by every caller of the proxy.
//!
//! Both external collaborators answer with a JSON object carrying either
//! `{"success": true, ...}` or `{"error": "<message>"}`. Misconfigured
//! endpoints answer with an HTML error page instead; those bodies start with
//! `<` and must be rejected before any JSON parsing is attempted.

use serde::{Deserialize, Serialize};

/// Successful reply of the direct media-host upload path.
///
/// `resource_type` keeps the media host's snake_case spelling since the body
/// is relayed to callers as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    pub url: String,
    pub format: Option<String>,
    pub resource_type: Option<String>,
}

/// Classifies a raw proxy response body.
///
/// Returns the parsed JSON value, or the error message to surface: the
/// extracted `error` payload when present, a generic description otherwise.
pub fn parse_api_body(text: &str) -> Result<serde_json::Value, String> {
    if text.trim_start().starts_with('<') {
        return Err("Server returned HTML instead of JSON".to_string());
    }
    let value: serde_json::Value = serde_json::from_str(text).map_err(|_| {
        let head: String = text.chars().take(100).collect();
        format!("Server returned invalid JSON: {head}")
    })?;
    if let Some(message) = value.get("error").and_then(|e| e.as_str()) {
        return Err(message.to_string());
    }
    Ok(value)
}

/// `true` when the envelope carries a truthy `success` flag.
pub fn is_success(value: &serde_json::Value) -> bool {
    value.get("success").and_then(|s| s.as_bool()).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn html_bodies_are_rejected_before_parsing() {
        let err = parse_api_body("<!DOCTYPE html><html>Sign in</html>").unwrap_err();
        assert_eq!(err, "Server returned HTML instead of JSON");
        // Leading whitespace does not disguise the error page.
        assert!(parse_api_body("  <html></html>").is_err());
    }

    #[test]
    fn explicit_error_payloads_surface_verbatim() {
        let err = parse_api_body(r#"{"error":"Duplicate code"}"#).unwrap_err();
        assert_eq!(err, "Duplicate code");
    }

    #[test]
    fn malformed_json_becomes_a_generic_message() {
        let err = parse_api_body("success=true").unwrap_err();
        assert!(err.starts_with("Server returned invalid JSON:"));
    }

    #[test]
    fn success_envelopes_pass_through() {
        let value = parse_api_body(r#"{"success":true,"url":"https://cdn/x"}"#).unwrap();
        assert!(is_success(&value));
        assert_eq!(value["url"], "https://cdn/x");
    }

    #[test]
    fn missing_success_flag_is_not_success() {
        let value = parse_api_body(r#"{"url":"https://cdn/x"}"#).unwrap();
        assert!(!is_success(&value));
    }
}
