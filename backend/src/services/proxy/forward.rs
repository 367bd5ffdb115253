//! Forwarding helpers shared by the GET and POST handlers: script URL query
//! construction, the outbound calls and verbatim response relaying.

use actix_web::http::StatusCode;
use actix_web::HttpResponse;

use super::ProxyState;

/// Body fields mirrored into the script URL's query string on JSON forwards.
/// The external backend reads some of these from the query rather than the
/// body, so the duplication is deliberate and must be preserved.
const MIRRORED_FIELDS: [&str; 3] = ["institutionCode", "type", "side"];

/// Builds the query parameters for a JSON forward: the `action` plus every
/// mirrored field that is present and non-empty in the body.
pub fn mirrored_query(action: &str, body: &serde_json::Value) -> Vec<(String, String)> {
    let mut params = vec![("action".to_string(), action.to_string())];
    for field in MIRRORED_FIELDS {
        if let Some(value) = body.get(field).and_then(|v| v.as_str()) {
            if !value.is_empty() {
                params.push((field.to_string(), value.to_string()));
            }
        }
    }
    params
}

/// `GET {script_url}?action=<action>`, relayed as-is.
pub async fn forward_get(state: &ProxyState, action: &str) -> Result<HttpResponse, String> {
    let response = state
        .client
        .get(&state.script_url)
        .query(&[("action", action)])
        .send()
        .await
        .map_err(|e| e.to_string())?;
    relay(response).await
}

/// Forwards a parsed JSON body, mirroring the known fields into the query.
pub async fn forward_json(
    state: &ProxyState,
    action: &str,
    body: &serde_json::Value,
) -> Result<HttpResponse, String> {
    let response = state
        .client
        .post(&state.script_url)
        .query(&mirrored_query(action, body))
        .json(body)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    relay(response).await
}

/// Repackages an uploaded file into a fresh multipart request. Only the file
/// travels in the form body; the descriptive fields go into the query string.
pub async fn forward_multipart(
    state: &ProxyState,
    action: &str,
    file: FilePart,
    kind: &str,
    side: Option<&str>,
    institution_code: &str,
) -> Result<HttpResponse, String> {
    let mut params = vec![
        ("action".to_string(), action.to_string()),
        ("type".to_string(), kind.to_string()),
        ("institutionCode".to_string(), institution_code.to_string()),
    ];
    if let Some(side) = side {
        params.push(("side".to_string(), side.to_string()));
    }

    let mut part = reqwest::multipart::Part::bytes(file.bytes).file_name(file.file_name);
    if let Some(content_type) = &file.content_type {
        part = part.mime_str(content_type).map_err(|e| e.to_string())?;
    }
    let form = reqwest::multipart::Form::new().part("file", part);

    let response = state
        .client
        .post(&state.script_url)
        .query(&params)
        .multipart(form)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    relay(response).await
}

/// One uploaded file drained from the inbound multipart stream.
pub struct FilePart {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub content_type: Option<String>,
}

/// Relays an upstream response: same status, body text verbatim, declared as
/// JSON (the script endpoint answers JSON text even on errors).
pub async fn relay(response: reqwest::Response) -> Result<HttpResponse, String> {
    let status = StatusCode::from_u16(response.status().as_u16()).map_err(|e| e.to_string())?;
    let text = response.text().await.map_err(|e| e.to_string())?;
    Ok(HttpResponse::build(status)
        .content_type("application/json")
        .body(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn action_is_always_first_in_the_query() {
        let params = mirrored_query("submitApplication", &json!({}));
        assert_eq!(
            params,
            vec![("action".to_string(), "submitApplication".to_string())]
        );
    }

    #[test]
    fn known_body_fields_are_mirrored() {
        let body = json!({
            "institutionCode": "ABC123",
            "type": "photo",
            "side": "front",
            "name": "not mirrored",
        });
        let params = mirrored_query("uploadFile", &body);
        assert_eq!(
            params,
            vec![
                ("action".to_string(), "uploadFile".to_string()),
                ("institutionCode".to_string(), "ABC123".to_string()),
                ("type".to_string(), "photo".to_string()),
                ("side".to_string(), "front".to_string()),
            ]
        );
    }

    #[test]
    fn empty_and_non_string_fields_are_skipped() {
        let body = json!({
            "institutionCode": "",
            "type": 7,
            "side": null,
        });
        let params = mirrored_query("addSchool", &body);
        assert_eq!(params, vec![("action".to_string(), "addSchool".to_string())]);
    }
}
