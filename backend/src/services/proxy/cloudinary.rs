//! Direct media-host upload path.
//!
//! Mirrors what the hosted SDK does for a signed upload: the file travels as a
//! `data:` URI in a multipart form to the account's `auto/upload` endpoint,
//! authenticated with a SHA-256 request signature (signable parameters sorted
//! by key, joined `key=value&...`, secret appended, hex digest). Each call
//! creates one new object; there is no dedup and no overwrite-by-key.

use sha2::{Digest, Sha256};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::CloudinaryConfig;

/// Uploaded-object facts relayed back to the client.
pub struct UploadOutcome {
    pub url: String,
    pub format: Option<String>,
    pub resource_type: Option<String>,
}

#[derive(Clone)]
pub struct CloudinaryUploader {
    config: CloudinaryConfig,
    client: reqwest::Client,
}

impl CloudinaryUploader {
    pub fn new(config: CloudinaryConfig, client: reqwest::Client) -> Self {
        CloudinaryUploader { config, client }
    }

    /// Uploads one base64-encoded file into the school's folder and returns
    /// the publicly retrievable URL.
    pub async fn upload(
        &self,
        file_base64: &str,
        mime_type: &str,
        institution_code: &str,
    ) -> Result<UploadOutcome, String> {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| e.to_string())?
            .as_secs()
            .to_string();
        let folder = folder_for(institution_code);
        let signature = sign(
            &[("folder", &folder), ("timestamp", &timestamp)],
            &self.config.api_secret,
        );

        let endpoint = format!(
            "https://api.cloudinary.com/v1_1/{}/auto/upload",
            self.config.cloud_name
        );
        let form = reqwest::multipart::Form::new()
            .text("file", data_uri(mime_type, file_base64))
            .text("folder", folder)
            .text("timestamp", timestamp)
            .text("api_key", self.config.api_key.clone())
            .text("signature", signature);

        let response = self
            .client
            .post(&endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let status = response.status();
        let body: serde_json::Value = response.json().await.map_err(|e| e.to_string())?;

        if !status.is_success() {
            let message = body
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .unwrap_or("upload rejected");
            return Err(message.to_string());
        }

        let url = body
            .get("secure_url")
            .and_then(|u| u.as_str())
            .ok_or("upload response carries no secure_url")?
            .to_string();
        Ok(UploadOutcome {
            url,
            format: body
                .get("format")
                .and_then(|f| f.as_str())
                .map(|f| f.to_string()),
            resource_type: body
                .get("resource_type")
                .and_then(|r| r.as_str())
                .map(|r| r.to_string()),
        })
    }
}

/// Every school uploads into its own folder; blank codes fall back to the
/// shared one.
fn folder_for(institution_code: &str) -> String {
    if institution_code.is_empty() {
        "driving_school/general".to_string()
    } else {
        format!("driving_school/{}", institution_code)
    }
}

fn data_uri(mime_type: &str, file_base64: &str) -> String {
    format!("data:{};base64,{}", mime_type, file_base64)
}

/// Request signature over the signable parameters. The media host accepts
/// SHA-256 digests alongside the default SHA-1.
fn sign(params: &[(&str, &str)], api_secret: &str) -> String {
    let mut sorted: Vec<(&str, &str)> = params.to_vec();
    sorted.sort_by_key(|&(key, _)| key);
    let to_sign = sorted
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha256::new();
    hasher.update(to_sign.as_bytes());
    hasher.update(api_secret.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn signature_is_parameter_order_independent() {
        let forward = sign(&[("folder", "driving_school/ABC"), ("timestamp", "1700000000")], "s3cret");
        let reversed = sign(&[("timestamp", "1700000000"), ("folder", "driving_school/ABC")], "s3cret");
        assert_eq!(forward, reversed);
    }

    #[test]
    fn signature_is_a_hex_sha256_digest() {
        let signature = sign(&[("timestamp", "1700000000")], "s3cret");
        assert_eq!(signature.len(), 64);
        assert!(signature.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn signature_depends_on_the_secret() {
        let params = [("folder", "driving_school/ABC"), ("timestamp", "1700000000")];
        assert_ne!(sign(&params, "one"), sign(&params, "two"));
    }

    #[test]
    fn schools_get_their_own_folder() {
        assert_eq!(folder_for("ABC123"), "driving_school/ABC123");
        assert_eq!(folder_for(""), "driving_school/general");
    }

    #[test]
    fn file_is_wrapped_as_a_data_uri() {
        assert_eq!(
            data_uri("image/png", "aGVsbG8="),
            "data:image/png;base64,aGVsbG8="
        );
    }
}
