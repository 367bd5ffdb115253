use serde::{Deserialize, Serialize};

use crate::model::document::{DocumentKind, DocumentSide};

/// JSON payload of the `uploadFile` action: one base64-encoded file plus the
/// slot it belongs to and the owning school.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    /// Base64-encoded file contents (no data-URI prefix).
    pub file: String,
    pub file_name: String,
    pub mime_type: String,
    #[serde(rename = "type")]
    pub kind: DocumentKind,
    pub side: Option<DocumentSide>,
    pub institution_code: String,
}

/// Admin payload of the `addSchool` action. Matches the school record minus
/// the `active` flag, which the backend manages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolRegistration {
    pub code: String,
    pub name: String,
    pub email: String,
    pub drive_folder_id: String,
    pub place: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn upload_request_wire_names() {
        let req = UploadRequest {
            file: "aGVsbG8=".to_string(),
            file_name: "sig.png".to_string(),
            mime_type: "image/png".to_string(),
            kind: DocumentKind::Signature,
            side: None,
            institution_code: "ABC123".to_string(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["type"], "signature");
        assert_eq!(json["side"], serde_json::Value::Null);
        assert_eq!(json["institutionCode"], "ABC123");
        assert_eq!(json["mimeType"], "image/png");
    }

    #[test]
    fn sides_serialize_lowercase() {
        let req = UploadRequest {
            file: String::new(),
            file_name: "aadhar.jpg".to_string(),
            mime_type: "image/jpeg".to_string(),
            kind: DocumentKind::Aadhar,
            side: Some(DocumentSide::Back),
            institution_code: "XYZ".to_string(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["side"], "back");
    }
}
