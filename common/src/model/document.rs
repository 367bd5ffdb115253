use serde::{Deserialize, Serialize};

/// Logical slot a file is uploaded into. The slot decides the client-side size
/// ceiling, the accepted file formats and the media-host transformation applied
/// to the stored URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Signature,
    Photo,
    /// SSLC or birth certificate, required when the applicant has no license yet.
    Sslc,
    License,
    Aadhar,
}

/// Front or back of a two-sided document (license, aadhar).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentSide {
    Front,
    Back,
}

/// Images are let through up to 5 MiB regardless of slot; the media host
/// resizes them on delivery. Non-image files keep the strict per-slot ceiling.
pub const IMAGE_SIZE_CEILING: u64 = 5 * 1024 * 1024;

impl DocumentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Signature => "signature",
            DocumentKind::Photo => "photo",
            DocumentKind::Sslc => "sslc",
            DocumentKind::License => "license",
            DocumentKind::Aadhar => "aadhar",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Signature => "Signature",
            DocumentKind::Photo => "Photo",
            DocumentKind::Sslc => "SSLC / Birth Certificate",
            DocumentKind::License => "Driving License",
            DocumentKind::Aadhar => "Aadhar Card",
        }
    }

    /// Per-slot upload ceiling for non-image files, in bytes.
    pub fn max_bytes(&self) -> u64 {
        match self {
            DocumentKind::Signature | DocumentKind::Photo => 20 * 1024,
            DocumentKind::Sslc | DocumentKind::License | DocumentKind::Aadhar => 500 * 1024,
        }
    }

    /// `accept` attribute for the file input of this slot.
    pub fn accept(&self) -> &'static str {
        match self {
            DocumentKind::Signature | DocumentKind::Photo => "image/*",
            DocumentKind::Sslc | DocumentKind::License | DocumentKind::Aadhar => ".pdf,image/*",
        }
    }

    /// Short hint shown under the upload box.
    pub fn size_hint(&self) -> &'static str {
        match self {
            DocumentKind::Signature | DocumentKind::Photo => "Max 20KB \u{2022} JPG, PNG",
            DocumentKind::Sslc => "Max 500KB \u{2022} PDF, JPG, PNG",
            DocumentKind::License | DocumentKind::Aadhar => "Max 500KB (PDF) \u{2022} 5MB (Image)",
        }
    }

    /// Delivery transformation segment for this slot. The photo is face-cropped
    /// to passport proportions, the signature to a wide strip; the document
    /// scans are only bounded, never cropped.
    pub fn transformation(&self) -> &'static str {
        match self {
            DocumentKind::Signature => "c_fill,w_300,h_100,q_auto,f_auto",
            DocumentKind::Photo => "c_fill,w_400,h_500,q_auto,f_auto,g_face",
            DocumentKind::Sslc => "c_limit,w_1200,h_1600,q_auto:good,f_auto",
            DocumentKind::License | DocumentKind::Aadhar => "c_limit,w_1000,h_700,q_auto:good,f_auto",
        }
    }

    /// Client-side gate run before any network call. Advisory only: it cuts off
    /// uploads that the media host would reject or shrink anyway, but the proxy
    /// does not re-validate what it forwards.
    pub fn check_file(&self, mime_type: &str, size: u64) -> Result<(), String> {
        let ceiling = if mime_type.starts_with("image/") {
            IMAGE_SIZE_CEILING
        } else {
            self.max_bytes()
        };
        if size > ceiling {
            return Err(format!(
                "File size must be less than {}KB",
                ceiling / 1024
            ));
        }
        if !mime_allowed(mime_type) {
            return Err("Invalid file type".to_string());
        }
        Ok(())
    }
}

impl DocumentSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentSide::Front => "front",
            DocumentSide::Back => "back",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DocumentSide::Front => "Front",
            DocumentSide::Back => "Back",
        }
    }
}

/// Every slot takes images; the document slots additionally take PDFs.
pub fn mime_allowed(mime_type: &str) -> bool {
    mime_type.starts_with("image/") || mime_type == "application/pdf"
}

/// Splices the slot's transformation segment into a media-host URL.
///
/// Only URLs of the media host are touched, and only when they contain exactly
/// one `/upload/` segment; anything else is returned unchanged. Callers apply
/// this to image uploads only, PDFs are stored and served as-is.
pub fn transformed_url(url: &str, kind: DocumentKind) -> String {
    if url.is_empty() || !url.contains("cloudinary.com") {
        return url.to_string();
    }
    let parts: Vec<&str> = url.split("/upload/").collect();
    if parts.len() != 2 {
        return url.to_string();
    }
    format!("{}/upload/{}/{}", parts[0], kind.transformation(), parts[1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn image_ceiling_is_relaxed_for_every_slot() {
        // 100 KiB image passes the signature slot even though its strict
        // ceiling is 20 KiB.
        assert!(DocumentKind::Signature
            .check_file("image/jpeg", 100 * 1024)
            .is_ok());
        assert!(DocumentKind::Signature
            .check_file("image/jpeg", IMAGE_SIZE_CEILING + 1)
            .is_err());
    }

    #[test]
    fn pdf_keeps_the_strict_ceiling() {
        assert!(DocumentKind::Aadhar
            .check_file("application/pdf", 500 * 1024)
            .is_ok());
        let err = DocumentKind::Aadhar
            .check_file("application/pdf", 500 * 1024 + 1)
            .unwrap_err();
        assert_eq!(err, "File size must be less than 500KB");
    }

    #[test]
    fn oversize_is_reported_before_the_type_check() {
        // An oversized file of a bogus type fails on size first.
        let err = DocumentKind::Photo
            .check_file("text/plain", 600 * 1024)
            .unwrap_err();
        assert!(err.starts_with("File size"));
    }

    #[test]
    fn non_image_non_pdf_is_rejected() {
        let err = DocumentKind::Sslc.check_file("text/html", 1024).unwrap_err();
        assert_eq!(err, "Invalid file type");
    }

    #[test]
    fn photo_and_signature_transformations_differ() {
        let url = "https://res.cloudinary.com/demo/image/upload/v1/driving_school/ABC/x.jpg";
        let photo = transformed_url(url, DocumentKind::Photo);
        let signature = transformed_url(url, DocumentKind::Signature);
        assert!(photo.contains("/upload/c_fill,w_400,h_500,q_auto,f_auto,g_face/"));
        assert!(signature.contains("/upload/c_fill,w_300,h_100,q_auto,f_auto/"));
        assert_ne!(photo, signature);
    }

    #[test]
    fn foreign_urls_are_left_alone() {
        let url = "https://files.example.com/upload/x.jpg";
        assert_eq!(transformed_url(url, DocumentKind::Photo), url);
        assert_eq!(transformed_url("", DocumentKind::Photo), "");
    }

    #[test]
    fn ambiguous_upload_segments_are_left_alone() {
        // More than one "/upload/" segment means we cannot tell where the
        // transformation belongs.
        let url = "https://res.cloudinary.com/demo/image/upload/a/upload/b.jpg";
        assert_eq!(transformed_url(url, DocumentKind::Aadhar), url);
    }
}
