use serde::{Deserialize, Serialize};

use crate::model::document::DocumentKind;

/// Vehicle class applied for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LicenseClass {
    #[serde(rename = "M/C")]
    MotorCycle,
    #[serde(rename = "LMV")]
    LightMotorVehicle,
    #[serde(rename = "M/C,LMV")]
    MotorCycleAndLmv,
    #[serde(rename = "Heavy")]
    Heavy,
}

impl LicenseClass {
    /// Parses the form selector value. `None` for the empty placeholder option.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "M/C" => Some(LicenseClass::MotorCycle),
            "LMV" => Some(LicenseClass::LightMotorVehicle),
            "M/C,LMV" => Some(LicenseClass::MotorCycleAndLmv),
            "Heavy" => Some(LicenseClass::Heavy),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LicenseClass::MotorCycle => "M/C",
            LicenseClass::LightMotorVehicle => "LMV",
            LicenseClass::MotorCycleAndLmv => "M/C,LMV",
            LicenseClass::Heavy => "Heavy",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Male" => Some(Gender::Male),
            "Female" => Some(Gender::Female),
            "Other" => Some(Gender::Other),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

/// One driving-license application, submitted atomically once the form and all
/// required document uploads are complete. Write-once: there is no edit or
/// resubmit flow, and persistence lives entirely in the external backend.
///
/// The document URL fields hold externally hosted file URLs produced by the
/// upload path; `license_file_type` / `aadhar_file_type` record the MIME type
/// of the front upload so the form knows whether a back side is expected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrivingLicenseApplication {
    pub institution_code: String,

    pub name: String,
    pub father_husband_name: String,
    pub date_of_birth: String,
    pub age: u32,
    pub place_of_birth: String,
    pub qualification: String,
    pub class: Option<LicenseClass>,
    pub blood_group: String,
    pub gender: Option<Gender>,

    pub applicant_mobile: String,
    pub emergency_mobile: String,
    pub aadhar_no: String,
    pub email_id: String,

    pub identification_mark1: String,
    pub identification_mark2: String,

    pub house: String,
    pub place: String,
    pub village: String,
    pub taluk: String,
    pub post_office: String,
    pub pin_code: String,
    pub district: String,

    pub signature_url: String,
    pub photo_url: String,
    pub sslc_url: String,
    pub license_url: String,
    pub license_back_url: String,
    pub aadhar_url: String,
    pub aadhar_back_url: String,

    pub license_file_type: String,
    pub aadhar_file_type: String,

    pub has_license: bool,
}

impl DrivingLicenseApplication {
    /// Document slots that still need an upload before this application may be
    /// submitted. Signature, photo and aadhar are always required; the license
    /// is required for applicants who already hold one, the SSLC / birth
    /// certificate for those who do not.
    pub fn missing_documents(&self) -> Vec<DocumentKind> {
        let mut missing = Vec::new();
        if self.signature_url.is_empty() {
            missing.push(DocumentKind::Signature);
        }
        if self.photo_url.is_empty() {
            missing.push(DocumentKind::Photo);
        }
        if self.aadhar_url.is_empty() {
            missing.push(DocumentKind::Aadhar);
        }
        if self.has_license {
            if self.license_url.is_empty() {
                missing.push(DocumentKind::License);
            }
        } else if self.sslc_url.is_empty() {
            missing.push(DocumentKind::Sslc);
        }
        missing
    }

    /// Blocking pre-submission check. Returns the message shown to the
    /// applicant for the first failing rule; nothing is sent while this errs.
    pub fn validate_for_submission(&self) -> Result<(), String> {
        if self.institution_code.is_empty() {
            return Err("Please select driving school".to_string());
        }
        if self.name.is_empty()
            || self.father_husband_name.is_empty()
            || self.date_of_birth.is_empty()
        {
            return Err("Please fill all required fields".to_string());
        }

        let missing = self.missing_documents();
        if missing
            .iter()
            .any(|kind| matches!(kind, DocumentKind::Signature | DocumentKind::Photo | DocumentKind::Aadhar))
        {
            return Err("Please upload Signature, Photo, and Aadhar documents".to_string());
        }
        if missing.contains(&DocumentKind::License) {
            return Err("Please upload existing license".to_string());
        }
        if missing.contains(&DocumentKind::Sslc) {
            return Err("Please upload SSLC/Birth Certificate".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled() -> DrivingLicenseApplication {
        DrivingLicenseApplication {
            institution_code: "ABC123".to_string(),
            name: "A. Applicant".to_string(),
            father_husband_name: "B. Parent".to_string(),
            date_of_birth: "2001-04-12".to_string(),
            signature_url: "https://cdn/sig.png".to_string(),
            photo_url: "https://cdn/photo.png".to_string(),
            aadhar_url: "https://cdn/aadhar.png".to_string(),
            sslc_url: "https://cdn/sslc.pdf".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn complete_application_passes() {
        assert_eq!(filled().validate_for_submission(), Ok(()));
    }

    #[test]
    fn school_must_be_selected_first() {
        let mut app = filled();
        app.institution_code.clear();
        assert_eq!(
            app.validate_for_submission(),
            Err("Please select driving school".to_string())
        );
    }

    #[test]
    fn identity_fields_are_required() {
        let mut app = filled();
        app.date_of_birth.clear();
        assert_eq!(
            app.validate_for_submission(),
            Err("Please fill all required fields".to_string())
        );
    }

    #[test]
    fn signature_photo_aadhar_always_required() {
        for clear in [0, 1, 2] {
            let mut app = filled();
            match clear {
                0 => app.signature_url.clear(),
                1 => app.photo_url.clear(),
                _ => app.aadhar_url.clear(),
            }
            assert_eq!(
                app.validate_for_submission(),
                Err("Please upload Signature, Photo, and Aadhar documents".to_string())
            );
        }
    }

    #[test]
    fn license_required_only_with_has_license() {
        let mut app = filled();
        app.has_license = true;
        assert_eq!(
            app.validate_for_submission(),
            Err("Please upload existing license".to_string())
        );
        assert_eq!(app.missing_documents(), vec![DocumentKind::License]);

        app.license_url = "https://cdn/license.jpg".to_string();
        // The certificate is no longer consulted once a license exists.
        app.sslc_url.clear();
        assert_eq!(app.validate_for_submission(), Ok(()));
    }

    #[test]
    fn certificate_required_without_license() {
        let mut app = filled();
        app.sslc_url.clear();
        assert_eq!(
            app.validate_for_submission(),
            Err("Please upload SSLC/Birth Certificate".to_string())
        );
        assert_eq!(app.missing_documents(), vec![DocumentKind::Sslc]);
    }

    #[test]
    fn wire_format_uses_camel_case_and_display_names() {
        let mut app = filled();
        app.class = Some(LicenseClass::MotorCycleAndLmv);
        app.gender = Some(Gender::Other);
        let json = serde_json::to_value(&app).unwrap();
        assert_eq!(json["institutionCode"], "ABC123");
        assert_eq!(json["fatherHusbandName"], "B. Parent");
        assert_eq!(json["class"], "M/C,LMV");
        assert_eq!(json["gender"], "Other");
        assert_eq!(json["hasLicense"], false);
        assert_eq!(json["sslcUrl"], "https://cdn/sslc.pdf");
    }
}
