//! State for the public application form.
//!
//! `FormFields` holds the raw input values exactly as typed; the typed
//! submission record is only built when the applicant presses submit. There is
//! no local persistence: a successful submission resets the fields, a failed
//! one leaves them untouched for a manual retry.

use common::model::application::{DrivingLicenseApplication, Gender, LicenseClass};
use common::model::document::{DocumentKind, DocumentSide};
use common::model::school::DrivingSchool;

/// Which form input changed. Used by the generic `Msg::Input` message so the
/// view does not need one message variant per field.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Field {
    InstitutionCode,
    Name,
    FatherHusbandName,
    DateOfBirth,
    Age,
    PlaceOfBirth,
    Qualification,
    Class,
    BloodGroup,
    Gender,
    ApplicantMobile,
    EmergencyMobile,
    AadharNo,
    EmailId,
    IdentificationMark1,
    IdentificationMark2,
    House,
    Place,
    Village,
    Taluk,
    PostOffice,
    PinCode,
    District,
}

/// Raw form inputs. Everything is a string until submission; `age` is parsed
/// and `class`/`gender` mapped to their enums in `to_application`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormFields {
    pub institution_code: String,
    pub name: String,
    pub father_husband_name: String,
    pub date_of_birth: String,
    pub age: String,
    pub place_of_birth: String,
    pub qualification: String,
    pub class: String,
    pub blood_group: String,
    pub gender: String,
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

impl FormFields {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::InstitutionCode => self.institution_code = value,
            Field::Name => self.name = value,
            Field::FatherHusbandName => self.father_husband_name = value,
            Field::DateOfBirth => self.date_of_birth = value,
            Field::Age => self.age = value,
            Field::PlaceOfBirth => self.place_of_birth = value,
            Field::Qualification => self.qualification = value,
            Field::Class => self.class = value,
            Field::BloodGroup => self.blood_group = value,
            Field::Gender => self.gender = value,
            Field::ApplicantMobile => self.applicant_mobile = value,
            Field::EmergencyMobile => self.emergency_mobile = value,
            Field::AadharNo => self.aadhar_no = value,
            Field::EmailId => self.email_id = value,
            Field::IdentificationMark1 => self.identification_mark1 = value,
            Field::IdentificationMark2 => self.identification_mark2 = value,
            Field::House => self.house = value,
            Field::Place => self.place = value,
            Field::Village => self.village = value,
            Field::Taluk => self.taluk = value,
            Field::PostOffice => self.post_office = value,
            Field::PinCode => self.pin_code = value,
            Field::District => self.district = value,
        }
    }

    /// Records an upload result for a document slot. The front slot of the
    /// two-sided documents also records the MIME type, which decides whether
    /// a back side is expected at all.
    pub fn set_document(
        &mut self,
        kind: DocumentKind,
        side: Option<DocumentSide>,
        url: String,
        mime_type: Option<String>,
    ) {
        match (kind, side) {
            (DocumentKind::Signature, _) => self.signature_url = url,
            (DocumentKind::Photo, _) => self.photo_url = url,
            (DocumentKind::Sslc, _) => self.sslc_url = url,
            (DocumentKind::License, Some(DocumentSide::Back)) => self.license_back_url = url,
            (DocumentKind::License, _) => {
                self.license_url = url;
                self.license_file_type = mime_type.unwrap_or_default();
            }
            (DocumentKind::Aadhar, Some(DocumentSide::Back)) => self.aadhar_back_url = url,
            (DocumentKind::Aadhar, _) => {
                self.aadhar_url = url;
                self.aadhar_file_type = mime_type.unwrap_or_default();
            }
        }
    }

    /// Builds the typed submission record from the raw inputs.
    pub fn to_application(&self) -> DrivingLicenseApplication {
        DrivingLicenseApplication {
            institution_code: self.institution_code.clone(),
            name: self.name.clone(),
            father_husband_name: self.father_husband_name.clone(),
            date_of_birth: self.date_of_birth.clone(),
            age: self.age.parse().unwrap_or(0),
            place_of_birth: self.place_of_birth.clone(),
            qualification: self.qualification.clone(),
            class: LicenseClass::parse(&self.class),
            blood_group: self.blood_group.clone(),
            gender: Gender::parse(&self.gender),
            applicant_mobile: self.applicant_mobile.clone(),
            emergency_mobile: self.emergency_mobile.clone(),
            aadhar_no: self.aadhar_no.clone(),
            email_id: self.email_id.clone(),
            identification_mark1: self.identification_mark1.clone(),
            identification_mark2: self.identification_mark2.clone(),
            house: self.house.clone(),
            place: self.place.clone(),
            village: self.village.clone(),
            taluk: self.taluk.clone(),
            post_office: self.post_office.clone(),
            pin_code: self.pin_code.clone(),
            district: self.district.clone(),
            signature_url: self.signature_url.clone(),
            photo_url: self.photo_url.clone(),
            sslc_url: self.sslc_url.clone(),
            license_url: self.license_url.clone(),
            license_back_url: self.license_back_url.clone(),
            aadhar_url: self.aadhar_url.clone(),
            aadhar_back_url: self.aadhar_back_url.clone(),
            license_file_type: self.license_file_type.clone(),
            aadhar_file_type: self.aadhar_file_type.clone(),
            has_license: self.has_license,
        }
    }
}

/// Component state: the form plus the school directory and the two pending
/// flags that disable the respective controls while a call is in flight.
pub struct ApplicationFormComponent {
    pub form: FormFields,
    pub schools: Vec<DrivingSchool>,
    pub loading_schools: bool,
    pub submitting: bool,
    /// Guard against running the first-render school load more than once.
    pub loaded: bool,
}

impl ApplicationFormComponent {
    pub fn new() -> Self {
        ApplicationFormComponent {
            form: FormFields::default(),
            schools: Vec::new(),
            loading_schools: true,
            submitting: false,
            loaded: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_falls_back_to_zero_when_unparsable() {
        let mut form = FormFields::default();
        form.age = "abc".to_string();
        assert_eq!(form.to_application().age, 0);
        form.age = "19".to_string();
        assert_eq!(form.to_application().age, 19);
    }

    #[test]
    fn front_upload_records_the_mime_type() {
        let mut form = FormFields::default();
        form.set_document(
            DocumentKind::License,
            Some(DocumentSide::Front),
            "https://cdn/license.jpg".to_string(),
            Some("image/jpeg".to_string()),
        );
        assert_eq!(form.license_url, "https://cdn/license.jpg");
        assert_eq!(form.license_file_type, "image/jpeg");
        assert!(form.license_back_url.is_empty());
    }

    #[test]
    fn back_upload_leaves_the_front_alone() {
        let mut form = FormFields::default();
        form.set_document(
            DocumentKind::Aadhar,
            Some(DocumentSide::Front),
            "https://cdn/front.jpg".to_string(),
            Some("image/jpeg".to_string()),
        );
        form.set_document(
            DocumentKind::Aadhar,
            Some(DocumentSide::Back),
            "https://cdn/back.jpg".to_string(),
            Some("image/jpeg".to_string()),
        );
        assert_eq!(form.aadhar_url, "https://cdn/front.jpg");
        assert_eq!(form.aadhar_back_url, "https://cdn/back.jpg");
        assert_eq!(form.aadhar_file_type, "image/jpeg");
    }

    #[test]
    fn clearing_a_front_slot_clears_its_mime_type() {
        let mut form = FormFields::default();
        form.set_document(
            DocumentKind::License,
            Some(DocumentSide::Front),
            "https://cdn/license.pdf".to_string(),
            Some("application/pdf".to_string()),
        );
        form.set_document(DocumentKind::License, Some(DocumentSide::Front), String::new(), None);
        assert!(form.license_url.is_empty());
        assert!(form.license_file_type.is_empty());
    }

    #[test]
    fn class_and_gender_map_to_enums() {
        let mut form = FormFields::default();
        form.class = "M/C,LMV".to_string();
        form.gender = "Female".to_string();
        let application = form.to_application();
        assert_eq!(application.class, Some(LicenseClass::MotorCycleAndLmv));
        assert_eq!(application.gender, Some(Gender::Female));

        form.class.clear();
        assert_eq!(form.to_application().class, None);
    }
}
