//! State for the admin page: the password gate, the add-school form and the
//! registered-schools list.
//!
//! The transitions live here as plain methods so the submit flow can be
//! exercised without a browser: a successful registration clears the form and
//! shows the success banner, an error from the backend (e.g. a duplicate
//! code) leaves the form populated and shows the message verbatim.

use common::model::school::DrivingSchool;
use common::requests::SchoolRegistration;

/// Which add-school input changed.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum AdminField {
    Code,
    Name,
    Email,
    Place,
    DriveFolderId,
}

pub struct AdminComponent {
    pub password: String,
    pub auth: bool,
    pub schools: Vec<DrivingSchool>,
    pub loading: bool,
    pub error: String,
    pub success: String,
    pub form: SchoolRegistration,
    pub saving: bool,
}

impl AdminComponent {
    pub fn new() -> Self {
        AdminComponent {
            password: String::new(),
            auth: false,
            schools: Vec::new(),
            loading: false,
            error: String::new(),
            success: String::new(),
            form: SchoolRegistration::default(),
            saving: false,
        }
    }

    pub fn set_field(&mut self, field: AdminField, value: String) {
        match field {
            // School codes are uppercase by convention; normalize as typed.
            AdminField::Code => self.form.code = value.to_uppercase(),
            AdminField::Name => self.form.name = value,
            AdminField::Email => self.form.email = value,
            AdminField::Place => self.form.place = value,
            AdminField::DriveFolderId => self.form.drive_folder_id = value,
        }
    }

    /// Compares the typed password against the compiled-in gate value. With
    /// no value compiled in, the gate never opens.
    pub fn apply_login(&mut self, expected: Option<&str>) {
        self.auth = matches!(expected, Some(value) if value == self.password);
    }

    pub fn begin_add(&mut self) {
        self.error.clear();
        self.success.clear();
        self.saving = true;
    }

    pub fn finish_add(&mut self, result: Result<(), String>) {
        self.saving = false;
        match result {
            Ok(()) => {
                self.success = "School added successfully!".to_string();
                self.form = SchoolRegistration::default();
            }
            Err(message) => self.error = message,
        }
    }

    pub fn finish_schools(&mut self, result: Result<Vec<DrivingSchool>, String>) {
        self.loading = false;
        if let Ok(schools) = result {
            self.schools = schools;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn registration() -> SchoolRegistration {
        SchoolRegistration {
            code: "ABC123".to_string(),
            name: "X".to_string(),
            email: "a@b.com".to_string(),
            drive_folder_id: "z".to_string(),
            place: "Y".to_string(),
        }
    }

    #[test]
    fn successful_add_clears_the_form_and_reports_success() {
        let mut admin = AdminComponent::new();
        admin.form = registration();
        admin.begin_add();
        assert!(admin.saving);

        admin.finish_add(Ok(()));
        assert!(!admin.saving);
        assert_eq!(admin.success, "School added successfully!");
        assert_eq!(admin.form, SchoolRegistration::default());
        assert!(admin.error.is_empty());
    }

    #[test]
    fn backend_error_keeps_the_form_populated() {
        let mut admin = AdminComponent::new();
        admin.form = registration();
        admin.begin_add();

        admin.finish_add(Err("Duplicate code".to_string()));
        assert_eq!(admin.error, "Duplicate code");
        assert!(admin.success.is_empty());
        assert_eq!(admin.form, registration());
    }

    #[test]
    fn a_new_attempt_clears_previous_banners() {
        let mut admin = AdminComponent::new();
        admin.finish_add(Err("Duplicate code".to_string()));
        admin.begin_add();
        assert!(admin.error.is_empty());
        assert!(admin.success.is_empty());
    }

    #[test]
    fn failed_school_fetch_leaves_the_list_empty() {
        let mut admin = AdminComponent::new();
        admin.loading = true;
        admin.finish_schools(Err("Failed to fetch schools".to_string()));
        assert!(admin.schools.is_empty());
        assert!(!admin.loading);
    }

    #[test]
    fn login_compares_against_the_compiled_value() {
        let mut admin = AdminComponent::new();
        admin.password = "letmein".to_string();
        admin.apply_login(Some("letmein"));
        assert!(admin.auth);

        admin.apply_login(Some("other"));
        assert!(!admin.auth);

        // No compiled-in password: the gate never opens, even for "".
        admin.password.clear();
        admin.apply_login(None);
        assert!(!admin.auth);
    }

    #[test]
    fn school_codes_are_uppercased_as_typed() {
        let mut admin = AdminComponent::new();
        admin.set_field(AdminField::Code, "abc123".to_string());
        assert_eq!(admin.form.code, "ABC123");
    }
}
