use serde::{Deserialize, Serialize};

/// A registered driving school, as stored by the external spreadsheet backend.
///
/// Schools are created once through the admin page (`addSchool`) and read by the
/// public application form (`getSchools`) to populate the school selector. This
/// system exposes no update or delete path; lifecycle management, if any, lives
/// entirely in the external backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrivingSchool {
    /// Unique school identifier. Uppercase by convention (enforced at input time).
    pub code: String,
    pub name: String,
    pub email: String,
    /// Reference to the external storage folder that receives this school's documents.
    pub drive_folder_id: String,
    pub place: String,
    #[serde(default)]
    pub active: bool,
}
