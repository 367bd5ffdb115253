use common::model::document::{DocumentKind, DocumentSide};
use common::model::school::DrivingSchool;

use super::state::Field;

pub enum Msg {
    Input(Field, String),
    SetHasLicense(bool),
    SchoolsLoaded(Vec<DrivingSchool>),
    SchoolsFailed,
    DocumentChanged {
        kind: DocumentKind,
        side: Option<DocumentSide>,
        url: String,
        mime_type: Option<String>,
    },
    Submit,
    SubmitFinished(Result<(), String>),
}
