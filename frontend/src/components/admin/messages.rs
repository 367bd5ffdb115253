use common::model::school::DrivingSchool;

use super::state::AdminField;

pub enum Msg {
    SetPassword(String),
    Login,
    Logout,
    Input(AdminField, String),
    AddSchool,
    AddFinished(Result<(), String>),
    SchoolsLoaded(Result<Vec<DrivingSchool>, String>),
}
