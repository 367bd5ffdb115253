//! HTTP wrappers around the local proxy route.
//!
//! Every call goes through `/api?action=<name>` and comes back as the shared
//! JSON envelope; bodies are funnelled through `parse_api_body` so HTML error
//! pages and explicit `{error}` payloads turn into `Err` values before any
//! caller looks at the data. Nothing here retries: a failed call surfaces as
//! one error message and the form stays populated for a manual retry.

use common::model::application::DrivingLicenseApplication;
use common::model::school::DrivingSchool;
use common::requests::{SchoolRegistration, UploadRequest};
use common::response::{is_success, parse_api_body};
use gloo_net::http::Request;

pub async fn fetch_schools() -> Result<Vec<DrivingSchool>, String> {
    let response = Request::get("/api?action=getSchools")
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err("Failed to fetch schools".to_string());
    }
    response.json().await.map_err(|e| e.to_string())
}

pub async fn submit_application(application: &DrivingLicenseApplication) -> Result<(), String> {
    let response = Request::post("/api?action=submitApplication")
        .json(application)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    let ok = response.ok();
    let text = response.text().await.map_err(|e| e.to_string())?;

    let value = parse_api_body(&text)?;
    if !ok {
        return Err("Submission failed".to_string());
    }
    if !is_success(&value) {
        return Err("Application submission failed".to_string());
    }
    Ok(())
}

pub async fn add_school(registration: &SchoolRegistration) -> Result<(), String> {
    let response = Request::post("/api?action=addSchool")
        .json(registration)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    let text = response.text().await.map_err(|e| e.to_string())?;

    let value = parse_api_body(&text)?;
    if !is_success(&value) {
        return Err("Failed to add school".to_string());
    }
    Ok(())
}

/// Uploads one encoded file and returns the stored URL (untransformed).
pub async fn upload_file(request: &UploadRequest) -> Result<String, String> {
    let response = Request::post("/api?action=uploadFile")
        .json(request)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    let text = response.text().await.map_err(|e| e.to_string())?;

    let value = parse_api_body(&text)?;
    let url = value
        .get("url")
        .and_then(|u| u.as_str())
        .unwrap_or_default()
        .to_string();
    if !is_success(&value) && url.is_empty() {
        return Err("Upload failed: No URL returned".to_string());
    }
    Ok(url)
}
