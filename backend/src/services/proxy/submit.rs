use actix_multipart::Multipart;
use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use common::response::UploadResponse;
use futures_util::StreamExt;
use log::{error, info};
use serde_json::json;

use super::fetch::ActionQuery;
use super::forward::{self, FilePart};
use super::{ProxyState, UploadStrategy};

/// `POST /api?action=<name>`: routes on the inbound content type. Multipart
/// bodies are repackaged and forwarded; JSON bodies either hit the media host
/// directly (`uploadFile` with credentials configured) or are forwarded to the
/// script endpoint.
pub async fn process(
    req: HttpRequest,
    state: web::Data<ProxyState>,
    query: web::Query<ActionQuery>,
    payload: web::Payload,
) -> impl Responder {
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");

    if content_type.contains("multipart/form-data") {
        let multipart = Multipart::new(req.headers(), payload);
        let form = match drain_upload_form(multipart).await {
            Ok(form) => form,
            Err(e) => return HttpResponse::BadRequest().json(json!({ "error": e })),
        };
        return match forward::forward_multipart(
            &state,
            &query.action,
            form.file,
            &form.kind,
            form.side.as_deref().filter(|s| !s.is_empty()),
            &form.institution_code,
        )
        .await
        {
            Ok(response) => response,
            Err(e) => {
                error!("multipart forward failed: {}", e);
                HttpResponse::BadGateway().json(json!({ "error": e }))
            }
        };
    }

    let body = match read_body(payload).await {
        Ok(bytes) => bytes,
        Err(e) => return HttpResponse::BadRequest().json(json!({ "error": e })),
    };
    let body: serde_json::Value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(_) => {
            return HttpResponse::BadRequest().json(json!({ "error": "Invalid JSON body" }))
        }
    };

    if query.action == "uploadFile" {
        if let UploadStrategy::Direct(uploader) = &state.upload {
            if let Some((file, mime_type, institution_code)) = direct_upload_fields(&body) {
                info!("direct media upload for school '{}'", institution_code);
                return match uploader.upload(file, mime_type, institution_code).await {
                    Ok(outcome) => HttpResponse::Ok().json(UploadResponse {
                        success: true,
                        url: outcome.url,
                        format: outcome.format,
                        resource_type: outcome.resource_type,
                    }),
                    Err(e) => {
                        error!("media upload failed: {}", e);
                        HttpResponse::InternalServerError()
                            .json(json!({ "error": format!("Upload failed: {}", e) }))
                    }
                };
            }
        }
    }

    match forward::forward_json(&state, &query.action, &body).await {
        Ok(response) => response,
        Err(e) => {
            error!("JSON forward for action '{}' failed: {}", query.action, e);
            HttpResponse::BadGateway().json(json!({ "error": e }))
        }
    }
}

/// A JSON body qualifies for the direct path only when it carries a non-empty
/// file and owning school. The MIME type defaults to PNG when undeclared.
fn direct_upload_fields(body: &serde_json::Value) -> Option<(&str, &str, &str)> {
    let file = body.get("file")?.as_str().filter(|v| !v.is_empty())?;
    let institution_code = body
        .get("institutionCode")?
        .as_str()
        .filter(|v| !v.is_empty())?;
    let mime_type = body
        .get("mimeType")
        .and_then(|v| v.as_str())
        .filter(|v| !v.is_empty())
        .unwrap_or("image/png");
    Some((file, mime_type, institution_code))
}

/// The fields of one inbound upload form.
struct UploadForm {
    file: FilePart,
    kind: String,
    side: Option<String>,
    institution_code: String,
}

/// Drains the inbound multipart stream into the file part plus the three
/// descriptive fields.
async fn drain_upload_form(mut payload: Multipart) -> Result<UploadForm, String> {
    let mut file: Option<FilePart> = None;
    let mut kind = String::new();
    let mut side: Option<String> = None;
    let mut institution_code = String::new();

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| e.to_string())?;
        let name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()));

        match name.as_deref() {
            Some("file") => {
                let file_name = field
                    .content_disposition()
                    .and_then(|cd| cd.get_filename().map(|f| f.to_string()))
                    .unwrap_or_default();
                let content_type = field.content_type().map(|mime| mime.to_string());
                let mut bytes = Vec::new();
                while let Some(chunk) = field.next().await {
                    bytes.extend_from_slice(&chunk.map_err(|e| e.to_string())?);
                }
                file = Some(FilePart {
                    bytes,
                    file_name,
                    content_type,
                });
            }
            Some("type") => kind = read_text_field(&mut field).await?,
            Some("side") => side = Some(read_text_field(&mut field).await?),
            Some("institutionCode") => institution_code = read_text_field(&mut field).await?,
            _ => {}
        }
    }

    let file = file.ok_or("Missing file")?;
    Ok(UploadForm {
        file,
        kind,
        side,
        institution_code,
    })
}

async fn read_text_field(field: &mut actix_multipart::Field) -> Result<String, String> {
    let mut bytes = Vec::new();
    while let Some(chunk) = field.next().await {
        bytes.extend_from_slice(&chunk.map_err(|e| e.to_string())?);
    }
    String::from_utf8(bytes).map_err(|_| "Form field is not valid UTF-8".to_string())
}

async fn read_body(mut payload: web::Payload) -> Result<web::Bytes, String> {
    let mut bytes = web::BytesMut::new();
    while let Some(chunk) = payload.next().await {
        bytes.extend_from_slice(&chunk.map_err(|e| e.to_string())?);
    }
    Ok(bytes.freeze())
}
