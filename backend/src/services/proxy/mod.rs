//! The `/api` proxy route: the single local mediator between the browser and
//! the two external collaborators.
//!
//! Every client call carries an `action` query parameter; the proxy never
//! interprets the payload beyond picking the downstream route:
//!
//! - `GET /api?action=<name>`: forwarded verbatim to the external script
//!   endpoint, response relayed with the origin's status (`getSchools` and
//!   friends).
//!
//! - `POST /api?action=<name>` with `multipart/form-data`: the uploaded file
//!   is repackaged into a fresh multipart request; `type`, `side` and
//!   `institutionCode` travel in the script URL's query string.
//!
//! - `POST /api?action=<name>` with JSON: `uploadFile` bodies go straight to
//!   the media host when credentials are configured (see [`UploadStrategy`]);
//!   everything else (`addSchool`, `submitApplication`) is forwarded to the
//!   script endpoint with a small fixed set of body fields mirrored into the
//!   query string.
//!
//! One inbound request maps to at most one outbound request; there are no
//! retries, no background work and no state kept between calls.

mod cloudinary;
mod fetch;
mod forward;
mod submit;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

use crate::config::AppConfig;
pub use cloudinary::CloudinaryUploader;

const API_PATH: &str = "/api";

/// Shared per-worker state: the forwarding target, one reusable HTTP client
/// and the upload strategy picked at startup.
#[derive(Clone)]
pub struct ProxyState {
    pub script_url: String,
    pub client: reqwest::Client,
    pub upload: UploadStrategy,
}

/// How `uploadFile` bodies are handled. Decided once from configuration so the
/// handlers never consult the environment.
#[derive(Clone)]
pub enum UploadStrategy {
    /// All three media-host credentials present: upload inline and answer
    /// with the stored URL ourselves.
    Direct(CloudinaryUploader),
    /// No credentials: relay the body to the script endpoint like any other
    /// action and let it deal with the file.
    Forward,
}

impl ProxyState {
    pub fn new(config: &AppConfig) -> Self {
        let client = reqwest::Client::new();
        let upload = match &config.cloudinary {
            Some(credentials) => UploadStrategy::Direct(CloudinaryUploader::new(
                credentials.clone(),
                client.clone(),
            )),
            None => UploadStrategy::Forward,
        };
        ProxyState {
            script_url: config.script_url.clone(),
            client,
            upload,
        }
    }
}

/// Configures and returns the Actix scope for the proxy route.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(fetch::process))
        .route("", post().to(submit::process))
}
