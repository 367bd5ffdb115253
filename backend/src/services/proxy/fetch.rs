use actix_web::{web, HttpResponse, Responder};
use log::error;
use serde::Deserialize;
use serde_json::json;

use super::{forward, ProxyState};

#[derive(Deserialize)]
pub struct ActionQuery {
    #[serde(default)]
    pub action: String,
}

/// `GET /api?action=<name>`: simple passthrough to the script endpoint.
pub async fn process(
    state: web::Data<ProxyState>,
    query: web::Query<ActionQuery>,
) -> impl Responder {
    match forward::forward_get(&state, &query.action).await {
        Ok(response) => response,
        Err(e) => {
            error!("GET forward for action '{}' failed: {}", query.action, e);
            HttpResponse::BadGateway().json(json!({ "error": e }))
        }
    }
}
