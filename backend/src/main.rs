mod config;
mod services;

use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::info;
use mime_guess::from_path;

use crate::services::proxy::{ProxyState, UploadStrategy};

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = config::AppConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    let state = web::Data::new(ProxyState::new(&config));
    match state.upload {
        UploadStrategy::Direct(_) => info!("Direct media uploads enabled"),
        UploadStrategy::Forward => info!("Media uploads forwarded to the script endpoint"),
    }
    info!("Server running at http://{}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::PayloadConfig::new(10 * 1024 * 1024)) // 10 MB
            .app_data(state.clone())
            .service(services::proxy::configure_routes())
            .default_service(web::route().to(serve_embedded))
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test;

    fn test_state(script_url: &str) -> web::Data<ProxyState> {
        let config = config::AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            script_url: script_url.to_string(),
            cloudinary: None,
        };
        web::Data::new(ProxyState::new(&config))
    }

    #[actix_web::test]
    async fn unknown_paths_fall_back_to_index() {
        let app =
            test::init_service(App::new().default_service(web::route().to(serve_embedded))).await;
        let response =
            test::call_service(&app, test::TestRequest::get().uri("/admin").to_request()).await;
        assert!(response.status().is_success());
        let content_type = response
            .headers()
            .get(actix_web::http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("text/html"));
    }

    #[actix_web::test]
    async fn invalid_json_body_is_rejected_before_forwarding() {
        // Port 9 is the discard port; nothing should ever be contacted anyway.
        let app = test::init_service(
            App::new()
                .app_data(test_state("http://127.0.0.1:9/"))
                .service(services::proxy::configure_routes()),
        )
        .await;
        let request = test::TestRequest::post()
            .uri("/api?action=addSchool")
            .insert_header(("content-type", "application/json"))
            .set_payload("definitely not json")
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), 400);
        let body = test::read_body(response).await;
        assert!(std::str::from_utf8(&body)
            .unwrap()
            .contains("Invalid JSON body"));
    }

    #[actix_web::test]
    async fn unreachable_script_endpoint_surfaces_as_bad_gateway() {
        let app = test::init_service(
            App::new()
                .app_data(test_state("http://127.0.0.1:9/"))
                .service(services::proxy::configure_routes()),
        )
        .await;
        let response = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api?action=getSchools")
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), 502);
        let body = test::read_body(response).await;
        assert!(std::str::from_utf8(&body).unwrap().contains("error"));
    }
}
