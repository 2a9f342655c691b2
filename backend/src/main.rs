mod config;
mod db;
mod offline;
mod registry;
mod services;

use crate::config::AppConfig;
use crate::offline::{
    spawn_engine, CacheEngine, CacheStore, EngineHandle, FetchRequest, FetchResponse, Origin,
};
use actix_web::http::StatusCode;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::info;
use mime_guess::from_path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

/// Origin backing the cache engine: the application shell embedded in the
/// binary. A missing file is a 404 response, not a network failure.
struct EmbeddedOrigin;

impl Origin for EmbeddedOrigin {
    async fn fetch(&self, request: &FetchRequest) -> Result<FetchResponse, String> {
        let path = request.path.trim_start_matches('/');
        let file_path = if path.is_empty() { "index.html" } else { path };

        match STATIC_DIR.get_file(file_path) {
            Some(file) => {
                let mime = from_path(file_path).first_or_octet_stream();
                Ok(FetchResponse::new(200, mime.as_ref(), file.contents().to_vec()))
            }
            None => Ok(FetchResponse::new(404, "text/plain", b"Not Found".to_vec())),
        }
    }
}

/// Default service: every non-API route goes through the offline cache
/// engine, which decides between cache and the embedded origin.
async fn serve_shell(req: HttpRequest, engine: web::Data<EngineHandle>) -> HttpResponse {
    match engine.fetch(FetchRequest::new(req.path())).await {
        Ok(response) => {
            let status = StatusCode::from_u16(response.status)
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            HttpResponse::build(status)
                .content_type(response.content_type)
                .body(response.body)
        }
        Err(e) => HttpResponse::ServiceUnavailable().body(e),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let cfg = AppConfig::from_env();

    db::init_schema(&cfg.db_path)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    // Engine lifecycle before the server binds: bucket eviction completes
    // before any client can be served by the new generation.
    let engine = CacheEngine::new(CacheStore::new(), EmbeddedOrigin, &cfg.cache_version);
    engine.install().await;
    engine.activate().await;
    let engine = spawn_engine(engine);

    info!("Server running at http://{}:{}", cfg.host, cfg.port);

    let bind_addr = (cfg.host.clone(), cfg.port);
    HttpServer::new(move || {
        App::new()
            .app_data(web::JsonConfig::default().limit(10 * 1024 * 1024)) // 10 MB
            .app_data(web::Data::new(cfg.clone()))
            .app_data(web::Data::new(engine.clone()))
            .service(services::import::configure_routes())
            .service(services::export::configure_routes())
            .service(services::templates::configure_routes())
            // Generic entity routes last, so the fixed prefixes above win.
            .service(services::records::configure_routes())
            .default_service(web::route().to(serve_shell))
    })
    .bind(bind_addr)?
    .run()
    .await
}
