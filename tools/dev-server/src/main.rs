//! Development server for the retro desktop shell
//!
//! Serves the page, its scripts and the WASM module from `$WEB_ROOT`
//! (default `web`) on `127.0.0.1:$PORT` (default 8080).
//!
//! The page itself is not part of this workspace. Point `WEB_ROOT` at the
//! directory holding it together with the output of
//! `wasm-pack build crates/retro-desktop --target web -- --features wasm`.

use std::net::SocketAddr;
use std::path::Path;
use std::process::ExitCode;

use axum::{
    body::Body,
    http::{header, HeaderValue, Request, StatusCode},
    response::Response,
    routing::get_service,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_WEB_ROOT: &str = "web";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "dev_server=info,tower_http=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);
    let web_root = std::env::var("WEB_ROOT").unwrap_or_else(|_| DEFAULT_WEB_ROOT.into());

    let addr = SocketAddr::from(([127, 0, 0, 1], port));

    if !has_index(Path::new(&web_root)) {
        warn!(root = %web_root, "no index.html under the web root, point WEB_ROOT at the page build");
    }

    let serve_dir = ServeDir::new(&web_root).precompressed_gzip().precompressed_br();

    let app = Router::new()
        .fallback_service(get_service(serve_dir).handle_error(|_| async {
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn(fix_content_type)),
        );

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(%addr, "failed to bind: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!(root = %web_root, "serving retro desktop on http://localhost:{}", port);

    if let Err(e) = axum::serve(listener, app).await {
        error!("server error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// Check the web root holds a page to serve
fn has_index(root: &Path) -> bool {
    root.join("index.html").is_file()
}

/// Content type for the shell's static assets, by extension
fn content_type(path: &str) -> Option<&'static str> {
    let (_, ext) = path.rsplit_once('.')?;
    match ext {
        "js" | "mjs" => Some("application/javascript; charset=utf-8"),
        "wasm" => Some("application/wasm"),
        "css" => Some("text/css; charset=utf-8"),
        "html" => Some("text/html; charset=utf-8"),
        "json" => Some("application/json; charset=utf-8"),
        _ => None,
    }
}

/// Override the guessed MIME type so module scripts and WASM load
async fn fix_content_type(request: Request<Body>, next: axum::middleware::Next) -> Response<Body> {
    let mime = content_type(request.uri().path());

    let mut response = next.run(request).await;
    if let (Some(mime), true) = (mime, response.status().is_success()) {
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, HeaderValue::from_static(mime));
    }

    response
}
