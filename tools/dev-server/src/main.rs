//! Development server for the Apokria dashboard
//!
//! Serves the built web bundle with correct MIME types and falls back to
//! `index.html` for client-side routes, so deep links into the SPA work.

use axum::{
    body::Body,
    http::{header, HeaderValue, Request},
    response::Response,
    routing::get_service,
    Router,
};
use std::net::SocketAddr;
use tower_http::services::{ServeDir, ServeFile};

#[tokio::main]
async fn main() {
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));

    // Serve static files from the web directory; unknown paths get the SPA
    // entry point instead of a 404
    let serve_dir =
        ServeDir::new("web").not_found_service(ServeFile::new("web/index.html"));

    let app = Router::new()
        .fallback_service(get_service(serve_dir))
        .layer(axum::middleware::from_fn(add_headers));

    println!("╔═══════════════════════════════════════════════════╗");
    println!("║            Apokria Development Server             ║");
    println!("╠═══════════════════════════════════════════════════╣");
    println!("║  URL: http://localhost:{}                       ║", port);
    println!("║  Press Ctrl+C to stop                             ║");
    println!("╚═══════════════════════════════════════════════════╝");
    println!();

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("Failed to bind {addr}: {e}");
            std::process::exit(1);
        }
    };
    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Fix MIME types for module scripts and wasm
async fn add_headers(request: Request<Body>, next: axum::middleware::Next) -> Response<Body> {
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    if path.ends_with(".js") || path.ends_with(".mjs") {
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/javascript; charset=utf-8"),
        );
    } else if path.ends_with(".wasm") {
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/wasm"),
        );
    } else if path.ends_with(".css") {
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/css; charset=utf-8"),
        );
    } else if path.ends_with(".html") {
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/html; charset=utf-8"),
        );
    } else if path.ends_with(".json") {
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=utf-8"),
        );
    }

    response
}
