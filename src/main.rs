//! seamfit entrypoint.
//!
//! Run with:
//!   RUST_LOG=info PORT=5000 cargo run
//!
//! Try:
//!   curl -X POST http://localhost:5000/api/results \
//!        -H 'content-type: application/json' \
//!        -d '{"band":78,"bust":90,"activity":"Daily / Casual","root":"Narrow"}'

use http::Method;
use seamfit::{AppState, Config, Router, Server, api, assets, health};
use tracing::error;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };
    let addr = config.addr;
    let app = AppState::new(config);

    let routes = Router::new()
        .on(Method::POST, "/api/results",    api::results)
        .on(Method::GET,  "/images/{*path}", assets::serve_image)
        .on(Method::GET,  "/healthz",        health::liveness)
        .on(Method::GET,  "/readyz",         health::readiness);

    if let Err(e) = Server::bind(addr).serve(app, routes).await {
        error!("server error: {e}");
        std::process::exit(1);
    }
}
