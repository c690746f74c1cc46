//! # seamfit
//!
//! A small HTTP service that turns body measurements into a bra size,
//! product imagery, and retailer search links.
//!
//! ## The contract
//!
//! One pure function does the thinking: [`sizing::resolve`] maps
//! `(band, bust, activity, fit root)` to a size label, a cup group, and a
//! product name. Everything else is a thin shell around it — a JSON
//! endpoint that substitutes defaults for bad input, an asset store that
//! degrades to a placeholder, and a fixed table of store-search templates.
//! No persistence, no auth, no retailer API: bad input never errors, it
//! defaults.
//!
//! ## Routes
//!
//! - `POST /api/results` — measurements in, [`api::FitResponse`] out
//! - `GET /images/{*path}` — static product imagery
//! - `GET /healthz`, `GET /readyz` — probes
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use http::Method;
//! use seamfit::{api, assets, health, AppState, Config, Router, Server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = Config::from_env().expect("config");
//!     let addr = config.addr;
//!     let app = AppState::new(config);
//!
//!     let routes = Router::new()
//!         .on(Method::POST, "/api/results",    api::results)
//!         .on(Method::GET,  "/images/{*path}", assets::serve_image)
//!         .on(Method::GET,  "/healthz",        health::liveness)
//!         .on(Method::GET,  "/readyz",         health::readiness);
//!
//!     Server::bind(addr).serve(app, routes).await.unwrap();
//! }
//! ```

mod app;
mod config;
mod error;
mod handler;
mod request;
mod response;
mod router;
mod server;

pub mod api;
pub mod assets;
pub mod health;
pub mod sizing;
pub mod stores;

pub use app::{App, AppState};
pub use config::Config;
pub use error::Error;
pub use handler::Handler;
pub use request::Request;
pub use response::{IntoResponse, Json, Response};
pub use router::Router;
pub use server::Server;
