//! Environment-driven configuration.
//!
//! Read once in `main`, stored in the [`App`](crate::app::App) state, and
//! threaded explicitly from there — no process-wide globals. A malformed
//! value is a startup error, never a silent runtime fallback.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::Error;

/// Service configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Socket the server binds to.
    pub addr: SocketAddr,
    /// Root directory for static assets; imagery is probed under
    /// `<static_dir>/images`.
    pub static_dir: PathBuf,
}

impl Config {
    /// Builds a config from the environment.
    ///
    /// - `PORT` — listen port, default `5000`
    /// - `SEAMFIT_STATIC_DIR` — static asset root, default `static`
    pub fn from_env() -> Result<Self, Error> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| Error::Config(format!("PORT is not a valid port: {raw:?}")))?,
            Err(_) => 5000,
        };
        let static_dir = std::env::var("SEAMFIT_STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("static"));

        Ok(Self { addr: SocketAddr::from(([0, 0, 0, 0], port)), static_dir })
    }
}
