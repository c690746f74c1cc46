//! Shared application state.
//!
//! One record, built once at startup, passed to every handler alongside the
//! request. This replaces the global application object pattern: handlers
//! that need the config or the asset store say so in their signature.

use std::sync::Arc;

use crate::assets::{AssetStore, DirStore};
use crate::config::Config;

/// Cheaply cloneable handle to the application state, one clone per request.
pub type App = Arc<AppState>;

/// Everything a handler can reach besides the request itself.
pub struct AppState {
    pub config: Config,
    pub assets: Box<dyn AssetStore>,
}

impl AppState {
    /// Wires the default directory-probing asset store to the configured
    /// static root.
    pub fn new(config: Config) -> App {
        let assets = Box::new(DirStore::new(config.static_dir.clone()));
        Arc::new(Self { config, assets })
    }

    /// State with a caller-supplied asset store. Lets tests substitute a
    /// stub that never touches the filesystem.
    pub fn with_assets(config: Config, assets: Box<dyn AssetStore>) -> App {
        Arc::new(Self { config, assets })
    }
}
