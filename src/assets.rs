//! Product imagery: logical asset names, filesystem probing, placeholder
//! fallback, and the static image route.
//!
//! Imagery is keyed by `(activity, cup group, view)` and lives under
//! `<static root>/images/ai/` as `model_{activity}_{group}_{view}.{ext}`.
//! Resolution never fails: a miss degrades to the fixed placeholder.
//!
//! The store is a trait so the handler and its tests do not care where the
//! bytes live; the one shipped implementation probes a directory.

use std::path::{Path, PathBuf};

use http::StatusCode;

use crate::app::App;
use crate::request::Request;
use crate::response::Response;
use crate::sizing::{ActivityKey, CupGroup};

/// The three product views, in response order.
pub const VIEWS: [&str; 3] = ["front", "side", "closeup"];

/// Web path returned when no candidate file resolves.
pub const PLACEHOLDER: &str = "/images/p1.svg";

/// Logical asset names for one `(activity, group)` pair, one per view.
pub fn asset_names(activity: ActivityKey, group: CupGroup) -> [String; 3] {
    VIEWS.map(|view| format!("model_{activity}_{group}_{view}", activity = activity.as_str(), group = group.as_str()))
}

// ── AssetStore ───────────────────────────────────────────────────────────────

/// Resolves logical asset names to web paths.
///
/// Implementations must be infallible: every view yields a path, falling back
/// to [`PLACEHOLDER`] when nothing better exists.
pub trait AssetStore: Send + Sync {
    /// Returns exactly [`VIEWS`]`.len()` web paths, in view order.
    fn resolve(&self, activity: ActivityKey, group: CupGroup) -> Vec<String>;
}

/// Directory-probing store over a static file root.
///
/// For each logical name, tries `images/ai/<name>.jpg`, then `.png`, then
/// `.svg`, relative to the root; the first extension that exists on disk
/// wins. The probe is a metadata stat per candidate, nothing is read.
pub struct DirStore {
    static_root: PathBuf,
}

impl DirStore {
    pub fn new(static_root: impl Into<PathBuf>) -> Self {
        Self { static_root: static_root.into() }
    }
}

impl AssetStore for DirStore {
    fn resolve(&self, activity: ActivityKey, group: CupGroup) -> Vec<String> {
        asset_names(activity, group)
            .into_iter()
            .map(|name| {
                for ext in ["jpg", "png", "svg"] {
                    let rel = format!("images/ai/{name}.{ext}");
                    if self.static_root.join(&rel).is_file() {
                        return format!("/{rel}");
                    }
                }
                PLACEHOLDER.to_owned()
            })
            .collect()
    }
}

// ── Static image route ───────────────────────────────────────────────────────

/// `GET /images/{*path}` — serves image files under `<static root>/images`.
///
/// Misses are a plain 404, as is any path that tries to climb out of the
/// image directory.
pub async fn serve_image(app: App, req: Request) -> Response {
    let rel = match req.param("path") {
        Some(p) if !p.is_empty() => p,
        _ => return Response::status(StatusCode::NOT_FOUND),
    };
    if rel.split(['/', '\\']).any(|seg| seg == "..") {
        return Response::status(StatusCode::NOT_FOUND);
    }

    let full = app.config.static_dir.join("images").join(rel);
    match tokio::fs::read(&full).await {
        Ok(body) => Response::bytes(content_type_for(&full), body),
        Err(_) => Response::status(StatusCode::NOT_FOUND),
    }
}

fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_root(tag: &str) -> PathBuf {
        let root = std::env::temp_dir().join(format!("seamfit-assets-{tag}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&root);
        fs::create_dir_all(root.join("images/ai")).unwrap();
        root
    }

    #[test]
    fn names_follow_the_filename_scheme() {
        let names = asset_names(ActivityKey::HighImpact, CupGroup::Medium);
        assert_eq!(
            names,
            [
                "model_highimpact_medium_front",
                "model_highimpact_medium_side",
                "model_highimpact_medium_closeup",
            ]
        );
    }

    #[test]
    fn miss_resolves_to_placeholder() {
        let store = DirStore::new("/nonexistent/static/root");
        let paths = store.resolve(ActivityKey::Casual, CupGroup::Small);
        assert_eq!(paths, vec![PLACEHOLDER; 3]);
    }

    #[test]
    fn probe_prefers_jpg_then_png_then_svg() {
        let root = scratch_root("probe");
        let ai = root.join("images/ai");
        fs::write(ai.join("model_casual_small_front.jpg"), b"j").unwrap();
        fs::write(ai.join("model_casual_small_front.png"), b"p").unwrap();
        fs::write(ai.join("model_casual_small_side.png"), b"p").unwrap();
        fs::write(ai.join("model_casual_small_closeup.svg"), b"s").unwrap();

        let store = DirStore::new(&root);
        let paths = store.resolve(ActivityKey::Casual, CupGroup::Small);
        assert_eq!(
            paths,
            vec![
                "/images/ai/model_casual_small_front.jpg",
                "/images/ai/model_casual_small_side.png",
                "/images/ai/model_casual_small_closeup.svg",
            ]
        );

        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn partial_hits_keep_view_order() {
        let root = scratch_root("partial");
        fs::write(root.join("images/ai/model_sports_large_side.jpg"), b"j").unwrap();

        let store = DirStore::new(&root);
        let paths = store.resolve(ActivityKey::Sports, CupGroup::Large);
        assert_eq!(paths[0], PLACEHOLDER);
        assert_eq!(paths[1], "/images/ai/model_sports_large_side.jpg");
        assert_eq!(paths[2], PLACEHOLDER);

        let _ = fs::remove_dir_all(&root);
    }

    fn test_app(static_dir: &Path) -> App {
        use crate::app::AppState;
        use crate::config::Config;

        let config = Config {
            addr: ([127, 0, 0, 1], 0).into(),
            static_dir: static_dir.to_path_buf(),
        };
        AppState::with_assets(config.clone(), Box::new(DirStore::new(config.static_dir)))
    }

    #[tokio::test]
    async fn serves_an_existing_image() {
        let root = scratch_root("serve");
        fs::write(root.join("images/ai/model_casual_small_front.png"), b"png-bytes").unwrap();

        let app = test_app(&root);
        let req = Request::test_with_param(
            http::Method::GET,
            "/images/ai/model_casual_small_front.png",
            "path",
            "ai/model_casual_small_front.png",
        );
        let response = serve_image(app, req).await;
        assert_eq!(response.status_code(), StatusCode::OK);

        let _ = fs::remove_dir_all(&root);
    }

    #[tokio::test]
    async fn traversal_and_misses_are_404() {
        let root = scratch_root("deny");
        let app = test_app(&root);

        let req = Request::test_with_param(http::Method::GET, "/images/x", "path", "../Cargo.toml");
        assert_eq!(serve_image(app.clone(), req).await.status_code(), StatusCode::NOT_FOUND);

        let req = Request::test_with_param(http::Method::GET, "/images/x", "path", "ai/missing.jpg");
        assert_eq!(serve_image(app.clone(), req).await.status_code(), StatusCode::NOT_FOUND);

        let req = Request::test(http::Method::GET, "/images/");
        assert_eq!(serve_image(app, req).await.status_code(), StatusCode::NOT_FOUND);

        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn content_types_by_extension() {
        assert_eq!(content_type_for(Path::new("a/b.jpg")), "image/jpeg");
        assert_eq!(content_type_for(Path::new("a/b.png")), "image/png");
        assert_eq!(content_type_for(Path::new("a/b.svg")), "image/svg+xml");
        assert_eq!(content_type_for(Path::new("a/b")), "application/octet-stream");
    }
}
