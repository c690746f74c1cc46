//! The JSON fitting endpoint.
//!
//! `POST /api/results` takes a body where every field is optional and no
//! input can produce an error response: missing or malformed measurements
//! fall back to documented defaults, an unreadable body behaves as `{}`,
//! and unrecognized labels degrade inside the resolver. The frontend always
//! gets a size.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::app::App;
use crate::request::Request;
use crate::response::Json;
use crate::sizing;
use crate::stores;

/// Measurement defaults applied when a field is absent or non-numeric.
pub const DEFAULT_BAND: f64 = 78.0;
pub const DEFAULT_BUST: f64 = 90.0;

const DEFAULT_ACTIVITY: &str = "Daily / Casual";
const DEFAULT_ROOT: &str = "Narrow";

// ── Request record ───────────────────────────────────────────────────────────

/// Incoming fitting request. All fields optional; see the module docs for
/// the fallback policy.
#[derive(Debug, Default, Deserialize)]
pub struct FitRequest {
    #[serde(default, deserialize_with = "lenient_number")]
    pub band: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub bust: Option<f64>,
    #[serde(default)]
    pub activity: Option<String>,
    #[serde(default, alias = "fitRoot", alias = "fit_root")]
    pub root: Option<String>,
}

/// Accepts a JSON number or a numeric string; anything else is `None`,
/// never a deserialization error. Mirrors a frontend that sometimes sends
/// `"band": "78"` straight from a text input.
fn lenient_number<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    let value = Value::deserialize(d)?;
    Ok(match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

// ── Response record ──────────────────────────────────────────────────────────

/// Outgoing fitting response. Field names are part of the frontend contract.
#[derive(Debug, Serialize)]
pub struct FitResponse {
    pub product_name: String,
    pub size: String,
    pub cup_diff: u32,
    pub band: f64,
    pub bust: f64,
    pub images: Vec<String>,
    pub store_urls: BTreeMap<&'static str, String>,
}

// ── Handler ──────────────────────────────────────────────────────────────────

/// `POST /api/results`.
pub async fn results(app: App, req: Request) -> Json<FitResponse> {
    let input: FitRequest = req.json().unwrap_or_default();
    Json(fit(&app, input))
}

/// Applies defaults, runs the resolver, and attaches imagery and store
/// links. Split from the handler so tests can drive it without HTTP.
fn fit(app: &App, input: FitRequest) -> FitResponse {
    let band = input.band.unwrap_or(DEFAULT_BAND);
    let bust = input.bust.unwrap_or(DEFAULT_BUST);
    let activity = input.activity.as_deref().unwrap_or(DEFAULT_ACTIVITY);
    let root = input.root.as_deref().unwrap_or(DEFAULT_ROOT);

    let result = sizing::resolve(band, bust, activity, root);
    let images = app.assets.resolve(result.activity_key, result.cup_group);
    let store_urls = stores::search_links(&result.product_name);

    FitResponse {
        product_name: result.product_name,
        size: result.size_label,
        cup_diff: result.cup_diff,
        band,
        bust,
        images,
        store_urls,
    }
}
