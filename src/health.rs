//! Liveness and readiness probe handlers.
//!
//! | Probe | Path | Question |
//! |---|---|---|
//! | **Liveness** | `/healthz` | Is the process alive? Failure → restart. |
//! | **Readiness** | `/readyz` | Can the pod serve traffic? Failure → pulled from load-balancer. |

use crate::app::App;
use crate::request::Request;
use crate::response::Response;

/// Liveness probe. If the process can respond to HTTP at all, it is alive —
/// intentionally no dependencies.
pub async fn liveness(_app: App, _req: Request) -> Response {
    Response::text("ok")
}

/// Readiness probe. The service has no warm-up and no downstream
/// dependencies; ready as soon as the listener is up.
pub async fn readiness(_app: App, _req: Request) -> Response {
    Response::text("ready")
}
