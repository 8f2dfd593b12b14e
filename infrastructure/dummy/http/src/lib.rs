//! The `dummy` blueprint: a self-contained router the application mounts
//! under [`URL_PREFIX`].

use axum::{Router, routing::get};
use tracing::instrument;

pub const BLUEPRINT_NAME: &str = "dummy";

/// Mount point of this blueprint inside the application router.
pub const URL_PREFIX: &str = "/blueprints";

pub const GREETING: &str = "Hello from the dummy blueprint!";

/// Routes of the blueprint, relative to [`URL_PREFIX`].
pub fn routes() -> Router {
    Router::new().route("/dummy", get(index))
}

#[utoipa::path(
    get,
    path = "/blueprints/dummy",
    operation_id = "dummy_index",
    responses(
        (status = 200, description = "Blueprint greeting", body = String, content_type = "text/plain")
    ),
    tag = "dummy"
)]
#[instrument]
pub async fn index() -> &'static str {
    tracing::debug!(blueprint = BLUEPRINT_NAME, "Serving blueprint index");

    GREETING
}
