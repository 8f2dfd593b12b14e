use std::any::Any;

use axum::{
    Json, Router,
    response::{IntoResponse, Response},
    routing::get,
};
use common_errors::AppError;
use tower_http::{
    catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer,
};
use tracing::instrument;
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

pub const GREETING: &str = "Hello world!";

pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// Builds the routing table.
///
/// The `dummy` blueprint is registered here, once, under
/// [`dummy_http::URL_PREFIX`]. The returned router is never mutated again.
pub fn router() -> Router {
    Router::new()
        .route("/", get(index))
        .nest(dummy_http::URL_PREFIX, dummy_http::routes())
        .merge(RapiDoc::new(OPENAPI_PATH).path("/docs"))
        .route(OPENAPI_PATH, get(openapi))
}

/// The routing table wrapped in the middleware every request goes through.
pub fn app() -> Router { with_middleware(router()) }

pub fn with_middleware(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    AppError::from_panic(payload).into_response()
}

#[utoipa::path(
    get,
    path = "/",
    operation_id = "index",
    responses(
        (status = 200, description = "Greeting", body = String, content_type = "text/plain")
    ),
    tag = "index"
)]
#[instrument]
pub async fn index() -> &'static str { GREETING }

async fn openapi() -> Json<utoipa::openapi::OpenApi> { Json(ApiDoc::openapi()) }

#[derive(OpenApi)]
#[openapi(
    paths(index, dummy_http::index),
    components(
        schemas(
            common_errors::ApiErrorResponse,
            common_errors::ApiErrorInfo,
        )
    ),
    tags(
        (name = "index", description = "Root greeting"),
        (name = "dummy", description = "Endpoints of the dummy blueprint")
    ),
    info(
        title = "fargate-app",
        description = "Hello world service with a mounted blueprint",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
