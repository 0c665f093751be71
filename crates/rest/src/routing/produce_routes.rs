//! Produce route configuration.
//!
//! Every [`ProduceKind`] gets the same five routes under its own path prefix,
//! each bound to the persistence unit holding that kind.

use axum::{
    Router,
    routing::{get, put},
};
use harvest_persistence::types::ProduceKind;

use crate::handlers;
use crate::state::{AppState, ResourceState};

/// Creates all Harvest routes.
///
/// # Routes
///
/// ## Operational
/// - `GET /health` - Health of both persistence units
/// - `GET /_liveness` - Liveness probe
///
/// ## Per kind (`fruit`, `vegetable`)
/// - `GET /{kind}` - List
/// - `POST /{kind}` - Create
/// - `GET /{kind}/{id}` - Read
/// - `PUT /{kind}/{id}` - Update
/// - `DELETE /{kind}/{id}` - Delete
///
/// Any other path answers with a JSON 404, and an unsupported method on a
/// known path with a JSON 405.
pub fn create_routes(state: AppState) -> Router {
    let mut router: Router = Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/_liveness", get(handlers::liveness_handler))
        .method_not_allowed_fallback(handlers::method_not_allowed_handler)
        .with_state(state.clone());

    for kind in ProduceKind::ALL {
        router = router.merge(resource_routes(state.for_kind(kind)));
    }

    router.fallback(handlers::fallback_handler)
}

/// Creates the routes for the kind served by `state`.
pub fn resource_routes(state: ResourceState) -> Router {
    let kind = state.kind();
    Router::new()
        .route(
            &format!("/{}", kind),
            get(handlers::list_handler).post(handlers::create_handler),
        )
        .route(
            &format!("/{}/{{id}}", kind),
            put(handlers::update_handler)
                .get(handlers::read_handler)
                .delete(handlers::delete_handler),
        )
        .method_not_allowed_fallback(handlers::method_not_allowed_handler)
        .with_state(state)
}
