//! List handler: `GET /{kind}`

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::error::RestResult;
use crate::representation::ProduceRepresentation;
use crate::state::ResourceState;

/// Returns every item of the route's kind, ordered by id.
///
/// # Response
///
/// - `200 OK` - JSON array of items (possibly empty)
pub async fn list_handler(State(state): State<ResourceState>) -> RestResult<Response> {
    debug!(kind = %state.kind(), "Processing list request");

    let items: Vec<ProduceRepresentation> = state
        .storage()
        .list()
        .await?
        .into_iter()
        .map(ProduceRepresentation::from)
        .collect();

    debug!(kind = %state.kind(), count = items.len(), "Listed items");

    Ok(Json(items).into_response())
}
