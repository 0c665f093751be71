//! Read handler: `GET /{kind}/{id}`

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::extractors::ItemId;
use crate::representation::ProduceRepresentation;
use crate::state::ResourceState;

/// Reads an item by id.
///
/// # Response
///
/// - `200 OK` - The item
/// - `404 Not Found` - No item has this id
///
/// # Example
///
/// ```http
/// GET /fruit/7 HTTP/1.1
/// Host: localhost:8080
/// ```
pub async fn read_handler(
    State(state): State<ResourceState>,
    ItemId(id): ItemId,
) -> RestResult<Response> {
    debug!(kind = %state.kind(), id, "Processing read request");

    match state.storage().get(id).await? {
        Some(stored) => Ok(Json(ProduceRepresentation::from(stored)).into_response()),
        None => {
            debug!(kind = %state.kind(), id, "Item not found");
            Err(RestError::NotFound {
                kind: state.kind(),
                id: id.to_string(),
            })
        }
    }
}
