//! Update handler: `PUT /{kind}/{id}`

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::{ItemId, ProduceBody};
use crate::representation::ProduceRepresentation;
use crate::state::ResourceState;
use crate::validation::validate_update;

/// Renames an existing item.
///
/// The body may repeat the path id; a different id is rejected. Validation
/// runs before the item is looked up, so an invalid body for an unknown id
/// reports the validation failure.
///
/// # Response
///
/// - `200 OK` - The updated item
/// - `400 Bad Request` - Malformed JSON
/// - `404 Not Found` - No item has this id
/// - `415 Unsupported Media Type` - Not a JSON content type
/// - `422 Unprocessable Entity` - Blank name, or a body id that differs from the path
pub async fn update_handler(
    State(state): State<ResourceState>,
    ItemId(id): ItemId,
    ProduceBody(item): ProduceBody,
) -> RestResult<Response> {
    let kind = state.kind();
    debug!(kind = %kind, id, name = ?item.name, "Processing update request");

    let name = validate_update(kind, id, &item)?;
    let stored = state.storage().update(id, &name).await?;

    debug!(kind = %kind, id, "Item updated");

    Ok(Json(ProduceRepresentation::from(stored)).into_response())
}
