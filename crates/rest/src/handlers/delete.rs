//! Delete handler: `DELETE /{kind}/{id}`

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::ItemId;
use crate::state::ResourceState;

/// Permanently deletes an item.
///
/// # Response
///
/// - `204 No Content` - Item deleted
/// - `404 Not Found` - No item has this id, including one already deleted
pub async fn delete_handler(
    State(state): State<ResourceState>,
    ItemId(id): ItemId,
) -> RestResult<Response> {
    debug!(kind = %state.kind(), id, "Processing delete request");

    state.storage().delete(id).await?;

    debug!(kind = %state.kind(), id, "Item deleted");

    Ok(StatusCode::NO_CONTENT.into_response())
}
