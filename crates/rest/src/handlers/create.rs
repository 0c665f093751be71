//! Create handler: `POST /{kind}`

use axum::{
    Json,
    extract::State,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::extractors::ProduceBody;
use crate::representation::ProduceRepresentation;
use crate::state::ResourceState;
use crate::validation::validate_create;

/// Creates a new item. Storage assigns the id.
///
/// # Headers
///
/// - `Content-Type` - Must be `application/json` or a `+json` media type
///
/// # Response
///
/// - `201 Created` - The stored item, with a `Location` header
/// - `400 Bad Request` - Malformed JSON
/// - `415 Unsupported Media Type` - Not a JSON content type
/// - `422 Unprocessable Entity` - Blank name, or the body carried an id
///
/// # Example
///
/// ```http
/// POST /fruit HTTP/1.1
/// Host: localhost:8080
/// Content-Type: application/json
///
/// {"name": "Canteloupe"}
/// ```
pub async fn create_handler(
    State(state): State<ResourceState>,
    ProduceBody(item): ProduceBody,
) -> RestResult<Response> {
    let kind = state.kind();
    debug!(kind = %kind, name = ?item.name, "Processing create request");

    let name = validate_create(kind, &item)?;
    let stored = state.storage().insert(&name).await?;

    let location = HeaderValue::from_str(&format!("/{}/{}", kind, stored.id)).map_err(|e| {
        RestError::InternalError {
            message: format!("Invalid Location header: {}", e),
        }
    })?;

    debug!(kind = %kind, id = stored.id, "Item created");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ProduceRepresentation::from(stored)),
    )
        .into_response())
}
