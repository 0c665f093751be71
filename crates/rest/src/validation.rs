//! Request validation for produce items.
//!
//! Validation runs before any storage access so a rejected request never
//! touches the database.

use harvest_persistence::types::ProduceKind;

use crate::error::{RestError, RestResult};
use crate::representation::ProduceRepresentation;

/// Checks the constraints shared by create and update.
///
/// Collects every violation; today the only one is a missing or blank name,
/// reported as `"<Kind> name must be set!"`.
pub fn validate_item(kind: ProduceKind, item: &ProduceRepresentation) -> RestResult<String> {
    let mut messages = Vec::new();

    let name = item.name.as_deref().unwrap_or_default();
    if name.trim().is_empty() {
        messages.push(format!("{} name must be set!", kind.label()));
    }

    if !messages.is_empty() {
        return Err(RestError::Validation { messages });
    }

    Ok(name.to_string())
}

/// Validates a create request and returns the name to store.
///
/// Name validation runs first; a body that also carries an id is rejected
/// with [`RestError::UnexpectedId`].
pub fn validate_create(kind: ProduceKind, item: &ProduceRepresentation) -> RestResult<String> {
    let name = validate_item(kind, item)?;
    if item.id.is_some() {
        return Err(RestError::UnexpectedId);
    }
    Ok(name)
}

/// Validates an update request and returns the name to store.
///
/// A body id is allowed only when it equals the path id.
pub fn validate_update(
    kind: ProduceKind,
    path_id: i64,
    item: &ProduceRepresentation,
) -> RestResult<String> {
    let name = validate_item(kind, item)?;
    match item.id {
        Some(body_id) if body_id != path_id => Err(RestError::IdMismatch { body_id, path_id }),
        _ => Ok(name),
    }
}
