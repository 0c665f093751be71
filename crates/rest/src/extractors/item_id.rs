//! Path id extractor.

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::error::RestError;
use crate::state::ResourceState;

/// The numeric item id from an `/{kind}/{id}` path.
///
/// A segment that is not a 64-bit integer cannot name a stored item, so it is
/// rejected as not found using the segment exactly as sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemId(pub i64);

impl FromRequestParts<ResourceState> for ItemId {
    type Rejection = RestError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ResourceState,
    ) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| RestError::BadRequest {
                message: e.body_text(),
            })?;

        raw.parse::<i64>()
            .map(ItemId)
            .map_err(|_| RestError::NotFound {
                kind: state.kind(),
                id: raw,
            })
    }
}
