//! Axum extractors for produce requests.
//!
//! - [`ProduceBody`] - Checks the content type and parses the item body
//! - [`ItemId`] - Parses the numeric id from the request path

mod item_id;
mod produce_body;

pub use item_id::ItemId;
pub use produce_body::{ProduceBody, ProduceBodyRejection, is_json_content_type};
