//! HTTP request handlers for produce resources.
//!
//! Every resource handler is shared by the fruit and vegetable routes; the
//! [`ResourceState`](crate::state::ResourceState) attached to each router
//! decides which unit it talks to.
//!
//! - [`list`] - List every item
//! - [`read`] - Read an item by id
//! - [`create`] - Create a new item
//! - [`update`] - Rename an existing item
//! - [`delete`] - Delete an item
//! - [`health`] - Health and liveness endpoints
//! - [`fallback`] - Unmatched routes and methods

pub mod create;
pub mod delete;
pub mod fallback;
pub mod health;
pub mod list;
pub mod read;
pub mod update;

// Re-export handlers for convenience
pub use create::create_handler;
pub use delete::delete_handler;
pub use fallback::{fallback_handler, method_not_allowed_handler};
pub use health::{health_handler, liveness_handler};
pub use list::list_handler;
pub use read::read_handler;
pub use update::update_handler;
