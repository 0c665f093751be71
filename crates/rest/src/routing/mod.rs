//! Route configuration for the Harvest REST API.
//!
//! This module contains the routing configuration that maps HTTP paths
//! to handlers.

pub mod produce_routes;

pub use produce_routes::create_routes;
