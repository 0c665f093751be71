//! Common test utilities for REST API testing.
//!
//! - [`harness`] - Test server over two seeded in-memory units
//! - [`assertions`] - HTTP response assertions
//! - [`scenario`] - Ordered lifecycle walk per resource

#![allow(dead_code)]

pub mod assertions;
pub mod harness;
pub mod scenario;
