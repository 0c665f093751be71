//! Core types for the persistence layer.
//!
//! - [`ProduceKind`] - The entity types a persistence unit can hold
//! - [`StoredProduce`] - A produce item as it exists in storage
//!
//! # Example
//!
//! ```
//! use harvest_persistence::types::{ProduceKind, StoredProduce};
//!
//! let item = StoredProduce::new(7, "Cranberry");
//! assert_eq!(item.id, 7);
//! assert_eq!(ProduceKind::Fruit.to_string(), "fruit");
//! assert_eq!(ProduceKind::Vegetable.label(), "Vegetable");
//! ```

mod produce;

pub use produce::{ProduceKind, StoredProduce};
