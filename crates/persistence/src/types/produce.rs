//! Produce entity types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The entity types served by Harvest.
///
/// Each kind is stored in its own persistence unit. The lowercase token is
/// used for URL paths, table names and not-found messages; the capitalised
/// label is used in validation messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProduceKind {
    /// Fruit items.
    Fruit,
    /// Vegetable items.
    Vegetable,
}

impl ProduceKind {
    /// All kinds, in routing order.
    pub const ALL: [ProduceKind; 2] = [ProduceKind::Fruit, ProduceKind::Vegetable];

    /// Returns the lowercase token (`fruit`, `vegetable`).
    pub fn as_str(&self) -> &'static str {
        match self {
            ProduceKind::Fruit => "fruit",
            ProduceKind::Vegetable => "vegetable",
        }
    }

    /// Returns the capitalised label (`Fruit`, `Vegetable`).
    pub fn label(&self) -> &'static str {
        match self {
            ProduceKind::Fruit => "Fruit",
            ProduceKind::Vegetable => "Vegetable",
        }
    }

    /// Returns the table that holds items of this kind.
    pub fn table_name(&self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for ProduceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProduceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fruit" => Ok(ProduceKind::Fruit),
            "vegetable" => Ok(ProduceKind::Vegetable),
            other => Err(format!("unknown produce kind: {}", other)),
        }
    }
}

/// A produce item with its storage-assigned identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredProduce {
    /// Identifier assigned by the database on insert.
    pub id: i64,
    /// Display name.
    pub name: String,
}

impl StoredProduce {
    /// Creates a stored item.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
