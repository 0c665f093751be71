//! Wire representation of produce items.
//!
//! Requests and responses share one shape, `{"id": <integer|null>, "name":
//! <string|null>}`, for both fruits and vegetables. Unknown fields are ignored.

use harvest_persistence::types::StoredProduce;
use serde::{Deserialize, Serialize};

/// A fruit or vegetable as it travels over HTTP.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProduceRepresentation {
    /// Identifier; assigned by storage and absent on create requests.
    #[serde(default)]
    pub id: Option<i64>,

    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
}

impl ProduceRepresentation {
    /// Creates a representation with only a name, as sent by create requests.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
        }
    }

    /// Parses a request body. An empty body reads as `{}`.
    pub fn from_body(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(bytes)
    }
}

impl From<StoredProduce> for ProduceRepresentation {
    fn from(item: StoredProduce) -> Self {
        Self {
            id: Some(item.id),
            name: Some(item.name),
        }
    }
}
