//! Initial data for empty persistence units.
//!
//! Seeding inserts names in list order, so a fresh unit holds ids 1 through 7
//! in the order shown here.

use crate::core::ProduceStorage;
use crate::error::StorageResult;
use crate::types::ProduceKind;

/// Fruits loaded into an empty fruit unit.
pub const FRUIT_SEED: [&str; 7] = [
    "Cherry",
    "Apple",
    "Banana",
    "Strawberry",
    "Blueberry",
    "Raspberry",
    "Cranberry",
];

/// Vegetables loaded into an empty vegetable unit.
pub const VEGETABLE_SEED: [&str; 7] = [
    "Potato", "Carrot", "Onion", "Tomato", "Lettuce", "Broccoli", "Garlic",
];

/// Returns the seed names for `kind`.
pub fn seed_names(kind: ProduceKind) -> &'static [&'static str] {
    match kind {
        ProduceKind::Fruit => &FRUIT_SEED,
        ProduceKind::Vegetable => &VEGETABLE_SEED,
    }
}

/// Inserts the seed names when the store holds no items.
///
/// Returns the number of inserted rows. A store that already has items is
/// left untouched, which makes restarts against a file or server database safe.
pub async fn apply_seed_if_empty<S>(storage: &S) -> StorageResult<usize>
where
    S: ProduceStorage + ?Sized,
{
    if storage.count().await? > 0 {
        return Ok(0);
    }

    let names = seed_names(storage.kind());
    for name in names {
        storage.insert(name).await?;
    }

    tracing::info!(kind = %storage.kind(), count = names.len(), "Seeded persistence unit");
    Ok(names.len())
}
