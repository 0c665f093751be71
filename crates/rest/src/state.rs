//! Application state for the Harvest REST API.
//!
//! [`AppState`] holds both persistence units and the server configuration.
//! Each resource router runs with a [`ResourceState`], which narrows the app
//! state to the unit serving that route's kind.

use std::sync::Arc;

use harvest_persistence::core::{DynStorage, ProduceStorage};
use harvest_persistence::types::ProduceKind;
use harvest_persistence::unit::PersistenceUnits;

use crate::config::ServerConfig;

/// Shared application state for the REST API.
///
/// # Example
///
/// ```rust,ignore
/// use harvest_rest::{AppState, ServerConfig};
/// use harvest_persistence::unit::PersistenceUnits;
///
/// let config = ServerConfig::for_testing();
/// let units = PersistenceUnits::open(
///     config.unit_config(ProduceKind::Fruit),
///     config.unit_config(ProduceKind::Vegetable),
/// )
/// .await?;
/// let state = AppState::new(units, config);
/// ```
pub struct AppState {
    /// The fruit and vegetable units.
    units: Arc<PersistenceUnits>,

    /// Server configuration.
    config: Arc<ServerConfig>,
}

// Manually implement Clone so only the Arcs are cloned
impl Clone for AppState {
    fn clone(&self) -> Self {
        Self {
            units: Arc::clone(&self.units),
            config: Arc::clone(&self.config),
        }
    }
}

impl AppState {
    /// Creates a new AppState with the given units and configuration.
    pub fn new(units: PersistenceUnits, config: ServerConfig) -> Self {
        Self {
            units: Arc::new(units),
            config: Arc::new(config),
        }
    }

    /// Returns both persistence units.
    pub fn units(&self) -> &PersistenceUnits {
        &self.units
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Returns the state used by the routes of `kind`.
    pub fn for_kind(&self, kind: ProduceKind) -> ResourceState {
        ResourceState {
            kind,
            storage: Arc::clone(self.units.get(kind).storage()),
            config: Arc::clone(&self.config),
        }
    }
}

/// State for the routes of a single produce kind.
#[derive(Clone)]
pub struct ResourceState {
    kind: ProduceKind,
    storage: DynStorage,
    config: Arc<ServerConfig>,
}

impl ResourceState {
    /// Returns the kind served by these routes.
    pub fn kind(&self) -> ProduceKind {
        self.kind
    }

    /// Returns the storage of the unit serving this kind.
    pub fn storage(&self) -> &dyn ProduceStorage {
        self.storage.as_ref()
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}
