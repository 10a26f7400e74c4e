//! Application state for the web layer.

use std::sync::Arc;

use crate::stations::{AliasTable, LineDistances};
use crate::store::FareStore;

/// Shared application state.
///
/// Contains the editable tables and the immutable station reference data
/// needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Editable fare tables
    pub store: FareStore,

    /// Station alias table
    pub aliases: Arc<AliasTable>,

    /// Standardized distance registry
    pub distances: Arc<LineDistances>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(store: FareStore, aliases: AliasTable, distances: LineDistances) -> Self {
        Self {
            store,
            aliases: Arc::new(aliases),
            distances: Arc::new(distances),
        }
    }
}
