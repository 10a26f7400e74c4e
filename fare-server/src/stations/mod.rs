//! Station reference data.
//!
//! Provides station name normalization and the per-line standardized
//! distance tables. Both are immutable: built once at startup and shared by
//! reference everywhere.

mod distances;
mod normalize;

pub use distances::{LineDistances, LineDistancesBuilder, metro_manila_distances};
pub use normalize::{AliasTable, AliasTableBuilder, metro_manila_aliases};
