//! The fare-generation engine.
//!
//! Pure functions that turn parameterized formulas into fare tables: a
//! distance-banded generator for road transit and a per-station-pair
//! calculator for the rail lines. Everything here is synchronous and
//! side-effect-free; the only inputs besides the formulas are the immutable
//! station tables in [`crate::stations`].

mod formula;
mod generator;
mod money;
mod presets;
mod rail;

pub use formula::{FareFormula, InvalidFormula, RailFormula};
pub use generator::{generate, generate_all};
pub use money::{ceil_to_step, round2};
pub use presets::{ROAD_PRESETS, RoadPreset, default_rail_formula};
pub use rail::{fare_for_distance, rail_fare, rail_preview};
