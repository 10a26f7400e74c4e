//! Domain types for the fare administration server.
//!
//! This module contains the core domain model types representing validated
//! fare data. Row invariants are checked on every store write, so code that
//! reads the tables can trust their validity.

mod line;
mod private;
mod rows;
mod variant;

pub use line::{FarePolicy, RailLine, UnknownLine};
pub use private::{PrivateFareSettings, PrivateFuelPriceOption, PrivateVehicleFuelSetting};
pub use rows::{FareRow, FareRuleRow, InvalidRow};
pub use variant::TicketVariant;
