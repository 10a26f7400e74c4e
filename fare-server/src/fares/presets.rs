//! Published quick-adjust defaults.
//!
//! These are the fare-order values the admin screens pre-fill: road-transit
//! base fares with their included distances, and per-line rail boarding
//! fees, rates and caps. They seed the store at startup and anchor the
//! quick-adjust forms; every value can be overridden per request.

use crate::domain::RailLine;

use super::formula::{FareFormula, RailFormula};

/// Quick-adjust preset for one road-transit mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoadPreset {
    /// Mode code stored on generated rows
    pub mode: &'static str,

    /// Kilometers covered by the base fare
    pub included_distance_km: f64,

    /// Default base fare
    pub base_fare: f64,

    /// Default surcharge per succeeding kilometer
    pub add_on_rate: f64,

    /// Default discount percent for eligible groups
    pub discount_percent: f64,
}

impl RoadPreset {
    /// Materialize a generator formula from this preset.
    pub fn formula(&self, max_distance_km: f64) -> FareFormula {
        FareFormula {
            mode: self.mode.to_string(),
            base_fare: self.base_fare,
            included_distance_km: self.included_distance_km,
            additional_rate_per_succeeding_km: self.add_on_rate,
            discount_percent: self.discount_percent,
            max_distance_km,
        }
    }
}

/// Road-transit presets: jeepney, ordinary city bus, air-conditioned bus.
pub const ROAD_PRESETS: [RoadPreset; 3] = [
    RoadPreset {
        mode: "PUJ",
        included_distance_km: 4.0,
        base_fare: 13.0,
        add_on_rate: 1.8,
        discount_percent: 20.0,
    },
    RoadPreset {
        mode: "PUB_ORDINARY",
        included_distance_km: 5.0,
        base_fare: 13.0,
        add_on_rate: 2.25,
        discount_percent: 20.0,
    },
    RoadPreset {
        mode: "PUB_AIRCON",
        included_distance_km: 5.0,
        base_fare: 15.0,
        add_on_rate: 2.65,
        discount_percent: 20.0,
    },
];

/// The published default rail formula for a line.
pub fn default_rail_formula(line: RailLine) -> RailFormula {
    match line {
        RailLine::Lrt1 => RailFormula {
            boarding_fee: 16.25,
            distance_rate: 1.47,
            min_fare_primary: 20.0,
            max_fare_primary: 55.0,
            min_fare_secondary: Some(20.0),
            max_fare_secondary: Some(55.0),
        },
        RailLine::Lrt2 => RailFormula {
            boarding_fee: 13.29,
            distance_rate: 1.21,
            min_fare_primary: 15.0,
            max_fare_primary: 35.0,
            min_fare_secondary: Some(15.0),
            max_fare_secondary: Some(35.0),
        },
        RailLine::Mrt => RailFormula {
            boarding_fee: 13.0,
            distance_rate: 1.0,
            min_fare_primary: 13.0,
            max_fare_primary: 28.0,
            min_fare_secondary: None,
            max_fare_secondary: None,
        },
        RailLine::Pnr => RailFormula {
            boarding_fee: 15.0,
            distance_rate: 5.0,
            min_fare_primary: 15.0,
            max_fare_primary: 60.0,
            min_fare_secondary: None,
            max_fare_secondary: None,
        },
    }
}
