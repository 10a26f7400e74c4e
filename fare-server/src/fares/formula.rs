//! Fare formula parameters and validation.

use serde::{Deserialize, Serialize};

use crate::domain::{FarePolicy, RailLine, TicketVariant};

/// Error returned when a fare formula fails validation.
///
/// Validation runs before any computation; a failing formula produces no
/// partial results.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidFormula {
    /// A required field was not supplied
    #[error("missing required field: {field}")]
    Missing { field: &'static str },

    /// A numeric field is NaN or infinite
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    /// A numeric field is negative
    #[error("{field} must not be negative")]
    Negative { field: &'static str },

    /// The road-transit mode code is blank
    #[error("mode must not be empty")]
    EmptyMode,

    /// Discount percent outside 0..=100 would produce negative fares
    #[error("discount_percent ({percent}) must be between 0 and 100")]
    DiscountOutOfRange { percent: f64 },

    /// The table would end before the flat-fare band does
    #[error("max_distance_km ({max}) must not be below included_distance_km ({included})")]
    MaxBelowIncluded { max: f64, included: f64 },

    /// Minimum fare cap exceeds the maximum
    #[error("minimum fare {min} exceeds maximum fare {max}")]
    MinAboveMax { min: f64, max: f64 },
}

fn check_numeric(value: f64, field: &'static str) -> Result<(), InvalidFormula> {
    if !value.is_finite() {
        return Err(InvalidFormula::NotFinite { field });
    }
    if value < 0.0 {
        return Err(InvalidFormula::Negative { field });
    }
    Ok(())
}

/// Parameters for generating a distance-banded road-transit fare table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FareFormula {
    /// Road-transit mode the table is for, e.g. "PUJ"
    pub mode: String,

    /// Flat fare covering the first `included_distance_km`
    pub base_fare: f64,

    /// Kilometers covered by the base fare
    pub included_distance_km: f64,

    /// Surcharge per kilometer beyond the included distance
    pub additional_rate_per_succeeding_km: f64,

    /// Discount applied to the discounted column, in percent
    pub discount_percent: f64,

    /// Last distance band to generate; fractional values are floored
    pub max_distance_km: f64,
}

impl FareFormula {
    /// Check all formula invariants.
    pub fn validate(&self) -> Result<(), InvalidFormula> {
        if self.mode.trim().is_empty() {
            return Err(InvalidFormula::EmptyMode);
        }
        check_numeric(self.base_fare, "base_fare")?;
        check_numeric(self.included_distance_km, "included_distance_km")?;
        check_numeric(
            self.additional_rate_per_succeeding_km,
            "additional_rate_per_succeeding_km",
        )?;
        check_numeric(self.discount_percent, "discount_percent")?;
        check_numeric(self.max_distance_km, "max_distance_km")?;
        if self.discount_percent > 100.0 {
            return Err(InvalidFormula::DiscountOutOfRange {
                percent: self.discount_percent,
            });
        }
        if self.max_distance_km < self.included_distance_km {
            return Err(InvalidFormula::MaxBelowIncluded {
                max: self.max_distance_km,
                included: self.included_distance_km,
            });
        }
        Ok(())
    }
}

/// Parameters for computing rail fares on one line.
///
/// For the zoned PNR rule, `boarding_fee` doubles as the base fare and
/// `distance_rate` as the add-on per started zone. The secondary bounds are
/// only meaningful on lines that price stored-value tickets separately; when
/// absent they fall back to the primary bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RailFormula {
    /// Boarding fee added to every fare
    pub boarding_fee: f64,

    /// Rate per kilometer (or per zone, on the zoned line)
    pub distance_rate: f64,

    /// Minimum single-journey fare
    pub min_fare_primary: f64,

    /// Maximum single-journey fare
    pub max_fare_primary: f64,

    /// Minimum stored-value fare, where the line distinguishes variants
    #[serde(default)]
    pub min_fare_secondary: Option<f64>,

    /// Maximum stored-value fare, where the line distinguishes variants
    #[serde(default)]
    pub max_fare_secondary: Option<f64>,
}

impl RailFormula {
    /// Check the formula invariants that apply to `line`.
    ///
    /// The zoned line only uses the boarding fee and per-zone rate, so its
    /// caps are not checked; variant-split lines additionally check the
    /// effective stored-value bounds.
    pub fn validate(&self, line: RailLine) -> Result<(), InvalidFormula> {
        check_numeric(self.boarding_fee, "boarding_fee")?;
        check_numeric(self.distance_rate, "distance_rate")?;
        if matches!(line.policy(), FarePolicy::Zoned { .. }) {
            return Ok(());
        }

        check_numeric(self.min_fare_primary, "min_fare_primary")?;
        check_numeric(self.max_fare_primary, "max_fare_primary")?;
        if self.min_fare_primary > self.max_fare_primary {
            return Err(InvalidFormula::MinAboveMax {
                min: self.min_fare_primary,
                max: self.max_fare_primary,
            });
        }

        if line.uses_variant_split() {
            if let Some(min) = self.min_fare_secondary {
                check_numeric(min, "min_fare_secondary")?;
            }
            if let Some(max) = self.max_fare_secondary {
                check_numeric(max, "max_fare_secondary")?;
            }
            let (min, max) = self.bounds(TicketVariant::StoredValue);
            if min > max {
                return Err(InvalidFormula::MinAboveMax { min, max });
            }
        }
        Ok(())
    }

    /// The single-journey fare caps.
    pub fn primary_bounds(&self) -> (f64, f64) {
        (self.min_fare_primary, self.max_fare_primary)
    }

    /// The fare caps for a ticket variant, falling back to the primary
    /// bounds when no secondary caps are set.
    pub fn bounds(&self, variant: TicketVariant) -> (f64, f64) {
        match variant {
            TicketVariant::SingleJourney => self.primary_bounds(),
            TicketVariant::StoredValue => (
                self.min_fare_secondary.unwrap_or(self.min_fare_primary),
                self.max_fare_secondary.unwrap_or(self.max_fare_primary),
            ),
        }
    }
}
