//! Private-transport fare settings.
//!
//! Private (car, motorcycle) trip estimates are priced from a flat base
//! fare plus per-km rate and a fuel cost model. The admin API only edits
//! these records; the estimation itself happens client-side.

use serde::{Deserialize, Serialize};

use super::rows::InvalidRow;

/// Base pricing for private-transport trip estimates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrivateFareSettings {
    /// Flat base fare in pesos
    pub base_fare: f64,

    /// Per-kilometer rate in pesos
    pub per_km_rate: f64,

    /// Default fuel price in pesos per liter
    pub fuel_price: f64,
}

impl PrivateFareSettings {
    /// Check the settings invariants.
    pub fn validate(&self) -> Result<(), InvalidRow> {
        check_amount(self.base_fare, "base_fare")?;
        check_amount(self.per_km_rate, "per_km_rate")?;
        check_amount(self.fuel_price, "fuel_price")?;
        Ok(())
    }
}

/// Fuel consumption settings for one private vehicle type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrivateVehicleFuelSetting {
    /// Vehicle type code, e.g. "SEDAN"
    pub vehicle_type: String,

    /// Fuel efficiency in kilometers per liter
    pub fuel_efficiency: f64,

    /// Fuel price in pesos per liter for this vehicle type
    pub fuel_price: f64,
}

impl PrivateVehicleFuelSetting {
    /// Check the row invariants. Efficiency must be strictly positive since
    /// fuel cost divides by it.
    pub fn validate(&self) -> Result<(), InvalidRow> {
        if self.vehicle_type.trim().is_empty() {
            return Err(InvalidRow::EmptyField {
                field: "vehicle_type",
            });
        }
        if !self.fuel_efficiency.is_finite() || self.fuel_efficiency <= 0.0 {
            return Err(InvalidRow::BadAmount {
                field: "fuel_efficiency",
            });
        }
        check_amount(self.fuel_price, "fuel_price")?;
        Ok(())
    }
}

/// A selectable fuel price option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrivateFuelPriceOption {
    /// Fuel type code, e.g. "GASOLINE"
    pub fuel_type: String,

    /// Price in pesos per liter
    pub price: f64,

    /// Whether this option is pre-selected
    pub is_default: bool,
}

impl PrivateFuelPriceOption {
    /// Check the row invariants.
    pub fn validate(&self) -> Result<(), InvalidRow> {
        if self.fuel_type.trim().is_empty() {
            return Err(InvalidRow::EmptyField { field: "fuel_type" });
        }
        check_amount(self.price, "price")?;
        Ok(())
    }
}

fn check_amount(value: f64, field: &'static str) -> Result<(), InvalidRow> {
    if !value.is_finite() || value < 0.0 {
        return Err(InvalidRow::BadAmount { field });
    }
    Ok(())
}
