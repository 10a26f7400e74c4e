//! Data transfer objects for the admin fare-rates API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    FareRow, FareRuleRow, PrivateFareSettings, PrivateFuelPriceOption, PrivateVehicleFuelSetting,
};
use crate::fares::{FareFormula, InvalidFormula, RailFormula};
use crate::store::FareTables;

/// Request to replace the public road-transit table.
#[derive(Debug, Deserialize)]
pub struct UpdatePublicRequest {
    /// Replacement rows
    pub rows: Vec<FareRow>,
}

/// Request to replace the public table and the rail fare rules together.
#[derive(Debug, Deserialize)]
pub struct UpdatePublicAllRequest {
    /// Replacement road-transit rows
    pub public_mode_fares: Vec<FareRow>,

    /// Replacement rail fare rules
    pub fare_rules: Vec<FareRuleRow>,
}

/// Request to generate road-transit fare previews.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    /// One formula per mode to generate
    pub formulas: Vec<FormulaDto>,
}

/// A generator formula as submitted by the admin client.
///
/// Older clients send the add-on rate as `increment_per_km`; both spellings
/// are accepted, with the explicit field winning. The included distance
/// defaults to zero (no flat band).
#[derive(Debug, Clone, Deserialize)]
pub struct FormulaDto {
    /// Road-transit mode code
    pub mode: String,

    /// Flat fare for the included distance
    pub base_fare: f64,

    /// Kilometers covered by the base fare
    #[serde(default)]
    pub included_distance_km: Option<f64>,

    /// Surcharge per succeeding kilometer
    #[serde(default)]
    pub additional_rate_per_succeeding_km: Option<f64>,

    /// Legacy spelling of the surcharge rate
    #[serde(default)]
    pub increment_per_km: Option<f64>,

    /// Discount percent for the discounted column
    pub discount_percent: f64,

    /// Last distance band to generate
    pub max_distance_km: f64,
}

impl FormulaDto {
    /// Convert to an engine formula, resolving the legacy rate spelling.
    pub fn into_formula(self) -> Result<FareFormula, InvalidFormula> {
        let rate = self
            .additional_rate_per_succeeding_km
            .or(self.increment_per_km)
            .ok_or(InvalidFormula::Missing {
                field: "additional_rate_per_succeeding_km",
            })?;

        Ok(FareFormula {
            mode: self.mode,
            base_fare: self.base_fare,
            included_distance_km: self.included_distance_km.unwrap_or(0.0),
            additional_rate_per_succeeding_km: rate,
            discount_percent: self.discount_percent,
            max_distance_km: self.max_distance_km,
        })
    }
}

/// Request to recompute one line's fare rules from a formula.
#[derive(Debug, Deserialize)]
pub struct RailGenerateRequest {
    /// Line code, e.g. "LRT1"
    pub line: String,

    /// Formula to price the line's station pairs with
    pub formula: RailFormula,
}

/// Request to replace the per-vehicle-type fuel settings.
#[derive(Debug, Deserialize)]
pub struct UpdateVehicleSettingsRequest {
    /// Replacement rows
    pub rows: Vec<PrivateVehicleFuelSetting>,
}

/// Request to replace the fuel price options.
#[derive(Debug, Deserialize)]
pub struct UpdateFuelPricesRequest {
    /// Replacement rows
    pub rows: Vec<PrivateFuelPriceOption>,
}

/// Full fare-rates snapshot returned by the admin API.
#[derive(Debug, Serialize)]
pub struct FareRatesResponse {
    /// Distance-banded road-transit fares
    pub public: Vec<FareRow>,

    /// Station-pair rail fares
    pub fare_rules: Vec<FareRuleRow>,

    /// Private-transport base pricing
    pub private_settings: Option<PrivateFareSettings>,

    /// When any table was last written, if ever
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<FareTables> for FareRatesResponse {
    fn from(tables: FareTables) -> Self {
        Self {
            public: tables.public_mode_fares,
            fare_rules: tables.fare_rules,
            private_settings: tables.private_settings,
            updated_at: tables.updated_at,
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formula_dto_prefers_explicit_rate() {
        let dto = FormulaDto {
            mode: "PUJ".into(),
            base_fare: 13.0,
            included_distance_km: Some(4.0),
            additional_rate_per_succeeding_km: Some(1.8),
            increment_per_km: Some(9.9),
            discount_percent: 20.0,
            max_distance_km: 60.0,
        };
        let formula = dto.into_formula().unwrap();
        assert_eq!(formula.additional_rate_per_succeeding_km, 1.8);
    }

    #[test]
    fn formula_dto_falls_back_to_legacy_rate() {
        let dto = FormulaDto {
            mode: "PUJ".into(),
            base_fare: 13.0,
            included_distance_km: None,
            additional_rate_per_succeeding_km: None,
            increment_per_km: Some(1.8),
            discount_percent: 20.0,
            max_distance_km: 60.0,
        };
        let formula = dto.into_formula().unwrap();
        assert_eq!(formula.additional_rate_per_succeeding_km, 1.8);
        assert_eq!(formula.included_distance_km, 0.0);
    }

    #[test]
    fn formula_dto_requires_some_rate() {
        let dto = FormulaDto {
            mode: "PUJ".into(),
            base_fare: 13.0,
            included_distance_km: None,
            additional_rate_per_succeeding_km: None,
            increment_per_km: None,
            discount_percent: 20.0,
            max_distance_km: 60.0,
        };
        assert_eq!(
            dto.into_formula(),
            Err(InvalidFormula::Missing {
                field: "additional_rate_per_succeeding_km"
            })
        );
    }

    #[test]
    fn generate_request_accepts_client_payload() {
        // The payload shape the admin app actually sends
        let json = r#"{
            "formulas": [{
                "mode": "PUJ",
                "base_fare": 13,
                "increment_per_km": 1.8,
                "additional_rate_per_succeeding_km": 1.8,
                "included_distance_km": 4,
                "discount_percent": 20,
                "max_distance_km": 60
            }]
        }"#;
        let req: GenerateRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.formulas.len(), 1);
        let formula = req.formulas[0].clone().into_formula().unwrap();
        assert_eq!(formula.mode, "PUJ");
        assert_eq!(formula.included_distance_km, 4.0);
    }

    #[test]
    fn rail_generate_request_deserializes() {
        let json = r#"{
            "line": "LRT1",
            "formula": {
                "boarding_fee": 16.25,
                "distance_rate": 1.47,
                "min_fare_primary": 20,
                "max_fare_primary": 55,
                "min_fare_secondary": 20,
                "max_fare_secondary": 55
            }
        }"#;
        let req: RailGenerateRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.line, "LRT1");
        assert_eq!(req.formula.boarding_fee, 16.25);
        assert_eq!(req.formula.max_fare_secondary, Some(55.0));
    }

    #[test]
    fn rail_formula_secondary_bounds_are_optional() {
        let json = r#"{
            "boarding_fee": 15,
            "distance_rate": 5,
            "min_fare_primary": 15,
            "max_fare_primary": 60
        }"#;
        let formula: RailFormula = serde_json::from_str(json).unwrap();
        assert_eq!(formula.min_fare_secondary, None);
    }

    #[test]
    fn fare_rates_response_from_tables() {
        let tables = FareTables {
            public_mode_fares: vec![FareRow {
                mode: "PUJ".into(),
                distance_km: 1.0,
                regular: 13.0,
                discounted: 10.4,
            }],
            fare_rules: vec![],
            private_settings: None,
            private_vehicles: vec![],
            fuel_prices: vec![],
            updated_at: None,
        };

        let response = FareRatesResponse::from(tables);
        assert_eq!(response.public.len(), 1);
        assert!(response.fare_rules.is_empty());
        assert!(response.updated_at.is_none());
    }

    #[test]
    fn fare_row_json_roundtrip_is_lossless() {
        let rows = vec![
            FareRow {
                mode: "PUJ".into(),
                distance_km: 5.0,
                regular: 14.8,
                discounted: 11.84,
            },
            FareRow {
                mode: "PUB_AIRCON".into(),
                distance_km: 6.0,
                regular: 17.65,
                discounted: 14.12,
            },
        ];
        let json = serde_json::to_string(&rows).unwrap();
        let back: Vec<FareRow> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rows);
    }
}
