//! Editable fare table rows.
//!
//! These are the records the admin screens edit and the store persists.
//! Invariants are checked on every write, so code reading the store can
//! trust the rows it gets back.

use serde::{Deserialize, Serialize};

/// Error returned when a fare table row violates its invariants.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidRow {
    /// A required text field is blank
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    /// Distance must be a positive, finite number of kilometers
    #[error("distance_km must be a positive, finite number")]
    BadDistance,

    /// A monetary field is non-finite or negative
    #[error("{field} must be a finite, non-negative amount")]
    BadAmount { field: &'static str },

    /// Discounted fare must not exceed the regular fare
    #[error("discounted fare {discounted} exceeds regular fare {regular}")]
    DiscountAboveRegular { discounted: f64, regular: f64 },
}

fn check_amount(value: f64, field: &'static str) -> Result<(), InvalidRow> {
    if !value.is_finite() || value < 0.0 {
        return Err(InvalidRow::BadAmount { field });
    }
    Ok(())
}

fn check_text(value: &str, field: &'static str) -> Result<(), InvalidRow> {
    if value.trim().is_empty() {
        return Err(InvalidRow::EmptyField { field });
    }
    Ok(())
}

/// One distance band of the public road-transit fare table.
///
/// Rows are uniquely keyed by `(mode, distance_km)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FareRow {
    /// Road-transit mode code, e.g. "PUJ" or "PUB_AIRCON"
    pub mode: String,

    /// Distance band in kilometers
    pub distance_km: f64,

    /// Regular fare for this band
    pub regular: f64,

    /// Discounted fare (students, seniors, PWD) for this band
    pub discounted: f64,
}

impl FareRow {
    /// Check the row invariants.
    pub fn validate(&self) -> Result<(), InvalidRow> {
        check_text(&self.mode, "mode")?;
        if !self.distance_km.is_finite() || self.distance_km <= 0.0 {
            return Err(InvalidRow::BadDistance);
        }
        check_amount(self.regular, "regular")?;
        check_amount(self.discounted, "discounted")?;
        // Tolerance covers cent-rounded discounts against unrounded regular
        // fares, where f64 sums can sit a few ulps below the decimal value.
        if self.discounted > self.regular + 1e-9 {
            return Err(InvalidRow::DiscountAboveRegular {
                discounted: self.discounted,
                regular: self.regular,
            });
        }
        Ok(())
    }

    /// Canonicalize free-text fields: mode codes are stored upper-cased.
    pub fn normalized(mut self) -> Self {
        self.mode = self.mode.trim().to_uppercase();
        self
    }
}

/// A station-pair fare entry for rail lines.
///
/// Rows are uniquely keyed by
/// `(transport_mode, service_type, origin, destination, variant_type)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FareRuleRow {
    /// Line code, e.g. "LRT1"
    pub transport_mode: String,

    /// Service classification, e.g. "RAIL"
    pub service_type: String,

    /// Origin station name as entered
    pub origin: String,

    /// Destination station name as entered
    pub destination: String,

    /// Fare in pesos
    pub fare: f64,

    /// Ticket variant code, e.g. "sj" or "sv"
    pub variant_type: String,
}

impl FareRuleRow {
    /// Check the row invariants.
    pub fn validate(&self) -> Result<(), InvalidRow> {
        check_text(&self.transport_mode, "transport_mode")?;
        check_text(&self.service_type, "service_type")?;
        check_text(&self.origin, "origin")?;
        check_text(&self.destination, "destination")?;
        check_text(&self.variant_type, "variant_type")?;
        check_amount(self.fare, "fare")?;
        Ok(())
    }

    /// Canonicalize free-text fields: mode and service codes upper-cased,
    /// station names trimmed, variant code lower-cased.
    pub fn normalized(mut self) -> Self {
        self.transport_mode = self.transport_mode.trim().to_uppercase();
        self.service_type = self.service_type.trim().to_uppercase();
        self.origin = self.origin.trim().to_string();
        self.destination = self.destination.trim().to_string();
        self.variant_type = self.variant_type.trim().to_lowercase();
        self
    }

    /// The unique key of this row.
    pub fn key(&self) -> (&str, &str, &str, &str, &str) {
        (
            &self.transport_mode,
            &self.service_type,
            &self.origin,
            &self.destination,
            &self.variant_type,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fare_row() -> FareRow {
        FareRow {
            mode: "PUJ".into(),
            distance_km: 5.0,
            regular: 14.8,
            discounted: 11.84,
        }
    }

    fn rule_row() -> FareRuleRow {
        FareRuleRow {
            transport_mode: "LRT1".into(),
            service_type: "RAIL".into(),
            origin: "Monumento".into(),
            destination: "Baclaran".into(),
            fare: 40.0,
            variant_type: "sj".into(),
        }
    }

    #[test]
    fn valid_fare_row() {
        assert!(fare_row().validate().is_ok());
    }

    #[test]
    fn fare_row_rejects_empty_mode() {
        let mut row = fare_row();
        row.mode = "  ".into();
        assert_eq!(row.validate(), Err(InvalidRow::EmptyField { field: "mode" }));
    }

    #[test]
    fn fare_row_rejects_bad_distance() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let mut row = fare_row();
            row.distance_km = bad;
            assert_eq!(row.validate(), Err(InvalidRow::BadDistance));
        }
    }

    #[test]
    fn fare_row_rejects_negative_amounts() {
        let mut row = fare_row();
        row.regular = -1.0;
        assert_eq!(row.validate(), Err(InvalidRow::BadAmount { field: "regular" }));

        let mut row = fare_row();
        row.discounted = f64::NAN;
        assert_eq!(
            row.validate(),
            Err(InvalidRow::BadAmount { field: "discounted" })
        );
    }

    #[test]
    fn fare_row_rejects_discount_above_regular() {
        let mut row = fare_row();
        row.discounted = 15.0;
        assert!(matches!(
            row.validate(),
            Err(InvalidRow::DiscountAboveRegular { .. })
        ));
    }

    #[test]
    fn fare_row_allows_discount_equal_to_regular() {
        let mut row = fare_row();
        row.discounted = row.regular;
        assert!(row.validate().is_ok());
    }

    #[test]
    fn fare_row_normalized_uppercases_mode() {
        let row = FareRow {
            mode: " puj ".into(),
            ..fare_row()
        };
        assert_eq!(row.normalized().mode, "PUJ");
    }

    #[test]
    fn valid_rule_row() {
        assert!(rule_row().validate().is_ok());
    }

    #[test]
    fn rule_row_rejects_blank_fields() {
        let mut row = rule_row();
        row.origin = "".into();
        assert_eq!(
            row.validate(),
            Err(InvalidRow::EmptyField { field: "origin" })
        );

        let mut row = rule_row();
        row.variant_type = " ".into();
        assert_eq!(
            row.validate(),
            Err(InvalidRow::EmptyField { field: "variant_type" })
        );
    }

    #[test]
    fn rule_row_rejects_negative_fare() {
        let mut row = rule_row();
        row.fare = -5.0;
        assert_eq!(row.validate(), Err(InvalidRow::BadAmount { field: "fare" }));
    }

    #[test]
    fn rule_row_allows_zero_fare() {
        let mut row = rule_row();
        row.fare = 0.0;
        assert!(row.validate().is_ok());
    }

    #[test]
    fn rule_row_normalized() {
        let row = FareRuleRow {
            transport_mode: "lrt1".into(),
            service_type: "rail".into(),
            origin: "  Monumento ".into(),
            destination: " Baclaran".into(),
            fare: 40.0,
            variant_type: "SV".into(),
        };
        let row = row.normalized();
        assert_eq!(row.transport_mode, "LRT1");
        assert_eq!(row.service_type, "RAIL");
        assert_eq!(row.origin, "Monumento");
        assert_eq!(row.destination, "Baclaran");
        assert_eq!(row.variant_type, "sv");
    }

    #[test]
    fn fare_row_serde_roundtrip_preserves_values() {
        let row = fare_row();
        let json = serde_json::to_string(&row).unwrap();
        let back: FareRow = serde_json::from_str(&json).unwrap();
        assert_eq!(back, row);
    }

    #[test]
    fn rule_row_serde_roundtrip_preserves_values() {
        let row = rule_row();
        let json = serde_json::to_string(&row).unwrap();
        let back: FareRuleRow = serde_json::from_str(&json).unwrap();
        assert_eq!(back, row);
    }
}
