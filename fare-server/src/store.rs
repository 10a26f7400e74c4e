//! In-memory fare table store.
//!
//! The editable tables live behind a `tokio` RwLock: handlers take cheap
//! snapshots for reads and writes replace whole tables atomically. Every
//! write validates row invariants first, so a failed update leaves the
//! stored tables untouched.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::domain::{
    FareRow, FareRuleRow, InvalidRow, PrivateFareSettings, PrivateFuelPriceOption,
    PrivateVehicleFuelSetting, RailLine, TicketVariant,
};
use crate::fares::{ROAD_PRESETS, default_rail_formula, fare_for_distance, generate};
use crate::stations::LineDistances;

/// Distance bands generated for the seeded road-transit tables.
const SEED_MAX_DISTANCE_KM: f64 = 60.0;

/// The editable fare tables.
#[derive(Debug, Clone, Default)]
pub struct FareTables {
    /// Distance-banded road-transit fares
    pub public_mode_fares: Vec<FareRow>,

    /// Station-pair rail fares
    pub fare_rules: Vec<FareRuleRow>,

    /// Private-transport base pricing
    pub private_settings: Option<PrivateFareSettings>,

    /// Per-vehicle-type fuel settings
    pub private_vehicles: Vec<PrivateVehicleFuelSetting>,

    /// Selectable fuel price options
    pub fuel_prices: Vec<PrivateFuelPriceOption>,

    /// When any table was last written, if ever
    pub updated_at: Option<DateTime<Utc>>,
}

/// Thread-safe handle over the fare tables.
#[derive(Clone)]
pub struct FareStore {
    inner: Arc<RwLock<FareTables>>,
}

impl FareStore {
    /// Create a store holding the given tables.
    pub fn new(tables: FareTables) -> Self {
        Self {
            inner: Arc::new(RwLock::new(tables)),
        }
    }

    /// A point-in-time copy of all tables.
    pub async fn snapshot(&self) -> FareTables {
        self.inner.read().await.clone()
    }

    /// Replace the public road-transit table.
    ///
    /// Rows are normalized, validated and key-sorted before being stored;
    /// returns the stored rows.
    pub async fn replace_public(&self, rows: Vec<FareRow>) -> Result<Vec<FareRow>, InvalidRow> {
        let rows = prepare_public(rows)?;

        let mut guard = self.inner.write().await;
        guard.public_mode_fares = rows.clone();
        guard.updated_at = Some(Utc::now());
        Ok(rows)
    }

    /// Replace the public table and the rail fare rules in one write.
    ///
    /// Both row sets are validated before either table changes; returns the
    /// resulting snapshot.
    pub async fn replace_public_all(
        &self,
        rows: Vec<FareRow>,
        rules: Vec<FareRuleRow>,
    ) -> Result<FareTables, InvalidRow> {
        let rows = prepare_public(rows)?;
        let rules = prepare_rules(rules)?;

        let mut guard = self.inner.write().await;
        guard.public_mode_fares = rows;
        guard.fare_rules = rules;
        guard.updated_at = Some(Utc::now());
        Ok(guard.clone())
    }

    /// Replace the private-transport base pricing.
    pub async fn replace_private_settings(
        &self,
        settings: PrivateFareSettings,
    ) -> Result<PrivateFareSettings, InvalidRow> {
        settings.validate()?;

        let mut guard = self.inner.write().await;
        guard.private_settings = Some(settings.clone());
        guard.updated_at = Some(Utc::now());
        Ok(settings)
    }

    /// The per-vehicle-type fuel settings.
    pub async fn vehicle_settings(&self) -> Vec<PrivateVehicleFuelSetting> {
        self.inner.read().await.private_vehicles.clone()
    }

    /// Replace the per-vehicle-type fuel settings.
    pub async fn replace_vehicle_settings(
        &self,
        rows: Vec<PrivateVehicleFuelSetting>,
    ) -> Result<Vec<PrivateVehicleFuelSetting>, InvalidRow> {
        for row in &rows {
            row.validate()?;
        }

        let mut guard = self.inner.write().await;
        guard.private_vehicles = rows.clone();
        guard.updated_at = Some(Utc::now());
        Ok(rows)
    }

    /// The selectable fuel price options.
    pub async fn fuel_prices(&self) -> Vec<PrivateFuelPriceOption> {
        self.inner.read().await.fuel_prices.clone()
    }

    /// Replace the fuel price options.
    pub async fn replace_fuel_prices(
        &self,
        rows: Vec<PrivateFuelPriceOption>,
    ) -> Result<Vec<PrivateFuelPriceOption>, InvalidRow> {
        for row in &rows {
            row.validate()?;
        }

        let mut guard = self.inner.write().await;
        guard.fuel_prices = rows.clone();
        guard.updated_at = Some(Utc::now());
        Ok(rows)
    }
}

fn prepare_public(rows: Vec<FareRow>) -> Result<Vec<FareRow>, InvalidRow> {
    let mut rows: Vec<FareRow> = rows.into_iter().map(FareRow::normalized).collect();
    for row in &rows {
        row.validate()?;
    }
    rows.sort_by(|a, b| {
        a.mode
            .cmp(&b.mode)
            .then_with(|| a.distance_km.total_cmp(&b.distance_km))
    });
    Ok(rows)
}

fn prepare_rules(rows: Vec<FareRuleRow>) -> Result<Vec<FareRuleRow>, InvalidRow> {
    let mut rows: Vec<FareRuleRow> = rows.into_iter().map(FareRuleRow::normalized).collect();
    for row in &rows {
        row.validate()?;
    }
    rows.sort_by(|a, b| a.key().cmp(&b.key()));
    Ok(rows)
}

/// Build the seeded startup tables from the published presets.
///
/// Road-transit tables come from the quick-adjust presets; the rail fare
/// rules enumerate every station pair per line, priced with that line's
/// default formula.
pub fn seed_tables(distances: &LineDistances) -> FareTables {
    let mut public_mode_fares = Vec::new();
    for preset in ROAD_PRESETS {
        let rows = generate(&preset.formula(SEED_MAX_DISTANCE_KM))
            .expect("road presets are valid formulas");
        public_mode_fares.extend(rows);
    }

    let mut fare_rules = Vec::new();
    for line in RailLine::ALL {
        let formula = default_rail_formula(line);
        let variants: &[TicketVariant] = if line.uses_variant_split() {
            &[TicketVariant::SingleJourney, TicketVariant::StoredValue]
        } else {
            &[TicketVariant::SingleJourney]
        };

        // Alias keys share a physical station's distance; keep the first
        // spelling of each.
        let mut stations = distances.stations(line);
        stations.dedup_by(|a, b| a.1 == b.1);

        for (i, (origin, origin_km)) in stations.iter().enumerate() {
            for (destination, destination_km) in &stations[i + 1..] {
                for &variant in variants {
                    fare_rules.push(FareRuleRow {
                        transport_mode: line.as_str().to_string(),
                        service_type: "RAIL".to_string(),
                        origin: (*origin).to_string(),
                        destination: (*destination).to_string(),
                        fare: fare_for_distance(
                            line,
                            variant,
                            (destination_km - origin_km).abs(),
                            &formula,
                        ),
                        variant_type: variant.as_str().to_string(),
                    });
                }
            }
        }
    }
    fare_rules.sort_by(|a, b| a.key().cmp(&b.key()));

    FareTables {
        public_mode_fares,
        fare_rules,
        private_settings: Some(PrivateFareSettings {
            base_fare: 45.0,
            per_km_rate: 13.5,
            fuel_price: 65.0,
        }),
        private_vehicles: vec![
            PrivateVehicleFuelSetting {
                vehicle_type: "SEDAN".into(),
                fuel_efficiency: 10.0,
                fuel_price: 65.0,
            },
            PrivateVehicleFuelSetting {
                vehicle_type: "SUV".into(),
                fuel_efficiency: 8.0,
                fuel_price: 65.0,
            },
            PrivateVehicleFuelSetting {
                vehicle_type: "MOTORCYCLE".into(),
                fuel_efficiency: 22.0,
                fuel_price: 65.0,
            },
        ],
        fuel_prices: vec![
            PrivateFuelPriceOption {
                fuel_type: "GASOLINE".into(),
                price: 65.0,
                is_default: true,
            },
            PrivateFuelPriceOption {
                fuel_type: "DIESEL".into(),
                price: 60.0,
                is_default: false,
            },
        ],
        updated_at: None,
    }
}
