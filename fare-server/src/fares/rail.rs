//! Per-pair rail fare computation.
//!
//! Fares are derived from the difference of two cumulative station
//! distances, then priced by the line's [`FarePolicy`]. Station names are
//! resolved through the alias table first; a pair that does not resolve is
//! deliberately left uncomputed rather than guessed at.

use crate::domain::{FarePolicy, FareRuleRow, RailLine, TicketVariant};
use crate::stations::{AliasTable, LineDistances};

use super::formula::RailFormula;
use super::money::{ceil_to_step, round2};

/// Compute the fare for a station pair on a line.
///
/// Returns `None` when either endpoint is missing from the line's distance
/// table; callers keep the previously stored fare in that case. A
/// same-station pair is exactly zero regardless of the formula.
///
/// The formula is assumed valid (see [`RailFormula::validate`]); callers
/// check it before computing.
pub fn rail_fare(
    aliases: &AliasTable,
    distances: &LineDistances,
    line: RailLine,
    origin: &str,
    destination: &str,
    variant: TicketVariant,
    formula: &RailFormula,
) -> Option<f64> {
    let origin_km = distances.distance_km(line, &aliases.canonical(origin).to_uppercase())?;
    let destination_km =
        distances.distance_km(line, &aliases.canonical(destination).to_uppercase())?;

    if origin_km == destination_km {
        return Some(0.0);
    }

    Some(fare_for_distance(
        line,
        variant,
        (destination_km - origin_km).abs(),
        formula,
    ))
}

/// Price a known distance difference on a line.
///
/// This is the policy arithmetic of [`rail_fare`] without the station
/// resolution, for callers that already hold a distance.
pub fn fare_for_distance(
    line: RailLine,
    variant: TicketVariant,
    distance_km: f64,
    formula: &RailFormula,
) -> f64 {
    match line.policy() {
        FarePolicy::Zoned {
            base_km,
            zone_km,
            cap,
        } => {
            if distance_km <= base_km {
                return round2(cap.min(formula.boarding_fee));
            }
            let zones = ((distance_km - base_km) / zone_km).ceil();
            round2(cap.min(formula.boarding_fee + zones * formula.distance_rate))
        }

        FarePolicy::VariantSplit { step } => {
            let raw = formula.boarding_fee + distance_km * formula.distance_rate;
            let fare = match variant {
                // Stored-value cards are charged the exact computed fare
                TicketVariant::StoredValue => raw,
                TicketVariant::SingleJourney => ceil_to_step(raw, step),
            };
            let (min, max) = formula.bounds(variant);
            round2(fare.max(min).min(max))
        }

        FarePolicy::FlatStep { step } => {
            let raw = formula.boarding_fee + distance_km * formula.distance_rate;
            let (min, max) = formula.primary_bounds();
            round2(ceil_to_step(raw, step).max(min).min(max))
        }
    }
}

/// Recompute the stored fare rules of one line against a formula.
///
/// Only rows whose `transport_mode` matches the line are returned. Rows
/// whose stations do not resolve keep their stored fare unchanged.
pub fn rail_preview(
    aliases: &AliasTable,
    distances: &LineDistances,
    line: RailLine,
    formula: &RailFormula,
    rules: &[FareRuleRow],
) -> Vec<FareRuleRow> {
    rules
        .iter()
        .filter(|row| row.transport_mode.eq_ignore_ascii_case(line.as_str()))
        .map(|row| {
            let variant = if line.uses_variant_split() {
                TicketVariant::parse(&row.variant_type)
            } else {
                TicketVariant::SingleJourney
            };
            match rail_fare(
                aliases,
                distances,
                line,
                &row.origin,
                &row.destination,
                variant,
                formula,
            ) {
                Some(fare) => FareRuleRow {
                    fare,
                    ..row.clone()
                },
                None => row.clone(),
            }
        })
        .collect()
}
