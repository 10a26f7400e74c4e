//! Distance-banded fare table generation for road transit.

use crate::domain::FareRow;

use super::formula::{FareFormula, InvalidFormula};
use super::money::round2;

/// Generate the full distance-banded fare table for one road-transit mode.
///
/// Emits one row per integer kilometer from 1 to `floor(max_distance_km)`,
/// ascending. The regular fare is flat within the included distance and
/// linear beyond it; the discounted fare applies `discount_percent` and is
/// rounded to the cent.
pub fn generate(formula: &FareFormula) -> Result<Vec<FareRow>, InvalidFormula> {
    formula.validate()?;

    let max_km = formula.max_distance_km.floor() as u32;
    let discount_factor = 1.0 - formula.discount_percent / 100.0;

    let mut rows = Vec::with_capacity(max_km as usize);
    for d in 1..=max_km {
        let distance_km = f64::from(d);
        let regular = if distance_km <= formula.included_distance_km {
            formula.base_fare
        } else {
            formula.base_fare
                + (distance_km - formula.included_distance_km)
                    * formula.additional_rate_per_succeeding_km
        };

        rows.push(FareRow {
            mode: formula.mode.clone(),
            distance_km,
            regular,
            discounted: round2(regular * discount_factor),
        });
    }

    Ok(rows)
}

/// Generate tables for several formulas at once.
///
/// All formulas are validated up front; if any fails, no rows are produced.
pub fn generate_all(formulas: &[FareFormula]) -> Result<Vec<FareRow>, InvalidFormula> {
    for formula in formulas {
        formula.validate()?;
    }

    let mut rows = Vec::new();
    for formula in formulas {
        rows.extend(generate(formula)?);
    }
    Ok(rows)
}
