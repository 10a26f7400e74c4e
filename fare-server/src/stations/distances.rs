//! Standardized station distances.
//!
//! Each rail line publishes cumulative distances in kilometers from its
//! zero point. Fares are computed from the difference of two cumulative
//! distances, so the tables only need to be consistent per line, not
//! comparable across lines.

use std::collections::HashMap;

use crate::domain::RailLine;

/// Per-line mapping from canonical station name to cumulative distance.
///
/// Lookup keys are upper-cased canonical names as produced by
/// [`AliasTable::canonical`](super::AliasTable::canonical). Renamed stations
/// keep both spellings as keys (e.g. `ROOSEVELT` and
/// `FPJ (FORMERLY ROOSEVELT)` at km 0 on LRT-1), so either resolves.
#[derive(Debug, Clone, Default)]
pub struct LineDistances {
    distances: HashMap<(RailLine, String), f64>,
}

impl LineDistances {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a station's cumulative distance on a line.
    pub fn add(&mut self, line: RailLine, station: &str, km: f64) {
        self.distances.insert((line, station.to_uppercase()), km);
    }

    /// Cumulative distance of a station on a line, in kilometers.
    ///
    /// `station` must be the upper-cased canonical name. Returns `None` for
    /// unknown stations; callers treat that as "cannot compute fare, leave
    /// the row unchanged".
    pub fn distance_km(&self, line: RailLine, station: &str) -> Option<f64> {
        self.distances.get(&(line, station.to_string())).copied()
    }

    /// All stations of a line with their distances, nearest first.
    ///
    /// Ties (alias keys for the same physical station) are ordered by name
    /// so the listing is deterministic.
    pub fn stations(&self, line: RailLine) -> Vec<(&str, f64)> {
        let mut stations: Vec<(&str, f64)> = self
            .distances
            .iter()
            .filter(|((l, _), _)| *l == line)
            .map(|((_, name), km)| (name.as_str(), *km))
            .collect();
        stations.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(b.0)));
        stations
    }

    /// Total number of registered station entries across all lines.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Returns true if no stations are registered.
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}

/// Builder for distance registries.
#[derive(Debug, Default)]
pub struct LineDistancesBuilder {
    inner: LineDistances,
}

impl LineDistancesBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a station.
    pub fn add(mut self, line: RailLine, station: &str, km: f64) -> Self {
        self.inner.add(line, station, km);
        self
    }

    /// Build the registry.
    pub fn build(self) -> LineDistances {
        self.inner
    }
}

/// The standardized distance tables for the Metro Manila rail network.
pub fn metro_manila_distances() -> LineDistances {
    use RailLine::{Lrt1, Lrt2, Mrt, Pnr};

    LineDistancesBuilder::new()
        // LRT-1, km from FPJ (formerly Roosevelt)
        .add(Lrt1, "FPJ (FORMERLY ROOSEVELT)", 0.0)
        .add(Lrt1, "ROOSEVELT", 0.0)
        .add(Lrt1, "BALINTAWAK", 1.87)
        .add(Lrt1, "MONUMENTO", 4.12)
        .add(Lrt1, "5TH AVENUE", 5.19)
        .add(Lrt1, "R. PAPA", 6.14)
        .add(Lrt1, "ABAD SANTOS", 6.8)
        .add(Lrt1, "BLUMENTRITT", 7.73)
        .add(Lrt1, "TAYUMAN", 8.4)
        .add(Lrt1, "BAMBANG", 9.02)
        .add(Lrt1, "DOROTEO JOSE", 9.67)
        .add(Lrt1, "CARRIEDO", 10.48)
        .add(Lrt1, "CENTRAL TERMINAL", 11.2)
        .add(Lrt1, "CENTRAL", 11.2)
        .add(Lrt1, "UNITED NATIONS", 12.41)
        .add(Lrt1, "UN AVE.", 12.41)
        .add(Lrt1, "PEDRO GIL", 13.16)
        .add(Lrt1, "QUIRINO", 13.95)
        .add(Lrt1, "VITO CRUZ", 14.77)
        .add(Lrt1, "GIL PUYAT", 15.39)
        .add(Lrt1, "LIBERTAD", 16.12)
        .add(Lrt1, "EDSA", 17.13)
        .add(Lrt1, "BACLARAN", 17.72)
        .add(Lrt1, "REDEMPTORIST-ASEANA", 18.5)
        .add(Lrt1, "MIA ROAD", 19.3)
        .add(Lrt1, "PITX (ASIA WORLD)", 20.4)
        .add(Lrt1, "NINOY AQUINO AVE", 21.8)
        .add(Lrt1, "DR. SANTOS", 23.1)
        // LRT-2, km from Antipolo
        .add(Lrt2, "ANTIPOLO (MASINAG)", 0.0)
        .add(Lrt2, "MARIKINA-PASIG", 2.23)
        .add(Lrt2, "SANTOLAN", 4.03)
        .add(Lrt2, "KATIPUNAN", 6.0)
        .add(Lrt2, "ANONAS", 6.95)
        .add(Lrt2, "ARANETA CENTER-CUBAO", 7.89)
        .add(Lrt2, "BETTY GO-BELMONTE", 9.06)
        .add(Lrt2, "GILMORE", 10.14)
        .add(Lrt2, "J. RUIZ", 11.08)
        .add(Lrt2, "V. MAPA", 12.31)
        .add(Lrt2, "PUREZA", 13.67)
        .add(Lrt2, "LEGARDA", 15.06)
        .add(Lrt2, "RECTO", 16.11)
        // MRT-3, km from North Avenue
        .add(Mrt, "NORTH AVENUE", 0.0)
        .add(Mrt, "QUEZON AVENUE", 1.2)
        .add(Mrt, "GMA-KAMUNING", 2.15)
        .add(Mrt, "ARANETA CENTER-CUBAO", 4.05)
        .add(Mrt, "SANTOLAN-ANNAPOLIS", 5.55)
        .add(Mrt, "ORTIGAS", 7.85)
        .add(Mrt, "SHAW BOULEVARD", 8.65)
        .add(Mrt, "BONI", 9.6)
        .add(Mrt, "GUADALUPE", 10.45)
        .add(Mrt, "BUENDIA", 12.45)
        .add(Mrt, "AYALA", 13.4)
        .add(Mrt, "MAGALLANES", 14.95)
        .add(Mrt, "TAFT AVENUE", 16.9)
        // PNR, km from Tutuban
        .add(Pnr, "TUTUBAN", 0.0)
        .add(Pnr, "BLUMENTRITT", 2.4)
        .add(Pnr, "LAON LAAN", 3.6)
        .add(Pnr, "ESPANA", 5.0)
        .add(Pnr, "STA. MESA", 6.7)
        .add(Pnr, "PACO", 8.6)
        .add(Pnr, "SAN ANDRES", 10.1)
        .add(Pnr, "VITO CRUZ", 11.5)
        .add(Pnr, "DELA ROSA", 14.0)
        .add(Pnr, "EDSA", 16.3)
        .add(Pnr, "NICHOLS", 18.9)
        .add(Pnr, "FTI", 21.9)
        .add(Pnr, "BICUTAN", 24.3)
        .add(Pnr, "SUCAT", 27.4)
        .add(Pnr, "ALABANG", 31.8)
        .add(Pnr, "MUNTINLUPA", 34.3)
        .add(Pnr, "SAN PEDRO", 39.0)
        .add(Pnr, "PACITA MAIN GATE", 41.4)
        .add(Pnr, "BINAN", 44.5)
        .add(Pnr, "SANTA ROSA", 48.8)
        .add(Pnr, "CABUYAO", 52.0)
        .add(Pnr, "BANLIC", 54.1)
        .add(Pnr, "CALAMBA", 56.2)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_registry() {
        let distances = LineDistances::new();
        assert!(distances.is_empty());
        assert!(distances.distance_km(RailLine::Lrt1, "MONUMENTO").is_none());
    }

    #[test]
    fn add_and_lookup() {
        let mut distances = LineDistances::new();
        distances.add(RailLine::Lrt1, "Monumento", 4.12);

        assert_eq!(distances.len(), 1);
        // Keys are folded to upper case on insert
        assert_eq!(distances.distance_km(RailLine::Lrt1, "MONUMENTO"), Some(4.12));
    }

    #[test]
    fn lines_are_independent() {
        let distances = metro_manila_distances();

        // EDSA exists on two lines at different positions
        assert_eq!(distances.distance_km(RailLine::Lrt1, "EDSA"), Some(17.13));
        assert_eq!(distances.distance_km(RailLine::Pnr, "EDSA"), Some(16.3));

        // Blumentritt likewise
        assert_eq!(distances.distance_km(RailLine::Lrt1, "BLUMENTRITT"), Some(7.73));
        assert_eq!(distances.distance_km(RailLine::Pnr, "BLUMENTRITT"), Some(2.4));

        // Monumento is LRT-1 only
        assert!(distances.distance_km(RailLine::Mrt, "MONUMENTO").is_none());
    }

    #[test]
    fn renamed_stations_keep_both_keys() {
        let distances = metro_manila_distances();

        assert_eq!(distances.distance_km(RailLine::Lrt1, "ROOSEVELT"), Some(0.0));
        assert_eq!(
            distances.distance_km(RailLine::Lrt1, "FPJ (FORMERLY ROOSEVELT)"),
            Some(0.0)
        );
        assert_eq!(distances.distance_km(RailLine::Lrt1, "CENTRAL"), Some(11.2));
        assert_eq!(
            distances.distance_km(RailLine::Lrt1, "CENTRAL TERMINAL"),
            Some(11.2)
        );
    }

    #[test]
    fn unknown_station_is_none() {
        let distances = metro_manila_distances();
        assert!(distances.distance_km(RailLine::Lrt1, "NOWHERE").is_none());
        // Wrong line for a real station
        assert!(distances.distance_km(RailLine::Lrt2, "TUTUBAN").is_none());
    }

    #[test]
    fn line_endpoints() {
        let distances = metro_manila_distances();

        assert_eq!(distances.distance_km(RailLine::Lrt2, "ANTIPOLO (MASINAG)"), Some(0.0));
        assert_eq!(distances.distance_km(RailLine::Lrt2, "RECTO"), Some(16.11));
        assert_eq!(distances.distance_km(RailLine::Mrt, "NORTH AVENUE"), Some(0.0));
        assert_eq!(distances.distance_km(RailLine::Mrt, "TAFT AVENUE"), Some(16.9));
        assert_eq!(distances.distance_km(RailLine::Pnr, "CALAMBA"), Some(56.2));
    }

    #[test]
    fn stations_listing_is_sorted_by_distance() {
        let distances = metro_manila_distances();
        let stations = distances.stations(RailLine::Mrt);

        assert_eq!(stations.len(), 13);
        assert_eq!(stations.first(), Some(&("NORTH AVENUE", 0.0)));
        assert_eq!(stations.last(), Some(&("TAFT AVENUE", 16.9)));
        assert!(stations.windows(2).all(|w| w[0].1 <= w[1].1));
    }

    #[test]
    fn table_sizes() {
        let distances = metro_manila_distances();
        assert_eq!(distances.stations(RailLine::Lrt1).len(), 28);
        assert_eq!(distances.stations(RailLine::Lrt2).len(), 13);
        assert_eq!(distances.stations(RailLine::Mrt).len(), 13);
        assert_eq!(distances.stations(RailLine::Pnr).len(), 23);
    }

    #[test]
    fn builder() {
        let distances = LineDistancesBuilder::new()
            .add(RailLine::Mrt, "NORTH AVENUE", 0.0)
            .add(RailLine::Mrt, "QUEZON AVENUE", 1.2)
            .build();
        assert_eq!(distances.len(), 2);
        assert_eq!(distances.distance_km(RailLine::Mrt, "QUEZON AVENUE"), Some(1.2));
    }
}
