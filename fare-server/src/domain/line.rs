//! Rail line identities and their fare policies.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown rail line code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown rail line: {0}")]
pub struct UnknownLine(pub String);

/// The four rail lines with standardized distance tables.
///
/// The line code doubles as the `transport_mode` value on stored fare-rule
/// rows, so parsing accepts any casing.
///
/// # Examples
///
/// ```
/// use fare_server::domain::RailLine;
///
/// assert_eq!(RailLine::parse("lrt1").unwrap(), RailLine::Lrt1);
/// assert_eq!(RailLine::Pnr.as_str(), "PNR");
/// assert!(RailLine::parse("LRT3").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RailLine {
    #[serde(rename = "LRT1")]
    Lrt1,
    #[serde(rename = "LRT2")]
    Lrt2,
    #[serde(rename = "MRT")]
    Mrt,
    #[serde(rename = "PNR")]
    Pnr,
}

/// How a line turns a distance difference into a fare.
///
/// Keeping this as a closed sum means the rail calculator's match is
/// exhaustive: adding a line forces a decision about its pricing rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FarePolicy {
    /// Boarding fee plus per-km rate. Single-journey fares are ceiled to the
    /// next multiple of `step`; stored-value fares keep the raw value. Each
    /// ticket variant has its own min/max caps.
    VariantSplit { step: f64 },

    /// Boarding fee plus per-km rate, ceiled to the next multiple of `step`,
    /// with a single set of caps.
    FlatStep { step: f64 },

    /// Flat fare within `base_km`, then one add-on per started `zone_km`
    /// beyond it, never exceeding `cap`.
    Zoned { base_km: f64, zone_km: f64, cap: f64 },
}

impl RailLine {
    /// All supported lines, in display order.
    pub const ALL: [RailLine; 4] = [RailLine::Lrt1, RailLine::Lrt2, RailLine::Mrt, RailLine::Pnr];

    /// Parse a line code, case-insensitively.
    pub fn parse(s: &str) -> Result<Self, UnknownLine> {
        match s.trim().to_uppercase().as_str() {
            "LRT1" => Ok(RailLine::Lrt1),
            "LRT2" => Ok(RailLine::Lrt2),
            "MRT" => Ok(RailLine::Mrt),
            "PNR" => Ok(RailLine::Pnr),
            other => Err(UnknownLine(other.to_string())),
        }
    }

    /// The canonical line code used in stored fare rules.
    pub fn as_str(&self) -> &'static str {
        match self {
            RailLine::Lrt1 => "LRT1",
            RailLine::Lrt2 => "LRT2",
            RailLine::Mrt => "MRT",
            RailLine::Pnr => "PNR",
        }
    }

    /// The fare policy for this line.
    ///
    /// LRT-1 and LRT-2 price single-journey and stored-value tickets
    /// differently and round single-journey fares up to the next 5 pesos.
    /// MRT-3 rounds everything up to the next peso. PNR prices by 7 km zone
    /// beyond a 14 km base, capped at 60 pesos.
    pub fn policy(&self) -> FarePolicy {
        match self {
            RailLine::Lrt1 | RailLine::Lrt2 => FarePolicy::VariantSplit { step: 5.0 },
            RailLine::Mrt => FarePolicy::FlatStep { step: 1.0 },
            RailLine::Pnr => FarePolicy::Zoned {
                base_km: 14.0,
                zone_km: 7.0,
                cap: 60.0,
            },
        }
    }

    /// Whether this line prices single-journey and stored-value differently.
    pub fn uses_variant_split(&self) -> bool {
        matches!(self.policy(), FarePolicy::VariantSplit { .. })
    }
}

impl fmt::Display for RailLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_lines() {
        assert_eq!(RailLine::parse("LRT1").unwrap(), RailLine::Lrt1);
        assert_eq!(RailLine::parse("LRT2").unwrap(), RailLine::Lrt2);
        assert_eq!(RailLine::parse("MRT").unwrap(), RailLine::Mrt);
        assert_eq!(RailLine::parse("PNR").unwrap(), RailLine::Pnr);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(RailLine::parse("lrt1").unwrap(), RailLine::Lrt1);
        assert_eq!(RailLine::parse("Pnr").unwrap(), RailLine::Pnr);
        assert_eq!(RailLine::parse("  mrt  ").unwrap(), RailLine::Mrt);
    }

    #[test]
    fn parse_rejects_unknown() {
        assert!(RailLine::parse("LRT3").is_err());
        assert!(RailLine::parse("").is_err());
        assert!(RailLine::parse("JEEP").is_err());
    }

    #[test]
    fn unknown_line_error_reports_code() {
        let err = RailLine::parse("monorail").unwrap_err();
        assert_eq!(err.to_string(), "unknown rail line: MONORAIL");
    }

    #[test]
    fn display_matches_as_str() {
        for line in RailLine::ALL {
            assert_eq!(format!("{}", line), line.as_str());
        }
    }

    #[test]
    fn parse_roundtrips_as_str() {
        for line in RailLine::ALL {
            assert_eq!(RailLine::parse(line.as_str()).unwrap(), line);
        }
    }

    #[test]
    fn variant_split_lines() {
        assert!(RailLine::Lrt1.uses_variant_split());
        assert!(RailLine::Lrt2.uses_variant_split());
        assert!(!RailLine::Mrt.uses_variant_split());
        assert!(!RailLine::Pnr.uses_variant_split());
    }

    #[test]
    fn policies() {
        assert_eq!(RailLine::Lrt1.policy(), FarePolicy::VariantSplit { step: 5.0 });
        assert_eq!(RailLine::Lrt2.policy(), FarePolicy::VariantSplit { step: 5.0 });
        assert_eq!(RailLine::Mrt.policy(), FarePolicy::FlatStep { step: 1.0 });
        assert_eq!(
            RailLine::Pnr.policy(),
            FarePolicy::Zoned {
                base_km: 14.0,
                zone_km: 7.0,
                cap: 60.0
            }
        );
    }

    #[test]
    fn serde_uses_line_codes() {
        let json = serde_json::to_string(&RailLine::Lrt1).unwrap();
        assert_eq!(json, "\"LRT1\"");

        let line: RailLine = serde_json::from_str("\"PNR\"").unwrap();
        assert_eq!(line, RailLine::Pnr);
    }
}
