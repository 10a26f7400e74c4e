//! Station name normalization.
//!
//! Fare-rule rows carry station names as the admin typed them: abbreviated
//! ("UN Ave"), pluralized ("United Nations"), with diacritics ("Biñan"), or
//! with trailing qualifiers ("Paco Station"). The distance registry is keyed
//! by canonical spellings, so every lookup goes through this normalizer
//! first.

use std::collections::HashMap;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Alias lookup resolving alternate station spellings to canonical names.
///
/// Lookups are case- and diacritic-insensitive. Unknown names pass through
/// unchanged apart from trimming and diacritic removal, so the caller can
/// still detect them as unresolvable against the distance registry.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    /// Folded (diacritic-stripped, upper-cased) alternate → canonical name.
    aliases: HashMap<String, String>,
}

impl AliasTable {
    /// Create an empty alias table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an alternate spelling for a canonical name.
    pub fn add(&mut self, alternate: &str, canonical: &str) {
        self.aliases
            .insert(fold(alternate), canonical.to_string());
    }

    /// Resolve a raw station name to its canonical spelling.
    ///
    /// Trims whitespace, strips diacritical marks, and looks up the
    /// upper-cased result. A hit returns the registered canonical name; a
    /// miss returns the diacritic-stripped (but not upper-cased) input.
    /// Total: never fails, unknown names pass through.
    pub fn canonical(&self, raw: &str) -> String {
        let stripped = strip_diacritics(raw.trim());
        match self.aliases.get(&stripped.to_uppercase()) {
            Some(canonical) => canonical.clone(),
            None => stripped,
        }
    }

    /// Number of registered aliases.
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    /// Returns true if no aliases are registered.
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

/// Builder for alias tables.
#[derive(Debug, Default)]
pub struct AliasTableBuilder {
    inner: AliasTable,
}

impl AliasTableBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an alternate spelling.
    pub fn add(mut self, alternate: &str, canonical: &str) -> Self {
        self.inner.add(alternate, canonical);
        self
    }

    /// Build the alias table.
    pub fn build(self) -> AliasTable {
        self.inner
    }
}

/// Strip diacritical marks via NFD decomposition.
fn strip_diacritics(s: &str) -> String {
    s.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Fold a name to its lookup key: diacritics stripped, upper-cased.
fn fold(s: &str) -> String {
    strip_diacritics(s.trim()).to_uppercase()
}

/// The alias set for the Metro Manila rail network.
///
/// Covers renamed stations (FPJ, formerly Roosevelt), abbreviation families
/// (UN Ave / UN Avenue / United Nations), punctuation and hyphen variants,
/// and trailing "Station" qualifiers.
pub fn metro_manila_aliases() -> AliasTable {
    AliasTableBuilder::new()
        .add("UN AVE", "UN Ave.")
        .add("UN AVE.", "UN Ave.")
        .add("UN AVENUE", "UN Ave.")
        .add("UNITED NATIONS", "UN Ave.")
        .add("UNITED NATIONS STATION", "UN Ave.")
        .add("CENTRAL", "Central")
        .add("CENTRAL TERMINAL", "Central")
        .add("FPJ (FORMERLY ROOSEVELT)", "Roosevelt")
        .add("FPJ", "Roosevelt")
        .add("ROOSEVELT", "Roosevelt")
        .add("R PAPA", "R. Papa")
        .add("R. PAPA", "R. Papa")
        .add("5TH AVENUE", "5th Avenue")
        .add("ARANETA CENTER CUBAO", "Araneta Center-Cubao")
        .add("ARANETA CENTER-CUBAO", "Araneta Center-Cubao")
        .add("BETTY GO BELMONTE", "Betty Go-Belmonte")
        .add("GMA KAMUNING", "GMA Kamuning")
        .add("SANTOLAN ANNAPOLIS", "Santolan-Annapolis")
        .add("NINOY AQUINO AVE.", "Ninoy Aquino Ave")
        .add("STA MESA", "Sta. Mesa")
        .add("STA ROSA", "Santa Rosa")
        .add("SANTA ROSA", "Santa Rosa")
        .add("BIÑAN", "Binan")
        .add("PACO STATION", "Paco")
        .add("TUTUBAN STATION", "Tutuban")
        .build()
}
