//=========================================================================
// Element Catalog
//=========================================================================
//
// Static element records, their validation, the color lookup table and
// the text shown on labels and in the fact display.
//
// A `Catalog` is only constructed through `Catalog::new`, which sorts the
// records by atomic number and rejects empty or duplicate input. Every
// other component can therefore rely on a non-empty, strictly ascending
// sequence.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

use log::{info, warn};

//=== Internal Dependencies ===============================================

use super::error::SceneError;

//=== ElementRecord =======================================================

/// One chemical element as shown in the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementRecord {
    pub symbol: String,
    pub atomic_number: u32,
    pub atomic_mass: f64,
    pub fun_fact: String,
}

impl ElementRecord {
    pub fn new(
        symbol: impl Into<String>,
        atomic_number: u32,
        atomic_mass: f64,
        fun_fact: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            atomic_number,
            atomic_mass,
            fun_fact: fun_fact.into(),
        }
    }

    /// Text lines for the object's label face: symbol, number, mass.
    pub fn label_lines(&self) -> [String; 3] {
        [
            self.symbol.clone(),
            format!("#{}", self.atomic_number),
            format!("Mass: {}", self.atomic_mass),
        ]
    }

    /// Heading and body for the selected-element display.
    pub fn fact_display(&self) -> (String, &str) {
        (
            format!("{} - Element #{}", self.symbol, self.atomic_number),
            &self.fun_fact,
        )
    }
}

//=== Color Lookup ========================================================

/// Packed `0xRRGGBB` color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    /// Linear `[r, g, b]` in `0.0..=1.0`.
    pub fn to_rgb_f32(self) -> [f32; 3] {
        let r = (self.0 >> 16) & 0xff;
        let g = (self.0 >> 8) & 0xff;
        let b = self.0 & 0xff;
        [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0]
    }
}

const PALETTE: [u32; 20] = [
    0xff6666, 0xffcc66, 0xffff66, 0xccff66,
    0x66ff66, 0x66ffcc, 0x66ccff, 0x6666ff,
    0xcc66ff, 0xff66cc, 0xff9933, 0xffcc99,
    0x99ff99, 0x99ccff, 0x9966ff, 0xff6699,
    0x66ffcc, 0x99ffcc, 0xccff99, 0xff99cc,
];

/// Body color for an element.
///
/// Indexed by `atomic_number - 1`; numbers past the palette wrap around.
/// A catalog never holds 0; if asked anyway it gets the color of 1.
pub fn color_for(atomic_number: u32) -> Color {
    let index = (atomic_number.max(1) - 1) as usize % PALETTE.len();
    Color(PALETTE[index])
}

//=== Catalog =============================================================

/// Validated, ordered set of element records.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<ElementRecord>,
}

impl Catalog {
    /// Validates and sorts the records by atomic number.
    ///
    /// # Errors
    ///
    /// - [`SceneError::EmptyCatalog`] when `records` is empty
    /// - [`SceneError::InvalidAtomicNumber`] for atomic number 0
    /// - [`SceneError::InvalidAtomicMass`] for a mass that is not positive
    /// - [`SceneError::DuplicateAtomicNumber`] on the first repeated number
    pub fn new(mut records: Vec<ElementRecord>) -> Result<Self, SceneError> {
        if records.is_empty() {
            return Err(SceneError::EmptyCatalog);
        }

        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if record.atomic_number == 0 {
                return Err(SceneError::InvalidAtomicNumber(record.symbol.clone()));
            }
            if record.atomic_mass.is_nan() || record.atomic_mass <= 0.0 {
                return Err(SceneError::InvalidAtomicMass(record.atomic_number));
            }
            if !seen.insert(record.atomic_number) {
                return Err(SceneError::DuplicateAtomicNumber(record.atomic_number));
            }
        }

        records.sort_by_key(|r| r.atomic_number);

        let gaps = records
            .windows(2)
            .filter(|w| w[1].atomic_number != w[0].atomic_number + 1)
            .count();
        if gaps > 0 {
            warn!("Catalog has {} gap(s) in atomic numbers; layout stays index based", gaps);
        }

        info!(
            "Catalog loaded: {} elements ({}..={})",
            records.len(),
            records[0].atomic_number,
            records[records.len() - 1].atomic_number
        );

        Ok(Self { records })
    }

    /// The first twenty elements, hydrogen through calcium.
    pub fn builtin() -> Result<Self, SceneError> {
        Self::new(Self::builtin_records())
    }

    /// Unvalidated records behind [`builtin`](Self::builtin).
    pub fn builtin_records() -> Vec<ElementRecord> {
        builtin_records()
    }

    pub fn records(&self) -> &[ElementRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always `false` for a constructed catalog.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

//=== Built-in Data =======================================================

fn builtin_records() -> Vec<ElementRecord> {
    vec![
        ElementRecord::new("H", 1, 1.008, "Hydrogen is the most abundant element in the universe"),
        ElementRecord::new("He", 2, 4.003, "Helium was first discovered in the sun before being found on Earth"),
        ElementRecord::new("Li", 3, 6.941, "Lithium is used in rechargeable batteries for electric vehicles"),
        ElementRecord::new("Be", 4, 9.012, "Beryllium is used in aerospace and military applications"),
        ElementRecord::new("B", 5, 10.81, "Boron is used in making heat-resistant glass"),
        ElementRecord::new("C", 6, 12.01, "Carbon is the basis of all known life"),
        ElementRecord::new("N", 7, 14.01, "78% of Earth's atmosphere is nitrogen"),
        ElementRecord::new("O", 8, 16.00, "Oxygen is essential for most life forms"),
        ElementRecord::new("F", 9, 19.00, "Fluorine is the most reactive of all elements"),
        ElementRecord::new("Ne", 10, 20.18, "Neon is used in illuminated signs"),
        ElementRecord::new("Na", 11, 22.99, "Sodium is a key component of table salt"),
        ElementRecord::new("Mg", 12, 24.31, "Magnesium is crucial for plant chlorophyll"),
        ElementRecord::new("Al", 13, 26.98, "Aluminum is the most abundant metal in Earth's crust"),
        ElementRecord::new("Si", 14, 28.09, "Silicon is the primary component of computer chips"),
        ElementRecord::new("P", 15, 30.97, "Phosphorus is essential for DNA and cell membranes"),
        ElementRecord::new("S", 16, 32.07, "Sulfur is used in gunpowder and matches"),
        ElementRecord::new("Cl", 17, 35.45, "Chlorine is used to disinfect water"),
        ElementRecord::new("Ar", 18, 39.95, "Argon is the third most abundant gas in Earth's atmosphere"),
        ElementRecord::new("K", 19, 39.10, "Potassium is crucial for nerve and muscle function"),
        ElementRecord::new("Ca", 20, 40.08, "Calcium is the primary component of bones and teeth"),
    ]
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn record(n: u32) -> ElementRecord {
        ElementRecord::new(format!("E{}", n), n, n as f64 * 2.0, "fact")
    }

    //=====================================================================
    // Validation
    //=====================================================================

    #[test]
    fn empty_catalog_is_rejected() {
        assert_eq!(Catalog::new(vec![]).unwrap_err(), SceneError::EmptyCatalog);
    }

    #[test]
    fn duplicate_atomic_number_is_rejected() {
        let err = Catalog::new(vec![record(1), record(2), record(1)]).unwrap_err();
        assert_eq!(err, SceneError::DuplicateAtomicNumber(1));
    }

    #[test]
    fn atomic_number_zero_is_rejected() {
        let zero = ElementRecord::new("X", 0, 1.0, "fact");
        let err = Catalog::new(vec![record(1), zero]).unwrap_err();
        assert_eq!(err, SceneError::InvalidAtomicNumber("X".to_string()));
    }

    #[test]
    fn non_positive_or_nan_mass_is_rejected() {
        for mass in [0.0, -1.5, f64::NAN] {
            let bad = ElementRecord::new("X", 7, mass, "fact");
            let err = Catalog::new(vec![record(1), bad]).unwrap_err();
            assert_eq!(err, SceneError::InvalidAtomicMass(7), "mass {} should be rejected", mass);
        }
    }

    #[test]
    fn records_are_sorted_by_atomic_number() {
        let catalog = Catalog::new(vec![record(3), record(1), record(2)]).unwrap();
        let numbers: Vec<_> = catalog.records().iter().map(|r| r.atomic_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn gaps_are_accepted() {
        let catalog = Catalog::new(vec![record(1), record(5)]).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn builtin_catalog_has_twenty_ordered_elements() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), 20);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.records()[0].symbol, "H");
        assert_eq!(catalog.records()[19].symbol, "Ca");
        assert!(catalog
            .records()
            .windows(2)
            .all(|w| w[0].atomic_number + 1 == w[1].atomic_number));
    }

    //=====================================================================
    // Colors & Text
    //=====================================================================

    #[test]
    fn color_lookup_follows_palette() {
        assert_eq!(color_for(1), Color(0xff6666));
        assert_eq!(color_for(20), Color(0xff99cc));
    }

    #[test]
    fn color_lookup_wraps_past_palette() {
        assert_eq!(color_for(21), color_for(1));
        assert_eq!(color_for(0), color_for(1));
    }

    #[test]
    fn color_converts_to_unit_rgb() {
        assert_eq!(Color(0xff0000).to_rgb_f32(), [1.0, 0.0, 0.0]);
        assert_eq!(Color(0x000000).to_rgb_f32(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn label_lines_show_symbol_number_and_mass() {
        let carbon = ElementRecord::new("C", 6, 12.01, "Carbon is the basis of all known life");
        assert_eq!(carbon.label_lines(), ["C".to_string(), "#6".to_string(), "Mass: 12.01".to_string()]);
    }

    #[test]
    fn fact_display_has_heading_and_fact() {
        let neon = ElementRecord::new("Ne", 10, 20.18, "Neon is used in illuminated signs");
        let (heading, body) = neon.fact_display();
        assert_eq!(heading, "Ne - Element #10");
        assert_eq!(body, "Neon is used in illuminated signs");
    }
}
