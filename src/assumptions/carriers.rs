//! Carrier panel for policy premium quotes

use serde::{Deserialize, Serialize};

/// Product lines a carrier may write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductLine {
    TermLife,
    /// Whole, universal and indexed universal life
    PermanentLife,
    Annuities,
}

/// An insurance carrier the agency is appointed with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Carrier {
    pub id: String,
    pub name: String,
    pub term_life: bool,
    pub permanent_life: bool,
    pub annuities: bool,
    /// Customer rating out of 5
    pub rating: f64,
}

impl Carrier {
    fn new(id: &str, name: &str, term_life: bool, permanent_life: bool, annuities: bool, rating: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            term_life,
            permanent_life,
            annuities,
            rating,
        }
    }

    pub fn writes(&self, line: ProductLine) -> bool {
        match line {
            ProductLine::TermLife => self.term_life,
            ProductLine::PermanentLife => self.permanent_life,
            ProductLine::Annuities => self.annuities,
        }
    }
}

/// All carriers available for quoting
#[derive(Debug, Clone)]
pub struct CarrierPanel {
    carriers: Vec<Carrier>,
}

impl CarrierPanel {
    pub fn from_loaded(carriers: &[Carrier]) -> Self {
        Self {
            carriers: carriers.to_vec(),
        }
    }

    pub fn standard() -> Self {
        Self {
            carriers: vec![
                Carrier::new("ethos", "Ethos", true, false, false, 4.8),
                Carrier::new("mutualOfOmaha", "Mutual of Omaha", true, true, true, 4.6),
                Carrier::new("americo", "Americo", true, true, true, 4.5),
                Carrier::new("allianz", "Allianz", false, false, true, 4.7),
                Carrier::new("nationwide", "Nationwide", true, true, true, 4.4),
                Carrier::new("massMutual", "Mass Mutual", true, true, true, 4.5),
                Carrier::new("johnHancock", "John Hancock", true, true, true, 4.6),
                Carrier::new("prudential", "Prudential", true, true, true, 4.5),
            ],
        }
    }

    /// Carriers writing the given line, best rated first
    ///
    /// Ties keep panel order.
    pub fn eligible(&self, line: ProductLine) -> Vec<&Carrier> {
        let mut eligible: Vec<&Carrier> = self.carriers.iter().filter(|c| c.writes(line)).collect();
        eligible.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        eligible
    }

    pub fn carriers(&self) -> &[Carrier] {
        &self.carriers
    }
}

impl Default for CarrierPanel {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eligible_sorted_by_rating() {
        let panel = CarrierPanel::standard();
        let annuity = panel.eligible(ProductLine::Annuities);
        assert_eq!(annuity.len(), 7);
        assert_eq!(annuity[0].name, "Allianz");
        assert!(annuity.windows(2).all(|w| w[0].rating >= w[1].rating));

        let permanent = panel.eligible(ProductLine::PermanentLife);
        assert!(permanent.iter().all(|c| c.id != "ethos" && c.id != "allianz"));
        // Mutual of Omaha precedes John Hancock at 4.6 because it is listed first
        assert_eq!(permanent[0].id, "mutualOfOmaha");
        assert_eq!(permanent[1].id, "johnHancock");
    }
}
