//! Pricing assumptions: service catalog, carriers, IUL and ACA parameters, priority rules

mod aca;
mod carriers;
mod catalog;
mod iul;
pub mod loader;

pub use aca::AcaParameters;
pub use carriers::{Carrier, CarrierPanel, ProductLine};
pub use catalog::{ComplexityTier, Service, ServiceCatalog};
pub use iul::{
    CoiFloor, CreditingApproach, IulAssumptions, DEFAULT_CAP_RATE, DEFAULT_FLOOR_RATE, DEFAULT_MARKET_RETURN,
};
pub use loader::LoadedAssumptions;

use crate::error::Result;
use crate::intake::RuleSet;
use std::path::Path;

/// Container for all calculator assumptions
///
/// Built once and passed by reference to every calculator; nothing in it
/// changes after construction.
#[derive(Debug, Clone)]
pub struct Assumptions {
    pub catalog: ServiceCatalog,
    pub carriers: CarrierPanel,
    pub priority: RuleSet,
    pub iul: IulAssumptions,
    pub aca: AcaParameters,
}

impl Assumptions {
    /// Create assumptions with the funnel's standard values
    pub fn default_pricing() -> Self {
        Self {
            catalog: ServiceCatalog::standard(),
            carriers: CarrierPanel::standard(),
            priority: RuleSet::intake_form(),
            iul: IulAssumptions::default(),
            aca: AcaParameters::default(),
        }
    }

    /// Load assumptions from CSV files in the default location (data/assumptions/)
    pub fn from_csv() -> Result<Self> {
        Self::from_csv_path(Path::new(loader::DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load assumptions from CSV files in a specific directory
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let loaded = LoadedAssumptions::load_from(path)?;

        Ok(Self {
            catalog: ServiceCatalog::from_loaded(&loaded.services),
            carriers: CarrierPanel::from_loaded(&loaded.carriers),
            priority: RuleSet::new(loaded.priority_rules),
            iul: IulAssumptions::default(),
            aca: AcaParameters::default(),
        })
    }
}

impl Default for Assumptions {
    fn default() -> Self {
        Self::default_pricing()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_matches_in_memory_defaults() {
        let from_csv = Assumptions::from_csv().expect("shipped assumptions load");
        let defaults = Assumptions::default_pricing();

        assert_eq!(from_csv.catalog.services(), defaults.catalog.services());
        assert_eq!(from_csv.carriers.carriers(), defaults.carriers.carriers());
        assert_eq!(from_csv.priority, defaults.priority);
    }
}
