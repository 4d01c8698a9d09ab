//! CSV-based assumption loader
//!
//! Loads the service catalog, carrier panel and priority rules from CSV files
//! in data/assumptions/

use super::carriers::Carrier;
use super::catalog::Service;
use crate::error::{Error, Result};
use crate::intake::{IntakeField, Predicate, PriorityRule};
use serde::Deserialize;
use std::fs::File;
use std::path::Path;

/// Default path to assumptions directory
pub const DEFAULT_ASSUMPTIONS_PATH: &str = "data/assumptions";

const SERVICES_FILE: &str = "services.csv";
const CARRIERS_FILE: &str = "carriers.csv";
const PRIORITY_RULES_FILE: &str = "priority_rules.csv";

/// Load the service catalog (`id,name,base_price`)
pub fn load_services(path: &Path) -> Result<Vec<Service>> {
    let file = File::open(path.join(SERVICES_FILE))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut services = Vec::new();
    for result in reader.deserialize() {
        let service: Service = result?;
        if !service.base_price.is_finite() || service.base_price < 0.0 {
            return Err(Error::Parse {
                file: SERVICES_FILE.to_string(),
                message: format!("service {} has invalid base price {}", service.id, service.base_price),
            });
        }
        services.push(service);
    }

    Ok(services)
}

/// Load the carrier panel (`id,name,term_life,permanent_life,annuities,rating`)
pub fn load_carriers(path: &Path) -> Result<Vec<Carrier>> {
    let file = File::open(path.join(CARRIERS_FILE))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut carriers = Vec::new();
    for result in reader.deserialize() {
        let carrier: Carrier = result?;
        carriers.push(carrier);
    }

    Ok(carriers)
}

/// Raw CSV row of priority_rules.csv
#[derive(Debug, Deserialize)]
struct RuleRow {
    name: String,
    /// `above` or `flag`
    kind: String,
    #[serde(default)]
    service: Option<String>,
    field: IntakeField,
    #[serde(default)]
    factor: Option<f64>,
    #[serde(default)]
    threshold: Option<f64>,
    weight: u32,
}

impl RuleRow {
    fn into_rule(self) -> Result<PriorityRule> {
        let predicate = match self.kind.as_str() {
            "above" => {
                let threshold = self.threshold.ok_or_else(|| Error::Parse {
                    file: PRIORITY_RULES_FILE.to_string(),
                    message: format!("rule {} needs a threshold", self.name),
                })?;
                Predicate::FieldAbove {
                    service: self.service.filter(|s| !s.trim().is_empty()),
                    field: self.field,
                    factor: self.factor.unwrap_or(1.0),
                    threshold,
                }
            }
            "flag" => Predicate::Flag { field: self.field },
            other => {
                return Err(Error::Parse {
                    file: PRIORITY_RULES_FILE.to_string(),
                    message: format!("unknown rule kind: {}", other),
                })
            }
        };

        Ok(PriorityRule {
            name: self.name,
            predicate,
            weight: self.weight,
        })
    }
}

/// Load the priority rule table
pub fn load_priority_rules(path: &Path) -> Result<Vec<PriorityRule>> {
    let file = File::open(path.join(PRIORITY_RULES_FILE))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut rules = Vec::new();
    for result in reader.deserialize() {
        let row: RuleRow = result?;
        rules.push(row.into_rule()?);
    }

    Ok(rules)
}

/// Everything loaded from an assumptions directory
pub struct LoadedAssumptions {
    pub services: Vec<Service>,
    pub carriers: Vec<Carrier>,
    pub priority_rules: Vec<PriorityRule>,
}

impl LoadedAssumptions {
    /// Load all assumptions from the default path
    pub fn load_default() -> Result<Self> {
        Self::load_from(Path::new(DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load all assumptions from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        log::debug!("loading assumptions from {}", path.display());
        Ok(Self {
            services: load_services(path)?,
            carriers: load_carriers(path)?,
            priority_rules: load_priority_rules(path)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::RuleSet;

    #[test]
    fn test_load_default_assumptions() {
        let result = LoadedAssumptions::load_default();
        assert!(result.is_ok(), "Failed to load assumptions: {:?}", result.err());

        let loaded = result.unwrap();
        assert_eq!(loaded.services.len(), 5);
        assert_eq!(loaded.carriers.len(), 8);

        // Shipped rule table matches the intake form preset
        assert_eq!(loaded.priority_rules, RuleSet::intake_form().rules);
    }

    #[test]
    fn test_missing_directory_is_io_error() {
        let result = LoadedAssumptions::load_from(Path::new("data/does-not-exist"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
