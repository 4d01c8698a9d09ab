//! Required-field checks for intake submissions

use crate::error::{Error, Result};
use std::collections::HashMap;

/// Fields every intake must carry
pub const REQUIRED_FIELDS: [&str; 4] = ["fullName", "email", "phone", "serviceType"];

/// Extra fields required for wealth-building inquiries
pub const WEALTH_FIELDS: [&str; 4] = ["currentIncome", "investmentCapital", "financialGoals", "riskTolerance"];

/// Check an intake for missing fields
///
/// Blank values count as missing. Missing names are reported in the order
/// they are declared above.
pub fn validate_intake(fields: &HashMap<String, String>) -> Result<()> {
    let present = |name: &str| fields.get(name).map(|v| !v.trim().is_empty()).unwrap_or(false);

    let mut missing: Vec<String> = REQUIRED_FIELDS
        .iter()
        .filter(|name| !present(**name))
        .map(|name| name.to_string())
        .collect();

    let is_wealth = fields
        .get("serviceType")
        .map(|s| s.trim().eq_ignore_ascii_case("wealth"))
        .unwrap_or(false);
    if is_wealth {
        missing.extend(WEALTH_FIELDS.iter().filter(|name| !present(**name)).map(|name| name.to_string()));
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::MissingFields(missing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_complete_insurance_intake() {
        let intake = fields(&[
            ("fullName", "Jordan Reyes"),
            ("email", "jordan@example.com"),
            ("phone", "555-0100"),
            ("serviceType", "insurance"),
        ]);
        assert!(validate_intake(&intake).is_ok());
    }

    #[test]
    fn test_wealth_requires_financial_fields() {
        let intake = fields(&[
            ("fullName", "Jordan Reyes"),
            ("email", "jordan@example.com"),
            ("phone", " "),
            ("serviceType", "wealth"),
            ("investmentCapital", "60000"),
        ]);

        match validate_intake(&intake) {
            Err(Error::MissingFields(missing)) => {
                assert_eq!(missing, vec!["phone", "currentIncome", "financialGoals", "riskTolerance"]);
            }
            other => panic!("expected missing fields, got {:?}", other),
        }
    }
}
