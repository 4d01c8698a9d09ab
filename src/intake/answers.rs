//! Intake form answers as seen by the priority scorer

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Intake fields a scoring rule can read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IntakeField {
    InvestmentCapital,
    CurrentCoverage,
    CurrentIncome,
    MultiProduct,
}

impl IntakeField {
    /// Form field name as submitted by the intake form
    pub fn form_name(self) -> &'static str {
        match self {
            IntakeField::InvestmentCapital => "investmentCapital",
            IntakeField::CurrentCoverage => "currentCoverage",
            IntakeField::CurrentIncome => "currentIncome",
            IntakeField::MultiProduct => "multiProduct",
        }
    }
}

/// Answers relevant to lead priority
///
/// Missing or unparseable amounts are `None` and never satisfy a rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeAnswers {
    pub service_type: String,
    #[serde(default)]
    pub investment_capital: Option<f64>,
    #[serde(default)]
    pub current_coverage: Option<f64>,
    #[serde(default)]
    pub current_income: Option<f64>,
    #[serde(default)]
    pub multi_product: bool,
}

impl IntakeAnswers {
    pub fn new(service_type: &str) -> Self {
        Self {
            service_type: service_type.to_string(),
            ..Default::default()
        }
    }

    /// Build from raw form fields (`serviceType`, `investmentCapital`, ...)
    pub fn from_fields(fields: &HashMap<String, String>) -> Self {
        let amount = |field: IntakeField| fields.get(field.form_name()).and_then(|v| parse_amount(v));

        Self {
            service_type: fields
                .get("serviceType")
                .map(|s| s.trim().to_ascii_lowercase())
                .unwrap_or_default(),
            investment_capital: amount(IntakeField::InvestmentCapital),
            current_coverage: amount(IntakeField::CurrentCoverage),
            current_income: amount(IntakeField::CurrentIncome),
            multi_product: fields
                .get(IntakeField::MultiProduct.form_name())
                .map(|v| parse_flag(v))
                .unwrap_or(false),
        }
    }

    /// Numeric value of a field; flags read as 1.0 when set
    pub fn value(&self, field: IntakeField) -> Option<f64> {
        match field {
            IntakeField::InvestmentCapital => self.investment_capital,
            IntakeField::CurrentCoverage => self.current_coverage,
            IntakeField::CurrentIncome => self.current_income,
            IntakeField::MultiProduct => self.multi_product.then_some(1.0),
        }
    }
}

/// Parse a dollar amount such as `60000`, `60,000` or `$60,000.50`
fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != '$' && *c != ',').collect();
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_flag(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes" | "on")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_from_fields() {
        let answers = IntakeAnswers::from_fields(&fields(&[
            ("serviceType", "Wealth"),
            ("investmentCapital", "$60,000"),
            ("currentIncome", "not sure"),
            ("multiProduct", "on"),
        ]));

        assert_eq!(answers.service_type, "wealth");
        assert_eq!(answers.investment_capital, Some(60000.0));
        assert_eq!(answers.current_income, None);
        assert_eq!(answers.current_coverage, None);
        assert!(answers.multi_product);
        assert_eq!(answers.value(IntakeField::MultiProduct), Some(1.0));
    }

    #[test]
    fn test_empty_fields() {
        let answers = IntakeAnswers::from_fields(&HashMap::new());
        assert_eq!(answers, IntakeAnswers::default());
        assert_eq!(answers.value(IntakeField::MultiProduct), None);
    }
}
