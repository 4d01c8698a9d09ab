//! Quote desk: one set of assumptions behind every calculator
//!
//! Loads assumptions once and hands them to each calculator explicitly, so
//! independent requests can run concurrently against the same desk.

use crate::assumptions::Assumptions;
use crate::error::Result;
use crate::income::{self, AnnuitySchedule, SubsidyEstimate};
use crate::intake::{self, PriorityScore};
use crate::projection::{IllustrationResult, IulIllustrator, IulInput};
use crate::quote::{self, PackageRecommendation, PolicyQuoteRequest, PolicyQuoteSet, PolicyType, Quote};
use rayon::prelude::*;
use std::collections::HashMap;
use std::path::Path;

/// Pre-loaded calculator front end
///
/// # Example
/// ```ignore
/// let desk = QuoteDesk::from_csv()?;
/// let quote = desk.calculate_quote("web", "high")?;
/// let income = desk.calculate_annuity_payout(100_000.0, 0.06, 20)?;
/// ```
#[derive(Debug, Clone)]
pub struct QuoteDesk {
    assumptions: Assumptions,
}

impl QuoteDesk {
    /// Create desk with default in-memory assumptions
    pub fn new() -> Self {
        Self {
            assumptions: Assumptions::default_pricing(),
        }
    }

    /// Create desk by loading assumptions from the default CSV directory
    pub fn from_csv() -> Result<Self> {
        Ok(Self {
            assumptions: Assumptions::from_csv()?,
        })
    }

    /// Create desk from a specific assumptions directory
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        Ok(Self {
            assumptions: Assumptions::from_csv_path(path)?,
        })
    }

    pub fn with_assumptions(assumptions: Assumptions) -> Self {
        Self { assumptions }
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    pub fn calculate_quote(&self, service_id: &str, complexity_tier: &str) -> Result<Quote> {
        quote::calculate_quote(&self.assumptions.catalog, service_id, complexity_tier)
    }

    pub fn recommend_package<S: AsRef<str>>(&self, answers: &[S]) -> PackageRecommendation {
        quote::recommend_package(answers)
    }

    pub fn quote_policy(&self, policy_type: PolicyType, request: &PolicyQuoteRequest) -> Result<PolicyQuoteSet> {
        quote::generate_quotes(&self.assumptions.carriers, policy_type, request)
    }

    pub fn project_iul(&self, age: u32, monthly_premium: f64, initial_lump_sum: f64) -> Result<IllustrationResult> {
        let input = IulInput {
            age,
            monthly_premium,
            initial_lump_sum,
        };
        IulIllustrator::new(self.assumptions.iul.clone()).illustrate(&input)
    }

    pub fn calculate_annuity_payout(&self, principal: f64, annual_rate: f64, years: u32) -> Result<f64> {
        income::calculate_annuity_payout(principal, annual_rate, years)
    }

    pub fn annuity_schedule(&self, principal: f64, annual_rate: f64, years: u32) -> Result<AnnuitySchedule> {
        income::annuity_schedule(principal, annual_rate, years)
    }

    pub fn calculate_aca_subsidy(&self, household_income: f64, family_size: u32, plan_cost: f64) -> Result<f64> {
        income::calculate_aca_subsidy(&self.assumptions.aca, household_income, family_size, plan_cost)
    }

    pub fn estimate_aca_subsidy(
        &self,
        household_income: f64,
        family_size: u32,
        plan_cost: f64,
    ) -> Result<SubsidyEstimate> {
        income::estimate_aca_subsidy(&self.assumptions.aca, household_income, family_size, plan_cost)
    }

    pub fn score_priority(&self, fields: &HashMap<String, String>) -> PriorityScore {
        intake::score_priority(&self.assumptions.priority, fields)
    }

    /// Score many intakes in parallel, preserving input order
    pub fn score_batch(&self, intakes: &[HashMap<String, String>]) -> Vec<PriorityScore> {
        intakes.par_iter().map(|fields| self.score_priority(fields)).collect()
    }
}

impl Default for QuoteDesk {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::{PriorityTier, RuleSet};

    fn intake(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_score_batch_preserves_order() {
        let desk = QuoteDesk::new();
        let intakes = vec![
            intake(&[("serviceType", "wealth"), ("investmentCapital", "60000")]),
            intake(&[("serviceType", "insurance"), ("currentCoverage", "50000")]),
            intake(&[("serviceType", "tax"), ("currentIncome", "250000")]),
        ];

        let tiers: Vec<PriorityTier> = desk.score_batch(&intakes).into_iter().map(|s| s.tier).collect();
        assert_eq!(tiers, vec![PriorityTier::High, PriorityTier::Low, PriorityTier::Medium]);
    }

    #[test]
    fn test_desk_uses_injected_rules() {
        let mut assumptions = Assumptions::default_pricing();
        assumptions.priority = RuleSet::hitl_review();
        let desk = QuoteDesk::with_assumptions(assumptions);

        let result = desk.score_priority(&intake(&[("serviceType", "business"), ("multiProduct", "true")]));
        assert_eq!(result.tier, PriorityTier::Medium);
    }

    #[test]
    fn test_desk_calculators() {
        let desk = QuoteDesk::from_csv().expect("shipped assumptions load");
        assert_eq!(desk.calculate_quote("ai", "medium").unwrap().estimated_total, 4500.0);
        assert_eq!(desk.project_iul(40, 400.0, 0.0).unwrap().rows.len(), 30);
        assert_eq!(desk.calculate_aca_subsidy(0.0, 1, 450.0).unwrap(), 450.0);
        assert!(desk.calculate_annuity_payout(100_000.0, 0.06, 20).unwrap() > 0.0);
    }
}
