//! Output structures for IUL illustrations

use super::irr::calculate_irr;
use serde::{Deserialize, Serialize};

/// A single illustrated policy year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IllustrationRow {
    pub year: u32,
    pub age: u32,
    pub annual_premium: f64,
    pub cumulative_premium: f64,
    /// Index return before the cap and floor
    pub index_return: f64,
    /// Rate actually credited after the cap and floor
    pub credited_rate: f64,
    pub cost_of_insurance: f64,
    pub cash_value: f64,
    pub death_benefit: f64,
}

/// Complete illustration for one applicant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IllustrationResult {
    pub issue_age: u32,
    pub monthly_premium: f64,
    pub initial_lump_sum: f64,
    pub death_benefit_base: f64,
    pub rows: Vec<IllustrationRow>,
}

impl IllustrationResult {
    pub fn new(issue_age: u32, monthly_premium: f64, initial_lump_sum: f64, death_benefit_base: f64) -> Self {
        Self {
            issue_age,
            monthly_premium,
            initial_lump_sum,
            death_benefit_base,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: IllustrationRow) {
        self.rows.push(row);
    }

    pub fn summary(&self) -> IllustrationSummary {
        let last = self.rows.last();
        IllustrationSummary {
            years: self.rows.len() as u32,
            total_premiums: last.map(|r| r.cumulative_premium).unwrap_or(self.initial_lump_sum),
            total_cost_of_insurance: self.rows.iter().map(|r| r.cost_of_insurance).sum(),
            final_cash_value: last.map(|r| r.cash_value).unwrap_or(self.initial_lump_sum),
            final_death_benefit: last.map(|r| r.death_benefit).unwrap_or(self.death_benefit_base),
            negative_coi_years: self.rows.iter().filter(|r| r.cost_of_insurance < 0.0).count() as u32,
        }
    }

    /// Annual IRR of paying every premium and surrendering for the final cash value
    ///
    /// Premiums are paid at the start of each year; the lump sum lands in year 0
    /// together with the first annual premium.
    pub fn cash_value_irr(&self) -> Option<f64> {
        let last = self.rows.last()?;
        let mut flows = vec![0.0; self.rows.len() + 1];
        flows[0] -= self.initial_lump_sum;
        for (i, row) in self.rows.iter().enumerate() {
            flows[i] -= row.annual_premium;
        }
        flows[self.rows.len()] += last.cash_value;
        calculate_irr(&flows, 1)
    }
}

/// Headline totals of an illustration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IllustrationSummary {
    pub years: u32,
    pub total_premiums: f64,
    pub total_cost_of_insurance: f64,
    pub final_cash_value: f64,
    pub final_death_benefit: f64,
    /// Years in which the charge came out below zero
    pub negative_coi_years: u32,
}
