//! Weighted rule table for lead priority
//!
//! Every matching rule adds its weight; the total is then bucketed into a
//! tier. Rule order has no effect on the total.

use super::answers::{IntakeAnswers, IntakeField};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lead priority bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PriorityTier {
    Low,
    Medium,
    High,
}

impl fmt::Display for PriorityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PriorityTier::Low => "LOW",
            PriorityTier::Medium => "MEDIUM",
            PriorityTier::High => "HIGH",
        };
        f.write_str(name)
    }
}

/// Condition under which a rule contributes its weight
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// `value(field) * factor > threshold`, optionally only for one service type
    FieldAbove {
        service: Option<String>,
        field: IntakeField,
        factor: f64,
        threshold: f64,
    },
    /// Field present and non-zero
    Flag { field: IntakeField },
}

impl Predicate {
    pub fn above(field: IntakeField, threshold: f64) -> Self {
        Predicate::FieldAbove {
            service: None,
            field,
            factor: 1.0,
            threshold,
        }
    }

    pub fn service_above(service: &str, field: IntakeField, threshold: f64) -> Self {
        Predicate::FieldAbove {
            service: Some(service.to_string()),
            field,
            factor: 1.0,
            threshold,
        }
    }

    pub fn matches(&self, answers: &IntakeAnswers) -> bool {
        match self {
            Predicate::FieldAbove {
                service,
                field,
                factor,
                threshold,
            } => {
                if let Some(service) = service {
                    if !answers.service_type.eq_ignore_ascii_case(service) {
                        return false;
                    }
                }
                answers
                    .value(*field)
                    .map(|v| v * factor > *threshold)
                    .unwrap_or(false)
            }
            Predicate::Flag { field } => answers.value(*field).map(|v| v != 0.0).unwrap_or(false),
        }
    }
}

/// One row of the rule table
#[derive(Debug, Clone, PartialEq)]
pub struct PriorityRule {
    pub name: String,
    pub predicate: Predicate,
    pub weight: u32,
}

impl PriorityRule {
    pub fn new(name: &str, predicate: Predicate, weight: u32) -> Self {
        Self {
            name: name.to_string(),
            predicate,
            weight,
        }
    }
}

/// Result of scoring one intake
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityScore {
    pub tier: PriorityTier,
    pub score: u32,
    /// Names of the rules that fired, in table order
    pub matched_rules: Vec<String>,
}

/// Rule table plus tier thresholds
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSet {
    pub rules: Vec<PriorityRule>,
    /// Scores at or above this are HIGH
    pub high_threshold: u32,
    /// Scores at or above this (and below high) are MEDIUM
    pub medium_threshold: u32,
}

impl RuleSet {
    pub fn new(rules: Vec<PriorityRule>) -> Self {
        Self {
            rules,
            high_threshold: 5,
            medium_threshold: 2,
        }
    }

    /// Weights used when the public intake form is submitted
    pub fn intake_form() -> Self {
        Self::new(vec![
            PriorityRule::new(
                "wealth_capital",
                Predicate::service_above("wealth", IntakeField::InvestmentCapital, 50_000.0),
                5,
            ),
            PriorityRule::new(
                "insurance_coverage",
                Predicate::service_above("insurance", IntakeField::CurrentCoverage, 100_000.0),
                3,
            ),
            PriorityRule::new(
                "high_income",
                Predicate::above(IntakeField::CurrentIncome, 200_000.0),
                2,
            ),
        ])
    }

    /// Weights used by the human review queue
    pub fn hitl_review() -> Self {
        Self::new(vec![
            PriorityRule::new(
                "wealth_capital",
                Predicate::service_above("wealth", IntakeField::InvestmentCapital, 50_000.0),
                5,
            ),
            // Coverage at a 2% premium rate implying more than $10k a year
            PriorityRule::new(
                "insurance_premium",
                Predicate::FieldAbove {
                    service: Some("insurance".to_string()),
                    field: IntakeField::CurrentCoverage,
                    factor: 0.02,
                    threshold: 10_000.0,
                },
                4,
            ),
            PriorityRule::new(
                "high_income",
                Predicate::above(IntakeField::CurrentIncome, 200_000.0),
                3,
            ),
            PriorityRule::new(
                "multi_product",
                Predicate::Flag {
                    field: IntakeField::MultiProduct,
                },
                2,
            ),
        ])
    }

    /// Look up a preset by name
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "intake_form" | "intake" => Some(Self::intake_form()),
            "hitl_review" | "hitl" => Some(Self::hitl_review()),
            _ => None,
        }
    }

    pub fn tier_for(&self, score: u32) -> PriorityTier {
        if score >= self.high_threshold {
            PriorityTier::High
        } else if score >= self.medium_threshold {
            PriorityTier::Medium
        } else {
            PriorityTier::Low
        }
    }

    pub fn score(&self, answers: &IntakeAnswers) -> PriorityScore {
        let matched: Vec<&PriorityRule> = self
            .rules
            .iter()
            .filter(|rule| rule.predicate.matches(answers))
            .collect();
        let score = matched.iter().map(|rule| rule.weight).sum();

        PriorityScore {
            tier: self.tier_for(score),
            score,
            matched_rules: matched.iter().map(|rule| rule.name.clone()).collect(),
        }
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::intake_form()
    }
}
