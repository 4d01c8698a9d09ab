//! Lead intake: answer parsing, validation and priority scoring

mod answers;
mod rules;
mod validation;

pub use answers::{IntakeAnswers, IntakeField};
pub use rules::{Predicate, PriorityRule, PriorityScore, PriorityTier, RuleSet};
pub use validation::{validate_intake, REQUIRED_FIELDS, WEALTH_FIELDS};

use std::collections::HashMap;

/// Score raw intake form fields against a rule table
pub fn score_priority(rules: &RuleSet, fields: &HashMap<String, String>) -> PriorityScore {
    let answers = IntakeAnswers::from_fields(fields);
    let result = rules.score(&answers);
    log::debug!(
        "scored {} intake: score={} tier={}",
        answers.service_type,
        result.score,
        result.tier
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_priority_from_form_fields() {
        let fields: HashMap<String, String> = [("serviceType", "wealth"), ("investmentCapital", "60000")]
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        let result = score_priority(&RuleSet::default(), &fields);
        assert_eq!(result.tier, PriorityTier::High);
        assert!(result.score >= 5);
    }

    #[test]
    fn test_missing_optional_fields_score_zero() {
        let fields: HashMap<String, String> = [("serviceType".to_string(), "insurance".to_string())]
            .into_iter()
            .collect();
        let result = score_priority(&RuleSet::hitl_review(), &fields);
        assert_eq!(result.score, 0);
        assert_eq!(result.tier, PriorityTier::Low);
    }
}
