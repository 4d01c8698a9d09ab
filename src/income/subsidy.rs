//! ACA premium tax credit estimate

use crate::assumptions::AcaParameters;
use crate::error::{ensure_non_negative, Error, Result};
use serde::{Deserialize, Serialize};

/// Breakdown of a subsidy estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubsidyEstimate {
    pub federal_poverty_line: f64,
    pub poverty_ratio: f64,
    /// Monthly premium the household is expected to afford (0 when ineligible)
    pub affordable_premium: f64,
    pub eligible: bool,
    /// Monthly subsidy
    pub subsidy: f64,
}

/// Estimate the monthly subsidy for a household and benchmark plan cost
pub fn estimate_aca_subsidy(
    params: &AcaParameters,
    household_income: f64,
    family_size: u32,
    plan_cost: f64,
) -> Result<SubsidyEstimate> {
    ensure_non_negative("household_income", household_income)?;
    ensure_non_negative("plan_cost", plan_cost)?;
    if family_size == 0 {
        return Err(Error::invalid("family_size", "must be at least 1"));
    }

    let fpl = params.federal_poverty_line(family_size);
    let ratio = household_income / fpl;
    let eligible = ratio < params.eligibility_ceiling;

    let (affordable_premium, subsidy) = if eligible {
        let affordable = household_income * params.affordability_share / 12.0;
        (affordable, (plan_cost - affordable).max(0.0))
    } else {
        (0.0, 0.0)
    };

    log::debug!(
        "aca estimate: fpl={:.0} ratio={:.2} eligible={} subsidy={:.2}",
        fpl,
        ratio,
        eligible,
        subsidy
    );

    Ok(SubsidyEstimate {
        federal_poverty_line: fpl,
        poverty_ratio: ratio,
        affordable_premium,
        eligible,
        subsidy,
    })
}

/// Monthly subsidy only
pub fn calculate_aca_subsidy(
    params: &AcaParameters,
    household_income: f64,
    family_size: u32,
    plan_cost: f64,
) -> Result<f64> {
    estimate_aca_subsidy(params, household_income, family_size, plan_cost).map(|e| e.subsidy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_income_gets_full_plan_cost() {
        let subsidy = calculate_aca_subsidy(&AcaParameters::default(), 0.0, 1, 450.0).unwrap();
        assert_eq!(subsidy, 450.0);
    }

    #[test]
    fn test_high_income_ineligible() {
        let estimate = estimate_aca_subsidy(&AcaParameters::default(), 200_000.0, 1, 450.0).unwrap();
        assert_relative_eq!(estimate.poverty_ratio, 200_000.0 / 15_060.0);
        assert!(estimate.poverty_ratio > 13.0);
        assert!(!estimate.eligible);
        assert_eq!(estimate.subsidy, 0.0);
    }

    #[test]
    fn test_partial_subsidy() {
        // Family of 3: fpl = 25820, income 40000 -> ratio ~1.55
        let estimate = estimate_aca_subsidy(&AcaParameters::default(), 40_000.0, 3, 900.0).unwrap();
        assert_eq!(estimate.federal_poverty_line, 25_820.0);
        assert!(estimate.eligible);

        let affordable = 40_000.0 * 0.085 / 12.0;
        assert_relative_eq!(estimate.affordable_premium, affordable);
        assert_relative_eq!(estimate.subsidy, 900.0 - affordable);
    }

    #[test]
    fn test_subsidy_never_negative() {
        let subsidy = calculate_aca_subsidy(&AcaParameters::default(), 50_000.0, 2, 100.0).unwrap();
        assert_eq!(subsidy, 0.0);
    }

    #[test]
    fn test_ceiling_is_exclusive() {
        let params = AcaParameters::default();
        let income = params.federal_poverty_line(1) * 4.0;
        assert!(!estimate_aca_subsidy(&params, income, 1, 2000.0).unwrap().eligible);
    }

    #[test]
    fn test_rejects_invalid_household() {
        let params = AcaParameters::default();
        assert!(matches!(
            calculate_aca_subsidy(&params, 30_000.0, 0, 450.0),
            Err(Error::InvalidInput { field: "family_size", .. })
        ));
        assert!(matches!(
            calculate_aca_subsidy(&params, -1.0, 2, 450.0),
            Err(Error::InvalidInput { field: "household_income", .. })
        ));
    }
}
