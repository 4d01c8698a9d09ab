//! Year-by-year IUL cash value illustration

use super::illustration::{IllustrationResult, IllustrationRow};
use super::state::IllustrationState;
use crate::assumptions::IulAssumptions;
use crate::error::{ensure_non_negative, Error, Result};

/// Oldest issue age an illustration is run for
pub const MAX_ISSUE_AGE: u32 = 120;

/// Applicant inputs for an illustration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IulInput {
    pub age: u32,
    pub monthly_premium: f64,
    pub initial_lump_sum: f64,
}

impl IulInput {
    pub fn validate(&self) -> Result<()> {
        if self.age > MAX_ISSUE_AGE {
            return Err(Error::invalid(
                "age",
                format!("must be at most {}, got {}", MAX_ISSUE_AGE, self.age),
            ));
        }
        ensure_non_negative("monthly_premium", self.monthly_premium)?;
        ensure_non_negative("initial_lump_sum", self.initial_lump_sum)?;
        Ok(())
    }

    pub fn annual_premium(&self) -> f64 {
        self.monthly_premium * 12.0
    }
}

/// Illustrates IUL cash value under a fixed set of assumptions
pub struct IulIllustrator {
    assumptions: IulAssumptions,
}

impl IulIllustrator {
    pub fn new(assumptions: IulAssumptions) -> Self {
        Self { assumptions }
    }

    pub fn assumptions(&self) -> &IulAssumptions {
        &self.assumptions
    }

    /// Face amount used as the death benefit base
    pub fn death_benefit_base(&self, input: &IulInput) -> f64 {
        input.annual_premium() * self.assumptions.face_multiple + input.initial_lump_sum
    }

    /// Run the illustration for every configured policy year
    pub fn illustrate(&self, input: &IulInput) -> Result<IllustrationResult> {
        input.validate()?;

        let base = self.death_benefit_base(input);
        let mut result = IllustrationResult::new(input.age, input.monthly_premium, input.initial_lump_sum, base);
        let mut state = IllustrationState::at_issue(input.age, input.initial_lump_sum, base);
        let mut warned = false;

        for _year in 1..=self.assumptions.illustration_years {
            state.advance_year();
            let row = self.illustrate_year(input, &mut state);

            if row.cost_of_insurance < 0.0 && !warned {
                log::warn!(
                    "cost of insurance negative from year {} (cash value {:.2} exceeds base {:.2})",
                    row.year,
                    row.cash_value,
                    base
                );
                warned = true;
            }
            result.add_row(row);
        }

        log::debug!(
            "illustrated {} years for age {}: final cash value {:.2}",
            result.rows.len(),
            input.age,
            state.cash_value
        );
        Ok(result)
    }

    fn illustrate_year(&self, input: &IulInput, state: &mut IllustrationState) -> IllustrationRow {
        let year = state.policy_year;
        let annual_premium = input.annual_premium();

        let raw_coi = state.net_amount_at_risk() * self.assumptions.coi_rate(year);
        let cost_of_insurance = self.assumptions.coi_floor.apply(raw_coi);

        let index_return = self.assumptions.index_return(year);
        let credited_rate = self.assumptions.credited_rate(year);

        state.cash_value = (state.cash_value + annual_premium) * (1.0 + credited_rate) - cost_of_insurance;
        state.cumulative_premium += annual_premium;

        IllustrationRow {
            year,
            age: state.attained_age,
            annual_premium,
            cumulative_premium: state.cumulative_premium,
            index_return,
            credited_rate,
            cost_of_insurance,
            cash_value: state.cash_value,
            death_benefit: state.death_benefit_base + state.cash_value,
        }
    }
}

/// Illustrate an IUL policy for an applicant
pub fn project_iul(
    assumptions: &IulAssumptions,
    age: u32,
    monthly_premium: f64,
    initial_lump_sum: f64,
) -> Result<IllustrationResult> {
    let input = IulInput {
        age,
        monthly_premium,
        initial_lump_sum,
    };
    IulIllustrator::new(assumptions.clone()).illustrate(&input)
}
