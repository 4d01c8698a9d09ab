//! Running state of an IUL policy during illustration

/// Policy values carried from one illustrated year to the next
#[derive(Debug, Clone)]
pub struct IllustrationState {
    /// Policy year just completed (0 before the first year)
    pub policy_year: u32,

    /// Attained age at the end of the completed year
    pub attained_age: u32,

    /// Cash value at the end of the completed year
    pub cash_value: f64,

    /// Premiums paid so far, lump sum included
    pub cumulative_premium: f64,

    /// Level face amount the net amount at risk is measured against
    pub death_benefit_base: f64,
}

impl IllustrationState {
    /// State at issue: the lump sum is the opening cash value
    pub fn at_issue(issue_age: u32, initial_lump_sum: f64, death_benefit_base: f64) -> Self {
        Self {
            policy_year: 0,
            attained_age: issue_age,
            cash_value: initial_lump_sum,
            cumulative_premium: initial_lump_sum,
            death_benefit_base,
        }
    }

    /// Move to the next policy year
    pub fn advance_year(&mut self) {
        self.policy_year = self.policy_year.saturating_add(1);
        self.attained_age = self.attained_age.saturating_add(1);
    }

    /// Death benefit base less cash value
    pub fn net_amount_at_risk(&self) -> f64 {
        self.death_benefit_base - self.cash_value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_issue_and_advance() {
        let mut state = IllustrationState::at_issue(40, 10_000.0, 130_000.0);
        assert_eq!(state.net_amount_at_risk(), 120_000.0);

        state.advance_year();
        assert_eq!(state.policy_year, 1);
        assert_eq!(state.attained_age, 41);
        assert_eq!(state.cumulative_premium, 10_000.0);
    }
}
