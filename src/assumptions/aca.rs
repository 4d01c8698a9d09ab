//! ACA marketplace subsidy parameters

/// Federal poverty line and affordability parameters
#[derive(Debug, Clone, PartialEq)]
pub struct AcaParameters {
    /// Poverty line for a household of one
    pub fpl_base: f64,
    /// Added per additional household member
    pub fpl_per_person: f64,
    /// Income / FPL ratio at or above which no subsidy is paid
    pub eligibility_ceiling: f64,
    /// Share of annual income the household is expected to pay
    pub affordability_share: f64,
}

impl AcaParameters {
    pub fn federal_poverty_line(&self, family_size: u32) -> f64 {
        self.fpl_base + family_size.saturating_sub(1) as f64 * self.fpl_per_person
    }
}

impl Default for AcaParameters {
    fn default() -> Self {
        Self {
            fpl_base: 15060.0,
            fpl_per_person: 5380.0,
            eligibility_ceiling: 4.0,
            affordability_share: 0.085,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_federal_poverty_line() {
        let params = AcaParameters::default();
        assert_eq!(params.federal_poverty_line(1), 15060.0);
        assert_eq!(params.federal_poverty_line(4), 15060.0 + 3.0 * 5380.0);
    }
}
