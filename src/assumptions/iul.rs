//! Indexed universal life illustration assumptions

/// Default index cap (10.5%)
pub const DEFAULT_CAP_RATE: f64 = 0.105;

/// Default index floor (0.75%)
pub const DEFAULT_FLOOR_RATE: f64 = 0.0075;

/// Default average market return (7%)
pub const DEFAULT_MARKET_RETURN: f64 = 0.07;

/// How the illustrator treats a cost of insurance below zero
///
/// Once cash value exceeds the death benefit base the net amount at risk
/// turns negative, and so does the charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoiFloor {
    /// Keep the raw formula result, negative charges included
    Unfloored,
    /// Never charge less than zero
    Zero,
}

impl CoiFloor {
    pub fn apply(self, raw_charge: f64) -> f64 {
        match self {
            CoiFloor::Unfloored => raw_charge,
            CoiFloor::Zero => raw_charge.max(0.0),
        }
    }
}

/// Crediting source for each illustrated year
#[derive(Debug, Clone, PartialEq)]
pub enum CreditingApproach {
    /// Every year earns `market_return`
    AverageReturn,
    /// Year-by-year index returns, repeated when the illustration outlasts them
    ReturnSequence(Vec<f64>),
}

/// Fixed assumptions behind an IUL illustration
#[derive(Debug, Clone)]
pub struct IulAssumptions {
    pub cap_rate: f64,
    pub floor_rate: f64,
    pub market_return: f64,
    pub crediting: CreditingApproach,

    /// Number of policy years illustrated
    pub illustration_years: u32,

    /// Face amount as a multiple of annual premium (lump sum added on top)
    pub face_multiple: f64,

    /// Cost of insurance rate per dollar at risk in year 0
    pub coi_base_rate: f64,

    /// Exponential growth of the COI rate per policy year
    pub coi_growth: f64,

    pub coi_floor: CoiFloor,
}

impl IulAssumptions {
    /// Index return credited in a given policy year (1-indexed), before cap/floor
    pub fn index_return(&self, year: u32) -> f64 {
        match &self.crediting {
            CreditingApproach::AverageReturn => self.market_return,
            CreditingApproach::ReturnSequence(returns) if !returns.is_empty() => {
                let idx = (year.saturating_sub(1) as usize) % returns.len();
                returns[idx]
            }
            CreditingApproach::ReturnSequence(_) => self.market_return,
        }
    }

    /// Credited rate after applying the floor and cap
    pub fn credited_rate(&self, year: u32) -> f64 {
        self.index_return(year).clamp(self.floor_rate, self.cap_rate)
    }

    /// COI rate per dollar at risk in a given policy year
    pub fn coi_rate(&self, year: u32) -> f64 {
        self.coi_base_rate * (self.coi_growth * year as f64).exp()
    }
}

impl Default for IulAssumptions {
    fn default() -> Self {
        Self {
            cap_rate: DEFAULT_CAP_RATE,
            floor_rate: DEFAULT_FLOOR_RATE,
            market_return: DEFAULT_MARKET_RETURN,
            crediting: CreditingApproach::AverageReturn,
            illustration_years: 30,
            face_multiple: 20.0,
            coi_base_rate: 0.0005,
            coi_growth: 0.06,
            coi_floor: CoiFloor::Unfloored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_credited_rate_clamped() {
        let assumptions = IulAssumptions {
            crediting: CreditingApproach::ReturnSequence(vec![-0.20, 0.04, 0.25]),
            ..Default::default()
        };

        assert_eq!(assumptions.credited_rate(1), DEFAULT_FLOOR_RATE);
        assert_eq!(assumptions.credited_rate(2), 0.04);
        assert_eq!(assumptions.credited_rate(3), DEFAULT_CAP_RATE);
        // Sequence repeats
        assert_eq!(assumptions.credited_rate(4), DEFAULT_FLOOR_RATE);
    }

    #[test]
    fn test_empty_sequence_falls_back_to_average() {
        let assumptions = IulAssumptions {
            crediting: CreditingApproach::ReturnSequence(Vec::new()),
            ..Default::default()
        };
        assert_eq!(assumptions.credited_rate(7), DEFAULT_MARKET_RETURN);
    }

    #[test]
    fn test_coi_rate_growth() {
        let assumptions = IulAssumptions::default();
        assert_relative_eq!(assumptions.coi_rate(1), 0.0005 * 0.06_f64.exp(), epsilon = 1e-15);
        assert!(assumptions.coi_rate(30) > assumptions.coi_rate(29));
    }

    #[test]
    fn test_coi_floor_policy() {
        assert_eq!(CoiFloor::Unfloored.apply(-12.5), -12.5);
        assert_eq!(CoiFloor::Zero.apply(-12.5), 0.0);
        assert_eq!(CoiFloor::Zero.apply(8.0), 8.0);
    }
}
