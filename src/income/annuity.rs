//! Level monthly annuity payout from a lump sum

use crate::error::{ensure_non_negative, ensure_positive, Error, Result};
use serde::{Deserialize, Serialize};

/// Longest payout term accepted, in years
pub const MAX_PAYOUT_YEARS: u32 = 100;

/// Monthly income that exhausts `principal` over `years` at `annual_rate`
///
/// Standard amortization: `P * r(1+r)^n / ((1+r)^n - 1)` with `r` the monthly
/// rate and `n` the number of monthly payments. A zero rate or zero term has
/// no finite answer and is rejected. The result is always finite.
pub fn calculate_annuity_payout(principal: f64, annual_rate: f64, years: u32) -> Result<f64> {
    ensure_non_negative("principal", principal)?;
    ensure_positive("annual_rate", annual_rate)?;
    if years == 0 {
        return Err(Error::invalid("years", "must be positive, got 0"));
    }
    if years > MAX_PAYOUT_YEARS {
        return Err(Error::invalid(
            "years",
            format!("must be at most {}, got {}", MAX_PAYOUT_YEARS, years),
        ));
    }

    let monthly_rate = annual_rate / 12.0;
    let payments = f64::from(years * 12);

    // (1+r)^n - 1 without cancellation for tiny r
    let growth_less_one = (payments * monthly_rate.ln_1p()).exp_m1();
    let payout = if growth_less_one.is_finite() {
        principal * (monthly_rate / growth_less_one) * (1.0 + growth_less_one)
    } else {
        // (1+r)^n overflowed: the payout converges to interest only
        principal * monthly_rate
    };

    if !payout.is_finite() {
        return Err(Error::invalid(
            "annual_rate",
            format!("payout is not finite at rate {}", annual_rate),
        ));
    }
    Ok(payout)
}

/// One month of an annuity payout schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoutRow {
    pub month: u32,
    pub payment: f64,
    pub interest: f64,
    pub principal: f64,
    pub remaining_balance: f64,
}

/// Full month-by-month payout of an annuity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnuitySchedule {
    pub monthly_income: f64,
    pub total_income: f64,
    pub total_interest: f64,
    pub rows: Vec<PayoutRow>,
}

/// Amortize the principal month by month at the level payout
pub fn annuity_schedule(principal: f64, annual_rate: f64, years: u32) -> Result<AnnuitySchedule> {
    let payment = calculate_annuity_payout(principal, annual_rate, years)?;
    let monthly_rate = annual_rate / 12.0;

    let mut balance = principal;
    let payments = years * 12;
    let mut rows = Vec::with_capacity(payments as usize);
    for month in 1..=payments {
        let interest = balance * monthly_rate;
        let drawn = payment - interest;
        balance -= drawn;
        rows.push(PayoutRow {
            month,
            payment,
            interest,
            principal: drawn,
            remaining_balance: balance,
        });
    }

    let total_income = payment * rows.len() as f64;
    Ok(AnnuitySchedule {
        monthly_income: payment,
        total_income,
        total_interest: total_income - principal,
        rows,
    })
}
