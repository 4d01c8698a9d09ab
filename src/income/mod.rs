//! Retirement income and health subsidy calculators

mod annuity;
mod subsidy;

pub use annuity::{annuity_schedule, calculate_annuity_payout, AnnuitySchedule, PayoutRow};
pub use subsidy::{calculate_aca_subsidy, estimate_aca_subsidy, SubsidyEstimate};
