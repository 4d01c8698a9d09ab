//! Quote Desk - calculation core for an insurance and financial advisory funnel
//!
//! This library provides:
//! - Service quotes scaled by complexity tier
//! - Policy premium quotes across a carrier panel
//! - IUL cash value illustrations with capped/floored crediting
//! - Annuity payout and ACA subsidy estimates
//! - Lead priority scoring from a configurable rule table

pub mod error;
pub mod assumptions;
pub mod quote;
pub mod projection;
pub mod income;
pub mod intake;
pub mod desk;

// Re-export commonly used types
pub use error::{Error, Result};
pub use assumptions::{Assumptions, IulAssumptions, AcaParameters, ServiceCatalog, CarrierPanel};
pub use quote::{calculate_quote, Quote, PolicyType, PolicyQuoteRequest};
pub use projection::{project_iul, IllustrationResult, IllustrationRow};
pub use income::{calculate_annuity_payout, calculate_aca_subsidy};
pub use intake::{score_priority, PriorityScore, PriorityTier, RuleSet};
pub use desk::QuoteDesk;
