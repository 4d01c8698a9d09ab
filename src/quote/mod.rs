//! Service quotes, policy premium quotes and package recommendations

mod policy;
mod recommend;
mod service;

pub use policy::{
    base_premium, generate_quotes, health_risk_factor, validate_required_fields, HealthRating, PolicyQuote,
    PolicyQuoteRequest, PolicyQuoteSet, PolicyType,
};
pub use recommend::{recommend_package, PackageRecommendation};
pub use service::{calculate_quote, Quote, QUOTE_CURRENCY};
