//! Service quotes: base price scaled by complexity tier

use crate::assumptions::{ComplexityTier, ServiceCatalog};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Currency every service quote is denominated in
pub const QUOTE_CURRENCY: &str = "USD";

/// Estimated price for one service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub service_name: String,
    pub tier: ComplexityTier,
    pub estimated_total: f64,
    pub currency: String,
}

/// Quote a service from the catalog
///
/// Unknown service ids are `Error::NotFound`. Unknown tiers are priced at
/// the base price.
pub fn calculate_quote(catalog: &ServiceCatalog, service_id: &str, complexity_tier: &str) -> Result<Quote> {
    let service = catalog
        .find(service_id)
        .ok_or_else(|| Error::not_found(format!("service '{}'", service_id)))?;

    let tier = ComplexityTier::parse(complexity_tier);
    if tier == ComplexityTier::Unrecognised {
        log::warn!("unknown complexity tier '{}', pricing at base", complexity_tier);
    }

    Ok(Quote {
        service_name: service.name.clone(),
        tier,
        estimated_total: service.base_price * tier.multiplier(),
        currency: QUOTE_CURRENCY.to_string(),
    })
}
