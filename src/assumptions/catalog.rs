//! Service catalog and complexity tiers used by the quote calculator

use serde::{Deserialize, Serialize};
use std::fmt;

/// A priced advisory service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    /// Price in USD before the complexity multiplier
    pub base_price: f64,
}

impl Service {
    pub fn new(id: &str, name: &str, base_price: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            base_price,
        }
    }
}

/// Immutable list of services that can be quoted
#[derive(Debug, Clone)]
pub struct ServiceCatalog {
    services: Vec<Service>,
}

impl ServiceCatalog {
    /// Build from loaded CSV rows
    pub fn from_loaded(services: &[Service]) -> Self {
        Self {
            services: services.to_vec(),
        }
    }

    /// The five services offered on the funnel
    pub fn standard() -> Self {
        Self {
            services: vec![
                Service::new("tax", "Tax Preparation", 250.0),
                Service::new("web", "Web Development", 1500.0),
                Service::new("ai", "AI Automation", 3000.0),
                Service::new("notary", "Notary Services", 25.0),
                // Insurance is quoted per policy, not from a base price
                Service::new("ins", "Insurance", 0.0),
            ],
        }
    }

    pub fn find(&self, service_id: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.id == service_id)
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl Default for ServiceCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// Coarse price bucket applied on top of a service's base price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplexityTier {
    Low,
    Medium,
    High,
    Enterprise,
    /// Any tier string the funnel does not know about
    Unrecognised,
}

impl ComplexityTier {
    /// Parse a tier name; unknown names map to `Unrecognised` rather than an error
    pub fn parse(tier: &str) -> Self {
        match tier.trim().to_ascii_lowercase().as_str() {
            "low" => ComplexityTier::Low,
            "medium" => ComplexityTier::Medium,
            "high" => ComplexityTier::High,
            "enterprise" => ComplexityTier::Enterprise,
            _ => ComplexityTier::Unrecognised,
        }
    }

    pub fn multiplier(self) -> f64 {
        match self {
            ComplexityTier::Low => 1.0,
            ComplexityTier::Medium => 1.5,
            ComplexityTier::High => 2.5,
            ComplexityTier::Enterprise => 5.0,
            ComplexityTier::Unrecognised => 1.0,
        }
    }
}

impl fmt::Display for ComplexityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ComplexityTier::Low => "low",
            ComplexityTier::Medium => "medium",
            ComplexityTier::High => "high",
            ComplexityTier::Enterprise => "enterprise",
            ComplexityTier::Unrecognised => "unrecognised",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog() {
        let catalog = ServiceCatalog::standard();
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.find("web").map(|s| s.base_price), Some(1500.0));
        assert!(catalog.find("mortgage").is_none());
    }

    #[test]
    fn test_tier_parsing() {
        assert_eq!(ComplexityTier::parse("Enterprise"), ComplexityTier::Enterprise);
        assert_eq!(ComplexityTier::parse(" medium "), ComplexityTier::Medium);
        assert_eq!(ComplexityTier::parse("extreme"), ComplexityTier::Unrecognised);
        assert_eq!(ComplexityTier::parse("").multiplier(), 1.0);
    }
}
