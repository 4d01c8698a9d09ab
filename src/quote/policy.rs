//! Policy premium quotes across the carrier panel
//!
//! Each policy type has its own required fields and base premium formula.
//! Every eligible carrier is quoted at the base premium; carriers are
//! ordered by rating.

use crate::assumptions::{CarrierPanel, ProductLine};
use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Policy types that can be quoted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PolicyType {
    TermLife,
    WholeLife,
    UniversalLife,
    IndexedUniversalLife,
    ImmediateAnnuity,
    FixedIndexAnnuity,
}

impl PolicyType {
    pub const ALL: [PolicyType; 6] = [
        PolicyType::TermLife,
        PolicyType::WholeLife,
        PolicyType::UniversalLife,
        PolicyType::IndexedUniversalLife,
        PolicyType::ImmediateAnnuity,
        PolicyType::FixedIndexAnnuity,
    ];

    /// Parse the camelCase identifier used by the quote form
    pub fn parse(raw: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.id() == raw.trim())
            .ok_or_else(|| Error::not_found(format!("policy type '{}'", raw)))
    }

    pub fn id(self) -> &'static str {
        match self {
            PolicyType::TermLife => "termLife",
            PolicyType::WholeLife => "wholeLife",
            PolicyType::UniversalLife => "universalLife",
            PolicyType::IndexedUniversalLife => "indexedUniversalLife",
            PolicyType::ImmediateAnnuity => "immediateAnnuity",
            PolicyType::FixedIndexAnnuity => "fixedIndexAnnuity",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            PolicyType::TermLife => "Term Life Insurance",
            PolicyType::WholeLife => "Whole Life Insurance",
            PolicyType::UniversalLife => "Universal Life (UL)",
            PolicyType::IndexedUniversalLife => "Indexed Universal Life (IUL)",
            PolicyType::ImmediateAnnuity => "Immediate Annuity",
            PolicyType::FixedIndexAnnuity => "Fixed Index Annuity (FIA)",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            PolicyType::TermLife => "Affordable protection for a specific term",
            PolicyType::WholeLife => "Lifetime coverage with cash value accumulation",
            PolicyType::UniversalLife => "Flexible coverage with investment options",
            PolicyType::IndexedUniversalLife => "Market-linked growth with principal protection",
            PolicyType::ImmediateAnnuity => "Guaranteed income for life",
            PolicyType::FixedIndexAnnuity => "Protected growth linked to market index",
        }
    }

    pub fn product_line(self) -> ProductLine {
        match self {
            PolicyType::TermLife => ProductLine::TermLife,
            PolicyType::WholeLife | PolicyType::UniversalLife | PolicyType::IndexedUniversalLife => {
                ProductLine::PermanentLife
            }
            PolicyType::ImmediateAnnuity | PolicyType::FixedIndexAnnuity => ProductLine::Annuities,
        }
    }

    pub fn required_fields(self) -> &'static [&'static str] {
        match self {
            PolicyType::TermLife => &["age", "health", "coverage_amount", "term_length"],
            PolicyType::WholeLife | PolicyType::UniversalLife | PolicyType::IndexedUniversalLife => {
                &["age", "health", "coverage_amount"]
            }
            PolicyType::ImmediateAnnuity => &["age", "investment_amount", "payment_frequency"],
            PolicyType::FixedIndexAnnuity => &["age", "investment_amount"],
        }
    }

    pub fn benefits(self) -> &'static [&'static str] {
        match self {
            PolicyType::TermLife => &[
                "Pure death benefit protection",
                "Most affordable option",
                "Convertible to permanent policy",
                "Quick underwriting (7-14 days)",
            ],
            PolicyType::WholeLife => &[
                "Lifetime coverage guaranteed",
                "Cash value growth",
                "Loan against cash value",
                "Tax-free withdrawals",
            ],
            PolicyType::UniversalLife => &[
                "Flexible premiums",
                "Adjustable death benefit",
                "Cash value potential",
                "Lower cost than whole life",
            ],
            PolicyType::IndexedUniversalLife => &[
                "Market-linked growth potential",
                "Principal protection (0% floor)",
                "Tax-deferred growth",
                "Monthly income potential",
            ],
            PolicyType::ImmediateAnnuity => &[
                "Guaranteed income for life",
                "No market risk",
                "Immediate payments",
                "Predictable retirement income",
            ],
            PolicyType::FixedIndexAnnuity => &[
                "Principal protected",
                "Market upside potential",
                "Tax-deferred growth",
                "Guaranteed minimum interest rate",
            ],
        }
    }

    pub fn approval_time(self) -> &'static str {
        match self {
            PolicyType::TermLife => "7-14 days",
            PolicyType::WholeLife | PolicyType::UniversalLife => "10-21 days",
            PolicyType::IndexedUniversalLife => "14-28 days",
            PolicyType::ImmediateAnnuity | PolicyType::FixedIndexAnnuity => "5-10 days",
        }
    }
}

/// Underwriting health class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthRating {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl HealthRating {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "excellent" => Some(HealthRating::Excellent),
            "good" => Some(HealthRating::Good),
            "fair" => Some(HealthRating::Fair),
            "poor" => Some(HealthRating::Poor),
            _ => None,
        }
    }

    pub fn risk_factor(self) -> f64 {
        match self {
            HealthRating::Excellent => 0.85,
            HealthRating::Good => 1.0,
            HealthRating::Fair => 1.25,
            HealthRating::Poor => 1.75,
        }
    }
}

/// Risk factor for a free-text health answer; unrecognised answers rate as good
pub fn health_risk_factor(health: &str) -> f64 {
    HealthRating::parse(health)
        .map(HealthRating::risk_factor)
        .unwrap_or_else(|| HealthRating::Good.risk_factor())
}

/// Applicant data collected by the quote form
///
/// Zero or blank values count as missing, like an empty form field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyQuoteRequest {
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub health: Option<String>,
    #[serde(default)]
    pub coverage_amount: Option<f64>,
    /// Term length in years
    #[serde(default)]
    pub term_length: Option<u32>,
    #[serde(default)]
    pub investment_amount: Option<f64>,
    #[serde(default)]
    pub payment_frequency: Option<String>,
}

impl PolicyQuoteRequest {
    fn has(&self, field: &str) -> bool {
        match field {
            "age" => self.age.map(|v| v > 0).unwrap_or(false),
            "health" => self.health.as_deref().map(|v| !v.trim().is_empty()).unwrap_or(false),
            "coverage_amount" => self.coverage_amount.map(|v| v != 0.0).unwrap_or(false),
            "term_length" => self.term_length.map(|v| v > 0).unwrap_or(false),
            "investment_amount" => self.investment_amount.map(|v| v != 0.0).unwrap_or(false),
            "payment_frequency" => self
                .payment_frequency
                .as_deref()
                .map(|v| !v.trim().is_empty())
                .unwrap_or(false),
            _ => false,
        }
    }
}

/// Check that a request carries every field its policy type needs
pub fn validate_required_fields(policy_type: PolicyType, request: &PolicyQuoteRequest) -> Result<()> {
    let missing: Vec<String> = policy_type
        .required_fields()
        .iter()
        .filter(|field| !request.has(field))
        .map(|field| field.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::MissingFields(missing))
    }
}

fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Monthly base premium before carrier selection, rounded to cents
pub fn base_premium(policy_type: PolicyType, request: &PolicyQuoteRequest) -> Result<f64> {
    validate_required_fields(policy_type, request)?;

    let age = request.age.unwrap_or(0) as f64;
    let health = health_risk_factor(request.health.as_deref().unwrap_or(""));
    let coverage_units = request.coverage_amount.unwrap_or(0.0) / 100_000.0;
    let investment = request.investment_amount.unwrap_or(0.0);

    let premium = match policy_type {
        PolicyType::TermLife => {
            // 5% per year of age past 25
            let age_rate = 1.05_f64.powf(age - 25.0);
            let term_years = request.term_length.unwrap_or(0) as f64;
            coverage_units * (10.0 + age_rate * 2.0) * health * (term_years / 20.0)
        }
        PolicyType::WholeLife | PolicyType::UniversalLife => {
            coverage_units * (20.0 + (age - 25.0) * 0.5) * health
        }
        PolicyType::IndexedUniversalLife => coverage_units * (18.0 + (age - 25.0) * 0.4) * health,
        PolicyType::ImmediateAnnuity => {
            let payout_rate = 0.04 + (age - 60.0).max(0.0) * 0.002;
            investment * payout_rate / 12.0
        }
        PolicyType::FixedIndexAnnuity => investment * 0.03 / 12.0,
    };

    Ok(round_cents(premium))
}

/// One carrier's quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyQuote {
    pub carrier_id: String,
    pub carrier_name: String,
    pub policy_type: String,
    pub monthly_premium: f64,
    pub annual_premium: f64,
    pub rating: f64,
    pub benefits: Vec<String>,
    pub estimated_approval_time: String,
}

/// Quotes for one policy type across all eligible carriers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyQuoteSet {
    pub policy_type: String,
    pub quotes: Vec<PolicyQuote>,
    pub generated_at: DateTime<Utc>,
}

/// Quote a policy type with every carrier that writes it
pub fn generate_quotes(
    carriers: &CarrierPanel,
    policy_type: PolicyType,
    request: &PolicyQuoteRequest,
) -> Result<PolicyQuoteSet> {
    let monthly = base_premium(policy_type, request)?;
    let benefits: Vec<String> = policy_type.benefits().iter().map(|b| b.to_string()).collect();

    // Premiums are level across carriers; quotes keep the panel's rating order
    let quotes: Vec<PolicyQuote> = carriers
        .eligible(policy_type.product_line())
        .into_iter()
        .map(|carrier| PolicyQuote {
            carrier_id: carrier.id.clone(),
            carrier_name: carrier.name.clone(),
            policy_type: policy_type.display_name().to_string(),
            monthly_premium: monthly,
            annual_premium: round_cents(monthly * 12.0),
            rating: carrier.rating,
            benefits: benefits.clone(),
            estimated_approval_time: policy_type.approval_time().to_string(),
        })
        .collect();

    log::debug!(
        "quoted {} with {} carriers at {:.2}/month",
        policy_type.id(),
        quotes.len(),
        monthly
    );

    Ok(PolicyQuoteSet {
        policy_type: policy_type.display_name().to_string(),
        quotes,
        generated_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn life_request(age: u32, health: &str, coverage: f64) -> PolicyQuoteRequest {
        PolicyQuoteRequest {
            age: Some(age),
            health: Some(health.to_string()),
            coverage_amount: Some(coverage),
            ..Default::default()
        }
    }

    #[test]
    fn test_parse_policy_type() {
        assert_eq!(PolicyType::parse("indexedUniversalLife").unwrap(), PolicyType::IndexedUniversalLife);
        assert!(matches!(PolicyType::parse("pet"), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_term_life_premium() {
        let request = PolicyQuoteRequest {
            term_length: Some(20),
            ..life_request(25, "good", 500_000.0)
        };
        // 5 units * (10 + 1 * 2) * 1.0 * 1.0
        assert_eq!(base_premium(PolicyType::TermLife, &request).unwrap(), 60.0);
    }

    #[test]
    fn test_term_life_requires_term_length() {
        let request = life_request(40, "good", 250_000.0);
        match base_premium(PolicyType::TermLife, &request) {
            Err(Error::MissingFields(missing)) => assert_eq!(missing, vec!["term_length"]),
            other => panic!("expected missing term_length, got {:?}", other),
        }
    }

    #[test]
    fn test_permanent_life_premiums() {
        let request = life_request(45, "fair", 200_000.0);
        // 2 * (20 + 10) * 1.25
        assert_eq!(base_premium(PolicyType::WholeLife, &request).unwrap(), 75.0);
        assert_eq!(base_premium(PolicyType::UniversalLife, &request).unwrap(), 75.0);
        // 2 * (18 + 8) * 1.25
        assert_eq!(base_premium(PolicyType::IndexedUniversalLife, &request).unwrap(), 65.0);
    }

    #[test]
    fn test_annuity_premiums() {
        let request = PolicyQuoteRequest {
            age: Some(70),
            investment_amount: Some(120_000.0),
            payment_frequency: Some("monthly".to_string()),
            ..Default::default()
        };
        // 120000 * (0.04 + 10 * 0.002) / 12
        assert_relative_eq!(base_premium(PolicyType::ImmediateAnnuity, &request).unwrap(), 600.0);
        assert_relative_eq!(base_premium(PolicyType::FixedIndexAnnuity, &request).unwrap(), 300.0);
    }

    #[test]
    fn test_unknown_health_rates_as_good() {
        assert_eq!(health_risk_factor("athletic"), 1.0);
        assert_eq!(health_risk_factor("Poor"), 1.75);
    }

    #[test]
    fn test_zero_counts_as_missing() {
        let request = life_request(50, "good", 0.0);
        assert!(matches!(
            validate_required_fields(PolicyType::WholeLife, &request),
            Err(Error::MissingFields(_))
        ));
    }

    #[test]
    fn test_generate_quotes() {
        let panel = CarrierPanel::standard();
        let request = life_request(35, "excellent", 1_000_000.0);
        let set = generate_quotes(&panel, PolicyType::IndexedUniversalLife, &request).unwrap();

        assert_eq!(set.policy_type, "Indexed Universal Life (IUL)");
        assert_eq!(set.quotes.len(), 6);
        assert!(set.quotes.iter().all(|q| q.monthly_premium == set.quotes[0].monthly_premium));
        assert_eq!(set.quotes[0].carrier_name, "Mutual of Omaha");
        assert_eq!(set.quotes[0].estimated_approval_time, "14-28 days");
        assert_eq!(set.quotes[0].benefits.len(), 4);
    }

    #[test]
    fn test_term_quotes_include_ethos_first() {
        let panel = CarrierPanel::standard();
        let request = PolicyQuoteRequest {
            term_length: Some(10),
            ..life_request(30, "good", 100_000.0)
        };
        let set = generate_quotes(&panel, PolicyType::TermLife, &request).unwrap();
        assert_eq!(set.quotes[0].carrier_id, "ethos");
        assert_eq!(set.quotes.len(), 7);
    }

    #[test]
    fn test_quotes_follow_panel_rating_order() {
        let panel = CarrierPanel::standard();
        let request = life_request(45, "good", 500_000.0);
        let set = generate_quotes(&panel, PolicyType::WholeLife, &request).unwrap();

        let expected: Vec<&str> = panel
            .eligible(PolicyType::WholeLife.product_line())
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        let quoted: Vec<&str> = set.quotes.iter().map(|q| q.carrier_id.as_str()).collect();
        assert_eq!(quoted, expected);
        assert!(set.quotes.windows(2).all(|w| w[0].rating >= w[1].rating));
    }
}
