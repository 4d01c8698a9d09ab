//! Service package recommendation from free-form intake answers

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRecommendation {
    pub package: String,
    pub services: Vec<String>,
}

impl PackageRecommendation {
    fn new(package: &str, services: &[&str]) -> Self {
        Self {
            package: package.to_string(),
            services: services.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Pick a package from keyword answers
///
/// Funding keywords win over scaling keywords.
pub fn recommend_package<S: AsRef<str>>(answers: &[S]) -> PackageRecommendation {
    let mentions = |keywords: &[&str]| {
        answers
            .iter()
            .any(|answer| keywords.iter().any(|k| answer.as_ref().trim().eq_ignore_ascii_case(k)))
    };

    if mentions(&["funding", "startup"]) {
        PackageRecommendation::new("Business Launchpad", &["Consulting", "Business Plan", "SBA Loan Prep"])
    } else if mentions(&["automation", "scale"]) {
        PackageRecommendation::new("Tech Scaling", &["AI Development", "Web Design", "Digital Marketing"])
    } else {
        PackageRecommendation::new("General Business Support", &["Tax Prep", "Notary", "Insurance"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendations() {
        assert_eq!(recommend_package(&["startup"]).package, "Business Launchpad");
        assert_eq!(recommend_package(&["Scale", "automation"]).package, "Tech Scaling");
        assert_eq!(recommend_package(&["scale", "funding"]).package, "Business Launchpad");

        let fallback = recommend_package::<&str>(&[]);
        assert_eq!(fallback.package, "General Business Support");
        assert_eq!(fallback.services, vec!["Tax Prep", "Notary", "Insurance"]);
    }
}
