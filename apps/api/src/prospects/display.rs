//! Display shaping for the browser UI: a prospect plus the derived fields a card shows.

use serde::Serialize;

use crate::prospects::models::Prospect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
}

impl ConfidenceTier {
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence > 0.75 {
            ConfidenceTier::High
        } else if confidence > 0.5 {
            ConfidenceTier::Medium
        } else {
            ConfidenceTier::Low
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProspectCard {
    #[serde(flatten)]
    pub prospect: Prospect,
    pub website_url: String,
    pub revenue_display: String,
    pub confidence_percent: u32,
    pub confidence_tier: ConfidenceTier,
}

impl From<Prospect> for ProspectCard {
    fn from(prospect: Prospect) -> Self {
        Self {
            website_url: domain_url(&prospect.domain),
            revenue_display: format_revenue(prospect.revenue),
            confidence_percent: confidence_percent(prospect.confidence),
            confidence_tier: ConfidenceTier::from_confidence(prospect.confidence),
            prospect,
        }
    }
}

/// `$1.2B`, `$75.0M`, `$950.0K`, `$500`; zero renders as `N/A`.
pub fn format_revenue(revenue: f64) -> String {
    if revenue == 0.0 {
        return "N/A".to_string();
    }
    if revenue >= 1_000_000_000.0 {
        format!("${:.1}B", revenue / 1_000_000_000.0)
    } else if revenue >= 1_000_000.0 {
        format!("${:.1}M", revenue / 1_000_000.0)
    } else if revenue >= 1_000.0 {
        format!("${:.1}K", revenue / 1_000.0)
    } else {
        format!("${revenue}")
    }
}

pub fn confidence_percent(confidence: f64) -> u32 {
    (confidence.clamp(0.0, 1.0) * 100.0).round() as u32
}

pub fn domain_url(domain: &str) -> String {
    format!("http://{}", domain.trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prospects::models::{Contact, SignalSet};

    #[test]
    fn test_format_revenue_units() {
        assert_eq!(format_revenue(2_500_000_000.0), "$2.5B");
        assert_eq!(format_revenue(75_000_000.0), "$75.0M");
        assert_eq!(format_revenue(950_000.0), "$950.0K");
        assert_eq!(format_revenue(500.0), "$500");
        assert_eq!(format_revenue(0.0), "N/A");
    }

    #[test]
    fn test_confidence_tiers() {
        assert_eq!(ConfidenceTier::from_confidence(0.9), ConfidenceTier::High);
        assert_eq!(ConfidenceTier::from_confidence(0.75), ConfidenceTier::Medium);
        assert_eq!(ConfidenceTier::from_confidence(0.51), ConfidenceTier::Medium);
        assert_eq!(ConfidenceTier::from_confidence(0.5), ConfidenceTier::Low);
    }

    #[test]
    fn test_confidence_percent_rounds() {
        assert_eq!(confidence_percent(0.876), 88);
        assert_eq!(confidence_percent(1.0), 100);
    }

    fn acme(revenue: f64) -> Prospect {
        Prospect {
            company_name: "Acme".to_string(),
            domain: "acme.com".to_string(),
            revenue,
            industry: "SaaS".to_string(),
            funding_stage: "Series B".to_string(),
            contacts: vec![Contact {
                name: "Dana".to_string(),
                title: "CEO".to_string(),
                email: "dana@acme.com".to_string(),
                linkedin: "https://linkedin.com/in/dana".to_string(),
            }],
            signals: SignalSet {
                recent_hiring: true,
                new_funding: false,
            },
            source: vec!["Apollo".to_string()],
            confidence: 0.8,
        }
    }

    #[test]
    fn test_card_keeps_raw_revenue_and_flattens_fields() {
        let value = serde_json::to_value(ProspectCard::from(acme(75_000_000.0))).unwrap();
        assert_eq!(value["company_name"], "Acme");
        assert_eq!(value["revenue"].as_f64(), Some(75_000_000.0));
        assert_eq!(value["revenue_display"], "$75.0M");
        assert_eq!(value["website_url"], "http://acme.com");
        assert_eq!(value["confidence_percent"], 80);
        assert_eq!(value["confidence_tier"], "high");
    }

    #[test]
    fn test_whole_revenue_serializes_without_fraction() {
        let text = serde_json::to_string(&ProspectCard::from(acme(75_000_000.0))).unwrap();
        assert!(text.contains(r#""revenue":75000000,"#), "body was {text}");

        let text = serde_json::to_string(&acme(1_250.5)).unwrap();
        assert!(text.contains(r#""revenue":1250.5,"#), "body was {text}");
    }
}
