#![allow(dead_code)]

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// Largest float below which every integer is exactly representable.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub title: String,
    pub email: String,
    pub linkedin: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalSet {
    pub recent_hiring: bool,
    pub new_funding: bool,
}

/// One validated company candidate.
///
/// Built fresh from the generator's payload on every search and never mutated
/// afterwards. Field names match the wire schema requested from the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prospect {
    pub company_name: String,
    pub domain: String,
    /// Absolute currency amount, never abbreviated.
    #[serde(serialize_with = "serialize_revenue")]
    pub revenue: f64,
    pub industry: String,
    pub funding_stage: String,
    pub contacts: Vec<Contact>,
    pub signals: SignalSet,
    pub source: Vec<String>,
    /// Asserted by the generator; range-checked to [0, 1], not recomputed.
    pub confidence: f64,
}

/// Whole amounts are written as integers (`75000000`, not `75000000.0`).
fn serialize_revenue<S: Serializer>(revenue: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if revenue.fract() == 0.0 && (0.0..=MAX_EXACT_INTEGER).contains(revenue) {
        serializer.serialize_u64(*revenue as u64)
    } else {
        serializer.serialize_f64(*revenue)
    }
}

/// User-supplied Ideal Customer Profile.
///
/// Opaque criteria: no particular shape is required. JSON text is kept as
/// structured data, anything else is forwarded verbatim as a string.
#[derive(Debug, Clone, PartialEq)]
pub struct IdealCustomerProfile {
    criteria: Value,
}

impl IdealCustomerProfile {
    pub fn new(criteria: Value) -> Self {
        Self { criteria }
    }

    pub fn from_text(text: &str) -> Self {
        let text = text.trim();
        match serde_json::from_str::<Value>(text) {
            Ok(criteria) => Self { criteria },
            Err(_) => Self {
                criteria: Value::String(text.to_string()),
            },
        }
    }

    /// True when the ICP was not parseable as JSON and is carried as raw text.
    pub fn is_free_text(&self) -> bool {
        self.criteria.is_string()
    }

    /// Renders the ICP for embedding in a prompt.
    pub fn to_prompt_text(&self) -> String {
        match &self.criteria {
            Value::String(raw) => raw.clone(),
            other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
        }
    }

    pub fn industries(&self) -> Vec<String> {
        self.string_list("industry")
    }

    pub fn tech_stack(&self) -> Vec<String> {
        self.string_list("tech_stack")
    }

    fn string_list(&self, key: &str) -> Vec<String> {
        match self.criteria.get(key) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|v| v.as_str())
                .map(String::from)
                .collect(),
            Some(Value::String(single)) => vec![single.clone()],
            _ => vec![],
        }
    }
}

/// The ICP the search form starts out with.
pub fn default_icp() -> Value {
    serde_json::json!({
        "industry": ["SaaS", "FinTech", "B2B Software"],
        "geography": ["USA"],
        "employee_count_min": 100,
        "revenue_min": 20000000,
        "keywords": ["AI", "data analytics", "automation"],
        "signals": {
            "funding": true,
            "hiring_data_roles": true
        },
        "tech_stack": ["Snowflake", "AWS"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_icp_from_json_text_keeps_structure() {
        let icp = IdealCustomerProfile::from_text(r#"{"industry": ["SaaS"], "tech_stack": "AWS"}"#);
        assert!(!icp.is_free_text());
        assert_eq!(icp.industries(), vec!["SaaS".to_string()]);
        assert_eq!(icp.tech_stack(), vec!["AWS".to_string()]);
    }

    #[test]
    fn test_icp_from_free_text_is_forwarded_verbatim() {
        let icp = IdealCustomerProfile::from_text("  fintech companies in Ohio  ");
        assert!(icp.is_free_text());
        assert_eq!(icp.to_prompt_text(), "fintech companies in Ohio");
        assert!(icp.industries().is_empty());
    }

    #[test]
    fn test_icp_prompt_text_is_pretty_json() {
        let icp = IdealCustomerProfile::new(json!({ "geography": ["USA"] }));
        let text = icp.to_prompt_text();
        assert!(text.contains("\"geography\""));
        assert!(text.contains('\n'));
    }

    #[test]
    fn test_default_icp_lists_industries() {
        let icp = IdealCustomerProfile::new(default_icp());
        assert_eq!(icp.industries().len(), 3);
        assert_eq!(icp.tech_stack(), vec!["Snowflake", "AWS"]);
    }

    #[test]
    fn test_prospect_requires_contacts_in_json() {
        let bad = json!({
            "company_name": "Acme",
            "domain": "acme.com",
            "revenue": 1000,
            "industry": "SaaS",
            "funding_stage": "Seed",
            "signals": { "recent_hiring": false, "new_funding": false },
            "source": ["Apollo"],
            "confidence": 0.5
        });
        assert!(serde_json::from_value::<Prospect>(bad).is_err());
    }
}
