use std::collections::HashSet;

use tracing::debug;

use crate::prospects::models::Prospect;

/// Drops repeated companies (by domain) and repeated contacts within a company (by email).
///
/// Keys are trimmed and lower-cased; the first occurrence wins and order is kept.
/// Idempotent. Opt-in via `PROSPECT_DEDUP`: the generator is only *asked* to dedup.
pub fn dedup_prospects(prospects: Vec<Prospect>) -> Vec<Prospect> {
    let before = prospects.len();
    let mut seen_domains = HashSet::new();

    let deduped: Vec<Prospect> = prospects
        .into_iter()
        .filter(|p| seen_domains.insert(normalize_key(&p.domain)))
        .map(dedup_contacts)
        .collect();

    if deduped.len() != before {
        debug!(
            "Dedup removed {} duplicate prospects by domain",
            before - deduped.len()
        );
    }
    deduped
}

fn dedup_contacts(mut prospect: Prospect) -> Prospect {
    let mut seen_emails = HashSet::new();
    prospect
        .contacts
        .retain(|c| seen_emails.insert(normalize_key(&c.email)));
    prospect
}

fn normalize_key(value: &str) -> String {
    value.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prospects::models::{Contact, SignalSet};

    fn contact(email: &str) -> Contact {
        Contact {
            name: "Sam Lee".to_string(),
            title: "CTO".to_string(),
            email: email.to_string(),
            linkedin: "https://linkedin.com/in/samlee".to_string(),
        }
    }

    fn prospect(name: &str, domain: &str, emails: &[&str]) -> Prospect {
        Prospect {
            company_name: name.to_string(),
            domain: domain.to_string(),
            revenue: 20_000_000.0,
            industry: "FinTech".to_string(),
            funding_stage: "Series A".to_string(),
            contacts: emails.iter().map(|e| contact(e)).collect(),
            signals: SignalSet {
                recent_hiring: false,
                new_funding: true,
            },
            source: vec!["Apollo".to_string()],
            confidence: 0.7,
        }
    }

    #[test]
    fn test_duplicate_domains_keep_first() {
        let input = vec![
            prospect("Acme", "acme.com", &["a@acme.com"]),
            prospect("Globex", "globex.com", &["g@globex.com"]),
            prospect("Acme Inc", " ACME.com ", &["b@acme.com"]),
        ];
        let out = dedup_prospects(input);
        let names: Vec<&str> = out.iter().map(|p| p.company_name.as_str()).collect();
        assert_eq!(names, vec!["Acme", "Globex"]);
    }

    #[test]
    fn test_duplicate_emails_within_company_removed() {
        let input = vec![prospect(
            "Acme",
            "acme.com",
            &["a@acme.com", "A@Acme.com", "b@acme.com"],
        )];
        let out = dedup_prospects(input);
        let emails: Vec<&str> = out[0].contacts.iter().map(|c| c.email.as_str()).collect();
        assert_eq!(emails, vec!["a@acme.com", "b@acme.com"]);
    }

    #[test]
    fn test_same_email_across_companies_is_kept() {
        let input = vec![
            prospect("Acme", "acme.com", &["shared@vc.com"]),
            prospect("Globex", "globex.com", &["shared@vc.com"]),
        ];
        let out = dedup_prospects(input);
        assert_eq!(out.len(), 2);
        assert_eq!(out[1].contacts.len(), 1);
    }

    #[test]
    fn test_dedup_is_idempotent() {
        let input = vec![
            prospect("Acme", "acme.com", &["a@acme.com", "a@acme.com"]),
            prospect("Acme", "acme.com", &["a@acme.com"]),
        ];
        let once = dedup_prospects(input);
        let twice = dedup_prospects(once.clone());
        assert_eq!(once, twice);
    }
}
