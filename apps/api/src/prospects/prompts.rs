// Prospect search LLM prompt templates.
// All prompts for the prospects module are defined here.

pub const MIN_PROSPECTS: usize = 3;
pub const MAX_PROSPECTS: usize = 5;

pub const PROSPECT_SEARCH_SYSTEM: &str = "\
You are an autonomous ProspectSearchAgent that discovers B2B companies and contacts \
matching an Ideal Customer Profile. \
Return a JSON array of prospect objects that conforms exactly to the response schema.";

/// Prospect search prompt template.
/// Replace `{icp}`, `{min_prospects}`, `{max_prospects}` and `{raw_number_instruction}` before sending.
pub const PROSPECT_SEARCH_PROMPT_TEMPLATE: &str = r#"Your task is to discover B2B companies and contacts in the USA that match a given Ideal Customer Profile (ICP).

Follow these steps precisely:
1. **Simulate Data Fetching**: Act as if you are querying data sources like Apollo for company/contact info, Crunchbase for funding, and SerpAPI for hiring signals.
2. **Merge & Deduplicate**: Combine the information and remove duplicate companies (by domain) and contacts (by email).
3. **Score**: For each prospect, calculate a confidence score using this formula:
   score = (0.4 * industry_match) + (0.3 * funding_signal) + (0.2 * hiring_signal) + (0.1 * tech_match)
   - 'industry_match': 1 if the company's industry is a strong match for the ICP industries, 0 otherwise.
   - 'funding_signal': 1 if 'new_funding' is true, 0.5 if funding info is positive but not recent, 0 otherwise.
   - 'hiring_signal': 1 if 'recent_hiring' is true, 0 otherwise.
   - 'tech_match': 1 if the tech stack is a strong match, 0.5 for a partial match, 0 otherwise.
4. **Format Output**: Return a structured, enriched JSON array of the results.

IDEAL CUSTOMER PROFILE:
---
{icp}
---

Generate a JSON array of {min_prospects} to {max_prospects} matching companies. The 'confidence' score must be calculated using the formula above and lie between 0 and 1.

RULES:
1. {raw_number_instruction} The 'revenue' field follows this rule.
2. The 'contacts' array must contain at least one contact, each with name, title, email and linkedin.
3. The 'source' array must list the 2-3 data sources you 'queried' (e.g. "Apollo", "Crunchbase", "SerpAPI").
4. Return ONLY the JSON array. Nothing else."#;
