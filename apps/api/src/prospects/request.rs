//! Request builder: turns an ICP into the generation request for a prospect search.
//!
//! Pure: no I/O. The response schema is what the generator is told to conform to;
//! `validation` re-checks every record regardless.

use serde_json::{json, Value};

use crate::llm_client::prompts::{JSON_ONLY_SYSTEM, RAW_NUMBER_INSTRUCTION};
use crate::llm_client::{GenerationRequest, JSON_MIME_TYPE};
use crate::prospects::models::IdealCustomerProfile;
use crate::prospects::prompts::{
    MAX_PROSPECTS, MIN_PROSPECTS, PROSPECT_SEARCH_PROMPT_TEMPLATE, PROSPECT_SEARCH_SYSTEM,
};

pub const PROSPECT_REQUIRED_FIELDS: [&str; 9] = [
    "company_name",
    "domain",
    "revenue",
    "industry",
    "funding_stage",
    "contacts",
    "signals",
    "source",
    "confidence",
];

pub const CONTACT_REQUIRED_FIELDS: [&str; 4] = ["name", "title", "email", "linkedin"];

pub const SIGNAL_REQUIRED_FIELDS: [&str; 2] = ["recent_hiring", "new_funding"];

/// Output schema for the generation service (OpenAPI subset, upper-case type names).
pub fn prospect_response_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "company_name": { "type": "STRING" },
                "domain": { "type": "STRING" },
                "revenue": { "type": "NUMBER" },
                "industry": { "type": "STRING" },
                "funding_stage": { "type": "STRING" },
                "contacts": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "name": { "type": "STRING" },
                            "title": { "type": "STRING" },
                            "email": { "type": "STRING" },
                            "linkedin": { "type": "STRING" }
                        },
                        "required": CONTACT_REQUIRED_FIELDS
                    }
                },
                "signals": {
                    "type": "OBJECT",
                    "properties": {
                        "recent_hiring": { "type": "BOOLEAN" },
                        "new_funding": { "type": "BOOLEAN" }
                    },
                    "required": SIGNAL_REQUIRED_FIELDS
                },
                "source": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" }
                },
                "confidence": { "type": "NUMBER" }
            },
            "required": PROSPECT_REQUIRED_FIELDS
        }
    })
}

pub fn build_search_prompt(icp: &IdealCustomerProfile) -> String {
    PROSPECT_SEARCH_PROMPT_TEMPLATE
        .replace("{raw_number_instruction}", RAW_NUMBER_INSTRUCTION)
        .replace("{min_prospects}", &MIN_PROSPECTS.to_string())
        .replace("{max_prospects}", &MAX_PROSPECTS.to_string())
        .replace("{icp}", &icp.to_prompt_text())
}

pub fn build_search_request(icp: &IdealCustomerProfile) -> GenerationRequest {
    GenerationRequest {
        system: format!("{PROSPECT_SEARCH_SYSTEM} {JSON_ONLY_SYSTEM}"),
        prompt: build_search_prompt(icp),
        response_mime_type: JSON_MIME_TYPE.to_string(),
        response_schema: prospect_response_schema(),
    }
}
