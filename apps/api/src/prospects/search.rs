//! Prospect search: the single entry point the UI calls.
//!
//! Flow: credential check → ICP check → build request → one generation call →
//!       strip fences → validate → optional dedup.
//!
//! Both checks run before the request is built; a missing key or an empty ICP
//! never reaches the transport.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::llm_client::{strip_json_fences, GenerationBackend, LlmError};
use crate::prospects::dedup::dedup_prospects;
use crate::prospects::models::{IdealCustomerProfile, Prospect};
use crate::prospects::request::build_search_request;
use crate::prospects::scoring::confidence_bounds;
use crate::prospects::validation::{parse_prospects, ResponseFormatError};

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("transport error: {0}")]
    Transport(#[from] LlmError),

    #[error("malformed AI response: {0}")]
    ResponseFormat(#[from] ResponseFormatError),
}

/// Explicitly constructed search client. Owns its backend and credential;
/// nothing is shared between searches.
#[derive(Clone)]
pub struct ProspectSearcher {
    backend: Arc<dyn GenerationBackend>,
    api_key: Option<String>,
    dedup: bool,
}

impl ProspectSearcher {
    pub fn new(backend: Arc<dyn GenerationBackend>, api_key: Option<String>) -> Self {
        Self {
            backend,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            dedup: false,
        }
    }

    /// Enables the post-validation dedup pass.
    pub fn with_dedup(mut self, dedup: bool) -> Self {
        self.dedup = dedup;
        self
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// Runs one search for the given ICP text under a fresh search id.
    #[allow(dead_code)]
    pub async fn search(&self, icp_text: &str) -> Result<Vec<Prospect>, SearchError> {
        self.search_with_id(Uuid::new_v4(), icp_text).await
    }

    pub async fn search_with_id(
        &self,
        search_id: Uuid,
        icp_text: &str,
    ) -> Result<Vec<Prospect>, SearchError> {
        let span = info_span!("prospect_search", %search_id);
        self.run(icp_text).instrument(span).await
    }

    async fn run(&self, icp_text: &str) -> Result<Vec<Prospect>, SearchError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            SearchError::Configuration(
                "GEMINI_API_KEY is not set; cannot call the generation service".to_string(),
            )
        })?;

        if icp_text.trim().is_empty() {
            return Err(SearchError::InvalidInput("icp cannot be empty".to_string()));
        }

        let icp = IdealCustomerProfile::from_text(icp_text);
        if icp.is_free_text() {
            warn!("ICP is not JSON; forwarding it as free text");
        } else {
            info!(
                "Searching prospects: industries={:?}, tech_stack={:?}",
                icp.industries(),
                icp.tech_stack()
            );
        }

        let request = build_search_request(&icp);
        let raw = self.backend.generate(api_key, &request).await?;

        let mut prospects = parse_prospects(strip_json_fences(&raw))?;
        if self.dedup {
            prospects = dedup_prospects(prospects);
        }

        audit_confidence(&prospects);
        info!("Search returned {} prospects", prospects.len());
        Ok(prospects)
    }
}

/// Confidence is asserted upstream and only range-checked; records whose value the
/// formula could not produce for their signals are logged, never rejected.
fn audit_confidence(prospects: &[Prospect]) {
    for prospect in prospects.iter().filter(|p| out_of_formula_range(p)) {
        let (min, max) = confidence_bounds(&prospect.signals);
        warn!(
            "Confidence {} for {} is outside the formula range [{}, {}] for its signals",
            prospect.confidence, prospect.domain, min, max
        );
    }
}

/// True when no choice of sub-signals could yield the asserted confidence.
fn out_of_formula_range(prospect: &Prospect) -> bool {
    let (min, max) = confidence_bounds(&prospect.signals);
    prospect.confidence < min || prospect.confidence > max
}
