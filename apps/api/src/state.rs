use crate::prospects::search::ProspectSearcher;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Owns the generation backend and credential. Holds no per-search state.
    pub searcher: ProspectSearcher,
}
