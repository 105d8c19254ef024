// Prospect search: ICP in, validated prospect cards out.
// The only LLM call goes through llm_client via the GenerationBackend seam.

pub mod dedup;
pub mod display;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod request;
pub mod scoring;
pub mod search;
pub mod validation;
