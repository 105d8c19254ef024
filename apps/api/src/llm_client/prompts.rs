// Shared prompt constants and prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON value. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Instruction appended to prompts whose output carries monetary amounts.
pub const RAW_NUMBER_INSTRUCTION: &str = "\
    Monetary amounts must be plain JSON numbers in absolute currency units. \
    NEVER abbreviate with 'K', 'M' or 'B' and NEVER emit them as strings. \
    For example, 75 million is 75000000.";
