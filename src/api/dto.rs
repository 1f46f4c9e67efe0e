//! Data Transfer Objects
//!
//! Request and response types for the endpoints. Form bodies arrive
//! urlencoded, the chat API and health probes speak JSON.

use serde::{Deserialize, Serialize};

// ============================================
// MOOD DTOs
// ============================================

/// Mood tracker form post
#[derive(Debug, Deserialize)]
pub struct MoodRequest {
    /// Raw slider value, parsed and range-checked by the handler
    #[serde(default)]
    pub rating: String,
    /// Free-text note, stored verbatim
    #[serde(default)]
    pub note: String,
}

// ============================================
// CHAT DTOs
// ============================================

/// Chat question, used by both the page form and the JSON API
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub query: String,
}

/// Chat answer
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub answer: String,
    /// Whether a knowledge base entry matched (false = default answer)
    pub matched: bool,
    /// Pattern of the matching entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: "healthy"
    pub status: String,
    /// Live visitor sessions
    pub sessions: usize,
    /// Entries in the FAQ knowledge base
    pub knowledge_entries: usize,
    /// Seconds since server start
    pub uptime_seconds: u64,
    /// Server version
    pub version: String,
}
