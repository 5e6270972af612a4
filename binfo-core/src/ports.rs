//! Traits describing the optional external collaborators.

use async_trait::async_trait;

#[derive(thiserror::Error, Debug)]
/// Errors that can occur while talking to a reviser backend.
///
/// None of these ever reach the end user: the agent facade answers every
/// reviser failure by falling back to the deterministic reply.
pub enum ReviserError {
    /// Request to the backend failed at the transport level.
    #[error("Reviser request failed: {0}")]
    Request(String),
    /// Backend answered with a non-success status.
    #[error("Reviser API error (status {status}): {message}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Response body or status text, for the logs.
        message: String,
    },
    /// Backend returned no usable completion text.
    #[error("Reviser returned an empty completion")]
    EmptyCompletion,
}

#[async_trait]
/// Trait for collaborators that reword a reply without changing its facts.
pub trait ReviserPort: Send + Sync {
    /// Return a reworded version of `draft_reply` for the given user text.
    ///
    /// The revised text must keep every fact, date, and number from the
    /// draft unchanged. Callers treat any error as a cue to deliver the
    /// draft as-is.
    ///
    /// # Errors
    ///
    /// Returns a [`ReviserError`] when the backend fails or produces no
    /// usable text.
    async fn revise(&self, user_text: &str, draft_reply: &str) -> Result<String, ReviserError>;
}
