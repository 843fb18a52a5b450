//! Error types for conversion and reference operations

/// Errors raised by the reference engine and the sink registry.
///
/// Malformed markup and unrecognised Markdown lines are never errors: they are
/// classified best-effort and rendered as empty strings or paragraphs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkrefError {
    /// The reference footer declares the same id twice
    #[error("Reference already exists [{id}]: {url}")]
    DuplicateReferenceId { id: u32, url: String },

    /// Lookup of a reference id that the document does not contain
    #[error("Reference [{0}] not found")]
    UnknownReferenceId(u32),

    /// Sink not found in registry
    #[error("Sink '{0}' not found")]
    SinkNotFound(String),
}
