use thiserror::Error;

/// Errors that may occur when evaluating fluid properties.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// The input state is outside the provider's valid domain.
    ///
    /// For example, a temperature outside the liquid-water range.
    #[error("out of domain: {context}")]
    OutOfDomain { context: String },

    /// The provider returned a non-physical property value.
    #[error("invalid state: {context}")]
    InvalidState { context: String },
}
