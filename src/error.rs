//! Failure taxonomy for collaborator calls.

use thiserror::Error;

/// Errors surfaced by external collaborators (storage, rendering, sharing).
///
/// A declined confirmation dialog is not an error; it is modeled as
/// [`crate::services::ConfirmOutcome::Declined`].
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Persisting or removing a record failed.
    #[error("storage operation failed: {0}")]
    Storage(String),

    /// Rendering the card surface to an image failed.
    #[error("card rendering failed: {0}")]
    Render(String),

    /// Handing an image to the platform share sheet failed.
    #[error("sharing failed: {0}")]
    Share(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
