//! Error types for the storefront actor.

use thiserror::Error;

/// Errors surfaced by the storefront's public client and lifecycle.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StorefrontError {
    /// The actor's mailbox is closed (storefront shut down).
    #[error("Storefront actor closed")]
    ActorClosed,

    /// The actor dropped the response channel without answering.
    #[error("Storefront actor dropped response channel")]
    ActorDropped,

    /// The page has no main content region; initialization aborts and no
    /// handlers are attached.
    #[error("Main content region not found")]
    MissingMainRegion,

    /// The actor task panicked or failed to join during shutdown.
    #[error("Storefront task failed: {0}")]
    TaskFailed(String),
}
