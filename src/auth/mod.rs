//! Authentication collaborator seam.
//!
//! Credential checking is not part of the storefront core. The dispatcher
//! forwards login-form submissions to an [`Authenticator`] and applies the
//! result: a returned profile becomes the current session, a rejection
//! changes nothing.

pub mod mock;

use async_trait::async_trait;
use std::collections::HashMap;

use crate::model::UserProfile;

/// Validates login credentials.
///
/// Implemented outside the core (the demo binary ships a permissive stand-in,
/// tests use [`mock::MockAuth`]). Returning `None` means the credentials were
/// rejected.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn login(&self, credentials: &HashMap<String, String>) -> Option<UserProfile>;
}
