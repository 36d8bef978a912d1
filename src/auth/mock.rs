//! # Mock authenticator
//!
//! Expectation-based test double for the [`Authenticator`] seam.
//!
//! # Example
//! ```ignore
//! let auth = MockAuth::new();
//! auth.expect_login().return_user(UserProfile::new("Alice", "alice@example.com"));
//!
//! // ... drive a login-form submission through the storefront ...
//!
//! auth.verify(); // every queued expectation was consumed
//! ```

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use crate::auth::Authenticator;
use crate::model::UserProfile;

/// A queued answer for one expected login attempt.
struct Expectation {
    response: Option<UserProfile>,
}

/// Mock [`Authenticator`] answering login attempts from a queue of
/// expectations, in order.
///
/// Panics on an unexpected login attempt, and [`MockAuth::verify`] panics if
/// expectations were left unconsumed.
#[derive(Clone, Default)]
pub struct MockAuth {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl MockAuth {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects one login attempt.
    pub fn expect_login(&self) -> LoginExpectationBuilder {
        LoginExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that every expectation was consumed.
    pub fn verify(&self) {
        let expectations = self.expectations.lock().unwrap();
        if !expectations.is_empty() {
            panic!(
                "Not all login expectations were met. {} remaining",
                expectations.len()
            );
        }
    }
}

#[async_trait]
impl Authenticator for MockAuth {
    async fn login(&self, _credentials: &HashMap<String, String>) -> Option<UserProfile> {
        let expectation = self
            .expectations
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected login attempt");
        expectation.response
    }
}

/// Builder for login expectations.
pub struct LoginExpectationBuilder {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl LoginExpectationBuilder {
    /// The attempt succeeds with this profile.
    pub fn return_user(self, user: UserProfile) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation {
                response: Some(user),
            });
    }

    /// The attempt is rejected.
    pub fn return_rejected(self) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation { response: None });
    }
}
