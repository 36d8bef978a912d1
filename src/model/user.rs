use serde::{Deserialize, Serialize};

/// Profile of the currently logged-in shopper.
///
/// The storefront keeps `Option<UserProfile>` in its state store: `None`
/// means logged out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
}

impl UserProfile {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}
