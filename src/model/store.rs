use serde::{Deserialize, Serialize};

use crate::model::{Cart, UserProfile};

/// The shared state store: the cart and the current user session.
///
/// # Architecture Note
/// In a browser this would be a pair of module-level globals mutated from
/// every handler. Here it is an explicitly owned container: the caller
/// constructs it (tests can preload it) and moves it into the storefront
/// actor, which becomes its single writer. No locking is needed because the
/// actor processes events sequentially.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StateStore {
    pub cart: Cart,
    pub user: Option<UserProfile>,
}

impl StateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store with a logged-in user, convenient for tests and demos.
    pub fn with_user(user: UserProfile) -> Self {
        Self {
            cart: Cart::new(),
            user: Some(user),
        }
    }
}
