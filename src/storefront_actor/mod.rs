//! The storefront actor: classification tables, checkout state machine, and
//! the mailbox-driven run loop that owns all mutable state.

pub mod actions;
pub mod actor;
pub mod checkout;
pub mod error;

pub use actor::{StoreSnapshot, StorefrontActor, StorefrontRequest, UiContext};
pub use checkout::CheckoutPhase;
pub use error::StorefrontError;

use tokio::sync::mpsc;

use crate::clients::StorefrontClient;
use crate::model::StateStore;

/// Mailbox depth. Events arrive one at a time from a UI, so this only needs
/// headroom for timer messages landing between them.
const MAILBOX_SIZE: usize = 32;

/// Creates the storefront actor and its client.
///
/// The `store` is the injectable state container: tests and demos can
/// preload a cart or a session before the actor takes ownership.
pub fn new(store: StateStore) -> (StorefrontActor, StorefrontClient) {
    let (sender, receiver) = mpsc::channel(MAILBOX_SIZE);
    // The actor only ever gets a weak handle to its own mailbox; the strong
    // ends all live in clients, so dropping them shuts the loop down.
    let actor = StorefrontActor::new(store, receiver, sender.downgrade());
    let client = StorefrontClient::new(sender);
    (actor, client)
}
