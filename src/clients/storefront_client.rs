use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

use crate::dispatch::{DispatchOutcome, FieldChange, FormSubmission, InputEvent, Target};
use crate::storefront_actor::{StoreSnapshot, StorefrontError, StorefrontRequest};

/// Type-safe handle for feeding events to the storefront actor.
///
/// This is the crate's public entry point: the embedding shell translates
/// raw browser events into [`InputEvent`]s and pushes them through here. The
/// returned [`DispatchOutcome`] tells the shell whether to suppress the
/// default browser action.
#[derive(Clone)]
pub struct StorefrontClient {
    sender: mpsc::Sender<StorefrontRequest>,
}

impl StorefrontClient {
    pub fn new(sender: mpsc::Sender<StorefrontRequest>) -> Self {
        Self { sender }
    }

    async fn event(&self, event: InputEvent) -> Result<DispatchOutcome, StorefrontError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StorefrontRequest::Input { event, respond_to })
            .await
            .map_err(|_| StorefrontError::ActorClosed)?;
        response.await.map_err(|_| StorefrontError::ActorDropped)?
    }

    /// Delivers a delegated click.
    #[instrument(skip(self, target))]
    pub async fn click(&self, target: Target) -> Result<DispatchOutcome, StorefrontError> {
        debug!(?target, "click");
        self.event(InputEvent::Click(target)).await
    }

    /// Delivers an input change.
    #[instrument(skip(self, field))]
    pub async fn change(&self, field: FieldChange) -> Result<DispatchOutcome, StorefrontError> {
        debug!(?field, "change");
        self.event(InputEvent::Change(field)).await
    }

    /// Delivers a form submission.
    #[instrument(skip(self, form))]
    pub async fn submit(&self, form: FormSubmission) -> Result<DispatchOutcome, StorefrontError> {
        debug!(?form, "submit");
        self.event(InputEvent::Submit(form)).await
    }

    /// Reads the current cart, session, and checkout phase.
    #[instrument(skip(self))]
    pub async fn snapshot(&self) -> Result<StoreSnapshot, StorefrontError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StorefrontRequest::Snapshot { respond_to })
            .await
            .map_err(|_| StorefrontError::ActorClosed)?;
        response.await.map_err(|_| StorefrontError::ActorDropped)?
    }
}
