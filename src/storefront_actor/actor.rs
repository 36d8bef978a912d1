//! The storefront actor: mailbox, run loop, and event application.
//!
//! # Architecture Note
//! The browser gives the original a free single-threaded event loop: handlers
//! run to completion, timers fire between them, and nobody else touches the
//! shared cart/user state. One actor task draining an mpsc mailbox gives this
//! crate the same guarantees. Simulated delays are tokio timers spawned as
//! fire-and-forget tasks that post messages back into the mailbox, so their
//! effects serialize with ordinary events - within one submission, cart
//! clearing, confirmation-page loading, and order-number injection always
//! execute in that order.

use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use crate::auth::Authenticator;
use crate::dispatch::{DispatchOutcome, InputEvent, RuleSet};
use crate::model::{CartItem, OrderNumber, StateStore, UserProfile};
use crate::shell::{PaymentSections, ShellClient};
use crate::storefront_actor::actions::{
    self, QuantityOp, UiAction, PAGE_ACCOUNT, PAGE_ORDER_COMPLETE,
};
use crate::storefront_actor::checkout::{
    gateway_delay, in_progress_label, CheckoutPhase, CheckoutSession, CONFIRMATION_SETTLE_DELAY,
};
use crate::storefront_actor::error::StorefrontError;

/// Collaborators injected into the actor at spawn time.
///
/// Late binding: the shell and authenticator are created by the caller and
/// handed to [`StorefrontActor::run`], not baked in at construction.
pub struct UiContext {
    pub shell: ShellClient,
    pub auth: Arc<dyn Authenticator>,
}

/// One-shot response channel for client requests.
pub type Response<T> = oneshot::Sender<Result<T, StorefrontError>>;

/// Read-only view of the store for tests and diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreSnapshot {
    pub cart: Vec<CartItem>,
    pub user: Option<UserProfile>,
    pub checkout: CheckoutPhase,
}

/// Messages accepted by the storefront mailbox.
///
/// `Input` and `Snapshot` come from the [`StorefrontClient`]; the timer
/// variants are posted by the actor's own scheduled tasks.
///
/// [`StorefrontClient`]: crate::clients::StorefrontClient
#[derive(Debug)]
pub enum StorefrontRequest {
    Input {
        event: InputEvent,
        respond_to: Response<DispatchOutcome>,
    },
    Snapshot {
        respond_to: Response<StoreSnapshot>,
    },
    /// The simulated gateway delay elapsed.
    GatewayComplete,
    /// The confirmation view had time to render; inject the order number.
    ConfirmationSettled { order: OrderNumber },
}

/// The actor: single owner of the state store and the checkout session.
pub struct StorefrontActor {
    receiver: mpsc::Receiver<StorefrontRequest>,
    /// Handed to timer tasks so delays re-enter the mailbox. Weak so the
    /// actor's own handle never keeps the channel open: once every client
    /// is dropped, `recv()` sees the close and the loop exits even with
    /// timers outstanding.
    self_sender: mpsc::WeakSender<StorefrontRequest>,
    store: StateStore,
    session: CheckoutSession,
    click_rules: RuleSet<crate::dispatch::Target, UiAction>,
    change_rules: RuleSet<crate::dispatch::FieldChange, UiAction>,
    submit_rules: RuleSet<crate::dispatch::FormSubmission, UiAction>,
}

impl StorefrontActor {
    pub(crate) fn new(
        store: StateStore,
        receiver: mpsc::Receiver<StorefrontRequest>,
        self_sender: mpsc::WeakSender<StorefrontRequest>,
    ) -> Self {
        Self {
            receiver,
            self_sender,
            store,
            session: CheckoutSession::default(),
            click_rules: actions::click_rules(),
            change_rules: actions::change_rules(),
            submit_rules: actions::submit_rules(),
        }
    }

    /// Runs the event loop, processing messages until every client is
    /// dropped and the mailbox closes.
    pub async fn run(mut self, ctx: UiContext) {
        info!("Storefront dispatcher started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StorefrontRequest::Input { event, respond_to } => {
                    let outcome = self.dispatch(event, &ctx).await;
                    let _ = respond_to.send(Ok(outcome));
                }
                StorefrontRequest::Snapshot { respond_to } => {
                    let snapshot = StoreSnapshot {
                        cart: self.store.cart.items().to_vec(),
                        user: self.store.user.clone(),
                        checkout: self.session.phase(),
                    };
                    let _ = respond_to.send(Ok(snapshot));
                }
                StorefrontRequest::GatewayComplete => {
                    self.on_gateway_complete(&ctx).await;
                }
                StorefrontRequest::ConfirmationSettled { order } => {
                    self.on_confirmation_settled(order, &ctx).await;
                }
            }
        }

        info!(
            cart_lines = self.store.cart.len(),
            "Storefront dispatcher stopped"
        );
    }

    /// Classifies a raw event and applies the resulting action.
    async fn dispatch(&mut self, event: InputEvent, ctx: &UiContext) -> DispatchOutcome {
        let action = match &event {
            InputEvent::Click(target) => self.click_rules.classify(target),
            InputEvent::Change(field) => self.change_rules.classify(field),
            InputEvent::Submit(form) => self.submit_rules.classify(form),
        };

        match action {
            Some(action) => {
                debug!(?action, "dispatching");
                self.apply(action, ctx).await;
                DispatchOutcome::Handled
            }
            None => {
                // Default browser behavior preserved.
                debug!("no rule matched, ignoring");
                DispatchOutcome::Ignored
            }
        }
    }

    async fn apply(&mut self, action: UiAction, ctx: &UiContext) {
        match action {
            UiAction::ToggleMobileMenu => {
                ctx.shell.toggle_mobile_menu().await;
            }
            UiAction::Navigate(page) => {
                ctx.shell.load_page(page).await;
                ctx.shell.close_mobile_menu().await;
            }
            UiAction::AddToCart(product_id) => {
                self.store.cart.add(&product_id);
                info!(%product_id, badge = self.store.cart.total_quantity(), "Added to cart");
                ctx.shell
                    .update_cart_badge(self.store.cart.total_quantity())
                    .await;
            }
            UiAction::AdjustCartItem { product_id, op } => {
                let changed = match op {
                    QuantityOp::Increase => self.store.cart.increase(&product_id),
                    QuantityOp::Decrease => self.store.cart.decrease(&product_id),
                    QuantityOp::Remove => self.store.cart.remove(&product_id),
                };
                if changed {
                    debug!(%product_id, ?op, "Cart line adjusted");
                    ctx.shell
                        .update_cart_badge(self.store.cart.total_quantity())
                        .await;
                } else {
                    // Control referenced a line no longer in the cart.
                    debug!(%product_id, ?op, "Cart line not found, ignoring");
                }
            }
            UiAction::Logout => {
                self.store.user = None;
                info!("User logged out");
                ctx.shell.refresh_login_button(None).await;
            }
            UiAction::SelectPaymentMethod(method) => {
                ctx.shell
                    .set_payment_sections(PaymentSections::for_method(method))
                    .await;
            }
            UiAction::Search(query) => {
                ctx.shell.run_search(query).await;
            }
            UiAction::SubmitLogin { credentials } => {
                match ctx.auth.login(&credentials).await {
                    Some(profile) => {
                        info!(name = %profile.name, "Login accepted");
                        ctx.shell
                            .refresh_login_button(Some(profile.name.clone()))
                            .await;
                        self.store.user = Some(profile);
                    }
                    None => {
                        debug!("Login rejected");
                    }
                }
            }
            UiAction::SubmitContact { form_id } => {
                ctx.shell.show_notice("Message sent successfully.").await;
                ctx.shell.reset_form(form_id).await;
            }
            UiAction::SubmitProfile { name } => {
                // Requires both an active session and a name field.
                let (Some(user), Some(name)) = (self.store.user.as_mut(), name) else {
                    debug!("Profile update skipped, no session or name field");
                    return;
                };
                user.name = name.clone();
                info!(%name, "Profile updated");
                ctx.shell.show_notice("Account details updated.").await;
                ctx.shell.refresh_login_button(Some(name)).await;
                ctx.shell.load_page(PAGE_ACCOUNT).await;
            }
            UiAction::SubmitPayment {
                method,
                submit_label,
            } => {
                self.begin_checkout(method, submit_label, ctx).await;
            }
        }
    }

    /// `Idle -> Submitting`: lock the submit button and schedule the
    /// simulated gateway roundtrip.
    async fn begin_checkout(
        &mut self,
        method: Option<crate::model::PaymentMethod>,
        submit_label: Option<String>,
        ctx: &UiContext,
    ) {
        let Some(method) = method else {
            warn!("Payment submitted with no method selected, ignoring");
            return;
        };
        if !self.session.try_begin(method, submit_label) {
            // Button is disabled while a submission is in flight; a repeat
            // submit event is dropped.
            debug!("Payment already in flight, ignoring repeat submission");
            return;
        }

        info!(method = method.as_str(), "Payment submitted");
        ctx.shell
            .set_submit_button(true, in_progress_label(method))
            .await;

        // One non-cancellable timer per submission; it cannot fail. If the
        // storefront shut down in the meantime, the upgrade fails and the
        // completion is dropped.
        let delay = gateway_delay(method);
        let sender = self.self_sender.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Some(sender) = sender.upgrade() {
                let _ = sender.send(StorefrontRequest::GatewayComplete).await;
            }
        });
    }

    /// `Submitting -> Finalizing`: order number, cart clear, confirmation
    /// view, in strict order; number injection is scheduled behind a short
    /// settle delay.
    async fn on_gateway_complete(&mut self, ctx: &UiContext) {
        let Some(method) = self.session.begin_finalizing() else {
            warn!("Gateway completion with no submission in flight, dropping");
            return;
        };

        let order = OrderNumber::generate();
        info!(method = method.as_str(), %order, "Payment accepted, finalizing");

        self.store.cart.clear();
        ctx.shell.update_cart_badge(0).await;
        ctx.shell.load_page(PAGE_ORDER_COMPLETE).await;

        let sender = self.self_sender.clone();
        tokio::spawn(async move {
            tokio::time::sleep(CONFIRMATION_SETTLE_DELAY).await;
            if let Some(sender) = sender.upgrade() {
                let _ = sender
                    .send(StorefrontRequest::ConfirmationSettled { order })
                    .await;
            }
        });
    }

    /// `Finalizing -> Idle`: write the confirmation number into the loaded
    /// view. The shell skips the write if the display element is absent.
    async fn on_confirmation_settled(&mut self, order: OrderNumber, ctx: &UiContext) {
        ctx.shell.set_order_number(format!("#{order}")).await;
        let original_label = self.session.complete();
        debug!(%order, ?original_label, "Checkout finalized");
    }
}
