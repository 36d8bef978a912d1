//! # Page-shell interface
//!
//! The dispatcher core produces UI effects but never renders anything. All
//! rendering is delegated to the page shell (router, mobile menu, cart badge,
//! login control, payment form sections, notices) through the fire-and-forget
//! [`ShellCommand`] channel defined here.
//!
//! # Architecture Note
//! Commands are one-way on purpose. The original page mutates the document
//! and never reads a result back, and several anchors are optional (the
//! order-number display, the search boxes): the shell silently skips a
//! command whose target element does not exist. Mirroring that, a send to a
//! closed shell channel is logged and swallowed rather than treated as an
//! error.
//!
//! Tests use [`mock::ShellHarness`] to capture the command stream and replay
//! it onto a lightweight page model.

pub mod mock;

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::warn;

use crate::model::PaymentMethod;

/// Visibility and validation state of the payment form's two sections.
///
/// Derived from the selected method in one place so the card section's
/// `required` flags can never disagree with its visibility: a hidden card
/// section must not block submission through required-field validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentSections {
    pub card_visible: bool,
    pub paypal_visible: bool,
    pub card_required: bool,
}

impl PaymentSections {
    pub fn for_method(method: PaymentMethod) -> Self {
        match method {
            PaymentMethod::PayPal => Self {
                card_visible: false,
                paypal_visible: true,
                card_required: false,
            },
            PaymentMethod::Card => Self {
                card_visible: true,
                paypal_visible: false,
                card_required: true,
            },
        }
    }
}

impl Default for PaymentSections {
    /// The form initially renders with the card section showing.
    fn default() -> Self {
        Self::for_method(PaymentMethod::Card)
    }
}

/// A rendering instruction for the page shell.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    /// Replace the main content region with the named view.
    LoadPage(String),
    ToggleMobileMenu,
    CloseMobileMenu,
    /// Re-render the login/account control; `Some` carries the display name.
    RefreshLoginButton(Option<String>),
    /// Re-render the cart item-count indicator.
    UpdateCartBadge(u32),
    SetPaymentSections(PaymentSections),
    SetSubmitButton { disabled: bool, label: String },
    /// Write the confirmation number into the order-number display, if that
    /// element exists in the current view.
    SetOrderNumber(String),
    ShowNotice(String),
    ResetForm(String),
    RunSearch(String),
}

/// Sender half of the shell channel, held by the storefront actor.
#[derive(Clone)]
pub struct ShellClient {
    sender: mpsc::Sender<ShellCommand>,
}

/// Creates a shell channel: the client for the storefront, the receiver for
/// whoever renders (the real shell, or a test harness).
pub fn channel(buffer_size: usize) -> (ShellClient, mpsc::Receiver<ShellCommand>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ShellClient { sender }, receiver)
}

impl ShellClient {
    async fn send(&self, command: ShellCommand) {
        if self.sender.send(command).await.is_err() {
            // Shell gone; rendering effects are best-effort.
            warn!("shell channel closed, dropping command");
        }
    }

    pub async fn load_page(&self, name: impl Into<String>) {
        self.send(ShellCommand::LoadPage(name.into())).await;
    }

    pub async fn toggle_mobile_menu(&self) {
        self.send(ShellCommand::ToggleMobileMenu).await;
    }

    pub async fn close_mobile_menu(&self) {
        self.send(ShellCommand::CloseMobileMenu).await;
    }

    pub async fn refresh_login_button(&self, display_name: Option<String>) {
        self.send(ShellCommand::RefreshLoginButton(display_name)).await;
    }

    pub async fn update_cart_badge(&self, count: u32) {
        self.send(ShellCommand::UpdateCartBadge(count)).await;
    }

    pub async fn set_payment_sections(&self, sections: PaymentSections) {
        self.send(ShellCommand::SetPaymentSections(sections)).await;
    }

    pub async fn set_submit_button(&self, disabled: bool, label: impl Into<String>) {
        self.send(ShellCommand::SetSubmitButton {
            disabled,
            label: label.into(),
        })
        .await;
    }

    pub async fn set_order_number(&self, text: impl Into<String>) {
        self.send(ShellCommand::SetOrderNumber(text.into())).await;
    }

    pub async fn show_notice(&self, text: impl Into<String>) {
        self.send(ShellCommand::ShowNotice(text.into())).await;
    }

    pub async fn reset_form(&self, form_id: impl Into<String>) {
        self.send(ShellCommand::ResetForm(form_id.into())).await;
    }

    pub async fn run_search(&self, query: impl Into<String>) {
        self.send(ShellCommand::RunSearch(query.into())).await;
    }
}
