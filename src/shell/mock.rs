//! # Shell test harness
//!
//! Utilities for asserting on the rendering commands the storefront emits.
//!
//! [`ShellHarness`] owns the receiver half of a shell channel. Tests call
//! [`ShellHarness::drain`] to pull every command emitted so far; each drained
//! command is also replayed onto a [`ShellState`], a small in-memory page
//! model, so assertions can target either the raw command stream (ordering)
//! or the resulting page state (end state).

use tokio::sync::mpsc;

use crate::shell::{self, PaymentSections, ShellClient, ShellCommand};
use crate::storefront_actor::actions::PAGE_ORDER_COMPLETE;

/// In-memory model of everything the shell renders.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellState {
    pub current_page: Option<String>,
    pub mobile_menu_open: bool,
    pub cart_badge: u32,
    pub login_display_name: Option<String>,
    pub payment_sections: PaymentSections,
    pub submit_disabled: bool,
    pub submit_label: Option<String>,
    pub order_number: Option<String>,
    pub notices: Vec<String>,
    pub reset_forms: Vec<String>,
    pub searches: Vec<String>,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            current_page: None,
            mobile_menu_open: false,
            cart_badge: 0,
            login_display_name: None,
            payment_sections: PaymentSections::default(),
            submit_disabled: false,
            submit_label: None,
            order_number: None,
            notices: Vec::new(),
            reset_forms: Vec::new(),
            searches: Vec::new(),
        }
    }
}

impl ShellState {
    fn apply(&mut self, command: &ShellCommand) {
        match command {
            ShellCommand::LoadPage(name) => {
                self.current_page = Some(name.clone());
            }
            ShellCommand::ToggleMobileMenu => {
                self.mobile_menu_open = !self.mobile_menu_open;
            }
            ShellCommand::CloseMobileMenu => {
                self.mobile_menu_open = false;
            }
            ShellCommand::RefreshLoginButton(name) => {
                self.login_display_name = name.clone();
            }
            ShellCommand::UpdateCartBadge(count) => {
                self.cart_badge = *count;
            }
            ShellCommand::SetPaymentSections(sections) => {
                self.payment_sections = *sections;
            }
            ShellCommand::SetSubmitButton { disabled, label } => {
                self.submit_disabled = *disabled;
                self.submit_label = Some(label.clone());
            }
            ShellCommand::SetOrderNumber(text) => {
                // The display element only exists in the confirmation view;
                // anywhere else the command is silently skipped.
                if self.current_page.as_deref() == Some(PAGE_ORDER_COMPLETE) {
                    self.order_number = Some(text.clone());
                }
            }
            ShellCommand::ShowNotice(text) => {
                self.notices.push(text.clone());
            }
            ShellCommand::ResetForm(form_id) => {
                self.reset_forms.push(form_id.clone());
            }
            ShellCommand::RunSearch(query) => {
                self.searches.push(query.clone());
            }
        }
    }
}

/// Captures and replays the storefront's shell commands.
pub struct ShellHarness {
    receiver: mpsc::Receiver<ShellCommand>,
    pub state: ShellState,
}

impl ShellHarness {
    /// Creates a shell channel and a harness watching its receiver.
    pub fn new() -> (ShellClient, Self) {
        let (client, receiver) = shell::channel(256);
        (
            client,
            Self {
                receiver,
                state: ShellState::default(),
            },
        )
    }

    /// Pulls every command emitted so far, applying each to [`Self::state`].
    pub fn drain(&mut self) -> Vec<ShellCommand> {
        let mut commands = Vec::new();
        while let Ok(command) = self.receiver.try_recv() {
            self.state.apply(&command);
            commands.push(command);
        }
        commands
    }
}
