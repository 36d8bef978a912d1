//! Semantic actions and the classification tables that produce them.
//!
//! Raw events arrive untyped (an element path, a field name, a form id).
//! The tables here turn them into [`UiAction`]s using the ordered
//! first-match-wins [`RuleSet`]s from [`crate::dispatch`]. The markers
//! (`data-page`, `add-to-cart-btn`, ...) are the vocabulary the page markup
//! declares; they are matched verbatim.

use std::collections::HashMap;

use crate::dispatch::{FieldChange, FormSubmission, RuleSet, Target};
use crate::model::PaymentMethod;

/// Named views the storefront navigates between.
pub const PAGE_HOME: &str = "home";
pub const PAGE_ACCOUNT: &str = "account";
pub const PAGE_ORDER_COMPLETE: &str = "order-complete";

/// Quantity adjustment requested from a cart-line control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityOp {
    Increase,
    Decrease,
    Remove,
}

impl QuantityOp {
    fn from_data_action(value: &str) -> Option<Self> {
        match value {
            "increase" => Some(QuantityOp::Increase),
            "decrease" => Some(QuantityOp::Decrease),
            "remove" => Some(QuantityOp::Remove),
            _ => None,
        }
    }
}

/// A classified UI event, ready to be applied to the store.
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    ToggleMobileMenu,
    Navigate(String),
    AddToCart(String),
    AdjustCartItem { product_id: String, op: QuantityOp },
    Logout,
    SelectPaymentMethod(PaymentMethod),
    Search(String),
    SubmitLogin { credentials: HashMap<String, String> },
    SubmitContact { form_id: String },
    SubmitProfile { name: Option<String> },
    SubmitPayment { method: Option<PaymentMethod>, submit_label: Option<String> },
}

/// The click table. Precedence is declaration order: the menu toggle beats a
/// navigation marker, navigation beats add-to-cart, and so on. Each rule
/// scans the whole ancestor chain, so an outer `data-page` ancestor still
/// wins over an inner add-to-cart button.
pub fn click_rules() -> RuleSet<Target, UiAction> {
    RuleSet::new()
        .rule("mobile-menu-toggle", |target: &Target| {
            target
                .closest(|e| e.has_class("mobile-menu-button"))
                .map(|_| UiAction::ToggleMobileMenu)
        })
        .rule("page-navigation", |target: &Target| {
            target
                .closest(|e| e.get_attr("data-page").is_some())
                .and_then(|e| e.get_attr("data-page"))
                .map(|page| UiAction::Navigate(page.to_string()))
        })
        .rule("add-to-cart", |target: &Target| {
            target
                .closest(|e| e.has_class("add-to-cart-btn"))
                .and_then(|e| e.get_attr("data-product-id"))
                .map(|id| UiAction::AddToCart(id.to_string()))
        })
        .rule("cart-line-control", |target: &Target| {
            let control = target
                .closest(|e| e.has_class("quantity-btn") || e.has_class("remove-item-btn"))?;
            let product_id = control.get_attr("data-product-id")?;
            let op = QuantityOp::from_data_action(control.get_attr("data-action")?)?;
            Some(UiAction::AdjustCartItem {
                product_id: product_id.to_string(),
                op,
            })
        })
        .rule("logout", |target: &Target| {
            target
                .closest(|e| e.has_class("logout-button"))
                .map(|_| UiAction::Logout)
        })
}

/// The change table: the payment-method radio group and the two delegated
/// search boxes. Everything else is ignored.
pub fn change_rules() -> RuleSet<FieldChange, UiAction> {
    RuleSet::new()
        .rule("payment-method", |field: &FieldChange| {
            (field.name == "paymentMethod").then(|| {
                UiAction::SelectPaymentMethod(PaymentMethod::from_form_value(&field.value))
            })
        })
        .rule("catalog-search", |field: &FieldChange| {
            matches!(
                field.name.as_str(),
                "desktop-search-input" | "mobile-search-input"
            )
            .then(|| UiAction::Search(field.value.clone()))
        })
}

/// The submit table, keyed by form identity. Unmatched forms fall through to
/// default browser submission.
pub fn submit_rules() -> RuleSet<FormSubmission, UiAction> {
    RuleSet::new()
        .rule("login-form", |form: &FormSubmission| {
            (form.form_id == "login-form").then(|| UiAction::SubmitLogin {
                credentials: form.fields.clone(),
            })
        })
        .rule("contact-form", |form: &FormSubmission| {
            (form.form_id == "contact-form").then(|| UiAction::SubmitContact {
                form_id: form.form_id.clone(),
            })
        })
        .rule("personal-info-form", |form: &FormSubmission| {
            (form.form_id == "personal-info-form").then(|| UiAction::SubmitProfile {
                name: form.fields.get("acc-name").cloned(),
            })
        })
        .rule("payment-form", |form: &FormSubmission| {
            (form.form_id == "payment-form").then(|| UiAction::SubmitPayment {
                method: form
                    .fields
                    .get("paymentMethod")
                    .map(|v| PaymentMethod::from_form_value(v)),
                submit_label: form.submit_label.clone(),
            })
        })
}
