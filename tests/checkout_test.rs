//! Checkout state-machine tests, driven on tokio's paused virtual clock:
//! `sleep` here advances simulated time instantly, so the 1500/2500 ms
//! gateway delays are observable at exact instants without real waiting.

use std::sync::Arc;
use std::time::Duration;

use fashionpoint::auth::mock::MockAuth;
use fashionpoint::dispatch::{DispatchOutcome, FieldChange, FormSubmission};
use fashionpoint::lifecycle::{PageLayout, Storefront};
use fashionpoint::model::{PaymentMethod, StateStore};
use fashionpoint::shell::mock::ShellHarness;
use fashionpoint::shell::{PaymentSections, ShellCommand};
use fashionpoint::storefront_actor::CheckoutPhase;

/// Boots a storefront with two cart lines, draining the boot render.
async fn boot_with_cart() -> (Storefront, ShellHarness) {
    let mut store = StateStore::new();
    store.cart.add("sku-1");
    store.cart.add("sku-2");

    let (shell, mut harness) = ShellHarness::new();
    let storefront = Storefront::start(
        PageLayout::default(),
        store,
        shell,
        Arc::new(MockAuth::new()),
    )
    .await
    .expect("storefront should start");
    harness.drain();
    (storefront, harness)
}

fn payment_form(method: &str) -> FormSubmission {
    FormSubmission::new("payment-form")
        .field("paymentMethod", method)
        .submit_label("Place order")
}

async fn at(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

#[tokio::test(start_paused = true)]
async fn method_toggle_is_idempotent_under_even_count_switching() {
    let (storefront, mut harness) = boot_with_cart().await;
    let client = &storefront.client;

    let untouched = harness.state.payment_sections;

    client
        .change(FieldChange::new("paymentMethod", "paypal"))
        .await
        .unwrap();
    harness.drain();
    assert_eq!(
        harness.state.payment_sections,
        PaymentSections::for_method(PaymentMethod::PayPal)
    );
    assert!(!harness.state.payment_sections.card_visible);
    assert!(!harness.state.payment_sections.card_required);

    // Rapid switching: paypal -> card -> paypal -> card.
    for value in ["card", "paypal", "card"] {
        client
            .change(FieldChange::new("paymentMethod", value))
            .await
            .unwrap();
    }
    harness.drain();

    // Toggling an even number of times is equivalent to never toggling.
    assert_eq!(harness.state.payment_sections, untouched);
    assert!(harness.state.payment_sections.card_visible);
    assert!(harness.state.payment_sections.card_required);
    assert!(!harness.state.payment_sections.paypal_visible);

    storefront.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn submission_locks_the_button_before_any_time_passes() {
    let (storefront, mut harness) = boot_with_cart().await;

    let outcome = storefront.client.submit(payment_form("card")).await.unwrap();
    assert_eq!(outcome, DispatchOutcome::Handled);

    // Synchronously observable: no virtual time has elapsed yet.
    let commands = harness.drain();
    assert_eq!(
        commands,
        vec![ShellCommand::SetSubmitButton {
            disabled: true,
            label: "Processing secure payment...".into(),
        }]
    );

    let snapshot = storefront.client.snapshot().await.unwrap();
    assert_eq!(snapshot.checkout, CheckoutPhase::Submitting(PaymentMethod::Card));
    assert_eq!(snapshot.cart.len(), 2, "cart untouched until the gateway answers");

    storefront.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn card_checkout_finalizes_after_1500_ms() {
    let (storefront, mut harness) = boot_with_cart().await;
    let client = &storefront.client;

    client.submit(payment_form("card")).await.unwrap();
    harness.drain();

    // Just before the simulated local validation completes: nothing yet.
    at(1400).await;
    let snapshot = client.snapshot().await.unwrap();
    assert_eq!(snapshot.checkout, CheckoutPhase::Submitting(PaymentMethod::Card));
    assert_eq!(snapshot.cart.len(), 2);
    assert!(harness.drain().is_empty());

    // Past 1500 ms: cart cleared, badge zeroed, confirmation view loaded,
    // in that order; the number injection is still pending its settle delay.
    at(150).await;
    let commands = harness.drain();
    assert_eq!(
        commands,
        vec![
            ShellCommand::UpdateCartBadge(0),
            ShellCommand::LoadPage("order-complete".into()),
        ]
    );
    let snapshot = client.snapshot().await.unwrap();
    assert!(snapshot.cart.is_empty());
    assert_eq!(snapshot.checkout, CheckoutPhase::Finalizing);
    assert_eq!(harness.state.cart_badge, 0);
    assert_eq!(harness.state.current_page.as_deref(), Some("order-complete"));
    assert_eq!(harness.state.order_number, None);

    // Past the 100 ms settle delay: the order number appears and the
    // machine is idle again.
    at(150).await;
    harness.drain();
    assert!(harness.state.order_number.is_some());
    let snapshot = client.snapshot().await.unwrap();
    assert_eq!(snapshot.checkout, CheckoutPhase::Idle);

    storefront.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn paypal_checkout_takes_2500_ms_and_numbers_the_order() {
    let (storefront, mut harness) = boot_with_cart().await;
    let client = &storefront.client;

    client.submit(payment_form("paypal")).await.unwrap();
    let commands = harness.drain();
    assert_eq!(
        commands,
        vec![ShellCommand::SetSubmitButton {
            disabled: true,
            label: "Connecting to PayPal...".into(),
        }]
    );

    // The card delay would already have elapsed; PayPal has not.
    at(2400).await;
    let snapshot = client.snapshot().await.unwrap();
    assert_eq!(
        snapshot.checkout,
        CheckoutPhase::Submitting(PaymentMethod::PayPal)
    );
    assert_eq!(snapshot.cart.len(), 2);

    at(150).await;
    let snapshot = client.snapshot().await.unwrap();
    assert!(snapshot.cart.is_empty());

    at(150).await;
    harness.drain();
    let display = harness
        .state
        .order_number
        .clone()
        .expect("order number injected into confirmation view");

    // "#FP-NNNNN" with NNNNN in [10000, 99999].
    let digits = display
        .strip_prefix("#FP-")
        .expect("display is prefixed with #FP-");
    assert_eq!(digits.len(), 5);
    let n: u32 = digits.parse().expect("numeric order number");
    assert!((10_000..=99_999).contains(&n));

    storefront.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn repeat_submission_while_in_flight_is_dropped() {
    let (storefront, mut harness) = boot_with_cart().await;
    let client = &storefront.client;

    client.submit(payment_form("card")).await.unwrap();
    // The button is disabled, but a stray second submit event arrives anyway.
    let outcome = client.submit(payment_form("card")).await.unwrap();
    assert_eq!(outcome, DispatchOutcome::Handled);

    let lockouts = harness
        .drain()
        .into_iter()
        .filter(|c| matches!(c, ShellCommand::SetSubmitButton { .. }))
        .count();
    assert_eq!(lockouts, 1, "only the first submission locks the button");

    // Run the whole flow out; exactly one finalization happens.
    at(2000).await;
    let commands = harness.drain();
    let confirmations = commands
        .iter()
        .filter(|c| matches!(c, ShellCommand::LoadPage(p) if p == "order-complete"))
        .count();
    let injections = commands
        .iter()
        .filter(|c| matches!(c, ShellCommand::SetOrderNumber(_)))
        .count();
    assert_eq!(confirmations, 1);
    assert_eq!(injections, 1);

    let snapshot = client.snapshot().await.unwrap();
    assert_eq!(snapshot.checkout, CheckoutPhase::Idle);
    assert!(snapshot.cart.is_empty());

    storefront.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn shutdown_completes_while_a_submission_is_in_flight() {
    let (storefront, mut harness) = boot_with_cart().await;

    storefront.client.submit(payment_form("paypal")).await.unwrap();
    harness.drain();

    // The gateway timer is still pending, but it holds no strong handle to
    // the mailbox, so shutting down mid-submission terminates the actor
    // instead of waiting out the roundtrip.
    tokio::time::timeout(Duration::from_secs(2), storefront.shutdown())
        .await
        .expect("shutdown must not hang on an outstanding timer")
        .unwrap();

    // The orphaned timer fires into a closed mailbox; nothing renders.
    at(3000).await;
    assert!(harness.drain().is_empty());
}

#[tokio::test(start_paused = true)]
async fn submission_with_no_method_selected_stays_idle() {
    let (storefront, mut harness) = boot_with_cart().await;

    // No checked radio: the form serializes without a paymentMethod field.
    let outcome = storefront
        .client
        .submit(FormSubmission::new("payment-form").submit_label("Place order"))
        .await
        .unwrap();

    assert_eq!(outcome, DispatchOutcome::Handled);
    assert!(harness.drain().is_empty());
    let snapshot = storefront.client.snapshot().await.unwrap();
    assert_eq!(snapshot.checkout, CheckoutPhase::Idle);
    assert_eq!(snapshot.cart.len(), 2);

    storefront.shutdown().await.unwrap();
}
