//! Demo walkthrough: browse, fill a cart, log in, and pay with PayPal.
//!
//! The "page shell" here is a task that logs every rendering command, and
//! the authenticator accepts anyone. Run with `RUST_LOG=info cargo run` to
//! watch the dispatch flow, or `RUST_LOG=debug` to see each rule match.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, Instrument};

use fashionpoint::auth::Authenticator;
use fashionpoint::dispatch::{Element, FieldChange, FormSubmission, Target};
use fashionpoint::lifecycle::{setup_tracing, PageLayout, Storefront};
use fashionpoint::model::{StateStore, UserProfile};
use fashionpoint::shell;

/// Demo stand-in for the login backend: accepts any credentials.
struct AcceptAll;

#[async_trait]
impl Authenticator for AcceptAll {
    async fn login(&self, credentials: &HashMap<String, String>) -> Option<UserProfile> {
        let email = credentials.get("email").cloned().unwrap_or_default();
        let name = email.split('@').next().unwrap_or("shopper").to_string();
        Some(UserProfile::new(name, email))
    }
}

fn add_to_cart_click(product_id: &str) -> Target {
    Target::new(
        Element::new()
            .class("add-to-cart-btn")
            .attr("data-product-id", product_id),
    )
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    info!("Starting storefront demo");

    let (shell_client, mut shell_receiver) = shell::channel(64);
    tokio::spawn(async move {
        while let Some(command) = shell_receiver.recv().await {
            info!(?command, "shell");
        }
    });

    let storefront = Storefront::start(
        PageLayout::default(),
        StateStore::new(),
        shell_client,
        Arc::new(AcceptAll),
    )
    .await?;
    let client = &storefront.client;

    // Browse to the catalog and fill the cart.
    let span = tracing::info_span!("shopping");
    async {
        client
            .click(Target::new(Element::new().attr("data-page", "catalog")))
            .await?;
        client.click(add_to_cart_click("classic-denim")).await?;
        client.click(add_to_cart_click("classic-denim")).await?;
        client.click(add_to_cart_click("linen-shirt")).await?;
        Ok::<_, Box<dyn std::error::Error>>(())
    }
    .instrument(span)
    .await?;

    // Log in.
    client
        .submit(
            FormSubmission::new("login-form")
                .field("email", "alice@example.com")
                .field("password", "secret"),
        )
        .await?;

    // Pay with PayPal.
    let span = tracing::info_span!("checkout");
    async {
        client
            .click(Target::new(Element::new().attr("data-page", "checkout")))
            .await?;
        client
            .change(FieldChange::new("paymentMethod", "paypal"))
            .await?;
        client
            .submit(
                FormSubmission::new("payment-form")
                    .field("paymentMethod", "paypal")
                    .submit_label("Place order"),
            )
            .await?;
        Ok::<_, Box<dyn std::error::Error>>(())
    }
    .instrument(span)
    .await?;

    // Let the simulated gateway roundtrip and the confirmation settle.
    tokio::time::sleep(std::time::Duration::from_millis(2700)).await;

    let snapshot = client.snapshot().await?;
    info!(
        cart_lines = snapshot.cart.len(),
        checkout = ?snapshot.checkout,
        "Order complete"
    );

    storefront.shutdown().await?;
    info!("Demo finished");
    Ok(())
}
