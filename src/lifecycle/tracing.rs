//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate
//! for the whole storefront.
//!
//! ## Configuration
//!
//! Log levels come from the `RUST_LOG` environment variable. The compact
//! format hides module paths (`with_target(false)`) since log lines already
//! carry structured fields naming what they describe.
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run
//!
//! # Full event payloads at dispatch points
//! RUST_LOG=debug cargo run
//!
//! # Filter to the dispatcher only
//! RUST_LOG=fashionpoint::storefront_actor=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Dispatcher lifecycle**: startup, shutdown, and final cart size.
//! - **Rule matching**: which dispatch rule claimed an event (`debug`).
//! - **State mutations**: cart changes, login/logout, profile updates.
//! - **Checkout**: submission, lockout of repeat submissions, gateway
//!   completion, finalization with the generated order number.
//!
//! With `RUST_LOG=info` a card checkout looks like:
//!
//! ```text
//! INFO Added to cart product_id="sku-1" badge=1
//! INFO Payment submitted method="card"
//! INFO Payment accepted, finalizing method="card" order=FP-48213
//! ```
//!
//! `RUST_LOG=debug` additionally shows each rule match and the full
//! classified action (`?action` records its `Debug` representation as a
//! structured field).
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Structured fields name the subject already
        .compact()
        .init();
}
