//! # FashionPoint Storefront Core
//!
//! > **The event-dispatch and checkout engine of a simulated storefront.**
//!
//! This crate is the interactive core of a client-side shop front end: one
//! delegated dispatcher interprets every click, change, and form submission
//! on the page, routes it to the right state mutation, and drives the
//! multi-step checkout-to-confirmation sequence. There is no server and no
//! real payment gateway - both payment paths are simulated with timers.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Why an actor?
//!
//! A browser page is already an actor in disguise: a single-threaded event
//! loop where handlers run to completion against shared mutable state. This
//! crate makes that explicit. One Tokio task owns the cart and the user
//! session, drains a mailbox of UI events sequentially, and needs no locks.
//! Simulated network latency is a timer task that posts a message back into
//! the same mailbox, so asynchronous effects serialize with ordinary events
//! and tests can drive them deterministically with Tokio's paused clock.
//!
//! ### Dispatch as data
//!
//! The delegated listeners are ordered rule tables
//! ([`RuleSet`](dispatch::RuleSet)): named `(predicate, action)` pairs
//! evaluated in priority order, first match wins. Adding a control to the
//! page means adding one rule, not wiring a listener.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`dispatch`])
//! DOM-free event model ([`Target`](dispatch::Target) with ancestor-chain
//! `closest` matching, field changes, form submissions) and the generic
//! first-match rule table.
//!
//! ### 2. The Data ([`model`])
//! Cart with its one-line-per-product invariant, user profile, payment
//! method, order number, and the injectable
//! [`StateStore`](model::StateStore).
//!
//! ### 3. The Actor ([`storefront_actor`])
//! The classification tables, the checkout state machine
//! (`Idle → Submitting → Finalizing → Idle` with method-specific simulated
//! gateway delays), and the run loop that owns all mutable state.
//!
//! ### 4. The Collaborators ([`shell`], [`auth`])
//! Rendering goes out as fire-and-forget
//! [`ShellCommand`](shell::ShellCommand)s; credential checking comes in
//! through the [`Authenticator`](auth::Authenticator) trait. Both ship test
//! doubles ([`shell::mock::ShellHarness`], [`auth::mock::MockAuth`]).
//!
//! ### 5. The Interface ([`clients`])
//! [`StorefrontClient`](clients::StorefrontClient) hides the message passing
//! behind typed `click` / `change` / `submit` / `snapshot` calls.
//!
//! ### 6. The Orchestrator ([`lifecycle`])
//! [`Storefront::start`](lifecycle::Storefront::start) validates the page
//! layout (a missing main region aborts initialization), spawns the actor,
//! and performs the boot render; `shutdown` drains and joins.
//!
//! ## 🚀 Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```
//!
//! ## 🧪 Testing
//!
//! ```bash
//! cargo test
//! ```
//!
//! Checkout timing tests run under `#[tokio::test(start_paused = true)]`, so
//! the 2500 ms simulated PayPal roundtrip elapses in microseconds of real
//! time while remaining observable at every intermediate instant.

pub mod auth;
pub mod clients;
pub mod dispatch;
pub mod lifecycle;
pub mod model;
pub mod shell;
pub mod storefront_actor;
