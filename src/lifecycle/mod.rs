//! Orchestration: startup validation, actor spawn and wiring, boot render,
//! graceful shutdown, and tracing setup.

pub mod storefront;
pub mod tracing;

pub use storefront::{PageLayout, Storefront};
pub use tracing::setup_tracing;
