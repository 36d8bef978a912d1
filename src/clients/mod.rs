//! Type-safe wrappers around the storefront mailbox.

pub mod storefront_client;

pub use storefront_client::StorefrontClient;
