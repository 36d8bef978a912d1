//! Pure data structures: cart, user profile, payment method, order number,
//! and the shared [`StateStore`].

pub mod cart;
pub mod order;
pub mod store;
pub mod user;

pub use cart::{Cart, CartItem};
pub use order::{OrderNumber, PaymentMethod};
pub use store::StateStore;
pub use user::UserProfile;
