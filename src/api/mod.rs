//! API service modules for Coinbase Pro endpoints.
//!
//! Each service covers one endpoint family. Replies are returned as raw
//! JSON; see [`crate::classify`] for how they are interpreted.

mod deposits;
mod orders;
mod payment_methods;

pub use deposits::DepositsService;
pub use orders::OrdersService;
pub use payment_methods::PaymentMethodsService;
