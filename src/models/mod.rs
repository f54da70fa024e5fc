//! Data models for the Coinbase Pro API.
//!
//! - [`primitives`] - Identifier newtypes, pairs, currencies, environments
//! - [`enums`] - Order types, sides and funding methods
//! - [`payment_method`] - Linked funding sources and their limits
//! - [`deposit`] - Deposit requests and receipts
//! - [`order`] - Market orders, settlement records and fill reports

pub mod primitives;
pub mod enums;
pub mod payment_method;
pub mod deposit;
pub mod order;

pub use primitives::*;
pub use enums::*;
pub use payment_method::*;
pub use deposit::*;
pub use order::*;
