//! Reference data shown on the ordering screen.
//!
//! These are read models of resources owned by the backend (vehicles, discounts,
//! taxes, clients, users). Nothing here mutates them; the serde attributes pin the
//! JSON field names the backend uses.

pub mod adjustment;
pub mod party;
pub mod vehicle;

pub use adjustment::{Adjustment, Discount, Tax};
pub use party::{Client, User};
pub use vehicle::Vehicle;
