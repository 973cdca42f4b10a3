//! `speedorz-core`: shared domain building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! typed identifiers, the domain error model, and the entity trait used by the
//! catalog and ordering crates.

pub mod entity;
pub mod error;
pub mod id;

pub use entity::{Entity, find_by_id};
pub use error::DomainError;
pub use id::{ClientId, DiscountId, OrderId, TaxId, UserId, VehicleId};
