//! `speedorz-desktop`
//!
//! **Responsibility:** client side of the purchase-order screen.
//!
//! This crate provides:
//! - A typed HTTP client for the dealership API (bearer token from an injected
//!   credential provider)
//! - The line-item source: reference lists (discounts, taxes, promotional
//!   vehicles) and capture of the operator's rows into order lines
//! - The order coordinator: owns the order draft, submits it, reports the outcome
//! - The workflow root tying both together through an event bus
//!
//! The backend remains the authority on prices, totals and stock; nothing here
//! computes them.

pub mod api;
pub mod client;
pub mod config;
pub mod coordinator;
pub mod credentials;
pub mod line_items;
pub mod reference;
pub mod sheet;
pub mod workflow;

#[cfg(test)]
pub(crate) mod fake_api;

pub use api::{ApiError, OrderingApi};
pub use client::ApiClient;
pub use config::{ClientConfig, ConfigError, Environment};
pub use coordinator::{Notice, OrderCoordinator};
pub use credentials::{Anonymous, CredentialProvider, SessionToken, StaticToken};
pub use line_items::{LineItemSource, RefreshHandle};
pub use reference::ReferenceList;
pub use sheet::{OrderSheet, SheetRow};
pub use workflow::OrderWorkflow;
