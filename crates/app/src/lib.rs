//! # homehub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **`StateStore` port** that the storage adapter implements:
//!   the registry/bindings/last-operated contract every hub operation is
//!   built on
//! - Define the **use-cases** as the [`HomeHubService`]: register an
//!   appliance, bind a remote slot, operate an appliance, undo the last
//!   operation, list bound slots
//! - Render **user-facing text** through the locale-aware message catalog
//! - Pair refusals with their rendered detail as [`Rejection`] values
//!
//! ## Dependency rule
//! Depends on `homehub-domain` only (plus `tokio::sync` for the store
//! lock). Never imports adapter crates. Adapters depend on *this* crate,
//! not the reverse.
//!
//! [`HomeHubService`]: services::hub_service::HomeHubService
//! [`Rejection`]: error::Rejection

pub mod error;
pub mod messages;
pub mod ports;
pub mod response;
pub mod services;
