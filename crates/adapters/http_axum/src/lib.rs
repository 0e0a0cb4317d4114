//! # homehub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **remote-control API** under `/home-hub`: register
//!   appliances, bind remote slots, operate appliances, undo the last
//!   operation, list bound slots
//! - Map HTTP requests into hub service calls (driving adapter)
//! - Map hub results into HTTP responses: JSON confirmations on success,
//!   the structured `{status, timestamp, message, detail}` body on refusal
//!
//! ## Dependency rule
//! Depends on `homehub-app` (for the service and the `StateStore` port)
//! and `homehub-domain` (for identifiers used in request mapping). Never
//! leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
