//! # homehub-domain
//!
//! Pure domain model for the homehub remote-control service.
//!
//! ## Responsibilities
//! - Foundational types: string-backed identifiers, error conventions,
//!   timestamps
//! - Define **Appliances** (named records with an on/off status)
//! - Define the **status codes** a remote slot accepts (`0` = off, `1` = on)
//! - Define the **error taxonomy** for every way a hub operation can be
//!   refused
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod appliance;
pub mod error;
pub mod id;
pub mod time;
