//! Application services — the hub's use-cases.

pub mod hub_service;
