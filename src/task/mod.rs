//! Task lifecycle management.
//!
//! Users register tasks, advance them through a fixed lifecycle
//! (not started, in progress, done), and delete them once done. Every
//! creation and status change is recorded as an append-only log entry. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Record store contracts in [`ports`]
//! - Store implementations in [`adapters`]
//! - Orchestration services in [`services`]
//! - Listing display helpers in [`presentation`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod presentation;
pub mod services;

#[cfg(test)]
mod tests;
