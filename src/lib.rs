//! Taskapp: a small task tracker with an append-only status log.
//!
//! Users register tasks, advance each task through a strictly linear
//! lifecycle, and delete tasks once they are done. Every creation and
//! status change is recorded in a log that is kept consistent with the
//! task's current state.
//!
//! # Architecture
//!
//! Taskapp follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract record store interfaces
//! - **Adapters**: In-memory and delimited-file record stores
//!
//! # Modules
//!
//! - [`task`]: Task lifecycle engine, record stores, and display helpers
//! - [`config`]: Location and layout of the delimited-file stores

pub mod config;
pub mod task;
