//! Adapter implementations for the task record store ports.
//!
//! - [`memory`]: thread-safe in-memory stores for tests and embedding
//! - [`delimited`]: line-oriented delimited text files, one per record kind

pub mod delimited;
pub mod memory;
