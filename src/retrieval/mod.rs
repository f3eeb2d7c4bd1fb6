//! # Retrieval
//!
//! Turns an opaque source reference into a resource store, asynchronously.
//! Providers know transports; the [`loader::DataLoader`] knows the load
//! lifecycle and is the only place that decides whether a completed fetch
//! may touch the displayed store.

pub mod loader;
pub mod provider;
pub mod providers;

pub use loader::{DataLoader, LoadOutcome, LoadState};
pub use provider::{ResourceProvider, RetrievalError};
pub use providers::{FileProvider, HttpProvider};
