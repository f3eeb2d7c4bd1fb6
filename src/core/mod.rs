//! # Core Domain Logic
//!
//! Everything in this module is synchronous and UI-free: the resource
//! records, the filter criteria, and the pure matching engine. The TUI
//! adapter and the retrieval layer both depend on it; it depends on
//! neither.
//!
//! ```text
//!   retrieval (async fetch)          tui (ratatui adapter)
//!            \                         /
//!             ▼                       ▼
//!            ┌─────────────────────────┐
//!            │          CORE           │
//!            │  Resource, FilterState  │
//!            │  filter()  — pure       │
//!            │  config resolution      │
//!            └─────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`resource`]: the `Resource` record and feed decoding
//! - [`filter`]: filter criteria and the matching engine
//! - [`config`]: `~/.signpost/config.toml` loading and resolution

pub mod config;
pub mod filter;
pub mod resource;
