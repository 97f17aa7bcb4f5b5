//! # nsmeta Architecture
//!
//! nsmeta answers read-only questions about a local export of NetSuite
//! metadata: which records exist, what fields they carry, where a field is
//! defined, and what a simple SuiteQL `SELECT` over a record would look like.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints JSON, owns exit codes           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Resolves the environment, dispatches to commands         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One query per module, returns plain documents            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - MetadataStore trait                                      │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout/stderr or exits the
//! process. Every error travels up as [`error::MetadataError`] to the single
//! boundary in the CLI.
//!
//! Every invocation reads from disk afresh. There is no cache and the store
//! is never written.
//!
//! ## Module Overview
//!
//! - [`api`]: facade over the commands
//! - [`commands`]: list-records, get-record, list-fields, find-field, suggest-suiteql
//! - [`store`]: storage abstraction and implementations
//! - [`model`]: index, record definition, and marker documents
//! - [`env`]: active environment resolution
//! - [`config`]: base directory and file layout
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod env;
pub mod error;
pub mod model;
pub mod store;
