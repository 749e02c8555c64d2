//! # Roster Architecture
//!
//! Roster is a **UI-agnostic record-keeping library** with a thin CLI
//! client on top. The library is the product; the binary is one consumer
//! of it.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation, pure logic                     │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core + Storage (roster.rs, model.rs, store/)               │
//! │  - Keyed record store with validation                       │
//! │  - Abstract StudentStore trait                              │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, core, storage), code takes plain
//! Rust arguments, returns plain Rust types (`Result<CmdResult>`), and
//! never touches stdout/stderr, calls `std::process::exit`, or assumes a
//! terminal. The same core could serve a REST API, a TUI, or any other
//! frontend.
//!
//! ## Persistence Model
//!
//! The roster keeps its full record set in memory, keyed by student ID, and
//! rewrites the backing JSON file after every successful mutation. Loading is
//! all-or-nothing: a malformed file or an invalid record abandons the load
//! and starts the roster empty, with a diagnostic for the caller to surface.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: One module per operation (add, get, list, update, delete,
//!   stats, passwd)
//! - [`roster`]: The record store core (keyed map + persistence lifecycle)
//! - [`model`]: The `Student` record and its validation rules
//! - [`store`]: Storage abstraction and implementations
//! - [`passgen`]: Secure password generation, independent of the store
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `args`/`main.rs`: Argument parsing and terminal rendering for the
//!   binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod passgen;
pub mod roster;
pub mod store;
