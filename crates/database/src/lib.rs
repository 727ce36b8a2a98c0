//! # Election Database Crate
//!
//! This crate is the data access layer for the election API. It owns every
//! SQL statement the system issues and hides the SQLite specifics from the
//! HTTP layer.
//!
//! ## Architectural Principles
//!
//! - **One repository per resource:** `CandidateRepository`, `VoterRepository`
//!   and `PartyRepository` each wrap a clone of the same connection pool. The
//!   pool is constructed once at startup and handed in; nothing here reaches
//!   for global state.
//! - **Parameterized statements only:** caller-supplied values are always
//!   bound, never spliced into query text.
//! - **Explicit outcomes:** inserts return an `InsertOutcome` carrying the
//!   generated id, updates and deletes return a `WriteOutcome` carrying the
//!   number of rows touched. A lookup that matches nothing is `Ok(None)`, not
//!   an error.
//!
//! ## Public API
//!
//! - `connect`: builds the SQLite connection pool from `DatabaseSettings`.
//! - `run_migrations`: applies the embedded schema migrations.
//! - `seed`: loads the bundled reference data set.
//! - `DbRepository`: bundles the three resource repositories.
//! - `DbError`: the error type returned from this crate.
//! - `SqlitePool`: re-exported so callers can hold the pool without depending on `sqlx`.

// Declare the modules that constitute this crate.
pub mod candidates;
pub mod connection;
pub mod error;
pub mod outcome;
pub mod parties;
pub mod repository;
pub mod voters;

// Re-export the key components to create a clean, public-facing API.
pub use candidates::CandidateRepository;
pub use connection::{connect, run_migrations, seed};
pub use error::DbError;
pub use outcome::{InsertOutcome, WriteOutcome};
pub use parties::PartyRepository;
pub use repository::DbRepository;
pub use sqlx::sqlite::SqlitePool;
pub use voters::VoterRepository;
