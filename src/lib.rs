//! Compliance and performance assessment engine for municipal EU grant drafts.
//!
//! The engine is a pure, deterministic scorer: a draft [`assessment::ProjectRecord`]
//! goes in, derived results come out, and nothing is mutated or persisted. The
//! HTTP and CLI surfaces in `main.rs` are thin wrappers over the four entry
//! points re-exported from [`assessment`].

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
