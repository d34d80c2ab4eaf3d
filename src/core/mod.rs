//! Core types shared across the crate.
//!
//! Currently this is the error type: every fallible operation in the crate
//! surfaces a [`ProcpathError`] (wrapped in [`anyhow::Error`] at the public
//! API) so callers can match on the precise failure mode.

pub mod error;

pub use error::ProcpathError;
