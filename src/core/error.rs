//! Error handling for procpath.
//!
//! The crate uses a small strongly-typed error enum, [`ProcpathError`], for
//! the failure modes it owns, and [`anyhow::Result`] at the public API so
//! resolver-originated errors flow through unchanged. Every failure is raised
//! synchronously to the immediate caller; nothing is caught, logged, or
//! retried internally, and no partial result is ever returned.
//!
//! # Error Categories
//!
//! - [`ProcpathError::MissingArgument`] - a required reference input was not
//!   supplied (absent `plugin` or `resolver` parameter).
//! - [`ProcpathError::NotCompilerPlugin`] - extraction was invoked on a plugin
//!   that is not the Maven compiler plugin. Callers are expected to filter
//!   with [`crate::compiler::is_compiler_plugin`] first; extraction
//!   re-validates and rejects rather than silently returning nothing.
//! - [`ProcpathError::UnsupportedConfiguration`] - the plugin carries a
//!   configuration payload of a shape this crate does not recognize. Unknown
//!   shapes are rejected explicitly instead of being best-effort parsed.
//!
//! # Example
//!
//! ```rust
//! use procpath::compiler::is_compiler_plugin;
//! use procpath::core::ProcpathError;
//!
//! let err = is_compiler_plugin(None).unwrap_err();
//! match err.downcast_ref::<ProcpathError>() {
//!     Some(ProcpathError::MissingArgument { name }) => assert_eq!(*name, "plugin"),
//!     _ => panic!("expected a missing-argument error"),
//! }
//! ```

use thiserror::Error;

/// The error type for all failures originating in this crate.
///
/// Resolver-originated errors are not represented here; they propagate
/// through the public API as-is inside [`anyhow::Error`].
#[derive(Error, Debug)]
pub enum ProcpathError {
    /// A required reference input was not supplied.
    ///
    /// Raised when the `plugin` or `resolver` parameter of a public operation
    /// is absent. These are caller errors, never transient conditions.
    #[error("required argument '{name}' was not provided")]
    MissingArgument {
        /// Name of the missing parameter ("plugin" or "resolver").
        name: &'static str,
    },

    /// Extraction was invoked on a plugin other than the Maven compiler plugin.
    ///
    /// The offending plugin's coordinates are carried for diagnosis.
    #[error("plugin '{group_id}:{artifact_id}:{version}' is not the Maven compiler plugin")]
    NotCompilerPlugin {
        /// Group identifier of the rejected plugin.
        group_id: String,
        /// Artifact identifier of the rejected plugin.
        artifact_id: String,
        /// Version of the rejected plugin.
        version: String,
    },

    /// The plugin configuration payload has a shape this crate does not
    /// understand.
    ///
    /// An absent configuration is fine (no processor paths); a present payload
    /// that is not the recognized tree shape is rejected.
    #[error("unsupported configuration payload of type '{payload_type}'")]
    UnsupportedConfiguration {
        /// Description of the unrecognized payload shape (e.g. "string").
        payload_type: String,
    },
}
