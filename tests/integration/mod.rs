//! Integration test suite for procpath
//!
//! End-to-end tests that drive the public API the way an orchestrating
//! build-tool caller would: iterate a project's configured plugins, filter
//! with the matcher, and extract processor path artifacts from the match.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```

mod compiler_pipeline;
