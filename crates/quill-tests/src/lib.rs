//! Integration tests for the Quill message subsystem
//!
//! These tests wire the pieces together the way a host would: log entries
//! resolving their text through a shared `StringHost`, and named
//! scriptblocks handed out across threads.
//!
//! # Test Structure
//!
//! - `resolution_test.rs` - entry resolution against a live string host
//! - `script_tracking_test.rs` - scriptblock usage telemetry under load

// This crate only contains tests, no library code
