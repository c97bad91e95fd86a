//! Unit tests for ringbuffer modules
//!
//! These tests exercise the public API the way a host crate would.

mod test_config;
