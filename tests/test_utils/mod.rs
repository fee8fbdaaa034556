//! Test Utilities
//!
//! Shared fixtures for the test binaries.
