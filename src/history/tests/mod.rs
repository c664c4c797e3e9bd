//! Unit tests for the history component.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]
