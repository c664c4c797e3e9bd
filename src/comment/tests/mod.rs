//! Unit tests for the comment component.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]
