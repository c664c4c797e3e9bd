//! Unit tests for the report component.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]
#![expect(
    clippy::float_cmp,
    reason = "Report averages are produced by a fixed rounding rule, so exact comparison is intended"
)]
