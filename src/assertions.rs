//! Numeric assertions that record failures instead of panicking

use crate::context::{Failure, Outcome, TestContext};

/// Record a failure unless `actual` lies in `[expected - tolerance, expected + tolerance]`.
///
/// Both bounds are inclusive. NaN on either side, or a negative tolerance,
/// always fails.
#[track_caller]
pub fn assert_float_near<C>(ctx: &C, expected: f64, actual: f64, tolerance: f64)
where
    C: TestContext + ?Sized,
{
    let within = actual >= expected - tolerance && actual <= expected + tolerance;
    if !within {
        ctx.fail(
            Outcome::Record,
            Failure::here(format!(
                "expected {} ± {}, got {}",
                expected, tolerance, actual
            )),
        );
    }
}

/// Record a failure if `expected != actual`
#[track_caller]
pub fn assert_int_equal<C>(ctx: &C, expected: i64, actual: i64)
where
    C: TestContext + ?Sized,
{
    if expected != actual {
        ctx.fail(
            Outcome::Record,
            Failure::here(format!("expected {}, got {}", expected, actual)),
        );
    }
}
