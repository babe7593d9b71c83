/// Safe numeric conversion helpers.
///
/// This module provides checked conversions between `i64` and `f64` that are
/// used by the evaluator to move between integer and real arithmetic without
/// silent precision loss.
pub mod num;
