use crate::error::TableError;

/// How cosine-magnitudes below this are treated: the tangent at such an
/// angle is reported as undefined rather than a huge number.
pub const SINGULAR_COS_EPSILON: f64 = 1e-10;
/// Slack added to the range end so that floating accumulation does not drop
/// the final boundary row.
pub const END_SLACK: f64 = 1e-12;
/// The smallest step a range request may use. Together with [`MAX_ROWS`]
/// this guarantees that every range request terminates.
pub const MIN_STEP: f64 = 1e-6;
/// The maximum number of rows a single request may produce.
pub const MAX_ROWS: usize = 100_000;

/// The unit an angle is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleUnit {
    /// Degrees (a full turn is 360).
    Degrees,
    /// Radians (a full turn is 2π).
    Radians,
}

/// A request for a trigonometric value table.
///
/// A request is constructed from user input, validated, consumed once to
/// produce an ordered sequence of [`TrigRow`], and discarded — no state is
/// retained between invocations, and the same request always yields the
/// same rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrigRequest {
    /// Emit a row every `step` from `start` to `end` inclusive, all in the
    /// chosen unit.
    Range {
        /// First angle of the table.
        start: f64,
        /// Last angle of the table (inclusive, up to float slack).
        end:   f64,
        /// Distance between consecutive angles; at least [`MIN_STEP`].
        step:  f64,
    },
    /// Emit exactly one row for the given angle.
    Point {
        /// The angle, in the chosen unit.
        theta: f64,
    },
}

/// One row of a trigonometric value table.
///
/// The angle is carried in both units; `tan` is `None` when the cosine is
/// numerically too close to zero for the tangent to be meaningful (the
/// caller should render such cells blank, with a caption explaining that
/// the value diverges).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrigRow {
    /// The angle in degrees.
    pub angle_deg: f64,
    /// The angle in radians.
    pub angle_rad: f64,
    /// Sine of the angle.
    pub sin:       f64,
    /// Cosine of the angle.
    pub cos:       f64,
    /// Tangent of the angle, or `None` at a singularity.
    pub tan:       Option<f64>,
}

/// Generates a trigonometric value table.
///
/// Range requests emit rows at `start`, `start + step`, … while the
/// running angle stays within `end + END_SLACK`; point requests emit
/// exactly one row. The table is materialized eagerly — the range is
/// bounded, so there is nothing to stream.
///
/// # Parameters
/// - `request`: The validated-on-entry range or point request.
/// - `unit`: The unit the request's angles are expressed in.
///
/// # Returns
/// The ordered rows of the table.
///
/// # Errors
/// - [`TableError::EndBeforeStart`] if `end < start`.
/// - [`TableError::StepTooSmall`] if `step` is below [`MIN_STEP`] or NaN.
/// - [`TableError::TooManyRows`] if the range would exceed [`MAX_ROWS`].
///
/// # Example
/// ```
/// use numbox::trig::{AngleUnit, TrigRequest, generate};
///
/// let request = TrigRequest::Range { start: 0.0,
///                                    end:   90.0,
///                                    step:  45.0, };
/// let rows = generate(&request, AngleUnit::Degrees).unwrap();
///
/// assert_eq!(rows.len(), 3);
/// assert_eq!(rows[2].angle_deg, 90.0);
/// // cos(90°) is numerically ~0, so the tangent is singular.
/// assert!(rows[2].tan.is_none());
/// ```
pub fn generate(request: &TrigRequest, unit: AngleUnit) -> Result<Vec<TrigRow>, TableError> {
    match *request {
        TrigRequest::Point { theta } => Ok(vec![row_at(theta, unit)]),
        TrigRequest::Range { start, end, step } => {
            if end < start {
                return Err(TableError::EndBeforeStart { start, end });
            }
            if !(step >= MIN_STEP) {
                return Err(TableError::StepTooSmall { step,
                                                      minimum: MIN_STEP, });
            }
            #[allow(clippy::cast_precision_loss)]
            if (end - start) / step > MAX_ROWS as f64 {
                return Err(TableError::TooManyRows { limit: MAX_ROWS });
            }

            let mut rows = Vec::new();
            let mut current = start;
            while current <= end + END_SLACK {
                rows.push(row_at(current, unit));
                current += step;
            }
            Ok(rows)
        },
    }
}

/// Builds the table row for a single angle.
///
/// The angle is converted to the other unit for display; the tangent is
/// suppressed when `|cos|` is below [`SINGULAR_COS_EPSILON`].
fn row_at(angle: f64, unit: AngleUnit) -> TrigRow {
    let (angle_deg, angle_rad) = match unit {
        AngleUnit::Degrees => (angle, angle.to_radians()),
        AngleUnit::Radians => (angle.to_degrees(), angle),
    };

    let sin = angle_rad.sin();
    let cos = angle_rad.cos();
    let tan = if cos.abs() < SINGULAR_COS_EPSILON {
        None
    } else {
        Some(angle_rad.tan())
    };

    TrigRow { angle_deg,
              angle_rad,
              sin,
              cos,
              tan }
}
