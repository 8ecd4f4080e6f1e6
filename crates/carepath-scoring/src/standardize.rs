use crate::config::ReferenceStats;

/// Standardized points per reference standard deviation.
pub const POINTS_PER_SD: f64 = 16.67;

/// Standardized score of a mean exactly at the reference mean.
pub const CENTER: f64 = 50.0;

/// Convert a domain mean into a T-like standardized score.
///
/// `round(z * 16.67 + 50)`, rounding half away from zero.
pub fn standardize(mean: Option<f64>, reference: &ReferenceStats) -> Option<i32> {
    let mean = mean.filter(|m| m.is_finite())?;
    let z = (mean - reference.mean) / reference.sd;
    let score = (z * POINTS_PER_SD + CENTER).round();
    score.is_finite().then_some(score as i32)
}
