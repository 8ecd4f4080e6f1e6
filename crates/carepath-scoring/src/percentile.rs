//! Approximate percentile rank of a standardized score under a normal
//! distribution with mean 50 and SD 10.

const A1: f64 = 0.254829592;
const A2: f64 = -0.284496736;
const A3: f64 = 1.421413741;
const A4: f64 = -1.453152027;
const A5: f64 = 1.061405429;
const P: f64 = 0.3275911;

/// Gauss error function, Abramowitz & Stegun 7.1.26.
///
/// Absolute error is below 1.5e-7 over the whole real line.
pub fn erf(x: f64) -> f64 {
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();
    let t = 1.0 / (1.0 + P * x);
    let poly = ((((A5 * t + A4) * t + A3) * t + A2) * t + A1) * t;
    sign * (1.0 - poly * (-x * x).exp())
}

/// Percentile (0–100) of standardized score `t`; `None` when `t` is missing
/// or not finite.
pub fn percentile(t: Option<f64>) -> Option<u8> {
    let t = t.filter(|t| t.is_finite())?;
    let z = (t - 50.0) / 10.0;
    let p = (100.0 * 0.5 * (1.0 + erf(z / std::f64::consts::SQRT_2))).round();
    Some(p.clamp(0.0, 100.0) as u8)
}
