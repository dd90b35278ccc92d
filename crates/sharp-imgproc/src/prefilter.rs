//! Recursive conversion between samples and B-spline interpolation coefficients.
//!
//! The sampled B-spline kernel of odd degree is inverted by a cascade of
//! first-order causal and anti-causal IIR filters, one pair per pole, with
//! half-sample mirror boundaries handled through closed-form initial values.

/// Decay threshold `ln(1e-9)` used to truncate the causal initialization sum.
const LN_TOLERANCE: f64 = -20.7232658369464;

/// Poles of the recursive filter that inverts the sampled B-spline of `degree`.
///
/// Degree 3 and 5 use their closed-form poles; every other degree uses the
/// septic pole set.
///
/// # Example
///
/// ```
/// use sharp_imgproc::prefilter::spline_poles;
///
/// let poles = spline_poles(3);
/// assert_eq!(poles, vec![3f64.sqrt() - 2.0]);
/// assert_eq!(spline_poles(7).len(), 3);
/// ```
pub fn spline_poles(degree: usize) -> Vec<f64> {
    match degree {
        3 => vec![3f64.sqrt() - 2.0],
        5 => vec![
            (67.5 - 4436.25f64.sqrt()).sqrt() + 26.25f64.sqrt() - 6.5,
            (67.5 + 4436.25f64.sqrt()).sqrt() - 26.25f64.sqrt() - 6.5,
        ],
        _ => vec![
            -0.5352804307964382,
            -0.12255461519232669,
            -0.009148694809608277,
        ],
    }
}

/// Convert samples into B-spline interpolation coefficients in place.
///
/// # Arguments
///
/// * `c` - The samples on input, the coefficients on output.
/// * `poles` - The filter poles, see [`spline_poles`].
///
/// Sequences shorter than two samples are left untouched.
///
/// # Example
///
/// ```
/// use sharp_imgproc::prefilter::{spline_poles, to_coefficients, to_samples};
///
/// let samples = vec![1.0, 4.0, 2.0, 8.0, 5.0, 7.0];
/// let mut c = samples.clone();
/// to_coefficients(&mut c, &spline_poles(3));
/// to_samples(&mut c);
///
/// for (a, b) in c.iter().zip(samples.iter()) {
///     assert!((a - b).abs() < 1e-9);
/// }
/// ```
pub fn to_coefficients(c: &mut [f64], poles: &[f64]) {
    let n = c.len();
    if n < 2 {
        return;
    }

    let lambda = poles
        .iter()
        .fold(1.0, |acc, &z| acc * (1.0 - z) * (1.0 - 1.0 / z));

    c.iter_mut().for_each(|v| *v *= lambda);

    for &z in poles {
        // causal
        c[0] = initial_causal_coefficient(c, z);
        for i in 1..n {
            c[i] += z * c[i - 1];
        }

        // anti-causal
        c[n - 1] = initial_anti_causal_coefficient(c, z);
        for i in (0..n - 1).rev() {
            c[i] = z * (c[i + 1] - c[i]);
        }
    }
}

/// Convert cubic B-spline coefficients back into samples in place.
///
/// Applies the sampled cubic kernel `[1, 4, 1] / 6` with mirrored end taps.
pub fn to_samples(c: &mut [f64]) {
    let n = c.len();
    if n < 2 {
        return;
    }

    let mut prev = c[0];
    c[0] = (4.0 * c[0] + 2.0 * c[1]) / 6.0;
    for i in 1..n - 1 {
        let cur = c[i];
        c[i] = (4.0 * cur + prev + c[i + 1]) / 6.0;
        prev = cur;
    }
    c[n - 1] = (4.0 * c[n - 1] + 2.0 * prev) / 6.0;
}

fn initial_causal_coefficient(c: &[f64], z: f64) -> f64 {
    let n = c.len();
    let horizon = (2 + (LN_TOLERANCE / z.abs().ln()) as usize).min(n);

    let mut z1 = z;
    let mut zn = z.powi(n as i32 - 1);
    let mut sum = c[0] + zn * c[n - 1];
    zn *= zn;

    for &v in c.iter().take(horizon.saturating_sub(1)).skip(1) {
        zn /= z;
        sum += (z1 + zn) * v;
        z1 *= z;
    }

    sum / (1.0 - z.powi(2 * n as i32 - 2))
}

fn initial_anti_causal_coefficient(c: &[f64], z: f64) -> f64 {
    let n = c.len();
    (z * c[n - 2] + c[n - 1]) * z / (z * z - 1.0)
}
