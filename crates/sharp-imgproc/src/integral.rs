/// Integrate a sequence in place with boundary-mean removal.
///
/// Each pass removes the half-sample-symmetric mean of the sequence and replaces it
/// by a primitive built from a causal running sum followed by an anti-causal one.
/// Order 2 runs one pass, order 4 runs two.
///
/// # Arguments
///
/// * `c` - The sequence to integrate, at least two samples long.
/// * `order` - The integration order, 2 or 4.
///
/// # Returns
///
/// The mean removed by the first pass. Adding it back after [`differentiate`]
/// restores the original sequence.
///
/// # Example
///
/// ```
/// use sharp_imgproc::integral::{differentiate, integrate};
///
/// let v = vec![3.0, 7.0, -2.0, 5.5, 10.0];
/// let mut c = v.clone();
///
/// let mean = integrate(&mut c, 4);
/// differentiate(&mut c, 4);
///
/// for (a, b) in c.iter().zip(v.iter()) {
///     assert!((a + mean - b).abs() < 1e-9);
/// }
/// ```
pub fn integrate(c: &mut [f64], order: usize) -> f64 {
    debug_assert!(order == 2 || order == 4, "unsupported order {order}");

    if c.len() < 2 {
        let mean = c.first().copied().unwrap_or(0.0);
        c.iter_mut().for_each(|v| *v = 0.0);
        return mean;
    }

    let mean = integrate_pass(c);
    for _ in 1..order / 2 {
        integrate_pass(c);
    }
    mean
}

/// Differentiate a sequence in place, inverting [`integrate`] of the same order.
///
/// Sequences shorter than two samples are left untouched.
pub fn differentiate(c: &mut [f64], order: usize) {
    debug_assert!(order == 2 || order == 4, "unsupported order {order}");

    if c.len() < 2 {
        return;
    }

    for _ in 0..order / 2 {
        differentiate_pass(c);
    }
}

fn integrate_pass(c: &mut [f64]) -> f64 {
    let n = c.len();
    let mean = (2.0 * c.iter().sum::<f64>() - c[n - 1] - c[0]) / (2 * n - 2) as f64;

    // causal running sum, symmetric at the origin
    c[0] = (c[0] - mean) * 0.5;
    for i in 1..n {
        c[i] = (c[i] - mean) + c[i - 1];
    }

    // anti-causal running sum over the previous values
    let mut prev = c[1];
    c[1] = 0.0;
    for i in 2..n {
        let cur = c[i];
        c[i] = c[i - 1] - prev;
        prev = cur;
    }

    mean
}

fn differentiate_pass(c: &mut [f64]) {
    let n = c.len();

    let old = c[n - 2];
    for i in 0..n - 1 {
        c[i] -= c[i + 1];
    }
    c[n - 1] -= old;

    for i in (1..n).rev() {
        c[i] -= c[i - 1];
    }
    c[0] *= 2.0;
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_integrate_ramp() {
        let mut c = vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        let mean = integrate(&mut c, 2);

        assert_eq!(mean, 2.5);
        assert_eq!(c, vec![-1.25, 0.0, 2.75, 6.0, 8.75, 10.0]);
    }

    #[test]
    fn test_integrate_constant() {
        for order in [2, 4] {
            let mut c = vec![5.0; 6];
            let mean = integrate(&mut c, order);
            assert_eq!(mean, 5.0);
            assert!(c.iter().all(|&v| v == 0.0));
        }
    }

    #[test]
    fn test_inverse_pair() {
        let v = vec![3.0, 7.0, -2.0, 5.5, 10.0, 0.0, 4.0, 8.0, 1.0, 2.0];
        for order in [2, 4] {
            let mut c = v.clone();
            let mean = integrate(&mut c, order);
            assert_eq!(mean, 4.0);

            differentiate(&mut c, order);
            for (a, b) in c.iter().zip(v.iter()) {
                assert_abs_diff_eq!(a + mean, b, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_two_samples() {
        let mut c = vec![3.0, 7.0];
        let mean = integrate(&mut c, 4);
        assert_eq!(mean, 5.0);
        assert_eq!(c, vec![-0.25, 0.0]);

        differentiate(&mut c, 4);
        assert_eq!(c, vec![-2.0, 2.0]);
    }

    #[test]
    fn test_short_sequences() {
        let mut c = vec![9.0];
        assert_eq!(integrate(&mut c, 2), 9.0);
        assert_eq!(c, vec![0.0]);
        differentiate(&mut c, 2);
        assert_eq!(c, vec![0.0]);

        let mut empty: Vec<f64> = vec![];
        assert_eq!(integrate(&mut empty, 4), 0.0);
    }
}
