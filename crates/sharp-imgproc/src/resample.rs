use sharp_image::ImageError;

use crate::integral::{differentiate, integrate};
use crate::kernel_table::AxisKernelTable;
use crate::prefilter::{spline_poles, to_coefficients, to_samples};

/// Degree of the spline model of the input and output samples.
const CUBIC: usize = 3;

/// Map an index of the extended sequence back into `0..len`.
///
/// The sequence is extended by half-sample mirroring with period `2 * len - 2`,
/// so the edge samples are not repeated: for `len = 5` the indices `5, 6, 7, 8`
/// map to `3, 2, 1, 0`.
///
/// # Example
///
/// ```
/// use sharp_imgproc::resample::mirror_index;
///
/// let folded = (0..12).map(|l| mirror_index(l, 5)).collect::<Vec<_>>();
/// assert_eq!(folded, vec![0, 1, 2, 3, 4, 3, 2, 1, 0, 1, 2, 3]);
/// ```
pub fn mirror_index(l: usize, len: usize) -> usize {
    if len < 2 {
        return 0;
    }

    let period = 2 * len - 2;
    let mut folded = l;
    if l >= period {
        // magnitude of the remainder rounded to the nearest multiple of the period
        let r = l % period;
        folded = r.min(period - r);
    }
    if folded >= len {
        folded = period - folded;
    }
    folded
}

/// Resamples 1D vectors along one axis.
///
/// The resampler borrows the axis table and owns the scratch buffers, so one
/// instance is reused for every row (or column) of a pass.
pub struct AxisResampler<'a> {
    table: &'a AxisKernelTable,
    cubic_poles: Vec<f64>,
    correction_poles: Vec<f64>,
    coefficients: Vec<f64>,
    extended: Vec<f64>,
    convolved: Vec<f64>,
}

impl<'a> AxisResampler<'a> {
    /// Create a resampler for the given axis table.
    pub fn new(table: &'a AxisKernelTable) -> Self {
        Self {
            table,
            cubic_poles: spline_poles(CUBIC),
            correction_poles: spline_poles(table.kernel().degree()),
            coefficients: vec![0.0; table.input_len()],
            extended: vec![0.0; table.extended_input_len()],
            convolved: vec![0.0; table.extended_output_len()],
        }
    }

    /// The axis table this resampler applies.
    pub fn table(&self) -> &AxisKernelTable {
        self.table
    }

    /// Resample `src` into `dst`.
    ///
    /// # Arguments
    ///
    /// * `src` - The input samples, [`AxisKernelTable::input_len`] long.
    /// * `dst` - The output samples, [`AxisKernelTable::output_len`] long.
    ///
    /// # Errors
    ///
    /// Returns an error if a slice length does not match the table.
    ///
    /// # Example
    ///
    /// ```
    /// use sharp_imgproc::kernel_table::AxisKernelTable;
    /// use sharp_imgproc::resample::AxisResampler;
    /// use sharp_imgproc::spline::AnalysisDegree;
    ///
    /// let table = AxisKernelTable::new(4, 8, AnalysisDegree::Cubic).unwrap();
    /// let mut resampler = AxisResampler::new(&table);
    ///
    /// let mut dst = vec![0.0; 8];
    /// resampler.resample(&[7.0; 4], &mut dst).unwrap();
    ///
    /// assert!(dst.iter().all(|v| (v - 7.0).abs() < 1e-6));
    /// ```
    pub fn resample(&mut self, src: &[f64], dst: &mut [f64]) -> Result<(), ImageError> {
        let table = self.table;
        let input_len = table.input_len();
        let output_len = table.output_len();

        if src.len() != input_len {
            return Err(ImageError::InvalidChannelShape(src.len(), input_len));
        }
        if dst.len() != output_len {
            return Err(ImageError::InvalidChannelShape(dst.len(), output_len));
        }

        // a single sample has no mirror period and models a constant signal
        if input_len == 1 {
            dst.fill(src[0]);
            return Ok(());
        }

        let order = table.analysis().integral_order();

        let coefficients = &mut self.coefficients;
        coefficients.copy_from_slice(src);
        to_coefficients(coefficients, &self.cubic_poles);
        let mean = integrate(coefficients, order);

        let extended = &mut self.extended;
        for (l, v) in extended.iter_mut().enumerate() {
            *v = coefficients[mirror_index(l, input_len)];
        }

        let last = extended.len() - 1;
        for (l, out) in self.convolved.iter_mut().enumerate() {
            *out = table
                .support(l)
                .zip(table.weights(l))
                .map(|(k, w)| extended[(k.unsigned_abs()).min(last)] * w)
                .sum();
        }

        let convolved = &mut self.convolved;
        differentiate(convolved, order);
        convolved.iter_mut().for_each(|v| *v += mean);

        to_coefficients(convolved, &self.correction_poles);
        to_samples(convolved);

        dst.copy_from_slice(&convolved[..output_len]);
        Ok(())
    }
}

/// Resample a single 1D vector to `output_len` samples.
///
/// Builds a throwaway [`AxisKernelTable`]; use [`AxisResampler`] to resample many
/// vectors of the same length.
pub fn resample_vector(
    src: &[f64],
    output_len: usize,
    analysis: crate::spline::AnalysisDegree,
) -> Result<Vec<f64>, ImageError> {
    let table = AxisKernelTable::new(src.len(), output_len, analysis)?;
    let mut dst = vec![0.0; output_len];
    AxisResampler::new(&table).resample(src, &mut dst)?;
    Ok(dst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spline::AnalysisDegree;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_mirror_reflection() {
        for len in 2..12 {
            let period = 2 * len - 2;
            for l in 0..len {
                assert_eq!(mirror_index(l, len), l);
            }
            for (i, l) in (len..period).enumerate() {
                assert_eq!(mirror_index(l, len), len - 2 - i, "len {len}, l {l}");
            }
            for l in 0..4 * period {
                assert_eq!(mirror_index(l + period, len), mirror_index(l, len));
            }
        }
    }

    #[test]
    fn test_mirror_degenerate() {
        assert_eq!(mirror_index(0, 1), 0);
        assert_eq!(mirror_index(17, 1), 0);
        assert_eq!(mirror_index(5, 2), 1);
        assert_eq!(mirror_index(6, 2), 0);
    }

    #[test]
    fn test_constant_upscale() -> Result<(), ImageError> {
        let dst = resample_vector(&[100.0; 4], 8, AnalysisDegree::Cubic)?;
        assert_eq!(dst.len(), 8);
        for v in dst {
            assert_abs_diff_eq!(v, 100.0, epsilon = 1e-6);
        }
        Ok(())
    }

    #[test]
    fn test_identity_interior() -> Result<(), ImageError> {
        let src = (0..64)
            .map(|i| 128.0 + 100.0 * (i as f64 * 0.7).sin())
            .collect::<Vec<_>>();

        for analysis in [AnalysisDegree::Linear, AnalysisDegree::Cubic] {
            let dst = resample_vector(&src, 64, analysis)?;
            for (a, b) in dst.iter().zip(src.iter()).take(48) {
                assert_abs_diff_eq!(a, b, epsilon = 1e-6);
            }
        }
        Ok(())
    }

    #[test]
    fn test_upscale_interpolates_ramp() -> Result<(), ImageError> {
        let src = (0..16).map(|i| i as f64).collect::<Vec<_>>();
        let dst = resample_vector(&src, 32, AnalysisDegree::Cubic)?;

        // even outputs fall on input samples, odd ones half way between
        for i in (8..22).step_by(2) {
            assert_abs_diff_eq!(dst[i], (i / 2) as f64, epsilon = 1e-6);
            assert_abs_diff_eq!(dst[i + 1], (i / 2) as f64 + 0.5, epsilon = 1e-2);
        }
        Ok(())
    }

    #[test]
    fn test_single_sample_input() -> Result<(), ImageError> {
        let dst = resample_vector(&[42.0], 5, AnalysisDegree::Cubic)?;
        assert_eq!(dst, vec![42.0; 5]);
        Ok(())
    }

    #[test]
    fn test_large_zoom_short_input() -> Result<(), ImageError> {
        // negative support indices reach past the short extended buffer
        let dst = resample_vector(&[10.0, 10.0], 200, AnalysisDegree::Cubic)?;
        for v in dst {
            assert_abs_diff_eq!(v, 10.0, epsilon = 1e-6);
        }
        Ok(())
    }

    #[test]
    fn test_length_mismatch() -> Result<(), ImageError> {
        let table = AxisKernelTable::new(4, 6, AnalysisDegree::Cubic)?;
        let mut resampler = AxisResampler::new(&table);

        let mut dst = vec![0.0; 6];
        assert_eq!(
            resampler.resample(&[0.0; 5], &mut dst),
            Err(ImageError::InvalidChannelShape(5, 4))
        );

        let mut dst = vec![0.0; 7];
        assert_eq!(
            resampler.resample(&[0.0; 4], &mut dst),
            Err(ImageError::InvalidChannelShape(7, 6))
        );
        Ok(())
    }

    #[test]
    fn test_resampler_reuse() -> Result<(), ImageError> {
        let table = AxisKernelTable::new(12, 5, AnalysisDegree::Cubic)?;
        let mut resampler = AxisResampler::new(&table);

        let a = (0..12).map(|i| (i * i) as f64).collect::<Vec<_>>();
        let b = (0..12).map(|i| 50.0 - i as f64).collect::<Vec<_>>();

        let mut first = vec![0.0; 5];
        resampler.resample(&a, &mut first)?;
        let mut scratch = vec![0.0; 5];
        resampler.resample(&b, &mut scratch)?;
        let mut again = vec![0.0; 5];
        resampler.resample(&a, &mut again)?;

        assert_eq!(first, again);
        Ok(())
    }
}
