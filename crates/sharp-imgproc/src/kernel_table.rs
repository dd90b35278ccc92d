use std::ops::RangeInclusive;

use sharp_image::ImageError;

use crate::spline::{AnalysisDegree, SplineDegree};

/// Precomputed convolution weights for resampling one axis at a fixed zoom.
///
/// For every position `l` of the extended output the table holds the inclusive
/// support `[index_min, index_max]` into the mirror-extended input, together with
/// the weights `zoom^(analysis + 1) * beta(l / zoom - k)` for each `k` of that range.
/// The weights of all positions are stored back to back in output order.
#[derive(Clone, Debug)]
pub struct AxisKernelTable {
    input_len: usize,
    output_len: usize,
    border: usize,
    extended_input_len: usize,
    zoom: f64,
    kernel: SplineDegree,
    analysis: AnalysisDegree,
    index_min: Vec<isize>,
    index_max: Vec<isize>,
    offsets: Vec<usize>,
    weights: Vec<f64>,
}

impl AxisKernelTable {
    /// Build the table for resampling `input_len` samples to `output_len` samples.
    ///
    /// # Arguments
    ///
    /// * `input_len` - The number of input samples along the axis.
    /// * `output_len` - The number of requested output samples along the axis.
    /// * `analysis` - The analysis degree; it selects the kernel degree.
    ///
    /// # Errors
    ///
    /// Returns an error if either length is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use sharp_imgproc::kernel_table::AxisKernelTable;
    /// use sharp_imgproc::spline::AnalysisDegree;
    ///
    /// let table = AxisKernelTable::new(10, 20, AnalysisDegree::Cubic).unwrap();
    ///
    /// assert_eq!(table.zoom(), 2.0);
    /// assert_eq!(table.extended_output_len(), 40);
    /// assert_eq!(table.support(0), -4..=4);
    /// ```
    pub fn new(
        input_len: usize,
        output_len: usize,
        analysis: AnalysisDegree,
    ) -> Result<Self, ImageError> {
        if input_len == 0 || output_len == 0 {
            return Err(ImageError::InvalidAxisLength(input_len, output_len));
        }

        let kernel = analysis.kernel();
        let zoom = output_len as f64 / input_len as f64;
        let half_support = kernel.half_support();
        let factor = zoom.powi(analysis.integral_order() as i32);

        let border = border_size(output_len, kernel);
        let extended_output_len = output_len + border;
        let extended_input_len = input_len + (border as f64 / zoom).ceil() as usize;

        let mut index_min = Vec::with_capacity(extended_output_len);
        let mut index_max = Vec::with_capacity(extended_output_len);
        let mut offsets = Vec::with_capacity(extended_output_len + 1);
        let mut weights = Vec::with_capacity(extended_output_len * (kernel.degree() + 2));

        offsets.push(0);
        for l in 0..extended_output_len {
            let affine_index = l as f64 / zoom;
            let k_min = (affine_index - half_support).ceil() as isize;
            let k_max = (affine_index + half_support).floor() as isize;

            for k in k_min..=k_max {
                weights.push(factor * kernel.eval(affine_index - k as f64));
            }

            index_min.push(k_min);
            index_max.push(k_max);
            offsets.push(weights.len());
        }

        Ok(Self {
            input_len,
            output_len,
            border,
            extended_input_len,
            zoom,
            kernel,
            analysis,
            index_min,
            index_max,
            offsets,
            weights,
        })
    }

    /// Number of input samples along the axis.
    pub fn input_len(&self) -> usize {
        self.input_len
    }

    /// Number of requested output samples along the axis.
    pub fn output_len(&self) -> usize {
        self.output_len
    }

    /// Number of extra output samples computed past the requested length.
    pub fn border(&self) -> usize {
        self.border
    }

    /// Length of the output before it is cut back to [`Self::output_len`].
    pub fn extended_output_len(&self) -> usize {
        self.output_len + self.border
    }

    /// Length of the mirror-extended input the weights index into.
    pub fn extended_input_len(&self) -> usize {
        self.extended_input_len
    }

    /// Period of the half-sample mirror extension of the input.
    pub fn mirror_period(&self) -> usize {
        (2 * self.input_len).saturating_sub(2)
    }

    /// Ratio of output length to input length.
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// The resampling kernel the weights were sampled from.
    pub fn kernel(&self) -> SplineDegree {
        self.kernel
    }

    /// The analysis degree the table was built for.
    pub fn analysis(&self) -> AnalysisDegree {
        self.analysis
    }

    /// Inclusive range of extended input indices contributing to output `l`.
    ///
    /// # Panics
    ///
    /// Panics if `l` is not below [`Self::extended_output_len`].
    pub fn support(&self, l: usize) -> RangeInclusive<isize> {
        self.index_min[l]..=self.index_max[l]
    }

    /// Number of input samples in the support of output `l`.
    pub fn support_len(&self, l: usize) -> usize {
        (self.index_max[l] - self.index_min[l] + 1) as usize
    }

    /// Convolution weights of output `l`, one per index of [`Self::support`].
    pub fn weights(&self, l: usize) -> &[f64] {
        &self.weights[self.offsets[l]..self.offsets[l + 1]]
    }

    /// All weights, stored contiguously in output order.
    pub fn as_slice(&self) -> &[f64] {
        &self.weights
    }

    /// Range of extended input indices that reach output `l` once the convolved
    /// sequence has been differentiated.
    ///
    /// Each differentiation pass couples an output with its direct neighbours, so
    /// the footprint is the union of the supports within `integral_order / 2`
    /// positions of `l`. It widens as the zoom shrinks.
    pub fn footprint(&self, l: usize) -> RangeInclusive<isize> {
        let reach = self.analysis.integral_order() / 2;
        let last = self.extended_output_len() - 1;
        let lo = l.saturating_sub(reach);
        let hi = (l + reach).min(last);
        self.index_min[lo]..=self.index_max[hi]
    }
}

/// Number of extra output samples needed for the recursive filters to settle.
fn border_size(output_len: usize, kernel: SplineDegree) -> usize {
    let degree = kernel.degree();
    let border = kernel.border_horizon().min(output_len);
    if border < degree {
        border + degree
    } else {
        border
    }
}
