/// Degree of the centered B-spline kernel used by the resampling convolution.
///
/// The kernel degree is the sum of the analysis degree and the degree of the
/// cubic reconstruction, so only the quintic and septic families are needed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SplineDegree {
    /// Degree 5, support radius 3.
    Quintic,
    /// Degree 7, support radius 4.
    Septic,
}

impl SplineDegree {
    /// Get the kernel family for a polynomial degree, if one exists.
    pub fn from_degree(degree: usize) -> Option<Self> {
        match degree {
            5 => Some(SplineDegree::Quintic),
            7 => Some(SplineDegree::Septic),
            _ => None,
        }
    }

    /// The polynomial degree of the kernel.
    pub fn degree(self) -> usize {
        match self {
            SplineDegree::Quintic => 5,
            SplineDegree::Septic => 7,
        }
    }

    /// Half width of the kernel support, `(degree + 1) / 2`.
    pub fn half_support(self) -> f64 {
        (self.degree() as f64 + 1.0) / 2.0
    }

    /// Number of output samples appended past the target length so that the
    /// recursive filters settle before the last kept sample.
    pub(crate) fn border_horizon(self) -> usize {
        match self {
            SplineDegree::Quintic => 26,
            SplineDegree::Septic => 35,
        }
    }

    /// Evaluate the B-spline basis function at `x`.
    ///
    /// The kernel is even and vanishes outside `(-half_support, half_support)`.
    ///
    /// # Example
    ///
    /// ```
    /// use sharp_imgproc::spline::SplineDegree;
    ///
    /// let k = SplineDegree::Quintic;
    /// assert_eq!(k.eval(0.5), k.eval(-0.5));
    /// assert_eq!(k.eval(3.0), 0.0);
    /// ```
    pub fn eval(self, x: f64) -> f64 {
        match self {
            SplineDegree::Quintic => quintic(x.abs()),
            SplineDegree::Septic => septic(x.abs()),
        }
    }
}

/// Degree of the spline model fitted to the input samples.
///
/// The resampling kernel is four degrees higher: two for the cubic output model and
/// two for the integration that turns point sampling into area averaging.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AnalysisDegree {
    /// Piecewise-linear analysis, cheaper on very large inputs.
    Linear,
    /// Cubic analysis.
    #[default]
    Cubic,
}

impl AnalysisDegree {
    /// The polynomial degree of the analysis model.
    pub fn degree(self) -> usize {
        match self {
            AnalysisDegree::Linear => 1,
            AnalysisDegree::Cubic => 3,
        }
    }

    /// Order of the integral transform applied before convolution.
    pub fn integral_order(self) -> usize {
        self.degree() + 1
    }

    /// The resampling kernel paired with this analysis degree.
    pub fn kernel(self) -> SplineDegree {
        match self {
            AnalysisDegree::Linear => SplineDegree::Quintic,
            AnalysisDegree::Cubic => SplineDegree::Septic,
        }
    }
}

fn quintic(x: f64) -> f64 {
    if x < 1.0 {
        let a = x * x;
        return a * (a * (0.25 - x * 0.08333333333333333) - 0.5) + 0.55;
    }
    if x < 2.0 {
        return x * (x * (x * (x * (x * 0.041666666666666664 - 0.375) + 1.25) - 1.75) + 0.625)
            + 0.425;
    }
    if x < 3.0 {
        let a = 3.0 - x;
        let a2 = a * a;
        return a * a2 * a2 * 0.008333333333333333;
    }
    0.0
}

fn septic(x: f64) -> f64 {
    if x < 1.0 {
        let a = x * x;
        return a
            * (a * (a * (x * 0.006944444444444444 - 0.027777777777777776) + 0.1111111111111111)
                - 0.3333333333333333)
            + 0.4793650793650794;
    }
    if x < 2.0 {
        return x
            * (x * (x
                * (x * (x * (x * (0.05 - x * 0.004166666666666667) - 0.23333333333333334) + 0.5)
                    - 0.3888888888888889)
                - 0.1)
                - 0.07777777777777778)
            + 0.49047619047619045;
    }
    if x < 3.0 {
        return x
            * (x * (x
                * (x * (x
                    * (x * (x * 0.001388888888888889 - 0.027777777777777776)
                        + 0.23333333333333334)
                    - 1.0555555555555556)
                    + 2.7222222222222223)
                - 3.8333333333333335)
                + 2.411111111111111)
            - 0.22063492063492063;
    }
    if x < 4.0 {
        let a = 4.0 - x;
        let a3 = a * a * a;
        return a3 * a3 * a * 0.0001984126984126984;
    }
    0.0
}
