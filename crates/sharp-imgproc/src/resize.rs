use sharp_image::{ImageError, ImagePlanes, ImageSize, SamplePlane};

use crate::kernel_table::AxisKernelTable;
use crate::resample::AxisResampler;
use crate::spline::AnalysisDegree;

/// Configuration of the B-spline resize.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResizeConfig {
    /// Inputs wider or taller than this many samples use a linear analysis model
    /// instead of a cubic one.
    pub large_image_threshold: usize,
    /// Force an analysis degree regardless of the input size.
    pub analysis_degree: Option<AnalysisDegree>,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            large_image_threshold: 3000,
            analysis_degree: None,
        }
    }
}

impl ResizeConfig {
    /// Pick the analysis degree for an input of the given size.
    pub fn analysis_degree_for(&self, size: ImageSize) -> AnalysisDegree {
        if let Some(degree) = self.analysis_degree {
            return degree;
        }

        if size.width > self.large_image_threshold || size.height > self.large_image_threshold {
            AnalysisDegree::Linear
        } else {
            AnalysisDegree::Cubic
        }
    }
}

/// Everything derived from the source and target sizes of a resize.
///
/// A plan is immutable once built; it can be applied to any number of planes of
/// the source size, from any number of threads.
#[derive(Clone, Debug)]
pub struct ResizePlan {
    src_size: ImageSize,
    dst_size: ImageSize,
    analysis: AnalysisDegree,
    width_table: AxisKernelTable,
    height_table: AxisKernelTable,
}

impl ResizePlan {
    /// Build the plan for resizing planes of `src_size` to `dst_size`.
    ///
    /// # Errors
    ///
    /// Returns an error if either size has a zero dimension.
    pub fn new(
        src_size: ImageSize,
        dst_size: ImageSize,
        config: &ResizeConfig,
    ) -> Result<Self, ImageError> {
        if !src_size.is_positive() {
            return Err(ImageError::InvalidImageSize(src_size.width, src_size.height));
        }
        if !dst_size.is_positive() {
            return Err(ImageError::InvalidImageSize(dst_size.width, dst_size.height));
        }

        let analysis = config.analysis_degree_for(src_size);
        let width_table = AxisKernelTable::new(src_size.width, dst_size.width, analysis)?;
        let height_table = AxisKernelTable::new(src_size.height, dst_size.height, analysis)?;

        log::debug!(
            "resize plan {}x{} -> {}x{}: {:?} analysis, {:?} kernel",
            src_size.width,
            src_size.height,
            dst_size.width,
            dst_size.height,
            analysis,
            analysis.kernel(),
        );

        Ok(Self {
            src_size,
            dst_size,
            analysis,
            width_table,
            height_table,
        })
    }

    /// Size of the planes the plan accepts.
    pub fn src_size(&self) -> ImageSize {
        self.src_size
    }

    /// Size of the planes the plan produces.
    pub fn dst_size(&self) -> ImageSize {
        self.dst_size
    }

    /// The analysis degree chosen for the source size.
    pub fn analysis(&self) -> AnalysisDegree {
        self.analysis
    }

    /// Kernel table of the horizontal pass.
    pub fn width_table(&self) -> &AxisKernelTable {
        &self.width_table
    }

    /// Kernel table of the vertical pass.
    pub fn height_table(&self) -> &AxisKernelTable {
        &self.height_table
    }

    /// Resize one plane.
    ///
    /// Every row is resampled to the target width first, then every column of
    /// that intermediate plane is resampled to the target height.
    ///
    /// # Errors
    ///
    /// Returns an error if the plane size differs from [`Self::src_size`].
    pub fn apply(&self, src: &SamplePlane) -> Result<SamplePlane, ImageError> {
        if src.size() != self.src_size {
            return Err(ImageError::PlaneSizeMismatch(
                self.src_size.width,
                self.src_size.height,
                src.width(),
                src.height(),
            ));
        }

        let (dst_width, dst_height) = (self.dst_size.width, self.dst_size.height);

        // horizontal pass
        let mut intermediate = SamplePlane::from_size_val(
            ImageSize {
                width: dst_width,
                height: self.src_size.height,
            },
            0.0,
        )?;
        let mut rows = AxisResampler::new(&self.width_table);
        for y in 0..src.rows() {
            rows.resample(src.row(y), intermediate.row_mut(y))?;
        }

        // vertical pass
        let mut dst = SamplePlane::from_size_val(self.dst_size, 0.0)?;
        let mut cols = AxisResampler::new(&self.height_table);
        let mut column = vec![0.0; self.src_size.height];
        let mut resampled = vec![0.0; dst_height];
        for x in 0..dst_width {
            for (y, v) in column.iter_mut().enumerate() {
                *v = intermediate.as_slice()[y * dst_width + x];
            }

            cols.resample(&column, &mut resampled)?;

            let dst_data = dst.as_slice_mut();
            for (y, v) in resampled.iter().enumerate() {
                dst_data[y * dst_width + x] = *v;
            }
        }

        Ok(dst)
    }
}

/// Resize a single plane using least-squares B-spline resampling.
///
/// # Arguments
///
/// * `src` - The input plane.
/// * `new_size` - The size of the output plane.
/// * `config` - The resize configuration.
///
/// # Returns
///
/// A newly allocated plane of `new_size`. Samples are not clamped; ringing around
/// sharp edges may leave the input range.
///
/// # Errors
///
/// Returns an error if `new_size` has a zero dimension.
///
/// # Example
///
/// ```
/// use sharp_image::{ImageSize, SamplePlane};
/// use sharp_imgproc::resize::{resize_plane, ResizeConfig};
///
/// let plane = SamplePlane::from_size_val(ImageSize { width: 4, height: 4 }, 100.0).unwrap();
///
/// let resized = resize_plane(
///     &plane,
///     ImageSize { width: 8, height: 8 },
///     &ResizeConfig::default(),
/// )
/// .unwrap();
///
/// assert_eq!(resized.size(), ImageSize { width: 8, height: 8 });
/// assert!(resized.as_slice().iter().all(|v| (v - 100.0).abs() < 1e-6));
/// ```
pub fn resize_plane(
    src: &SamplePlane,
    new_size: ImageSize,
    config: &ResizeConfig,
) -> Result<SamplePlane, ImageError> {
    ResizePlan::new(src.size(), new_size, config)?.apply(src)
}

/// Resize every channel of an image using least-squares B-spline resampling.
///
/// The channels are resized independently with a shared plan; their order is kept.
///
/// # Arguments
///
/// * `src` - The input channel planes.
/// * `new_size` - The size of the output planes.
/// * `config` - The resize configuration.
///
/// # Errors
///
/// Returns an error if `new_size` has a zero dimension.
///
/// # Example
///
/// ```
/// use sharp_image::{ImagePlanes, ImageSize, SamplePlane};
/// use sharp_imgproc::resize::{resize, ResizeConfig};
///
/// let size = ImageSize { width: 6, height: 5 };
/// let planes = ImagePlanes::new(vec![
///     SamplePlane::from_size_val(size, 10.0).unwrap(),
///     SamplePlane::from_size_val(size, 20.0).unwrap(),
///     SamplePlane::from_size_val(size, 30.0).unwrap(),
/// ])
/// .unwrap();
///
/// let resized = resize(&planes, ImageSize { width: 3, height: 9 }, &ResizeConfig::default())
///     .unwrap();
///
/// assert_eq!(resized.num_channels(), 3);
/// assert_eq!(resized.size(), ImageSize { width: 3, height: 9 });
/// ```
pub fn resize(
    src: &ImagePlanes,
    new_size: ImageSize,
    config: &ResizeConfig,
) -> Result<ImagePlanes, ImageError> {
    let plan = ResizePlan::new(src.size(), new_size, config)?;

    let planes = src
        .iter()
        .map(|plane| plan.apply(plane))
        .collect::<Result<Vec<_>, _>>()?;

    ImagePlanes::new(planes)
}
