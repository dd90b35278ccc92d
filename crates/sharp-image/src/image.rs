use crate::error::ImageError;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use sharp_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl ImageSize {
    /// Number of samples covered by this size.
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Whether both dimensions are strictly positive.
    pub fn is_positive(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// A dense plane of real-valued samples for a single channel.
///
/// The samples are stored row-major: the value at column `x` and row `y` lives at
/// `y * width + x`. Values are not clamped to any pixel range.
#[derive(Clone, Debug, PartialEq)]
pub struct SamplePlane {
    size: ImageSize,
    data: Vec<f64>,
}

impl SamplePlane {
    /// Create a new plane from row-major sample data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the plane in samples.
    /// * `data` - The sample data, `size.width * size.height` values long.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or if the data length does not
    /// match the plane size.
    ///
    /// # Examples
    ///
    /// ```
    /// use sharp_image::{ImageSize, SamplePlane};
    ///
    /// let plane = SamplePlane::new(
    ///     ImageSize {
    ///         width: 2,
    ///         height: 3,
    ///     },
    ///     vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(plane.width(), 2);
    /// assert_eq!(plane.get(1, 2), Some(&5.0));
    /// ```
    pub fn new(size: ImageSize, data: Vec<f64>) -> Result<Self, ImageError> {
        if !size.is_positive() {
            return Err(ImageError::InvalidImageSize(size.width, size.height));
        }

        if data.len() != size.area() {
            return Err(ImageError::InvalidChannelShape(data.len(), size.area()));
        }

        Ok(Self { size, data })
    }

    /// Create a new plane filled with a single value.
    pub fn from_size_val(size: ImageSize, val: f64) -> Result<Self, ImageError> {
        Self::new(size, vec![val; size.area()])
    }

    /// Create a new plane by evaluating `f(x, y)` at every sample position.
    ///
    /// # Examples
    ///
    /// ```
    /// use sharp_image::{ImageSize, SamplePlane};
    ///
    /// let ramp = SamplePlane::from_fn([3, 2].into(), |x, y| (x + 10 * y) as f64).unwrap();
    ///
    /// assert_eq!(ramp.as_slice(), &[0.0, 1.0, 2.0, 10.0, 11.0, 12.0]);
    /// ```
    pub fn from_fn(
        size: ImageSize,
        mut f: impl FnMut(usize, usize) -> f64,
    ) -> Result<Self, ImageError> {
        let mut data = Vec::with_capacity(size.area());
        for y in 0..size.height {
            for x in 0..size.width {
                data.push(f(x, y));
            }
        }
        Self::new(size, data)
    }

    /// Get the size of the plane in samples.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the width of the plane in samples.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the plane in samples.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of columns of the plane.
    pub fn cols(&self) -> usize {
        self.width()
    }

    /// Get the number of rows of the plane.
    pub fn rows(&self) -> usize {
        self.height()
    }

    /// Get the row-major sample data.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Get the row-major sample data mutably.
    pub fn as_slice_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Consume the plane and return its row-major sample data.
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Get the samples of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y` is not a valid row index.
    pub fn row(&self, y: usize) -> &[f64] {
        let start = y * self.size.width;
        &self.data[start..start + self.size.width]
    }

    /// Get the samples of row `y` mutably.
    ///
    /// # Panics
    ///
    /// Panics if `y` is not a valid row index.
    pub fn row_mut(&mut self, y: usize) -> &mut [f64] {
        let start = y * self.size.width;
        &mut self.data[start..start + self.size.width]
    }

    /// Get the sample at column `x` and row `y`.
    pub fn get(&self, x: usize, y: usize) -> Option<&f64> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        self.data.get(y * self.size.width + x)
    }

    /// Get the sample at column `x` and row `y` mutably.
    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut f64> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        self.data.get_mut(y * self.size.width + x)
    }

    /// Arithmetic mean of all samples.
    pub fn mean(&self) -> f64 {
        self.data.iter().sum::<f64>() / self.data.len() as f64
    }

    /// Smallest and largest sample value, in that order.
    pub fn min_max(&self) -> (f64, f64) {
        self.data
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }
}

/// An ordered collection of sample planes, one per channel.
///
/// Every plane in the collection has the same size.
#[derive(Clone, Debug, PartialEq)]
pub struct ImagePlanes {
    planes: Vec<SamplePlane>,
}

impl ImagePlanes {
    /// Create a channel collection from its planes, in channel order.
    ///
    /// # Errors
    ///
    /// Returns an error if `planes` is empty or if the planes differ in size.
    ///
    /// # Examples
    ///
    /// ```
    /// use sharp_image::{ImagePlanes, ImageSize, SamplePlane};
    ///
    /// let size = ImageSize { width: 4, height: 2 };
    /// let planes = ImagePlanes::new(vec![
    ///     SamplePlane::from_size_val(size, 1.0).unwrap(),
    ///     SamplePlane::from_size_val(size, 2.0).unwrap(),
    ///     SamplePlane::from_size_val(size, 3.0).unwrap(),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(planes.num_channels(), 3);
    /// assert_eq!(planes.size(), size);
    /// ```
    pub fn new(planes: Vec<SamplePlane>) -> Result<Self, ImageError> {
        let first = planes.first().ok_or(ImageError::EmptyPlanes)?.size();

        if let Some(other) = planes.iter().map(|p| p.size()).find(|s| *s != first) {
            return Err(ImageError::PlaneSizeMismatch(
                first.width,
                first.height,
                other.width,
                other.height,
            ));
        }

        Ok(Self { planes })
    }

    /// Get the size shared by all planes.
    pub fn size(&self) -> ImageSize {
        self.planes[0].size()
    }

    /// Get the width shared by all planes.
    pub fn width(&self) -> usize {
        self.size().width
    }

    /// Get the height shared by all planes.
    pub fn height(&self) -> usize {
        self.size().height
    }

    /// Get the number of channels.
    pub fn num_channels(&self) -> usize {
        self.planes.len()
    }

    /// Get the plane of one channel.
    ///
    /// # Errors
    ///
    /// Returns an error if the channel index is out of bounds.
    pub fn channel(&self, channel: usize) -> Result<&SamplePlane, ImageError> {
        self.planes
            .get(channel)
            .ok_or(ImageError::ChannelIndexOutOfBounds(channel, self.planes.len()))
    }

    /// Iterate over the planes in channel order.
    pub fn iter(&self) -> std::slice::Iter<'_, SamplePlane> {
        self.planes.iter()
    }

    /// Get the planes in channel order.
    pub fn as_slice(&self) -> &[SamplePlane] {
        &self.planes
    }

    /// Consume the collection and return its planes in channel order.
    pub fn into_planes(self) -> Vec<SamplePlane> {
        self.planes
    }
}

impl<'a> IntoIterator for &'a ImagePlanes {
    type Item = &'a SamplePlane;
    type IntoIter = std::slice::Iter<'a, SamplePlane>;

    fn into_iter(self) -> Self::IntoIter {
        self.planes.iter()
    }
}
