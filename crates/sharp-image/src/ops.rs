use crate::{ImageError, ImagePlanes, ImageSize, SamplePlane};

/// Split interleaved pixel data into one real-valued plane per channel.
///
/// # Arguments
///
/// * `size` - The size of the image in pixels.
/// * `channels` - The number of interleaved channels per pixel.
/// * `data` - The interleaved pixel data, row-major, `channels` values per pixel.
///
/// # Returns
///
/// The channel planes in the order they appear within a pixel.
///
/// # Errors
///
/// Returns an error if the data length does not match the image size, if the
/// size is not positive or if a value cannot be represented as `f64`.
///
/// # Example
///
/// ```
/// use sharp_image::ImageSize;
/// use sharp_image::ops::planes_from_interleaved;
///
/// let planes = planes_from_interleaved(
///     ImageSize { width: 2, height: 1 },
///     3,
///     &[10u8, 20, 30, 40, 50, 60],
/// )
/// .unwrap();
///
/// assert_eq!(planes.num_channels(), 3);
/// assert_eq!(planes.channel(1).unwrap().as_slice(), &[20.0, 50.0]);
/// ```
pub fn planes_from_interleaved<T>(
    size: ImageSize,
    channels: usize,
    data: &[T],
) -> Result<ImagePlanes, ImageError>
where
    T: Copy + num_traits::ToPrimitive,
{
    if channels == 0 {
        return Err(ImageError::EmptyPlanes);
    }

    if data.len() != size.area() * channels {
        return Err(ImageError::InvalidChannelShape(
            data.len(),
            size.area() * channels,
        ));
    }

    let mut planes = Vec::with_capacity(channels);
    for ch in 0..channels {
        let samples = data
            .iter()
            .skip(ch)
            .step_by(channels)
            .map(|v| v.to_f64().ok_or(ImageError::CastError("f64".to_string())))
            .collect::<Result<Vec<f64>, ImageError>>()?;
        planes.push(SamplePlane::new(size, samples)?);
    }

    ImagePlanes::new(planes)
}

/// Interleave channel planes into integer pixel data.
///
/// Every sample is rounded to the nearest integer and saturated to the range of
/// `T`, so ringing around sharp edges never wraps around.
///
/// # Example
///
/// ```
/// use sharp_image::{ImagePlanes, SamplePlane};
/// use sharp_image::ops::planes_to_interleaved;
///
/// let planes = ImagePlanes::new(vec![
///     SamplePlane::new([2, 1].into(), vec![-3.2, 127.6]).unwrap(),
///     SamplePlane::new([2, 1].into(), vec![255.4, 300.0]).unwrap(),
/// ])
/// .unwrap();
///
/// let pixels = planes_to_interleaved::<u8>(&planes).unwrap();
/// assert_eq!(pixels, vec![0, 255, 128, 255]);
/// ```
pub fn planes_to_interleaved<T>(planes: &ImagePlanes) -> Result<Vec<T>, ImageError>
where
    T: num_traits::PrimInt,
{
    let channels = planes.num_channels();
    let mut data = Vec::with_capacity(planes.size().area() * channels);

    for idx in 0..planes.size().area() {
        for plane in planes {
            data.push(saturate_cast(plane.as_slice()[idx])?);
        }
    }

    Ok(data)
}

/// Round a sample and saturate it to the range of an integer type.
pub fn saturate_cast<T>(value: f64) -> Result<T, ImageError>
where
    T: num_traits::PrimInt,
{
    let cast_error = || ImageError::CastError(std::any::type_name::<T>().to_string());

    let lo = T::min_value().to_f64().ok_or_else(cast_error)?;
    let hi = T::max_value().to_f64().ok_or_else(cast_error)?;

    if value.is_nan() {
        return Err(cast_error());
    }

    T::from(value.round().clamp(lo, hi)).ok_or_else(cast_error)
}
