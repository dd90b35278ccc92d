use rand::{rngs::StdRng, Rng, SeedableRng};
use sharp_image::ops::{planes_from_interleaved, planes_to_interleaved};
use sharp_image::{ImageError, ImagePlanes, ImageSize, SamplePlane};
use sharp_imgproc::resize::{resize, resize_plane, ResizeConfig, ResizePlan};
use sharp_imgproc::spline::AnalysisDegree;

fn noise_plane(size: ImageSize, seed: u64) -> Result<SamplePlane, ImageError> {
    let mut rng = StdRng::seed_from_u64(seed);
    SamplePlane::from_fn(size, |_, _| rng.random_range(0.0..255.0))
}

fn smooth_plane(size: ImageSize) -> Result<SamplePlane, ImageError> {
    SamplePlane::from_fn(size, |x, y| {
        100.0 + 50.0 * (x as f64 / 7.0).sin() * (y as f64 / 5.0).cos()
    })
}

fn max_interior_error(a: &SamplePlane, b: &SamplePlane, margin: usize) -> f64 {
    let mut err = 0.0f64;
    for y in margin..a.height() - margin {
        for x in margin..a.width() - margin {
            let (va, vb) = (a.get(x, y).unwrap(), b.get(x, y).unwrap());
            err = err.max((va - vb).abs());
        }
    }
    err
}

#[test]
fn test_identity_resize_interior() -> Result<(), ImageError> {
    let _ = env_logger::builder().is_test(true).try_init();

    let size = ImageSize {
        width: 48,
        height: 40,
    };
    let src = noise_plane(size, 7)?;

    for analysis in [AnalysisDegree::Cubic, AnalysisDegree::Linear] {
        let config = ResizeConfig {
            analysis_degree: Some(analysis),
            ..Default::default()
        };
        let dst = resize_plane(&src, size, &config)?;

        assert_eq!(dst.size(), size);
        let err = max_interior_error(&src, &dst, 12);
        assert!(err < 1e-6, "{analysis:?}: max interior error {err}");
    }
    Ok(())
}

#[test]
fn test_downscale_upscale_keeps_mean() -> Result<(), ImageError> {
    let size = ImageSize {
        width: 48,
        height: 40,
    };
    let half = ImageSize {
        width: 24,
        height: 20,
    };
    let config = ResizeConfig::default();

    let src = smooth_plane(size)?;
    let down = resize_plane(&src, half, &config)?;
    let back = resize_plane(&down, size, &config)?;

    assert!((src.mean() - down.mean()).abs() < 0.1);
    assert!((src.mean() - back.mean()).abs() < 0.1);

    let lossy = src
        .as_slice()
        .iter()
        .zip(back.as_slice())
        .any(|(a, b)| (a - b).abs() > 1e-3);
    assert!(lossy, "round trip should low-pass the plane");

    let noise = noise_plane(size, 11)?;
    let back = resize_plane(&resize_plane(&noise, half, &config)?, size, &config)?;
    assert!((noise.mean() - back.mean()).abs() < 2.0);
    Ok(())
}

#[test]
fn test_constant_downscale() -> Result<(), ImageError> {
    let src = SamplePlane::from_size_val([48, 40].into(), 55.0)?;

    for analysis in [AnalysisDegree::Cubic, AnalysisDegree::Linear] {
        let config = ResizeConfig {
            analysis_degree: Some(analysis),
            ..Default::default()
        };
        let dst = resize_plane(&src, [7, 5].into(), &config)?;
        for v in dst.as_slice() {
            assert!((v - 55.0).abs() < 1e-6, "{analysis:?}: {v}");
        }
    }
    Ok(())
}

#[test]
fn test_transpose_equivariance() -> Result<(), ImageError> {
    let src = SamplePlane::from_fn([13, 9].into(), |x, y| ((x * 7 + y * 3) % 11) as f64)?;
    let src_t = SamplePlane::from_fn([9, 13].into(), |x, y| *src.get(y, x).unwrap())?;

    let config = ResizeConfig::default();
    let dst = resize_plane(&src, [20, 6].into(), &config)?;
    let dst_t = resize_plane(&src_t, [6, 20].into(), &config)?;

    for y in 0..6 {
        for x in 0..20 {
            let (a, b) = (dst.get(x, y).unwrap(), dst_t.get(y, x).unwrap());
            assert!((a - b).abs() < 1e-8, "({x}, {y}): {a} vs {b}");
        }
    }
    Ok(())
}

#[test]
fn test_channels_are_independent() -> Result<(), ImageError> {
    let size = ImageSize {
        width: 20,
        height: 16,
    };
    let new_size = ImageSize {
        width: 11,
        height: 27,
    };
    let config = ResizeConfig::default();

    let channels = (0..3)
        .map(|seed| noise_plane(size, seed))
        .collect::<Result<Vec<_>, _>>()?;
    let planes = ImagePlanes::new(channels.clone())?;

    let resized = resize(&planes, new_size, &config)?;
    assert_eq!(resized.num_channels(), 3);
    assert_eq!(resized.size(), new_size);

    for (ch, src) in channels.iter().enumerate() {
        let single = resize_plane(src, new_size, &config)?;
        assert_eq!(resized.channel(ch)?, &single);
    }
    Ok(())
}

#[test]
fn test_plan_reuse_matches_oneshot() -> Result<(), ImageError> {
    let size = ImageSize {
        width: 17,
        height: 12,
    };
    let new_size = ImageSize {
        width: 40,
        height: 5,
    };
    let config = ResizeConfig::default();
    let plan = ResizePlan::new(size, new_size, &config)?;

    for seed in 0..3 {
        let src = noise_plane(size, seed)?;
        assert_eq!(plan.apply(&src)?, resize_plane(&src, new_size, &config)?);
    }
    Ok(())
}

#[test]
fn test_large_image_threshold() -> Result<(), ImageError> {
    let config = ResizeConfig {
        large_image_threshold: 32,
        ..Default::default()
    };

    let plan = ResizePlan::new([48, 8].into(), [24, 4].into(), &config)?;
    assert_eq!(plan.analysis(), AnalysisDegree::Linear);

    let plan = ResizePlan::new([32, 32].into(), [24, 4].into(), &config)?;
    assert_eq!(plan.analysis(), AnalysisDegree::Cubic);
    Ok(())
}

#[test]
fn test_interleaved_pixels_roundtrip() -> Result<(), ImageError> {
    let size = ImageSize {
        width: 8,
        height: 6,
    };
    let mut pixels = Vec::with_capacity(size.area() * 3);
    for y in 0..size.height {
        for x in 0..size.width {
            pixels.extend_from_slice(&[(x * 30) as u8, (y * 40) as u8, 200u8]);
        }
    }

    let planes = planes_from_interleaved(size, 3, &pixels)?;
    let resized = resize(&planes, [16, 12].into(), &ResizeConfig::default())?;
    let out = planes_to_interleaved::<u8>(&resized)?;

    assert_eq!(out.len(), 16 * 12 * 3);
    assert!(out.chunks_exact(3).all(|px| px[2] == 200));
    Ok(())
}
