use argh::FromArgs;

use sharp::image::ops::{planes_from_interleaved, planes_to_interleaved};
use sharp::image::ImageSize;
use sharp::imgproc::resize::{resize, ResizeConfig};
use sharp::imgproc::spline::AnalysisDegree;

#[derive(FromArgs)]
/// Resize a synthetic RGB test pattern and report per-channel statistics
struct Args {
    /// width of the test pattern
    #[argh(option, default = "64")]
    width: usize,

    /// height of the test pattern
    #[argh(option, default = "48")]
    height: usize,

    /// target width
    #[argh(option, short = 'x')]
    target_width: usize,

    /// target height
    #[argh(option, short = 'y')]
    target_height: usize,

    /// inputs larger than this use the linear analysis model
    #[argh(option, default = "3000")]
    large_image_threshold: usize,

    /// force the linear analysis model
    #[argh(switch)]
    linear: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let size = ImageSize {
        width: args.width,
        height: args.height,
    };

    // checkerboard in red, horizontal ramp in green, vertical ramp in blue
    let mut pixels = Vec::with_capacity(size.area() * 3);
    for y in 0..size.height {
        for x in 0..size.width {
            let check = if (x / 8 + y / 8) % 2 == 0 { 0 } else { 255 };
            let ramp_x = (x * 255 / size.width.max(2).saturating_sub(1)).min(255);
            let ramp_y = (y * 255 / size.height.max(2).saturating_sub(1)).min(255);
            pixels.extend_from_slice(&[check as u8, ramp_x as u8, ramp_y as u8]);
        }
    }

    let planes = planes_from_interleaved(size, 3, &pixels)?;

    let config = ResizeConfig {
        large_image_threshold: args.large_image_threshold,
        analysis_degree: args.linear.then_some(AnalysisDegree::Linear),
    };

    let new_size = ImageSize {
        width: args.target_width,
        height: args.target_height,
    };
    let resized = resize(&planes, new_size, &config)?;

    for (ch, plane) in resized.iter().enumerate() {
        let (lo, hi) = plane.min_max();
        log::info!(
            "channel {ch}: mean {:.3} -> {:.3}, range [{lo:.3}, {hi:.3}]",
            planes.channel(ch)?.mean(),
            plane.mean(),
        );
    }

    let out = planes_to_interleaved::<u8>(&resized)?;
    println!(
        "resized {}x{} -> {}x{} ({} bytes)",
        size.width,
        size.height,
        new_size.width,
        new_size.height,
        out.len()
    );

    Ok(())
}
