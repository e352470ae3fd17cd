use std::path::{Path, PathBuf};
use std::time::Instant;

use argh::FromArgs;

use rasterblur::image::PlanarImage;
use rasterblur::imgproc::filter::gaussian_blur;
use rasterblur::io;

#[derive(FromArgs)]
/// Blur an image with a separable gaussian filter
struct Args {
    /// path to the input image
    #[argh(positional)]
    image_path: String,

    /// size of the gaussian kernel, odd and at least 3
    #[argh(positional, default = "11")]
    kernel_size: usize,

    /// log the input and blurred images to a rerun stream
    #[argh(switch)]
    viz: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Args = argh::from_env();

    let image = io::read_image_any(&args.image_path)?;
    log::info!(
        "loaded {} ({}x{}, {} channels)",
        args.image_path,
        image.width(),
        image.height(),
        image.num_channels()
    );

    let mut blurred = PlanarImage::from_size_val(image.size(), image.num_channels(), 0)?;

    println!("everything loaded and prepared.. start blurring!");
    let start = Instant::now();
    gaussian_blur(&image, &mut blurred, args.kernel_size)?;
    let elapsed = start.elapsed();
    println!("blurring done!");
    println!("computation time (ms): {}", elapsed.as_secs_f64() * 1000.0);

    let output_path = convolved_path(Path::new(&args.image_path));
    io::write_image_any(&output_path, &blurred)?;
    log::info!("wrote {}", output_path.display());

    if args.viz {
        let rec = rerun::RecordingStreamBuilder::new("rasterblur blur").spawn()?;
        log_image(&rec, "input", &image)?;
        log_image(&rec, "blurred", &blurred)?;
    }

    Ok(())
}

/// Output path `<stem>_convolved.<ext>` next to the input.
fn convolved_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = input
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from("bmp"));
    input.with_file_name(format!("{stem}_convolved.{ext}"))
}

fn log_image(
    rec: &rerun::RecordingStream,
    name: &str,
    image: &PlanarImage,
) -> Result<(), Box<dyn std::error::Error>> {
    let color_model = match image.num_channels() {
        1 => rerun::ColorModel::L,
        3 => rerun::ColorModel::RGB,
        4 => rerun::ColorModel::RGBA,
        num_channels => {
            log::warn!("no color model for {num_channels} channels, skipping viz");
            return Ok(());
        }
    };

    rec.log(
        name,
        &rerun::Image::from_elements(
            &io::interleaved_from_planar(image),
            image.size().into(),
            color_model,
        ),
    )?;

    Ok(())
}
