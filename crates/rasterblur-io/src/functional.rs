use std::path::Path;

use image::DynamicImage;
use rasterblur_image::{ImageError, ImageSize, PlanarImage};

use crate::error::IoError;

/// Reads an image from the given file path.
///
/// The method tries to read from any image format supported by the image
/// crate and keeps the channel count the codec produced: 8-bit grayscale,
/// grayscale with alpha, RGB and RGBA map to 1, 2, 3 and 4 planes. Any other
/// pixel format is converted to 8-bit RGB first.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// A planar image containing the decoded pixel data.
pub fn read_image_any(file_path: impl AsRef<Path>) -> Result<PlanarImage, IoError> {
    let file_path = file_path.as_ref().to_owned();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path));
    }

    let img = image::open(&file_path)?;
    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    let (num_channels, interleaved) = match img {
        DynamicImage::ImageLuma8(buf) => (1, buf.into_raw()),
        DynamicImage::ImageLumaA8(buf) => (2, buf.into_raw()),
        DynamicImage::ImageRgb8(buf) => (3, buf.into_raw()),
        DynamicImage::ImageRgba8(buf) => (4, buf.into_raw()),
        other => (3, other.to_rgb8().into_raw()),
    };

    Ok(planar_from_interleaved(size, num_channels, &interleaved)?)
}

/// Writes an image to the given file path.
///
/// The encoding format is picked by the image crate from the file extension
/// (bmp, png, jpeg, ...).
///
/// # Arguments
///
/// * `file_path` - The path to write the image to.
/// * `image` - The planar image to encode.
pub fn write_image_any(file_path: impl AsRef<Path>, image: &PlanarImage) -> Result<(), IoError> {
    let width = image.width() as u32;
    let height = image.height() as u32;
    let interleaved = interleaved_from_planar(image);

    let num_channels = image.num_channels();
    let img = match num_channels {
        1 => image::GrayImage::from_raw(width, height, interleaved)
            .map(DynamicImage::ImageLuma8),
        2 => image::GrayAlphaImage::from_raw(width, height, interleaved)
            .map(DynamicImage::ImageLumaA8),
        3 => image::RgbImage::from_raw(width, height, interleaved).map(DynamicImage::ImageRgb8),
        4 => image::RgbaImage::from_raw(width, height, interleaved).map(DynamicImage::ImageRgba8),
        _ => None,
    }
    .ok_or(IoError::UnsupportedChannelCount(num_channels))?;

    img.save(file_path.as_ref())?;

    Ok(())
}

/// De-interleave codec pixel rows into a planar image.
///
/// # Arguments
///
/// * `size` - The size of the image in pixels.
/// * `num_channels` - The number of channels in the interleaved data.
/// * `interleaved` - Channel-interleaved samples, row by row.
pub fn planar_from_interleaved(
    size: ImageSize,
    num_channels: usize,
    interleaved: &[u8],
) -> Result<PlanarImage, ImageError> {
    let mut image = PlanarImage::from_size_val(size, num_channels, 0)?;
    let plane_len = size.width * size.height;
    if interleaved.len() != plane_len * num_channels {
        return Err(ImageError::InvalidChannelShape(
            interleaved.len(),
            plane_len * num_channels,
        ));
    }

    let data = image.as_slice_mut();
    for (i, &sample) in interleaved.iter().enumerate() {
        let channel = i % num_channels;
        let pixel = i / num_channels;
        data[channel * plane_len + pixel] = sample;
    }

    Ok(image)
}

/// Re-interleave a planar image into codec pixel rows.
pub fn interleaved_from_planar(image: &PlanarImage) -> Vec<u8> {
    let num_channels = image.num_channels();
    let plane_len = image.width() * image.height();
    let planar = image.as_slice();

    let mut interleaved = vec![0u8; planar.len()];
    for pixel in 0..plane_len {
        for channel in 0..num_channels {
            interleaved[pixel * num_channels + channel] = planar[channel * plane_len + pixel];
        }
    }

    interleaved
}
