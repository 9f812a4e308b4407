//! JPEG and PNG through the `image` crate.
//!
//! The codec does the decompression; this module only copies the samples
//! into a [`Raster`] and flattens PNG transparency onto white.

use ic_core::raster::{Raster, Rgb};
use image::ImageFormat;

use crate::error::DecodeError;
use crate::format::InputFormat;

fn load(
    bytes: &[u8],
    format: InputFormat,
    codec_format: ImageFormat,
) -> Result<image::DynamicImage, DecodeError> {
    let img = image::load_from_memory_with_format(bytes, codec_format)
        .map_err(|source| DecodeError::Codec { format, source })?;
    log::debug!(
        "{format} decoded: {}×{} ({:?})",
        img.width(),
        img.height(),
        img.color()
    );
    Ok(img)
}

/// Decode a JPEG; samples are copied unchanged.
///
/// Grayscale and CMYK JPEGs come out of the codec already converted to RGB.
///
/// # Errors
/// [`DecodeError::Codec`] if the codec rejects the stream,
/// [`DecodeError::Allocation`] if the raster cannot be allocated.
pub fn decode_jpeg(bytes: &[u8]) -> Result<Raster, DecodeError> {
    let rgb = load(bytes, InputFormat::Jpeg, ImageFormat::Jpeg)?.into_rgb8();
    let (width, height) = rgb.dimensions();

    let mut raster = Raster::allocate(width, height)?;
    for (y, src) in (0..height).zip(rgb.rows()) {
        for (dst, px) in raster.row_mut(y).iter_mut().zip(src) {
            let [r, g, b] = px.0;
            *dst = Rgb::new(r, g, b);
        }
    }
    Ok(raster)
}

/// Decode a PNG and composite every pixel over opaque white.
///
/// # Errors
/// [`DecodeError::Codec`] if the codec rejects the stream,
/// [`DecodeError::Allocation`] if the raster cannot be allocated.
pub fn decode_png(bytes: &[u8]) -> Result<Raster, DecodeError> {
    let rgba = load(bytes, InputFormat::Png, ImageFormat::Png)?.into_rgba8();
    let (width, height) = rgba.dimensions();

    let mut raster = Raster::allocate(width, height)?;
    for (y, src) in (0..height).zip(rgba.rows()) {
        for (dst, px) in raster.row_mut(y).iter_mut().zip(src) {
            let [r, g, b, a] = px.0;
            *dst = composite_over_white(r, g, b, a);
        }
    }
    Ok(raster)
}

/// `out = a * src + (1 - a) * 255` with `a = alpha / 256`, truncated.
///
/// Transparency reads as white paper, so bright glyphs stay reserved for
/// light opaque pixels.
///
/// # Example
/// ```
/// use ic_source::codec::composite_over_white;
/// use ic_core::raster::Rgb;
/// assert_eq!(composite_over_white(0, 0, 0, 0), Rgb::WHITE);
/// assert_eq!(composite_over_white(0, 0, 0, 255), Rgb::BLACK);
/// ```
#[inline]
#[must_use]
pub fn composite_over_white(r: u8, g: u8, b: u8, alpha: u8) -> Rgb {
    let a = f64::from(alpha) / 256.0;
    let blend = |c: u8| (a * f64::from(c) + (1.0 - a) * 255.0) as u8;
    Rgb::new(blend(r), blend(g), blend(b))
}
