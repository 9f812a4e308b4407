//! Image decoders for imgcat.
//!
//! BMP is parsed natively; JPEG and PNG go through the `image` crate and
//! are normalized to opaque RGB.

pub mod bmp;
pub mod codec;
pub mod error;
pub mod format;

pub use error::DecodeError;
pub use format::InputFormat;

use ic_core::raster::Raster;

/// Decode a fully-buffered image with the decoder matching `format`.
///
/// # Errors
/// Returns the decoder's [`DecodeError`]; no partial raster is ever returned.
///
/// # Example
/// ```
/// use ic_source::{decode, DecodeError, InputFormat};
/// let err = decode(b"not an image", InputFormat::Bmp).unwrap_err();
/// assert!(matches!(err, DecodeError::NotABitmap));
/// ```
pub fn decode(bytes: &[u8], format: InputFormat) -> Result<Raster, DecodeError> {
    log::debug!("Decoding {} bytes as {format}", bytes.len());
    match format {
        InputFormat::Bmp => bmp::decode_bmp(bytes),
        InputFormat::Jpeg => codec::decode_jpeg(bytes),
        InputFormat::Png => codec::decode_png(bytes),
    }
}
