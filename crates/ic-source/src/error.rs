use ic_core::CoreError;
use thiserror::Error;

use crate::format::InputFormat;

/// Errors originating from the decoders.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Shorter than the BMP headers or missing the `BM` signature.
    #[error("The input was not recognized as a BMP file")]
    NotABitmap,

    /// Only uncompressed 24-bit BMP is supported.
    #[error("BMP must be a 24-bit image (found {bit_depth}-bit)")]
    UnsupportedBitDepth {
        /// Declared bits per pixel.
        bit_depth: u16,
    },

    /// Negative dimensions, or pixel data extending past the buffer.
    #[error("Invalid BMP file: {width}×{height} pixels at offset {offset} need {required} bytes, have {len}")]
    TruncatedOrInvalidBitmap {
        /// Declared width.
        width: i32,
        /// Declared height.
        height: i32,
        /// Declared pixel-data offset.
        offset: u32,
        /// Bytes the header claims (saturated on overflow).
        required: u64,
        /// Actual buffer length.
        len: usize,
    },

    /// The external codec rejected the input.
    #[error("Unsupported or invalid {format} input")]
    Codec {
        /// Format the codec was asked to decode.
        format: InputFormat,
        /// Underlying codec error.
        #[source]
        source: image::ImageError,
    },

    /// The raster could not be allocated.
    #[error(transparent)]
    Allocation(#[from] CoreError),
}
