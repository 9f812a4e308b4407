//! Native decoder for uncompressed 24-bit Windows bitmaps.
//!
//! Layout: 14-byte `BITMAPFILEHEADER` followed by a 40-byte
//! `BITMAPINFOHEADER`. Rows are stored bottom-up, B,G,R per pixel, each row
//! padded to a multiple of 4 bytes.

use ic_core::raster::{Raster, Rgb};

use crate::error::DecodeError;

/// Combined size of the file and info headers.
pub const HEADER_LEN: usize = 54;

const SIGNATURE: &[u8; 2] = b"BM";
const OFFSET_PIXEL_DATA: usize = 10;
const OFFSET_WIDTH: usize = 18;
const OFFSET_HEIGHT: usize = 22;
const OFFSET_BIT_DEPTH: usize = 28;

/// Header fields the decoder relies on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BmpHeader {
    /// Byte offset of the pixel array.
    pub pixel_offset: u32,
    /// Declared width (signed in the format).
    pub width: i32,
    /// Declared height; negative would mean top-down, which is rejected.
    pub height: i32,
    /// Bits per pixel.
    pub bit_depth: u16,
}

impl BmpHeader {
    /// Parse and validate the fixed-offset header fields.
    ///
    /// Only checks the signature and that each field lies inside `bytes`;
    /// bit depth and bounds are checked by [`decode_bmp`].
    ///
    /// # Errors
    /// [`DecodeError::NotABitmap`] if the buffer is shorter than the headers
    /// or lacks the `BM` signature.
    pub fn parse(bytes: &[u8]) -> Result<Self, DecodeError> {
        if bytes.len() < HEADER_LEN || !bytes.starts_with(SIGNATURE) {
            return Err(DecodeError::NotABitmap);
        }
        Ok(Self {
            pixel_offset: read_u32_le(bytes, OFFSET_PIXEL_DATA)?,
            width: read_i32_le(bytes, OFFSET_WIDTH)?,
            height: read_i32_le(bytes, OFFSET_HEIGHT)?,
            bit_depth: read_u16_le(bytes, OFFSET_BIT_DEPTH)?,
        })
    }

    /// Bytes per stored row, padded to 4. `None` for negative widths.
    #[must_use]
    pub fn row_stride(&self) -> Option<u64> {
        let width = u64::try_from(self.width).ok()?;
        Some((width * 3).div_ceil(4) * 4)
    }
}

fn field<const N: usize>(bytes: &[u8], at: usize) -> Result<[u8; N], DecodeError> {
    bytes
        .get(at..at + N)
        .and_then(|s| s.try_into().ok())
        .ok_or(DecodeError::NotABitmap)
}

fn read_u32_le(bytes: &[u8], at: usize) -> Result<u32, DecodeError> {
    field(bytes, at).map(u32::from_le_bytes)
}

fn read_i32_le(bytes: &[u8], at: usize) -> Result<i32, DecodeError> {
    field(bytes, at).map(i32::from_le_bytes)
}

fn read_u16_le(bytes: &[u8], at: usize) -> Result<u16, DecodeError> {
    field(bytes, at).map(u16::from_le_bytes)
}

/// Decode a complete 24-bit BMP file into a top-down raster.
///
/// Every header check runs before the first pixel read.
///
/// # Errors
/// - [`DecodeError::NotABitmap`]: too short or wrong signature.
/// - [`DecodeError::UnsupportedBitDepth`]: anything but 24 bpp.
/// - [`DecodeError::TruncatedOrInvalidBitmap`]: negative dimensions or pixel
///   data past the end of `bytes`.
/// - [`DecodeError::Allocation`]: the raster could not be allocated.
///
/// # Example
/// ```
/// use ic_source::bmp::decode_bmp;
/// use ic_source::DecodeError;
/// assert!(matches!(decode_bmp(b"BM"), Err(DecodeError::NotABitmap)));
/// ```
pub fn decode_bmp(bytes: &[u8]) -> Result<Raster, DecodeError> {
    let header = BmpHeader::parse(bytes)?;
    log::debug!("BMP header: {header:?}");

    if header.bit_depth != 24 {
        return Err(DecodeError::UnsupportedBitDepth {
            bit_depth: header.bit_depth,
        });
    }

    let (width, height, stride) = validate_bounds(&header, bytes.len())?;

    let mut raster = Raster::allocate(width, height)?;
    let offset = header.pixel_offset as usize;
    let row_bytes = width as usize * 3;

    // Stored row y is raster row (height - 1 - y).
    for y in 0..height {
        let start = offset + stride * y as usize;
        let src = &bytes[start..start + row_bytes];
        let dst = raster.row_mut(height - 1 - y);
        for (px, bgr) in dst.iter_mut().zip(src.chunks_exact(3)) {
            *px = Rgb::new(bgr[2], bgr[1], bgr[0]);
        }
    }

    Ok(raster)
}

/// Checks dimensions and `offset + stride * height <= len` in 64-bit.
fn validate_bounds(header: &BmpHeader, len: usize) -> Result<(u32, u32, usize), DecodeError> {
    let required = header.row_stride().and_then(|stride| {
        let height = u64::try_from(header.height).ok()?;
        stride
            .checked_mul(height)?
            .checked_add(u64::from(header.pixel_offset))
    });

    let invalid = || DecodeError::TruncatedOrInvalidBitmap {
        width: header.width,
        height: header.height,
        offset: header.pixel_offset,
        required: required.unwrap_or(u64::MAX),
        len,
    };

    match (required, header.row_stride()) {
        (Some(required), Some(stride)) if required <= len as u64 => Ok((
            header.width.unsigned_abs(),
            header.height.unsigned_abs(),
            usize::try_from(stride).map_err(|_| invalid())?,
        )),
        _ => Err(invalid()),
    }
}
