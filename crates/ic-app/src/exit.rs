//! Mapping from pipeline errors to process exit codes.
//!
//! | code | meaning |
//! | ---- | ------- |
//! | 0 | success, `--help`, `--version` |
//! | 1 | usage or I/O error, unknown format |
//! | 2 | memory allocation failure |
//! | 3 | bad BMP signature or bounds |
//! | 4 | unsupported BMP bit depth |
//! | 5 | unsupported or invalid PNG/JPEG |

use ic_core::CoreError;
use ic_source::DecodeError;

pub const SUCCESS: u8 = 0;
pub const USAGE: u8 = 1;
pub const ALLOCATION: u8 = 2;
pub const INVALID_BMP: u8 = 3;
pub const BMP_BIT_DEPTH: u8 = 4;
pub const INVALID_CODEC_INPUT: u8 = 5;

/// Exit code for an error returned by the pipeline.
///
/// Looks through `anyhow` context layers for the typed library errors;
/// anything else is a usage/I/O failure.
#[must_use]
pub fn code_for(err: &anyhow::Error) -> u8 {
    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<DecodeError>() {
            return match e {
                DecodeError::NotABitmap | DecodeError::TruncatedOrInvalidBitmap { .. } => {
                    INVALID_BMP
                }
                DecodeError::UnsupportedBitDepth { .. } => BMP_BIT_DEPTH,
                DecodeError::Codec { .. } => INVALID_CODEC_INPUT,
                DecodeError::Allocation(_) => ALLOCATION,
            };
        }
        if let Some(CoreError::AllocationFailure { .. }) = cause.downcast_ref::<CoreError>() {
            return ALLOCATION;
        }
    }
    USAGE
}

/// Exit code for a command-line parse failure.
///
/// clap would exit 2, which is taken by allocation failures here. Help and
/// version requests come through as errors too and exit cleanly.
#[must_use]
pub fn code_for_cli(err: &clap::Error) -> u8 {
    if err.use_stderr() {
        USAGE
    } else {
        SUCCESS
    }
}
