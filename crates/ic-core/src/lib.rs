//! Raster model, glyph ramp and configuration for imgcat.
//!
//! This crate contains the types shared by the decoders, the renderer
//! and the command-line front end.

pub mod charset;
pub mod config;
pub mod error;
pub mod raster;

pub use charset::GLYPH_RAMP;
pub use config::RenderConfig;
pub use error::CoreError;
pub use raster::{Raster, Rgb};
