//! ASCII conversion engine for imgcat.
//!
//! Converts rasters to lines of ramp glyphs.

pub mod luminance;

pub use luminance::{RenderOptions, render, render_with};
