/// 70 caractères — Paul Bourke, du plus dense au plus clair.
///
/// Index 0 is drawn for black, the trailing space for white.
pub const GLYPH_RAMP: &str =
    "$@B%8&WM#*oahkbdpqwmZO0QLCJUYXzcvunxrjft/\\|()1{}[]?-_+~<>i!lI;:,\"^`'. ";

/// Number of glyphs in [`GLYPH_RAMP`].
pub const GLYPH_COUNT: usize = GLYPH_RAMP.len();

/// Map an averaged luminance in `[0, 256)` to a ramp glyph.
///
/// Index is `floor(GLYPH_COUNT * luminance / 256)`, clamped to the ramp so
/// out-of-range or NaN input can never index past it.
///
/// # Example
/// ```
/// use ic_core::charset::glyph_for;
/// assert_eq!(glyph_for(0.0, false), '$');
/// assert_eq!(glyph_for(255.0, false), ' ');
/// assert_eq!(glyph_for(0.0, true), ' ');
/// ```
#[inline(always)]
#[must_use]
pub fn glyph_for(luminance: f64, invert: bool) -> char {
    let ramp = GLYPH_RAMP.as_bytes();
    // `as usize` saturates: negatives and NaN land on 0.
    let idx = ((GLYPH_COUNT as f64 * luminance / 256.0) as usize).min(GLYPH_COUNT - 1);
    let idx = if invert { GLYPH_COUNT - 1 - idx } else { idx };
    char::from(ramp[idx])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_is_seventy_ascii_glyphs() {
        assert_eq!(GLYPH_COUNT, 70);
        assert!(GLYPH_RAMP.is_ascii());
        assert!(GLYPH_RAMP.starts_with('$'));
        assert!(GLYPH_RAMP.ends_with(' '));
    }

    #[test]
    fn glyph_for_is_monotonic() {
        let mut prev_idx = 0usize;
        for lum in 0..256u32 {
            let ch = glyph_for(f64::from(lum), false);
            let idx = GLYPH_RAMP.find(ch).unwrap();
            assert!(idx >= prev_idx, "Ramp not monotonic at luminance {lum}");
            prev_idx = idx;
        }
        assert_eq!(prev_idx, GLYPH_COUNT - 1);
    }

    #[test]
    fn glyph_for_clamps_out_of_range() {
        assert_eq!(glyph_for(-4.0, false), '$');
        assert_eq!(glyph_for(1000.0, false), ' ');
        assert_eq!(glyph_for(f64::NAN, false), '$');
    }

    #[test]
    fn glyph_for_bucket_edges() {
        // 256 / 70 ≈ 3.657 luminance units per glyph.
        assert_eq!(glyph_for(3.6, false), '$');
        assert_eq!(glyph_for(3.7, false), '@');
    }
}
