use std::ops::Range;

use ic_core::charset::glyph_for;
use ic_core::config::{DEFAULT_ASPECT_RATIO, RenderConfig};
use ic_core::raster::{Raster, Rgb};

/// Tunables for [`render_with`].
///
/// # Example
/// ```
/// use ic_ascii::RenderOptions;
/// let opts = RenderOptions::default();
/// assert!((opts.aspect_ratio - 2.5).abs() < 1e-9);
/// assert!(!opts.invert);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOptions {
    /// Vertical scale relative to horizontal (cell height / width).
    pub aspect_ratio: f64,
    /// Use the ramp light→dense instead of dense→light.
    pub invert: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            aspect_ratio: f64::from(DEFAULT_ASPECT_RATIO),
            invert: false,
        }
    }
}

impl From<&RenderConfig> for RenderOptions {
    fn from(config: &RenderConfig) -> Self {
        Self {
            aspect_ratio: f64::from(config.aspect_ratio),
            invert: config.invert,
        }
    }
}

/// Render a raster as `print_width`-column ASCII lines with default options.
///
/// Each glyph is the area average of the source pixels under its cell.
/// Rows are scaled by 2.5× the column ratio to compensate for tall cells.
///
/// # Example
/// ```
/// use ic_core::raster::Raster;
/// use ic_ascii::render;
///
/// let raster = Raster::allocate(2, 5).unwrap(); // all black
/// assert_eq!(render(&raster, 1), vec!["$".to_string()]);
/// ```
#[must_use]
pub fn render(raster: &Raster, print_width: u32) -> Vec<String> {
    render_with(raster, print_width, &RenderOptions::default())
}

/// Aspect ratios are resolved to thousandths before sampling.
const ASPECT_SCALE: f64 = 1000.0;

/// Render with explicit [`RenderOptions`].
///
/// Cell bounds and the row count are computed in exact integer arithmetic,
/// so whole-number ratios never lose or gain a row or a sample.
/// An empty raster, a zero width or a non-positive aspect ratio renders no
/// lines.
#[must_use]
pub fn render_with(raster: &Raster, print_width: u32, opts: &RenderOptions) -> Vec<String> {
    // NaN and negative ratios saturate to 0.
    let aspect = (opts.aspect_ratio * ASPECT_SCALE).round() as u64;
    if raster.is_empty() || print_width == 0 || aspect == 0 {
        return Vec::new();
    }

    let across = Scale::new(u128::from(raster.width()), u128::from(print_width));
    let down = Scale::new(
        u128::from(raster.width()) * u128::from(aspect),
        u128::from(print_width) * ASPECT_SCALE as u128,
    );
    let print_height = down.cells_in(raster.height());
    log::debug!(
        "Rendering {}×{} → {print_width}×{print_height} (ratio {:.3}×{:.3})",
        raster.width(),
        raster.height(),
        across.as_f64(),
        down.as_f64()
    );

    let columns: Vec<Range<u32>> = (0..print_width)
        .map(|x| across.window(x, raster.width()))
        .collect();

    (0..print_height)
        .map(|y| {
            let rows = down.window(y, raster.height());
            columns
                .iter()
                .map(|cols| glyph_for(average_luminance(raster, &rows, cols), opts.invert))
                .collect::<String>()
        })
        .collect()
}

/// Source samples per output cell, as the exact fraction `num / den`.
#[derive(Clone, Copy, Debug)]
struct Scale {
    num: u128,
    den: u128,
}

impl Scale {
    fn new(num: u128, den: u128) -> Self {
        debug_assert!(num > 0 && den > 0, "degenerate scale");
        Self { num, den }
    }

    /// Source indices `[floor(r·i), ceil(r·(i+1)))`, clamped to `[0, limit)`
    /// and widened to at least one sample.
    fn window(self, i: u32, limit: u32) -> Range<u32> {
        let last = u128::from(limit - 1);
        let start = (u128::from(i) * self.num / self.den).min(last) as u32;
        let end = (u128::from(i + 1) * self.num)
            .div_ceil(self.den)
            .min(u128::from(limit)) as u32;
        start..end.max(start + 1)
    }

    /// Whole cells that fit in `len` source samples: `floor(len / r)`.
    fn cells_in(self, len: u32) -> u32 {
        (u128::from(len) * self.den / self.num).min(u128::from(u32::MAX)) as u32
    }

    fn as_f64(self) -> f64 {
        self.num as f64 / self.den as f64
    }
}

fn average_luminance(raster: &Raster, rows: &Range<u32>, cols: &Range<u32>) -> f64 {
    let cols_usize = cols.start as usize..cols.end as usize;
    let sum: f64 = rows
        .clone()
        .map(|y| {
            raster.row(y)[cols_usize.clone()]
                .iter()
                .copied()
                .map(Rgb::luminance)
                .sum::<f64>()
        })
        .sum();
    let count = rows.len() * cols.len();
    sum / count as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(width: u32, height: u32, rgb: Rgb) -> Raster {
        let mut raster = Raster::allocate(width, height).unwrap();
        for y in 0..height {
            raster.row_mut(y).fill(rgb);
        }
        raster
    }

    #[test]
    fn black_at_native_width_is_darkest_glyph() {
        let lines = render(&filled(4, 10, Rgb::BLACK), 4);
        assert_eq!(lines, vec!["$$$$"; 4]);
    }

    #[test]
    fn white_at_native_width_is_blank() {
        let lines = render(&filled(4, 10, Rgb::WHITE), 4);
        assert_eq!(lines, vec!["    "; 4]);
    }

    #[test]
    fn single_column_black() {
        assert_eq!(render(&filled(2, 5, Rgb::BLACK), 1), vec!["$"]);
    }

    #[test]
    fn print_height_follows_aspect_ratio() {
        // ratio_x = 10, ratio_y = 25 → floor(100 / 25) = 4 rows.
        let lines = render(&filled(100, 100, Rgb::WHITE), 10);
        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|l| l.len() == 10));
    }

    #[test]
    fn too_short_raster_renders_nothing() {
        // height / ratio_y = 2 / 2.5 → 0 rows.
        assert!(render(&filled(8, 2, Rgb::BLACK), 8).is_empty());
    }

    #[test]
    fn cells_average_their_window() {
        // Left half black, right half white; two cells of 2×5 pixels each.
        let mut raster = filled(4, 5, Rgb::BLACK);
        for y in 0..5 {
            raster.row_mut(y)[2..].fill(Rgb::WHITE);
        }
        assert_eq!(render(&raster, 2), vec!["$ "]);

        // One cell covering both halves averages to mid-gray: 70 * 127.5 / 256 → 34.
        let mut raster = filled(2, 5, Rgb::BLACK);
        for y in 0..5 {
            raster.row_mut(y)[1] = Rgb::WHITE;
        }
        let mid = glyph_for(127.5, false);
        assert_eq!(mid, ic_core::charset::GLYPH_RAMP.as_bytes()[34] as char);
        assert_eq!(render(&raster, 1), vec![mid.to_string()]);
    }

    #[test]
    fn rows_keep_top_to_bottom_order() {
        // Top 5 rows black, bottom 5 white → "$" then " ".
        let mut raster = filled(2, 10, Rgb::WHITE);
        for y in 0..5 {
            raster.row_mut(y).fill(Rgb::BLACK);
        }
        assert_eq!(render(&raster, 1), vec!["$", " "]);
    }

    #[test]
    fn upscaling_clamps_windows_to_one_pixel() {
        // Wider than the source: windows shrink below a pixel but never empty.
        let raster = filled(2, 4, Rgb::BLACK);
        let lines = render(&raster, 7);
        // ratio_x = 2/7, ratio_y = 5/7 → floor(4 / (5/7)) = 5 rows.
        assert_eq!(lines.len(), 5);
        assert!(lines.iter().all(|l| l == "$$$$$$$"));
    }

    #[test]
    fn degenerate_inputs_render_nothing() {
        assert!(render(&filled(0, 0, Rgb::BLACK), 10).is_empty());
        assert!(render(&filled(4, 10, Rgb::BLACK), 0).is_empty());
        for aspect_ratio in [0.0, -1.0, 0.0001, f64::NAN] {
            let opts = RenderOptions {
                aspect_ratio,
                invert: false,
            };
            assert!(render_with(&filled(4, 10, Rgb::BLACK), 4, &opts).is_empty());
        }
    }

    #[test]
    fn invert_swaps_ramp_ends() {
        let opts = RenderOptions {
            invert: true,
            ..RenderOptions::default()
        };
        assert_eq!(render_with(&filled(2, 5, Rgb::BLACK), 1, &opts), vec![" "]);
        assert_eq!(render_with(&filled(2, 5, Rgb::WHITE), 1, &opts), vec!["$"]);
    }

    #[test]
    fn rendering_is_deterministic() {
        let mut raster = Raster::allocate(37, 29).unwrap();
        for y in 0..29 {
            for x in 0..37 {
                let v = ((x * 7 + y * 13) % 256) as u8;
                raster.set_pixel(x, y, Rgb::new(v, v.wrapping_mul(3), 255 - v));
            }
        }
        assert_eq!(render(&raster, 11), render(&raster, 11));
    }

    #[test]
    fn scale_window_bounds() {
        assert_eq!(Scale::new(2, 1).window(0, 10), 0..2);
        assert_eq!(Scale::new(5, 2).window(1, 10), 2..5);
        assert_eq!(Scale::new(1, 4).window(3, 2), 0..1);
        // Past the end is clamped onto the last sample.
        assert_eq!(Scale::new(3, 1).window(5, 10), 9..10);
        // 14 / 50 · 25 is exactly 7: the window must stop there.
        assert_eq!(Scale::new(14, 50).window(24, 14), 6..7);
    }

    #[test]
    fn whole_number_row_count_is_exact() {
        // ratio_y = 100 / 3 · 2.5, and 250 / ratio_y is exactly 3.
        let lines = render(&filled(100, 250, Rgb::BLACK), 3);
        assert_eq!(lines.len(), 3);

        // 1-wide, 5-tall at 11 columns: 5 · 11 / 2.5 = 22 rows.
        assert_eq!(render(&filled(1, 5, Rgb::BLACK), 11).len(), 22);
    }

    #[test]
    fn cells_on_exact_boundaries_do_not_borrow_neighbours() {
        // Pixels 0..=6 black, 7..14 white; cell 24 covers only pixel 6.
        let mut raster = filled(14, 1, Rgb::WHITE);
        raster.row_mut(0)[..7].fill(Rgb::BLACK);
        let lines = render(&raster, 50);
        assert_eq!(lines.len(), 1);
        let cells: Vec<char> = lines[0].chars().collect();
        assert_eq!(cells.len(), 50);
        assert_eq!(cells[24], '$');
        assert_eq!(cells[25], ' ');
    }

    #[test]
    fn custom_aspect_ratio_is_exact() {
        let opts = RenderOptions {
            aspect_ratio: 2.0,
            invert: false,
        };
        // ratio_y = 10 / 5 · 2 = 4, and 12 / 4 is exactly 3.
        let lines = render_with(&filled(10, 12, Rgb::BLACK), 5, &opts);
        assert_eq!(lines, vec!["$$$$$"; 3]);
    }
}
