use crate::error::CoreError;

/// Un échantillon RGB, 8 bits par canal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Luminance perceptuelle, pondérée vers le vert. Plage [0.0, 255.0].
    ///
    /// # Example
    /// ```
    /// use ic_core::raster::Rgb;
    /// assert_eq!(Rgb::BLACK.luminance(), 0.0);
    /// assert!((Rgb::WHITE.luminance() - 255.0).abs() < 1e-9);
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn luminance(self) -> f64 {
        0.21 * f64::from(self.r) + 0.72 * f64::from(self.g) + 0.07 * f64::from(self.b)
    }
}

/// Grille RGB row-major produite par les décodeurs.
///
/// Always holds exactly `height` rows of `width` samples. Decoders hand
/// ownership to the caller; dropping (or [`Raster::release`]) frees it.
///
/// # Example
/// ```
/// use ic_core::raster::{Raster, Rgb};
/// let mut raster = Raster::allocate(4, 2).unwrap();
/// raster.set_pixel(3, 1, Rgb::WHITE);
/// assert_eq!(raster.pixel(3, 1), Rgb::WHITE);
/// assert_eq!(raster.row(0).len(), 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    pixels: Vec<Rgb>,
    width: u32,
    height: u32,
}

impl Raster {
    /// Alloue une grille `width × height`, échantillons à zéro.
    ///
    /// # Errors
    /// Returns [`CoreError::AllocationFailure`] if the sample count overflows
    /// or the allocator refuses the request.
    pub fn allocate(width: u32, height: u32) -> Result<Self, CoreError> {
        let failure = || CoreError::AllocationFailure { width, height };
        let len = usize::try_from(u64::from(width) * u64::from(height)).map_err(|_| failure())?;

        let mut pixels = Vec::new();
        pixels.try_reserve_exact(len).map_err(|_| failure())?;
        pixels.resize(len, Rgb::default());

        log::trace!("Raster allocated: {width}×{height}");
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Consume the raster and free its backing memory.
    ///
    /// Taking `self` by value makes a second release unrepresentable.
    pub fn release(self) {
        drop(self);
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// True when the raster has no samples (zero width or height).
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Sample at column `x`, row `y` (row 0 is the visual top).
    ///
    /// # Panics
    /// Panics if `(x, y)` is outside the raster.
    #[inline(always)]
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        self.pixels[self.index(x, y)]
    }

    /// # Panics
    /// Panics if `(x, y)` is outside the raster.
    #[inline(always)]
    pub fn set_pixel(&mut self, x: u32, y: u32, rgb: Rgb) {
        let idx = self.index(x, y);
        self.pixels[idx] = rgb;
    }

    /// Ligne `y` complète.
    ///
    /// # Panics
    /// Panics if `y >= height`.
    #[inline]
    #[must_use]
    pub fn row(&self, y: u32) -> &[Rgb] {
        let start = self.index(0, y);
        &self.pixels[start..start + self.width as usize]
    }

    /// # Panics
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [Rgb] {
        let start = self.index(0, y);
        let width = self.width as usize;
        &mut self.pixels[start..start + width]
    }

    /// Iterate rows top to bottom. Always yields `height` rows, empty ones
    /// for a zero-width raster.
    pub fn rows(&self) -> impl Iterator<Item = &[Rgb]> {
        (0..self.height).map(move |y| self.row(y))
    }

    #[inline(always)]
    fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width.max(1) && y < self.height, "pixel out of bounds");
        y as usize * self.width as usize + x as usize
    }
}
