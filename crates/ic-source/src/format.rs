use std::fmt;
use std::path::Path;

/// Input formats imgcat knows how to decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputFormat {
    /// Windows bitmap, decoded natively.
    Bmp,
    /// JPEG, delegated to `image`.
    Jpeg,
    /// PNG, delegated to `image` then composited over white.
    Png,
}

impl InputFormat {
    /// Detect the format from the file extension (ASCII case-insensitive).
    ///
    /// Returns `None` for missing or unknown extensions.
    ///
    /// # Example
    /// ```
    /// use ic_source::InputFormat;
    /// use std::path::Path;
    /// assert_eq!(InputFormat::from_path(Path::new("cat.JPEG")), Some(InputFormat::Jpeg));
    /// assert_eq!(InputFormat::from_path(Path::new("cat.gif")), None);
    /// ```
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "bmp" => Some(Self::Bmp),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            _ => None,
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bmp => "BMP",
            Self::Jpeg => "JPEG",
            Self::Png => "PNG",
        })
    }
}
