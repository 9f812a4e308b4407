use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default cell height/width compensation.
///
/// Terminal cells are roughly 2–2.5× taller than wide; 2.5 keeps a square
/// region of the image square on screen.
pub const DEFAULT_ASPECT_RATIO: f32 = 2.5;

/// Width used when neither `-w`, the config nor the terminal provide one.
pub const DEFAULT_FALLBACK_WIDTH: u32 = 80;

/// Upper bound for any configured print width.
pub const MAX_PRINT_WIDTH: u32 = 4096;

/// Configuration du rendu, chargée depuis TOML.
///
/// Every field has a sane default; a missing file means all defaults.
///
/// # Example
/// ```
/// use ic_core::config::RenderConfig;
/// let config = RenderConfig::default();
/// assert_eq!(config.width, None);
/// assert_eq!(config.fallback_width, 80);
/// assert!((config.aspect_ratio - 2.5).abs() < f32::EPSILON);
/// ```
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct RenderConfig {
    /// Largeur d'impression par défaut. `None` = largeur du terminal.
    pub width: Option<u32>,
    /// Largeur utilisée quand aucun terminal n'est attaché.
    pub fallback_width: u32,
    /// Correction aspect ratio des cellules (hauteur / largeur).
    pub aspect_ratio: f32,
    /// Inverser la rampe (pour fond clair).
    pub invert: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: None,
            fallback_width: DEFAULT_FALLBACK_WIDTH,
            aspect_ratio: DEFAULT_ASPECT_RATIO,
            invert: false,
        }
    }
}

impl RenderConfig {
    /// Clamp all numeric fields to their valid ranges.
    /// Called after TOML deserialization to prevent out-of-range values.
    pub fn clamp_all(&mut self) {
        self.width = self.width.map(|w| w.clamp(1, MAX_PRINT_WIDTH));
        self.fallback_width = self.fallback_width.clamp(1, MAX_PRINT_WIDTH);
        if !self.aspect_ratio.is_finite() {
            self.aspect_ratio = DEFAULT_ASPECT_RATIO;
        }
        self.aspect_ratio = self.aspect_ratio.clamp(0.5, 5.0);
    }

    /// Parse TOML content and merge it over the defaults.
    ///
    /// # Errors
    /// Returns an error if the content is not valid TOML for this schema.
    ///
    /// # Example
    /// ```
    /// use ic_core::config::RenderConfig;
    /// let config = RenderConfig::from_toml_str("[render]\nwidth = 120\n").unwrap();
    /// assert_eq!(config.width, Some(120));
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content).context("TOML parse error")?;

        let mut config = Self::default();
        if let Some(r) = file.render {
            if let Some(v) = r.width {
                config.width = Some(v);
            }
            if let Some(v) = r.fallback_width {
                config.fallback_width = v;
            }
            if let Some(v) = r.aspect_ratio {
                config.aspect_ratio = v;
            }
            if let Some(v) = r.invert {
                config.invert = v;
            }
        }

        config.clamp_all();
        Ok(config)
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    render: Option<RenderSection>,
}

/// Render section of the TOML config, all fields optional for partial override.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RenderSection {
    width: Option<u32>,
    fallback_width: Option<u32>,
    aspect_ratio: Option<f32>,
    invert: Option<bool>,
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use ic_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<RenderConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read {}", path.display()))?;

    let config = RenderConfig::from_toml_str(&content)
        .with_context(|| format!("Invalid config in {}", path.display()))?;
    log::debug!("Config loaded from {}: {config:?}", path.display());
    Ok(config)
}
