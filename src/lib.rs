//! appicon
//!
//! Procedural generator for an application icon and its adaptive-icon
//! foreground. Both images share one glyph placement: the main icon draws it
//! over a rounded-rectangle background, the foreground draws it on a
//! transparent canvas so the platform can compose its own background.
//!
//! # Example
//!
//! ```no_run
//! use appicon::{font::FontChain, IconConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = IconConfig {
//!     text: "Z".to_string(),
//!     ..Default::default()
//! };
//! let fonts = FontChain::new(config.fonts.clone());
//! let written = appicon::generate(&config, &fonts, &mut std::io::stdout())?;
//! assert_eq!(written.len(), 2);
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};

pub mod error;
pub use error::{Error, Result};

pub mod font;
pub mod rendering;

use font::{FontCandidate, FontResolver};
use rendering::layout::{center_origin, measure_text, GlyphMetrics, Rect};
use rendering::paint::{paint, PaintCommand};
use rendering::{encode_png, raster, RenderedIcon};

/// Largest accepted canvas edge in pixels.
pub const MAX_SIZE: u32 = 16_384;

/// Configuration for icon generation
///
/// The defaults reproduce the stock icon: a 1024px purple (#5E35B1)
/// rounded square with a white "Z", written to `assets/images`.
///
/// # Examples
///
/// ```
/// let cfg = appicon::IconConfig::default();
/// assert_eq!(cfg.corner_radius(), 204);
/// assert_eq!(cfg.font_px(), 614);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    /// Canvas edge length in pixels
    pub size: u32,
    /// Background fill (RGBA)
    pub background: [u8; 4],
    /// Glyph fill (RGBA)
    pub foreground: [u8; 4],
    /// Corner radius in pixels; `None` means a fifth of `size`
    pub corner_radius: Option<u32>,
    /// Text drawn at the centre
    pub text: String,
    /// Font em size as a fraction of `size`
    pub font_scale: f32,
    /// Directory both PNGs are written to
    pub output_dir: PathBuf,
    /// File name of the full icon
    pub icon_file: String,
    /// File name of the adaptive-icon foreground
    pub foreground_file: String,
    /// Font candidates, tried in order
    pub fonts: Vec<FontCandidate>,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            size: 1024,
            background: [94, 53, 177, 255],
            foreground: [255, 255, 255, 255],
            corner_radius: None,
            text: "Z".to_string(),
            font_scale: 0.6,
            output_dir: PathBuf::from("assets/images"),
            icon_file: "app_icon.png".to_string(),
            foreground_file: "app_icon_foreground.png".to_string(),
            fonts: font::default_candidates(),
        }
    }
}

impl IconConfig {
    pub fn corner_radius(&self) -> u32 {
        self.corner_radius.unwrap_or(self.size / 5)
    }

    /// Font em size in whole pixels (truncated).
    pub fn font_px(&self) -> u32 {
        (self.size as f32 * self.font_scale) as u32
    }

    pub fn validate(&self) -> Result<()> {
        if self.size == 0 || self.size > MAX_SIZE {
            return Err(Error::Config(format!(
                "size must be between 1 and {MAX_SIZE}, got {}",
                self.size
            )));
        }
        if !self.font_scale.is_finite() || self.font_scale <= 0.0 {
            return Err(Error::Config(format!(
                "font_scale must be a positive number, got {}",
                self.font_scale
            )));
        }
        if self.text.is_empty() {
            return Err(Error::Config("text must not be empty".into()));
        }
        if self.corner_radius() > self.size / 2 {
            return Err(Error::Config(format!(
                "corner radius {} exceeds half the canvas ({})",
                self.corner_radius(),
                self.size / 2
            )));
        }
        if self.icon_file.is_empty() || self.foreground_file.is_empty() {
            return Err(Error::Config("output file names must not be empty".into()));
        }
        if self.icon_file == self.foreground_file {
            return Err(Error::Config(format!(
                "icon and foreground would both be written to {}",
                self.icon_file
            )));
        }
        if self.fonts.is_empty() {
            return Err(Error::Config("at least one font candidate is required".into()));
        }
        Ok(())
    }

    /// Load a JSON config file. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Both rendered icons plus the placement they share.
#[derive(Debug, Clone)]
pub struct IconSet {
    pub icon: RenderedIcon,
    pub foreground: RenderedIcon,
    pub metrics: GlyphMetrics,
    /// Top-left of the text line box on both canvases
    pub origin: (i32, i32),
    /// Which font candidate was used
    pub font_source: String,
}

/// Render the icon and its foreground in memory.
pub fn render_icons(config: &IconConfig, resolver: &dyn FontResolver) -> Result<IconSet> {
    config.validate()?;
    let size = config.size;

    let mut icon = raster::new_canvas(size);
    let background = PaintCommand::RoundedRect {
        rect: Rect {
            x0: 0,
            y0: 0,
            x1: size as i32,
            y1: size as i32,
        },
        radius: config.corner_radius(),
        rgba: config.background,
    };
    paint(&mut icon, &[background], None);

    let font = resolver.resolve(config.font_px() as f32)?;
    let metrics = measure_text(&font, &config.text);
    let origin = center_origin(size, &metrics);
    debug!("glyph box {metrics:?}, origin {origin:?}");

    let text = [PaintCommand::Text {
        x: origin.0,
        y: origin.1,
        text: config.text.clone(),
        rgba: config.foreground,
    }];
    paint(&mut icon, &text, Some(&font));

    let mut foreground = raster::new_canvas(size);
    paint(&mut foreground, &text, Some(&font));

    Ok(IconSet {
        icon: encode_png(config.icon_file.clone(), &icon)?,
        foreground: encode_png(config.foreground_file.clone(), &foreground)?,
        metrics,
        origin,
        font_source: font.source,
    })
}

/// Write both icons into `config.output_dir`, creating it if needed.
///
/// A status line goes to `status` after each file. A failure part-way
/// leaves whatever was already written in place.
pub fn write_icons(
    config: &IconConfig,
    set: &IconSet,
    status: &mut dyn Write,
) -> Result<Vec<PathBuf>> {
    let dir = &config.output_dir;
    fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;

    let mut written = Vec::with_capacity(2);
    for icon in [&set.icon, &set.foreground] {
        let path = dir.join(&icon.name);
        fs::write(&path, &icon.png_data).map_err(|e| Error::io(&path, e))?;
        info!(
            "wrote {} ({}x{}, {} bytes, sha256 {})",
            path.display(),
            icon.width,
            icon.height,
            icon.png_data.len(),
            icon.digest()
        );
        writeln!(status, "Created {}", icon.name).map_err(Error::Status)?;
        written.push(path);
    }
    writeln!(status, "Icons created successfully!").map_err(Error::Status)?;
    Ok(written)
}

/// Render and write both icons.
pub fn generate(
    config: &IconConfig,
    resolver: &dyn FontResolver,
    status: &mut dyn Write,
) -> Result<Vec<PathBuf>> {
    let set = render_icons(config, resolver)?;
    info!("rendered with {}", set.font_source);
    write_icons(config, &set, status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = IconConfig::default();
        assert_eq!(config.size, 1024);
        assert_eq!(config.background, [94, 53, 177, 255]);
        assert_eq!(config.foreground, [255, 255, 255, 255]);
        assert_eq!(config.corner_radius(), 204);
        assert_eq!(config.font_px(), 614);
        assert_eq!(config.text, "Z");
        assert_eq!(config.output_dir, PathBuf::from("assets/images"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn largest_size_is_accepted() {
        let config = IconConfig {
            size: MAX_SIZE,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn oversized_canvas_fails_before_font_lookup() {
        let cfg = IconConfig {
            size: u32::MAX,
            ..Default::default()
        };
        let empty = font::FontChain::new(Vec::new());
        match render_icons(&cfg, &empty) {
            Err(Error::Config(msg)) => assert!(msg.contains("16384"), "{msg}"),
            other => panic!("expected a config error, got {:?}", other.map(|s| s.origin)),
        }
    }

    #[test]
    fn explicit_radius_wins() {
        let config = IconConfig {
            corner_radius: Some(12),
            ..Default::default()
        };
        assert_eq!(config.corner_radius(), 12);
    }

    #[test]
    fn invalid_configs_are_rejected() {
        let bad = [
            IconConfig { size: 0, ..Default::default() },
            IconConfig { size: MAX_SIZE + 1, ..Default::default() },
            IconConfig { size: u32::MAX, ..Default::default() },
            IconConfig { font_scale: 0.0, ..Default::default() },
            IconConfig { font_scale: f32::NAN, ..Default::default() },
            IconConfig { text: String::new(), ..Default::default() },
            IconConfig { corner_radius: Some(513), ..Default::default() },
            IconConfig { icon_file: "x.png".into(), foreground_file: "x.png".into(), ..Default::default() },
            IconConfig { icon_file: String::new(), ..Default::default() },
            IconConfig { fonts: Vec::new(), ..Default::default() },
        ];
        for cfg in &bad {
            assert!(matches!(cfg.validate(), Err(Error::Config(_))), "{cfg:?}");
        }
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg: IconConfig = serde_json::from_str(r#"{"text": "A", "size": 512}"#).unwrap();
        assert_eq!(cfg.text, "A");
        assert_eq!(cfg.size, 512);
        assert_eq!(cfg.corner_radius(), 102);
        assert_eq!(cfg.icon_file, "app_icon.png");
        assert_eq!(cfg.fonts, font::default_candidates());
    }

    #[test]
    fn json_file_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.json");
        let cfg = IconConfig {
            text: "Q".into(),
            corner_radius: Some(0),
            ..Default::default()
        };
        fs::write(&path, cfg.to_json().unwrap()).unwrap();
        assert_eq!(IconConfig::from_json_file(&path).unwrap(), cfg);
    }

    #[test]
    fn malformed_json_file_is_a_config_file_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ size: ").unwrap();
        assert!(matches!(
            IconConfig::from_json_file(&path),
            Err(Error::ConfigFile(_))
        ));
        assert!(matches!(
            IconConfig::from_json_file(dir.path().join("missing.json")),
            Err(Error::Io { .. })
        ));
    }

    #[test]
    fn invalid_config_fails_before_font_lookup() {
        struct Unreachable;
        impl FontResolver for Unreachable {
            fn resolve(&self, _: f32) -> Result<font::SizedFont> {
                panic!("font lookup must not run for an invalid config");
            }
        }
        let cfg = IconConfig { size: 0, ..Default::default() };
        assert!(matches!(render_icons(&cfg, &Unreachable), Err(Error::Config(_))));
    }
}
