//! Font resolution: candidates, resolvers and sized fonts
//!
//! Icon rendering never opens a font file directly. It asks a
//! [`FontResolver`] for a font at a given em size, which keeps font lookup
//! injectable. [`FontChain`] walks an explicit, ordered list of
//! [`FontCandidate`]s and [`FixedFont`] wraps a font that is already loaded.

pub mod chain;
pub mod system;

use std::fmt;
use std::path::PathBuf;

use ab_glyph::{Font, FontArc, PxScale, PxScaleFont};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

pub use chain::FontChain;

/// Provides a font given a desired em size in pixels.
pub trait FontResolver {
    fn resolve(&self, em_px: f32) -> Result<SizedFont>;
}

/// A font together with the scale that renders it at the requested em size.
#[derive(Clone)]
pub struct SizedFont {
    pub font: FontArc,
    pub scale: PxScale,
    /// Human-readable description of where the font came from
    pub source: String,
}

impl SizedFont {
    pub fn new(font: FontArc, em_px: f32, source: impl Into<String>) -> Self {
        let scale = em_scale(&font, em_px);
        Self {
            font,
            scale,
            source: source.into(),
        }
    }

    pub fn scaled(&self) -> PxScaleFont<&FontArc> {
        self.font.as_scaled(self.scale)
    }
}

impl fmt::Debug for SizedFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SizedFont")
            .field("source", &self.source)
            .field("scale", &self.scale)
            .finish()
    }
}

/// Convert an em size into the `PxScale` ab_glyph expects.
///
/// `PxScale` measures ascent-to-descent height, while font sizes are given
/// per em, so the two differ by `height_unscaled / units_per_em`.
pub fn em_scale<F: Font>(font: &F, em_px: f32) -> PxScale {
    match font.units_per_em() {
        Some(upem) if upem > 0.0 => PxScale::from(em_px * font.height_unscaled() / upem),
        _ => PxScale::from(em_px),
    }
}

/// One entry in an ordered font fallback list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FontCandidate {
    /// A TrueType/OpenType file on disk
    File { path: PathBuf },
    /// An installed font family looked up through the system font database.
    /// `sans-serif`, `serif` and `monospace` select the generic families.
    System {
        family: String,
        #[serde(default)]
        bold: bool,
    },
}

impl FontCandidate {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        FontCandidate::File { path: path.into() }
    }

    pub fn system(family: impl Into<String>, bold: bool) -> Self {
        FontCandidate::System {
            family: family.into(),
            bold,
        }
    }
}

impl fmt::Display for FontCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontCandidate::File { path } => write!(f, "file {}", path.display()),
            FontCandidate::System { family, bold: true } => write!(f, "system {family} (bold)"),
            FontCandidate::System { family, bold: false } => write!(f, "system {family}"),
        }
    }
}

/// The default fallback order.
///
/// The first two entries are the historical lookups: a bare `arial.ttf`
/// relative to the working directory, then the Windows fonts directory.
/// The system entries make the tool usable on machines without either.
pub fn default_candidates() -> Vec<FontCandidate> {
    vec![
        FontCandidate::file("arial.ttf"),
        FontCandidate::file("C:/Windows/Fonts/arial.ttf"),
        FontCandidate::system("Arial", true),
        FontCandidate::system("sans-serif", true),
    ]
}

/// Resolver over a font that has already been loaded.
#[derive(Clone)]
pub struct FixedFont {
    font: FontArc,
    name: String,
}

impl FixedFont {
    pub fn new(font: FontArc, name: impl Into<String>) -> Self {
        Self {
            font,
            name: name.into(),
        }
    }

    /// Parse raw TrueType/OpenType bytes.
    pub fn from_bytes(bytes: Vec<u8>, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let font = FontArc::try_from_vec(bytes)
            .map_err(|e| Error::InvalidFont(format!("{name}: {e}")))?;
        Ok(Self::new(font, name))
    }
}

impl FontResolver for FixedFont {
    fn resolve(&self, em_px: f32) -> Result<SizedFont> {
        Ok(SizedFont::new(self.font.clone(), em_px, self.name.clone()))
    }
}
