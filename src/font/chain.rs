//! Ordered font fallback

use std::cell::OnceCell;

use ab_glyph::FontArc;
use fontdb::Database;
use log::{info, warn};

use super::{system, FontCandidate, FontResolver, SizedFont};
use crate::{Error, Result};

/// Tries each candidate in order and returns the first font that loads.
///
/// A missing file, unparsable data or an uninstalled family moves on to
/// the next candidate. When every candidate fails, resolution fails with
/// [`Error::FontUnavailable`].
pub struct FontChain {
    candidates: Vec<FontCandidate>,
    // scanned on first system lookup only
    system: OnceCell<Database>,
}

impl FontChain {
    pub fn new(candidates: Vec<FontCandidate>) -> Self {
        Self {
            candidates,
            system: OnceCell::new(),
        }
    }

    fn load(&self, candidate: &FontCandidate) -> Result<FontArc> {
        match candidate {
            FontCandidate::File { path } => {
                let bytes = std::fs::read(path).map_err(|e| Error::io(path, e))?;
                FontArc::try_from_vec(bytes)
                    .map_err(|e| Error::InvalidFont(format!("{}: {e}", path.display())))
            }
            FontCandidate::System { family, bold } => {
                let db = self.system.get_or_init(system::system_database);
                system::load_family(db, family, *bold)
            }
        }
    }
}

impl Default for FontChain {
    fn default() -> Self {
        Self::new(super::default_candidates())
    }
}

impl FontResolver for FontChain {
    fn resolve(&self, em_px: f32) -> Result<SizedFont> {
        let mut tried = Vec::with_capacity(self.candidates.len());
        for candidate in &self.candidates {
            match self.load(candidate) {
                Ok(font) => {
                    info!("using font {candidate} at {em_px}px");
                    return Ok(SizedFont::new(font, em_px, candidate.to_string()));
                }
                Err(e) => {
                    warn!("font candidate {candidate} unavailable: {e}");
                    tried.push(format!("{candidate}: {e}"));
                }
            }
        }
        Err(Error::FontUnavailable { tried })
    }
}
