//! Installed-font lookup through `fontdb`

use ab_glyph::{FontArc, FontVec};
use fontdb::{Database, Family, Query, Weight};
use log::debug;

use crate::{Error, Result};

/// Preferred installed families for the generic `sans-serif` name.
pub const SANS_SERIF_FAMILIES: &[&str] = &[
    "Arial",
    "Helvetica",
    "DejaVu Sans",
    "Liberation Sans",
    "Noto Sans",
    "Ubuntu",
    "Cantarell",
    "FreeSans",
];

/// Preferred installed families for the generic `serif` name.
pub const SERIF_FAMILIES: &[&str] = &[
    "Times New Roman",
    "Times",
    "DejaVu Serif",
    "Liberation Serif",
    "Noto Serif",
    "FreeSerif",
];

/// Preferred installed families for the generic `monospace` name.
pub const MONOSPACE_FAMILIES: &[&str] = &[
    "Courier New",
    "Menlo",
    "DejaVu Sans Mono",
    "Liberation Mono",
    "Noto Sans Mono",
    "FreeMono",
];

/// Scan the platform font directories.
pub fn system_database() -> Database {
    let mut db = Database::new();
    db.load_system_fonts();
    debug!("system font database: {} faces", db.len());
    configure_generics(&mut db);
    db
}

/// Point the generic families at faces that are actually installed.
///
/// Each generic takes the first installed entry of its preference list. If
/// none is installed it takes the alphabetically first installed family, so
/// a database with any face at all resolves every generic name.
pub fn configure_generics(db: &mut Database) {
    if let Some(family) = pick_family(db, SANS_SERIF_FAMILIES) {
        debug!("sans-serif -> {family}");
        db.set_sans_serif_family(family);
    }
    if let Some(family) = pick_family(db, SERIF_FAMILIES) {
        debug!("serif -> {family}");
        db.set_serif_family(family);
    }
    if let Some(family) = pick_family(db, MONOSPACE_FAMILIES) {
        debug!("monospace -> {family}");
        db.set_monospace_family(family);
    }
}

fn has_family(db: &Database, name: &str) -> bool {
    db.faces()
        .any(|face| face.families.iter().any(|(f, _)| f.eq_ignore_ascii_case(name)))
}

fn pick_family(db: &Database, preferred: &[&str]) -> Option<String> {
    if let Some(name) = preferred.iter().find(|name| has_family(db, name)) {
        return Some(name.to_string());
    }
    let first = db
        .faces()
        .filter_map(|face| face.families.first().map(|(f, _)| f.clone()))
        .min();
    first
}

fn family_for(name: &str) -> Family<'_> {
    match name.to_ascii_lowercase().as_str() {
        "sans-serif" => Family::SansSerif,
        "serif" => Family::Serif,
        "monospace" => Family::Monospace,
        _ => Family::Name(name),
    }
}

/// Load the best face of `family` (bold when asked) from `db`.
pub fn load_family(db: &Database, family: &str, bold: bool) -> Result<FontArc> {
    let families = [family_for(family)];
    let query = Query {
        families: &families,
        weight: if bold { Weight::BOLD } else { Weight::NORMAL },
        ..Query::default()
    };
    let id = db
        .query(&query)
        .ok_or_else(|| Error::FontNotFound(family.to_string()))?;
    let font = db
        .with_face_data(id, |data, index| FontVec::try_from_vec_and_index(data.to_vec(), index))
        .ok_or_else(|| Error::FontNotFound(family.to_string()))?
        .map_err(|e| Error::InvalidFont(format!("{family}: {e}")))?;
    Ok(FontArc::new(font))
}

/// Any parseable installed face, for tests that need real outlines.
#[cfg(test)]
pub(crate) fn test_font() -> Option<FontArc> {
    let db = system_database();
    let found = db.faces().find_map(|face| {
        db.with_face_data(face.id, |data, index| {
            FontVec::try_from_vec_and_index(data.to_vec(), index).ok()
        })
        .flatten()
        .map(FontArc::new)
    });
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use ab_glyph::Font;

    #[test]
    fn generic_names_map_to_generic_families() {
        assert_eq!(family_for("sans-serif"), Family::SansSerif);
        assert_eq!(family_for("Serif"), Family::Serif);
        assert_eq!(family_for("monospace"), Family::Monospace);
        assert_eq!(family_for("Arial"), Family::Name("Arial"));
    }

    #[test]
    fn missing_family_is_not_found() {
        let db = Database::new();
        let err = load_family(&db, "ZZZNeverExists", true).err().unwrap();
        assert!(matches!(err, Error::FontNotFound(ref f) if f == "ZZZNeverExists"));
    }

    #[test]
    fn empty_database_picks_nothing() {
        let db = Database::new();
        assert_eq!(pick_family(&db, SANS_SERIF_FAMILIES), None);
    }

    #[test]
    fn generics_resolve_to_the_only_installed_family() {
        let Some(font) = test_font() else {
            eprintln!("No system font available; skipping.");
            return;
        };
        // a database holding just one face, whatever its family is called
        let mut db = Database::new();
        db.load_font_data(font.font_data().to_vec());
        let Some(installed) = db
            .faces()
            .find_map(|face| face.families.first().map(|(f, _)| f.clone()))
        else {
            return;
        };
        configure_generics(&mut db);

        for generic in ["sans-serif", "serif", "monospace"] {
            assert!(
                load_family(&db, generic, true).is_ok(),
                "{generic} should resolve to {installed}"
            );
        }
    }

    #[test]
    fn installed_preferred_family_wins() {
        let db = system_database();
        let preferred: Vec<&str> = SANS_SERIF_FAMILIES
            .iter()
            .copied()
            .filter(|name| has_family(&db, name))
            .collect();
        if let Some(first) = preferred.first() {
            assert_eq!(pick_family(&db, SANS_SERIF_FAMILIES).as_deref(), Some(*first));
        }
    }
}
