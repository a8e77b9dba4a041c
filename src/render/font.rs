use font_kit::source::SystemSource;
use log::{info, warn};

use crate::config::FontConfig;

/// Why the preferred family cannot be used
fn check_family(name: &str, sample: &str) -> Result<(), String> {
    let family = SystemSource::new()
        .select_family_by_name(name)
        .map_err(|e| format!("{:?}", e))?;
    let handle = family
        .fonts()
        .first()
        .ok_or_else(|| "family has no faces".to_string())?;
    let font = handle.load().map_err(|e| format!("{:?}", e))?;
    match sample
        .chars()
        .filter(|c| !c.is_whitespace())
        .find(|&c| font.glyph_for_char(c).is_none())
    {
        Some(c) => Err(format!("no glyph for {:?}", c)),
        None => Ok(()),
    }
}

/// Pick the family used for every label.
///
/// The preferred family must be installed and cover every character of
/// `sample`; otherwise `fallback_family` is used with a notice. This never
/// fails.
pub fn resolve_family(font: &FontConfig, sample: &str) -> String {
    match check_family(&font.preferred_family, sample) {
        Ok(()) => {
            info!("using font family '{}'", font.preferred_family);
            font.preferred_family.clone()
        }
        Err(reason) => {
            warn!(
                "font family '{}' unavailable ({}), falling back to '{}'",
                font.preferred_family, reason, font.fallback_family
            );
            font.fallback_family.clone()
        }
    }
}
