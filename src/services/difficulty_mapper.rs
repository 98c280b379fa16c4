use crate::models::Difficulty;

/// Coarse difficulty aliases accepted from clients and the catalog label each one selects
pub const DIFFICULTY_ALIASES: [(&str, Difficulty); 7] = [
    ("beginner", Difficulty::Pemula),
    ("easy", Difficulty::Pemula),
    ("intermediate", Difficulty::Menengah),
    ("medium", Difficulty::Menengah),
    ("advanced", Difficulty::Lanjutan),
    ("hard", Difficulty::Lanjutan),
    ("expert", Difficulty::Lanjutan),
];

/// Translate a difficulty alias into the catalog vocabulary.
///
/// Unrecognized input is returned unchanged, so callers may also pass catalog
/// labels directly.
pub fn map_difficulty(alias: &str) -> &str {
    DIFFICULTY_ALIASES
        .iter()
        .find(|(known, _)| *known == alias)
        .map(|(_, label)| label.as_str())
        .unwrap_or(alias)
}
