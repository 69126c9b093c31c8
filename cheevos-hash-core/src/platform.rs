use serde::Serialize;

/// Consoles that have a dedicated hash recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Nes,
    Snes,
    Genesis,
}

impl Platform {
    /// Label printed next to a digest (`"SNES: <hash>"`).
    pub fn label(&self) -> &'static str {
        match self {
            Self::Nes => "NES",
            Self::Snes => "SNES",
            Self::Genesis => "Genesis",
        }
    }
}
