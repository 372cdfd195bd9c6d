//! Status categories for the indicator dot.

/// Status category derived from a record's free-text status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CharacterStatus {
    Alive,
    Dead,
    /// Neutral category, also used for any unrecognized status text
    #[default]
    Unknown,
}

impl CharacterStatus {
    /// Classify a free-text status, ignoring case and surrounding whitespace
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "alive" => CharacterStatus::Alive,
            "dead" => CharacterStatus::Dead,
            "unknown" => CharacterStatus::Unknown,
            _ => {
                tracing::debug!(status = raw, "Unrecognized status, using neutral color");
                CharacterStatus::Unknown
            }
        }
    }

    /// BEM modifier for this status
    pub fn modifier(&self) -> &'static str {
        match self {
            CharacterStatus::Alive => "alive",
            CharacterStatus::Dead => "dead",
            CharacterStatus::Unknown => "unknown",
        }
    }

    /// Full class list of the indicator dot
    pub fn class(&self) -> &'static str {
        match self {
            CharacterStatus::Alive => "card__status card__status--alive",
            CharacterStatus::Dead => "card__status card__status--dead",
            CharacterStatus::Unknown => "card__status card__status--unknown",
        }
    }

    /// Indicator dot color
    pub fn color(&self) -> &'static str {
        match self {
            CharacterStatus::Alive => "#55cc44",
            CharacterStatus::Dead => "#d63d2e",
            CharacterStatus::Unknown => "#9e9e9e",
        }
    }
}

impl From<&str> for CharacterStatus {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}
