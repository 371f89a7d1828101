// =============================================================================
// Shared types used across the signal server
// =============================================================================

use serde::{Deserialize, Serialize};

/// Trading signal derived from the EMA crossover of the two most recent bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Signal {
    /// Short EMA crossed above the long EMA on the latest bar.
    Buy,
    /// Short EMA crossed below the long EMA on the latest bar.
    Sell,
    /// Both EMAs defined, no crossover between the last two bars.
    Hold,
    /// Not enough EMA history to compare the last two bars.
    Neutral,
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell"),
            Self::Hold => write!(f, "hold"),
            Self::Neutral => write!(f, "neutral"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_lowercase_literals() {
        assert_eq!(serde_json::to_string(&Signal::Buy).unwrap(), "\"buy\"");
        assert_eq!(serde_json::to_string(&Signal::Sell).unwrap(), "\"sell\"");
        assert_eq!(serde_json::to_string(&Signal::Hold).unwrap(), "\"hold\"");
        assert_eq!(serde_json::to_string(&Signal::Neutral).unwrap(), "\"neutral\"");
    }

    #[test]
    fn display_matches_wire_format() {
        assert_eq!(Signal::Buy.to_string(), "buy");
        assert_eq!(Signal::Neutral.to_string(), "neutral");
    }
}
