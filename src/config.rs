//! Engine and match configuration.
//!
//! Loaded from TOML, e.g.
//!
//! ```toml
//! [side_a]
//! depth = 6
//! heuristic = "positional"
//!
//! [side_b]
//! depth = 4
//! turn_policy = "always-alternate"
//! ```
//!
//! A side without a table is played by a human. `first = "B"` at the top
//! level lets side B open; side A opens otherwise.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::Side;
use crate::engine::DEFAULT_DEPTH;
use crate::error::MancalaError;
use crate::eval::HeuristicKind;
use crate::search::TurnPolicy;

/// Settings for one automated player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Plies searched per move
    pub depth: u8,
    pub turn_policy: TurnPolicy,
    pub heuristic: HeuristicKind,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            turn_policy: TurnPolicy::default(),
            heuristic: HeuristicKind::default(),
        }
    }
}

/// Who plays each side (`None` means a human) and who opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub side_a: Option<EngineConfig>,
    pub side_b: Option<EngineConfig>,
    /// Side making the first move
    pub first: Side,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            side_a: None,
            side_b: None,
            first: Side::A,
        }
    }
}

impl MatchConfig {
    /// Human on `human`, `engine` on the other side. The human opens.
    pub fn human_vs_computer(human: Side, engine: EngineConfig) -> Self {
        let mut config = Self {
            first: human,
            ..Self::default()
        };
        config.set(human.opponent(), Some(engine));
        config
    }

    /// Two engines; side A opens.
    pub fn computer_vs_computer(a: EngineConfig, b: EngineConfig) -> Self {
        Self {
            side_a: Some(a),
            side_b: Some(b),
            ..Self::default()
        }
    }

    pub fn get(&self, side: Side) -> Option<&EngineConfig> {
        match side {
            Side::A => self.side_a.as_ref(),
            Side::B => self.side_b.as_ref(),
        }
    }

    pub fn set(&mut self, side: Side, engine: Option<EngineConfig>) {
        match side {
            Side::A => self.side_a = engine,
            Side::B => self.side_b = engine,
        }
    }

    /// Parse a TOML document.
    ///
    /// # Errors
    /// `MancalaError::Config` when the document is not valid.
    pub fn from_toml_str(text: &str) -> Result<Self, MancalaError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML file.
    ///
    /// # Errors
    /// `MancalaError::Config` when the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MancalaError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), ?config, "loaded match config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let text = r#"
            [side_a]
            depth = 6
            heuristic = "positional"

            [side_b]
            depth = 4
            turn_policy = "always-alternate"
        "#;
        let config = MatchConfig::from_toml_str(text).unwrap();

        let a = config.get(Side::A).unwrap();
        assert_eq!(a.depth, 6);
        assert_eq!(a.heuristic, HeuristicKind::Positional);
        assert_eq!(a.turn_policy, TurnPolicy::HonorBonusTurn);

        let b = config.get(Side::B).unwrap();
        assert_eq!(b.depth, 4);
        assert_eq!(b.turn_policy, TurnPolicy::AlwaysAlternate);
        assert_eq!(b.heuristic, HeuristicKind::StoreDifference);
    }

    #[test]
    fn test_missing_side_is_human() {
        let config = MatchConfig::from_toml_str("[side_b]\n").unwrap();
        assert!(config.get(Side::A).is_none());
        assert_eq!(config.get(Side::B), Some(&EngineConfig::default()));
    }

    #[test]
    fn test_invalid_config_is_reported() {
        let err = MatchConfig::from_toml_str("[side_a]\ndepth = \"deep\"\n").unwrap_err();
        assert!(matches!(err, MancalaError::Config { .. }));
    }

    #[test]
    fn test_missing_file_is_reported() {
        let err = MatchConfig::load("/nonexistent/mancala.toml").unwrap_err();
        assert!(matches!(err, MancalaError::Config { .. }));
    }

    #[test]
    fn test_human_vs_computer() {
        let config = MatchConfig::human_vs_computer(Side::B, EngineConfig::default());
        assert!(config.get(Side::A).is_some());
        assert!(config.get(Side::B).is_none());
        assert_eq!(config.first, Side::B);
    }

    #[test]
    fn test_first_side() {
        assert_eq!(MatchConfig::default().first, Side::A);

        let config = MatchConfig::from_toml_str("first = \"B\"\n[side_a]\n").unwrap();
        assert_eq!(config.first, Side::B);
        assert!(config.get(Side::A).is_some());
    }
}
