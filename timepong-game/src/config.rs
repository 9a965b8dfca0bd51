//! Injected configuration: game settings and the rarity distribution.
//!
//! The engine never owns or persists settings. Callers pass a snapshot into
//! every `draw`/`round_end` call and are free to change it between calls.
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::constants::{
    DEFAULT_PLAYER_COUNT, DEFAULT_RARITY_BOUNDS, DEFAULT_ROUNDS, DEFAULT_TIMER_MAX_MS,
    DEFAULT_TIMER_MIN_MS,
};
use crate::data::{DeckId, RarityTier};

/// Which selection strategy a session runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GameMode {
    /// Endless random draws; rounds are never counted.
    #[default]
    #[serde(rename = "endless")]
    Endless,
    /// Same draws as endless, but `rounds_remaining` counts down and
    /// exhaustion is signalled (never gated).
    #[serde(rename = "rounds")]
    Rounds,
    /// Draw without replacement from a caller-curated deck, reshuffling when
    /// exhausted. Rarity weighting is ignored.
    #[serde(rename = "setDeck")]
    SetDeck,
}

impl GameMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Endless => "endless",
            Self::Rounds => "rounds",
            Self::SetDeck => "setDeck",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "endless" => Ok(Self::Endless),
            "rounds" => Ok(Self::Rounds),
            "setDeck" => Ok(Self::SetDeck),
            _ => Err(()),
        }
    }
}

/// Cumulative rarity probability boundaries in [0, 100].
///
/// Non-decreasing, ending at 100. A malformed table never errors; the tier
/// selector degrades to `basic` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RarityDistribution {
    #[serde(default = "default_basic_bound")]
    pub basic: u8,
    #[serde(default = "default_regular_bound")]
    pub regular: u8,
    #[serde(default = "default_limited_bound")]
    pub limited: u8,
    #[serde(default = "default_special_bound")]
    pub special: u8,
    #[serde(default = "default_rare_bound")]
    pub rare: u8,
}

impl RarityDistribution {
    /// Boundaries paired with their tiers, in ascending tier order.
    #[must_use]
    pub const fn boundaries(&self) -> [(RarityTier, u8); 5] {
        [
            (RarityTier::Basic, self.basic),
            (RarityTier::Regular, self.regular),
            (RarityTier::Limited, self.limited),
            (RarityTier::Special, self.special),
            (RarityTier::Rare, self.rare),
        ]
    }

    /// Non-decreasing and terminating at 100.
    #[must_use]
    pub const fn is_well_formed(&self) -> bool {
        self.basic <= self.regular
            && self.regular <= self.limited
            && self.limited <= self.special
            && self.special <= self.rare
            && self.rare == 100
    }
}

impl Default for RarityDistribution {
    fn default() -> Self {
        Self {
            basic: DEFAULT_RARITY_BOUNDS[0],
            regular: DEFAULT_RARITY_BOUNDS[1],
            limited: DEFAULT_RARITY_BOUNDS[2],
            special: DEFAULT_RARITY_BOUNDS[3],
            rare: DEFAULT_RARITY_BOUNDS[4],
        }
    }
}

/// Caller-owned settings snapshot, read-only to the engine.
///
/// Every field is serde-defaulted so partial JSON merges over the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSettings {
    #[serde(default = "default_timer_min")]
    pub timer_min_ms: u64,
    #[serde(default = "default_timer_max")]
    pub timer_max_ms: u64,
    #[serde(default)]
    pub game_mode: GameMode,
    #[serde(default = "default_rounds")]
    pub rounds_count: u32,
    /// Card titles making up the fixed deck in `setDeck` mode.
    #[serde(default)]
    pub selected_cards: Vec<String>,
    #[serde(default = "default_enabled_decks")]
    pub enabled_decks: HashSet<DeckId>,
    #[serde(default)]
    pub rarity_distribution: RarityDistribution,
    #[serde(default = "default_true")]
    pub default_drinking_mode: bool,
    #[serde(default = "default_player_count")]
    pub player_count: u32,
}

impl GameSettings {
    /// Parse a settings snapshot, merging missing fields over the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is not an object of recognized shapes.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn deck_enabled(&self, deck: DeckId) -> bool {
        self.enabled_decks.contains(&deck)
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            timer_min_ms: default_timer_min(),
            timer_max_ms: default_timer_max(),
            game_mode: GameMode::default(),
            rounds_count: default_rounds(),
            selected_cards: Vec::new(),
            enabled_decks: default_enabled_decks(),
            rarity_distribution: RarityDistribution::default(),
            default_drinking_mode: true,
            player_count: default_player_count(),
        }
    }
}

fn default_basic_bound() -> u8 {
    DEFAULT_RARITY_BOUNDS[0]
}

fn default_regular_bound() -> u8 {
    DEFAULT_RARITY_BOUNDS[1]
}

fn default_limited_bound() -> u8 {
    DEFAULT_RARITY_BOUNDS[2]
}

fn default_special_bound() -> u8 {
    DEFAULT_RARITY_BOUNDS[3]
}

fn default_rare_bound() -> u8 {
    DEFAULT_RARITY_BOUNDS[4]
}

fn default_timer_min() -> u64 {
    DEFAULT_TIMER_MIN_MS
}

fn default_timer_max() -> u64 {
    DEFAULT_TIMER_MAX_MS
}

fn default_rounds() -> u32 {
    DEFAULT_ROUNDS
}

fn default_player_count() -> u32 {
    DEFAULT_PLAYER_COUNT
}

fn default_true() -> bool {
    true
}

fn default_enabled_decks() -> HashSet<DeckId> {
    [DeckId::Core, DeckId::WitchesAndWizards, DeckId::PopCulture]
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_yields_defaults() {
        let settings = GameSettings::from_json("{}").unwrap();
        assert_eq!(settings, GameSettings::default());
        assert_eq!(settings.game_mode, GameMode::Endless);
        assert_eq!(settings.rounds_count, DEFAULT_ROUNDS);
        assert!(settings.deck_enabled(DeckId::Core));
        assert!(!settings.deck_enabled(DeckId::Kinky));
    }

    #[test]
    fn partial_json_merges_over_defaults() {
        let settings = GameSettings::from_json(
            r#"{
                "gameMode": "setDeck",
                "selectedCards": ["Alpha", "Beta"],
                "rarityDistribution": { "basic": 10 }
            }"#,
        )
        .unwrap();
        assert_eq!(settings.game_mode, GameMode::SetDeck);
        assert_eq!(settings.selected_cards, vec!["Alpha", "Beta"]);
        assert_eq!(settings.rarity_distribution.basic, 10);
        assert_eq!(settings.rarity_distribution.rare, 100);
        assert_eq!(settings.timer_min_ms, DEFAULT_TIMER_MIN_MS);
    }

    #[test]
    fn default_distribution_is_well_formed() {
        assert!(RarityDistribution::default().is_well_formed());
        let broken = RarityDistribution {
            basic: 90,
            regular: 10,
            ..RarityDistribution::default()
        };
        assert!(!broken.is_well_formed());
    }

    #[test]
    fn game_mode_round_trips() {
        for mode in [GameMode::Endless, GameMode::Rounds, GameMode::SetDeck] {
            assert_eq!(mode.as_str().parse::<GameMode>(), Ok(mode));
        }
        assert!("arcade".parse::<GameMode>().is_err());
    }
}
