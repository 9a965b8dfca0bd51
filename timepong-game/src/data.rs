//! Card corpus records and the corpus container.
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::constants::default_help_text;

/// Rarity tiers ordered from most to least common.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum RarityTier {
    #[default]
    Basic,
    Regular,
    Limited,
    Special,
    Rare,
}

impl RarityTier {
    /// All tiers in ascending rarity order.
    pub const ALL: [Self; 5] = [
        Self::Basic,
        Self::Regular,
        Self::Limited,
        Self::Special,
        Self::Rare,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Regular => "regular",
            Self::Limited => "limited",
            Self::Special => "special",
            Self::Rare => "rare",
        }
    }
}

impl fmt::Display for RarityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RarityTier {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(Self::Basic),
            "regular" => Ok(Self::Regular),
            "limited" => Ok(Self::Limited),
            "special" => Ok(Self::Special),
            "rare" => Ok(Self::Rare),
            _ => Err(()),
        }
    }
}

/// What kind of card this is; drives post-draw processing and effect rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    Cauldron,
    #[default]
    Action,
    Challenge,
    Trait,
    Ability,
    Curse,
    Global,
    Spell,
    Perform,
    Dare,
}

impl CardKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cauldron => "cauldron",
            Self::Action => "action",
            Self::Challenge => "challenge",
            Self::Trait => "trait",
            Self::Ability => "ability",
            Self::Curse => "curse",
            Self::Global => "global",
            Self::Spell => "spell",
            Self::Perform => "perform",
            Self::Dare => "dare",
        }
    }

    /// Whether drawing this kind creates a timed effect slot.
    #[must_use]
    pub const fn is_effect(self) -> bool {
        matches!(self, Self::Spell | Self::Curse)
    }
}

impl fmt::Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CardKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cauldron" => Ok(Self::Cauldron),
            "action" => Ok(Self::Action),
            "challenge" => Ok(Self::Challenge),
            "trait" => Ok(Self::Trait),
            "ability" => Ok(Self::Ability),
            "curse" => Ok(Self::Curse),
            "global" => Ok(Self::Global),
            "spell" => Ok(Self::Spell),
            "perform" => Ok(Self::Perform),
            "dare" => Ok(Self::Dare),
            _ => Err(()),
        }
    }
}

/// Deck / expansion a card belongs to. Serde spellings match the corpus files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DeckId {
    #[default]
    #[serde(rename = "core")]
    Core,
    #[serde(rename = "W&W")]
    WitchesAndWizards,
    #[serde(rename = "popCulture")]
    PopCulture,
    #[serde(rename = "nudity")]
    Nudity,
    #[serde(rename = "orgasmic")]
    Orgasmic,
    #[serde(rename = "stripFlirt")]
    StripFlirt,
    #[serde(rename = "kinky")]
    Kinky,
}

impl DeckId {
    pub const ALL: [Self; 7] = [
        Self::Core,
        Self::WitchesAndWizards,
        Self::PopCulture,
        Self::Nudity,
        Self::Orgasmic,
        Self::StripFlirt,
        Self::Kinky,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::WitchesAndWizards => "W&W",
            Self::PopCulture => "popCulture",
            Self::Nudity => "nudity",
            Self::Orgasmic => "orgasmic",
            Self::StripFlirt => "stripFlirt",
            Self::Kinky => "kinky",
        }
    }
}

impl fmt::Display for DeckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeckId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "core" => Ok(Self::Core),
            "W&W" => Ok(Self::WitchesAndWizards),
            "popCulture" => Ok(Self::PopCulture),
            "nudity" => Ok(Self::Nudity),
            "orgasmic" => Ok(Self::Orgasmic),
            "stripFlirt" => Ok(Self::StripFlirt),
            "kinky" => Ok(Self::Kinky),
            _ => Err(()),
        }
    }
}

/// Outcome class of a bold rule line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    Success,
    Failure,
    Punishment,
    Chicken,
}

/// Bottom-of-card rule line (drink amounts, challenge results, chicken-out).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoldRule {
    pub instruction: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<RuleKind>,
    #[serde(default)]
    pub hide_from_non_drinkers: bool,
    #[serde(default)]
    pub hide_from_drinkers: bool,
}

impl BoldRule {
    #[must_use]
    pub fn plain(instruction: &str) -> Self {
        Self {
            instruction: instruction.to_string(),
            kind: None,
            hide_from_non_drinkers: false,
            hide_from_drinkers: false,
        }
    }
}

/// Bold rules stored inline; cards rarely carry more than two.
pub type BoldRules = SmallVec<[BoldRule; 2]>;

/// Primary rule used by some spell cards in place of bold rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimaryRule {
    pub instruction: String,
    #[serde(default)]
    pub hide_from_non_drinkers: bool,
}

/// Constraint carried forward from an active spell to limit the next draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Restriction {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<CardKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity: Option<RarityTier>,
}

/// A single immutable corpus record.
///
/// `title` is the identity key for repeat avoidance, one-hit-wonder tracking,
/// and effect removal; the corpus must not contain duplicate titles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    #[serde(default)]
    pub creator: String,
    #[serde(default)]
    pub created: String,
    #[serde(default)]
    pub for_drinkers: bool,
    #[serde(default)]
    pub for_non_drinkers: bool,
    #[serde(default)]
    pub deck: DeckId,
    #[serde(default)]
    pub rarity: RarityTier,
    #[serde(rename = "type", default)]
    pub kind: CardKind,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flavour: Option<String>,
    #[serde(default)]
    pub rules: Vec<String>,
    #[serde(default)]
    pub bold_rules: BoldRules,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_rule: Option<PrimaryRule>,
    #[serde(default)]
    pub one_hit_wonder: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restrict: Option<Restriction>,
    #[serde(default)]
    pub help_text: Vec<String>,
}

impl Card {
    /// Help lines to show for this card, falling back to the per-kind text.
    #[must_use]
    pub fn help_lines(&self) -> Vec<&str> {
        if self.help_text.is_empty() {
            default_help_text(self.kind).to_vec()
        } else {
            self.help_text.iter().map(String::as_str).collect()
        }
    }
}

/// Corpus shape violations detected at session setup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CorpusError {
    #[error("card corpus is empty")]
    Empty,
    #[error("duplicate card title in corpus: {0}")]
    DuplicateTitle(String),
}

/// The immutable card collection a session draws from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct CardCorpus {
    pub cards: Vec<Card>,
}

impl CardCorpus {
    /// Create an empty corpus (useful for tests).
    #[must_use]
    pub const fn empty() -> Self {
        Self { cards: Vec::new() }
    }

    /// Create a corpus from pre-parsed cards.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Load a corpus from a JSON array of cards.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into valid card records.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Look up a card by its title key.
    #[must_use]
    pub fn get(&self, title: &str) -> Option<&Card> {
        self.cards.iter().find(|card| card.title == title)
    }

    /// Check the corpus invariants: non-empty, titles unique.
    ///
    /// # Errors
    ///
    /// Returns `CorpusError::Empty` for a corpus with no cards and
    /// `CorpusError::DuplicateTitle` for the first repeated title found.
    pub fn validate(&self) -> Result<(), CorpusError> {
        if self.cards.is_empty() {
            return Err(CorpusError::Empty);
        }
        let mut seen: HashSet<&str> = HashSet::with_capacity(self.cards.len());
        for card in &self.cards {
            if !seen.insert(card.title.as_str()) {
                return Err(CorpusError::DuplicateTitle(card.title.clone()));
            }
        }
        Ok(())
    }
}
