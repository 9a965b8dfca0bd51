//! Exact-match card browsing, used by list screens rather than gameplay.
//!
//! The query is a closed set of typed comparators over the Card schema;
//! unset fields match everything.
use serde::{Deserialize, Serialize};

use crate::data::{Card, CardCorpus, CardKind, DeckId, RarityTier};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CardQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deck: Option<DeckId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity: Option<RarityTier>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<CardKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub for_drinkers: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub for_non_drinkers: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub one_hit_wonder: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
}

impl CardQuery {
    #[must_use]
    pub fn matches(&self, card: &Card) -> bool {
        self.creator.as_ref().is_none_or(|v| *v == card.creator)
            && self.deck.is_none_or(|v| v == card.deck)
            && self.rarity.is_none_or(|v| v == card.rarity)
            && self.kind.is_none_or(|v| v == card.kind)
            && self.title.as_ref().is_none_or(|v| *v == card.title)
            && self.for_drinkers.is_none_or(|v| v == card.for_drinkers)
            && self
                .for_non_drinkers
                .is_none_or(|v| v == card.for_non_drinkers)
            && self.one_hit_wonder.is_none_or(|v| v == card.one_hit_wonder)
            && self.duration.is_none_or(|v| Some(v) == card.duration)
    }
}

/// Cards matching every set query field, in corpus order.
#[must_use]
pub fn browse<'a>(corpus: &'a CardCorpus, query: &CardQuery) -> Vec<&'a Card> {
    corpus
        .cards
        .iter()
        .filter(|card| query.matches(card))
        .collect()
}
