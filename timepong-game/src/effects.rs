//! Timed effect (spell/curse) lifecycle.
//!
//! Effects live in `GameState::current_effects`. Duration counts down once
//! per round; an effect that reaches exactly 0 survives one further round so
//! the table can see it expire, then drops out. Durationless effects (curses)
//! persist until explicitly removed.
use serde::{Deserialize, Serialize};

use crate::data::Card;

/// A spell or curse currently in play, with its remaining rounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveEffect {
    pub card: Card,
    /// Rounds left; `None` for effects that never expire on their own.
    pub remaining: Option<i32>,
}

impl ActiveEffect {
    #[must_use]
    pub fn new(card: Card) -> Self {
        let remaining = card.duration.and_then(|d| i32::try_from(d).ok());
        Self { card, remaining }
    }

    /// At zero and awaiting removal on the next round end.
    #[must_use]
    pub const fn is_expired(&self) -> bool {
        matches!(self.remaining, Some(0))
    }
}

/// What a `round_end` call produced.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RoundOutcome {
    /// Effects that hit 0 this round; still present for one more round.
    pub just_expired: Vec<Card>,
    /// Effects dropped this round (were already at 0 last round).
    pub removed: Vec<Card>,
    /// Rounds mode only: `rounds_remaining` reached 0.
    pub rounds_exhausted: bool,
}

/// Put a drawn spell/curse into play. The one-spell/one-curse convention is
/// the caller's; the draw filter refuses new spells while one is active.
pub fn add_effect(effects: &mut Vec<ActiveEffect>, card: Card) {
    effects.push(ActiveEffect::new(card));
}

/// Remove an effect by title. Safe no-op when absent.
pub fn remove_effect(effects: &mut Vec<ActiveEffect>, title: &str) -> Option<Card> {
    let idx = effects.iter().position(|effect| effect.card.title == title)?;
    Some(effects.remove(idx).card)
}

/// Count one round against every timed effect.
///
/// Returns the effects that just reached 0 and those removed outright.
pub fn tick_effects(effects: &mut Vec<ActiveEffect>) -> (Vec<Card>, Vec<Card>) {
    let mut just_expired = Vec::new();
    let mut removed = Vec::new();

    effects.retain_mut(|effect| {
        let Some(remaining) = effect.remaining.as_mut() else {
            return true;
        };
        *remaining -= 1;
        if *remaining < 0 {
            removed.push(effect.card.clone());
            false
        } else {
            if *remaining == 0 {
                just_expired.push(effect.card.clone());
            }
            true
        }
    });

    (just_expired, removed)
}
