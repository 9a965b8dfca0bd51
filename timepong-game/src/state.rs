//! Mutable per-session game state.
//!
//! One instance per play group; the session is the sole writer. Callers get
//! read-only access after every operation so a presentation layer can react
//! to `current_card`, `current_effects`, and `rounds_remaining`.
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::config::GameSettings;
use crate::data::{Card, CardKind};
use crate::effects::ActiveEffect;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GameState {
    #[serde(default)]
    pub current_card: Option<Card>,
    #[serde(default)]
    pub current_effects: Vec<ActiveEffect>,
    #[serde(default)]
    pub rounds_remaining: u32,
    #[serde(default)]
    pub is_drinking: bool,
    #[serde(default)]
    pub played_one_hit_wonders: HashSet<String>,
    #[serde(default)]
    pub used_truths: HashSet<String>,
    /// Titles already drawn this cycle; only meaningful in `setDeck` mode.
    #[serde(default)]
    pub drawn_fixed_deck: HashSet<String>,
    #[serde(default)]
    pub seed: u64,
    #[serde(skip)]
    pub rng: Option<ChaCha20Rng>,
}

impl GameState {
    /// Fresh state from configuration defaults and a deterministic seed.
    #[must_use]
    pub fn new(seed: u64, settings: &GameSettings) -> Self {
        Self {
            current_card: None,
            current_effects: Vec::new(),
            rounds_remaining: settings.rounds_count,
            is_drinking: settings.default_drinking_mode,
            played_one_hit_wonders: HashSet::new(),
            used_truths: HashSet::new(),
            drawn_fixed_deck: HashSet::new(),
            seed,
            rng: Some(ChaCha20Rng::seed_from_u64(seed)),
        }
    }

    /// Restore initial values, reseeding the RNG from the stored seed.
    pub fn reset(&mut self, settings: &GameSettings) {
        *self = Self::new(self.seed, settings);
    }

    /// Whether any active effect is a spell.
    #[must_use]
    pub fn is_spell_active(&self) -> bool {
        self.current_effects
            .iter()
            .any(|effect| effect.card.kind == CardKind::Spell)
    }

    /// The active spell effect, if any.
    #[must_use]
    pub fn active_spell(&self) -> Option<&ActiveEffect> {
        self.current_effects
            .iter()
            .find(|effect| effect.card.kind == CardKind::Spell)
    }

    /// Borrow the RNG, rehydrating from the seed after deserialization.
    pub fn rng_mut(&mut self) -> &mut ChaCha20Rng {
        let seed = self.seed;
        self.rng
            .get_or_insert_with(|| ChaCha20Rng::seed_from_u64(seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects;

    #[test]
    fn new_state_takes_settings_defaults() {
        let settings = GameSettings {
            rounds_count: 7,
            default_drinking_mode: false,
            ..GameSettings::default()
        };
        let state = GameState::new(42, &settings);
        assert_eq!(state.rounds_remaining, 7);
        assert!(!state.is_drinking);
        assert_eq!(state.seed, 42);
        assert!(state.rng.is_some());
    }

    #[test]
    fn reset_clears_tracking_and_keeps_seed() {
        let settings = GameSettings::default();
        let mut state = GameState::new(9, &settings);
        state.played_one_hit_wonders.insert("Once".to_string());
        state.used_truths.insert("Truth?".to_string());
        state.drawn_fixed_deck.insert("Alpha".to_string());
        state.current_card = Some(Card::default());

        state.reset(&settings);
        assert!(state.played_one_hit_wonders.is_empty());
        assert!(state.used_truths.is_empty());
        assert!(state.drawn_fixed_deck.is_empty());
        assert!(state.current_card.is_none());
        assert_eq!(state.seed, 9);
    }

    #[test]
    fn spell_detection_looks_through_effects() {
        let settings = GameSettings::default();
        let mut state = GameState::new(0, &settings);
        assert!(!state.is_spell_active());

        let spell = Card {
            title: "Fizz".to_string(),
            kind: CardKind::Spell,
            duration: Some(3),
            ..Card::default()
        };
        effects::add_effect(&mut state.current_effects, spell);
        assert!(state.is_spell_active());
        assert_eq!(state.active_spell().unwrap().card.title, "Fizz");
    }

    #[test]
    fn rng_rehydrates_deterministically_from_seed() {
        use rand::Rng;
        let settings = GameSettings::default();
        let mut a = GameState::new(1234, &settings);
        let mut b = GameState::new(1234, &settings);
        b.rng = None; // simulate a deserialized state
        let x: u64 = a.rng_mut().gen_range(0..u64::MAX);
        let y: u64 = b.rng_mut().gen_range(0..u64::MAX);
        assert_eq!(x, y);
    }
}
