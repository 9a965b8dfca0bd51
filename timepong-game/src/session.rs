//! High-level session wrapper binding the corpus and truth pool to a
//! mutable game state. One instance per play group; no shared state between
//! sessions.
use rand::Rng;

use crate::browse::{browse, CardQuery};
use crate::config::{GameMode, GameSettings};
use crate::data::{Card, CardCorpus, CorpusError};
use crate::draw::{self, DrawContext};
use crate::effects::{self, RoundOutcome};
use crate::state::GameState;

#[derive(Debug, Clone)]
pub struct GameSession {
    corpus: CardCorpus,
    truths: Vec<String>,
    state: GameState,
}

impl GameSession {
    /// Construct a fresh session from a validated corpus, truth pool, seed,
    /// and configuration defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the corpus is empty or contains duplicate titles.
    /// This is the only point where bad data is fatal; once play starts,
    /// every operation degrades to a defined fallback instead.
    pub fn new(
        corpus: CardCorpus,
        truths: Vec<String>,
        seed: u64,
        settings: &GameSettings,
    ) -> Result<Self, CorpusError> {
        corpus.validate()?;
        let state = GameState::new(seed, settings);
        Ok(Self {
            corpus,
            truths,
            state,
        })
    }

    /// Draw the next card. Always returns a card.
    pub fn draw(&mut self, settings: &GameSettings, ctx: &DrawContext) -> Card {
        draw::draw(&self.corpus, &self.truths, settings, &mut self.state, ctx)
    }

    /// Put a just-closed spell/curse card into play.
    pub fn add_effect(&mut self, card: Card) {
        effects::add_effect(&mut self.state.current_effects, card);
    }

    /// Remove an active effect by title match. No-op when absent.
    pub fn remove_effect(&mut self, card: &Card) {
        let _ = effects::remove_effect(&mut self.state.current_effects, &card.title);
    }

    /// Close the round: count down effect durations and, in rounds mode,
    /// the remaining-rounds counter. Exhaustion is a signal, never a gate;
    /// the table can keep playing past zero.
    pub fn round_end(&mut self, settings: &GameSettings) -> RoundOutcome {
        let (just_expired, removed) = effects::tick_effects(&mut self.state.current_effects);
        let mut rounds_exhausted = false;
        if settings.game_mode == GameMode::Rounds {
            self.state.rounds_remaining = self.state.rounds_remaining.saturating_sub(1);
            rounds_exhausted = self.state.rounds_remaining == 0;
        }
        RoundOutcome {
            just_expired,
            removed,
            rounds_exhausted,
        }
    }

    /// Restore the session to its initial values (same seed, fresh RNG).
    pub fn reset(&mut self, settings: &GameSettings) {
        self.state.reset(settings);
    }

    /// Switch the table between drinking and non-drinking play.
    pub fn set_drinking(&mut self, is_drinking: bool) {
        self.state.is_drinking = is_drinking;
    }

    /// The full corpus, for list screens.
    #[must_use]
    pub fn all_cards(&self) -> &[Card] {
        &self.corpus.cards
    }

    /// Exact-match browse over the corpus.
    #[must_use]
    pub fn browse(&self, query: &CardQuery) -> Vec<&Card> {
        browse(&self.corpus, query)
    }

    /// Roll the next round timer duration, uniform within the configured
    /// bounds. Inverted bounds are tolerated by swapping them.
    pub fn next_timer_ms(&mut self, settings: &GameSettings) -> u64 {
        let min = settings.timer_min_ms.min(settings.timer_max_ms);
        let max = settings.timer_min_ms.max(settings.timer_max_ms);
        if min == max {
            return min;
        }
        self.state.rng_mut().gen_range(min..=max)
    }

    /// Read-only view of the session state for rendering.
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// The corpus this session draws from.
    #[must_use]
    pub const fn corpus(&self) -> &CardCorpus {
        &self.corpus
    }
}
