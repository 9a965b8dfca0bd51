//! Time Pong Card Engine
//!
//! Platform-agnostic core logic for the Time Pong party card game: rarity
//! weighted draws with fallback cascades, player-context filtering, truth
//! question rotation, timed spell/curse effects, and the three deck-mode
//! strategies. No UI, audio, or storage dependencies; the corpus and
//! settings are injected by the embedding platform.

pub mod browse;
pub mod config;
pub mod constants;
pub mod data;
pub mod draw;
pub mod effects;
pub mod filter;
pub mod rarity;
pub mod session;
pub mod state;
pub mod truth;

// Re-export commonly used types
pub use browse::CardQuery;
pub use config::{GameMode, GameSettings, RarityDistribution};
pub use data::{
    BoldRule, BoldRules, Card, CardCorpus, CardKind, CorpusError, DeckId, PrimaryRule, RarityTier,
    Restriction, RuleKind,
};
pub use draw::DrawContext;
pub use effects::{ActiveEffect, RoundOutcome};
pub use filter::{filter_cards, DrawConstraints};
pub use rarity::select_tier;
pub use session::GameSession;
pub use state::GameState;
pub use truth::next_truth;

/// Trait for abstracting corpus and truth-pool loading.
/// Platform-specific implementations should provide this.
pub trait CardLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the card corpus from the platform-specific source.
    ///
    /// # Errors
    ///
    /// Returns an error if the corpus cannot be loaded or parsed.
    fn load_cards(&self) -> Result<CardCorpus, Self::Error>;

    /// Load the truth question pool.
    ///
    /// # Errors
    ///
    /// Returns an error if the pool cannot be loaded or parsed.
    fn load_truths(&self) -> Result<Vec<String>, Self::Error>;
}

/// Main engine facade for creating game sessions.
pub struct GameEngine<L>
where
    L: CardLoader,
{
    loader: L,
}

impl<L> GameEngine<L>
where
    L: CardLoader,
{
    /// Create a new engine with the provided loader.
    pub const fn new(loader: L) -> Self {
        Self { loader }
    }

    /// Load data and construct a session with the given seed and defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the data cannot be loaded, or if the corpus is
    /// empty or contains duplicate titles. This is the only point where bad
    /// data is fatal; in-play conditions always degrade to fallbacks.
    pub fn create_session(
        &self,
        seed: u64,
        settings: &GameSettings,
    ) -> Result<GameSession, anyhow::Error>
    where
        L::Error: Into<anyhow::Error>,
    {
        let corpus = self.loader.load_cards().map_err(Into::into)?;
        let truths = self.loader.load_truths().map_err(Into::into)?;
        Ok(GameSession::new(corpus, truths, seed, settings)?)
    }
}
