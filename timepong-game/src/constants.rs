//! Engine-wide defaults and fallback help text.
use crate::data::CardKind;

/// Env var that enables debug logging of the selection path.
pub const DEBUG_ENV_VAR: &str = "TIMEPONG_DEBUG_LOGS";

/// Default number of rounds in rounds mode.
pub const DEFAULT_ROUNDS: u32 = 10;

/// Default minimum round timer in milliseconds.
pub const DEFAULT_TIMER_MIN_MS: u64 = 2_000;

/// Default maximum round timer in milliseconds.
pub const DEFAULT_TIMER_MAX_MS: u64 = 40_000;

/// Default cumulative rarity boundaries: basic, regular, limited, special, rare.
pub const DEFAULT_RARITY_BOUNDS: [u8; 5] = [20, 62, 85, 97, 100];

/// Default number of players at the table.
pub const DEFAULT_PLAYER_COUNT: u32 = 2;

const TRAIT_HELP: [&str; 2] = [
    "Traits remain until the end of the game.",
    "If duplicate traits are drawn, the trait moves to that player.",
];
const ABILITY_HELP: [&str; 1] = ["Abilities have a one time use."];
const CURSE_HELP: [&str; 2] = [
    "Curse effects remain until another curse is drawn.",
    "If anyone breaks the curse they drink.",
];
const SPELL_HELP: [&str; 1] = ["Spell effects expire after a specified number of rounds."];
const DARE_HELP: [&str; 1] =
    ["Dare cards provide a 'chicken out' option if you're too embarrassed."];

/// Fallback help text for card kinds that carry none of their own.
#[must_use]
pub const fn default_help_text(kind: CardKind) -> &'static [&'static str] {
    match kind {
        CardKind::Trait => &TRAIT_HELP,
        CardKind::Ability => &ABILITY_HELP,
        CardKind::Curse => &CURSE_HELP,
        CardKind::Spell => &SPELL_HELP,
        CardKind::Dare => &DARE_HELP,
        _ => &[],
    }
}
