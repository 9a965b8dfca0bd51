//! Card draw engine: context merge, weighted roll, fallback cascade, and
//! post-selection processing.
#[cfg(debug_assertions)]
use crate::constants::DEBUG_ENV_VAR;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::config::{GameMode, GameSettings};
use crate::data::{Card, CardCorpus, CardKind, RarityTier, Restriction, RuleKind};
use crate::filter::{filter_cards, DrawConstraints};
use crate::rarity::select_tier;
use crate::state::GameState;
use crate::truth::next_truth;

#[cfg(debug_assertions)]
fn debug_log_enabled() -> bool {
    matches!(std::env::var(DEBUG_ENV_VAR), Ok(val) if val != "0")
}

#[cfg(not(debug_assertions))]
const fn debug_log_enabled() -> bool {
    false
}

/// Per-draw overrides. Unset fields fall back to session defaults: drinking
/// mode from state, the restriction from the active spell. A caller-supplied
/// restriction replaces the inherited one wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DrawContext {
    pub is_drinking: Option<bool>,
    pub restrict: Option<Restriction>,
}

/// Draw the next card. Never fails: empty candidate sets cascade down to a
/// guaranteed corpus fallback so play is never interrupted.
pub(crate) fn draw(
    corpus: &CardCorpus,
    truths: &[String],
    settings: &GameSettings,
    state: &mut GameState,
    ctx: &DrawContext,
) -> Card {
    match settings.game_mode {
        GameMode::SetDeck => draw_fixed_deck(corpus, truths, settings, state),
        GameMode::Endless | GameMode::Rounds => {
            draw_weighted(corpus, truths, settings, state, ctx)
        }
    }
}

fn draw_weighted(
    corpus: &CardCorpus,
    truths: &[String],
    settings: &GameSettings,
    state: &mut GameState,
    ctx: &DrawContext,
) -> Card {
    let is_drinking = ctx.is_drinking.unwrap_or(state.is_drinking);
    let is_spell_active = state.is_spell_active();
    let inherited = state.active_spell().and_then(|effect| effect.card.restrict);
    let restrict = ctx.restrict.or(inherited);

    let roll = state.rng_mut().gen_range(0.0..100.0);
    let current_is_basic = state
        .current_card
        .as_ref()
        .is_some_and(|card| card.rarity == RarityTier::Basic);
    let exclude_basic =
        current_is_basic || restrict.as_ref().is_some_and(|r| r.kind.is_some());
    let tier = select_tier(roll, &settings.rarity_distribution, exclude_basic);

    if debug_log_enabled() {
        println!(
            "Card draw | roll:{roll:.1} tier:{tier} exclude_basic:{exclude_basic} spell_active:{is_spell_active}"
        );
    }

    let constraints = DrawConstraints {
        rarity: Some(tier),
        kind: restrict.as_ref().and_then(|r| r.kind),
        is_drinking: Some(is_drinking),
        is_spell_active,
        enabled_decks: &settings.enabled_decks,
    };
    let candidates = filter_cards(corpus, &constraints, state);
    if let Some(card) = pick_uniform(&candidates, state) {
        return post_process(card, truths, state);
    }

    // Fallback 1: drop the rolled tier; a spell's own rarity pin still holds.
    let fallback = DrawConstraints {
        rarity: restrict.as_ref().and_then(|r| r.rarity),
        ..constraints
    };
    let candidates = filter_cards(corpus, &fallback, state);
    if let Some(card) = pick_uniform(&candidates, state) {
        return post_process(card, truths, state);
    }

    if debug_log_enabled() {
        println!("Card draw | corpus exhausted, raw fallback");
    }
    exhausted_fallback(corpus)
}

fn draw_fixed_deck(
    corpus: &CardCorpus,
    truths: &[String],
    settings: &GameSettings,
    state: &mut GameState,
) -> Card {
    let selection: Vec<&Card> = corpus
        .cards
        .iter()
        .filter(|card| settings.selected_cards.iter().any(|t| *t == card.title))
        .collect();
    if selection.is_empty() {
        return exhausted_fallback(corpus);
    }

    let candidates: Vec<&Card> = selection
        .iter()
        .copied()
        .filter(|card| !state.drawn_fixed_deck.contains(&card.title))
        .collect();

    let card = if candidates.is_empty() {
        // Full cycle complete: reshuffle, seeded with the card that starts
        // the next cycle.
        state.drawn_fixed_deck.clear();
        let idx = state.rng_mut().gen_range(0..selection.len());
        selection[idx].clone()
    } else {
        let idx = state.rng_mut().gen_range(0..candidates.len());
        candidates[idx].clone()
    };
    state.drawn_fixed_deck.insert(card.title.clone());

    post_process(card, truths, state)
}

fn pick_uniform(candidates: &[&Card], state: &mut GameState) -> Option<Card> {
    if candidates.is_empty() {
        return None;
    }
    let idx = state.rng_mut().gen_range(0..candidates.len());
    Some(candidates[idx].clone())
}

/// The exhaustion guarantee: the first basic card, or failing that the first
/// card in corpus order. Bypasses post-processing so tracking state is left
/// untouched.
fn exhausted_fallback(corpus: &CardCorpus) -> Card {
    corpus
        .cards
        .iter()
        .find(|card| card.rarity == RarityTier::Basic)
        .or_else(|| corpus.cards.first())
        .cloned()
        .unwrap_or_default()
}

/// Applied to every selected card except the raw exhaustion fallback: dare
/// chicken rules get a fresh truth question, one-hit-wonder titles are
/// recorded, and the card becomes the current card.
fn post_process(mut card: Card, truths: &[String], state: &mut GameState) -> Card {
    if card.kind == CardKind::Dare {
        let seed = state.seed;
        let rng = state
            .rng
            .get_or_insert_with(|| ChaCha20Rng::seed_from_u64(seed));
        for rule in &mut card.bold_rules {
            if rule.kind == Some(RuleKind::Chicken) {
                rule.instruction = next_truth(truths, &mut state.used_truths, rng);
            }
        }
    }

    if card.one_hit_wonder {
        state.played_one_hit_wonders.insert(card.title.clone());
    }

    state.current_card = Some(card.clone());
    card
}
