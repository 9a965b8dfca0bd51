//! Candidate filtering over the card corpus.
use std::collections::HashSet;

use crate::data::{Card, CardCorpus, CardKind, DeckId, RarityTier};
use crate::state::GameState;

/// Constraint set for one filtering pass.
#[derive(Debug, Clone)]
pub struct DrawConstraints<'a> {
    pub rarity: Option<RarityTier>,
    pub kind: Option<CardKind>,
    /// `Some(true)` keeps drinker cards, `Some(false)` non-drinker cards,
    /// `None` applies no drinking rule.
    pub is_drinking: Option<bool>,
    /// Excludes further spells while one is active.
    pub is_spell_active: bool,
    pub enabled_decks: &'a HashSet<DeckId>,
}

/// Pure, order-preserving candidate selection; every rule is conjunctive.
#[must_use]
pub fn filter_cards<'a>(
    corpus: &'a CardCorpus,
    constraints: &DrawConstraints<'_>,
    state: &GameState,
) -> Vec<&'a Card> {
    corpus
        .cards
        .iter()
        .filter(|card| {
            if !constraints.enabled_decks.contains(&card.deck) {
                return false;
            }
            if card.one_hit_wonder && state.played_one_hit_wonders.contains(&card.title) {
                return false;
            }
            if let Some(rarity) = constraints.rarity {
                if card.rarity != rarity {
                    return false;
                }
            }
            if let Some(kind) = constraints.kind {
                if card.kind != kind {
                    return false;
                }
            }
            match constraints.is_drinking {
                Some(true) if !card.for_drinkers => return false,
                Some(false) if !card.for_non_drinkers => return false,
                _ => {}
            }
            if constraints.is_spell_active && card.kind == CardKind::Spell {
                return false;
            }
            if let Some(current) = state.current_card.as_ref() {
                if card.title == current.title {
                    return false;
                }
            }
            true
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameSettings;

    fn make_card(title: &str, deck: DeckId, rarity: RarityTier, kind: CardKind) -> Card {
        Card {
            title: title.to_string(),
            deck,
            rarity,
            kind,
            for_drinkers: true,
            for_non_drinkers: true,
            ..Card::default()
        }
    }

    fn all_decks() -> HashSet<DeckId> {
        DeckId::ALL.into_iter().collect()
    }

    fn open_constraints(decks: &HashSet<DeckId>) -> DrawConstraints<'_> {
        DrawConstraints {
            rarity: None,
            kind: None,
            is_drinking: None,
            is_spell_active: false,
            enabled_decks: decks,
        }
    }

    #[test]
    fn disabled_decks_are_excluded() {
        let corpus = CardCorpus::from_cards(vec![
            make_card("Core card", DeckId::Core, RarityTier::Basic, CardKind::Action),
            make_card(
                "Pop card",
                DeckId::PopCulture,
                RarityTier::Basic,
                CardKind::Action,
            ),
        ]);
        let state = GameState::new(0, &GameSettings::default());
        let decks: HashSet<DeckId> = [DeckId::Core].into_iter().collect();
        let found = filter_cards(&corpus, &open_constraints(&decks), &state);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Core card");
    }

    #[test]
    fn played_one_hit_wonders_are_excluded() {
        let mut once = make_card("Once", DeckId::Core, RarityTier::Basic, CardKind::Action);
        once.one_hit_wonder = true;
        let corpus = CardCorpus::from_cards(vec![once]);
        let decks = all_decks();
        let mut state = GameState::new(0, &GameSettings::default());

        assert_eq!(filter_cards(&corpus, &open_constraints(&decks), &state).len(), 1);
        state.played_one_hit_wonders.insert("Once".to_string());
        assert!(filter_cards(&corpus, &open_constraints(&decks), &state).is_empty());
    }

    #[test]
    fn rarity_and_kind_constraints_are_exact() {
        let corpus = CardCorpus::from_cards(vec![
            make_card("A", DeckId::Core, RarityTier::Basic, CardKind::Action),
            make_card("B", DeckId::Core, RarityTier::Rare, CardKind::Challenge),
        ]);
        let decks = all_decks();
        let state = GameState::new(0, &GameSettings::default());

        let mut constraints = open_constraints(&decks);
        constraints.rarity = Some(RarityTier::Rare);
        let found = filter_cards(&corpus, &constraints, &state);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "B");

        let mut constraints = open_constraints(&decks);
        constraints.kind = Some(CardKind::Action);
        let found = filter_cards(&corpus, &constraints, &state);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "A");
    }

    #[test]
    fn drinking_rule_checks_the_matching_flag() {
        let mut sober_only = make_card("Sober", DeckId::Core, RarityTier::Basic, CardKind::Action);
        sober_only.for_drinkers = false;
        let mut drinker_only =
            make_card("Drinker", DeckId::Core, RarityTier::Basic, CardKind::Action);
        drinker_only.for_non_drinkers = false;
        let corpus = CardCorpus::from_cards(vec![sober_only, drinker_only]);
        let decks = all_decks();
        let state = GameState::new(0, &GameSettings::default());

        let mut constraints = open_constraints(&decks);
        constraints.is_drinking = Some(true);
        let found = filter_cards(&corpus, &constraints, &state);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Drinker");

        constraints.is_drinking = Some(false);
        let found = filter_cards(&corpus, &constraints, &state);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Sober");
    }

    #[test]
    fn active_spell_blocks_further_spells() {
        let corpus = CardCorpus::from_cards(vec![
            make_card("Fizz", DeckId::Core, RarityTier::Basic, CardKind::Spell),
            make_card("Plain", DeckId::Core, RarityTier::Basic, CardKind::Action),
        ]);
        let decks = all_decks();
        let state = GameState::new(0, &GameSettings::default());

        let mut constraints = open_constraints(&decks);
        constraints.is_spell_active = true;
        let found = filter_cards(&corpus, &constraints, &state);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Plain");
    }

    #[test]
    fn current_card_is_never_repeated() {
        let corpus = CardCorpus::from_cards(vec![
            make_card("A", DeckId::Core, RarityTier::Basic, CardKind::Action),
            make_card("B", DeckId::Core, RarityTier::Basic, CardKind::Action),
        ]);
        let decks = all_decks();
        let mut state = GameState::new(0, &GameSettings::default());
        state.current_card = Some(corpus.cards[0].clone());

        let found = filter_cards(&corpus, &open_constraints(&decks), &state);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "B");
    }

    #[test]
    fn filtering_is_idempotent_and_order_preserving() {
        let corpus = CardCorpus::from_cards(vec![
            make_card("A", DeckId::Core, RarityTier::Basic, CardKind::Action),
            make_card("B", DeckId::Core, RarityTier::Basic, CardKind::Action),
            make_card("C", DeckId::Core, RarityTier::Basic, CardKind::Action),
        ]);
        let decks = all_decks();
        let state = GameState::new(0, &GameSettings::default());
        let constraints = open_constraints(&decks);

        let first = filter_cards(&corpus, &constraints, &state);
        let second = filter_cards(&corpus, &constraints, &state);
        assert_eq!(first, second);
        let titles: Vec<_> = first.iter().map(|card| card.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }
}
