//! Rarity tier selection from a cumulative probability table.
use crate::config::RarityDistribution;
use crate::data::RarityTier;

/// Resolve a roll in [0, 100) against the cumulative boundaries.
///
/// Walks the tiers in ascending order and returns the first whose boundary
/// exceeds the roll. With `exclude_basic` the basic band is skipped and the
/// same roll resolves against the remaining boundaries (no re-roll), which
/// promotes a basic hit to regular. A roll past the final boundary means the
/// table is malformed; the answer degrades to basic. Total function, never
/// errors.
#[must_use]
pub fn select_tier(roll: f64, distribution: &RarityDistribution, exclude_basic: bool) -> RarityTier {
    for (tier, bound) in distribution.boundaries() {
        if exclude_basic && tier == RarityTier::Basic {
            continue;
        }
        if roll < f64::from(bound) {
            return tier;
        }
    }
    RarityTier::Basic
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_roll_50_is_regular() {
        let dist = RarityDistribution::default();
        assert_eq!(select_tier(50.0, &dist, false), RarityTier::Regular);
    }

    #[test]
    fn bands_resolve_in_ascending_order() {
        let dist = RarityDistribution::default();
        assert_eq!(select_tier(0.0, &dist, false), RarityTier::Basic);
        assert_eq!(select_tier(19.9, &dist, false), RarityTier::Basic);
        assert_eq!(select_tier(20.0, &dist, false), RarityTier::Regular);
        assert_eq!(select_tier(62.0, &dist, false), RarityTier::Limited);
        assert_eq!(select_tier(85.0, &dist, false), RarityTier::Special);
        assert_eq!(select_tier(97.0, &dist, false), RarityTier::Rare);
        assert_eq!(select_tier(99.999, &dist, false), RarityTier::Rare);
    }

    #[test]
    fn exclude_basic_promotes_to_regular_with_same_roll() {
        let dist = RarityDistribution::default();
        assert_eq!(select_tier(5.0, &dist, true), RarityTier::Regular);
        // Rolls outside the basic band are unaffected.
        assert_eq!(select_tier(70.0, &dist, true), RarityTier::Limited);
    }

    #[test]
    fn monotonic_in_roll() {
        let dist = RarityDistribution::default();
        let mut prev = RarityTier::Basic;
        let mut roll = 0.0;
        while roll < 100.0 {
            let tier = select_tier(roll, &dist, false);
            assert!(tier >= prev, "tier decreased at roll {roll}");
            prev = tier;
            roll += 0.25;
        }
    }

    #[test]
    fn malformed_table_degrades_to_basic() {
        let dist = RarityDistribution {
            basic: 5,
            regular: 10,
            limited: 15,
            special: 20,
            rare: 25,
        };
        assert_eq!(select_tier(80.0, &dist, false), RarityTier::Basic);
        assert_eq!(select_tier(80.0, &dist, true), RarityTier::Basic);
    }
}
