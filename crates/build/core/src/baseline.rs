//! Character-level health and energy baseline under the current build.

use crate::attribute::AttributeId;
use crate::attributes::AttributeAllocation;
use crate::calc::ENERGY_STORAGE_PER_RANK;
use crate::config::BuildConfig;
use crate::loadout::ModifierTotals;
use crate::profession::Profession;

/// Adjusted base health, energy, and regeneration of a character.
///
/// Derived, never stored: recompute after any allocation or loadout change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterBaseline {
    pub health: i32,
    pub energy: i32,
    /// Energy regeneration in pips, untouched by modifiers.
    pub energy_regen: u8,
}

impl CharacterBaseline {
    /// Computes the baseline for a primary profession under the given
    /// allocation and loadout totals.
    ///
    /// Health is the fixed max-level base plus the loadout delta. Energy is
    /// the profession base, the loadout delta, and the Energy Storage
    /// passive at its effective rank.
    pub fn compute(
        primary: Profession,
        allocation: &AttributeAllocation,
        totals: &ModifierTotals,
    ) -> Self {
        let storage_rank = allocation.effective_rank(
            AttributeId::ENERGY_STORAGE,
            totals.attribute_bonus(AttributeId::ENERGY_STORAGE),
        );
        Self {
            health: BuildConfig::BASE_HEALTH + totals.health,
            energy: primary.base_energy()
                + totals.energy
                + storage_rank as i32 * ENERGY_STORAGE_PER_RANK,
            energy_regen: primary.energy_regen(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loadout::{Consumable, Loadout, Rune, RuneTier};

    #[test]
    fn elementalist_baseline_with_storage_and_loadout() {
        let mut allocation = AttributeAllocation::new();
        allocation.set_rank(AttributeId::ENERGY_STORAGE, 10).unwrap();

        let mut loadout = Loadout::new(Profession::Elementalist);
        loadout.set_consumable(Consumable::GrailOfMight, true);
        assert!(loadout.add_rune(Rune::Attunement));
        assert!(loadout.add_rune(Rune::Vigor(RuneTier::Superior)));
        let totals = loadout.totals();

        let baseline = CharacterBaseline::compute(Profession::Elementalist, &allocation, &totals);
        // 480 base + 100 grail + 50 vigor.
        assert_eq!(baseline.health, 630);
        // 30 base + 10 grail + 2 attunement + (10 + 1 all-attributes) × 3.
        assert_eq!(baseline.energy, 75);
        assert_eq!(baseline.energy_regen, 4);
    }

    #[test]
    fn warrior_baseline_is_low_energy() {
        let allocation = AttributeAllocation::new();
        let totals = ModifierTotals::default();
        let baseline = CharacterBaseline::compute(Profession::Warrior, &allocation, &totals);
        assert_eq!(baseline.health, BuildConfig::BASE_HEALTH);
        assert_eq!(baseline.energy, 20);
        assert_eq!(baseline.energy_regen, 2);
    }
}
