//! Equipment and consumable loadout, and its modifier aggregation.
//!
//! The loadout owns the mutable set of active consumables, applied runes,
//! the optional focus weapon, and the uniform title bonus. Like the
//! allocation model it is single-owner: mutations validate against the
//! current state and either commit or no-op, so concurrent interleaving is
//! not supported.
//!
//! Capacity and legality violations are silent no-ops rather than errors —
//! a sixth rune or a rune for the wrong profession simply does not apply.
//! Mutators return `bool` so hosts can reflect the outcome without treating
//! it as failure.

mod consumable;
mod rune;
mod totals;
mod weapon;

pub use consumable::{Consumable, ConsumableStats};
pub use rune::{Rune, RuneTier};
pub use totals::{GlobalModifiers, ModifierTotals};
pub use weapon::FocusWeapon;

use std::collections::BTreeSet;

use arrayvec::ArrayVec;

use crate::config::BuildConfig;
use crate::profession::Profession;

/// Consumables, runes, weapon, and title bonus applied to a build.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Loadout {
    consumables: BTreeSet<Consumable>,
    runes: ArrayVec<Rune, { BuildConfig::MAX_RUNES }>,
    weapon: Option<FocusWeapon>,
    title_bonus: u8,
    primary: Profession,
}

impl Loadout {
    pub fn new(primary: Profession) -> Self {
        Self {
            primary,
            ..Self::default()
        }
    }

    // ===== consumables =====

    /// Activates or deactivates a consumable. Idempotent.
    pub fn set_consumable(&mut self, consumable: Consumable, active: bool) {
        if active {
            self.consumables.insert(consumable);
        } else {
            self.consumables.remove(&consumable);
        }
    }

    pub fn is_consumable_active(&self, consumable: Consumable) -> bool {
        self.consumables.contains(&consumable)
    }

    pub fn clear_consumables(&mut self) {
        self.consumables.clear();
    }

    // ===== runes =====

    /// Applied runes, oldest first.
    pub fn runes(&self) -> &[Rune] {
        &self.runes
    }

    /// Applies a rune, returning whether it was accepted.
    ///
    /// No-ops (returning `false`) when the loadout already holds
    /// [`BuildConfig::MAX_RUNES`] runes, or when an attribute rune is bound
    /// to a profession other than the current primary or to an attribute
    /// outside that profession's set.
    pub fn add_rune(&mut self, rune: Rune) -> bool {
        if self.runes.is_full() {
            return false;
        }
        if let Rune::Attribute {
            profession,
            attribute,
            ..
        } = rune
        {
            if profession != self.primary || !profession.attributes().contains(&attribute) {
                return false;
            }
        }
        self.runes.push(rune);
        true
    }

    /// Removes the most recently applied rune equal to `rune` (LIFO).
    ///
    /// Returns whether a matching rune was found.
    pub fn remove_rune(&mut self, rune: Rune) -> bool {
        match self.runes.iter().rposition(|r| *r == rune) {
            Some(index) => {
                self.runes.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn clear_runes(&mut self) {
        self.runes.clear();
    }

    // ===== weapon, title bonus, profession =====

    pub fn weapon(&self) -> Option<FocusWeapon> {
        self.weapon
    }

    pub fn set_weapon(&mut self, weapon: Option<FocusWeapon>) {
        self.weapon = weapon;
    }

    /// Uniform title-track ("HR") bonus, clamped to 0..=4.
    pub fn set_title_bonus(&mut self, bonus: u8) {
        self.title_bonus = bonus.min(BuildConfig::MAX_TITLE_BONUS);
    }

    pub fn title_bonus(&self) -> u8 {
        self.title_bonus
    }

    pub fn primary_profession(&self) -> Profession {
        self.primary
    }

    /// Switches the primary profession.
    ///
    /// Attribute runes bound to any other profession become illegal and are
    /// purged; vigor, attunement, and vitae runes are preserved.
    pub fn set_primary_profession(&mut self, primary: Profession) {
        if self.primary == primary {
            return;
        }
        self.primary = primary;
        self.runes
            .retain(|rune| match rune.profession() {
                Some(profession) => profession == primary,
                None => true,
            });
    }

    // ===== aggregation =====

    /// Aggregates the loadout into bonus maps and deltas.
    ///
    /// Pure with respect to the current state; call again after any
    /// mutation rather than caching the result.
    pub fn totals(&self) -> ModifierTotals {
        let mut totals = ModifierTotals::default();

        for consumable in &self.consumables {
            let stats = consumable.stats();
            totals.health += stats.health;
            totals.energy += stats.energy;
            totals.all_attributes += stats.all_attributes;
            totals.global.armor += stats.armor;
            totals.global.health_regen += stats.health_regen;
            totals.global.incoming_damage += stats.incoming_damage;
            totals.global.attack_speed += stats.attack_speed;
            totals.global.activation += stats.activation;
            totals.global.move_speed += stats.move_speed;
            totals.global.recharge += stats.recharge;
            totals.global.crit_immunity += stats.crit_immunity;
        }

        let mut best_vigor: Option<RuneTier> = None;
        for rune in &self.runes {
            match *rune {
                Rune::Attribute {
                    tier, attribute, ..
                } => {
                    // Only the highest tier on an attribute counts, but the
                    // health penalty stacks per rune.
                    let entry = totals.attribute_bonuses.entry(attribute).or_insert(0);
                    *entry = (*entry).max(tier.attribute_bonus());
                    totals.health += tier.health_penalty();
                }
                Rune::Vigor(tier) => {
                    best_vigor = Some(match best_vigor {
                        Some(best) => best.max(tier),
                        None => tier,
                    });
                }
                Rune::Attunement => totals.energy += Rune::ATTUNEMENT_ENERGY,
                Rune::Vitae => totals.health += Rune::VITAE_HEALTH,
            }
        }
        if let Some(tier) = best_vigor {
            totals.health += tier.vigor_health();
        }

        if let Some(weapon) = self.weapon {
            *totals
                .attribute_bonuses
                .entry(weapon.attribute())
                .or_insert(0) += FocusWeapon::BONUS;
        }

        totals.all_attributes += self.title_bonus as i32;
        totals.cap_all_attributes();
        totals.global.clamp_to_caps();
        totals
    }
}
