//! Aggregated modifier output of a loadout.

use std::collections::BTreeMap;

use crate::attribute::AttributeId;
use crate::config::BuildConfig;

/// Build-wide percentage and flat modifiers, clamped to their caps.
///
/// Time fields are fractions with faster-is-negative sign: `-0.25` on
/// `activation` is the 25% cast-speed floor. Speed fields are
/// faster-is-positive with their own ceilings.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlobalModifiers {
    /// Cast-time reduction, floored at -0.25.
    pub activation: f64,
    /// Recharge reduction, floored at -0.50.
    pub recharge: f64,
    /// Attack-speed increase, capped at +0.33.
    pub attack_speed: f64,
    /// Movement-speed increase, capped at +0.34.
    pub move_speed: f64,
    /// Flat armor bonus, capped at +25.
    pub armor: i32,
    /// Health regeneration pips, capped at +10.
    pub health_regen: i32,
    /// Flat incoming damage adjustment (negative reduces).
    pub incoming_damage: i32,
    /// Chance to ignore critical hits.
    pub crit_immunity: f64,
}

impl GlobalModifiers {
    pub const ACTIVATION_FLOOR: f64 = -0.25;
    pub const RECHARGE_FLOOR: f64 = -0.50;
    pub const ATTACK_SPEED_CAP: f64 = 0.33;
    pub const MOVE_SPEED_CAP: f64 = 0.34;
    pub const ARMOR_CAP: i32 = 25;
    pub const HEALTH_REGEN_CAP: i32 = 10;

    /// Clamps every capped field to its floor or ceiling.
    pub(super) fn clamp_to_caps(&mut self) {
        self.activation = self.activation.max(Self::ACTIVATION_FLOOR);
        self.recharge = self.recharge.max(Self::RECHARGE_FLOOR);
        self.attack_speed = self.attack_speed.min(Self::ATTACK_SPEED_CAP);
        self.move_speed = self.move_speed.min(Self::MOVE_SPEED_CAP);
        self.armor = self.armor.min(Self::ARMOR_CAP);
        self.health_regen = self.health_regen.min(Self::HEALTH_REGEN_CAP);
    }
}

/// Everything a loadout contributes to the build's numbers.
///
/// Produced by [`super::Loadout::totals`]; recomputed on demand and never
/// stored across mutations.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModifierTotals {
    /// Per-attribute rank bonus from runes and the focus weapon.
    pub attribute_bonuses: BTreeMap<AttributeId, i32>,
    /// Uniform rank bonus applied to every standard attribute
    /// (consumables plus the title bonus), capped at 20.
    pub all_attributes: i32,
    /// Net maximum-health change.
    pub health: i32,
    /// Net maximum-energy change.
    pub energy: i32,
    pub global: GlobalModifiers,
}

impl ModifierTotals {
    /// Total external rank bonus for one attribute.
    ///
    /// Standard attributes receive their specific bonus plus the uniform
    /// bonus; title tracks receive nothing.
    pub fn attribute_bonus(&self, id: AttributeId) -> i32 {
        if !id.is_standard() {
            return 0;
        }
        self.attribute_bonuses.get(&id).copied().unwrap_or(0) + self.all_attributes
    }

    pub(super) fn cap_all_attributes(&mut self) {
        let cap = BuildConfig::EFFECTIVE_RANK_CAP as i32;
        if self.all_attributes > cap {
            self.all_attributes = cap;
        }
    }
}
