//! Static skill data consumed by the effective-stat calculator.
//!
//! Skill records are owned by an external store (see [`crate::oracle`]) and
//! never mutated here. Each record carries the printed base stats, a type and
//! flag set driving the profession rules, and per-rank progression rows used
//! to substitute scaling numbers into the description text.

use std::fmt;

use crate::attribute::AttributeId;
use crate::profession::Profession;

/// Unique identifier of a skill. Zero marks an empty bar slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SkillId(pub u32);

impl SkillId {
    /// Sentinel for an unoccupied skill slot.
    pub const EMPTY: Self = Self(0);

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for SkillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Mechanical category of a skill.
///
/// Drives the profession rules in [`crate::calc`]: Expertise discounts
/// attacks and rituals, Mysticism discounts enchantments and forms, Fast
/// Casting accelerates spells and signets. Anything the rules do not
/// distinguish collapses into `Other`.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkillType {
    Spell,
    Enchantment,
    Hex,
    WeaponSpell,
    Signet,
    Attack,
    Ritual,
    Form,
    Stance,
    Shout,
    #[default]
    Other,
}

impl SkillType {
    /// True for the spell family (plain, enchantment, hex, weapon spell).
    #[inline]
    pub const fn is_spell(self) -> bool {
        matches!(
            self,
            Self::Spell | Self::Enchantment | Self::Hex | Self::WeaponSpell
        )
    }
}

bitflags::bitflags! {
    /// Boolean skill properties.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct SkillFlags: u8 {
        /// Elite skill; a build may equip at most one.
        const ELITE = 1 << 0;
        /// Only usable against computer opponents.
        const PVE_ONLY = 1 << 1;
        /// Requires melee range; makes the skill Expertise-eligible.
        const TOUCH_RANGE = 1 << 2;
    }
}

/// What a progression row measures, for profession post-adjustments.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatKind {
    Damage,
    Healing,
    Duration,
    Health,
    Energy,
    Armor,
    #[default]
    Other,
}

/// Number of rank columns in a progression row (ranks 0..=21).
pub const PROGRESSION_RANKS: usize = 22;

/// One scaling number in a skill description, tabulated per rank.
///
/// Milestone ranks 10 (PvE cap), 15 (standard cap) and 21 (overcap) are the
/// endpoints printed in `low..high` ranges in description text.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Progression {
    pub kind: StatKind,
    #[cfg_attr(feature = "serde", serde(with = "progression_values_serde"))]
    pub values: [i32; PROGRESSION_RANKS],
}

// Serde plumbing: `[i32; PROGRESSION_RANKS]` is a fixed-size array, which serde
// (de)serializes through the tuple path. In RON that renders as `(a, b, ...)`,
// whereas catalogs tabulate the row as a list `[a, b, ...]`. Routing the field
// through the sequence path keeps the wire representation a plain list without
// changing the in-memory type.
#[cfg(feature = "serde")]
mod progression_values_serde {
    use super::PROGRESSION_RANKS;
    use core::fmt;
    use serde::de::{self, Deserializer, SeqAccess, Visitor};
    use serde::ser::{SerializeSeq, Serializer};

    pub fn serialize<S>(values: &[i32; PROGRESSION_RANKS], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(PROGRESSION_RANKS))?;
        for value in values {
            seq.serialize_element(value)?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<[i32; PROGRESSION_RANKS], D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ValuesVisitor;

        impl<'de> Visitor<'de> for ValuesVisitor {
            type Value = [i32; PROGRESSION_RANKS];

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a list of {PROGRESSION_RANKS} integers")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut out = [0i32; PROGRESSION_RANKS];
                for (i, slot) in out.iter_mut().enumerate() {
                    *slot = seq
                        .next_element()?
                        .ok_or_else(|| de::Error::invalid_length(i, &self))?;
                }
                if seq.next_element::<i32>()?.is_some() {
                    return Err(de::Error::invalid_length(PROGRESSION_RANKS + 1, &self));
                }
                Ok(out)
            }
        }

        deserializer.deserialize_seq(ValuesVisitor)
    }
}

impl Progression {
    pub fn new(kind: StatKind, values: [i32; PROGRESSION_RANKS]) -> Self {
        Self { kind, values }
    }

    /// Value at `rank`, clamped into the tabulated range.
    #[inline]
    pub fn at(&self, rank: u8) -> i32 {
        self.values[(rank as usize).min(PROGRESSION_RANKS - 1)]
    }

    /// Value at the rank-0 floor.
    #[inline]
    pub fn floor(&self) -> i32 {
        self.values[0]
    }

    /// Milestone value at rank 10.
    #[inline]
    pub fn milestone_pve(&self) -> i32 {
        self.values[10]
    }

    /// Milestone value at rank 15.
    #[inline]
    pub fn milestone_standard(&self) -> i32 {
        self.values[15]
    }

    /// Milestone value at rank 21.
    #[inline]
    pub fn milestone_overcap(&self) -> i32 {
        self.values[21]
    }
}

/// Immutable record for one skill, as supplied by the external data store.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillData {
    pub id: SkillId,
    pub name: String,
    pub profession: Profession,
    pub attribute: AttributeId,
    pub kind: SkillType,
    pub flags: SkillFlags,
    /// Base energy cost.
    pub energy: i32,
    /// Base cast time in seconds.
    pub activation: f64,
    /// Base cooldown in seconds.
    pub recharge: f64,
    /// Fixed post-cast delay in seconds.
    pub aftercast: f64,
    /// Adrenaline cost in strikes; zero for energy skills.
    pub adrenaline: i32,
    /// Health sacrificed on use.
    pub health_cost: i32,
    pub description: String,
    pub progression: Vec<Progression>,
}

impl SkillData {
    /// Standard aftercast applied when a record does not override it.
    pub const DEFAULT_AFTERCAST: f64 = 0.75;

    /// Cast time including the fixed aftercast delay.
    #[inline]
    pub fn total_cast_time(&self) -> f64 {
        self.activation + self.aftercast
    }

    #[inline]
    pub fn is_elite(&self) -> bool {
        self.flags.contains(SkillFlags::ELITE)
    }

    #[inline]
    pub fn is_touch_range(&self) -> bool {
        self.flags.contains(SkillFlags::TOUCH_RANGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progression_clamps_rank() {
        let mut values = [0; PROGRESSION_RANKS];
        for (i, v) in values.iter_mut().enumerate() {
            *v = i as i32 * 5;
        }
        let row = Progression::new(StatKind::Damage, values);
        assert_eq!(row.at(0), 0);
        assert_eq!(row.at(12), 60);
        assert_eq!(row.at(21), 105);
        // Ranks past the table saturate at the overcap column.
        assert_eq!(row.at(30), 105);
        assert_eq!(row.milestone_standard(), 75);
    }

    #[test]
    fn spell_family() {
        assert!(SkillType::Spell.is_spell());
        assert!(SkillType::Enchantment.is_spell());
        assert!(SkillType::WeaponSpell.is_spell());
        assert!(!SkillType::Signet.is_spell());
        assert!(!SkillType::Attack.is_spell());
    }
}
