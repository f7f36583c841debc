//! The ten character professions and their static rule data.
//!
//! A build names one primary and one secondary profession. Each profession
//! owns a fixed attribute set, a primary attribute usable only while that
//! profession is primary, and baseline energy figures.

use crate::attribute::AttributeId;

/// One of the ten character classes, or the unset placeholder.
///
/// The discriminant matches the id carried by template codes and skill data,
/// so `Profession::Monk as u32 == 3`.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Profession {
    #[default]
    None = 0,
    Warrior = 1,
    Ranger = 2,
    Monk = 3,
    Necromancer = 4,
    Mesmer = 5,
    Elementalist = 6,
    Assassin = 7,
    Ritualist = 8,
    Paragon = 9,
    Dervish = 10,
}

impl Profession {
    /// Number of real professions (excludes [`Profession::None`]).
    pub const COUNT: usize = 10;

    /// Resolves a raw id from a template or skill record.
    ///
    /// Ids outside 0..=10 have no profession; template codes can carry them
    /// (the codec is lenient), so lookup returns `None` rather than clamping.
    pub const fn from_id(id: u32) -> Option<Self> {
        Some(match id {
            0 => Self::None,
            1 => Self::Warrior,
            2 => Self::Ranger,
            3 => Self::Monk,
            4 => Self::Necromancer,
            5 => Self::Mesmer,
            6 => Self::Elementalist,
            7 => Self::Assassin,
            8 => Self::Ritualist,
            9 => Self::Paragon,
            10 => Self::Dervish,
            _ => return None,
        })
    }

    /// Wire id of this profession.
    #[inline]
    pub const fn id(self) -> u32 {
        self as u32
    }

    /// Two-letter display abbreviation, `"X"` for the unset placeholder.
    pub const fn abbrev(self) -> &'static str {
        match self {
            Self::None => "X",
            Self::Warrior => "W",
            Self::Ranger => "R",
            Self::Monk => "Mo",
            Self::Necromancer => "N",
            Self::Mesmer => "Me",
            Self::Elementalist => "E",
            Self::Assassin => "A",
            Self::Ritualist => "Rt",
            Self::Paragon => "P",
            Self::Dervish => "D",
        }
    }

    /// The attribute set this profession can train, primary attribute first.
    pub const fn attributes(self) -> &'static [AttributeId] {
        match self {
            Self::None => &[],
            Self::Warrior => &[
                AttributeId::STRENGTH,
                AttributeId::AXE_MASTERY,
                AttributeId::HAMMER_MASTERY,
                AttributeId::SWORDSMANSHIP,
                AttributeId::TACTICS,
            ],
            Self::Ranger => &[
                AttributeId::EXPERTISE,
                AttributeId::BEAST_MASTERY,
                AttributeId::WILDERNESS_SURVIVAL,
                AttributeId::MARKSMANSHIP,
            ],
            Self::Monk => &[
                AttributeId::DIVINE_FAVOR,
                AttributeId::HEALING_PRAYERS,
                AttributeId::SMITING_PRAYERS,
                AttributeId::PROTECTION_PRAYERS,
            ],
            Self::Necromancer => &[
                AttributeId::SOUL_REAPING,
                AttributeId::BLOOD_MAGIC,
                AttributeId::DEATH_MAGIC,
                AttributeId::CURSES,
            ],
            Self::Mesmer => &[
                AttributeId::FAST_CASTING,
                AttributeId::ILLUSION_MAGIC,
                AttributeId::DOMINATION_MAGIC,
                AttributeId::INSPIRATION_MAGIC,
            ],
            Self::Elementalist => &[
                AttributeId::ENERGY_STORAGE,
                AttributeId::AIR_MAGIC,
                AttributeId::EARTH_MAGIC,
                AttributeId::FIRE_MAGIC,
                AttributeId::WATER_MAGIC,
            ],
            Self::Assassin => &[
                AttributeId::CRITICAL_STRIKES,
                AttributeId::DAGGER_MASTERY,
                AttributeId::DEADLY_ARTS,
                AttributeId::SHADOW_ARTS,
            ],
            Self::Ritualist => &[
                AttributeId::SPAWNING_POWER,
                AttributeId::COMMUNING,
                AttributeId::RESTORATION_MAGIC,
                AttributeId::CHANNELING_MAGIC,
            ],
            Self::Paragon => &[
                AttributeId::LEADERSHIP,
                AttributeId::SPEAR_MASTERY,
                AttributeId::COMMAND,
                AttributeId::MOTIVATION,
            ],
            Self::Dervish => &[
                AttributeId::MYSTICISM,
                AttributeId::SCYTHE_MASTERY,
                AttributeId::WIND_PRAYERS,
                AttributeId::EARTH_PRAYERS,
            ],
        }
    }

    /// The attribute usable only while this profession is primary.
    pub const fn primary_attribute(self) -> Option<AttributeId> {
        match self {
            Self::None => None,
            Self::Warrior => Some(AttributeId::STRENGTH),
            Self::Ranger => Some(AttributeId::EXPERTISE),
            Self::Monk => Some(AttributeId::DIVINE_FAVOR),
            Self::Necromancer => Some(AttributeId::SOUL_REAPING),
            Self::Mesmer => Some(AttributeId::FAST_CASTING),
            Self::Elementalist => Some(AttributeId::ENERGY_STORAGE),
            Self::Assassin => Some(AttributeId::CRITICAL_STRIKES),
            Self::Ritualist => Some(AttributeId::SPAWNING_POWER),
            Self::Paragon => Some(AttributeId::LEADERSHIP),
            Self::Dervish => Some(AttributeId::MYSTICISM),
        }
    }

    /// Base maximum energy of a max-level character.
    pub const fn base_energy(self) -> i32 {
        match self {
            Self::None | Self::Warrior => 20,
            Self::Ranger | Self::Assassin | Self::Paragon => 20,
            Self::Monk | Self::Necromancer | Self::Mesmer => 30,
            Self::Elementalist | Self::Ritualist => 30,
            Self::Dervish => 25,
        }
    }

    /// Base energy regeneration in pips.
    pub const fn energy_regen(self) -> u8 {
        match self {
            Self::None | Self::Warrior => 2,
            _ => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn ids_round_trip() {
        for prof in Profession::iter() {
            assert_eq!(Profession::from_id(prof.id()), Some(prof));
        }
        assert_eq!(Profession::from_id(11), None);
        assert_eq!(Profession::from_id(u32::MAX), None);
    }

    #[test]
    fn primary_attribute_leads_the_set() {
        for prof in Profession::iter() {
            let Some(primary) = prof.primary_attribute() else {
                continue;
            };
            assert_eq!(prof.attributes().first(), Some(&primary), "{prof}");
        }
    }

    #[test]
    fn attribute_sets_are_disjoint() {
        let mut seen = std::collections::BTreeSet::new();
        for prof in Profession::iter() {
            for id in prof.attributes() {
                assert!(seen.insert(*id), "{id:?} owned by two professions");
            }
        }
    }
}
