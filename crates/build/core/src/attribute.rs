//! Attribute identifiers, including the free "title track" dials.
//!
//! Standard attributes (id >= 0) are trained by spending points from the
//! shared budget. Title tracks carry negative ids, cost nothing, and are
//! capped per track by external progression. Id -1 is the "no attribute"
//! marker used by skills that scale with nothing.

use std::fmt;

/// Identifier of a skill-power dial.
///
/// The numeric value matches the id carried by template codes and skill
/// records. Negative ids are title tracks; `-1` means "no attribute".
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AttributeId(pub i16);

impl Default for AttributeId {
    fn default() -> Self {
        Self::NONE
    }
}

impl AttributeId {
    pub const NONE: Self = Self(-1);

    // ===== standard attributes =====
    pub const FAST_CASTING: Self = Self(0);
    pub const ILLUSION_MAGIC: Self = Self(1);
    pub const DOMINATION_MAGIC: Self = Self(2);
    pub const INSPIRATION_MAGIC: Self = Self(3);
    pub const BLOOD_MAGIC: Self = Self(4);
    pub const DEATH_MAGIC: Self = Self(5);
    pub const SOUL_REAPING: Self = Self(6);
    pub const CURSES: Self = Self(7);
    pub const AIR_MAGIC: Self = Self(8);
    pub const EARTH_MAGIC: Self = Self(9);
    pub const FIRE_MAGIC: Self = Self(10);
    pub const WATER_MAGIC: Self = Self(11);
    pub const ENERGY_STORAGE: Self = Self(12);
    pub const HEALING_PRAYERS: Self = Self(13);
    pub const SMITING_PRAYERS: Self = Self(14);
    pub const PROTECTION_PRAYERS: Self = Self(15);
    pub const DIVINE_FAVOR: Self = Self(16);
    pub const STRENGTH: Self = Self(17);
    pub const AXE_MASTERY: Self = Self(18);
    pub const HAMMER_MASTERY: Self = Self(19);
    pub const SWORDSMANSHIP: Self = Self(20);
    pub const TACTICS: Self = Self(21);
    pub const BEAST_MASTERY: Self = Self(22);
    pub const EXPERTISE: Self = Self(23);
    pub const WILDERNESS_SURVIVAL: Self = Self(24);
    pub const MARKSMANSHIP: Self = Self(25);
    pub const DAGGER_MASTERY: Self = Self(29);
    pub const DEADLY_ARTS: Self = Self(30);
    pub const SHADOW_ARTS: Self = Self(31);
    pub const COMMUNING: Self = Self(32);
    pub const RESTORATION_MAGIC: Self = Self(33);
    pub const CHANNELING_MAGIC: Self = Self(34);
    pub const CRITICAL_STRIKES: Self = Self(35);
    pub const SPAWNING_POWER: Self = Self(36);
    pub const SPEAR_MASTERY: Self = Self(37);
    pub const COMMAND: Self = Self(38);
    pub const MOTIVATION: Self = Self(39);
    pub const LEADERSHIP: Self = Self(40);
    pub const SCYTHE_MASTERY: Self = Self(41);
    pub const WIND_PRAYERS: Self = Self(42);
    pub const EARTH_PRAYERS: Self = Self(43);
    pub const MYSTICISM: Self = Self(44);

    // ===== title tracks =====
    pub const SUNSPEAR: Self = Self(-2);
    pub const LIGHTBRINGER: Self = Self(-3);
    pub const LUXON: Self = Self(-4);
    pub const KURZICK: Self = Self(-5);
    pub const ASURAN: Self = Self(-6);
    pub const DWARVEN: Self = Self(-7);
    pub const EBON_VANGUARD: Self = Self(-8);
    pub const NORN: Self = Self(-9);

    /// True for the free, externally-progressed title tracks.
    ///
    /// `NONE` (-1) is a marker, not a track.
    #[inline]
    pub const fn is_title_track(self) -> bool {
        self.0 < -1
    }

    /// True for point-costed standard attributes.
    #[inline]
    pub const fn is_standard(self) -> bool {
        self.0 >= 0
    }

    /// Highest rank this attribute can reach by direct allocation.
    ///
    /// Standard attributes stop at 12 (higher effective ranks come from
    /// runes, weapons, and consumables). Title tracks have per-track caps.
    pub const fn rank_cap(self) -> u8 {
        if self.is_title_track() {
            match self {
                Self::LUXON | Self::KURZICK => 12,
                Self::LIGHTBRINGER => 8,
                _ => 10,
            }
        } else {
            12
        }
    }

    /// Display name, `None` for ids outside the catalog.
    pub const fn name(self) -> Option<&'static str> {
        Some(match self {
            Self::NONE => "No Attribute",
            Self::FAST_CASTING => "Fast Casting",
            Self::ILLUSION_MAGIC => "Illusion Magic",
            Self::DOMINATION_MAGIC => "Domination Magic",
            Self::INSPIRATION_MAGIC => "Inspiration Magic",
            Self::BLOOD_MAGIC => "Blood Magic",
            Self::DEATH_MAGIC => "Death Magic",
            Self::SOUL_REAPING => "Soul Reaping",
            Self::CURSES => "Curses",
            Self::AIR_MAGIC => "Air Magic",
            Self::EARTH_MAGIC => "Earth Magic",
            Self::FIRE_MAGIC => "Fire Magic",
            Self::WATER_MAGIC => "Water Magic",
            Self::ENERGY_STORAGE => "Energy Storage",
            Self::HEALING_PRAYERS => "Healing Prayers",
            Self::SMITING_PRAYERS => "Smiting Prayers",
            Self::PROTECTION_PRAYERS => "Protection Prayers",
            Self::DIVINE_FAVOR => "Divine Favor",
            Self::STRENGTH => "Strength",
            Self::AXE_MASTERY => "Axe Mastery",
            Self::HAMMER_MASTERY => "Hammer Mastery",
            Self::SWORDSMANSHIP => "Swordsmanship",
            Self::TACTICS => "Tactics",
            Self::BEAST_MASTERY => "Beast Mastery",
            Self::EXPERTISE => "Expertise",
            Self::WILDERNESS_SURVIVAL => "Wilderness Survival",
            Self::MARKSMANSHIP => "Marksmanship",
            Self::DAGGER_MASTERY => "Dagger Mastery",
            Self::DEADLY_ARTS => "Deadly Arts",
            Self::SHADOW_ARTS => "Shadow Arts",
            Self::COMMUNING => "Communing",
            Self::RESTORATION_MAGIC => "Restoration Magic",
            Self::CHANNELING_MAGIC => "Channeling Magic",
            Self::CRITICAL_STRIKES => "Critical Strikes",
            Self::SPAWNING_POWER => "Spawning Power",
            Self::SPEAR_MASTERY => "Spear Mastery",
            Self::COMMAND => "Command",
            Self::MOTIVATION => "Motivation",
            Self::LEADERSHIP => "Leadership",
            Self::SCYTHE_MASTERY => "Scythe Mastery",
            Self::WIND_PRAYERS => "Wind Prayers",
            Self::EARTH_PRAYERS => "Earth Prayers",
            Self::MYSTICISM => "Mysticism",
            Self::SUNSPEAR => "Sunspear Rank",
            Self::LIGHTBRINGER => "Lightbringer Rank",
            Self::LUXON => "Luxon Rank",
            Self::KURZICK => "Kurzick Rank",
            Self::ASURAN => "Asuran Rank",
            Self::DWARVEN => "Dwarven Rank",
            Self::EBON_VANGUARD => "Ebon Vanguard Rank",
            Self::NORN => "Norn Rank",
            _ => return None,
        })
    }
}

impl fmt::Display for AttributeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "Attribute {}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_track_classification() {
        assert!(AttributeId::SUNSPEAR.is_title_track());
        assert!(AttributeId::NORN.is_title_track());
        assert!(!AttributeId::NONE.is_title_track());
        assert!(!AttributeId::STRENGTH.is_title_track());
        assert!(AttributeId::STRENGTH.is_standard());
        assert!(!AttributeId::NONE.is_standard());
    }

    #[test]
    fn rank_caps_per_track() {
        assert_eq!(AttributeId::LUXON.rank_cap(), 12);
        assert_eq!(AttributeId::KURZICK.rank_cap(), 12);
        assert_eq!(AttributeId::LIGHTBRINGER.rank_cap(), 8);
        assert_eq!(AttributeId::SUNSPEAR.rank_cap(), 10);
        assert_eq!(AttributeId::FIRE_MAGIC.rank_cap(), 12);
    }

    #[test]
    fn display_falls_back_to_raw_id() {
        assert_eq!(AttributeId::MYSTICISM.to_string(), "Mysticism");
        assert_eq!(AttributeId(26).to_string(), "Attribute 26");
    }
}
