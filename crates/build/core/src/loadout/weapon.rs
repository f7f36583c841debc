//! Anniversary focus weapons, each bound to a single attribute.

use crate::attribute::AttributeId;

/// A commemorative weapon granting +5 to its bound attribute.
///
/// Only one can be wielded; the bonus does not stack with itself but adds
/// on top of whatever rune bonus the attribute already has.
#[derive(
    Clone,
    Copy,
    Debug,
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
pub enum FocusWeapon {
    ScorpionsClutch,
    DragonsRestraint,
    BearsRoar,
    UnicornsValor,
    SoulsRepentance,
    SunsRevolution,
    HourglassPatience,
    SnakesLineage,
    DragonsInheritance,
    SpiritsAbsolution,
}

impl FocusWeapon {
    /// Attribute rank granted to the bound attribute.
    pub const BONUS: i32 = 5;

    /// The attribute this weapon is bound to.
    pub const fn attribute(self) -> AttributeId {
        match self {
            Self::ScorpionsClutch => AttributeId::STRENGTH,
            Self::DragonsRestraint => AttributeId::EXPERTISE,
            Self::BearsRoar => AttributeId::LEADERSHIP,
            Self::UnicornsValor => AttributeId::FAST_CASTING,
            Self::SoulsRepentance => AttributeId::SOUL_REAPING,
            Self::SunsRevolution => AttributeId::CRITICAL_STRIKES,
            Self::HourglassPatience => AttributeId::ENERGY_STORAGE,
            Self::SnakesLineage => AttributeId::SPAWNING_POWER,
            Self::DragonsInheritance => AttributeId::MYSTICISM,
            Self::SpiritsAbsolution => AttributeId::DIVINE_FAVOR,
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Self::ScorpionsClutch => "Scorpion's Clutch",
            Self::DragonsRestraint => "Dragon's Restraint",
            Self::BearsRoar => "Bear's Roar",
            Self::UnicornsValor => "Unicorn's Valor",
            Self::SoulsRepentance => "Soul's Repentance",
            Self::SunsRevolution => "Sun's Revolution",
            Self::HourglassPatience => "Hourglass's Patience",
            Self::SnakesLineage => "Snake's Lineage",
            Self::DragonsInheritance => "Dragon's Inheritance",
            Self::SpiritsAbsolution => "Spirit's Absolution",
        }
    }
}
