//! Rune model: attribute runes, vigor, attunement, and vitae.

use crate::attribute::AttributeId;
use crate::profession::Profession;

/// Quality tier of a tiered rune.
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
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RuneTier {
    Minor,
    Major,
    Superior,
}

impl RuneTier {
    /// Attribute rank granted by an attribute rune of this tier.
    pub const fn attribute_bonus(self) -> i32 {
        match self {
            Self::Minor => 1,
            Self::Major => 2,
            Self::Superior => 3,
        }
    }

    /// Health cost of a non-vigor rune of this tier. Minor runes are free.
    pub const fn health_penalty(self) -> i32 {
        match self {
            Self::Minor => 0,
            Self::Major => -35,
            Self::Superior => -75,
        }
    }

    /// Health granted by a vigor rune of this tier.
    pub const fn vigor_health(self) -> i32 {
        match self {
            Self::Minor => 30,
            Self::Major => 41,
            Self::Superior => 50,
        }
    }
}

/// One applied rune.
///
/// Attribute runes are bound to a profession and one of its attributes and
/// are only legal while that profession is primary. Vigor, attunement, and
/// vitae are profession-free and survive profession changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rune {
    Attribute {
        tier: RuneTier,
        profession: Profession,
        attribute: AttributeId,
    },
    Vigor(RuneTier),
    /// +2 maximum energy per rune; stacks.
    Attunement,
    /// +10 maximum health per rune; stacks.
    Vitae,
}

impl Rune {
    /// Maximum energy granted by each attunement rune.
    pub const ATTUNEMENT_ENERGY: i32 = 2;
    /// Health granted by each vitae rune.
    pub const VITAE_HEALTH: i32 = 10;

    /// The profession an attribute rune is bound to, if any.
    pub const fn profession(self) -> Option<Profession> {
        match self {
            Self::Attribute { profession, .. } => Some(profession),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_tables() {
        assert_eq!(RuneTier::Minor.attribute_bonus(), 1);
        assert_eq!(RuneTier::Superior.attribute_bonus(), 3);
        assert_eq!(RuneTier::Minor.health_penalty(), 0);
        assert_eq!(RuneTier::Major.health_penalty(), -35);
        assert_eq!(RuneTier::Superior.health_penalty(), -75);
        assert_eq!(RuneTier::Major.vigor_health(), 41);
    }
}
