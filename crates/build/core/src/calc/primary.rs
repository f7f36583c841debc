//! Primary-attribute rules, tabulated per attribute.
//!
//! Each profession's primary attribute grants a passive effect scaling with
//! its effective rank. The calculator consumes the numeric magnitudes; the
//! rendered one-liners exist for hosts that display the passive alongside
//! the attribute editor.

use crate::attribute::AttributeId;

/// Energy cost reduction fraction per Expertise rank.
pub const EXPERTISE_REDUCTION_PER_RANK: f64 = 0.04;
/// Energy cost reduction fraction per Mysticism rank.
pub const MYSTICISM_REDUCTION_PER_RANK: f64 = 0.04;
/// Cast-speed factor per Fast Casting rank.
pub const FAST_CASTING_SPEED_PER_RANK: f64 = 0.0473;
/// Recharge reduction fraction per Fast Casting rank.
pub const FAST_CASTING_RECHARGE_PER_RANK: f64 = 0.03;
/// Flat healing per Divine Favor rank.
pub const DIVINE_FAVOR_HEALING_PER_RANK: f64 = 3.2;
/// Duration/health increase fraction per Spawning Power rank.
pub const SPAWNING_POWER_PER_RANK: f64 = 0.04;
/// Maximum energy per Energy Storage rank.
pub const ENERGY_STORAGE_PER_RANK: i32 = 3;

/// Energy gained per critical hit at a Critical Strikes rank.
pub fn critical_strikes_energy(rank: u8) -> i32 {
    match rank {
        0..=2 => 0,
        3..=7 => 1,
        8..=12 => 2,
        13..=17 => 3,
        _ => 4,
    }
}

/// Maximum energy gained from shouts and chants at a Leadership rank.
pub fn leadership_energy(rank: u8) -> i32 {
    if rank >= 20 {
        10
    } else {
        rank as i32 / 2
    }
}

/// Rendered description of a primary attribute's passive at `rank`.
///
/// `None` for attributes that are not a primary attribute.
pub fn passive_description(attribute: AttributeId, rank: u8) -> Option<String> {
    let r = rank as i32;
    Some(match attribute {
        AttributeId::STRENGTH => format!("{r}% armor penetration on attack skills"),
        AttributeId::EXPERTISE => {
            format!("-{}% energy cost for Ranger skills", r * 4)
        }
        AttributeId::DIVINE_FAVOR => format!(
            "+{:.1} healing when casting spells on allies",
            rank as f64 * DIVINE_FAVOR_HEALING_PER_RANK
        ),
        AttributeId::SOUL_REAPING => {
            format!("Gain {r} energy whenever a nearby creature dies")
        }
        AttributeId::FAST_CASTING => format!(
            "Mesmer spells cast {:.1}% faster and recharge {}% faster",
            rank as f64 * FAST_CASTING_SPEED_PER_RANK * 100.0,
            r * 3
        ),
        AttributeId::ENERGY_STORAGE => {
            format!("+{} maximum energy", r * ENERGY_STORAGE_PER_RANK)
        }
        AttributeId::CRITICAL_STRIKES => format!(
            "+{r}% critical hit chance. Gain {} energy per critical hit",
            critical_strikes_energy(rank)
        ),
        AttributeId::SPAWNING_POWER => {
            let percent = r * 4;
            format!("Spirits have {percent}% extra health, weapon spells last {percent}% longer")
        }
        AttributeId::LEADERSHIP => format!(
            "Up to {} energy gained from shouts/chants",
            leadership_energy(rank)
        ),
        AttributeId::MYSTICISM => format!(
            "-{}% energy cost for Dervish enchantments, +{r} armor while enchanted",
            r * 4
        ),
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn critical_strikes_steps() {
        assert_eq!(critical_strikes_energy(0), 0);
        assert_eq!(critical_strikes_energy(2), 0);
        assert_eq!(critical_strikes_energy(3), 1);
        assert_eq!(critical_strikes_energy(7), 1);
        assert_eq!(critical_strikes_energy(8), 2);
        assert_eq!(critical_strikes_energy(12), 2);
        assert_eq!(critical_strikes_energy(13), 3);
        assert_eq!(critical_strikes_energy(17), 3);
        assert_eq!(critical_strikes_energy(18), 4);
    }

    #[test]
    fn leadership_caps_at_ten() {
        assert_eq!(leadership_energy(0), 0);
        assert_eq!(leadership_energy(7), 3);
        assert_eq!(leadership_energy(19), 9);
        assert_eq!(leadership_energy(20), 10);
    }

    #[test]
    fn only_primary_attributes_have_passives() {
        assert!(passive_description(AttributeId::EXPERTISE, 12).is_some());
        assert!(passive_description(AttributeId::FIRE_MAGIC, 12).is_none());
        assert_eq!(
            passive_description(AttributeId::ENERGY_STORAGE, 10).as_deref(),
            Some("+30 maximum energy")
        );
    }
}
