//! Effective skill statistics under a build's attribute and modifier state.
//!
//! Every function here is pure: the same skill, ranks, and modifiers always
//! produce the same numbers, and nothing is cached between calls. The
//! profession conditionals are driven by the skill's type and profession
//! fields rather than text matching, so the rules stay exhaustive and
//! testable.

mod description;
mod primary;

pub use description::render_description;
pub use primary::{
    DIVINE_FAVOR_HEALING_PER_RANK, ENERGY_STORAGE_PER_RANK, EXPERTISE_REDUCTION_PER_RANK,
    FAST_CASTING_RECHARGE_PER_RANK, FAST_CASTING_SPEED_PER_RANK, MYSTICISM_REDUCTION_PER_RANK,
    SPAWNING_POWER_PER_RANK, critical_strikes_energy, leadership_energy, passive_description,
};

use crate::attribute::AttributeId;
use crate::attributes::AttributeAllocation;
use crate::loadout::{GlobalModifiers, ModifierTotals};
use crate::profession::Profession;
use crate::skill::{SkillData, SkillType};

/// When a per-rank reduction factor exceeds this threshold it overrides the
/// global modifier instead of combining with it.
const OVERRIDE_THRESHOLD: f64 = 0.25;

/// Snapshot of everything the calculator needs from a build.
///
/// Holds the effective ranks of the rule-bearing primary attributes plus
/// the loadout's global modifiers. Build one per query batch via
/// [`StatContext::from_build`]; it is cheap and must not outlive a mutation
/// of the underlying models.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StatContext {
    pub primary: Profession,
    pub expertise: u8,
    pub mysticism: u8,
    pub fast_casting: u8,
    pub divine_favor: u8,
    pub spawning_power: u8,
    pub global: GlobalModifiers,
}

impl StatContext {
    /// Captures the rule-bearing effective ranks from a build's models.
    pub fn from_build(
        primary: Profession,
        allocation: &AttributeAllocation,
        totals: &ModifierTotals,
    ) -> Self {
        let rank = |id: AttributeId| {
            allocation.effective_rank(id, totals.attribute_bonus(id))
        };
        Self {
            primary,
            expertise: rank(AttributeId::EXPERTISE),
            mysticism: rank(AttributeId::MYSTICISM),
            fast_casting: rank(AttributeId::FAST_CASTING),
            divine_favor: rank(AttributeId::DIVINE_FAVOR),
            spawning_power: rank(AttributeId::SPAWNING_POWER),
            global: totals.global,
        }
    }
}

/// Derived, ephemeral stats for one skill at one rank.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EffectiveSkillStats {
    pub energy: i32,
    pub activation: f64,
    pub recharge: f64,
    pub description: String,
}

/// Computes all effective stats for a skill in one pass.
///
/// `rank` is the effective rank of the skill's own attribute, used for the
/// description substitution; the cost and timing rules read their ranks
/// from `ctx`.
pub fn evaluate(skill: &SkillData, rank: u8, ctx: &StatContext) -> EffectiveSkillStats {
    EffectiveSkillStats {
        energy: effective_energy(skill, ctx),
        activation: effective_activation(skill, ctx),
        recharge: effective_recharge(skill, ctx),
        description: render_description(skill, rank, ctx),
    }
}

/// True when Expertise discounts this skill's energy cost.
fn expertise_applies(skill: &SkillData) -> bool {
    skill.profession == Profession::Ranger
        || skill.is_touch_range()
        || matches!(skill.kind, SkillType::Attack | SkillType::Ritual)
}

/// True when Mysticism discounts this skill's energy cost.
fn mysticism_applies(skill: &SkillData) -> bool {
    skill.profession == Profession::Dervish
        && matches!(skill.kind, SkillType::Enchantment | SkillType::Form)
}

/// Effective energy cost after the larger applicable discount.
///
/// At most one percentage reduction applies; when a skill qualifies for
/// both Expertise and Mysticism, the larger wins outright rather than
/// compounding.
pub fn effective_energy(skill: &SkillData, ctx: &StatContext) -> i32 {
    let mut reduction: f64 = 0.0;
    if expertise_applies(skill) {
        reduction = ctx.expertise as f64 * EXPERTISE_REDUCTION_PER_RANK;
    }
    if mysticism_applies(skill) {
        reduction = reduction.max(ctx.mysticism as f64 * MYSTICISM_REDUCTION_PER_RANK);
    }
    let cost = (skill.energy as f64 * (1.0 - reduction)).round() as i32;
    cost.max(0)
}

/// Fast Casting factor for this skill, 0 when not applicable.
fn cast_speed_factor(skill: &SkillData, ctx: &StatContext) -> f64 {
    let applies = skill.profession == Profession::Mesmer
        || ((skill.kind.is_spell() || skill.kind == SkillType::Signet)
            && skill.activation >= 2.0);
    if applies {
        ctx.fast_casting as f64 * FAST_CASTING_SPEED_PER_RANK
    } else {
        0.0
    }
}

/// Effective cast time in seconds, rounded to 3 decimals.
///
/// A cast-speed factor above 0.25 overrides the global activation modifier
/// entirely; below it, the global modifier shortens the time first and the
/// factor divides the result.
pub fn effective_activation(skill: &SkillData, ctx: &StatContext) -> f64 {
    if skill.activation <= 0.0 {
        return 0.0;
    }
    let factor = cast_speed_factor(skill, ctx);
    let time = if factor > OVERRIDE_THRESHOLD {
        skill.activation / (1.0 + factor)
    } else {
        skill.activation * (1.0 + ctx.global.activation) / (1.0 + factor)
    };
    round_to(time, 3)
}

/// Effective recharge in seconds, rounded to 1 decimal.
///
/// The per-rank reduction sums with the global modifier while it is small;
/// past 0.25 it applies alone.
pub fn effective_recharge(skill: &SkillData, ctx: &StatContext) -> f64 {
    if skill.recharge <= 0.0 {
        return 0.0;
    }
    let reduction = if skill.profession == Profession::Mesmer && skill.kind.is_spell() {
        ctx.fast_casting as f64 * FAST_CASTING_RECHARGE_PER_RANK
    } else {
        0.0
    };
    let total = if reduction > OVERRIDE_THRESHOLD {
        reduction
    } else {
        reduction + ctx.global.recharge.abs()
    };
    round_to(skill.recharge * (1.0 - total), 1)
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}
