//! Description text rendering with per-rank value substitution.

use super::StatContext;
use super::primary::{DIVINE_FAVOR_HEALING_PER_RANK, SPAWNING_POWER_PER_RANK};
use crate::profession::Profession;
use crate::skill::{PROGRESSION_RANKS, Progression, SkillData, StatKind};

/// Renders a skill description with scaling numbers substituted at `rank`.
///
/// For each progression row the substitution value is looked up at the
/// clamped rank and written over the first matching placeholder in the
/// original text. Placeholders are tried in priority order: the
/// `floor..milestone` ranges (standard, PvE, overcap milestones), then the
/// bare floor literal. Each row substitutes at most once, always against
/// the unmodified source text, so repeated queries cannot compound.
pub fn render_description(skill: &SkillData, rank: u8, ctx: &StatContext) -> String {
    if skill.progression.is_empty() {
        return skill.description.clone();
    }
    let rank = rank.min(PROGRESSION_RANKS as u8 - 1);

    let mut text = skill.description.clone();
    for row in &skill.progression {
        let rendered = substituted_value(skill, row, rank, ctx);
        for pattern in placeholder_patterns(row) {
            if text.contains(&pattern) {
                text = text.replacen(&pattern, &rendered, 1);
                break;
            }
        }
    }
    text
}

/// Candidate placeholder strings for a row, in priority order.
fn placeholder_patterns(row: &Progression) -> Vec<String> {
    let floor = row.floor();
    let mut patterns = Vec::with_capacity(4);
    for milestone in [
        row.milestone_standard(),
        row.milestone_pve(),
        row.milestone_overcap(),
    ] {
        if milestone != floor && milestone != 0 {
            patterns.push(format!("{floor}..{milestone}"));
        }
    }
    patterns.push(floor.to_string());
    patterns
}

/// The substituted value for a row, with profession post-adjustments.
///
/// Monk healing rows gain flat Divine Favor healing; Ritualist duration and
/// health rows gain the Spawning Power percentage when the text is about
/// spirits or weapon spells. Adjusted values carry a visible delta so the
/// reader can tell the bonus from the base number.
fn substituted_value(skill: &SkillData, row: &Progression, rank: u8, ctx: &StatContext) -> String {
    let base = row.at(rank);

    if skill.profession == Profession::Monk
        && row.kind == StatKind::Healing
        && skill.kind.is_spell()
        && ctx.divine_favor > 0
    {
        let bonus = (ctx.divine_favor as f64 * DIVINE_FAVOR_HEALING_PER_RANK).round() as i32;
        return format!("{} (+{})", base + bonus, bonus);
    }

    if skill.profession == Profession::Ritualist
        && matches!(row.kind, StatKind::Duration | StatKind::Health)
        && ctx.spawning_power > 0
        && mentions_spawning_target(&skill.description)
    {
        let boosted = (base as f64 * (1.0 + ctx.spawning_power as f64 * SPAWNING_POWER_PER_RANK))
            .round() as i32;
        return format!("{} (+{})", boosted, boosted - base);
    }

    base.to_string()
}

/// True when the text concerns something Spawning Power extends.
fn mentions_spawning_target(description: &str) -> bool {
    let lower = description.to_lowercase();
    lower.contains("spirit") || lower.contains("weapon spell")
}
