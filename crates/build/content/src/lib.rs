//! Skill catalog loading and the in-memory skill oracle.
//!
//! `build-content` turns RON catalog files into a [`SkillBook`], the
//! concrete [`build_core::SkillOracle`] implementation hosts hand to the
//! calculator. The core never reads files itself; everything I/O-shaped
//! lives here.
pub mod book;
pub mod loaders;

pub use book::SkillBook;
pub use loaders::SkillLoader;

#[cfg(test)]
mod tests {
    use build_core::{
        AttributeAllocation, AttributeId, BuildTemplate, Consumable, Loadout, Profession,
        Progression, Rune, RuneTier, SkillData, SkillFlags, SkillId, SkillOracle, SkillType,
        SkillVariant, StatContext, StatKind, evaluate,
    };

    use crate::SkillBook;

    fn fireball() -> SkillData {
        let mut values = [0; build_core::PROGRESSION_RANKS];
        for (i, v) in values.iter_mut().enumerate() {
            *v = 7 + 7 * i as i32;
        }
        SkillData {
            id: SkillId(157),
            name: "Fireball".into(),
            profession: Profession::Elementalist,
            attribute: AttributeId::FIRE_MAGIC,
            kind: SkillType::Spell,
            flags: SkillFlags::empty(),
            energy: 10,
            activation: 3.0,
            recharge: 7.0,
            aftercast: SkillData::DEFAULT_AFTERCAST,
            adrenaline: 0,
            health_cost: 0,
            description: "Deal 7..112 fire damage to target and adjacent foes.".into(),
            progression: vec![Progression::new(StatKind::Damage, values)],
        }
    }

    // The host contract end to end: decode a template, push its state into
    // the models, pull effective stats back out through the oracle.
    #[test]
    fn template_to_effective_stats() {
        let mut book = SkillBook::new();
        book.insert(fireball());

        let mut template = BuildTemplate::new(Profession::Elementalist.id(), 0);
        assert!(template.push_attribute(AttributeId::FIRE_MAGIC.0 as u32, 12));
        template.skills[0] = SkillId(157);
        let code = template.encode();

        // Host side: decode the code and rebuild the edit models from it.
        let decoded = BuildTemplate::decode(&code).unwrap();
        assert_eq!(decoded, template);
        let primary = Profession::from_id(decoded.primary).unwrap();

        let mut allocation = AttributeAllocation::new();
        for attr in &decoded.attributes {
            allocation
                .set_rank(AttributeId(attr.id as i16), attr.rank)
                .unwrap();
        }

        let mut loadout = Loadout::new(primary);
        assert!(loadout.add_rune(Rune::Attribute {
            tier: RuneTier::Superior,
            profession: Profession::Elementalist,
            attribute: AttributeId::FIRE_MAGIC,
        }));
        loadout.set_consumable(Consumable::EssenceOfCelerity, true);
        let totals = loadout.totals();

        let ctx = StatContext::from_build(primary, &allocation, &totals);
        let skill = book.skill(decoded.skills[0], SkillVariant::Pve).unwrap();
        let rank = allocation
            .effective_rank(skill.attribute, totals.attribute_bonus(skill.attribute));
        assert_eq!(rank, 15); // 12 allocated + 3 superior rune

        let stats = evaluate(&skill, rank, &ctx);
        // No Expertise or Mysticism in play.
        assert_eq!(stats.energy, 10);
        // 3s spell for a non-Mesmer: Fast Casting is 0, the essence's -0.20
        // global applies: 3.0 × 0.8 = 2.4.
        assert_eq!(stats.activation, 2.4);
        // 7.0 × (1 − 0.20) = 5.6.
        assert_eq!(stats.recharge, 5.6);
        // Rank 15 value substitutes into the 7..112 range.
        assert_eq!(
            stats.description,
            "Deal 112 fire damage to target and adjacent foes."
        );
    }

    // An empty slot stays skipped: the oracle miss is a None the host
    // handles, not an error.
    #[test]
    fn empty_and_unknown_slots_are_skipped() {
        let book = SkillBook::new();
        assert!(SkillId::EMPTY.is_empty());
        assert_eq!(book.skill(SkillId(4242), SkillVariant::Pve), None);
    }
}
