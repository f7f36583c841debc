//! Deterministic build rules and data types shared across hosts.
//!
//! `build-core` defines the canonical numeric state of a character build:
//! the binary template codec, attribute point allocation, equipment and
//! consumable modifier aggregation, and per-skill effective stats. All
//! mutable state lives in [`attributes::AttributeAllocation`] and
//! [`loadout::Loadout`]; the codec and calculator are pure functions hosts
//! can call from anywhere. Skill records come from an external store behind
//! the [`oracle::SkillOracle`] trait.
pub mod attribute;
pub mod attributes;
pub mod baseline;
pub mod calc;
pub mod config;
pub mod loadout;
pub mod oracle;
pub mod profession;
pub mod skill;
pub mod template;

pub use attribute::AttributeId;
pub use attributes::{AllocationError, AttributeAllocation, display_order, is_editable, rank_cost};
pub use baseline::CharacterBaseline;
pub use calc::{
    EffectiveSkillStats, StatContext, effective_activation, effective_energy, effective_recharge,
    evaluate, passive_description, render_description,
};
pub use config::BuildConfig;
pub use loadout::{
    Consumable, ConsumableStats, FocusWeapon, GlobalModifiers, Loadout, ModifierTotals, Rune,
    RuneTier,
};
pub use oracle::{SkillOracle, SkillVariant};
pub use profession::Profession;
pub use skill::{
    PROGRESSION_RANKS, Progression, SkillData, SkillFlags, SkillId, SkillType, StatKind,
};
pub use template::{BuildTemplate, DecodeError, TemplateAttribute, TemplateHeader};
