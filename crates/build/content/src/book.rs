//! In-memory skill catalog implementing the core oracle.

use std::collections::BTreeMap;

use build_core::{SkillData, SkillId, SkillOracle, SkillVariant};

/// Complete skill catalog held in memory.
///
/// PvP records are stored as overrides: a lookup for the PvP variant falls
/// back to the PvE record when no override exists, matching how most skills
/// share one set of numbers across rulesets.
#[derive(Clone, Debug, Default)]
pub struct SkillBook {
    pve: BTreeMap<SkillId, SkillData>,
    pvp: BTreeMap<SkillId, SkillData>,
}

impl SkillBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a PvE record, replacing any existing record with the same id.
    ///
    /// Returns the replaced record, if any; the loader logs replacements
    /// since duplicate ids in a catalog usually mean a data error.
    pub fn insert(&mut self, skill: SkillData) -> Option<SkillData> {
        self.pve.insert(skill.id, skill)
    }

    /// Inserts a PvP override for an id.
    pub fn insert_pvp_override(&mut self, skill: SkillData) -> Option<SkillData> {
        self.pvp.insert(skill.id, skill)
    }

    /// Number of PvE records.
    pub fn len(&self) -> usize {
        self.pve.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pve.is_empty()
    }

    /// Number of PvP overrides.
    pub fn pvp_override_count(&self) -> usize {
        self.pvp.len()
    }

    /// All known skill ids, ascending.
    pub fn ids(&self) -> impl Iterator<Item = SkillId> + '_ {
        self.pve.keys().copied()
    }

    /// Borrowing lookup; [`SkillOracle::skill`] clones from this.
    pub fn get(&self, id: SkillId, variant: SkillVariant) -> Option<&SkillData> {
        match variant {
            SkillVariant::Pve => self.pve.get(&id),
            SkillVariant::Pvp => self.pvp.get(&id).or_else(|| self.pve.get(&id)),
        }
    }
}

impl SkillOracle for SkillBook {
    fn skill(&self, id: SkillId, variant: SkillVariant) -> Option<SkillData> {
        self.get(id, variant).cloned()
    }
}
