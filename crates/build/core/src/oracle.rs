//! Trait describing the read-only skill data store.
//!
//! The core never owns skill records; hosts supply an oracle backed by
//! whatever storage they use. A miss is an ordinary `None` that callers
//! handle (typically by skipping the slot), never an error.

use crate::skill::{SkillData, SkillId};

/// Which ruleset variant of a skill to fetch.
///
/// Skills can carry different numbers against human opponents; stores that
/// track only one variant serve it for both.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkillVariant {
    #[default]
    Pve,
    Pvp,
}

/// Read-only lookup into the external skill catalog.
pub trait SkillOracle: Send + Sync {
    /// Fetches the record for `id` in the requested variant.
    ///
    /// Returns `None` when the catalog has no such skill. The core does not
    /// retry or synthesize defaults for misses.
    fn skill(&self, id: SkillId, variant: SkillVariant) -> Option<SkillData>;
}
