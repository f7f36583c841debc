//! Attribute point allocation and editability rules.
//!
//! The allocation model owns the mutable rank map of the build being edited.
//! Mutation is validate-then-commit: an overspending or over-cap request is
//! rejected with the state untouched, never partially applied. The model is
//! single-owner; wrap it behind a mutex or actor if the host is concurrent.

use std::collections::BTreeMap;

use crate::attribute::AttributeId;
use crate::config::BuildConfig;
use crate::profession::Profession;

/// Cumulative point cost of a standard attribute by rank.
///
/// Indexed by `min(rank, 12)`; ranks past 12 are unreachable by spending
/// and cost the same as 12.
pub const RANK_COSTS: [u16; 13] = [0, 1, 3, 6, 10, 15, 21, 28, 37, 48, 61, 77, 97];

/// Point cost of holding a standard attribute at `rank`.
#[inline]
pub fn rank_cost(rank: u8) -> u16 {
    RANK_COSTS[(rank as usize).min(RANK_COSTS.len() - 1)]
}

/// Rejection from [`AttributeAllocation::set_rank`]. State is unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AllocationError {
    #[error("allocating {attribute} would cost {required} of {budget} points")]
    BudgetExceeded {
        attribute: AttributeId,
        required: u16,
        budget: u16,
    },
    #[error("rank {rank} exceeds the cap of {cap} for {attribute}")]
    RankAboveCap {
        attribute: AttributeId,
        rank: u8,
        cap: u8,
    },
}

/// Mutable per-build mapping of attribute to rank.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeAllocation {
    ranks: BTreeMap<AttributeId, u8>,
    budget: u16,
}

impl Default for AttributeAllocation {
    fn default() -> Self {
        Self::new()
    }
}

impl AttributeAllocation {
    pub fn new() -> Self {
        Self::with_budget(BuildConfig::DEFAULT_ATTRIBUTE_POINTS)
    }

    pub fn with_budget(budget: u16) -> Self {
        Self {
            ranks: BTreeMap::new(),
            budget,
        }
    }

    /// Points available to spend in total.
    pub fn budget(&self) -> u16 {
        self.budget
    }

    /// Base rank of an attribute; unallocated attributes are rank 0.
    pub fn rank(&self, id: AttributeId) -> u8 {
        self.ranks.get(&id).copied().unwrap_or(0)
    }

    /// Iterates over all attributes holding a non-zero rank.
    pub fn iter(&self) -> impl Iterator<Item = (AttributeId, u8)> + '_ {
        self.ranks.iter().map(|(id, rank)| (*id, *rank))
    }

    /// Points currently spent across standard attributes.
    ///
    /// Title tracks contribute nothing regardless of rank.
    pub fn total_spent(&self) -> u16 {
        self.ranks
            .iter()
            .filter(|(id, _)| id.is_standard())
            .map(|(_, rank)| rank_cost(*rank))
            .sum()
    }

    /// Sets an attribute to a new rank, validating before committing.
    ///
    /// Rejects ranks above the attribute's cap and spends that would push
    /// the total past the budget; on rejection the model is unchanged.
    /// Setting rank 0 always succeeds and releases the points.
    pub fn set_rank(&mut self, id: AttributeId, rank: u8) -> Result<(), AllocationError> {
        let cap = id.rank_cap();
        if rank > cap {
            return Err(AllocationError::RankAboveCap {
                attribute: id,
                rank,
                cap,
            });
        }
        if id.is_standard() {
            let required = self.total_spent() - rank_cost(self.rank(id)) + rank_cost(rank);
            if required > self.budget {
                return Err(AllocationError::BudgetExceeded {
                    attribute: id,
                    required,
                    budget: self.budget,
                });
            }
        }
        if rank == 0 {
            self.ranks.remove(&id);
        } else {
            self.ranks.insert(id, rank);
        }
        Ok(())
    }

    /// Drops every allocation.
    pub fn clear(&mut self) {
        self.ranks.clear();
    }

    /// Rank after external bonuses, capped at 20.
    ///
    /// Title tracks come from external progression and never receive
    /// equipment or consumable bonuses.
    pub fn effective_rank(&self, id: AttributeId, external_bonus: i32) -> u8 {
        let base = self.rank(id);
        if id.is_title_track() {
            return base;
        }
        (base as i32 + external_bonus).clamp(0, BuildConfig::EFFECTIVE_RANK_CAP as i32) as u8
    }
}

/// True if the attribute can be edited under the given professions.
///
/// An attribute is editable when it belongs to the primary profession, or to
/// the secondary profession's set excluding the secondary's own primary
/// attribute, or is a title track referenced by an equipped skill. With no
/// primary profession chosen, every standard attribute is editable so a bare
/// template can still be filled in.
pub fn is_editable(
    id: AttributeId,
    primary: Profession,
    secondary: Profession,
    equipped_title_tracks: &[AttributeId],
) -> bool {
    if id.is_title_track() {
        return equipped_title_tracks.contains(&id);
    }
    if !id.is_standard() {
        return false;
    }
    if primary == Profession::None {
        return true;
    }
    if primary.attributes().contains(&id) {
        return true;
    }
    secondary.attributes().contains(&id) && secondary.primary_attribute() != Some(id)
}

/// Attributes to present for editing, in display order.
///
/// Standard attributes (primary set, then the secondary set minus the
/// secondary's primary attribute) sorted by name, followed by the title
/// tracks referenced by equipped skills, also by name.
pub fn display_order(
    primary: Profession,
    secondary: Profession,
    equipped_title_tracks: &[AttributeId],
) -> Vec<AttributeId> {
    let mut standard: Vec<AttributeId> = primary.attributes().to_vec();
    for id in secondary.attributes() {
        if !standard.contains(id) && secondary.primary_attribute() != Some(*id) {
            standard.push(*id);
        }
    }
    let mut tracks: Vec<AttributeId> = Vec::new();
    for id in equipped_title_tracks {
        if id.is_title_track() && !tracks.contains(id) {
            tracks.push(*id);
        }
    }
    standard.sort_by_key(|id| id.name().unwrap_or(""));
    tracks.sort_by_key(|id| id.name().unwrap_or(""));
    standard.extend(tracks);
    standard
}
