/// Build configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildConfig {
    /// Attribute points available to spend across standard attributes.
    pub attribute_points: u16,
}

impl BuildConfig {
    // ===== compile-time constants used as type parameters =====
    /// Number of skill slots on a bar. Fixed by the template wire format.
    pub const SKILL_SLOTS: usize = 8;
    /// Maximum number of attribute entries a template can carry
    /// (the count field is 4 bits wide).
    pub const MAX_TEMPLATE_ATTRIBUTES: usize = 15;
    /// Maximum number of runes applied to a loadout at once.
    pub const MAX_RUNES: usize = 5;

    // ===== rule constants =====
    /// Highest rank reachable by spending points.
    pub const SPEND_RANK_CAP: u8 = 12;
    /// Highest rank reachable after external bonuses.
    pub const EFFECTIVE_RANK_CAP: u8 = 20;
    /// Highest uniform title/consumable bonus ("HR bonus").
    pub const MAX_TITLE_BONUS: u8 = 4;
    /// Base health of a max-level character, before modifiers.
    pub const BASE_HEALTH: i32 = 480;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_ATTRIBUTE_POINTS: u16 = 200;

    pub fn new() -> Self {
        Self {
            attribute_points: Self::DEFAULT_ATTRIBUTE_POINTS,
        }
    }

    pub fn with_attribute_points(attribute_points: u16) -> Self {
        Self { attribute_points }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self::new()
    }
}
