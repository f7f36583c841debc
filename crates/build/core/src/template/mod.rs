//! Binary template codec for complete builds.
//!
//! A template packs the professions, attribute spread, and eight skill slots
//! of a build into a short printable string. The format uses variable-width
//! fields sized by small "width code" fields, over the little-endian bit
//! stream implemented in [`stream`].
//!
//! The codec is deliberately lenient to stay byte-compatible with codes
//! produced elsewhere: decoding skips unknown characters and zero-fills
//! truncated tails, encoding clamps out-of-width values instead of failing.
//! Round-trip fidelity — `decode(encode(t)) == t` for any template whose
//! values fit the chosen widths — is the contract the tests pin down.

mod codec;
mod stream;

pub use codec::DecodeError;

use arrayvec::ArrayVec;

use crate::config::BuildConfig;
use crate::skill::SkillId;

/// Fixed header of a template code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemplateHeader {
    /// Template kind; skill templates are kind 14.
    pub kind: u8,
    /// Format version; currently always 0.
    pub version: u8,
}

impl TemplateHeader {
    /// Header kind identifying a skill template.
    pub const SKILL_TEMPLATE: u8 = 14;
}

impl Default for TemplateHeader {
    fn default() -> Self {
        Self {
            kind: Self::SKILL_TEMPLATE,
            version: 0,
        }
    }
}

/// One attribute entry in a template: a raw wire id and its rank.
///
/// The wire format carries unsigned ids only; title tracks (negative ids)
/// are a local concept and never serialize.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemplateAttribute {
    pub id: u32,
    pub rank: u8,
}

impl TemplateAttribute {
    pub fn new(id: u32, rank: u8) -> Self {
        Self { id, rank }
    }
}

/// Decoded form of a build template code.
///
/// Fields hold raw wire values: professions and skills are plain ids, not
/// resolved against any catalog, so arbitrary externally produced codes
/// survive a decode/encode round trip unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildTemplate {
    pub header: TemplateHeader,
    pub primary: u32,
    pub secondary: u32,
    pub attributes: ArrayVec<TemplateAttribute, { BuildConfig::MAX_TEMPLATE_ATTRIBUTES }>,
    pub skills: [SkillId; BuildConfig::SKILL_SLOTS],
}

impl BuildTemplate {
    /// Creates an empty template with the standard header.
    pub fn new(primary: u32, secondary: u32) -> Self {
        Self {
            primary,
            secondary,
            ..Self::default()
        }
    }

    /// Adds an attribute entry, dropping it once the wire limit is reached.
    pub fn push_attribute(&mut self, id: u32, rank: u8) -> bool {
        self.attributes
            .try_push(TemplateAttribute::new(id, rank))
            .is_ok()
    }

    /// Decodes a template code string.
    pub fn decode(code: &str) -> Result<Self, DecodeError> {
        codec::decode(code)
    }

    /// Encodes this template as a code string.
    pub fn encode(&self) -> String {
        codec::encode(self)
    }
}
