//! Field-level encode/decode over the template bit stream.

use arrayvec::ArrayVec;

use super::stream::{BitReader, BitWriter, min_bits};
use super::{BuildTemplate, TemplateAttribute, TemplateHeader};
use crate::config::BuildConfig;
use crate::skill::SkillId;

/// Failure to decode a template code.
///
/// The format itself never fails mid-stream (truncated fields read as 0),
/// so the only rejection is input that contains no code symbols at all —
/// decoding that to an all-zero template would silently wipe a build.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("code contains no template symbols")]
    EmptyCode,
}

/// Width of a profession id field for a given 2-bit width code.
fn profession_width(code: u32) -> usize {
    (code * 2 + 4) as usize
}

/// Width of an attribute id field for a given 4-bit width code.
fn attribute_width(code: u32) -> usize {
    (code + 4) as usize
}

/// Width of a skill id field for a given 4-bit width code.
fn skill_width(code: u32) -> usize {
    (code + 8) as usize
}

pub(super) fn decode(code: &str) -> Result<BuildTemplate, DecodeError> {
    let mut reader = BitReader::from_code(code);
    if reader.is_exhausted() {
        return Err(DecodeError::EmptyCode);
    }

    let header = TemplateHeader {
        kind: reader.read(4) as u8,
        version: reader.read(4) as u8,
    };

    let prof_width = profession_width(reader.read(2));
    let primary = reader.read(prof_width);
    let secondary = reader.read(prof_width);

    let count = reader.read(4) as usize;
    let attr_width = attribute_width(reader.read(4));
    let mut attributes = ArrayVec::new();
    for _ in 0..count {
        // count is a 4-bit field, so it can never exceed the capacity
        let id = reader.read(attr_width);
        let rank = reader.read(4) as u8;
        attributes.push(TemplateAttribute::new(id, rank));
    }

    let skill_id_width = skill_width(reader.read(4));
    let mut skills = [SkillId::EMPTY; BuildConfig::SKILL_SLOTS];
    for slot in &mut skills {
        *slot = SkillId(reader.read(skill_id_width));
    }

    Ok(BuildTemplate {
        header,
        primary,
        secondary,
        attributes,
        skills,
    })
}

pub(super) fn encode(template: &BuildTemplate) -> String {
    let mut writer = BitWriter::new();

    writer.write(template.header.kind as u32, 4);
    writer.write(template.header.version as u32, 4);

    let max_prof = template.primary.max(template.secondary);
    let prof_code = (min_bits(max_prof).max(4).div_ceil(2).saturating_sub(2)).min(3);
    writer.write(prof_code, 2);
    let prof_width = profession_width(prof_code);
    writer.write(template.primary, prof_width);
    writer.write(template.secondary, prof_width);

    writer.write(template.attributes.len() as u32, 4);
    let attr_code = match template.attributes.iter().map(|a| a.id).max() {
        Some(max_id) => (min_bits(max_id).max(4) - 4).min(15),
        None => 0,
    };
    writer.write(attr_code, 4);
    let attr_width = attribute_width(attr_code);
    for attr in &template.attributes {
        writer.write(attr.id, attr_width);
        writer.write(attr.rank as u32, 4);
    }

    let max_skill = template.skills.iter().map(|s| s.0).max().unwrap_or(0);
    let skill_code = (min_bits(max_skill).max(8) - 8).min(15);
    writer.write(skill_code, 4);
    let skill_id_width = skill_width(skill_code);
    for skill in &template.skills {
        writer.write(skill.0, skill_id_width);
    }

    writer.into_code()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(
        primary: u32,
        secondary: u32,
        attributes: &[(u32, u8)],
        skills: [u32; 8],
    ) -> BuildTemplate {
        let mut t = BuildTemplate::new(primary, secondary);
        for (id, rank) in attributes {
            assert!(t.push_attribute(*id, *rank));
        }
        t.skills = skills.map(SkillId);
        t
    }

    #[test]
    fn round_trip_reference_build() {
        let t = template(6, 3, &[(12, 10)], [1, 2, 3, 4, 5, 6, 7, 8]);
        let code = t.encode();
        let decoded = BuildTemplate::decode(&code).unwrap();
        assert_eq!(decoded, t);
        assert_eq!(decoded.header.kind, TemplateHeader::SKILL_TEMPLATE);
        assert_eq!(decoded.header.version, 0);
    }

    #[test]
    fn round_trip_empty_build() {
        let t = BuildTemplate::new(0, 0);
        let decoded = BuildTemplate::decode(&t.encode()).unwrap();
        assert_eq!(decoded, t);
    }

    #[test]
    fn round_trip_wide_fields() {
        // Forces every width code up: 10-bit professions, 19-bit attribute
        // ids, 23-bit skill ids.
        let t = template(
            1023,
            900,
            &[(524_287, 12), (44, 9)],
            [8_388_607, 0, 1, 2, 3, 4, 5, 6],
        );
        let decoded = BuildTemplate::decode(&t.encode()).unwrap();
        assert_eq!(decoded, t);
    }

    #[test]
    fn round_trip_full_attribute_list() {
        let attrs: Vec<(u32, u8)> = (0..15).map(|i| (i as u32, (i % 13) as u8)).collect();
        let t = template(1, 2, &attrs, [10, 20, 30, 40, 50, 60, 70, 80]);
        let decoded = BuildTemplate::decode(&t.encode()).unwrap();
        assert_eq!(decoded, t);
    }

    #[test]
    fn decode_skips_foreign_characters() {
        let t = template(6, 3, &[(12, 10)], [1, 2, 3, 4, 5, 6, 7, 8]);
        let code = t.encode();
        let decorated: String = code
            .chars()
            .flat_map(|c| [c, ' '])
            .chain("!!".chars())
            .collect();
        assert_eq!(BuildTemplate::decode(&decorated).unwrap(), t);
    }

    #[test]
    fn decode_zero_fills_truncated_tail() {
        let t = template(6, 3, &[(12, 10)], [1, 2, 3, 4, 5, 6, 7, 8]);
        let code = t.encode();
        let truncated = &code[..code.len() - 2];
        let decoded = BuildTemplate::decode(truncated).unwrap();
        // The head of the stream still parses; missing skill slots read 0.
        assert_eq!(decoded.primary, 6);
        assert_eq!(decoded.secondary, 3);
        assert_eq!(*decoded.skills.last().unwrap(), SkillId::EMPTY);
    }

    #[test]
    fn decode_rejects_symbol_free_input() {
        assert_eq!(BuildTemplate::decode(""), Err(DecodeError::EmptyCode));
        assert_eq!(BuildTemplate::decode(" \n!"), Err(DecodeError::EmptyCode));
    }

    #[test]
    fn encode_clamps_out_of_width_values() {
        let mut t = BuildTemplate::new(0, 0);
        // Rank field is fixed at 4 bits; a rank of 99 clamps to 15.
        assert!(t.push_attribute(3, 99));
        let decoded = BuildTemplate::decode(&t.encode()).unwrap();
        assert_eq!(decoded.attributes[0].rank, 15);
    }

    #[test]
    fn profession_width_code_is_minimal() {
        // Ids up to 15 fit the 4-bit floor; 16 forces the next step.
        let narrow = template(10, 8, &[], [0; 8]).encode();
        let wide = template(16, 0, &[], [0; 8]).encode();
        let narrow_decoded = BuildTemplate::decode(&narrow).unwrap();
        let wide_decoded = BuildTemplate::decode(&wide).unwrap();
        assert_eq!(narrow_decoded.primary, 10);
        assert_eq!(wide_decoded.primary, 16);
        assert!(narrow.len() < wide.len());
    }

    #[test]
    fn randomized_round_trips_within_width_bounds() {
        use rand::{Rng, SeedableRng, rngs::StdRng};

        let mut rng = StdRng::seed_from_u64(0x7e3a_11d2);
        for _ in 0..500 {
            let mut t = BuildTemplate::new(rng.gen_range(0..1024), rng.gen_range(0..1024));
            t.header.kind = rng.gen_range(0..16);
            t.header.version = rng.gen_range(0..16);
            for _ in 0..rng.gen_range(0..=15) {
                t.push_attribute(rng.gen_range(0..1 << 19), rng.gen_range(0..16));
            }
            for slot in &mut t.skills {
                *slot = SkillId(rng.gen_range(0..1 << 23));
            }
            let decoded = BuildTemplate::decode(&t.encode()).unwrap();
            assert_eq!(decoded, t);
        }
    }
}
