//! Skill catalog loader.

use std::path::Path;

use build_core::SkillData;
use serde::{Deserialize, Serialize};

use crate::book::SkillBook;
use crate::loaders::{LoadResult, read_file};

/// Skill catalog structure for RON files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillCatalog {
    pub skills: Vec<SkillData>,
    /// Records that differ against human opponents; ids must also appear
    /// in `skills`.
    #[serde(default)]
    pub pvp_overrides: Vec<SkillData>,
}

/// Loader for skill catalogs from RON files.
pub struct SkillLoader;

impl SkillLoader {
    /// Loads a catalog file into a ready-to-query [`SkillBook`].
    ///
    /// Duplicate ids within a section are last-wins; each replacement is
    /// logged as a warning since it usually indicates a data error.
    /// Overrides whose id has no PvE record are kept but logged, as they
    /// are unreachable through the fallback lookup only for the PvE
    /// variant.
    pub fn load(path: &Path) -> LoadResult<SkillBook> {
        let content = read_file(path)?;
        let catalog: SkillCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("failed to parse skill catalog {}: {}", path.display(), e))?;
        let book = Self::assemble(catalog);
        tracing::debug!(
            path = %path.display(),
            skills = book.len(),
            pvp_overrides = book.pvp_override_count(),
            "loaded skill catalog"
        );
        Ok(book)
    }

    /// Builds a book from an already-parsed catalog.
    pub fn assemble(catalog: SkillCatalog) -> SkillBook {
        let mut book = SkillBook::new();
        for skill in catalog.skills {
            let id = skill.id;
            if let Some(replaced) = book.insert(skill) {
                tracing::warn!(%id, name = %replaced.name, "duplicate skill id in catalog");
            }
        }
        for skill in catalog.pvp_overrides {
            let id = skill.id;
            if book.get(id, build_core::SkillVariant::Pve).is_none() {
                tracing::warn!(%id, "pvp override without a base record");
            }
            if book.insert_pvp_override(skill).is_some() {
                tracing::warn!(%id, "duplicate pvp override in catalog");
            }
        }
        book
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use build_core::{SkillId, SkillOracle, SkillVariant};
    use std::io::Write;

    const CATALOG: &str = r#"(
        skills: [
            (
                id: 824,
                name: "Flare",
                profession: Elementalist,
                attribute: 10,
                kind: Spell,
                flags: "",
                energy: 5,
                activation: 1.0,
                recharge: 0.0,
                aftercast: 0.75,
                adrenaline: 0,
                health_cost: 0,
                description: "Deal 20..56 fire damage.",
                progression: [
                    (
                        kind: Damage,
                        values: [20, 22, 25, 27, 30, 32, 35, 37, 40, 42, 44,
                                 47, 49, 52, 54, 56, 59, 61, 64, 66, 68, 71],
                    ),
                ],
            ),
        ],
        pvp_overrides: [
            (
                id: 824,
                name: "Flare",
                profession: Elementalist,
                attribute: 10,
                kind: Spell,
                flags: "",
                energy: 5,
                activation: 1.0,
                recharge: 0.0,
                aftercast: 0.75,
                adrenaline: 0,
                health_cost: 0,
                description: "Deal 15..40 fire damage.",
                progression: [
                    (
                        kind: Damage,
                        values: [15, 16, 18, 20, 21, 23, 25, 26, 28, 30, 31,
                                 33, 35, 36, 38, 40, 41, 43, 45, 46, 48, 50],
                    ),
                ],
            ),
        ],
    )"#;

    #[test]
    fn loads_catalog_with_pvp_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CATALOG.as_bytes()).unwrap();

        let book = SkillLoader::load(file.path()).unwrap();
        assert_eq!(book.len(), 1);
        assert_eq!(book.pvp_override_count(), 1);

        let pve = book.skill(SkillId(824), SkillVariant::Pve).unwrap();
        assert_eq!(pve.name, "Flare");
        assert_eq!(pve.progression[0].values[15], 56);

        let pvp = book.skill(SkillId(824), SkillVariant::Pvp).unwrap();
        assert_eq!(pvp.progression[0].values[15], 40);
    }

    #[test]
    fn missing_file_is_an_error_with_the_path() {
        let err = SkillLoader::load(Path::new("/nonexistent/catalog.ron")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/catalog.ron"));
    }

    #[test]
    fn malformed_catalog_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"(skills: [42])").unwrap();
        let err = SkillLoader::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }
}
