use anyhow::{Context, Result};
use csv::{ReaderBuilder, Trim};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

use crate::backend::storage::memory::FixtureSet;

pub const USERS_FILE: &str = "users.csv";
pub const CHILDREN_FILE: &str = "children.csv";
pub const MILESTONES_FILE: &str = "milestones.csv";
pub const POSTCARD_CONTENTS_FILE: &str = "postcard_contents.csv";
pub const POSTCARDS_FILE: &str = "postcards.csv";
pub const TIMELINE_FILE: &str = "timeline.csv";

/// Deserialize every row of a CSV table. `table` only names the source in errors.
pub fn read_table<T, R>(table: &str, reader: R) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::Headers)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (index, result) in csv_reader.deserialize::<T>().enumerate() {
        // Header is line 1
        let row = result.with_context(|| format!("{}: invalid row {}", table, index + 2))?;
        rows.push(row);
    }
    Ok(rows)
}

/// Read one table from the directory. A missing file is an empty table.
fn read_table_file<T: DeserializeOwned>(dir: &Path, file_name: &str) -> Result<Vec<T>> {
    let path = dir.join(file_name);
    if !path.exists() {
        warn!("Fixture file {} not found, using an empty table", path.display());
        return Ok(Vec::new());
    }
    let file = File::open(&path).with_context(|| format!("Failed to open {}", path.display()))?;
    read_table(file_name, file)
}

/// Load and validate a complete fixture set from a directory of CSV files.
pub fn load_fixture_dir(dir: &Path) -> Result<FixtureSet> {
    if !dir.is_dir() {
        anyhow::bail!("Fixture directory {} does not exist", dir.display());
    }

    let fixtures = FixtureSet {
        users: read_table_file(dir, USERS_FILE)?,
        children: read_table_file(dir, CHILDREN_FILE)?,
        milestones: read_table_file(dir, MILESTONES_FILE)?,
        postcard_contents: read_table_file(dir, POSTCARD_CONTENTS_FILE)?,
        postcards: read_table_file(dir, POSTCARDS_FILE)?,
        timeline: read_table_file(dir, TIMELINE_FILE)?,
    };
    fixtures
        .validate()
        .with_context(|| format!("Invalid fixtures in {}", dir.display()))?;

    info!(
        "Loaded fixtures from {}: {} children, {} milestones, {} postcards, {} timeline entries",
        dir.display(),
        fixtures.children.len(),
        fixtures.milestones.len(),
        fixtures.postcards.len(),
        fixtures.timeline.len()
    );
    Ok(fixtures)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::models::milestone::Milestone;
    use crate::backend::storage::csv::seed::seed_fixtures;
    use crate::backend::storage::csv::test_utils::FixtureDir;
    use shared::MilestoneCategory;

    #[test]
    fn test_load_written_seed() {
        let seed = seed_fixtures().unwrap();
        let dir = FixtureDir::with_fixtures(&seed).unwrap();

        let loaded = load_fixture_dir(dir.path()).unwrap();
        assert_eq!(loaded, seed);
    }

    #[test]
    fn test_missing_tables_are_empty() {
        let dir = FixtureDir::new().unwrap();
        dir.write_file(
            MILESTONES_FILE,
            "id,title,description,category,icon,is_completed,completed_at,next_postcard_date,progress\n\
             m1,Trocken,Ein Tag trocken,special,⭐,false,,2024-05-01,0\n",
        )
        .unwrap();

        let loaded = load_fixture_dir(dir.path()).unwrap();
        assert!(loaded.children.is_empty());
        assert_eq!(loaded.milestones.len(), 1);
        assert_eq!(loaded.milestones[0].category, MilestoneCategory::Special);
        assert_eq!(loaded.milestones[0].completed_at, None);
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let csv = "id,title,description,category,icon,is_completed,completed_at,next_postcard_date,progress\n\
                   m1,Trocken,Ein Tag trocken,legendary,⭐,false,,2024-05-01,0\n";
        let result: Result<Vec<Milestone>> = read_table(MILESTONES_FILE, csv.as_bytes());
        let error = result.unwrap_err();
        assert!(format!("{:#}", error).contains("invalid row 2"));
    }

    #[test]
    fn test_invariant_violation_is_rejected() {
        let dir = FixtureDir::new().unwrap();
        dir.write_file(
            MILESTONES_FILE,
            "id,title,description,category,icon,is_completed,completed_at,next_postcard_date,progress\n\
             m1,Trocken,Ein Tag trocken,basic,⭐,true,,2024-05-01,100\n",
        )
        .unwrap();

        assert!(load_fixture_dir(dir.path()).is_err());
    }

    #[test]
    fn test_missing_directory() {
        let dir = FixtureDir::new().unwrap();
        assert!(load_fixture_dir(&dir.path().join("nope")).is_err());
    }
}
