//! Temporary fixture directories for tests. The directory is removed when
//! the `FixtureDir` is dropped, even if the test panics.

use anyhow::Result;
use csv::Writer;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

use super::loader::{
    CHILDREN_FILE, MILESTONES_FILE, POSTCARDS_FILE, POSTCARD_CONTENTS_FILE, TIMELINE_FILE,
    USERS_FILE,
};
use crate::backend::storage::memory::FixtureSet;

pub struct FixtureDir {
    dir: TempDir,
}

impl FixtureDir {
    pub fn new() -> Result<Self> {
        Ok(Self { dir: TempDir::new()? })
    }

    /// A directory holding every table of `fixtures`
    pub fn with_fixtures(fixtures: &FixtureSet) -> Result<Self> {
        let dir = Self::new()?;
        dir.write_table(USERS_FILE, &fixtures.users)?;
        dir.write_table(CHILDREN_FILE, &fixtures.children)?;
        dir.write_table(MILESTONES_FILE, &fixtures.milestones)?;
        dir.write_table(POSTCARD_CONTENTS_FILE, &fixtures.postcard_contents)?;
        dir.write_table(POSTCARDS_FILE, &fixtures.postcards)?;
        dir.write_table(TIMELINE_FILE, &fixtures.timeline)?;
        Ok(dir)
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_file(&self, file_name: &str, contents: &str) -> Result<()> {
        fs::write(self.dir.path().join(file_name), contents)?;
        Ok(())
    }

    pub fn write_table<T: Serialize>(&self, file_name: &str, rows: &[T]) -> Result<()> {
        let mut writer = Writer::from_path(self.dir.path().join(file_name))?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}
