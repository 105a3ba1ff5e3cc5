//! Seed data compiled into the binary: Emma and Max, the five milestone
//! catalog entries and Emma's postcards and timeline.

use anyhow::Result;

use super::loader::{
    read_table, CHILDREN_FILE, MILESTONES_FILE, POSTCARDS_FILE, POSTCARD_CONTENTS_FILE,
    TIMELINE_FILE, USERS_FILE,
};
use crate::backend::storage::memory::FixtureSet;

const USERS: &str = include_str!("../../../../fixtures/seed/users.csv");
const CHILDREN: &str = include_str!("../../../../fixtures/seed/children.csv");
const MILESTONES: &str = include_str!("../../../../fixtures/seed/milestones.csv");
const POSTCARD_CONTENTS: &str = include_str!("../../../../fixtures/seed/postcard_contents.csv");
const POSTCARDS: &str = include_str!("../../../../fixtures/seed/postcards.csv");
const TIMELINE: &str = include_str!("../../../../fixtures/seed/timeline.csv");

pub fn seed_fixtures() -> Result<FixtureSet> {
    Ok(FixtureSet {
        users: read_table(USERS_FILE, USERS.as_bytes())?,
        children: read_table(CHILDREN_FILE, CHILDREN.as_bytes())?,
        milestones: read_table(MILESTONES_FILE, MILESTONES.as_bytes())?,
        postcard_contents: read_table(POSTCARD_CONTENTS_FILE, POSTCARD_CONTENTS.as_bytes())?,
        postcards: read_table(POSTCARDS_FILE, POSTCARDS.as_bytes())?,
        timeline: read_table(TIMELINE_FILE, TIMELINE.as_bytes())?,
    })
}
