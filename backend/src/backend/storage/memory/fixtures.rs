//! # Fixture Tables
//!
//! The complete, immutable data set the dashboard reads from. A fixture set
//! is validated once when it is loaded; a set that breaks a milestone or
//! postcard invariant, references a missing record, or attaches a record to
//! another child's content, is rejected.

use anyhow::{bail, Result};
use std::collections::{HashMap, HashSet};

use crate::backend::domain::models::child::Child;
use crate::backend::domain::models::milestone::Milestone;
use crate::backend::domain::models::postcard::{Postcard, PostcardContent};
use crate::backend::domain::models::timeline::TimelineEntry;
use crate::backend::domain::models::user::User;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FixtureSet {
    pub users: Vec<User>,
    pub children: Vec<Child>,
    pub milestones: Vec<Milestone>,
    pub postcard_contents: Vec<PostcardContent>,
    pub postcards: Vec<Postcard>,
    pub timeline: Vec<TimelineEntry>,
}

impl FixtureSet {
    pub fn validate(&self) -> Result<()> {
        ensure_unique_ids("user", self.users.iter().map(|u| u.id.as_str()))?;
        ensure_unique_ids("child", self.children.iter().map(|c| c.id.as_str()))?;
        ensure_unique_ids("milestone", self.milestones.iter().map(|m| m.id.as_str()))?;
        ensure_unique_ids(
            "postcard content",
            self.postcard_contents.iter().map(|c| c.id.as_str()),
        )?;
        ensure_unique_ids("postcard", self.postcards.iter().map(|p| p.id.as_str()))?;
        ensure_unique_ids("timeline entry", self.timeline.iter().map(|e| e.id.as_str()))?;

        let mut emails = HashSet::new();
        for user in &self.users {
            if !emails.insert(user.email.to_lowercase()) {
                bail!("Duplicate user email: {}", user.email);
            }
        }

        for milestone in &self.milestones {
            milestone.validate()?;
        }

        let child_ids: HashSet<&str> = self.children.iter().map(|c| c.id.as_str()).collect();
        let content_owners: HashMap<&str, &str> = self
            .postcard_contents
            .iter()
            .map(|c| (c.id.as_str(), c.child_id.as_str()))
            .collect();
        let postcard_owners: HashMap<&str, &str> = self
            .postcards
            .iter()
            .map(|p| (p.id.as_str(), p.child_id.as_str()))
            .collect();
        let milestone_ids: HashSet<&str> = self.milestones.iter().map(|m| m.id.as_str()).collect();

        for content in &self.postcard_contents {
            if !child_ids.contains(content.child_id.as_str()) {
                bail!("Postcard content {} references unknown child {}", content.id, content.child_id);
            }
            if !milestone_ids.contains(content.milestone_id.as_str()) {
                bail!(
                    "Postcard content {} references unknown milestone {}",
                    content.id,
                    content.milestone_id
                );
            }
        }

        for postcard in &self.postcards {
            postcard.validate()?;
            if !child_ids.contains(postcard.child_id.as_str()) {
                bail!("Postcard {} references unknown child {}", postcard.id, postcard.child_id);
            }
            match content_owners.get(postcard.content_id.as_str()) {
                None => bail!("Postcard {} references unknown content {}", postcard.id, postcard.content_id),
                Some(owner) if *owner != postcard.child_id => bail!(
                    "Postcard {} for child {} uses content {} of child {}",
                    postcard.id,
                    postcard.child_id,
                    postcard.content_id,
                    owner
                ),
                Some(_) => {}
            }
        }

        for entry in &self.timeline {
            if !child_ids.contains(entry.child_id.as_str()) {
                bail!("Timeline entry {} references unknown child {}", entry.id, entry.child_id);
            }
            let Some(postcard_id) = entry.postcard_id.as_deref() else {
                continue;
            };
            match postcard_owners.get(postcard_id) {
                None => bail!("Timeline entry {} references unknown postcard {}", entry.id, postcard_id),
                Some(owner) if *owner != entry.child_id => bail!(
                    "Timeline entry {} for child {} references postcard {} of child {}",
                    entry.id,
                    entry.child_id,
                    postcard_id,
                    owner
                ),
                Some(_) => {}
            }
        }

        Ok(())
    }
}

fn ensure_unique_ids<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            bail!("Duplicate {} id: {}", kind, id);
        }
    }
    Ok(())
}
