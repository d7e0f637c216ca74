// src/loader.rs
//! CSV ingestion of the profile universe.
//!
//! Expected layout: a header line naming at least the required fields,
//! then one profile per line. The `friends` cell is a quoted,
//! comma-separated list of `uuid:strength` entries. After loading, a
//! sweep drops every edge that breaks the symmetry invariant.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use std::str::FromStr;

use tracing::{debug, warn};

use crate::error::{Result, SocnetError};
use crate::model::{Gender, Profile, ProfileId};

const FIELD_PROFILE_ID: &str = "profile_id";
const FIELD_NAME: &str = "name";
const FIELD_AGE: &str = "age";
const FIELD_GENDER: &str = "gender";
const FIELD_FRIENDS: &str = "friends";

/// Loads profiles from a CSV file and sweeps inconsistent friendships.
///
/// # Errors
/// Returns `Io` if the file cannot be read, `Malformed` for a bad header
/// or profile row. Malformed friend entries are logged and skipped.
pub fn load_profiles_csv(path: &Path) -> Result<HashMap<ProfileId, Profile>> {
    let content = fs::read_to_string(path).map_err(|source| SocnetError::Io {
        source,
        path: path.to_path_buf(),
    })?;

    let mut lines = content.lines();
    let header = lines
        .next()
        .ok_or_else(|| SocnetError::Malformed("CSV file is empty".to_string()))?;
    let columns = split_line(header.trim());
    let index = FieldIndex::from_header(&columns)?;

    let mut profiles = HashMap::new();
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let parts = split_line(line);
        if parts.len() != columns.len() {
            return Err(SocnetError::Malformed(format!(
                "line has {} fields, header has {}: {line:?}",
                parts.len(),
                columns.len()
            )));
        }

        let profile = parse_row(&parts, &index)?;
        debug!("profile {} ({}) loaded", profile.id(), profile.name());
        profiles.insert(profile.id(), profile);
    }

    sweep_inconsistent_edges(&mut profiles);

    Ok(profiles)
}

/// Splits a comma-separated line, honoring double quotes. Quote characters
/// are dropped; commas inside quotes do not split.
#[must_use]
pub fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            '"' => in_quotes = !in_quotes,
            _ => current.push(c),
        }
    }
    fields.push(current.trim().to_string());

    fields
}

/// Column positions of the required fields.
struct FieldIndex {
    profile_id: usize,
    name: usize,
    age: usize,
    gender: usize,
    friends: usize,
}

impl FieldIndex {
    fn from_header(columns: &[String]) -> Result<Self> {
        let position = |field: &str| -> Result<usize> {
            columns
                .iter()
                .position(|c| c == field)
                .ok_or_else(|| {
                    SocnetError::Malformed(format!("CSV header is missing required field {field:?}"))
                })
        };

        Ok(Self {
            profile_id: position(FIELD_PROFILE_ID)?,
            name: position(FIELD_NAME)?,
            age: position(FIELD_AGE)?,
            gender: position(FIELD_GENDER)?,
            friends: position(FIELD_FRIENDS)?,
        })
    }
}

fn parse_row(parts: &[String], index: &FieldIndex) -> Result<Profile> {
    let id = ProfileId::from_str(&parts[index.profile_id])?;
    let age: u32 = parts[index.age]
        .parse()
        .map_err(|_| SocnetError::Malformed(format!("invalid age {:?}", parts[index.age])))?;
    let gender = Gender::from_str(&parts[index.gender])?;

    let mut profile = Profile::new(id, &parts[index.name], age, gender)?;
    for (friend_id, strength) in parse_friendships(&parts[index.friends], id) {
        if let Err(e) = profile.add_friend(friend_id, strength) {
            warn!("error adding friend to profile {id}: {e}");
        }
    }

    Ok(profile)
}

/// Parses the `friends` cell. Malformed entries are logged and skipped;
/// a duplicate friend id keeps the last strength seen.
fn parse_friendships(cell: &str, profile_id: ProfileId) -> BTreeMap<ProfileId, u32> {
    let mut friends = BTreeMap::new();

    for entry in split_line(cell) {
        if entry.is_empty() {
            continue;
        }

        let Some((id_part, strength_part)) = entry.split_once(':') else {
            warn!("invalid friendship data format: {entry:?}");
            continue;
        };

        let parsed = ProfileId::from_str(id_part)
            .and_then(|friend_id| {
                strength_part
                    .trim()
                    .parse::<u32>()
                    .map(|strength| (friend_id, strength))
                    .map_err(|_| {
                        SocnetError::Malformed(format!("invalid strength {strength_part:?}"))
                    })
            });

        match parsed {
            Ok((friend_id, strength)) => {
                if friends.insert(friend_id, strength).is_some() {
                    warn!("friendship between {profile_id} and {friend_id} listed twice");
                }
            }
            Err(e) => warn!("error adding friend to profile {profile_id}: {e}"),
        }
    }

    friends
}

/// Drops edges that violate the symmetry invariant: edges to unknown
/// profiles, unidirectional edges, self-loops, and edges whose two sides
/// carry different strengths.
fn sweep_inconsistent_edges(profiles: &mut HashMap<ProfileId, Profile>) {
    let mut ids: Vec<ProfileId> = profiles.keys().copied().collect();
    ids.sort_unstable();

    for id in ids {
        let entries: Vec<(ProfileId, u32)> = match profiles.get(&id) {
            Some(p) => p.friends().iter().map(|(&f, &w)| (f, w)).collect(),
            None => continue,
        };

        let mut to_remove = Vec::new();
        for (friend_id, strength) in entries {
            if friend_id == id {
                warn!("profile {id} has a friendship with itself");
                to_remove.push(friend_id);
                continue;
            }

            match profiles.get(&friend_id) {
                None => {
                    warn!("profile {id} has a friendship with unknown profile {friend_id}");
                    to_remove.push(friend_id);
                }
                Some(friend) => match friend.friends().get(&id) {
                    None => {
                        warn!("profile {id} has a unidirectional friendship with {friend_id}");
                        to_remove.push(friend_id);
                    }
                    Some(&back) if back != strength => {
                        warn!("profile {id} has an asymmetric friendship with {friend_id}");
                        to_remove.push(friend_id);
                    }
                    Some(_) => {}
                },
            }
        }

        if let Some(profile) = profiles.get_mut(&id) {
            for friend_id in to_remove {
                let _ = profile.remove_friend(friend_id);
            }
        }
    }
}
