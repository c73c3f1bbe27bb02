//! Lazy traversal of conferences and their team directories.
//!
//! Each call to [`HierarchyWalker::walk_league`] starts a fresh enumeration of
//! what is on disk at that moment. Conferences are visited East then West;
//! teams within a conference in lexicographic slug order. A conference
//! directory is only listed once the walk reaches it.
//!
//! Entries that are not valid teams are skipped and recorded as
//! [`WalkWarning`]s instead of failing the walk.

use crate::{
    core::paths::{PathResolver, TeamLocation, TABLE_FILE_NAME},
    Conference, TeamSlug,
};
use serde::Serialize;
use std::{fs, io::ErrorKind, path::PathBuf, vec};
use tracing::warn;

/// A team found on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamEntry {
    pub conference: Conference,
    pub team: TeamSlug,
    #[serde(skip)]
    pub location: TeamLocation,
}

/// An entry skipped during a walk, or a team whose table could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WalkWarning {
    pub conference: Conference,
    pub entry: String,
    pub path: PathBuf,
    pub reason: String,
}

impl WalkWarning {
    pub fn new(
        conference: Conference,
        entry: impl Into<String>,
        path: impl Into<PathBuf>,
        reason: impl Into<String>,
    ) -> Self {
        let warning = Self {
            conference,
            entry: entry.into(),
            path: path.into(),
            reason: reason.into(),
        };
        warn!(
            conference = %warning.conference,
            entry = %warning.entry,
            path = %warning.path.display(),
            "skipping: {}",
            warning.reason
        );
        warning
    }
}

/// Starts walks over the hierarchy below a resolver's root.
#[derive(Debug, Clone, Copy)]
pub struct HierarchyWalker<'a> {
    resolver: &'a PathResolver,
}

impl<'a> HierarchyWalker<'a> {
    pub fn new(resolver: &'a PathResolver) -> Self {
        Self { resolver }
    }

    /// Walk every conference.
    pub fn walk_league(&self) -> LeagueWalk<'a> {
        LeagueWalk::new(self.resolver, Conference::ALL.to_vec())
    }

    /// Walk a single conference.
    pub fn walk_conference(&self, conference: Conference) -> LeagueWalk<'a> {
        LeagueWalk::new(self.resolver, vec![conference])
    }
}

/// Iterator over the valid teams of one walk.
#[derive(Debug)]
pub struct LeagueWalk<'a> {
    resolver: &'a PathResolver,
    pending: vec::IntoIter<Conference>,
    current: Option<(Conference, vec::IntoIter<(String, PathBuf)>)>,
    warnings: Vec<WalkWarning>,
}

impl<'a> LeagueWalk<'a> {
    fn new(resolver: &'a PathResolver, conferences: Vec<Conference>) -> Self {
        Self {
            resolver,
            pending: conferences.into_iter(),
            current: None,
            warnings: Vec::new(),
        }
    }

    /// Warnings recorded so far.
    pub fn warnings(&self) -> &[WalkWarning] {
        &self.warnings
    }

    pub fn into_warnings(self) -> Vec<WalkWarning> {
        self.warnings
    }

    /// Add a warning produced by a consumer of this walk (e.g. an unreadable
    /// table), keeping all warnings in encounter order.
    pub fn record_warning(&mut self, warning: WalkWarning) {
        self.warnings.push(warning);
    }
}

impl Iterator for LeagueWalk<'_> {
    type Item = TeamEntry;

    fn next(&mut self) -> Option<TeamEntry> {
        loop {
            if let Some((conference, entries)) = self.current.as_mut() {
                for (name, path) in entries.by_ref() {
                    if let Some(entry) =
                        admit(self.resolver, *conference, name, path, &mut self.warnings)
                    {
                        return Some(entry);
                    }
                }
                self.current = None;
            }

            let conference = self.pending.next()?;
            let entries = list_conference(self.resolver, conference, &mut self.warnings);
            self.current = Some((conference, entries.into_iter()));
        }
    }
}

/// Directory entries of a conference, sorted by name. A missing conference
/// directory is simply empty.
fn list_conference(
    resolver: &PathResolver,
    conference: Conference,
    warnings: &mut Vec<WalkWarning>,
) -> Vec<(String, PathBuf)> {
    let dir = resolver.conference_dir(conference);
    let read_dir = match fs::read_dir(&dir) {
        Ok(read_dir) => read_dir,
        Err(e) if e.kind() == ErrorKind::NotFound => return Vec::new(),
        Err(e) => {
            warnings.push(WalkWarning::new(
                conference,
                conference.dir_name(),
                &dir,
                format!("cannot list conference directory: {}", e),
            ));
            return Vec::new();
        }
    };

    let mut entries = Vec::new();
    for item in read_dir {
        match item {
            Ok(item) => entries.push((item.file_name().to_string_lossy().into_owned(), item.path())),
            Err(e) => warnings.push(WalkWarning::new(
                conference,
                conference.dir_name(),
                &dir,
                format!("cannot read directory entry: {}", e),
            )),
        }
    }
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    entries
}

fn admit(
    resolver: &PathResolver,
    conference: Conference,
    name: String,
    path: PathBuf,
    warnings: &mut Vec<WalkWarning>,
) -> Option<TeamEntry> {
    if !path.is_dir() {
        warnings.push(WalkWarning::new(conference, name, path, "not a directory"));
        return None;
    }
    let Some(team) = TeamSlug::from_dir_name(&name) else {
        warnings.push(WalkWarning::new(conference, name, path, "not a valid team slug"));
        return None;
    };
    if !resolver.admits(conference, &team) {
        warnings.push(WalkWarning::new(
            conference,
            name,
            path,
            format!("not on the {} roster", conference),
        ));
        return None;
    }
    let location = resolver.locate(conference, &team);
    if !location.has_table() {
        warnings.push(WalkWarning::new(
            conference,
            name,
            path,
            format!("missing {}", TABLE_FILE_NAME),
        ));
        return None;
    }

    Some(TeamEntry {
        conference,
        team,
        location,
    })
}
