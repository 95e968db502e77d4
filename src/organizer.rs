// ==============================================================================
// Organizer: Group Similar Names Into Folders
// ==============================================================================
//
// One pass over a snapshot of the directory's entry names. Each name in turn is
// the pivot: the live directory is listed again, every other entry whose base
// name is similar enough joins the pivot's group, and the group is moved into a
// freshly created folder named after the pivot.
//
// The inner listing is taken fresh for every pivot, so moves made for earlier
// pivots are visible to later ones. An entry therefore ends up in the group of
// the first pivot (in iteration order) that claims it, and folders created
// earlier in the run are candidates like any other entry.

use std::iter;
use std::path::Path;

use serde_json::{Value, json};
use tracing::{debug, debug_span, info, trace};

use crate::error::OrganizeError;
use crate::fs::{Filesystem, MemoryFs, RealFs};
use crate::name::base_name;
use crate::similarity::similarity;

/// Threshold used when none is configured.
pub const DEFAULT_THRESHOLD: f64 = 0.8;

/// Builder for organizing a directory by name similarity.
///
/// Follows the non-consuming builder pattern: configuration methods take
/// `&mut self`, so the same `Organizer` can be reused for several directories.
///
/// ```no_run
/// use simfold::Organizer;
///
/// let report = Organizer::new().threshold(0.75).organize("Downloads")?;
/// println!("{} folders created", report.folders_created());
/// # Ok::<(), simfold::OrganizeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Organizer {
    threshold: f64,
}

/// One folder created by a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    /// The entry whose base name the group was built around.
    pub pivot: String,
    /// Name of the folder the group was moved into.
    pub folder: String,
    /// The other entries that matched the pivot, in the order they were moved.
    pub members: Vec<String>,
}

impl Group {
    /// Every entry moved into the folder: the members, then the pivot.
    #[must_use]
    pub fn moved(&self) -> impl Iterator<Item = &str> {
        self.members
            .iter()
            .map(String::as_str)
            .chain(iter::once(self.pivot.as_str()))
    }
}

/// What a run did (or, for [`Organizer::plan`], would do).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrganizeReport {
    /// Groups in the order their folders were created.
    pub groups: Vec<Group>,
}

impl OrganizeReport {
    /// Number of folders created, one per group.
    #[must_use]
    pub fn folders_created(&self) -> usize {
        self.groups.len()
    }

    /// Number of entries moved, pivots included.
    #[must_use]
    pub fn entries_moved(&self) -> usize {
        self.groups.iter().map(|g| g.members.len() + 1).sum()
    }

    /// Whether the run left the directory untouched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// The report as a JSON array of `{pivot, folder, members}` objects.
    #[must_use]
    pub fn to_json(&self) -> Value {
        Value::Array(
            self.groups
                .iter()
                .map(|g| {
                    json!({
                        "pivot": g.pivot,
                        "folder": g.folder,
                        "members": g.members,
                    })
                })
                .collect(),
        )
    }
}

impl Default for Organizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Organizer {
    /// A new organizer using [`DEFAULT_THRESHOLD`].
    #[must_use]
    pub fn new() -> Self {
        Organizer {
            threshold: DEFAULT_THRESHOLD,
        }
    }

    /// Set the minimum similarity for two base names to be grouped.
    ///
    /// The comparison is inclusive. Values outside `[0.0, 1.0]` are accepted:
    /// anything at or below `0.0` groups every entry with the first pivot, and
    /// anything above `1.0` groups nothing.
    pub fn threshold(&mut self, threshold: f64) -> &mut Self {
        self.threshold = threshold;
        self
    }

    /// Organize `dir` on disk.
    pub fn organize(&self, dir: impl AsRef<Path>) -> Result<OrganizeReport, OrganizeError> {
        self.organize_with(&mut RealFs, dir.as_ref())
    }

    /// Work out what [`organize`](Self::organize) would do to `dir` without
    /// changing anything.
    ///
    /// The current listing of `dir` is copied into a [`MemoryFs`] and the full
    /// algorithm runs against that copy.
    pub fn plan(&self, dir: impl AsRef<Path>) -> Result<OrganizeReport, OrganizeError> {
        let dir = dir.as_ref();
        let mut fs = MemoryFs::snapshot(&RealFs, dir).map_err(|source| OrganizeError::ListDir {
            path: dir.to_path_buf(),
            source,
        })?;
        self.organize_with(&mut fs, dir)
    }

    /// Organize `dir` through any [`Filesystem`].
    pub fn organize_with<F: Filesystem>(
        &self,
        fs: &mut F,
        dir: &Path,
    ) -> Result<OrganizeReport, OrganizeError> {
        let snapshot = list_sorted(fs, dir)?;
        debug!(dir = %dir.display(), entries = snapshot.len(), threshold = self.threshold, "organizing");

        let mut report = OrganizeReport::default();
        for pivot in &snapshot {
            let _span = debug_span!("pivot", name = %pivot).entered();

            if !fs.exists(&dir.join(pivot)) {
                debug!("already moved by an earlier group");
                continue;
            }

            let base = base_name(pivot);
            let members = self.similar_entries(fs, dir, pivot)?;
            if members.is_empty() {
                continue;
            }

            let folder = unique_folder_name(fs, dir, base, members.len());
            let folder_path = dir.join(&folder);
            fs.create_dir(&folder_path)
                .map_err(|source| OrganizeError::CreateDir {
                    path: folder_path.clone(),
                    source,
                })?;

            let group = Group {
                pivot: pivot.clone(),
                folder,
                members,
            };
            for name in group.moved() {
                let from = dir.join(name);
                let to = folder_path.join(name);
                fs.rename(&from, &to)
                    .map_err(|source| OrganizeError::Move { from, to, source })?;
            }

            info!(folder = %group.folder, moved = group.members.len() + 1, "grouped");
            report.groups.push(group);
        }

        Ok(report)
    }

    /// Entries currently in `dir`, other than `pivot`, whose base name scores
    /// at least the threshold against the pivot's.
    fn similar_entries<F: Filesystem>(
        &self,
        fs: &F,
        dir: &Path,
        pivot: &str,
    ) -> Result<Vec<String>, OrganizeError> {
        let base = base_name(pivot);
        let mut similar = Vec::new();
        for other in list_sorted(fs, dir)? {
            if other == pivot {
                continue;
            }
            let score = similarity(base, base_name(&other));
            trace!(other = %other, score, "compared");
            if score >= self.threshold {
                similar.push(other);
            }
        }
        Ok(similar)
    }
}

/// Folder name for a group of `size` entries (pivot included) built around
/// `base`.
#[must_use]
pub fn group_folder_name(base: &str, size: usize) -> String {
    format!("{base} (and {size} similar)")
}

/// The first folder name for `base` that is not already taken in `dir`.
///
/// Starts at the group size (members plus the pivot) and counts upwards.
fn unique_folder_name<F: Filesystem>(fs: &F, dir: &Path, base: &str, members: usize) -> String {
    let size = members + 1;
    let mut name = group_folder_name(base, size);
    let mut count = 1;
    while fs.exists(&dir.join(&name)) {
        debug!(taken = %name, "folder name in use");
        name = group_folder_name(base, size + count);
        count += 1;
    }
    name
}

/// List `dir` and sort the names so that a run is reproducible.
fn list_sorted<F: Filesystem>(fs: &F, dir: &Path) -> Result<Vec<String>, OrganizeError> {
    let mut names = fs
        .list_entries(dir)
        .map_err(|source| OrganizeError::ListDir {
            path: dir.to_path_buf(),
            source,
        })?;
    names.sort();
    Ok(names)
}
