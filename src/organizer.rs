//! Filesystem phases of an organization run.
//!
//! Three primitives, invoked in order by the CLI layer: the collision
//! pre-pass (`sweep_name_collisions`), folder provisioning
//! (`provision_category_dirs`), and the per-file classify/move pair
//! (`plan_move` / `execute_move`). Also home to the error taxonomy and the
//! per-category `Summary` counters.

use crate::category::{Category, CategoryMapper};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Errors that can occur during an organization run.
#[derive(Debug)]
pub enum OrganizeError {
    /// The base directory path is invalid or doesn't exist.
    InvalidBasePath {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to list the base directory.
    DirectoryReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to create a category directory.
    DirectoryCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to rename a file, either in the pre-pass or during a move.
    FileMoveFailure {
        source: PathBuf,
        destination: PathBuf,
        source_error: std::io::Error,
    },
}

impl std::fmt::Display for OrganizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBasePath { path, source } => {
                write!(f, "Invalid base path {}: {}", path.display(), source)
            }
            Self::DirectoryReadFailed { path, source } => {
                write!(f, "Failed to read directory {}: {}", path.display(), source)
            }
            Self::DirectoryCreationFailed { path, source } => {
                write!(
                    f,
                    "Failed to create directory {}: {}",
                    path.display(),
                    source
                )
            }
            Self::FileMoveFailure {
                source,
                destination,
                source_error,
            } => {
                write!(
                    f,
                    "Failed to move {} to {}: {}",
                    source.display(),
                    destination.display(),
                    source_error
                )
            }
        }
    }
}

impl std::error::Error for OrganizeError {}

/// Result type for organization operations.
pub type OrganizeResult<T> = Result<T, OrganizeError>;

/// Per-category file counts for one run.
///
/// Every working-set category starts at zero; a file is counted exactly once
/// when it is classified, whether or not anything was moved.
#[derive(Debug)]
pub struct Summary {
    counts: HashMap<Category, usize>,
}

impl Summary {
    /// Creates a summary with all working-set categories at zero.
    pub fn new() -> Self {
        let mut counts = HashMap::new();
        for category in Category::ALL {
            counts.insert(category, 0);
        }
        Self { counts }
    }

    /// Counts one file under `category`.
    pub fn record(&mut self, category: Category) {
        *self.counts.entry(category).or_insert(0) += 1;
    }

    /// The count for one category.
    pub fn count(&self, category: Category) -> usize {
        self.counts.get(&category).copied().unwrap_or(0)
    }

    /// Counts in working-set order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, usize)> + '_ {
        Category::ALL.into_iter().map(|c| (c, self.count(c)))
    }

    /// Total number of files counted.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

impl Default for Summary {
    fn default() -> Self {
        Self::new()
    }
}

/// A resolved relocation for a single file.
///
/// Produced by [`Organizer::plan_move`]; the target already has any
/// uniqueness suffix applied, so in simulate mode the plan is the full
/// report and in a real run it is handed to [`Organizer::execute_move`].
#[derive(Debug, Clone)]
pub struct PlannedMove {
    /// The file's name as found in the base directory.
    pub file_name: String,
    /// Where the file currently is.
    pub source: PathBuf,
    /// Where the file goes, uniqueness suffix included.
    pub target: PathBuf,
    /// The category the file resolved to.
    pub category: Category,
}

/// What `execute_move` did with a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The file was renamed into its category folder.
    Moved,
    /// Source and target compare equal case-insensitively; nothing touched.
    SkippedInPlace,
}

/// The filesystem side of organizing a directory.
pub struct Organizer;

impl Organizer {
    /// Pre-pass: clear plain files squatting on reserved category folder
    /// names.
    ///
    /// For each working-set category, a regular file at `<base>/<category>`
    /// with no extension component is renamed to `<category>_<uuid>` in
    /// place. Directories, and files whose name carries an extension, are
    /// left alone. Runs before folder provisioning in every mode, simulate
    /// included: it is a safety precondition, not an organizational move.
    ///
    /// Returns the new paths of any files renamed, silently (no per-rename
    /// output is produced here).
    pub fn sweep_name_collisions(base_path: &Path) -> OrganizeResult<Vec<PathBuf>> {
        let mut renamed = Vec::new();

        for category in Category::ALL {
            let reserved = base_path.join(category.dir_name());
            if reserved.is_file() && reserved.extension().is_none() {
                let fresh =
                    base_path.join(format!("{}_{}", category.dir_name(), Uuid::new_v4()));
                fs::rename(&reserved, &fresh).map_err(|e| OrganizeError::FileMoveFailure {
                    source: reserved.clone(),
                    destination: fresh.clone(),
                    source_error: e,
                })?;
                renamed.push(fresh);
            }
        }

        Ok(renamed)
    }

    /// Creates every working-set category folder under `base_path`.
    ///
    /// An already-existing folder is a no-op; a creation failure is fatal
    /// for the run. The CLI layer skips this phase entirely in simulate
    /// mode.
    pub fn provision_category_dirs(base_path: &Path) -> OrganizeResult<()> {
        for category in Category::ALL {
            let subfolder = base_path.join(category.dir_name());
            if !subfolder.exists() {
                fs::create_dir(&subfolder).map_err(|e| OrganizeError::DirectoryCreationFailed {
                    path: subfolder.clone(),
                    source: e,
                })?;
            }
        }
        Ok(())
    }

    /// Classifies one file and resolves its destination path.
    ///
    /// The extension is taken lowercased with its leading dot and looked up
    /// in the category table; no match (or no extension) resolves to
    /// `Others`. The target is `<base>/<category>/<file name>`, regenerated
    /// as `<stem>_<uuid><ext>` if something already exists there. The
    /// existence check runs in simulate mode too, so simulated reports name
    /// the same destinations a real run would use.
    pub fn plan_move(base_path: &Path, file_path: &Path, mapper: &CategoryMapper) -> PlannedMove {
        let file_name = file_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let stem = file_path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let extension = file_path
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy().to_lowercase()));

        let category = mapper.categorize(extension.as_deref());
        let category_dir = base_path.join(category.dir_name());

        let mut target = category_dir.join(&file_name);
        if target.exists() {
            let unique_name = match &extension {
                Some(ext) => format!("{}_{}{}", stem, Uuid::new_v4(), ext),
                None => format!("{}_{}", stem, Uuid::new_v4()),
            };
            target = category_dir.join(unique_name);
        }

        PlannedMove {
            file_name,
            source: file_path.to_path_buf(),
            target,
            category,
        }
    }

    /// Performs a planned move.
    ///
    /// Source and target are compared as strings, case-insensitively —
    /// explicit comparison rather than filesystem semantics, so behavior is
    /// the same on case-sensitive and case-insensitive volumes. Equal paths
    /// are skipped without touching the filesystem; the caller still counts
    /// the file.
    pub fn execute_move(plan: &PlannedMove) -> OrganizeResult<MoveOutcome> {
        let source = plan.source.to_string_lossy();
        let target = plan.target.to_string_lossy();
        if source.eq_ignore_ascii_case(&target) {
            return Ok(MoveOutcome::SkippedInPlace);
        }

        fs::rename(&plan.source, &plan.target).map_err(|e| OrganizeError::FileMoveFailure {
            source: plan.source.clone(),
            destination: plan.target.clone(),
            source_error: e,
        })?;

        Ok(MoveOutcome::Moved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_sweep_renames_plain_category_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();

        fs::write(base_path.join("Images"), "not a folder").expect("Failed to write file");

        let renamed = Organizer::sweep_name_collisions(base_path).expect("Sweep failed");

        assert_eq!(renamed.len(), 1);
        assert!(!base_path.join("Images").exists());
        assert!(renamed[0].exists());
        let new_name = renamed[0].file_name().unwrap().to_string_lossy().to_string();
        assert!(new_name.starts_with("Images_"));
        // Renamed in place, still at the top level.
        assert_eq!(renamed[0].parent().unwrap(), base_path);
    }

    #[test]
    fn test_sweep_leaves_existing_category_dir() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();

        fs::create_dir(base_path.join("Documents")).expect("Failed to create dir");

        let renamed = Organizer::sweep_name_collisions(base_path).expect("Sweep failed");

        assert!(renamed.is_empty());
        assert!(base_path.join("Documents").is_dir());
    }

    #[test]
    fn test_sweep_handles_multiple_collisions() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();

        fs::write(base_path.join("Videos"), "v").expect("Failed to write file");
        fs::write(base_path.join("Others"), "o").expect("Failed to write file");

        let renamed = Organizer::sweep_name_collisions(base_path).expect("Sweep failed");

        assert_eq!(renamed.len(), 2);
        assert!(!base_path.join("Videos").exists());
        assert!(!base_path.join("Others").exists());
    }

    #[test]
    fn test_provision_creates_all_category_dirs() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();

        Organizer::provision_category_dirs(base_path).expect("Provisioning failed");

        for category in Category::ALL {
            assert!(base_path.join(category.dir_name()).is_dir());
        }
    }

    #[test]
    fn test_provision_is_idempotent() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();

        Organizer::provision_category_dirs(base_path).expect("First provisioning failed");
        Organizer::provision_category_dirs(base_path).expect("Second provisioning failed");
    }

    #[test]
    fn test_plan_move_classifies_by_extension() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();
        let mapper = CategoryMapper::default();

        let plan = Organizer::plan_move(base_path, &base_path.join("photo.JPG"), &mapper);

        assert_eq!(plan.category, Category::Images);
        assert_eq!(plan.target, base_path.join("Images").join("photo.JPG"));
        assert_eq!(plan.file_name, "photo.JPG");
    }

    #[test]
    fn test_plan_move_unknown_and_missing_extension_go_to_others() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();
        let mapper = CategoryMapper::default();

        let zip = Organizer::plan_move(base_path, &base_path.join("archive.zip"), &mapper);
        assert_eq!(zip.category, Category::Others);

        let bare = Organizer::plan_move(base_path, &base_path.join("README"), &mapper);
        assert_eq!(bare.category, Category::Others);
        assert_eq!(bare.target, base_path.join("Others").join("README"));
    }

    #[test]
    fn test_plan_move_appends_token_when_target_occupied() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();
        let mapper = CategoryMapper::default();

        let docs = base_path.join("Documents");
        fs::create_dir(&docs).expect("Failed to create dir");
        fs::write(docs.join("notes.txt"), "old").expect("Failed to write file");

        let plan = Organizer::plan_move(base_path, &base_path.join("notes.txt"), &mapper);

        let target_name = plan.target.file_name().unwrap().to_string_lossy().to_string();
        assert!(target_name.starts_with("notes_"));
        assert!(target_name.ends_with(".txt"));
        assert_ne!(target_name, "notes.txt");
    }

    #[test]
    fn test_plan_move_token_keeps_lowercased_extension() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();
        let mapper = CategoryMapper::default();

        let docs = base_path.join("Documents");
        fs::create_dir(&docs).expect("Failed to create dir");
        fs::write(docs.join("report.PDF"), "old").expect("Failed to write file");

        let plan = Organizer::plan_move(base_path, &base_path.join("report.PDF"), &mapper);

        let target_name = plan.target.file_name().unwrap().to_string_lossy().to_string();
        assert!(target_name.ends_with(".pdf"));
    }

    #[test]
    fn test_execute_move_relocates_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();
        let mapper = CategoryMapper::default();

        fs::create_dir(base_path.join("Music")).expect("Failed to create dir");
        let source = base_path.join("song.mp3");
        fs::write(&source, "audio").expect("Failed to write file");

        let plan = Organizer::plan_move(base_path, &source, &mapper);
        let outcome = Organizer::execute_move(&plan).expect("Move failed");

        assert_eq!(outcome, MoveOutcome::Moved);
        assert!(!source.exists());
        assert!(base_path.join("Music").join("song.mp3").exists());
    }

    #[test]
    fn test_execute_move_skips_case_insensitively_equal_paths() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();

        let file = base_path.join("keep.txt");
        fs::write(&file, "content").expect("Failed to write file");

        // Target differs from source only in letter case.
        let plan = PlannedMove {
            file_name: "keep.txt".to_string(),
            source: file.clone(),
            target: PathBuf::from(file.to_string_lossy().to_uppercase()),
            category: Category::Documents,
        };

        let outcome = Organizer::execute_move(&plan).expect("Skip failed");

        assert_eq!(outcome, MoveOutcome::SkippedInPlace);
        assert!(file.exists());
    }

    #[test]
    fn test_execute_move_fails_when_target_dir_missing() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();
        let mapper = CategoryMapper::default();

        let source = base_path.join("clip.mp4");
        fs::write(&source, "video").expect("Failed to write file");

        // No Videos/ folder provisioned.
        let plan = Organizer::plan_move(base_path, &source, &mapper);
        let result = Organizer::execute_move(&plan);

        assert!(result.is_err());
        assert!(source.exists());
    }

    #[test]
    fn test_summary_starts_zeroed_in_working_set_order() {
        let summary = Summary::new();

        let counts: Vec<_> = summary.iter().collect();
        assert_eq!(counts.len(), 5);
        assert_eq!(counts[0], (Category::Images, 0));
        assert_eq!(counts[4], (Category::Others, 0));
        assert_eq!(summary.total(), 0);
    }

    #[test]
    fn test_summary_records_per_category() {
        let mut summary = Summary::new();
        summary.record(Category::Images);
        summary.record(Category::Images);
        summary.record(Category::Others);

        assert_eq!(summary.count(Category::Images), 2);
        assert_eq!(summary.count(Category::Others), 1);
        assert_eq!(summary.count(Category::Music), 0);
        assert_eq!(summary.total(), 3);
    }
}
