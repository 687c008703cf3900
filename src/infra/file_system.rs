use crate::core::collector::TreeSource;
use crate::domain::error::PpError;
use crate::domain::models::{EntryKind, Options, PlanStep, TreeEntry};
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// `TreeSource` over the real filesystem, rooted at the project directory.
pub struct FsTree {
    root: PathBuf,
}

impl FsTree {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl TreeSource for FsTree {
    fn entries(&self, rel_dir: &Path) -> anyhow::Result<Vec<TreeEntry>> {
        let dir = self.root.join(rel_dir);
        if !dir.is_dir() {
            anyhow::bail!("Not a directory: {}", dir.display());
        }

        let mut entries = Vec::new();
        for entry in walkdir::WalkDir::new(&dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                    continue;
                }
            };

            // Symlinks are not followed, so they land in `Other`.
            let kind = if entry.file_type().is_dir() {
                EntryKind::Dir
            } else if entry.file_type().is_file() {
                EntryKind::File
            } else {
                EntryKind::Other
            };
            entries.push(TreeEntry::new(entry.file_name(), kind));
        }

        debug!("Listed {} entries in {}", entries.len(), dir.display());
        Ok(entries)
    }
}

/// Reads a collected page or an include target. A page that vanished after collection
/// reads as empty, so the writer drops it.
pub fn read_file_contents(path: &Path) -> anyhow::Result<String> {
    if !path.is_file() {
        warn!("Dropping {}: no longer a readable file", path.display());
        return Ok(String::new());
    }

    let contents = fs::read_to_string(path)?;
    debug!("Read {} bytes from {}", contents.len(), path.display());
    Ok(contents)
}

/// Performs a mirroring step of the build plan. `Expand` steps are left to the writer.
pub fn apply_mirror_step(options: &Options, step: &PlanStep) -> Result<(), PpError> {
    match step {
        PlanStep::CreateDir(rel) => {
            let target = options.out_dir.join(rel);
            debug!("Creating directory {}", target.display());
            fs::create_dir_all(&target).map_err(|source| PpError::Output {
                path: target,
                source,
            })
        }
        PlanStep::CopyVerbatim(rel) => {
            let target = options.out_dir.join(rel);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|source| PpError::Output {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
            debug!("Copying {} verbatim", rel.display());
            fs::copy(options.base_dir.join(rel), &target)
                .map(|_| ())
                .map_err(|source| PpError::FileWrite {
                    path: target,
                    source,
                })
        }
        PlanStep::Expand(_) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn options(base: &Path) -> Options {
        Options {
            base_dir: base.to_path_buf(),
            out_dir: base.join("output"),
            exts: [".html".to_string()].into_iter().collect(),
        }
    }

    #[test]
    fn test_read_file_contents() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.html");

        {
            let mut file = File::create(&file_path).unwrap();
            writeln!(file, "Test content").unwrap();
        }

        let contents = read_file_contents(&file_path).unwrap();
        assert_eq!(contents, "Test content\n");
    }

    #[test]
    fn test_vanished_page_reads_as_empty() {
        let temp_dir = TempDir::new().unwrap();

        assert_eq!(read_file_contents(&temp_dir.path().join("gone.html")).unwrap(), "");
        assert_eq!(read_file_contents(temp_dir.path()).unwrap(), "");
    }

    #[test]
    fn test_read_non_utf8_page_fails() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("latin1.html");
        fs::write(&file_path, b"caf\xe9\n").unwrap();

        assert!(read_file_contents(&file_path).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks_are_not_followed() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("css")).unwrap();
        fs::write(root.join("index.html"), "x").unwrap();
        std::os::unix::fs::symlink("..", root.join("css/up")).unwrap();
        std::os::unix::fs::symlink("../index.html", root.join("css/page.html")).unwrap();

        let entries = FsTree::new(root).entries(Path::new("css")).unwrap();
        assert_eq!(
            entries,
            vec![
                TreeEntry::new("page.html", EntryKind::Other),
                TreeEntry::new("up", EntryKind::Other),
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_names_are_listed() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp_dir = TempDir::new().unwrap();
        let name = OsStr::from_bytes(b"caf\xe9.png");
        fs::write(temp_dir.path().join(name), b"img").unwrap();

        let entries = FsTree::new(temp_dir.path()).entries(Path::new("")).unwrap();
        assert_eq!(entries, vec![TreeEntry::new(name, EntryKind::File)]);
    }

    #[test]
    fn test_fs_tree_entries() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("css")).unwrap();
        fs::write(root.join("index.html"), "x").unwrap();
        fs::write(root.join("css/site.css"), "y").unwrap();
        fs::write(root.join(".hidden"), "z").unwrap();

        let tree = FsTree::new(root);
        let entries = tree.entries(Path::new("")).unwrap();
        assert_eq!(
            entries,
            vec![
                TreeEntry::new(".hidden", EntryKind::File),
                TreeEntry::new("css", EntryKind::Dir),
                TreeEntry::new("index.html", EntryKind::File),
            ]
        );

        let nested = tree.entries(Path::new("css")).unwrap();
        assert_eq!(nested, vec![TreeEntry::new("site.css", EntryKind::File)]);

        assert!(tree.entries(Path::new("missing")).is_err());
    }

    #[test]
    fn test_apply_mirror_steps() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("img/icons")).unwrap();
        fs::write(root.join("img/icons/star.svg"), b"<svg/>").unwrap();
        let opts = options(root);

        apply_mirror_step(&opts, &PlanStep::CreateDir(PathBuf::from("img"))).unwrap();
        apply_mirror_step(
            &opts,
            &PlanStep::CopyVerbatim(PathBuf::from("img/icons/star.svg")),
        )
        .unwrap();
        apply_mirror_step(&opts, &PlanStep::Expand(PathBuf::from("index.html"))).unwrap();

        assert!(root.join("output/img").is_dir());
        assert_eq!(
            fs::read(root.join("output/img/icons/star.svg")).unwrap(),
            b"<svg/>"
        );
        assert!(!root.join("output/index.html").exists());
    }

    #[test]
    fn test_mirror_dir_collides_with_file() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("output")).unwrap();
        fs::write(root.join("output/img"), "file").unwrap();

        let err = apply_mirror_step(&options(root), &PlanStep::CreateDir(PathBuf::from("img")))
            .unwrap_err();
        assert!(matches!(err, PpError::Output { .. }));
    }
}
