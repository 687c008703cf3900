use std::collections::BTreeSet;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Run configuration. Built once by `core::options::build_options`.
#[derive(Debug, Clone)]
pub struct Options {
    pub base_dir: PathBuf,
    pub out_dir: PathBuf,
    pub exts: BTreeSet<String>,
}

impl Options {
    /// Returns the registered extension matching `name`, taken from the first `.` onward.
    pub fn matched_extension<'a>(&self, name: &'a str) -> Option<&'a str> {
        let suffix = &name[name.find('.')?..];
        self.exts.contains(suffix).then_some(suffix)
    }

    pub fn is_output_dir(&self, rel: &Path) -> bool {
        self.base_dir.join(rel) == self.out_dir
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    pub name: OsString,
    pub kind: EntryKind,
}

impl TreeEntry {
    pub fn new(name: impl Into<OsString>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.name.as_encoded_bytes().starts_with(b".")
    }

    /// `None` for names that are not valid UTF-8; such entries never match an extension.
    pub fn utf8_name(&self) -> Option<&str> {
        self.name.to_str()
    }
}

/// One filesystem action. Paths are relative to the project directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanStep {
    CreateDir(PathBuf),
    CopyVerbatim(PathBuf),
    Expand(PathBuf),
}

#[derive(Debug, Default)]
pub struct BuildPlan {
    pub steps: Vec<PlanStep>,
}

impl BuildPlan {
    pub fn push(&mut self, step: PlanStep) {
        self.steps.push(step);
    }

    /// Files to expand, in discovery order.
    pub fn processable_files(&self) -> Vec<&Path> {
        self.steps
            .iter()
            .filter_map(|step| match step {
                PlanStep::Expand(path) => Some(path.as_path()),
                _ => None,
            })
            .collect()
    }

    pub fn mirror_steps(&self) -> impl Iterator<Item = &PlanStep> {
        self.steps
            .iter()
            .filter(|step| !matches!(step, PlanStep::Expand(_)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeDirective {
    pub path: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedDirective {
    MissingCloser,
    EmptyPath,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectiveScan {
    NotDirective,
    Include(IncludeDirective),
    Malformed(MalformedDirective),
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Expansion {
    pub content: String,
    pub inclusions: usize,
    pub skipped: usize,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub written: usize,
    pub empty: usize,
    pub mirrored: usize,
    pub inclusions: usize,
    pub skipped_directives: usize,
}
