use crate::domain::models::{BuildPlan, EntryKind, Options, PlanStep, TreeEntry};
use log::{debug, info};
use std::path::Path;

/// Lists the entries of a directory given relative to the project root.
pub trait TreeSource {
    fn entries(&self, rel_dir: &Path) -> anyhow::Result<Vec<TreeEntry>>;
}

/// Walks the project tree and returns the steps needed to build the output tree.
///
/// Matching files anywhere become `Expand` steps. Every non-hidden subdirectory is
/// mirrored: it gets a `CreateDir` step and its other regular files get
/// `CopyVerbatim` steps. Loose non-matching files at the project root are ignored.
pub fn plan_tree<S: TreeSource>(options: &Options, source: &S) -> anyhow::Result<BuildPlan> {
    let mut plan = BuildPlan::default();
    collect(options, source, Path::new(""), &mut plan)?;

    info!(
        "Collected {} processable files",
        plan.processable_files().len()
    );
    debug!("collected {:?}", plan.processable_files());
    Ok(plan)
}

fn collect<S: TreeSource>(
    options: &Options,
    source: &S,
    prefix: &Path,
    plan: &mut BuildPlan,
) -> anyhow::Result<()> {
    let mirrored = !prefix.as_os_str().is_empty();

    for entry in source.entries(prefix)? {
        if entry.is_hidden() {
            debug!("Skipping hidden entry: {}", prefix.join(&entry.name).display());
            continue;
        }

        let rel = prefix.join(&entry.name);
        match entry.kind {
            EntryKind::File
                if entry
                    .utf8_name()
                    .and_then(|name| options.matched_extension(name))
                    .is_some() =>
            {
                debug!("Found processable file: {}", rel.display());
                plan.push(PlanStep::Expand(rel));
            }
            EntryKind::File if mirrored => plan.push(PlanStep::CopyVerbatim(rel)),
            EntryKind::Dir if options.is_output_dir(&rel) => {
                debug!("Skipping output directory: {}", rel.display());
            }
            EntryKind::Dir => {
                plan.push(PlanStep::CreateDir(rel.clone()));
                collect(options, source, &rel, plan)?;
            }
            _ => {}
        }
    }
    Ok(())
}
