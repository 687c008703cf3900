use crate::core::collector::{TreeSource, plan_tree};
use crate::core::expander::expand_file;
use crate::domain::models::{Options, PlanStep, RunSummary};
use crate::infra::file_system::{apply_mirror_step, read_file_contents};
use crate::infra::output::OutputWriter;
use crate::infra::progress::RunProgress;
use log::{debug, info};

/// Plans the output tree, mirrors assets, then expands and writes each collected file
/// in discovery order.
pub fn preprocess<S: TreeSource, W: OutputWriter>(
    options: &Options,
    source: &S,
    writer: &W,
    progress: &RunProgress,
) -> anyhow::Result<RunSummary> {
    let plan = plan_tree(options, source)?;
    let mut summary = RunSummary::default();

    for step in plan.mirror_steps() {
        apply_mirror_step(options, step)?;
        if matches!(step, PlanStep::CopyVerbatim(_)) {
            summary.mirrored += 1;
        }
    }
    debug!("Mirrored {} files verbatim", summary.mirrored);

    for rel_path in plan.processable_files() {
        progress.processing(&options.base_dir.join(rel_path))?;

        let expansion = expand_file(options, rel_path, read_file_contents)?;
        summary.inclusions += expansion.inclusions;
        summary.skipped_directives += expansion.skipped;

        if writer.write(rel_path, &expansion.content)? {
            summary.written += 1;
            progress.written(&options.out_dir.join(rel_path))?;
        } else {
            summary.empty += 1;
        }
    }

    info!(
        "Wrote {} files ({} empty, {} inclusions)",
        summary.written, summary.empty, summary.inclusions
    );
    Ok(summary)
}
