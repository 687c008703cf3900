use crate::core::directive::{BEGIN_INCLUSION, END_INCLUSION, parse_directive};
use crate::domain::models::{DirectiveScan, Expansion, MalformedDirective, Options};
use anyhow::Context;
use log::{debug, warn};
use std::path::Path;

/// Expands include directives in `content` in a single pass.
///
/// Every line is kept as read, terminator included. A directive line is followed by the
/// resolved file's contents wrapped in the inclusion markers. `resolve` returns `None`
/// when the include target does not exist; included text is never expanded again.
pub fn expand_content(
    content: &str,
    resolve: impl Fn(&str) -> anyhow::Result<Option<String>>,
) -> anyhow::Result<Expansion> {
    let mut expansion = Expansion {
        content: String::with_capacity(content.len()),
        ..Expansion::default()
    };

    for line in content.split_inclusive('\n') {
        expansion.content.push_str(line);

        match parse_directive(line) {
            DirectiveScan::NotDirective => {}
            DirectiveScan::Malformed(MalformedDirective::MissingCloser) => {
                warn!("skip invalid inclusion: {}", line.trim());
                expansion.skipped += 1;
            }
            DirectiveScan::Malformed(MalformedDirective::EmptyPath) => {
                warn!("skip empty inclusion: {}", line.trim());
                expansion.skipped += 1;
            }
            DirectiveScan::Include(directive) => match resolve(&directive.path)? {
                Some(included) => {
                    debug!(
                        "Including {} ({} bytes)",
                        directive.path,
                        included.len()
                    );
                    expansion.content.push_str(BEGIN_INCLUSION);
                    expansion.content.push_str(&included);
                    expansion.content.push_str(END_INCLUSION);
                    expansion.inclusions += 1;
                }
                None => {
                    warn!("skip non-relative inclusion: {}", directive.path);
                    expansion.skipped += 1;
                }
            },
        }
    }

    Ok(expansion)
}

/// Reads `rel_path` under the project directory and expands it, resolving includes
/// against the project directory.
pub fn expand_file(
    options: &Options,
    rel_path: &Path,
    file_reader: impl Fn(&Path) -> anyhow::Result<String>,
) -> anyhow::Result<Expansion> {
    let path = options.base_dir.join(rel_path);
    let content = file_reader(path.as_path())
        .with_context(|| format!("Failed to read collected file {}", path.display()))?;

    expand_content(&content, |include| {
        let include = Path::new(include);
        if include.is_absolute() {
            return Ok(None);
        }

        let inc_path = options.base_dir.join(include);
        if !inc_path.is_file() {
            return Ok(None);
        }
        file_reader(inc_path.as_path())
            .with_context(|| format!("Failed to read included file {}", inc_path.display()))
            .map(Some)
    })
}
