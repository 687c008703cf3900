use crate::domain::models::{DirectiveScan, IncludeDirective, MalformedDirective};

/// Expected at the start of a trimmed line.
pub const INCLUDE_MARKER: &str = "<!--@#$ ";
pub const INCLUDE_CLOSER: &str = "-->";

pub const BEGIN_INCLUSION: &str = "<!-- vvv -->\n";
pub const END_INCLUSION: &str = "<!-- ^^^ -->\n\n";

pub fn parse_directive(line: &str) -> DirectiveScan {
    let line = line.trim();
    let Some(rest) = line.strip_prefix(INCLUDE_MARKER) else {
        return DirectiveScan::NotDirective;
    };
    let Some(inner) = rest.strip_suffix(INCLUDE_CLOSER) else {
        return DirectiveScan::Malformed(MalformedDirective::MissingCloser);
    };

    let path = inner.trim();
    if path.is_empty() {
        return DirectiveScan::Malformed(MalformedDirective::EmptyPath);
    }

    DirectiveScan::Include(IncludeDirective {
        path: path.to_string(),
    })
}
