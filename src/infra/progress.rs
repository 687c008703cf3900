use crate::domain::models::RunSummary;
use crossterm::{
    ExecutableCommand,
    style::{Color, ResetColor, SetForegroundColor},
};
use std::io::{self, Write};
use std::path::Path;
use std::time::Instant;

/// Per-file progress lines on stdout, silenced by `--quiet`.
pub struct RunProgress {
    start_time: Instant,
    quiet: bool,
}

impl RunProgress {
    pub fn new(quiet: bool) -> Self {
        Self {
            start_time: Instant::now(),
            quiet,
        }
    }

    pub fn processing(&self, path: &Path) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let mut stdout = io::stdout();
        writeln!(stdout, "\npp'ing {}", path.display())
    }

    pub fn written(&self, path: &Path) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let mut stdout = io::stdout();
        stdout.execute(SetForegroundColor(Color::Green))?;
        write!(stdout, "pp'ed into {}", path.display())?;
        stdout.execute(ResetColor)?;
        writeln!(stdout)
    }

    pub fn finish(&self, summary: &RunSummary) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let mut stdout = io::stdout();
        writeln!(stdout)?;
        stdout.execute(SetForegroundColor(Color::Cyan))?;
        writeln!(stdout, "{}", format_summary(summary, self.start_time.elapsed().as_secs_f32()))?;
        stdout.execute(ResetColor)?;
        Ok(())
    }
}

fn format_summary(summary: &RunSummary, elapsed: f32) -> String {
    format!(
        "✓ Done: {} files written, {} empty skipped, {} files mirrored, {} inclusions, {} directives skipped in {:.2}s",
        summary.written,
        summary.empty,
        summary.mirrored,
        summary.inclusions,
        summary.skipped_directives,
        elapsed
    )
}
