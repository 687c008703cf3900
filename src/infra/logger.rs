use crossterm::{
    ExecutableCommand,
    style::{Color, ResetColor, SetForegroundColor},
};
use env_logger::Builder;
use log::{Level, debug};
use std::io::{self, Write};

pub const LOG_LEVEL_ENV: &str = "MIPP_LOG_LEVEL";

fn level_filter(verbosity: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

pub fn setup_logger(verbosity: u8, quiet: bool) -> Result<(), log::SetLoggerError> {
    let env = env_logger::Env::default().filter_or(LOG_LEVEL_ENV, level_filter(verbosity, quiet));

    Builder::from_env(env)
        .format(|buf, record| {
            let level_color = match record.level() {
                Level::Error => "31", // Red
                Level::Warn => "33",  // Yellow
                Level::Info => "32",  // Green
                Level::Debug => "36", // Cyan
                Level::Trace => "35", // Magenta
            };

            writeln!(
                buf,
                "\x1B[{}m[{}]\x1B[0m [{}] {}",
                level_color,
                record.level(),
                buf.timestamp(),
                record.args()
            )
        })
        .format_timestamp_secs()
        .try_init()
}

pub fn print_welcome_message() -> io::Result<()> {
    let mut stdout = io::stdout();

    stdout.execute(SetForegroundColor(Color::Cyan))?;
    writeln!(stdout, "mipp v{}", env!("CARGO_PKG_VERSION"))?;
    stdout.execute(ResetColor)?;
    writeln!(stdout, "The most trivial markup include pre-processor")?;

    debug!("Debug logging enabled");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Once;

    static INIT: Once = Once::new();

    #[test]
    fn test_setup_logger() {
        INIT.call_once(|| {
            assert!(setup_logger(0, false).is_ok());
        });
    }

    #[test]
    fn test_level_filter() {
        assert_eq!(level_filter(0, false), "warn");
        assert_eq!(level_filter(1, false), "info");
        assert_eq!(level_filter(5, false), "debug");
        assert_eq!(level_filter(5, true), "error");
    }
}
