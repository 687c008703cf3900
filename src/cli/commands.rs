use crate::core::options::build_options;
use crate::core::preprocessor::preprocess;
use crate::infra::file_system::FsTree;
use crate::infra::logger::{print_welcome_message, setup_logger};
use crate::infra::output::FileWriter;
use crate::infra::progress::RunProgress;
use clap::Parser;
use log::{debug, info};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mipp", version)]
#[command(about = "The most trivial markup include pre-processor", long_about = None)]
#[command(after_help = "example:\n  mipp path/to/website/")]
pub struct Cli {
    /// Path of the project's directory
    #[arg(value_name = "PATH")]
    pub proj_dir: PathBuf,

    /// File extension to be considered (e.g., html); repeatable
    #[arg(short = 'x', long = "ext", default_value = "html")]
    pub ext: Vec<String>,

    /// Project-relative output directory
    #[arg(short, long, value_name = "DIR", default_value = "output")]
    pub output: String,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logger(cli.verbose, cli.quiet)?;
    if !cli.quiet {
        print_welcome_message()?;
    }

    debug!(
        "Command parameters: proj_dir={}, ext={:?}, output={}",
        cli.proj_dir.display(),
        cli.ext,
        cli.output
    );

    let options = build_options(&cli.proj_dir, &cli.output, &cli.ext)?;
    info!("Pre-processing {}", options.base_dir.display());

    let progress = RunProgress::new(cli.quiet);
    let writer = FileWriter::new(options.out_dir.clone());
    let summary = preprocess(&options, &FsTree::new(&options.base_dir), &writer, &progress)?;

    progress.finish(&summary)?;
    Ok(())
}
