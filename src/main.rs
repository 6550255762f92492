//! wavstrip - remove LIST-INFO metadata chunks from wav files.
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use wavstrip::{find_wav_files, strip_all, ErrorPolicy, StripOptions};

/// Strip LIST-INFO metadata from wav files
#[derive(Parser)]
#[command(name = "wavstrip")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Files or directories to process
    #[arg(default_value = "./data")]
    paths: Vec<PathBuf>,

    /// Descend into sub-directories
    #[arg(short, long)]
    recursive: bool,

    /// Report what would be removed without writing anything
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Stop at the first file that cannot be read, parsed or written
    #[arg(long)]
    fail_fast: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn options(&self) -> StripOptions {
        let error_policy = if self.fail_fast {
            ErrorPolicy::Abort
        } else {
            ErrorPolicy::Continue
        };
        StripOptions::new()
            .dry_run(self.dry_run)
            .recursive(self.recursive)
            .error_policy(error_policy)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let options = cli.options();
    let mut files = Vec::new();
    for root in &cli.paths {
        match find_wav_files(root, options.recursive) {
            Ok(found) => files.extend(found),
            Err(e) => {
                eprintln!("{} {}: {}", "error:".red().bold(), root.display(), e);
                return ExitCode::FAILURE;
            }
        }
    }

    let report = match strip_all(&files, &options) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            return ExitCode::FAILURE;
        }
    };

    for (path, outcome) in &report.outcomes {
        println!("{}: {}", path.display(), outcome);
    }
    for (path, e) in &report.failures {
        eprintln!("{}: {} {}", path.display(), "failed:".red().bold(), e);
    }

    let summary = format!(
        "{} file(s): {} rewritten, {} unchanged, {} skipped, {} failed, {} INFO list(s) and {} bytes removed",
        files.len(),
        report.rewritten(),
        report.unchanged(),
        report.skipped(),
        report.failures.len(),
        report.removed_chunks(),
        report.bytes_saved(),
    );
    if options.dry_run {
        println!("{} {}", "[dry run]".cyan(), summary);
    } else {
        println!("{}", summary);
    }

    if report.has_failures() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
