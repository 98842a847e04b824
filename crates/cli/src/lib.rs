//! component-finder CLI library, exposed for integration tests

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use component_finder_core::config::{MAX_TIMEOUT_SECS, MIN_TIMEOUT_SECS};
use component_finder_core::{
    run_pipeline, run_with_deadline, ClojureParser, DeadlineOutcome, FinderConfig, GitCli,
    ImpactReport, LiveSourceTree,
};
use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "component-finder")]
#[command(about = "Resolve which deployable components a source change impacts", long_about = None)]
#[command(version = component_finder_core::VERSION)]
pub struct Cli {
    /// Revision passed first to the diff (default: HEAD)
    #[arg(value_name = "REV1")]
    pub earliest: Option<String>,

    /// Revision passed second to the diff (default: master)
    #[arg(value_name = "REV2")]
    pub latest: Option<String>,

    /// Path prefix to skip (repeatable; default: test/ and qa/)
    #[arg(long = "exclude-path", value_name = "PREFIX")]
    pub exclude_path: Vec<String>,

    /// Source root to scan (repeatable; default: src)
    #[arg(long = "source-path", value_name = "DIR")]
    pub source_path: Vec<String>,

    /// Pipeline deadline in seconds
    #[arg(
        long = "timeout-seconds",
        value_name = "SECS",
        value_parser = clap::value_parser!(u64).range(MIN_TIMEOUT_SECS..=MAX_TIMEOUT_SECS)
    )]
    pub timeout_seconds: Option<u64>,

    /// Show per-component causes and the raw changed-module list
    #[arg(short, long)]
    pub verbose: bool,
}

/// Merge CLI arguments over the loaded configuration. Flags that were not
/// given leave the config untouched.
pub fn apply_cli(config: &mut FinderConfig, cli: &Cli) {
    if let Some(rev) = &cli.earliest {
        config.general.diff_head = rev.clone();
    }
    if let Some(rev) = &cli.latest {
        config.general.diff_base = rev.clone();
    }
    if !cli.exclude_path.is_empty() {
        config.paths.excludes = cli.exclude_path.clone();
    }
    if !cli.source_path.is_empty() {
        config.paths.sources = cli.source_path.clone();
    }
    if let Some(secs) = cli.timeout_seconds {
        config.general.timeout_secs = secs;
    }
}

/// Parse arguments and run; returns the process exit code.
///
/// 0 = success (including "nothing impacted") and help/version; 1 = bad
/// arguments, pipeline failure, or timeout.
pub fn run<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => {
            // clap routes --help/--version through the error path too;
            // those print to stdout and exit 0.
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            return code;
        }
    };

    match execute(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            1
        }
    }
}

fn execute(cli: &Cli) -> Result<i32> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let mut config = FinderConfig::find_and_load(&cwd)?;
    apply_cli(&mut config, cli);

    if cli.verbose {
        eprintln!(
            "{}",
            format!(
                "  component-finder v{}: {} vs {}",
                component_finder_core::VERSION,
                config.general.diff_head,
                config.general.diff_base
            )
            .bold()
        );
    }

    let timeout_secs = config.general.timeout_secs;
    let job_config = config.clone();
    let outcome = run_with_deadline(Duration::from_secs(timeout_secs), move || {
        let vcs = GitCli::new();
        let parser = ClojureParser::new();
        run_pipeline(&job_config, &vcs, &LiveSourceTree, &parser)
    });

    match outcome {
        DeadlineOutcome::TimedOut => {
            eprintln!(
                "{}",
                format!("component-finder: timed out after {}s", timeout_secs)
                    .red()
                    .bold()
            );
            Ok(1)
        }
        DeadlineOutcome::Completed(result) => {
            let output = result?;
            for warning in &output.warnings {
                eprintln!("{} {}", "warning:".yellow(), warning);
            }
            print_report(&output.report, cli.verbose);
            Ok(0)
        }
    }
}

fn print_report(report: &ImpactReport, verbose: bool) {
    if verbose {
        print!("{}", report.render_verbose());
    } else if !report.is_empty() {
        println!("{}", report.render_compact());
    }
}
