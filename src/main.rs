// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use bookshelf_chipsize::benchmark::{
    BenchmarkLocator, BenchmarkPaths, DEFAULT_BENCHMARK_SET, ISPD2005_BENCHMARKS,
};
use bookshelf_chipsize::chip_size::measure;
use bookshelf_chipsize::error::{BookshelfError, Result};
use bookshelf_chipsize::report::{export_report, export_report_to_csv, run_batch};

#[derive(Parser, Debug)]
#[command(name = "bookshelf-chipsize")]
#[command(version)]
#[command(about = "Compute the chip size of ISPD bookshelf placement benchmarks", long_about = None)]
struct Args {
    /// Root directory of the benchmark sets.
    ///
    /// Benchmarks are looked up as `<DIR>/<SET>/<NAME>/<NAME>.nodes|.pl`.
    #[arg(long, env = "BENCHMARK", value_name = "DIR", global = true)]
    benchmark_dir: Option<PathBuf>,

    /// Benchmark set subdirectory
    #[arg(long, default_value = DEFAULT_BENCHMARK_SET, value_name = "SET", global = true)]
    set: String,

    /// Enable verbose logging
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Print `<width> <height>` of a single benchmark
    Size {
        /// Benchmark name (directory and file stem)
        benchmark: Option<String>,

        /// Explicit .nodes file, bypassing the benchmark directory
        #[arg(long, value_name = "FILE", requires = "pl", conflicts_with = "benchmark")]
        nodes: Option<PathBuf>,

        /// Explicit .pl file, bypassing the benchmark directory
        #[arg(long, value_name = "FILE", requires = "nodes", conflicts_with = "benchmark")]
        pl: Option<PathBuf>,
    },

    /// Write a chip size report for several benchmarks
    Batch {
        /// Benchmark names; defaults to the ISPD 2005 suite
        names: Vec<String>,

        /// Text report path
        #[arg(short = 'o', long, default_value = "chip_size.txt", value_name = "FILE")]
        output: PathBuf,

        /// Also export the report as CSV
        #[arg(long, value_name = "FILE")]
        csv: Option<PathBuf>,
    },
}

fn init_logger(verbose: bool) {
    let log_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn locator(args: &Args) -> Result<BenchmarkLocator> {
    let base = args.benchmark_dir.clone().ok_or_else(|| {
        BookshelfError::Argument(
            "no benchmark directory: pass --benchmark-dir or set BENCHMARK".to_string(),
        )
    })?;
    Ok(BenchmarkLocator::new(base, args.set.clone()))
}

fn run(args: &Args) -> Result<()> {
    match &args.command {
        Command::Size {
            benchmark,
            nodes,
            pl,
        } => {
            let paths = match (benchmark, nodes, pl) {
                (_, Some(nodes), Some(pl)) => {
                    BenchmarkPaths::from_files(nodes.clone(), pl.clone())
                }
                (Some(name), _, _) => locator(args)?.paths(name)?,
                _ => {
                    return Err(BookshelfError::Argument(
                        "missing benchmark name (or --nodes and --pl)".to_string(),
                    ))
                }
            };
            log::info!("{}", paths.nodes.display());
            log::info!("{}", paths.pl.display());

            let bbox = measure(&paths)?;
            println!("{} {}", bbox.width, bbox.height);
        }
        Command::Batch { names, output, csv } => {
            let locator = locator(args)?;
            let names: Vec<String> = if names.is_empty() {
                ISPD2005_BENCHMARKS.iter().map(|s| s.to_string()).collect()
            } else {
                names.clone()
            };

            let report = run_batch(&locator, &names);
            export_report(&report, output)?;
            if let Some(csv) = csv {
                export_report_to_csv(&report, csv)?;
            }

            println!(
                "Wrote {} of {} benchmarks to {}",
                report.entries.len(),
                names.len(),
                output.display()
            );
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // Help and version requests go to stdout and are not failures.
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    init_logger(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
