//! `syncsweep` command-line entry point
//!
//! Wires the pipeline stages together: executable discovery, the sweep per
//! discovered operation, artifact persistence, and chart rendering. All
//! configuration is threaded through explicit values; there is no global
//! mutable state.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use syncsweep_charts::{
    plot_for_mode, plot_mode_comparison, plot_operation_comparison, plot_point_comparison,
    plot_surface, Scale,
};
use syncsweep_core::{Metric, Operation, PerformanceTensor, SyncMode};
use syncsweep_sweep::{discover, BenchmarkInvoker, SweepOrchestrator};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Fixed (readers, writers) points highlighted by the per-operation bar
/// comparison
const POINT_COMPARISONS: [(usize, usize); 3] = [(8, 2), (9, 1), (8, 9)];

#[derive(Parser, Debug)]
#[command(
    name = "syncsweep",
    version,
    about = "Concurrency benchmark sweep and chart suite"
)]
struct Cli {
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the full benchmark sweep for every discovered operation
    Sweep(SweepArgs),
    /// Render per-operation chart families from stored artifacts
    Analyze(AnalyzeArgs),
    /// Render the grouped multi-operation comparison charts
    CompareOps(CompareOpsArgs),
    /// Sweep, analyze, and compare in one run
    All(SweepArgs),
}

#[derive(Args, Debug)]
struct SweepArgs {
    /// Directory holding the benchmark executables
    #[arg(long, default_value = "out")]
    bin_dir: PathBuf,
    /// Root directory for per-operation results
    #[arg(long, default_value = "results")]
    results: PathBuf,
    /// Reader-count axis cardinality (sweeps 0..max)
    #[arg(long, default_value_t = 10)]
    max_readers: usize,
    /// Writer-count axis cardinality (sweeps 0..max)
    #[arg(long, default_value_t = 10)]
    max_writers: usize,
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    /// Root directory holding per-operation artifacts
    #[arg(long, default_value = "results")]
    results: PathBuf,
}

#[derive(Args, Debug)]
struct CompareOpsArgs {
    /// Root directory holding per-operation artifacts
    #[arg(long, default_value = "results")]
    results: PathBuf,
    /// First anchor point as `readers,writers`
    #[arg(long, value_parser = parse_point, default_value = "8,2")]
    anchor_a: (usize, usize),
    /// Second anchor point as `readers,writers`
    #[arg(long, value_parser = parse_point, default_value = "8,9")]
    anchor_b: (usize, usize),
}

/// Parse a `readers,writers` pair
fn parse_point(arg: &str) -> std::result::Result<(usize, usize), String> {
    let (readers, writers) = arg
        .split_once(',')
        .ok_or_else(|| format!("expected `readers,writers`, got {arg:?}"))?;
    let readers = readers
        .trim()
        .parse()
        .map_err(|_| format!("bad reader count {readers:?}"))?;
    let writers = writers
        .trim()
        .parse()
        .map_err(|_| format!("bad writer count {writers:?}"))?;
    Ok((readers, writers))
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match Cli::parse().command {
        Commands::Sweep(args) => cmd_sweep(&args),
        Commands::Analyze(args) => cmd_analyze(&args.results),
        Commands::CompareOps(args) => cmd_compare_ops(&args),
        Commands::All(args) => {
            cmd_sweep(&args)?;
            cmd_analyze(&args.results)?;
            cmd_compare_ops(&CompareOpsArgs {
                results: args.results.clone(),
                anchor_a: (8, 2),
                anchor_b: (8, 9),
            })
        }
    }
}

/// Sweep every discovered operation and store one artifact per operation
fn cmd_sweep(args: &SweepArgs) -> Result<()> {
    let binaries = discover(&args.bin_dir).context("benchmark discovery failed")?;
    if binaries.is_empty() {
        warn!(
            "no benchmark executables in {:?}, nothing to sweep",
            args.bin_dir
        );
        return Ok(());
    }

    for (operation, executable) in binaries {
        let dir = args.results.join(operation.stem());
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("creating results directory {}", dir.display()))?;

        let invoker = BenchmarkInvoker::new(executable, operation);
        let orchestrator = SweepOrchestrator::new(invoker, args.max_readers, args.max_writers);
        let (tensor, report) = orchestrator
            .run(&SyncMode::ALL)
            .with_context(|| format!("sweeping {operation}"))?;
        info!(
            "({operation}) sweep complete: {} points, {} failed, {:.1}s",
            report.attempted,
            report.failed,
            report.elapsed.as_secs_f64()
        );

        syncsweep_store::save(&dir.join(syncsweep_store::ARTIFACT_NAME), &tensor)
            .with_context(|| format!("storing {operation} artifact"))?;
    }
    Ok(())
}

/// Render chart families into every operation directory with an artifact
fn cmd_analyze(results: &Path) -> Result<()> {
    let mut analyzed = 0usize;
    for operation in Operation::ALL {
        let dir = results.join(operation.stem());
        if !dir.is_dir() {
            continue;
        }
        let tensor = syncsweep_store::load_dir(&dir)
            .with_context(|| format!("loading {operation} artifact"))?;
        analyze_tensor(&tensor, &dir).with_context(|| format!("analyzing {operation}"))?;
        analyzed += 1;
    }
    if analyzed == 0 {
        warn!(
            "no operation artifacts under {:?}, nothing to analyze",
            results
        );
    }
    Ok(())
}

/// All single-tensor chart families for one analysis directory
fn analyze_tensor(tensor: &PerformanceTensor, dir: &Path) -> Result<()> {
    for mode in SyncMode::ALL {
        plot_for_mode(tensor, mode, dir)?;
        for metric in Metric::ALL {
            plot_surface(tensor, mode, metric, Scale::Linear, dir)?;
        }
    }

    plot_mode_comparison(
        tensor,
        Scale::Log10,
        syncsweep_charts::cmp_modes::DEFAULT_FIXED_OTHER,
        dir,
    )?;

    for (readers, writers) in POINT_COMPARISONS {
        if readers >= tensor.max_readers() || writers >= tensor.max_writers() {
            warn!(
                "comparison point ({readers}, {writers}) outside tensor shape {:?}, skipping",
                tensor.shape()
            );
            continue;
        }
        plot_point_comparison(tensor, readers, writers, &SyncMode::ALL, Scale::Log10, dir)?;
    }
    Ok(())
}

/// Render the grouped multi-operation comparison for both metrics
fn cmd_compare_ops(args: &CompareOpsArgs) -> Result<()> {
    let tensors =
        syncsweep_store::load_all(&args.results).context("loading operation artifacts")?;
    for metric in Metric::ALL {
        plot_operation_comparison(
            &tensors,
            metric,
            [args.anchor_a, args.anchor_b],
            Scale::Log10,
            &args.results,
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("8,2").unwrap(), (8, 2));
        assert_eq!(parse_point(" 9 , 1 ").unwrap(), (9, 1));
        assert!(parse_point("8").is_err());
        assert!(parse_point("a,b").is_err());
    }

    #[test]
    fn test_subcommand_defaults() {
        let cli = Cli::parse_from(["syncsweep", "sweep"]);
        match cli.command {
            Commands::Sweep(args) => {
                assert_eq!(args.bin_dir, PathBuf::from("out"));
                assert_eq!(args.results, PathBuf::from("results"));
                assert_eq!(args.max_readers, 10);
                assert_eq!(args.max_writers, 10);
            }
            _ => panic!("wrong subcommand"),
        }
    }

    #[test]
    fn test_compare_ops_anchor_parsing() {
        let cli = Cli::parse_from(["syncsweep", "compare-ops", "--anchor-a", "5,1"]);
        match cli.command {
            Commands::CompareOps(args) => {
                assert_eq!(args.anchor_a, (5, 1));
                assert_eq!(args.anchor_b, (8, 9));
            }
            _ => panic!("wrong subcommand"),
        }
    }
}
