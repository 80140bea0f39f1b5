use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "hopline workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the shortest path benchmarks and compare implementations
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
}

const BENCH: &str = "shortest_path_benchmark";
const BASELINE: &str = "current";

/// Implementations in report column order. The last one is the reference.
const IMPLEMENTATIONS: &[&str] = &["path_prefix", "predecessor", "petgraph"];
const REFERENCE: &str = "petgraph";

/// workload -> implementation -> nodes per second
type Results = BTreeMap<String, BTreeMap<String, f64>>;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench { quick, report_only } => {
            if !report_only {
                run_benchmarks(quick)?;
            }
            generate_report()?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool) -> Result<()> {
    println!("Compiling benchmarks...");
    let status = Command::new("cargo")
        .args(["build", "--bench", BENCH, "--release"])
        .status()
        .context("failed to invoke cargo build")?;
    if !status.success() {
        anyhow::bail!("Failed to compile benchmarks");
    }

    println!("\n>>> Running {BENCH}");
    let start = Instant::now();

    let mut cmd = Command::new("cargo");
    cmd.env("CARGO_INCREMENTAL", "0")
        .args(["bench", "--bench", BENCH]);

    // Args for the test runner (Criterion) go after --
    cmd.arg("--").arg("--save-baseline").arg(BASELINE);

    if quick {
        cmd.arg("--measurement-time").arg("0.1");
        cmd.arg("--noplot");
        cmd.arg("--sample-size").arg("10");
    }

    let status = cmd
        .status()
        .with_context(|| format!("failed to run bench {BENCH}"))?;
    if !status.success() {
        anyhow::bail!("Benchmark {BENCH} failed");
    }

    println!("Finished in {:.2?}", start.elapsed());
    Ok(())
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");

    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let mut results = Results::new();
    collect_results(criterion_dir, &mut results)?;

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let mut file = fs::File::create(report_path)
        .with_context(|| format!("failed to create {}", report_path.display()))?;
    write_report(&mut file, &results)?;

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn write_report(out: &mut impl Write, results: &Results) -> Result<()> {
    writeln!(out, "# Shortest Path Benchmark Report")?;
    writeln!(out)?;

    write!(out, "| Workload |")?;
    for name in IMPLEMENTATIONS {
        write!(out, " {name} (nodes/s) | vs {REFERENCE} |")?;
    }
    writeln!(out)?;

    write!(out, "|---|")?;
    for _ in IMPLEMENTATIONS {
        write!(out, "---|---|")?;
    }
    writeln!(out)?;

    for (workload, by_impl) in results {
        write!(out, "| {workload} |")?;

        let reference = by_impl.get(REFERENCE).copied().unwrap_or(0.0);
        for name in IMPLEMENTATIONS {
            match by_impl.get(*name) {
                Some(&rate) => {
                    let rel = if reference > 0.0 { rate / reference } else { 0.0 };
                    write!(out, " {} | **{rel:.2}x** |", format_rate(rate))?;
                }
                None => write!(out, " N/A | - |")?,
            }
        }
        writeln!(out)?;
    }

    Ok(())
}

fn format_rate(rate: f64) -> String {
    if rate > 1_000_000.0 {
        format!("{:.2}M", rate / 1_000_000.0)
    } else if rate > 1_000.0 {
        format!("{:.2}K", rate / 1_000.0)
    } else {
        format!("{rate:.0}")
    }
}

/// Walks `target/criterion/<workload>/<implementation>/<baseline>/estimates.json`.
fn collect_results(dir: &Path, results: &mut Results) -> Result<()> {
    let entries = match fs::read_dir(dir) {
        Ok(e) => e,
        Err(_) => return Ok(()),
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_results(&path, results)?;
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) != Some("estimates.json") {
            continue;
        }

        let Some(baseline_dir) = path.parent() else {
            continue;
        };
        if dir_name(baseline_dir) != Some(BASELINE) {
            continue;
        }
        let Some(impl_dir) = baseline_dir.parent() else {
            continue;
        };
        let Some(workload_dir) = impl_dir.parent() else {
            continue;
        };
        let (Some(implementation), Some(workload)) = (dir_name(impl_dir), dir_name(workload_dir))
        else {
            continue;
        };
        if workload == "report" || implementation == "report" {
            continue;
        }

        let elements = read_json(&impl_dir.join(BASELINE).join("benchmark.json"))
            .ok()
            .and_then(|json| json.get("throughput")?.get("Elements")?.as_f64())
            .unwrap_or(1.0);

        let estimates = read_json(&path)?;
        let time_ns = estimates
            .get("mean")
            .and_then(|m| m.get("point_estimate"))
            .and_then(serde_json::Value::as_f64)
            .unwrap_or(0.0);

        if time_ns > 0.0 {
            results
                .entry(workload.to_string())
                .or_default()
                .insert(implementation.to_string(), elements * 1e9 / time_ns);
        }
    }

    Ok(())
}

fn dir_name(path: &Path) -> Option<&str> {
    path.file_name().and_then(|s| s.to_str())
}

fn read_json(path: &Path) -> Result<serde_json::Value> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
}
