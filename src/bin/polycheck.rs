use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use planar::dataset::{self, RecordReport, Summary};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "polycheck")]
#[command(about = "Check polygon fixtures against their expected convexity, vertex count and perimeter")]
struct Cmd {
    /// Fixture file to check
    #[arg(default_value = "data/polygons.txt")]
    path: PathBuf,

    /// Also write every polygon as <DIR>/polygon_<n>.svg
    #[arg(long)]
    svg_dir: Option<PathBuf>,

    #[arg(long, default_value_t = 400)]
    width: u32,

    #[arg(long, default_value_t = 400)]
    height: u32,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .init();

    let result = run(&Cmd::parse());
    if let Err(err) = &result {
        eprintln!("error: {err:#}");
    }
    ExitCode::from(status(&result))
}

/// 0 when every check passed, 1 on a failed check or any error.
fn status(result: &Result<Summary>) -> u8 {
    match result {
        Ok(summary) if summary.all_passed() => 0,
        _ => 1,
    }
}

fn run(cmd: &Cmd) -> Result<Summary> {
    let records = dataset::load(&cmd.path)
        .with_context(|| format!("cannot check {}", cmd.path.display()))?;
    let reports = dataset::check_all(&records)?;

    for report in &reports {
        print_report(report);
    }

    let summary = Summary::from_reports(&reports);
    println!("=== TEST SUMMARY ===");
    println!("Passed: {}", summary.passed);
    println!("Failed: {}", summary.failed);

    if let Some(dir) = &cmd.svg_dir {
        export_all(&reports, dir, cmd.width, cmd.height)?;
    }
    Ok(summary)
}

fn export_all(reports: &[RecordReport], dir: &Path, width: u32, height: u32) -> Result<()> {
    std::fs::create_dir_all(dir)?;
    for report in reports {
        let path = dir.join(format!("polygon_{}.svg", report.record.index));
        report
            .polygon
            .export_svg(&path, width, height)
            .with_context(|| format!("cannot export {}", path.display()))?;
    }
    Ok(())
}

fn print_report(report: &RecordReport) {
    println!("=== Polygon {} ===", report.record.index);
    println!("{}", report.polygon);
    for check in report.failures() {
        eprintln!("[FAIL] {}", check.name);
    }
    println!("Actual convex: {}", if report.actual_convex { "Yes" } else { "No" });
    println!("Actual perimeter: {:.6}", report.raw_perimeter);
    println!("Effective perimeter: {:.6}", report.effective_perimeter);
    println!("Expected convex: {}", report.record.convex_token);
    println!("Expected perimeter: {}", report.record.expected_perimeter);
    println!();
}
