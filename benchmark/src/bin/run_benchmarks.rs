// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! CLI tool to run the FFI overhead scenarios and report the results.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use ffi_overhead_benchmark::{console, BenchmarkReport, JsonReporter, SystemInfo};
use ffi_overhead_core::{
    BenchmarkConfig, ConfigLoader, MonotonicClock, NativeComputeProvider, ScenarioId,
    ScenarioRunner, Workload,
};
use ffi_overhead_native::CAbiProvider;

#[derive(Parser)]
#[command(name = "run_benchmarks")]
#[command(about = "Measure C-ABI call overhead and split it from native compute time")]
struct Args {
    /// YAML configuration file (flags below override its values)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Calls in the scalar scenario
    #[arg(long)]
    simple_calls: Option<u64>,

    /// Calls in each bulk scenario
    #[arg(long)]
    complex_calls: Option<u64>,

    /// Elements in the generated workload
    #[arg(long)]
    list_size: Option<usize>,

    /// Scenarios to run (all if not specified)
    #[arg(short, long, value_enum)]
    scenario: Vec<ScenarioArg>,

    /// Run in quick mode (small counts)
    #[arg(long)]
    quick: bool,

    /// Directory to save a JSON report into
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ScenarioArg {
    /// Scenario A: scalar add
    Scalar,
    /// Scenario B: bulk sum
    Bulk,
    /// Scenario C: overhead decomposition
    Decomposition,
}

impl From<ScenarioArg> for ScenarioId {
    fn from(arg: ScenarioArg) -> Self {
        match arg {
            ScenarioArg::Scalar => ScenarioId::Scalar,
            ScenarioArg::Bulk => ScenarioId::Bulk,
            ScenarioArg::Decomposition => ScenarioId::Decomposition,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr so the report on stdout stays clean
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();

    let config = resolve_config(&args)?;
    let scenarios: Vec<ScenarioId> = if args.scenario.is_empty() {
        vec![ScenarioId::Scalar, ScenarioId::Bulk, ScenarioId::Decomposition]
    } else {
        args.scenario.iter().copied().map(ScenarioId::from).collect()
    };

    tracing::info!(
        simple_calls = %config.simple_call_count,
        complex_calls = %config.complex_call_count,
        list_size = %config.list_size,
        "Starting FFI overhead run"
    );

    let workload = Workload::from_size(config.list_size);
    let provider = CAbiProvider::new();
    let runner = ScenarioRunner::new(config, &workload, MonotonicClock::new(), provider)?;
    let suite = runner.run_selected(&scenarios)?;

    let report = BenchmarkReport::from_suite(config, provider.name(), &suite)?
        .with_system_info(SystemInfo::collect());

    print!("{}", console::render(&report)?);

    if let Some(output) = &args.output {
        let reporter = JsonReporter::new(output)?;
        let path = reporter.save(&report)?;
        println!("Benchmark report saved to: {:?}", path);
    }

    Ok(())
}

/// File (or profile) first, then per-flag overrides. Validated once.
fn resolve_config(args: &Args) -> anyhow::Result<BenchmarkConfig> {
    let base = match &args.config {
        Some(path) => ConfigLoader::load_file(path)?,
        None if args.quick => BenchmarkConfig::quick(),
        None => BenchmarkConfig::default(),
    };

    let config = BenchmarkConfig::new(
        args.simple_calls.unwrap_or(base.simple_call_count.get()),
        args.complex_calls.unwrap_or(base.complex_call_count.get()),
        args.list_size.unwrap_or(base.list_size.get()),
    )?;
    Ok(config)
}
