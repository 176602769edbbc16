use std::path::{Path, PathBuf};

use aura::input::results_to_json;
use aura::io::atomic_write;
use aura::{init_logging, load_project, load_safety_signals, load_scenarios, report};
use aura_core::{Calculator, SafetyAdjustedRoi, SensitivityParameter};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "aura")]
#[command(about = "Multi-dimensional ROI projections for AI agent projects")]
struct Args {
    /// Log level (debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Calculate ROI for a project file
    Calculate {
        /// Project file (JSON or YAML)
        #[arg(short, long)]
        input: PathBuf,

        /// Write the full results as JSON instead of printing a summary
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Include the value breakdown and risk profile
        #[arg(short, long)]
        verbose: bool,

        /// Operational safety signals for a safety-adjusted ROI
        #[arg(long)]
        safety_signals: Option<PathBuf>,
    },
    /// Check that a project file parses and is in domain
    Validate {
        #[arg(short, long)]
        input: PathBuf,
    },
    /// Recalculate with one parameter scaled by each multiplier
    Sensitivity {
        #[arg(short, long)]
        input: PathBuf,

        /// accuracy, hourly_rate, hours_per_week, cost or discount_rate
        #[arg(short, long)]
        parameter: SensitivityParameter,

        #[arg(
            short,
            long,
            value_delimiter = ',',
            default_values_t = [0.8, 0.9, 1.0, 1.1, 1.2]
        )]
        multipliers: Vec<f64>,
    },
    /// Recalculate once per scenario in a scenarios file
    WhatIf {
        #[arg(short, long)]
        input: PathBuf,

        /// List of scenarios (JSON or YAML)
        #[arg(short, long)]
        scenarios: PathBuf,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(args.log_file.as_deref(), &args.log_level)?;

    match args.command {
        Command::Calculate {
            input,
            output,
            verbose,
            safety_signals,
        } => calculate(&input, output.as_deref(), verbose, safety_signals.as_deref()),
        Command::Validate { input } => validate(&input),
        Command::Sensitivity {
            input,
            parameter,
            multipliers,
        } => sensitivity(&input, parameter, &multipliers),
        Command::WhatIf { input, scenarios } => what_if(&input, &scenarios),
    }
}

fn load_calculator(input: &Path) -> color_eyre::Result<Calculator> {
    let project = load_project(input)?;
    Ok(Calculator::new(project)?)
}

fn calculate(
    input: &Path,
    output: Option<&Path>,
    verbose: bool,
    safety_signals: Option<&Path>,
) -> color_eyre::Result<()> {
    let calculator = load_calculator(input)?;
    let results = calculator.calculate();
    tracing::info!(
        project = %results.project_name,
        npv = results.net_present_value(),
        "Calculated projections"
    );

    if let Some(output) = output {
        atomic_write(output, &results_to_json(&results)?)?;
        tracing::info!(path = %output.display(), "Results written");
        println!("Results written to {}", output.display());
    } else {
        print!("{}", report::results_summary(&results, verbose));
    }

    if let Some(path) = safety_signals {
        let signals = load_safety_signals(path)?;
        let safety = SafetyAdjustedRoi::default().calculate_for(&results, &signals);
        print!("{}", report::safety_summary(&safety));
    }

    Ok(())
}

fn validate(input: &Path) -> color_eyre::Result<()> {
    let calculator = load_calculator(input)?;
    let project = calculator.project();

    println!("Valid project file: {}", input.display());
    println!("  Project: {}", project.name);
    println!("  Duration: {} months", project.duration_months);
    println!("  Tasks: {}", project.tasks.len());
    println!("  Industry: {}", project.industry);
    Ok(())
}

fn sensitivity(
    input: &Path,
    parameter: SensitivityParameter,
    multipliers: &[f64],
) -> color_eyre::Result<()> {
    let calculator = load_calculator(input)?;
    let points = calculator.sensitivity_analysis(parameter, multipliers)?;
    tracing::info!(%parameter, points = points.len(), "Sensitivity analysis complete");
    print!("{}", report::sensitivity_table(parameter, &points));
    Ok(())
}

fn what_if(input: &Path, scenarios: &Path) -> color_eyre::Result<()> {
    let calculator = load_calculator(input)?;
    let scenarios = load_scenarios(scenarios)?;
    let outcomes = calculator.what_if_analysis(&scenarios)?;
    tracing::info!(scenarios = outcomes.len(), "What-if analysis complete");
    print!("{}", report::what_if_table(&outcomes));
    Ok(())
}
