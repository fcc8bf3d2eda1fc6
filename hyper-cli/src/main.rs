//! hypercalc - Hypercomplex stack calculator
//! Command-line harness for the hyper-core values and the hyper-calc stack

mod eval;
mod selftest;

use clap::{Parser, Subcommand};
use colored::*;
use eval::OpArg;
use hyper_calc::{CalculatorConfig, config};
use hyper_core::prelude::*;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "hypercalc")]
#[command(author, version)]
#[command(about = "Hypercomplex stack calculator (complex numbers and quaternions)", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the built-in verification suite
    Selftest,

    /// Push operands onto the stack and apply operations in order
    Eval {
        /// Operands as component lists: "re,i" or "re,i,j,k"
        #[arg(value_name = "OPERAND", required = true, allow_hyphen_values = true)]
        operands: Vec<String>,

        /// Operation to apply (repeatable, applied left to right)
        #[arg(short, long = "op", value_enum, required = true)]
        ops: Vec<OpArg>,

        /// Print the final stack as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version and configuration in effect
    Info,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Selftest => {
            if !selftest_command() {
                std::process::exit(1);
            }
        }

        Commands::Eval { operands, ops, json } => {
            if let Err(e) = eval_command(&operands, &ops, json) {
                eprintln!("{} {:#}", "error:".red().bold(), e);
                std::process::exit(1);
            }
        }

        Commands::Info => {
            print_info();
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| config::log_filter().into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

// ============================================================================
// Commands
// ============================================================================

fn selftest_command() -> bool {
    let report = selftest::run();

    let mut group = "";
    for check in report.checks() {
        if check.group != group {
            group = check.group;
            println!();
            println!("{}", group.bold());
        }
        let mark = if check.passed { "✓".green() } else { "✗".red() };
        println!("  {} {}", mark, check.name);
    }

    println!();
    let total = report.checks().len();
    if report.is_success() {
        println!("{} {} checks passed", "ok:".green().bold(), total);
    } else {
        println!(
            "{} {} of {} checks failed",
            "failed:".red().bold(),
            report.failed(),
            total
        );
    }
    report.is_success()
}

fn eval_command(operands: &[String], ops: &[OpArg], json: bool) -> anyhow::Result<()> {
    let values = operands
        .iter()
        .map(|text| eval::parse_operand(text))
        .collect::<anyhow::Result<Vec<_>>>()?;
    let ops: Vec<Op> = ops.iter().copied().map(Op::from).collect();

    let stack = eval::evaluate(&values, &ops)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&stack)?);
    } else {
        println!("{}", eval::render(&stack));
    }
    Ok(())
}

fn print_info() {
    let config = CalculatorConfig::from_env();

    println!("{}", "hypercalc - Hypercomplex stack calculator".bold());
    println!("version {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("{}", "Values:".bold());
    println!("  • {} Complex numbers (re + i)", "✓".green());
    println!("  • {} Quaternions (re + i + j + k, Hamilton product)", "✓".green());
    println!("  • {} Mixed-kind arithmetic widens to the quaternion", "✓".green());
    println!("  • {} Division by zero guarded on the stack", "✓".green());
    println!();
    println!("{}", "Configuration:".bold());
    println!("  HYPERCALC_STACK_CAPACITY = {}", config.initial_capacity.to_string().cyan());
    println!("  HYPERCALC_LOG            = {}", config::log_filter().cyan());
    println!();
    println!("{}", "Commands:".bold());
    println!("  hypercalc selftest                         # Run verification suite");
    println!("  hypercalc eval 2,3 4,5 --op add            # (2+3i) + (4+5i)");
    println!("  hypercalc eval 2,3 1,2,3,4 --op mul --json # Complex times quaternion");
    println!("  hypercalc info                             # Show this info");
}
