//! Compute the rate x rent cash flow grid for one property
//!
//! Prints a colour-coded text matrix and optionally writes the matrix as CSV
//! and a JSON report.

use anyhow::{Context, Result};
use clap::Parser;
use rental_cashflow::amortization::MAX_PROJECTION_YEARS;
use rental_cashflow::grid::AxisBounds;
use rental_cashflow::{ScenarioConfig, ScenarioRunner};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(name = "cashflow_grid", about = "Monthly rental cash flow across rate and rent scenarios")]
struct Args {
    /// Scenario JSON file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Purchase price in currency units
    #[arg(long)]
    purchase_price: Option<f64>,

    /// Equity ratio as a fraction (0, 0.05, 0.10, 0.20)
    #[arg(long)]
    equity_ratio: Option<f64>,

    /// Annual amortization in percent
    #[arg(long)]
    amortization_pct: Option<f64>,

    /// Marginal tax rate in percent
    #[arg(long)]
    tax_pct: Option<f64>,

    /// Lowest interest rate in percent
    #[arg(long)]
    rate_min: Option<f64>,

    /// Highest interest rate in percent
    #[arg(long)]
    rate_max: Option<f64>,

    /// Lowest monthly rent
    #[arg(long)]
    rent_min: Option<f64>,

    /// Highest monthly rent
    #[arg(long)]
    rent_max: Option<f64>,

    /// Elapsed years for the amortized matrix
    #[arg(long, allow_negative_numbers = true)]
    years: Option<i32>,

    /// Write the initial matrix as CSV
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write the amortized matrix as CSV
    #[arg(long)]
    amortized_csv: Option<PathBuf>,

    /// Write a JSON report
    #[arg(long)]
    report: Option<PathBuf>,

    /// Print the remaining principal and best cash flow for every year up to 30
    #[arg(long)]
    sweep: bool,
}

fn build_config(args: &Args) -> Result<ScenarioConfig> {
    let mut config = match &args.config {
        Some(path) => ScenarioConfig::from_json_file(path)
            .with_context(|| format!("Failed to load scenario from {}", path.display()))?,
        None => ScenarioConfig::default(),
    };

    let financing = &mut config.financing;
    if let Some(v) = args.purchase_price { financing.purchase_price = v; }
    if let Some(v) = args.equity_ratio { financing.equity_ratio = v; }
    if let Some(v) = args.amortization_pct { financing.amortization_rate = v / 100.0; }
    if let Some(v) = args.tax_pct { financing.tax_rate = v / 100.0; }

    let rate = config.grid.rate_percent;
    config.grid.rate_percent = AxisBounds::new(
        args.rate_min.unwrap_or(rate.min),
        args.rate_max.unwrap_or(rate.max),
        rate.step,
    );
    let rent = config.grid.rent;
    config.grid.rent = AxisBounds::new(
        args.rent_min.unwrap_or(rent.min),
        args.rent_max.unwrap_or(rent.max),
        rent.step,
    );

    if let Some(years) = args.years {
        config.years = years;
    }
    Ok(config)
}

fn create_output(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file {}", path.display()))?;
    Ok(BufWriter::new(file))
}

fn main() -> Result<()> {
    env_logger::init();

    let start = Instant::now();
    let args = Args::parse();
    let config = build_config(&args)?;
    let runner = ScenarioRunner::new(config);

    let result = runner.run().context("Scenario computation failed")?;
    let report = runner.report(&result);

    for line in report.header_lines() {
        println!("{}", line);
    }
    println!();

    // Colour-coded matrix: '-' red, '~' yellow, '+' green
    let bands = runner.color_bands(&result);
    println!("Rent \\ rate {:.2}% .. {:.2}%",
             result.rate_axis.first().unwrap_or(0.0) * 100.0,
             result.rate_axis.last().unwrap_or(0.0) * 100.0);
    for (rent, row) in result.rent_axis.iter().zip(&bands) {
        let cells: String = row.iter().map(|b| b.symbol()).collect();
        println!("{:>10.0} | {}", rent, cells);
    }
    println!();

    println!("Initial:   min {:>10.2}  max {:>10.2}  positive {:>5.1}%",
             report.initial.min_cashflow,
             report.initial.max_cashflow,
             report.initial.positive_share * 100.0);
    println!("After {:>2}y: min {:>10.2}  max {:>10.2}  positive {:>5.1}%",
             report.years,
             report.amortized.min_cashflow,
             report.amortized.max_cashflow,
             report.amortized.positive_share * 100.0);

    if let Some(path) = &args.csv {
        result.matrix.write_csv(create_output(path)?, &result.rate_axis, &result.rent_axis)?;
        println!("Matrix written to {}", path.display());
    }

    if let Some(path) = &args.amortized_csv {
        result.amortized.matrix.write_csv(create_output(path)?, &result.rate_axis, &result.rent_axis)?;
        println!("Amortized matrix written to {}", path.display());
    }

    if let Some(path) = &args.report {
        report.write_json(create_output(path)?)?;
        println!("Report written to {}", path.display());
    }

    if args.sweep {
        println!("\nYear | Remaining principal | Max cash flow");
        for state in runner.run_years(MAX_PROJECTION_YEARS)? {
            println!("{:4} | {:19.2} | {:13.2}",
                     state.years,
                     state.remaining_principal,
                     state.matrix.max().unwrap_or(0.0));
        }
    }

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
