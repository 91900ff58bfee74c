//! EcoTech command-line calculator
//!
//! Runs one of the impact calculators on `field=value` inputs and prints the
//! result panel, the share text and, for carbon, the chart series.

mod args;

use anyhow::{anyhow, bail, Result};
use clap::{Args, Parser, Subcommand};
use eco_core::{
    Calculator, CalculatorSession, Carbon, ChartSeries, Electricity, FieldSpec, Plastic, Water,
};

use crate::args::{check_field, parse_assignment};

#[derive(Parser)]
#[command(name = "ecotech")]
#[command(about = "Estimate annual carbon, electricity, water and plastic impact")]
struct Cli {
    /// Seed for tips and simulated figures (random when omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct CalcArgs {
    /// Inputs as field=value pairs, e.g. electricity=500
    fields: Vec<String>,

    /// Print the breakdown chart series
    #[arg(long)]
    chart: bool,

    /// Advance the chart style this many times before printing
    #[arg(long, default_value_t = 0)]
    toggle_chart: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Carbon footprint from electricity, gas, driving and flights
    Carbon(CalcArgs),

    /// Electricity use from a monthly bill or appliance habits
    Electricity(CalcArgs),

    /// Water use from a monthly bill or household habits
    Water(CalcArgs),

    /// Plastic waste from weekly item counts
    Plastic(CalcArgs),

    /// List every calculator's input fields and defaults
    Fields,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Carbon(args) => run::<Carbon>(cli.seed, &args),
        Commands::Electricity(args) => run::<Electricity>(cli.seed, &args),
        Commands::Water(args) => run::<Water>(cli.seed, &args),
        Commands::Plastic(args) => run::<Plastic>(cli.seed, &args),
        Commands::Fields => {
            print_fields::<Carbon>();
            print_fields::<Electricity>();
            print_fields::<Water>();
            print_fields::<Plastic>();
            Ok(())
        }
    }
}

fn run<C: Calculator>(seed: Option<u64>, args: &CalcArgs) -> Result<()> {
    let mut session = match seed {
        Some(seed) => CalculatorSession::<C>::with_seed(seed),
        None => CalculatorSession::<C>::new(),
    };
    let known: Vec<&str> = C::FIELDS.iter().map(|f| f.name).collect();

    for text in &args.fields {
        let assignment = parse_assignment(text)?;
        check_field(assignment.field, &known)?;
        session.set_field(assignment.field, assignment.value);
    }
    for _ in 0..args.toggle_chart {
        if session.toggle_chart_style().is_none() {
            bail!("the {} calculator has no chart", C::DOMAIN.slug());
        }
    }

    if let Err(e) = session.calculate() {
        bail!("{}\n{}", C::DOMAIN.alert_message(), e);
    }
    let view = session
        .view()
        .ok_or_else(|| anyhow!("no result after a successful calculation"))?;
    println!("{}", view);

    if let Some(message) = session.share_message() {
        println!();
        println!("Share: {}", message);
    }

    if args.chart || args.toggle_chart > 0 {
        match session.chart_series() {
            Some(series) => print_series(&series),
            None => log::warn!("[{}] no chart for this calculator", C::DOMAIN.slug()),
        }
    }
    Ok(())
}

fn print_series(series: &ChartSeries) {
    println!();
    println!("Chart ({}):", series.style.as_str());
    for (label, value) in series.labels.iter().zip(&series.values) {
        println!("  {:<14} {:>10.2}", label, value);
    }
}

fn print_fields<C: Calculator>() {
    println!("{} ({}):", C::DOMAIN.slug(), C::DOMAIN.unit());
    for spec in C::FIELDS {
        println!("  {:<18} {}", spec.name, describe(spec));
    }
    println!();
}

fn describe(spec: &FieldSpec) -> String {
    let mut text = spec.label.to_string();
    if spec.required {
        text.push_str(", required");
    } else {
        text.push_str(&format!(", default {}", spec.default_value));
    }
    if spec.must_be_positive {
        text.push_str(", must be > 0");
    }
    if spec.whole {
        text.push_str(", whole number");
    }
    text
}
