use std::path::{Path, PathBuf};

use accel_travel_calculator::config::{FlightConfig, load_flight_configs};
use accel_travel_calculator::export::{profile as export_profile, report as export_report};
use accel_travel_calculator::flight::{MAX_PROFILE_STEPS, sample_profile};
use accel_travel_calculator::{FlightReport, FlightRequest, engine_label, plan};
use anyhow::{Context, bail};
use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[path = "flight/derivation.rs"]
mod derivation;

/// Travel time, peak velocity, propellant, energy and liftoff power for a
/// vessel that accelerates to the midpoint and decelerates to rest.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Constant-acceleration flight calculator (no relativity, no external forces)"
)]
struct Cli {
    /// Distance to travel in metres (defaults to the minimum Earth–Mars distance)
    #[arg(long, allow_negative_numbers = true)]
    distance: Option<f64>,

    /// Dry mass of the spacecraft in kg (defaults to 1000)
    #[arg(long, allow_negative_numbers = true)]
    dry_mass: Option<f64>,

    /// Constant acceleration in m/s² (defaults to 20.0)
    #[arg(long, allow_negative_numbers = true)]
    acceleration: Option<f64>,

    /// Engine name from the catalog, case-insensitive (defaults to LOX/LH2)
    #[arg(long)]
    engine: Option<String>,

    /// Flight request file (YAML/TOML) or a directory of them; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the report as JSON (`-` for stdout)
    #[arg(long)]
    json: Option<PathBuf>,

    /// Write the trajectory profile as CSV (`-` for stdout)
    #[arg(long)]
    profile_csv: Option<PathBuf>,

    /// Number of intervals in the trajectory profile
    #[arg(
        long,
        default_value_t = 100,
        value_parser = clap::value_parser!(u32).range(1..=MAX_PROFILE_STEPS as i64)
    )]
    samples: u32,

    /// Show how each quantity is derived
    #[arg(long, default_value_t = false)]
    explain: bool,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let requests = build_requests(&cli)?;
    if cli.profile_csv.is_some() && requests.len() != 1 {
        bail!("--profile-csv needs exactly one flight request, got {}", requests.len());
    }

    let mut reports = Vec::with_capacity(requests.len());
    for request in &requests {
        let report = match &request.name {
            Some(name) => plan(request).with_context(|| format!("scenario '{name}'"))?,
            None => plan(request)?,
        };
        reports.push(report);
    }

    let quiet = is_stdout(cli.json.as_deref()) || is_stdout(cli.profile_csv.as_deref());
    if !quiet {
        for (idx, report) in reports.iter().enumerate() {
            if idx > 0 {
                println!();
            }
            print_report(report, cli.explain);
        }
    }

    if let Some(path) = &cli.json {
        let written = match reports.as_slice() {
            [single] => export_report::write_json_file(path, single),
            many => export_report::write_json_file(path, &many),
        };
        written.with_context(|| format!("failed to write JSON report to {}", path.display()))?;
    }

    if let (Some(path), [report]) = (&cli.profile_csv, reports.as_slice()) {
        let samples = sample_profile(&report.parameters, &report.result, cli.samples as usize)?;
        export_profile::write_csv_file(path, &samples)
            .with_context(|| format!("failed to write profile CSV to {}", path.display()))?;
    }

    Ok(())
}

fn build_requests(cli: &Cli) -> anyhow::Result<Vec<FlightRequest>> {
    let configs = match &cli.config {
        Some(path) => load_flight_configs(path)
            .with_context(|| format!("failed to load flight config from {}", path.display()))?,
        None => vec![FlightConfig::default()],
    };
    if configs.is_empty() {
        bail!("no flight requests found");
    }

    Ok(configs
        .iter()
        .map(|config| {
            let mut request = FlightRequest::from(config);
            if let Some(distance) = cli.distance {
                request.distance_m = distance;
            }
            if let Some(dry_mass) = cli.dry_mass {
                request.dry_mass_kg = dry_mass;
            }
            if let Some(acceleration) = cli.acceleration {
                request.acceleration_m_s2 = acceleration;
            }
            if let Some(engine) = &cli.engine {
                request.engine = engine.clone();
            }
            request
        })
        .collect())
}

fn print_report(report: &FlightReport, explain: bool) {
    match &report.name {
        Some(name) => println!("=== {name} ==="),
        None => println!("=== Results ==="),
    }
    println!("{:<19}: {}", "Engine", engine_label(&report.engine));
    for (label, value) in report.summary_lines() {
        println!("{label:<19}: {value}");
        if explain {
            if let Some(text) = derivation::for_label(label) {
                for line in text.lines() {
                    println!("    {line}");
                }
            }
        }
    }
}

fn is_stdout(path: Option<&Path>) -> bool {
    path == Some(Path::new("-"))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
