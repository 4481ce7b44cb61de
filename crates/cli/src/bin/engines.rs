//! Lists the engine catalog.

use accel_travel_calculator::engine_label;
use accel_travel_calculator::export::report as export_report;
use accel_travel_calculator::propulsion::{self, DEFAULT_ENGINE};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "Engine catalog with effective exhaust velocities")]
struct Cli {
    /// Print the catalog as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let engines = propulsion::catalog();

    if cli.json {
        export_report::write_json(&mut std::io::stdout(), &engines)?;
        return Ok(());
    }

    for engine in engines {
        let marker = if engine.name == DEFAULT_ENGINE { " [default]" } else { "" };
        println!(
            "{}, Isp {:.0} s{marker}",
            engine_label(engine),
            engine.specific_impulse_s()
        );
    }
    Ok(())
}
