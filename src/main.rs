/*!
 * Teaching Assistant - Simulation Entry Point
 *
 * Runs a group of student threads against one assistant and prints a
 * JSON report.
 *
 * Usage: teaching-assistant [config.json]
 * Without a file the configuration comes from SIM_* environment variables.
 */

use miette::{IntoDiagnostic, Result};
use tracing::info;

use teaching_assistant::{init_tracing, Simulation, SimulationConfig, StdoutHelpAction};

fn main() -> Result<()> {
    init_tracing();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            info!(path = %path, "Loading simulation config");
            SimulationConfig::from_file(&path)?
        }
        None => SimulationConfig::from_env()?,
    };

    info!("Teaching assistant simulation starting...");
    info!("================================================");

    let simulation = Simulation::new(config)?;
    let report = simulation.run(StdoutHelpAction)?;

    info!("================================================");
    println!(
        "{}",
        serde_json::to_string_pretty(&report).into_diagnostic()?
    );
    Ok(())
}
