//! Check command implementation
//!
//! Loads the launch configuration and reports it.

use tracing::info;

use crate::{config, Result};

/// Run the check command
pub fn run(path: Option<&str>) -> Result<()> {
    info!("Checking launch configuration...");

    let launch_config = config::load(path)?;

    println!("Launch configuration:");
    println!("  seed    : {}", launch_config.seed());
    println!("  workers : {}", launch_config.workers());
    match launch_config.threads() {
        0 => println!("  threads : one per CPU"),
        n => println!("  threads : {}", n),
    }

    info!("Configuration valid");
    Ok(())
}
