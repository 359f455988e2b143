//! Binary entry point: the interactive registry console.
//!
//! Builds the [`RegistrySystem`], runs the menu loop over stdin/stdout, and
//! shuts the actor down when the user exits.

use resource_registry::console;
use resource_registry::lifecycle::tracing::setup_tracing;
use resource_registry::lifecycle::RegistrySystem;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting resource registry console");

    let system = RegistrySystem::new();

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();
    console::run(&system.registry_client, stdin, stdout)
        .await
        .map_err(|e| e.to_string())?;

    system.shutdown().await?;

    info!("Console session complete");
    Ok(())
}
