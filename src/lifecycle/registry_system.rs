use tracing::{error, info};

use crate::clients::RegistryClient;
use crate::journal::{FileSink, TransactionSink};

/// Default journal path, relative to the working directory.
pub const DEFAULT_JOURNAL_PATH: &str = "resource_log.txt";

/// The main runtime orchestrator for the registry.
///
/// `RegistrySystem` is responsible for:
/// - **Lifecycle Management**: Starting the registry actor and shutting it down
/// - **Wiring**: Connecting the actor to its transaction journal sink
///
/// # Example
///
/// ```ignore
/// let system = RegistrySystem::new();
///
/// system.registry_client.add_resource("R1", ResourceKind::Equipment).await?;
/// system.registry_client.add_project("P1", "Alpha").await?;
/// system.registry_client.allocate_resource("R1", "P1").await?;
///
/// system.shutdown().await?;
/// ```
pub struct RegistrySystem {
    /// Client for interacting with the registry actor.
    pub registry_client: RegistryClient,

    /// Task handles for all running actors (used for graceful shutdown).
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl RegistrySystem {
    /// Creates a system journaling to [`DEFAULT_JOURNAL_PATH`].
    pub fn new() -> Self {
        Self::with_journal(Box::new(FileSink::new(DEFAULT_JOURNAL_PATH)))
    }

    /// Creates a system with a caller-supplied journal sink. Tests use this
    /// with [`MemorySink`](crate::journal::MemorySink).
    pub fn with_journal(journal: Box<dyn TransactionSink>) -> Self {
        let (actor, registry_client) = crate::registry::new(journal);
        let handle = tokio::spawn(actor.run());

        Self {
            registry_client,
            handles: vec![handle],
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the client closes the request channel; the actor drains its
    /// queue, exits its loop, and the join below completes. Returns an error
    /// only if an actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.registry_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for RegistrySystem {
    fn default() -> Self {
        Self::new()
    }
}
