use crate::catalog::CatalogClient;
use crate::config::ClientConfig;
use crate::dispatcher::SessionDispatcher;
use crate::guard::RouteGuard;
use crate::notify::{Notifier, TracingNotifier};
use crate::token_store::{FileTokenStore, TokenStore};
use crate::transport::{ApiError, ApiTransport, HttpTransport};
use std::sync::Arc;
use tracing::{error, info};

/// The running front-end core: session store actor plus everything wired to it.
///
/// `AdminSystem` is responsible for:
/// - **Lifecycle Management**: spawning the session store actor and stopping it
/// - **Dependency Wiring**: sharing one transport, token store and notifier between
///   the dispatcher, the catalog client and the route guard
///
/// # Example
///
/// ```ignore
/// let system = AdminSystem::new(&ClientConfig::from_env()?)?;
///
/// system.dispatcher.login(Credentials::new("alice", "Secret#1")).await?;
/// let decision = system.guard.navigate("/admin");
///
/// system.shutdown().await?;
/// ```
pub struct AdminSystem {
    pub dispatcher: SessionDispatcher,
    pub catalog: CatalogClient,
    pub guard: RouteGuard,
    pub tokens: Arc<dyn TokenStore>,

    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl AdminSystem {
    /// HTTP transport and file-backed token store, as configured.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let transport = HttpTransport::new(&config.api_base_url, config.request_timeout)?;
        info!(base_url = %transport.base_url(), "Using API");
        Ok(Self::with_parts(
            Arc::new(transport),
            Arc::new(FileTokenStore::new(config.token_file.clone())),
            Arc::new(TracingNotifier),
            config.store_buffer,
        ))
    }

    /// Wires the system from explicit parts.
    pub fn with_parts(
        transport: Arc<dyn ApiTransport>,
        tokens: Arc<dyn TokenStore>,
        notifier: Arc<dyn Notifier>,
        store_buffer: usize,
    ) -> Self {
        let (store_actor, store) = crate::session::new(store_buffer);
        let store_handle = tokio::spawn(store_actor.run());

        let dispatcher =
            SessionDispatcher::new(transport.clone(), store, tokens.clone(), notifier.clone());
        let catalog = CatalogClient::new(transport, tokens.clone(), notifier);
        let guard = RouteGuard::new(tokens.clone());

        Self {
            dispatcher,
            catalog,
            guard,
            tokens,
            handles: vec![store_handle],
        }
    }

    /// Stops the session store and waits for it to exit.
    ///
    /// Clones of the dispatcher held elsewhere keep the store alive; drop them first.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        // Dropping the last store client closes the actor's inbox
        drop(self.dispatcher);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Store task failed: {:?}", e);
                return Err(format!("Store task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
