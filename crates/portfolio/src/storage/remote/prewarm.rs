use std::sync::Arc;

use async_trait::async_trait;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use portfolio_core::storage::Result;

/// A repository that can load its data ahead of the first request.
#[async_trait]
pub trait Prewarm: Send + Sync {
    /// Name used in log fields.
    fn name(&self) -> &'static str;

    /// Loads the full data set, marking the repository initialized on success.
    async fn warm(&self) -> Result<()>;

    /// Whether a full load has completed successfully.
    fn is_initialized(&self) -> bool;
}

/// Spawns a detached task that warms `repository` once.
///
/// Failures are logged and otherwise ignored; the next real read retries the
/// load. Returns `None` outside a tokio runtime.
pub fn spawn_prewarm<R>(repository: Arc<R>) -> Option<JoinHandle<()>>
where
    R: Prewarm + ?Sized + 'static,
{
    let Ok(handle) = Handle::try_current() else {
        tracing::debug!(
            repository = repository.name(),
            "No runtime available, skipping pre-warm"
        );
        return None;
    };

    Some(handle.spawn(run_prewarm(repository)))
}

/// Spawns a pre-warm task for `repository` that starts once `dependency`
/// has finished.
///
/// Used when warming one repository reads through another that is still
/// warming, so the shared document is fetched only once.
pub fn spawn_prewarm_after<R>(
    dependency: Option<JoinHandle<()>>,
    repository: Arc<R>,
) -> Option<JoinHandle<()>>
where
    R: Prewarm + ?Sized + 'static,
{
    let Some(dependency) = dependency else {
        return spawn_prewarm(repository);
    };

    let handle = Handle::try_current().ok()?;
    Some(handle.spawn(async move {
        if let Err(err) = dependency.await {
            tracing::debug!(
                repository = repository.name(),
                error = %err,
                "Pre-warm dependency did not complete"
            );
        }
        run_prewarm(repository).await;
    }))
}

async fn run_prewarm<R>(repository: Arc<R>)
where
    R: Prewarm + ?Sized,
{
    let name = repository.name();
    tracing::debug!(repository = name, "Pre-warming repository");

    match repository.warm().await {
        Ok(()) => tracing::info!(repository = name, "Repository pre-warmed"),
        Err(err) => tracing::warn!(repository = name, error = %err, "Pre-warm failed"),
    }
}
