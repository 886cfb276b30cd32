use crate::error::{ContextError, Result};

/// Runs a synchronous core call on a dedicated blocking lane of the current
/// tokio runtime.
///
/// Bind, compute and unbind then happen on one OS thread with no other task
/// scheduled in between. A panicking or cancelled lane is reported as
/// [`ContextError::LaneLost`].
pub async fn on_lane<F, T>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    let out: Result<T> = tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| ContextError::LaneLost(e.to_string()))?;
    out
}
