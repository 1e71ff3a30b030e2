use std::fmt::Display;

/// Await a cleanup request and log, rather than return, its failure.
///
/// Resource names are unique per test, so a leftover resource never affects
/// another check.
pub async fn best_effort<T, E>(
    what: &str,
    cleanup: impl Future<Output = Result<T, E>>,
) where
    E: Display,
{
    match cleanup.await {
        Ok(_) => tracing::debug!(what, "cleaned up"),
        Err(e) => tracing::warn!(what, "cleanup failed: {e}"),
    }
}
