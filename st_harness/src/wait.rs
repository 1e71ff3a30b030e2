//! Bounded waiting for eventually consistent state.
//!
//! A check is re-run with exponential backoff until it reports success or
//! the window closes. Check errors are not retried.

use std::time::Duration;

use tokio::time::Instant;

use crate::error::{Error, Result};

/// Bounds for [`wait_until`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitPolicy {
    /// Total time allowed before giving up.
    pub window: Duration,
    pub initial_delay: Duration,
    /// Cap for the doubling delay between checks.
    pub max_delay: Duration,
}

impl Default for WaitPolicy {
    fn default() -> Self {
        Self {
            window: Duration::from_secs(2),
            initial_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(1),
        }
    }
}

impl From<&st_app::Config> for WaitPolicy {
    fn from(config: &st_app::Config) -> Self {
        Self {
            window: config.wait_window(),
            initial_delay: config.wait_initial_delay(),
            max_delay: config.wait_max_delay(),
        }
    }
}

impl WaitPolicy {
    #[must_use]
    pub const fn with_window(self, window: Duration) -> Self {
        Self { window, ..self }
    }
}

/// Re-run `check` until it returns `Ok(true)` or the window elapses.
///
/// Returns the number of attempts it took. The last check runs at the
/// deadline at the latest, never after it.
///
/// # Errors
///
/// [`Error::Timeout`] once the window has elapsed without success, or the
/// first error returned by `check`.
pub async fn wait_until<F, Fut>(
    policy: &WaitPolicy,
    what: &str,
    mut check: F,
) -> Result<u32>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<bool>>,
{
    let started = Instant::now();
    let deadline = started + policy.window;
    let mut delay = policy.initial_delay;
    let mut attempts = 0;

    loop {
        attempts += 1;
        if check().await? {
            tracing::debug!(what, attempts, "condition met");
            return Ok(attempts);
        }

        let now = Instant::now();
        if now >= deadline {
            tracing::warn!(what, attempts, "gave up waiting");
            return Err(Error::Timeout {
                what: what.to_string(),
                waited: now - started,
                attempts,
            });
        }

        let pause = delay.min(deadline - now);
        tracing::debug!(what, attempts, ?pause, "condition not met yet");
        tokio::time::sleep(pause).await;

        delay = delay.saturating_mul(2).min(policy.max_delay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[tokio::test(start_paused = true)]
    async fn test_returns_on_first_success() {
        let attempts = wait_until(&WaitPolicy::default(), "ready", || async {
            Ok(true)
        })
        .await
        .expect("should succeed immediately");

        assert_eq!(attempts, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_backs_off_between_checks() {
        let calls = &AtomicU32::new(0);
        let started = Instant::now();

        let policy = WaitPolicy::default();
        let attempts = wait_until(&policy, "third call", move || async move {
            Ok(calls.fetch_add(1, Ordering::SeqCst) == 2)
        })
        .await
        .expect("should succeed on the third check");

        assert_eq!(attempts, 3);
        // 100ms then 200ms
        assert_eq!(started.elapsed(), Duration::from_millis(300));
    }

    #[tokio::test(start_paused = true)]
    async fn test_times_out_at_window() {
        let started = Instant::now();

        let err = wait_until(&WaitPolicy::default(), "never", || async {
            Ok(false)
        })
        .await
        .expect_err("should time out");

        // 100 + 200 + 400 + 800, then clipped to the 500ms left
        assert_eq!(started.elapsed(), Duration::from_secs(2));
        match err {
            Error::Timeout {
                what,
                waited,
                attempts,
            } => {
                assert_eq!(what, "never");
                assert_eq!(waited, Duration::from_secs(2));
                assert_eq!(attempts, 6);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_check_errors_are_not_retried() {
        let calls = &AtomicU32::new(0);

        let policy = WaitPolicy::default();
        let err = wait_until(&policy, "failing", move || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(Error::Emulator("connection refused".to_string()))
        })
        .await
        .expect_err("should fail");

        assert!(matches!(err, Error::Emulator(_)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_policy_from_config() {
        let config = st_app::Config {
            wait_window_ms: 10_000,
            ..st_app::Config::default()
        };
        let policy = WaitPolicy::from(&config);

        assert_eq!(policy.window, Duration::from_secs(10));
        assert_eq!(policy.initial_delay, Duration::from_millis(100));
        assert_eq!(policy.max_delay, Duration::from_secs(1));
        assert_eq!(
            WaitPolicy::default().with_window(Duration::from_secs(10)),
            policy
        );
    }
}
