//! Startup backend health probe.

use std::time::Duration;

use api::RecipeApi;

use crate::timer::sleep;

/// Outcome of the startup probe.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BackendStatus {
    #[default]
    Checking,
    Healthy,
    Unreachable,
}

/// Probe `GET /health`, retrying up to `retries` more times `delay` apart.
pub async fn probe<A: RecipeApi>(api: &A, retries: u32, delay: Duration) -> BackendStatus {
    let mut attempts_left = retries;
    loop {
        match api.health().await {
            Ok(()) => {
                tracing::info!("Server is healthy");
                return BackendStatus::Healthy;
            }
            Err(e) => {
                tracing::warn!(
                    "Server health check failed (attempts left: {}): {}",
                    attempts_left,
                    e
                );
                if attempts_left == 0 {
                    return BackendStatus::Unreachable;
                }
                attempts_left -= 1;
                sleep(delay).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeApi;

    #[tokio::test]
    async fn test_healthy_first_try() {
        let api = FakeApi::new();
        assert_eq!(probe(&api, 3, Duration::ZERO).await, BackendStatus::Healthy);
        assert_eq!(api.calls("health"), 1);
    }

    #[tokio::test]
    async fn test_recovers_within_retries() {
        let api = FakeApi::new().health_failures(3);
        assert_eq!(probe(&api, 3, Duration::ZERO).await, BackendStatus::Healthy);
        assert_eq!(api.calls("health"), 4);
    }

    #[tokio::test]
    async fn test_gives_up_after_retries() {
        let api = FakeApi::new().offline();
        assert_eq!(
            probe(&api, 3, Duration::from_millis(1)).await,
            BackendStatus::Unreachable
        );
        assert_eq!(api.calls("health"), 4);
    }
}
