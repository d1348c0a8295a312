use rand::{RngExt, rng};
use std::time::Duration;

/// Retry policy with exponential backoff and jitter. Retries only failures
/// the caller's classifier marks as transient; permanent errors surface
/// immediately.
pub struct RetryPolicy {
    pub max_retries: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_millis(200),
            max_delay: Duration::from_secs(5),
        }
    }
}

impl RetryPolicy {
    pub async fn retry_async<F, Fut, T, E, P>(&self, mut f: F, mut is_transient: P) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: std::future::Future<Output = Result<T, E>>,
        P: FnMut(&E) -> bool,
    {
        let mut attempt = 0u32;
        loop {
            match f().await {
                Ok(v) => return Ok(v),
                Err(e) => {
                    attempt += 1;
                    if attempt > self.max_retries || !is_transient(&e) {
                        return Err(e);
                    }
                    // exponential backoff with jitter, capped at max_delay
                    let ceiling = (self.base_delay * (1u32 << attempt)).min(self.max_delay);
                    let mut rng = rng();
                    let jitter = rng.random_range(0..=ceiling.as_millis() as u64);
                    tokio::time::sleep(Duration::from_millis(jitter)).await;
                }
            }
        }
    }
}
