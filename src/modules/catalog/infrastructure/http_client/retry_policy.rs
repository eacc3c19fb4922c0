//! Retry policy for feed requests
//!
//! Backoff honors `Retry-After` when the server sends one and otherwise grows
//! exponentially with a little jitter.

use std::time::Duration;

/// Configuration for HTTP retry behavior
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Maximum number of retry attempts
    pub max_retries: u32,
    /// Base delay between retries
    pub base_delay: Duration,
    /// Upper bound on any single wait
    pub max_delay: Duration,
    /// Multiplier for exponential backoff
    pub backoff_multiplier: f64,
    /// Fraction of the delay added as random jitter (0.0 disables)
    pub jitter: f64,
}

impl RetryPolicy {
    /// Policy for the iTunes RSS feed. The feed is one request per refresh,
    /// so a couple of quick retries are enough.
    pub fn itunes() -> Self {
        Self {
            max_retries: 2,
            base_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(10),
            backoff_multiplier: 2.0,
            jitter: 0.1,
        }
    }

    /// Fail on the first error
    pub fn no_retries() -> Self {
        Self {
            max_retries: 0,
            jitter: 0.0,
            ..Self::itunes()
        }
    }

    /// Calculate delay for next retry attempt
    pub fn calculate_delay(&self, attempt: u32, retry_after: Option<Duration>) -> Duration {
        // If server provided Retry-After header, respect it
        if let Some(server_delay) = retry_after {
            return server_delay.min(self.max_delay);
        }

        let multiplier = self.backoff_multiplier.powi(attempt as i32);
        let mut delay =
            Duration::from_millis((self.base_delay.as_millis() as f64 * multiplier) as u64);

        if self.jitter > 0.0 {
            let jitter_ms = (delay.as_millis() as f64 * self.jitter * rand::random::<f64>()) as u64;
            delay += Duration::from_millis(jitter_ms);
        }

        delay.min(self.max_delay)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::itunes()
    }
}

/// Read `Retry-After` (delta-seconds form) from a response
pub fn retry_after(headers: &reqwest::header::HeaderMap) -> Option<Duration> {
    headers
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}

/// Whether a response status is worth retrying
pub fn is_retryable_status(status: reqwest::StatusCode) -> bool {
    status == reqwest::StatusCode::TOO_MANY_REQUESTS
        || status == reqwest::StatusCode::REQUEST_TIMEOUT
        || status.is_server_error()
}

/// Determines if a transport error is retryable
pub fn is_retryable_error(error: &reqwest::Error) -> bool {
    match error.status() {
        Some(status) => is_retryable_status(status),
        // Network errors are potentially retryable
        None => error.is_timeout() || error.is_connect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_itunes_policy() {
        let policy = RetryPolicy::itunes();
        assert_eq!(policy.max_retries, 2);
        assert_eq!(policy.base_delay, Duration::from_millis(500));
    }

    #[test]
    fn test_calculate_delay_with_retry_after() {
        let policy = RetryPolicy::itunes();
        let delay = policy.calculate_delay(1, Some(Duration::from_secs(3)));
        assert_eq!(delay, Duration::from_secs(3));

        // Capped at max_delay
        let capped = policy.calculate_delay(0, Some(Duration::from_secs(600)));
        assert_eq!(capped, policy.max_delay);
    }

    #[test]
    fn test_calculate_delay_exponential_backoff() {
        let policy = RetryPolicy {
            jitter: 0.0,
            ..RetryPolicy::itunes()
        };
        assert_eq!(policy.calculate_delay(0, None), Duration::from_millis(500));
        assert_eq!(policy.calculate_delay(1, None), Duration::from_millis(1000));
        assert_eq!(policy.calculate_delay(2, None), Duration::from_millis(2000));
        assert_eq!(policy.calculate_delay(10, None), policy.max_delay);
    }

    #[test]
    fn test_jitter_stays_bounded() {
        let policy = RetryPolicy::itunes();
        for _ in 0..20 {
            let delay = policy.calculate_delay(0, None);
            assert!(delay >= Duration::from_millis(500));
            assert!(delay <= Duration::from_millis(550));
        }
    }

    #[test]
    fn test_retry_after_parsing() {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert("retry-after", "30".parse().unwrap());
        assert_eq!(retry_after(&headers), Some(Duration::from_secs(30)));

        headers.insert("retry-after", "Wed, 21 Oct 2015 07:28:00 GMT".parse().unwrap());
        assert_eq!(retry_after(&headers), None);
    }

    #[test]
    fn test_retryable_statuses() {
        assert!(is_retryable_status(StatusCode::TOO_MANY_REQUESTS));
        assert!(is_retryable_status(StatusCode::BAD_GATEWAY));
        assert!(is_retryable_status(StatusCode::SERVICE_UNAVAILABLE));
        assert!(!is_retryable_status(StatusCode::NOT_FOUND));
        assert!(!is_retryable_status(StatusCode::BAD_REQUEST));
    }
}
