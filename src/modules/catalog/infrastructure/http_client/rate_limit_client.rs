//! HTTP client with client-side rate limiting and retry logic
//!
//! Refreshes can be triggered as fast as a user can click, so requests are
//! paced through a `governor` quota before they reach the upstream service.

use super::retry_policy::{is_retryable_error, is_retryable_status, retry_after, RetryPolicy};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::LogContext;
use governor::{
    clock::DefaultClock,
    middleware::NoOpMiddleware,
    state::{direct::NotKeyed, InMemoryState},
    Quota, RateLimiter as GovernorRateLimiter,
};
use reqwest::{header, Client, Response, StatusCode};
use std::num::NonZeroU32;
use std::time::{Duration, Instant};
use tokio::time::sleep;

type DirectRateLimiter = GovernorRateLimiter<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>;

/// HTTP client that handles rate limiting and retries
pub struct RateLimitClient {
    client: Client,
    rate_limiter: DirectRateLimiter,
    retry_policy: RetryPolicy,
    provider_name: String,
}

impl RateLimitClient {
    /// Client for the iTunes RSS feed: one request every 2s on average,
    /// bursts of 3.
    pub fn for_itunes(timeout: Duration, user_agent: &str) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self::new(
            "iTunes",
            client,
            RetryPolicy::itunes(),
            Self::create_rate_limiter(0.5, 3),
        ))
    }

    pub fn new(
        provider_name: &str,
        client: Client,
        retry_policy: RetryPolicy,
        rate_limiter: DirectRateLimiter,
    ) -> Self {
        Self {
            client,
            rate_limiter,
            retry_policy,
            provider_name: provider_name.to_string(),
        }
    }

    /// Replace the retry policy (tests use `RetryPolicy::no_retries`)
    pub fn with_retry_policy(mut self, retry_policy: RetryPolicy) -> Self {
        self.retry_policy = retry_policy;
        self
    }

    /// Create a rate limiter with specified requests per second and burst capacity
    fn create_rate_limiter(requests_per_second: f64, burst_size: u32) -> DirectRateLimiter {
        let period = if requests_per_second > 0.0 {
            Duration::from_secs_f64(1.0 / requests_per_second)
        } else {
            Duration::from_secs(3600)
        };

        let burst = NonZeroU32::new(burst_size.max(1)).unwrap_or(NonZeroU32::MIN);
        let quota = Quota::with_period(period)
            .unwrap_or_else(|| Quota::per_second(NonZeroU32::MIN))
            .allow_burst(burst);

        GovernorRateLimiter::direct(quota)
    }

    /// GET a URL and return the body text
    pub async fn get_text(&self, url: &str) -> AppResult<String> {
        let started = Instant::now();
        LogContext::feed_request(&self.provider_name, url);

        let response = self.request_with_retries(url).await?;
        let text = response.text().await.map_err(|e| {
            AppError::SerializationError(format!(
                "Failed to read {} response: {}",
                self.provider_name, e
            ))
        })?;

        LogContext::feed_response(&self.provider_name, url, text.len(), started.elapsed());
        Ok(text)
    }

    /// Send a GET with rate limiting and retries; returns the first 2xx response
    async fn request_with_retries(&self, url: &str) -> AppResult<Response> {
        let attempts = self.retry_policy.max_retries + 1;

        for attempt in 0..=self.retry_policy.max_retries {
            // Wait for rate limiter before attempting request
            self.rate_limiter.until_ready().await;

            let result = self
                .client
                .get(url)
                .header(header::ACCEPT, "application/json")
                .send()
                .await;

            let can_retry = attempt < self.retry_policy.max_retries;

            match result {
                Ok(response) if response.status().is_success() => return Ok(response),
                Ok(response) => {
                    let status = response.status();
                    if is_retryable_status(status) && can_retry {
                        let delay = self
                            .retry_policy
                            .calculate_delay(attempt, retry_after(response.headers()));
                        tracing::warn!(
                            "{} API returned {} (attempt {}/{}). Retrying in {:?}",
                            self.provider_name,
                            status,
                            attempt + 1,
                            attempts,
                            delay
                        );
                        sleep(delay).await;
                        continue;
                    }
                    return Err(self.status_error(status, attempt + 1));
                }
                Err(e) => {
                    if is_retryable_error(&e) && can_retry {
                        let delay = self.retry_policy.calculate_delay(attempt, None);
                        tracing::warn!(
                            "{} API request failed (attempt {}/{}): {}. Retrying in {:?}",
                            self.provider_name,
                            attempt + 1,
                            attempts,
                            e,
                            delay
                        );
                        sleep(delay).await;
                        continue;
                    }
                    return Err(AppError::from(e));
                }
            }
        }

        Err(AppError::ExternalServiceError(format!(
            "{} API request failed after {} attempts",
            self.provider_name, attempts
        )))
    }

    /// Convert a final non-success status to an error
    fn status_error(&self, status: StatusCode, attempts: u32) -> AppError {
        match status {
            StatusCode::TOO_MANY_REQUESTS => AppError::RateLimitError(format!(
                "{} API rate limit exceeded after {} attempts",
                self.provider_name, attempts
            )),
            StatusCode::NOT_FOUND => {
                AppError::NotFound(format!("{} feed not found", self.provider_name))
            }
            _ if status.is_server_error() => AppError::ExternalServiceError(format!(
                "{} service unavailable: {}",
                self.provider_name, status
            )),
            _ => AppError::ApiError(format!(
                "{} API returned error: {}",
                self.provider_name, status
            )),
        }
    }

    /// Check if a request can be made now (for testing/debugging)
    pub fn can_make_request_now(&self) -> bool {
        self.rate_limiter.check().is_ok()
    }

    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }
}
