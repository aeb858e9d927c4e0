use rand::Rng;
use reqwest::StatusCode;
use reqwest_retry::{
    default_on_request_failure, RetryDecision, Retryable, RetryableStrategy,
    RetryPolicy as BackoffPolicy,
};
use std::ops::RangeInclusive;
use std::time::{Duration, SystemTime};

/// How often and how patiently a failed request is repeated.
///
/// Only network failures, HTTP 429 and HTTP 5xx are retried. Between attempts the
/// fetcher sleeps for a uniformly random duration within `jitter`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total number of attempts, including the first one. `0` is treated as `1`.
    pub max_attempts: u32,
    pub jitter: RangeInclusive<Duration>,
}

impl Default for RetryPolicy {
    /// Ten attempts, waiting 10 to 100 ms between them.
    fn default() -> Self {
        Self {
            max_attempts: 10,
            jitter: Duration::from_millis(10)..=Duration::from_millis(100),
        }
    }
}

impl RetryPolicy {
    /// A single attempt, failures are returned immediately.
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            jitter: Duration::ZERO..=Duration::ZERO,
        }
    }

    fn next_wait(&self) -> Duration {
        let (low, high) = (*self.jitter.start(), *self.jitter.end());
        if high <= low {
            return low;
        }
        rand::thread_rng().gen_range(low..=high)
    }
}

impl BackoffPolicy for RetryPolicy {
    fn should_retry(&self, _request_start_time: SystemTime, n_past_retries: u32) -> RetryDecision {
        if n_past_retries.saturating_add(1) >= self.max_attempts.max(1) {
            return RetryDecision::DoNotRetry;
        }
        RetryDecision::Retry {
            execute_after: SystemTime::now() + self.next_wait(),
        }
    }
}

/// Classifies responses for the retry middleware: connection failures, HTTP 429 and
/// HTTP 5xx are transient, every other error status is final.
pub(crate) struct TransientFailures;

impl RetryableStrategy for TransientFailures {
    fn handle(
        &self,
        res: &Result<reqwest::Response, reqwest_middleware::Error>,
    ) -> Option<Retryable> {
        match res {
            Ok(response) => {
                let status = response.status();
                if status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error() {
                    Some(Retryable::Transient)
                } else if status.is_client_error() {
                    Some(Retryable::Fatal)
                } else {
                    None
                }
            }
            Err(error) => default_on_request_failure(error),
        }
    }
}
