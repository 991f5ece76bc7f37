use std::time::Duration;

use async_trait::async_trait;
use axum::http::StatusCode;
use tokio::{sync::watch, time::sleep};

use crate::app::{envy::Envy, models::api_error::ApiError};

use super::enums::generation_job_status::GenerationJobStatus;

/// One status-query result for a pending generation job.
#[derive(Debug, Clone)]
pub struct JobSnapshot {
    /// None when the provider reports a status this service does not know;
    /// such jobs are still in flight.
    pub status: Option<GenerationJobStatus>,
    pub images: Option<Vec<String>>,
    pub error: Option<String>,
    pub progress: Option<String>,
}

#[async_trait]
pub trait JobStatusSource {
    async fn job_snapshot(&self, job_id: &str) -> Result<JobSnapshot, ApiError>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum PollOutcome {
    Succeeded(Vec<String>),
    Canceled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PollError {
    /// The status query itself kept failing (transport, auth, parse).
    StatusQuery(String),
    /// The provider reported the job failed or canceled it.
    GenerationFailed(String),
    /// No terminal status within the attempt budget.
    GenerationTimeout,
    /// Terminal success with no usable output.
    EmptyResult,
}

impl PollError {
    pub fn value(&self) -> ApiError {
        match self {
            Self::StatusQuery(_) => ApiError {
                code: StatusCode::BAD_GATEWAY,
                message: "Failed to check generation status.".to_string(),
            },
            Self::GenerationFailed(message) => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: message.to_string(),
            },
            Self::GenerationTimeout => ApiError {
                code: StatusCode::GATEWAY_TIMEOUT,
                message: "Image generation timed out. Please try again.".to_string(),
            },
            Self::EmptyResult => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "The provider generated no images.".to_string(),
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct PollSettings {
    pub poll_interval: Duration,
    pub max_attempts: u32,
    /// Consecutive status-query failures tolerated before giving up. The
    /// counter resets on any successful query.
    pub max_consecutive_query_failures: u32,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(1000),
            max_attempts: 120,
            max_consecutive_query_failures: 3,
        }
    }
}

impl PollSettings {
    pub fn from_envy(envy: &Envy) -> Self {
        let defaults = Self::default();

        Self {
            poll_interval: match envy.poll_interval_ms {
                Some(ms) => Duration::from_millis(ms),
                None => defaults.poll_interval,
            },
            max_attempts: envy.poll_max_attempts.unwrap_or(defaults.max_attempts),
            max_consecutive_query_failures: defaults.max_consecutive_query_failures,
        }
    }
}

/// Drives a submitted generation job to a terminal state by querying its
/// status until it succeeds, fails, or the attempt budget runs out.
///
/// A terminal failure reported by the provider is never retried. Transient
/// status-query failures are absorbed up to the configured consecutive
/// count; each failed query still consumes an attempt.
pub struct JobPoller<'a, S: JobStatusSource> {
    source: &'a S,
    settings: PollSettings,
}

impl<'a, S: JobStatusSource> JobPoller<'a, S> {
    pub fn new(source: &'a S, settings: PollSettings) -> Self {
        Self { source, settings }
    }

    pub async fn poll<F>(
        &self,
        job_id: &str,
        mut cancel: watch::Receiver<bool>,
        on_progress: F,
    ) -> Result<PollOutcome, PollError>
    where
        F: Fn(&str),
    {
        if job_id.is_empty() {
            return Err(PollError::StatusQuery("Missing job id.".to_string()));
        }

        let mut attempts: u32 = 0;
        let mut consecutive_query_failures: u32 = 0;

        loop {
            if *cancel.borrow() {
                return Ok(PollOutcome::Canceled);
            }

            attempts += 1;

            match self.source.job_snapshot(job_id).await {
                Ok(snapshot) => {
                    consecutive_query_failures = 0;

                    match snapshot.status {
                        Some(GenerationJobStatus::Succeeded) => {
                            return match snapshot.images {
                                Some(images) if !images.is_empty() => {
                                    Ok(PollOutcome::Succeeded(images))
                                }
                                _ => Err(PollError::EmptyResult),
                            };
                        }
                        Some(status) if status.is_terminal() => {
                            tracing::error!("poll job {} reached {}", job_id, status.value());
                            return Err(PollError::GenerationFailed(
                                snapshot
                                    .error
                                    .unwrap_or("Image generation failed.".to_string()),
                            ));
                        }
                        _ => {
                            if let Some(progress) = &snapshot.progress {
                                on_progress(progress);
                            }
                        }
                    }
                }
                Err(e) => {
                    consecutive_query_failures += 1;
                    tracing::warn!(
                        "poll job {} status query failed ({}/{}): {}",
                        job_id,
                        consecutive_query_failures,
                        self.settings.max_consecutive_query_failures,
                        e.message
                    );

                    if consecutive_query_failures >= self.settings.max_consecutive_query_failures {
                        return Err(PollError::StatusQuery(e.message));
                    }
                }
            }

            if attempts >= self.settings.max_attempts {
                tracing::error!("poll job {} ran out of attempts", job_id);
                return Err(PollError::GenerationTimeout);
            }

            // The pinned sleep keeps its deadline across select rounds, so a
            // non-cancel change on the watch never shortens the interval.
            let wait = sleep(self.settings.poll_interval);
            tokio::pin!(wait);

            loop {
                tokio::select! {
                    changed = cancel.changed() => match changed {
                        Ok(_) => {
                            if *cancel.borrow() {
                                return Ok(PollOutcome::Canceled);
                            }
                        }
                        // Sender dropped, cancellation can no longer happen.
                        Err(_) => {
                            wait.as_mut().await;
                            break;
                        }
                    },
                    _ = &mut wait => break,
                }
            }
        }
    }
}
