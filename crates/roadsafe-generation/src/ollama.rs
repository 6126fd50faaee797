//! Ollama advisory generator.
//!
//! Posts non-streaming requests to `/api/generate`. Availability is a
//! last-known flag refreshed by [`OllamaGenerator::health_check`] and by every
//! generate call.
//!
//! Calls block on a private current-thread runtime; from inside an async
//! task that runtime lives on a scoped helper thread.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use roadsafe_core::config::GenerationConfig;
use roadsafe_core::errors::{GenerationError, RoadSafeResult};
use roadsafe_core::traits::IAdvisoryGenerator;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::prompt::build_prompt;

const BACKEND_NAME: &str = "ollama";

pub struct OllamaGenerator {
    base_url: String,
    model: String,
    temperature: f64,
    top_p: f64,
    timeout: Duration,
    health_check_timeout: Duration,
    available: AtomicBool,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: String,
    system: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Serialize)]
struct GenerateOptions {
    temperature: f64,
    top_p: f64,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct TagsResponse {
    #[serde(default)]
    pub models: Vec<ModelTag>,
}

#[derive(Debug, Deserialize)]
pub struct ModelTag {
    #[serde(default)]
    pub name: String,
}

impl TagsResponse {
    /// True when any installed model name contains `model` (case-insensitive).
    pub fn lists(&self, model: &str) -> bool {
        let wanted = model.to_lowercase();
        self.models
            .iter()
            .any(|m| m.name.to_lowercase().contains(&wanted))
    }
}

impl OllamaGenerator {
    /// Starts unavailable until a health check or a generate call succeeds.
    pub fn new(config: &GenerationConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
            top_p: config.top_p,
            timeout: Duration::from_secs(config.timeout_secs),
            health_check_timeout: Duration::from_secs(config.health_check_timeout_secs),
            available: AtomicBool::new(false),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Reachable and serving the configured model.
    pub fn health_check(&self) -> bool {
        let url = format!("{}/api/tags", self.base_url);
        let result = block_on(async {
            let response = reqwest::Client::new()
                .get(&url)
                .timeout(self.health_check_timeout)
                .send()
                .await?;
            let status = response.status();
            let tags = if status.is_success() {
                Some(response.json::<TagsResponse>().await?)
            } else {
                None
            };
            Ok::<_, reqwest::Error>((status, tags))
        });

        let healthy = match result {
            Ok(Ok((_, Some(tags)))) if tags.lists(&self.model) => {
                debug!(model = %self.model, "ollama health check passed");
                true
            }
            Ok(Ok((_, Some(_)))) => {
                warn!(model = %self.model, "ollama reachable but model not installed");
                false
            }
            Ok(Ok((status, None))) => {
                warn!(status = %status, "ollama health check failed");
                false
            }
            Ok(Err(e)) => {
                warn!(error = %e, "ollama unreachable");
                false
            }
            Err(e) => {
                warn!(error = %e, "ollama health check could not run");
                false
            }
        };
        self.available.store(healthy, Ordering::Relaxed);
        healthy
    }

    fn request(&self, query: &str, context: &str, system_prompt: &str) -> RoadSafeResult<String> {
        let url = format!("{}/api/generate", self.base_url);
        let body = GenerateRequest {
            model: &self.model,
            prompt: build_prompt(query, context),
            system: system_prompt,
            stream: false,
            options: GenerateOptions {
                temperature: self.temperature,
                top_p: self.top_p,
            },
        };

        block_on(async {
            // One client per runtime: pooled connections do not outlive it.
            let client = reqwest::Client::builder()
                .timeout(self.timeout)
                .build()
                .map_err(|e| GenerationError::RequestFailed {
                    reason: format!("http client: {e}"),
                })?;
            let response = client
                .post(&url)
                .json(&body)
                .send()
                .await
                .map_err(|e| self.transport_error(e))?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(GenerationError::BadStatus {
                    status: status.as_u16(),
                    body,
                });
            }

            let parsed: GenerateResponse =
                response
                    .json()
                    .await
                    .map_err(|e| GenerationError::MalformedResponse {
                        reason: e.to_string(),
                    })?;
            Ok::<String, GenerationError>(parsed.response)
        })?
        .map_err(Into::into)
    }

    fn transport_error(&self, e: reqwest::Error) -> GenerationError {
        if e.is_connect() {
            GenerationError::BackendUnavailable {
                backend: format!("{BACKEND_NAME} at {}", self.base_url),
            }
        } else {
            GenerationError::RequestFailed {
                reason: e.to_string(),
            }
        }
    }
}

impl IAdvisoryGenerator for OllamaGenerator {
    fn generate(&self, query: &str, context: &str, system_prompt: &str) -> RoadSafeResult<String> {
        let result = self.request(query, context, system_prompt);
        // Any answer from the server means it is up, even an error status.
        let reachable = !matches!(
            &result,
            Err(roadsafe_core::RoadSafeError::GenerationError(
                GenerationError::BackendUnavailable { .. } | GenerationError::RequestFailed { .. }
            ))
        );
        self.available.store(reachable, Ordering::Relaxed);
        result
    }

    fn name(&self) -> &str {
        BACKEND_NAME
    }

    fn is_available(&self) -> bool {
        self.available.load(Ordering::Relaxed)
    }
}

/// Drive `fut` to completion on a fresh current-thread runtime.
///
/// A runtime cannot be started on a thread that is already driving one, so
/// callers inside async code get a scoped helper thread instead.
fn block_on<F>(fut: F) -> Result<F::Output, GenerationError>
where
    F: Future + Send,
    F::Output: Send,
{
    if tokio::runtime::Handle::try_current().is_err() {
        return run_to_completion(fut);
    }
    std::thread::scope(|scope| {
        scope
            .spawn(|| run_to_completion(fut))
            .join()
            .map_err(|_| GenerationError::RequestFailed {
                reason: "generation thread panicked".to_string(),
            })?
    })
}

fn run_to_completion<F: Future>(fut: F) -> Result<F::Output, GenerationError> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| GenerationError::RequestFailed {
            reason: format!("runtime error: {e}"),
        })?;
    Ok(rt.block_on(fut))
}
