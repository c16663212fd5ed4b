//! Application execution logic.
//!
//! Builds the executor from the validated configuration, sends the hook
//! once, and writes the response body to stdout.

use std::io::Write;

use thiserror::Error;
use tokio::signal;
use tokio_util::sync::CancellationToken;

use hookexec::config::{ConfigError, ValidatedConfig};
use hookexec::hook::{HookError, HookExecutor, HttpClient, TemplateData, TemplateRenderer};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// The executor rejected the configuration.
    #[error("Failed to create hook executor: {0}")]
    Setup(#[source] ConfigError),

    /// Rendering, sending, or reading the response failed.
    #[error(transparent)]
    Hook(#[from] HookError),

    /// The response body could not be written out.
    #[error("Failed to write response body: {0}")]
    Output(#[source] std::io::Error),
}

/// Executes the configured hook once.
///
/// Ctrl+C cancels the in-flight request.
///
/// # Errors
///
/// Returns an error if the executor cannot be built, the hook fails,
/// or stdout cannot be written.
#[cfg(not(tarpaulin_include))]
pub async fn execute(config: ValidatedConfig) -> Result<(), RunError> {
    let executor = HookExecutor::new(config.hook, None).map_err(RunError::Setup)?;

    let cancel = CancellationToken::new();
    let on_signal = cancel.clone();
    tokio::spawn(async move {
        if signal::ctrl_c().await.is_ok() {
            tracing::info!("Received Ctrl+C, cancelling request");
            on_signal.cancel();
        }
    });

    send_and_print(&executor, &config.data, &cancel, || std::io::stdout().lock()).await
}

/// Sends the hook and writes the response body to the writer returned by
/// `open_output`.
///
/// `open_output` runs only once a response has arrived, so the output is
/// never held across the request. Any HTTP status is a successful run;
/// non-2xx statuses are logged as warnings.
pub async fn send_and_print<C, R, W, F>(
    executor: &HookExecutor<C, R>,
    data: &TemplateData,
    cancel: &CancellationToken,
    open_output: F,
) -> Result<(), RunError>
where
    C: HttpClient,
    R: TemplateRenderer,
    W: Write,
    F: FnOnce() -> W,
{
    let response = executor.execute(cancel, data).await?;

    if response.is_success() {
        tracing::info!(status = %response.status, bytes = response.body.len(), "Hook executed");
    } else {
        tracing::warn!(status = %response.status, bytes = response.body.len(), "Hook returned non-success status");
    }

    let mut out = open_output();
    out.write_all(&response.body).map_err(RunError::Output)?;
    out.flush().map_err(RunError::Output)
}
