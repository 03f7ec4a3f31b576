//! Readiness gate - bounded polling for host capabilities.
//!
//! The editor constructs its globals some time after page load, so
//! attachment races startup. The gate polls the host probe with
//! exponential backoff until every capability is present, and gives up
//! with an explicit error after a bounded number of attempts instead of
//! polling forever in silence.

use tracing::debug;

use crate::error::GateError;
use crate::traits::host::{EditorHost, HostProbe};
use crate::types::config::ReadinessConfig;

/// Wait until the host reports every required capability.
///
/// Probes once per attempt, sleeping between attempts with a doubling
/// delay capped at `config.max_delay`. Returns the satisfied probe on
/// success; after `config.max_attempts` failed probes, returns
/// [`GateError::TimedOut`] naming the capabilities still missing.
pub async fn await_readiness<H: EditorHost>(
    host: &H,
    config: &ReadinessConfig,
) -> Result<HostProbe, GateError> {
    let mut delay = config.initial_delay;
    let mut last = HostProbe::default();

    for attempt in 1..=config.max_attempts {
        last = host.probe().await;
        if last.is_ready() {
            debug!(host = host.name(), attempt, "host capabilities ready");
            return Ok(last);
        }

        debug!(
            host = host.name(),
            attempt,
            missing = ?last.missing(),
            "host not ready, waiting"
        );

        if attempt < config.max_attempts {
            tokio::time::sleep(delay).await;
            delay = (delay * 2).min(config.max_delay);
        }
    }

    Err(GateError::TimedOut {
        attempts: config.max_attempts,
        last,
    })
}
