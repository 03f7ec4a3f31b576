//! Configuration types for the sync pipeline.
//!
//! Everything the original tool hardcoded - the target kind, the
//! reference-key suffix, the editor location patterns, the poll cadence -
//! is surfaced here with the original values as defaults.

use std::time::Duration;
use url::Url;

/// Configuration for the extraction pipeline.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Entity kind to process; everything else in the selection is
    /// silently skipped.
    pub target_kind: String,

    /// Key suffix marking an attribute as a registry reference.
    ///
    /// The host's schema convention stores texture references under keys
    /// ending in "Map" (diffuseMap, normalMap, ...). This is a naming
    /// heuristic, not a type system; keep it in sync with the host.
    pub reference_suffix: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            target_kind: "material".to_string(),
            reference_suffix: "Map".to_string(),
        }
    }
}

impl PipelineConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target kind.
    pub fn with_target_kind(mut self, kind: impl Into<String>) -> Self {
        self.target_kind = kind.into();
        self
    }

    /// Set the reference-key suffix.
    pub fn with_reference_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.reference_suffix = suffix.into();
        self
    }

    /// Whether a key follows the reference convention.
    ///
    /// An empty suffix matches nothing rather than everything.
    pub fn is_reference_key(&self, key: &str) -> bool {
        !self.reference_suffix.is_empty() && key.ends_with(&self.reference_suffix)
    }
}

/// Configuration for the readiness gate.
#[derive(Debug, Clone)]
pub struct ReadinessConfig {
    /// Maximum probe attempts before giving up.
    pub max_attempts: u32,

    /// Delay after the first failed probe.
    pub initial_delay: Duration,

    /// Upper bound for the backoff delay.
    pub max_delay: Duration,
}

impl Default for ReadinessConfig {
    fn default() -> Self {
        Self {
            max_attempts: 30,
            initial_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(10),
        }
    }
}

impl ReadinessConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the attempt limit.
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Set the initial backoff delay.
    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    /// Set the backoff delay cap.
    pub fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }
}

/// Where in the editor the tool is allowed to attach.
#[derive(Debug, Clone)]
pub struct ActivationConfig {
    /// Host name of the editor application.
    pub editor_host: String,

    /// Path prefixes of eligible editor views. Empty = any path under
    /// the editor host.
    pub path_prefixes: Vec<String>,
}

impl Default for ActivationConfig {
    fn default() -> Self {
        Self {
            editor_host: "playcanvas.com".to_string(),
            path_prefixes: vec!["/editor/scene/".to_string(), "/editor/project/".to_string()],
        }
    }
}

impl ActivationConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the editor host name.
    pub fn with_editor_host(mut self, host: impl Into<String>) -> Self {
        self.editor_host = host.into();
        self
    }

    /// Add an eligible path prefix.
    pub fn with_path_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.path_prefixes.push(prefix.into());
        self
    }

    /// Whether a page location is eligible for attachment.
    pub fn matches(&self, location: &Url) -> bool {
        if location.host_str() != Some(self.editor_host.as_str()) {
            return false;
        }

        if self.path_prefixes.is_empty() {
            return true;
        }

        let path = location.path();
        self.path_prefixes.iter().any(|p| path.starts_with(p.as_str()))
    }
}

/// Top-level configuration for a [`Syncer`](crate::pipeline::Syncer).
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Extraction pipeline settings.
    pub pipeline: PipelineConfig,

    /// Readiness gate settings.
    pub readiness: ReadinessConfig,

    /// Attachment eligibility settings.
    pub activation: ActivationConfig,

    /// Label for the trigger control installed in the editor.
    pub trigger_label: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            pipeline: PipelineConfig::default(),
            readiness: ReadinessConfig::default(),
            activation: ActivationConfig::default(),
            trigger_label: "Sync Materials".to_string(),
        }
    }
}

impl SyncConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pipeline config.
    pub fn with_pipeline(mut self, pipeline: PipelineConfig) -> Self {
        self.pipeline = pipeline;
        self
    }

    /// Set the readiness config.
    pub fn with_readiness(mut self, readiness: ReadinessConfig) -> Self {
        self.readiness = readiness;
        self
    }

    /// Set the activation config.
    pub fn with_activation(mut self, activation: ActivationConfig) -> Self {
        self.activation = activation;
        self
    }

    /// Set the trigger label.
    pub fn with_trigger_label(mut self, label: impl Into<String>) -> Self {
        self.trigger_label = label.into();
        self
    }
}
