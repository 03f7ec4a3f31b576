//! Selection collection - turn the current selection into a sync batch.

use tracing::{debug, warn};

use crate::error::HostError;
use crate::pipeline::transform::transform_attributes;
use crate::traits::host::EditorHost;
use crate::types::config::PipelineConfig;
use crate::types::record::SyncRecord;

/// Convert the host's current selection into a batch of sync records.
///
/// Entities whose kind is not the target kind are silently skipped; the
/// remaining entities are transformed in selection order. A host without
/// a selection capability yields an empty batch - that is a precondition
/// violation on the host side, not a runtime error here.
pub async fn collect_sync_records<H: EditorHost>(
    host: &H,
    config: &PipelineConfig,
) -> Vec<SyncRecord> {
    let entities = match host.selection().await {
        Ok(entities) => entities,
        Err(HostError::SelectionUnavailable) => {
            warn!(host = host.name(), "selection unavailable, nothing to sync");
            return Vec::new();
        }
        Err(e) => {
            warn!(host = host.name(), error = %e, "failed to read selection, nothing to sync");
            return Vec::new();
        }
    };

    let selected = entities.len();
    let mut records = Vec::with_capacity(selected);

    for entity in &entities {
        if !entity.is_kind(&config.target_kind) {
            debug!(name = %entity.name, kind = %entity.kind, "skipping non-target entity");
            continue;
        }

        let data = transform_attributes(host, &entity.attributes, config).await;
        records.push(SyncRecord::new(entity.name.clone(), data));
    }

    debug!(
        selected,
        records = records.len(),
        kind = %config.target_kind,
        "assembled sync batch"
    );

    records
}
