use serde::{Deserialize, Serialize};

use crate::core::{Size, ViewportState};
use crate::error::{OverlayError, OverlayResult};
use crate::extensions::{Annotation, ComposerPhase};
use crate::interaction::InteractionMode;
use crate::render::ComparisonToggle;

use super::{InteractivityShell, OverlayFeatures, OverlayHost};

pub const OVERLAY_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable view of the whole overlay state, for debugging, persistence
/// and host-side diffing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlaySnapshot {
    pub container: Size,
    pub viewport: ViewportState,
    pub mode: InteractionMode,
    pub features: OverlayFeatures,
    pub composer: ComposerPhase,
    pub annotations: Vec<Annotation>,
    pub drill_level: u8,
    pub drill_path: Vec<String>,
    pub drill_external: bool,
    pub comparison: Vec<ComparisonToggle>,
    pub editing_point_id: Option<String>,
    pub points_len: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlaySnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: OverlaySnapshot,
}

impl OverlaySnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> OverlayResult<String> {
        let payload = OverlaySnapshotJsonContractV1 {
            schema_version: OVERLAY_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            OverlayError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> OverlayResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<OverlaySnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: OverlaySnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            OverlayError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != OVERLAY_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(OverlayError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<C, H: OverlayHost> InteractivityShell<C, H> {
    #[must_use]
    pub fn snapshot(&self) -> OverlaySnapshot {
        OverlaySnapshot {
            container: self.container,
            viewport: self.viewport.state(),
            mode: self.interaction_mode(),
            features: self.config.features,
            composer: self.annotations.composer_phase(),
            annotations: self.annotations.iter().cloned().collect(),
            drill_level: self.drill.level(),
            drill_path: self.drill.path().to_vec(),
            drill_external: self.drill.is_external(),
            comparison: self
                .comparison
                .series()
                .iter()
                .map(|series| ComparisonToggle {
                    id: series.id.clone(),
                    title: series.title.clone(),
                    visible: series.visible,
                })
                .collect(),
            editing_point_id: self.editor.editing_id().map(str::to_owned),
            points_len: self.points.len(),
        }
    }
}
