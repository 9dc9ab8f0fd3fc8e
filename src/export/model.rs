// src/export/model.rs

use crate::core::calculator::FlowBlock;
use serde::Serialize;

/// Flat row for the CSV export of flow blocks.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct BlockExport {
    pub start: String,
    pub end: String,
    pub duration_minutes: i64,
    pub status: String,
    pub severity: String,
    pub message: String,
}

impl From<&FlowBlock> for BlockExport {
    fn from(b: &FlowBlock) -> Self {
        Self {
            start: b.start_time.to_string(),
            end: b.end_time.to_string(),
            duration_minutes: b.duration_minutes(),
            status: b.status.as_str().to_string(),
            severity: b.severity.as_str().to_string(),
            message: b.message.clone(),
        }
    }
}

pub(crate) fn blocks_to_rows(blocks: &[FlowBlock]) -> Vec<BlockExport> {
    blocks.iter().map(BlockExport::from).collect()
}
