use serde::{Deserialize, Serialize};
use weft_common::prelude::*;
use weft_common::WorkflowExecution;

/// Identifies the scheduled event a task was handed out for. Returned to pollers as opaque
/// bytes and presented back when they respond.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskToken {
    pub workflow_id: InlineStr,
    pub run_id: InlineStr,
    pub schedule_id: i64,
}

impl TaskToken {
    pub fn new(execution: &WorkflowExecution, schedule_id: i64) -> Self {
        Self {
            workflow_id: execution.workflow_id.clone(),
            run_id: execution.run_id.clone(),
            schedule_id,
        }
    }

    pub fn workflow_execution(&self) -> WorkflowExecution {
        WorkflowExecution::new(self.workflow_id.clone(), self.run_id.clone())
    }
}

pub trait TaskTokenSerializer: Send + Sync {
    fn serialize(&self, token: &TaskToken) -> TegResult<Vec<u8>>;
    fn deserialize(&self, data: &[u8]) -> TegResult<TaskToken>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct JsonTaskTokenSerializer;

impl TaskTokenSerializer for JsonTaskTokenSerializer {
    fn serialize(&self, token: &TaskToken) -> TegResult<Vec<u8>> {
        Ok(serde_json::to_vec(token)?)
    }

    fn deserialize(&self, data: &[u8]) -> TegResult<TaskToken> {
        serde_json::from_slice(data)
            .map_err(|e| ErrorCode::SerializationFailed(format!("invalid task token: {}", e)))
    }
}
