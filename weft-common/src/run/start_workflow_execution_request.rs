use serde::{Deserialize, Serialize};

use crate::metadata::{TaskList, WorkflowType};
use crate::prelude::*;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StartWorkflowExecutionRequest {
    /// Business id of the workflow. A new run id is generated for every start
    pub workflow_id: InlineStr,
    pub workflow_type: WorkflowType,
    /// Task list the first decision task is dispatched to
    pub task_list: TaskList,
    pub input: Vec<u8>,
    pub execution_start_to_close_timeout_seconds: i32,
    /// Start-to-close timeout of every decision task of this execution
    pub task_start_to_close_timeout_seconds: i32,
    pub identity: InlineStr,
}

impl StartWorkflowExecutionRequest {
    pub fn validate(&self) -> TegResult<()> {
        if self.workflow_id.trim().is_empty() {
            str_err!(IllegalArgument, "workflowId cannot be empty")
        } else if self.workflow_type.name.trim().is_empty() {
            str_err!(IllegalArgument, "workflowType cannot be empty")
        } else if self.task_list.name.trim().is_empty() {
            str_err!(IllegalArgument, "taskList cannot be empty")
        } else if self.task_start_to_close_timeout_seconds < 0
            || self.execution_start_to_close_timeout_seconds < 0
        {
            str_err!(IllegalArgument, "timeouts cannot be negative")
        } else {
            Ok(())
        }
    }
}

impl TryFrom<serde_json::Value> for StartWorkflowExecutionRequest {
    type Error = ErrorCode;
    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        let request: StartWorkflowExecutionRequest = serde_json::from_value(value)
            .map_err(|e| ErrorCode::IllegalArgument(format!("invalid start request: {}", e)))?;
        request.validate()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_from_json() {
        let request = serde_json::json!({
            "workflowId": "wId",
            "workflowType": { "name": "wType" },
            "taskList": { "name": "testTaskList" },
            "input": [1, 2, 3],
            "taskStartToCloseTimeoutSeconds": 100,
            "identity": "testIdentity"
        });
        let request = StartWorkflowExecutionRequest::try_from(request).expect("parse failed");
        assert_eq!(request.workflow_id.as_str(), "wId");
        assert_eq!(request.workflow_type.name.as_str(), "wType");
        assert_eq!(request.input, vec![1, 2, 3]);
        assert_eq!(request.execution_start_to_close_timeout_seconds, 0);
    }

    #[test]
    fn missing_task_list_is_rejected() {
        let request = serde_json::json!({
            "workflowId": "wId",
            "workflowType": { "name": "wType" }
        });
        let err = StartWorkflowExecutionRequest::try_from(request).unwrap_err();
        assert!(err.is_illegal_argument());
    }
}
