use weft_common::prelude::*;
use weft_common::WorkflowExecution;

use crate::model::{TransferTaskInfo, WorkflowExecutionInfo};

#[derive(Clone, Debug, PartialEq)]
pub struct CreateWorkflowExecutionRequest {
    pub execution_info: WorkflowExecutionInfo,
    pub transfer_tasks: Vec<TransferTaskInfo>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateWorkflowExecutionRequest {
    /// The full new state, history included
    pub execution_info: WorkflowExecutionInfo,
    /// Side-effect tasks committed together with the new state
    pub transfer_tasks: Vec<TransferTaskInfo>,
    /// `next_event_id` the caller read. The update is rejected with `ConditionFailed` when the
    /// stored value differs.
    pub condition: i64,
}

/// Data access layer for storing workflow executions.
pub trait ExecutionDao: Send + Sync {
    /// Fails with `WorkflowExecutionAlreadyStarted` when the run already exists.
    fn create_workflow_execution(&self, request: &CreateWorkflowExecutionRequest) -> TegResult<()>;

    /// Fails with `EntityNotExists` when the run is unknown.
    fn get_workflow_execution(&self, execution: &WorkflowExecution)
        -> TegResult<WorkflowExecutionInfo>;

    /// Compare-and-swap on `next_event_id`. Fails with `ConditionFailed` on a version mismatch
    /// and with `EntityNotExists` when the run is unknown.
    fn update_workflow_execution(&self, request: &UpdateWorkflowExecutionRequest) -> TegResult<()>;
}
