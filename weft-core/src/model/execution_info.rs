use strum_macros::{AsRefStr, EnumString};
use weft_common::prelude::*;
use weft_common::{WorkflowExecution, EMPTY_EVENT_ID, FIRST_EVENT_ID};

use super::TaskType;

#[derive(Clone, Copy, Debug, EnumString, AsRefStr, PartialEq, Eq)]
pub enum WorkflowState {
    Created,
    Running,
    Completed,
}

impl WorkflowState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, WorkflowState::Completed)
    }
}

/// Everything the execution store keeps for one run. Loaded by value on every read; the
/// only way to change it is a conditional `update_workflow_execution`.
#[derive(Clone, Debug, PartialEq)]
pub struct WorkflowExecutionInfo {
    pub workflow_id: InlineStr,
    pub run_id: InlineStr,
    pub task_list: InlineStr,
    /// Serialized history, see `HistorySerializer`
    pub history: Vec<u8>,
    /// Opaque decider state from the last completed decision
    pub execution_context: Vec<u8>,
    pub state: WorkflowState,
    /// Id the next appended event gets. Doubles as the optimistic concurrency version
    pub next_event_id: i64,
    /// Started event id of the last completed decision
    pub last_processed_event: i64,
    pub last_updated_timestamp: i64,
    pub decision_pending: bool,
}

impl WorkflowExecutionInfo {
    pub fn new(execution: &WorkflowExecution, task_list: impl Into<InlineStr>) -> Self {
        Self {
            workflow_id: execution.workflow_id.clone(),
            run_id: execution.run_id.clone(),
            task_list: task_list.into(),
            history: Vec::new(),
            execution_context: Vec::new(),
            state: WorkflowState::Created,
            next_event_id: FIRST_EVENT_ID,
            last_processed_event: EMPTY_EVENT_ID,
            last_updated_timestamp: 0,
            decision_pending: false,
        }
    }

    pub fn workflow_execution(&self) -> WorkflowExecution {
        WorkflowExecution::new(self.workflow_id.clone(), self.run_id.clone())
    }
}

/// Side-effect task derived from a history mutation, committed atomically with it. The
/// transfer processor turns these into task list rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferTaskInfo {
    pub task_type: TaskType,
    pub task_list: InlineStr,
    pub schedule_id: i64,
}

impl TransferTaskInfo {
    pub fn decision(task_list: impl Into<InlineStr>, schedule_id: i64) -> Self {
        Self {
            task_type: TaskType::Decision,
            task_list: task_list.into(),
            schedule_id,
        }
    }

    pub fn activity(task_list: impl Into<InlineStr>, schedule_id: i64) -> Self {
        Self {
            task_type: TaskType::Activity,
            task_list: task_list.into(),
            schedule_id,
        }
    }
}
