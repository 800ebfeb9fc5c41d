use strum_macros::{AsRefStr, EnumString};
use weft_common::prelude::*;
use weft_common::WorkflowExecution;

use super::TransferTaskInfo;

#[derive(Clone, Copy, Debug, EnumString, AsRefStr, PartialEq, Eq, Hash)]
pub enum TaskType {
    Decision,
    Activity,
}

/// A task row of a task list. Created when a scheduled event gets its side-effect task
/// dispatched, leased by `TaskDao::get_tasks`, deleted by `TaskDao::complete_task`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskInfo {
    pub workflow_id: InlineStr,
    pub run_id: InlineStr,
    pub task_id: i64,
    pub task_list: InlineStr,
    pub task_type: TaskType,
    /// Event id of the scheduled event this task delivers
    pub schedule_id: i64,
    /// Time (ms) before which the task is invisible to pollers. Leasing pushes it out by the
    /// lock timeout, so an unacknowledged task resurfaces once the lease expires.
    pub visibility_time: i64,
    pub lock_token: InlineStr,
    /// How many times the task has been leased
    pub delivery_count: i32,
}

impl TaskInfo {
    pub fn new(
        execution: &WorkflowExecution,
        task_list: impl Into<InlineStr>,
        task_type: TaskType,
        schedule_id: i64,
    ) -> Self {
        Self {
            workflow_id: execution.workflow_id.clone(),
            run_id: execution.run_id.clone(),
            task_id: 0,
            task_list: task_list.into(),
            task_type,
            schedule_id,
            visibility_time: 0,
            lock_token: InlineStr::new(),
            delivery_count: 0,
        }
    }

    pub fn from_transfer_task(execution: &WorkflowExecution, transfer_task: &TransferTaskInfo) -> Self {
        Self::new(
            execution,
            transfer_task.task_list.clone(),
            transfer_task.task_type,
            transfer_task.schedule_id,
        )
    }

    pub fn workflow_execution(&self) -> WorkflowExecution {
        WorkflowExecution::new(self.workflow_id.clone(), self.run_id.clone())
    }
}

/// A leased task together with the store row id used to acknowledge it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskInfoWithId {
    pub row_id: InlineStr,
    pub info: TaskInfo,
}

impl TaskInfoWithId {
    pub fn new(row_id: impl Into<InlineStr>, info: TaskInfo) -> Self {
        Self {
            row_id: row_id.into(),
            info,
        }
    }
}
