use serde::{Deserialize, Serialize};

use super::{ActivityType, TaskList};
use crate::prelude::*;

/// One instruction returned by a decider when it completes a decision task. Decisions are
/// applied to the history in the order they were returned.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Decision {
    ScheduleActivityTask(ScheduleActivityTaskDecisionAttributes),
    CompleteWorkflowExecution(CompleteWorkflowExecutionDecisionAttributes),
    FailWorkflowExecution(FailWorkflowExecutionDecisionAttributes),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScheduleActivityTaskDecisionAttributes {
    /// Unique within the workflow execution, chosen by the decider
    pub activity_id: InlineStr,
    pub activity_type: ActivityType,
    /// Task list the activity is dispatched to. Falls back to the workflow's task list if unset
    pub task_list: Option<TaskList>,
    pub input: Vec<u8>,
    pub schedule_to_close_timeout_seconds: i32,
    pub schedule_to_start_timeout_seconds: i32,
    pub start_to_close_timeout_seconds: i32,
    pub heartbeat_timeout_seconds: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompleteWorkflowExecutionDecisionAttributes {
    pub result: Vec<u8>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FailWorkflowExecutionDecisionAttributes {
    pub reason: InlineStr,
    pub details: Vec<u8>,
}
