use serde::{Deserialize, Serialize};

use crate::history::HistoryEvent;
use crate::metadata::{ActivityType, WorkflowExecution, WorkflowType};
use crate::prelude::*;

/// An activity task handed to a worker.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PollForActivityTaskResponse {
    /// Opaque token the worker presents when it responds
    pub task_token: Vec<u8>,
    pub workflow_execution: WorkflowExecution,
    pub activity_id: InlineStr,
    pub activity_type: ActivityType,
    pub input: Vec<u8>,
    pub started_event_id: i64,
}

/// A decision task handed to a decider, carrying the history the decider replays.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PollForDecisionTaskResponse {
    /// Opaque token the decider presents when it responds
    pub task_token: Vec<u8>,
    pub workflow_execution: WorkflowExecution,
    pub workflow_type: WorkflowType,
    /// Started event id of the last decision the decider completed, if any
    pub previous_started_event_id: Option<i64>,
    pub started_event_id: i64,
    pub history: Vec<HistoryEvent>,
}
