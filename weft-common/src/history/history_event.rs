use enum_as_inner::EnumAsInner;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumDiscriminants, EnumString};

use crate::metadata::{ActivityType, TaskList, WorkflowType};
use crate::prelude::*;

/// Id of the first event of every history.
pub const FIRST_EVENT_ID: i64 = 1;
/// Placeholder for "no event". Never assigned to a real event.
pub const EMPTY_EVENT_ID: i64 = 0;

/// One entry of a workflow execution's append-only history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEvent {
    pub event_id: i64,
    /// Milliseconds since epoch
    pub timestamp: i64,
    pub attributes: HistoryEventAttributes,
}

impl HistoryEvent {
    pub fn new(event_id: i64, timestamp: i64, attributes: HistoryEventAttributes) -> Self {
        Self {
            event_id,
            timestamp,
            attributes,
        }
    }

    pub fn event_type(&self) -> EventType {
        EventType::from(&self.attributes)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, EnumAsInner, EnumDiscriminants)]
#[strum_discriminants(name(EventType), derive(AsRefStr, EnumString, Hash))]
pub enum HistoryEventAttributes {
    WorkflowExecutionStarted(WorkflowExecutionStartedEventAttributes),
    WorkflowExecutionCompleted(WorkflowExecutionCompletedEventAttributes),
    WorkflowExecutionFailed(WorkflowExecutionFailedEventAttributes),
    DecisionTaskScheduled(DecisionTaskScheduledEventAttributes),
    DecisionTaskStarted(DecisionTaskStartedEventAttributes),
    DecisionTaskCompleted(DecisionTaskCompletedEventAttributes),
    ActivityTaskScheduled(ActivityTaskScheduledEventAttributes),
    ActivityTaskStarted(ActivityTaskStartedEventAttributes),
    ActivityTaskCompleted(ActivityTaskCompletedEventAttributes),
    ActivityTaskFailed(ActivityTaskFailedEventAttributes),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkflowExecutionStartedEventAttributes {
    pub workflow_type: WorkflowType,
    pub task_list: TaskList,
    pub input: Vec<u8>,
    pub execution_start_to_close_timeout_seconds: i32,
    pub task_start_to_close_timeout_seconds: i32,
    pub identity: InlineStr,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkflowExecutionCompletedEventAttributes {
    pub result: Vec<u8>,
    pub decision_task_completed_event_id: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkflowExecutionFailedEventAttributes {
    pub reason: InlineStr,
    pub details: Vec<u8>,
    pub decision_task_completed_event_id: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DecisionTaskScheduledEventAttributes {
    pub task_list: TaskList,
    pub start_to_close_timeout_seconds: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DecisionTaskStartedEventAttributes {
    pub scheduled_event_id: i64,
    pub identity: InlineStr,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DecisionTaskCompletedEventAttributes {
    pub scheduled_event_id: i64,
    pub started_event_id: i64,
    pub execution_context: Vec<u8>,
    pub identity: InlineStr,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivityTaskScheduledEventAttributes {
    pub activity_id: InlineStr,
    pub activity_type: ActivityType,
    pub task_list: TaskList,
    pub input: Vec<u8>,
    pub schedule_to_close_timeout_seconds: i32,
    pub schedule_to_start_timeout_seconds: i32,
    pub start_to_close_timeout_seconds: i32,
    pub heartbeat_timeout_seconds: i32,
    pub decision_task_completed_event_id: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivityTaskStartedEventAttributes {
    pub scheduled_event_id: i64,
    pub identity: InlineStr,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivityTaskCompletedEventAttributes {
    pub scheduled_event_id: i64,
    pub started_event_id: i64,
    pub result: Vec<u8>,
    pub identity: InlineStr,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivityTaskFailedEventAttributes {
    pub scheduled_event_id: i64,
    pub started_event_id: i64,
    pub reason: InlineStr,
    pub details: Vec<u8>,
    pub identity: InlineStr,
}
