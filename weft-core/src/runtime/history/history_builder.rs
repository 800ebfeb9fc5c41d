use chrono::Utc;
use weft_common::prelude::*;
use weft_common::{
    ActivityTaskCompletedEventAttributes, ActivityTaskFailedEventAttributes,
    ActivityTaskScheduledEventAttributes, ActivityTaskStartedEventAttributes,
    CompleteWorkflowExecutionDecisionAttributes, DecisionTaskCompletedEventAttributes,
    DecisionTaskScheduledEventAttributes, DecisionTaskStartedEventAttributes,
    FailWorkflowExecutionDecisionAttributes, HistoryEvent, HistoryEventAttributes,
    PollForActivityTaskRequest, PollForDecisionTaskRequest, RespondActivityTaskCompletedRequest,
    RespondActivityTaskFailedRequest, ScheduleActivityTaskDecisionAttributes,
    StartWorkflowExecutionRequest, TaskList, WorkflowExecutionCompletedEventAttributes,
    WorkflowExecutionFailedEventAttributes, WorkflowExecutionStartedEventAttributes,
    FIRST_EVENT_ID,
};

use super::HistorySerializer;

/// Where a scheduled decision or activity stands, derived from the history.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskProgress {
    /// No scheduled event of the expected kind carries the id
    NotScheduled,
    Scheduled,
    Started { started_event_id: i64 },
    /// Completed, or failed for activities
    Closed,
}

/// In-memory, append-only view of one execution's history.
///
/// Event ids are contiguous from `FIRST_EVENT_ID`, so the next id is always derived from the
/// event count. Every `add_*` method validates against the current events and returns `None`
/// without touching the history when the transition is not allowed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HistoryBuilder {
    events: Vec<HistoryEvent>,
}

impl HistoryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a builder from stored events, rejecting histories whose ids have gaps.
    pub fn load(events: Vec<HistoryEvent>) -> TegResult<Self> {
        for (position, event) in events.iter().enumerate() {
            let expected = FIRST_EVENT_ID + position as i64;
            if event.event_id != expected {
                return fmt_err!(
                    InvalidHistory,
                    "event at position {} has id {}, expected {}",
                    position,
                    event.event_id,
                    expected
                );
            }
        }
        Ok(Self { events })
    }

    pub fn deserialize(serializer: &dyn HistorySerializer, data: &[u8]) -> TegResult<Self> {
        Self::load(serializer.deserialize(data)?)
    }

    pub fn serialize(&self, serializer: &dyn HistorySerializer) -> TegResult<Vec<u8>> {
        serializer.serialize(&self.events)
    }

    pub fn next_event_id(&self) -> i64 {
        FIRST_EVENT_ID + self.events.len() as i64
    }

    pub fn events(&self) -> &[HistoryEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<HistoryEvent> {
        self.events
    }

    pub fn get_event(&self, event_id: i64) -> Option<&HistoryEvent> {
        self.events.iter().find(|x| x.event_id == event_id)
    }

    /// Events with an id strictly greater than `event_id`.
    pub fn events_after(&self, event_id: i64) -> &[HistoryEvent] {
        let start = event_id
            .saturating_sub(FIRST_EVENT_ID)
            .saturating_add(1)
            .clamp(0, self.events.len() as i64);
        &self.events[start as usize..]
    }

    pub fn workflow_started_attributes(&self) -> Option<&WorkflowExecutionStartedEventAttributes> {
        self.events
            .first()
            .and_then(|x| x.attributes.as_workflow_execution_started())
    }

    pub fn activity_scheduled_attributes(
        &self,
        schedule_id: i64,
    ) -> Option<&ActivityTaskScheduledEventAttributes> {
        self.get_event(schedule_id)
            .and_then(|x| x.attributes.as_activity_task_scheduled())
    }

    pub fn is_workflow_closed(&self) -> bool {
        self.events.iter().any(|x| {
            matches!(
                x.attributes,
                HistoryEventAttributes::WorkflowExecutionCompleted(_)
                    | HistoryEventAttributes::WorkflowExecutionFailed(_)
            )
        })
    }

    pub fn decision_task_progress(&self, schedule_id: i64) -> TaskProgress {
        match self.get_event(schedule_id) {
            Some(x) if x.attributes.as_decision_task_scheduled().is_some() => {}
            _ => return TaskProgress::NotScheduled,
        }

        let mut progress = TaskProgress::Scheduled;
        for event in self.events_after(schedule_id) {
            match &event.attributes {
                HistoryEventAttributes::DecisionTaskStarted(x)
                    if x.scheduled_event_id == schedule_id =>
                {
                    progress = TaskProgress::Started {
                        started_event_id: event.event_id,
                    }
                }
                HistoryEventAttributes::DecisionTaskCompleted(x)
                    if x.scheduled_event_id == schedule_id =>
                {
                    return TaskProgress::Closed
                }
                _ => {}
            }
        }
        progress
    }

    pub fn activity_task_progress(&self, schedule_id: i64) -> TaskProgress {
        if self.activity_scheduled_attributes(schedule_id).is_none() {
            return TaskProgress::NotScheduled;
        }

        let mut progress = TaskProgress::Scheduled;
        for event in self.events_after(schedule_id) {
            match &event.attributes {
                HistoryEventAttributes::ActivityTaskStarted(x)
                    if x.scheduled_event_id == schedule_id =>
                {
                    progress = TaskProgress::Started {
                        started_event_id: event.event_id,
                    }
                }
                HistoryEventAttributes::ActivityTaskCompleted(x)
                    if x.scheduled_event_id == schedule_id =>
                {
                    return TaskProgress::Closed
                }
                HistoryEventAttributes::ActivityTaskFailed(x)
                    if x.scheduled_event_id == schedule_id =>
                {
                    return TaskProgress::Closed
                }
                _ => {}
            }
        }
        progress
    }

    /// Only valid as the very first event.
    pub fn add_workflow_execution_started_event(
        &mut self,
        request: &StartWorkflowExecutionRequest,
    ) -> Option<HistoryEvent> {
        if !self.events.is_empty() {
            return None;
        }
        Some(self.append(HistoryEventAttributes::WorkflowExecutionStarted(
            WorkflowExecutionStartedEventAttributes {
                workflow_type: request.workflow_type.clone(),
                task_list: request.task_list.clone(),
                input: request.input.clone(),
                execution_start_to_close_timeout_seconds: request
                    .execution_start_to_close_timeout_seconds,
                task_start_to_close_timeout_seconds: request.task_start_to_close_timeout_seconds,
                identity: request.identity.clone(),
            },
        )))
    }

    pub fn add_decision_task_scheduled_event(
        &mut self,
        task_list: &str,
        start_to_close_timeout_seconds: i32,
    ) -> HistoryEvent {
        self.append(HistoryEventAttributes::DecisionTaskScheduled(
            DecisionTaskScheduledEventAttributes {
                task_list: TaskList::new(task_list),
                start_to_close_timeout_seconds,
            },
        ))
    }

    pub fn add_decision_task_started_event(
        &mut self,
        scheduled_event_id: i64,
        request: &PollForDecisionTaskRequest,
    ) -> Option<HistoryEvent> {
        if self.decision_task_progress(scheduled_event_id) != TaskProgress::Scheduled {
            return None;
        }
        Some(self.append(HistoryEventAttributes::DecisionTaskStarted(
            DecisionTaskStartedEventAttributes {
                scheduled_event_id,
                identity: request.identity.clone(),
            },
        )))
    }

    pub fn add_decision_task_completed_event(
        &mut self,
        scheduled_event_id: i64,
        started_event_id: i64,
        execution_context: &[u8],
        identity: &str,
    ) -> Option<HistoryEvent> {
        match self.decision_task_progress(scheduled_event_id) {
            TaskProgress::Started {
                started_event_id: started,
            } if started == started_event_id => {}
            _ => return None,
        }
        Some(self.append(HistoryEventAttributes::DecisionTaskCompleted(
            DecisionTaskCompletedEventAttributes {
                scheduled_event_id,
                started_event_id,
                execution_context: execution_context.to_vec(),
                identity: identity.into(),
            },
        )))
    }

    /// The referenced event only has to exist. Without an explicit task list the activity
    /// goes to the workflow's task list.
    pub fn add_activity_task_scheduled_event(
        &mut self,
        decision_completed_event_id: i64,
        attributes: &ScheduleActivityTaskDecisionAttributes,
    ) -> Option<HistoryEvent> {
        self.get_event(decision_completed_event_id)?;

        let task_list = match &attributes.task_list {
            Some(x) => x.clone(),
            None => self
                .workflow_started_attributes()
                .map(|x| x.task_list.clone())
                .unwrap_or_default(),
        };
        Some(self.append(HistoryEventAttributes::ActivityTaskScheduled(
            ActivityTaskScheduledEventAttributes {
                activity_id: attributes.activity_id.clone(),
                activity_type: attributes.activity_type.clone(),
                task_list,
                input: attributes.input.clone(),
                schedule_to_close_timeout_seconds: attributes.schedule_to_close_timeout_seconds,
                schedule_to_start_timeout_seconds: attributes.schedule_to_start_timeout_seconds,
                start_to_close_timeout_seconds: attributes.start_to_close_timeout_seconds,
                heartbeat_timeout_seconds: attributes.heartbeat_timeout_seconds,
                decision_task_completed_event_id: decision_completed_event_id,
            },
        )))
    }

    pub fn add_activity_task_started_event(
        &mut self,
        scheduled_event_id: i64,
        request: &PollForActivityTaskRequest,
    ) -> Option<HistoryEvent> {
        if self.activity_task_progress(scheduled_event_id) != TaskProgress::Scheduled {
            return None;
        }
        Some(self.append(HistoryEventAttributes::ActivityTaskStarted(
            ActivityTaskStartedEventAttributes {
                scheduled_event_id,
                identity: request.identity.clone(),
            },
        )))
    }

    pub fn add_activity_task_completed_event(
        &mut self,
        scheduled_event_id: i64,
        started_event_id: i64,
        request: &RespondActivityTaskCompletedRequest,
    ) -> Option<HistoryEvent> {
        if !self.is_activity_running(scheduled_event_id, started_event_id) {
            return None;
        }
        Some(self.append(HistoryEventAttributes::ActivityTaskCompleted(
            ActivityTaskCompletedEventAttributes {
                scheduled_event_id,
                started_event_id,
                result: request.result.clone(),
                identity: request.identity.clone(),
            },
        )))
    }

    pub fn add_activity_task_failed_event(
        &mut self,
        scheduled_event_id: i64,
        started_event_id: i64,
        request: &RespondActivityTaskFailedRequest,
    ) -> Option<HistoryEvent> {
        if !self.is_activity_running(scheduled_event_id, started_event_id) {
            return None;
        }
        Some(self.append(HistoryEventAttributes::ActivityTaskFailed(
            ActivityTaskFailedEventAttributes {
                scheduled_event_id,
                started_event_id,
                reason: request.reason.clone(),
                details: request.details.clone(),
                identity: request.identity.clone(),
            },
        )))
    }

    pub fn add_workflow_execution_completed_event(
        &mut self,
        decision_completed_event_id: i64,
        attributes: &CompleteWorkflowExecutionDecisionAttributes,
    ) -> Option<HistoryEvent> {
        if self.is_workflow_closed() {
            return None;
        }
        self.get_event(decision_completed_event_id)?;
        Some(self.append(HistoryEventAttributes::WorkflowExecutionCompleted(
            WorkflowExecutionCompletedEventAttributes {
                result: attributes.result.clone(),
                decision_task_completed_event_id: decision_completed_event_id,
            },
        )))
    }

    pub fn add_workflow_execution_failed_event(
        &mut self,
        decision_completed_event_id: i64,
        attributes: &FailWorkflowExecutionDecisionAttributes,
    ) -> Option<HistoryEvent> {
        if self.is_workflow_closed() {
            return None;
        }
        self.get_event(decision_completed_event_id)?;
        Some(self.append(HistoryEventAttributes::WorkflowExecutionFailed(
            WorkflowExecutionFailedEventAttributes {
                reason: attributes.reason.clone(),
                details: attributes.details.clone(),
                decision_task_completed_event_id: decision_completed_event_id,
            },
        )))
    }

    fn is_activity_running(&self, scheduled_event_id: i64, started_event_id: i64) -> bool {
        matches!(
            self.activity_task_progress(scheduled_event_id),
            TaskProgress::Started { started_event_id: started } if started == started_event_id
        )
    }

    fn append(&mut self, attributes: HistoryEventAttributes) -> HistoryEvent {
        let event = HistoryEvent::new(
            self.next_event_id(),
            Utc::now().timestamp_millis(),
            attributes,
        );
        self.events.push(event.clone());
        event
    }
}
