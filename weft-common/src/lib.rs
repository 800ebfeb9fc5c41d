#[macro_use]
pub(crate) mod macros;

mod exception;
mod history;
mod metadata;
mod run;

pub use history::{
    ActivityTaskCompletedEventAttributes, ActivityTaskFailedEventAttributes,
    ActivityTaskScheduledEventAttributes, ActivityTaskStartedEventAttributes,
    DecisionTaskCompletedEventAttributes, DecisionTaskScheduledEventAttributes,
    DecisionTaskStartedEventAttributes, EventType, HistoryEvent, HistoryEventAttributes,
    WorkflowExecutionCompletedEventAttributes, WorkflowExecutionFailedEventAttributes,
    WorkflowExecutionStartedEventAttributes, EMPTY_EVENT_ID, FIRST_EVENT_ID,
};
pub use metadata::{
    ActivityType, CompleteWorkflowExecutionDecisionAttributes, Decision,
    FailWorkflowExecutionDecisionAttributes, ScheduleActivityTaskDecisionAttributes, TaskList,
    WorkflowExecution, WorkflowType,
};
pub use run::{
    PollForActivityTaskRequest, PollForActivityTaskResponse, PollForDecisionTaskRequest,
    PollForDecisionTaskResponse, RespondActivityTaskCompletedRequest,
    RespondActivityTaskFailedRequest, RespondDecisionTaskCompletedRequest,
    StartWorkflowExecutionRequest,
};

pub mod prelude;

#[rustfmt::skip]
pub use crate::exception::{ErrorCode, TegResult};
