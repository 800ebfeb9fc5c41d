mod decision;
mod workflow_execution;

pub use decision::{
    CompleteWorkflowExecutionDecisionAttributes, Decision, FailWorkflowExecutionDecisionAttributes,
    ScheduleActivityTaskDecisionAttributes,
};
pub use workflow_execution::{ActivityType, TaskList, WorkflowExecution, WorkflowType};
