mod conditional_update;
mod poll_for_activity_task_operation;
mod poll_for_decision_task_operation;
mod respond_activity_task_operation;
mod respond_decision_task_completed_operation;
mod start_workflow_execution_operation;
mod task_poller;

pub use conditional_update::{Committed, ConditionalUpdate, MutableExecution, UpdateState};
pub use poll_for_activity_task_operation::PollForActivityTaskOperation;
pub use poll_for_decision_task_operation::PollForDecisionTaskOperation;
pub use respond_activity_task_operation::RespondActivityTaskOperation;
pub use respond_decision_task_completed_operation::RespondDecisionTaskCompletedOperation;
pub use start_workflow_execution_operation::StartWorkflowExecutionOperation;
