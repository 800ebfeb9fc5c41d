mod poll_request;
mod poll_response;
mod respond_request;
mod start_workflow_execution_request;

pub use poll_request::{PollForActivityTaskRequest, PollForDecisionTaskRequest};
pub use poll_response::{PollForActivityTaskResponse, PollForDecisionTaskResponse};
pub use respond_request::{
    RespondActivityTaskCompletedRequest, RespondActivityTaskFailedRequest,
    RespondDecisionTaskCompletedRequest,
};
pub use start_workflow_execution_request::StartWorkflowExecutionRequest;
