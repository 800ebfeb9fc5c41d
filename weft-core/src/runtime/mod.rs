mod engine_context;
pub mod history;
mod operation;
pub mod token;

pub use engine_context::EngineContext;
pub use operation::{
    Committed, ConditionalUpdate, MutableExecution, PollForActivityTaskOperation,
    PollForDecisionTaskOperation, RespondActivityTaskOperation,
    RespondDecisionTaskCompletedOperation, StartWorkflowExecutionOperation, UpdateState,
};
