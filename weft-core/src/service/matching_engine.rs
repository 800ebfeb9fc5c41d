use weft_common::prelude::*;
use weft_common::{
    PollForActivityTaskRequest, PollForActivityTaskResponse, PollForDecisionTaskRequest,
    PollForDecisionTaskResponse,
};

use crate::config::Properties;
use crate::dao::{ExecutionDao, TaskDao};
use crate::runtime::{EngineContext, PollForActivityTaskOperation, PollForDecisionTaskOperation};

/// Hands queued activity and decision tasks to pollers, recording the matching started
/// event in the execution's history before a task is given out.
#[derive(Clone)]
pub struct MatchingEngine {
    context: EngineContext,
}

impl MatchingEngine {
    pub fn new(
        task_dao: Arc<dyn TaskDao>,
        execution_dao: Arc<dyn ExecutionDao>,
        properties: Properties,
    ) -> Self {
        Self::with_context(EngineContext::new(task_dao, execution_dao, properties))
    }

    pub fn with_context(context: EngineContext) -> Self {
        Self { context }
    }

    /// Long poll for an activity task. `Ok(None)` once every attempt found the list empty.
    pub fn poll_for_activity_task(
        &self,
        request: &PollForActivityTaskRequest,
    ) -> TegResult<Option<PollForActivityTaskResponse>> {
        self.long_poll(|| self.poll_for_activity_task_operation(request))
    }

    /// Long poll for a decision task. `Ok(None)` once every attempt found the list empty.
    pub fn poll_for_decision_task(
        &self,
        request: &PollForDecisionTaskRequest,
    ) -> TegResult<Option<PollForDecisionTaskResponse>> {
        self.long_poll(|| self.poll_for_decision_task_operation(request))
    }

    pub fn poll_for_activity_task_operation(
        &self,
        request: &PollForActivityTaskRequest,
    ) -> TegResult<PollForActivityTaskResponse> {
        PollForActivityTaskOperation::execute(&self.context, request)
    }

    pub fn poll_for_decision_task_operation(
        &self,
        request: &PollForDecisionTaskRequest,
    ) -> TegResult<PollForDecisionTaskResponse> {
        PollForDecisionTaskOperation::execute(&self.context, request)
    }

    fn long_poll<T>(&self, mut poll: impl FnMut() -> TegResult<T>) -> TegResult<Option<T>> {
        let max_attempts = self.context.properties.long_poll_max_attempts.max(1);
        let grace_period = self.context.properties.long_poll_grace_period();

        for attempt in 1..=max_attempts {
            match poll() {
                Ok(x) => return Ok(Some(x)),
                Err(e) if e.is_no_tasks() => {
                    trace!("Poll attempt {}/{} found no tasks", attempt, max_attempts);
                    if attempt < max_attempts {
                        std::thread::sleep(grace_period);
                    }
                }
                Err(e) => return Err(e),
            }
        }
        Ok(None)
    }
}
