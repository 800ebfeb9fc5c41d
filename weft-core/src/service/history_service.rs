use weft_common::prelude::*;
use weft_common::{
    HistoryEvent, RespondActivityTaskCompletedRequest, RespondActivityTaskFailedRequest,
    RespondDecisionTaskCompletedRequest, StartWorkflowExecutionRequest, WorkflowExecution,
};

use crate::config::Properties;
use crate::dao::{ExecutionDao, TaskDao};
use crate::runtime::history::HistoryBuilder;
use crate::runtime::{
    EngineContext, RespondActivityTaskOperation, RespondDecisionTaskCompletedOperation,
    StartWorkflowExecutionOperation,
};

/// Workflow-facing side of the engine: starts runs and records what deciders and workers
/// report back through their task tokens.
#[derive(Clone)]
pub struct HistoryService {
    context: EngineContext,
}

impl HistoryService {
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

    pub fn start_workflow_execution(
        &self,
        request: &StartWorkflowExecutionRequest,
    ) -> TegResult<WorkflowExecution> {
        StartWorkflowExecutionOperation::execute(&self.context, request)
    }

    pub fn respond_decision_task_completed(
        &self,
        request: &RespondDecisionTaskCompletedRequest,
    ) -> TegResult<()> {
        RespondDecisionTaskCompletedOperation::execute(&self.context, request)
    }

    pub fn respond_activity_task_completed(
        &self,
        request: &RespondActivityTaskCompletedRequest,
    ) -> TegResult<()> {
        RespondActivityTaskOperation::completed(&self.context, request)
    }

    pub fn respond_activity_task_failed(
        &self,
        request: &RespondActivityTaskFailedRequest,
    ) -> TegResult<()> {
        RespondActivityTaskOperation::failed(&self.context, request)
    }

    pub fn get_workflow_execution_history(
        &self,
        execution: &WorkflowExecution,
    ) -> TegResult<Vec<HistoryEvent>> {
        let info = self.context.execution_dao.get_workflow_execution(execution)?;
        Ok(
            HistoryBuilder::deserialize(self.context.history_serializer.as_ref(), &info.history)?
                .into_events(),
        )
    }
}
