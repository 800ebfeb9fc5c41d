use chrono::Utc;
use weft_common::prelude::*;
use weft_common::{StartWorkflowExecutionRequest, WorkflowExecution};

use crate::dao::CreateWorkflowExecutionRequest;
use crate::metrics::Monitors;
use crate::model::{TransferTaskInfo, WorkflowExecutionInfo, WorkflowState};
use crate::runtime::history::HistoryBuilder;
use crate::runtime::EngineContext;
use crate::utils::IdGenerator;

pub struct StartWorkflowExecutionOperation;

impl StartWorkflowExecutionOperation {
    /// Creates a new run with a fresh run id. Its history holds WorkflowExecutionStarted
    /// followed by the first DecisionTaskScheduled, whose decision task is committed with it.
    pub fn execute(
        context: &EngineContext,
        request: &StartWorkflowExecutionRequest,
    ) -> TegResult<WorkflowExecution> {
        request.validate()?;

        let execution = WorkflowExecution::new(request.workflow_id.clone(), IdGenerator::generate());
        match Self::create(context, &execution, request) {
            Ok(()) => {
                Monitors::record_workflow_start(&request.workflow_type.name);
                info!(
                    "Workflow execution {} of type {} started",
                    execution, request.workflow_type.name
                );
                Ok(execution)
            }
            Err(e) => {
                error!(
                    "Unable to start workflow: {}, error: {}",
                    request.workflow_type.name, e
                );
                Err(e)
            }
        }
    }

    fn create(
        context: &EngineContext,
        execution: &WorkflowExecution,
        request: &StartWorkflowExecutionRequest,
    ) -> TegResult<()> {
        let mut builder = HistoryBuilder::new();
        builder
            .add_workflow_execution_started_event(request)
            .ok_or_else(|| ErrorCode::InvalidHistory("history of a new run is not empty"))?;
        let scheduled = builder.add_decision_task_scheduled_event(
            &request.task_list.name,
            request.task_start_to_close_timeout_seconds,
        );

        let mut execution_info = WorkflowExecutionInfo::new(execution, request.task_list.name.clone());
        execution_info.history = builder.serialize(context.history_serializer.as_ref())?;
        execution_info.state = WorkflowState::Running;
        execution_info.next_event_id = builder.next_event_id();
        execution_info.decision_pending = true;
        execution_info.last_updated_timestamp = Utc::now().timestamp_millis();

        context
            .execution_dao
            .create_workflow_execution(&CreateWorkflowExecutionRequest {
                execution_info,
                transfer_tasks: vec![TransferTaskInfo::decision(
                    request.task_list.name.clone(),
                    scheduled.event_id,
                )],
            })
    }
}
