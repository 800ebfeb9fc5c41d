use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use weft_common::prelude::*;
use weft_common::WorkflowExecution;

use super::{CreateWorkflowExecutionRequest, ExecutionDao, UpdateWorkflowExecutionRequest};
use crate::model::{TransferTaskInfo, WorkflowExecutionInfo};

type ExecutionKey = (InlineStr, InlineStr);

/// Executions kept in process memory. Updates are compare-and-swap on `next_event_id` under
/// the map's shard lock. Transfer tasks of accepted writes are queued for
/// `take_transfer_tasks`.
#[derive(Default)]
pub struct InMemoryExecutionDao {
    executions: DashMap<ExecutionKey, WorkflowExecutionInfo>,
    transfer_tasks: Mutex<Vec<(WorkflowExecution, TransferTaskInfo)>>,
}

impl InMemoryExecutionDao {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drains the transfer tasks committed so far, oldest first.
    pub fn take_transfer_tasks(&self) -> Vec<(WorkflowExecution, TransferTaskInfo)> {
        std::mem::take(&mut *self.transfer_tasks.lock())
    }

    fn key(execution: &WorkflowExecution) -> ExecutionKey {
        (execution.workflow_id.clone(), execution.run_id.clone())
    }

    fn record_transfer_tasks(&self, execution: WorkflowExecution, tasks: &[TransferTaskInfo]) {
        if tasks.is_empty() {
            return;
        }
        let mut queue = self.transfer_tasks.lock();
        queue.extend(tasks.iter().map(|x| (execution.clone(), x.clone())));
    }
}

impl ExecutionDao for InMemoryExecutionDao {
    fn create_workflow_execution(&self, request: &CreateWorkflowExecutionRequest) -> TegResult<()> {
        let execution = request.execution_info.workflow_execution();
        match self.executions.entry(Self::key(&execution)) {
            Entry::Occupied(_) => {
                return fmt_err!(
                    WorkflowExecutionAlreadyStarted,
                    "Workflow execution already started: {}",
                    execution
                )
            }
            Entry::Vacant(entry) => {
                entry.insert(request.execution_info.clone());
            }
        }
        debug!(
            "Workflow execution {} created, nextEventId: {}",
            execution, request.execution_info.next_event_id
        );
        self.record_transfer_tasks(execution, &request.transfer_tasks);
        Ok(())
    }

    fn get_workflow_execution(
        &self,
        execution: &WorkflowExecution,
    ) -> TegResult<WorkflowExecutionInfo> {
        self.executions
            .get(&Self::key(execution))
            .map(|x| x.value().clone())
            .ok_or_else(|| {
                ErrorCode::EntityNotExists(format!("Workflow execution not found: {}", execution))
            })
    }

    fn update_workflow_execution(&self, request: &UpdateWorkflowExecutionRequest) -> TegResult<()> {
        let execution = request.execution_info.workflow_execution();
        {
            let mut stored = self
                .executions
                .get_mut(&Self::key(&execution))
                .ok_or_else(|| {
                    ErrorCode::EntityNotExists(format!(
                        "Workflow execution not found: {}",
                        execution
                    ))
                })?;
            if stored.next_event_id != request.condition {
                return fmt_err!(
                    ConditionFailed,
                    "Conditional update failed for {}, expected nextEventId: {}, actual: {}",
                    execution,
                    request.condition,
                    stored.next_event_id
                );
            }
            *stored.value_mut() = request.execution_info.clone();
        }
        debug!(
            "Workflow execution {} updated, nextEventId: {} -> {}",
            execution, request.condition, request.execution_info.next_event_id
        );
        self.record_transfer_tasks(execution, &request.transfer_tasks);
        Ok(())
    }
}
