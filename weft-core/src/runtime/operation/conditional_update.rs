use chrono::Utc;
use strum_macros::AsRefStr;
use weft_common::prelude::*;
use weft_common::{HistoryEvent, WorkflowExecution};

use crate::dao::UpdateWorkflowExecutionRequest;
use crate::metrics::Monitors;
use crate::model::{TransferTaskInfo, WorkflowExecutionInfo};
use crate::runtime::history::HistoryBuilder;
use crate::runtime::EngineContext;

/// Working copy of an execution during one attempt of a conditional update.
pub struct MutableExecution {
    pub info: WorkflowExecutionInfo,
    pub builder: HistoryBuilder,
    /// Committed atomically with the new state
    pub transfer_tasks: Vec<TransferTaskInfo>,
}

impl MutableExecution {
    pub fn add_transfer_task(&mut self, transfer_task: TransferTaskInfo) {
        self.transfer_tasks.push(transfer_task);
    }

    /// Appends a DecisionTaskScheduled event on the execution's task list and queues the
    /// matching decision task.
    pub fn schedule_decision(&mut self) -> HistoryEvent {
        let timeout = self
            .builder
            .workflow_started_attributes()
            .map(|x| x.task_start_to_close_timeout_seconds)
            .unwrap_or_default();
        let task_list = self.info.task_list.clone();
        let event = self.builder.add_decision_task_scheduled_event(&task_list, timeout);
        self.info.decision_pending = true;
        self.add_transfer_task(TransferTaskInfo::decision(task_list, event.event_id));
        event
    }
}

/// Result of a conditional update that was saved.
pub struct Committed<T> {
    pub value: T,
    /// The state exactly as it was written
    pub execution: MutableExecution,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, AsRefStr)]
pub enum UpdateState {
    Reading,
    Mutating,
    Saving,
    Succeeded,
    Conflicted,
    Exhausted,
    Failed,
}

/// Read-mutate-save loop over one execution, guarded by the `next_event_id` read at the start
/// of each attempt.
///
/// ```text
/// Reading -> Mutating -> Saving -> Succeeded
///                          |
///                          +-> Conflicted -> Reading     (attempts < bound)
///                                         -> Exhausted   (attempts == bound)
/// any store, codec or mutation error -> Failed
/// ```
///
/// Only `ConditionFailed` from the save is retried. Each attempt starts from a fresh read, so
/// history events and transfer tasks produced by a conflicted attempt are discarded.
pub struct ConditionalUpdate<'a> {
    context: &'a EngineContext,
    execution: WorkflowExecution,
    operation: &'static str,
    max_attempts: u32,
    attempts: u32,
    state: UpdateState,
}

impl<'a> ConditionalUpdate<'a> {
    pub fn new(
        context: &'a EngineContext,
        execution: WorkflowExecution,
        operation: &'static str,
    ) -> Self {
        Self {
            context,
            execution,
            operation,
            max_attempts: context.properties.conditional_retry_count.max(1),
            attempts: 0,
            state: UpdateState::Reading,
        }
    }

    pub fn state(&self) -> UpdateState {
        self.state
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Runs the loop. `mutate` is called once per attempt against a freshly read execution;
    /// an error from it ends the update without saving.
    pub fn execute<T, F>(&mut self, mut mutate: F) -> TegResult<Committed<T>>
    where
        F: FnMut(&mut MutableExecution) -> TegResult<T>,
    {
        loop {
            self.transition(UpdateState::Reading);
            self.attempts += 1;
            let mut execution = match self.read() {
                Ok(x) => x,
                Err(e) => return self.fail(e),
            };
            let condition = execution.info.next_event_id;

            self.transition(UpdateState::Mutating);
            let value = match mutate(&mut execution) {
                Ok(x) => x,
                Err(e) => return self.fail(e),
            };

            self.transition(UpdateState::Saving);
            match self.save(&mut execution, condition) {
                Ok(()) => {
                    self.transition(UpdateState::Succeeded);
                    Monitors::record_update_attempts(self.operation, self.attempts);
                    return Ok(Committed { value, execution });
                }
                Err(e) if e.is_condition_failed() => {
                    self.transition(UpdateState::Conflicted);
                    Monitors::record_update_conflict(self.operation);
                    debug!(
                        "{} conflicted on {}, attempt {}/{}, condition: {}",
                        self.operation, self.execution, self.attempts, self.max_attempts, condition
                    );
                    if self.attempts >= self.max_attempts {
                        self.transition(UpdateState::Exhausted);
                        Monitors::record_max_attempts_exceeded(self.operation);
                        return fmt_err!(
                            MaxAttemptsExceeded,
                            "{} on {} gave up after {} conflicting attempts",
                            self.operation,
                            self.execution,
                            self.attempts
                        );
                    }
                }
                Err(e) => return self.fail(e),
            }
        }
    }

    fn read(&self) -> TegResult<MutableExecution> {
        let info = self
            .context
            .execution_dao
            .get_workflow_execution(&self.execution)?;
        let builder =
            HistoryBuilder::deserialize(self.context.history_serializer.as_ref(), &info.history)?;
        Ok(MutableExecution {
            info,
            builder,
            transfer_tasks: Vec::new(),
        })
    }

    fn save(&self, execution: &mut MutableExecution, condition: i64) -> TegResult<()> {
        execution.info.history = execution
            .builder
            .serialize(self.context.history_serializer.as_ref())?;
        execution.info.next_event_id = execution.builder.next_event_id();
        execution.info.last_updated_timestamp = Utc::now().timestamp_millis();

        self.context
            .execution_dao
            .update_workflow_execution(&UpdateWorkflowExecutionRequest {
                execution_info: execution.info.clone(),
                transfer_tasks: execution.transfer_tasks.clone(),
                condition,
            })
    }

    fn fail<T>(&mut self, error: ErrorCode) -> TegResult<T> {
        self.transition(UpdateState::Failed);
        Err(error)
    }

    fn transition(&mut self, state: UpdateState) {
        trace!(
            "{} on {}: {} -> {}",
            self.operation,
            self.execution,
            self.state.as_ref(),
            state.as_ref()
        );
        self.state = state;
    }
}
