use weft_common::prelude::*;
use weft_common::{PollForDecisionTaskRequest, PollForDecisionTaskResponse, EMPTY_EVENT_ID};

use super::task_poller::TaskPoller;
use super::ConditionalUpdate;
use crate::metrics::Monitors;
use crate::model::TaskType;
use crate::runtime::history::TaskProgress;
use crate::runtime::token::TaskToken;
use crate::runtime::EngineContext;

pub struct PollForDecisionTaskOperation;

impl PollForDecisionTaskOperation {
    const OPERATION: &'static str = "PollForDecisionTask";

    /// One poll: lease a task, record DecisionTaskStarted for it, acknowledge it and hand back
    /// the full history.
    pub fn execute(
        context: &EngineContext,
        request: &PollForDecisionTaskRequest,
    ) -> TegResult<PollForDecisionTaskResponse> {
        let task = TaskPoller::lease(context, &request.task_list.name, TaskType::Decision)?;
        let execution = task.info.workflow_execution();
        let schedule_id = task.info.schedule_id;

        let result = ConditionalUpdate::new(context, execution.clone(), Self::OPERATION)
            .execute(|mutable| {
                if mutable.info.state.is_terminal() {
                    return fmt_err!(
                        EntityNotExists,
                        "Workflow execution already completed: {}",
                        execution
                    );
                }
                match mutable.builder.decision_task_progress(schedule_id) {
                    TaskProgress::Scheduled => {}
                    TaskProgress::NotScheduled => {
                        return fmt_err!(
                            EntityNotExists,
                            "No decision scheduled with id {} in {}",
                            schedule_id,
                            execution
                        )
                    }
                    TaskProgress::Started { .. } | TaskProgress::Closed => {
                        Monitors::record_task_duplicate(TaskType::Decision);
                        return fmt_err!(
                            Duplicate,
                            "Decision {} of {} already started",
                            schedule_id,
                            execution
                        );
                    }
                }

                let started = mutable
                    .builder
                    .add_decision_task_started_event(schedule_id, request)
                    .ok_or_else(|| {
                        ErrorCode::Duplicate(format!(
                            "Decision {} of {} already started",
                            schedule_id, execution
                        ))
                    })?;
                Ok(started.event_id)
            });
        let committed = match result {
            Ok(committed) => committed,
            Err(e) => {
                // A redelivered row whose step is already recorded is done.
                if e.is_duplicate() {
                    TaskPoller::complete(context, &task);
                }
                return Err(e);
            }
        };

        TaskPoller::complete(context, &task);

        let started_event_id = committed.value;
        let info = &committed.execution.info;
        let previous_started_event_id = if info.last_processed_event == EMPTY_EVENT_ID {
            None
        } else {
            Some(info.last_processed_event)
        };
        let workflow_type = committed
            .execution
            .builder
            .workflow_started_attributes()
            .map(|x| x.workflow_type.clone())
            .unwrap_or_default();
        let task_token = context
            .token_serializer
            .serialize(&TaskToken::new(&execution, schedule_id))?;

        debug!(
            "Decision {} of {} started, startedEventId: {}",
            schedule_id, execution, started_event_id
        );
        Ok(PollForDecisionTaskResponse {
            task_token,
            workflow_execution: execution,
            workflow_type,
            previous_started_event_id,
            started_event_id,
            history: committed.execution.builder.into_events(),
        })
    }
}
