use weft_common::prelude::*;
use weft_common::{PollForActivityTaskRequest, PollForActivityTaskResponse};

use super::task_poller::TaskPoller;
use super::ConditionalUpdate;
use crate::metrics::Monitors;
use crate::model::TaskType;
use crate::runtime::history::TaskProgress;
use crate::runtime::token::TaskToken;
use crate::runtime::EngineContext;

pub struct PollForActivityTaskOperation;

impl PollForActivityTaskOperation {
    const OPERATION: &'static str = "PollForActivityTask";

    /// One poll: lease a task, record ActivityTaskStarted for it, acknowledge it.
    ///
    /// Fails with `NoTasks` when the list is empty and with `Duplicate` when the activity was
    /// already started or closed. Nothing is written on either path. A duplicate task is
    /// acknowledged; on any other error a leased task stays leased.
    pub fn execute(
        context: &EngineContext,
        request: &PollForActivityTaskRequest,
    ) -> TegResult<PollForActivityTaskResponse> {
        let task = TaskPoller::lease(context, &request.task_list.name, TaskType::Activity)?;
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
                match mutable.builder.activity_task_progress(schedule_id) {
                    TaskProgress::Scheduled => {}
                    TaskProgress::NotScheduled => {
                        return fmt_err!(
                            EntityNotExists,
                            "No activity scheduled with id {} in {}",
                            schedule_id,
                            execution
                        )
                    }
                    TaskProgress::Started { .. } | TaskProgress::Closed => {
                        Monitors::record_task_duplicate(TaskType::Activity);
                        return fmt_err!(
                            Duplicate,
                            "Activity {} of {} already started",
                            schedule_id,
                            execution
                        );
                    }
                }

                let started = mutable
                    .builder
                    .add_activity_task_started_event(schedule_id, request)
                    .ok_or_else(|| {
                        ErrorCode::Duplicate(format!(
                            "Activity {} of {} already started",
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
        let scheduled = committed
            .execution
            .builder
            .activity_scheduled_attributes(schedule_id)
            .cloned()
            .unwrap_or_default();
        let task_token = context
            .token_serializer
            .serialize(&TaskToken::new(&execution, schedule_id))?;

        debug!(
            "Activity {} of {} started, startedEventId: {}",
            scheduled.activity_id, execution, started_event_id
        );
        Ok(PollForActivityTaskResponse {
            task_token,
            workflow_execution: execution,
            activity_id: scheduled.activity_id,
            activity_type: scheduled.activity_type,
            input: scheduled.input,
            started_event_id,
        })
    }
}
