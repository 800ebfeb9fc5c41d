use weft_common::prelude::*;
use weft_common::{RespondActivityTaskCompletedRequest, RespondActivityTaskFailedRequest};

use super::{ConditionalUpdate, MutableExecution};
use crate::runtime::history::TaskProgress;
use crate::runtime::EngineContext;

/// Closes a started activity, then schedules a decision unless one is already pending.
pub struct RespondActivityTaskOperation;

impl RespondActivityTaskOperation {
    pub fn completed(
        context: &EngineContext,
        request: &RespondActivityTaskCompletedRequest,
    ) -> TegResult<()> {
        Self::close(
            context,
            &request.task_token,
            "RespondActivityTaskCompleted",
            |mutable, schedule_id, started_event_id| {
                mutable
                    .builder
                    .add_activity_task_completed_event(schedule_id, started_event_id, request)
                    .is_some()
            },
        )
    }

    pub fn failed(
        context: &EngineContext,
        request: &RespondActivityTaskFailedRequest,
    ) -> TegResult<()> {
        Self::close(
            context,
            &request.task_token,
            "RespondActivityTaskFailed",
            |mutable, schedule_id, started_event_id| {
                mutable
                    .builder
                    .add_activity_task_failed_event(schedule_id, started_event_id, request)
                    .is_some()
            },
        )
    }

    fn close<F>(
        context: &EngineContext,
        task_token: &[u8],
        operation: &'static str,
        mut append: F,
    ) -> TegResult<()>
    where
        F: FnMut(&mut MutableExecution, i64, i64) -> bool,
    {
        let token = context.decode_task_token(task_token)?;
        let execution = token.workflow_execution();
        let schedule_id = token.schedule_id;

        ConditionalUpdate::new(context, execution.clone(), operation).execute(|mutable| {
            if mutable.info.state.is_terminal() {
                return fmt_err!(
                    EntityNotExists,
                    "Workflow execution already completed: {}",
                    execution
                );
            }
            let started_event_id = match mutable.builder.activity_task_progress(schedule_id) {
                TaskProgress::Started { started_event_id } => started_event_id,
                _ => {
                    return fmt_err!(
                        EntityNotExists,
                        "No running activity with scheduleId {} in {}",
                        schedule_id,
                        execution
                    )
                }
            };
            if !append(mutable, schedule_id, started_event_id) {
                return fmt_err!(
                    EntityNotExists,
                    "No running activity with scheduleId {} in {}",
                    schedule_id,
                    execution
                );
            }
            if !mutable.info.decision_pending {
                mutable.schedule_decision();
            }
            Ok(())
        })?;

        debug!("{} for activity {} of {}", operation, schedule_id, execution);
        Ok(())
    }
}
