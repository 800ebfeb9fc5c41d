use weft_common::prelude::*;
use weft_common::{Decision, RespondDecisionTaskCompletedRequest, ScheduleActivityTaskDecisionAttributes};

use super::{ConditionalUpdate, MutableExecution};
use crate::model::{TransferTaskInfo, WorkflowState};
use crate::runtime::history::TaskProgress;
use crate::runtime::EngineContext;

pub struct RespondDecisionTaskCompletedOperation;

impl RespondDecisionTaskCompletedOperation {
    const OPERATION: &'static str = "RespondDecisionTaskCompleted";

    /// Closes a started decision and applies its decisions in order.
    ///
    /// If the workflow is still running and events were recorded while the decider was working,
    /// a new decision is scheduled so the decider gets to see them.
    pub fn execute(
        context: &EngineContext,
        request: &RespondDecisionTaskCompletedRequest,
    ) -> TegResult<()> {
        let token = context.decode_task_token(&request.task_token)?;
        let execution = token.workflow_execution();
        let schedule_id = token.schedule_id;

        ConditionalUpdate::new(context, execution.clone(), Self::OPERATION).execute(|mutable| {
            if mutable.info.state.is_terminal() {
                return fmt_err!(
                    EntityNotExists,
                    "Workflow execution already completed: {}",
                    execution
                );
            }
            let started_event_id = match mutable.builder.decision_task_progress(schedule_id) {
                TaskProgress::Started { started_event_id } => started_event_id,
                _ => {
                    return fmt_err!(
                        EntityNotExists,
                        "No running decision with scheduleId {} in {}",
                        schedule_id,
                        execution
                    )
                }
            };
            let has_new_events = mutable.builder.next_event_id() > started_event_id + 1;

            let completed = mutable
                .builder
                .add_decision_task_completed_event(
                    schedule_id,
                    started_event_id,
                    &request.execution_context,
                    &request.identity,
                )
                .ok_or_else(|| {
                    ErrorCode::EntityNotExists(format!(
                        "No running decision with scheduleId {} in {}",
                        schedule_id, execution
                    ))
                })?;

            for decision in &request.decisions {
                Self::apply(mutable, completed.event_id, decision)?;
            }

            mutable.info.execution_context = request.execution_context.clone();
            mutable.info.last_processed_event = started_event_id;
            mutable.info.decision_pending = false;
            if !mutable.info.state.is_terminal() && has_new_events {
                mutable.schedule_decision();
            }
            Ok(())
        })?;

        debug!("Decision {} of {} completed", schedule_id, execution);
        Ok(())
    }

    fn apply(
        mutable: &mut MutableExecution,
        decision_completed_event_id: i64,
        decision: &Decision,
    ) -> TegResult<()> {
        if mutable.info.state.is_terminal() {
            return str_err!(
                IllegalArgument,
                "no decision may follow one that closes the workflow"
            );
        }

        match decision {
            Decision::ScheduleActivityTask(attributes) => {
                Self::validate_schedule_activity(attributes)?;
                let event = mutable
                    .builder
                    .add_activity_task_scheduled_event(decision_completed_event_id, attributes)
                    .ok_or_else(|| {
                        ErrorCode::InvalidHistory(format!(
                            "DecisionTaskCompleted event {} vanished",
                            decision_completed_event_id
                        ))
                    })?;
                let task_list = event
                    .attributes
                    .as_activity_task_scheduled()
                    .map(|x| x.task_list.name.clone())
                    .unwrap_or_default();
                mutable.add_transfer_task(TransferTaskInfo::activity(task_list, event.event_id));
            }
            Decision::CompleteWorkflowExecution(attributes) => {
                mutable
                    .builder
                    .add_workflow_execution_completed_event(decision_completed_event_id, attributes)
                    .ok_or_else(|| ErrorCode::IllegalArgument("workflow is already closed"))?;
                mutable.info.state = WorkflowState::Completed;
            }
            Decision::FailWorkflowExecution(attributes) => {
                mutable
                    .builder
                    .add_workflow_execution_failed_event(decision_completed_event_id, attributes)
                    .ok_or_else(|| ErrorCode::IllegalArgument("workflow is already closed"))?;
                mutable.info.state = WorkflowState::Completed;
            }
        }
        Ok(())
    }

    fn validate_schedule_activity(attributes: &ScheduleActivityTaskDecisionAttributes) -> TegResult<()> {
        if attributes.activity_id.trim().is_empty() {
            str_err!(IllegalArgument, "activityId cannot be empty")
        } else if attributes.activity_type.name.trim().is_empty() {
            str_err!(IllegalArgument, "activityType cannot be empty")
        } else {
            Ok(())
        }
    }
}
