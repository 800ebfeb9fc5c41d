use weft_common::prelude::*;

use crate::dao::GetTasksRequest;
use crate::metrics::Monitors;
use crate::model::{TaskInfoWithId, TaskType};
use crate::runtime::EngineContext;

/// Leasing and acknowledging of task list rows, shared by both poll operations.
pub(super) struct TaskPoller;

impl TaskPoller {
    /// Leases the next visible task, or fails with `NoTasks`. Store errors pass through
    /// untouched.
    pub(super) fn lease(
        context: &EngineContext,
        task_list: &str,
        task_type: TaskType,
    ) -> TegResult<TaskInfoWithId> {
        Monitors::record_task_poll(task_type, task_list);
        let request = GetTasksRequest {
            task_list: task_list.into(),
            task_type,
            lock_timeout: context.properties.task_lock_duration(),
            batch_size: 1,
        };

        match context.task_dao.get_tasks(&request)?.into_iter().next() {
            Some(task) => {
                debug!(
                    "Leased {} task {} for {}/{}, scheduleId: {}",
                    task_type.as_ref(),
                    task.row_id,
                    task.info.workflow_id,
                    task.info.run_id,
                    task.info.schedule_id
                );
                Ok(task)
            }
            None => {
                Monitors::record_task_poll_no_tasks(task_type, task_list);
                fmt_err!(NoTasks, "No {} tasks in {}", task_type.as_ref(), task_list)
            }
        }
    }

    /// Acknowledges a task whose started event is already saved. A failure here only delays
    /// cleanup: the lease runs out, and the redelivered task is rejected as a duplicate and
    /// acknowledged then.
    pub(super) fn complete(context: &EngineContext, task: &TaskInfoWithId) {
        if let Err(e) = context.task_dao.complete_task(&task.row_id) {
            Monitors::record_task_complete_error(task.info.task_type);
            warn!(
                "Unable to complete {} task {} for {}/{}: {}",
                task.info.task_type.as_ref(),
                task.row_id,
                task.info.workflow_id,
                task.info.run_id,
                e
            );
        }
    }
}
