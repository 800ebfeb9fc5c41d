use metrics::{histogram, increment_counter};

use crate::model::TaskType;

/// Thin layer over the `metrics` facade. Nothing is exported unless the embedding process
/// installs a recorder.
pub struct Monitors;

impl Monitors {
    pub fn record_task_poll(task_type: TaskType, task_list: &str) {
        increment_counter!(
            "weft_task_poll",
            "task_type" => task_type.as_ref().to_owned(),
            "task_list" => task_list.to_owned()
        );
    }

    pub fn record_task_poll_no_tasks(task_type: TaskType, task_list: &str) {
        increment_counter!(
            "weft_task_poll_no_tasks",
            "task_type" => task_type.as_ref().to_owned(),
            "task_list" => task_list.to_owned()
        );
    }

    pub fn record_task_duplicate(task_type: TaskType) {
        increment_counter!("weft_task_duplicate", "task_type" => task_type.as_ref().to_owned());
    }

    pub fn record_update_conflict(operation: &'static str) {
        increment_counter!("weft_update_conflict", "operation" => operation);
    }

    pub fn record_max_attempts_exceeded(operation: &'static str) {
        increment_counter!("weft_max_attempts_exceeded", "operation" => operation);
    }

    pub fn record_update_attempts(operation: &'static str, attempts: u32) {
        histogram!("weft_update_attempts", attempts as f64, "operation" => operation);
    }

    pub fn record_task_complete_error(task_type: TaskType) {
        increment_counter!(
            "weft_task_complete_error",
            "task_type" => task_type.as_ref().to_owned()
        );
    }

    pub fn record_workflow_start(workflow_type: &str) {
        increment_counter!("weft_workflow_start", "workflow_type" => workflow_type.to_owned());
    }
}
