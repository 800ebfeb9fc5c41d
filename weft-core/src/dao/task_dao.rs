use weft_common::prelude::*;

use crate::model::{TaskInfoWithId, TaskType};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GetTasksRequest {
    pub task_list: InlineStr,
    pub task_type: TaskType,
    /// How long returned tasks stay invisible to other pollers
    pub lock_timeout: Duration,
    pub batch_size: i32,
}

/// DAO responsible for the task lists. Implementations provide their own atomicity within a
/// single call.
pub trait TaskDao: Send + Sync {
    /// Leases up to `batch_size` visible tasks of the given list and type. An empty result is
    /// the normal "no work" answer, not an error.
    fn get_tasks(&self, request: &GetTasksRequest) -> TegResult<Vec<TaskInfoWithId>>;

    /// Acknowledges a leased task, removing it from its list.
    fn complete_task(&self, row_id: &str) -> TegResult<()>;
}
