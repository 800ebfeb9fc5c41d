mod execution_info;
mod task_info;

pub use execution_info::{TransferTaskInfo, WorkflowExecutionInfo, WorkflowState};
pub use task_info::{TaskInfo, TaskInfoWithId, TaskType};
