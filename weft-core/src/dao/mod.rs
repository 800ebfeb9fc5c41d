mod execution_dao;
mod in_memory_execution_dao;
mod in_memory_task_dao;
mod task_dao;

pub use execution_dao::{
    CreateWorkflowExecutionRequest, ExecutionDao, UpdateWorkflowExecutionRequest,
};
pub use in_memory_execution_dao::InMemoryExecutionDao;
pub use in_memory_task_dao::InMemoryTaskDao;
pub use task_dao::{GetTasksRequest, TaskDao};
