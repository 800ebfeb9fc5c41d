mod config;
mod dao;
mod metrics;
mod model;
mod runtime;
mod service;
mod utils;

pub use config::Properties;
pub use dao::{
    CreateWorkflowExecutionRequest, ExecutionDao, GetTasksRequest, InMemoryExecutionDao,
    InMemoryTaskDao, TaskDao, UpdateWorkflowExecutionRequest,
};
pub use model::{
    TaskInfo, TaskInfoWithId, TaskType, TransferTaskInfo, WorkflowExecutionInfo, WorkflowState,
};
pub use runtime::history::{HistoryBuilder, HistorySerializer, JsonHistorySerializer, TaskProgress};
pub use runtime::token::{JsonTaskTokenSerializer, TaskToken, TaskTokenSerializer};
pub use runtime::{
    Committed, ConditionalUpdate, EngineContext, MutableExecution, UpdateState,
};
pub use service::{HistoryService, MatchingEngine};
pub use utils::IdGenerator;
