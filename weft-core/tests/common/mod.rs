#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;
use weft_common::prelude::*;
use weft_common::{StartWorkflowExecutionRequest, TaskList, WorkflowExecution, WorkflowType};
use weft_core::{
    CreateWorkflowExecutionRequest, ExecutionDao, GetTasksRequest, HistoryBuilder,
    InMemoryExecutionDao, InMemoryTaskDao, JsonHistorySerializer, Properties, TaskDao, TaskInfo,
    TaskInfoWithId, TaskType, UpdateWorkflowExecutionRequest, WorkflowExecutionInfo,
    WorkflowState,
};

pub fn init_logger() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .is_test(true)
        .try_init();
}

/// Default properties without the long poll pause.
pub fn properties() -> Properties {
    Properties {
        long_poll_grace_period_ms: 0,
        ..Default::default()
    }
}

/// Task store answering from a script. `get_tasks` panics once the script runs dry;
/// `complete_task` answers `Ok` unless told otherwise. Every call is recorded.
#[derive(Default)]
pub struct ScriptedTaskDao {
    get_tasks_results: Mutex<VecDeque<TegResult<Vec<TaskInfoWithId>>>>,
    complete_task_results: Mutex<VecDeque<TegResult<()>>>,
    get_tasks_requests: Mutex<Vec<GetTasksRequest>>,
    completed_rows: Mutex<Vec<String>>,
}

impl ScriptedTaskDao {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn on_get_tasks(&self, result: TegResult<Vec<TaskInfoWithId>>) {
        self.get_tasks_results.lock().push_back(result);
    }

    pub fn on_complete_task(&self, result: TegResult<()>) {
        self.complete_task_results.lock().push_back(result);
    }

    pub fn get_tasks_requests(&self) -> Vec<GetTasksRequest> {
        self.get_tasks_requests.lock().clone()
    }

    pub fn completed_rows(&self) -> Vec<String> {
        self.completed_rows.lock().clone()
    }
}

impl TaskDao for ScriptedTaskDao {
    fn get_tasks(&self, request: &GetTasksRequest) -> TegResult<Vec<TaskInfoWithId>> {
        self.get_tasks_requests.lock().push(request.clone());
        self.get_tasks_results
            .lock()
            .pop_front()
            .expect("unexpected get_tasks call")
    }

    fn complete_task(&self, row_id: &str) -> TegResult<()> {
        self.completed_rows.lock().push(row_id.to_owned());
        self.complete_task_results.lock().pop_front().unwrap_or(Ok(()))
    }
}

/// Execution store answering from a script. Reads and conditional updates panic once their
/// script runs dry.
#[derive(Default)]
pub struct ScriptedExecutionDao {
    get_results: Mutex<VecDeque<TegResult<WorkflowExecutionInfo>>>,
    update_results: Mutex<VecDeque<TegResult<()>>>,
    get_requests: Mutex<Vec<WorkflowExecution>>,
    update_requests: Mutex<Vec<UpdateWorkflowExecutionRequest>>,
}

impl ScriptedExecutionDao {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn on_get(&self, result: TegResult<WorkflowExecutionInfo>) {
        self.get_results.lock().push_back(result);
    }

    pub fn on_update(&self, result: TegResult<()>) {
        self.update_results.lock().push_back(result);
    }

    pub fn get_requests(&self) -> Vec<WorkflowExecution> {
        self.get_requests.lock().clone()
    }

    pub fn update_requests(&self) -> Vec<UpdateWorkflowExecutionRequest> {
        self.update_requests.lock().clone()
    }

    pub fn last_update(&self) -> UpdateWorkflowExecutionRequest {
        self.update_requests
            .lock()
            .last()
            .cloned()
            .expect("no update_workflow_execution call")
    }
}

impl ExecutionDao for ScriptedExecutionDao {
    fn create_workflow_execution(&self, _request: &CreateWorkflowExecutionRequest) -> TegResult<()> {
        panic!("unexpected create_workflow_execution call")
    }

    fn get_workflow_execution(
        &self,
        execution: &WorkflowExecution,
    ) -> TegResult<WorkflowExecutionInfo> {
        self.get_requests.lock().push(execution.clone());
        self.get_results
            .lock()
            .pop_front()
            .expect("unexpected get_workflow_execution call")
    }

    fn update_workflow_execution(&self, request: &UpdateWorkflowExecutionRequest) -> TegResult<()> {
        self.update_requests.lock().push(request.clone());
        self.update_results
            .lock()
            .pop_front()
            .expect("unexpected update_workflow_execution call")
    }
}

pub fn task(task_list: &str, task_type: TaskType, schedule_id: i64) -> TaskInfoWithId {
    let mut info = TaskInfo::new(
        &WorkflowExecution::new("wId", "rId"),
        task_list,
        task_type,
        schedule_id,
    );
    info.task_id = 1;
    info.lock_token = "lock".into();
    TaskInfoWithId::new("tId", info)
}

pub fn start_request(task_list: &str, identity: &str) -> StartWorkflowExecutionRequest {
    StartWorkflowExecutionRequest {
        workflow_id: "wId".into(),
        workflow_type: WorkflowType::new("wType"),
        task_list: TaskList::new(task_list),
        input: b"input".to_vec(),
        execution_start_to_close_timeout_seconds: 100,
        task_start_to_close_timeout_seconds: 200,
        identity: identity.into(),
    }
}

/// A running execution of `wId/rId` whose stored history is the builder's.
pub fn execution_info(
    builder: &HistoryBuilder,
    task_list: &str,
    last_processed_event: i64,
    decision_pending: bool,
) -> WorkflowExecutionInfo {
    let mut info = WorkflowExecutionInfo::new(&WorkflowExecution::new("wId", "rId"), task_list);
    info.history = builder.serialize(&JsonHistorySerializer).expect("serialize");
    info.state = WorkflowState::Running;
    info.next_event_id = builder.next_event_id();
    info.last_processed_event = last_processed_event;
    info.decision_pending = decision_pending;
    info
}

pub fn decode_history(info: &WorkflowExecutionInfo) -> HistoryBuilder {
    HistoryBuilder::deserialize(&JsonHistorySerializer, &info.history).expect("deserialize")
}

/// Stands in for the transfer queue processor: turns committed transfer tasks into task list
/// rows.
pub fn dispatch_transfer_tasks(execution_dao: &InMemoryExecutionDao, task_dao: &InMemoryTaskDao) -> usize {
    let transfer_tasks = execution_dao.take_transfer_tasks();
    for (execution, transfer_task) in &transfer_tasks {
        task_dao.create_task(TaskInfo::from_transfer_task(execution, transfer_task));
    }
    transfer_tasks.len()
}
