use chrono::Utc;
use dashmap::DashMap;
use weft_common::prelude::*;

use super::{GetTasksRequest, TaskDao};
use crate::model::{TaskInfo, TaskInfoWithId, TaskType};
use crate::utils::IdGenerator;

type QueueKey = (InlineStr, TaskType);

/// Task lists kept in process memory. Rows are leased in insertion order; a leased row stays
/// in its list, invisible until the lease expires or it is completed.
#[derive(Default)]
pub struct InMemoryTaskDao {
    queues: DashMap<QueueKey, Vec<TaskInfoWithId>>,
    row_index: DashMap<InlineStr, QueueKey>,
    next_task_id: AtomicI64,
}

impl InMemoryTaskDao {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueues a task, returning its row id. The task is immediately visible.
    pub fn create_task(&self, mut task: TaskInfo) -> InlineStr {
        task.task_id = self.next_task_id.fetch_add(1, AtomicOrdering::SeqCst) + 1;
        task.visibility_time = 0;
        task.lock_token = InlineStr::new();
        task.delivery_count = 0;

        let row_id = IdGenerator::generate();
        let key = (task.task_list.clone(), task.task_type);
        debug!(
            "Task {} created in {}/{} for {}/{}, scheduleId: {}",
            task.task_id,
            task.task_list,
            task.task_type.as_ref(),
            task.workflow_id,
            task.run_id,
            task.schedule_id
        );
        self.row_index.insert(row_id.clone(), key.clone());
        self.queues
            .entry(key)
            .or_default()
            .push(TaskInfoWithId::new(row_id.clone(), task));
        row_id
    }

    /// Number of rows in a list, leased ones included.
    pub fn task_count(&self, task_list: &str, task_type: TaskType) -> usize {
        let key: QueueKey = (task_list.into(), task_type);
        self.queues
            .get(&key)
            .map(|x| x.value().len())
            .unwrap_or(0)
    }
}

impl TaskDao for InMemoryTaskDao {
    fn get_tasks(&self, request: &GetTasksRequest) -> TegResult<Vec<TaskInfoWithId>> {
        if request.batch_size <= 0 {
            return fmt_err!(
                IllegalArgument,
                "batch size must be positive, got {}",
                request.batch_size
            );
        }

        let now = Utc::now().timestamp_millis();
        let lock_timeout = i64::try_from(request.lock_timeout.as_millis()).unwrap_or(i64::MAX);
        let lease_until = now.saturating_add(lock_timeout);
        let mut leased = Vec::with_capacity(request.batch_size as usize);

        if let Some(mut queue) = self
            .queues
            .get_mut(&(request.task_list.clone(), request.task_type))
        {
            for row in queue
                .value_mut()
                .iter_mut()
                .filter(|x| x.info.visibility_time <= now)
                .take(request.batch_size as usize)
            {
                row.info.lock_token = IdGenerator::generate();
                row.info.visibility_time = lease_until;
                row.info.delivery_count += 1;
                leased.push(row.clone());
            }
        }

        Ok(leased)
    }

    fn complete_task(&self, row_id: &str) -> TegResult<()> {
        let (_, key) = self
            .row_index
            .remove(row_id)
            .ok_or_else(|| ErrorCode::EntityNotExists(format!("No such task row: {}", row_id)))?;
        if let Some(mut queue) = self.queues.get_mut(&key) {
            queue.value_mut().retain(|x| x.row_id.as_str() != row_id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use weft_common::WorkflowExecution;

    use super::*;

    fn request(task_list: &str, lock_timeout: Duration) -> GetTasksRequest {
        GetTasksRequest {
            task_list: task_list.into(),
            task_type: TaskType::Activity,
            lock_timeout,
            batch_size: 1,
        }
    }

    fn activity_task(task_list: &str, schedule_id: i64) -> TaskInfo {
        TaskInfo::new(
            &WorkflowExecution::new("wId", "rId"),
            task_list,
            TaskType::Activity,
            schedule_id,
        )
    }

    #[test]
    fn empty_list_yields_no_tasks() {
        let dao = InMemoryTaskDao::new();
        let tasks = dao
            .get_tasks(&request("makeToast", Duration::from_secs(10)))
            .expect("get_tasks failed");
        assert!(tasks.is_empty());
    }

    #[test]
    fn leased_task_is_invisible_until_completed() {
        let dao = InMemoryTaskDao::new();
        let row_id = dao.create_task(activity_task("makeToast", 2));

        let tasks = dao
            .get_tasks(&request("makeToast", Duration::from_secs(10)))
            .expect("get_tasks failed");
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].row_id, row_id);
        assert_eq!(tasks[0].info.schedule_id, 2);
        assert_eq!(tasks[0].info.delivery_count, 1);
        assert!(!tasks[0].info.lock_token.is_empty());

        let again = dao
            .get_tasks(&request("makeToast", Duration::from_secs(10)))
            .expect("get_tasks failed");
        assert!(again.is_empty());

        dao.complete_task(&row_id).expect("complete_task failed");
        assert_eq!(dao.task_count("makeToast", TaskType::Activity), 0);
        assert!(dao.complete_task(&row_id).unwrap_err().is_entity_not_exists());
    }

    #[test]
    fn expired_lease_is_redelivered() {
        let dao = InMemoryTaskDao::new();
        dao.create_task(activity_task("makeToast", 2));

        let first = dao
            .get_tasks(&request("makeToast", Duration::ZERO))
            .expect("get_tasks failed");
        let second = dao
            .get_tasks(&request("makeToast", Duration::ZERO))
            .expect("get_tasks failed");
        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].row_id, first[0].row_id);
        assert_eq!(second[0].info.delivery_count, 2);
        assert_ne!(second[0].info.lock_token, first[0].info.lock_token);
    }

    #[test]
    fn huge_lease_keeps_task_leased() {
        let dao = InMemoryTaskDao::new();
        dao.create_task(activity_task("makeToast", 2));

        let first = dao
            .get_tasks(&request("makeToast", Duration::from_millis(u64::MAX)))
            .expect("get_tasks failed");
        let second = dao
            .get_tasks(&request("makeToast", Duration::from_millis(u64::MAX)))
            .expect("get_tasks failed");
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].info.visibility_time, i64::MAX);
        assert!(second.is_empty());
    }

    #[test]
    fn lists_and_types_are_separate() {
        let dao = InMemoryTaskDao::new();
        dao.create_task(activity_task("makeToast", 2));

        let other_list = dao
            .get_tasks(&request("makeBreakfast", Duration::from_secs(10)))
            .expect("get_tasks failed");
        assert!(other_list.is_empty());

        let mut decision_request = request("makeToast", Duration::from_secs(10));
        decision_request.task_type = TaskType::Decision;
        let other_type = dao.get_tasks(&decision_request).expect("get_tasks failed");
        assert!(other_type.is_empty());
    }

    #[test]
    fn non_positive_batch_is_rejected() {
        let dao = InMemoryTaskDao::new();
        let mut request = request("makeToast", Duration::from_secs(10));
        request.batch_size = 0;
        assert!(dao.get_tasks(&request).unwrap_err().is_illegal_argument());
    }
}
