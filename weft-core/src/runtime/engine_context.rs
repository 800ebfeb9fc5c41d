use weft_common::prelude::*;

use super::history::{HistorySerializer, JsonHistorySerializer};
use super::token::{JsonTaskTokenSerializer, TaskToken, TaskTokenSerializer};
use crate::config::Properties;
use crate::dao::{ExecutionDao, TaskDao};

/// Everything an operation needs: the two store clients, the codecs and the configuration.
/// Cloning shares the stores.
#[derive(Clone)]
pub struct EngineContext {
    pub task_dao: Arc<dyn TaskDao>,
    pub execution_dao: Arc<dyn ExecutionDao>,
    pub history_serializer: Arc<dyn HistorySerializer>,
    pub token_serializer: Arc<dyn TaskTokenSerializer>,
    pub properties: Properties,
}

impl EngineContext {
    /// JSON codecs for history and task tokens.
    pub fn new(
        task_dao: Arc<dyn TaskDao>,
        execution_dao: Arc<dyn ExecutionDao>,
        properties: Properties,
    ) -> Self {
        Self {
            task_dao,
            execution_dao,
            history_serializer: Arc::new(JsonHistorySerializer),
            token_serializer: Arc::new(JsonTaskTokenSerializer),
            properties,
        }
    }

    /// Decodes a token presented by a worker, failing with `IllegalArgument` on garbage.
    pub fn decode_task_token(&self, task_token: &[u8]) -> TegResult<TaskToken> {
        self.token_serializer.deserialize(task_token).map_err(|e| {
            ErrorCode::IllegalArgument(format!("invalid task token: {}", e.display_text()))
        })
    }
}
