use serde::{Deserialize, Serialize};

use crate::metadata::TaskList;
use crate::prelude::*;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PollForActivityTaskRequest {
    pub task_list: TaskList,
    /// Identity of the worker, recorded on the started event
    pub identity: InlineStr,
}

impl PollForActivityTaskRequest {
    pub fn new(task_list: impl Into<InlineStr>, identity: impl Into<InlineStr>) -> Self {
        Self {
            task_list: TaskList::new(task_list),
            identity: identity.into(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PollForDecisionTaskRequest {
    pub task_list: TaskList,
    /// Identity of the decider, recorded on the started event
    pub identity: InlineStr,
}

impl PollForDecisionTaskRequest {
    pub fn new(task_list: impl Into<InlineStr>, identity: impl Into<InlineStr>) -> Self {
        Self {
            task_list: TaskList::new(task_list),
            identity: identity.into(),
        }
    }
}
