use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Identity of one run of a workflow. Immutable for the lifetime of the run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowExecution {
    pub workflow_id: InlineStr,
    pub run_id: InlineStr,
}

impl WorkflowExecution {
    pub fn new(workflow_id: impl Into<InlineStr>, run_id: impl Into<InlineStr>) -> Self {
        Self {
            workflow_id: workflow_id.into(),
            run_id: run_id.into(),
        }
    }
}

impl std::fmt::Display for WorkflowExecution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.workflow_id, self.run_id)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowType {
    pub name: InlineStr,
}

impl WorkflowType {
    pub fn new(name: impl Into<InlineStr>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityType {
    pub name: InlineStr,
}

impl ActivityType {
    pub fn new(name: impl Into<InlineStr>) -> Self {
        Self { name: name.into() }
    }
}

/// A named queue partition pollers dequeue decision or activity tasks from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskList {
    pub name: InlineStr,
}

impl TaskList {
    pub fn new(name: impl Into<InlineStr>) -> Self {
        Self { name: name.into() }
    }
}
