mod task_token;

pub use task_token::{JsonTaskTokenSerializer, TaskToken, TaskTokenSerializer};
