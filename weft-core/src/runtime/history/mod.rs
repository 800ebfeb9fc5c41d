mod history_builder;
mod history_serializer;

pub use history_builder::{HistoryBuilder, TaskProgress};
pub use history_serializer::{HistorySerializer, JsonHistorySerializer};
