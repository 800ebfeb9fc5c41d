use weft_common::prelude::*;
use weft_common::HistoryEvent;

/// Encodes the event list stored in `WorkflowExecutionInfo::history`.
pub trait HistorySerializer: Send + Sync {
    fn serialize(&self, events: &[HistoryEvent]) -> TegResult<Vec<u8>>;

    /// An empty buffer is an empty history.
    fn deserialize(&self, data: &[u8]) -> TegResult<Vec<HistoryEvent>>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct JsonHistorySerializer;

impl HistorySerializer for JsonHistorySerializer {
    fn serialize(&self, events: &[HistoryEvent]) -> TegResult<Vec<u8>> {
        Ok(serde_json::to_vec(events)?)
    }

    fn deserialize(&self, data: &[u8]) -> TegResult<Vec<HistoryEvent>> {
        if data.is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_slice(data).map_err(|e| {
            ErrorCode::SerializationFailed(format!("unable to decode history: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use weft_common::{
        ActivityTaskScheduledEventAttributes, ActivityType, DecisionTaskScheduledEventAttributes,
        HistoryEventAttributes, TaskList,
    };

    use super::*;

    #[test]
    fn history_survives_encoding() {
        let events = vec![
            HistoryEvent::new(
                1,
                1_000,
                HistoryEventAttributes::DecisionTaskScheduled(DecisionTaskScheduledEventAttributes {
                    task_list: TaskList::new("makeToast"),
                    start_to_close_timeout_seconds: 2,
                }),
            ),
            HistoryEvent::new(
                2,
                1_001,
                HistoryEventAttributes::ActivityTaskScheduled(ActivityTaskScheduledEventAttributes {
                    activity_id: "Very unique id".into(),
                    activity_type: ActivityType::new("Dynamic type"),
                    input: vec![9, 8, 7],
                    decision_task_completed_event_id: 1,
                    ..Default::default()
                }),
            ),
        ];

        let serializer = JsonHistorySerializer;
        let data = serializer.serialize(&events).expect("serialize");
        assert_eq!(serializer.deserialize(&data).expect("deserialize"), events);
        // deterministic
        assert_eq!(serializer.serialize(&events).expect("serialize"), data);
    }

    #[test]
    fn empty_buffer_is_empty_history() {
        assert!(JsonHistorySerializer.deserialize(&[]).expect("deserialize").is_empty());
    }

    #[test]
    fn garbage_is_rejected() {
        let err = JsonHistorySerializer.deserialize(b"{not json").unwrap_err();
        assert!(err.is_serialization_failed());
    }
}
