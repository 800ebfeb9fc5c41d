mod history_service;
mod matching_engine;

pub use history_service::HistoryService;
pub use matching_engine::MatchingEngine;
