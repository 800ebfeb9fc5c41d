#![allow(non_snake_case)]

use std::backtrace::Backtrace;
use std::sync::Arc;

use super::exception::{ErrorCode, ErrorCodeBacktrace};

macro_rules! build_exceptions {
    ($($body:ident($code:expr)),*$(,)*) => {
            impl ErrorCode {
                $(
                pub fn $body(display_text: impl Into<String>) -> ErrorCode {
                    let bt = Some(ErrorCodeBacktrace::Origin(Arc::new(Backtrace::capture())));
                    ErrorCode::create(
                        $code,
                        display_text.into(),
                        None,
                        bt,
                    )
                }
                paste::item! {
                    pub fn [< $body:snake _ code >] ()  -> u16{
                        $code
                    }

                    pub fn [< is_ $body:snake >] (&self) -> bool {
                        self.code() == $code
                    }
                }
                )*
            }
    }
}

impl ErrorCode {
    pub const CONDITION_FAILED_CODE: u16 = 1004;
    pub const UNKNOWN_EXCEPTION_CODE: u16 = 1999;
}

// Internal errors [0, 2000].
build_exceptions! {
    IllegalArgument(1002),
    EntityNotExists(1003),
    ConditionFailed(ErrorCode::CONDITION_FAILED_CODE),
    NoTasks(1010),
    Duplicate(1011),
    MaxAttemptsExceeded(1012),
    WorkflowExecutionAlreadyStarted(1013),
    SerializationFailed(1014),
    InvalidHistory(1015),
    UnknownException(ErrorCode::UNKNOWN_EXCEPTION_CODE),
}
