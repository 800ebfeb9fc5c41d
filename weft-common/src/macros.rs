#[macro_export]
macro_rules! str_err {
    ($obj:ident, $str:expr) => {{
        Err($crate::ErrorCode::$obj($str.to_string()))
    }};
}

#[macro_export]
macro_rules! fmt_err {
    ($obj:ident, $($arg:tt)*) => {{
        Err($crate::ErrorCode::$obj(format!($($arg)*)))
    }}
}
