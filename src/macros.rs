//! 日志宏：启用 `logging` 特性时转发到 tracing，否则编译为空操作

#[cfg(feature = "logging")]
macro_rules! ua_trace {
    ($($arg:tt)*) => { tracing::trace!($($arg)*) };
}

#[cfg(not(feature = "logging"))]
macro_rules! ua_trace {
    ($($arg:tt)*) => {
        if false {
            let _ = format_args!($($arg)*);
        }
    };
}

#[cfg(feature = "logging")]
macro_rules! ua_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "logging"))]
macro_rules! ua_debug {
    ($($arg:tt)*) => {
        if false {
            let _ = format_args!($($arg)*);
        }
    };
}

#[cfg(feature = "logging")]
macro_rules! ua_warn {
    ($($arg:tt)*) => { tracing::warn!($($arg)*) };
}

#[cfg(not(feature = "logging"))]
macro_rules! ua_warn {
    ($($arg:tt)*) => {
        if false {
            let _ = format_args!($($arg)*);
        }
    };
}

/// 声明一个静态、忽略大小写的正则（首次使用时编译）
/// 仅用于源码中的字面量模式；需要区分大小写的模式以 `(?-i)` 开头
macro_rules! ci_regex {
    ($pattern:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> = once_cell::sync::Lazy::new(|| {
            $crate::compiler::PatternCompiler::compile_or_never($pattern)
        });
        &*RE
    }};
}

pub(crate) use {ci_regex, ua_debug, ua_trace, ua_warn};
