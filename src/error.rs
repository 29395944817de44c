//! 全局错误类型定义
//! 识别与比较逻辑本身是全函数（不会失败），仅构造与外部输入解析可能返回错误

use thiserror::Error;
use regex::Error as RegexError;
use serde_json::Error as SerdeJsonError;

#[derive(Error, Debug)]
pub enum UaDetectError {
    // 输入相关错误
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // 编译相关错误
    #[error("Regex compilation failed: {0}")]
    RegexCompileError(#[from] RegexError),

    // 约束树相关错误
    #[error("Invalid requirement tree: {0}")]
    InvalidRequirement(String),

    // 序列化/反序列化错误
    #[error("JSON parse failed: {0}")]
    JsonError(#[from] SerdeJsonError),
}

// 全局Result类型
pub type UaResult<T> = Result<T, UaDetectError>;
