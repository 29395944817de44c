//! 编译模块：将描述符中的字面量模式编译为可执行的正则
pub mod pattern;
pub mod compiler;

pub use self::pattern::PatternSet;
pub use self::compiler::PatternCompiler;
