//! 检测模块：分类引擎、解析器与约束求值
pub mod global;
pub mod classifier;
pub mod parser;
pub mod satisfies;

// 导出核心接口
pub use self::global::warm_up;
pub use self::classifier::Classifier;
pub use self::parser::Parser;
pub use self::satisfies::{ConstraintEvaluator, RangeOp, Requirement, RequirementTree, VersionRange};
