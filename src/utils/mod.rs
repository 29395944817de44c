//! 工具模块：版本比较、捕获组提取、版本代号与日志格式化
pub mod version;
pub mod version_name;
pub mod version_extractor;
pub mod log_format;

pub use self::version::VersionComparator;
pub use self::version_name::VersionNames;
pub use self::version_extractor::VersionExtractor;
pub use self::log_format::{preview_compact, preview_ua};
