//! rsuadetect - 基于有序描述符的 UA 识别库
//!
//! 将 UA 字符串识别为浏览器、渲染引擎、操作系统与设备平台，
//! 并支持按浏览器 / 操作系统 / 平台声明版本约束进行判断。

// 导出全局错误类型
pub use self::error::{UaDetectError, UaResult};

// 导出配置模块
pub use self::config::{ConfigManager, CustomConfigBuilder, ParserConfig};

// 导出规则模块核心接口
pub use self::rule::{
    get_browser_alias, get_browser_type_by_alias, BrowserInfo, EngineInfo, EngineMap, OsInfo, OsMap,
    ParsedResult, PlatformInfo, PlatformsMap, BROWSER_ALIASES_MAP, BROWSER_MAP, ENGINE_MAP, OS_MAP,
    PLATFORMS_MAP,
};

// 导出工具模块核心接口
pub use self::utils::{VersionComparator, VersionNames};

// 导出检测模块核心接口
pub use self::detector::{Parser, RangeOp, Requirement, RequirementTree, VersionRange};

// 声明所有子模块
mod macros;
pub mod config;
pub mod error;
pub mod rule;
pub mod utils;
pub mod compiler;
pub mod detector;

/// 创建解析器
///
/// 输入必须是 UTF-8 文本，否则返回 `InvalidArgument`。
/// `skip_parsing` 为 true 时推迟识别，直到首次访问对应类别。
pub fn get_parser(ua: impl AsRef<[u8]>, skip_parsing: bool) -> UaResult<Parser> {
    let ua = std::str::from_utf8(ua.as_ref())
        .map_err(|e| UaDetectError::InvalidArgument(format!("UA must be valid UTF-8 text: {}", e)))?;
    Ok(Parser::new(ua, skip_parsing))
}

/// 一次性识别全部类别
pub fn parse(ua: &str) -> ParsedResult {
    Parser::new(ua, false).get_result()
}
