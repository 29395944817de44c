//! 规则模块：识别结果模型、描述符与目录、名称常量与别名表
pub mod model;
pub mod descriptor;
pub mod constants;
pub mod catalog;

// 导出核心接口
pub use self::model::{BrowserInfo, EngineInfo, Fact, FactCategory, OsInfo, ParsedResult, PlatformInfo};
pub use self::descriptor::{Catalog, Descriptor, DescriptorTest, FactContext, Predicate};
pub use self::constants::{
    get_browser_alias, get_browser_type_by_alias, EngineMap, OsMap, PlatformsMap, BROWSER_ALIASES,
    BROWSER_ALIASES_MAP, BROWSER_MAP, ENGINE_MAP, OS_MAP, PLATFORMS_MAP,
};
