//! 全局描述符目录单例管理
//! 进程级只读数据：首次访问时构建一次，之后所有解析器共享
use once_cell::sync::Lazy;

use crate::macros::ua_debug;
use crate::rule::catalog::{browsers, engines, os, platforms};
use crate::rule::descriptor::Catalog;
use crate::rule::model::{BrowserInfo, EngineInfo, Fact, OsInfo, PlatformInfo};

/// 全局浏览器目录
pub static BROWSER_CATALOG: Lazy<Catalog<BrowserInfo>> = Lazy::new(|| traced(browsers::catalog()));

/// 全局操作系统目录
pub static OS_CATALOG: Lazy<Catalog<OsInfo>> = Lazy::new(|| traced(os::catalog()));

/// 全局渲染引擎目录
pub static ENGINE_CATALOG: Lazy<Catalog<EngineInfo>> = Lazy::new(|| traced(engines::catalog()));

/// 全局平台目录
pub static PLATFORM_CATALOG: Lazy<Catalog<PlatformInfo>> = Lazy::new(|| traced(platforms::catalog()));

// 记录目录构建统计
fn traced<F: Fact>(catalog: Catalog<F>) -> Catalog<F> {
    ua_debug!(
        "Catalog built: category={} descriptors={} patterns={}",
        F::CATEGORY,
        catalog.len(),
        catalog.pattern_count()
    );
    catalog
}

/// 预先构建全部目录（可选，避免首次识别时的编译开销）
pub fn warm_up() {
    Lazy::force(&BROWSER_CATALOG);
    Lazy::force(&OS_CATALOG);
    Lazy::force(&ENGINE_CATALOG);
    Lazy::force(&PLATFORM_CATALOG);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warm_up_builds_every_catalog() {
        warm_up();
        assert!(BROWSER_CATALOG.len() > OS_CATALOG.len());
        assert!(ENGINE_CATALOG.pattern_count() > 0);
        assert_eq!(PLATFORM_CATALOG.position("Googlebot"), Some(0));
    }
}
