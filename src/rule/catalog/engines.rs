//! 渲染引擎描述符目录（更具体的规则在前）
//! EdgeHTML 依赖已识别的浏览器名称，需在浏览器识别之后执行

use crate::macros::ci_regex;
use crate::rule::constants::EngineMap;
use crate::rule::descriptor::{Catalog, Descriptor, FactContext};
use crate::rule::model::EngineInfo;
use crate::utils::VersionExtractor;

fn engine(name: &str, version: Option<&str>) -> EngineInfo {
    EngineInfo::named(name).with_version(version)
}

fn is_edge(ctx: &dyn FactContext) -> bool {
    ctx.browser().name_is("microsoft edge")
}

fn is_presto(ctx: &dyn FactContext) -> bool {
    ctx.test(ci_regex!(r"presto"))
}

// 含 gecko 但不是 "like Gecko"
fn is_gecko(ctx: &dyn FactContext) -> bool {
    let is_gecko = ctx.test(ci_regex!(r"gecko"));
    let like_gecko = ctx.test(ci_regex!(r"like gecko"));
    is_gecko && !like_gecko
}

/// 构建引擎目录
pub fn catalog() -> Catalog<EngineInfo> {
    Catalog::new(vec![
        Descriptor::predicate("EdgeHTML", is_edge, |ua| {
            // Chromium 内核的 Edge 返回 Blink
            if ci_regex!(r"\sedg/").is_match(ua) {
                return EngineInfo::named(EngineMap::BLINK);
            }
            let version = VersionExtractor::first_match(ci_regex!(r"edge/(\d+(\.?_?\d+)+)"), ua);
            engine(EngineMap::EDGE_HTML, version)
        }),
        Descriptor::patterns("Trident", &[r"trident"], |ua| {
            let version = VersionExtractor::first_match(ci_regex!(r"trident/(\d+(\.?_?\d+)+)"), ua);
            engine(EngineMap::TRIDENT, version)
        }),
        Descriptor::predicate("Presto", is_presto, |ua| {
            let version = VersionExtractor::first_match(ci_regex!(r"presto/(\d+(\.?_?\d+)+)"), ua);
            engine(EngineMap::PRESTO, version)
        }),
        Descriptor::predicate("Gecko", is_gecko, |ua| {
            let version = VersionExtractor::first_match(ci_regex!(r"gecko/(\d+(\.?_?\d+)+)"), ua);
            engine(EngineMap::GECKO, version)
        }),
        Descriptor::patterns("Blink", &[r"(apple)?webkit/537\.36"], |_| EngineInfo::named(EngineMap::BLINK)),
        Descriptor::patterns("WebKit", &[r"(apple)?webkit"], |ua| {
            let version = VersionExtractor::first_match(ci_regex!(r"webkit/(\d+(\.?_?\d+)+)"), ua);
            engine(EngineMap::WEBKIT, version)
        }),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blink_precedes_webkit() {
        let catalog = catalog();
        assert!(catalog.position("Blink").unwrap() < catalog.position("WebKit").unwrap());
        assert_eq!(catalog.position("EdgeHTML"), Some(0));
    }
}
