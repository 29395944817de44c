//! 解析器核心：持有 UA，按类别调用分类引擎并缓存结果
use std::borrow::Cow;

use once_cell::unsync::OnceCell;
use regex::Regex;

use super::classifier::Classifier;
use super::global::{BROWSER_CATALOG, ENGINE_CATALOG, OS_CATALOG, PLATFORM_CATALOG};
use super::satisfies::{ConstraintEvaluator, RequirementTree, VersionRange};
use crate::compiler::PatternCompiler;
use crate::config::{ConfigManager, ParserConfig};
use crate::error::UaResult;
use crate::macros::{ua_debug, ua_trace};
use crate::rule::constants::get_browser_type_by_alias;
use crate::rule::descriptor::{Catalog, FactContext};
use crate::rule::model::{BrowserInfo, EngineInfo, Fact, OsInfo, ParsedResult, PlatformInfo};
use crate::utils::preview_ua;

/// UA 解析器
///
/// 每个类别最多识别一次，结果在实例生命周期内缓存。
/// 实例可以跨线程移动（`Send`），但不能共享（`!Sync`）：并发场景请为每个线程创建独立实例。
#[derive(Debug, Clone)]
pub struct Parser {
    ua: String,
    config: ParserConfig,
    browser: OnceCell<BrowserInfo>,
    os: OnceCell<OsInfo>,
    platform: OnceCell<PlatformInfo>,
    engine: OnceCell<EngineInfo>,
}

impl Parser {
    /// 创建解析器
    /// `skip_parsing` 为 false 时立即识别全部类别
    pub fn new(ua: impl Into<String>, skip_parsing: bool) -> Self {
        let config = ConfigManager::custom().skip_parsing(skip_parsing).build();
        Self::with_config(ua, config)
    }

    /// 使用自定义配置创建解析器
    pub fn with_config(ua: impl Into<String>, config: ParserConfig) -> Self {
        let parser = Self {
            ua: ua.into(),
            config,
            browser: OnceCell::new(),
            os: OnceCell::new(),
            platform: OnceCell::new(),
            engine: OnceCell::new(),
        };

        if !parser.config.skip_parsing {
            parser.parse();
        }
        parser
    }

    /// 识别全部类别（浏览器 → 操作系统 → 平台 → 引擎）
    pub fn parse(&self) -> &Self {
        self.parse_browser();
        self.parse_os();
        self.parse_platform();
        self.parse_engine();
        self
    }

    /// 原始 UA
    pub fn get_ua(&self) -> &str {
        &self.ua
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// 正则是否命中 UA
    pub fn test(&self, regex: &Regex) -> bool {
        regex.is_match(&self.ua)
    }

    /// 动态模式是否命中 UA（忽略大小写，编译结果进入全局缓存）
    pub fn test_str(&self, pattern: &str) -> UaResult<bool> {
        let regex = PatternCompiler::cached(pattern)?;
        Ok(regex.is_match(&self.ua))
    }

    // ======== 识别（首次调用时计算并缓存） ========

    pub fn parse_browser(&self) -> &BrowserInfo {
        self.browser.get_or_init(|| self.classify(&BROWSER_CATALOG))
    }

    pub fn parse_os(&self) -> &OsInfo {
        self.os.get_or_init(|| self.classify(&OS_CATALOG))
    }

    pub fn parse_platform(&self) -> &PlatformInfo {
        self.platform.get_or_init(|| self.classify(&PLATFORM_CATALOG))
    }

    pub fn parse_engine(&self) -> &EngineInfo {
        self.engine.get_or_init(|| self.classify(&ENGINE_CATALOG))
    }

    fn classify<F: Fact>(&self, catalog: &Catalog<F>) -> F {
        let fact = Classifier::classify(catalog, &self.ua, self);
        if self.config.verbose {
            ua_debug!("Fact cached: category={} fact={:?} ua={}", F::CATEGORY, fact, preview_ua(&self.ua));
        } else {
            ua_trace!("Fact cached: category={} fact={:?}", F::CATEGORY, fact);
        }
        fact
    }

    // ======== 访问器 ========

    pub fn get_browser(&self) -> &BrowserInfo {
        self.parse_browser()
    }

    pub fn get_os(&self) -> &OsInfo {
        self.parse_os()
    }

    pub fn get_platform(&self) -> &PlatformInfo {
        self.parse_platform()
    }

    pub fn get_engine(&self) -> &EngineInfo {
        self.parse_engine()
    }

    /// 浏览器名称（`lower` 为 true 时转为小写）
    pub fn get_browser_name(&self, lower: bool) -> Option<Cow<'_, str>> {
        lowered(self.get_browser().name.as_deref(), lower)
    }

    pub fn get_browser_version(&self) -> Option<&str> {
        self.get_browser().version.as_deref()
    }

    pub fn get_os_name(&self, lower: bool) -> Option<Cow<'_, str>> {
        lowered(self.get_os().name.as_deref(), lower)
    }

    pub fn get_os_version(&self) -> Option<&str> {
        self.get_os().version.as_deref()
    }

    /// 操作系统发行代号（例如 Mojave、Oreo）
    pub fn get_os_version_name(&self) -> Option<&str> {
        self.get_os().version_name.as_deref()
    }

    pub fn get_engine_name(&self, lower: bool) -> Option<Cow<'_, str>> {
        lowered(self.get_engine().name.as_deref(), lower)
    }

    pub fn get_platform_type(&self, lower: bool) -> Option<Cow<'_, str>> {
        lowered(self.get_platform().platform_type.as_deref(), lower)
    }

    /// 已识别类别的聚合结果（未识别的类别保持缺失）
    pub fn get_result(&self) -> ParsedResult {
        ParsedResult {
            browser: self.browser.get().cloned(),
            os: self.os.get().cloned(),
            platform: self.platform.get().cloned(),
            engine: self.engine.get().cloned(),
        }
    }

    // ======== 判断 ========

    /// 浏览器（宽松匹配别名）、平台类型或操作系统名称是否与候选值相等
    pub fn is(&self, candidate: &str) -> bool {
        self.is_browser(candidate, true) || self.is_os(candidate) || self.is_platform(candidate)
    }

    /// 任一候选值满足 `is`；空序列返回 false
    pub fn some<I, S>(&self, candidates: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        candidates.into_iter().any(|candidate| self.is(candidate.as_ref()))
    }

    /// 浏览器名称判断（忽略大小写）
    /// `loose` 为 true 时先将规范 ID（例如 `edge`）解析为展示名称
    pub fn is_browser(&self, browser_name: &str, loose: bool) -> bool {
        let Some(current) = self.get_browser_name(true) else {
            return false;
        };

        let mut expected = browser_name.to_lowercase();
        if loose {
            if let Some(display_name) = get_browser_type_by_alias(&expected) {
                expected = display_name.to_lowercase();
            }
        }
        expected == current
    }

    pub fn is_os(&self, os_name: &str) -> bool {
        self.get_os_name(true)
            .is_some_and(|current| current == os_name.to_lowercase())
    }

    pub fn is_platform(&self, platform_type: &str) -> bool {
        self.get_platform_type(true)
            .is_some_and(|current| current == platform_type.to_lowercase())
    }

    pub fn is_engine(&self, engine_name: &str) -> bool {
        self.get_engine_name(true)
            .is_some_and(|current| current == engine_name.to_lowercase())
    }

    // ======== 版本约束 ========

    /// 约束树求值，无适用约束时返回 None
    pub fn satisfies(&self, requirements: &RequirementTree) -> Option<bool> {
        ConstraintEvaluator::evaluate(self, requirements)
    }

    /// 浏览器版本是否落在范围内（例如 `>=43.0`）
    /// 版本未知或范围缺少版本号时返回 None
    pub fn compare_version(&self, range: &str) -> Option<bool> {
        let range = VersionRange::parse(range);
        if range.version.is_empty() {
            return None;
        }
        let current = self.get_browser_version()?;
        Some(range.matches(current))
    }
}

fn lowered(value: Option<&str>, lower: bool) -> Option<Cow<'_, str>> {
    value.map(|value| {
        if lower {
            Cow::Owned(value.to_lowercase())
        } else {
            Cow::Borrowed(value)
        }
    })
}

impl FactContext for Parser {
    fn user_agent(&self) -> &str {
        &self.ua
    }

    fn browser(&self) -> &BrowserInfo {
        self.get_browser()
    }

    fn os(&self) -> &OsInfo {
        self.get_os()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::constants::{BROWSER_MAP, OS_MAP, PLATFORMS_MAP};

    const OPERA_UA: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_12_4) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/56.0.2924.87 Safari/537.36 OPR/43.0.2442.1165";
    const EDGE_UA: &str = "Mozilla/5.0 (Linux; Android 8.0; Pixel XL Build/OPP3.170518.006) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.0 Mobile Safari/537.36 EdgA/41.1.35.1";
    const FOCUS_UA: &str = "Mozilla/5.0 (Linux; Android 7.1.1) AppleWebKit/537.36 (KHTML, like Gecko) Version/4.0 Focus/1.2.1 Chrome/59.0.3071.125";
    const VERSIONLESS_UA: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 11_4_1 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Mobile/15G77 [FBAN/FBIOS;FBDV/iPhone7,2;FBMD/iPhone;FBSN/iOS;FBSV/11.4.1;FBSS/2;FBCR/vfnl;FBID/phone;FBLC/nl_NL;FBOP/5;FBRV/0]";

    fn opera() -> Parser {
        Parser::new(OPERA_UA, true)
    }

    fn edge() -> Parser {
        Parser::new(EDGE_UA, true)
    }

    fn range(browser: &str, range: &str) -> RequirementTree {
        RequirementTree::new().browser(browser, range)
    }

    #[test]
    fn ua_is_returned_verbatim() {
        assert_eq!(opera().get_ua(), OPERA_UA);
    }

    #[test]
    fn test_matches_regex_against_ua() {
        let parser = opera();
        assert!(parser.test(&Regex::new(r"(?i)chrome").unwrap()));
        assert!(parser.test_str("chrome").unwrap());
        assert!(!parser.test_str("firefox").unwrap());
        assert!(parser.test_str("(unclosed").is_err());
    }

    #[test]
    fn browser_is_parsed_on_demand() {
        let parser = opera();
        assert!(parser.get_result().is_empty());

        let browser = parser.get_browser();
        assert_eq!(browser.name.as_deref(), Some("Opera"));
        assert_eq!(browser.version.as_deref(), Some("43.0.2442.1165"));
        assert_eq!(parser.get_browser_name(false).as_deref(), Some("Opera"));
        assert_eq!(parser.get_browser_version(), Some("43.0.2442.1165"));

        let result = parser.get_result();
        assert!(result.browser.is_some());
        assert!(result.os.is_none());
        assert!(result.engine.is_none());
    }

    #[test]
    fn os_and_engine_projections() {
        let parser = opera();
        assert_eq!(parser.get_os_name(false).as_deref(), Some("macOS"));
        assert_eq!(parser.get_os_name(true).as_deref(), Some("macos"));
        assert_eq!(parser.get_os_version(), Some("10.12.4"));
        assert_eq!(parser.get_os_version_name(), Some("Sierra"));
        assert_eq!(parser.get_engine_name(false).as_deref(), Some("Blink"));
        assert_eq!(parser.get_engine_name(true).as_deref(), Some("blink"));
        assert_eq!(parser.get_platform_type(false).as_deref(), Some("desktop"));
    }

    #[test]
    fn eager_parser_computes_all_categories() {
        let result = Parser::new(OPERA_UA, false).get_result();
        assert!(result.browser.is_some());
        assert!(result.os.is_some());
        assert!(result.platform.is_some());
        assert!(result.engine.is_some());
    }

    #[test]
    fn repeated_parsing_is_idempotent() {
        let parser = opera();
        let first = parser.parse_browser().clone();
        assert_eq!(parser.parse_browser(), &first);
        assert_eq!(Parser::new(OPERA_UA, false).get_result(), Parser::new(OPERA_UA, false).get_result());
    }

    #[test]
    fn satisfies_simple_comparisons() {
        let parser = opera();
        for requirement in [
            ">42", "<44", "=43.0.2442.1165", "~43.0", ">=43", "<=43", ">=43.0", ">=43.0.2442.1165",
            "<=43.0.2442.1165", "<=43.0.2443", ">=43.0.2441", "~43",
        ] {
            assert_eq!(parser.satisfies(&range("opera", requirement)), Some(true), "{requirement}");
        }
        assert_eq!(parser.satisfies(&range("opera", ">=43.0.2443")), Some(false));
    }

    #[test]
    fn satisfies_falls_through_unrelated_scopes() {
        let tree = RequirementTree::new()
            .scope("macos", RequirementTree::new().browser("safari", ">11"))
            .scope("ios", RequirementTree::new().browser("safari", ">10"))
            .browser("opera", ">42");
        assert_eq!(opera().satisfies(&tree), Some(true));
    }

    #[test]
    fn satisfies_prefers_os_then_platform_scope() {
        let parser = opera();

        let os_scoped = RequirementTree::new()
            .scope("macos", range("opera", ">45"))
            .browser("opera", ">42");
        assert_eq!(parser.satisfies(&os_scoped), Some(false));

        let platform_scoped = RequirementTree::new()
            .scope("desktop", range("opera", ">45"))
            .browser("opera", ">42");
        assert_eq!(parser.satisfies(&platform_scoped), Some(false));

        let both = RequirementTree::new()
            .scope("macos", range("opera", ">45"))
            .scope("desktop", range("opera", ">42"))
            .browser("opera", ">42");
        assert_eq!(parser.satisfies(&both), Some(false));

        let unrelated = RequirementTree::new()
            .scope("macos", range("chrome", ">45"))
            .scope("desktop", range("chrome", ">42"))
            .browser("firefox", ">42");
        assert_eq!(parser.satisfies(&unrelated), None);
    }

    #[test]
    fn satisfies_is_undecided_without_browser_version() {
        let parser = Parser::new(VERSIONLESS_UA, false);
        assert_eq!(parser.get_browser_name(false).as_deref(), Some("Safari"));
        assert_eq!(parser.get_browser_version(), None);
        assert_eq!(parser.satisfies(&range("safari", ">9")), None);
        assert_eq!(parser.compare_version(">9"), None);
    }

    #[test]
    fn satisfies_is_stable_across_repeated_evaluation() {
        let parser = opera();
        let tree = RequirementTree::new()
            .scope("macos", range("opera", ">45"))
            .browser("opera", ">42");
        assert!(parser.get_result().is_empty());

        assert_eq!(parser.satisfies(&tree), Some(false));
        assert_eq!(parser.satisfies(&tree), Some(false));

        parser.parse();
        assert!(parser.get_result().engine.is_some());
        assert_eq!(parser.satisfies(&tree), Some(false));
        assert_eq!(parser.satisfies(&tree), Some(false));
    }

    #[test]
    fn ranges_without_version_make_no_statement() {
        let parser = opera();
        for requirement in ["", ">=", "~", "  "] {
            assert_eq!(parser.compare_version(requirement), None, "{requirement:?}");
            assert_eq!(parser.satisfies(&range("opera", requirement)), None, "{requirement:?}");
        }
        assert_eq!(parser.satisfies(&RequirementTree::new().browser("opera", "").browser("opera", ">42")), None);
    }

    #[test]
    fn satisfies_resolves_aliases() {
        let parser = edge();
        for name in ["Microsoft Edge", "microsoft edge", "edge", "Edge"] {
            assert_eq!(parser.satisfies(&range(name, "=41.1.35.1")), Some(true), "{name}");
        }
    }

    #[test]
    fn satisfies_accepts_json_trees() {
        let tree = RequirementTree::from_json(r#"{"macos":{"opera":">45"},"opera":">42"}"#).unwrap();
        assert_eq!(opera().satisfies(&tree), Some(false));
    }

    #[test]
    fn is_checks_browser_platform_and_os() {
        let parser = opera();
        assert!(parser.is("opera"));
        assert!(parser.is("desktop"));
        assert!(parser.is("macos"));
        assert!(parser.is(BROWSER_MAP["opera"]));
        assert!(parser.is(PLATFORMS_MAP["desktop"]));
        assert!(parser.is(OS_MAP["MacOS"]));
        assert!(!parser.is("windows"));
    }

    #[test]
    fn some_matches_any_candidate() {
        let parser = opera();
        assert!(parser.some(["opera", "chrome", "firefox"]));
        assert!(parser.some(["macos", "windows"]));
        assert!(!parser.some(["chrome", "firefox"]));
        assert!(!parser.some(Vec::<&str>::new()));
        assert!(!parser.some(None::<&str>));
    }

    #[test]
    fn strict_browser_check_ignores_aliases() {
        let parser = edge();
        assert!(parser.is_browser("Microsoft Edge", false));
        assert!(parser.is_browser("microsoft edge", false));
        assert!(parser.is_browser("mIcrosoft eDge", false));
        assert!(!parser.is_browser("edge", false));
        assert!(!parser.is_browser("Edge", false));
    }

    #[test]
    fn loose_browser_check_resolves_aliases() {
        let parser = edge();
        for name in ["Microsoft Edge", "microsoft edge", "mIcrosoft eDge", "edge", "Edge"] {
            assert!(parser.is_browser(name, true), "{name}");
        }
    }

    #[test]
    fn non_aliased_browsers_match_either_way() {
        let parser = Parser::new(FOCUS_UA, true);
        assert!(parser.is_browser("Focus", true));
        assert!(parser.is_browser("Focus", false));
    }

    #[test]
    fn os_platform_and_engine_checks() {
        let parser = edge();
        assert!(parser.is_os("Android"));
        assert!(parser.is_platform("MOBILE"));
        assert!(parser.is_engine("edgehtml"));
        assert!(!parser.is_engine("blink"));
    }

    #[test]
    fn parser_can_move_across_threads() {
        fn assert_send<T: Send>() {}
        assert_send::<Parser>();

        let parser = opera();
        let name = std::thread::spawn(move || parser.get_browser_name(true).map(Cow::into_owned))
            .join()
            .unwrap();
        assert_eq!(name.as_deref(), Some("opera"));
    }

    #[test]
    fn verbose_config_does_not_change_results() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("rsuadetect=debug")
            .with_test_writer()
            .try_init();

        let config = ConfigManager::custom().verbose(true).build();
        let verbose = Parser::with_config(EDGE_UA, config);
        assert_eq!(verbose.get_result(), Parser::new(EDGE_UA, false).get_result());
    }
}
