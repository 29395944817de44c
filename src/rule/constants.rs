//! 名称常量与别名表
//! 进程级只读数据：浏览器规范 ID ↔ 展示名称、操作系统 / 引擎 / 平台名称
//! 调用方构造约束树时可直接引用，避免硬编码字符串

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

/// 浏览器别名表：(规范 ID, 展示名称)
/// 规范 ID 与展示名称均需唯一
pub const BROWSER_ALIASES: &[(&str, &str)] = &[
    ("amazon_silk", "Amazon Silk"),
    ("android", "Android Browser"),
    ("bada", "Bada"),
    ("blackberry", "BlackBerry"),
    ("chrome", "Chrome"),
    ("chromium", "Chromium"),
    ("epiphany", "Epiphany"),
    ("firefox", "Firefox"),
    ("focus", "Focus"),
    ("google_search", "Google Search"),
    ("googlebot", "Googlebot"),
    ("ie", "Internet Explorer"),
    ("k_meleon", "K-Meleon"),
    ("maxthon", "Maxthon"),
    ("edge", "Microsoft Edge"),
    ("mz", "MZ Browser"),
    ("naver", "NAVER Whale Browser"),
    ("opera", "Opera"),
    ("opera_coast", "Opera Coast"),
    ("phantomjs", "PhantomJS"),
    ("playstation_4", "PlayStation 4"),
    ("puffin", "Puffin"),
    ("qupzilla", "QupZilla"),
    ("qq", "QQ Browser"),
    ("qqlite", "QQ Browser Lite"),
    ("safari", "Safari"),
    ("sailfish", "Sailfish"),
    ("samsung_internet", "Samsung Internet for Android"),
    ("seamonkey", "SeaMonkey"),
    ("slimerjs", "SlimerJS"),
    ("sleipnir", "Sleipnir"),
    ("swing", "Swing"),
    ("tizen", "Tizen"),
    ("uc", "UC Browser"),
    ("vivaldi", "Vivaldi"),
    ("webos", "WebOS Browser"),
    ("wechat", "WeChat"),
    ("yandex", "Yandex Browser"),
];

/// 规范 ID → 展示名称（例如 `edge` → `Microsoft Edge`）
pub static BROWSER_MAP: Lazy<FxHashMap<&'static str, &'static str>> =
    Lazy::new(|| BROWSER_ALIASES.iter().copied().collect());

/// 展示名称 → 规范 ID（例如 `Microsoft Edge` → `edge`）
pub static BROWSER_ALIASES_MAP: Lazy<FxHashMap<&'static str, &'static str>> =
    Lazy::new(|| BROWSER_ALIASES.iter().map(|&(id, name)| (name, id)).collect());

// 忽略大小写的查找表（键统一转为 ASCII 小写）
static ALIAS_BY_NAME: Lazy<FxHashMap<String, &'static str>> = Lazy::new(|| {
    BROWSER_ALIASES
        .iter()
        .map(|&(id, name)| (name.to_ascii_lowercase(), id))
        .collect()
});

static NAME_BY_ALIAS: Lazy<FxHashMap<String, &'static str>> = Lazy::new(|| {
    BROWSER_ALIASES
        .iter()
        .map(|&(id, name)| (id.to_ascii_lowercase(), name))
        .collect()
});

/// 展示名称 → 规范 ID（忽略大小写），未登记时返回 None
pub fn get_browser_alias(browser_name: &str) -> Option<&'static str> {
    ALIAS_BY_NAME.get(&browser_name.to_ascii_lowercase()).copied()
}

/// 规范 ID → 展示名称（忽略大小写），未登记时返回 None
pub fn get_browser_type_by_alias(alias: &str) -> Option<&'static str> {
    NAME_BY_ALIAS.get(&alias.to_ascii_lowercase()).copied()
}

/// 渲染引擎名称
pub struct EngineMap;

impl EngineMap {
    pub const EDGE_HTML: &'static str = "EdgeHTML";
    pub const BLINK: &'static str = "Blink";
    pub const TRIDENT: &'static str = "Trident";
    pub const PRESTO: &'static str = "Presto";
    pub const GECKO: &'static str = "Gecko";
    pub const WEBKIT: &'static str = "WebKit";
}

/// 引擎键 → 引擎名称
pub static ENGINE_MAP: Lazy<FxHashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("EdgeHTML", EngineMap::EDGE_HTML),
        ("Blink", EngineMap::BLINK),
        ("Trident", EngineMap::TRIDENT),
        ("Presto", EngineMap::PRESTO),
        ("Gecko", EngineMap::GECKO),
        ("WebKit", EngineMap::WEBKIT),
    ]
    .into_iter()
    .collect()
});

/// 操作系统名称
pub struct OsMap;

impl OsMap {
    pub const WINDOWS_PHONE: &'static str = "Windows Phone";
    pub const WINDOWS: &'static str = "Windows";
    pub const MAC_OS: &'static str = "macOS";
    pub const IOS: &'static str = "iOS";
    pub const ANDROID: &'static str = "Android";
    pub const WEB_OS: &'static str = "WebOS";
    pub const BLACKBERRY: &'static str = "BlackBerry";
    pub const BADA: &'static str = "Bada";
    pub const TIZEN: &'static str = "Tizen";
    pub const LINUX: &'static str = "Linux";
    pub const CHROME_OS: &'static str = "Chrome OS";
    pub const PLAYSTATION_4: &'static str = "PlayStation 4";
    pub const ROKU: &'static str = "Roku";
}

/// 操作系统键 → 操作系统名称
pub static OS_MAP: Lazy<FxHashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("WindowsPhone", OsMap::WINDOWS_PHONE),
        ("Windows", OsMap::WINDOWS),
        ("MacOS", OsMap::MAC_OS),
        ("iOS", OsMap::IOS),
        ("Android", OsMap::ANDROID),
        ("WebOS", OsMap::WEB_OS),
        ("BlackBerry", OsMap::BLACKBERRY),
        ("Bada", OsMap::BADA),
        ("Tizen", OsMap::TIZEN),
        ("Linux", OsMap::LINUX),
        ("ChromeOS", OsMap::CHROME_OS),
        ("PlayStation4", OsMap::PLAYSTATION_4),
        ("Roku", OsMap::ROKU),
    ]
    .into_iter()
    .collect()
});

/// 平台类型
pub struct PlatformsMap;

impl PlatformsMap {
    pub const TABLET: &'static str = "tablet";
    pub const MOBILE: &'static str = "mobile";
    pub const DESKTOP: &'static str = "desktop";
    pub const TV: &'static str = "tv";
    pub const BOT: &'static str = "bot";
}

/// 平台键 → 平台类型
pub static PLATFORMS_MAP: Lazy<FxHashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("tablet", PlatformsMap::TABLET),
        ("mobile", PlatformsMap::MOBILE),
        ("desktop", PlatformsMap::DESKTOP),
        ("tv", PlatformsMap::TV),
        ("bot", PlatformsMap::BOT),
    ]
    .into_iter()
    .collect()
});

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn aliases_and_names_are_unique() {
        let ids: FxHashSet<_> = BROWSER_ALIASES.iter().map(|(id, _)| id.to_ascii_lowercase()).collect();
        let names: FxHashSet<_> = BROWSER_ALIASES.iter().map(|(_, name)| name.to_ascii_lowercase()).collect();
        assert_eq!(ids.len(), BROWSER_ALIASES.len());
        assert_eq!(names.len(), BROWSER_ALIASES.len());
    }

    #[test]
    fn alias_lookup_ignores_case() {
        assert_eq!(get_browser_alias("Microsoft Edge"), Some("edge"));
        assert_eq!(get_browser_alias("mIcrosoft eDge"), Some("edge"));
        assert_eq!(get_browser_alias("Unexisting Browser"), None);
        assert_eq!(get_browser_type_by_alias("EDGE"), Some("Microsoft Edge"));
        assert_eq!(get_browser_type_by_alias("nope"), None);
    }

    #[test]
    fn fallback_label_is_not_a_browser_alias() {
        assert_eq!(get_browser_alias("Generic"), None);
        assert_eq!(get_browser_type_by_alias("generic"), None);
        assert!(!BROWSER_MAP.contains_key("generic"));
    }

    #[test]
    fn maps_are_inverse_of_each_other() {
        for (id, name) in BROWSER_MAP.iter() {
            assert_eq!(BROWSER_ALIASES_MAP.get(name), Some(id));
        }
        assert_eq!(BROWSER_MAP.get("opera"), Some(&"Opera"));
    }

    #[test]
    fn lookup_tables_expose_constants() {
        assert_eq!(OS_MAP.get("MacOS"), Some(&OsMap::MAC_OS));
        assert_eq!(ENGINE_MAP.get("Blink"), Some(&EngineMap::BLINK));
        assert_eq!(PLATFORMS_MAP.get("desktop"), Some(&PlatformsMap::DESKTOP));
        assert_eq!(PLATFORMS_MAP.len(), 5);
    }
}
