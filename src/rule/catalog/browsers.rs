//! 浏览器描述符目录
//!
//! 顺序非常重要：识别按顺序逐个执行 test，首个命中即返回。
//! 例如把 Chrome 放在首位，半数以上基于 Chromium 的浏览器都会被识别为 Chrome，
//! 因此厂商定制的分支（Opera、Edge、Yandex 等）必须排在通用的 Chrome / Safari 之前。
//! 最后一条为兜底描述符，总能命中，尝试从 `name/version` 结构中提取名称。

use crate::macros::ci_regex;
use crate::rule::descriptor::{Catalog, Descriptor, FactContext};
use crate::rule::model::BrowserInfo;
use crate::utils::VersionExtractor;

/// 兜底描述符的标签
pub const GENERIC_LABEL: &str = "Generic";

// 大多数移动浏览器携带的 `Version/x.y` 标记
fn common_version(ua: &str) -> Option<&str> {
    VersionExtractor::first_match(ci_regex!(r"version/(\d+(\.?_?\d+)+)"), ua)
}

fn browser(name: &str, version: Option<&str>) -> BrowserInfo {
    BrowserInfo::named(name).with_version(version)
}

fn android_browser_test(ctx: &dyn FactContext) -> bool {
    let not_like_android = !ctx.test(ci_regex!(r"like android"));
    let but_android = ctx.test(ci_regex!(r"android"));
    not_like_android && but_android
}

// 兜底：根据是否携带设备说明 `(...)` 选择不同的提取模式
fn describe_generic(ua: &str) -> BrowserInfo {
    let regex = if ua.contains('(') {
        ci_regex!(r"(?-i)^(.*)/(.*)[ \t]\((.*)")
    } else {
        ci_regex!(r"(?-i)^(.*)/(.*) ")
    };

    BrowserInfo {
        name: VersionExtractor::first_match(regex, ua).map(str::to_string),
        version: VersionExtractor::second_match(regex, ua).map(str::to_string),
    }
}

/// 构建浏览器目录
pub fn catalog() -> Catalog<BrowserInfo> {
    Catalog::new(vec![
        Descriptor::patterns("Googlebot", &[r"googlebot"], |ua| {
            let version = VersionExtractor::first_match(ci_regex!(r"googlebot/(\d+(\.\d+))"), ua)
                .or_else(|| common_version(ua));
            browser("Googlebot", version)
        }),
        // Opera < 13.0
        Descriptor::patterns("Opera", &[r"opera"], |ua| {
            let version = common_version(ua)
                .or_else(|| VersionExtractor::first_match(ci_regex!(r"(?:opera)[\s/](\d+(\.?_?\d+)+)"), ua));
            browser("Opera", version)
        }),
        // Opera > 13.0
        Descriptor::patterns("Opera", &[r"opr/|opios"], |ua| {
            let version = VersionExtractor::first_match(ci_regex!(r"(?:opr|opios)[\s/](\S+)"), ua)
                .or_else(|| common_version(ua));
            browser("Opera", version)
        }),
        Descriptor::patterns("Samsung Internet for Android", &[r"SamsungBrowser"], |ua| {
            let version = common_version(ua).or_else(|| {
                VersionExtractor::first_match(ci_regex!(r"(?:SamsungBrowser)[\s/](\d+(\.?_?\d+)+)"), ua)
            });
            browser("Samsung Internet for Android", version)
        }),
        Descriptor::patterns("NAVER Whale Browser", &[r"Whale"], |ua| {
            let version = common_version(ua)
                .or_else(|| VersionExtractor::first_match(ci_regex!(r"(?:whale)[\s/](\d+(?:\.\d+)+)"), ua));
            browser("NAVER Whale Browser", version)
        }),
        Descriptor::patterns("MZ Browser", &[r"MZBrowser"], |ua| {
            let version = VersionExtractor::first_match(ci_regex!(r"(?:MZBrowser)[\s/](\d+(?:\.\d+)+)"), ua)
                .or_else(|| common_version(ua));
            browser("MZ Browser", version)
        }),
        Descriptor::patterns("Focus", &[r"focus"], |ua| {
            let version = VersionExtractor::first_match(ci_regex!(r"(?:focus)[\s/](\d+(?:\.\d+)+)"), ua)
                .or_else(|| common_version(ua));
            browser("Focus", version)
        }),
        Descriptor::patterns("Swing", &[r"swing"], |ua| {
            let version = VersionExtractor::first_match(ci_regex!(r"(?:swing)[\s/](\d+(?:\.\d+)+)"), ua)
                .or_else(|| common_version(ua));
            browser("Swing", version)
        }),
        Descriptor::patterns("Opera Coast", &[r"coast"], |ua| {
            let version = common_version(ua)
                .or_else(|| VersionExtractor::first_match(ci_regex!(r"(?:coast)[\s/](\d+(\.?_?\d+)+)"), ua));
            browser("Opera Coast", version)
        }),
        Descriptor::patterns("Yandex Browser", &[r"yabrowser"], |ua| {
            let version = VersionExtractor::first_match(ci_regex!(r"(?:yabrowser)[\s/](\d+(\.?_?\d+)+)"), ua)
                .or_else(|| common_version(ua));
            browser("Yandex Browser", version)
        }),
        Descriptor::patterns("UC Browser", &[r"ucbrowser"], |ua| {
            let version = common_version(ua)
                .or_else(|| VersionExtractor::first_match(ci_regex!(r"(?:ucbrowser)[\s/](\d+(\.?_?\d+)+)"), ua));
            browser("UC Browser", version)
        }),
        Descriptor::patterns("Maxthon", &[r"Maxthon|mxios"], |ua| {
            let version = common_version(ua).or_else(|| {
                VersionExtractor::first_match(ci_regex!(r"(?:Maxthon|mxios)[\s/](\d+(\.?_?\d+)+)"), ua)
            });
            browser("Maxthon", version)
        }),
        Descriptor::patterns("Epiphany", &[r"epiphany"], |ua| {
            let version = common_version(ua)
                .or_else(|| VersionExtractor::first_match(ci_regex!(r"(?:epiphany)[\s/](\d+(\.?_?\d+)+)"), ua));
            browser("Epiphany", version)
        }),
        Descriptor::patterns("Puffin", &[r"puffin"], |ua| {
            let version = common_version(ua)
                .or_else(|| VersionExtractor::first_match(ci_regex!(r"(?:puffin)[\s/](\d+(\.?_?\d+)+)"), ua));
            browser("Puffin", version)
        }),
        Descriptor::patterns("Sleipnir", &[r"sleipnir"], |ua| {
            let version = common_version(ua)
                .or_else(|| VersionExtractor::first_match(ci_regex!(r"(?:sleipnir)[\s/](\d+(\.?_?\d+)+)"), ua));
            browser("Sleipnir", version)
        }),
        Descriptor::patterns("K-Meleon", &[r"k-meleon"], |ua| {
            let version = common_version(ua)
                .or_else(|| VersionExtractor::first_match(ci_regex!(r"(?:k-meleon)[\s/](\d+(\.?_?\d+)+)"), ua));
            browser("K-Meleon", version)
        }),
        Descriptor::patterns("WeChat", &[r"micromessenger"], |ua| {
            let version = VersionExtractor::first_match(ci_regex!(r"(?:micromessenger)[\s/](\d+(\.?_?\d+)+)"), ua)
                .or_else(|| common_version(ua));
            browser("WeChat", version)
        }),
        Descriptor::patterns("QQ Browser", &[r"qqbrowser"], |ua| {
            let name = if ci_regex!(r"qqbrowserlite").is_match(ua) {
                "QQ Browser Lite"
            } else {
                "QQ Browser"
            };
            let version = VersionExtractor::first_match(ci_regex!(r"(?:qqbrowserlite|qqbrowser)/(\d+(\.?_?\d+)+)"), ua)
                .or_else(|| common_version(ua));
            browser(name, version)
        }),
        Descriptor::patterns("Internet Explorer", &[r"msie|trident"], |ua| {
            let version = VersionExtractor::first_match(ci_regex!(r"(?:msie |rv:)(\d+(\.?_?\d+)+)"), ua);
            browser("Internet Explorer", version)
        }),
        // Chromium 内核的新版 Edge
        Descriptor::patterns("Microsoft Edge", &[r"\sedg/"], |ua| {
            let version = VersionExtractor::first_match(ci_regex!(r"\sedg/(\d+(\.?_?\d+)+)"), ua);
            browser("Microsoft Edge", version)
        }),
        // EdgeHTML 版 Edge 以及 Android / iOS 版 Edge
        Descriptor::patterns("Microsoft Edge", &[r"edg([ea]|ios)"], |ua| {
            let version = VersionExtractor::second_match(ci_regex!(r"edg([ea]|ios)/(\d+(\.?_?\d+)+)"), ua);
            browser("Microsoft Edge", version)
        }),
        Descriptor::patterns("Vivaldi", &[r"vivaldi"], |ua| {
            let version = VersionExtractor::first_match(ci_regex!(r"vivaldi/(\d+(\.?_?\d+)+)"), ua);
            browser("Vivaldi", version)
        }),
        Descriptor::patterns("SeaMonkey", &[r"seamonkey"], |ua| {
            let version = VersionExtractor::first_match(ci_regex!(r"seamonkey/(\d+(\.?_?\d+)+)"), ua);
            browser("SeaMonkey", version)
        }),
        Descriptor::patterns("Sailfish", &[r"sailfish"], |ua| {
            let version = VersionExtractor::first_match(ci_regex!(r"sailfish\s?browser/(\d+(\.\d+)?)"), ua);
            browser("Sailfish", version)
        }),
        Descriptor::patterns("Amazon Silk", &[r"silk"], |ua| {
            let version = VersionExtractor::first_match(ci_regex!(r"silk/(\d+(\.?_?\d+)+)"), ua);
            browser("Amazon Silk", version)
        }),
        Descriptor::patterns("PhantomJS", &[r"phantom"], |ua| {
            let version = VersionExtractor::first_match(ci_regex!(r"phantomjs/(\d+(\.?_?\d+)+)"), ua);
            browser("PhantomJS", version)
        }),
        Descriptor::patterns("SlimerJS", &[r"slimerjs"], |ua| {
            let version = VersionExtractor::first_match(ci_regex!(r"slimerjs/(\d+(\.?_?\d+)+)"), ua);
            browser("SlimerJS", version)
        }),
        Descriptor::patterns("BlackBerry", &[r"blackberry|\bbb\d+", r"rim\stablet"], |ua| {
            let version = common_version(ua)
                .or_else(|| VersionExtractor::first_match(ci_regex!(r"blackberry[\d]+/(\d+(\.?_?\d+)+)"), ua));
            browser("BlackBerry", version)
        }),
        Descriptor::patterns("WebOS Browser", &[r"(web|hpw)[o0]s"], |ua| {
            let version = common_version(ua)
                .or_else(|| VersionExtractor::first_match(ci_regex!(r"w(?:eb)?[o0]sbrowser/(\d+(\.?_?\d+)+)"), ua));
            browser("WebOS Browser", version)
        }),
        Descriptor::patterns("Bada", &[r"bada"], |ua| {
            let version = VersionExtractor::first_match(ci_regex!(r"dolfin/(\d+(\.?_?\d+)+)"), ua);
            browser("Bada", version)
        }),
        Descriptor::patterns("Tizen", &[r"tizen"], |ua| {
            let version = VersionExtractor::first_match(ci_regex!(r"(?:tizen\s?)?browser/(\d+(\.?_?\d+)+)"), ua)
                .or_else(|| common_version(ua));
            browser("Tizen", version)
        }),
        Descriptor::patterns("QupZilla", &[r"qupzilla"], |ua| {
            let version = VersionExtractor::first_match(ci_regex!(r"(?:qupzilla)[\s/](\d+(\.?_?\d+)+)"), ua)
                .or_else(|| common_version(ua));
            browser("QupZilla", version)
        }),
        Descriptor::patterns("Firefox", &[r"firefox|iceweasel|fxios"], |ua| {
            let version = VersionExtractor::first_match(ci_regex!(r"(?:firefox|iceweasel|fxios)[\s/](\d+(\.?_?\d+)+)"), ua);
            browser("Firefox", version)
        }),
        Descriptor::patterns("Chromium", &[r"chromium"], |ua| {
            let version = VersionExtractor::first_match(ci_regex!(r"(?:chromium)[\s/](\d+(\.?_?\d+)+)"), ua)
                .or_else(|| common_version(ua));
            browser("Chromium", version)
        }),
        Descriptor::patterns("Chrome", &[r"chrome|crios|crmo"], |ua| {
            let version = VersionExtractor::first_match(ci_regex!(r"(?:chrome|crios|crmo)/(\d+(\.?_?\d+)+)"), ua);
            browser("Chrome", version)
        }),
        Descriptor::patterns("Google Search", &[r"GSA"], |ua| {
            let version = VersionExtractor::first_match(ci_regex!(r"(?:GSA)/(\d+(\.?_?\d+)+)"), ua);
            browser("Google Search", version)
        }),
        Descriptor::predicate("Android Browser", android_browser_test, |ua| {
            browser("Android Browser", common_version(ua))
        }),
        Descriptor::patterns("PlayStation 4", &[r"playstation 4"], |ua| {
            browser("PlayStation 4", common_version(ua))
        }),
        Descriptor::patterns("Safari", &[r"safari|applewebkit"], |ua| {
            browser("Safari", common_version(ua))
        }),
        Descriptor::patterns(GENERIC_LABEL, &[r".*"], describe_generic),
    ])
}
