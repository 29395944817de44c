//! 操作系统描述符目录
//! 注意顺序：Windows Phone 在 Windows 之前；iPad 上的 Firefox 会伪装成 Macintosh，
//! 需在 macOS 之前单独识别为 iOS；Linux 放在 Android / Tizen 等之后。

use crate::macros::ci_regex;
use crate::rule::constants::OsMap;
use crate::rule::descriptor::{Catalog, Descriptor, FactContext};
use crate::rule::model::OsInfo;
use crate::utils::{VersionExtractor, VersionNames};

fn os(name: &str, version: Option<&str>) -> OsInfo {
    OsInfo::named(name).with_version(version)
}

fn android_test(ctx: &dyn FactContext) -> bool {
    let not_like_android = !ctx.test(ci_regex!(r"like android"));
    let but_android = ctx.test(ci_regex!(r"android"));
    not_like_android && but_android
}

/// 构建操作系统目录
pub fn catalog() -> Catalog<OsInfo> {
    Catalog::new(vec![
        Descriptor::patterns("Roku", &[r"(?-i)Roku/DVP"], |ua| {
            let version = VersionExtractor::first_match(ci_regex!(r"Roku/DVP-(\d+\.\d+)"), ua);
            os(OsMap::ROKU, version)
        }),
        Descriptor::patterns("Windows Phone", &[r"windows phone"], |ua| {
            let version = VersionExtractor::first_match(ci_regex!(r"windows phone (?:os)?\s?(\d+(\.\d+)*)"), ua);
            os(OsMap::WINDOWS_PHONE, version)
        }),
        Descriptor::patterns("Windows", &[r"windows "], |ua| {
            let version = VersionExtractor::first_match(ci_regex!(r"Windows ((NT|XP)( \d\d?.\d)?)"), ua);
            os(OsMap::WINDOWS, version).with_version_name(version.and_then(VersionNames::windows))
        }),
        // iPad 上的 Firefox（桌面模式 UA）
        Descriptor::patterns("iOS", &[r"(?-i)Macintosh(.*?) FxiOS(.*?)/"], |ua| {
            let version = VersionExtractor::second_match(ci_regex!(r"(?-i)(Version/)(\d[\d.]+)"), ua);
            os(OsMap::IOS, version)
        }),
        Descriptor::patterns("macOS", &[r"macintosh"], |ua| {
            let version = VersionExtractor::first_dotted(ci_regex!(r"mac os x (\d+(\.?_?\d+)+)"), ua);
            let version_name = version.as_deref().and_then(VersionNames::macos);
            os(OsMap::MAC_OS, version.as_deref()).with_version_name(version_name)
        }),
        Descriptor::patterns("iOS", &[r"(ipod|iphone|ipad)"], |ua| {
            let version = VersionExtractor::first_dotted(ci_regex!(r"os (\d+([_\s]\d+)*) like mac os x"), ua);
            os(OsMap::IOS, version.as_deref())
        }),
        Descriptor::predicate("Android", android_test, |ua| {
            let version = VersionExtractor::first_match(ci_regex!(r"android[\s/-](\d+(\.\d+)*)"), ua);
            os(OsMap::ANDROID, version).with_version_name(version.and_then(VersionNames::android))
        }),
        Descriptor::patterns("WebOS", &[r"(web|hpw)[o0]s"], |ua| {
            let version = VersionExtractor::first_match(ci_regex!(r"(?:web|hpw)[o0]s/(\d+(\.\d+)*)"), ua);
            os(OsMap::WEB_OS, version)
        }),
        Descriptor::patterns("BlackBerry", &[r"blackberry|\bbb\d+", r"rim\stablet"], |ua| {
            let version = VersionExtractor::first_match(ci_regex!(r"rim\stablet\sos\s(\d+(\.\d+)*)"), ua)
                .or_else(|| VersionExtractor::first_match(ci_regex!(r"blackberry\d+/(\d+([_\s]\d+)*)"), ua))
                .or_else(|| VersionExtractor::first_match(ci_regex!(r"\bbb(\d+)"), ua));
            os(OsMap::BLACKBERRY, version)
        }),
        Descriptor::patterns("Bada", &[r"bada"], |ua| {
            let version = VersionExtractor::first_match(ci_regex!(r"bada/(\d+(\.\d+)*)"), ua);
            os(OsMap::BADA, version)
        }),
        Descriptor::patterns("Tizen", &[r"tizen"], |ua| {
            let version = VersionExtractor::first_match(ci_regex!(r"tizen[/\s](\d+(\.\d+)*)"), ua);
            os(OsMap::TIZEN, version)
        }),
        Descriptor::patterns("Linux", &[r"linux"], |_| OsInfo::named(OsMap::LINUX)),
        Descriptor::patterns("Chrome OS", &[r"(?-i)CrOS"], |_| OsInfo::named(OsMap::CHROME_OS)),
        Descriptor::patterns("PlayStation 4", &[r"(?-i)PlayStation 4"], |ua| {
            let version = VersionExtractor::first_match(ci_regex!(r"PlayStation 4[/\s](\d+(\.\d+)*)"), ua);
            os(OsMap::PLAYSTATION_4, version)
        }),
    ])
}
