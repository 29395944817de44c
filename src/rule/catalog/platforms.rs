//! 设备平台描述符目录
//! 平板优先：平板通常带有更具体的特征。
//! 末尾的谓词依赖已识别的浏览器 / 操作系统，需在二者之后执行。

use crate::macros::ci_regex;
use crate::rule::constants::{OsMap, PlatformsMap};
use crate::rule::descriptor::{Catalog, Descriptor, FactContext};
use crate::rule::model::PlatformInfo;
use crate::utils::VersionExtractor;

// 含 "tablet" 且其后不是 " pc"（排除 "Tablet PC"）
fn is_tablet(ctx: &dyn FactContext) -> bool {
    ci_regex!(r"tablet( pc)?")
        .captures_iter(ctx.user_agent())
        .any(|captures| captures.get(1).is_none())
}

fn is_idevice(ctx: &dyn FactContext) -> bool {
    let idevice = ctx.test(ci_regex!(r"ipod|iphone"));
    let like_idevice = ctx.test(ci_regex!(r"like (ipod|iphone)"));
    idevice && !like_idevice
}

fn browser_is_blackberry(ctx: &dyn FactContext) -> bool {
    ctx.browser().name_is("blackberry")
}

fn browser_is_bada(ctx: &dyn FactContext) -> bool {
    ctx.browser().name_is("bada")
}

fn os_is_windows_phone(ctx: &dyn FactContext) -> bool {
    ctx.os().name_is(OsMap::WINDOWS_PHONE)
}

// Android 3.x 起的设备视为平板（手机已被前面的 mobi 规则识别）
fn is_android_tablet(ctx: &dyn FactContext) -> bool {
    let os = ctx.os();
    os.name_is(OsMap::ANDROID) && os.major_version().is_some_and(|major| major >= 3)
}

fn os_is_android(ctx: &dyn FactContext) -> bool {
    ctx.os().name_is(OsMap::ANDROID)
}

fn os_is_macos(ctx: &dyn FactContext) -> bool {
    ctx.os().name_is(OsMap::MAC_OS)
}

fn os_is_windows(ctx: &dyn FactContext) -> bool {
    ctx.os().name_is(OsMap::WINDOWS)
}

fn os_is_linux(ctx: &dyn FactContext) -> bool {
    ctx.os().name_is(OsMap::LINUX)
}

fn os_is_playstation_4(ctx: &dyn FactContext) -> bool {
    ctx.os().name_is(OsMap::PLAYSTATION_4)
}

fn os_is_roku(ctx: &dyn FactContext) -> bool {
    ctx.os().name_is(OsMap::ROKU)
}

/// 构建平台目录
pub fn catalog() -> Catalog<PlatformInfo> {
    Catalog::new(vec![
        Descriptor::patterns("Googlebot", &[r"googlebot"], |_| {
            PlatformInfo::of_type(PlatformsMap::BOT).with_vendor("Google")
        }),
        Descriptor::patterns("Huawei", &[r"huawei"], |ua| {
            let model = VersionExtractor::first_match(ci_regex!(r"(can-l01)"), ua).map(|_| "Nova");
            PlatformInfo::of_type(PlatformsMap::MOBILE)
                .with_vendor("Huawei")
                .with_model(model)
        }),
        Descriptor::patterns("Nexus Tablet", &[r"nexus\s*(?:7|8|9|10).*"], |_| {
            PlatformInfo::of_type(PlatformsMap::TABLET).with_vendor("Nexus")
        }),
        Descriptor::patterns("iPad", &[r"ipad"], |_| {
            PlatformInfo::of_type(PlatformsMap::TABLET)
                .with_vendor("Apple")
                .with_model(Some("iPad"))
        }),
        Descriptor::patterns("Kindle Fire HD 7", &[r"kftt build"], |_| {
            PlatformInfo::of_type(PlatformsMap::TABLET)
                .with_vendor("Amazon")
                .with_model(Some("Kindle Fire HD 7"))
        }),
        // 其他搭载 Silk 的 Amazon 平板
        Descriptor::patterns("Amazon Tablet", &[r"silk"], |_| {
            PlatformInfo::of_type(PlatformsMap::TABLET).with_vendor("Amazon")
        }),
        Descriptor::predicate("Tablet", is_tablet, |_| PlatformInfo::of_type(PlatformsMap::TABLET)),
        Descriptor::predicate("iPhone", is_idevice, |ua| {
            let model = VersionExtractor::first_match(ci_regex!(r"(ipod|iphone)"), ua);
            PlatformInfo::of_type(PlatformsMap::MOBILE)
                .with_vendor("Apple")
                .with_model(model)
        }),
        Descriptor::patterns("Nexus Mobile", &[r"nexus\s*[0-6].*", r"galaxy nexus"], |_| {
            PlatformInfo::of_type(PlatformsMap::MOBILE).with_vendor("Nexus")
        }),
        Descriptor::patterns("Mobile", &[r"[^-]mobi"], |_| PlatformInfo::of_type(PlatformsMap::MOBILE)),
        Descriptor::predicate("BlackBerry", browser_is_blackberry, |_| {
            PlatformInfo::of_type(PlatformsMap::MOBILE).with_vendor("BlackBerry")
        }),
        Descriptor::predicate("Bada", browser_is_bada, |_| PlatformInfo::of_type(PlatformsMap::MOBILE)),
        Descriptor::predicate("Windows Phone", os_is_windows_phone, |_| {
            PlatformInfo::of_type(PlatformsMap::MOBILE).with_vendor("Microsoft")
        }),
        Descriptor::predicate("Android Tablet", is_android_tablet, |_| PlatformInfo::of_type(PlatformsMap::TABLET)),
        Descriptor::predicate("Android Mobile", os_is_android, |_| PlatformInfo::of_type(PlatformsMap::MOBILE)),
        Descriptor::predicate("macOS", os_is_macos, |_| {
            PlatformInfo::of_type(PlatformsMap::DESKTOP).with_vendor("Apple")
        }),
        Descriptor::predicate("Windows", os_is_windows, |_| PlatformInfo::of_type(PlatformsMap::DESKTOP)),
        Descriptor::predicate("Linux", os_is_linux, |_| PlatformInfo::of_type(PlatformsMap::DESKTOP)),
        Descriptor::predicate("PlayStation 4", os_is_playstation_4, |_| PlatformInfo::of_type(PlatformsMap::TV)),
        Descriptor::predicate("Roku", os_is_roku, |_| PlatformInfo::of_type(PlatformsMap::TV)),
    ])
}
