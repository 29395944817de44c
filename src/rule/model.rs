//! 识别结果数据模型定义
//! 仅存储识别数据，无任何业务逻辑，支持序列化/反序列化
//! 字段缺失即表示"未知"，不使用任何哨兵值

use std::fmt;
use serde::{Deserialize, Serialize};

use crate::error::UaResult;

/// 识别类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FactCategory {
    Browser,
    Os,
    Engine,
    Platform,
}

impl FactCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            FactCategory::Browser => "browser",
            FactCategory::Os => "os",
            FactCategory::Engine => "engine",
            FactCategory::Platform => "platform",
        }
    }
}

impl fmt::Display for FactCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 单个类别的识别结果
/// Default 即"空结果"（所有字段缺失），用于无描述符命中的情况
pub trait Fact: Default + Clone + fmt::Debug {
    const CATEGORY: FactCategory;

    /// 是否所有字段均缺失
    fn is_empty(&self) -> bool;
}

/// 浏览器识别结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl BrowserInfo {
    /// 从名称快速创建（版本未知）
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            version: None,
        }
    }

    /// 设置版本（None 保持未知）
    pub fn with_version(mut self, version: Option<&str>) -> Self {
        self.version = version.map(str::to_string);
        self
    }

    /// 名称是否与给定值相等（忽略大小写）
    pub fn name_is(&self, expected: &str) -> bool {
        self.name
            .as_deref()
            .is_some_and(|name| name.eq_ignore_ascii_case(expected))
    }
}

impl Fact for BrowserInfo {
    const CATEGORY: FactCategory = FactCategory::Browser;

    fn is_empty(&self) -> bool {
        self.name.is_none() && self.version.is_none()
    }
}

// ======== 为 BrowserInfo 实现 Display trait（用于日志输出） ========
impl fmt::Display for BrowserInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name.as_deref().unwrap_or("unknown");
        match &self.version {
            Some(v) if !v.is_empty() => write!(f, "{} {}", name, v),
            _ => write!(f, "{}", name),
        }
    }
}

/// 操作系统识别结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OsInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    // 发行代号（例如 Mojave、Oreo、7）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_name: Option<String>,
}

impl OsInfo {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_version(mut self, version: Option<&str>) -> Self {
        self.version = version.map(str::to_string);
        self
    }

    pub fn with_version_name(mut self, version_name: Option<&str>) -> Self {
        self.version_name = version_name.map(str::to_string);
        self
    }

    /// 名称是否与给定值相等（忽略大小写）
    pub fn name_is(&self, expected: &str) -> bool {
        self.name
            .as_deref()
            .is_some_and(|name| name.eq_ignore_ascii_case(expected))
    }

    /// 主版本号（无法解析时为 None）
    pub fn major_version(&self) -> Option<u32> {
        self.version
            .as_deref()
            .and_then(|v| v.split('.').next())
            .and_then(|major| major.trim().parse().ok())
    }
}

impl Fact for OsInfo {
    const CATEGORY: FactCategory = FactCategory::Os;

    fn is_empty(&self) -> bool {
        self.name.is_none() && self.version.is_none() && self.version_name.is_none()
    }
}

/// 渲染引擎识别结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl EngineInfo {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            version: None,
        }
    }

    pub fn with_version(mut self, version: Option<&str>) -> Self {
        self.version = version.map(str::to_string);
        self
    }
}

impl Fact for EngineInfo {
    const CATEGORY: FactCategory = FactCategory::Engine;

    fn is_empty(&self) -> bool {
        self.name.is_none() && self.version.is_none()
    }
}

/// 设备平台识别结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformInfo {
    // 平台类型：desktop / mobile / tablet / tv / bot
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub platform_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl PlatformInfo {
    pub fn of_type(platform_type: impl Into<String>) -> Self {
        Self {
            platform_type: Some(platform_type.into()),
            ..Self::default()
        }
    }

    pub fn with_vendor(mut self, vendor: &str) -> Self {
        self.vendor = Some(vendor.to_string());
        self
    }

    pub fn with_model(mut self, model: Option<&str>) -> Self {
        self.model = model.map(str::to_string);
        self
    }
}

impl Fact for PlatformInfo {
    const CATEGORY: FactCategory = FactCategory::Platform;

    fn is_empty(&self) -> bool {
        self.platform_type.is_none() && self.vendor.is_none() && self.model.is_none()
    }
}

/// 聚合识别结果
/// 仅包含已计算的类别，未请求的类别保持缺失
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browser: Option<BrowserInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os: Option<OsInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<PlatformInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine: Option<EngineInfo>,
}

impl ParsedResult {
    /// 是否尚未计算任何类别
    pub fn is_empty(&self) -> bool {
        self.browser.is_none() && self.os.is_none() && self.platform.is_none() && self.engine.is_none()
    }

    /// 紧凑 JSON 输出
    pub fn to_json(&self) -> UaResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// 美化 JSON 输出
    pub fn to_pretty_json(&self) -> UaResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_are_not_serialized() {
        let result = ParsedResult {
            browser: Some(BrowserInfo::named("Opera").with_version(Some("43.0"))),
            platform: Some(PlatformInfo::of_type("desktop").with_vendor("Apple")),
            ..ParsedResult::default()
        };
        assert_eq!(
            result.to_json().unwrap(),
            r#"{"browser":{"name":"Opera","version":"43.0"},"platform":{"type":"desktop","vendor":"Apple"}}"#
        );
    }

    #[test]
    fn os_version_name_uses_camel_case() {
        let os = OsInfo::named("macOS")
            .with_version(Some("10.14.5"))
            .with_version_name(Some("Mojave"));
        let json = serde_json::to_string(&os).unwrap();
        assert_eq!(json, r#"{"name":"macOS","version":"10.14.5","versionName":"Mojave"}"#);
        let back: OsInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, os);
    }

    #[test]
    fn empty_facts_report_empty() {
        assert!(BrowserInfo::default().is_empty());
        assert!(!BrowserInfo::named("Safari").is_empty());
        assert!(ParsedResult::default().is_empty());
    }

    #[test]
    fn major_version_ignores_tail() {
        assert_eq!(OsInfo::named("Android").with_version(Some("4.4.2")).major_version(), Some(4));
        assert_eq!(OsInfo::named("Android").major_version(), None);
    }

    #[test]
    fn display_falls_back_to_unknown() {
        assert_eq!(BrowserInfo::default().to_string(), "unknown");
        assert_eq!(BrowserInfo::named("Chrome").with_version(Some("56")).to_string(), "Chrome 56");
    }
}
