//! 约束求值：版本范围与嵌套约束树
//!
//! 约束树的键有两类：
//! 1. 浏览器名称 / 别名 → 版本范围字符串（例如 `"opera": ">42"`）
//! 2. 操作系统名称 / 平台类型 → 嵌套约束树（例如 `"macos": { "safari": ">11" }`）
//!
//! 求值优先级：操作系统作用域 → 平台作用域 → 全局浏览器键。
//! 某一作用域无结论（None）时继续下一作用域，全部无结论时返回 None。

use std::cmp::Ordering;
use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::parser::Parser;
use crate::error::{UaDetectError, UaResult};
use crate::macros::ua_trace;
use crate::utils::VersionComparator;

/// 版本范围运算符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeOp {
    Greater,
    GreaterOrEqual,
    Less,
    LessOrEqual,
    Equal,
    // 宽松相等：只比较较短一方的段数
    Tilde,
}

impl RangeOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            RangeOp::Greater => ">",
            RangeOp::GreaterOrEqual => ">=",
            RangeOp::Less => "<",
            RangeOp::LessOrEqual => "<=",
            RangeOp::Equal => "=",
            RangeOp::Tilde => "~",
        }
    }

    /// 比较是否采用宽松模式（`>=`、`<=`、`~`）
    pub fn is_loose(&self) -> bool {
        matches!(self, RangeOp::GreaterOrEqual | RangeOp::LessOrEqual | RangeOp::Tilde)
    }

    /// 比较结果是否满足运算符
    fn accepts(&self, ordering: Ordering) -> bool {
        match self {
            RangeOp::Greater => ordering == Ordering::Greater,
            RangeOp::GreaterOrEqual => ordering != Ordering::Less,
            RangeOp::Less => ordering == Ordering::Less,
            RangeOp::LessOrEqual => ordering != Ordering::Greater,
            RangeOp::Equal | RangeOp::Tilde => ordering == Ordering::Equal,
        }
    }
}

/// 版本范围（运算符 + 点分版本号）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRange {
    pub op: RangeOp,
    pub version: String,
}

impl VersionRange {
    /// 解析范围字符串，无运算符时等同于 `=`
    pub fn parse(range: &str) -> Self {
        let range = range.trim();
        let (op, version) = if let Some(rest) = range.strip_prefix(">=") {
            (RangeOp::GreaterOrEqual, rest)
        } else if let Some(rest) = range.strip_prefix("<=") {
            (RangeOp::LessOrEqual, rest)
        } else if let Some(rest) = range.strip_prefix('>') {
            (RangeOp::Greater, rest)
        } else if let Some(rest) = range.strip_prefix('<') {
            (RangeOp::Less, rest)
        } else if let Some(rest) = range.strip_prefix('=') {
            (RangeOp::Equal, rest)
        } else if let Some(rest) = range.strip_prefix('~') {
            (RangeOp::Tilde, rest)
        } else {
            (RangeOp::Equal, range)
        };

        Self {
            op,
            version: version.trim().to_string(),
        }
    }

    /// 给定版本是否落在范围内
    pub fn matches(&self, version: &str) -> bool {
        let ordering = VersionComparator::compare(version, &self.version, self.op.is_loose());
        self.op.accepts(ordering)
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.op.as_str(), self.version)
    }
}

/// 约束树中的单个值
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirement {
    // 浏览器版本范围
    Range(String),
    // 操作系统 / 平台作用域
    Scoped(RequirementTree),
}

/// 有序约束树（保持插入顺序，同类键先出现者优先）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequirementTree {
    entries: Vec<(String, Requirement)>,
}

impl RequirementTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加浏览器版本范围
    pub fn browser(mut self, name: impl Into<String>, range: impl Into<String>) -> Self {
        self.entries.push((name.into(), Requirement::Range(range.into())));
        self
    }

    /// 添加操作系统 / 平台作用域
    pub fn scope(mut self, key: impl Into<String>, tree: RequirementTree) -> Self {
        self.entries.push((key.into(), Requirement::Scoped(tree)));
        self
    }

    /// 从 JSON 对象加载（并校验每个范围都带有版本号）
    pub fn from_json(json: &str) -> UaResult<Self> {
        let tree: RequirementTree = serde_json::from_str(json)?;
        tree.validate()?;
        Ok(tree)
    }

    /// 校验约束树：范围字符串去掉运算符后不能为空
    pub fn validate(&self) -> UaResult<()> {
        for (key, requirement) in &self.entries {
            match requirement {
                Requirement::Range(range) if VersionRange::parse(range).version.is_empty() => {
                    return Err(UaDetectError::InvalidRequirement(format!(
                        "range for `{}` has no version: {:?}",
                        key, range
                    )));
                }
                Requirement::Range(_) => {}
                Requirement::Scoped(tree) => tree.validate()?,
            }
        }
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Requirement)> {
        self.entries.iter().map(|(key, requirement)| (key.as_str(), requirement))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 浏览器键（值为范围字符串）
    fn ranges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter().filter_map(|(key, requirement)| match requirement {
            Requirement::Range(range) => Some((key, range.as_str())),
            Requirement::Scoped(_) => None,
        })
    }

    /// 作用域键（值为嵌套约束树）
    fn scopes(&self) -> impl Iterator<Item = (&str, &RequirementTree)> {
        self.iter().filter_map(|(key, requirement)| match requirement {
            Requirement::Scoped(tree) => Some((key, tree)),
            Requirement::Range(_) => None,
        })
    }
}

impl Serialize for Requirement {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        match self {
            Requirement::Range(range) => ser.serialize_str(range),
            Requirement::Scoped(tree) => tree.serialize(ser),
        }
    }
}

impl<'de> Deserialize<'de> for Requirement {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_any(RequirementVisitor)
    }
}

impl Serialize for RequirementTree {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        let mut map = ser.serialize_map(Some(self.entries.len()))?;
        for (key, requirement) in &self.entries {
            map.serialize_entry(key, requirement)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for RequirementTree {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_map(TreeVisitor)
    }
}

struct TreeVisitor;

impl<'de> Visitor<'de> for TreeVisitor {
    type Value = RequirementTree;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a map of browser ranges and scoped requirement trees")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, requirement)) = access.next_entry::<String, Requirement>()? {
            entries.push((key, requirement));
        }
        Ok(RequirementTree { entries })
    }
}

struct RequirementVisitor;

impl<'de> Visitor<'de> for RequirementVisitor {
    type Value = Requirement;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a version range string or a nested requirement map")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(Requirement::Range(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(Requirement::Range(v))
    }

    fn visit_map<A: MapAccess<'de>>(self, access: A) -> Result<Self::Value, A::Error> {
        TreeVisitor.visit_map(access).map(Requirement::Scoped)
    }
}

/// 约束求值器
pub struct ConstraintEvaluator;

impl ConstraintEvaluator {
    /// 对解析器的识别结果求值约束树
    ///
    /// - `Some(true)` / `Some(false)`：找到适用的约束并给出结论
    /// - `None`：没有适用的约束，或浏览器版本未知
    pub fn evaluate(parser: &Parser, tree: &RequirementTree) -> Option<bool> {
        if let Some(os_name) = parser.get_os_name(true) {
            let matched = tree.scopes().find(|(key, _)| key.to_lowercase() == os_name);
            if let Some(verdict) = matched.and_then(|(key, scoped)| Self::evaluate_scope(parser, "os", key, scoped)) {
                return Some(verdict);
            }
        }

        if let Some(platform_type) = parser.get_platform_type(true) {
            let matched = tree.scopes().find(|(key, _)| key.to_lowercase() == platform_type);
            if let Some(verdict) =
                matched.and_then(|(key, scoped)| Self::evaluate_scope(parser, "platform", key, scoped))
            {
                return Some(verdict);
            }
        }

        let (key, range) = tree.ranges().find(|(key, _)| parser.is_browser(key, true))?;
        let verdict = parser.compare_version(range);
        ua_trace!("Browser requirement evaluated: key={} range={} verdict={:?}", key, range, verdict);
        verdict
    }

    fn evaluate_scope(parser: &Parser, scope: &str, key: &str, tree: &RequirementTree) -> Option<bool> {
        let verdict = Self::evaluate(parser, tree);
        ua_trace!("Scoped requirement evaluated: scope={} key={} verdict={:?}", scope, key, verdict);
        verdict
    }
}
