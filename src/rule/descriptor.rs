//! 描述符与目录模型
//!
//! 描述符由两部分组成：
//! 1. `test`：判断 UA 是否属于该实体，可以是有序正则集合（任一命中即可），
//!    也可以是接收只读上下文的谓词（用于依赖已识别的其他类别，例如平台依赖操作系统）
//! 2. `describe`：从 UA 中提取结构化字段
//!
//! 目录中描述符的顺序是数据契约的一部分：更具体的规则必须排在更通用的规则之前，
//! 识别时按顺序匹配，首个命中即返回。

use std::fmt;
use regex::Regex;

use super::model::{BrowserInfo, Fact, OsInfo};
use crate::compiler::PatternSet;

/// 谓词可读取的只读上下文
///
/// 浏览器与操作系统目录中的谓词只能使用 `test`，
/// 引擎与平台目录的谓词可以读取已识别的浏览器与操作系统
pub trait FactContext {
    /// 原始 UA
    fn user_agent(&self) -> &str;

    /// 已识别（或按需识别）的浏览器
    fn browser(&self) -> &BrowserInfo;

    /// 已识别（或按需识别）的操作系统
    fn os(&self) -> &OsInfo;

    /// 正则是否命中 UA
    fn test(&self, regex: &Regex) -> bool {
        regex.is_match(self.user_agent())
    }
}

/// 谓词形式的 test
pub type Predicate = fn(&dyn FactContext) -> bool;

/// 描述符的 test（二选一）
pub enum DescriptorTest {
    Patterns(PatternSet),
    Predicate(Predicate),
}

impl DescriptorTest {
    /// 执行匹配判断
    #[inline]
    pub fn matches(&self, ua: &str, context: &dyn FactContext) -> bool {
        match self {
            DescriptorTest::Patterns(patterns) => patterns.is_match(ua),
            DescriptorTest::Predicate(predicate) => predicate(context),
        }
    }

    /// 规则描述
    pub fn describe(&self) -> String {
        match self {
            DescriptorTest::Patterns(patterns) => patterns.describe(),
            DescriptorTest::Predicate(_) => "predicate".to_string(),
        }
    }
}

impl fmt::Debug for DescriptorTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DescriptorTest::Patterns(patterns) => f.debug_tuple("Patterns").field(&patterns.describe()).finish(),
            DescriptorTest::Predicate(_) => f.write_str("Predicate"),
        }
    }
}

/// 单个描述符
pub struct Descriptor<F: Fact> {
    // 描述符标签（用于日志与顺序校验）
    pub label: &'static str,
    pub test: DescriptorTest,
    pub describe: fn(&str) -> F,
}

impl<F: Fact> Descriptor<F> {
    /// 正则集合形式的描述符
    pub fn patterns(label: &'static str, patterns: &[&str], describe: fn(&str) -> F) -> Self {
        Self {
            label,
            test: DescriptorTest::Patterns(PatternSet::compile(patterns)),
            describe,
        }
    }

    /// 谓词形式的描述符
    pub fn predicate(label: &'static str, predicate: Predicate, describe: fn(&str) -> F) -> Self {
        Self {
            label,
            test: DescriptorTest::Predicate(predicate),
            describe,
        }
    }
}

impl<F: Fact> fmt::Debug for Descriptor<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Descriptor")
            .field("label", &self.label)
            .field("test", &self.test)
            .finish()
    }
}

/// 有序描述符目录
#[derive(Debug)]
pub struct Catalog<F: Fact> {
    descriptors: Vec<Descriptor<F>>,
}

impl<F: Fact> Catalog<F> {
    pub fn new(descriptors: Vec<Descriptor<F>>) -> Self {
        Self { descriptors }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Descriptor<F>> {
        self.descriptors.iter()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// 标签在目录中的位置（首个同名描述符）
    pub fn position(&self, label: &str) -> Option<usize> {
        self.descriptors.iter().position(|d| d.label == label)
    }

    /// 按顺序返回所有标签
    pub fn labels(&self) -> Vec<&'static str> {
        self.descriptors.iter().map(|d| d.label).collect()
    }

    /// 正则集合形式描述符的模式总数（用于编译统计）
    pub fn pattern_count(&self) -> usize {
        self.descriptors
            .iter()
            .map(|d| match &d.test {
                DescriptorTest::Patterns(patterns) => patterns.len(),
                DescriptorTest::Predicate(_) => 0,
            })
            .sum()
    }
}
