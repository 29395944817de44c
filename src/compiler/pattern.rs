//! 编译后模式模型
//! 描述符 test 的正则集合形式：任一模式命中即视为匹配（逻辑或，短路）

use regex::Regex;

use super::compiler::PatternCompiler;

/// 有序正则集合
#[derive(Debug, Clone)]
pub struct PatternSet {
    patterns: Vec<Regex>,
}

impl PatternSet {
    /// 从字面量模式列表编译
    pub fn compile(sources: &[&str]) -> Self {
        Self {
            patterns: PatternCompiler::compile_all(sources),
        }
    }

    /// 任一模式命中即返回 true
    #[inline]
    pub fn is_match(&self, input: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(input))
    }

    /// 返回首个命中的模式（用于日志）
    pub fn first_match(&self, input: &str) -> Option<&Regex> {
        self.patterns.iter().find(|re| re.is_match(input))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// 规则描述
    pub fn describe(&self) -> String {
        self.patterns
            .iter()
            .map(Regex::as_str)
            .collect::<Vec<_>>()
            .join(" | ")
    }
}
