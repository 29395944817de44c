//! 模式编译器核心
//! 负责将字面量模式编译为忽略大小写的正则，并维护动态模式的全局缓存

use std::sync::{Arc, PoisonError, RwLock};
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use rustc_hash::FxHashMap;

use crate::error::UaResult;
use crate::macros::{ua_trace, ua_warn};

/// 永不匹配的正则（编译失败时的回退）
/// 非多行模式下 `^` 只能出现在文本开头，前置字符后永远无法满足
static NEVER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"a^").unwrap());

/// 动态模式缓存
/// Key: 模式字符串
/// Value: 编译后的正则（忽略大小写）
static REGEX_CACHE: Lazy<RwLock<FxHashMap<String, Arc<Regex>>>> =
    Lazy::new(|| RwLock::new(FxHashMap::default()));

/// 模式编译器
pub struct PatternCompiler;

impl PatternCompiler {
    /// 编译单个模式（忽略大小写，模式内可用 `(?-i)` 关闭）
    pub fn compile(pattern: &str) -> UaResult<Regex> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()?;
        Ok(regex)
    }

    /// 编译单个模式，失败时记录告警并回退为永不匹配的正则
    /// 仅用于源码内置的字面量模式，保证识别流程始终为全函数
    pub fn compile_or_never(pattern: &str) -> Regex {
        Self::compile(pattern).unwrap_or_else(|e| {
            ua_warn!("Regex compilation failed: pattern={} error={}", pattern, e);
            NEVER_REGEX.clone()
        })
    }

    /// 批量编译模式列表（保持原有顺序）
    pub fn compile_all(patterns: &[&str]) -> Vec<Regex> {
        patterns.iter().map(|p| Self::compile_or_never(p)).collect()
    }

    /// 获取动态模式的编译结果（读锁查缓存 → 未命中则写锁编译并缓存）
    pub fn cached(pattern: &str) -> UaResult<Arc<Regex>> {
        {
            let cache_read = REGEX_CACHE.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(re) = cache_read.get(pattern) {
                return Ok(re.clone());
            }
        }

        // 编译失败时不写入缓存，直接把错误交给调用方
        let compiled = Arc::new(Self::compile(pattern)?);
        let mut cache_write = REGEX_CACHE.write().unwrap_or_else(PoisonError::into_inner);
        let entry = cache_write
            .entry(pattern.to_string())
            .or_insert(compiled)
            .clone();
        ua_trace!("Pattern cached: pattern={} cache_size={}", pattern, cache_write.len());
        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiled_patterns_ignore_case() {
        let re = PatternCompiler::compile(r"chrome/(\d+)").unwrap();
        assert!(re.is_match("Mozilla/5.0 CHROME/56"));
    }

    #[test]
    fn inline_flag_restores_case_sensitivity() {
        let re = PatternCompiler::compile(r"(?-i)CrOS").unwrap();
        assert!(re.is_match("X11; CrOS x86_64"));
        assert!(!re.is_match("Microsoft Windows"));
    }

    #[test]
    fn invalid_pattern_falls_back_to_never_matching() {
        let re = PatternCompiler::compile_or_never(r"(unclosed");
        assert!(!re.is_match(""));
        assert!(!re.is_match("(unclosed"));
        assert!(!re.is_match("a"));
    }

    #[test]
    fn invalid_dynamic_pattern_is_an_error() {
        assert!(PatternCompiler::cached(r"[z-a]").is_err());
    }

    #[test]
    fn cache_returns_shared_instance() {
        let first = PatternCompiler::cached(r"opr/\d+").unwrap();
        let second = PatternCompiler::cached(r"opr/\d+").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }
}
