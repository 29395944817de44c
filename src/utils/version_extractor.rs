//! 捕获组提取工具模块
//! 负责从正则捕获结果中取出第一/第二个分组，空分组与未匹配统一视为 None

use regex::Regex;

/// 捕获组提取工具类
/// 提供静态方法 `first_match` / `second_match` 供描述符的 describe 使用
pub struct VersionExtractor;

impl VersionExtractor {
    /// 返回第一个捕获分组
    ///
    /// # 返回值
    /// - `Some(&str)`: 第一个分组的非空匹配内容
    /// - `None`: 未匹配 / 分组不存在 / 分组为空
    pub fn first_match<'a>(regex: &Regex, input: &'a str) -> Option<&'a str> {
        Self::nth_match(regex, input, 1)
    }

    /// 返回第二个捕获分组（语义同 `first_match`）
    pub fn second_match<'a>(regex: &Regex, input: &'a str) -> Option<&'a str> {
        Self::nth_match(regex, input, 2)
    }

    /// 返回第一个捕获分组，并把 `_` 与空白统一替换为 `.`（`10_12_4` → `10.12.4`）
    pub fn first_dotted(regex: &Regex, input: &str) -> Option<String> {
        Self::first_match(regex, input).map(|version| {
            version
                .chars()
                .map(|c| if c == '_' || c.is_whitespace() { '.' } else { c })
                .collect()
        })
    }

    fn nth_match<'a>(regex: &Regex, input: &'a str, group_index: usize) -> Option<&'a str> {
        regex
            .captures(input)
            .and_then(|captures| captures.get(group_index))
            .map(|matched| matched.as_str())
            .filter(|matched| !matched.is_empty())
    }
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;
    use regex::RegexBuilder;

    fn ci(pattern: &str) -> Regex {
        RegexBuilder::new(pattern).case_insensitive(true).build().unwrap()
    }

    #[test]
    fn test_first_match_returns_first_group() {
        let regex = ci(r"version/(\S+)");
        assert_eq!(VersionExtractor::first_match(&regex, "Chrome Version/11.11.11"), Some("11.11.11"));
    }

    #[test]
    fn test_second_match_skips_first_group() {
        let regex = ci(r"edg([ea]|ios)/(\d+(\.?_?\d+)+)");
        let ua = "Mozilla/5.0 (Linux; Android 8.0) Chrome/58.0.3029.0 Mobile Safari/537.36 EdgA/41.1.35.1";
        assert_eq!(VersionExtractor::first_match(&regex, ua), Some("A"));
        assert_eq!(VersionExtractor::second_match(&regex, ua), Some("41.1.35.1"));
    }

    #[test]
    fn test_no_match_is_none() {
        let regex = ci(r"firefox/(\d+)");
        assert_eq!(VersionExtractor::first_match(&regex, "Mozilla/5.0 Chrome/56"), None);
    }

    #[test]
    fn test_empty_or_missing_group_is_none() {
        let regex = ci(r"nginx(?:/([\d.]+))?");
        assert_eq!(VersionExtractor::first_match(&regex, "nginx"), None);
        assert_eq!(VersionExtractor::second_match(&regex, "nginx/1.21.6"), None);
    }

    #[test]
    fn test_first_dotted_normalises_separators() {
        let regex = ci(r"mac os x (\d+(\.?_?\d+)+)");
        let ua = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_12_4) AppleWebKit/537.36";
        assert_eq!(VersionExtractor::first_dotted(&regex, ua).as_deref(), Some("10.12.4"));
    }
}
