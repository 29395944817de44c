use std::fmt::{self, Write};

/// 日志中 UA 的最大预览长度
pub const UA_PREVIEW_LEN: usize = 96;

// ======================== 零堆分配的日志预览 ========================
/// 空白字符折叠 + 截断
/// 遍历到最大长度立即终止，超长时追加省略号
#[inline(always)]
pub fn preview_compact<'a>(s: &'a str, max_len: usize) -> impl fmt::Display + 'a {
    struct CompactView<'a> {
        source: &'a str,
        max_length: usize,
    }

    impl fmt::Display for CompactView<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let mut char_count = 0;
            let mut last_was_whitespace = false;

            for ch in self.source.chars() {
                if char_count >= self.max_length {
                    f.write_str("…")?;
                    break;
                }

                if ch.is_whitespace() {
                    if !last_was_whitespace {
                        f.write_char(' ')?;
                        char_count += 1;
                        last_was_whitespace = true;
                    }
                } else {
                    f.write_char(ch)?;
                    char_count += 1;
                    last_was_whitespace = false;
                }
            }
            Ok(())
        }
    }

    CompactView {
        source: s,
        max_length: max_len,
    }
}

/// UA 日志预览（固定长度）
#[inline]
pub fn preview_ua(ua: &str) -> impl fmt::Display + '_ {
    preview_compact(ua, UA_PREVIEW_LEN)
}
