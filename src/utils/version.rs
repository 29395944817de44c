//! 版本比较工具模块
//! 点分版本号比较：逐段数值比较，支持宽松模式与预发布标签（`1.0.0-rc.1 < 1.0.0`）

use std::cmp::Ordering;

/// 纯数字段（已去掉前导 0），任意长度均可比较，不受整数位宽限制
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Numeric<'a>(&'a str);

impl<'a> Numeric<'a> {
    const ZERO: Numeric<'static> = Numeric("");

    fn parse(segment: &'a str) -> Option<Self> {
        let segment = segment.trim();
        if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(Self(segment.trim_start_matches('0')))
    }
}

impl Ord for Numeric<'_> {
    // 位数多者更大，位数相同按字典序
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.len().cmp(&other.0.len()).then_with(|| self.0.cmp(other.0))
    }
}

impl PartialOrd for Numeric<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// 拆分后的版本号
/// - `release`: 点分发布段，非纯数字的段记为 None
/// - `pre_release`: 首个 `-` 之后的预发布标签（按 `.` 拆分）
#[derive(Debug, Clone, PartialEq, Eq)]
struct SplitVersion<'a> {
    release: Vec<Option<Numeric<'a>>>,
    pre_release: Option<Vec<&'a str>>,
}

impl<'a> SplitVersion<'a> {
    fn parse(version: &'a str) -> Self {
        let version = version.trim();
        let (release, pre_release) = match version.split_once('-') {
            Some((release, label)) => (release, Some(label.split('.').collect())),
            None => (version, None),
        };

        Self {
            release: release
                .split('.')
                .map(Numeric::parse)
                .collect(),
            pre_release,
        }
    }
}

/// 版本比较工具类
pub struct VersionComparator;

impl VersionComparator {
    /// 比较两个版本号
    ///
    /// # 参数
    /// - `a` / `b`: 点分版本号，例如 `43.0.2442.1165`、`1.0.0-beta.2`
    /// - `loose`: 宽松模式，较短的一方所有段比较完毕即视为相等（`1.10.2.1 ~ 1.10`）
    ///
    /// # 规则
    /// 1. 严格模式下较短的一方以 0 补齐后逐段比较
    /// 2. 任一方该段无法解析为数字时，该段视为相等
    /// 3. 发布段相等时，带预发布标签的一方更小
    /// 4. 双方均有标签时逐段比较：均为数字按数值，数字小于非数字，否则按字典序；段数少者更小
    pub fn compare(a: &str, b: &str, loose: bool) -> Ordering {
        let left = SplitVersion::parse(a);
        let right = SplitVersion::parse(b);

        let release_order = Self::compare_release(&left.release, &right.release, loose);
        if release_order != Ordering::Equal {
            return release_order;
        }

        match (&left.pre_release, &right.pre_release) {
            (None, None) => Ordering::Equal,
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (Some(l), Some(r)) => Self::compare_pre_release(l, r),
        }
    }

    /// 版本精度（点分段数），例如 `10.0` → 2
    pub fn precision(version: &str) -> usize {
        version.split('.').count()
    }

    fn compare_release(left: &[Option<Numeric<'_>>], right: &[Option<Numeric<'_>>], loose: bool) -> Ordering {
        let positions = if loose {
            left.len().min(right.len())
        } else {
            left.len().max(right.len())
        };

        for index in 0..positions {
            let l = left.get(index).copied().unwrap_or(Some(Numeric::ZERO));
            let r = right.get(index).copied().unwrap_or(Some(Numeric::ZERO));
            if let (Some(l), Some(r)) = (l, r) {
                match l.cmp(&r) {
                    Ordering::Equal => continue,
                    other => return other,
                }
            }
        }

        Ordering::Equal
    }

    fn compare_pre_release(left: &[&str], right: &[&str]) -> Ordering {
        for (l, r) in left.iter().zip(right.iter()) {
            let order = match (Numeric::parse(l), Numeric::parse(r)) {
                (Some(l), Some(r)) => l.cmp(&r),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => l.cmp(r),
            };
            if order != Ordering::Equal {
                return order;
            }
        }

        left.len().cmp(&right.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compares_release_segments_numerically() {
        let cases = [
            ("9.0", "10", Ordering::Less),
            ("11", "10", Ordering::Greater),
            ("1.10.2.1", "1.8.2.1.90", Ordering::Greater),
            ("1.010.2.1", "1.08.2.1.90", Ordering::Greater),
            ("1.10.2.1", "1.10.2.1", Ordering::Equal),
            ("1.10.2.1", "1.0800.2", Ordering::Less),
        ];
        for (a, b, expected) in cases {
            assert_eq!(VersionComparator::compare(a, b, false), expected, "{a} vs {b}");
        }
    }

    #[test]
    fn loose_mode_stops_at_shorter_operand() {
        for b in ["1.10.2", "1.10", "1"] {
            assert_eq!(VersionComparator::compare("1.10.2.1", b, true), Ordering::Equal, "1.10.2.1 ~ {b}");
        }
        assert_eq!(VersionComparator::compare("1.10.2.1", "1.11", true), Ordering::Less);
    }

    #[test]
    fn strict_mode_pads_with_zero() {
        assert_eq!(VersionComparator::compare("1.10.2.1", "1.10.2", false), Ordering::Greater);
        assert_eq!(VersionComparator::compare("1.10.2.0", "1.10.2", false), Ordering::Equal);
        assert_eq!(VersionComparator::compare("43", "43.0.2442.1165", false), Ordering::Less);
    }

    #[test]
    fn pre_release_chain_is_ordered() {
        let chain = [
            "1.0.0-alpha",
            "1.0.0-alpha.1",
            "1.0.0-alpha.beta",
            "1.0.0-beta",
            "1.0.0-beta.2",
            "1.0.0-beta.11",
            "1.0.0-rc.1",
            "1.0.0",
        ];
        for pair in chain.windows(2) {
            assert_eq!(VersionComparator::compare(pair[0], pair[1], false), Ordering::Less, "{} < {}", pair[0], pair[1]);
            assert_eq!(VersionComparator::compare(pair[1], pair[0], false), Ordering::Greater, "{} > {}", pair[1], pair[0]);
        }
    }

    #[test]
    fn non_numeric_segments_are_unordered() {
        assert_eq!(VersionComparator::compare("1.x.3", "1.5.3", false), Ordering::Equal);
        assert_eq!(VersionComparator::compare("abc", "10", false), Ordering::Equal);
        assert_eq!(VersionComparator::compare("1.x.4", "1.5.3", false), Ordering::Greater);
    }

    #[test]
    fn oversized_numeric_segments_stay_ordered() {
        assert_eq!(VersionComparator::compare("99999999999999999999999", "1", false), Ordering::Greater);
        assert_eq!(VersionComparator::compare("1.99999999999999999999998", "1.99999999999999999999999", false), Ordering::Less);
        assert_eq!(VersionComparator::compare("1.000000000000000000000012", "1.12", false), Ordering::Equal);
        assert_eq!(VersionComparator::compare("1.0-beta.99999999999999999999999", "1.0-beta.2", false), Ordering::Greater);
    }

    #[test]
    fn precision_counts_segments() {
        assert_eq!(VersionComparator::precision("10.0"), 2);
        assert_eq!(VersionComparator::precision("9"), 1);
        assert_eq!(VersionComparator::precision("43.0.2442.1165"), 4);
    }
}
