//! 分类引擎：按目录顺序匹配描述符，首个命中即返回
use crate::macros::ua_trace;
use crate::rule::descriptor::{Catalog, DescriptorTest, FactContext};
use crate::rule::model::Fact;
use crate::utils::preview_ua;

/// 分类器
pub struct Classifier;

impl Classifier {
    /// 在目录中识别 UA
    ///
    /// - 正则形式：任一模式命中即成功（短路）
    /// - 谓词形式：以只读上下文调用
    ///
    /// 首个成功的描述符立即返回 `describe(ua)`，无命中时返回空结果
    pub fn classify<F: Fact>(catalog: &Catalog<F>, ua: &str, context: &dyn FactContext) -> F {
        for (position, descriptor) in catalog.iter().enumerate() {
            if !descriptor.test.matches(ua, context) {
                continue;
            }

            let fact = (descriptor.describe)(ua);
            ua_trace!(
                "Descriptor matched: category={} label={} position={} rule={} fact={:?}",
                F::CATEGORY,
                descriptor.label,
                position,
                matched_rule(&descriptor.test, ua),
                fact
            );
            return fact;
        }

        ua_trace!("No descriptor matched: category={} ua={}", F::CATEGORY, preview_ua(ua));
        F::default()
    }
}

// 命中的具体模式（谓词形式返回 "predicate"）
fn matched_rule<'a>(test: &'a DescriptorTest, ua: &str) -> &'a str {
    match test {
        DescriptorTest::Patterns(patterns) => patterns.first_match(ua).map(|re| re.as_str()).unwrap_or_default(),
        DescriptorTest::Predicate(_) => "predicate",
    }
}
