//! 解析器配置管理，存储所有可配置项

/// 解析器配置
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserConfig {
    // 是否推迟识别（true：构造时不计算任何类别，按需计算）
    pub skip_parsing: bool,
    // 是否启用详细日志（识别结果以 debug 级别输出）
    pub verbose: bool,
}

/// 配置管理器
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置（立即识别、非详细日志）
    pub fn get_default() -> ParserConfig {
        ParserConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone, Default)]
pub struct CustomConfigBuilder {
    config: ParserConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    pub fn skip_parsing(mut self, skip_parsing: bool) -> Self {
        self.config.skip_parsing = skip_parsing;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn build(self) -> ParserConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_parses_eagerly() {
        let config = ConfigManager::get_default();
        assert!(!config.skip_parsing);
        assert!(!config.verbose);
    }

    #[test]
    fn builder_overrides_fields() {
        let config = ConfigManager::custom().skip_parsing(true).verbose(true).build();
        assert_eq!(
            config,
            ParserConfig {
                skip_parsing: true,
                verbose: true,
            }
        );
    }
}
