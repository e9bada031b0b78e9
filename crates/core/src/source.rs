use crate::config::ThemeConfig;
use crate::error::ConfigError;
use std::path::{Path, PathBuf};

/// 主题配置来源
///
/// 使用 trait 而不是具体类型，以便测试时直接传入内存中的配置
pub trait ConfigSource {
    fn load(&self) -> Result<ThemeConfig, ConfigError>;
}

impl ConfigSource for ThemeConfig {
    fn load(&self) -> Result<ThemeConfig, ConfigError> {
        Ok(self.clone())
    }
}

/// 从磁盘上的 JSON 文件读取配置
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigSource for JsonFileSource {
    fn load(&self) -> Result<ThemeConfig, ConfigError> {
        let json = std::fs::read_to_string(&self.path).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })?;
        load_from_json(&json)
    }
}

/// 从 JSON 字符串加载主题配置
///
/// JSON 格式示例：
/// ```json
/// {
///   "colors": { "primary": "#3b82f6" },
///   "typography": { "main": "Inter, sans-serif", "headlines": "Georgia, serif" },
///   "layout": { "container": "1200px", "cols": 12, "breakpoints": { "sm": "640px" } },
///   "spacing": { "baseUnit": "16px", "ratioLineHeight": 1.5 },
///   "transition": { "duration": "0.3s", "type": "ease" },
///   "darkMode": true,
///   "components": ["button"],
///   "utilities": ["spacing", "flex"]
/// }
/// ```
pub fn load_from_json(json_str: &str) -> Result<ThemeConfig, ConfigError> {
    let config: ThemeConfig = serde_json::from_str(json_str)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const CONFIG: &str = r##"{
        "colors": { "primary": "#3b82f6", "danger": "#ef4444", "accent": "#10b981" },
        "typography": { "main": "Inter, sans-serif", "headlines": "Georgia, serif" },
        "layout": { "container": "1200px", "cols": 12, "breakpoints": { "sm": "640px", "lg": "1024px" } },
        "spacing": { "baseUnit": "16px" },
        "darkMode": true,
        "components": ["button", "card"],
        "utilities": ["spacing", "flex"]
    }"##;

    #[test]
    fn test_load_from_json_basic() {
        let config = load_from_json(CONFIG).unwrap();

        let names: Vec<&str> = config.colors.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["primary", "danger", "accent"]);
        assert_eq!(config.layout.cols, 12);
        assert_eq!(config.spacing.base_unit.to_string(), "16px");
        assert!(config.dark_mode);
    }

    #[test]
    fn test_load_defaults() {
        let config = load_from_json(CONFIG).unwrap();

        assert_eq!(config.spacing.ratio_line_height, 1.4);
        assert_eq!(config.transition.duration, "0.3s");
        assert_eq!(config.transition.kind, "ease");
    }

    #[test]
    fn test_load_rejects_bad_color() {
        let json = CONFIG.replace("#ef4444", "red");
        assert!(matches!(load_from_json(&json), Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_load_rejects_bad_length() {
        let json = CONFIG.replace("\"16px\"", "\"wide\"");
        assert!(load_from_json(&json).is_err());
    }

    #[test]
    fn test_load_from_json_invalid() {
        assert!(load_from_json("invalid json").is_err());
    }

    #[test]
    fn test_json_file_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.json");
        std::fs::write(&path, CONFIG).unwrap();

        let config = JsonFileSource::new(&path).load().unwrap();
        assert_eq!(config.components, vec!["button", "card"]);
    }

    #[test]
    fn test_json_file_source_missing() {
        let source = JsonFileSource::new("/definitely/not/here.json");
        match source.load() {
            Err(ConfigError::Io { path, .. }) => assert_eq!(path, source.path()),
            other => panic!("expected Io error, got {:?}", other),
        }
    }
}
