use crate::utils::error::{GuideError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_one_of, validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub guide: GuideSection,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuideSection {
    pub context_file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub verbose: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(GuideError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| GuideError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CONTEXT_DIR})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| GuideError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn context_file(&self) -> &str {
        &self.guide.context_file
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.verbose)
            .unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_path("guide.context_file", &self.guide.context_file)?;

        if let Some(level) = self.log_level() {
            validate_non_empty_string("logging.level", level)?;
            validate_one_of("logging.level", level, &LOG_LEVELS)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[guide]
context_file = "docs/product.md"

[logging]
level = "debug"
verbose = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.context_file(), "docs/product.md");
        assert_eq!(config.log_level(), Some("debug"));
        assert!(config.verbose());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_logging_section_is_optional() {
        let config = TomlConfig::from_toml_str("[guide]\ncontext_file = \"product.md\"\n").unwrap();
        assert_eq!(config.log_level(), None);
        assert!(!config.verbose());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("LOCAL_GUIDE_TEST_DIR", "/srv/guide");

        let toml_content = r#"
[guide]
context_file = "${LOCAL_GUIDE_TEST_DIR}/product.md"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.context_file(), "/srv/guide/product.md");

        std::env::remove_var("LOCAL_GUIDE_TEST_DIR");
    }

    #[test]
    fn test_unset_env_var_is_left_in_place() {
        let toml_content = r#"
[guide]
context_file = "${LOCAL_GUIDE_SURELY_UNSET_VAR}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.context_file(), "${LOCAL_GUIDE_SURELY_UNSET_VAR}");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[guide]
context_file = ""

[logging]
level = "loud"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());

        let bad_level = TomlConfig::from_toml_str(
            "[guide]\ncontext_file = \"product.md\"\n[logging]\nlevel = \"loud\"\n",
        )
        .unwrap();
        assert!(matches!(
            bad_level.validate(),
            Err(GuideError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_missing_guide_section_fails_to_parse() {
        assert!(matches!(
            TomlConfig::from_toml_str("[logging]\nlevel = \"info\"\n"),
            Err(GuideError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[guide]\ncontext_file = \"file-test.md\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.context_file(), "file-test.md");
    }
}
