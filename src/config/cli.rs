use crate::config::toml_config::TomlConfig;
use crate::core::catalog::DEFAULT_CONTEXT_FILE;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "local-guide")]
#[command(about = "Canned city guide for Mumbai: slang, street food, traffic and culture")]
pub struct CliConfig {
    /// Path to the context file (defaults to product.md)
    #[arg(long)]
    pub context: Option<String>,

    /// Path to a TOML configuration file
    #[arg(long)]
    pub config: Option<String>,

    /// Answer a single query instead of running the demo
    #[arg(short, long)]
    pub query: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// `--context` wins over the config file, which wins over the default.
    pub fn resolve_context_file(&self, file_config: Option<&TomlConfig>) -> String {
        self.context
            .clone()
            .or_else(|| file_config.map(|c| c.context_file().to_string()))
            .unwrap_or_else(|| DEFAULT_CONTEXT_FILE.to_string())
    }

    pub fn resolve_verbose(&self, file_config: Option<&TomlConfig>) -> bool {
        self.verbose || file_config.map(TomlConfig::verbose).unwrap_or(false)
    }

    /// Explicit level from the config file. Verbose mode, from either source, overrides it.
    pub fn resolve_log_level<'a>(&self, file_config: Option<&'a TomlConfig>) -> Option<&'a str> {
        if self.resolve_verbose(file_config) {
            return None;
        }
        file_config.and_then(TomlConfig::log_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["local-guide"]);
        assert_eq!(config.resolve_context_file(None), "product.md");
        assert!(!config.resolve_verbose(None));
        assert!(config.query.is_none());
    }

    #[test]
    fn test_context_flag_overrides_file() {
        let file_config =
            TomlConfig::from_toml_str("[guide]\ncontext_file = \"from-file.md\"\n").unwrap();

        let config = CliConfig::parse_from(["local-guide", "--context", "from-flag.md"]);
        assert_eq!(config.resolve_context_file(Some(&file_config)), "from-flag.md");

        let config = CliConfig::parse_from(["local-guide"]);
        assert_eq!(config.resolve_context_file(Some(&file_config)), "from-file.md");
    }

    #[test]
    fn test_verbose_in_file_overrides_file_level() {
        let file_config = TomlConfig::from_toml_str(
            "[guide]\ncontext_file = \"product.md\"\n[logging]\nlevel = \"warn\"\nverbose = true\n",
        )
        .unwrap();

        let config = CliConfig::parse_from(["local-guide"]);
        assert!(config.resolve_verbose(Some(&file_config)));
        assert_eq!(config.resolve_log_level(Some(&file_config)), None);
    }

    #[test]
    fn test_file_level_used_when_not_verbose() {
        let file_config = TomlConfig::from_toml_str(
            "[guide]\ncontext_file = \"product.md\"\n[logging]\nlevel = \"warn\"\n",
        )
        .unwrap();

        let config = CliConfig::parse_from(["local-guide"]);
        assert_eq!(config.resolve_log_level(Some(&file_config)), Some("warn"));

        let config = CliConfig::parse_from(["local-guide", "--verbose"]);
        assert_eq!(config.resolve_log_level(Some(&file_config)), None);
        assert_eq!(config.resolve_log_level(None), None);
    }

    #[test]
    fn test_query_flag() {
        let config = CliConfig::parse_from(["local-guide", "-q", "street food", "-v"]);
        assert_eq!(config.query.as_deref(), Some("street food"));
        assert!(config.verbose);
    }
}
