use clap::Parser;
use local_guide::utils::{logger, validation::Validate};
use local_guide::{app::demo, route, CliConfig, LocalGuide, TomlConfig};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 載入 TOML 配置 (可選)
    let file_config = match config.config.as_deref() {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(file_config) => Some(file_config),
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(1);
            }
        },
        None => None,
    };

    // 初始化日誌
    match config.resolve_log_level(file_config.as_ref()) {
        Some(level) => logger::init_cli_logger_with_level(level),
        None => logger::init_cli_logger(config.resolve_verbose(file_config.as_ref())),
    }

    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Some(file_config) = &file_config {
        if let Err(e) = file_config.validate() {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    let context_file = config.resolve_context_file(file_config.as_ref());
    let guide = LocalGuide::new(context_file);
    tracing::debug!(
        "Guide ready for {} with {} bytes of context",
        guide.city(),
        guide.context().as_str().len()
    );

    match config.query.as_deref() {
        Some(query) => println!("{}", route(&guide, query)),
        None => print!("{}", demo::render_demo(&guide)),
    }

    Ok(())
}
