use clap::Parser;
use date_bean_encoder::config::toml_config::LogFormat;
use date_bean_encoder::utils::{logger, validation::Validate};
use date_bean_encoder::{run_conversion, CliConfig};

fn main() {
    let config = CliConfig::parse();

    // 先驗證參數，設定檔的日誌格式要讀進來之後才知道
    if let Err(e) = config.validate() {
        eprintln!("❌ {}", e);
        std::process::exit(e.exit_code());
    }

    let options = match config.options() {
        Ok(options) => options,
        Err(e) => {
            eprintln!("❌ Configuration error: {}", e);
            std::process::exit(e.exit_code());
        }
    };

    match options.log_format {
        LogFormat::Json => logger::init_json_logger(config.verbose),
        LogFormat::Compact => logger::init_cli_logger(config.verbose),
    }

    if let Some(path) = &config.config {
        tracing::debug!("Loaded settings from {}", path.display());
    }

    tracing::debug!("CLI config: {:?}", config);
    tracing::debug!("Effective options: {:?}", options);

    let result = config
        .conversion()
        .and_then(|conversion| run_conversion(&options, &conversion));

    match result {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!("Conversion failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(e.exit_code());
        }
    }
}
