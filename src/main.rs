use clap::Parser;
use std::io::Read;
use workshop_solvers::utils::{logger, validation::Validate};
use workshop_solvers::{run_task, CliConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting workshop-solvers CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(3);
    }

    // 讀取輸入
    let input = match &config.input_path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    match run_task(config.task, &input) {
        Ok(output) => {
            tracing::info!("✅ Task completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            tracing::error!(
                "❌ Task failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                workshop_solvers::utils::error::ErrorSeverity::Low => 0,
                workshop_solvers::utils::error::ErrorSeverity::Medium => 2,
                workshop_solvers::utils::error::ErrorSeverity::High => 1,
                workshop_solvers::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
