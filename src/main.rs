use clap::Parser;
use nsleep::utils::{logger, monitor::SleepMonitor, validation::Validate};
use nsleep::{CliConfig, PlatformSleeper, SleepEngine, SleepError};

fn report_failure(e: &SleepError) -> ! {
    tracing::error!(
        "❌ Sleep failed: {} (Severity: {:?})",
        e,
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

fn main() {
    let config = CliConfig::parse();

    // 驗證配置
    if let Err(e) = config.validate() {
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    // 載入 TOML 配置
    let file = match config.load_file() {
        Ok(file) => file,
        Err(e) => {
            eprintln!("❌ Failed to load config file: {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    // 初始化日誌
    logger::init_cli_logger(config.verbose, file.log_level(), file.log_format());

    if let Err(e) = file.validate() {
        report_failure(&e);
    }
    tracing::debug!("CLI config: {:?}", config);

    let nanoseconds = match config.nanoseconds(&file) {
        Ok(ns) => ns,
        Err(e) => report_failure(&e),
    };

    let settings = config.settings(&file);
    let engine = SleepEngine::with_settings(PlatformSleeper::default(), settings);
    tracing::debug!("Sleep settings: {:?}", engine.settings());
    let monitor = SleepMonitor::new(config.monitoring_enabled(&file));
    if monitor.is_enabled() {
        tracing::info!("🔍 Timing monitor enabled");
    }

    match engine.sleep(nanoseconds) {
        Ok(report) => {
            monitor.log_stats(&report);
            if !report.completed {
                tracing::info!(
                    "Woke early after {} interruption(s) (best effort)",
                    report.interruptions
                );
            }
        }
        Err(e) => report_failure(&e),
    }
}
