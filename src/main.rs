use clap::Parser;
use openai_key_config::utils::error::ErrorSeverity;
use openai_key_config::utils::{logger, validation::Validate};
use openai_key_config::{CliConfig, CredentialAccessor, KeyConfigError, SettingsReport, API_KEY_VAR};

fn exit_code(e: &KeyConfigError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn fail(e: &KeyConfigError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(exit_code(e));
}

fn run(config: &CliConfig) -> Result<SettingsReport, KeyConfigError> {
    config.validate()?;

    let source = config.build_source()?;
    let origin = source.origin_of(API_KEY_VAR).map(str::to_string);
    let accessor = CredentialAccessor::new(source);

    let mut report = accessor.report()?;
    if let Some(origin) = origin {
        report.source = origin;
    }
    Ok(report)
}

fn main() {
    let config = CliConfig::parse();

    if config.json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Checking {}", API_KEY_VAR);
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let report = match run(&config) {
        Ok(report) => report,
        Err(e) => fail(&e),
    };

    if config.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("❌ Failed to render report: {}", e);
                std::process::exit(3);
            }
        }
    } else {
        println!("✅ {} is set ({})", API_KEY_VAR, report.api_key);
        println!("🤖 Model: {}", report.model);
        println!("📁 Source: {}", report.source);
    }
}
