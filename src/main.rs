use clap::Parser;
use release_sample::config::cli::exit_code;
use release_sample::utils::logger;
use release_sample::CliConfig;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match cli.load_sample_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(exit_code(e.severity()));
        }
    };

    if cli.log_json {
        logger::init_json_logger(config.log_level());
    } else {
        logger::init_cli_logger(cli.verbose, config.log_level());
    }
    tracing::debug!("CLI config: {:?}", cli);

    match cli.command.execute(&config) {
        Ok(output) => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&output.json)?);
            } else {
                println!("{}", output.text);
            }
        }
        Err(e) => {
            tracing::error!(
                "Command failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            let code = exit_code(e.severity());
            if code > 0 {
                std::process::exit(code);
            }
        }
    }

    Ok(())
}
